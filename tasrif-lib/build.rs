// Parses the tab-separated verb registry and embeds it as JSON at compile time.

use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawVerbRecord {
    FormI {
        root: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        masdar: Option<Vec<String>>,
        no_passive_participle: bool,
    },
    Derived {
        root: String,
        form: u8,
        no_passive_participle: bool,
    },
}

const PATTERNS: &[&str] = &["a/u", "a/i", "i/a", "a/a", "u/u", "i/i"];
const FLAGS: &[&str] = &["no-pp"];

fn main() {
    let data_path = Path::new("../data/verbs.tsv");
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let out_path = Path::new(&out_dir).join("verbs.json");

    println!("cargo:rerun-if-changed={}", data_path.display());
    let content = fs::read_to_string(data_path).expect("cannot read data/verbs.tsv");

    let mut records = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        records.push(parse_line(line, number + 1));
    }

    let json = serde_json::to_string(&records).expect("JSON serialization failed");
    fs::write(&out_path, json).expect("cannot write verbs.json");

    println!("cargo:rerun-if-changed=build.rs");
}

/// Turn one registry row into a record. Malformed rows abort the build with
/// the offending line number.
fn parse_line(line: &str, number: usize) -> RawVerbRecord {
    let columns: Vec<&str> = line.split('\t').map(str::trim).collect();
    let column = |i: usize| columns.get(i).copied().filter(|c| !c.is_empty());

    let root = column(0)
        .unwrap_or_else(|| panic!("line {number}: missing root"))
        .to_string();
    let form: u8 = column(1)
        .and_then(|f| f.parse().ok())
        .filter(|f| (1..=10).contains(f))
        .unwrap_or_else(|| panic!("line {number}: form must be a number from 1 to 10"));
    let pattern = column(2).map(|p| {
        assert!(PATTERNS.contains(&p), "line {number}: unknown vowel pattern {p}");
        p.to_string()
    });
    let masdar = column(3).map(|m| {
        if m == "-" {
            Vec::new()
        } else {
            m.split(',').map(|p| p.trim().to_string()).collect()
        }
    });
    let flags: Vec<&str> = column(4)
        .map(|f| f.split(',').map(str::trim).collect())
        .unwrap_or_default();
    for flag in &flags {
        assert!(FLAGS.contains(flag), "line {number}: unknown flag {flag}");
    }
    let no_passive_participle = flags.contains(&"no-pp");

    if form == 1 {
        RawVerbRecord::FormI {
            root,
            pattern,
            masdar,
            no_passive_participle,
        }
    } else {
        assert!(
            pattern.is_none() && masdar.is_none(),
            "line {number}: vowel patterns and masdar overrides belong to form I only"
        );
        RawVerbRecord::Derived {
            root,
            form,
            no_passive_participle,
        }
    }
}
