use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tasrif_lib::output::{format_table, VerbSummary};
use tasrif_lib::types::parse_form_number;
use tasrif_lib::{
    analyze_root, apply_diacritics_preference, can_conjugate_passive, full_paradigm,
    random_verbs, ClosestVerbs, ConjugationTable, DiacriticsPreference, Registry, Root,
    SearchEngine, SearchOptions, Tense, Verb, Voice,
};

#[derive(Parser)]
#[command(name = "tasrif", about = "Arabic verb conjugation and derivation")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// How much vocalization to print: all, some or none.
    #[arg(long, global = true, default_value = "all")]
    diacritics: DiacriticsPreference,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Conjugate a verb, given by id (ktb-1) or by root and form.
    Conjugate {
        /// Verb id, or a root when --form is given.
        verb: String,

        /// Form number, 1-10 or I-X.
        #[arg(short, long)]
        form: Option<String>,

        /// past, present, indicative, subjunctive or jussive. All tenses if omitted.
        #[arg(short, long)]
        tense: Option<Tense>,

        /// active or passive. Both (as allowed) if omitted.
        #[arg(short, long)]
        voice: Option<Voice>,

        /// Print aligned text tables instead of JSON.
        #[arg(long)]
        table: bool,
    },
    /// Verbal nouns, participles and root analysis of a verb.
    Derive {
        verb: String,
        #[arg(short, long)]
        form: Option<String>,
    },
    /// Search the registry by word, root or prefix.
    Search {
        query: String,

        /// Only match the query as a whole root.
        #[arg(long)]
        exact: bool,
    },
    /// Classify a root.
    Analyze { root: String },
    /// Verbs with roots close to the given one.
    Closest {
        root: String,
        #[arg(short = 'n', long, default_value = "6")]
        count: usize,
    },
    /// A random selection of verbs.
    Random {
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },
    /// Every verb in the registry.
    List,
}

/// One line of a listing.
#[derive(Serialize)]
struct VerbRow {
    id: String,
    root: String,
    form: &'static str,
    label: String,
}

impl VerbRow {
    fn new(verb: &Verb, preference: DiacriticsPreference) -> Self {
        Self {
            id: verb.id().to_string(),
            root: verb.root().to_string(),
            form: verb.form().roman(),
            label: apply_diacritics_preference(verb.label(), preference),
        }
    }
}

#[derive(Serialize)]
struct TableOutput {
    id: String,
    tense: Tense,
    voice: Voice,
    table: ConjugationTable,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = Registry::load().context("failed to load verb registry")?;
    debug!(verbs = registry.len(), "registry ready");

    match &cli.command {
        Command::Conjugate {
            verb,
            form,
            tense,
            voice,
            table,
        } => {
            let verb = resolve(&registry, verb, form.as_deref())?;
            let outputs = tables(verb, *tense, *voice, cli.diacritics)?;
            if *table {
                for output in &outputs {
                    println!("# {} {} {}", output.id, output.tense, output.voice.as_str());
                    println!("{}\n", format_table(&output.table));
                }
            } else {
                print_json(&outputs, cli.pretty)?;
            }
        }
        Command::Derive { verb, form } => {
            let verb = resolve(&registry, verb, form.as_deref())?;
            print_json(&VerbSummary::new(verb).with_preference(cli.diacritics), cli.pretty)?;
        }
        Command::Search { query, exact } => {
            let engine = SearchEngine::new(&registry)?;
            let options = SearchOptions {
                exact_root: *exact,
                ..Default::default()
            };
            let rows: Vec<VerbRow> = engine
                .search(query, options)
                .into_iter()
                .map(|v| VerbRow::new(v, cli.diacritics))
                .collect();
            print_json(&rows, cli.pretty)?;
        }
        Command::Analyze { root } => {
            let root = Root::new(root).with_context(|| format!("invalid root '{root}'"))?;
            print_json(&analyze_root(&root), cli.pretty)?;
        }
        Command::Closest { root, count } => {
            let selector = ClosestVerbs::new()?;
            let rows: Vec<VerbRow> = selector
                .closest(root, registry.verbs(), *count)
                .into_iter()
                .map(|v| VerbRow::new(v, cli.diacritics))
                .collect();
            print_json(&rows, cli.pretty)?;
        }
        Command::Random { count } => {
            let rows: Vec<VerbRow> = random_verbs(registry.verbs(), *count)
                .into_iter()
                .map(|v| VerbRow::new(v, cli.diacritics))
                .collect();
            print_json(&rows, cli.pretty)?;
        }
        Command::List => {
            let rows: Vec<VerbRow> = registry.iter().map(|v| VerbRow::new(v, cli.diacritics)).collect();
            print_json(&rows, cli.pretty)?;
        }
    }
    Ok(())
}

/// Look a verb up by id, or by root and form.
fn resolve<'r>(registry: &'r Registry, verb: &str, form: Option<&str>) -> Result<&'r Verb> {
    match form {
        Some(form) => {
            let number = parse_form_number(form)?;
            registry
                .find(verb, number)
                .ok_or_else(|| anyhow!("no form {number} verb for root '{verb}'"))
        }
        None => registry
            .get(verb)
            .ok_or_else(|| anyhow!("unknown verb '{verb}' (give an id like ktb-1, or a root with --form)")),
    }
}

fn tables(
    verb: &Verb,
    tense: Option<Tense>,
    voice: Option<Voice>,
    preference: DiacriticsPreference,
) -> Result<Vec<TableOutput>> {
    if voice == Some(Voice::Passive) && !can_conjugate_passive(verb) {
        bail!("{} has no passive", verb.id());
    }
    let outputs = full_paradigm(verb)
        .into_iter()
        .filter(|entry| tense.map_or(true, |t| t == entry.tense))
        .filter(|entry| voice.map_or(true, |v| v == entry.voice))
        .map(|entry| TableOutput {
            id: verb.id().to_string(),
            tense: entry.tense,
            voice: entry.voice,
            table: entry.table.map(|form| apply_diacritics_preference(form, preference)),
        })
        .collect();
    Ok(outputs)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!("{}", json.context("JSON serialization failed")?);
    Ok(())
}
