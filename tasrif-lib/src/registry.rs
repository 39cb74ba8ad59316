// The static verb registry, loaded once from compile-time embedded data.

use std::collections::HashMap;

use tracing::debug;

use crate::error::RegistryError;
use crate::letters::{normalize_hamza, strip_diacritics};
use crate::types::{RawVerb, Verb};

const EMBEDDED_JSON: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/verbs.json"));

/// Latin spelling of each root letter, used to build verb ids.
const TRANSLITERATION: &[(char, &str)] = &[
    ('ء', "2"),
    ('أ', "2"),
    ('إ', "2"),
    ('آ', "2"),
    ('ؤ', "2"),
    ('ئ', "2"),
    ('ا', "a"),
    ('ب', "b"),
    ('ت', "t"),
    ('ث', "th"),
    ('ج', "j"),
    ('ح', "7"),
    ('خ', "kh"),
    ('د', "d"),
    ('ذ', "dh"),
    ('ر', "r"),
    ('ز', "z"),
    ('س', "s"),
    ('ش', "sh"),
    ('ص', "S"),
    ('ض', "D"),
    ('ط', "T"),
    ('ظ', "Z"),
    ('ع', "3"),
    ('غ', "gh"),
    ('ف', "f"),
    ('ق', "q"),
    ('ك', "k"),
    ('ل', "l"),
    ('م', "m"),
    ('ن', "n"),
    ('ه', "h"),
    ('و', "w"),
    ('ي', "y"),
    ('ى', "y"),
    ('ة', "h"),
];

/// Transliterate a root letter by letter. Letters outside the table are kept.
pub fn transliterate_root(root: &str) -> String {
    strip_diacritics(root)
        .chars()
        .map(|c| {
            TRANSLITERATION
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|(_, latin)| latin.to_string())
                .unwrap_or_else(|| c.to_string())
        })
        .collect()
}

/// Every verb of the registry, indexed by id and by root.
#[derive(Debug)]
pub struct Registry {
    verbs: Vec<Verb>,
    by_id: HashMap<String, usize>,
    /// Root spelling → verb positions. Roots written with an alif-seated
    /// hamza are also indexed under their normalized spelling.
    by_root: HashMap<String, Vec<usize>>,
}

impl Registry {
    /// Load the registry embedded at build time.
    pub fn load() -> Result<Self, RegistryError> {
        let records: Vec<RawVerb> = serde_json::from_slice(EMBEDDED_JSON)?;
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<RawVerb>) -> Result<Self, RegistryError> {
        let mut verbs = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_root: HashMap<String, Vec<usize>> = HashMap::new();

        for raw in records {
            let (root, form) = (raw.root().to_string(), raw.form());
            let verb =
                Verb::new(raw).map_err(|source| RegistryError::Verb { root, form, source })?;
            let index = verbs.len();
            if by_id.insert(verb.id().to_string(), index).is_some() {
                return Err(RegistryError::DuplicateId(verb.id().to_string()));
            }
            let spelling = verb.root().as_str().to_string();
            let normalized = normalize_hamza(&spelling);
            if normalized != spelling {
                by_root.entry(normalized).or_default().push(index);
            }
            by_root.entry(spelling).or_default().push(index);
            verbs.push(verb);
        }

        debug!(verbs = verbs.len(), roots = by_root.len(), "verb registry loaded");
        Ok(Self {
            verbs,
            by_id,
            by_root,
        })
    }

    pub fn get(&self, id: &str) -> Option<&Verb> {
        self.by_id.get(id).map(|&i| &self.verbs[i])
    }

    /// All forms of a root, in registry order. Either hamza spelling works.
    pub fn verbs_for_root(&self, root: &str) -> Vec<&Verb> {
        self.by_root
            .get(strip_diacritics(root.trim()).as_str())
            .map(|indices| indices.iter().map(|&i| &self.verbs[i]).collect())
            .unwrap_or_default()
    }

    /// The verb of `root` in the given form number.
    pub fn find(&self, root: &str, form: u8) -> Option<&Verb> {
        self.verbs_for_root(root)
            .into_iter()
            .find(|v| v.form().number() == form)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Verb> {
        self.verbs.iter()
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VerbError;

    fn registry() -> Registry {
        Registry::load().unwrap()
    }

    #[test]
    fn test_registry_loads() {
        let reg = registry();
        assert!(reg.len() > 100, "registry too small");
        assert!(!reg.is_empty());
    }

    #[test]
    fn test_transliterate_root() {
        assert_eq!(transliterate_root("كتب"), "ktb");
        assert_eq!(transliterate_root("عمل"), "3ml");
        assert_eq!(transliterate_root("ضرب"), "Drb");
        assert_eq!(transliterate_root("سأل"), "s2l");
        assert_eq!(transliterate_root("خوف"), "khwf");
    }

    #[test]
    fn test_get_by_id() {
        let reg = registry();
        let verb = reg.get("ktb-1").unwrap();
        assert_eq!(verb.root().as_str(), "كتب");
        assert_eq!(verb.label(), "كَتَبَ");
        assert_eq!(reg.get("3ml-10").map(|v| v.label()), Some("اسْتَعْمَلَ"));
        assert!(reg.get("zzz-1").is_none());
    }

    #[test]
    fn test_ids_round_trip() {
        let reg = registry();
        for verb in reg.iter() {
            assert_eq!(reg.get(verb.id()).map(Verb::id), Some(verb.id()));
        }
    }

    #[test]
    fn test_hamza_alias() {
        let reg = registry();
        let written = reg.verbs_for_root("أمن");
        let normalized = reg.verbs_for_root("امن");
        assert_eq!(written.len(), 3);
        assert_eq!(written, normalized);
        assert!(reg.verbs_for_root("ءمن").is_empty());
    }

    #[test]
    fn test_find() {
        let reg = registry();
        assert_eq!(reg.find("قوم", 10).map(Verb::id), Some("qwm-10"));
        assert!(reg.find("قوم", 9).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let raw = RawVerb::Derived {
            root: "كتب".to_string(),
            form: 3,
            no_passive_participle: false,
        };
        let err = Registry::from_records(vec![raw.clone(), raw]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == "ktb-3"));
    }

    #[test]
    fn test_bad_record_rejected() {
        let raw = RawVerb::FormI {
            root: "كتب".to_string(),
            pattern: None,
            masdar: None,
            no_passive_participle: false,
        };
        let err = Registry::from_records(vec![raw]).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Verb {
                source: VerbError::MissingPattern(_),
                ..
            }
        ));
    }
}
