pub mod letters;
pub mod error;
pub mod root;
pub mod types;
pub mod grid;
pub mod active;
pub mod passive;
pub mod nominal;
pub mod paradigm;
pub mod registry;
pub mod distance;
pub mod cache;
pub mod search;
pub mod closest;
pub mod diacritics;
pub mod output;

mod rules;
mod segment;

pub use active::{conjugate_past, conjugate_present};
pub use closest::{closest_verbs, random_verbs, ClosestVerbs};
pub use diacritics::{apply_diacritics_preference, DiacriticsPreference};
pub use error::{ParseError, RegistryError, RootError, VerbError};
pub use grid::{Cell, ConjugationTable};
pub use nominal::{derive_active_participle, derive_masdar, derive_passive_participle};
pub use paradigm::{conjugate, full_paradigm, ParadigmEntry};
pub use passive::{can_conjugate_passive, conjugate_passive_past, conjugate_passive_present};
pub use registry::{transliterate_root, Registry};
pub use root::{analyze_root, Root, RootAnalysis, RootKind};
pub use search::{SearchEngine, SearchOptions};
pub use types::{Form, Mood, RawVerb, Tense, Verb, Voice, VowelPattern};
