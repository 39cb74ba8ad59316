// Error types for root validation, verb construction and registry loading.

use thiserror::Error;

/// A root string that cannot be used as a verb skeleton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RootError {
    #[error("a root has 3 or 4 letters, got {0}")]
    Length(usize),
    #[error("'{0}' is not an Arabic consonant")]
    Letter(char),
}

/// A raw record whose form, pattern and root do not fit together.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerbError {
    #[error(transparent)]
    Root(#[from] RootError),
    #[error("form {0} does not exist")]
    UnknownForm(u8),
    #[error("form I verb {0} needs a vowel pattern")]
    MissingPattern(String),
    #[error("quadriliteral verb {0} cannot carry a vowel pattern")]
    UnexpectedPattern(String),
    #[error("quadriliteral root {root} has no form {form}")]
    QuadriliteralForm { root: String, form: u8 },
}

/// Failure to build the verb registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("embedded verb data is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("verb {root} (form {form}): {source}")]
    Verb {
        root: String,
        form: u8,
        #[source]
        source: VerbError,
    },
    #[error("duplicate verb id {0}")]
    DuplicateId(String),
}

/// A textual value that names no known option.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown form '{0}' (expected 1-10 or I-X)")]
    Form(String),
    #[error("unknown vowel pattern '{0}'")]
    Pattern(String),
    #[error("unknown mood '{0}'")]
    Mood(String),
    #[error("unknown voice '{0}'")]
    Voice(String),
    #[error("unknown tense '{0}'")]
    Tense(String),
    #[error("unknown cell '{0}'")]
    Cell(String),
    #[error("unknown diacritics preference '{0}' (expected all, some or none)")]
    Diacritics(String),
}

/// A memo cache that could not be created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not initialize cache: {0}")]
pub struct CacheError(pub String);
