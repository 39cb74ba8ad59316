// How much vocalization to show in rendered forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::letters::{
    is_diacritic, DAMMA, DAMMATAN, FATHA, FATHATAN, KASRA, KASRATAN, SHADDA, SUKUN, SUPERSCRIPT_ALIF,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiacriticsPreference {
    /// Fully vocalized.
    #[default]
    All,
    /// Only the marks a reader cannot guess.
    #[serde(rename = "some")]
    Partial,
    /// Bare consonantal text.
    #[serde(rename = "none")]
    Off,
}

impl DiacriticsPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            DiacriticsPreference::All => "all",
            DiacriticsPreference::Partial => "some",
            DiacriticsPreference::Off => "none",
        }
    }

    fn keeps(self, mark: char) -> bool {
        match self {
            DiacriticsPreference::All => true,
            DiacriticsPreference::Partial => match mark {
                SHADDA | DAMMA | KASRA | FATHATAN | DAMMATAN | KASRATAN => true,
                FATHA | SUKUN | SUPERSCRIPT_ALIF => false,
                _ => true,
            },
            DiacriticsPreference::Off => false,
        }
    }
}

impl FromStr for DiacriticsPreference {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DiacriticsPreference::All),
            "some" | "partial" => Ok(DiacriticsPreference::Partial),
            "none" | "off" => Ok(DiacriticsPreference::Off),
            _ => Err(ParseError::Diacritics(s.to_string())),
        }
    }
}

impl fmt::Display for DiacriticsPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `text` with the marks the preference allows. Letters are never
/// touched, so applying the same preference twice changes nothing.
pub fn apply_diacritics_preference(text: &str, preference: DiacriticsPreference) -> String {
    if preference == DiacriticsPreference::All {
        return text.to_string();
    }
    text.chars()
        .filter(|&c| !is_diacritic(c) || preference.keeps(c))
        .collect()
}
