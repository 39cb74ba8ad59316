// Validated verb roots and their phonological classification.

use std::fmt;

use serde::Serialize;

use crate::error::RootError;
use crate::letters::*;

/// Three or four radicals, checked at construction.
///
/// The written spelling is kept for display and lookup. The engine works on
/// canonical radicals in which every hamza spelling (and a bare alif standing
/// for one) is ء, and ى is ي.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    text: String,
    radicals: Vec<char>,
}

impl Root {
    pub fn new(text: &str) -> Result<Self, RootError> {
        let text = strip_diacritics(text.trim());
        let letters: Vec<char> = text.chars().collect();
        if !(3..=4).contains(&letters.len()) {
            return Err(RootError::Length(letters.len()));
        }
        if let Some(&bad) = letters.iter().find(|c| !is_consonant(**c)) {
            return Err(RootError::Letter(bad));
        }
        let radicals = letters.iter().map(|&c| canonical_radical(c)).collect();
        Ok(Self { text, radicals })
    }

    /// The root as written, without diacritics.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn radicals(&self) -> &[char] {
        &self.radicals
    }

    /// Radical by 1-based position.
    pub fn radical(&self, position: usize) -> Option<char> {
        position.checked_sub(1).and_then(|i| self.radicals.get(i).copied())
    }

    pub fn len(&self) -> usize {
        self.radicals.len()
    }

    pub fn is_quadriliteral(&self) -> bool {
        self.radicals.len() == 4
    }

    fn weak_at(&self, i: usize) -> bool {
        self.radicals.get(i).is_some_and(|c| is_weak_letter(*c))
    }

    fn hamza_at(&self, i: usize) -> bool {
        self.radicals.get(i) == Some(&HAMZA)
    }

    pub fn is_initial_weak(&self) -> bool {
        self.weak_at(0)
    }

    pub fn is_middle_weak(&self) -> bool {
        !self.is_quadriliteral() && self.weak_at(1)
    }

    pub fn is_final_weak(&self) -> bool {
        self.weak_at(self.radicals.len() - 1)
    }

    pub fn is_initial_hamzated(&self) -> bool {
        self.hamza_at(0)
    }

    pub fn is_middle_hamzated(&self) -> bool {
        !self.is_quadriliteral() && self.hamza_at(1)
    }

    pub fn is_final_hamzated(&self) -> bool {
        self.hamza_at(self.radicals.len() - 1)
    }

    /// Last two radicals identical (مدد).
    pub fn is_geminate(&self) -> bool {
        !self.is_quadriliteral() && self.radicals[1] == self.radicals[2]
    }

    /// Weak middle radical that behaves as a long vowel (قول، بيع).
    pub fn is_hollow(&self) -> bool {
        self.is_middle_weak() && !self.weak_at(2) && !self.is_geminate()
    }

    /// Weak final radical (دعو، رمي).
    pub fn is_defective(&self) -> bool {
        !self.is_quadriliteral() && self.weak_at(2)
    }

    /// Weak first radical (وعد، يسر).
    pub fn is_assimilated(&self) -> bool {
        !self.is_quadriliteral() && self.weak_at(0)
    }

    pub fn kind(&self) -> RootKind {
        if self.is_quadriliteral() {
            return RootKind::Quadriliteral;
        }
        let weak = (0..3).filter(|&i| self.weak_at(i)).count();
        if weak >= 2 {
            RootKind::DoublyWeak
        } else if self.is_geminate() {
            RootKind::Geminate
        } else if self.is_assimilated() {
            RootKind::Assimilated
        } else if self.is_hollow() {
            RootKind::Hollow
        } else if self.is_defective() {
            RootKind::Defective
        } else if self.radicals.contains(&HAMZA) {
            RootKind::Hamzated
        } else {
            RootKind::Strong
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn canonical_radical(c: char) -> char {
    match c {
        ALIF | ALIF_HAMZA_ABOVE | ALIF_HAMZA_BELOW | ALIF_MADDA | WAW_HAMZA | YA_HAMZA => HAMZA,
        ALIF_MAQSURA => YA,
        other => other,
    }
}

/// Phonological class of a root, as used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootKind {
    Strong,
    Hamzated,
    Assimilated,
    Hollow,
    Defective,
    Geminate,
    DoublyWeak,
    Quadriliteral,
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RootKind::Strong => "strong",
            RootKind::Hamzated => "hamzated",
            RootKind::Assimilated => "assimilated",
            RootKind::Hollow => "hollow",
            RootKind::Defective => "defective",
            RootKind::Geminate => "geminate",
            RootKind::DoublyWeak => "doubly weak",
            RootKind::Quadriliteral => "quadriliteral",
        };
        f.write_str(name)
    }
}

/// Root classification with 1-based weak and hamza positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootAnalysis {
    pub kind: RootKind,
    pub weak_positions: Vec<usize>,
    pub hamza_positions: Vec<usize>,
}

pub fn analyze_root(root: &Root) -> RootAnalysis {
    let positions = |pred: fn(&Root, usize) -> bool| -> Vec<usize> {
        (0..root.len()).filter(|&i| pred(root, i)).map(|i| i + 1).collect()
    };
    RootAnalysis {
        kind: root.kind(),
        weak_positions: positions(Root::weak_at),
        hamza_positions: positions(Root::hamza_at),
    }
}
