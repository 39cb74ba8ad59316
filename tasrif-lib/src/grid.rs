// Person/number/gender grid: the thirteen cells, their affixes per tense and
// mood, and the table type that holds one surface form per cell.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ParseError;
use crate::letters::*;
use crate::types::Mood;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {
    FirstSingular,
    SecondMasc,
    SecondFem,
    ThirdMasc,
    ThirdFem,
    SecondDual,
    ThirdMascDual,
    ThirdFemDual,
    FirstPlural,
    SecondMascPlural,
    SecondFemPlural,
    ThirdMascPlural,
    ThirdFemPlural,
}

impl Cell {
    /// Every cell, in display order.
    pub const ALL: [Cell; 13] = [
        Cell::FirstSingular,
        Cell::SecondMasc,
        Cell::SecondFem,
        Cell::ThirdMasc,
        Cell::ThirdFem,
        Cell::SecondDual,
        Cell::ThirdMascDual,
        Cell::ThirdFemDual,
        Cell::FirstPlural,
        Cell::SecondMascPlural,
        Cell::SecondFemPlural,
        Cell::ThirdMascPlural,
        Cell::ThirdFemPlural,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Cell::FirstSingular => "1s",
            Cell::SecondMasc => "2ms",
            Cell::SecondFem => "2fs",
            Cell::ThirdMasc => "3ms",
            Cell::ThirdFem => "3fs",
            Cell::SecondDual => "2d",
            Cell::ThirdMascDual => "3md",
            Cell::ThirdFemDual => "3fd",
            Cell::FirstPlural => "1p",
            Cell::SecondMascPlural => "2mp",
            Cell::SecondFemPlural => "2fp",
            Cell::ThirdMascPlural => "3mp",
            Cell::ThirdFemPlural => "3fp",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn shape(self) -> CellShape {
        match self {
            Cell::SecondFem => CellShape::SecondFem,
            Cell::SecondDual | Cell::ThirdMascDual | Cell::ThirdFemDual => CellShape::Dual,
            Cell::SecondMascPlural | Cell::ThirdMascPlural => CellShape::MascPlural,
            Cell::SecondFemPlural | Cell::ThirdFemPlural => CellShape::FemPlural,
            _ => CellShape::Bare,
        }
    }

    /// Person prefix of the present tense. The first person singular uses a
    /// plain hamza that is seated later.
    pub fn present_prefix(self) -> char {
        match self {
            Cell::FirstSingular => HAMZA,
            Cell::FirstPlural => NUN,
            Cell::ThirdMasc
            | Cell::ThirdMascDual
            | Cell::ThirdMascPlural
            | Cell::ThirdFemPlural => YA,
            _ => TA,
        }
    }

    /// Suffix of the past tense.
    pub fn past_suffix(self) -> Affix {
        let (mark, tail) = match self {
            Cell::ThirdMasc => (Mark::Fatha, ""),
            Cell::ThirdFem => (Mark::Fatha, "تْ"),
            Cell::ThirdMascDual => (Mark::Fatha, "ا"),
            Cell::ThirdFemDual => (Mark::Fatha, "تَا"),
            Cell::ThirdMascPlural => (Mark::Damma, "وا"),
            Cell::ThirdFemPlural => (Mark::Sukun, "نَ"),
            Cell::SecondMasc => (Mark::Sukun, "تَ"),
            Cell::SecondFem => (Mark::Sukun, "تِ"),
            Cell::SecondDual => (Mark::Sukun, "تُمَا"),
            Cell::SecondMascPlural => (Mark::Sukun, "تُمْ"),
            Cell::SecondFemPlural => (Mark::Sukun, "تُنَّ"),
            Cell::FirstSingular => (Mark::Sukun, "تُ"),
            Cell::FirstPlural => (Mark::Sukun, "نَا"),
        };
        Affix { mark, tail }
    }

    /// Ending of the present tense in the given mood.
    pub fn present_ending(self, mood: Mood) -> Affix {
        let (mark, tail) = match (self.shape(), mood) {
            (CellShape::Bare, Mood::Indicative) => (Mark::Damma, ""),
            (CellShape::Bare, Mood::Subjunctive) => (Mark::Fatha, ""),
            (CellShape::Bare, Mood::Jussive) => (Mark::Sukun, ""),
            (CellShape::SecondFem, Mood::Indicative) => (Mark::Kasra, "ينَ"),
            (CellShape::SecondFem, _) => (Mark::Kasra, "ي"),
            (CellShape::Dual, Mood::Indicative) => (Mark::Fatha, "انِ"),
            (CellShape::Dual, _) => (Mark::Fatha, "ا"),
            (CellShape::MascPlural, Mood::Indicative) => (Mark::Damma, "ونَ"),
            (CellShape::MascPlural, _) => (Mark::Damma, "وا"),
            (CellShape::FemPlural, _) => (Mark::Sukun, "نَ"),
        };
        Affix { mark, tail }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cell::ALL
            .into_iter()
            .find(|c| c.code() == s.trim())
            .ok_or_else(|| ParseError::Cell(s.to_string()))
    }
}

/// How a present-tense cell ends, which decides its mood endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellShape {
    /// No suffix; the mood shows on the last radical.
    Bare,
    /// -īna / -ī
    SecondFem,
    /// -āni / -ā
    Dual,
    /// -ūna / -ū
    MascPlural,
    /// -na in every mood
    FemPlural,
}

/// A suffix: the mark it puts on the last radical and the letters after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affix {
    pub mark: Mark,
    pub tail: &'static str,
}

// ---------------------------------------------------------------------------
// Defective truncation
// ---------------------------------------------------------------------------

/// What happens to a weak final radical given its mark and what follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Truncation {
    Keep,
    Drop,
    /// Drop the radical; the glide of the suffix closes a diphthong (رَمَوْا).
    DropDiphthong,
    /// Drop the radical; the preceding letter takes this vowel (نَسُوا).
    DropShift(Mark),
    /// Word-final ا or ى after fatha (دَعَا، رَمَى).
    Alif,
    /// Word-final long vowel; the mark is lost (يَدْعُو).
    Bare,
}

/// Look up the truncation for a weak final radical carrying `mark`, preceded
/// by a letter carrying `before` and followed by `next` (None at word end).
pub(crate) fn defective_truncation(mark: Option<Mark>, before: Option<Mark>, next: Option<char>) -> Truncation {
    let after_fatha = before == Some(Mark::Fatha);
    match (mark, next) {
        (Some(Mark::Sukun), None) => Truncation::Drop,
        (Some(Mark::Fatha), None) if after_fatha => Truncation::Alif,
        (Some(Mark::Fatha), Some(TA)) if after_fatha => Truncation::Drop,
        (Some(Mark::Damma), None) if after_fatha => Truncation::Alif,
        (Some(Mark::Damma), None) => Truncation::Bare,
        (Some(Mark::Damma), Some(WAW)) if after_fatha => Truncation::DropDiphthong,
        (Some(Mark::Damma), Some(WAW)) => Truncation::DropShift(Mark::Damma),
        (Some(Mark::Kasra), _) if after_fatha => Truncation::DropDiphthong,
        (Some(Mark::Kasra), _) => Truncation::DropShift(Mark::Kasra),
        _ => Truncation::Keep,
    }
}

// ---------------------------------------------------------------------------
// Conjugation table
// ---------------------------------------------------------------------------

/// One surface form for each of the thirteen cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationTable {
    forms: [String; 13],
}

impl ConjugationTable {
    pub fn from_fn(mut f: impl FnMut(Cell) -> String) -> Self {
        Self {
            forms: Cell::ALL.map(&mut f),
        }
    }

    pub fn get(&self, cell: Cell) -> &str {
        &self.forms[cell.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, &str)> {
        Cell::ALL.into_iter().zip(self.forms.iter().map(String::as_str))
    }

    /// Always thirteen.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Apply a text transformation to every cell.
    pub fn map(&self, f: impl Fn(&str) -> String) -> Self {
        Self::from_fn(|cell| f(self.get(cell)))
    }
}

impl Index<Cell> for ConjugationTable {
    type Output = str;

    fn index(&self, cell: Cell) -> &str {
        self.get(cell)
    }
}

impl Serialize for ConjugationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (cell, form) in self.iter() {
            map.serialize_entry(cell.code(), form)?;
        }
        map.end()
    }
}
