// Letter and diacritic primitives shared by every derivation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Diacritics
// ---------------------------------------------------------------------------

pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SUKUN: char = '\u{0652}';
pub const SHADDA: char = '\u{0651}';
pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';
pub const SUPERSCRIPT_ALIF: char = '\u{0670}';
pub const TATWEEL: char = '\u{0640}';

// ---------------------------------------------------------------------------
// Letters
// ---------------------------------------------------------------------------

pub const HAMZA: char = 'ء';
pub const ALIF: char = 'ا';
pub const ALIF_HAMZA_ABOVE: char = 'أ';
pub const ALIF_HAMZA_BELOW: char = 'إ';
pub const ALIF_MADDA: char = 'آ';
pub const ALIF_WASL: char = 'ٱ';
pub const WAW_HAMZA: char = 'ؤ';
pub const YA_HAMZA: char = 'ئ';
pub const ALIF_MAQSURA: char = 'ى';
pub const TA_MARBUTA: char = 'ة';
pub const WAW: char = 'و';
pub const YA: char = 'ي';
pub const TA: char = 'ت';
pub const DAL: char = 'د';
pub const TAA: char = 'ط';
pub const NUN: char = 'ن';

/// Glides that make a radical weak.
pub const WEAK_LETTERS: &[char] = &[WAW, YA];

/// Every spelling of the glottal stop.
pub const HAMZA_LETTERS: &[char] = &[
    HAMZA,
    ALIF_HAMZA_ABOVE,
    ALIF_HAMZA_BELOW,
    ALIF_MADDA,
    WAW_HAMZA,
    YA_HAMZA,
];

/// Letters allowed in a root.
const CONSONANTS: &str = "ءآأؤإئابتثجحخدذرزسشصضطظعغفقكلمنهوىي";

/// Emphatic first radicals turn the form VIII infix into ط.
pub const EMPHATICS: &[char] = &['ص', 'ض', 'ط', 'ظ'];

/// Dental first radicals turn the form VIII infix into د.
pub const DENTALS: &[char] = &['د', 'ذ', 'ز'];

// ---------------------------------------------------------------------------
// Marks and vowels
// ---------------------------------------------------------------------------

/// The quality of a short or long vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vowel {
    A,
    I,
    U,
}

/// A mark written on a single letter. Shadda combines with these and is
/// tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Fatha,
    Damma,
    Kasra,
    Sukun,
    Fathatan,
    Dammatan,
    Kasratan,
}

impl Mark {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            FATHA => Some(Mark::Fatha),
            DAMMA => Some(Mark::Damma),
            KASRA => Some(Mark::Kasra),
            SUKUN => Some(Mark::Sukun),
            FATHATAN => Some(Mark::Fathatan),
            DAMMATAN => Some(Mark::Dammatan),
            KASRATAN => Some(Mark::Kasratan),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Fatha => FATHA,
            Mark::Damma => DAMMA,
            Mark::Kasra => KASRA,
            Mark::Sukun => SUKUN,
            Mark::Fathatan => FATHATAN,
            Mark::Dammatan => DAMMATAN,
            Mark::Kasratan => KASRATAN,
        }
    }

    /// The vowel of a plain short-vowel mark. Tanween and sukun have none.
    pub fn short_vowel(self) -> Option<Vowel> {
        match self {
            Mark::Fatha => Some(Vowel::A),
            Mark::Damma => Some(Vowel::U),
            Mark::Kasra => Some(Vowel::I),
            _ => None,
        }
    }

    pub fn is_short_vowel(self) -> bool {
        self.short_vowel().is_some()
    }
}

impl From<Vowel> for Mark {
    fn from(v: Vowel) -> Self {
        match v {
            Vowel::A => Mark::Fatha,
            Vowel::I => Mark::Kasra,
            Vowel::U => Mark::Damma,
        }
    }
}

/// The long-vowel letter for a vowel quality (ا ي و).
pub fn long_vowel_from_pattern(v: Vowel) -> char {
    match v {
        Vowel::A => ALIF,
        Vowel::I => YA,
        Vowel::U => WAW,
    }
}

/// The short-vowel mark for a vowel quality.
pub fn short_vowel_from_pattern(v: Vowel) -> char {
    Mark::from(v).to_char()
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

pub fn is_weak_letter(c: char) -> bool {
    WEAK_LETTERS.contains(&c)
}

pub fn is_hamzated_letter(c: char) -> bool {
    HAMZA_LETTERS.contains(&c)
}

/// True for any letter that may appear in a root.
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

/// True for the combining marks removed by [`strip_diacritics`].
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}') || c == SUPERSCRIPT_ALIF
}

/// True for the base letters of the Arabic alphabet.
pub fn is_arabic_letter(c: char) -> bool {
    matches!(c, '\u{0621}'..='\u{063A}' | '\u{0641}'..='\u{064A}') || c == ALIF_WASL
}

// ---------------------------------------------------------------------------
// Hamza seating
// ---------------------------------------------------------------------------

/// What stands before a hamza inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carrier {
    /// The hamza opens the word.
    Start,
    /// A consonant (or wasl alif) with its mark, if any.
    Short { letter: char, mark: Option<Mark> },
    /// An unmarked long vowel letter.
    Long(char),
}

/// Pick the hamza glyph for the given context.
///
/// At the start of a word the hamza sits on alif (below it for kasra). At the
/// end it follows the preceding vowel alone and stands bare after sukun or a
/// long vowel. In the middle, a preceding long ā takes bare hamza unless the
/// hamza carries damma or kasra, a long ū only yields to kasra, and otherwise
/// the stronger of the two surrounding vowels wins (kasra, then damma, then
/// fatha).
pub fn seat_hamza(carrier: Carrier, own: Option<Mark>, word_final: bool) -> char {
    let own_vowel = own.and_then(Mark::short_vowel);
    match carrier {
        Carrier::Start => {
            if own == Some(Mark::Kasra) {
                ALIF_HAMZA_BELOW
            } else {
                ALIF_HAMZA_ABOVE
            }
        }
        Carrier::Long(_) if word_final => HAMZA,
        Carrier::Short { mark, .. } if word_final => {
            match mark.and_then(Mark::short_vowel) {
                Some(Vowel::A) => ALIF_HAMZA_ABOVE,
                Some(Vowel::U) => WAW_HAMZA,
                Some(Vowel::I) => YA_HAMZA,
                None => HAMZA,
            }
        }
        Carrier::Long(ALIF) => match own_vowel {
            Some(Vowel::U) => WAW_HAMZA,
            Some(Vowel::I) => YA_HAMZA,
            _ => HAMZA,
        },
        Carrier::Long(WAW) => {
            if own_vowel == Some(Vowel::I) {
                YA_HAMZA
            } else {
                HAMZA
            }
        }
        Carrier::Long(_) => YA_HAMZA,
        Carrier::Short {
            letter: YA,
            mark: Some(Mark::Sukun),
        } => YA_HAMZA,
        Carrier::Short { mark, .. } => {
            let before = mark.and_then(Mark::short_vowel);
            let has = |v: Vowel| own_vowel == Some(v) || before == Some(v);
            if has(Vowel::I) {
                YA_HAMZA
            } else if has(Vowel::U) {
                WAW_HAMZA
            } else if has(Vowel::A) {
                ALIF_HAMZA_ABOVE
            } else {
                HAMZA
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Text passes
// ---------------------------------------------------------------------------

/// Collapse letter + sukun + the same letter into letter + shadda. A vowel or
/// tanween on the second letter is written before the shadda.
pub fn geminate_double_letters(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if i + 2 < chars.len() && !is_diacritic(c) && chars[i + 1] == SUKUN && chars[i + 2] == c {
            out.push(c);
            i += 3;
            if let Some(&mark) = chars.get(i).filter(|&&m| matches!(m, '\u{064B}'..='\u{0650}')) {
                out.push(mark);
                i += 1;
            }
            out.push(SHADDA);
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}

pub fn strip_diacritics(text: &str) -> String {
    text.chars().filter(|c| !is_diacritic(*c)).collect()
}

/// Fold the alif-seated hamzas and wasl alif into a bare alif.
pub fn normalize_hamza(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ALIF_HAMZA_ABOVE | ALIF_HAMZA_BELOW | ALIF_MADDA | ALIF_WASL => ALIF,
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short(letter: char, mark: Mark) -> Carrier {
        Carrier::Short {
            letter,
            mark: Some(mark),
        }
    }

    #[test]
    fn test_classification() {
        assert!(is_weak_letter('و'));
        assert!(is_weak_letter('ي'));
        assert!(!is_weak_letter('ا'));
        for c in ['ء', 'أ', 'إ', 'آ', 'ؤ', 'ئ'] {
            assert!(is_hamzated_letter(c), "{c} should be hamzated");
        }
        assert!(!is_hamzated_letter('ب'));
        assert!(is_consonant('ى'));
        assert!(!is_consonant('ة'));
        assert!(!is_consonant('a'));
    }

    #[test]
    fn test_seat_hamza_initial() {
        assert_eq!(seat_hamza(Carrier::Start, Some(Mark::Fatha), false), 'أ');
        assert_eq!(seat_hamza(Carrier::Start, Some(Mark::Damma), false), 'أ');
        assert_eq!(seat_hamza(Carrier::Start, Some(Mark::Kasra), false), 'إ');
    }

    #[test]
    fn test_seat_hamza_medial() {
        // سُئِلَ
        assert_eq!(seat_hamza(short('س', Mark::Damma), Some(Mark::Kasra), false), 'ئ');
        // يَأْكُلُ
        assert_eq!(seat_hamza(short('ي', Mark::Fatha), Some(Mark::Sukun), false), 'أ');
        // يُؤْمِنُ
        assert_eq!(seat_hamza(short('ي', Mark::Damma), Some(Mark::Sukun), false), 'ؤ');
        // جَاؤُوا
        assert_eq!(seat_hamza(Carrier::Long('ا'), Some(Mark::Damma), false), 'ؤ');
        assert_eq!(seat_hamza(Carrier::Long('ا'), Some(Mark::Fatha), false), 'ء');
        assert_eq!(seat_hamza(Carrier::Long('و'), Some(Mark::Fatha), false), 'ء');
        assert_eq!(seat_hamza(Carrier::Long('ي'), Some(Mark::Fatha), false), 'ئ');
        assert_eq!(seat_hamza(short('ي', Mark::Sukun), Some(Mark::Fatha), false), 'ئ');
    }

    #[test]
    fn test_seat_hamza_final() {
        assert_eq!(seat_hamza(short('ر', Mark::Fatha), Some(Mark::Fatha), true), 'أ');
        assert_eq!(seat_hamza(short('ط', Mark::Damma), Some(Mark::Damma), true), 'ؤ');
        assert_eq!(seat_hamza(short('ر', Mark::Kasra), Some(Mark::Kasra), true), 'ئ');
        assert_eq!(seat_hamza(short('ر', Mark::Sukun), None, true), 'ء');
        assert_eq!(seat_hamza(Carrier::Long('ا'), Some(Mark::Damma), true), 'ء');
    }

    #[test]
    fn test_geminate_double_letters() {
        assert_eq!(geminate_double_letters("مَدْدَ"), "مَدَّ");
        assert_eq!(geminate_double_letters("كَتَبَ"), "كَتَبَ");
        assert_eq!(geminate_double_letters("مَدَدْتُ"), "مَدَدْتُ");
        assert_eq!(geminate_double_letters(""), "");
        assert_eq!(geminate_double_letters("حَبْبَ"), "\u{062D}\u{064E}\u{0628}\u{064E}\u{0651}");
        assert_eq!(geminate_double_letters("مَدْدٌ"), "مَدٌّ");
        assert_eq!(geminate_double_letters("حَبْب"), "حَبّ");
    }

    #[test]
    fn test_strip_and_normalize() {
        assert_eq!(strip_diacritics("يَقُولُ"), "يقول");
        assert_eq!(strip_diacritics("مَدَّ"), "مد");
        assert_eq!(normalize_hamza("أإآٱ"), "اااا");
        assert_eq!(normalize_hamza("سأل"), "سال");
    }

    #[test]
    fn test_vowel_helpers() {
        assert_eq!(long_vowel_from_pattern(Vowel::A), 'ا');
        assert_eq!(long_vowel_from_pattern(Vowel::I), 'ي');
        assert_eq!(long_vowel_from_pattern(Vowel::U), 'و');
        assert_eq!(short_vowel_from_pattern(Vowel::U), DAMMA);
        assert_eq!(Mark::from_char(KASRATAN), Some(Mark::Kasratan));
        assert_eq!(Mark::Sukun.short_vowel(), None);
    }
}
