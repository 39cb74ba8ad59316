use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::active;
use crate::error::{ParseError, VerbError};
use crate::grid::Cell;
use crate::letters::Vowel;
use crate::registry::transliterate_root;
use crate::root::Root;

/// Past/present vowel pair of a form I triliteral verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VowelPattern {
    #[serde(rename = "a/u")]
    AU,
    #[serde(rename = "a/i")]
    AI,
    #[serde(rename = "i/a")]
    IA,
    #[serde(rename = "a/a")]
    AA,
    #[serde(rename = "u/u")]
    UU,
    #[serde(rename = "i/i")]
    II,
}

impl VowelPattern {
    /// Vowel on the second radical in the past tense.
    pub fn past(self) -> Vowel {
        match self {
            VowelPattern::AU | VowelPattern::AI | VowelPattern::AA => Vowel::A,
            VowelPattern::IA | VowelPattern::II => Vowel::I,
            VowelPattern::UU => Vowel::U,
        }
    }

    /// Vowel on the second radical in the present tense.
    pub fn present(self) -> Vowel {
        match self {
            VowelPattern::AU | VowelPattern::UU => Vowel::U,
            VowelPattern::AI | VowelPattern::II => Vowel::I,
            VowelPattern::IA | VowelPattern::AA => Vowel::A,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VowelPattern::AU => "a/u",
            VowelPattern::AI => "a/i",
            VowelPattern::IA => "i/a",
            VowelPattern::AA => "a/a",
            VowelPattern::UU => "u/u",
            VowelPattern::II => "i/i",
        }
    }
}

impl FromStr for VowelPattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "a/u" => Ok(VowelPattern::AU),
            "a/i" => Ok(VowelPattern::AI),
            "i/a" => Ok(VowelPattern::IA),
            "a/a" => Ok(VowelPattern::AA),
            "u/u" => Ok(VowelPattern::UU),
            "i/i" => Ok(VowelPattern::II),
            other => Err(ParseError::Pattern(other.to_string())),
        }
    }
}

impl fmt::Display for VowelPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ten derived forms. Form I of a triliteral root carries its vowel
/// pattern; quadriliteral roots use forms I and II without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    I(Option<VowelPattern>),
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
    X,
}

const ROMAN: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

impl Form {
    pub fn from_number(number: u8, pattern: Option<VowelPattern>) -> Result<Self, VerbError> {
        Ok(match number {
            1 => Form::I(pattern),
            2 => Form::II,
            3 => Form::III,
            4 => Form::IV,
            5 => Form::V,
            6 => Form::VI,
            7 => Form::VII,
            8 => Form::VIII,
            9 => Form::IX,
            10 => Form::X,
            other => return Err(VerbError::UnknownForm(other)),
        })
    }

    pub fn number(self) -> u8 {
        match self {
            Form::I(_) => 1,
            Form::II => 2,
            Form::III => 3,
            Form::IV => 4,
            Form::V => 5,
            Form::VI => 6,
            Form::VII => 7,
            Form::VIII => 8,
            Form::IX => 9,
            Form::X => 10,
        }
    }

    pub fn pattern(self) -> Option<VowelPattern> {
        match self {
            Form::I(pattern) => pattern,
            _ => None,
        }
    }

    pub fn roman(self) -> &'static str {
        ROMAN[usize::from(self.number()) - 1]
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.roman())
    }
}

/// Parse a form number written as 1-10 or I-X.
pub fn parse_form_number(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Ok(n) = s.parse::<u8>() {
        if (1..=10).contains(&n) {
            return Ok(n);
        }
    }
    ROMAN
        .iter()
        .position(|r| r.eq_ignore_ascii_case(s))
        .map(|i| i as u8 + 1)
        .ok_or_else(|| ParseError::Form(s.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Indicative,
    Subjunctive,
    Jussive,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Indicative, Mood::Subjunctive, Mood::Jussive];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Indicative => "indicative",
            Mood::Subjunctive => "subjunctive",
            Mood::Jussive => "jussive",
        }
    }
}

impl FromStr for Mood {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "indicative" | "ind" => Ok(Mood::Indicative),
            "subjunctive" | "sub" => Ok(Mood::Subjunctive),
            "jussive" | "jus" => Ok(Mood::Jussive),
            _ => Err(ParseError::Mood(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Active,
    Passive,
}

impl Voice {
    pub fn as_str(self) -> &'static str {
        match self {
            Voice::Active => "active",
            Voice::Passive => "passive",
        }
    }
}

impl FromStr for Voice {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "act" => Ok(Voice::Active),
            "passive" | "pass" => Ok(Voice::Passive),
            _ => Err(ParseError::Voice(s.to_string())),
        }
    }
}

/// Tense, with the mood folded into the present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    Past,
    Present(Mood),
}

impl Tense {
    pub const ALL: [Tense; 4] = [
        Tense::Past,
        Tense::Present(Mood::Indicative),
        Tense::Present(Mood::Subjunctive),
        Tense::Present(Mood::Jussive),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tense::Past => "past",
            Tense::Present(mood) => mood.as_str(),
        }
    }
}

impl FromStr for Tense {
    type Err = ParseError;

    /// "past", "present" (indicative), or a mood name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "past" | "perfect" => Ok(Tense::Past),
            "present" | "imperfect" => Ok(Tense::Present(Mood::Indicative)),
            other => other
                .parse::<Mood>()
                .map(Tense::Present)
                .map_err(|_| ParseError::Tense(s.to_string())),
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized by name: "past" or the mood of the present.
impl Serialize for Tense {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Named templates for form I verbal nouns. The digits in the names stand for
/// the radicals (fa3l = faʿl).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasdarPattern {
    Fa3l,
    Fa3al,
    Fi3l,
    Fu3l,
    Fu3uul,
    Fi3aal,
    Fa3aal,
    Fu3aal,
    Fi3aala,
    Fa3aala,
    Fa3la,
    Fi3la,
    Fu3la,
    Fi3laan,
    Fu3laan,
    Maf3al,
    Maf3ala,
    Maf3il,
    Fu3uula,
    Fa3iil,
    Fa3laa,
    Fa3ala,
}

/// A registry record as embedded at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawVerb {
    FormI {
        root: String,
        #[serde(default)]
        pattern: Option<VowelPattern>,
        #[serde(default)]
        masdar: Option<Vec<MasdarPattern>>,
        #[serde(default)]
        no_passive_participle: bool,
    },
    Derived {
        root: String,
        form: u8,
        #[serde(default)]
        no_passive_participle: bool,
    },
}

impl RawVerb {
    pub fn root(&self) -> &str {
        match self {
            RawVerb::FormI { root, .. } | RawVerb::Derived { root, .. } => root,
        }
    }

    pub fn form(&self) -> u8 {
        match self {
            RawVerb::FormI { .. } => 1,
            RawVerb::Derived { form, .. } => *form,
        }
    }
}

/// A verb of the registry: a root in one form, with its id and lemma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    root: Root,
    form: Form,
    masdar: Option<Vec<MasdarPattern>>,
    no_passive_participle: bool,
    id: String,
    label: String,
}

impl Verb {
    pub fn new(raw: RawVerb) -> Result<Self, VerbError> {
        let (root, form, masdar, no_passive_participle) = match raw {
            RawVerb::FormI {
                root,
                pattern,
                masdar,
                no_passive_participle,
            } => {
                let root = Root::new(&root)?;
                match (root.is_quadriliteral(), pattern) {
                    (false, None) => return Err(VerbError::MissingPattern(root.to_string())),
                    (true, Some(_)) => return Err(VerbError::UnexpectedPattern(root.to_string())),
                    _ => {}
                }
                (root, Form::I(pattern), masdar, no_passive_participle)
            }
            RawVerb::Derived {
                root,
                form,
                no_passive_participle,
            } => {
                let root = Root::new(&root)?;
                let form = Form::from_number(form, None)?;
                if let Form::I(None) = form {
                    if !root.is_quadriliteral() {
                        return Err(VerbError::MissingPattern(root.to_string()));
                    }
                }
                (root, form, None, no_passive_participle)
            }
        };
        if root.is_quadriliteral() && form.number() > 2 {
            return Err(VerbError::QuadriliteralForm {
                root: root.to_string(),
                form: form.number(),
            });
        }

        let id = format!("{}-{}", transliterate_root(root.as_str()), form.number());
        let mut verb = Self {
            root,
            form,
            masdar,
            no_passive_participle,
            id,
            label: String::new(),
        };
        verb.label = active::conjugate_past(&verb)[Cell::ThirdMasc].to_string();
        Ok(verb)
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn form(&self) -> Form {
        self.form
    }

    pub fn pattern(&self) -> Option<VowelPattern> {
        self.form.pattern()
    }

    /// Attested form I verbal-noun patterns. `Some(&[])` means none is
    /// attested; `None` means the default rules apply.
    pub fn masdar_override(&self) -> Option<&[MasdarPattern]> {
        self.masdar.as_deref()
    }

    pub fn has_passive_participle(&self) -> bool {
        !self.no_passive_participle
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Third person masculine singular active past.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn radicals(&self) -> &[char] {
        self.root.radicals()
    }

    pub(crate) fn is_quadriliteral(&self) -> bool {
        self.root.is_quadriliteral()
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, form {})", self.label, self.root, self.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_i(root: &str, pattern: Option<VowelPattern>) -> RawVerb {
        RawVerb::FormI {
            root: root.to_string(),
            pattern,
            masdar: None,
            no_passive_participle: false,
        }
    }

    #[test]
    fn test_verb_new() {
        let verb = Verb::new(form_i("كتب", Some(VowelPattern::AU))).unwrap();
        assert_eq!(verb.id(), "ktb-1");
        assert_eq!(verb.label(), "كَتَبَ");
        assert_eq!(verb.form(), Form::I(Some(VowelPattern::AU)));
        assert_eq!(verb.pattern().map(VowelPattern::present), Some(Vowel::U));
    }

    #[test]
    fn test_verb_validation() {
        assert_eq!(
            Verb::new(form_i("كتب", None)),
            Err(VerbError::MissingPattern("كتب".to_string()))
        );
        assert_eq!(
            Verb::new(form_i("ترجم", Some(VowelPattern::AU))),
            Err(VerbError::UnexpectedPattern("ترجم".to_string()))
        );
        let quad_x = RawVerb::Derived {
            root: "ترجم".to_string(),
            form: 10,
            no_passive_participle: false,
        };
        assert!(matches!(
            Verb::new(quad_x),
            Err(VerbError::QuadriliteralForm { form: 10, .. })
        ));
        let eleven = RawVerb::Derived {
            root: "كتب".to_string(),
            form: 11,
            no_passive_participle: false,
        };
        assert_eq!(Verb::new(eleven), Err(VerbError::UnknownForm(11)));
        assert!(matches!(
            Verb::new(form_i("كت", Some(VowelPattern::AU))),
            Err(VerbError::Root(_))
        ));
    }

    #[test]
    fn test_raw_verb_json() {
        let json = r#"[
            {"kind":"form_i","root":"عمل","pattern":"i/a","masdar":["fa3al","maf3al"],"no_passive_participle":false},
            {"kind":"derived","root":"عمل","form":10,"no_passive_participle":false}
        ]"#;
        let raw: Vec<RawVerb> = serde_json::from_str(json).unwrap();
        assert_eq!(raw[0].form(), 1);
        assert_eq!(raw[1].form(), 10);
        match &raw[0] {
            RawVerb::FormI { pattern, masdar, .. } => {
                assert_eq!(*pattern, Some(VowelPattern::IA));
                assert_eq!(
                    masdar.as_deref(),
                    Some(&[MasdarPattern::Fa3al, MasdarPattern::Maf3al][..])
                );
            }
            other => panic!("expected form I record, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_form_number("8"), Ok(8));
        assert_eq!(parse_form_number("viii"), Ok(8));
        assert!(parse_form_number("11").is_err());
        assert_eq!("jussive".parse::<Tense>(), Ok(Tense::Present(Mood::Jussive)));
        assert_eq!("present".parse::<Tense>(), Ok(Tense::Present(Mood::Indicative)));
        assert_eq!("Past".parse::<Tense>(), Ok(Tense::Past));
        assert!("future".parse::<Tense>().is_err());
        assert_eq!("passive".parse::<Voice>(), Ok(Voice::Passive));
        assert_eq!("i/a".parse::<VowelPattern>(), Ok(VowelPattern::IA));
        assert_eq!(Form::VIII.to_string(), "VIII");
    }
}
