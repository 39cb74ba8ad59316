// Active voice conjugation.

use crate::grid::ConjugationTable;
use crate::letters::{short_vowel_from_pattern, Vowel};
use crate::rules::conjugation_table;
use crate::types::{Form, Mood, Tense, Verb, Voice};

// Stem templates: digits are radicals, ٱ is a wasl alif.
const PAST_II: &str = "1َ2َّ3";
const PAST_III: &str = "1َا2َ3";
const PAST_IV: &str = "ءَ1ْ2َ3";
const PAST_V: &str = "تَ1َ2َّ3";
const PAST_VI: &str = "تَ1َا2َ3";
const PAST_VII: &str = "ٱنْ1َ2َ3";
const PAST_VIII: &str = "ٱ1ْتَ2َ3";
const PAST_IX: &str = "ٱ1ْ2َ3َ3";
const PAST_X: &str = "ٱسْتَ1ْ2َ3";
const PAST_QUAD_I: &str = "1َ2ْ3َ4";
const PAST_QUAD_II: &str = "تَ1َ2ْ3َ4";

const PRESENT_II: &str = "1َ2ِّ3";
const PRESENT_III: &str = "1َا2ِ3";
const PRESENT_IV: &str = "1ْ2ِ3";
const PRESENT_V: &str = "تَ1َ2َّ3";
const PRESENT_VI: &str = "تَ1َا2َ3";
const PRESENT_VII: &str = "نْ1َ2ِ3";
const PRESENT_VIII: &str = "1ْتَ2ِ3";
const PRESENT_IX: &str = "1ْ2َ3ِ3";
const PRESENT_X: &str = "سْتَ1ْ2ِ3";
const PRESENT_QUAD_I: &str = "1َ2ْ3ِ4";
const PRESENT_QUAD_II: &str = "تَ1َ2ْ3َ4";

/// Past stem. Form I takes its second vowel from the verb's pattern.
fn past_stem(verb: &Verb) -> String {
    let template = match (verb.is_quadriliteral(), verb.form()) {
        (true, Form::I(_)) => PAST_QUAD_I,
        (true, _) => PAST_QUAD_II,
        (false, Form::I(pattern)) => {
            let vowel = pattern.map(|p| p.past()).unwrap_or(Vowel::A);
            return format!("1َ2{}3", short_vowel_from_pattern(vowel));
        }
        (false, Form::II) => PAST_II,
        (false, Form::III) => PAST_III,
        (false, Form::IV) => PAST_IV,
        (false, Form::V) => PAST_V,
        (false, Form::VI) => PAST_VI,
        (false, Form::VII) => PAST_VII,
        (false, Form::VIII) => PAST_VIII,
        (false, Form::IX) => PAST_IX,
        (false, Form::X) => PAST_X,
    };
    template.to_string()
}

/// Present stem, without the person prefix.
fn present_stem(verb: &Verb) -> String {
    let template = match (verb.is_quadriliteral(), verb.form()) {
        (true, Form::I(_)) => PRESENT_QUAD_I,
        (true, _) => PRESENT_QUAD_II,
        (false, Form::I(pattern)) => {
            let vowel = pattern.map(|p| p.present()).unwrap_or(Vowel::U);
            return format!("1ْ2{}3", short_vowel_from_pattern(vowel));
        }
        (false, Form::II) => PRESENT_II,
        (false, Form::III) => PRESENT_III,
        (false, Form::IV) => PRESENT_IV,
        (false, Form::V) => PRESENT_V,
        (false, Form::VI) => PRESENT_VI,
        (false, Form::VII) => PRESENT_VII,
        (false, Form::VIII) => PRESENT_VIII,
        (false, Form::IX) => PRESENT_IX,
        (false, Form::X) => PRESENT_X,
    };
    template.to_string()
}

pub fn conjugate_past(verb: &Verb) -> ConjugationTable {
    conjugation_table(verb, &past_stem(verb), Tense::Past, Voice::Active)
}

pub fn conjugate_present(verb: &Verb, mood: Mood) -> ConjugationTable {
    conjugation_table(verb, &present_stem(verb), Tense::Present(mood), Voice::Active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::types::RawVerb;

    fn verb(root: &str, form: u8, pattern: Option<&str>) -> Verb {
        let raw = if form == 1 {
            RawVerb::FormI {
                root: root.to_string(),
                pattern: pattern.map(|p| p.parse().unwrap()),
                masdar: None,
                no_passive_participle: false,
            }
        } else {
            RawVerb::Derived {
                root: root.to_string(),
                form,
                no_passive_participle: false,
            }
        };
        Verb::new(raw).unwrap()
    }

    fn present(verb: &Verb) -> ConjugationTable {
        conjugate_present(verb, Mood::Indicative)
    }

    #[test]
    fn test_strong_past() {
        let t = conjugate_past(&verb("كتب", 1, Some("a/u")));
        assert_eq!(&t[Cell::ThirdMasc], "كَتَبَ");
        assert_eq!(&t[Cell::ThirdFem], "كَتَبَتْ");
        assert_eq!(&t[Cell::FirstSingular], "كَتَبْتُ");
        assert_eq!(&t[Cell::SecondDual], "كَتَبْتُمَا");
        assert_eq!(&t[Cell::ThirdMascPlural], "كَتَبُوا");
        assert_eq!(&t[Cell::ThirdFemPlural], "كَتَبْنَ");
        assert_eq!(&t[Cell::SecondFemPlural], "كَتَبْتُنَّ");
    }

    #[test]
    fn test_strong_present_moods() {
        let v = verb("كتب", 1, Some("a/u"));
        let ind = present(&v);
        assert_eq!(&ind[Cell::ThirdMasc], "يَكْتُبُ");
        assert_eq!(&ind[Cell::FirstSingular], "أَكْتُبُ");
        assert_eq!(&ind[Cell::ThirdMascPlural], "يَكْتُبُونَ");
        assert_eq!(&ind[Cell::SecondDual], "تَكْتُبَانِ");
        let sub = conjugate_present(&v, Mood::Subjunctive);
        assert_eq!(&sub[Cell::ThirdMasc], "يَكْتُبَ");
        assert_eq!(&sub[Cell::ThirdMascPlural], "يَكْتُبُوا");
        let jus = conjugate_present(&v, Mood::Jussive);
        assert_eq!(&jus[Cell::ThirdMasc], "يَكْتُبْ");
        assert_eq!(&jus[Cell::SecondFem], "تَكْتُبِي");
    }

    #[test]
    fn test_hollow() {
        let v = verb("قول", 1, Some("a/u"));
        assert_eq!(&conjugate_past(&v)[Cell::ThirdMasc], "قَالَ");
        assert_eq!(&conjugate_past(&v)[Cell::FirstSingular], "قُلْتُ");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يَقُولُ");
        assert_eq!(&conjugate_present(&v, Mood::Jussive)[Cell::ThirdMasc], "يَقُلْ");

        let v = verb("قوم", 4, None);
        assert_eq!(&conjugate_past(&v)[Cell::ThirdMasc], "أَقَامَ");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يُقِيمُ");

        assert_eq!(verb("خير", 8, None).label(), "اخْتَارَ");
        assert_eq!(&conjugate_past(&verb("خير", 8, None))[Cell::FirstSingular], "اخْتَرْتُ");
        assert_eq!(verb("قود", 7, None).label(), "انْقَادَ");
        assert_eq!(&conjugate_past(&verb("قود", 7, None))[Cell::FirstSingular], "انْقَدْتُ");
    }

    #[test]
    fn test_defective() {
        let v = verb("دعو", 1, Some("a/u"));
        assert_eq!(v.label(), "دَعَا");
        assert_eq!(&conjugate_past(&v)[Cell::ThirdMascPlural], "دَعَوْا");
        assert_eq!(&conjugate_past(&v)[Cell::ThirdFem], "دَعَتْ");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يَدْعُو");
        assert_eq!(&present(&v)[Cell::SecondFem], "تَدْعِينَ");
        assert_eq!(&conjugate_present(&v, Mood::Jussive)[Cell::ThirdMasc], "يَدْعُ");

        let v = verb("رمي", 1, Some("a/i"));
        assert_eq!(v.label(), "رَمَى");
        assert_eq!(&conjugate_past(&v)[Cell::ThirdMascPlural], "رَمَوْا");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يَرْمِي");
        assert_eq!(&present(&v)[Cell::ThirdMascPlural], "يَرْمُونَ");
        assert_eq!(&present(&v)[Cell::ThirdFemPlural], "يَرْمِينَ");

        let v = verb("نسي", 1, Some("i/a"));
        assert_eq!(v.label(), "نَسِيَ");
        assert_eq!(&conjugate_past(&v)[Cell::ThirdMascPlural], "نَسُوا");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يَنْسَى");
        assert_eq!(&present(&v)[Cell::SecondFem], "تَنْسَيْنَ");
        assert_eq!(&present(&v)[Cell::ThirdMascPlural], "يَنْسَوْنَ");
    }

    #[test]
    fn test_derived_defective() {
        let v = verb("عطو", 4, None);
        assert_eq!(v.label(), "أَعْطَى");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يُعْطِي");
        assert_eq!(verb("دعو", 8, None).label(), "ادَّعَى");
        assert_eq!(verb("لقي", 5, None).label(), "تَلَقَّى");
        assert_eq!(verb("ندو", 3, None).label(), "نَادَى");
        assert_eq!(verb("سمو", 2, None).label(), "سَمَّى");
    }

    #[test]
    fn test_geminate() {
        let v = verb("مدد", 1, Some("a/u"));
        assert_eq!(v.label(), "مَدَّ");
        assert_eq!(&conjugate_past(&v)[Cell::FirstSingular], "مَدَدْتُ");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يَمُدُّ");
        assert_eq!(&conjugate_present(&v, Mood::Jussive)[Cell::ThirdMasc], "يَمُدَّ");
        assert_eq!(&present(&v)[Cell::ThirdFemPlural], "يَمْدُدْنَ");

        let v = verb("حبب", 4, None);
        assert_eq!(v.label(), "أَحَبَّ");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يُحِبُّ");

        let v = verb("حمر", 9, None);
        assert_eq!(v.label(), "احْمَرَّ");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يَحْمَرُّ");
    }

    #[test]
    fn test_hamzated() {
        let v = verb("أكل", 1, Some("a/u"));
        assert_eq!(&present(&v)[Cell::FirstSingular], "آكُلُ");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يَأْكُلُ");

        let v = verb("قرأ", 1, Some("a/a"));
        assert_eq!(&conjugate_past(&v)[Cell::ThirdMascDual], "قَرَآ");
        assert_eq!(&conjugate_past(&v)[Cell::ThirdMascPlural], "قَرَؤُوا");
        assert_eq!(&present(&v)[Cell::SecondFem], "تَقْرَئِينَ");

        let v = verb("أمن", 4, None);
        assert_eq!(v.label(), "آمَنَ");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يُؤْمِنُ");
        assert_eq!(&present(&v)[Cell::FirstSingular], "أُومِنُ");

        let v = verb("أتي", 4, None);
        assert_eq!(v.label(), "آتَى");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يُؤْتِي");
    }

    #[test]
    fn test_hollow_hamzated() {
        let v = verb("جيء", 1, Some("a/i"));
        assert_eq!(v.label(), "جَاءَ");
        assert_eq!(&conjugate_past(&v)[Cell::FirstSingular], "جِئْتُ");
        assert_eq!(&conjugate_past(&v)[Cell::ThirdMascPlural], "جَاؤُوا");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يَجِيءُ");
    }

    #[test]
    fn test_ra2a() {
        let v = verb("رأي", 1, Some("a/a"));
        assert_eq!(v.label(), "رَأَى");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يَرَى");
        assert_eq!(&conjugate_present(&v, Mood::Jussive)[Cell::ThirdMasc], "يَرَ");
    }

    #[test]
    fn test_assimilated() {
        assert_eq!(&present(&verb("وعد", 1, Some("a/i")))[Cell::ThirdMasc], "يَعِدُ");
        assert_eq!(&present(&verb("يقن", 4, None))[Cell::ThirdMasc], "يُوقِنُ");
        assert_eq!(verb("وصل", 8, None).label(), "اتَّصَلَ");
    }

    #[test]
    fn test_quadriliteral() {
        let v = verb("ترجم", 1, None);
        assert_eq!(v.label(), "تَرْجَمَ");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يُتَرْجِمُ");
        let v = verb("زلزل", 2, None);
        assert_eq!(v.label(), "تَزَلْزَلَ");
        assert_eq!(&present(&v)[Cell::ThirdMasc], "يَتَزَلْزَلُ");
    }
}
