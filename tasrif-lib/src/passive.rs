// Passive voice conjugation and the table of verbs that have no passive.

use crate::grid::ConjugationTable;
use crate::rules::conjugation_table;
use crate::types::{Form, Mood, Tense, Verb, Voice};

const PAST_I: &str = "1ُ2ِ3";
const PAST_II: &str = "1ُ2ِّ3";
const PAST_III: &str = "1ُو2ِ3";
const PAST_IV: &str = "ءُ1ْ2ِ3";
const PAST_V: &str = "تُ1ُ2ِّ3";
const PAST_VI: &str = "تُ1ُو2ِ3";
const PAST_VII: &str = "ٱنْ1ُ2ِ3";
const PAST_VIII: &str = "ٱ1ْتُ2ِ3";
const PAST_IX: &str = "ٱ1ْ2ُ3ِ3";
const PAST_X: &str = "ٱسْتُ1ْ2ِ3";
const PAST_QUAD_I: &str = "1ُ2ْ3ِ4";
const PAST_QUAD_II: &str = "تُ1ُ2ْ3ِ4";

const PRESENT_I: &str = "1ْ2َ3";
const PRESENT_II: &str = "1َ2َّ3";
const PRESENT_III: &str = "1َا2َ3";
const PRESENT_IV: &str = "1ْ2َ3";
const PRESENT_V: &str = "تَ1َ2َّ3";
const PRESENT_VI: &str = "تَ1َا2َ3";
const PRESENT_VII: &str = "نْ1َ2َ3";
const PRESENT_VIII: &str = "1ْتَ2َ3";
const PRESENT_IX: &str = "1ْ2َ3َ3";
const PRESENT_X: &str = "سْتَ1ْ2َ3";
const PRESENT_QUAD_I: &str = "1َ2ْ3َ4";
const PRESENT_QUAD_II: &str = "تَ1َ2ْ3َ4";

/// Form I roots used without a passive: intransitive statives and verbs of
/// being or becoming. Spelled as the root's radicals, final ي for defectives.
const NO_PASSIVE_FORM_I: &[&str] = &["كون", "نوم", "موت", "ظلل", "بقي", "وفي", "عسي"];

/// Whether the verb admits a passive conjugation. Forms VII and IX are
/// intrinsically intransitive, as is quadriliteral form II.
pub fn can_conjugate_passive(verb: &Verb) -> bool {
    if verb.is_quadriliteral() {
        return matches!(verb.form(), Form::I(_));
    }
    match verb.form() {
        Form::VII | Form::IX => false,
        Form::I(_) => {
            let radicals: String = verb.radicals().iter().collect();
            !NO_PASSIVE_FORM_I.contains(&radicals.as_str())
        }
        _ => true,
    }
}

fn past_stem(verb: &Verb) -> &'static str {
    match (verb.is_quadriliteral(), verb.form()) {
        (true, Form::I(_)) => PAST_QUAD_I,
        (true, _) => PAST_QUAD_II,
        (false, Form::I(_)) => PAST_I,
        (false, Form::II) => PAST_II,
        (false, Form::III) => PAST_III,
        (false, Form::IV) => PAST_IV,
        (false, Form::V) => PAST_V,
        (false, Form::VI) => PAST_VI,
        (false, Form::VII) => PAST_VII,
        (false, Form::VIII) => PAST_VIII,
        (false, Form::IX) => PAST_IX,
        (false, Form::X) => PAST_X,
    }
}

fn present_stem(verb: &Verb) -> &'static str {
    match (verb.is_quadriliteral(), verb.form()) {
        (true, Form::I(_)) => PRESENT_QUAD_I,
        (true, _) => PRESENT_QUAD_II,
        (false, Form::I(_)) => PRESENT_I,
        (false, Form::II) => PRESENT_II,
        (false, Form::III) => PRESENT_III,
        (false, Form::IV) => PRESENT_IV,
        (false, Form::V) => PRESENT_V,
        (false, Form::VI) => PRESENT_VI,
        (false, Form::VII) => PRESENT_VII,
        (false, Form::VIII) => PRESENT_VIII,
        (false, Form::IX) => PRESENT_IX,
        (false, Form::X) => PRESENT_X,
    }
}

/// Passive past. Callers check [`can_conjugate_passive`] first; an
/// ineligible verb still gets a complete table.
pub fn conjugate_passive_past(verb: &Verb) -> ConjugationTable {
    conjugation_table(verb, past_stem(verb), Tense::Past, Voice::Passive)
}

pub fn conjugate_passive_present(verb: &Verb, mood: Mood) -> ConjugationTable {
    conjugation_table(verb, present_stem(verb), Tense::Present(mood), Voice::Passive)
}
