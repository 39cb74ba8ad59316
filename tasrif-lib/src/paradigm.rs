// Tense/voice dispatch and full paradigms.

use serde::Serialize;

use crate::active::{conjugate_past, conjugate_present};
use crate::grid::ConjugationTable;
use crate::passive::{can_conjugate_passive, conjugate_passive_past, conjugate_passive_present};
use crate::types::{Tense, Verb, Voice};

/// Conjugate `verb` in one tense and voice. The passive is produced even for
/// verbs the gate rejects; check [`can_conjugate_passive`] before showing it.
pub fn conjugate(verb: &Verb, tense: Tense, voice: Voice) -> ConjugationTable {
    match (voice, tense) {
        (Voice::Active, Tense::Past) => conjugate_past(verb),
        (Voice::Active, Tense::Present(mood)) => conjugate_present(verb, mood),
        (Voice::Passive, Tense::Past) => conjugate_passive_past(verb),
        (Voice::Passive, Tense::Present(mood)) => conjugate_passive_present(verb, mood),
    }
}

/// One table of a paradigm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParadigmEntry {
    pub tense: Tense,
    pub voice: Voice,
    pub table: ConjugationTable,
}

/// The voices a verb is conjugated in.
pub fn voices(verb: &Verb) -> &'static [Voice] {
    if can_conjugate_passive(verb) {
        &[Voice::Active, Voice::Passive]
    } else {
        &[Voice::Active]
    }
}

/// Every table the verb supports: the active voice in each tense, then the
/// passive when the verb admits one.
pub fn full_paradigm(verb: &Verb) -> Vec<ParadigmEntry> {
    voices(verb)
        .iter()
        .flat_map(|&voice| {
            Tense::ALL.into_iter().map(move |tense| ParadigmEntry {
                tense,
                voice,
                table: conjugate(verb, tense, voice),
            })
        })
        .collect()
}

impl Verb {
    pub fn conjugate(&self, tense: Tense, voice: Voice) -> ConjugationTable {
        conjugate(self, tense, voice)
    }

    pub fn paradigm(&self) -> Vec<ParadigmEntry> {
        full_paradigm(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::registry::Registry;
    use crate::types::Mood;

    fn registry() -> Registry {
        Registry::load().unwrap()
    }

    #[test]
    fn test_dispatch() {
        let reg = registry();
        let verb = reg.get("ktb-1").unwrap();
        assert_eq!(&conjugate(verb, Tense::Past, Voice::Active)[Cell::ThirdMasc], "كَتَبَ");
        assert_eq!(
            &verb.conjugate(Tense::Present(Mood::Indicative), Voice::Active)[Cell::ThirdMascPlural],
            "يَكْتُبُونَ"
        );
        assert_eq!(&conjugate(verb, Tense::Past, Voice::Passive)[Cell::ThirdMascPlural], "كُتِبُوا");
        assert_eq!(
            &conjugate(verb, Tense::Present(Mood::Indicative), Voice::Passive)[Cell::ThirdMasc],
            "يُكْتَبُ"
        );
    }

    #[test]
    fn test_paradigm_honours_passive_gate() {
        let reg = registry();
        let ktb = reg.get("ktb-1").unwrap();
        let paradigm = ktb.paradigm();
        assert_eq!(paradigm.len(), 8);
        assert_eq!(paradigm[0].tense, Tense::Past);
        assert_eq!(paradigm[4].voice, Voice::Passive);

        let kwn = reg.find("كون", 1).unwrap();
        let paradigm = full_paradigm(kwn);
        assert_eq!(paradigm.len(), 4);
        assert!(paradigm.iter().all(|e| e.voice == Voice::Active));
    }

    #[test]
    fn test_paradigm_serializes_by_name() {
        let reg = registry();
        let entry = &full_paradigm(reg.get("ktb-1").unwrap())[1];
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["tense"], "indicative");
        assert_eq!(json["voice"], "active");
        assert_eq!(json["table"]["3mp"], "يَكْتُبُونَ");
    }
}
