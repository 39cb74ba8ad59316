// Shared inflection passes.
//
// Every cell is produced the same way: expand the stem template, attach the
// person affixes, then run the root-class passes in a fixed order (form VIII
// infix, assimilated loss, weak final radical, hollow middle radical,
// gemination) before orthographic finalization. The nominal deriver reuses
// the same passes with `Stage::Nominal`.

use crate::grid::{defective_truncation, Cell, CellShape, ConjugationTable, Truncation};
use crate::letters::*;
use crate::segment::{Segment, Word};
use crate::types::{Form, Mood, Tense, Verb, Voice, VowelPattern};

/// Which kind of word a pass is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Past,
    Present,
    Nominal,
}

impl From<Tense> for Stage {
    fn from(tense: Tense) -> Self {
        match tense {
            Tense::Past => Stage::Past,
            Tense::Present(_) => Stage::Present,
        }
    }
}

/// Conjugate every cell of `stem` for one tense and voice.
pub(crate) fn conjugation_table(verb: &Verb, stem: &str, tense: Tense, voice: Voice) -> ConjugationTable {
    ConjugationTable::from_fn(|cell| inflect(verb, stem, tense, voice, cell))
}

/// Build and finalize one cell.
fn inflect(verb: &Verb, stem: &str, tense: Tense, voice: Voice, cell: Cell) -> String {
    let stage = Stage::from(tense);
    let mut word = Word::from_template(stem, verb.radicals(), wasl_vowel(voice));

    let affix = match tense {
        Tense::Past => cell.past_suffix(),
        Tense::Present(mood) => cell.present_ending(mood),
    };
    if let Some(last) = last_radical(&word).and_then(|i| word.get_mut(i)) {
        last.mark = Some(affix.mark);
    }
    word.append(Word::affix(affix.tail));
    if stage == Stage::Present {
        word.prepend(Segment::with_mark(cell.present_prefix(), prefix_vowel(verb, voice)));
    }

    form_viii_infix(verb, &mut word);
    drop_assimilated(verb, &mut word, stage, voice);
    if tense == Tense::Present(Mood::Jussive) && cell.shape() == CellShape::Bare {
        open_jussive_geminate(verb, &mut word);
    }
    weak_final(verb, &mut word, stage, voice);
    hollow(verb, &mut word, stage, voice);
    fuse_geminate(verb, &mut word, false);
    contract_ra2a(verb, &mut word, stage);
    word.finalize()
}

fn wasl_vowel(voice: Voice) -> Mark {
    match voice {
        Voice::Active => Mark::Kasra,
        Voice::Passive => Mark::Damma,
    }
}

/// Damma after the person prefix for the passive and for forms whose past
/// has four consonants (II, III, IV and quadriliteral I); fatha otherwise.
fn prefix_vowel(verb: &Verb, voice: Voice) -> Mark {
    if voice == Voice::Passive {
        return Mark::Damma;
    }
    let four_consonants = if verb.is_quadriliteral() {
        matches!(verb.form(), Form::I(_))
    } else {
        matches!(verb.form(), Form::II | Form::III | Form::IV)
    };
    if four_consonants {
        Mark::Damma
    } else {
        Mark::Fatha
    }
}

fn last_radical(word: &Word) -> Option<usize> {
    word.segments().iter().rposition(|s| s.radical.is_some())
}

fn form_i_pattern(verb: &Verb) -> Option<VowelPattern> {
    match verb.form() {
        Form::I(pattern) => pattern,
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

/// Form VIII: the infixed ت becomes ط after emphatics and د after dentals; a
/// weak first radical (and the ء of أخذ) assimilates to the ت instead.
pub(crate) fn form_viii_infix(verb: &Verb, word: &mut Word) {
    if verb.form() != Form::VIII {
        return;
    }
    let Some(i1) = word.radical(1) else {
        return;
    };
    let radicals = verb.radicals();
    let c1 = radicals[0];
    if EMPHATICS.contains(&c1) {
        if let Some(infix) = word.get_mut(i1 + 1) {
            infix.letter = TAA;
        }
    } else if DENTALS.contains(&c1) {
        if let Some(infix) = word.get_mut(i1 + 1) {
            infix.letter = DAL;
        }
    } else if is_weak_letter(c1) || radicals == ['ء', 'خ', 'ذ'] {
        if let Some(first) = word.get_mut(i1) {
            first.letter = TA;
        }
    }
}

/// Form I presents with i (and a/a verbs) lose an initial و: يَعِدُ، يَضَعُ.
fn drop_assimilated(verb: &Verb, word: &mut Word, stage: Stage, voice: Voice) {
    if stage != Stage::Present || voice != Voice::Active || verb.radicals()[0] != WAW {
        return;
    }
    let drops = match form_i_pattern(verb) {
        Some(p) => p.present() == Vowel::I || p == VowelPattern::AA,
        None => false,
    };
    if drops {
        if let Some(i1) = word.radical(1) {
            word.remove(i1);
        }
    }
}

/// Unsuffixed jussives of doubled roots end in fatha so the pair can fuse:
/// يَمُدَّ rather than يَمْدُدْ.
fn open_jussive_geminate(verb: &Verb, word: &mut Word) {
    let doubled = verb.root().is_geminate() || verb.form() == Form::IX;
    if !doubled || matches!(verb.form(), Form::II | Form::V) {
        return;
    }
    if let Some(c3) = word.radical(3).and_then(|i| word.get_mut(i)) {
        c3.mark = Some(Mark::Fatha);
    }
}

/// Weak final radical. The radical surfaces as و only in form I active
/// stems voweled with a (past) or u (present); everywhere else it is ي. Its
/// fate is then read from the truncation table.
fn weak_final(verb: &Verb, word: &mut Word, stage: Stage, voice: Voice) {
    if !verb.root().is_defective() {
        return;
    }
    let Some(i3) = word.radical(3) else {
        return;
    };
    let keeps_waw = voice == Voice::Active
        && match (form_i_pattern(verb), stage) {
            (Some(p), Stage::Past) => p.past() == Vowel::A,
            (Some(p), Stage::Present) => p.present() == Vowel::U,
            _ => false,
        };
    if !keeps_waw {
        if let Some(c3) = word.get_mut(i3) {
            c3.letter = YA;
        }
    }

    let before = i3.checked_sub(1).and_then(|i| word.get(i));
    let c2_letter = before.map(|s| s.letter);
    let c2_mark = before.and_then(|s| s.mark);
    let mark = word.get(i3).and_then(|s| s.mark);
    let next = word.get(i3 + 1).map(|s| s.letter);

    match defective_truncation(mark, c2_mark, next) {
        Truncation::Keep => {}
        Truncation::Drop => {
            word.remove(i3);
        }
        Truncation::DropDiphthong => {
            word.remove(i3);
            if let Some(glide) = word.get_mut(i3) {
                glide.mark = Some(Mark::Sukun);
            }
        }
        Truncation::DropShift(vowel) => {
            word.remove(i3);
            if let Some(c2) = i3.checked_sub(1).and_then(|i| word.get_mut(i)) {
                c2.mark = Some(vowel);
            }
        }
        Truncation::Alif => {
            if let Some(c3) = word.get_mut(i3) {
                c3.letter = if c3.letter == WAW || c2_letter == Some(YA) {
                    ALIF
                } else {
                    ALIF_MAQSURA
                };
                c3.mark = None;
            }
        }
        Truncation::Bare => {
            if let Some(c3) = word.get_mut(i3) {
                c3.mark = None;
            }
        }
    }
}

/// Hollow middle radical (forms I, IV, VII, VIII and X). In an open syllable
/// it becomes a long vowel and hands its vowel to the preceding consonant; in
/// a closed one it disappears.
pub(crate) fn hollow(verb: &Verb, word: &mut Word, stage: Stage, voice: Voice) {
    if !verb.root().is_hollow()
        || !matches!(verb.form(), Form::I(_) | Form::IV | Form::VII | Form::VIII | Form::X)
    {
        return;
    }
    let (Some(i2), Some(i3)) = (word.radical(2), word.radical(3)) else {
        return;
    };
    let Some(p) = i2.checked_sub(1) else {
        return;
    };
    let Some(vowel) = word.get(i2).and_then(Segment::short_vowel) else {
        return;
    };
    let before = word.get(p).and_then(|s| s.mark);
    let closed = stage != Stage::Nominal && word.get(i3).is_some_and(|s| s.has_mark(Mark::Sukun));

    if !closed {
        let (p_mark, long) = match before {
            Some(Mark::Sukun) => (Mark::from(vowel), long_vowel_from_pattern(vowel)),
            Some(Mark::Damma) if vowel == Vowel::I => (Mark::Kasra, YA),
            _ => (Mark::Fatha, ALIF),
        };
        if let Some(seg) = word.get_mut(p) {
            seg.mark = Some(p_mark);
        }
        if let Some(c2) = word.get_mut(i2) {
            c2.letter = long;
            c2.mark = None;
        }
        return;
    }

    let p_mark = if before == Some(Mark::Sukun) {
        Some(Mark::from(vowel))
    } else if let (Some(pattern), Stage::Past, Voice::Active) = (form_i_pattern(verb), stage, voice) {
        // قُلْتُ، بِعْتُ، خِفْتُ
        if pattern.past() == Vowel::I || pattern.present() != Vowel::U {
            Some(Mark::Kasra)
        } else {
            Some(Mark::Damma)
        }
    } else if before == Some(Mark::Damma) {
        Some(Mark::Kasra)
    } else {
        before
    };
    if let Some(seg) = word.get_mut(p) {
        seg.mark = p_mark;
    }
    word.remove(i2);
}

/// Fuse two identical adjacent radicals (C2 C3, or the doubled C3 of form
/// IX) when both are voweled: the first loses its vowel to the consonant
/// before it and the pair is later written with shadda.
pub(crate) fn fuse_geminate(verb: &Verb, word: &mut Word, nominal: bool) {
    if verb.is_quadriliteral() {
        return;
    }
    let (a, b) = if verb.form() == Form::IX {
        match word.radical_positions(3)[..] {
            [a, b, ..] => (a, b),
            _ => return,
        }
    } else {
        if !verb.root().is_geminate() || matches!(verb.form(), Form::II | Form::V) {
            return;
        }
        match (word.radical(2), word.radical(3)) {
            (Some(a), Some(b)) => (a, b),
            _ => return,
        }
    };
    if b != a + 1 {
        return;
    }
    let (Some(first), Some(second)) = (word.get(a), word.get(b)) else {
        return;
    };
    let Some(vowel) = first.short_vowel() else {
        return;
    };
    let final_bare = nominal && second.mark.is_none() && b + 1 == word.len();
    if first.shadda || !(second.short_vowel().is_some() || final_bare) {
        return;
    }
    if let Some(first) = word.get_mut(a) {
        first.mark = Some(Mark::Sukun);
    }
    if let Some(before) = a.checked_sub(1).and_then(|i| word.get_mut(i)) {
        if before.has_mark(Mark::Sukun) {
            before.mark = Some(Mark::from(vowel));
        }
    }
}

/// The present of رأى drops its hamza: يَرَى.
fn contract_ra2a(verb: &Verb, word: &mut Word, stage: Stage) {
    let radicals = verb.radicals();
    if stage != Stage::Present
        || !matches!(verb.form(), Form::I(_))
        || radicals[..2] != ['ر', HAMZA]
        || !verb.root().is_defective()
    {
        return;
    }
    let Some(i2) = word.radical(2) else {
        return;
    };
    let mark = word.remove(i2).mark;
    if let Some(c1) = i2.checked_sub(1).and_then(|i| word.get_mut(i)) {
        c1.mark = mark;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn test_prefix_vowel() {
        assert_eq!(prefix_vowel(&verb("كتب", 1, Some("a/u")), Voice::Active), Mark::Fatha);
        assert_eq!(prefix_vowel(&verb("درس", 2, None), Voice::Active), Mark::Damma);
        assert_eq!(prefix_vowel(&verb("علم", 5, None), Voice::Active), Mark::Fatha);
        assert_eq!(prefix_vowel(&verb("ترجم", 1, None), Voice::Active), Mark::Damma);
        assert_eq!(prefix_vowel(&verb("زلزل", 2, None), Voice::Active), Mark::Fatha);
        assert_eq!(prefix_vowel(&verb("كتب", 1, Some("a/u")), Voice::Passive), Mark::Damma);
    }

    #[test]
    fn test_form_viii_infix() {
        let cases = [("صبر", "اصْطَبَرَ"), ("زحم", "ازْدَحَمَ"), ("وصل", "اتَّصَلَ"), ("أخذ", "اتَّخَذَ"), ("تبع", "اتَّبَعَ")];
        for (root, expected) in cases {
            let v = verb(root, 8, None);
            assert_eq!(inflect(&v, "ٱ1ْتَ2َ3", Tense::Past, Voice::Active, Cell::ThirdMasc), expected);
        }
    }

    #[test]
    fn test_hollow_open_and_closed() {
        let v = verb("قول", 1, Some("a/u"));
        assert_eq!(inflect(&v, "1َ2َ3", Tense::Past, Voice::Active, Cell::ThirdMasc), "قَالَ");
        assert_eq!(inflect(&v, "1َ2َ3", Tense::Past, Voice::Active, Cell::FirstSingular), "قُلْتُ");
        let v = verb("بيع", 1, Some("a/i"));
        assert_eq!(inflect(&v, "1َ2َ3", Tense::Past, Voice::Active, Cell::FirstSingular), "بِعْتُ");
    }

    #[test]
    fn test_geminate_fusion() {
        let v = verb("مدد", 1, Some("a/u"));
        assert_eq!(inflect(&v, "1َ2َ3", Tense::Past, Voice::Active, Cell::ThirdMasc), "مَدَّ");
        assert_eq!(inflect(&v, "1َ2َ3", Tense::Past, Voice::Active, Cell::FirstSingular), "مَدَدْتُ");
        let jussive = Tense::Present(Mood::Jussive);
        assert_eq!(inflect(&v, "1ْ2ُ3", jussive, Voice::Active, Cell::ThirdMasc), "يَمُدَّ");
        assert_eq!(inflect(&v, "1ْ2ُ3", jussive, Voice::Active, Cell::ThirdFemPlural), "يَمْدُدْنَ");
    }

    #[test]
    fn test_weak_final() {
        let v = verb("دعو", 1, Some("a/u"));
        let ind = Tense::Present(Mood::Indicative);
        assert_eq!(inflect(&v, "1ْ2ُ3", ind, Voice::Active, Cell::ThirdMasc), "يَدْعُو");
        assert_eq!(inflect(&v, "1ْ2ُ3", ind, Voice::Active, Cell::SecondFem), "تَدْعِينَ");
        assert_eq!(inflect(&v, "1َ2َ3", Tense::Past, Voice::Active, Cell::ThirdFem), "دَعَتْ");
    }
}
