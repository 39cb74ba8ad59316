// Verbal nouns and participles.

use crate::letters::*;
use crate::root::Root;
use crate::rules::{form_viii_infix, fuse_geminate, hollow, Stage};
use crate::segment::{Segment, Word};
use crate::types::{Form, MasdarPattern, Verb, Voice};

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

fn masdar_template(pattern: MasdarPattern) -> &'static str {
    match pattern {
        MasdarPattern::Fa3l => "1َ2ْ3",
        MasdarPattern::Fa3al => "1َ2َ3",
        MasdarPattern::Fi3l => "1ِ2ْ3",
        MasdarPattern::Fu3l => "1ُ2ْ3",
        MasdarPattern::Fu3uul => "1ُ2ُو3",
        MasdarPattern::Fi3aal => "1ِ2َا3",
        MasdarPattern::Fa3aal => "1َ2َا3",
        MasdarPattern::Fu3aal => "1ُ2َا3",
        MasdarPattern::Fi3aala => "1ِ2َا3َة",
        MasdarPattern::Fa3aala => "1َ2َا3َة",
        MasdarPattern::Fa3la => "1َ2ْ3َة",
        MasdarPattern::Fi3la => "1ِ2ْ3َة",
        MasdarPattern::Fu3la => "1ُ2ْ3َة",
        MasdarPattern::Fi3laan => "1ِ2ْ3َان",
        MasdarPattern::Fu3laan => "1ُ2ْ3َان",
        MasdarPattern::Maf3al => "مَ1ْ2َ3",
        MasdarPattern::Maf3ala => "مَ1ْ2َ3َة",
        MasdarPattern::Maf3il => "مَ1ْ2ِ3",
        MasdarPattern::Fu3uula => "1ُ2ُو3َة",
        MasdarPattern::Fa3iil => "1َ2ِي3",
        MasdarPattern::Fa3laa => "1َ2ْ3َى",
        MasdarPattern::Fa3ala => "1َ2َ3َة",
    }
}

fn derived_masdar_template(verb: &Verb) -> &'static str {
    match (verb.is_quadriliteral(), verb.form()) {
        (true, Form::I(_)) => "1َ2ْ3َ4َة",
        (true, _) => "تَ1َ2ْ3ُ4",
        (false, Form::I(_)) => "1َ2ْ3",
        (false, Form::II) => "تَ1ْ2ِي3",
        (false, Form::III) => "مُ1َا2َ3َة",
        (false, Form::IV) => "ءِ1ْ2َا3",
        (false, Form::V) => "تَ1َ2ُّ3",
        (false, Form::VI) => "تَ1َا2ُ3",
        (false, Form::VII) => "ٱنْ1ِ2َا3",
        (false, Form::VIII) => "ٱ1ْتِ2َا3",
        (false, Form::IX) => "ٱ1ْ2ِ3َا3",
        (false, Form::X) => "ٱسْتِ1ْ2َا3",
    }
}

fn active_participle_template(verb: &Verb) -> &'static str {
    match (verb.is_quadriliteral(), verb.form()) {
        (true, Form::I(_)) => "مُ1َ2ْ3ِ4",
        (true, _) => "مُتَ1َ2ْ3ِ4",
        (false, Form::I(_)) => "1َا2ِ3",
        (false, Form::II) => "مُ1َ2ِّ3",
        (false, Form::III) => "مُ1َا2ِ3",
        (false, Form::IV) => "مُ1ْ2ِ3",
        (false, Form::V) => "مُتَ1َ2ِّ3",
        (false, Form::VI) => "مُتَ1َا2ِ3",
        (false, Form::VII) => "مُنْ1َ2ِ3",
        (false, Form::VIII) => "مُ1ْتَ2ِ3",
        (false, Form::IX) => "مُ1ْ2َ3ِ3",
        (false, Form::X) => "مُسْتَ1ْ2ِ3",
    }
}

/// None for forms without a passive participle.
fn passive_participle_template(verb: &Verb) -> Option<&'static str> {
    Some(match (verb.is_quadriliteral(), verb.form()) {
        (true, Form::I(_)) => "مُ1َ2ْ3َ4",
        (true, _) => return None,
        (false, Form::I(_)) => "مَ1ْ2ُو3",
        (false, Form::II) => "مُ1َ2َّ3",
        (false, Form::III) => "مُ1َا2َ3",
        (false, Form::IV) => "مُ1ْ2َ3",
        (false, Form::V) => "مُتَ1َ2َّ3",
        (false, Form::VI) => "مُتَ1َا2َ3",
        (false, Form::VIII) => "مُ1ْتَ2َ3",
        (false, Form::X) => "مُسْتَ1ْ2َ3",
        (false, Form::VII | Form::IX) => return None,
    })
}

fn expand(verb: &Verb, template: &str) -> Word {
    Word::from_template(template, verb.radicals(), Mark::Kasra)
}

// ---------------------------------------------------------------------------
// Masdar
// ---------------------------------------------------------------------------

/// Default form I verbal noun when none is attested.
fn default_masdar(root: &Root, verb: &Verb) -> MasdarPattern {
    if root.is_geminate() || root.is_hollow() {
        return MasdarPattern::Fa3l;
    }
    if root.is_defective() {
        return if root.radical(3) == Some(WAW) {
            MasdarPattern::Fu3uul
        } else {
            MasdarPattern::Fa3l
        };
    }
    match verb.pattern().map(|p| (p.past(), p.present())) {
        Some((Vowel::I, Vowel::A)) => MasdarPattern::Fa3al,
        Some((Vowel::U, Vowel::U)) => MasdarPattern::Fa3aala,
        _ => MasdarPattern::Fa3l,
    }
}

/// Verbal nouns of the verb. An empty list means none is attested.
pub fn derive_masdar(verb: &Verb) -> Vec<String> {
    if verb.is_quadriliteral() {
        return vec![expand(verb, derived_masdar_template(verb)).finalize()];
    }
    if let Form::I(_) = verb.form() {
        let patterns = match verb.masdar_override() {
            Some(patterns) => patterns.to_vec(),
            None => vec![default_masdar(verb.root(), verb)],
        };
        return patterns
            .into_iter()
            .map(|pattern| form_i_masdar(verb, pattern))
            .collect();
    }
    vec![derived_masdar(verb)]
}

fn form_i_masdar(verb: &Verb, pattern: MasdarPattern) -> String {
    let root = verb.root();
    let mut word = expand(verb, masdar_template(pattern));
    if root.is_hollow() {
        match pattern {
            // قِيَام، زِيَارَة
            MasdarPattern::Fi3aal | MasdarPattern::Fi3aala => {
                if let Some(c2) = word.radical(2).and_then(|i| word.get_mut(i)) {
                    c2.letter = YA;
                }
            }
            // مَقَام
            MasdarPattern::Maf3al | MasdarPattern::Maf3il | MasdarPattern::Maf3ala => {
                hollow(verb, &mut word, Stage::Nominal, Voice::Active);
            }
            _ => {}
        }
    }
    weak_final_nominal(verb, &mut word);
    fuse_geminate(verb, &mut word, true);
    word.finalize()
}

fn derived_masdar(verb: &Verb) -> String {
    let root = verb.root();
    let form = verb.form();
    if root.is_hollow() {
        // إِقَامَة، اسْتِقَامَة
        match form {
            Form::IV => return expand(verb, "ءِ1َا3َة").finalize(),
            Form::X => return expand(verb, "ٱسْتِ1َا3َة").finalize(),
            _ => {}
        }
    }
    if root.is_defective() {
        match form {
            // تَسْمِيَة
            Form::II => return expand(verb, "تَ1ْ2ِيَة").finalize(),
            // مُنَادَاة
            Form::III => return expand(verb, "مُ1َا2َاة").finalize(),
            // تَلَقٍّ، تَنَادٍ
            Form::V | Form::VI => {
                let mut word = expand(verb, derived_masdar_template(verb));
                tanween_final(&mut word, Mark::Kasratan);
                return word.finalize();
            }
            _ => {}
        }
    }
    let mut word = expand(verb, derived_masdar_template(verb));
    form_viii_infix(verb, &mut word);
    if root.is_hollow() && matches!(form, Form::VII | Form::VIII) {
        // انْقِيَاد، اخْتِيَار
        if let Some(c2) = word.radical(2).and_then(|i| word.get_mut(i)) {
            c2.letter = YA;
        }
    }
    weak_final_nominal(verb, &mut word);
    fuse_geminate(verb, &mut word, true);
    word.finalize()
}

/// A weak final radical at the end of a noun: after ā it becomes hamza
/// (دُعَاء); after ū it merges into a doubled glide (عُلُوّ، مَرْمِيّ).
fn weak_final_nominal(verb: &Verb, word: &mut Word) {
    if !verb.root().is_defective() {
        return;
    }
    let Some(i3) = word.radical(3) else {
        return;
    };
    if i3 + 1 != word.len() || i3 < 1 {
        return;
    }
    let Some(long) = word.get(i3 - 1).filter(|s| s.is_long_vowel()).map(|s| s.letter) else {
        return;
    };
    match long {
        ALIF => {
            if let Some(c3) = word.get_mut(i3) {
                c3.letter = HAMZA;
                c3.mark = None;
            }
        }
        WAW => merge_long_u(word, i3),
        _ => {}
    }
}

/// Remove the long ū before a final weak radical and double the radical. A
/// ي radical turns the preceding vowel into kasra.
fn merge_long_u(word: &mut Word, i3: usize) {
    let is_ya = word.get(i3).is_some_and(|s| s.letter == YA);
    if is_ya {
        if let Some(c2) = i3.checked_sub(2).and_then(|i| word.get_mut(i)) {
            c2.mark = Some(Mark::Kasra);
        }
    }
    word.remove(i3 - 1);
    if let Some(c3) = word.get_mut(i3 - 1) {
        c3.shadda = true;
        c3.mark = None;
    }
}

/// Drop a weak final radical and put tanween on the consonant before it.
fn tanween_final(word: &mut Word, tanween: Mark) {
    let Some(i3) = word.radical(3) else {
        return;
    };
    word.truncate(i3);
    if let Some(c2) = i3.checked_sub(1).and_then(|i| word.get_mut(i)) {
        c2.mark = Some(tanween);
    }
}

// ---------------------------------------------------------------------------
// Participles
// ---------------------------------------------------------------------------

/// The active participle. Defined for every verb.
pub fn derive_active_participle(verb: &Verb) -> String {
    let mut word = expand(verb, active_participle_template(verb));
    if verb.is_quadriliteral() {
        return word.finalize();
    }
    form_viii_infix(verb, &mut word);
    let root = verb.root();

    if matches!(verb.form(), Form::I(_)) && root.is_hollow() {
        // قَائِل; a final hamza merges into tanween: جَاءٍ
        let Some(i2) = word.radical(2) else {
            return word.finalize();
        };
        if let Some(c2) = word.get_mut(i2) {
            c2.letter = HAMZA;
        }
        if root.is_final_hamzated() {
            tanween_final(&mut word, Mark::Kasratan);
        }
        return word.finalize();
    }
    if root.is_defective() {
        // رَامٍ، مُعْطٍ
        tanween_final(&mut word, Mark::Kasratan);
        return word.finalize();
    }
    hollow(verb, &mut word, Stage::Nominal, Voice::Active);
    fuse_geminate(verb, &mut word, true);
    word.finalize()
}

/// The passive participle, or an empty string when the verb has none.
pub fn derive_passive_participle(verb: &Verb) -> String {
    if !verb.has_passive_participle() {
        return String::new();
    }
    let Some(template) = passive_participle_template(verb) else {
        return String::new();
    };
    let mut word = expand(verb, template);
    if verb.is_quadriliteral() {
        return word.finalize();
    }
    form_viii_infix(verb, &mut word);
    let root = verb.root();

    if matches!(verb.form(), Form::I(_)) {
        if root.is_hollow() {
            // مَقُول، مَبِيع
            let vowel = if root.radical(2) == Some(WAW) {
                Vowel::U
            } else {
                Vowel::I
            };
            let template = format!(
                "مَ1{}{}3",
                short_vowel_from_pattern(vowel),
                long_vowel_from_pattern(vowel)
            );
            return expand(verb, &template).finalize();
        }
        if root.is_defective() {
            // مَدْعُوّ، مَرْمِيّ
            if let Some(i3) = word.radical(3) {
                merge_long_u(&mut word, i3);
            }
            return word.finalize();
        }
        fuse_geminate(verb, &mut word, true);
        return word.finalize();
    }
    if root.is_defective() {
        // مُعْطًى
        tanween_final(&mut word, Mark::Fathatan);
        word.push(Segment::new(ALIF_MAQSURA));
        return word.finalize();
    }
    hollow(verb, &mut word, Stage::Nominal, Voice::Passive);
    fuse_geminate(verb, &mut word, true);
    word.finalize()
}
