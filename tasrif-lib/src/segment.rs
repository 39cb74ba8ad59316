// Word model used while a form is being built: one segment per letter, with
// its mark, gemination and the radical slot it came from.
//
// Templates are written as plain Arabic with the digits 1-4 standing for the
// radicals and ٱ for a wasl alif, e.g. "ٱسْتَ1ْ2َ3" for form X.

use crate::letters::*;

/// One written letter plus everything attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segment {
    pub letter: char,
    pub mark: Option<Mark>,
    pub shadda: bool,
    /// Radical slot (1-4) when the letter came from the root.
    pub radical: Option<u8>,
    /// Wasl alif; its mark records the vowel it takes after a pause but is
    /// never written.
    pub wasl: bool,
}

impl Segment {
    pub fn new(letter: char) -> Self {
        Self {
            letter,
            mark: None,
            shadda: false,
            radical: None,
            wasl: false,
        }
    }

    pub fn with_mark(letter: char, mark: Mark) -> Self {
        Self {
            mark: Some(mark),
            ..Self::new(letter)
        }
    }

    /// An unmarked ا و ي that lengthens the preceding vowel.
    pub fn is_long_vowel(&self) -> bool {
        self.mark.is_none() && !self.wasl && !self.shadda && matches!(self.letter, ALIF | WAW | YA)
    }

    pub fn short_vowel(&self) -> Option<Vowel> {
        self.mark.and_then(Mark::short_vowel)
    }

    pub fn has_mark(&self, mark: Mark) -> bool {
        self.mark == Some(mark)
    }
}

/// A word under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Word {
    segments: Vec<Segment>,
}

impl Word {
    /// Expand a template against the given radicals. `wasl_vowel` is the
    /// vowel a wasl alif carries (kasra in the active voice, damma in the
    /// passive).
    pub fn from_template(template: &str, radicals: &[char], wasl_vowel: Mark) -> Self {
        let mut segments: Vec<Segment> = Vec::with_capacity(template.len() / 2);
        for c in template.chars() {
            if let Some(mark) = Mark::from_char(c) {
                if let Some(last) = segments.last_mut() {
                    last.mark = Some(mark);
                }
            } else if c == SHADDA {
                if let Some(last) = segments.last_mut() {
                    last.shadda = true;
                }
            } else if let Some(slot) = c.to_digit(10) {
                let slot = slot as u8;
                let letter = radicals
                    .get(usize::from(slot).saturating_sub(1))
                    .copied()
                    .unwrap_or(c);
                segments.push(Segment {
                    radical: Some(slot),
                    ..Segment::new(letter)
                });
            } else if c == ALIF_WASL {
                segments.push(Segment {
                    wasl: true,
                    ..Segment::with_mark(ALIF, wasl_vowel)
                });
            } else {
                segments.push(Segment::new(c));
            }
        }
        Self { segments }
    }

    /// A literal affix; it never contains radicals or wasl.
    pub fn affix(text: &str) -> Self {
        Self::from_template(text, &[], Mark::Kasra)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn get(&self, i: usize) -> Option<&Segment> {
        self.segments.get(i)
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut Segment> {
        self.segments.get_mut(i)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn remove(&mut self, i: usize) -> Segment {
        self.segments.remove(i)
    }

    pub fn push(&mut self, seg: Segment) {
        self.segments.push(seg);
    }

    pub fn truncate(&mut self, len: usize) {
        self.segments.truncate(len);
    }

    pub fn prepend(&mut self, seg: Segment) {
        self.segments.insert(0, seg);
    }

    pub fn append(&mut self, other: Word) {
        self.segments.extend(other.segments);
    }

    /// Position of a radical. Slot 3 resolves to its last occurrence since
    /// form IX repeats it.
    pub fn radical(&self, slot: u8) -> Option<usize> {
        let mut hits = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.radical == Some(slot))
            .map(|(i, _)| i);
        if slot == 3 {
            hits.last()
        } else {
            hits.next()
        }
    }

    /// Every position of a radical, in order.
    pub fn radical_positions(&self, slot: u8) -> Vec<usize> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.radical == Some(slot))
            .map(|(i, _)| i)
            .collect()
    }

    /// Apply the orthographic rules and render the word as text.
    pub fn finalize(mut self) -> String {
        self.contract_glides();
        self.lengthen_double_hamza();
        self.seat_hamzas();
        self.merge_madda();
        self.render()
    }

    /// وْ and يْ after a matching short vowel become long vowel letters.
    fn contract_glides(&mut self) {
        for i in 1..self.segments.len() {
            let before = self.segments[i - 1].mark;
            let seg = &mut self.segments[i];
            if seg.shadda || seg.mark != Some(Mark::Sukun) || !is_weak_letter(seg.letter) {
                continue;
            }
            match before {
                Some(Mark::Damma) => {
                    seg.letter = WAW;
                    seg.mark = None;
                }
                Some(Mark::Kasra) => {
                    seg.letter = YA;
                    seg.mark = None;
                }
                _ => {}
            }
        }
    }

    /// A quiescent hamza after a voweled one turns into the matching long
    /// vowel (ءَءْ → آ, ءُءْ → أُو).
    fn lengthen_double_hamza(&mut self) {
        for i in 1..self.segments.len() {
            let before = self.segments[i - 1].clone();
            let seg = &mut self.segments[i];
            if seg.letter != HAMZA || seg.mark != Some(Mark::Sukun) || before.letter != HAMZA {
                continue;
            }
            if let Some(v) = before.short_vowel() {
                seg.letter = long_vowel_from_pattern(v);
                seg.mark = None;
            }
        }
    }

    fn seat_hamzas(&mut self) {
        let last = self.segments.len().saturating_sub(1);
        for i in 0..self.segments.len() {
            if self.segments[i].letter != HAMZA {
                continue;
            }
            let carrier = match i.checked_sub(1).map(|p| &self.segments[p]) {
                None => Carrier::Start,
                Some(p) if p.is_long_vowel() => Carrier::Long(p.letter),
                Some(p) => Carrier::Short {
                    letter: p.letter,
                    mark: p.mark,
                },
            };
            self.segments[i].letter = seat_hamza(carrier, self.segments[i].mark, i == last);
        }
    }

    /// أَ followed by a long ا is written آ.
    fn merge_madda(&mut self) {
        let mut i = 1;
        while i < self.segments.len() {
            let prev = &self.segments[i - 1];
            let madda = prev.letter == ALIF_HAMZA_ABOVE
                && prev.has_mark(Mark::Fatha)
                && !prev.shadda
                && self.segments[i].letter == ALIF
                && self.segments[i].is_long_vowel();
            if madda {
                let prev = &mut self.segments[i - 1];
                prev.letter = ALIF_MADDA;
                prev.mark = None;
                self.segments.remove(i);
            } else {
                i += 1;
            }
        }
    }

    fn render(&self) -> String {
        let mut out = String::with_capacity(self.segments.len() * 4);
        for seg in &self.segments {
            out.push(seg.letter);
            if seg.wasl {
                continue;
            }
            // Canonical storage order: vowel or tanween first, then shadda.
            if let Some(mark) = seg.mark {
                out.push(mark.to_char());
            }
            if seg.shadda {
                out.push(SHADDA);
            }
        }
        geminate_double_letters(&out)
    }
}
