// Root-aware verb search.
//
// A query is normalized, split into runs of Arabic letters, and every run
// proposes each of its contiguous substrings of up to five letters as a root
// candidate, so an inflected word surfaces its root (يكتبون → كتب). A
// candidate that names no root falls back to every root it is a prefix of.
// Matches are ranked by edit distance between the query and each verb's
// lemma.

use std::collections::HashSet;

use tracing::trace;

use crate::cache::MemoCache;
use crate::distance::{collate, levenshtein};
use crate::error::CacheError;
use crate::letters::{is_arabic_letter, normalize_hamza, strip_diacritics, TATWEEL};
use crate::registry::Registry;
use crate::types::Verb;

const DISTANCE_CACHE_CAPACITY: usize = 4096;
const MAX_WINDOW: usize = 5;

/// Supplies the display translation of a verb.
pub type Translate<'a> = &'a dyn Fn(&Verb) -> Option<String>;

#[derive(Clone, Copy, Default)]
pub struct SearchOptions<'a> {
    /// Only look the query up as a complete root.
    pub exact_root: bool,
    /// Also match verbs whose translation contains the query.
    pub translate: Option<Translate<'a>>,
}

/// Strip diacritics and tatweel, fold hamza spellings, lowercase and trim.
pub fn normalize_query(text: &str) -> String {
    let stripped: String = strip_diacritics(text).chars().filter(|&c| c != TATWEEL).collect();
    normalize_hamza(&stripped).to_lowercase().trim().to_string()
}

/// Contiguous runs of Arabic letters.
fn arabic_runs(text: &str) -> Vec<Vec<char>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for c in text.chars() {
        if is_arabic_letter(c) {
            current.push(c);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Root candidates proposed by one run of letters: every start and width.
fn root_candidates(run: &[char]) -> Vec<String> {
    let mut candidates = Vec::new();
    for width in 1..=run.len().min(MAX_WINDOW) {
        for window in run.windows(width) {
            candidates.push(window.iter().collect());
        }
    }
    candidates
}

/// Search over a registry, memoizing query/lemma distances.
pub struct SearchEngine<'r> {
    registry: &'r Registry,
    distances: MemoCache<(String, String), usize>,
}

impl<'r> SearchEngine<'r> {
    pub fn new(registry: &'r Registry) -> Result<Self, CacheError> {
        Self::with_capacity(registry, DISTANCE_CACHE_CAPACITY)
    }

    pub fn with_capacity(registry: &'r Registry, capacity: usize) -> Result<Self, CacheError> {
        Ok(Self {
            registry,
            distances: MemoCache::new(capacity)?,
        })
    }

    /// Verbs matching `query`, most relevant first. An empty or unmatched
    /// query gives an empty list.
    pub fn search(&self, query: &str, options: SearchOptions<'_>) -> Vec<&'r Verb> {
        let query = normalize_query(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut matches: Vec<&'r Verb> = Vec::new();
        let mut add = |verb: &'r Verb| {
            if seen.insert(verb.id()) {
                matches.push(verb);
            }
        };

        if options.exact_root {
            self.registry.verbs_for_root(&query).into_iter().for_each(&mut add);
        } else {
            for run in arabic_runs(&query) {
                for candidate in root_candidates(&run) {
                    let exact = self.registry.verbs_for_root(&candidate);
                    trace!(%candidate, hits = exact.len(), "root candidate");
                    if exact.is_empty() {
                        self.registry
                            .iter()
                            .filter(|v| normalize_hamza(v.root().as_str()).starts_with(&candidate))
                            .for_each(&mut add);
                    } else {
                        exact.into_iter().for_each(&mut add);
                    }
                }
            }
            if let Some(translate) = options.translate {
                self.registry
                    .iter()
                    .filter(|v| {
                        translate(*v).is_some_and(|t| normalize_query(&t).contains(&query))
                    })
                    .for_each(&mut add);
            }
        }

        let mut ranked: Vec<(usize, String, &'r Verb)> = matches
            .into_iter()
            .map(|verb| {
                let translation = options
                    .translate
                    .and_then(|translate| translate(verb))
                    .unwrap_or_default();
                (self.distance(&query, verb), translation, verb)
            })
            .collect();
        ranked.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| collate(a.2.root().as_str(), b.2.root().as_str()))
                .then_with(|| a.1.cmp(&b.1))
        });
        ranked.into_iter().map(|(_, _, verb)| verb).collect()
    }

    fn distance(&self, query: &str, verb: &Verb) -> usize {
        let label = normalize_query(verb.label());
        let key = (query.to_string(), label);
        self.distances
            .get_or_insert_with(&key, || levenshtein(&key.0, &key.1))
    }
}
