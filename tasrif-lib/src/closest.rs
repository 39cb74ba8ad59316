// Suggestions of related verbs: the closest roots to a given one, and a
// random pick for when nothing is selected.

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::Rng;
use tracing::trace;

use crate::cache::MemoCache;
use crate::distance::{collate, levenshtein, positional_matches};
use crate::error::CacheError;
use crate::letters::{normalize_hamza, strip_diacritics};
use crate::types::Verb;

const CLOSEST_CACHE_CAPACITY: usize = 256;

fn normalized_root(root: &str) -> String {
    normalize_hamza(&strip_diacritics(root.trim()))
}

/// Verbs whose root is closest to `target_root`, one per root, best first.
/// Roots sharing more letters in the same position rank higher, then roots
/// at a smaller edit distance, then in collation order. The target's own
/// root is never returned.
pub fn closest_verbs<'v>(target_root: &str, verbs: &'v [Verb], count: usize) -> Vec<&'v Verb> {
    closest_indices(target_root, verbs, count)
        .into_iter()
        .map(|i| &verbs[i])
        .collect()
}

fn closest_indices(target_root: &str, verbs: &[Verb], count: usize) -> Vec<usize> {
    let target = normalized_root(target_root);
    let mut ranked: Vec<(usize, usize, String, usize)> = verbs
        .iter()
        .enumerate()
        .filter_map(|(i, verb)| {
            let root = normalized_root(verb.root().as_str());
            (root != target).then(|| {
                let matches = positional_matches(&target, &root);
                let distance = levenshtein(&target, &root);
                (matches, distance, root, i)
            })
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| compare_roots(&verbs[a.3], &verbs[b.3]))
    });

    let mut seen = HashSet::new();
    ranked
        .into_iter()
        .filter(|(_, _, root, _)| seen.insert(root.clone()))
        .take(count)
        .map(|(_, _, _, i)| i)
        .collect()
}

fn compare_roots(a: &Verb, b: &Verb) -> Ordering {
    collate(a.root().as_str(), b.root().as_str())
}

/// [`closest_verbs`] behind a bounded memo cache. The verb list is assumed
/// constant for the lifetime of the selector, so entries are keyed by target,
/// count and list length only.
pub struct ClosestVerbs {
    cache: MemoCache<(String, usize, usize), Vec<usize>>,
}

impl ClosestVerbs {
    pub fn new() -> Result<Self, CacheError> {
        Self::with_capacity(CLOSEST_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, CacheError> {
        Ok(Self {
            cache: MemoCache::new(capacity)?,
        })
    }

    pub fn closest<'v>(&self, target_root: &str, verbs: &'v [Verb], count: usize) -> Vec<&'v Verb> {
        let key = (normalized_root(target_root), count, verbs.len());
        let indices = self.cache.get_or_insert_with(&key, || {
            trace!(target = %key.0, count, "closest verbs computed");
            closest_indices(target_root, verbs, count)
        });
        indices.into_iter().filter_map(|i| verbs.get(i)).collect()
    }
}

/// A uniform random sample of `count` verbs (all of them if fewer).
pub fn random_verbs(verbs: &[Verb], count: usize) -> Vec<&Verb> {
    random_verbs_with(&mut rand::thread_rng(), verbs, count)
}

/// Reservoir sampling with a caller-supplied generator.
pub fn random_verbs_with<'v, R: Rng + ?Sized>(rng: &mut R, verbs: &'v [Verb], count: usize) -> Vec<&'v Verb> {
    let mut reservoir: Vec<&Verb> = Vec::with_capacity(count.min(verbs.len()));
    for (i, verb) in verbs.iter().enumerate() {
        if reservoir.len() < count {
            reservoir.push(verb);
        } else {
            let j = rng.gen_range(0..=i);
            if j < count {
                reservoir[j] = verb;
            }
        }
    }
    reservoir
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry() -> Registry {
        Registry::load().unwrap()
    }

    fn roots(verbs: &[&Verb]) -> Vec<String> {
        verbs.iter().map(|v| v.root().as_str().to_string()).collect()
    }

    #[test]
    fn test_closest_nba() {
        let reg = registry();
        let found = closest_verbs("نبأ", reg.verbs(), 6);
        assert_eq!(roots(&found), ["نشأ", "ابت", "أبي", "بدأ", "بطأ", "تبع"]);
    }

    #[test]
    fn test_closest_excludes_target_and_respects_count() {
        let reg = registry();
        for target in ["كتب", "قول", "أمن"] {
            let found = closest_verbs(target, reg.verbs(), 5);
            assert!(found.len() <= 5);
            let target = normalized_root(target);
            assert!(found.iter().all(|v| normalized_root(v.root().as_str()) != target));
        }
        assert!(closest_verbs("كتب", reg.verbs(), 0).is_empty());
    }

    #[test]
    fn test_closest_one_verb_per_root() {
        let reg = registry();
        let found = roots(&closest_verbs("كتب", reg.verbs(), 20));
        let unique: HashSet<&String> = found.iter().collect();
        assert_eq!(unique.len(), found.len());
    }

    #[test]
    fn test_cached_selector_matches_uncached() {
        let reg = registry();
        let selector = ClosestVerbs::new().unwrap();
        let first = selector.closest("نبأ", reg.verbs(), 6);
        let again = selector.closest("نبأ", reg.verbs(), 6);
        assert_eq!(first, again);
        assert_eq!(first, closest_verbs("نبأ", reg.verbs(), 6));
    }

    #[test]
    fn test_random_verbs() {
        let reg = registry();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = random_verbs_with(&mut rng, reg.verbs(), 5);
        assert_eq!(picked.len(), 5);
        let ids: HashSet<&str> = picked.iter().map(|v| v.id()).collect();
        assert_eq!(ids.len(), 5);

        let few = &reg.verbs()[..3];
        assert_eq!(random_verbs(few, 10).len(), 3);
        assert!(random_verbs(reg.verbs(), 0).is_empty());
    }
}
