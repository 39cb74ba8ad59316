// String distance and ordering helpers for search ranking.

use std::cmp::Ordering;

use crate::letters::normalize_hamza;

/// Levenshtein distance over characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }
    row[b.len()]
}

/// Number of positions holding the same letter.
pub fn positional_matches(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x == y).count()
}

/// Order two roots as a reader would: hamza spellings fold together first,
/// then the raw letters break ties.
pub fn collate(a: &str, b: &str) -> Ordering {
    normalize_hamza(a)
        .cmp(&normalize_hamza(b))
        .then_with(|| a.cmp(b))
}
