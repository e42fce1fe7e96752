//! Maps a free-text transaction description to exactly one category.

use crate::models::Category;
use crate::services::lexicon;

/// Maximum Levenshtein distance for the fuzzy fallback.
pub const MAX_EDIT_DISTANCE: usize = 3;

/// Classify a description. Substring matching in lexicon priority order
/// wins outright; only when no keyword appears anywhere does the
/// edit-distance fallback run. Empty input is "Other".
pub fn classify(description: &str) -> Category {
    let normalized = description.trim().to_lowercase();
    if normalized.is_empty() {
        return Category::Other;
    }

    // First match wins across the whole priority order; there is no scoring
    // between categories once a substring hit occurs.
    for category in lexicon::MATCH_ORDER {
        for keyword in lexicon::keywords_longest_first(category) {
            if normalized.contains(keyword) {
                return category;
            }
        }
    }

    // Fuzzy fallback over every (category, keyword) pair, including the
    // "Other" hints. Strictly-closer keywords win, so the first category to
    // reach the minimum distance keeps it.
    let mut best = Category::Other;
    let mut min_distance = usize::MAX;
    for category in Category::ALL {
        for keyword in lexicon::keywords_for(category) {
            let distance = levenshtein(&normalized, keyword);
            if distance <= MAX_EDIT_DISTANCE && distance < min_distance {
                min_distance = distance;
                best = category;
            }
        }
    }
    best
}

/// Character-based Levenshtein distance, two-row dynamic programming.
/// O(a × b), fine for line-item titles against a lexicon of tens of words.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                prev[j].min(prev[j + 1]).min(curr[j]) + 1
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
