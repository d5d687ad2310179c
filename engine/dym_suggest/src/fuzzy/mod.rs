//! Fuzzy matching for "did you mean" candidates.
//!
//! Similarity is the Ratcliff/Obershelp ratio: find the longest common block,
//! recurse on the pieces to its left and right, and score `2·M / (|a| + |b|)`
//! where `M` is the total size of every block found.
//!
//! # Design
//!
//! - Strings are compared as sequences of `char`, so non-ASCII identifiers
//!   score the same as their ASCII look-alikes would.
//! - Two cheap upper bounds (length ratio, then multiset overlap) are tried
//!   before the full ratio, so most non-matches are rejected without the
//!   block search.
//! - Ranking is by descending score; ties keep input order. Callers control
//!   what "input order" means (tier order, table order), so results are
//!   reproducible.
//! - At most [`MAX_FUZZY_CANDIDATES`] candidates are scored per call.
//!
//! # Example
//!
//! ```
//! use dym_suggest::fuzzy::{close_matches, MatchBounds};
//!
//! let found = close_matches("appel", ["ape", "apple", "peach", "puppy"], MatchBounds::LOOSE);
//! let texts: Vec<&str> = found.iter().map(|m| m.text).collect();
//! assert_eq!(texts, ["apple", "ape"]);
//! ```

use rustc_hash::FxHashMap;

/// Upper bound on candidates scored by one [`close_matches`] call.
pub const MAX_FUZZY_CANDIDATES: usize = 4096;

/// How many matches to keep and how similar they must be.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MatchBounds {
    pub max_results: usize,
    /// Inclusive lower bound on the ratio, in `[0, 1]`.
    pub min_similarity: f64,
}

impl MatchBounds {
    /// Bounds for names and attributes.
    pub const DEFAULT: MatchBounds = MatchBounds {
        max_results: 3,
        min_similarity: 0.7,
    };

    /// Bounds for module listings, where names are short and similar.
    pub const LOOSE: MatchBounds = MatchBounds {
        max_results: 5,
        min_similarity: 0.6,
    };
}

impl Default for MatchBounds {
    fn default() -> Self {
        MatchBounds::DEFAULT
    }
}

/// A candidate that passed the bounds, with its score.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CloseMatch<'a> {
    pub text: &'a str,
    pub score: f64,
}

/// Ratcliff/Obershelp similarity of `a` and `b`, in `[0, 1]`.
///
/// Two empty strings are identical (ratio 1).
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio(&a, &b)
}

/// Candidates close to `target`, best first.
///
/// `target` itself is never returned. Only the first
/// [`MAX_FUZZY_CANDIDATES`] candidates are considered.
pub fn close_matches<'a, I>(target: &str, candidates: I, bounds: MatchBounds) -> Vec<CloseMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    if bounds.max_results == 0 {
        return Vec::new();
    }

    let target_chars: Vec<char> = target.chars().collect();
    let cutoff = bounds.min_similarity;

    let mut matches: Vec<CloseMatch<'a>> = candidates
        .into_iter()
        .take(MAX_FUZZY_CANDIDATES)
        .filter(|candidate| *candidate != target)
        .filter_map(|candidate| {
            let chars: Vec<char> = candidate.chars().collect();
            if real_quick_ratio(&chars, &target_chars) < cutoff
                || quick_ratio(&chars, &target_chars) < cutoff
            {
                return None;
            }
            let score = ratio(&chars, &target_chars);
            (score >= cutoff).then_some(CloseMatch {
                text: candidate,
                score,
            })
        })
        .collect();

    // Stable: equal scores keep input order.
    matches.sort_by(|left, right| right.score.total_cmp(&left.score));
    matches.truncate(bounds.max_results);
    matches
}

/// Like [`close_matches`], keeping only the matched text.
pub fn close_match_texts<'a, I>(target: &str, candidates: I, bounds: MatchBounds) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    close_matches(target, candidates, bounds)
        .into_iter()
        .map(|found| found.text)
        .collect()
}

#[allow(clippy::cast_precision_loss, reason = "identifier lengths are tiny")]
fn score(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    2.0 * matched as f64 / total as f64
}

fn ratio(a: &[char], b: &[char]) -> f64 {
    score(matched_chars(a, b), a.len() + b.len())
}

/// Upper bound on [`ratio`] from lengths alone.
fn real_quick_ratio(a: &[char], b: &[char]) -> f64 {
    score(a.len().min(b.len()), a.len() + b.len())
}

/// Upper bound on [`ratio`] from the multiset intersection of characters.
fn quick_ratio(a: &[char], b: &[char]) -> f64 {
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in b {
        *available.entry(ch).or_default() += 1;
    }
    let mut shared = 0;
    for ch in a {
        if let Some(count) = available.get_mut(ch) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }
    score(shared, a.len() + b.len())
}

/// Total size of the matching blocks of `a` and `b`.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
    for (j, &ch) in b.iter().enumerate() {
        positions.entry(ch).or_default().push(j);
    }

    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let (i, j, size) = longest_block(a, &positions, (a_lo, a_hi), (b_lo, b_hi));
        if size == 0 {
            continue;
        }
        total += size;
        if a_lo < i && b_lo < j {
            pending.push((a_lo, i, b_lo, j));
        }
        if i + size < a_hi && j + size < b_hi {
            pending.push((i + size, a_hi, j + size, b_hi));
        }
    }
    total
}

/// Longest block common to `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
///
/// Returns `(i, j, size)`. Among equally long blocks the one starting
/// earliest in `a`, then earliest in `b`, wins.
fn longest_block(
    a: &[char],
    positions: &FxHashMap<char, Vec<usize>>,
    (a_lo, a_hi): (usize, usize),
    (b_lo, b_hi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (a_lo, b_lo, 0);
    // Length of the run ending at (i - 1, j), keyed by j.
    let mut run_ending: FxHashMap<usize, usize> = FxHashMap::default();

    for (i, ch) in a.iter().enumerate().take(a_hi).skip(a_lo) {
        let mut next: FxHashMap<usize, usize> = FxHashMap::default();
        if let Some(js) = positions.get(ch) {
            for &j in js {
                if j < b_lo {
                    continue;
                }
                if j >= b_hi {
                    break;
                }
                let size = j
                    .checked_sub(1)
                    .and_then(|prev| run_ending.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        run_ending = next;
    }

    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests;
