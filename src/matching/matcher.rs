//! Bounded-mismatch primer search.
//!
//! The scan is a substitution-only (Hamming) search with a first-fit policy:
//! the leftmost window within the mismatch budget is accepted and the scan
//! resumes at the end of that window. Later windows that overlap an accepted
//! one are never considered, even if they would have fewer mismatches.

use crate::core::types::Match;

/// Count mismatching positions between two equal-length slices, stopping once
/// the count exceeds `limit`.
///
/// The returned value is exact when it is `<= limit`; otherwise it is only
/// guaranteed to be `> limit`.
#[inline]
#[must_use]
pub fn bounded_hamming(a: &[u8], b: &[u8], limit: usize) -> usize {
    let mut mismatches = 0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            mismatches += 1;
            if mismatches > limit {
                break;
            }
        }
    }
    mismatches
}

/// Searches a target for a pattern allowing up to `max_mismatches` substitutions
#[derive(Debug, Clone, Copy)]
pub struct ApproximateMatcher<'p> {
    pattern: &'p [u8],
    max_mismatches: usize,
}

impl<'p> ApproximateMatcher<'p> {
    #[must_use]
    pub fn new(pattern: &'p [u8], max_mismatches: usize) -> Self {
        Self {
            pattern,
            max_mismatches,
        }
    }

    /// Lazily iterate over the matches in `target`, leftmost first
    #[must_use]
    pub fn find_iter<'t>(&self, target: &'t [u8]) -> Matches<'p, 't> {
        Matches {
            pattern: self.pattern,
            max_mismatches: self.max_mismatches,
            target,
            pos: 0,
        }
    }

    /// Collect all matches in `target`
    #[must_use]
    pub fn find(&self, target: &[u8]) -> Vec<Match> {
        self.find_iter(target).collect()
    }
}

/// Iterator over non-overlapping approximate matches.
///
/// Created by [`ApproximateMatcher::find_iter`].
#[derive(Debug, Clone)]
pub struct Matches<'p, 't> {
    pattern: &'p [u8],
    max_mismatches: usize,
    target: &'t [u8],
    pos: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        let len = self.pattern.len();
        if len == 0 || len > self.target.len() {
            return None;
        }
        let last_start = self.target.len() - len;

        while self.pos <= last_start {
            let start = self.pos;
            let window = &self.target[start..start + len];
            if bounded_hamming(self.pattern, window, self.max_mismatches) <= self.max_mismatches {
                self.pos = start + len;
                return Some(Match::new(start, start + len));
            }
            self.pos += 1;
        }
        None
    }
}

/// Find all non-overlapping matches of `pattern` in `target` with at most
/// `max_mismatches` substitutions.
///
/// # Examples
///
/// ```
/// use virtual_pcr::matching::matcher::find;
/// use virtual_pcr::Match;
///
/// let hits = find(b"AAGATTCGATC", b"GATC", 1);
/// assert_eq!(hits, vec![Match::new(2, 6), Match::new(7, 11)]);
/// ```
#[must_use]
pub fn find(target: &[u8], pattern: &[u8], max_mismatches: usize) -> Vec<Match> {
    ApproximateMatcher::new(pattern, max_mismatches).find(target)
}
