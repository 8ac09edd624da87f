use crate::core::types::{AmpliconCandidate, Match};

/// Inclusive bounds on amplicon size in bp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeWindow {
    pub lower: i64,
    pub upper: i64,
}

impl SizeWindow {
    #[must_use]
    pub fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    #[must_use]
    pub fn contains(&self, size: i64) -> bool {
        (self.lower..=self.upper).contains(&size)
    }
}

#[inline]
fn to_i64(pos: usize) -> i64 {
    i64::try_from(pos).unwrap_or(i64::MAX)
}

/// Pair forward-role match starts with reverse-role match ends.
///
/// Every combination is tried; a pair is kept when `end - start` falls inside
/// `window`. Output order is forward matches (outer) then reverse matches
/// (inner), each in the order they were found. Non-positive sizes are never
/// inside a valid window and drop out with the bound check.
#[must_use]
pub fn pair(forward: &[Match], reverse: &[Match], window: SizeWindow) -> Vec<AmpliconCandidate> {
    forward
        .iter()
        .flat_map(|f| {
            reverse.iter().filter_map(move |r| {
                let size = to_i64(r.end) - to_i64(f.start);
                window
                    .contains(size)
                    .then(|| AmpliconCandidate::new(f.start, size))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(start: usize, end: usize) -> Match {
        Match::new(start, end)
    }

    #[test]
    fn test_single_pair() {
        let result = pair(&[m(10, 18)], &[m(27, 35)], SizeWindow::new(1, 100));
        assert_eq!(result, vec![AmpliconCandidate::new(10, 25)]);
    }

    #[test]
    fn test_cross_product_order() {
        let forward = [m(0, 4), m(10, 14)];
        let reverse = [m(20, 24), m(40, 44)];
        let result = pair(&forward, &reverse, SizeWindow::new(1, 100));
        assert_eq!(
            result,
            vec![
                AmpliconCandidate::new(0, 24),
                AmpliconCandidate::new(0, 44),
                AmpliconCandidate::new(10, 14),
                AmpliconCandidate::new(10, 34),
            ]
        );
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let forward = [m(0, 4)];
        let reverse = [m(6, 10), m(16, 20), m(26, 30)];
        let result = pair(&forward, &reverse, SizeWindow::new(10, 20));
        assert_eq!(
            result,
            vec![AmpliconCandidate::new(0, 10), AmpliconCandidate::new(0, 20)]
        );
    }

    #[test]
    fn test_upstream_reverse_is_excluded() {
        // Reverse site ends before (or at) the forward start: negative/zero sizes
        let result = pair(&[m(50, 58)], &[m(10, 18), m(42, 50)], SizeWindow::new(1, 1000));
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(pair(&[], &[m(0, 4)], SizeWindow::new(1, 10)).is_empty());
        assert!(pair(&[m(0, 4)], &[], SizeWindow::new(1, 10)).is_empty());
    }

    #[test]
    fn test_sizes_always_within_window() {
        let forward: Vec<Match> = (0..20).map(|i| m(i * 7, i * 7 + 5)).collect();
        let reverse: Vec<Match> = (0..20).map(|i| m(i * 11, i * 11 + 5)).collect();
        let window = SizeWindow::new(15, 60);
        let result = pair(&forward, &reverse, window);
        assert!(!result.is_empty());
        assert!(result.iter().all(|c| window.contains(c.size)));
    }
}
