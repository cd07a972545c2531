use serde::{Deserialize, Serialize};

/// Aggregate of final totals over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub games: usize,
    pub max: u32,
    pub min: u32,
    pub mean: f64,
    pub median: f64,
    pub stddev: f64,
}

impl Summary {
    pub fn from_scores(scores: &[u32]) -> Self {
        if scores.is_empty() {
            return Self::default();
        }

        let n = scores.len();
        let mut sorted = scores.to_vec();
        sorted.sort_unstable();

        let sum: u64 = sorted.iter().map(|&s| s as u64).sum();
        let mean = sum as f64 / n as f64;

        let median = if n % 2 == 1 {
            sorted[n / 2] as f64
        } else {
            (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
        };

        // Population variance
        let variance = sorted
            .iter()
            .map(|&s| {
                let d = s as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n as f64;

        Self {
            games: n,
            max: sorted[n - 1],
            min: sorted[0],
            mean,
            median,
            stddev: variance.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(Summary::from_scores(&[]), Summary::default());
    }

    #[test]
    fn known_values() {
        let s = Summary::from_scores(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert_eq!(s.games, 8);
        assert_eq!(s.max, 9);
        assert_eq!(s.min, 2);
        assert!((s.mean - 5.0).abs() < 1e-9);
        assert!((s.median - 4.5).abs() < 1e-9);
        assert!((s.stddev - 2.0).abs() < 1e-9);
    }

    #[test]
    fn odd_count_median_is_middle_element() {
        let s = Summary::from_scores(&[300, 100, 200]);
        assert_eq!(s.median, 200.0);
        assert_eq!(s.mean, 200.0);
    }
}
