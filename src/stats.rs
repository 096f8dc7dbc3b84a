use statrs::statistics::Statistics;
use crate::model::CompetitorStats;

/// Summarizes a snapshot of competitor prices. Population standard deviation
/// (divide by n): the entered competitors are the entire known market, not a
/// sample of one. An empty list is a valid state and returns all zeros,
/// guarded here because statrs yields NaN on empty input.
pub fn competitor_stats(prices: &[f64]) -> CompetitorStats {
    if prices.is_empty() {
        return CompetitorStats::default();
    }

    CompetitorStats {
        count: prices.len(),
        avg: prices.mean(),
        min: prices.min(),
        max: prices.max(),
        std_dev: prices.population_std_dev(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-2
    }

    #[test]
    fn empty_list_is_all_zeros() {
        let s = competitor_stats(&[]);
        assert_eq!(s, CompetitorStats::default());
        assert_eq!(s.count, 0);
        assert!(s.avg == 0.0 && s.min == 0.0 && s.max == 0.0 && s.std_dev == 0.0);
    }

    #[test]
    fn single_price_has_zero_spread() {
        let s = competitor_stats(&[145.0]);
        assert_eq!(s.count, 1);
        assert_eq!(s.avg, 145.0);
        assert_eq!(s.min, 145.0);
        assert_eq!(s.max, 145.0);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn summarizes_market_snapshot() {
        let s = competitor_stats(&[120.0, 150.0, 79.99, 249.0]);
        assert_eq!(s.count, 4);
        assert!(close(s.avg, 149.7475));
        assert!(close(s.min, 79.99));
        assert!(close(s.max, 249.0));
        // Population form: sqrt(mean of squared deviations).
        assert!(close(s.std_dev, 62.4543));
    }

    #[test]
    fn order_independent() {
        let a = competitor_stats(&[120.0, 150.0, 79.99, 249.0]);
        let b = competitor_stats(&[249.0, 79.99, 150.0, 120.0]);
        assert_eq!(a, b);
    }
}
