use crate::model::{CompetitorStats, KpiSet, Recommendation};

// Heuristic thresholds. Tunable parameters, not laws: the occupancy bands and
// clamp ranges have no empirical calibration behind them.
const LOW_OCCUPANCY: f64 = 60.0;
const HIGH_OCCUPANCY: f64 = 85.0;
const MIN_REDUCTION_PCT: f64 = 5.0;
const MAX_REDUCTION_PCT: f64 = 15.0;
const MIN_INCREASE_PCT: f64 = 2.0;
const MAX_INCREASE_PCT: f64 = 8.0;

/// Turns one KPI set plus the competitor summary into a single rate
/// suggestion. Rules are evaluated top-down, first match wins; order matters
/// and is part of the contract. Only a clear demand mismatch relative to the
/// market triggers a change, everything else holds the current rate.
pub fn recommend_rate(kpis: &KpiSet, stats: &CompetitorStats) -> Recommendation {
    let rate = kpis.your_rate;
    let occupancy = kpis.occupancy;

    if kpis.rooms_available <= 0.0 {
        return Recommendation::insufficient_data();
    }

    if occupancy < LOW_OCCUPANCY && rate > stats.avg {
        // Rooms sitting empty while priced above the market: come down.
        let diff_percent = 100.0 * (rate - stats.avg) / rate;
        let reduction = diff_percent.clamp(MIN_REDUCTION_PCT, MAX_REDUCTION_PCT);
        return Recommendation {
            suggested_rate: Some(rate * (1.0 - reduction / 100.0)),
            change_percent: -reduction,
            reason: format!(
                "Occupancy is {:.1}% (below {:.0}%) and your rate is above the \
                 competitor average of {:.2}. Lowering by {:.1}% should recover demand.",
                occupancy, LOW_OCCUPANCY, stats.avg, reduction
            ),
        };
    }

    if occupancy > HIGH_OCCUPANCY && rate < stats.avg {
        // Nearly full while underpricing the market: there is headroom.
        let gap_percent = 100.0 * (stats.avg - rate) / rate;
        let increase = gap_percent.clamp(MIN_INCREASE_PCT, MAX_INCREASE_PCT);
        return Recommendation {
            suggested_rate: Some(rate * (1.0 + increase / 100.0)),
            change_percent: increase,
            reason: format!(
                "Occupancy is {:.1}% (above {:.0}%) and your rate is below the \
                 competitor average of {:.2}. Raising by {:.1}% captures the headroom.",
                occupancy, HIGH_OCCUPANCY, stats.avg, increase
            ),
        };
    }

    if (rate - stats.avg).abs() <= stats.std_dev {
        return Recommendation {
            suggested_rate: Some(rate),
            change_percent: 0.0,
            reason: format!(
                "Your rate is within one standard deviation ({:.2}) of the \
                 competitor average {:.2}. Hold at the current rate.",
                stats.std_dev, stats.avg
            ),
        };
    }

    Recommendation {
        suggested_rate: Some(rate),
        change_percent: 0.0,
        reason: format!(
            "Occupancy at {:.1}% shows no clear demand mismatch; no aggressive \
             change is warranted despite the gap to the market average of {:.2}.",
            occupancy, stats.avg
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_kpis;
    use crate::model::OperationalInputs;
    use crate::stats::competitor_stats;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn kpis_with(rooms_available: f64, rooms_sold: f64, your_rate: f64) -> KpiSet {
        compute_kpis(&OperationalInputs {
            rooms_available,
            rooms_sold,
            your_rate,
            room_revenue: rooms_sold * your_rate,
            total_revenue: rooms_sold * your_rate,
            gross_profit: 0.0,
        })
    }

    fn market() -> CompetitorStats {
        competitor_stats(&[120.0, 150.0, 79.99, 249.0])
    }

    #[test]
    fn no_rooms_means_no_suggestion() {
        let rec = recommend_rate(&kpis_with(0.0, 0.0, 500.0), &market());
        assert_eq!(rec.suggested_rate, None);
        assert_eq!(rec.change_percent, 0.0);
        assert!(rec.reason.contains("Insufficient data"));
    }

    #[test]
    fn holds_when_within_one_std_dev() {
        // 60% occupancy is not below 60, so the lower-rate rule must not fire;
        // |129 - 149.75| is well inside the std dev of ~62.45.
        let rec = recommend_rate(&kpis_with(50.0, 30.0, 129.0), &market());
        assert_eq!(rec.suggested_rate, Some(129.0));
        assert_eq!(rec.change_percent, 0.0);
        assert!(rec.reason.contains("standard deviation"));
    }

    #[test]
    fn lowers_when_empty_and_overpriced() {
        // 58% occupancy at 200 vs avg 149.75: gap is 25.1%, clamped to 15%.
        let rec = recommend_rate(&kpis_with(50.0, 29.0, 200.0), &market());
        assert!(close(rec.change_percent, -15.0));
        assert!(close(rec.suggested_rate.unwrap(), 170.0));
        assert!(rec.reason.contains("Lowering"));
    }

    #[test]
    fn reduction_floors_at_five_percent() {
        // Rate barely above average: candidate reduction under 5% floors at 5.
        let stats = CompetitorStats { count: 3, avg: 99.0, min: 90.0, max: 110.0, std_dev: 8.0 };
        let rec = recommend_rate(&kpis_with(50.0, 10.0, 100.0), &stats);
        assert!(close(rec.change_percent, -5.0));
        assert!(close(rec.suggested_rate.unwrap(), 95.0));
    }

    #[test]
    fn raises_when_full_and_underpriced() {
        // 90% occupancy at 100 vs avg 149.75: gap ~49.7%, clamped to 8%.
        let rec = recommend_rate(&kpis_with(50.0, 45.0, 100.0), &market());
        assert!(close(rec.change_percent, 8.0));
        assert!(close(rec.suggested_rate.unwrap(), 108.0));
        assert!(rec.reason.contains("Raising"));
    }

    #[test]
    fn increase_floors_at_two_percent() {
        let stats = CompetitorStats { count: 2, avg: 101.0, min: 100.0, max: 102.0, std_dev: 1.0 };
        let rec = recommend_rate(&kpis_with(50.0, 45.0, 100.0), &stats);
        assert!(close(rec.change_percent, 2.0));
        assert!(close(rec.suggested_rate.unwrap(), 102.0));
    }

    #[test]
    fn holds_without_aggression_outside_one_std_dev() {
        // Mid-band occupancy, rate far from a tight market: still hold.
        let stats = CompetitorStats { count: 3, avg: 100.0, min: 95.0, max: 105.0, std_dev: 4.0 };
        let rec = recommend_rate(&kpis_with(50.0, 35.0, 300.0), &stats);
        assert_eq!(rec.suggested_rate, Some(300.0));
        assert_eq!(rec.change_percent, 0.0);
        assert!(rec.reason.contains("no aggressive"));
    }

    #[test]
    fn occupancy_rules_take_priority_over_std_dev_band() {
        // Within one std dev of the market, but occupancy is low and the rate
        // is above average: rule order says lower, not hold.
        let stats = CompetitorStats { count: 3, avg: 140.0, min: 100.0, max: 180.0, std_dev: 50.0 };
        let rec = recommend_rate(&kpis_with(50.0, 20.0, 150.0), &stats);
        assert!(rec.change_percent < 0.0);
    }

    #[test]
    fn empty_market_still_recommends() {
        // Zero competitors: avg 0, any positive rate reads as overpriced when
        // occupancy is low, and the reduction caps at 15%.
        let rec = recommend_rate(&kpis_with(50.0, 10.0, 180.0), &competitor_stats(&[]));
        assert!(close(rec.change_percent, -15.0));
        assert!(close(rec.suggested_rate.unwrap(), 153.0));
    }
}
