use crate::model::{KpiSet, SimulationResult};

/// Projects occupancy and revenue at a hypothetical rate under a constant
/// price elasticity (typically negative, e.g. -0.5). Linear approximation,
/// only meaningful near the current operating point. Returns None when the
/// baseline is unusable: a zero current rate or a non-finite occupancy.
pub fn simulate_price_change(
    kpis: &KpiSet,
    hypothetical_rate: f64,
    elasticity: f64,
) -> Option<SimulationResult> {
    let current_rate = kpis.your_rate;
    if current_rate == 0.0 || !kpis.occupancy.is_finite() {
        return None;
    }

    let price_change_percent = 100.0 * (hypothetical_rate - current_rate) / current_rate;
    let occupancy_change_percent = elasticity * price_change_percent;
    let predicted_occupancy = (kpis.occupancy + occupancy_change_percent).clamp(0.0, 100.0);

    let predicted_rooms_sold = (kpis.rooms_available * predicted_occupancy / 100.0).round();
    let predicted_room_revenue = predicted_rooms_sold * hypothetical_rate;
    let predicted_revpar = if kpis.rooms_available > 0.0 {
        predicted_room_revenue / kpis.rooms_available
    } else {
        0.0
    };

    Some(SimulationResult {
        predicted_occupancy,
        predicted_rooms_sold,
        predicted_room_revenue,
        predicted_revpar,
        price_change_percent,
        occupancy_change_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_kpis;
    use crate::model::OperationalInputs;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-2
    }

    fn baseline() -> KpiSet {
        compute_kpis(&OperationalInputs {
            rooms_available: 50.0,
            rooms_sold: 30.0,
            your_rate: 129.0,
            room_revenue: 3870.0,
            total_revenue: 4257.0,
            gross_profit: 1000.0,
        })
    }

    #[test]
    fn projects_demand_drop_on_price_rise() {
        let sim = simulate_price_change(&baseline(), 150.0, -0.5).unwrap();
        assert!(close(sim.price_change_percent, 16.28));
        assert!(close(sim.occupancy_change_percent, -8.14));
        assert!(close(sim.predicted_occupancy, 51.86));
        assert_eq!(sim.predicted_rooms_sold, 26.0);
        assert_eq!(sim.predicted_room_revenue, 3900.0);
        assert!(close(sim.predicted_revpar, 78.0));
    }

    #[test]
    fn zero_current_rate_has_no_baseline() {
        let kpis = compute_kpis(&OperationalInputs {
            rooms_available: 50.0,
            rooms_sold: 30.0,
            ..Default::default()
        });
        assert_eq!(simulate_price_change(&kpis, 150.0, -0.5), None);
    }

    #[test]
    fn non_finite_occupancy_has_no_baseline() {
        let mut kpis = baseline();
        kpis.occupancy = f64::NAN;
        assert_eq!(simulate_price_change(&kpis, 150.0, -0.5), None);
    }

    #[test]
    fn occupancy_stays_within_bounds() {
        // Extreme elasticity and price swing in both directions.
        let up = simulate_price_change(&baseline(), 1290.0, -5.0).unwrap();
        assert_eq!(up.predicted_occupancy, 0.0);
        assert_eq!(up.predicted_rooms_sold, 0.0);
        assert_eq!(up.predicted_room_revenue, 0.0);

        let down = simulate_price_change(&baseline(), 1.0, -5.0).unwrap();
        assert_eq!(down.predicted_occupancy, 100.0);
        assert_eq!(down.predicted_rooms_sold, 50.0);
    }

    #[test]
    fn unchanged_rate_reproduces_baseline() {
        let sim = simulate_price_change(&baseline(), 129.0, -0.5).unwrap();
        assert_eq!(sim.price_change_percent, 0.0);
        assert_eq!(sim.occupancy_change_percent, 0.0);
        assert!(close(sim.predicted_occupancy, 60.0));
        assert_eq!(sim.predicted_rooms_sold, 30.0);
    }
}
