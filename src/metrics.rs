use crate::model::{KpiSet, OperationalInputs};

/// Derives the standard hospitality KPIs from one set of operational figures.
/// Total function: every ratio falls back to 0.0 when its denominator is
/// zero, so the output never contains NaN or infinities. No rounding here;
/// the UI formats to two decimals.
pub fn compute_kpis(inputs: &OperationalInputs) -> KpiSet {
    let rooms_available = inputs.rooms_available;
    let rooms_sold = inputs.rooms_sold;

    let per_sold = |amount: f64| if rooms_sold > 0.0 { amount / rooms_sold } else { 0.0 };
    let per_available = |amount: f64| {
        if rooms_available > 0.0 { amount / rooms_available } else { 0.0 }
    };

    KpiSet {
        rooms_available,
        rooms_sold,
        your_rate: inputs.your_rate,
        room_revenue: inputs.room_revenue,
        total_revenue: inputs.total_revenue,
        gross_profit: inputs.gross_profit,

        adr: per_sold(inputs.room_revenue),
        revpar: per_available(inputs.room_revenue),
        occupancy: per_available(rooms_sold) * 100.0,
        goppar: per_available(inputs.gross_profit),
        trevpar: per_available(inputs.total_revenue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample_inputs() -> OperationalInputs {
        OperationalInputs {
            rooms_available: 50.0,
            rooms_sold: 30.0,
            your_rate: 129.0,
            room_revenue: 3870.0,
            total_revenue: 4257.0,
            gross_profit: 1000.0,
        }
    }

    #[test]
    fn derives_standard_kpis() {
        let k = compute_kpis(&sample_inputs());
        assert!(close(k.adr, 129.0));
        assert!(close(k.revpar, 77.4));
        assert!(close(k.occupancy, 60.0));
        assert!(close(k.goppar, 20.0));
        assert!(close(k.trevpar, 85.14));
    }

    #[test]
    fn zero_denominators_yield_zero_not_nan() {
        let k = compute_kpis(&OperationalInputs {
            rooms_available: 0.0,
            rooms_sold: 0.0,
            your_rate: 99.0,
            room_revenue: 1234.0,
            total_revenue: 5678.0,
            gross_profit: -250.0,
        });
        assert_eq!(k.adr, 0.0);
        assert_eq!(k.revpar, 0.0);
        assert_eq!(k.occupancy, 0.0);
        assert_eq!(k.goppar, 0.0);
        assert_eq!(k.trevpar, 0.0);
        for v in [k.adr, k.revpar, k.occupancy, k.goppar, k.trevpar] {
            assert!(v.is_finite());
        }
    }

    #[test]
    fn sold_without_available_still_defined() {
        // rooms_sold > rooms_available is not enforced; math stays finite.
        let k = compute_kpis(&OperationalInputs {
            rooms_available: 0.0,
            rooms_sold: 10.0,
            room_revenue: 500.0,
            ..Default::default()
        });
        assert_eq!(k.adr, 50.0);
        assert_eq!(k.occupancy, 0.0);
        assert_eq!(k.revpar, 0.0);
    }

    #[test]
    fn pure_and_repeatable() {
        let inputs = sample_inputs();
        assert_eq!(compute_kpis(&inputs), compute_kpis(&inputs));
    }
}
