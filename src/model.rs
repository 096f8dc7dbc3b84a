use serde::{Serialize, Deserialize};

/// One calculation's worth of operational figures, as entered in the form.
/// Fields default to 0.0 rather than carrying a "missing" sentinel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OperationalInputs {
    pub rooms_available: f64,
    pub rooms_sold: f64,
    pub your_rate: f64,
    pub room_revenue: f64,
    pub total_revenue: f64,
    pub gross_profit: f64,
}

/// Raw inputs plus the five derived ratios. Every ratio is 0.0 whenever its
/// denominator is zero, so the set is always finite.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSet {
    pub rooms_available: f64,
    pub rooms_sold: f64,
    pub your_rate: f64,
    pub room_revenue: f64,
    pub total_revenue: f64,
    pub gross_profit: f64,

    pub adr: f64,
    pub revpar: f64,
    pub occupancy: f64,
    pub goppar: f64,
    pub trevpar: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorEntry {
    pub name: String,
    pub price: f64,
}

/// Summary of the competitor price list at the moment of computation.
/// An empty list yields the all-zero value, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompetitorStats {
    pub count: usize,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// None only when there is no baseline to reason from (zero rooms).
    pub suggested_rate: Option<f64>,
    /// Signed; 0.0 when no change is suggested.
    pub change_percent: f64,
    pub reason: String,
}

impl Recommendation {
    pub fn insufficient_data() -> Self {
        Recommendation {
            suggested_rate: None,
            change_percent: 0.0,
            reason: "Insufficient data: rooms available is zero, so occupancy cannot be assessed.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Clamped to [0, 100].
    pub predicted_occupancy: f64,
    /// Rounded to a whole number of rooms.
    pub predicted_rooms_sold: f64,
    pub predicted_room_revenue: f64,
    pub predicted_revpar: f64,
    pub price_change_percent: f64,
    pub occupancy_change_percent: f64,
}

/// The single place where form text becomes a number. Empty, whitespace, or
/// non-numeric input coerces to 0.0.
pub fn coerce(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(0.0)
}

/// Coercion for fields that cannot meaningfully be negative (counts, rates,
/// revenues). Gross profit is the one field that skips this.
pub fn coerce_non_negative(field: &str) -> f64 {
    coerce(field).max(0.0)
}
