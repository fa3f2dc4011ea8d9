use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month's entry in the 12-month revenue forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Calendar month label, e.g. "Mar 2026"
    pub month: String,

    /// Compounded forecast revenue, rounded to the whole currency unit
    pub projected_revenue: Decimal,

    /// Recorded revenue for months already in the past, when known.
    /// Future months and past months without ledger activity stay `None`
    /// so the forecast output is reproducible.
    pub actual_revenue: Option<Decimal>,

    /// Average month-over-month growth applied across the series,
    /// formatted to two decimals with a `%` suffix
    pub growth_rate: String,
}
