use chrono::{DateTime, Datelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::time::month_label;
use crate::modules::reports::models::{MonthlyRevenue, ProjectionPoint};

/// Number of points in a forecast series
pub const PROJECTION_MONTHS: usize = 12;

/// Derives the average historical month-over-month growth rate and
/// compounds it into a 12-month forward revenue series
pub struct GrowthProjector;

impl GrowthProjector {
    /// Build the forecast anchored at `anchor`'s calendar month.
    ///
    /// `history` holds monthly completed revenue over the lookback window,
    /// in any order. Months strictly before `now`'s month carry their
    /// recorded revenue when the ledger has one; a past month with no
    /// activity stays `None` rather than being synthesized, so the same
    /// inputs always produce the same report. Months at or after `now`'s
    /// month are always `None`.
    pub fn project(
        history: &[MonthlyRevenue],
        anchor: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Vec<ProjectionPoint> {
        let mut months: Vec<MonthlyRevenue> = history.to_vec();
        months.sort_by_key(|m| (m.year, m.month));

        let average_growth = Self::average_growth(&months);
        let base_revenue = months.last().map(|m| m.revenue).unwrap_or(Decimal::ZERO);

        // The rate is derived once for the whole series, not per step
        let growth_label = format!("{:.2}%", average_growth * Decimal::ONE_HUNDRED);
        let current_month = (now.year(), now.month());

        let mut points = Vec::with_capacity(PROJECTION_MONTHS);
        let mut projected = base_revenue;
        for step in 0..PROJECTION_MONTHS {
            let (year, month) = shift_month(anchor.year(), anchor.month(), step as i32);

            let actual_revenue = if (year, month) < current_month {
                months
                    .iter()
                    .find(|m| m.year == year && m.month == month)
                    .map(|m| m.revenue)
            } else {
                None
            };

            points.push(ProjectionPoint {
                month: month_label(year, month),
                projected_revenue: projected
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
                actual_revenue,
                growth_rate: growth_label.clone(),
            });

            projected *= Decimal::ONE + average_growth;
        }

        points
    }

    /// Average growth across adjacent history pairs.
    ///
    /// Pairs whose earlier month had zero revenue are skipped so a dormant
    /// month cannot divide the rate by zero; with no usable pair at all
    /// the 5% default applies.
    fn average_growth(months: &[MonthlyRevenue]) -> Decimal {
        let mut sum = Decimal::ZERO;
        let mut count = 0u32;

        for pair in months.windows(2) {
            if pair[0].revenue > Decimal::ZERO {
                sum += (pair[1].revenue - pair[0].revenue) / pair[0].revenue;
                count += 1;
            }
        }

        if count > 0 {
            sum / Decimal::from(count)
        } else {
            Decimal::new(5, 2)
        }
    }
}

/// Calendar month `offset` months after `(year, month)`.
fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let zero_based = year * 12 + month as i32 - 1 + offset;
    (zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as u32)
}
