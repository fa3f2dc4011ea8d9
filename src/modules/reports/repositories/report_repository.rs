use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::reports::models::{
    AdvertiserSpendSummary, DailyRevenue, LedgerEntry, MonthlyRevenue, PartnerEarningsSummary,
    PaymentRecord, TimeRange,
};

/// Record source for the revenue reporting pipeline
///
/// One query per report type, each a read-only view over the console's
/// relational store parameterized by the resolved time range. Bounds are
/// inclusive on both ends.
#[async_trait]
pub trait RevenueReportRepository: Send + Sync {
    /// Ledger entries that occurred in the range, payment-method summary
    /// attached, newest first. Capped at `limit` rows.
    async fn ledger_entries(&self, range: &TimeRange, limit: u32) -> Result<Vec<LedgerEntry>>;

    /// Payments initiated in the range, counterparty names attached,
    /// newest first. Capped at `limit` rows.
    async fn payments(&self, range: &TimeRange, limit: u32) -> Result<Vec<PaymentRecord>>;

    /// All partners, with earnings whose period ended in the range summed
    /// per partner. Partners without matching earnings report zeroes.
    async fn partner_earnings(&self, range: &TimeRange) -> Result<Vec<PartnerEarningsSummary>>;

    /// All advertisers, with lifetime campaign totals and completed
    /// payments summed within the range.
    async fn advertiser_spend(&self, range: &TimeRange) -> Result<Vec<AdvertiserSpendSummary>>;

    /// Completed deposit/payment revenue grouped by calendar day,
    /// ascending.
    async fn daily_revenue(&self, range: &TimeRange) -> Result<Vec<DailyRevenue>>;

    /// Completed deposit/payment revenue grouped by calendar month,
    /// ascending. Callers pass the extended lookback window.
    async fn monthly_revenue(&self, range: &TimeRange) -> Result<Vec<MonthlyRevenue>>;
}

pub struct MySqlReportRepository {
    pool: MySqlPool,
}

impl MySqlReportRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevenueReportRepository for MySqlReportRepository {
    async fn ledger_entries(&self, range: &TimeRange, limit: u32) -> Result<Vec<LedgerEntry>> {
        let entries = sqlx::query_as::<_, LedgerEntry>(
            r#"
            SELECT
                le.id, le.kind, le.amount, le.currency, le.status,
                le.occurred_at, le.processed_at, le.reference, le.wallet_id,
                pm.id AS payment_method_id,
                pm.method_type AS payment_method_type,
                pm.last_four AS payment_method_last_four
            FROM ledger_entries le
            LEFT JOIN payment_methods pm ON pm.id = le.payment_method_id
            WHERE le.occurred_at >= ? AND le.occurred_at <= ?
            ORDER BY le.occurred_at DESC
            LIMIT ?
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn payments(&self, range: &TimeRange, limit: u32) -> Result<Vec<PaymentRecord>> {
        let payments = sqlx::query_as::<_, PaymentRecord>(
            r#"
            SELECT
                p.id, p.payment_type, p.amount, p.currency, p.status,
                p.initiated_at, p.completed_at, p.transaction_id,
                p.receipt_url, p.payment_method_type,
                p.advertiser_id, p.partner_id,
                a.company_name AS advertiser_name,
                pr.company_name AS partner_name
            FROM payments p
            LEFT JOIN advertisers a ON a.id = p.advertiser_id
            LEFT JOIN partners pr ON pr.id = p.partner_id
            WHERE p.initiated_at >= ? AND p.initiated_at <= ?
            ORDER BY p.initiated_at DESC
            LIMIT ?
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    async fn partner_earnings(&self, range: &TimeRange) -> Result<Vec<PartnerEarningsSummary>> {
        let partners = sqlx::query_as::<_, PartnerEarningsSummary>(
            r#"
            SELECT
                pr.id, pr.company_name, pr.commission_rate, pr.created_at,
                COALESCE(SUM(pe.amount), 0) AS total_amount,
                CAST(COALESCE(SUM(pe.impressions), 0) AS SIGNED) AS total_impressions,
                CAST(COALESCE(SUM(pe.engagements), 0) AS SIGNED) AS total_engagements
            FROM partners pr
            LEFT JOIN partner_earnings pe
                ON pe.partner_id = pr.id
                AND pe.period_end >= ? AND pe.period_end <= ?
            GROUP BY pr.id, pr.company_name, pr.commission_rate, pr.created_at
            ORDER BY pr.company_name ASC
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        Ok(partners)
    }

    async fn advertiser_spend(&self, range: &TimeRange) -> Result<Vec<AdvertiserSpendSummary>> {
        let advertisers = sqlx::query_as::<_, AdvertiserSpendSummary>(
            r#"
            SELECT
                a.id, a.company_name, a.created_at,
                CAST(COALESCE(c.campaign_count, 0) AS SIGNED) AS total_campaigns,
                COALESCE(c.total_budget, 0) AS total_budget,
                COALESCE(p.total_payments, 0) AS total_payments
            FROM advertisers a
            LEFT JOIN (
                SELECT advertiser_id, COUNT(*) AS campaign_count, SUM(budget) AS total_budget
                FROM campaigns
                GROUP BY advertiser_id
            ) c ON c.advertiser_id = a.id
            LEFT JOIN (
                SELECT advertiser_id, SUM(amount) AS total_payments
                FROM payments
                WHERE status = 'completed'
                  AND initiated_at >= ? AND initiated_at <= ?
                GROUP BY advertiser_id
            ) p ON p.advertiser_id = a.id
            ORDER BY a.company_name ASC
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        Ok(advertisers)
    }

    async fn daily_revenue(&self, range: &TimeRange) -> Result<Vec<DailyRevenue>> {
        let days = sqlx::query_as::<_, DailyRevenue>(
            r#"
            SELECT DATE(occurred_at) AS day, SUM(amount) AS revenue
            FROM ledger_entries
            WHERE occurred_at >= ? AND occurred_at <= ?
              AND status = 'completed'
              AND kind IN ('deposit', 'payment')
            GROUP BY DATE(occurred_at)
            ORDER BY day ASC
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        Ok(days)
    }

    async fn monthly_revenue(&self, range: &TimeRange) -> Result<Vec<MonthlyRevenue>> {
        let rows = sqlx::query_as::<_, MonthlyRevenueRow>(
            r#"
            SELECT DATE_FORMAT(occurred_at, '%Y-%m') AS month_key, SUM(amount) AS revenue
            FROM ledger_entries
            WHERE occurred_at >= ? AND occurred_at <= ?
              AND status = 'completed'
              AND kind IN ('deposit', 'payment')
            GROUP BY month_key
            ORDER BY month_key ASC
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let (year, month) = parse_month_key(&row.month_key).ok_or_else(|| {
                    AppError::internal(format!(
                        "Malformed month key from store: '{}'",
                        row.month_key
                    ))
                })?;
                Ok(MonthlyRevenue {
                    year,
                    month,
                    revenue: row.revenue,
                })
            })
            .collect()
    }
}

/// Grouped monthly revenue as it comes off the wire, keyed `YYYY-MM`
#[derive(Debug, sqlx::FromRow)]
struct MonthlyRevenueRow {
    month_key: String,
    revenue: Decimal,
}

fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (year, month) = key.split_once('-')?;
    let year = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}
