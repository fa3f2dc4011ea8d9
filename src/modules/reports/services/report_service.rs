use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use crate::core::Result;
use crate::modules::reports::models::{ReportRequest, ReportTable, ReportType, TimeRange};
use crate::modules::reports::repositories::RevenueReportRepository;
use crate::modules::reports::services::assembler;
use crate::modules::reports::services::exporter::{ExportedReport, ReportExporter};
use crate::modules::reports::services::growth_projector::GrowthProjector;
use crate::modules::reports::services::range_resolver::RangeResolver;

/// Days of ledger history fed into the growth projector
const PROJECTION_LOOKBACK_DAYS: i64 = 365;

/// Orchestrates the reporting pipeline: range resolution, record
/// retrieval, assembly and encoding
///
/// Stateless per request; every invocation reads from the store, computes
/// in memory and returns an encoded byte buffer.
pub struct ReportService {
    repository: Arc<dyn RevenueReportRepository>,
    max_export_rows: u32,
}

impl ReportService {
    pub fn new(repository: Arc<dyn RevenueReportRepository>, max_export_rows: u32) -> Self {
        Self {
            repository,
            max_export_rows,
        }
    }

    /// Generate an encoded report for the request, evaluated at `now`.
    ///
    /// # Errors
    /// Range validation failures and unsupported formats surface as client
    /// errors; a failed store query fails the whole request, there is no
    /// partial response.
    pub async fn generate(
        &self,
        request: &ReportRequest,
        now: DateTime<Utc>,
    ) -> Result<ExportedReport> {
        let range =
            RangeResolver::resolve(request.preset, request.start_date, request.end_date, now)?;

        info!(
            report_type = %request.report_type,
            format = %request.format,
            start = %range.start,
            end = %range.end,
            "generating revenue report"
        );

        let table = self.assemble(request.report_type, &range, now).await?;

        if table.is_empty() {
            warn!(
                report_type = %request.report_type,
                "report contains no rows for the resolved range"
            );
        }

        let stem = format!(
            "{}-report-{}",
            request.report_type,
            now.format("%Y-%m-%d")
        );

        ReportExporter::encode(&table, request.format, &stem)
    }

    async fn assemble(
        &self,
        report_type: ReportType,
        range: &TimeRange,
        now: DateTime<Utc>,
    ) -> Result<ReportTable> {
        let table = match report_type {
            ReportType::Transactions => {
                let entries = self
                    .repository
                    .ledger_entries(range, self.max_export_rows)
                    .await?;
                assembler::transactions_table(&entries)
            }
            ReportType::Payments => {
                let payments = self
                    .repository
                    .payments(range, self.max_export_rows)
                    .await?;
                assembler::payments_table(&payments)
            }
            ReportType::Partners => {
                let partners = self.repository.partner_earnings(range).await?;
                assembler::partners_table(&partners)
            }
            ReportType::Advertisers => {
                let advertisers = self.repository.advertiser_spend(range).await?;
                assembler::advertisers_table(&advertisers)
            }
            ReportType::Overview => {
                let days = self.repository.daily_revenue(range).await?;
                assembler::overview_table(&days)
            }
            ReportType::Projections => {
                let lookback = TimeRange::new(
                    range.start - Duration::days(PROJECTION_LOOKBACK_DAYS),
                    range.end,
                );
                let history = self.repository.monthly_revenue(&lookback).await?;
                let points = GrowthProjector::project(&history, range.end, now);
                assembler::projections_table(&points)
            }
        };

        Ok(table)
    }
}
