use actix_web::{error::ResponseError, web, HttpMessage, HttpRequest, HttpResponse};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::core::{AppError, Result};
use crate::middleware::auth::{AdminIdentity, UserRole};
use crate::modules::reports::models::{ExportFormat, RangePreset, ReportRequest, ReportType};
use crate::modules::reports::services::{ExportedReport, ReportService};

/// Query parameters for the revenue report endpoint
#[derive(Debug, Deserialize)]
pub struct RevenueReportQuery {
    /// Named range preset (7d, 30d, 90d, ytd, month); defaults to 30d
    #[serde(default)]
    pub range: Option<String>,

    /// Explicit start date (YYYY-MM-DD); with endDate, overrides `range`
    #[serde(default, rename = "startDate")]
    pub start_date: Option<String>,

    /// Explicit end date (YYYY-MM-DD), inclusive
    #[serde(default, rename = "endDate")]
    pub end_date: Option<String>,

    /// Export format (csv, xlsx, pdf); defaults to csv
    #[serde(default)]
    pub format: Option<String>,

    /// Report shape; defaults to overview
    #[serde(default, rename = "type")]
    pub report_type: Option<String>,
}

/// GET /reports/revenue
///
/// Resolves the requested window, assembles the chosen report shape and
/// streams it back as a file attachment. Admin-only.
pub async fn get_revenue_report(
    req: HttpRequest,
    service: web::Data<ReportService>,
    query: web::Query<RevenueReportQuery>,
) -> HttpResponse {
    match handle_get_revenue_report(&req, &service, &query).await {
        Ok(report) => HttpResponse::Ok()
            .content_type(report.content_type)
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", report.filename),
            ))
            .body(report.bytes),
        Err(e) => e.error_response(),
    }
}

async fn handle_get_revenue_report(
    req: &HttpRequest,
    service: &ReportService,
    query: &RevenueReportQuery,
) -> Result<ExportedReport> {
    // SessionAuth has resolved the identity by the time we get here; a
    // missing extension means the request never went through it.
    let identity = req
        .extensions()
        .get::<AdminIdentity>()
        .cloned()
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    if identity.role != UserRole::Admin {
        warn!(
            user_id = %identity.user_id,
            role = %identity.role,
            "non-admin account attempted a report export"
        );
        return Err(AppError::forbidden("Admin access required"));
    }

    let request = parse_request(query)?;
    service.generate(&request, Utc::now()).await
}

/// Decode the raw query string into a typed request, applying defaults.
fn parse_request(query: &RevenueReportQuery) -> Result<ReportRequest> {
    let report_type = match query.report_type.as_deref() {
        None => ReportType::default(),
        Some(raw) => raw.parse().map_err(AppError::Validation)?,
    };

    let format = match query.format.as_deref() {
        None => ExportFormat::default(),
        Some(raw) => raw.parse().map_err(|_| {
            warn!(format = raw, "rejected unknown export format");
            AppError::UnsupportedFormat
        })?,
    };

    let preset = match query.range.as_deref() {
        None => RangePreset::default(),
        Some(raw) => raw.parse().map_err(AppError::Validation)?,
    };

    Ok(ReportRequest {
        report_type,
        format,
        preset,
        start_date: parse_date(query.start_date.as_deref(), "startDate")?,
        end_date: parse_date(query.end_date.as_deref(), "endDate")?,
    })
}

fn parse_date(raw: Option<&str>, name: &str) -> Result<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::validation(format!(
                    "Invalid {} format: '{}'. Expected YYYY-MM-DD",
                    name, raw
                ))
            }),
    }
}

/// Configure routes for the reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/reports").route("/revenue", web::get().to(get_revenue_report)));
}
