use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Supported report shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Transactions,
    Payments,
    Partners,
    Advertisers,
    Projections,
    Overview,
}

impl Default for ReportType {
    fn default() -> Self {
        ReportType::Overview
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportType::Transactions => write!(f, "transactions"),
            ReportType::Payments => write!(f, "payments"),
            ReportType::Partners => write!(f, "partners"),
            ReportType::Advertisers => write!(f, "advertisers"),
            ReportType::Projections => write!(f, "projections"),
            ReportType::Overview => write!(f, "overview"),
        }
    }
}

impl std::str::FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "transactions" => Ok(ReportType::Transactions),
            "payments" => Ok(ReportType::Payments),
            "partners" => Ok(ReportType::Partners),
            "advertisers" => Ok(ReportType::Advertisers),
            "projections" => Ok(ReportType::Projections),
            "overview" => Ok(ReportType::Overview),
            _ => Err(format!("Unknown report type: {}", s)),
        }
    }
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
    /// Accepted by the API but answered with 501; there is no PDF encoder.
    Pdf,
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat::Csv
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Xlsx => write!(f, "xlsx"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// Named shorthand for a reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangePreset {
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "month")]
    CurrentMonth,
}

impl Default for RangePreset {
    fn default() -> Self {
        RangePreset::ThirtyDays
    }
}

impl std::fmt::Display for RangePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangePreset::SevenDays => write!(f, "7d"),
            RangePreset::ThirtyDays => write!(f, "30d"),
            RangePreset::NinetyDays => write!(f, "90d"),
            RangePreset::YearToDate => write!(f, "ytd"),
            RangePreset::CurrentMonth => write!(f, "month"),
        }
    }
}

impl std::str::FromStr for RangePreset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "7d" => Ok(RangePreset::SevenDays),
            "30d" => Ok(RangePreset::ThirtyDays),
            "90d" => Ok(RangePreset::NinetyDays),
            "ytd" => Ok(RangePreset::YearToDate),
            "month" => Ok(RangePreset::CurrentMonth),
            _ => Err(format!("Unknown range preset: {}", s)),
        }
    }
}

/// Fully-parsed report request handed to the service layer
///
/// Explicit dates, when both are present, take precedence over `preset`.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub report_type: ReportType,
    pub format: ExportFormat,
    pub preset: RangePreset,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
