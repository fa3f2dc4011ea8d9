pub mod projection;
pub mod records;
pub mod report_table;
pub mod request;
pub mod time_range;

pub use projection::ProjectionPoint;
pub use records::{
    AdvertiserSpendSummary, DailyRevenue, LedgerEntry, LedgerEntryKind, LedgerEntryStatus,
    MonthlyRevenue, PartnerEarningsSummary, PaymentRecord,
};
pub use report_table::{CellValue, ReportTable};
pub use request::{ExportFormat, RangePreset, ReportRequest, ReportType};
pub use time_range::TimeRange;
