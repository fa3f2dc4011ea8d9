mod report_controller;

pub use report_controller::{configure, get_revenue_report, RevenueReportQuery};
