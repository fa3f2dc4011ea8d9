use chrono::{DateTime, Utc};

use crate::core::time::{format_date, format_timestamp};
use crate::modules::reports::models::{
    AdvertiserSpendSummary, CellValue, DailyRevenue, LedgerEntry, PartnerEarningsSummary,
    PaymentRecord, ProjectionPoint, ReportTable,
};

// One assembler per report type; each maps the adapter's records into the
// column layout the console's export screens expect. Column order is part
// of the wire contract.

pub fn transactions_table(entries: &[LedgerEntry]) -> ReportTable {
    let mut table = ReportTable::new(&[
        "ID",
        "Type",
        "Amount",
        "Currency",
        "Status",
        "Date",
        "Processed At",
        "Reference",
        "Wallet ID",
        "Payment Method ID",
        "Payment Method Type",
        "Payment Method Last 4",
    ]);

    for entry in entries {
        table.push_row(vec![
            CellValue::text(&entry.id),
            CellValue::text(entry.kind.to_string()),
            CellValue::Number(entry.amount),
            CellValue::text(&entry.currency),
            CellValue::text(entry.status.to_string()),
            CellValue::text(format_timestamp(entry.occurred_at)),
            timestamp_cell(entry.processed_at),
            CellValue::opt_text(entry.reference.as_deref()),
            CellValue::opt_text(entry.wallet_id.as_deref()),
            CellValue::opt_text(entry.payment_method_id.as_deref()),
            CellValue::opt_text(entry.payment_method_type.as_deref()),
            CellValue::opt_text(entry.payment_method_last_four.as_deref()),
        ]);
    }

    table
}

pub fn payments_table(payments: &[PaymentRecord]) -> ReportTable {
    let mut table = ReportTable::new(&[
        "ID",
        "Type",
        "Amount",
        "Currency",
        "Status",
        "Date Initiated",
        "Date Completed",
        "Transaction ID",
        "Receipt URL",
        "Payment Method Type",
        "Advertiser ID",
        "Partner ID",
        "Advertiser Name",
        "Partner Name",
    ]);

    for payment in payments {
        table.push_row(vec![
            CellValue::text(&payment.id),
            CellValue::text(&payment.payment_type),
            CellValue::Number(payment.amount),
            CellValue::text(&payment.currency),
            CellValue::text(&payment.status),
            CellValue::text(format_timestamp(payment.initiated_at)),
            timestamp_cell(payment.completed_at),
            CellValue::opt_text(payment.transaction_id.as_deref()),
            CellValue::opt_text(payment.receipt_url.as_deref()),
            CellValue::opt_text(payment.payment_method_type.as_deref()),
            CellValue::opt_text(payment.advertiser_id.as_deref()),
            CellValue::opt_text(payment.partner_id.as_deref()),
            CellValue::opt_text(payment.advertiser_name.as_deref()),
            CellValue::opt_text(payment.partner_name.as_deref()),
        ]);
    }

    table
}

pub fn partners_table(partners: &[PartnerEarningsSummary]) -> ReportTable {
    let mut table = ReportTable::new(&[
        "ID",
        "Company Name",
        "Commission Rate",
        "Revenue",
        "Impressions",
        "Engagements",
        "Created At",
    ]);

    for partner in partners {
        table.push_row(vec![
            CellValue::text(&partner.id),
            CellValue::text(&partner.company_name),
            CellValue::Number(partner.commission_rate),
            CellValue::Number(partner.total_amount),
            CellValue::Integer(partner.total_impressions),
            CellValue::Integer(partner.total_engagements),
            CellValue::text(format_timestamp(partner.created_at)),
        ]);
    }

    table
}

pub fn advertisers_table(advertisers: &[AdvertiserSpendSummary]) -> ReportTable {
    let mut table = ReportTable::new(&[
        "ID",
        "Company Name",
        "Total Campaigns",
        "Total Budget",
        "Total Payments",
        "Created At",
    ]);

    for advertiser in advertisers {
        table.push_row(vec![
            CellValue::text(&advertiser.id),
            CellValue::text(&advertiser.company_name),
            CellValue::Integer(advertiser.total_campaigns),
            CellValue::Number(advertiser.total_budget),
            CellValue::Number(advertiser.total_payments),
            CellValue::text(format_timestamp(advertiser.created_at)),
        ]);
    }

    table
}

pub fn overview_table(days: &[DailyRevenue]) -> ReportTable {
    let mut table = ReportTable::new(&["Date", "Revenue"]);

    for day in days {
        table.push_row(vec![
            CellValue::text(format_date(day.day)),
            CellValue::Number(day.revenue),
        ]);
    }

    table
}

pub fn projections_table(points: &[ProjectionPoint]) -> ReportTable {
    let mut table = ReportTable::new(&[
        "Month",
        "Projected Revenue",
        "Actual Revenue",
        "Monthly Growth Rate",
    ]);

    for point in points {
        table.push_row(vec![
            CellValue::text(&point.month),
            CellValue::Number(point.projected_revenue),
            CellValue::opt_number(point.actual_revenue),
            CellValue::text(&point.growth_rate),
        ]);
    }

    table
}

fn timestamp_cell(instant: Option<DateTime<Utc>>) -> CellValue {
    match instant {
        Some(t) => CellValue::Text(format_timestamp(t)),
        None => CellValue::Empty,
    }
}
