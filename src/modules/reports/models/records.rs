use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of monetary movement recorded in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(20)", rename_all = "lowercase")]
pub enum LedgerEntryKind {
    /// Funds added to a wallet
    #[serde(rename = "deposit")]
    Deposit,

    /// Campaign payment drawn from an advertiser wallet
    #[serde(rename = "payment")]
    Payment,

    /// Funds paid out of a wallet
    #[serde(rename = "withdrawal")]
    Withdrawal,

    /// Reversal of an earlier movement
    #[serde(rename = "refund")]
    Refund,
}

impl std::fmt::Display for LedgerEntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerEntryKind::Deposit => write!(f, "deposit"),
            LedgerEntryKind::Payment => write!(f, "payment"),
            LedgerEntryKind::Withdrawal => write!(f, "withdrawal"),
            LedgerEntryKind::Refund => write!(f, "refund"),
        }
    }
}

impl std::str::FromStr for LedgerEntryKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(LedgerEntryKind::Deposit),
            "payment" => Ok(LedgerEntryKind::Payment),
            "withdrawal" => Ok(LedgerEntryKind::Withdrawal),
            "refund" => Ok(LedgerEntryKind::Refund),
            _ => Err(format!("Invalid ledger entry kind: {}", s)),
        }
    }
}

/// Settlement status of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(20)", rename_all = "lowercase")]
pub enum LedgerEntryStatus {
    #[serde(rename = "pending")]
    Pending,

    #[serde(rename = "completed")]
    Completed,

    #[serde(rename = "failed")]
    Failed,

    #[serde(rename = "refunded")]
    Refunded,
}

impl std::fmt::Display for LedgerEntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerEntryStatus::Pending => write!(f, "pending"),
            LedgerEntryStatus::Completed => write!(f, "completed"),
            LedgerEntryStatus::Failed => write!(f, "failed"),
            LedgerEntryStatus::Refunded => write!(f, "refunded"),
        }
    }
}

impl std::str::FromStr for LedgerEntryStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(LedgerEntryStatus::Pending),
            "completed" => Ok(LedgerEntryStatus::Completed),
            "failed" => Ok(LedgerEntryStatus::Failed),
            "refunded" => Ok(LedgerEntryStatus::Refunded),
            _ => Err(format!("Invalid ledger entry status: {}", s)),
        }
    }
}

/// Atomic monetary movement with its payment-method summary joined in
///
/// Materialized per request from the ledger store; never written back.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LedgerEntry {
    pub id: String,
    pub kind: LedgerEntryKind,
    pub amount: Decimal,
    pub currency: String,
    pub status: LedgerEntryStatus,
    pub occurred_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
    pub reference: Option<String>,
    pub wallet_id: Option<String>,
    pub payment_method_id: Option<String>,
    pub payment_method_type: Option<String>,
    pub payment_method_last_four: Option<String>,
}

impl LedgerEntry {
    /// Only completed deposits and payments count toward revenue.
    pub fn counts_toward_revenue(&self) -> bool {
        self.status == LedgerEntryStatus::Completed
            && matches!(
                self.kind,
                LedgerEntryKind::Deposit | LedgerEntryKind::Payment
            )
    }
}

/// Payment row enriched with counterparty display names
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PaymentRecord {
    pub id: String,
    pub payment_type: String,
    pub amount: Decimal,
    pub currency: String,
    pub status: String,
    pub initiated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub transaction_id: Option<String>,
    pub receipt_url: Option<String>,
    pub payment_method_type: Option<String>,
    pub advertiser_id: Option<String>,
    pub partner_id: Option<String>,
    pub advertiser_name: Option<String>,
    pub partner_name: Option<String>,
}

/// Per-partner earnings summed over the requested range
///
/// Partners with no earnings in the range still appear, with zero totals.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PartnerEarningsSummary {
    pub id: String,
    pub company_name: String,
    pub commission_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub total_amount: Decimal,
    pub total_impressions: i64,
    pub total_engagements: i64,
}

/// Per-advertiser campaign and spend rollup
///
/// Campaign counts and budgets are lifetime totals; completed payments are
/// summed within the requested range only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdvertiserSpendSummary {
    pub id: String,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
    pub total_campaigns: i64,
    pub total_budget: Decimal,
    pub total_payments: Decimal,
}

/// One calendar day of completed revenue
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyRevenue {
    pub day: NaiveDate,
    pub revenue: Decimal,
}

/// One calendar month of completed revenue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    pub revenue: Decimal,
}
