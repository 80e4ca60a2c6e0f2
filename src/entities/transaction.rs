//! Transaction entity - Income and expense entries in the finance ledger.
//!
//! `amount` is always non-negative; whether it adds to or subtracts from the
//! balance is decided by `kind`. Payment status is user-entered data and is
//! stored as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::store::Record;

/// Direction of a transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money received
    Income,
    /// Money spent
    Expense,
}

impl TransactionKind {
    /// Category preselected on the entry form
    #[must_use]
    pub const fn default_category(self) -> &'static str {
        match self {
            Self::Income => "Offering",
            Self::Expense => "Utilities",
        }
    }

    /// Payment status preselected on the entry form
    #[must_use]
    pub const fn default_status(self) -> PaymentStatus {
        match self {
            Self::Income => PaymentStatus::Paid,
            Self::Expense => PaymentStatus::Pending,
        }
    }

    /// Categories offered on the entry form
    #[must_use]
    pub const fn categories(self) -> &'static [&'static str] {
        match self {
            Self::Income => &["Offering", "Donation", "Fundraising", "Event", "Other"],
            Self::Expense => &[
                "Utilities",
                "Salaries",
                "Maintenance",
                "Outreach",
                "Supplies",
                "Other",
            ],
        }
    }
}

/// Settlement state of a transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Settled
    Paid,
    /// Awaiting settlement
    Pending,
    /// Overdue or refused
    Unpaid,
}

/// A stored transaction record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique within the transactions collection
    pub id: i64,
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Booking date
    pub date: NaiveDate,
    /// What the money was for
    pub description: String,
    /// Ledger category (e.g. "Offering", "Utilities")
    pub category: String,
    /// Non-negative amount
    pub amount: f64,
    /// Who the income came from
    #[serde(default)]
    pub source: Option<String>,
    /// Who the expense was paid to
    #[serde(default)]
    pub vendor: Option<String>,
    /// Settlement state
    pub status: PaymentStatus,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Form input for a transaction that has not been assigned an id yet.
///
/// `category` and `status` fall back to the per-kind defaults when `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTransaction {
    /// Income or expense
    pub kind: TransactionKind,
    /// Booking date
    pub date: NaiveDate,
    /// What the money was for
    pub description: String,
    /// Ledger category
    pub category: Option<String>,
    /// Non-negative amount
    pub amount: f64,
    /// Who the income came from
    pub source: Option<String>,
    /// Who the expense was paid to
    pub vendor: Option<String>,
    /// Settlement state
    pub status: Option<PaymentStatus>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl NewTransaction {
    /// Minimal form input with per-kind defaults for everything optional.
    #[must_use]
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            kind,
            date,
            description: description.into(),
            category: None,
            amount,
            source: None,
            vendor: None,
            status: None,
            notes: None,
        }
    }
}

impl Transaction {
    /// Builds the stored record from form input and an assigned id.
    #[must_use]
    pub fn from_new(id: i64, new: NewTransaction) -> Self {
        let kind = new.kind;
        Self {
            id,
            kind,
            date: new.date,
            description: new.description,
            category: new
                .category
                .unwrap_or_else(|| kind.default_category().to_string()),
            amount: new.amount,
            source: new.source,
            vendor: new.vendor,
            status: new.status.unwrap_or_else(|| kind.default_status()),
            notes: new.notes,
        }
    }

    /// Amount with the sign implied by `kind`: positive income, negative expense.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl Record for Transaction {
    fn id(&self) -> i64 {
        self.id
    }
}
