//! Finance business logic - Income and expense ledger.
//!
//! Amounts are stored non-negative; `kind` decides the direction. Monthly
//! figures are scoped to the calendar month and year of a reference date,
//! while the balance is computed over the whole ledger.

use crate::{
    core::{
        stats::{in_same_month, sum_where},
        store::CollectionStore,
    },
    entities::{NewTransaction, Transaction, TransactionKind},
    errors::{Error, Result},
    storage::Storage,
};
use chrono::NaiveDate;
use tracing::info;

/// Collection name for transactions
pub const TRANSACTIONS: &str = "transactions";

/// Ledger totals for the finance summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FinanceSummary {
    /// All income ever recorded
    pub total_income: f64,
    /// All expenses ever recorded
    pub total_expenses: f64,
    /// `total_income - total_expenses`, over the whole ledger
    pub balance: f64,
    /// Income dated in the reference month
    pub monthly_income: f64,
    /// Expenses dated in the reference month
    pub monthly_expenses: f64,
    /// `monthly_income - monthly_expenses`
    pub monthly_net: f64,
}

/// Records a transaction with the next free id.
///
/// Rejects negative, NaN and infinite amounts; the sign of a transaction is
/// carried by its kind, never by its amount.
pub async fn record_transaction<S: Storage>(
    store: &CollectionStore<S>,
    new_transaction: NewTransaction,
) -> Result<Transaction> {
    let amount = new_transaction.amount;
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    let transaction = store
        .insert_new(TRANSACTIONS, |id| Transaction::from_new(id, new_transaction))
        .await?;
    info!(
        id = transaction.id,
        kind = ?transaction.kind,
        amount = transaction.amount,
        "Recorded transaction"
    );
    Ok(transaction)
}

/// All transactions in stored order.
pub async fn list_transactions<S: Storage>(store: &CollectionStore<S>) -> Vec<Transaction> {
    store.load(TRANSACTIONS).await
}

/// Deletes a transaction by id. Returns whether a transaction was removed.
pub async fn delete_transaction<S: Storage>(store: &CollectionStore<S>, id: i64) -> Result<bool> {
    let removed = store.remove_by_id::<Transaction>(TRANSACTIONS, id).await?;
    info!(id, removed, "Deleted transaction");
    Ok(removed)
}

/// Ledger totals, with monthly figures scoped to `reference`'s month and year.
#[must_use]
pub fn finance_summary(transactions: &[Transaction], reference: NaiveDate) -> FinanceSummary {
    let amount = |t: &Transaction| t.amount;
    let is_income = |t: &Transaction| t.kind == TransactionKind::Income;
    let is_expense = |t: &Transaction| t.kind == TransactionKind::Expense;

    let total_income = sum_where(transactions, is_income, amount);
    let total_expenses = sum_where(transactions, is_expense, amount);
    let monthly_income = sum_where(
        transactions,
        |t| is_income(t) && in_same_month(t.date, reference),
        amount,
    );
    let monthly_expenses = sum_where(
        transactions,
        |t| is_expense(t) && in_same_month(t.date, reference),
        amount,
    );

    FinanceSummary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        monthly_income,
        monthly_expenses,
        monthly_net: monthly_income - monthly_expenses,
    }
}

/// The `limit` most recent transactions, newest date first.
#[must_use]
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Total amount per category for one kind, categories in order of first appearance.
#[must_use]
pub fn category_totals(transactions: &[Transaction], kind: TransactionKind) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for t in transactions.iter().filter(|t| t.kind == kind) {
        match totals.iter_mut().find(|(category, _)| *category == t.category) {
            Some((_, total)) => *total += t.amount,
            None => totals.push((t.category.clone(), t.amount)),
        }
    }
    totals
}

/// Formats an amount with the sign implied by its kind, e.g. `"+$1,250.00"`.
#[must_use]
pub fn format_signed_amount(transaction: &Transaction) -> String {
    let sign = match transaction.kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    format!("{sign}{}", format_currency(transaction.amount))
}

/// Formats a dollar amount with thousands separators, e.g. `"$1,250.00"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}
