//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.

use super::format::truncate;
use crate::models::{Transaction, TransactionKind, ISO_DATE_FORMAT};

fn kind_indicator(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    }
}

/// Format a single transaction for display (list row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{:8} {} {} {:20} {:>12} {}",
        txn.id.short(),
        txn.date.format(ISO_DATE_FORMAT),
        kind_indicator(txn.kind),
        truncate(&txn.category, 20),
        txn.amount,
        txn.currency
    )
}

/// Format a list of transactions with a header
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:10} {} {:20} {:>12} {}\n",
        "ID", "Date", " ", "Category", "Amount", "Cur"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", txn.date.format(ISO_DATE_FORMAT)));
    output.push_str(&format!("Amount:      {}\n", txn.amount));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.currency.is_empty() {
        output.push_str(&format!("Currency:    {}\n", txn.currency));
    }

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(4250),
            "education",
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
        )
        .with_currency("EUR")
    }

    #[test]
    fn test_row() {
        let row = format_transaction_row(&sample());
        assert!(row.contains("2025-02-03 - education"));
        assert!(row.contains("42.50"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_transaction_list(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_details() {
        let details = format_transaction_details(&sample().with_description("books"));
        assert!(details.contains("Type:        Expense"));
        assert!(details.contains("Description: books"));
    }
}
