//! CSV export and import of transactions
//!
//! The format has one row per transaction under the header
//! `Type,Category,Amount,Date`. `Type` is `income` or `expense`, `Amount` is
//! a plain positive decimal and `Date` is ISO-8601.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, Writer};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{parse_iso_date, Money, Transaction, TransactionKind, ISO_DATE_FORMAT};

/// Column names, in order
pub const CSV_HEADER: [&str; 4] = ["Type", "Category", "Amount", "Date"];

/// Export transactions to CSV in the given order
pub fn export_transactions_csv<W: Write>(transactions: &[Transaction], writer: W) -> FinanceResult<()> {
    let mut csv_writer = Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.kind.as_str().to_string(),
                txn.category.clone(),
                txn.amount.to_plain_string(),
                txn.date.format(ISO_DATE_FORMAT).to_string(),
            ])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

/// Column positions found in an import header
struct ColumnMapping {
    kind: usize,
    category: usize,
    amount: usize,
    date: usize,
}

impl ColumnMapping {
    fn from_headers(headers: &StringRecord) -> FinanceResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| FinanceError::Import(format!("Missing '{}' column", name)))
        };

        Ok(Self {
            kind: find("Type")?,
            category: find("Category")?,
            amount: find("Amount")?,
            date: find("Date")?,
        })
    }
}

/// Read transactions from CSV
///
/// Columns are matched by header name in any order. Every transaction gets a
/// fresh ID and the given currency. The first malformed row aborts the
/// import; its 1-based data row number is part of the error.
pub fn import_transactions_csv<R: Read>(reader: R, currency: &str) -> FinanceResult<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mapping = ColumnMapping::from_headers(&headers)?;

    let mut transactions = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|e| FinanceError::Import(format!("Row {}: {}", row, e)))?;
        let txn = parse_row(&record, &mapping, currency)
            .map_err(|e| FinanceError::Import(format!("Row {}: {}", row, e)))?;
        transactions.push(txn);
    }

    tracing::debug!(count = transactions.len(), "parsed CSV import");
    Ok(transactions)
}

fn parse_row(record: &StringRecord, mapping: &ColumnMapping, currency: &str) -> FinanceResult<Transaction> {
    let field = move |idx: usize, name: &str| {
        record
            .get(idx)
            .ok_or_else(|| FinanceError::Import(format!("missing {} value", name)))
    };

    let kind: TransactionKind = field(mapping.kind, "type")?.parse()?;
    let category = field(mapping.category, "category")?;
    let amount = Money::parse(field(mapping.amount, "amount")?)
        .map_err(|e| FinanceError::Validation(e.to_string()))?;
    let date = parse_iso_date(field(mapping.date, "date")?)?;

    let txn = Transaction::new(kind, amount, category, date).with_currency(currency.to_uppercase());
    txn.validate()?;
    Ok(txn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_export_format() {
        let txns = vec![
            Transaction::new(TransactionKind::Income, Money::from_cents(10000), "salary", date(2024, 1, 1)),
            Transaction::new(TransactionKind::Expense, Money::from_cents(1250), "home", date(2024, 1, 3)),
        ];

        let mut out = Vec::new();
        export_transactions_csv(&txns, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Type,Category,Amount,Date\nincome,salary,100.0,2024-01-01\nexpense,home,12.5,2024-01-03\n"
        );
    }

    #[test]
    fn test_export_empty_writes_header() {
        let mut out = Vec::new();
        export_transactions_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Type,Category,Amount,Date\n");
    }

    #[test]
    fn test_export_quotes_commas() {
        let txns = vec![Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(1234),
            "food, drinks",
            date(2024, 2, 1),
        )];

        let mut out = Vec::new();
        export_transactions_csv(&txns, &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("expense,\"food, drinks\",12.34,2024-02-01"));
    }

    #[test]
    fn test_import() {
        let data = "Type,Category,Amount,Date\nincome,salary,100.0,2024-01-01\ngasto,ropa,12.5,2024-01-03\n";
        let txns = import_transactions_csv(data.as_bytes(), "eur").unwrap();

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].kind, TransactionKind::Income);
        assert_eq!(txns[1].kind, TransactionKind::Expense);
        assert_eq!(txns[1].amount.cents(), 1250);
        assert_eq!(txns[1].currency, "EUR");
        assert_ne!(txns[0].id, txns[1].id);
    }

    #[test]
    fn test_import_columns_in_any_order() {
        let data = "Date,Amount,Category,Type\n2024-01-01,5,pets,expense\n";
        let txns = import_transactions_csv(data.as_bytes(), "USD").unwrap();
        assert_eq!(txns[0].category, "pets");
        assert_eq!(txns[0].amount.cents(), 500);
    }

    #[test]
    fn test_import_reports_row_number() {
        let data = "Type,Category,Amount,Date\nincome,salary,100.0,2024-01-01\nexpense,home,12.5,03/01/2024\n";
        let err = import_transactions_csv(data.as_bytes(), "EUR").unwrap_err();
        assert!(matches!(err, FinanceError::Import(ref msg) if msg.starts_with("Row 2:")));
    }

    #[test]
    fn test_import_rejects_non_positive_amount() {
        let data = "Type,Category,Amount,Date\nexpense,home,0,2024-01-01\n";
        let err = import_transactions_csv(data.as_bytes(), "EUR").unwrap_err();
        assert!(matches!(err, FinanceError::Import(ref msg) if msg.starts_with("Row 1:")));
    }

    #[test]
    fn test_import_rejects_oversized_amount() {
        let data = "Type,Category,Amount,Date\nexpense,home,100000000000000000,2024-01-01\n";
        let err = import_transactions_csv(data.as_bytes(), "EUR").unwrap_err();
        assert!(matches!(err, FinanceError::Import(ref msg) if msg.starts_with("Row 1:")));
    }

    #[test]
    fn test_import_missing_column() {
        let data = "Type,Category,Amount\nexpense,home,1\n";
        let err = import_transactions_csv(data.as_bytes(), "EUR").unwrap_err();
        assert!(matches!(err, FinanceError::Import(ref msg) if msg.contains("Date")));
    }

    #[test]
    fn test_round_trip_preserves_values() {
        let original = vec![Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(1999),
            "travel",
            date(2023, 12, 31),
        )];

        let mut out = Vec::new();
        export_transactions_csv(&original, &mut out).unwrap();
        let back = import_transactions_csv(out.as_slice(), "EUR").unwrap();

        assert_eq!(back[0].kind, original[0].kind);
        assert_eq!(back[0].amount, original[0].amount);
        assert_eq!(back[0].date, original[0].date);
    }
}
