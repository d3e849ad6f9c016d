//! Default category catalog
//!
//! Categories are free-form strings on a transaction; this catalog only
//! supplies the suggestions offered for each kind.

use std::fmt;

use super::transaction::TransactionKind;

/// A suggested category for one transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCategory {
    pub name: &'static str,
    pub kind: TransactionKind,
}

impl fmt::Display for DefaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

const INCOME_CATEGORIES: &[&str] = &["refund", "salary", "other"];

const EXPENSE_CATEGORIES: &[&str] = &[
    "home",
    "clothing",
    "education",
    "entertainment",
    "gifts",
    "pets",
    "travel",
    "other",
];

/// Suggested categories for a kind, in display order
pub fn default_categories(kind: TransactionKind) -> Vec<DefaultCategory> {
    let names = match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    };
    names
        .iter()
        .map(|name| DefaultCategory { name: *name, kind })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let income = default_categories(TransactionKind::Income);
        assert_eq!(income.len(), 3);
        assert_eq!(income[1].name, "salary");

        let expense = default_categories(TransactionKind::Expense);
        assert_eq!(expense.len(), 8);
        assert!(expense.iter().all(|c| c.kind == TransactionKind::Expense));
    }
}
