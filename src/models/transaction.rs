//! Transaction model
//!
//! Represents a single income or expense record. Records are immutable once
//! created; the ledger only ever appends them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::Amount;
use crate::error::{BudgetError, BudgetResult};

/// Characters that may not appear in free-text fields.
///
/// `|` separates fields in the data file and a line break ends a record, so
/// text containing either could not be read back.
pub const RESERVED_CHARS: [char; 3] = ['|', '\n', '\r'];

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The literal used in the data file
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Capitalised label for display
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = BudgetError;

    /// Only the exact lowercase literals are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(BudgetError::Validation(format!(
                "Unknown transaction kind '{}': expected 'income' or 'expense'",
                other
            ))),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Income or expense
    pub kind: TransactionKind,

    /// Magnitude, never negative
    pub amount: Amount,

    /// Free-text label, may be empty
    #[serde(default)]
    pub description: String,

    /// Free-text label, may be empty; used to group expenses
    #[serde(default)]
    pub category: String,
}

impl Transaction {
    /// Create a new transaction, validating its free-text fields
    pub fn new(
        kind: TransactionKind,
        amount: Amount,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> BudgetResult<Self> {
        let txn = Self {
            kind,
            amount,
            description: description.into(),
            category: category.into(),
        };
        txn.validate()?;
        Ok(txn)
    }

    /// Create an income transaction
    pub fn income(
        amount: Amount,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> BudgetResult<Self> {
        Self::new(TransactionKind::Income, amount, description, category)
    }

    /// Create an expense transaction
    pub fn expense(
        amount: Amount,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> BudgetResult<Self> {
        Self::new(TransactionKind::Expense, amount, description, category)
    }

    /// Signed effect of this transaction on the balance
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount.value(),
            TransactionKind::Expense => -self.amount.value(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Validate the transaction
    pub fn validate(&self) -> BudgetResult<()> {
        check_free_text("description", &self.description)?;
        check_free_text("category", &self.category)?;
        Ok(())
    }
}

fn check_free_text(field: &str, value: &str) -> BudgetResult<()> {
    if let Some(c) = value.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(BudgetError::Validation(format!(
            "The {} may not contain {:?}",
            field, c
        )));
    }
    Ok(())
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} (Category: {})",
            self.kind.label(),
            self.amount,
            self.description,
            self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::parse(s).unwrap()
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);

        let err = "investment".parse::<TransactionKind>().unwrap_err();
        assert!(err.is_validation());
        assert!("Income".parse::<TransactionKind>().is_err());
        assert!(" income".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trip() {
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            assert_eq!(kind.to_string().parse::<TransactionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::expense(amount("200"), "Groceries", "Food").unwrap();
        assert!(txn.is_expense());
        assert_eq!(txn.signed_amount(), -200.0);
        assert_eq!(txn.category, "Food");
    }

    #[test]
    fn test_empty_text_is_allowed() {
        let txn = Transaction::income(amount("5"), "", "").unwrap();
        assert_eq!(txn.signed_amount(), 5.0);
        assert!(txn.description.is_empty());
    }

    #[test]
    fn test_reserved_characters_rejected() {
        let err = Transaction::expense(amount("1"), "a|b", "Food").unwrap_err();
        assert!(err.is_validation());

        let err = Transaction::expense(amount("1"), "ok", "Fo\nod").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_serde_uses_lowercase_kind() {
        let txn = Transaction::income(amount("1000"), "Salary", "Work").unwrap();
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"kind\":\"income\""));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }
}
