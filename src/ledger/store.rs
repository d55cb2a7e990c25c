//! Transaction store
//!
//! An append-only, insertion-ordered collection of transactions held in
//! memory for the lifetime of a session.

use crate::error::BudgetResult;
use crate::models::{Amount, Transaction, TransactionKind};

/// Ordered in-memory transaction store
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new transaction, returning the stored record
    ///
    /// Nothing is stored if validation fails.
    pub fn append(
        &mut self,
        kind: TransactionKind,
        amount: Amount,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> BudgetResult<&Transaction> {
        let txn = Transaction::new(kind, amount, description, category)?;
        self.push(txn)
    }

    /// Append an already constructed transaction after re-validating it
    pub fn push(&mut self, txn: Transaction) -> BudgetResult<&Transaction> {
        txn.validate()?;
        let index = self.transactions.len();
        self.transactions.push(txn);
        Ok(&self.transactions[index])
    }

    /// All transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::parse(s).unwrap()
    }

    #[test]
    fn test_empty_store() {
        let store = TransactionStore::new();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = TransactionStore::new();
        store
            .append(TransactionKind::Income, amount("1000"), "Salary", "Work")
            .unwrap();
        store
            .append(TransactionKind::Expense, amount("200"), "Groceries", "Food")
            .unwrap();
        store
            .append(TransactionKind::Expense, amount("50"), "Bus", "Transport")
            .unwrap();

        let descriptions: Vec<_> = store.all().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Salary", "Groceries", "Bus"]);
    }

    #[test]
    fn test_append_returns_stored_record() {
        let mut store = TransactionStore::new();
        let txn = store
            .append(TransactionKind::Expense, amount("12.5"), "Lunch", "Food")
            .unwrap();
        assert_eq!(txn.amount.value(), 12.5);
        assert_eq!(txn.kind, TransactionKind::Expense);
    }

    #[test]
    fn test_failed_append_leaves_store_unchanged() {
        let mut store = TransactionStore::new();
        store
            .append(TransactionKind::Income, amount("10"), "Gift", "")
            .unwrap();

        let result = store.append(TransactionKind::Expense, amount("1"), "bad|text", "Food");
        assert!(result.unwrap_err().is_validation());
        assert_eq!(store.len(), 1);
    }
}
