//! Ledger session
//!
//! A [`Session`] owns the transaction store and the running balance for one
//! run of the tracker. It is created by the driver (from persisted records or
//! empty), passed by reference into each operation, and handed back to the
//! storage layer when it is time to save.

pub mod balance;
pub mod store;

pub use balance::{recompute, BalanceAccumulator};
pub use store::TransactionStore;

use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, Transaction, TransactionKind};
use crate::reports::ExpenseReport;

/// Transaction store plus its running balance
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: TransactionStore,
    balance: BalanceAccumulator,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from previously persisted transactions, in order
    pub fn from_transactions(
        transactions: impl IntoIterator<Item = Transaction>,
    ) -> BudgetResult<Self> {
        let mut session = Self::new();
        for txn in transactions {
            let stored = session.store.push(txn)?;
            session.balance.apply(stored);
        }
        debug!(count = session.len(), balance = session.balance(), "Session restored");
        Ok(session)
    }

    /// Append a transaction and update the balance
    ///
    /// On a validation failure neither the store nor the balance change.
    pub fn append(
        &mut self,
        kind: TransactionKind,
        amount: Amount,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> BudgetResult<&Transaction> {
        let txn = self.store.append(kind, amount, description, category)?;
        self.balance.apply(txn);
        debug!(kind = %txn.kind, amount = %txn.amount, "Transaction appended");
        Ok(txn)
    }

    /// Append from unparsed text, as collected by an interactive driver
    pub fn append_raw(
        &mut self,
        kind: &str,
        amount: &str,
        description: &str,
        category: &str,
    ) -> BudgetResult<&Transaction> {
        let kind: TransactionKind = kind.parse()?;
        let amount = Amount::parse(amount)
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        self.append(kind, amount, description, category)
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        self.store.all()
    }

    /// Running balance (income minus expenses)
    pub fn balance(&self) -> f64 {
        self.balance.current()
    }

    /// Balance recomputed from the full store
    pub fn recomputed_balance(&self) -> f64 {
        recompute(self.store.all())
    }

    /// Expense totals by category, `None` when there is nothing to report
    pub fn expense_report(&self) -> Option<ExpenseReport> {
        ExpenseReport::generate(self.store.all())
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
