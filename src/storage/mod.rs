//! Storage layer for the budget tracker
//!
//! Persists the transaction list as a line-delimited text file. See
//! [`codec`] for the line format and [`file_io`] for the read/write rules.

pub mod codec;
pub mod file_io;

pub use codec::{decode_line, encode_line, DecodedLine, DELIMITER, FIELD_COUNT};
pub use file_io::{load, save};

use std::path::{Path, PathBuf};

use crate::error::BudgetResult;
use crate::ledger::Session;
use crate::models::Transaction;

/// The data file backing a session
#[derive(Debug, Clone)]
pub struct TransactionFile {
    path: PathBuf,
}

impl TransactionFile {
    /// Create a handle for the data file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the data file exists yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all transactions (empty on first run)
    pub fn load(&self) -> BudgetResult<Vec<Transaction>> {
        load(&self.path)
    }

    /// Load all transactions into a fresh session
    pub fn load_session(&self) -> BudgetResult<Session> {
        Session::from_transactions(self.load()?)
    }

    /// Replace the file contents with `transactions`
    pub fn save(&self, transactions: &[Transaction]) -> BudgetResult<()> {
        save(&self.path, transactions)
    }

    /// Save every transaction held by `session`
    pub fn save_session(&self, session: &Session) -> BudgetResult<()> {
        self.save(session.transactions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, TransactionKind};
    use tempfile::TempDir;

    #[test]
    fn test_session_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let file = TransactionFile::new(temp_dir.path().join("budget_data.txt"));
        assert!(!file.exists());

        let mut session = file.load_session().unwrap();
        assert!(session.is_empty());

        session
            .append(TransactionKind::Income, Amount::parse("1000").unwrap(), "Salary", "Work")
            .unwrap();
        session
            .append(TransactionKind::Expense, Amount::parse("42.42").unwrap(), "Dinner", "Food")
            .unwrap();
        file.save_session(&session).unwrap();
        assert!(file.exists());

        let restored = file.load_session().unwrap();
        assert_eq!(restored.transactions(), session.transactions());
        assert_eq!(restored.balance(), session.balance());
    }
}
