//! JSON Export functionality
//!
//! Exports the whole session to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::ledger::Session;
use crate::models::Transaction;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full session export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Balance at export time
    pub balance: f64,

    /// All transactions in store order
    pub transactions: Vec<Transaction>,
}

impl SessionExport {
    /// Snapshot a session
    pub fn from_session(session: &Session) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            balance: session.balance(),
            transactions: session.transactions().to_vec(),
        }
    }

    /// Rebuild a session from this export
    ///
    /// Every transaction is re-validated and the balance is recomputed rather
    /// than trusted.
    pub fn into_session(self) -> BudgetResult<Session> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(BudgetError::Export(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            )));
        }
        Session::from_transactions(self.transactions)
    }
}

/// Export the session to pretty-printed JSON
pub fn export_json<W: Write>(session: &Session, writer: W) -> BudgetResult<()> {
    let export = SessionExport::from_session(session);
    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}

/// Read a session back from a JSON export
pub fn import_json(json_str: &str) -> BudgetResult<Session> {
    let export: SessionExport = serde_json::from_str(json_str)?;
    export.into_session()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, TransactionKind};

    fn sample_session() -> Session {
        let mut session = Session::new();
        session
            .append(TransactionKind::Income, Amount::parse("1000").unwrap(), "Salary", "Work")
            .unwrap();
        session
            .append(TransactionKind::Expense, Amount::parse("75.5").unwrap(), "Books", "Study")
            .unwrap();
        session
    }

    #[test]
    fn test_export_contains_metadata() {
        let mut buffer = Vec::new();
        export_json(&sample_session(), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["balance"], 924.5);
        assert_eq!(value["transactions"].as_array().unwrap().len(), 2);
        assert_eq!(value["transactions"][1]["kind"], "expense");
    }

    #[test]
    fn test_import_restores_session() {
        let session = sample_session();
        let mut buffer = Vec::new();
        export_json(&session, &mut buffer).unwrap();

        let restored = import_json(std::str::from_utf8(&buffer).unwrap()).unwrap();
        assert_eq!(restored.transactions(), session.transactions());
        assert_eq!(restored.balance(), 924.5);
    }

    #[test]
    fn test_import_rejects_other_schema() {
        let mut export = SessionExport::from_session(&sample_session());
        export.schema_version = "0.1.0".into();
        let json = serde_json::to_string(&export).unwrap();

        let err = import_json(&json).unwrap_err();
        assert!(matches!(err, BudgetError::Export(_)));
    }
}
