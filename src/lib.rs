//! Budget Tracker - single-user personal budget tracking
//!
//! Records income and expense transactions, keeps a running balance,
//! persists everything to a line-delimited text file and summarises
//! expenses by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: the transaction record and its amount type
//! - `ledger`: the session (transaction store plus running balance)
//! - `storage`: the `kind|amount|description|category` data file
//! - `reports`: expense totals by category
//! - `display`: currency formatting for terminal output
//! - `export`: CSV and JSON export
//! - `config`: path resolution and user settings
//! - `cli`: interactive menu and command handlers
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::storage::TransactionFile;
//!
//! let file = TransactionFile::new("budget_data.txt");
//! let mut session = file.load_session()?;
//! session.append_raw("expense", "12.50", "Lunch", "Food")?;
//! file.save_session(&session)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
pub use ledger::Session;
