//! Core data models for the budget tracker
//!
//! The only entity is a [`Transaction`]; its magnitude is an [`Amount`].

pub mod amount;
pub mod transaction;

pub use amount::{Amount, AmountParseError};
pub use transaction::{Transaction, TransactionKind, RESERVED_CHARS};
