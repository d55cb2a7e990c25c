//! Reports module for the budget tracker
//!
//! Reports are stateless transforms over the current transaction sequence and
//! are recomputed on every request.

pub mod expense;

pub use expense::{total_expenses, CategoryTotal, ExpenseReport};
