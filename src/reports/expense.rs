//! Expense Report
//!
//! Aggregates expense transactions by category. Categories keep the order in
//! which they were first seen while scanning the store, and matching is exact
//! and case-sensitive (the empty string is a category like any other).

use std::collections::HashMap;

use crate::models::{Amount, Transaction};

/// Spending total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label exactly as recorded
    pub category: String,
    /// Sum of expense amounts in this category
    pub total: Amount,
    /// Number of expense transactions in this category
    pub transaction_count: usize,
}

/// Expense totals by category, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseReport {
    categories: Vec<CategoryTotal>,
}

impl ExpenseReport {
    /// Generate a report over `transactions`
    ///
    /// Returns `None` when there are no transactions at all. A store that only
    /// holds income produces an empty report whose total is zero.
    pub fn generate(transactions: &[Transaction]) -> Option<Self> {
        if transactions.is_empty() {
            return None;
        }

        let mut categories: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            match index.get(txn.category.as_str()).copied() {
                Some(i) => {
                    let entry = &mut categories[i];
                    entry.total += txn.amount;
                    entry.transaction_count += 1;
                }
                None => {
                    index.insert(txn.category.as_str(), categories.len());
                    categories.push(CategoryTotal {
                        category: txn.category.clone(),
                        total: txn.amount,
                        transaction_count: 1,
                    });
                }
            }
        }

        Some(Self { categories })
    }

    /// Sum of all category totals
    pub fn total_expenses(&self) -> Amount {
        self.categories.iter().map(|c| c.total).sum()
    }

    /// Total for a single category
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    /// Iterate category totals in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExpenseReport {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

/// Sum of all values in `report`
pub fn total_expenses(report: &ExpenseReport) -> Amount {
    report.total_expenses()
}
