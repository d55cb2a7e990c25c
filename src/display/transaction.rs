//! Transaction display formatting

use super::format_amount;
use crate::models::Transaction;

/// Format a single numbered register row
pub fn format_transaction_row(index: usize, txn: &Transaction, symbol: &str) -> String {
    format!(
        "{}. {}: {} - {} (Category: {})",
        index,
        txn.kind.label(),
        txn.amount.format_with_symbol(symbol),
        txn.description,
        txn.category
    )
}

/// Format all transactions followed by the current balance
pub fn format_transaction_register(
    transactions: &[Transaction],
    balance: f64,
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut output = String::from("\nAll Transactions:\n");
    for (i, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(i + 1, txn, symbol));
        output.push('\n');
    }
    output.push_str(&format!(
        "\nCurrent Balance: {}\n",
        format_amount(balance, symbol)
    ));

    output
}
