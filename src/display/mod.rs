//! Display formatting for terminal output
//!
//! The core works with raw values; everything here turns them into text
//! with a currency symbol and two decimals.

pub mod report;
pub mod transaction;

pub use report::format_expense_report;
pub use transaction::{format_transaction_register, format_transaction_row};

/// Format a signed value (such as the balance) with a currency symbol
pub fn format_amount(value: f64, symbol: &str) -> String {
    // Avoid "-₹0.00" for tiny negative rounding noise
    if value < 0.0 && format!("{:.2}", -value) != "0.00" {
        format!("-{}{:.2}", symbol, -value)
    } else {
        format!("{}{:.2}", symbol, value.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(720.0, "₹"), "₹720.00");
        assert_eq!(format_amount(-10.0, "$"), "-$10.00");
        assert_eq!(format_amount(12.5, "$"), "$12.50");
        assert_eq!(format_amount(-0.001, "$"), "$0.00");
    }
}
