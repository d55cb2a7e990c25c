//! Report formatting for terminal output

use crate::reports::ExpenseReport;

/// Format an expense report, or the "nothing to report" message for `None`
pub fn format_expense_report(report: Option<&ExpenseReport>, symbol: &str) -> String {
    let Some(report) = report else {
        return "No transactions to report.\n".to_string();
    };

    let mut output = String::from("\nExpense Report by Category:\n");
    for entry in report {
        output.push_str(&format!(
            "{}: {}\n",
            entry.category,
            entry.total.format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!(
        "Total Expenses: {}\n",
        report.total_expenses().format_with_symbol(symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Transaction};

    #[test]
    fn test_nothing_to_report() {
        assert_eq!(format_expense_report(None, "₹"), "No transactions to report.\n");
    }

    #[test]
    fn test_format_report() {
        let amount = |s: &str| Amount::parse(s).unwrap();
        let txns = vec![
            Transaction::expense(amount("200"), "Groceries", "Food").unwrap(),
            Transaction::expense(amount("50"), "Bus", "Transport").unwrap(),
            Transaction::expense(amount("30"), "Snacks", "Food").unwrap(),
        ];
        let report = ExpenseReport::generate(&txns).unwrap();

        assert_eq!(
            format_expense_report(Some(&report), "₹"),
            "\nExpense Report by Category:\nFood: ₹230.00\nTransport: ₹50.00\nTotal Expenses: ₹280.00\n"
        );
    }
}
