//! CSV Export functionality
//!
//! Exports transactions and the expense report in a spreadsheet-compatible
//! format. Unlike the data file, free text is quoted as needed.

use std::io::Write;

use crate::error::BudgetResult;
use crate::models::Transaction;
use crate::reports::ExpenseReport;

/// Export all transactions to CSV, in store order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Kind", "Amount", "Description", "Category"])?;

    for txn in transactions {
        csv_writer.write_record([
            txn.kind.as_str(),
            txn.amount.to_string().as_str(),
            txn.description.as_str(),
            txn.category.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export the expense report to CSV with a trailing TOTAL row
pub fn export_report_csv<W: Write>(report: &ExpenseReport, writer: W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Category", "Amount", "Transactions"])?;

    let mut count = 0;
    for entry in report {
        count += entry.transaction_count;
        csv_writer.write_record([
            entry.category.as_str(),
            format!("{:.2}", entry.total.value()).as_str(),
            entry.transaction_count.to_string().as_str(),
        ])?;
    }

    csv_writer.write_record([
        "TOTAL",
        format!("{:.2}", report.total_expenses().value()).as_str(),
        count.to_string().as_str(),
    ])?;

    csv_writer.flush()?;
    Ok(())
}
