//! CLI command for the expense report

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::display::format_expense_report;
use crate::error::{BudgetError, BudgetResult};
use crate::export::export_report_csv;

use super::AppContext;

/// Print the expense report, optionally exporting it to CSV
pub fn handle_report(ctx: &AppContext, output: Option<PathBuf>) -> BudgetResult<()> {
    let session = ctx.file.load_session()?;
    let report = session.expense_report();

    print!(
        "{}",
        format_expense_report(report.as_ref(), &ctx.settings.currency_symbol)
    );

    let Some(path) = output else {
        return Ok(());
    };

    match report.as_ref() {
        Some(report) => {
            let file = File::create(&path).map_err(|e| {
                BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            export_report_csv(report, BufWriter::new(file))?;
            println!("Report exported to {}", path.display());
        }
        None => println!("Nothing to export; {} was not written.", path.display()),
    }

    Ok(())
}
