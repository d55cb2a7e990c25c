//! CLI command handler for JSON import
//!
//! Appends the transactions of a JSON export (as written by `export json`)
//! to the end of the current data file, in their exported order.

use std::path::Path;

use crate::display::format_amount;
use crate::error::{BudgetError, BudgetResult};
use crate::export::import_json;

use super::AppContext;

/// Handle the import command
pub fn handle_import(ctx: &AppContext, file: &Path) -> BudgetResult<()> {
    if !file.exists() {
        return Err(BudgetError::Io(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let content = std::fs::read_to_string(file)
        .map_err(|e| BudgetError::Io(format!("Failed to read {}: {}", file.display(), e)))?;
    let imported = import_json(&content)?;

    if imported.is_empty() {
        println!("No transactions found in {}.", file.display());
        return Ok(());
    }

    let mut session = ctx.file.load_session()?;
    for txn in imported.transactions() {
        session.append(
            txn.kind,
            txn.amount,
            txn.description.clone(),
            txn.category.clone(),
        )?;
    }
    ctx.file.save_session(&session)?;

    println!(
        "Imported {} transactions from {}",
        imported.len(),
        file.display()
    );
    println!(
        "Current Balance: {}",
        format_amount(session.balance(), &ctx.settings.currency_symbol)
    );
    Ok(())
}
