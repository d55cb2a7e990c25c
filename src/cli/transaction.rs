//! Transaction CLI commands
//!
//! Non-interactive `add` and `list`. Each command loads the data file, does
//! its work, and (for `add`) writes the file back.

use crate::display::{format_amount, format_transaction_register};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, TransactionKind};

use super::AppContext;

/// Add a transaction and save immediately
pub fn handle_add(
    ctx: &AppContext,
    kind: &str,
    amount: &str,
    description: Option<String>,
    category: Option<String>,
) -> BudgetResult<()> {
    let kind: TransactionKind = kind.trim().to_lowercase().parse()?;
    let amount = Amount::parse(amount).map_err(|e| {
        BudgetError::Validation(format!(
            "Invalid amount '{}': {}. Use a non-negative number like '12.50'",
            amount, e
        ))
    })?;

    let mut session = ctx.file.load_session()?;
    session.append(
        kind,
        amount,
        description.unwrap_or_default().trim(),
        category.unwrap_or_default().trim(),
    )?;
    ctx.file.save_session(&session)?;

    println!("Transaction added successfully!");
    println!(
        "Current Balance: {}",
        format_amount(session.balance(), &ctx.settings.currency_symbol)
    );
    Ok(())
}

/// Print every transaction and the balance
pub fn handle_list(ctx: &AppContext) -> BudgetResult<()> {
    let session = ctx.file.load_session()?;
    print!(
        "{}",
        format_transaction_register(
            session.transactions(),
            session.balance(),
            &ctx.settings.currency_symbol
        )
    );
    Ok(())
}
