//! CLI command handlers
//!
//! This module bridges clap argument parsing and the interactive menu with
//! the ledger, storage and display layers.

pub mod export;
pub mod import;
pub mod interactive;
pub mod report;
pub mod transaction;

pub use export::{handle_export, ExportFormat};
pub use import::handle_import;
pub use interactive::{InteractiveSession, MenuChoice};
pub use report::handle_report;
pub use transaction::{handle_add, handle_list};

use std::io;
use std::path::PathBuf;

use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;
use crate::ledger::Session;
use crate::storage::TransactionFile;

/// Everything a command needs: resolved paths, settings and the data file
#[derive(Debug, Clone)]
pub struct AppContext {
    pub paths: BudgetPaths,
    pub settings: Settings,
    pub file: TransactionFile,
}

impl AppContext {
    /// Resolve settings and the data file, honouring an explicit override
    pub fn new(paths: BudgetPaths, data_file: Option<PathBuf>) -> BudgetResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let data_file = data_file.unwrap_or_else(|| settings.data_file_path(&paths));

        Ok(Self {
            file: TransactionFile::new(data_file),
            paths,
            settings,
        })
    }
}

/// Run the interactive menu on stdin/stdout
///
/// If the data file can't be read the session starts empty so the user can
/// still work in memory, and the file is left alone on exit. A corrupt data
/// file is still an error.
pub fn run_interactive(ctx: &AppContext) -> BudgetResult<()> {
    let (mut session, persist) = match ctx.file.load_session() {
        Ok(session) => (session, true),
        Err(e) if e.is_io() => {
            eprintln!(
                "Warning: {}. Starting with no saved transactions; changes will not be saved.",
                e
            );
            (Session::new(), false)
        }
        Err(e) => return Err(e),
    };

    let stdin = io::stdin();
    let interactive = InteractiveSession::new(
        &mut session,
        &ctx.file,
        &ctx.settings,
        stdin.lock(),
        io::stdout(),
    );

    if persist {
        interactive.run()
    } else {
        interactive.without_persistence().run()
    }
}

/// Print resolved paths and settings
pub fn handle_config(ctx: &AppContext) {
    println!("Budget Tracker Configuration");
    println!("============================");
    println!("Base directory:  {}", ctx.paths.base_dir().display());
    println!("Settings file:   {}", ctx.paths.settings_file().display());
    println!("Data file:       {}", ctx.file.path().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", ctx.settings.currency_symbol);
}

/// Write the current settings to disk
pub fn handle_init(ctx: &AppContext) -> BudgetResult<()> {
    ctx.settings.save(&ctx.paths)?;
    println!(
        "Settings written to {}",
        ctx.paths.settings_file().display()
    );
    Ok(())
}
