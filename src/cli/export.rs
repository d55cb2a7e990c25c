//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_json, export_transactions_csv};

use super::AppContext;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// All transactions as CSV
    Csv,
    /// Whole session as JSON
    Json,
}

/// Export the data file to stdout or to `output`
pub fn handle_export(
    ctx: &AppContext,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    let session = ctx.file.load_session()?;

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv => export_transactions_csv(session.transactions(), &mut writer)?,
        ExportFormat::Json => {
            export_json(&session, &mut writer)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    drop(writer);

    if let Some(path) = output {
        println!(
            "Exported {} transactions to {}",
            session.len(),
            path.display()
        );
    }
    Ok(())
}
