//! Line-oriented file I/O for the data file
//!
//! `load` and `save` each open the file for the duration of the call only.
//! `save` truncates and rewrites the whole file in place: it is not atomic,
//! and a crash part-way through can leave a truncated file behind.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::codec::{decode_line, encode_line, DecodedLine};
use crate::error::{BudgetError, BudgetResult};
use crate::models::Transaction;

/// Read transactions from `path`, returning an empty list if it doesn't exist
///
/// Lines that don't split into exactly four fields are skipped with a
/// warning. A well-shaped line that can't be decoded fails the whole load.
pub fn load<P: AsRef<Path>>(path: P) -> BudgetResult<Vec<Transaction>> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "Data file not found, starting empty");
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| BudgetError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    read_transactions(BufReader::new(file), path)
}

/// Decode transactions from any buffered reader
pub fn read_transactions<R: BufRead>(reader: R, source: &Path) -> BudgetResult<Vec<Transaction>> {
    let mut transactions = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| {
            BudgetError::Io(format!(
                "Failed to read {} at line {}: {}",
                source.display(),
                line_number,
                e
            ))
        })?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        match decode_line(line, line_number)? {
            DecodedLine::Record(txn) => transactions.push(txn),
            DecodedLine::Skipped { fields } => {
                skipped += 1;
                warn!(
                    path = %source.display(),
                    line = line_number,
                    fields,
                    "Skipping malformed line"
                );
            }
        }
    }

    debug!(
        path = %source.display(),
        loaded = transactions.len(),
        skipped,
        "Loaded transactions"
    );
    Ok(transactions)
}

/// Overwrite `path` with one line per transaction, in order
pub fn save<P: AsRef<Path>>(path: P, transactions: &[Transaction]) -> BudgetResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| BudgetError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    write_transactions(&mut writer, transactions)
        .map_err(|e| BudgetError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    writer
        .flush()
        .map_err(|e| BudgetError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), count = transactions.len(), "Saved transactions");
    Ok(())
}

/// Encode transactions to any writer, one `\n`-terminated line each
pub fn write_transactions<W: Write>(
    writer: &mut W,
    transactions: &[Transaction],
) -> std::io::Result<()> {
    for txn in transactions {
        writeln!(writer, "{}", encode_line(txn))?;
    }
    Ok(())
}
