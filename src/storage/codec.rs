//! Line encoding for the data file
//!
//! Each transaction is one line of four `|`-separated fields in the fixed
//! order `kind|amount|description|category`. Fields are written as plain text
//! with no escaping; free text containing `|` or a line break is rejected when
//! a transaction is created, so every stored record encodes unambiguously.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, Transaction, TransactionKind};

/// Field separator
pub const DELIMITER: char = '|';

/// Number of fields in a well-formed record line
pub const FIELD_COUNT: usize = 4;

/// Result of decoding one line
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedLine {
    /// A well-formed record
    Record(Transaction),
    /// The line did not split into exactly [`FIELD_COUNT`] fields
    Skipped { fields: usize },
}

/// Encode a transaction as a single line, without the terminator
pub fn encode_line(txn: &Transaction) -> String {
    format!(
        "{kind}{d}{amount}{d}{description}{d}{category}",
        kind = txn.kind,
        amount = txn.amount,
        description = txn.description,
        category = txn.category,
        d = DELIMITER,
    )
}

/// Decode one line (terminator already removed)
///
/// `line_number` is 1-based and only used for error messages. A line with the
/// wrong number of fields is reported as [`DecodedLine::Skipped`]; a line with
/// the right number of fields but an unknown kind or a bad amount is an error.
pub fn decode_line(line: &str, line_number: usize) -> BudgetResult<DecodedLine> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Ok(DecodedLine::Skipped {
            fields: fields.len(),
        });
    }

    let kind: TransactionKind = fields[0].parse().map_err(|_| {
        BudgetError::format(line_number, format!("unknown kind '{}'", fields[0]))
    })?;

    let amount = Amount::parse(fields[1])
        .map_err(|e| BudgetError::format(line_number, e.to_string()))?;

    let txn = Transaction::new(kind, amount, fields[2], fields[3])
        .map_err(|e| BudgetError::format(line_number, e.to_string()))?;

    Ok(DecodedLine::Record(txn))
}
