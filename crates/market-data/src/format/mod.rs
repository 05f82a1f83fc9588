//! Rendering collected records as text, CSV or JSON lines.
//!
//! CSV output shares one header across all records, even when snapshot and
//! historical records with different keys are mixed. Columns come in three
//! tiers: identifiers (`symbol`, `Date`), every other key in ascending
//! order, then provenance (`source`, `source_url`). Cells a record has no
//! value for are left empty.

use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use csv::{Terminator, WriterBuilder};

use crate::errors::MarketDataError;
use crate::models::{NormalizedRecord, DATE_KEY, SOURCE_KEY, SOURCE_URL_KEY, SYMBOL_KEY};

/// Columns placed first, in this order, when present.
const LEADING_COLUMNS: [&str; 2] = [SYMBOL_KEY, DATE_KEY];
/// Columns placed last, in this order, when present.
const TRAILING_COLUMNS: [&str; 2] = [SOURCE_KEY, SOURCE_URL_KEY];

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// `key: value` lines, keys sorted, a blank line between records
    #[default]
    Text,
    /// One header row, one row per record
    Csv,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(MarketDataError::InputValidation(format!(
                "Unknown output format: {}",
                other
            ))),
        }
    }
}

/// The shared CSV header for `records`.
pub fn csv_columns(records: &[NormalizedRecord]) -> Vec<String> {
    let keys: BTreeSet<&str> = records.iter().flat_map(|r| r.keys()).collect();

    let leading = LEADING_COLUMNS.iter().filter(|c| keys.contains(*c)).copied();
    let middle = keys
        .iter()
        .filter(|k| !LEADING_COLUMNS.contains(*k) && !TRAILING_COLUMNS.contains(*k))
        .copied();
    let trailing = TRAILING_COLUMNS.iter().filter(|c| keys.contains(*c)).copied();

    leading
        .chain(middle)
        .chain(trailing)
        .map(str::to_string)
        .collect()
}

/// Write `records` to `writer` in `format`. Nothing is written for an empty
/// slice, not even a CSV header.
pub fn write_records<W: Write>(
    records: &[NormalizedRecord],
    format: OutputFormat,
    writer: &mut W,
) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    match format {
        OutputFormat::Text => write_text(records, writer),
        OutputFormat::Csv => write_csv(records, writer),
        OutputFormat::Json => write_json(records, writer),
    }
}

fn write_text<W: Write>(records: &[NormalizedRecord], writer: &mut W) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        let width = record.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        for (key, value) in record {
            writeln!(writer, "{:>width$}: {}", key, value, width = width)?;
        }
    }
    Ok(())
}

fn write_csv<W: Write>(records: &[NormalizedRecord], writer: &mut W) -> io::Result<()> {
    let columns = csv_columns(records);
    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(&columns)?;
    for record in records {
        csv_writer.write_record(columns.iter().map(|c| record.get(c).unwrap_or("")))?;
    }
    csv_writer.flush()
}

fn write_json<W: Write>(records: &[NormalizedRecord], writer: &mut W) -> io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writeln!(writer)?;
    }
    Ok(())
}
