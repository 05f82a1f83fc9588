use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use stockquote_market_data::{
    write_records, DateInput, DateRange, MarketDataError, NormalizedRecord, OutputFormat,
    QuoteCollector, ReqwestHttpClient,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Exit status when at least one symbol could not be fetched
pub const FAILURE: u8 = 1;
/// Exit status for bad arguments, matching clap's own usage errors
pub const USAGE_ERROR: u8 = 2;

/// Fetch current quotes or daily price history for one or more symbols.
#[derive(Parser, Debug)]
#[command(name = "stockquote", version, about, long_about = None)]
pub struct Args {
    /// Ticker symbols, e.g. GOOG, BRK.B or .DJI for an index
    #[arg(required = true, value_name = "SYMBOL")]
    pub symbols: Vec<String>,

    /// First day of the history window (inclusive)
    #[arg(long, requires = "end", value_name = "DATE")]
    pub start: Option<String>,

    /// Last day of the history window (inclusive)
    #[arg(long, requires = "start", value_name = "DATE")]
    pub end: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    /// `key: value` lines, a blank line between records
    #[default]
    Text,
    /// One header row shared by all records
    Csv,
    /// One JSON object per line
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Records gathered for every symbol that succeeded, plus the failures.
#[derive(Default)]
pub struct Collected {
    pub records: Vec<NormalizedRecord>,
    pub failed: Vec<(String, MarketDataError)>,
}

impl Collected {
    /// 0 when nothing failed, [`USAGE_ERROR`] when any symbol was rejected
    /// as bad input, [`FAILURE`] otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.failed.is_empty() {
            0
        } else if self.failed.iter().any(|(_, e)| e.is_caller_error()) {
            USAGE_ERROR
        } else {
            FAILURE
        }
    }
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(io::stderr),
            )
            .init();
    }
}

pub fn build_collector(config: &Config) -> QuoteCollector {
    let http = Arc::new(ReqwestHttpClient::new(&config.http_client_config()));
    QuoteCollector::new(http, &config.endpoints)
}

/// Check the date window once up front so a bad date fails the run
/// instead of every symbol in turn.
pub fn validate_dates(args: &Args) -> Result<(), MarketDataError> {
    let start = args.start.as_deref().map(DateInput::from);
    let end = args.end.as_deref().map(DateInput::from);
    DateRange::from_bounds(start.as_ref(), end.as_ref()).map(|_| ())
}

/// Collect every symbol in order. A failing symbol is logged and skipped.
pub fn collect_all(collector: &QuoteCollector, args: &Args) -> Collected {
    let mut collected = Collected::default();

    for symbol in &args.symbols {
        let start = args.start.as_deref().map(DateInput::from);
        let end = args.end.as_deref().map(DateInput::from);

        match collector.collect(symbol, start, end) {
            Ok(records) => collected.records.extend(records),
            Err(e) => {
                tracing::error!(network = e.is_network(), "{}: {}", symbol, e);
                collected.failed.push((symbol.clone(), e));
            }
        }
    }

    collected
}

pub fn write_output(
    records: &[NormalizedRecord],
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_records(records, format, &mut writer)?;
            writer.flush()?;
            tracing::info!("Wrote {} records to {}", records.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_records(records, format, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
