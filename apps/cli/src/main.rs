mod config;
mod main_lib;

use std::process::ExitCode;

use clap::Parser;
use config::Config;
use main_lib::{
    build_collector, collect_all, init_tracing, validate_dates, write_output, Args, USAGE_ERROR,
};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = Config::from_env();
    init_tracing(&config);

    if let Err(e) = validate_dates(&args) {
        tracing::error!("{}", e);
        return Ok(ExitCode::from(USAGE_ERROR));
    }

    let collector = build_collector(&config);
    let collected = collect_all(&collector, &args);
    write_output(&collected.records, args.format.into(), args.output.as_ref())?;

    if !collected.failed.is_empty() {
        tracing::warn!(
            "{} of {} symbols failed",
            collected.failed.len(),
            args.symbols.len()
        );
    }
    Ok(ExitCode::from(collected.exit_status()))
}
