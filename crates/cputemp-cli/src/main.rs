//! `cputemp`: fit per-core temperature logs
//!
//! For every input log and every core, writes one artifact holding the
//! piecewise-linear segments followed by the global least-squares line.

mod error;
mod paths;
mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use cputemp_core::{ParserConfig, SensorTable, TimeSource, DEFAULT_STEP_SECONDS};
use cputemp_fit::{fit_table, ColumnFit};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};
use crate::paths::{output_basename, output_path};
use crate::render::{render, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "cputemp",
    version,
    about = "Piecewise-linear and least-squares fits of per-core CPU temperature logs"
)]
struct Cli {
    /// Raw sensor logs, one record per line
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Seconds between consecutive records
    #[arg(
        long,
        default_value_t = DEFAULT_STEP_SECONDS,
        value_parser = clap::value_parser!(i64).range(1..),
        conflicts_with = "leading_time"
    )]
    step: i64,

    /// Read the timestamp from the first field of every record
    #[arg(long)]
    leading_time: bool,

    /// Expect bare numbers instead of `+61.0°C` style readings
    #[arg(long)]
    no_units: bool,

    /// Directory receiving the per-core artifacts
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Artifact format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print results without writing any files
    #[arg(long)]
    stdout_only: bool,

    /// Do not echo results to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn parser_config(&self) -> ParserConfig {
        let time_source = if self.leading_time {
            TimeSource::Leading
        } else {
            TimeSource::Stepped { step: self.step }
        };
        ParserConfig::default()
            .with_time_source(time_source)
            .with_strip_units(!self.no_units)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn write_artifact(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

/// Render, echo and write one column's artifact
fn emit_column(
    cli: &Cli,
    config: &ParserConfig,
    basename: &str,
    fit: &ColumnFit,
) -> CliResult<()> {
    let contents = render(fit, config, cli.format)
        .with_context(|| format!("rendering {}", fit.core))?;

    if !cli.quiet {
        print!("{contents}");
    }
    if cli.stdout_only {
        return Ok(());
    }

    let path = output_path(&cli.output_dir, basename, fit.core, cli.format.extension());
    write_artifact(&path, &contents)?;
    info!(path = %path.display(), "wrote column report");
    if !cli.quiet {
        println!("Results saved to {}\n", path.display());
    }
    Ok(())
}

/// Process one input; returns every failure encountered
fn process_file(cli: &Cli, config: &ParserConfig, input: &Path) -> Vec<CliError> {
    let table = match SensorTable::from_path(input, config) {
        Ok(table) => table,
        Err(e) => return vec![CliError::from_load(input.to_path_buf(), e)],
    };
    debug!(input = %input.display(), rows = table.len(), "loaded table");
    if table.len() < 2 {
        warn!(input = %input.display(), "fewer than two records; nothing to fit");
    }

    let basename = output_basename(input);
    let mut failures = Vec::new();
    for (core, fit) in fit_table(&table) {
        let outcome = fit
            .map_err(|source| CliError::Column {
                path: input.to_path_buf(),
                core,
                source,
            })
            .and_then(|fit| emit_column(cli, config, &basename, &fit));
        if let Err(e) = outcome {
            failures.push(e);
        }
    }
    failures
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.parser_config();
    debug!(?config, inputs = cli.inputs.len(), "starting");

    let mut worst: Option<CliError> = None;
    for input in &cli.inputs {
        for failure in process_file(&cli, &config, input) {
            eprintln!("Error: {failure}");
            if worst
                .as_ref()
                .is_none_or(|w| failure.severity() > w.severity())
            {
                worst = Some(failure);
            }
        }
    }

    match worst {
        Some(failure) => ExitCode::from(failure.exit_code()),
        None => ExitCode::SUCCESS,
    }
}
