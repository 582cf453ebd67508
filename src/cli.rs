//! Command-line interface: read one table file and print the converted mapping.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::error;

use crate::data::{load_from_arg, CoefficientTable};
use crate::error::TableError;

#[derive(Parser, Debug)]
#[command(name = "coefficient-tables")]
#[command(about = "Convert pipe-delimited coefficient tables into keyed records", version)]
pub struct Cli {
    /// Pipe-delimited emissivity or column water vapour table
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `key: Record(...)` line per entry
    Text,
    /// Pretty-printed JSON object keyed by record key
    Json,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .format_timestamp_secs()
        .init();

    let stdout = io::stdout();
    match execute(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(exit_status(&e))
        }
    }
}

/// 2 for a missing input path (usage error), 1 for anything else.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<TableError>() {
        Some(TableError::MissingInput) => 2,
        _ => 1,
    }
}

/// Load the requested table and render it to `out`.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let table = load_from_arg(cli.input.as_deref())?;

    match cli.format {
        OutputFormat::Text => {
            if let Some(path) = &cli.input {
                writeln!(out, " * Reading pipe-delimited values from: {}", path.display())?;
            }
            render_text(&table, out)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &table).context("serializing table")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn render_text<W: Write>(table: &CoefficientTable, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "   > {} coefficients, {} records ({} duplicate rows skipped):",
        table.shape(),
        table.len(),
        table.duplicates()
    )?;
    writeln!(out)?;
    for (key, record) in table.iter() {
        writeln!(out, "{key}: {record}")?;
    }
    Ok(())
}
