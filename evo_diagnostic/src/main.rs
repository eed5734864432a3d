//! # EVO Diagnostic
//!
//! Decodes outcome codes reported by EVO modules into readable text.
//!
//! # Usage
//!
//! ```bash
//! # Print every outcome code
//! evo_diagnostic list
//!
//! # Decode a single code (exit status 2 if the code is unknown)
//! evo_diagnostic describe 4
//!
//! # Machine-readable output
//! evo_diagnostic --json describe 4
//! ```

use clap::{Parser, Subcommand};
use evo_result::Outcome;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{Level, debug, error};
use tracing_subscriber::EnvFilter;

/// EVO Diagnostic - outcome code decoder
#[derive(Parser, Debug)]
#[command(name = "evo_diagnostic")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Decode EVO outcome codes")]
#[command(long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every outcome code in order
    List,
    /// Describe a raw outcome code
    Describe {
        /// Numeric code as reported by a module
        code: u32,
    },
}

/// One decoded outcome code.
#[derive(Debug, Serialize, PartialEq)]
struct OutcomeRow {
    code: u32,
    name: &'static str,
    description: &'static str,
}

impl From<Outcome> for OutcomeRow {
    fn from(outcome: Outcome) -> Self {
        Self {
            code: outcome.code(),
            name: outcome.name(),
            description: outcome.description(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let output = match args.command {
        Command::List => {
            let rows: Vec<OutcomeRow> = Outcome::ALL.into_iter().map(OutcomeRow::from).collect();
            debug!("Listing {} outcome codes", rows.len());
            render(&rows, args.json)?
        }
        Command::Describe { code } => {
            let outcome = Outcome::try_from(code)?;
            debug!("Code {} decoded as {:?}", code, outcome);
            render(&[OutcomeRow::from(outcome)], args.json)?
        }
    };
    println!("{output}");
    Ok(())
}

/// Render rows as an aligned table or a JSON document.
fn render(rows: &[OutcomeRow], json: bool) -> Result<String, serde_json::Error> {
    if json {
        return match rows {
            [row] => serde_json::to_string_pretty(row),
            _ => serde_json::to_string_pretty(rows),
        };
    }

    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let lines: Vec<String> = rows
        .iter()
        .map(|r| format!("{:>3}  {:<width$}  {}", r.code, r.name, r.description))
        .collect();
    Ok(lines.join("\n"))
}

/// Setup tracing subscriber based on CLI arguments.
///
/// Logs go to stderr so stdout carries only the decoded output.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
