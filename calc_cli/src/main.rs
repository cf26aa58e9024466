//! # Abacus CLI Application
//!
//! Terminal front end for the calculator engine.
//!
//! - Without arguments, opens an interactive keypad (Ratatui TUI).
//! - With `--keys`, replays a key string and prints the resulting display,
//!   e.g. `calc_cli --keys "12+3="` prints `15`.

mod tui;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calc_core::{parse_keys, Calculator};

#[derive(Parser)]
#[command(name = "calc_cli", version, about = "Four-function calculator")]
struct Cli {
    /// Keys to replay instead of opening the keypad (e.g. "12+3=").
    ///
    /// Digits, `.`, `+ - * /`, `=`, `c`/`C` (clear entry). Spaces are ignored.
    #[arg(long)]
    keys: Option<String>,

    /// Print the final engine state as JSON instead of the bare display.
    #[arg(long, requires = "keys")]
    json: bool,

    /// Write logs to this file (the interactive keypad logs nowhere otherwise).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.keys.is_none())?;

    match cli.keys {
        Some(keys) => run_batch(&keys, cli.json),
        None => tui::run(),
    }
}

/// Install the tracing subscriber. `RUST_LOG` overrides the `warn` default.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file '{}'", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        // Anything written to stderr would tear the alternate screen
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn run_batch(input: &str, json: bool) -> anyhow::Result<()> {
    let keys = parse_keys(input).with_context(|| format!("invalid key string '{}'", input))?;
    tracing::info!(count = keys.len(), "replaying keys");

    let mut calc = Calculator::new();
    calc.press_all(keys);

    if json {
        println!("{}", calc.to_json()?);
    } else {
        println!("{}", calc.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_batch_flags() {
        let cli = Cli::try_parse_from(["calc_cli", "--keys", "1+1=", "--json"]).unwrap();
        assert_eq!(cli.keys.as_deref(), Some("1+1="));
        assert!(cli.json);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_json_requires_keys() {
        assert!(Cli::try_parse_from(["calc_cli", "--json"]).is_err());
    }

    #[test]
    fn test_batch_rejects_unknown_keys() {
        let err = run_batch("2^2", false).unwrap_err();
        assert!(err.to_string().contains("2^2"));
    }
}
