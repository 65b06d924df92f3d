//! # TableTreat Console Library
//!
//! Line-oriented shell over the TableTreat core: reads one command per line,
//! applies it to the session, and prints the resulting snapshot.
//!
//! ## Module Organization
//! ```text
//! tabletreat_console/
//! ├── lib.rs          ◄─── You are here (flags, logging, shell loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration (defaults, env, flags)
//! │   ├── catalog.rs  ◄─── Catalog loading (sample or JSON file)
//! │   └── session.rs  ◄─── Session owner + local clock
//! ├── commands/
//! │   ├── mod.rs      ◄─── Line parsing and dispatch
//! │   ├── navigation.rs
//! │   ├── catalog.rs  ◄─── search, select
//! │   ├── reservation.rs
//! │   └── cart.rs     ◄─── add, remove, drawer
//! ├── render.rs       ◄─── JSON / text output
//! └── error.rs        ◄─── API and startup error types
//! ```
//!
//! ## Output Streams
//! stdout carries only rendered responses; logs go to stderr.

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{execute, CommandLine, Outcome};
use error::ApiError;
use state::{load_catalog, ConfigState, OutputFormat, SessionState};

/// Process flags. Each one overrides its `TABLETREAT_*` variable.
#[derive(Debug, Default, Parser)]
#[command(name = "tabletreat")]
#[command(about = "Browse restaurants, book a table and build an order")]
pub struct Cli {
    /// JSON catalog file (defaults to the built-in sample)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Currency symbol for text output
    #[arg(long)]
    pub currency_symbol: Option<String>,

    /// Pin today's date for reservation checks
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Response format
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(self, config: &mut ConfigState) {
        if let Some(path) = self.catalog {
            config.catalog_path = Some(path);
        }
        if let Some(symbol) = self.currency_symbol {
            config.currency_symbol = symbol;
        }
        if let Some(today) = self.today {
            config.today = Some(today);
        }
        if let Some(output) = self.output {
            config.output = output;
        }
    }
}

/// Runs the shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ──────► stderr, RUST_LOG or the default filter   │
/// │  2. Load Configuration ──────► defaults < TABLETREAT_* < flags          │
/// │  3. Load Catalog ────────────► sample, or the JSON file (validated)     │
/// │  4. Start Session ───────────► local date, or the pinned `today`        │
/// │  5. Read Commands ───────────► until `quit` or end of input             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();
    info!("Starting TableTreat console");

    let mut config = ConfigState::from_env().context("invalid environment configuration")?;
    cli.apply(&mut config);
    info!(?config, "Configuration loaded");

    let catalog = load_catalog(config.catalog_path.as_deref()).context("failed to load catalog")?;
    let mut state = SessionState::new(catalog, &config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_script(&mut state, &config, stdin.lock(), stdout.lock()).context("shell I/O failed")?;

    info!("Shell closed");
    Ok(())
}

/// Feeds every line of `input` to the session and writes one rendered
/// response per command to `output`.
///
/// Blank lines and lines starting with `#` are skipped. A rejected command,
/// or a line that is not valid UTF-8, prints its error and the loop continues.
pub fn run_script<R, W>(
    state: &mut SessionState,
    config: &ConfigState,
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                let err = ApiError::validation("input line is not valid UTF-8");
                warn!(%e, "unreadable input line");
                writeln!(output, "{}", render::error(config, &err)?)?;
                continue;
            }
        };
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let rendered = match CommandLine::parse_line(line).and_then(|command| execute(state, command)) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue(response)) => match render::response(config, &response) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(%e, "failed to render response");
                    render::error(config, &ApiError::internal(e.to_string()))?
                }
            },
            Err(err) => {
                warn!(%err, line, "command rejected");
                render::error(config, &err)?
            }
        };

        writeln!(output, "{rendered}")?;
    }

    output.flush()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=warn` - Only rejected commands and failures
/// - `RUST_LOG=tabletreat_core=trace` - Everything from the core
/// - Default: INFO, DEBUG for tabletreat crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tabletreat=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::commands::test_support;

    fn run_lines(state: &mut SessionState, config: &ConfigState, script: &str) -> Vec<String> {
        run_bytes(state, config, script.as_bytes())
    }

    fn run_bytes(state: &mut SessionState, config: &ConfigState, script: &[u8]) -> Vec<String> {
        let mut out = Vec::new();
        run_script(state, config, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_booking_script() {
        let mut state = test_support::state();
        let script = "\
# book at Sakura Garden and order two ramen
catalog
select 2
date 2026-10-20
time 19:00
guests 4
reserve

add 202
add 202
show
";
        let lines = run_lines(&mut state, &ConfigState::default(), script);
        assert_eq!(lines.len(), 9);

        let last: serde_json::Value = serde_json::from_str(&lines[8]).unwrap();
        assert_eq!(last["snapshot"]["activeSection"], "menu");
        assert_eq!(last["snapshot"]["cart"]["itemCount"], 2);
        assert_eq!(last["snapshot"]["cart"]["total"], 3398);
        assert_eq!(last["snapshot"]["reservation"]["time"], "19:00");
    }

    #[test]
    fn test_rejections_keep_running() {
        let mut state = test_support::state();
        let script = "menu\nselect 42\nfly away\nselect 1\n";
        let lines = run_lines(&mut state, &ConfigState::default(), script);
        assert_eq!(lines.len(), 4);

        for (line, code) in lines.iter().zip(["ILLEGAL_TRANSITION", "NOT_FOUND", "VALIDATION_ERROR"]) {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["error"]["code"], code);
        }
        assert_eq!(state.session().active_section(), tabletreat_core::Section::Reservation);
    }

    #[test]
    fn test_invalid_utf8_line_keeps_running() {
        let mut state = test_support::state();
        let lines = run_bytes(&mut state, &ConfigState::default(), b"catalog\n\xff\xfe\nselect 2\n");
        assert_eq!(lines.len(), 3);

        let rejected: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(rejected["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            state.session().selected_restaurant().map(|r| r.id),
            Some(tabletreat_core::RestaurantId(2))
        );
    }

    #[test]
    fn test_last_line_without_newline_runs() {
        let mut state = test_support::state();
        let lines = run_lines(&mut state, &ConfigState::default(), "catalog\nselect 1");
        assert_eq!(lines.len(), 2);
        assert!(state.session().selected_restaurant().is_some());
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut state = test_support::state();
        let lines = run_lines(&mut state, &ConfigState::default(), "catalog\nquit\nselect 1\n");
        assert_eq!(lines.len(), 1);
        assert!(state.session().selected_restaurant().is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "tabletreat",
            "--currency-symbol",
            "£",
            "--today",
            "2026-12-24",
            "--output",
            "text",
        ])
        .unwrap();

        let mut config = ConfigState {
            currency_symbol: "€".to_string(),
            catalog_path: Some(PathBuf::from("menu.json")),
            ..ConfigState::default()
        };
        cli.apply(&mut config);

        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2026, 12, 24));
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.catalog_path, Some(PathBuf::from("menu.json")));
    }
}
