//! # TableTreat Console Entry Point
//!
//! ```text
//! $ tabletreat --today 2026-10-17 --output text
//! > select 2
//! > date 2026-10-20
//! > time 19:00
//! > reserve
//! > add 202
//! ```
//!
//! The actual setup is in lib.rs so the shell loop can be tested.

use clap::Parser;
use tabletreat_console::Cli;

fn main() -> anyhow::Result<()> {
    tabletreat_console::run(Cli::parse())
}
