//! # Commands Module
//!
//! Every user action the shell accepts, one line per command.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (parsing, dispatch, response)
//! ├── navigation.rs   ◄─── home, catalog, reservation, menu
//! ├── catalog.rs      ◄─── search, select
//! ├── reservation.rs  ◄─── date, time, guests, reserve
//! └── cart.rs         ◄─── add, remove, cart open|close
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  > add 202                                                              │
//! │         │                                                               │
//! │         │ CommandLine::parse_line (clap)                                │
//! │         ▼                                                               │
//! │  ShellCommand::Add { item_id: 202 }                                     │
//! │         │                                                               │
//! │         │ execute()                                                     │
//! │         ▼                                                               │
//! │  cart::add_to_order(state, 202) -> Result<CommandResponse, ApiError>    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  { "snapshot": {...}, "effects": [] }                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod navigation;
pub mod reservation;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tabletreat_core::{MenuItemId, RestaurantId, Section, SessionSnapshot, TimeSlot, UiEffect};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// A parsed input line.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

impl CommandLine {
    /// Parses one line of user input.
    ///
    /// `search` keeps the rest of the line verbatim, spacing included; every
    /// other command is split on whitespace and parsed by clap.
    pub fn parse_line(line: &str) -> Result<ShellCommand, ApiError> {
        if let Some(query) = search_query(line) {
            return Ok(ShellCommand::Search { query: query.to_string() });
        }
        CommandLine::try_parse_from(line.split_whitespace())
            .map(|parsed| parsed.command)
            .map_err(|e| ApiError::validation(e.render().to_string().trim_end()))
    }
}

/// The raw query after a leading `search` keyword, minus the one separator.
fn search_query(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("search")?;
    match rest.chars().next() {
        None => Some(""),
        Some(sep) if sep.is_whitespace() => Some(&rest[sep.len_utf8()..]),
        Some(_) => None,
    }
}

/// Commands accepted by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ShellCommand {
    /// Go to the landing section
    Home,
    /// Browse the restaurant list
    Catalog,
    /// Open the reservation form (needs a selected restaurant)
    Reservation,
    /// Open the menu (needs a selected restaurant)
    Menu,
    /// Filter restaurants by name or cuisine; an empty query clears the filter
    Search {
        #[arg(skip)]
        query: String,
    },
    /// Select a restaurant by id
    Select { restaurant_id: RestaurantId },
    /// Set the reservation date (YYYY-MM-DD)
    Date { date: NaiveDate },
    /// Set the reservation time (HH:MM)
    Time { time: TimeSlot },
    /// Set the party size (1-8)
    Guests { count: u32 },
    /// Confirm the reservation and open the menu
    Reserve,
    /// Add one unit of a menu item to the order
    Add { item_id: MenuItemId },
    /// Remove one unit of a menu item from the order
    Remove { item_id: MenuItemId },
    /// Show or hide the order drawer
    Cart {
        #[arg(value_enum)]
        action: DrawerAction,
    },
    /// Print the current state without changing it
    Show,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Order drawer toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DrawerAction {
    Open,
    Close,
}

/// What the shell renders after a successful command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub snapshot: SessionSnapshot,
    /// Side effects requested by the command, in order.
    pub effects: Vec<UiEffect>,
}

impl CommandResponse {
    /// Captures the snapshot and drains pending effects.
    pub fn capture(state: &mut SessionState) -> Self {
        let session = state.session_mut();
        CommandResponse {
            snapshot: session.snapshot(),
            effects: session.take_effects(),
        }
    }
}

/// Result of dispatching one command.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Render this and keep reading.
    Continue(CommandResponse),
    /// Stop the shell.
    Quit,
}

/// Dispatches a parsed command into the session.
pub fn execute(state: &mut SessionState, command: ShellCommand) -> Result<Outcome, ApiError> {
    debug!(?command, "execute");

    let response = match command {
        ShellCommand::Home => navigation::navigate(state, Section::Home)?,
        ShellCommand::Catalog => navigation::navigate(state, Section::Catalog)?,
        ShellCommand::Reservation => navigation::navigate(state, Section::Reservation)?,
        ShellCommand::Menu => navigation::navigate(state, Section::Menu)?,
        ShellCommand::Search { query } => catalog::search(state, &query),
        ShellCommand::Select { restaurant_id } => catalog::select_restaurant(state, restaurant_id)?,
        ShellCommand::Date { date } => reservation::set_date(state, date)?,
        ShellCommand::Time { time } => reservation::set_time(state, time)?,
        ShellCommand::Guests { count } => reservation::set_guest_count(state, count)?,
        ShellCommand::Reserve => reservation::submit(state)?,
        ShellCommand::Add { item_id } => cart::add_to_order(state, item_id)?,
        ShellCommand::Remove { item_id } => cart::remove_from_order(state, item_id)?,
        ShellCommand::Cart { action } => cart::toggle_drawer(state, action),
        ShellCommand::Show => CommandResponse::capture(state),
        ShellCommand::Quit => return Ok(Outcome::Quit),
    };

    Ok(Outcome::Continue(response))
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use tabletreat_core::StaticCatalog;

    use crate::state::{ConfigState, SessionState};

    /// Sample catalog, "today" pinned to 2026-10-17.
    pub fn state() -> SessionState {
        let config = ConfigState {
            today: NaiveDate::from_ymd_opt(2026, 10, 17),
            ..ConfigState::default()
        };
        SessionState::new(StaticCatalog::sample(), &config)
    }
}
