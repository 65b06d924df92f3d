//! # Rendering
//!
//! Turns command results into the lines the shell prints on stdout.
//!
//! ## Output Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  json (default)  one document per command                               │
//! │                  ok:    {"snapshot": {...}, "effects": [...]}           │
//! │                  error: {"error": {"code": "...", "message": "..."}}    │
//! │                                                                         │
//! │  text            human-readable view of the active section, the order   │
//! │                  summary, and the drawer when open                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::{self, Write as _};

use serde::Serialize;
use tabletreat_core::{Section, SessionSnapshot, UiEffect};

use crate::commands::CommandResponse;
use crate::error::ApiError;
use crate::state::{ConfigState, OutputFormat};

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a ApiError,
}

/// Renders a successful command.
pub fn response(config: &ConfigState, response: &CommandResponse) -> serde_json::Result<String> {
    match config.output {
        OutputFormat::Json => serde_json::to_string(response),
        OutputFormat::Text => Ok(text_response(config, response)),
    }
}

/// Renders a rejected command.
pub fn error(config: &ConfigState, err: &ApiError) -> serde_json::Result<String> {
    match config.output {
        OutputFormat::Json => serde_json::to_string(&ErrorEnvelope { error: err }),
        OutputFormat::Text => Ok(format!("error: {}", err.message)),
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn text_response(config: &ConfigState, response: &CommandResponse) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    if write_text(&mut out, config, response).is_err() {
        out.clear();
    }
    out
}

fn write_text(out: &mut String, config: &ConfigState, response: &CommandResponse) -> fmt::Result {
    let snapshot = &response.snapshot;

    for effect in &response.effects {
        writeln!(out, "({})", effect_label(effect))?;
    }

    writeln!(out, "== {} ==", section_label(snapshot.active_section))?;
    match snapshot.active_section {
        Section::Home => {
            writeln!(out, "Welcome to TableTreat. Type `catalog` to browse restaurants.")?;
        }
        Section::Catalog => write_catalog(out, snapshot)?,
        Section::Reservation => write_reservation(out, snapshot)?,
        Section::Menu => write_menu(out, config, snapshot)?,
    }

    write_order(out, config, snapshot)
}

fn write_catalog(out: &mut String, snapshot: &SessionSnapshot) -> fmt::Result {
    if snapshot.search_results.is_empty() {
        return writeln!(out, "No restaurants match \"{}\"", snapshot.search_query);
    }
    for r in &snapshot.search_results {
        writeln!(
            out,
            "  [{}] {} ({}, {:.1}, {}) {}",
            r.id, r.name, r.cuisine, r.rating, r.price_tier, r.location
        )?;
    }
    Ok(())
}

fn write_reservation(out: &mut String, snapshot: &SessionSnapshot) -> fmt::Result {
    if let Some(restaurant) = &snapshot.selected_restaurant {
        writeln!(out, "{} ({})", restaurant.name, restaurant.cuisine)?;
    }
    let Some(form) = &snapshot.reservation else {
        return Ok(());
    };

    let date = form.date.map_or_else(|| "-".to_string(), |d| d.to_string());
    let time = form.time.map_or_else(|| "-".to_string(), |t| t.to_string());
    let slots: Vec<String> = form.available_times.iter().map(ToString::to_string).collect();

    writeln!(out, "  date:   {date}")?;
    writeln!(out, "  time:   {time}  (slots: {})", slots.join(" "))?;
    writeln!(out, "  guests: {}", form.guest_count)?;
    writeln!(
        out,
        "  {}",
        if form.is_valid { "ready: type `reserve`" } else { "pick a date and a time" }
    )
}

fn write_menu(out: &mut String, config: &ConfigState, snapshot: &SessionSnapshot) -> fmt::Result {
    for category in &snapshot.menu {
        writeln!(out, "{}", category.name)?;
        for item in &category.items {
            writeln!(out, "  [{}] {}  {}", item.id, item.name, config.format_money(item.price))?;
        }
    }
    Ok(())
}

/// Order summary, plus the drawer lines when it is open. No trailing newline.
fn write_order(out: &mut String, config: &ConfigState, snapshot: &SessionSnapshot) -> fmt::Result {
    let cart = &snapshot.cart;
    write!(out, "Order: {} item(s), {}", cart.item_count, config.format_money(cart.total))?;
    if !snapshot.cart_open {
        return Ok(());
    }

    if cart.lines.is_empty() {
        write!(out, "\n  Your order is empty")?;
    }
    for line in &cart.lines {
        write!(
            out,
            "\n  {} x {} [{}]  {}",
            line.quantity,
            line.name,
            line.item_id,
            config.format_money(line.line_total())
        )?;
    }
    Ok(())
}

fn section_label(section: Section) -> &'static str {
    match section {
        Section::Home => "Home",
        Section::Catalog => "Restaurants",
        Section::Reservation => "Reservation",
        Section::Menu => "Menu",
    }
}

fn effect_label(effect: &UiEffect) -> String {
    match effect {
        UiEffect::ScrollToTop => "scroll to top".to_string(),
        UiEffect::ScrollTo(section) => format!("scroll to {}", section_label(*section)),
    }
}
