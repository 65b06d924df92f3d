//! # tabletreat-core: Pure Session Logic for TableTreat
//!
//! This crate holds the state model behind TableTreat: restaurant selection,
//! reservation validity and order cart aggregation, as pure state containers
//! with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TableTreat Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Shell (console / web)                        │   │
//! │  │    Catalog ──► Reservation form ──► Menu ──► Order drawer       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / snapshots                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tabletreat-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────┐  │   │
//! │  │   │ selection │  │   cart    │  │ reservation │  │  search  │  │   │
//! │  │   │ Section   │  │ CartStore │  │ date, time  │  │  filter  │  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └──────────┘  │   │
//! │  │                        session ▲ catalog                        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SYSTEM CLOCK • NO RENDERING                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Restaurant, MenuItem, Section, TimeSlot)
//! - [`money`] - Money type with integer cents
//! - [`catalog`] - Catalog provider trait, sample catalog, menu grouping
//! - [`cart`] - Order lines and totals
//! - [`reservation`] - Reservation form and validity
//! - [`selection`] - Selected restaurant and navigation gating
//! - [`search`] - Name/cuisine filter
//! - [`session`] - Composition of the above plus the render snapshot
//! - [`error`] - Domain error types
//! - [`validation`] - Input and catalog rules
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tabletreat_core::{FixedClock, MenuItemId, RestaurantId, Session, StaticCatalog};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
//! let mut session = Session::new(StaticCatalog::sample(), Box::new(FixedClock(today)));
//!
//! session.select_restaurant(RestaurantId(2)).unwrap(); // Sakura Garden
//! session.add_to_order(MenuItemId(202)).unwrap();      // Ramen Bowl
//! session.add_to_order(MenuItemId(202)).unwrap();
//!
//! assert_eq!(session.snapshot().cart.total.to_decimal_string(), "33.98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod money;
pub mod reservation;
pub mod search;
pub mod selection;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLine, CartSnapshot, CartStore};
pub use catalog::{CatalogProvider, MenuCategory, StaticCatalog};
pub use clock::{Clock, FixedClock};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use reservation::{ReservationSnapshot, ReservationState};
pub use selection::SelectionState;
pub use session::{Session, SessionSnapshot};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest party a table can be booked for.
pub const MIN_GUESTS: u32 = 1;

/// Largest party a table can be booked for.
pub const MAX_GUESTS: u32 = 8;

/// Party size a new reservation form starts with.
pub const DEFAULT_GUESTS: u32 = 2;

/// Most expensive dish a catalog may list: $10,000.00.
pub const MAX_PRICE_CENTS: i64 = 1_000_000;

/// Upper bound of a restaurant rating.
pub const MAX_RATING: f32 = 5.0;
