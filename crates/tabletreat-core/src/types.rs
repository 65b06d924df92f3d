//! # Domain Types
//!
//! Core domain types used throughout TableTreat.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │   Restaurant    │ 1    * │    MenuItem     │                        │
//! │  │  ─────────────  │───────►│  ─────────────  │                        │
//! │  │  id             │        │  id             │                        │
//! │  │  name, cuisine  │        │  name, category │                        │
//! │  │  available_times│        │  price (Money)  │                        │
//! │  └─────────────────┘        └─────────────────┘                        │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TimeSlot     │   │    Section      │   │    UiEffect     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  "18:00"        │   │  Home, Catalog  │   │  ScrollToTop    │       │
//! │  │                 │   │  Reservation    │   │  ScrollTo(..)   │       │
//! │  └─────────────────┘   │  Menu           │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Restaurants and menu items are immutable once loaded; the session only
//! ever holds ids or clones of them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Restaurant identifier, unique within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RestaurantId(pub u32);

/// Menu item identifier, unique across the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItemId(pub u32);

macro_rules! impl_id {
    ($ty:ident, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u32>()
                    .map($ty)
                    .map_err(|_| ValidationError::InvalidFormat {
                        field: $field.to_string(),
                        reason: format!("'{}' is not a numeric id", s),
                    })
            }
        }
    };
}

impl_id!(RestaurantId, "restaurant id");
impl_id!(MenuItemId, "menu item id");

// =============================================================================
// Time Slot
// =============================================================================

/// A bookable time of day, written `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Creates a slot at the given hour and minute.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeSlot)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeSlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(TimeSlot)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "time".to_string(),
                reason: format!("expected HH:MM ({})", e),
            })
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Price Tier
// =============================================================================

/// Relative price level shown next to a restaurant ("$$").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Upscale => "$$$",
            PriceTier::Luxury => "$$$$",
        };
        f.write_str(symbol)
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    /// Unique identifier across the catalog.
    pub id: MenuItemId,

    /// Display name.
    pub name: String,

    /// Short description under the name.
    pub description: String,

    /// Price in cents. Never negative.
    pub price: Money,

    /// Menu heading this item is listed under ("Main Course").
    pub category: String,

    /// Image reference, resolved by the shell.
    pub image: String,
}

// =============================================================================
// Restaurant
// =============================================================================

/// A restaurant in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub cuisine: String,

    /// Average rating, 0.0 to 5.0.
    pub rating: f32,

    /// Price level.
    #[serde(rename = "price")]
    pub price_tier: PriceTier,

    pub description: String,
    pub location: String,
    pub image: String,

    /// Bookable times, in display order, without duplicates.
    pub available_times: Vec<TimeSlot>,

    /// Menu items, in display order.
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Looks up an item on this restaurant's menu.
    pub fn menu_item(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }
}

/// The card shown in catalog listings and search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RestaurantSummary {
    pub id: RestaurantId,
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    pub price_tier: PriceTier,
    pub location: String,
    pub image: String,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(r: &Restaurant) -> Self {
        RestaurantSummary {
            id: r.id,
            name: r.name.clone(),
            cuisine: r.cuisine.clone(),
            rating: r.rating,
            price_tier: r.price_tier,
            location: r.location.clone(),
            image: r.image.clone(),
        }
    }
}

// =============================================================================
// Section
// =============================================================================

/// Navigation section. Exactly one is active at a time.
///
/// ## State Machine
/// ```text
///   Home ◄──────► Catalog ──select_restaurant──► Reservation ──submit──► Menu
///                                                     ▲                   │
///                                                     └──── navigate ─────┘
///   Reservation and Menu are only reachable once a restaurant is selected.
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Section {
    #[default]
    Home,
    Catalog,
    Reservation,
    Menu,
}

impl Section {
    /// Sections that need a selected restaurant.
    pub const fn requires_restaurant(&self) -> bool {
        matches!(self, Section::Reservation | Section::Menu)
    }
}

// =============================================================================
// UI Effects
// =============================================================================

/// A side effect the core asks the shell to perform after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "section", rename_all = "camelCase")]
#[ts(export)]
pub enum UiEffect {
    /// Scroll the page back to the top (after selecting a restaurant).
    ScrollToTop,

    /// Bring a section into view (after navigation).
    ScrollTo(Section),
}

// =============================================================================
// Unit Tests
// =============================================================================
