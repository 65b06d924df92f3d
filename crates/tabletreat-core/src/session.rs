//! # Session
//!
//! One user's browsing session: selection, reservation form, cart and search
//! query over a read-only catalog.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Shell event ──► Session operation ──► Ok / rejected (state unchanged)  │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                        snapshot() + take_effects() ──► re-render        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Re-selection Policy
//! Selecting a *different* restaurant starts a fresh reservation form and
//! empties the cart: time slots and menu items belong to one restaurant.
//! Re-selecting the current restaurant keeps both.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::cart::{CartSnapshot, CartStore};
use crate::catalog::{menu_categories, CatalogProvider, MenuCategory};
use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};
use crate::reservation::{ReservationSnapshot, ReservationState};
use crate::search;
use crate::selection::SelectionState;
use crate::types::{MenuItemId, Restaurant, RestaurantId, RestaurantSummary, Section, TimeSlot, UiEffect};

/// A single-user session over catalog `C`.
pub struct Session<C> {
    catalog: C,
    clock: Box<dyn Clock>,
    selection: SelectionState,
    reservation: Option<ReservationState>,
    cart: CartStore,
    search_query: String,
    cart_open: bool,
    effects: Vec<UiEffect>,
}

impl<C: CatalogProvider> Session<C> {
    /// Fresh session: Home section, nothing selected, empty cart.
    pub fn new(catalog: C, clock: Box<dyn Clock>) -> Self {
        Session {
            catalog,
            clock,
            selection: SelectionState::new(),
            reservation: None,
            cart: CartStore::new(),
            search_query: String::new(),
            cart_open: false,
            effects: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Selection & navigation
    // -------------------------------------------------------------------------

    /// Selects a restaurant and opens its reservation form.
    pub fn select_restaurant(&mut self, id: RestaurantId) -> CoreResult<()> {
        let restaurant = self
            .catalog
            .restaurant(id)
            .ok_or(CoreError::RestaurantNotFound(id))?;

        if self.selection.selected() != Some(id) {
            if self.selection.selected().is_some() && !self.cart.is_empty() {
                info!(
                    from = ?self.selection.selected(),
                    to = %id,
                    dropped_items = self.cart.item_count(),
                    "restaurant changed, clearing order"
                );
            }
            self.cart.clear();
            self.reservation = Some(ReservationState::for_restaurant(restaurant));
        }

        let effect = self.selection.select_restaurant(restaurant);
        self.effects.push(effect);
        Ok(())
    }

    /// Switches the active section.
    pub fn navigate(&mut self, section: Section) -> CoreResult<()> {
        let effect = self.selection.navigate(section)?;
        self.effects.push(effect);
        Ok(())
    }

    /// Replaces the catalog search query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        debug!(query = %self.search_query, "search query set");
    }

    // -------------------------------------------------------------------------
    // Reservation
    // -------------------------------------------------------------------------

    /// Sets the reservation date; must not be before today.
    pub fn set_date(&mut self, date: NaiveDate) -> CoreResult<()> {
        let today = self.clock.today();
        self.reservation_mut()?.set_date(date, today)
    }

    /// Sets the reservation time; must be one of the restaurant's slots.
    pub fn set_time(&mut self, time: TimeSlot) -> CoreResult<()> {
        self.reservation_mut()?.set_time(time)
    }

    /// Sets the party size (1..=8).
    pub fn set_guest_count(&mut self, guests: u32) -> CoreResult<()> {
        self.reservation_mut()?.set_guest_count(guests)
    }

    /// Confirms the reservation and opens the menu.
    pub fn submit_reservation(&mut self) -> CoreResult<()> {
        let reservation = self
            .reservation
            .as_ref()
            .ok_or_else(|| CoreError::no_restaurant_selected(Section::Reservation))?;
        let effect = reservation.submit(&mut self.selection)?;
        self.effects.push(effect);
        Ok(())
    }

    fn reservation_mut(&mut self) -> CoreResult<&mut ReservationState> {
        self.reservation
            .as_mut()
            .ok_or_else(|| CoreError::no_restaurant_selected(Section::Reservation))
    }

    // -------------------------------------------------------------------------
    // Order
    // -------------------------------------------------------------------------

    /// Adds one unit of a dish from the selected restaurant's menu.
    ///
    /// ## Errors
    /// - `IllegalTransition` when no restaurant is selected
    /// - `MenuItemNotFound` when the dish is not on that menu
    pub fn add_to_order(&mut self, item_id: MenuItemId) -> CoreResult<()> {
        let id = self
            .selection
            .selected()
            .ok_or_else(|| CoreError::no_restaurant_selected(Section::Menu))?;
        let restaurant = self
            .catalog
            .restaurant(id)
            .ok_or(CoreError::RestaurantNotFound(id))?;
        let item = restaurant
            .menu_item(item_id)
            .ok_or(CoreError::MenuItemNotFound(item_id))?;

        self.cart.add_item(item);
        Ok(())
    }

    /// Removes one unit of a dish from the order.
    pub fn remove_from_order(&mut self, item_id: MenuItemId) -> CoreResult<()> {
        self.cart.remove_item(item_id)
    }

    /// Shows the order drawer.
    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    /// Hides the order drawer.
    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The selected restaurant, if any.
    pub fn selected_restaurant(&self) -> Option<&Restaurant> {
        self.selection
            .selected()
            .and_then(|id| self.catalog.restaurant(id))
    }

    pub fn active_section(&self) -> Section {
        self.selection.active()
    }

    pub fn reservation(&self) -> Option<&ReservationState> {
        self.reservation.as_ref()
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Drains the UI effects queued since the last call.
    pub fn take_effects(&mut self) -> Vec<UiEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Read-only view of everything the shell renders.
    pub fn snapshot(&self) -> SessionSnapshot {
        let selected = self.selected_restaurant();

        SessionSnapshot {
            active_section: self.selection.active(),
            selected_restaurant: selected.cloned(),
            reservation: self.reservation.as_ref().map(ReservationSnapshot::from),
            cart: CartSnapshot::from(&self.cart),
            cart_open: self.cart_open,
            search_query: self.search_query.clone(),
            search_results: search::filter(&self.search_query, self.catalog.restaurants())
                .into_iter()
                .map(RestaurantSummary::from)
                .collect(),
            menu: selected.map(menu_categories).unwrap_or_default(),
        }
    }
}

/// Everything the shell needs to render after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionSnapshot {
    pub active_section: Section,
    pub selected_restaurant: Option<Restaurant>,
    pub reservation: Option<ReservationSnapshot>,
    pub cart: CartSnapshot,
    pub cart_open: bool,
    pub search_query: String,
    pub search_results: Vec<RestaurantSummary>,
    /// Menu of the selected restaurant grouped by category.
    pub menu: Vec<MenuCategory>,
}
