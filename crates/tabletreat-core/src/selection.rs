//! # Selection State
//!
//! Which restaurant is selected and which section is active.
//!
//! ## Gating
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  navigate(Home)         always allowed                                  │
//! │  navigate(Catalog)      always allowed                                  │
//! │  navigate(Reservation)  needs a selected restaurant                     │
//! │  navigate(Menu)         needs a selected restaurant                     │
//! │                                                                         │
//! │  select_restaurant(r)   selects r, opens Reservation, ScrollToTop       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::types::{Restaurant, RestaurantId, Section, UiEffect};

/// Restaurant selection and the active navigation section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<RestaurantId>,
    active: Section,
}

impl SelectionState {
    /// No restaurant selected, Home active.
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// Selects `restaurant` and opens its reservation form.
    ///
    /// Returns the scroll request the shell should honour.
    pub fn select_restaurant(&mut self, restaurant: &Restaurant) -> UiEffect {
        self.selected = Some(restaurant.id);
        self.active = Section::Reservation;
        debug!(restaurant_id = %restaurant.id, "restaurant selected");
        UiEffect::ScrollToTop
    }

    /// Switches the active section.
    ///
    /// ## Errors
    /// `IllegalTransition` when `section` is Reservation or Menu and no
    /// restaurant is selected. The active section is left unchanged.
    pub fn navigate(&mut self, section: Section) -> CoreResult<UiEffect> {
        if section.requires_restaurant() && self.selected.is_none() {
            warn!(?section, "navigation rejected: no restaurant selected");
            return Err(CoreError::no_restaurant_selected(section));
        }

        self.active = section;
        debug!(?section, "section changed");
        Ok(UiEffect::ScrollTo(section))
    }

    /// Currently selected restaurant, if any.
    pub fn selected(&self) -> Option<RestaurantId> {
        self.selected
    }

    /// Currently active section.
    pub fn active(&self) -> Section {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, StaticCatalog};

    fn sakura() -> Restaurant {
        StaticCatalog::sample()
            .restaurant(RestaurantId(2))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = SelectionState::new();
        assert_eq!(state.selected(), None);
        assert_eq!(state.active(), Section::Home);
    }

    #[test]
    fn test_free_navigation_without_selection() {
        let mut state = SelectionState::new();
        assert_eq!(
            state.navigate(Section::Catalog).unwrap(),
            UiEffect::ScrollTo(Section::Catalog)
        );
        assert_eq!(state.active(), Section::Catalog);

        state.navigate(Section::Home).unwrap();
        assert_eq!(state.active(), Section::Home);
    }

    #[test]
    fn test_gated_navigation_without_selection() {
        let mut state = SelectionState::new();
        state.navigate(Section::Catalog).unwrap();

        for target in [Section::Menu, Section::Reservation] {
            let err = state.navigate(target).unwrap_err();
            assert!(matches!(err, CoreError::IllegalTransition { target: t, .. } if t == target));
            assert_eq!(state.active(), Section::Catalog);
        }
    }

    #[test]
    fn test_select_restaurant_opens_reservation() {
        let mut state = SelectionState::new();
        state.navigate(Section::Catalog).unwrap();

        let effect = state.select_restaurant(&sakura());
        assert_eq!(effect, UiEffect::ScrollToTop);
        assert_eq!(state.selected(), Some(RestaurantId(2)));
        assert_eq!(state.active(), Section::Reservation);

        state.navigate(Section::Menu).unwrap();
        assert_eq!(state.active(), Section::Menu);
        state.navigate(Section::Home).unwrap();
        state.navigate(Section::Reservation).unwrap();
        assert_eq!(state.active(), Section::Reservation);
    }
}
