//! # Catalog Commands
//!
//! Searching the restaurant list and picking a restaurant.

use tabletreat_core::RestaurantId;
use tracing::debug;

use crate::commands::CommandResponse;
use crate::error::ApiError;
use crate::state::SessionState;

/// Sets the search filter. An empty query lists every restaurant.
///
/// Never fails: no match yields an empty `searchResults`, and the shell
/// shows its empty-state message.
pub fn search(state: &mut SessionState, query: &str) -> CommandResponse {
    debug!(query = %query, "search command");
    state.session_mut().set_search_query(query);
    CommandResponse::capture(state)
}

/// Selects a restaurant and opens its reservation form.
///
/// ## Behavior
/// - Emits a scroll-to-top effect
/// - Switching to a different restaurant resets the form and the order
///
/// ## Errors
/// `NOT_FOUND` when the id is not in the catalog.
pub fn select_restaurant(
    state: &mut SessionState,
    restaurant_id: RestaurantId,
) -> Result<CommandResponse, ApiError> {
    debug!(restaurant_id = %restaurant_id, "select_restaurant command");
    state.session_mut().select_restaurant(restaurant_id)?;
    Ok(CommandResponse::capture(state))
}
