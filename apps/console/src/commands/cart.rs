//! # Cart Commands
//!
//! Order manipulation and the order drawer.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  add   ┌──────────┐  remove (last unit)  ┌──────────┐    │
//! │  │  Empty   │───────►│ In Cart  │─────────────────────►│  Empty   │    │
//! │  └──────────┘        └──────────┘                      └──────────┘    │
//! │                        │     ▲                                          │
//! │                        └─────┘  add / remove (qty > 1)                  │
//! │                                                                         │
//! │  Selecting a different restaurant empties the cart.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tabletreat_core::MenuItemId;
use tracing::debug;

use crate::commands::{CommandResponse, DrawerAction};
use crate::error::ApiError;
use crate::state::SessionState;

/// Adds one unit of a dish from the selected restaurant's menu.
///
/// ## Errors
/// - `ILLEGAL_TRANSITION` with no restaurant selected
/// - `NOT_FOUND` when the dish is not on that menu
pub fn add_to_order(state: &mut SessionState, item_id: MenuItemId) -> Result<CommandResponse, ApiError> {
    debug!(item_id = %item_id, "add_to_order command");
    state.session_mut().add_to_order(item_id)?;
    Ok(CommandResponse::capture(state))
}

/// Removes one unit of a dish; the line disappears at zero.
///
/// ## Errors
/// `NOT_FOUND` when the dish has no line in the cart.
pub fn remove_from_order(
    state: &mut SessionState,
    item_id: MenuItemId,
) -> Result<CommandResponse, ApiError> {
    debug!(item_id = %item_id, "remove_from_order command");
    state.session_mut().remove_from_order(item_id)?;
    Ok(CommandResponse::capture(state))
}

/// Shows or hides the order drawer.
pub fn toggle_drawer(state: &mut SessionState, action: DrawerAction) -> CommandResponse {
    debug!(?action, "cart drawer command");
    match action {
        DrawerAction::Open => state.session_mut().open_cart(),
        DrawerAction::Close => state.session_mut().close_cart(),
    }
    CommandResponse::capture(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::catalog::select_restaurant;
    use crate::commands::test_support;
    use crate::error::ErrorCode;
    use tabletreat_core::RestaurantId;

    #[test]
    fn test_add_and_remove() {
        let mut state = test_support::state();
        select_restaurant(&mut state, RestaurantId(2)).unwrap();

        add_to_order(&mut state, MenuItemId(202)).unwrap();
        let response = add_to_order(&mut state, MenuItemId(202)).unwrap();
        assert_eq!(response.snapshot.cart.item_count, 2);
        assert_eq!(response.snapshot.cart.total.cents(), 3398);

        let response = remove_from_order(&mut state, MenuItemId(202)).unwrap();
        assert_eq!(response.snapshot.cart.lines[0].quantity, 1);

        let response = remove_from_order(&mut state, MenuItemId(202)).unwrap();
        assert!(response.snapshot.cart.lines.is_empty());

        let err = remove_from_order(&mut state, MenuItemId(202)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_requires_selection_and_menu_item() {
        let mut state = test_support::state();
        let err = add_to_order(&mut state, MenuItemId(202)).unwrap_err();
        assert_eq!(err.code, ErrorCode::IllegalTransition);

        select_restaurant(&mut state, RestaurantId(1)).unwrap();
        let err = add_to_order(&mut state, MenuItemId(202)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_drawer() {
        let mut state = test_support::state();
        assert!(toggle_drawer(&mut state, DrawerAction::Open).snapshot.cart_open);
        assert!(!toggle_drawer(&mut state, DrawerAction::Close).snapshot.cart_open);
    }
}
