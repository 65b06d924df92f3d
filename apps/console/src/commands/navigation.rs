//! # Navigation Commands
//!
//! Switching the active section.
//!
//! ```text
//!   home ◄──► catalog ──select──► reservation ──reserve──► menu
//!
//!   `reservation` and `menu` are rejected until a restaurant is selected.
//! ```

use tabletreat_core::Section;
use tracing::debug;

use crate::commands::CommandResponse;
use crate::error::ApiError;
use crate::state::SessionState;

/// Opens `section`.
///
/// ## Errors
/// `ILLEGAL_TRANSITION` for Reservation/Menu before a restaurant is
/// selected.
pub fn navigate(state: &mut SessionState, section: Section) -> Result<CommandResponse, ApiError> {
    debug!(?section, "navigate command");
    state.session_mut().navigate(section)?;
    Ok(CommandResponse::capture(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use crate::error::ErrorCode;
    use tabletreat_core::{RestaurantId, UiEffect};

    #[test]
    fn test_free_sections() {
        let mut state = test_support::state();
        let response = navigate(&mut state, Section::Catalog).unwrap();
        assert_eq!(response.snapshot.active_section, Section::Catalog);
        assert_eq!(response.effects, [UiEffect::ScrollTo(Section::Catalog)]);

        let response = navigate(&mut state, Section::Home).unwrap();
        assert_eq!(response.snapshot.active_section, Section::Home);
    }

    #[test]
    fn test_gated_sections() {
        let mut state = test_support::state();
        for section in [Section::Reservation, Section::Menu] {
            let err = navigate(&mut state, section).unwrap_err();
            assert_eq!(err.code, ErrorCode::IllegalTransition);
        }

        state.session_mut().select_restaurant(RestaurantId(1)).unwrap();
        let response = navigate(&mut state, Section::Menu).unwrap();
        assert_eq!(response.snapshot.active_section, Section::Menu);
    }
}
