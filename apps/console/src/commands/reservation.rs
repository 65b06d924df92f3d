//! # Reservation Commands
//!
//! Filling in and confirming the reservation form.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  > select 2          Sakura Garden, form opens (2 guests)               │
//! │  > date 2026-10-20   rejected if before today                           │
//! │  > time 19:00        rejected without a date or outside the slots       │
//! │  > guests 4          rejected outside 1..=8                             │
//! │  > reserve           rejected until date and time are set, then Menu    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tabletreat_core::TimeSlot;
use tracing::debug;

use crate::commands::CommandResponse;
use crate::error::ApiError;
use crate::state::SessionState;

/// Sets the reservation date.
pub fn set_date(state: &mut SessionState, date: NaiveDate) -> Result<CommandResponse, ApiError> {
    debug!(%date, "set_date command");
    state.session_mut().set_date(date)?;
    Ok(CommandResponse::capture(state))
}

/// Sets the reservation time.
pub fn set_time(state: &mut SessionState, time: TimeSlot) -> Result<CommandResponse, ApiError> {
    debug!(%time, "set_time command");
    state.session_mut().set_time(time)?;
    Ok(CommandResponse::capture(state))
}

/// Sets the party size.
pub fn set_guest_count(state: &mut SessionState, count: u32) -> Result<CommandResponse, ApiError> {
    debug!(count, "set_guest_count command");
    state.session_mut().set_guest_count(count)?;
    Ok(CommandResponse::capture(state))
}

/// Confirms the reservation; the menu opens on success.
pub fn submit(state: &mut SessionState) -> Result<CommandResponse, ApiError> {
    debug!("submit_reservation command");
    state.session_mut().submit_reservation()?;
    Ok(CommandResponse::capture(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::catalog::select_restaurant;
    use crate::commands::test_support;
    use crate::error::ErrorCode;
    use tabletreat_core::{RestaurantId, Section, UiEffect};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_form_before_selection() {
        let mut state = test_support::state();
        let err = set_date(&mut state, day(20)).unwrap_err();
        assert_eq!(err.code, ErrorCode::IllegalTransition);
    }

    #[test]
    fn test_date_rules() {
        let mut state = test_support::state();
        select_restaurant(&mut state, RestaurantId(2)).unwrap();

        let err = set_date(&mut state, day(16)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "date 2026-10-16 is in the past (today is 2026-10-17)");

        let response = set_date(&mut state, day(17)).unwrap();
        assert_eq!(response.snapshot.reservation.unwrap().date, Some(day(17)));
    }

    #[test]
    fn test_time_and_guests() {
        let mut state = test_support::state();
        select_restaurant(&mut state, RestaurantId(2)).unwrap();

        let err = set_time(&mut state, "18:00".parse().unwrap()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        set_date(&mut state, day(18)).unwrap();
        let err = set_time(&mut state, "21:00".parse().unwrap()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        set_time(&mut state, "18:00".parse().unwrap()).unwrap();

        assert!(set_guest_count(&mut state, 9).is_err());
        let response = set_guest_count(&mut state, 6).unwrap();
        let reservation = response.snapshot.reservation.unwrap();
        assert_eq!(reservation.guest_count, 6);
        assert!(reservation.is_valid);
    }

    #[test]
    fn test_submit() {
        let mut state = test_support::state();
        select_restaurant(&mut state, RestaurantId(3)).unwrap();

        let err = submit(&mut state).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "date is required");

        set_date(&mut state, day(17)).unwrap();
        set_time(&mut state, "14:00".parse().unwrap()).unwrap();
        let response = submit(&mut state).unwrap();
        assert_eq!(response.snapshot.active_section, Section::Menu);
        assert_eq!(response.effects, [UiEffect::ScrollTo(Section::Menu)]);
    }
}
