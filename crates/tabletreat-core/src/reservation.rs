//! # Reservation State
//!
//! Date, time and party size for the selected restaurant.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Make a Reservation                                                     │
//! │                                                                         │
//! │  set_date(2026-10-20) ──► must not be before today                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_time(19:00) ───────► needs a date, must be a restaurant slot      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_guest_count(4) ────► 1..=8 (defaults to 2)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit() ──────────────► valid? open the Menu section                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::selection::SelectionState;
use crate::types::{Restaurant, RestaurantId, Section, TimeSlot, UiEffect};
use crate::validation::{validate_guest_count, validate_reservation_date, validate_time_slot};
use crate::DEFAULT_GUESTS;

/// Reservation form for one restaurant.
///
/// ## Invariants
/// - `time`, when set, is one of `available_times`
/// - `guest_count` is within 1..=8
/// - A rejected setter leaves every field unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationState {
    restaurant_id: RestaurantId,
    available_times: Vec<TimeSlot>,
    date: Option<NaiveDate>,
    time: Option<TimeSlot>,
    guest_count: u32,
}

impl ReservationState {
    /// Empty form for `restaurant`: no date, no time, two guests.
    pub fn for_restaurant(restaurant: &Restaurant) -> Self {
        ReservationState {
            restaurant_id: restaurant.id,
            available_times: restaurant.available_times.clone(),
            date: None,
            time: None,
            guest_count: DEFAULT_GUESTS,
        }
    }

    /// Sets the reservation date.
    ///
    /// ## Errors
    /// `ValidationError::InPast` when `date` is before `today`.
    pub fn set_date(&mut self, date: NaiveDate, today: NaiveDate) -> CoreResult<()> {
        validate_reservation_date(date, today).inspect_err(|e| warn!(%e, "date rejected"))?;
        self.date = Some(date);
        debug!(%date, "reservation date set");
        Ok(())
    }

    /// Sets the reservation time.
    ///
    /// ## Errors
    /// - `ValidationError::Required` when no date is set yet
    /// - `ValidationError::NotAllowed` when `time` is not a slot of the
    ///   restaurant
    pub fn set_time(&mut self, time: TimeSlot) -> CoreResult<()> {
        if self.date.is_none() {
            warn!(%time, "time rejected: no date set");
            return Err(ValidationError::Required {
                field: "date".to_string(),
            }
            .into());
        }
        validate_time_slot(time, &self.available_times)
            .inspect_err(|e| warn!(%e, "time rejected"))?;

        self.time = Some(time);
        debug!(%time, "reservation time set");
        Ok(())
    }

    /// Sets the party size.
    ///
    /// ## Errors
    /// `ValidationError::OutOfRange` when `guests` is outside 1..=8.
    pub fn set_guest_count(&mut self, guests: u32) -> CoreResult<()> {
        validate_guest_count(guests).inspect_err(|e| warn!(%e, "guest count rejected"))?;
        self.guest_count = guests;
        debug!(guests, "guest count set");
        Ok(())
    }

    /// True iff both date and time are set.
    pub fn is_valid(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    /// Confirms the reservation and opens the menu.
    ///
    /// ## Errors
    /// - `ValidationError::Required` naming the first missing field
    /// - `IllegalTransition` if `selection` has no restaurant
    pub fn submit(&self, selection: &mut SelectionState) -> CoreResult<UiEffect> {
        if self.date.is_none() {
            return Err(missing("date"));
        }
        if self.time.is_none() {
            return Err(missing("time"));
        }

        let effect = selection.navigate(Section::Menu)?;
        debug!(restaurant_id = %self.restaurant_id, "reservation submitted");
        Ok(effect)
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<TimeSlot> {
        self.time
    }

    pub fn guest_count(&self) -> u32 {
        self.guest_count
    }

    /// Slots the time picker offers.
    pub fn available_times(&self) -> &[TimeSlot] {
        &self.available_times
    }
}

fn missing(field: &str) -> CoreError {
    warn!(field, "reservation submit rejected");
    ValidationError::Required {
        field: field.to_string(),
    }
    .into()
}

/// Reservation view for the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReservationSnapshot {
    pub restaurant_id: RestaurantId,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub guest_count: u32,
    pub available_times: Vec<TimeSlot>,
    pub is_valid: bool,
}

impl From<&ReservationState> for ReservationSnapshot {
    fn from(r: &ReservationState) -> Self {
        ReservationSnapshot {
            restaurant_id: r.restaurant_id,
            date: r.date,
            time: r.time,
            guest_count: r.guest_count,
            available_times: r.available_times.clone(),
            is_valid: r.is_valid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, StaticCatalog};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn slot(s: &str) -> TimeSlot {
        s.parse().unwrap()
    }

    fn sakura() -> Restaurant {
        StaticCatalog::sample()
            .restaurant(RestaurantId(2))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let form = ReservationState::for_restaurant(&sakura());
        assert_eq!(form.restaurant_id(), RestaurantId(2));
        assert_eq!(form.date(), None);
        assert_eq!(form.time(), None);
        assert_eq!(form.guest_count(), 2);
        assert_eq!(form.available_times().len(), 5);
        assert!(!form.is_valid());
    }

    #[test]
    fn test_set_date_rejects_past() {
        let mut form = ReservationState::for_restaurant(&sakura());
        let yesterday = today().pred_opt().unwrap();

        let err = form.set_date(yesterday, today()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::InPast { .. })));
        assert_eq!(form.date(), None);

        form.set_date(today(), today()).unwrap();
        assert_eq!(form.date(), Some(today()));
    }

    #[test]
    fn test_set_time_requires_date() {
        let mut form = ReservationState::for_restaurant(&sakura());
        let err = form.set_time(slot("18:00")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Required { .. })));
        assert_eq!(form.time(), None);
    }

    #[test]
    fn test_set_time_rejects_unavailable_slot() {
        let mut form = ReservationState::for_restaurant(&sakura());
        form.set_date(today(), today()).unwrap();

        for bad in ["17:00", "14:00", "21:00"] {
            let err = form.set_time(slot(bad)).unwrap_err();
            assert!(matches!(err, CoreError::Validation(ValidationError::NotAllowed { .. })));
        }
        assert_eq!(form.time(), None);

        form.set_time(slot("19:00")).unwrap();
        assert_eq!(form.time(), Some(slot("19:00")));

        // A later rejection keeps the earlier choice
        assert!(form.set_time(slot("17:00")).is_err());
        assert_eq!(form.time(), Some(slot("19:00")));
    }

    #[test]
    fn test_guest_count_bounds() {
        let mut form = ReservationState::for_restaurant(&sakura());
        assert!(form.set_guest_count(0).is_err());
        assert!(form.set_guest_count(9).is_err());
        assert_eq!(form.guest_count(), 2);

        form.set_guest_count(1).unwrap();
        assert_eq!(form.guest_count(), 1);
        form.set_guest_count(8).unwrap();
        assert_eq!(form.guest_count(), 8);
    }

    #[test]
    fn test_is_valid_iff_date_and_time() {
        let mut form = ReservationState::for_restaurant(&sakura());
        assert!(!form.is_valid());

        form.set_date(today(), today()).unwrap();
        assert!(!form.is_valid());

        form.set_time(slot("12:00")).unwrap();
        assert!(form.is_valid());

        // Changing the date keeps the chosen time
        form.set_date(today().succ_opt().unwrap(), today()).unwrap();
        assert!(form.is_valid());
    }

    #[test]
    fn test_submit() {
        let restaurant = sakura();
        let mut selection = SelectionState::new();
        selection.select_restaurant(&restaurant);
        let mut form = ReservationState::for_restaurant(&restaurant);

        assert!(form.submit(&mut selection).is_err());
        assert_eq!(selection.active(), Section::Reservation);

        form.set_date(today(), today()).unwrap();
        assert!(form.submit(&mut selection).is_err());
        assert_eq!(selection.active(), Section::Reservation);

        form.set_time(slot("20:00")).unwrap();
        let effect = form.submit(&mut selection).unwrap();
        assert_eq!(effect, UiEffect::ScrollTo(Section::Menu));
        assert_eq!(selection.active(), Section::Menu);
    }

    #[test]
    fn test_snapshot() {
        let mut form = ReservationState::for_restaurant(&sakura());
        form.set_date(today(), today()).unwrap();
        form.set_time(slot("13:00")).unwrap();

        let snapshot = ReservationSnapshot::from(&form);
        assert!(snapshot.is_valid);
        assert_eq!(snapshot.time, Some(slot("13:00")));
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["date"], "2026-10-17");
        assert_eq!(json["time"], "13:00");
        assert_eq!(json["guestCount"], 2);
    }
}
