//! # Validation Module
//!
//! Input validation rules for reservations and catalog data.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell                                                         │
//! │  ├── Parsing (dates, times, ids)                                       │
//! │  └── Hiding unreachable controls                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Core (THIS MODULE)                                           │
//! │  ├── Date not in the past                                              │
//! │  ├── Guest count within 1..=8                                          │
//! │  └── Catalog data sanity on load                                       │
//! │                                                                         │
//! │  The core enforces every rule even when the shell already does.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::TimeSlot;
use crate::{MAX_GUESTS, MAX_PRICE_CENTS, MAX_RATING, MIN_GUESTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Reservation Validators
// =============================================================================

/// Validates a reservation date against the current date.
///
/// ## Rules
/// - `date` may be today or any later day
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use tabletreat_core::validation::validate_reservation_date;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// assert!(validate_reservation_date(today, today).is_ok());
/// assert!(validate_reservation_date(today.pred_opt().unwrap(), today).is_err());
/// ```
pub fn validate_reservation_date(date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if date < today {
        return Err(ValidationError::InPast {
            field: "date".to_string(),
            value: date.to_string(),
            today: today.to_string(),
        });
    }

    Ok(())
}

/// Validates a guest count.
///
/// ## Rules
/// - Between MIN_GUESTS (1) and MAX_GUESTS (8), inclusive
pub fn validate_guest_count(guests: u32) -> ValidationResult<()> {
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        return Err(ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: MIN_GUESTS as i64,
            max: MAX_GUESTS as i64,
        });
    }

    Ok(())
}

/// Validates that `slot` is one of the restaurant's bookable times.
pub fn validate_time_slot(slot: TimeSlot, available: &[TimeSlot]) -> ValidationResult<()> {
    if !available.contains(&slot) {
        return Err(ValidationError::NotAllowed {
            field: format!("time {}", slot),
            allowed: available.iter().map(|t| t.to_string()).collect(),
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a display name (restaurant, dish, category).
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a restaurant rating (0.0 to 5.0).
pub fn validate_rating(rating: f32) -> ValidationResult<()> {
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: MAX_RATING as i64,
        });
    }

    Ok(())
}

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative (free items are allowed)
/// - At most `MAX_PRICE_CENTS`
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&price.cents()) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates that a restaurant's time slots contain no duplicates.
pub fn validate_available_times(times: &[TimeSlot]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(times.len());
    for slot in times {
        if !seen.insert(*slot) {
            return Err(ValidationError::Duplicate {
                field: "available time".to_string(),
                value: slot.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn slot(s: &str) -> TimeSlot {
        s.parse().unwrap()
    }

    #[test]
    fn test_validate_reservation_date() {
        assert!(validate_reservation_date(day(17), day(17)).is_ok());
        assert!(validate_reservation_date(day(30), day(17)).is_ok());
        assert!(validate_reservation_date(day(16), day(17)).is_err());
    }

    #[test]
    fn test_validate_guest_count() {
        for n in 1..=8 {
            assert!(validate_guest_count(n).is_ok());
        }
        assert!(validate_guest_count(0).is_err());
        assert!(validate_guest_count(9).is_err());
    }

    #[test]
    fn test_validate_time_slot() {
        let times = [slot("17:00"), slot("18:00")];
        assert!(validate_time_slot(slot("18:00"), &times).is_ok());

        let err = validate_time_slot(slot("12:00"), &times).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"time 12:00 must be one of: ["17:00", "18:00"]"#
        );
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Sakura Garden").is_ok());
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", "   ").is_err());
    }

    #[test]
    fn test_validate_rating() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(4.7).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(-0.5).is_err());
        assert!(validate_rating(f32::NAN).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1699)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS)).is_ok());
        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS + 1)).is_err());
        assert!(validate_price(Money::from_cents(i64::MAX)).is_err());
    }

    #[test]
    fn test_validate_available_times() {
        assert!(validate_available_times(&[slot("12:00"), slot("13:00")]).is_ok());
        assert!(validate_available_times(&[]).is_ok());
        assert!(validate_available_times(&[slot("12:00"), slot("12:00")]).is_err());
    }
}
