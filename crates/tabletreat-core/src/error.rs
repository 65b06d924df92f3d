//! # Error Types
//!
//! Domain-specific error types for tabletreat-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tabletreat-core errors (this file)                                    │
//! │  ├── CoreError        - Lookup and navigation failures                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Console shell errors (in app)                                         │
//! │  └── ApiError         - What the user sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Shell output           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recoverability
//! Every error here is recoverable: the rejected operation leaves the
//! session exactly as it was, and the caller decides how to report it.

use thiserror::Error;

use crate::types::{MenuItemId, RestaurantId, Section};

// =============================================================================
// Core Error
// =============================================================================

/// Core session errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Restaurant id is not in the catalog.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(RestaurantId),

    /// Menu item id is not on the selected restaurant's menu.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(MenuItemId),

    /// Removing an item that has no line in the cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart: [Ramen Bowl x1]
    ///      │
    ///      ▼
    /// remove_item(201)  (Sushi Platter, never added)
    ///      │
    ///      ▼
    /// CartLineNotFound(201), cart unchanged
    /// ```
    #[error("Item {0} is not in the cart")]
    CartLineNotFound(MenuItemId),

    /// Navigation to a section that is not reachable yet.
    ///
    /// ## When This Occurs
    /// - Navigating to Reservation or Menu before a restaurant is selected
    /// - Ordering from a menu before a restaurant is selected
    #[error("Cannot open {target:?}: {reason}")]
    IllegalTransition { target: Section, reason: String },

    /// Rejected input; see [`ValidationError`].
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Transition rejected because no restaurant has been selected.
    pub fn no_restaurant_selected(target: Section) -> Self {
        CoreError::IllegalTransition {
            target,
            reason: "no restaurant selected".to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These cover both user input (date, time, guests) and catalog data
/// checked when a catalog is loaded.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field not filled in yet.
    #[error("{field} is required")]
    Required { field: String },

    /// Number outside its inclusive bounds.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., unparseable date or time).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value not among the offered choices (time slots).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Date lies before the current date.
    #[error("{field} {value} is in the past (today is {today})")]
    InPast {
        field: String,
        value: String,
        today: String,
    },

    /// Duplicate value (e.g., duplicate restaurant id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result of a session operation.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CartLineNotFound(MenuItemId(201));
        assert_eq!(err.to_string(), "Item 201 is not in the cart");

        let err = CoreError::no_restaurant_selected(Section::Menu);
        assert_eq!(err.to_string(), "Cannot open Menu: no restaurant selected");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: 1,
            max: 8,
        };
        assert_eq!(err.to_string(), "guests must be between 1 and 8");

        let err = ValidationError::InPast {
            field: "date".to_string(),
            value: "2026-10-16".to_string(),
            today: "2026-10-17".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "date 2026-10-16 is in the past (today is 2026-10-17)"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "date".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
