//! # Cart Store
//!
//! Owns the order lines and computes totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Operation               Cart Change           │
//! │  ───────────              ─────────               ───────────           │
//! │                                                                         │
//! │  "Add to Order" / "+" ──► add_item(item) ───────► qty += 1 or new line │
//! │                                                                         │
//! │  "-" ───────────────────► remove_item(id) ──────► qty -= 1, drop at 0  │
//! │                                                                         │
//! │  Cart badge / drawer ───► item_count(), total() (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{MenuItem, MenuItemId};

/// One line of the order.
///
/// ## Design Notes
/// - `item_id`: reference to the menu item
/// - `name` / `unit_price`: frozen copy taken when the line was created, so
///   the drawer renders without going back to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub item_id: MenuItemId,
    pub name: String,
    pub unit_price: Money,
    /// Always >= 1.
    pub quantity: u32,
}

impl CartLine {
    fn from_item(item: &MenuItem) -> Self {
        CartLine {
            item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// The order cart.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same item bumps its quantity)
/// - No line ever holds quantity 0
/// - Lines keep the order in which items were first added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartStore::default()
    }

    /// Adds one unit of `item`.
    ///
    /// ## Behavior
    /// - Item already in cart: quantity + 1
    /// - Item not in cart: new line at quantity 1
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(item_id = %item.id, quantity = line.quantity, "cart line incremented");
            return;
        }

        self.lines.push(CartLine::from_item(item));
        debug!(item_id = %item.id, "cart line created");
    }

    /// Removes one unit of `item_id`.
    ///
    /// ## Behavior
    /// - Quantity above 1: quantity - 1
    /// - Quantity 1: the line is deleted
    /// - No line: `CartLineNotFound`, cart untouched
    pub fn remove_item(&mut self, item_id: MenuItemId) -> CoreResult<()> {
        let index = self
            .lines
            .iter()
            .position(|l| l.item_id == item_id)
            .ok_or(CoreError::CartLineNotFound(item_id))?;

        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
            debug!(item_id = %item_id, quantity = self.lines[index].quantity, "cart line decremented");
        } else {
            self.lines.remove(index);
            debug!(item_id = %item_id, "cart line removed");
        }

        Ok(())
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current lines, in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity held for `item_id` (0 when absent).
    pub fn quantity_of(&self, item_id: MenuItemId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.item_id == item_id)
            .map_or(0, |l| l.quantity)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all quantities (the cart badge).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().fold(0, |n, l| n.saturating_add(l.quantity))
    }

    /// Sum of price × quantity over all lines.
    ///
    /// Amounts are integer cents, so the two-decimal half-up rounding of
    /// the total is the exact sum.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart view for the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub total: Money,
}

impl From<&CartStore> for CartSnapshot {
    fn from(cart: &CartStore) -> Self {
        CartSnapshot {
            lines: cart.lines.clone(),
            item_count: cart.item_count(),
            total: cart.total(),
        }
    }
}
