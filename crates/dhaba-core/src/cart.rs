//! # Cart
//!
//! The clerk's working selection: a quantity against every catalog item.
//!
//! ## Lifecycle
//! ```text
//! catalog (re)load ──► Cart::for_catalog ──► all quantities 0
//!                              │
//!            increment / decrement / toggle (clerk gestures)
//!                              │
//!              commit succeeds ──► reset() ──► all quantities 0
//! ```
//!
//! A quantity of 0 means "not selected" and is treated identically to
//! absence by every derived computation. Slots are kept in catalog order,
//! which is what makes bill line ordering independent of the order the
//! clerk tapped things in.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::CatalogItem;

/// One catalog item's selected quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CartSlot {
    item_id: String,
    quantity: i64,
}

/// The selection cart.
///
/// ## Invariants
/// - One slot per catalog item, in catalog iteration order
/// - Quantities are never negative (decrement clamps at 0)
/// - Operations referencing an unknown id fail with
///   [`CoreError::InvalidItem`] and change nothing
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Cart {
    slots: Vec<CartSlot>,
}

impl Cart {
    /// Creates an all-zero cart keyed by the given catalog.
    pub fn for_catalog(catalog: &[CatalogItem]) -> Self {
        Cart {
            slots: catalog
                .iter()
                .map(|item| CartSlot {
                    item_id: item.id.clone(),
                    quantity: 0,
                })
                .collect(),
        }
    }

    fn slot_mut(&mut self, item_id: &str) -> CoreResult<&mut CartSlot> {
        self.slots
            .iter_mut()
            .find(|slot| slot.item_id == item_id)
            .ok_or_else(|| CoreError::InvalidItem(item_id.to_string()))
    }

    /// Adds one to the item's quantity. No upper bound.
    ///
    /// Returns the new quantity.
    pub fn increment(&mut self, item_id: &str) -> CoreResult<i64> {
        let slot = self.slot_mut(item_id)?;
        slot.quantity += 1;
        Ok(slot.quantity)
    }

    /// Removes one from the item's quantity, clamped at 0.
    ///
    /// Returns the new quantity.
    pub fn decrement(&mut self, item_id: &str) -> CoreResult<i64> {
        let slot = self.slot_mut(item_id)?;
        slot.quantity = (slot.quantity - 1).max(0);
        Ok(slot.quantity)
    }

    /// Whole-card select gesture: 0 becomes 1, anything else becomes 0.
    ///
    /// Deliberately overwrites whatever the ± controls had accumulated;
    /// the two gestures do not compose.
    pub fn toggle(&mut self, item_id: &str) -> CoreResult<i64> {
        let slot = self.slot_mut(item_id)?;
        slot.quantity = if slot.quantity > 0 { 0 } else { 1 };
        Ok(slot.quantity)
    }

    /// Current quantity for an item.
    pub fn quantity(&self, item_id: &str) -> CoreResult<i64> {
        self.slots
            .iter()
            .find(|slot| slot.item_id == item_id)
            .map(|slot| slot.quantity)
            .ok_or_else(|| CoreError::InvalidItem(item_id.to_string()))
    }

    /// True iff at least one quantity is above zero.
    ///
    /// Recomputed on every call; this drives the "create bill" affordance
    /// and must never be a stale cached value.
    pub fn has_any_selection(&self) -> bool {
        self.slots.iter().any(|slot| slot.quantity > 0)
    }

    /// Number of distinct items currently selected.
    pub fn selected_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.quantity > 0).count()
    }

    /// Sum of all selected quantities.
    pub fn total_quantity(&self) -> i64 {
        self.slots.iter().map(|slot| slot.quantity).sum()
    }

    /// `(item_id, quantity)` pairs in catalog order.
    pub fn quantities(&self) -> impl Iterator<Item = (&str, i64)> {
        self.slots
            .iter()
            .map(|slot| (slot.item_id.as_str(), slot.quantity))
    }

    /// Sets every quantity back to zero.
    ///
    /// Only the commit controller calls this, and only after the print
    /// dispatch has confirmed success.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.quantity = 0;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem {
                id: "p1".to_string(),
                name: "Samosa".to_string(),
                unit_price_paise: 2000,
            },
            CatalogItem {
                id: "p2".to_string(),
                name: "Lassi".to_string(),
                unit_price_paise: 5000,
            },
        ]
    }

    #[test]
    fn test_starts_all_zero() {
        let cart = Cart::for_catalog(&test_catalog());
        assert!(!cart.has_any_selection());
        assert_eq!(cart.selected_count(), 0);
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.quantity("p1").unwrap(), 0);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::for_catalog(&test_catalog());

        assert_eq!(cart.increment("p1").unwrap(), 1);
        assert_eq!(cart.increment("p1").unwrap(), 2);
        assert_eq!(cart.decrement("p1").unwrap(), 1);
        assert!(cart.has_any_selection());
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut cart = Cart::for_catalog(&test_catalog());

        assert_eq!(cart.decrement("p1").unwrap(), 0);
        assert_eq!(cart.decrement("p1").unwrap(), 0);
        assert!(!cart.has_any_selection());
    }

    #[test]
    fn test_toggle() {
        let mut cart = Cart::for_catalog(&test_catalog());

        assert_eq!(cart.toggle("p1").unwrap(), 1);
        assert_eq!(cart.toggle("p1").unwrap(), 0);

        // toggle overwrites accumulated quantities
        cart.increment("p2").unwrap();
        cart.increment("p2").unwrap();
        cart.increment("p2").unwrap();
        assert_eq!(cart.toggle("p2").unwrap(), 0);
        assert!(!cart.has_any_selection());
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let mut cart = Cart::for_catalog(&test_catalog());

        assert!(matches!(
            cart.increment("nope"),
            Err(CoreError::InvalidItem(id)) if id == "nope"
        ));
        assert!(matches!(cart.decrement("nope"), Err(CoreError::InvalidItem(_))));
        assert!(matches!(cart.toggle("nope"), Err(CoreError::InvalidItem(_))));
        assert!(matches!(cart.quantity("nope"), Err(CoreError::InvalidItem(_))));

        // nothing changed
        assert!(!cart.has_any_selection());
    }

    #[test]
    fn test_zero_quantity_counts_as_unselected() {
        let mut cart = Cart::for_catalog(&test_catalog());
        cart.increment("p1").unwrap();
        cart.decrement("p1").unwrap();

        assert!(!cart.has_any_selection());
        assert_eq!(cart.selected_count(), 0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut cart = Cart::for_catalog(&test_catalog());
        cart.increment("p1").unwrap();
        cart.increment("p2").unwrap();

        cart.reset();
        let after_once: Vec<_> = cart.quantities().map(|(_, q)| q).collect();
        cart.reset();
        let after_twice: Vec<_> = cart.quantities().map(|(_, q)| q).collect();

        assert_eq!(after_once, vec![0, 0]);
        assert_eq!(after_once, after_twice);
        assert!(!cart.has_any_selection());
    }

    #[test]
    fn test_quantities_follow_catalog_order() {
        let mut cart = Cart::for_catalog(&test_catalog());
        // select in reverse order; iteration order must not care
        cart.increment("p2").unwrap();
        cart.increment("p1").unwrap();

        let ids: Vec<_> = cart.quantities().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }
}
