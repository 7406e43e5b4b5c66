//! # Selection State
//!
//! Shared handle on the clerk's live cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`: the clerk loop and the commit
//! controller hold clones of the same handle, and only one of them touches
//! the cart at a time. The mutex is never held across an await: the commit
//! controller copies a snapshot out and releases the lock before any
//! suspension point, which is what keeps an in-flight bill independent of
//! later edits.

use std::sync::{Arc, Mutex};

use dhaba_core::{Cart, CatalogItem};

/// Shared, mutable selection state.
#[derive(Debug, Clone)]
pub struct SelectionState {
    cart: Arc<Mutex<Cart>>,
}

impl SelectionState {
    /// Creates an all-zero selection keyed by the given catalog.
    pub fn for_catalog(catalog: &[CatalogItem]) -> Self {
        SelectionState {
            cart: Arc::new(Mutex::new(Cart::for_catalog(catalog))),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
