//! # dhaba-core: Pure Business Logic for Dhaba POS
//!
//! This crate is the heart of Dhaba POS. Everything a counter transaction
//! needs to be *correct* lives here as pure functions with zero I/O
//! dependencies: money arithmetic, the selection cart, bill snapshots and
//! receipt rendering.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │              ★ dhaba-core (THIS CRATE) ★                 │
//! │                                                          │
//! │  ┌────────┐ ┌───────┐ ┌──────┐ ┌──────┐ ┌─────────┐     │
//! │  │ types  │ │ money │ │ cart │ │ bill │ │ receipt │     │
//! │  │Catalog │ │ Money │ │ Cart │ │ Bill │ │ Receipt │     │
//! │  │TaxRate │ │ paise │ │ +/-  │ │ Snap │ │ Document│     │
//! │  └────────┘ └───────┘ └──────┘ └──────┘ └─────────┘     │
//! │                                                          │
//! │  NO I/O • NO PRINTER • NO NETWORK • PURE FUNCTIONS       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, TaxRate, PaymentMode, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The clerk's working selection (id → quantity)
//! - [`bill`] - Point-in-time bill snapshots and totals
//! - [`receipt`] - Thermal-format receipt rendering
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output (timestamps excepted)
//! 2. **No I/O**: printer, storage and network access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are paise (i64), never floats
//! 4. **Snapshot Discipline**: a [`bill::BillSnapshot`] is immutable once
//!    taken; later cart edits can never alter what gets printed

pub mod bill;
pub mod cart;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;

// Re-exports for convenience: `use dhaba_core::Money` instead of
// `use dhaba_core::money::Money`
pub use bill::{compute_snapshot, BillSnapshot, LineItem};
pub use cart::Cart;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use receipt::{render, ReceiptDocument, ReceiptLine};
pub use types::*;
