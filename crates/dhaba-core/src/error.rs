//! # Error Types
//!
//! Domain errors for dhaba-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending item id, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Both variants are contract violations or user mistakes caught before any
/// state changes; neither is fatal and neither leaves the cart modified.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An operation referenced an item id that is not in the loaded catalog.
    ///
    /// The cart is keyed by the catalog, so this is a caller bug rather than
    /// something a clerk can trigger from the selection surface.
    #[error("Unknown catalog item: {0}")]
    InvalidItem(String),

    /// The clerk tried to bill a cart with no selected quantities.
    ///
    /// Recoverable: surface a message and leave the selection untouched.
    #[error("No items selected")]
    EmptySelection,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
