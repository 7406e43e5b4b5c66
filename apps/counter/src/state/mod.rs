//! # State Module
//!
//! Shared state for the counter terminal. The only mutable state the app
//! owns is the clerk's selection; the catalog and settings are read-only
//! snapshots from their collaborators.

mod selection;

pub use selection::SelectionState;
