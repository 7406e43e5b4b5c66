//! # Counter Error Type
//!
//! Unified error type for the counter surface.
//!
//! ## Error Handling Strategy
//! The commit controller is the only place collaborator failures become
//! clerk-visible outcomes. Domain errors bubble up from `dhaba-core`
//! unchanged; collaborator errors are wrapped here with enough context for
//! the clerk to know whether the selection survived (it always does, except
//! after a confirmed successful print).

use thiserror::Error;

use dhaba_core::CoreError;

use crate::catalog::CatalogError;
use crate::print::PrintError;

/// Errors surfaced by the counter app.
#[derive(Debug, Error)]
pub enum CounterError {
    /// Domain error (unknown item, empty selection). No state change.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A commit is already in flight; one bill at a time.
    #[error("A bill is already being printed")]
    CommitInProgress,

    /// The print sink rejected the document. The selection is preserved so
    /// the clerk can retry.
    #[error("Print failed, selection kept for retry: {0}")]
    PrintDispatch(#[from] PrintError),

    /// The menu could not be loaded at startup.
    #[error("Could not load menu: {0}")]
    Catalog(#[from] CatalogError),
}
