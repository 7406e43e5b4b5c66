//! # Commit Controller
//!
//! Owns the transaction boundary between "commit to print" and "mutate
//! cart".
//!
//! ## State Machine
//! ```text
//! ┌──────┐  create bill   ┌────────────┐  dispatch ok   ┌──────┐
//! │ Idle │ ─────────────► │ Committing │ ─────────────► │ Idle │ reset()
//! └──────┘  (guarded by   └────────────┘                └──────┘
//!    ▲       has_any_          │
//!    │       selection)        │ dispatch failed
//!    └─────────────────────────┘ selection preserved for retry
//! ```
//!
//! ## The Ordering Guarantee
//! The snapshot is computed synchronously after the settings fetch and
//! before the dispatch await. Cart edits that land during the dispatch
//! apply to the next cart; they can never alter what is already printing.
//! The controller is the only component allowed to reset the cart, and it
//! does so exactly once, after a confirmed successful dispatch.

use std::sync::{Arc, Mutex};

use rand::Rng;
use tracing::{debug, error, info, warn};

use dhaba_core::{compute_snapshot, render, CatalogItem, Money, PaymentMode, TaxProfile};

use crate::error::CounterError;
use crate::print::PrintDispatcher;
use crate::settings::SettingsSource;
use crate::state::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommitPhase {
    Idle,
    Committing,
}

/// Success report for the clerk acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    /// The ticket number printed on the bill.
    pub bill_number: u32,
    pub grand_total: Money,
}

/// Orchestrates snapshot → render → dispatch → reset.
///
/// Reusable across the process lifetime, one commit at a time; there is no
/// terminal state.
pub struct CommitController {
    selection: SelectionState,
    catalog: Vec<CatalogItem>,
    settings: Arc<dyn SettingsSource>,
    printer: Arc<dyn PrintDispatcher>,
    phase: Mutex<CommitPhase>,
}

impl CommitController {
    pub fn new(
        selection: SelectionState,
        catalog: Vec<CatalogItem>,
        settings: Arc<dyn SettingsSource>,
        printer: Arc<dyn PrintDispatcher>,
    ) -> Self {
        CommitController {
            selection,
            catalog,
            settings,
            printer,
            phase: Mutex::new(CommitPhase::Idle),
        }
    }

    /// Converts the current selection into a printed bill.
    ///
    /// On success the selection is reset for the next customer. On any
    /// failure the selection is left exactly as it was, so the clerk can
    /// fix the problem and re-trigger.
    pub async fn commit(&self, payment_mode: PaymentMode) -> Result<CommitReceipt, CounterError> {
        self.begin()?;
        debug!(?payment_mode, "commit started");

        let profile = match self.settings.fetch().await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(%err, "settings unavailable, billing with defaults");
                TaxProfile::default()
            }
        };

        let bill_number: u32 = rand::thread_rng().gen_range(1..=1000);

        // Snapshot and render happen synchronously between awaits. Nothing
        // past this point can change what gets printed.
        let snapshot = self.selection.with_cart(|cart| {
            compute_snapshot(cart, &self.catalog, &profile, payment_mode, bill_number)
        });
        let snapshot = match snapshot {
            Ok(snapshot) => snapshot,
            Err(err) => {
                self.finish();
                return Err(err.into());
            }
        };
        let document = render(&snapshot);

        let outcome = self.printer.dispatch(&document).await;
        self.finish();

        match outcome {
            Ok(()) => {
                self.selection.with_cart_mut(|cart| cart.reset());
                info!(
                    bill_number,
                    total = %snapshot.grand_total,
                    items = snapshot.item_count(),
                    "bill committed"
                );
                Ok(CommitReceipt {
                    bill_number,
                    grand_total: snapshot.grand_total,
                })
            }
            Err(err) => {
                error!(%err, bill_number, "print dispatch failed, selection preserved");
                Err(err.into())
            }
        }
    }

    fn begin(&self) -> Result<(), CounterError> {
        let mut phase = self.phase.lock().expect("Phase mutex poisoned");
        if *phase == CommitPhase::Committing {
            return Err(CounterError::CommitInProgress);
        }
        if !self.selection.with_cart(|cart| cart.has_any_selection()) {
            return Err(dhaba_core::CoreError::EmptySelection.into());
        }
        *phase = CommitPhase::Committing;
        Ok(())
    }

    fn finish(&self) {
        *self.phase.lock().expect("Phase mutex poisoned") = CommitPhase::Idle;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
