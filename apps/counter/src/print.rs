//! # Print Dispatch
//!
//! The physical printer is an opaque sink: it takes a rendered document and
//! reports success or failure, nothing more. There is no cancellation of an
//! in-flight dispatch and no automatic retry; a failure surfaces as a single
//! outcome and the clerk re-triggers the commit.

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

use dhaba_core::receipt::PAPER_WIDTH;
use dhaba_core::ReceiptDocument;

/// The sink failed. The message is for logs; callers only act on the
/// boolean outcome.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PrintError(pub String);

/// An opaque sink that accepts a formatted document.
#[async_trait]
pub trait PrintDispatcher: Send + Sync {
    async fn dispatch(&self, document: &ReceiptDocument) -> Result<(), PrintError>;
}

/// Development printer: writes the receipt to stdout between cut marks.
///
/// Emphasis flags are dropped here; a real ESC/POS transport would map them
/// to double-height.
pub struct ConsolePrinter;

#[async_trait]
impl PrintDispatcher for ConsolePrinter {
    async fn dispatch(&self, document: &ReceiptDocument) -> Result<(), PrintError> {
        let mut out = tokio::io::stdout();
        let framed = format!("\n{}{}\n", document.to_text(), "~".repeat(PAPER_WIDTH));

        out.write_all(framed.as_bytes())
            .await
            .map_err(|err| PrintError(err.to_string()))?;
        out.flush().await.map_err(|err| PrintError(err.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
