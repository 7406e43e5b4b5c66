//! # Receipt Rendering
//!
//! Turns a [`BillSnapshot`] into a [`ReceiptDocument`]: the self-contained,
//! printable representation of a bill, laid out for narrow thermal paper.
//!
//! ## Layout Contract
//! 58 mm stock is 32 monospaced columns. The section order is fixed:
//! identity block, bill header, item table, summary, totals, payment mode,
//! closing. Downstream printing hardware assumes a fixed vertical
//! layout. Exact typography is the printer's problem; emphasis is carried
//! as a flag per line so an ESC/POS transport can map it to double-height.
//!
//! The tax line is omitted entirely when the tax amount is zero; a receipt
//! is still produced.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::bill::BillSnapshot;
use crate::money::Money;

/// Printable width in characters for 58 mm paper.
pub const PAPER_WIDTH: usize = 32;

// =============================================================================
// Document Model
// =============================================================================

/// One laid-out line of the receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Already padded/aligned text, at most [`PAPER_WIDTH`] chars.
    pub text: String,
    /// Render at higher visual emphasis (bold / double height).
    pub emphasis: bool,
}

impl ReceiptLine {
    fn plain(text: impl Into<String>) -> Self {
        ReceiptLine {
            text: text.into(),
            emphasis: false,
        }
    }

    fn emphasized(text: impl Into<String>) -> Self {
        ReceiptLine {
            text: text.into(),
            emphasis: true,
        }
    }
}

/// A rendered receipt, ready for a print dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReceiptDocument {
    pub lines: Vec<ReceiptLine>,
}

impl ReceiptDocument {
    fn push(&mut self, line: ReceiptLine) {
        self.lines.push(line);
    }

    fn push_rule(&mut self) {
        self.push(ReceiptLine::plain("-".repeat(PAPER_WIDTH)));
    }

    /// Centers `text`, word-wrapping anything wider than the paper.
    fn push_centered(&mut self, text: &str, emphasis: bool) {
        for segment in wrap(text, PAPER_WIDTH) {
            let line = center(&segment);
            self.push(if emphasis {
                ReceiptLine::emphasized(line)
            } else {
                ReceiptLine::plain(line)
            });
        }
    }

    /// The document as plain monospaced text, one line per receipt row.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let _ = writeln!(out, "{}", line.text);
        }
        out
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders a bill snapshot into the fixed thermal layout.
pub fn render(snapshot: &BillSnapshot) -> ReceiptDocument {
    let mut doc = ReceiptDocument::default();

    // Identity block
    doc.push_centered(&snapshot.identity.name, true);
    doc.push_centered(&snapshot.identity.address, false);
    doc.push_centered(&format!("Phone: {}", snapshot.identity.phone_number), false);
    doc.push_rule();

    // Bill header
    doc.push(ReceiptLine::plain(format!("Bill No: {}", snapshot.bill_number)));
    doc.push(ReceiptLine::plain(format!(
        "Date: {}",
        snapshot.timestamp.format("%d/%m/%Y %I:%M %p")
    )));
    doc.push(ReceiptLine::plain("Bill To: Cash Sale"));
    doc.push_rule();

    // Item table, in snapshot (= catalog) order
    doc.push(ReceiptLine::plain(table_row("Item", "Qty", "Rate", "Total")));
    for line in &snapshot.lines {
        doc.push(ReceiptLine::plain(table_row(
            &line.name,
            &line.quantity.to_string(),
            &plain_amount(line.unit_price),
            &plain_amount(line.line_total),
        )));
    }
    doc.push_rule();

    // Summary and totals
    doc.push(ReceiptLine::plain(format!("Total Items: {}", snapshot.item_count())));
    doc.push(ReceiptLine::plain(format!(
        "Total Quantity: {}",
        snapshot.total_quantity()
    )));
    doc.push(ReceiptLine::plain(right(&format!("Sub Total: {}", snapshot.subtotal))));
    if !snapshot.tax_amount.is_zero() {
        doc.push(ReceiptLine::plain(right(&format!(
            "Total GST: {}",
            snapshot.tax_amount
        ))));
    }
    doc.push(ReceiptLine::emphasized(center(&format!(
        "Total {}",
        snapshot.grand_total
    ))));
    doc.push(ReceiptLine::plain(right(&format!("Received: {}", snapshot.grand_total))));
    doc.push(ReceiptLine::plain(right(&format!(
        "Mode of Payment: {}",
        snapshot.payment_mode.label()
    ))));
    doc.push_rule();

    // Fixed closing message
    doc.push_centered("THANK YOU VISIT AGAIN", true);

    doc
}

// =============================================================================
// Layout Helpers
// =============================================================================

/// Bare `123.45` amount for table cells; the currency glyph only appears in
/// the totals block.
fn plain_amount(amount: Money) -> String {
    format!("{}.{:02}", amount.rupees(), amount.paise_part())
}

/// Item table row: name 14, qty 3, rate 7, total 8 = 32 columns.
fn table_row(name: &str, qty: &str, rate: &str, total: &str) -> String {
    format!("{:<14}{:>3}{:>7}{:>8}", fit(name, 13), qty, rate, total)
}

/// Truncates to `max` characters (not bytes; names can be non-ASCII).
fn fit(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= PAPER_WIDTH {
        return text.to_string();
    }
    let pad = (PAPER_WIDTH - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn right(text: &str) -> String {
    format!("{:>width$}", text, width = PAPER_WIDTH)
}

/// Greedy word wrap; words wider than the paper are hard-split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                lines.push(chunk.iter().collect());
            }
            continue;
        }

        let needed = if current_len == 0 { word_len } else { current_len + 1 + word_len };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            if current_len > 0 {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

// =============================================================================
// Unit Tests
// =============================================================================
