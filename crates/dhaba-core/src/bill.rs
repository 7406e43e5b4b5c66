//! # Bill Snapshots
//!
//! Turns the clerk's live selection into an immutable [`BillSnapshot`], the
//! single source of truth for what gets rendered and printed.
//!
//! ## The Snapshot Discipline
//! The snapshot is computed synchronously, before the commit flow reaches
//! any suspension point. Every field is copied by value out of the cart,
//! catalog and settings, so cart edits that interleave with the print await
//! can never retroactively change an in-flight bill. This rule is the
//! load-bearing invariant of the whole commit design.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{BusinessIdentity, CatalogItem, PaymentMode, TaxProfile, TaxRate};

// =============================================================================
// Line Item
// =============================================================================

/// One selected catalog item at commit time, with its computed line total.
///
/// Name and unit price are frozen copies; a later catalog edit does not
/// reach into an already-taken snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    /// `unit_price × quantity`, exact (line amounts never round).
    pub line_total: Money,
}

// =============================================================================
// Bill Snapshot
// =============================================================================

/// Immutable, point-in-time projection of a commit-worthy selection.
///
/// Constructed once per commit attempt by [`compute_snapshot`], consumed by
/// the receipt renderer, discarded once print dispatch resolves. The printed
/// paper is the durable record; the snapshot is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillSnapshot {
    /// Best-effort human-readable ticket number in [1, 1000]. Not unique,
    /// not sequential; never use it for deduplication.
    pub bill_number: u32,
    pub timestamp: DateTime<Local>,
    pub identity: BusinessIdentity,
    pub payment_mode: PaymentMode,
    pub gst: TaxRate,
    /// Lines with quantity > 0, in catalog order.
    pub lines: Vec<LineItem>,
    /// Σ line totals, exact.
    pub subtotal: Money,
    /// `round2(subtotal * gst / 100)`, the bill's single rounding step.
    pub tax_amount: Money,
    pub grand_total: Money,
}

impl BillSnapshot {
    /// Number of distinct items on the bill.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all billed quantities.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// Joins the cart against the catalog and tax settings into a bill.
///
/// - Lines are filtered to quantity > 0, preserving catalog iteration order
///   regardless of the order the clerk selected things in
/// - The identity block resolves against the fixed defaults here, so the
///   snapshot is self-contained and the renderer stays total
/// - Fails with [`CoreError::EmptySelection`] when nothing is selected;
///   nothing is mutated on any path
pub fn compute_snapshot(
    cart: &Cart,
    catalog: &[CatalogItem],
    profile: &TaxProfile,
    payment_mode: PaymentMode,
    bill_number: u32,
) -> CoreResult<BillSnapshot> {
    let lines: Vec<LineItem> = catalog
        .iter()
        .filter_map(|item| {
            let quantity = cart.quantity(&item.id).unwrap_or(0);
            if quantity == 0 {
                return None;
            }
            Some(LineItem {
                item_id: item.id.clone(),
                name: item.name.clone(),
                unit_price: item.price(),
                quantity,
                line_total: item.price() * quantity,
            })
        })
        .collect();

    if lines.is_empty() {
        return Err(CoreError::EmptySelection);
    }

    let mut subtotal = Money::zero();
    for line in &lines {
        subtotal += line.line_total;
    }
    let tax_amount = subtotal.tax_at(profile.gst);

    Ok(BillSnapshot {
        bill_number,
        timestamp: Local::now(),
        identity: profile.identity(),
        payment_mode,
        gst: profile.gst,
        lines,
        subtotal,
        tax_amount,
        grand_total: subtotal + tax_amount,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem {
                id: "p1".to_string(),
                name: "Paneer Thali".to_string(),
                unit_price_paise: 10000, // ₹100.00
            },
            CatalogItem {
                id: "p2".to_string(),
                name: "Masala Chai".to_string(),
                unit_price_paise: 5000, // ₹50.00
            },
        ]
    }

    fn profile(gst_pct: f64) -> TaxProfile {
        TaxProfile {
            gst: TaxRate::from_percentage(gst_pct),
            ..TaxProfile::default()
        }
    }

    fn selected_cart() -> Cart {
        let catalog = catalog();
        let mut cart = Cart::for_catalog(&catalog);
        cart.increment("p1").unwrap();
        cart.increment("p1").unwrap();
        cart.increment("p2").unwrap();
        cart
    }

    #[test]
    fn test_totals_at_five_percent_gst() {
        let snapshot =
            compute_snapshot(&selected_cart(), &catalog(), &profile(5.0), PaymentMode::Cash, 42)
                .unwrap();

        assert_eq!(snapshot.subtotal, Money::from_paise(25000)); // ₹250.00
        assert_eq!(snapshot.tax_amount, Money::from_paise(1250)); // ₹12.50
        assert_eq!(snapshot.grand_total, Money::from_paise(26250)); // ₹262.50
        assert_eq!(snapshot.item_count(), 2);
        assert_eq!(snapshot.total_quantity(), 3);
        assert_eq!(snapshot.bill_number, 42);
    }

    #[test]
    fn test_zero_gst_yields_zero_tax() {
        let snapshot =
            compute_snapshot(&selected_cart(), &catalog(), &profile(0.0), PaymentMode::Cash, 7)
                .unwrap();

        assert!(snapshot.tax_amount.is_zero());
        assert_eq!(snapshot.grand_total, Money::from_paise(25000));
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let catalog = catalog();
        let cart = Cart::for_catalog(&catalog);

        let err = compute_snapshot(&cart, &catalog, &profile(5.0), PaymentMode::Cash, 1)
            .unwrap_err();
        assert!(matches!(err, CoreError::EmptySelection));
        // the cart itself is untouched
        assert!(!cart.has_any_selection());
    }

    #[test]
    fn test_only_selected_lines_appear() {
        let catalog = catalog();
        let mut cart = Cart::for_catalog(&catalog);
        cart.increment("p2").unwrap();

        let snapshot =
            compute_snapshot(&cart, &catalog, &profile(5.0), PaymentMode::Cash, 1).unwrap();

        assert_eq!(snapshot.lines.len(), 1);
        assert_eq!(snapshot.lines[0].item_id, "p2");
        assert_eq!(snapshot.lines[0].line_total, Money::from_paise(5000));
    }

    #[test]
    fn test_lines_follow_catalog_order_not_selection_order() {
        let catalog = catalog();
        let mut cart = Cart::for_catalog(&catalog);
        cart.increment("p2").unwrap();
        cart.increment("p1").unwrap();

        let snapshot =
            compute_snapshot(&cart, &catalog, &profile(5.0), PaymentMode::Cash, 1).unwrap();

        let ids: Vec<_> = snapshot.lines.iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_snapshot_is_decoupled_from_later_cart_edits() {
        let catalog = catalog();
        let mut cart = selected_cart();

        let snapshot =
            compute_snapshot(&cart, &catalog, &profile(5.0), PaymentMode::Cash, 1).unwrap();
        cart.increment("p1").unwrap();

        // the already-taken snapshot still reflects qty 2 + 1
        assert_eq!(snapshot.total_quantity(), 3);
        assert_eq!(snapshot.grand_total, Money::from_paise(26250));

        // only the next snapshot sees the edit
        let next = compute_snapshot(&cart, &catalog, &profile(5.0), PaymentMode::Cash, 2).unwrap();
        assert_eq!(next.total_quantity(), 4);
        assert_eq!(next.subtotal, Money::from_paise(35000));
    }

    #[test]
    fn test_tax_rounds_once_on_the_aggregate() {
        // three ₹0.33 lines at 5%: per-line rounding would give 6 paise,
        // the aggregate rounds to 5
        let catalog: Vec<CatalogItem> = (1..=3)
            .map(|n| CatalogItem {
                id: format!("t{n}"),
                name: format!("Toffee {n}"),
                unit_price_paise: 33,
            })
            .collect();
        let mut cart = Cart::for_catalog(&catalog);
        for item in &catalog {
            cart.increment(&item.id).unwrap();
        }

        let snapshot =
            compute_snapshot(&cart, &catalog, &profile(5.0), PaymentMode::Cash, 1).unwrap();

        assert_eq!(snapshot.subtotal, Money::from_paise(99));
        assert_eq!(snapshot.tax_amount, Money::from_paise(5));
    }

    #[test]
    fn test_identity_resolves_at_snapshot_time() {
        let snapshot =
            compute_snapshot(&selected_cart(), &catalog(), &profile(5.0), PaymentMode::Cash, 1)
                .unwrap();
        assert_eq!(snapshot.identity, BusinessIdentity::default());

        let named = TaxProfile {
            business_name: Some("Highway Dhaba".to_string()),
            ..profile(5.0)
        };
        let snapshot =
            compute_snapshot(&selected_cart(), &catalog(), &named, PaymentMode::Electronic, 1)
                .unwrap();
        assert_eq!(snapshot.identity.name, "Highway Dhaba");
        assert_eq!(snapshot.payment_mode, PaymentMode::Electronic);
    }
}
