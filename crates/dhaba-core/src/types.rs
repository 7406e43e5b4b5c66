//! # Domain Types
//!
//! Core domain types used throughout Dhaba POS.
//!
//! The catalog and the tax/identity settings are owned by external
//! collaborators; the types here are the read-only shapes this crate
//! consumes. Everything is by-value: a bill snapshot copies what it needs at
//! commit time and never holds a reference back into live state.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 500 bps = 5% GST. Integer bps keep
/// the tax computation in pure integer math end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage.
    ///
    /// This is the configuration boundary: settings store GST as a decimal
    /// percentage in [0, 100], quantized here to the nearest basis point.
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A sellable item from the external catalog.
///
/// Read-only to this crate: the catalog collaborator creates and destroys
/// items, the core only joins the clerk's selection against them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Opaque stable identifier.
    pub id: String,

    /// Display name shown to the clerk and on the receipt.
    pub name: String,

    /// Unit price in paise (smallest currency unit).
    pub unit_price_paise: i64,
}

impl CatalogItem {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }
}

// =============================================================================
// Payment Mode
// =============================================================================

/// How the customer settles the bill.
///
/// A closed variant rather than a free-form string: the receipt layout and
/// the commit report both match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// Physical cash at the counter.
    #[default]
    Cash,
    /// UPI, card or any other electronic settlement.
    Electronic,
}

impl PaymentMode {
    /// Label printed on the receipt's "Mode of Payment" line.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "cash",
            PaymentMode::Electronic => "electronic",
        }
    }
}

// =============================================================================
// Business Identity
// =============================================================================

/// The identity block printed at the top of every receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessIdentity {
    pub name: String,
    pub address: String,
    pub phone_number: String,
}

impl Default for BusinessIdentity {
    /// The fixed fallback identity. Printing is never blocked on missing
    /// configuration; a receipt with the default header beats no receipt.
    fn default() -> Self {
        BusinessIdentity {
            name: "Vajanbadhao".to_string(),
            address: "Shop No 12, RK Heights, MG Road, Pune, MAHARASHTRA".to_string(),
            phone_number: "9857387616".to_string(),
        }
    }
}

// =============================================================================
// Tax Profile
// =============================================================================

/// Snapshot of the tax/identity settings collaborator.
///
/// All identity fields are optional; whatever is absent falls back to the
/// corresponding [`BusinessIdentity`] default field at snapshot time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaxProfile {
    pub business_name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub gst: TaxRate,
}

impl TaxProfile {
    /// Resolves the identity block, field by field, against the defaults.
    pub fn identity(&self) -> BusinessIdentity {
        let fallback = BusinessIdentity::default();
        BusinessIdentity {
            name: self.business_name.clone().unwrap_or(fallback.name),
            address: self.address.clone().unwrap_or(fallback.address),
            phone_number: self.phone_number.clone().unwrap_or(fallback.phone_number),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
