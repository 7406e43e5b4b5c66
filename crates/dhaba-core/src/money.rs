//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! In floating point, `0.1 + 0.2 = 0.30000000000000004` and a bill that is
//! off by a paisa is a bill that is wrong. Every monetary value in the
//! system is therefore an integer count of paise (1/100 rupee). The only
//! rounding a bill ever performs happens once, in [`Money::tax_at`], applied
//! to the aggregate subtotal.
//!
//! ## Usage
//! ```rust
//! use dhaba_core::money::Money;
//!
//! let price = Money::from_paise(1099); // ₹10.99
//! let line = price * 3;                // ₹32.97
//! assert_eq!(line.paise(), 3297);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (the smallest currency unit).
///
/// Single-field tuple struct over `i64`: zero-cost, `Copy`, and totally
/// ordered. Signed so that arithmetic intermediate values can go below zero
/// even though no bill amount ever should.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ```rust
    /// use dhaba_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Tax on this amount at `rate`, rounded half-up to the nearest paisa.
    ///
    /// Integer math: `(amount × bps + 5000) / 10000`, in i128 to rule out
    /// overflow. Callers apply this exactly once, to an aggregate subtotal.
    /// Rounding per line and summing can drift from the aggregate result,
    /// so line amounts stay exact and unrounded.
    ///
    /// ```rust
    /// use dhaba_core::money::Money;
    /// use dhaba_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_paise(25000);       // ₹250.00
    /// let tax = subtotal.tax_at(TaxRate::from_bps(500)); // 5%
    /// assert_eq!(tax.paise(), 1250);                 // ₹12.50
    /// ```
    pub fn tax_at(&self, rate: TaxRate) -> Money {
        let tax = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(tax as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `₹12.34`. Receipts use this directly; the counter surface has
/// no other currency formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity. Exact: a line total never rounds.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(1099)), "₹10.99");
        assert_eq!(format!("{}", Money::from_paise(500)), "₹5.00");
        assert_eq!(format!("{}", Money::from_paise(0)), "₹0.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.paise(), 1500);
    }

    #[test]
    fn test_tax_basic() {
        // ₹10.00 at 10% = ₹1.00
        let amount = Money::from_paise(1000);
        assert_eq!(amount.tax_at(TaxRate::from_bps(1000)).paise(), 100);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // ₹10.00 at 8.25% = ₹0.825 → ₹0.83
        let amount = Money::from_paise(1000);
        assert_eq!(amount.tax_at(TaxRate::from_bps(825)).paise(), 83);
    }

    #[test]
    fn test_zero_rate_yields_zero_tax() {
        let amount = Money::from_paise(123456);
        assert!(amount.tax_at(TaxRate::zero()).is_zero());
    }

    /// Documents why tax is taken on the aggregate: rounding each line and
    /// summing can disagree with rounding the summed subtotal once.
    #[test]
    fn test_aggregate_rounding_differs_from_per_line() {
        let line = Money::from_paise(33); // ₹0.33
        let rate = TaxRate::from_bps(500); // 5%

        let per_line: i64 = (0..3).map(|_| line.tax_at(rate).paise()).sum();
        let aggregate = (line * 3).tax_at(rate).paise();

        assert_eq!(per_line, 6);
        assert_eq!(aggregate, 5);
        assert_ne!(per_line, aggregate);
    }
}
