//! Order pricing
//!
//! Pure functions over integer cents. Tax and tip are each rounded once,
//! independently; the grand total is a plain sum and never re-rounded.

use serde::{Deserialize, Serialize};

use crate::cart::CartLine;

/// Preset tip percentages offered at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipPercent {
    Fifteen,
    Eighteen,
    Twenty,
    TwentyTwo,
}

impl TipPercent {
    pub const ALL: [TipPercent; 4] = [
        TipPercent::Fifteen,
        TipPercent::Eighteen,
        TipPercent::Twenty,
        TipPercent::TwentyTwo,
    ];

    pub fn rate(&self) -> u32 {
        match self {
            Self::Fifteen => 15,
            Self::Eighteen => 18,
            Self::Twenty => 20,
            Self::TwentyTwo => 22,
        }
    }
}

impl std::fmt::Display for TipPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.rate())
    }
}

/// The customer's gratuity choice
///
/// A custom amount is taken as entered (already whole cents); a negative
/// custom tip is rejected at submission rather than silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipSelection {
    Percent(TipPercent),
    /// Fixed amount in cents
    Custom(i64),
}

impl Default for TipSelection {
    fn default() -> Self {
        Self::Percent(TipPercent::Fifteen)
    }
}

/// Subtotal: Σ price × quantity. Zero for an empty cart.
pub fn subtotal(lines: &[CartLine]) -> i64 {
    lines.iter().map(|line| line.line_total()).sum()
}

/// Tax on a subtotal. `rate` is a decimal fraction (0.02 for 2%), obtained by
/// dividing the server's percentage by 100.
pub fn tax(subtotal: i64, rate: f64) -> i64 {
    (subtotal as f64 * rate).round() as i64
}

/// Resolved tip in cents for the given selection.
pub fn tip(subtotal: i64, selection: &TipSelection) -> i64 {
    match selection {
        TipSelection::Percent(p) => (subtotal as f64 * p.rate() as f64 / 100.0).round() as i64,
        TipSelection::Custom(cents) => *cents,
    }
}

/// Grand total: plain sum of the already-rounded components.
pub fn total(subtotal: i64, tax: i64, tip: i64) -> i64 {
    subtotal + tax + tip
}

/// Derived totals for a cart. Computed fresh from cart state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: i64,
    pub tax: i64,
    pub tip: i64,
    pub total: i64,
}

impl OrderTotals {
    pub fn compute(lines: &[CartLine], tax_rate: f64, selection: &TipSelection) -> Self {
        let subtotal = subtotal(lines);
        let tax = tax(subtotal, tax_rate);
        let tip = tip(subtotal, selection);
        Self {
            subtotal,
            tax,
            tip,
            total: total(subtotal, tax, tip),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: i64, quantity: i32) -> CartLine {
        CartLine {
            item_id: Some(1),
            name: "Latte".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_subtotal_empty_cart_is_zero() {
        assert_eq!(subtotal(&[]), 0);
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let lines = vec![line(450, 2), line(325, 1)];
        assert_eq!(subtotal(&lines), 1225);
    }

    #[test]
    fn test_checkout_scenario() {
        // One line {price: 450, qty: 2} at 7% tax with a 15% tip.
        let lines = vec![line(450, 2)];
        let totals =
            OrderTotals::compute(&lines, 0.07, &TipSelection::Percent(TipPercent::Fifteen));
        assert_eq!(totals.subtotal, 900);
        assert_eq!(totals.tax, 63);
        assert_eq!(totals.tip, 135);
        assert_eq!(totals.total, 1098);
    }

    #[test]
    fn test_tax_matches_rounding() {
        assert_eq!(tax(999, 0.02), 20); // 19.98 rounds up
        assert_eq!(tax(100, 0.0), 0);
        assert_eq!(tax(0, 0.5), 0);
    }

    #[test]
    fn test_tax_monotonic_in_subtotal() {
        for rate in [0.0, 0.02, 0.07, 0.25, 1.0] {
            let mut prev = 0;
            for s in 0..2_000 {
                let t = tax(s, rate);
                assert!(t >= prev, "tax({s}, {rate}) regressed");
                prev = t;
            }
        }
    }

    #[test]
    fn test_tip_percent_rounds_against_subtotal() {
        assert_eq!(tip(999, &TipSelection::Percent(TipPercent::Fifteen)), 150); // 149.85
        assert_eq!(tip(900, &TipSelection::Percent(TipPercent::TwentyTwo)), 198);
    }

    #[test]
    fn test_tip_custom_taken_as_is() {
        assert_eq!(tip(900, &TipSelection::Custom(250)), 250);
        assert_eq!(tip(900, &TipSelection::Custom(0)), 0);
        // Negative custom tips pass through; checkout validation rejects them.
        assert_eq!(tip(900, &TipSelection::Custom(-50)), -50);
    }
}
