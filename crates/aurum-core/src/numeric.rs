//! # Numeric Input Module
//!
//! Every priced field in the console arrives as whatever the form control or
//! REST payload happened to contain: a number, a string, or nothing at all.
//! This module is the single place where that raw input is turned into the
//! numbers the pricing engine computes with.
//!
//! ## The Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FORM INPUT → NUMBER, THE ONLY WAY                                      │
//! │                                                                         │
//! │  "12.5"      ──► 12.5      (parse as floating point)                    │
//! │  12.5        ──► 12.5      (already numeric)                            │
//! │  ""          ──► 0.0       (empty string: zero-fallback)                │
//! │  "abc"       ──► 0.0       (unparseable: zero-fallback)                 │
//! │  null        ──► 0.0       (missing: zero-fallback)                     │
//! │  NaN         ──► 0.0       (non-finite: zero-fallback)                  │
//! │  "-3"        ──► -3.0      (negatives pass through, see below)          │
//! │                                                                         │
//! │  Counts additionally floor at 1 ("0 stones" is still one stone row).    │
//! │                                                                         │
//! │  NO input ever raises an error. A bad field is a zero contribution,     │
//! │  visible to the user as an unexpectedly low price.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Discipline
//! The engine computes on unrounded `f64` end to end. Rounding happens ONCE,
//! at the display boundary, via [`round_money`] / [`round_weight`] /
//! [`round_carat`]. Never feed a rounded value back into a calculation:
//! chained rounding compounds and the paisa drift shows up on real invoices.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Field Input
// =============================================================================

/// A raw numeric form field: `number | string | null` on the wire.
///
/// ## Example
/// ```rust
/// use aurum_core::numeric::FieldInput;
///
/// assert_eq!(FieldInput::from("12.5").amount(), 12.5);
/// assert_eq!(FieldInput::from("").amount(), 0.0);
/// assert_eq!(FieldInput::Empty.amount(), 0.0);
/// assert_eq!(FieldInput::from("2").count(), 2);
/// assert_eq!(FieldInput::from("junk").count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum FieldInput {
    /// The control delivered an actual number.
    Number(f64),
    /// The control delivered text (possibly empty, possibly garbage).
    Text(String),
    /// The field was absent or `null`.
    Empty,
}

impl FieldInput {
    /// Resolves the field to a monetary/weight amount.
    ///
    /// ## Rules
    /// - Numbers pass through if finite; `NaN`/`±inf` become 0.0
    /// - Strings are trimmed and parsed as floating point; failure → 0.0
    /// - Missing → 0.0
    /// - Negative values are NOT clamped. The legacy console only rejects
    ///   negatives in form validation, after pricing has already run; the
    ///   engine preserves that behavior. See `validation` for the rejection.
    pub fn amount(&self) -> f64 {
        match self {
            FieldInput::Number(n) if n.is_finite() => *n,
            FieldInput::Number(_) => 0.0,
            FieldInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0),
            FieldInput::Empty => 0.0,
        }
    }

    /// Resolves the field to a count that must be at least 1.
    ///
    /// Same zero-fallback as [`amount`](Self::amount), truncated to an
    /// integer, then floored at 1: a stone row with a blank or nonsense
    /// quantity still describes one stone.
    pub fn count(&self) -> i64 {
        let parsed = self.amount().trunc() as i64;
        parsed.max(1)
    }

    /// True if the field holds no usable value at all.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldInput::Empty => true,
            FieldInput::Text(s) => s.trim().is_empty(),
            FieldInput::Number(_) => false,
        }
    }
}

impl Default for FieldInput {
    fn default() -> Self {
        FieldInput::Empty
    }
}

impl From<f64> for FieldInput {
    fn from(n: f64) -> Self {
        FieldInput::Number(n)
    }
}

impl From<i64> for FieldInput {
    fn from(n: i64) -> Self {
        FieldInput::Number(n as f64)
    }
}

impl From<&str> for FieldInput {
    fn from(s: &str) -> Self {
        FieldInput::Text(s.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(s: String) -> Self {
        FieldInput::Text(s)
    }
}

// =============================================================================
// Display Rounding
// =============================================================================

/// Rounds a monetary amount to 2 decimal places for display.
///
/// ## Example
/// ```rust
/// use aurum_core::numeric::round_money;
///
/// assert_eq!(round_money(180250.004), 180250.0);
/// assert_eq!(round_money(2624.996), 2625.0);
/// ```
#[inline]
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Rounds a metal weight to 3 decimal places (milligram precision).
#[inline]
pub fn round_weight(grams: f64) -> f64 {
    (grams * 1000.0).round() / 1000.0
}

/// Rounds a carat weight to 2 decimal places.
#[inline]
pub fn round_carat(carats: f64) -> f64 {
    (carats * 100.0).round() / 100.0
}

// =============================================================================
// Currency Display
// =============================================================================

/// Formats an amount as Indian Rupees with lakh/crore digit grouping.
///
/// ## Example
/// ```rust
/// use aurum_core::numeric::format_inr;
///
/// assert_eq!(format_inr(180250.0), "₹1,80,250.00");
/// assert_eq!(format_inr(999.5), "₹999.50");
/// assert_eq!(format_inr(-550.0), "-₹550.00");
/// ```
///
/// ## Note
/// This is for logs and receipts generated server-side. The console does its
/// own locale-aware formatting on top of the raw numbers.
pub fn format_inr(amount: f64) -> String {
    let rounded = round_money(amount);
    let negative = rounded < 0.0;
    let total_paise = (rounded.abs() * 100.0).round() as i128;
    let rupees = (total_paise / 100).to_string();
    let paise = total_paise % 100;

    let grouped = if rupees.len() <= 3 {
        rupees
    } else {
        // Indian grouping: last three digits, then groups of two.
        let (head, tail) = rupees.split_at(rupees.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    format!(
        "{}₹{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        paise
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_number_passthrough() {
        assert_eq!(FieldInput::from(12.5).amount(), 12.5);
        assert_eq!(FieldInput::from(0.0).amount(), 0.0);
    }

    #[test]
    fn test_amount_string_parsing() {
        assert_eq!(FieldInput::from("12.5").amount(), 12.5);
        assert_eq!(FieldInput::from("  7 ").amount(), 7.0);
        assert_eq!(FieldInput::from("").amount(), 0.0);
        assert_eq!(FieldInput::from("12abc").amount(), 0.0);
        assert_eq!(FieldInput::from("abc").amount(), 0.0);
    }

    #[test]
    fn test_amount_never_propagates_nan() {
        assert_eq!(FieldInput::from(f64::NAN).amount(), 0.0);
        assert_eq!(FieldInput::from(f64::INFINITY).amount(), 0.0);
        assert_eq!(FieldInput::from("NaN").amount(), 0.0);
        assert_eq!(FieldInput::from("inf").amount(), 0.0);
    }

    #[test]
    fn test_amount_negative_passthrough() {
        // Deliberate: negatives survive here and are rejected by form
        // validation only. See DESIGN.md.
        assert_eq!(FieldInput::from("-3").amount(), -3.0);
        assert_eq!(FieldInput::from(-2.5).amount(), -2.5);
    }

    #[test]
    fn test_count_floors_at_one() {
        assert_eq!(FieldInput::from("2").count(), 2);
        assert_eq!(FieldInput::from(5.9).count(), 5);
        assert_eq!(FieldInput::from("").count(), 1);
        assert_eq!(FieldInput::from("0").count(), 1);
        assert_eq!(FieldInput::from("-4").count(), 1);
        assert_eq!(FieldInput::Empty.count(), 1);
    }

    #[test]
    fn test_is_blank() {
        assert!(FieldInput::Empty.is_blank());
        assert!(FieldInput::from("   ").is_blank());
        assert!(!FieldInput::from("0").is_blank());
        assert!(!FieldInput::from(0.0).is_blank());
    }

    #[test]
    fn test_serde_untagged_shapes() {
        let n: FieldInput = serde_json::from_str("12.5").unwrap();
        assert_eq!(n, FieldInput::Number(12.5));

        let i: FieldInput = serde_json::from_str("3").unwrap();
        assert_eq!(i.amount(), 3.0);

        let s: FieldInput = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(s, FieldInput::Text("12.5".to_string()));

        let e: FieldInput = serde_json::from_str("null").unwrap();
        assert_eq!(e, FieldInput::Empty);
    }

    #[test]
    fn test_rounding_precision() {
        assert_eq!(round_money(10.007), 10.01);
        assert_eq!(round_money(10.004), 10.0);
        assert_eq!(round_weight(10.00049), 10.0);
        assert_eq!(round_weight(10.0006), 10.001);
        assert_eq!(round_carat(0.555), 0.56);
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(999.0), "₹999.00");
        assert_eq!(format_inr(1000.0), "₹1,000.00");
        assert_eq!(format_inr(180250.0), "₹1,80,250.00");
        assert_eq!(format_inr(12345678.9), "₹1,23,45,678.90");
        assert_eq!(format_inr(-550.0), "-₹550.00");
    }
}
