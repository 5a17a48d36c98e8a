//! # Sales Order Entry
//!
//! The order-entry screen aggregates priced line items into one sale.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Operations                                     │
//! │                                                                         │
//! │  Console Action            Core Call                State Change        │
//! │  ──────────────            ─────────                ────────────        │
//! │                                                                         │
//! │  Add item to order ──────► add_line() ────────────► lines.push(line)    │
//! │                                                                         │
//! │  Edit priced fields ─────► update_line() ─────────► lines[i].request    │
//! │                                                                         │
//! │  Remove row ─────────────► remove_line() ─────────► lines.remove(i)     │
//! │                                                                         │
//! │  Discard order ──────────► clear() ───────────────► lines.clear()       │
//! │                                                                         │
//! │  Summary panel ──────────► totals() ──────────────► (recomputed)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A line freezes its *pricing inputs* (the [`PricingRequest`]) when added,
//! so a later catalog rate refresh never silently reprices an open order.
//! Totals are NOT frozen: they are recomputed from the frozen inputs on
//! every read, the same recompute-never-cache rule the item forms follow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::pricing::{PricingRequest, PricingResult};
use crate::MAX_ORDER_LINES;

// =============================================================================
// Order Line
// =============================================================================

/// One jewelry item on a sales order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    /// Line identity (UUID v4), stable across edits of the same order.
    pub id: String,

    /// Item name at time of adding (frozen).
    pub item_name: String,

    /// SKU at time of adding (frozen).
    pub sku: String,

    /// The frozen pricing inputs for this item.
    pub request: PricingRequest,

    /// When this line was added to the order.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl OrderLine {
    /// Creates a new line with a fresh identity from the item's current
    /// form state.
    pub fn new(item_name: &str, sku: &str, request: PricingRequest) -> Self {
        OrderLine {
            id: Uuid::new_v4().to_string(),
            item_name: item_name.to_string(),
            sku: sku.to_string(),
            request,
            added_at: Utc::now(),
        }
    }

    /// Prices this line from its frozen inputs.
    #[inline]
    pub fn price(&self) -> PricingResult {
        self.request.price()
    }
}

// =============================================================================
// Order
// =============================================================================

/// An in-progress sales order.
///
/// ## Invariants
/// - Lines are unique by `id`
/// - Maximum lines: [`MAX_ORDER_LINES`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Lines on the order.
    pub lines: Vec<OrderLine>,

    /// When the order was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds an item to the order and returns the new line's id.
    pub fn add_line(
        &mut self,
        item_name: &str,
        sku: &str,
        request: PricingRequest,
    ) -> CoreResult<String> {
        if self.lines.len() >= MAX_ORDER_LINES {
            return Err(CoreError::OrderTooLarge {
                max: MAX_ORDER_LINES,
            });
        }

        let line = OrderLine::new(item_name, sku, request);
        let id = line.id.clone();
        self.lines.push(line);
        Ok(id)
    }

    /// Replaces the frozen pricing inputs of an existing line (the operator
    /// reopened the row and edited its fields).
    pub fn update_line(&mut self, line_id: &str, request: PricingRequest) -> CoreResult<()> {
        match self.lines.iter_mut().find(|l| l.id == line_id) {
            Some(line) => {
                line.request = request;
                Ok(())
            }
            None => Err(CoreError::LineNotFound(line_id.to_string())),
        }
    }

    /// Removes a line from the order by id.
    pub fn remove_line(&mut self, line_id: &str) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.id != line_id);

        if self.lines.len() == initial_len {
            Err(CoreError::LineNotFound(line_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Discards all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of lines on the order.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Recomputes the order totals from every line's frozen inputs.
    pub fn totals(&self) -> OrderTotals {
        let mut totals = OrderTotals {
            line_count: self.lines.len(),
            ..Default::default()
        };
        for line in &self.lines {
            let result = line.price();
            totals.total_before_tax += result.selling_price_before_tax;
            totals.total_gst += result.gst.total;
            totals.grand_total += result.final_price;
        }
        totals
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Order summary for the console's totals panel. Unrounded, like every
/// other computed amount; the display layer rounds once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderTotals {
    pub line_count: usize,
    pub total_before_tax: f64,
    pub total_gst: f64,
    pub grand_total: f64,
}

impl From<&Order> for OrderTotals {
    fn from(order: &Order) -> Self {
        order.totals()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FieldInput;
    use crate::tax::TaxScheme;
    use crate::types::MetalLine;

    fn gold_ring(weight: f64, rate: f64, gst_pct: f64) -> PricingRequest {
        PricingRequest {
            metals: vec![MetalLine {
                metal_type: "gold".to_string(),
                purity: "22k".to_string(),
                weight: FieldInput::from(weight),
                rate_per_gram: FieldInput::from(rate),
                ..Default::default()
            }],
            tax: TaxScheme::FlatGst {
                gst_pct: FieldInput::from(gst_pct),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_add_and_total() {
        let mut order = Order::new();
        order.add_line("Gold ring", "RING-001", gold_ring(10.0, 5000.0, 0.0)).unwrap();
        order.add_line("Gold chain", "CHAIN-001", gold_ring(20.0, 5000.0, 0.0)).unwrap();

        let totals = order.totals();
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_before_tax, 150_000.0);
        assert_eq!(totals.grand_total, 150_000.0);
    }

    #[test]
    fn test_totals_include_gst() {
        let mut order = Order::new();
        order.add_line("Gold ring", "RING-001", gold_ring(10.0, 5000.0, 3.0)).unwrap();

        let totals = order.totals();
        assert_eq!(totals.total_before_tax, 50_000.0);
        assert_eq!(totals.total_gst, 1500.0);
        assert_eq!(totals.grand_total, 51_500.0);
    }

    #[test]
    fn test_update_line_reprices() {
        let mut order = Order::new();
        let id = order
            .add_line("Gold ring", "RING-001", gold_ring(10.0, 5000.0, 0.0))
            .unwrap();
        assert_eq!(order.totals().grand_total, 50_000.0);

        order.update_line(&id, gold_ring(12.0, 5000.0, 0.0)).unwrap();
        assert_eq!(order.totals().grand_total, 60_000.0);

        assert!(order.update_line("missing", gold_ring(1.0, 1.0, 0.0)).is_err());
    }

    #[test]
    fn test_remove_line() {
        let mut order = Order::new();
        let id = order
            .add_line("Gold ring", "RING-001", gold_ring(10.0, 5000.0, 0.0))
            .unwrap();

        order.remove_line(&id).unwrap();
        assert!(order.is_empty());
        assert!(matches!(
            order.remove_line(&id),
            Err(CoreError::LineNotFound(_))
        ));
    }

    #[test]
    fn test_order_size_bound() {
        let mut order = Order::new();
        for i in 0..MAX_ORDER_LINES {
            order
                .add_line(&format!("Item {i}"), &format!("SKU-{i}"), PricingRequest::default())
                .unwrap();
        }
        assert!(matches!(
            order.add_line("One too many", "SKU-X", PricingRequest::default()),
            Err(CoreError::OrderTooLarge { .. })
        ));
    }

    #[test]
    fn test_clear() {
        let mut order = Order::new();
        order.add_line("Gold ring", "RING-001", gold_ring(1.0, 1.0, 0.0)).unwrap();
        assert!(!order.is_empty());

        order.clear();
        assert!(order.is_empty());
        assert_eq!(order.totals(), OrderTotals { line_count: 0, ..Default::default() });
    }
}
