//! # Pricing Engine
//!
//! The jewelry line-item pricing calculator. One pure function over a
//! snapshot of form state; no I/O, no errors, no internal state.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pricing Pipeline                                    │
//! │                                                                         │
//! │  metal lines ──► metal cost ─┐                                          │
//! │  stone lines ──► stone cost ─┼─► subtotal ──► + making charge           │
//! │  materials  ───► mat. cost ──┘               + wastage charge           │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                                              grand total                │
//! │                                                    │                    │
//! │                                   markup / margin × discounts           │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                                     selling price before tax            │
//! │                                                    │                    │
//! │                                          GST split (tax module)         │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                                          final selling price            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recompute, Never Cache
//! The console calls [`PricingRequest::price`] on every keystroke that
//! touches a priced field. A [`PricingResult`] has no identity and is
//! discarded on the next change. All fields are unrounded `f64`;
//! [`PricingResult::rounded`] produces the display projection exactly once.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::numeric::{round_carat, round_money, round_weight};
use crate::tax::{GstBreakdown, TaxScheme};
use crate::types::{
    MakingCharge, MakingChargeMode, MaterialLine, MetalLine, PricingMode, SellingAdjustment,
    StoneLine,
};

// =============================================================================
// Pricing Request
// =============================================================================

/// A snapshot of everything on the form that prices a line item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingRequest {
    /// Metal components.
    pub metals: Vec<MetalLine>,

    /// Stone components.
    pub stones: Vec<StoneLine>,

    /// Material/wastage components.
    pub materials: Vec<MaterialLine>,

    /// Global-rate or per-line-rate schema.
    pub mode: PricingMode,

    /// Scalar or itemized making charge.
    pub making_charge: MakingCharge,

    /// Markup or margin-with-discounts derivation of the selling price.
    pub adjustment: SellingAdjustment,

    /// The active GST scheme.
    pub tax: TaxScheme,
}

impl PricingRequest {
    /// Runs the full pricing pipeline.
    ///
    /// Never fails: malformed numeric input has already degraded to zero
    /// contributions by the time arithmetic happens (see `numeric`).
    pub fn price(&self) -> PricingResult {
        let total_metal_weight: f64 = self.metals.iter().map(MetalLine::weight_grams).sum();
        let total_carat_weight: f64 = self.stones.iter().map(StoneLine::total_carats).sum();

        let (metal_cost, stone_cost) = match &self.mode {
            PricingMode::GlobalRates {
                metal_rate_per_gram,
                stone_rate_per_carat,
            } => (
                metal_rate_per_gram.amount() * total_metal_weight,
                stone_rate_per_carat.amount() * total_carat_weight,
            ),
            PricingMode::PerLineRates => (
                self.metals.iter().map(MetalLine::line_cost).sum(),
                self.stones.iter().map(StoneLine::line_cost).sum(),
            ),
        };

        let material_cost: f64 = self.materials.iter().map(MaterialLine::line_cost).sum();

        let (making_charge, wastage_charge) = match &self.making_charge {
            MakingCharge::Scalar {
                mode,
                value,
                wastage_pct,
            } => {
                let charge = match mode {
                    MakingChargeMode::Percentage => metal_cost * value.amount() / 100.0,
                    MakingChargeMode::PerGram => total_metal_weight * value.amount(),
                    MakingChargeMode::Fixed => value.amount(),
                };
                (charge, metal_cost * wastage_pct.amount() / 100.0)
            }
            // Itemized charges have no wastage concept.
            MakingCharge::Itemized { charges } => {
                (charges.iter().map(|c| c.cost_amount.amount()).sum(), 0.0)
            }
        };

        // Both subtotal (before making charge) and grand total are kept:
        // the summary panel displays each.
        let subtotal = metal_cost + stone_cost + material_cost;
        let grand_total = subtotal + making_charge + wastage_charge;

        let selling_price_before_tax = match &self.adjustment {
            SellingAdjustment::SimpleMarkup { markup_pct } => {
                grand_total * (1.0 + markup_pct.amount() / 100.0)
            }
            SellingAdjustment::MarginWithDiscounts {
                profit_margin_pct,
                discount_pct,
                trade_discount_pct,
            } => {
                grand_total
                    * (1.0 + profit_margin_pct.amount() / 100.0)
                    * (1.0 - discount_pct.amount() / 100.0)
                    * (1.0 - trade_discount_pct.amount() / 100.0)
            }
        };
        let markup_amount = selling_price_before_tax - grand_total;

        let gst = self.tax.breakdown(selling_price_before_tax);
        let final_price = selling_price_before_tax + gst.total;

        PricingResult {
            total_metal_weight,
            total_carat_weight,
            metal_cost,
            stone_cost,
            material_cost,
            making_charge,
            wastage_charge,
            subtotal,
            grand_total,
            markup_amount,
            selling_price_before_tax,
            gst,
            final_price,
        }
    }
}

// =============================================================================
// Pricing Result
// =============================================================================

/// The fully itemized cost breakdown for one line item.
///
/// Every field is unrounded. Feed these into further arithmetic freely;
/// round only through [`rounded`](Self::rounded) when a human is looking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingResult {
    /// Σ metal line weights, in grams.
    pub total_metal_weight: f64,

    /// Σ (quantity × carat weight) over stone lines.
    pub total_carat_weight: f64,

    pub metal_cost: f64,
    pub stone_cost: f64,
    pub material_cost: f64,

    pub making_charge: f64,
    pub wastage_charge: f64,

    /// metal + stone + material, before making and wastage charges.
    pub subtotal: f64,

    /// subtotal + making charge + wastage charge.
    pub grand_total: f64,

    /// selling_price_before_tax − grand_total.
    pub markup_amount: f64,

    pub selling_price_before_tax: f64,

    /// Per-component GST on the pre-tax selling price.
    pub gst: GstBreakdown,

    /// selling_price_before_tax + total GST.
    pub final_price: f64,
}

impl PricingResult {
    /// Projects the result for display: money to 2 decimals, metal weight
    /// to 3, carat weight to 2. Applied once, to the unrounded values.
    pub fn rounded(&self) -> PricingBreakdown {
        PricingBreakdown {
            total_metal_weight: round_weight(self.total_metal_weight),
            total_carat_weight: round_carat(self.total_carat_weight),
            metal_cost: round_money(self.metal_cost),
            stone_cost: round_money(self.stone_cost),
            material_cost: round_money(self.material_cost),
            making_charge: round_money(self.making_charge),
            wastage_charge: round_money(self.wastage_charge),
            subtotal: round_money(self.subtotal),
            grand_total: round_money(self.grand_total),
            markup_amount: round_money(self.markup_amount),
            selling_price_before_tax: round_money(self.selling_price_before_tax),
            cgst: round_money(self.gst.cgst),
            sgst: round_money(self.gst.sgst),
            igst: round_money(self.gst.igst),
            utgst: round_money(self.gst.utgst),
            total_gst: round_money(self.gst.total),
            final_price: round_money(self.final_price),
        }
    }
}

/// The display projection of a [`PricingResult`], as the summary panel
/// renders it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingBreakdown {
    pub total_metal_weight: f64,
    pub total_carat_weight: f64,
    pub metal_cost: f64,
    pub stone_cost: f64,
    pub material_cost: f64,
    pub making_charge: f64,
    pub wastage_charge: f64,
    pub subtotal: f64,
    pub grand_total: f64,
    pub markup_amount: f64,
    pub selling_price_before_tax: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub igst: f64,
    pub utgst: f64,
    pub total_gst: f64,
    pub final_price: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FieldInput;
    use crate::types::NamedCharge;

    fn metal(weight: impl Into<FieldInput>, rate: impl Into<FieldInput>) -> MetalLine {
        MetalLine {
            metal_type: "gold".to_string(),
            purity: "22k".to_string(),
            weight: weight.into(),
            rate_per_gram: rate.into(),
            ..Default::default()
        }
    }

    fn stone(
        qty: impl Into<FieldInput>,
        carats: impl Into<FieldInput>,
        price: impl Into<FieldInput>,
    ) -> StoneLine {
        StoneLine {
            stone_type: "diamond".to_string(),
            clarity: "vs1".to_string(),
            quantity: qty.into(),
            carat_weight: carats.into(),
            price_per_carat: price.into(),
            ..Default::default()
        }
    }

    fn scalar_charge(mode: MakingChargeMode, value: f64, wastage_pct: f64) -> MakingCharge {
        MakingCharge::Scalar {
            mode,
            value: FieldInput::from(value),
            wastage_pct: FieldInput::from(wastage_pct),
        }
    }

    #[test]
    fn test_zero_input_identity() {
        let result = PricingRequest::default().price();
        assert_eq!(result.total_metal_weight, 0.0);
        assert_eq!(result.total_carat_weight, 0.0);
        assert_eq!(result.metal_cost, 0.0);
        assert_eq!(result.stone_cost, 0.0);
        assert_eq!(result.material_cost, 0.0);
        assert_eq!(result.making_charge, 0.0);
        assert_eq!(result.wastage_charge, 0.0);
        assert_eq!(result.subtotal, 0.0);
        assert_eq!(result.grand_total, 0.0);
        assert_eq!(result.markup_amount, 0.0);
        assert_eq!(result.selling_price_before_tax, 0.0);
        assert_eq!(result.gst.total, 0.0);
        assert_eq!(result.final_price, 0.0);
    }

    #[test]
    fn test_linearity_in_weight() {
        let base = PricingRequest {
            metals: vec![metal(5.0, 4000.0), metal(2.0, 7000.0)],
            ..Default::default()
        };
        let doubled = PricingRequest {
            metals: vec![metal(10.0, 4000.0), metal(2.0, 7000.0)],
            ..Default::default()
        };

        let r1 = base.price();
        let r2 = doubled.price();

        // Doubling one line's weight doubles that line's contribution only.
        assert_eq!(r2.total_metal_weight - r1.total_metal_weight, 5.0);
        assert_eq!(r2.metal_cost - r1.metal_cost, 5.0 * 4000.0);
    }

    #[test]
    fn test_making_charge_mode_equivalence() {
        let w = 12.0;
        let r = 4800.0;

        let request = |charge: MakingCharge| PricingRequest {
            metals: vec![metal(w, r)],
            making_charge: charge,
            ..Default::default()
        };

        let pct = request(scalar_charge(MakingChargeMode::Percentage, 15.0, 0.0)).price();
        assert_eq!(pct.making_charge, w * r * 15.0 / 100.0);

        let per_gram = request(scalar_charge(MakingChargeMode::PerGram, 350.0, 0.0)).price();
        assert_eq!(per_gram.making_charge, w * 350.0);

        let fixed = request(scalar_charge(MakingChargeMode::Fixed, 9999.0, 0.0)).price();
        assert_eq!(fixed.making_charge, 9999.0);
    }

    #[test]
    fn test_itemized_charges_sum_and_carry_no_wastage() {
        let result = PricingRequest {
            metals: vec![metal(10.0, 5000.0)],
            making_charge: MakingCharge::Itemized {
                charges: vec![
                    NamedCharge {
                        id: "setting".to_string(),
                        display_name: "Stone setting".to_string(),
                        cost_amount: FieldInput::from(1200.0),
                    },
                    NamedCharge {
                        id: "engraving".to_string(),
                        display_name: "Engraving".to_string(),
                        cost_amount: FieldInput::from("800"),
                    },
                ],
            },
            ..Default::default()
        }
        .price();

        assert_eq!(result.making_charge, 2000.0);
        assert_eq!(result.wastage_charge, 0.0);
    }

    #[test]
    fn test_global_rates_mode() {
        let result = PricingRequest {
            metals: vec![metal(4.0, 0.0), metal(6.0, 0.0)],
            stones: vec![stone(2_i64, 0.25, 0.0)],
            mode: PricingMode::GlobalRates {
                metal_rate_per_gram: FieldInput::from(6000.0),
                stone_rate_per_carat: FieldInput::from(50_000.0),
            },
            ..Default::default()
        }
        .price();

        // Per-line rates are ignored entirely in this schema.
        assert_eq!(result.metal_cost, 10.0 * 6000.0);
        assert_eq!(result.stone_cost, 0.5 * 50_000.0);
    }

    #[test]
    fn test_tax_split_consistency_simple_mode() {
        let result = PricingRequest {
            metals: vec![metal(1.0, 1000.0)],
            tax: TaxScheme::FlatGst {
                gst_pct: FieldInput::from(18.0),
            },
            ..Default::default()
        }
        .price();

        let base = result.selling_price_before_tax;
        assert_eq!(base, 1000.0);
        assert_eq!(result.gst.cgst, base * 0.09);
        assert_eq!(result.gst.sgst, base * 0.09);
        assert_eq!(result.gst.cgst, result.gst.sgst);
    }

    #[test]
    fn test_no_throw_zero_fallback() {
        // Garbage in every numeric slot: the computation completes and the
        // garbage contributes nothing.
        let result = PricingRequest {
            metals: vec![metal(f64::NAN, "not a number"), metal("", 5000.0)],
            stones: vec![stone("junk", f64::INFINITY, "")],
            materials: vec![MaterialLine {
                weight: FieldInput::Empty,
                rate_per_unit: FieldInput::from("?"),
                ..Default::default()
            }],
            making_charge: MakingCharge::Scalar {
                mode: MakingChargeMode::Percentage,
                value: FieldInput::from("NaN"),
                wastage_pct: FieldInput::Empty,
            },
            adjustment: SellingAdjustment::SimpleMarkup {
                markup_pct: FieldInput::from("abc"),
            },
            tax: TaxScheme::FlatGst {
                gst_pct: FieldInput::Empty,
            },
            ..Default::default()
        }
        .price();

        assert_eq!(result.final_price, 0.0);
        assert!(result.final_price.is_finite());
        // Blank stone quantity still counted as one stone (of zero carats).
        assert_eq!(result.total_carat_weight, 0.0);
    }

    #[test]
    fn test_negative_values_not_clamped() {
        // Negative weights survive the calculator untouched; only the
        // form-validation layer rejects them. Documented in DESIGN.md.
        let result = PricingRequest {
            metals: vec![metal("-2", 1000.0)],
            ..Default::default()
        }
        .price();
        assert_eq!(result.metal_cost, -2000.0);
    }

    #[test]
    fn test_rounding_is_not_compounded() {
        let result = PricingRequest {
            metals: vec![metal(1.0, 10.004)],
            making_charge: scalar_charge(MakingChargeMode::Fixed, 0.003, 0.0),
            ..Default::default()
        }
        .price();

        let display = result.rounded();

        // Exact total 10.007 rounds once to 10.01 ...
        assert_eq!(display.grand_total, 10.01);
        // ... while summing already-rounded parts would lose the paisa.
        let chained = round_money(result.metal_cost) + round_money(result.making_charge);
        assert_eq!(chained, 10.0);
        assert_ne!(display.grand_total, chained);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let result = PricingRequest {
            metals: vec![metal(10.0, 5000.0)],
            stones: vec![stone(2_i64, 0.5, 80_000.0)],
            making_charge: scalar_charge(MakingChargeMode::Percentage, 15.0, 5.0),
            adjustment: SellingAdjustment::SimpleMarkup {
                markup_pct: FieldInput::from(25.0),
            },
            tax: TaxScheme::FlatGst {
                gst_pct: FieldInput::from(3.0),
            },
            ..Default::default()
        }
        .price();

        assert_eq!(result.metal_cost, 50_000.0);
        assert_eq!(result.stone_cost, 80_000.0);
        assert_eq!(result.making_charge, 7500.0);
        assert_eq!(result.wastage_charge, 2500.0);
        assert_eq!(result.subtotal, 130_000.0);
        assert_eq!(result.grand_total, 140_000.0);
        assert_eq!(result.selling_price_before_tax, 175_000.0);
        assert_eq!(result.gst.cgst, 2625.0);
        assert_eq!(result.gst.sgst, 2625.0);
        assert_eq!(result.final_price, 180_250.0);

        let display = result.rounded();
        assert_eq!(display.final_price, 180_250.00);
        assert_eq!(display.total_metal_weight, 10.0);
        assert_eq!(display.total_carat_weight, 1.0);
    }

    #[test]
    fn test_margin_with_discounts() {
        let result = PricingRequest {
            metals: vec![metal(1.0, 1000.0)],
            adjustment: SellingAdjustment::MarginWithDiscounts {
                profit_margin_pct: FieldInput::from(10.0),
                discount_pct: FieldInput::from(5.0),
                trade_discount_pct: FieldInput::from(2.0),
            },
            ..Default::default()
        }
        .price();

        // 1000 × 1.10 × 0.95 × 0.98
        assert_eq!(result.rounded().selling_price_before_tax, 1024.1);
        assert_eq!(
            result.rounded().markup_amount,
            round_money(result.selling_price_before_tax - 1000.0)
        );
    }

    #[test]
    fn test_both_subtotals_exposed() {
        let result = PricingRequest {
            metals: vec![metal(10.0, 5000.0)],
            making_charge: scalar_charge(MakingChargeMode::Fixed, 1000.0, 0.0),
            ..Default::default()
        }
        .price();

        assert_eq!(result.subtotal, 50_000.0);
        assert_eq!(result.grand_total, 51_000.0);
    }
}
