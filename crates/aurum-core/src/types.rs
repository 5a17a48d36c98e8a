//! # Domain Types
//!
//! Line-item and charge-configuration types for jewelry pricing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   MetalLine     │   │   StoneLine     │   │  MaterialLine   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  metal_type     │   │  stone_type     │   │  material_type  │       │
//! │  │  purity         │   │  clarity        │   │  wastage_type   │       │
//! │  │  weight (g)     │   │  carat_weight   │   │  weight         │       │
//! │  │  rate_per_gram  │   │  quantity       │   │  rate_per_unit  │       │
//! │  │  hallmark?      │   │  price_per_carat│   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  MakingCharge   │   │  PricingMode    │   │SellingAdjustment│       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Scalar         │   │  GlobalRates    │   │  SimpleMarkup   │       │
//! │  │  Itemized       │   │  PerLineRates   │   │  MarginWith-    │       │
//! │  └─────────────────┘   └─────────────────┘   │  Discounts      │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog References
//! Fields like `metal_type` and `purity` hold catalog ids that were already
//! normalized by the `catalog` module when the dropdowns were populated. By
//! the time a line reaches the pricing engine there is no duck typing left:
//! ids are plain strings, numerics are [`FieldInput`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::numeric::FieldInput;

// =============================================================================
// Metal Line
// =============================================================================

/// One metal component of a jewelry item (e.g. 22K gold, 12.5g).
///
/// Contributes `weight × rate_per_gram` to the metal cost in per-line-rate
/// mode; in global-rate mode only its weight participates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetalLine {
    /// Catalog id of the metal (gold, silver, platinum, ...).
    pub metal_type: String,

    /// Catalog id of the purity (22K, 18K, 925, ...).
    pub purity: String,

    /// Weight in grams.
    pub weight: FieldInput,

    /// Rate per gram for this metal/purity, as entered or fetched.
    pub rate_per_gram: FieldInput,

    /// Display unit from the catalog. Carried through untouched; the
    /// arithmetic is defined in grams regardless.
    pub unit: String,

    /// Hallmark certification, selected from the catalog filtered by metal.
    pub hallmark: Option<String>,

    /// Metal color (yellow, white, rose).
    pub color: Option<String>,
}

impl MetalLine {
    /// Weight in grams with the zero-fallback parsing contract applied.
    #[inline]
    pub fn weight_grams(&self) -> f64 {
        self.weight.amount()
    }

    /// Per-line cost contribution: `weight × rate_per_gram`.
    #[inline]
    pub fn line_cost(&self) -> f64 {
        self.weight.amount() * self.rate_per_gram.amount()
    }
}

// =============================================================================
// Stone Line
// =============================================================================

/// One stone component of a jewelry item (e.g. 2 × 0.5ct diamonds, VS1).
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoneLine {
    /// Catalog id of the stone type (diamond, ruby, emerald, ...).
    pub stone_type: String,

    /// Catalog id of the clarity/purity grade.
    pub clarity: String,

    /// Cut shape (round, princess, ...).
    pub shape: Option<String>,

    /// Stone color grade.
    pub color: Option<String>,

    /// Weight of ONE stone in carats.
    pub carat_weight: FieldInput,

    /// Number of stones; floors at 1 (a row with a blank quantity is still
    /// one stone).
    pub quantity: FieldInput,

    /// Price per carat for this stone grade.
    pub price_per_carat: FieldInput,

    /// Certificate authority (GIA, IGI, ...).
    pub certificate_type: Option<String>,
}

impl StoneLine {
    /// Total carats across all stones in the row: `quantity × carat_weight`.
    #[inline]
    pub fn total_carats(&self) -> f64 {
        self.quantity.count() as f64 * self.carat_weight.amount()
    }

    /// Per-line cost contribution: `quantity × carat_weight × price_per_carat`.
    ///
    /// ## Note
    /// The legacy console disagreed with itself on whether `quantity`
    /// participates here; this is the complete form, applied uniformly.
    /// See DESIGN.md for the discrepancy record.
    #[inline]
    pub fn line_cost(&self) -> f64 {
        self.total_carats() * self.price_per_carat.amount()
    }
}

// =============================================================================
// Material / Wastage Line
// =============================================================================

/// A non-metal, non-stone material component (beads, thread, polish, ...),
/// or a wastage allowance recorded as a weighed material.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MaterialLine {
    /// Catalog id of the wastage type, when this row records wastage.
    pub wastage_type: String,

    /// Catalog id of the material.
    pub material_type: String,

    /// Weight in the catalog unit.
    pub weight: FieldInput,

    /// Rate per unit of weight.
    pub rate_per_unit: FieldInput,

    /// Display unit from the catalog; carried through untouched.
    pub unit: String,
}

impl MaterialLine {
    /// Per-line cost contribution: `weight × rate_per_unit`.
    #[inline]
    pub fn line_cost(&self) -> f64 {
        self.weight.amount() * self.rate_per_unit.amount()
    }
}

// =============================================================================
// Making Charge
// =============================================================================

/// How a scalar making charge is applied against the metal cost/weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MakingChargeMode {
    /// Percentage of the metal cost.
    Percentage,
    /// Flat rate per gram of total metal weight.
    PerGram,
    /// Fixed amount regardless of weight or cost.
    Fixed,
}

/// A named making-charge component from the catalog (stone setting,
/// engraving, rhodium plating, ...), each carrying its own fixed cost.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NamedCharge {
    /// Catalog id.
    pub id: String,

    /// Label shown in the multi-select control.
    pub display_name: String,

    /// Fixed cost of this charge component.
    pub cost_amount: FieldInput,
}

/// Making-charge configuration for a line item.
///
/// The two variants come from two different form schemas and are mutually
/// exclusive per item: either one scalar charge (with its wastage
/// percentage), or a multi-select of named charges (which has no wastage
/// concept at all).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MakingCharge {
    /// One scalar charge in one of three modes, plus a wastage percentage
    /// applied to the metal cost.
    Scalar {
        mode: MakingChargeMode,
        value: FieldInput,
        wastage_pct: FieldInput,
    },
    /// Sum of the selected named charge components.
    Itemized { charges: Vec<NamedCharge> },
}

impl Default for MakingCharge {
    fn default() -> Self {
        MakingCharge::Scalar {
            mode: MakingChargeMode::Percentage,
            value: FieldInput::Empty,
            wastage_pct: FieldInput::Empty,
        }
    }
}

// =============================================================================
// Pricing Mode
// =============================================================================

/// Which rate schema prices the metal and stone lines.
///
/// The two modes come from two coexisting form schemas with incompatible
/// semantics. They are kept as distinct, named variants; merging them
/// silently would change totals on items priced under the other schema.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingMode {
    /// One global rate for all metal weight and one for all carat weight.
    GlobalRates {
        metal_rate_per_gram: FieldInput,
        stone_rate_per_carat: FieldInput,
    },
    /// Every line carries its own rate.
    PerLineRates,
}

impl Default for PricingMode {
    fn default() -> Self {
        PricingMode::PerLineRates
    }
}

// =============================================================================
// Selling Adjustment
// =============================================================================

/// How the pre-tax selling price is derived from the cost grand total.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SellingAdjustment {
    /// `grand_total × (1 + markup_pct/100)`.
    SimpleMarkup { markup_pct: FieldInput },

    /// `grand_total × (1 + profit_margin_pct/100)
    ///              × (1 − discount_pct/100)
    ///              × (1 − trade_discount_pct/100)`.
    MarginWithDiscounts {
        profit_margin_pct: FieldInput,
        discount_pct: FieldInput,
        trade_discount_pct: FieldInput,
    },
}

impl Default for SellingAdjustment {
    fn default() -> Self {
        SellingAdjustment::SimpleMarkup {
            markup_pct: FieldInput::Empty,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
