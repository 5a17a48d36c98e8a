//! # GST Module
//!
//! India's Goods and Services Tax, as the back office applies it to a line
//! item's pre-tax selling price.
//!
//! ## Two Schemes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BRACKET SCHEME (multi-component)        FLAT SCHEME (simple split)     │
//! │                                                                         │
//! │  A named bracket from the GST catalog:   One percentage, split evenly:  │
//! │    cgst  = base × cgst_pct  / 100          cgst = base × pct / 200      │
//! │    sgst  = base × sgst_pct  / 100          sgst = base × pct / 200      │
//! │    igst  = base × igst_pct  / 100          igst = 0                     │
//! │    utgst = base × utgst_pct / 100          utgst = 0                    │
//! │    total = base × gst_total / 100          total = cgst + sgst          │
//! │                                                                         │
//! │  Bracket totals are computed from gst_total, NOT from the component     │
//! │  sum. Catalog rows occasionally disagree between the two; both values   │
//! │  are displayed as-is and never reconciled here.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::numeric::FieldInput;

// =============================================================================
// Tax Bracket
// =============================================================================

/// A named GST bracket from the external rate catalog.
///
/// Percentage fields are [`FieldInput`] because the catalog endpoint delivers
/// them inconsistently as numbers or strings; the zero-fallback contract
/// applies here like everywhere else.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxBracket {
    /// Catalog id.
    pub id: String,

    /// Label shown in the bracket dropdown ("GST 3%", "GST 18% IGST", ...).
    pub display_name: String,

    /// Headline total percentage.
    pub gst_total: FieldInput,

    /// Central GST component percentage.
    pub cgst_pct: FieldInput,

    /// State GST component percentage.
    pub sgst_pct: FieldInput,

    /// Integrated GST component percentage (inter-state supply).
    pub igst_pct: FieldInput,

    /// Union-territory GST component percentage.
    pub utgst_pct: FieldInput,
}

// =============================================================================
// Tax Scheme
// =============================================================================

/// The tax configuration active on a line item. Exactly one scheme applies.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaxScheme {
    /// A bracket selected from the GST catalog.
    Bracket { bracket: TaxBracket },

    /// A single percentage split evenly between CGST and SGST.
    FlatGst { gst_pct: FieldInput },
}

impl Default for TaxScheme {
    fn default() -> Self {
        TaxScheme::FlatGst {
            gst_pct: FieldInput::Empty,
        }
    }
}

impl TaxScheme {
    /// Computes the GST amounts on a pre-tax base.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::numeric::FieldInput;
    /// use aurum_core::tax::TaxScheme;
    ///
    /// let scheme = TaxScheme::FlatGst { gst_pct: FieldInput::from(18.0) };
    /// let gst = scheme.breakdown(1000.0);
    /// assert_eq!(gst.cgst, 90.0);
    /// assert_eq!(gst.sgst, 90.0);
    /// assert_eq!(gst.total, 180.0);
    /// ```
    pub fn breakdown(&self, base: f64) -> GstBreakdown {
        match self {
            TaxScheme::Bracket { bracket } => GstBreakdown {
                cgst: base * bracket.cgst_pct.amount() / 100.0,
                sgst: base * bracket.sgst_pct.amount() / 100.0,
                igst: base * bracket.igst_pct.amount() / 100.0,
                utgst: base * bracket.utgst_pct.amount() / 100.0,
                // Independent of the component sum on purpose.
                total: base * bracket.gst_total.amount() / 100.0,
            },
            TaxScheme::FlatGst { gst_pct } => {
                let half = base * gst_pct.amount() / 200.0;
                GstBreakdown {
                    cgst: half,
                    sgst: half,
                    igst: 0.0,
                    utgst: 0.0,
                    total: half + half,
                }
            }
        }
    }
}

// =============================================================================
// GST Breakdown
// =============================================================================

/// Per-component GST amounts on a pre-tax base. Unrounded; round once at
/// the display boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GstBreakdown {
    pub cgst: f64,
    pub sgst: f64,
    pub igst: f64,
    pub utgst: f64,
    /// Headline total. In bracket mode this comes from `gst_total` and may
    /// differ from `cgst + sgst + igst + utgst` when the catalog row does.
    pub total: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
