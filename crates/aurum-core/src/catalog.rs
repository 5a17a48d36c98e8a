//! # Catalog Normalization
//!
//! The REST catalogs (metals, purities, stone types, GST rates, making-charge
//! types, hallmarks) are loosely typed: the same logical field arrives under
//! several spellings (`_id`/`id`, `name`/`purity_name`/`metal_name`, ...),
//! sometimes as a number, sometimes as a string.
//!
//! ## One Normalization Pass
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Raw catalog payload (serde_json::Value)                               │
//! │      [{ "_id": "m1", "metal_name": "Gold" },                            │
//! │       { "id": 7, "name": "Silver" },                                    │
//! │       { "junk": true }]                                                 │
//! │                    │                                                    │
//! │                    ▼  normalize_* (THIS MODULE, once per fetch)         │
//! │                                                                         │
//! │   [CatalogEntry { id: "m1", display_name: "Gold" },                     │
//! │    CatalogEntry { id: "7",  display_name: "Silver" }]                   │
//! │                                                                         │
//! │   Records with no usable id are skipped (with a tracing event).         │
//! │   Everything downstream of this pass sees typed ids only.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing engine never performs key-guessing itself; it is handed the
//! typed output of this module.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::numeric::FieldInput;
use crate::tax::TaxBracket;
use crate::types::NamedCharge;

// =============================================================================
// Catalog Entry
// =============================================================================

/// A normalized dropdown entry: a stable id plus its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogEntry {
    pub id: String,
    pub display_name: String,
}

/// A hallmark certification record, tied to the metal it certifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Hallmark {
    pub id: String,
    pub display_name: String,
    /// Catalog id of the metal this hallmark applies to.
    pub metal_type: String,
}

// =============================================================================
// Key Spellings
// =============================================================================

/// Id spellings observed across the catalog endpoints.
const ID_KEYS: &[&str] = &["_id", "id", "uuid", "code"];

/// Display-name spellings observed across the catalog endpoints.
const NAME_KEYS: &[&str] = &[
    "display_name",
    "name",
    "metal_name",
    "purity_name",
    "stone_name",
    "type_name",
    "title",
];

/// Metal-reference spellings on hallmark records.
const METAL_KEYS: &[&str] = &["metal_type", "metal_id", "metal"];

// =============================================================================
// Field Extraction
// =============================================================================

/// Returns the first present key as a non-empty string, accepting string or
/// numeric JSON values.
fn string_field(record: &Value, keys: &[&str]) -> Option<String> {
    let obj = record.as_object()?;
    for key in keys {
        match obj.get(*key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => continue,
        }
    }
    None
}

/// Returns the first present key as a [`FieldInput`], preserving the raw
/// string-or-number shape so the zero-fallback contract applies downstream.
fn numeric_field(record: &Value, keys: &[&str]) -> FieldInput {
    let Some(obj) = record.as_object() else {
        return FieldInput::Empty;
    };
    for key in keys {
        match obj.get(*key) {
            Some(Value::Number(n)) => {
                return FieldInput::Number(n.as_f64().unwrap_or(0.0));
            }
            Some(Value::String(s)) => return FieldInput::Text(s.clone()),
            _ => continue,
        }
    }
    FieldInput::Empty
}

// =============================================================================
// Normalizers
// =============================================================================

/// Normalizes a generic catalog payload (metals, purities, stone types,
/// units, colors, ...) into typed entries.
///
/// Records with no usable id are skipped; a record with an id but no label
/// falls back to the id as its label.
pub fn normalize_entries(raw: &[Value]) -> Vec<CatalogEntry> {
    let entries: Vec<CatalogEntry> = raw
        .iter()
        .filter_map(|record| {
            let Some(id) = string_field(record, ID_KEYS) else {
                warn!(?record, "skipping catalog record without id");
                return None;
            };
            let display_name = string_field(record, NAME_KEYS).unwrap_or_else(|| id.clone());
            Some(CatalogEntry { id, display_name })
        })
        .collect();

    debug!(
        total = raw.len(),
        normalized = entries.len(),
        "normalized catalog entries"
    );
    entries
}

/// Normalizes the hallmark catalog. Hallmarks without a metal reference are
/// kept with an empty `metal_type` and simply never match a cascade filter.
pub fn normalize_hallmarks(raw: &[Value]) -> Vec<Hallmark> {
    raw.iter()
        .filter_map(|record| {
            let Some(id) = string_field(record, ID_KEYS) else {
                warn!(?record, "skipping hallmark record without id");
                return None;
            };
            let display_name = string_field(record, NAME_KEYS).unwrap_or_else(|| id.clone());
            let metal_type = string_field(record, METAL_KEYS).unwrap_or_default();
            Some(Hallmark {
                id,
                display_name,
                metal_type,
            })
        })
        .collect()
}

/// The metal → hallmark dropdown cascade: hallmarks valid for one metal.
pub fn hallmarks_for_metal<'a>(hallmarks: &'a [Hallmark], metal_type: &str) -> Vec<&'a Hallmark> {
    hallmarks
        .iter()
        .filter(|h| h.metal_type == metal_type)
        .collect()
}

/// Normalizes the GST rate catalog into [`TaxBracket`]s.
///
/// Percentage fields stay as [`FieldInput`]: the endpoint mixes numbers and
/// strings, and absent components legitimately mean zero.
pub fn normalize_tax_brackets(raw: &[Value]) -> Vec<TaxBracket> {
    let brackets: Vec<TaxBracket> = raw
        .iter()
        .filter_map(|record| {
            let Some(id) = string_field(record, ID_KEYS) else {
                warn!(?record, "skipping GST record without id");
                return None;
            };
            let display_name = string_field(record, NAME_KEYS).unwrap_or_else(|| id.clone());
            Some(TaxBracket {
                id,
                display_name,
                gst_total: numeric_field(record, &["gst_total", "gst_percentage", "gst"]),
                cgst_pct: numeric_field(record, &["cgst_percentage", "cgst"]),
                sgst_pct: numeric_field(record, &["sgst_percentage", "sgst"]),
                igst_pct: numeric_field(record, &["igst_percentage", "igst"]),
                utgst_pct: numeric_field(record, &["utgst_percentage", "utgst"]),
            })
        })
        .collect();

    debug!(
        total = raw.len(),
        normalized = brackets.len(),
        "normalized GST brackets"
    );
    brackets
}

/// Normalizes the making-charge type catalog into [`NamedCharge`]s.
pub fn normalize_named_charges(raw: &[Value]) -> Vec<NamedCharge> {
    raw.iter()
        .filter_map(|record| {
            let Some(id) = string_field(record, ID_KEYS) else {
                warn!(?record, "skipping making-charge record without id");
                return None;
            };
            let display_name = string_field(record, NAME_KEYS).unwrap_or_else(|| id.clone());
            Some(NamedCharge {
                id,
                display_name,
                cost_amount: numeric_field(record, &["cost_amount", "amount", "cost"]),
            })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_entries_key_spellings() {
        let raw = vec![
            json!({ "_id": "m1", "metal_name": "Gold" }),
            json!({ "id": 7, "name": "Silver" }),
            json!({ "code": "PT", "title": "Platinum" }),
        ];
        let entries = normalize_entries(&raw);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id, "m1");
        assert_eq!(entries[0].display_name, "Gold");
        assert_eq!(entries[1].id, "7");
        assert_eq!(entries[2].display_name, "Platinum");
    }

    #[test]
    fn test_normalize_entries_skips_unusable_records() {
        let raw = vec![
            json!({ "junk": true }),
            json!("not an object"),
            json!({ "_id": "", "name": "blank id" }),
            json!({ "_id": "p1" }),
        ];
        let entries = normalize_entries(&raw);
        // Only the record with a real id survives; its label falls back to
        // the id.
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "p1");
        assert_eq!(entries[0].display_name, "p1");
    }

    #[test]
    fn test_hallmark_cascade() {
        let raw = vec![
            json!({ "_id": "hm-916", "name": "BIS 916", "metal_type": "gold" }),
            json!({ "_id": "hm-750", "name": "BIS 750", "metal_id": "gold" }),
            json!({ "_id": "hm-925", "name": "BIS 925", "metal": "silver" }),
            json!({ "_id": "hm-none", "name": "Unattached" }),
        ];
        let hallmarks = normalize_hallmarks(&raw);
        assert_eq!(hallmarks.len(), 4);

        let gold = hallmarks_for_metal(&hallmarks, "gold");
        assert_eq!(gold.len(), 2);
        assert_eq!(gold[0].id, "hm-916");

        assert_eq!(hallmarks_for_metal(&hallmarks, "silver").len(), 1);
        assert!(hallmarks_for_metal(&hallmarks, "platinum").is_empty());
    }

    #[test]
    fn test_normalize_tax_brackets_mixed_shapes() {
        let raw = vec![json!({
            "_id": "gst-3",
            "name": "GST 3%",
            "gst_percentage": "3",
            "cgst_percentage": 1.5,
            "sgst_percentage": "1.5"
        })];
        let brackets = normalize_tax_brackets(&raw);
        assert_eq!(brackets.len(), 1);

        let b = &brackets[0];
        assert_eq!(b.gst_total.amount(), 3.0);
        assert_eq!(b.cgst_pct.amount(), 1.5);
        assert_eq!(b.sgst_pct.amount(), 1.5);
        // Components the record never mentioned are zero, not errors.
        assert_eq!(b.igst_pct.amount(), 0.0);
        assert_eq!(b.utgst_pct.amount(), 0.0);
    }

    #[test]
    fn test_normalize_named_charges() {
        let raw = vec![
            json!({ "_id": "setting", "name": "Stone setting", "cost_amount": 1200 }),
            json!({ "id": "engraving", "name": "Engraving", "amount": "800" }),
        ];
        let charges = normalize_named_charges(&raw);
        assert_eq!(charges.len(), 2);
        assert_eq!(charges[0].cost_amount.amount(), 1200.0);
        assert_eq!(charges[1].cost_amount.amount(), 800.0);
    }
}
