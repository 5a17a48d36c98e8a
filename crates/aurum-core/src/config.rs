//! # Back-Office Configuration
//!
//! Store-level settings loaded at console startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. The backend's store-settings endpoint
//! 2. Defaults (this file)
//!
//! Read-only after initialization; the console re-fetches rather than
//! mutating in place.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Store configuration for display and defaults.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct BackofficeConfig {
    /// Store name (displayed on invoices and the console header).
    pub store_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency display.
    pub currency_decimals: u8,

    /// GST percentage preselected on new items before a bracket is chosen.
    pub default_gst_pct: f64,
}

impl Default for BackofficeConfig {
    fn default() -> Self {
        BackofficeConfig {
            store_name: "Aurum Jewellers".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            default_gst_pct: 3.0,
        }
    }
}
