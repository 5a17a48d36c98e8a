//! # aurum-core: Pure Business Logic for the Aurum Back Office
//!
//! This crate is the **heart** of the Aurum jewelry back office. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Aurum Back Office Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Admin Console (React)                        │   │
//! │  │   Item Forms ──► Category Mgmt ──► Order Entry ──► Summary      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ exported TS types                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aurum-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │   types   │  │  catalog  │  │   order   │  │   │
//! │  │   │  engine   │  │ MetalLine │  │ normalize │  │   entry   │  │   │
//! │  │   │  GST tax  │  │ StoneLine │  │ hallmarks │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              REST Backend (external collaborator)               │   │
//! │  │        catalogs, persistence, authentication, images            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`numeric`] - The form-input parsing contract and display rounding
//! - [`types`] - Line items and charge configuration
//! - [`tax`] - GST brackets and the CGST/SGST/IGST/UTGST split
//! - [`pricing`] - The line-item pricing engine
//! - [`catalog`] - Typed normalization of the REST catalogs
//! - [`order`] - Sales order entry
//! - [`validation`] - Pre-submission form validation
//! - [`config`] - Store-level configuration
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **No-Throw Pricing**: malformed numeric input degrades to zero, never errors
//! 4. **Round Once**: all arithmetic is unrounded `f64`; rounding happens at display
//!
//! ## Example Usage
//!
//! ```rust
//! use aurum_core::numeric::FieldInput;
//! use aurum_core::pricing::PricingRequest;
//! use aurum_core::tax::TaxScheme;
//! use aurum_core::types::MetalLine;
//!
//! // A 10g gold line at ₹5,000/g, GST 3% split evenly
//! let request = PricingRequest {
//!     metals: vec![MetalLine {
//!         metal_type: "gold".to_string(),
//!         purity: "22k".to_string(),
//!         weight: FieldInput::from(10.0),
//!         rate_per_gram: FieldInput::from("5000"),
//!         ..Default::default()
//!     }],
//!     tax: TaxScheme::FlatGst { gst_pct: FieldInput::from(3.0) },
//!     ..Default::default()
//! };
//!
//! let result = request.price();
//! assert_eq!(result.metal_cost, 50_000.0);
//! assert_eq!(result.final_price, 51_500.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod numeric;
pub mod order;
pub mod pricing;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use aurum_core::PricingRequest` instead of
// `use aurum_core::pricing::PricingRequest`

pub use catalog::{CatalogEntry, Hallmark};
pub use error::{CoreError, CoreResult, ValidationError};
pub use numeric::FieldInput;
pub use order::{Order, OrderLine, OrderTotals};
pub use pricing::{PricingBreakdown, PricingRequest, PricingResult};
pub use tax::{GstBreakdown, TaxBracket, TaxScheme};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed on a single sales order
///
/// ## Business Reason
/// Prevents runaway orders and ensures reasonable transaction sizes.
/// Can be made configurable per-store in future versions.
pub const MAX_ORDER_LINES: usize = 100;

/// Maximum stone quantity on a single line
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 1000 instead of 10).
/// Configurable per-store in future versions.
pub const MAX_LINE_QUANTITY: i64 = 999;
