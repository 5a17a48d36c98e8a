//! # Error Types
//!
//! Domain-specific error types for aurum-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aurum-core errors (this file)                                          │
//! │  ├── CoreError        - Order-entry and domain rule violations          │
//! │  └── ValidationError  - Pre-submission form validation failures         │
//! │                                                                         │
//! │  NOTE: the pricing engine itself NEVER errors. Malformed numeric        │
//! │  input degrades to a zero contribution (see `numeric`). These types     │
//! │  exist for the separate validation layer and order-entry rules.         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → REST backend → Console             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, line ID, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Order line cannot be found.
    ///
    /// ## When This Occurs
    /// - Line ID doesn't exist in the current order
    /// - Line was already removed by another edit of the same order
    #[error("Order line not found: {0}")]
    LineNotFound(String),

    /// Order has exceeded the maximum allowed number of lines.
    #[error("Order cannot have more than {max} lines")]
    OrderTooLarge { max: usize },

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// A referenced catalog entry is missing from the loaded catalog.
    ///
    /// ## When This Occurs
    /// - A form kept a stale metal/purity/GST id after the catalog refreshed
    /// - A catalog record was soft-deleted on the backend
    #[error("Unknown {catalog} entry: {id}")]
    UnknownCatalogEntry { catalog: String, id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet submission requirements.
/// Used for early validation before an entity is POSTed to the backend.
/// The pricing engine runs regardless; validation gates persistence only.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid SKU characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
