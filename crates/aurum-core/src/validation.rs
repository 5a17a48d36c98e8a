//! # Validation Module
//!
//! Pre-submission validation for the item and order forms.
//!
//! ## Validation vs. Pricing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Two Separate Concerns                                   │
//! │                                                                         │
//! │  PRICING (numeric module + pricing engine)                              │
//! │  ├── Runs on EVERY keystroke                                            │
//! │  ├── Never rejects anything                                             │
//! │  └── Bad input → zero contribution, visibly low price                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  VALIDATION (THIS MODULE)                                               │
//! │  ├── Runs once, before the entity is POSTed to the backend             │
//! │  ├── Rejects empty names, zero weights, out-of-range quantities         │
//! │  └── This is the layer that actually refuses negative numerics         │
//! │                                                                         │
//! │  Defense in depth: the backend re-validates everything anyway.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aurum_core::validation::{validate_metal_weight, validate_stone_quantity};
//!
//! assert!(validate_metal_weight(12.5).is_ok());
//! assert!(validate_metal_weight(0.0).is_err());
//! assert!(validate_stone_quantity(5).is_ok());
//! ```

use crate::error::ValidationError;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item_name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "item_name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates that a catalog reference was actually selected.
pub fn validate_catalog_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a metal weight before submission.
///
/// ## Rules
/// - Must be strictly positive. Zero means the operator never filled the
///   field (the parser's fallback), negative means they typed a minus sign;
///   both block submission even though pricing already ran on them.
pub fn validate_metal_weight(grams: f64) -> ValidationResult<()> {
    if grams <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "weight".to_string(),
        });
    }
    Ok(())
}

/// Validates a rate/price amount.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (a line whose cost is carried elsewhere)
pub fn validate_rate(field: &str, amount: f64) -> ValidationResult<()> {
    if amount < 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a stone quantity.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed [`MAX_LINE_QUANTITY`]
pub fn validate_stone_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a percentage field (markup, wastage, GST, discounts).
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_percentage(field: &str, pct: f64) -> ValidationResult<()> {
    if !(0.0..=100.0).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 100,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
