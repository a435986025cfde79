//! # Error Types
//!
//! Domain-specific error types for souk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  souk-core errors (this file)                                          │
//! │  ├── CoreError        - Checkout precondition failures                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  seller-pos errors (app crate)                                         │
//! │  ├── ApiClientError   - Commerce API failures                          │
//! │  └── AppError         - What the screen alert shows (serialized)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Alert                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Pricing never fails. Malformed discount or quantity text is coerced to a
//! safe default by [`crate::amount`] and a negative total is a value, not a
//! failure. Only order submission has preconditions.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout-level errors.
///
/// These block an order submission before any network call is made.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The cart has no lines.
    ///
    /// ## User Workflow
    /// ```text
    /// Tap "Place Order" with nothing scanned
    ///      │
    ///      ▼
    /// validate_order_ready() → EmptyCart
    ///      │
    ///      ▼
    /// Alert: "Cart is empty" (no request sent)
    /// ```
    #[error("Cart is empty")]
    EmptyCart,

    /// No customer was picked for the order.
    #[error("No customer selected")]
    NoCustomerSelected,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
