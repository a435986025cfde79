//! # Validation Module
//!
//! Checkout preconditions. These run at the submission call site, before any
//! request leaves the device.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Text fields                                                  │
//! │  └── Coerced, never rejected (see amount module)                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Submission (THIS MODULE)                                     │
//! │  ├── Cart must not be empty                                            │
//! │  ├── A customer must be selected                                       │
//! │  └── Coupon code must be present before a coupon check                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Commerce API                                                 │
//! │  └── Final authority on the charged amount                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::CartLineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that an order can be submitted.
///
/// ## Rules
/// - The cart must have at least one line
/// - A non-blank customer id must be selected
///
/// ## Example
/// ```rust
/// use souk_core::validation::validate_order_ready;
/// use souk_core::types::CartLineItem;
///
/// let cart = vec![CartLineItem::new("p-1", "Tea", 4.0, 1)];
/// assert!(validate_order_ready(&cart, Some("c-7")).is_ok());
/// assert!(validate_order_ready(&cart, None).is_err());
/// assert!(validate_order_ready(&[], Some("c-7")).is_err());
/// ```
pub fn validate_order_ready(cart: &[CartLineItem], customer_id: Option<&str>) -> CoreResult<()> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    match customer_id {
        Some(id) if !id.trim().is_empty() => Ok(()),
        _ => Err(CoreError::NoCustomerSelected),
    }
}

/// Validates a coupon code before it is sent for checking.
///
/// Only presence is checked here; whether the code exists, has expired, or
/// applies to the order is decided by the commerce API.
///
/// ## Returns
/// The trimmed code.
pub fn validate_coupon_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "coupon code".to_string(),
        });
    }

    Ok(code.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_order_ready() {
        let cart = vec![CartLineItem::new("1", "Tea", 4.0, 1)];

        assert!(validate_order_ready(&cart, Some("c-1")).is_ok());
        assert!(matches!(
            validate_order_ready(&[], Some("c-1")),
            Err(CoreError::EmptyCart)
        ));
        assert!(matches!(
            validate_order_ready(&cart, None),
            Err(CoreError::NoCustomerSelected)
        ));
        assert!(matches!(
            validate_order_ready(&cart, Some("  ")),
            Err(CoreError::NoCustomerSelected)
        ));
    }

    #[test]
    fn test_empty_cart_reported_before_customer() {
        assert!(matches!(
            validate_order_ready(&[], None),
            Err(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_validate_coupon_code() {
        assert_eq!(validate_coupon_code(" EID15 ").unwrap(), "EID15");
        assert!(validate_coupon_code("").is_err());
        assert!(validate_coupon_code("   ").is_err());
    }

    #[test]
    fn test_coupon_code_shape_left_to_server() {
        assert_eq!(validate_coupon_code("EID 15").unwrap(), "EID 15");
        let long = "A".repeat(80);
        assert_eq!(validate_coupon_code(&long).unwrap(), long);
    }
}
