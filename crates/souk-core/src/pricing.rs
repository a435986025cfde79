//! # Pricing Module
//!
//! Unit price markdowns for everything that renders a product card:
//! listings, related and seller product rails, search results.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /products ──► ProductRecord ──► display_price() ──► Card          │
//! │                                            │                            │
//! │                         discount <= 0? ────┼──► price = unit_price      │
//! │                                            │    old_price = None        │
//! │                                            │                            │
//! │                         discount > 0  ─────┴──► price = effective_price │
//! │                                                 old_price = unit_price  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CatalogItem, DiscountType};

/// Returns the unit price after applying a catalog discount.
///
/// - [`DiscountType::Flat`]: `unit_price - discount`
/// - [`DiscountType::Percent`]: `unit_price - (discount / 100) * unit_price`
///
/// The result is not clamped. A flat discount above the price, or a percent
/// above 100, gives a negative price. NaN inputs give NaN.
///
/// ## Example
/// ```rust
/// use souk_core::pricing::effective_price;
/// use souk_core::types::DiscountType;
///
/// assert_eq!(effective_price(100.0, 20.0, DiscountType::Flat), 80.0);
/// assert_eq!(effective_price(100.0, 20.0, DiscountType::Percent), 80.0);
/// assert_eq!(effective_price(50.0, 60.0, DiscountType::Flat), -10.0);
/// ```
pub fn effective_price(unit_price: f64, discount: f64, discount_type: DiscountType) -> f64 {
    match discount_type {
        DiscountType::Flat => unit_price - discount,
        DiscountType::Percent => {
            let amount_to_deduct = (discount / 100.0) * unit_price;
            unit_price - amount_to_deduct
        }
    }
}

/// What a product card shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplayPrice {
    /// Price the buyer pays.
    pub price: f64,
    /// Struck-through original price; present only when a discount applies.
    pub old_price: Option<f64>,
}

impl DisplayPrice {
    /// Returns true when the card should render a markdown.
    pub fn is_discounted(&self) -> bool {
        self.old_price.is_some()
    }
}

/// Resolves the card price for a catalog item.
///
/// A discount that is not strictly positive (zero, negative, NaN) is ignored
/// and the unit price is shown unmodified.
pub fn display_price(item: &CatalogItem) -> DisplayPrice {
    if item.discount > 0.0 {
        DisplayPrice {
            price: effective_price(item.unit_price, item.discount, item.discount_type),
            old_price: Some(item.unit_price),
        }
    } else {
        DisplayPrice {
            price: item.unit_price,
            old_price: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_discount_keeps_price() {
        for price in [0.0, 0.99, 10.0, 1234.5] {
            assert_eq!(effective_price(price, 0.0, DiscountType::Flat), price);
            assert_eq!(effective_price(price, 0.0, DiscountType::Percent), price);
        }
    }

    #[test]
    fn test_flat_and_percent() {
        assert_eq!(effective_price(100.0, 20.0, DiscountType::Flat), 80.0);
        assert_eq!(effective_price(100.0, 20.0, DiscountType::Percent), 80.0);
        assert_eq!(effective_price(200.0, 25.0, DiscountType::Percent), 150.0);
    }

    /// Regression: discounts larger than the price are not clamped.
    #[test]
    fn test_negative_price_preserved() {
        assert_eq!(effective_price(50.0, 60.0, DiscountType::Flat), -10.0);
        assert_eq!(effective_price(100.0, 150.0, DiscountType::Percent), -50.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(effective_price(f64::NAN, 10.0, DiscountType::Flat).is_nan());
        assert!(effective_price(100.0, f64::NAN, DiscountType::Percent).is_nan());
    }

    #[test]
    fn test_display_price_with_discount() {
        let item = CatalogItem {
            unit_price: 100.0,
            discount: 20.0,
            discount_type: DiscountType::Percent,
        };
        let shown = display_price(&item);
        assert_eq!(shown.price, 80.0);
        assert_eq!(shown.old_price, Some(100.0));
        assert!(shown.is_discounted());
    }

    #[test]
    fn test_display_price_ignores_non_positive_discount() {
        for discount in [0.0, -5.0, f64::NAN] {
            let item = CatalogItem {
                unit_price: 40.0,
                discount,
                discount_type: DiscountType::Flat,
            };
            let shown = display_price(&item);
            assert_eq!(shown.price, 40.0);
            assert!(shown.old_price.is_none());
        }
    }
}
