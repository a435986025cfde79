//! # Domain Types
//!
//! Core pricing types shared by the listing screens and the POS checkout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │  ProductRecord  │   │  CartLineItem   │   │ OrderLevelDiscount  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │ ──────────────────  │   │
//! │  │  id, name       │──►│  product_id     │   │  extra_discount     │   │
//! │  │  unit_price     │   │  unit_price     │   │  extra_discount_type│   │
//! │  │  discount       │   │  quantity (>=1) │   │  coupon_discount_   │   │
//! │  │  discount_type  │   │  discount/unit  │   │    amount, code     │   │
//! │  └────────┬────────┘   └─────────────────┘   └─────────────────────┘   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │   CatalogItem   │   │  DiscountType   │   │ ExtraDiscountType   │   │
//! │  │  (price inputs) │   │  Flat | Percent │   │  Amount | Percent   │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │                                                                         │
//! │  PricingResult: derived on every read, never stored                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Wire Parsing
//! Product records come straight from the commerce API and are trusted
//! as-is. Numeric fields may arrive as numbers or numeric strings; a string
//! that is not a number becomes NaN so the bad value stays visible in the
//! computed price instead of silently turning into zero.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::wire;

// =============================================================================
// Discount Kinds
// =============================================================================

/// How a catalog item's `discount` is interpreted.
///
/// ## Wire Format
/// Only the literal string `"flat"` selects [`DiscountType::Flat`]. Every
/// other value, including `"percent"`, unknown strings and a missing field,
/// selects [`DiscountType::Percent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Absolute amount subtracted from the unit price.
    Flat,
    /// Percentage of the unit price.
    #[default]
    Percent,
}

impl DiscountType {
    /// Maps the API's `discount_type` string.
    pub fn from_api_str(value: &str) -> Self {
        if value == "flat" {
            DiscountType::Flat
        } else {
            DiscountType::Percent
        }
    }
}

impl<'de> Deserialize<'de> for DiscountType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(DiscountType::from_api_str)
            .unwrap_or_default())
    }
}

/// How the order-level extra discount is interpreted.
///
/// Only `"percent"` selects [`ExtraDiscountType::Percent`]; anything else is a
/// flat amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ExtraDiscountType {
    /// Flat currency amount off the order.
    #[default]
    Amount,
    /// Percentage of the subtotal.
    Percent,
}

impl ExtraDiscountType {
    /// Maps the seller's extra discount selector value.
    pub fn from_api_str(value: &str) -> Self {
        if value == "percent" {
            ExtraDiscountType::Percent
        } else {
            ExtraDiscountType::Amount
        }
    }
}

impl<'de> Deserialize<'de> for ExtraDiscountType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(ExtraDiscountType::from_api_str)
            .unwrap_or_default())
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The price inputs of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogItem {
    /// Undiscounted catalog price.
    pub unit_price: f64,
    /// Raw discount magnitude; ignored when `<= 0`.
    pub discount: f64,
    /// Selects flat or percent interpretation of `discount`.
    pub discount_type: DiscountType,
}

/// A product record as returned by the commerce API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product identifier (numeric or string on the wire).
    #[serde(deserialize_with = "wire::id_string")]
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Undiscounted unit price.
    #[serde(default, deserialize_with = "wire::number")]
    pub unit_price: f64,

    /// Discount magnitude as stored on the product.
    #[serde(default, deserialize_with = "wire::number")]
    pub discount: f64,

    /// Flat or percent; see [`DiscountType`].
    #[serde(default)]
    pub discount_type: DiscountType,

    /// Stock on hand. Informational only.
    #[serde(default, deserialize_with = "wire::integer")]
    pub current_stock: i64,

    /// Thumbnail image path.
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl ProductRecord {
    /// Returns the price inputs of this record.
    pub fn catalog_item(&self) -> CatalogItem {
        CatalogItem {
            unit_price: self.unit_price,
            discount: self.discount,
            discount_type: self.discount_type,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A line in the POS cart.
///
/// ## Design Notes
/// - `discount` is a flat amount per unit. The cart has no percent-based
///   per-item discount, unlike [`CatalogItem`].
/// - `current_stock` is copied for display; it never caps `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    /// Always >= 1 through the cart operations.
    pub quantity: i64,
    /// Flat discount per unit.
    pub discount: f64,
    pub current_stock: i64,
    pub image: Option<String>,
}

impl CartLineItem {
    /// Creates a line with no discount and no stock information.
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
        quantity: i64,
    ) -> Self {
        CartLineItem {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity,
            discount: 0.0,
            current_stock: 0,
            image: None,
        }
    }

    /// Creates a fresh line (quantity 1, no discount) from a catalog record.
    ///
    /// The line uses the record's undiscounted `unit_price`; catalog
    /// markdowns do not carry over into the POS cart.
    pub fn from_product(product: &ProductRecord) -> Self {
        CartLineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.unit_price,
            quantity: 1,
            discount: 0.0,
            current_stock: product.current_stock,
            image: product.thumbnail.clone(),
        }
    }

    /// Sets the per-unit discount.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Full-price line extension (`unit_price × quantity`).
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }

    /// Discount over the whole line (`discount × quantity`).
    #[inline]
    pub fn line_discount(&self) -> f64 {
        self.discount * self.quantity as f64
    }
}

// =============================================================================
// Order-Level Discount
// =============================================================================

/// Discounts configured for the whole order at checkout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLevelDiscount {
    #[serde(default)]
    pub extra_discount: f64,
    #[serde(default)]
    pub extra_discount_type: ExtraDiscountType,
    /// Copied verbatim from the coupon check response.
    #[serde(default)]
    pub coupon_discount_amount: f64,
    #[serde(default)]
    pub coupon_code: String,
}

impl OrderLevelDiscount {
    /// Returns true when a coupon has been applied.
    pub fn has_coupon(&self) -> bool {
        !self.coupon_code.is_empty()
    }
}

// =============================================================================
// Pricing Result
// =============================================================================

/// Totals derived from a cart and its order-level discount.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingResult {
    /// Σ unit_price × quantity.
    pub subtotal: f64,
    /// Σ discount × quantity.
    pub item_discount_total: f64,
    /// Order-level extra discount resolved against the subtotal.
    pub extra_discount_amount: f64,
    /// Item + extra + coupon discounts.
    pub total_discount: f64,
    /// subtotal − total_discount. May be negative.
    pub grand_total: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_type_only_flat_literal_is_flat() {
        assert_eq!(DiscountType::from_api_str("flat"), DiscountType::Flat);
        assert_eq!(DiscountType::from_api_str("percent"), DiscountType::Percent);
        assert_eq!(DiscountType::from_api_str("Flat"), DiscountType::Percent);
        assert_eq!(DiscountType::from_api_str(""), DiscountType::Percent);
    }

    #[test]
    fn test_extra_discount_type_only_percent_literal_is_percent() {
        assert_eq!(
            ExtraDiscountType::from_api_str("percent"),
            ExtraDiscountType::Percent
        );
        assert_eq!(
            ExtraDiscountType::from_api_str("amount"),
            ExtraDiscountType::Amount
        );
        assert_eq!(
            ExtraDiscountType::from_api_str("fixed"),
            ExtraDiscountType::Amount
        );
    }

    #[test]
    fn test_product_record_from_api_json() {
        let json = r#"{
            "id": 42,
            "name": "Green Tea",
            "unit_price": 100,
            "discount": "20",
            "discount_type": "flat",
            "current_stock": 7,
            "thumbnail": "tea.png"
        }"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, "42");
        assert_eq!(product.unit_price, 100.0);
        assert_eq!(product.discount, 20.0);
        assert_eq!(product.discount_type, DiscountType::Flat);
        assert_eq!(product.current_stock, 7);
        assert_eq!(product.thumbnail.as_deref(), Some("tea.png"));
    }

    #[test]
    fn test_product_record_missing_fields_use_defaults() {
        let product: ProductRecord =
            serde_json::from_str(r#"{"id": "p-1", "discount_type": null}"#).unwrap();

        assert_eq!(product.unit_price, 0.0);
        assert_eq!(product.discount, 0.0);
        assert_eq!(product.discount_type, DiscountType::Percent);
        assert_eq!(product.current_stock, 0);
        assert!(product.thumbnail.is_none());
    }

    #[test]
    fn test_product_record_non_numeric_price_is_nan() {
        let product: ProductRecord =
            serde_json::from_str(r#"{"id": "p-1", "unit_price": "call us"}"#).unwrap();
        assert!(product.unit_price.is_nan());
    }

    #[test]
    fn test_cart_line_from_product() {
        let product = ProductRecord {
            id: "p-9".to_string(),
            name: "Dates 1kg".to_string(),
            unit_price: 12.5,
            discount: 10.0,
            discount_type: DiscountType::Percent,
            current_stock: 3,
            thumbnail: Some("dates.png".to_string()),
        };

        let line = CartLineItem::from_product(&product);
        assert_eq!(line.product_id, "p-9");
        assert_eq!(line.unit_price, 12.5);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.discount, 0.0);
        assert_eq!(line.current_stock, 3);
        assert_eq!(line.image.as_deref(), Some("dates.png"));
    }

    #[test]
    fn test_order_level_discount_default() {
        let order = OrderLevelDiscount::default();
        assert_eq!(order.extra_discount, 0.0);
        assert_eq!(order.extra_discount_type, ExtraDiscountType::Amount);
        assert!(!order.has_coupon());
    }

    #[test]
    fn test_extra_discount_type_serializes_lowercase() {
        let json = serde_json::to_string(&ExtraDiscountType::Percent).unwrap();
        assert_eq!(json, "\"percent\"");
    }
}
