//! # souk-core: Pure Pricing Logic for the Souk Marketplace
//!
//! This crate holds the only non-trivial arithmetic in the marketplace apps:
//! the discount-aware unit price shown on every product card, and the POS
//! cart totals a seller sees before placing an order.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Souk Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile Screens (external)                    │   │
//! │  │    Listings ──► Product Detail ──► POS Cart ──► Order Placed    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                seller-pos (checkout session)                    │   │
//! │  │    add_to_cart, set_item_discount, apply_coupon, place_order    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ souk-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │   cart    │  │  amount   │  │ validation│  │   │
//! │  │   │ effective │  │ subtotal  │  │  parsing  │  │  order    │  │   │
//! │  │   │  price    │  │ discounts │  │ rounding  │  │  ready?   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog items, cart lines, order-level discounts
//! - [`pricing`] - Unit price markdowns for listings
//! - [`cart`] - POS cart mutations and totals
//! - [`amount`] - Text input coercion and display formatting
//! - [`validation`] - Checkout preconditions
//! - [`error`] - Domain error types
//! - [`wire`] - Lenient deserializers for API records
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: totals are recomputed from the cart on every read
//! 2. **No I/O**: the commerce API lives in `seller-pos`
//! 3. **Plain Numbers**: amounts are `f64` major units, exactly as the API
//!    sends them; NaN from a bad record propagates instead of being hidden
//! 4. **No Clamping**: a discount larger than the price gives a negative
//!    result, and that value is what callers see
//!
//! ## Example Usage
//!
//! ```rust
//! use souk_core::cart::price_cart;
//! use souk_core::types::{CartLineItem, ExtraDiscountType, OrderLevelDiscount};
//!
//! let cart = vec![CartLineItem::new("p-1", "Tea", 100.0, 2).with_discount(5.0)];
//! let order = OrderLevelDiscount {
//!     extra_discount: 10.0,
//!     extra_discount_type: ExtraDiscountType::Percent,
//!     ..OrderLevelDiscount::default()
//! };
//!
//! let totals = price_cart(&cart, &order);
//! assert_eq!(totals.subtotal, 200.0);
//! assert_eq!(totals.grand_total, 170.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod cart;
pub mod error;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod wire;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use pricing::{display_price, effective_price, DisplayPrice};
pub use types::*;
