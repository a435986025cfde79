//! # Cart Module
//!
//! POS cart mutations and the totals derived from them.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Seller Action            Operation                 Cart Change         │
//! │  ─────────────            ─────────                 ───────────         │
//! │                                                                         │
//! │  Tap/scan product ───────► add_or_increment() ────► push or qty + 1     │
//! │                                                                         │
//! │  Press + / − ────────────► increment/decrement ───► qty ± 1 (min 1)     │
//! │                                                                         │
//! │  Type discount ──────────► set_discount() ────────► discount = parsed   │
//! │                                                                         │
//! │  Swipe remove ───────────► remove() ──────────────► line filtered out   │
//! │                                                                         │
//! │  NOTE: every operation returns a NEW cart. The caller replaces its      │
//! │        cart wholesale, so there is never a half-applied update.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals
//! ```text
//! subtotal            = Σ unit_price × quantity        (full price)
//! item_discount_total = Σ discount × quantity          (flat per unit)
//! extra_discount      = subtotal × extra / 100         (percent)
//!                     | extra                          (amount)
//! total_discount      = item + extra + coupon          (additive, no cap)
//! grand_total         = subtotal − total_discount      (may go negative)
//! ```

use crate::amount::parse_non_negative_number;
use crate::types::{
    CartLineItem, ExtraDiscountType, OrderLevelDiscount, PricingResult, ProductRecord,
};

// =============================================================================
// Mutations
// =============================================================================

/// Adds one unit of `product`.
///
/// An existing line with the same `product_id` gets `quantity + 1`; otherwise
/// a new line with quantity 1 and no discount is appended.
pub fn add_or_increment(cart: &[CartLineItem], product: &ProductRecord) -> Vec<CartLineItem> {
    if cart.iter().any(|line| line.product_id == product.id) {
        return map_line(cart, &product.id, |line| line.quantity += 1);
    }

    let mut next = cart.to_vec();
    next.push(CartLineItem::from_product(product));
    next
}

/// Sets a line's quantity, never below 1.
///
/// An unknown `product_id` leaves the cart unchanged.
pub fn set_quantity(cart: &[CartLineItem], product_id: &str, new_quantity: i64) -> Vec<CartLineItem> {
    map_line(cart, product_id, |line| line.quantity = new_quantity.max(1))
}

/// The `+` control.
pub fn increment_quantity(cart: &[CartLineItem], product_id: &str) -> Vec<CartLineItem> {
    map_line(cart, product_id, |line| line.quantity += 1)
}

/// The `−` control. A line at quantity 1 stays at 1.
pub fn decrement_quantity(cart: &[CartLineItem], product_id: &str) -> Vec<CartLineItem> {
    map_line(cart, product_id, |line| line.quantity = (line.quantity - 1).max(1))
}

/// Sets a line's per-unit discount from raw text input.
///
/// Text that does not parse as a non-negative number sets the discount to 0.
pub fn set_discount(cart: &[CartLineItem], product_id: &str, raw_text: &str) -> Vec<CartLineItem> {
    let discount = parse_non_negative_number(raw_text, 0.0);
    map_line(cart, product_id, |line| line.discount = discount)
}

/// Removes a line.
pub fn remove(cart: &[CartLineItem], product_id: &str) -> Vec<CartLineItem> {
    cart.iter()
        .filter(|line| line.product_id != product_id)
        .cloned()
        .collect()
}

fn map_line<F>(cart: &[CartLineItem], product_id: &str, update: F) -> Vec<CartLineItem>
where
    F: Fn(&mut CartLineItem),
{
    cart.iter()
        .cloned()
        .map(|mut line| {
            if line.product_id == product_id {
                update(&mut line);
            }
            line
        })
        .collect()
}

// =============================================================================
// Totals
// =============================================================================

/// Σ `unit_price × quantity`. Per-item discounts are NOT subtracted here.
pub fn subtotal(cart: &[CartLineItem]) -> f64 {
    cart.iter().map(CartLineItem::line_total).sum()
}

/// Σ `discount × quantity`.
pub fn item_discount_total(cart: &[CartLineItem]) -> f64 {
    cart.iter().map(CartLineItem::line_discount).sum()
}

/// Resolves the order-level extra discount against a subtotal.
///
/// ## Example
/// ```rust
/// use souk_core::cart::extra_discount_amount;
/// use souk_core::types::{ExtraDiscountType, OrderLevelDiscount};
///
/// let mut order = OrderLevelDiscount { extra_discount: 10.0, ..Default::default() };
/// assert_eq!(extra_discount_amount(200.0, &order), 10.0);
///
/// order.extra_discount_type = ExtraDiscountType::Percent;
/// assert_eq!(extra_discount_amount(200.0, &order), 20.0);
/// ```
pub fn extra_discount_amount(subtotal_value: f64, order: &OrderLevelDiscount) -> f64 {
    match order.extra_discount_type {
        ExtraDiscountType::Percent => subtotal_value * order.extra_discount / 100.0,
        ExtraDiscountType::Amount => order.extra_discount,
    }
}

/// Item discounts + extra discount + coupon discount.
pub fn total_discount(cart: &[CartLineItem], order: &OrderLevelDiscount) -> f64 {
    item_discount_total(cart)
        + extra_discount_amount(subtotal(cart), order)
        + order.coupon_discount_amount
}

/// `subtotal − total_discount`. Not clamped at zero.
pub fn grand_total(cart: &[CartLineItem], order: &OrderLevelDiscount) -> f64 {
    subtotal(cart) - total_discount(cart, order)
}

/// Computes every total in one pass over the operations above.
pub fn price_cart(cart: &[CartLineItem], order: &OrderLevelDiscount) -> PricingResult {
    let subtotal = subtotal(cart);
    let item_discount_total = item_discount_total(cart);
    let extra_discount_amount = extra_discount_amount(subtotal, order);
    let total_discount = item_discount_total + extra_discount_amount + order.coupon_discount_amount;

    PricingResult {
        subtotal,
        item_discount_total,
        extra_discount_amount,
        total_discount,
        grand_total: subtotal - total_discount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
