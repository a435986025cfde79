//! # Cart Commands
//!
//! Cart manipulation for the checkout screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tap product ──► add_to_cart ──► line added, or quantity + 1            │
//! │                                                                         │
//! │  [-] [ 3 ] [+]     decrement_item / set_item_quantity / increment_item  │
//! │  discount [ 5 ]    set_item_discount (text coerced, never an error)     │
//! │  [x]               remove_from_cart                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command swaps in the cart returned by the core operation and hands
//! back a fresh [`CheckoutView`].

use souk_core::amount::parse_quantity;
use souk_core::cart;
use souk_core::types::ProductRecord;
use tracing::debug;

use crate::state::{CheckoutState, CheckoutView};

/// Gets the current checkout contents and totals.
pub fn get_checkout(state: &CheckoutState) -> CheckoutView {
    debug!("get_checkout command");
    state.view()
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Already in cart: quantity increases by one
/// - Not in cart: appended with quantity 1 and no line discount
pub fn add_to_cart(state: &CheckoutState, product: &ProductRecord) -> CheckoutView {
    debug!(product_id = %product.id, "add_to_cart command");
    state.with_session_mut(|s| {
        s.cart = cart::add_or_increment(&s.cart, product);
        CheckoutView::from(&*s)
    })
}

pub fn increment_item(state: &CheckoutState, product_id: &str) -> CheckoutView {
    debug!(product_id, "increment_item command");
    state.with_session_mut(|s| {
        s.cart = cart::increment_quantity(&s.cart, product_id);
        CheckoutView::from(&*s)
    })
}

/// Decreases a line's quantity. Never goes below 1; use
/// [`remove_from_cart`] to drop the line.
pub fn decrement_item(state: &CheckoutState, product_id: &str) -> CheckoutView {
    debug!(product_id, "decrement_item command");
    state.with_session_mut(|s| {
        s.cart = cart::decrement_quantity(&s.cart, product_id);
        CheckoutView::from(&*s)
    })
}

/// Sets a line's quantity from the quantity field's text.
pub fn set_item_quantity(state: &CheckoutState, product_id: &str, text: &str) -> CheckoutView {
    let quantity = parse_quantity(text);
    debug!(product_id, text, quantity, "set_item_quantity command");
    state.with_session_mut(|s| {
        s.cart = cart::set_quantity(&s.cart, product_id, quantity);
        CheckoutView::from(&*s)
    })
}

/// Sets a line's per-unit discount from the discount field's text.
pub fn set_item_discount(state: &CheckoutState, product_id: &str, text: &str) -> CheckoutView {
    debug!(product_id, text, "set_item_discount command");
    state.with_session_mut(|s| {
        s.cart = cart::set_discount(&s.cart, product_id, text);
        CheckoutView::from(&*s)
    })
}

pub fn remove_from_cart(state: &CheckoutState, product_id: &str) -> CheckoutView {
    debug!(product_id, "remove_from_cart command");
    state.with_session_mut(|s| {
        s.cart = cart::remove(&s.cart, product_id);
        CheckoutView::from(&*s)
    })
}

/// Empties the cart. Order-level discount and customer are kept.
pub fn clear_cart(state: &CheckoutState) -> CheckoutView {
    debug!("clear_cart command");
    state.with_session_mut(|s| {
        s.cart.clear();
        CheckoutView::from(&*s)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use souk_core::types::DiscountType;

    fn product(id: &str, price: f64) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            name: format!("Product {}", id),
            unit_price: price,
            discount: 0.0,
            discount_type: DiscountType::Percent,
            current_stock: 10,
            thumbnail: None,
        }
    }

    #[test]
    fn test_add_twice_increments() {
        let state = CheckoutState::new();
        add_to_cart(&state, &product("1", 100.0));
        let view = add_to_cart(&state, &product("1", 100.0));

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.totals.subtotal, 200.0);
    }

    #[test]
    fn test_quantity_and_discount_text() {
        let state = CheckoutState::new();
        add_to_cart(&state, &product("1", 100.0));

        let view = set_item_quantity(&state, "1", "3 pcs");
        assert_eq!(view.items[0].quantity, 3);

        let view = set_item_quantity(&state, "1", "");
        assert_eq!(view.items[0].quantity, 1);

        let view = set_item_discount(&state, "1", "12.5");
        assert_eq!(view.items[0].discount, 12.5);
        assert_eq!(view.totals.item_discount_total, 12.5);

        let view = set_item_discount(&state, "1", "abc");
        assert_eq!(view.items[0].discount, 0.0);
    }

    #[test]
    fn test_decrement_floors_at_one_then_remove() {
        let state = CheckoutState::new();
        add_to_cart(&state, &product("1", 4.0));
        increment_item(&state, "1");

        assert_eq!(decrement_item(&state, "1").items[0].quantity, 1);
        assert_eq!(decrement_item(&state, "1").items[0].quantity, 1);

        let view = remove_from_cart(&state, "1");
        assert!(view.items.is_empty());
        assert_eq!(view.totals.grand_total, 0.0);
    }

    #[test]
    fn test_unknown_product_is_noop() {
        let state = CheckoutState::new();
        add_to_cart(&state, &product("1", 4.0));
        let before = get_checkout(&state);

        assert_eq!(increment_item(&state, "missing"), before);
        assert_eq!(set_item_discount(&state, "missing", "3"), before);
        assert_eq!(remove_from_cart(&state, "missing"), before);
    }

    #[test]
    fn test_clear_cart_keeps_customer() {
        let state = CheckoutState::new();
        state.with_session_mut(|s| s.customer_id = Some("9".to_string()));
        add_to_cart(&state, &product("1", 4.0));

        let view = clear_cart(&state);
        assert!(view.items.is_empty());
        assert_eq!(view.customer_id.as_deref(), Some("9"));
    }
}
