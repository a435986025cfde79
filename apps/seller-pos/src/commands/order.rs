//! # Order Commands
//!
//! Order-level discount, coupon, customer selection, and order placement.
//!
//! ## Place Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order(api)                                                       │
//! │      │                                                                  │
//! │      ├── 1. lock ─► validate_order_ready ─► build OrderPayload ─► unlock│
//! │      │          (empty cart / no customer: return, nothing sent)        │
//! │      │                                                                  │
//! │      ├── 2. POST pos/place-order  (no lock held)                        │
//! │      │          (error: session untouched, seller can retry)            │
//! │      │                                                                  │
//! │      └── 3. lock ─► same revision?  reset_after_order                   │
//! │                     changed?       settle_order (keep unsent lines)     │
//! │               ─► unlock ─► OrderPlaced                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use souk_core::amount::parse_non_negative_number;
use souk_core::cart::grand_total;
use souk_core::types::{ExtraDiscountType, OrderLevelDiscount};
use souk_core::validation::{validate_coupon_code, validate_order_ready};
use tracing::{debug, info, warn};

use crate::api::{CommerceApi, CouponCheckRequest, OrderPayload, OrderPlaced};
use crate::error::{AppError, ErrorCode};
use crate::state::{CheckoutSession, CheckoutState, CheckoutView};

/// Selects the customer the order is for. Blank clears the selection.
pub fn select_customer(state: &CheckoutState, customer_id: &str) -> CheckoutView {
    debug!(customer_id, "select_customer command");
    let customer_id = customer_id.trim();
    state.with_session_mut(|s| {
        s.customer_id = (!customer_id.is_empty()).then(|| customer_id.to_string());
        CheckoutView::from(&*s)
    })
}

/// Sets the order-level extra discount from the field's text and type.
///
/// Unparseable or negative text becomes 0. Any type other than `"percent"`
/// is a fixed amount.
pub fn set_extra_discount(state: &CheckoutState, text: &str, discount_type: &str) -> CheckoutView {
    let amount = parse_non_negative_number(text, 0.0);
    let discount_type = ExtraDiscountType::from_api_str(discount_type);
    debug!(text, amount, ?discount_type, "set_extra_discount command");
    state.with_session_mut(|s| {
        s.order_discount.extra_discount = amount;
        s.order_discount.extra_discount_type = discount_type;
        CheckoutView::from(&*s)
    })
}

/// Drops the applied coupon.
pub fn clear_coupon(state: &CheckoutState) -> CheckoutView {
    debug!("clear_coupon command");
    state.with_session_mut(|s| {
        s.order_discount.coupon_code.clear();
        s.order_discount.coupon_discount_amount = 0.0;
        CheckoutView::from(&*s)
    })
}

/// Checks a coupon against the current order and applies the amount the
/// server returns.
///
/// The order amount sent is the grand total without any coupon already
/// applied, so re-applying a coupon does not stack. The returned amount is
/// used as-is.
///
/// If the session was written while the check was in flight the amount is
/// discarded and a `Conflict` error is returned; the seller applies the
/// coupon again against the current cart.
pub async fn apply_coupon(
    state: &CheckoutState,
    api: &dyn CommerceApi,
    code: &str,
) -> Result<CheckoutView, AppError> {
    let code = validate_coupon_code(code)?;

    let (order_amount, revision) = state.with_session(|s| {
        let without_coupon = OrderLevelDiscount {
            coupon_discount_amount: 0.0,
            coupon_code: String::new(),
            ..s.order_discount.clone()
        };
        (grand_total(&s.cart, &without_coupon), s.revision)
    });
    debug!(code = %code, order_amount, "apply_coupon command");

    let request = CouponCheckRequest {
        code: code.clone(),
        order_amount,
    };
    let check = api.check_coupon(&request).await.map_err(|e| {
        warn!(code = %code, "Coupon check failed");
        AppError::from(e)
    })?;

    state.with_session_mut(|s| {
        if s.revision != revision {
            warn!(code = %code, "Checkout changed during coupon check, discarding amount");
            return Err(AppError::new(
                ErrorCode::Conflict,
                "Cart changed while the coupon was being checked, apply it again",
            ));
        }
        info!(code = %code, amount = check.coupon_discount_amount, "Coupon applied");
        s.order_discount.coupon_code = code;
        s.order_discount.coupon_discount_amount = check.coupon_discount_amount;
        Ok(CheckoutView::from(&*s))
    })
}

/// Submits the current checkout as an order.
///
/// ## Returns
/// The server's order id. The session is reset only when the server
/// accepted the order, and only the submitted lines are taken out of it:
/// anything added while the request was in flight stays in the cart.
pub async fn place_order(
    state: &CheckoutState,
    api: &dyn CommerceApi,
) -> Result<OrderPlaced, AppError> {
    let (payload, submitted_discount, revision) = state.with_session(|s| {
        validate_order_ready(&s.cart, s.customer_id.as_deref())?;
        Ok::<_, AppError>((build_payload(s), s.order_discount.clone(), s.revision))
    })?;

    info!(
        customer_id = %payload.customer_id,
        lines = payload.cart.len(),
        order_amount = payload.order_amount,
        "Placing order"
    );

    let placed = api.place_order(&payload).await?;

    state.with_session_mut(|s| {
        if s.revision == revision {
            s.reset_after_order();
        } else {
            warn!(order_id = %placed.order_id, "Checkout changed during placement, keeping unsent lines");
            s.settle_order(&payload.cart, &submitted_discount);
        }
    });
    info!(order_id = %placed.order_id, "Order placed");

    Ok(placed)
}

fn build_payload(session: &CheckoutSession) -> OrderPayload {
    let totals = session.totals();
    let discount = &session.order_discount;
    OrderPayload {
        customer_id: session.customer_id.clone().unwrap_or_default(),
        cart: session.cart.clone(),
        order_amount: totals.grand_total,
        extra_discount: discount.extra_discount,
        extra_discount_type: discount.extra_discount_type,
        coupon_discount_amount: discount.coupon_discount_amount,
        coupon_code: discount.coupon_code.clone(),
    }
}
