//! # Checkout State
//!
//! Owns the POS screen's checkout session: the cart, the order-level
//! discount, and the selected customer.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several commands read and write it
//! 2. Only one command should modify it at a time
//! 3. Network calls run on the tokio runtime next to UI-driven commands
//!
//! Guards are never held across an `.await`: commands copy what they need,
//! release the lock, call the API, then lock again to apply the result.
//! Every write through [`CheckoutState::with_session_mut`] bumps
//! `revision`, so a command can tell whether the session moved while its
//! request was in flight.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐   add / edit   ┌──────────┐  place_order  ┌──────────┐   │
//! │  │  Empty   │───────────────►│ In Cart  │──────────────►│  Placed  │   │
//! │  │ Session  │                │          │     (ok)      │          │   │
//! │  └──────────┘                └──────────┘               └────┬─────┘   │
//! │       ▲                           │ (error: unchanged)       │         │
//! │       └───────────────────────────┴────── reset_after_order ◄┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use souk_core::cart::price_cart;
use souk_core::types::{CartLineItem, OrderLevelDiscount, PricingResult};

/// The checkout session of one POS screen.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    /// Cart lines. Replaced wholesale by every cart operation.
    pub cart: Vec<CartLineItem>,

    /// Extra discount and coupon for the whole order.
    pub order_discount: OrderLevelDiscount,

    /// Customer the order is placed for.
    pub customer_id: Option<String>,

    /// When the session was opened or last reset.
    pub opened_at: DateTime<Utc>,

    /// Write counter, bumped by [`CheckoutState::with_session_mut`].
    pub revision: u64,
}

impl CheckoutSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        CheckoutSession {
            cart: Vec::new(),
            order_discount: OrderLevelDiscount::default(),
            customer_id: None,
            opened_at: Utc::now(),
            revision: 0,
        }
    }

    /// Current totals, recomputed from the cart.
    pub fn totals(&self) -> PricingResult {
        price_cart(&self.cart, &self.order_discount)
    }

    /// Clears the cart and the order-level discount after a placed order.
    ///
    /// The selected customer is kept for the next order.
    pub fn reset_after_order(&mut self) {
        self.cart.clear();
        self.order_discount = OrderLevelDiscount::default();
        self.opened_at = Utc::now();
    }

    /// Takes a placed order out of a session that changed after the order
    /// was built.
    ///
    /// Submitted quantities are subtracted line by line, so lines added or
    /// topped up in the meantime stay in the cart. The order-level discount
    /// is cleared only if it is still the one that was submitted.
    pub fn settle_order(&mut self, submitted: &[CartLineItem], discount: &OrderLevelDiscount) {
        self.cart = self
            .cart
            .iter()
            .filter_map(|line| {
                let sent = submitted
                    .iter()
                    .find(|sent| sent.product_id == line.product_id);
                match sent {
                    None => Some(line.clone()),
                    Some(sent) => {
                        let remaining = line.quantity - sent.quantity;
                        (remaining > 0).then(|| CartLineItem {
                            quantity: remaining,
                            ..line.clone()
                        })
                    }
                }
            })
            .collect();

        if self.order_discount == *discount {
            self.order_discount = OrderLevelDiscount::default();
        }
        self.opened_at = Utc::now();
    }
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

/// What every checkout command returns to the screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutView {
    pub items: Vec<CartLineItem>,
    pub totals: PricingResult,
    pub order_discount: OrderLevelDiscount,
    pub customer_id: Option<String>,
}

impl From<&CheckoutSession> for CheckoutView {
    fn from(session: &CheckoutSession) -> Self {
        CheckoutView {
            items: session.cart.clone(),
            totals: session.totals(),
            order_discount: session.order_discount.clone(),
            customer_id: session.customer_id.clone(),
        }
    }
}

/// Shared checkout state.
#[derive(Debug, Clone, Default)]
pub struct CheckoutState {
    session: Arc<Mutex<CheckoutSession>>,
}

impl CheckoutState {
    /// Creates a new empty checkout state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust
    /// use souk_pos::state::{CheckoutState, CheckoutView};
    ///
    /// let state = CheckoutState::new();
    /// let view = state.with_session(|s| CheckoutView::from(s));
    /// assert!(view.items.is_empty());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CheckoutSession) -> R,
    {
        let session = self
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// `revision` is bumped after `f` runs, so `f` still sees the value a
    /// reader saw before this write.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CheckoutSession) -> R,
    {
        let mut session = self
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let result = f(&mut session);
        session.revision = session.revision.wrapping_add(1);
        result
    }

    /// Snapshot of the session for the screen.
    pub fn view(&self) -> CheckoutView {
        self.with_session(|s| CheckoutView::from(s))
    }
}
