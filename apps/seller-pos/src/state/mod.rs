//! # State Module
//!
//! Session state for the seller POS.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          POS State                                      │
//! │                                                                         │
//! │  ┌───────────────────────────────────┐   ┌───────────────────────────┐  │
//! │  │ CheckoutState (Arc<Mutex>)        │   │ PosConfig (read-only)     │  │
//! │  │  cart, order discount, customer   │   │  api + display settings   │  │
//! │  └───────────────────────────────────┘   └───────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod checkout;

pub use checkout::{CheckoutSession, CheckoutState, CheckoutView};
