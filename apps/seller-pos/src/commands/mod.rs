//! # Commands Module
//!
//! Everything the checkout screen can ask for.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Product and customer lists
//! ├── cart.rs     ◄─── Cart manipulation
//! └── order.rs    ◄─── Extra discount, coupon, customer, place order
//! ```
//!
//! ## Command Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sync, local only:                                                      │
//! │    fn increment_item(state: &CheckoutState, id) -> CheckoutView         │
//! │                                                                         │
//! │  async, talks to the commerce API:                                      │
//! │    async fn place_order(state, api: &dyn CommerceApi)                   │
//! │        -> Result<OrderPlaced, AppError>                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text typed by the seller is coerced, never rejected. Only coupon codes,
//! checkout preconditions, and API calls produce an [`AppError`](crate::error::AppError).

pub mod cart;
pub mod catalog;
pub mod order;

pub use cart::*;
pub use catalog::*;
pub use order::*;
