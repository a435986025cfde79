//! # Commerce API
//!
//! The seller POS talks to the remote commerce API for four things: the
//! product catalog, the customer list, coupon checks, and order placement.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  {base}/products            ──► ProductPage { products }           │
//! │  GET  {base}/customers           ──► CustomerPage { customers }         │
//! │  POST {base}/coupon/check-coupon ──► CouponCheck { coupon_discount_... }│
//! │  POST {base}/pos/place-order     ──► OrderPlaced { order_id }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The server is the final authority on the charged amount. The client only
//! sends the total it displayed so both sides can be compared.

mod http;

pub use http::HttpCommerceApi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use souk_core::types::{CartLineItem, ExtraDiscountType, ProductRecord};
use souk_core::wire;
use thiserror::Error;

/// Errors from commerce API calls.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The response body was not what we expected.
    #[error("decode error: {0}")]
    Decode(String),

    /// The configured base URL cannot be used.
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
}

/// Result type alias for API calls.
pub type ApiResult<T> = Result<T, ApiClientError>;

// =============================================================================
// Wire Types
// =============================================================================

/// A page of catalog products.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

/// A customer the seller can place an order for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(deserialize_with = "wire::id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A page of customers.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerPage {
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// Body of `POST /coupon/check-coupon`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouponCheckRequest {
    pub code: String,
    pub order_amount: f64,
}

/// Response of a successful coupon check.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CouponCheck {
    #[serde(default, deserialize_with = "wire::number")]
    pub coupon_discount_amount: f64,
}

/// Body of `POST /pos/place-order`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPayload {
    pub customer_id: String,
    pub cart: Vec<CartLineItem>,
    /// The grand total shown to the seller.
    pub order_amount: f64,
    pub extra_discount: f64,
    pub extra_discount_type: ExtraDiscountType,
    pub coupon_discount_amount: f64,
    pub coupon_code: String,
}

/// Response of a successful order placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlaced {
    #[serde(deserialize_with = "wire::id_string")]
    pub order_id: String,
}

// =============================================================================
// API Trait
// =============================================================================

/// The commerce API as seen by the POS.
///
/// Implemented by [`HttpCommerceApi`] in production and by in-memory fakes
/// in tests.
#[async_trait]
pub trait CommerceApi: Send + Sync {
    /// Fetches the seller's product catalog.
    async fn fetch_products(&self) -> ApiResult<Vec<ProductRecord>>;

    /// Fetches the seller's customers.
    async fn fetch_customers(&self) -> ApiResult<Vec<Customer>>;

    /// Asks the server how much a coupon takes off `order_amount`.
    async fn check_coupon(&self, request: &CouponCheckRequest) -> ApiResult<CouponCheck>;

    /// Submits an order.
    async fn place_order(&self, payload: &OrderPayload) -> ApiResult<OrderPlaced>;
}

// =============================================================================
// Test Fake
// =============================================================================

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::sync::Mutex;

    /// In-memory API that records every call.
    #[derive(Default)]
    pub struct FakeApi {
        pub products: Vec<ProductRecord>,
        pub customers: Vec<Customer>,
        pub coupon_amount: f64,
        pub fail_orders: bool,
        pub coupon_requests: Mutex<Vec<CouponCheckRequest>>,
        pub orders: Mutex<Vec<OrderPayload>>,
    }

    impl FakeApi {
        pub fn order_count(&self) -> usize {
            self.orders.lock().unwrap().len()
        }

        pub fn last_order(&self) -> Option<OrderPayload> {
            self.orders.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl CommerceApi for FakeApi {
        async fn fetch_products(&self) -> ApiResult<Vec<ProductRecord>> {
            Ok(self.products.clone())
        }

        async fn fetch_customers(&self) -> ApiResult<Vec<Customer>> {
            Ok(self.customers.clone())
        }

        async fn check_coupon(&self, request: &CouponCheckRequest) -> ApiResult<CouponCheck> {
            self.coupon_requests.lock().unwrap().push(request.clone());
            if request.code == "EXPIRED" {
                return Err(ApiClientError::Service {
                    status: 422,
                    message: "Coupon expired".to_string(),
                });
            }
            Ok(CouponCheck {
                coupon_discount_amount: self.coupon_amount,
            })
        }

        async fn place_order(&self, payload: &OrderPayload) -> ApiResult<OrderPlaced> {
            if self.fail_orders {
                return Err(ApiClientError::Network("connection reset".to_string()));
            }
            let mut orders = self.orders.lock().unwrap();
            orders.push(payload.clone());
            Ok(OrderPlaced {
                order_id: format!("{}", 1000 + orders.len()),
            })
        }
    }
}
