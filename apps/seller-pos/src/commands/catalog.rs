//! # Catalog Commands
//!
//! Product and customer lists for the POS screen.

use serde::Serialize;
use souk_core::pricing::{display_price, DisplayPrice};
use souk_core::types::ProductRecord;
use tracing::{debug, info};

use crate::api::{CommerceApi, Customer};
use crate::error::AppError;

/// A product card: the record plus the price to show on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogListing {
    pub product: ProductRecord,
    pub price: DisplayPrice,
}

impl From<ProductRecord> for CatalogListing {
    fn from(product: ProductRecord) -> Self {
        let price = display_price(&product.catalog_item());
        CatalogListing { product, price }
    }
}

/// Fetches the catalog and prices every product for display.
pub async fn load_catalog(api: &dyn CommerceApi) -> Result<Vec<CatalogListing>, AppError> {
    debug!("load_catalog command");
    let products = api.fetch_products().await?;
    info!(count = products.len(), "Catalog loaded");
    Ok(products.into_iter().map(CatalogListing::from).collect())
}

/// Fetches the customers an order can be placed for.
pub async fn load_customers(api: &dyn CommerceApi) -> Result<Vec<Customer>, AppError> {
    debug!("load_customers command");
    let customers = api.fetch_customers().await?;
    info!(count = customers.len(), "Customers loaded");
    Ok(customers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use souk_core::types::DiscountType;

    fn record(id: &str, price: f64, discount: f64, discount_type: DiscountType) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            name: "Tea".to_string(),
            unit_price: price,
            discount,
            discount_type,
            current_stock: 3,
            thumbnail: None,
        }
    }

    #[tokio::test]
    async fn test_load_catalog_prices_products() {
        let api = FakeApi {
            products: vec![
                record("1", 100.0, 20.0, DiscountType::Flat),
                record("2", 100.0, 20.0, DiscountType::Percent),
                record("3", 100.0, 0.0, DiscountType::Flat),
            ],
            ..FakeApi::default()
        };

        let listings = load_catalog(&api).await.unwrap();
        assert_eq!(listings.len(), 3);

        assert_eq!(listings[0].price.price, 80.0);
        assert_eq!(listings[0].price.old_price, Some(100.0));
        assert_eq!(listings[1].price.price, 80.0);
        assert_eq!(listings[2].price.price, 100.0);
        assert!(!listings[2].price.is_discounted());
    }

    #[tokio::test]
    async fn test_load_customers() {
        let api = FakeApi {
            customers: vec![Customer {
                id: "7".to_string(),
                name: "Walk-in".to_string(),
                phone: None,
            }],
            ..FakeApi::default()
        };

        let customers = load_customers(&api).await.unwrap();
        assert_eq!(customers[0].id, "7");
    }
}
