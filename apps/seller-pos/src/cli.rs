//! # Command Line
//!
//! `souk-pos` drives the pricing core and the checkout commands from a
//! terminal.
//!
//! ```text
//! souk-pos price --unit-price 100 --discount 20 --discount-type flat
//! souk-pos quote cart.json
//! souk-pos catalog
//! souk-pos checkout draft.json
//! ```

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use souk_core::cart::price_cart;
use souk_core::pricing::effective_price;
use souk_core::types::{CartLineItem, DiscountType, OrderLevelDiscount, PricingResult, ProductRecord};
use souk_core::wire;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::api::{CommerceApi, HttpCommerceApi, OrderPlaced};
use crate::commands;
use crate::config::PosConfig;
use crate::error::{AppError, ErrorCode};
use crate::state::CheckoutState;

/// Seller POS pricing and checkout
#[derive(Debug, Parser)]
#[command(name = "souk-pos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Use JSON output format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the effective unit price of a product
    Price {
        #[arg(long)]
        unit_price: f64,

        #[arg(long, default_value_t = 0.0)]
        discount: f64,

        /// "flat" or anything else for percent
        #[arg(long, default_value = "percent")]
        discount_type: String,
    },

    /// Price a cart read from a JSON file
    Quote { file: PathBuf },

    /// List the catalog with display prices
    Catalog,

    /// Replay a checkout draft and place the order
    Checkout { draft: PathBuf },
}

impl Command {
    /// Whether the command talks to the commerce API.
    pub fn needs_api(&self) -> bool {
        matches!(self, Command::Catalog | Command::Checkout { .. })
    }
}

/// Contents of a `quote` file.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub cart: Vec<CartLineItem>,
    #[serde(default)]
    pub order_discount: OrderLevelDiscount,
}

/// A checkout as the seller would enter it on the screen.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutDraft {
    pub customer_id: String,
    #[serde(default)]
    pub items: Vec<DraftItem>,
    #[serde(default, deserialize_with = "wire::number")]
    pub extra_discount: f64,
    #[serde(default)]
    pub extra_discount_type: String,
    #[serde(default)]
    pub coupon_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftItem {
    pub product: ProductRecord,
    #[serde(default = "default_quantity", deserialize_with = "wire::integer")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "wire::number")]
    pub discount: f64,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Serialize)]
struct PriceOutput {
    effective_price: f64,
}

/// Runs one CLI command.
///
/// Offline commands fall back to the default config when loading fails;
/// only `catalog` and `checkout` need valid API settings.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config = if cli.command.needs_api() {
        PosConfig::load(cli.config.clone())?
    } else {
        PosConfig::load_or_default(cli.config.clone())
    };

    match cli.command {
        Command::Price {
            unit_price,
            discount,
            discount_type,
        } => {
            let price = effective_price(unit_price, discount, DiscountType::from_api_str(&discount_type));
            if cli.json {
                print_json(&PriceOutput {
                    effective_price: price,
                })?;
            } else {
                println!("{}", config.format_amount(price));
            }
        }
        Command::Quote { file } => {
            let request: QuoteRequest = read_json(&file)?;
            let totals = price_cart(&request.cart, &request.order_discount);
            if cli.json {
                print_json(&totals)?;
            } else {
                print_totals(&config, &totals);
            }
        }
        Command::Catalog => {
            let api = HttpCommerceApi::new(&config.api)?;
            let listings = commands::load_catalog(&api).await?;
            if cli.json {
                print_json(&listings)?;
            } else {
                for listing in &listings {
                    let old = listing
                        .price
                        .old_price
                        .map(|p| format!("  (was {})", config.format_amount(p)))
                        .unwrap_or_default();
                    println!(
                        "{:<8} {:<32} {}{}",
                        listing.product.id,
                        listing.product.name,
                        config.format_amount(listing.price.price),
                        old
                    );
                }
            }
        }
        Command::Checkout { draft } => {
            let draft: CheckoutDraft = read_json(&draft)?;
            let api = HttpCommerceApi::new(&config.api)?;
            let state = CheckoutState::new();
            let placed = checkout(&state, &api, &draft).await?;
            if cli.json {
                print_json(&placed)?;
            } else {
                println!("Order placed: {}", placed.order_id);
            }
        }
    }

    Ok(())
}

/// Replays a draft through the checkout commands and places the order.
///
/// A product listed more than once gets the sum of its quantities; the last
/// listed discount wins.
pub async fn checkout(
    state: &CheckoutState,
    api: &dyn CommerceApi,
    draft: &CheckoutDraft,
) -> Result<OrderPlaced, AppError> {
    info!(customer_id = %draft.customer_id, items = draft.items.len(), "Replaying checkout draft");

    commands::select_customer(state, &draft.customer_id);
    for item in &draft.items {
        let in_cart = state.with_session(|s| {
            s.cart
                .iter()
                .find(|line| line.product_id == item.product.id)
                .map_or(0, |line| line.quantity)
        });
        commands::add_to_cart(state, &item.product);
        let quantity = in_cart + item.quantity;
        commands::set_item_quantity(state, &item.product.id, &quantity.to_string());
        commands::set_item_discount(state, &item.product.id, &item.discount.to_string());
    }
    commands::set_extra_discount(
        state,
        &draft.extra_discount.to_string(),
        &draft.extra_discount_type,
    );

    if let Some(code) = draft.coupon_code.as_deref().filter(|c| !c.trim().is_empty()) {
        commands::apply_coupon(state, api, code).await?;
    }

    commands::place_order(state, api).await
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::ValidationError,
            format!("Failed to read {}: {}", path.display(), e),
        )
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::new(
            ErrorCode::ValidationError,
            format!("Invalid JSON in {}: {}", path.display(), e),
        )
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| AppError::internal(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn print_totals(config: &PosConfig, totals: &PricingResult) {
    let rows = [
        ("Subtotal", totals.subtotal),
        ("Item discount", totals.item_discount_total),
        ("Extra discount", totals.extra_discount_amount),
        ("Total discount", totals.total_discount),
        ("Grand total", totals.grand_total),
    ];
    for (label, value) in rows {
        println!("{:<16}{:>14}", label, config.format_amount(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;

    #[test]
    fn test_parse_price_command() {
        let cli = Cli::try_parse_from([
            "souk-pos",
            "--json",
            "price",
            "--unit-price",
            "100",
            "--discount",
            "20",
            "--discount-type",
            "flat",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Command::Price {
                unit_price,
                discount,
                discount_type,
            } => {
                assert_eq!(unit_price, 100.0);
                assert_eq!(discount, 20.0);
                assert_eq!(discount_type, "flat");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["souk-pos", "quote", "cart.json", "--config", "pos.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pos.toml")));
        assert!(matches!(cli.command, Command::Quote { .. }));
    }

    #[test]
    fn test_quote_request_defaults() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{"cart": [{"product_id": "1", "name": "Tea", "unit_price": 100, "quantity": 2,
                          "discount": 5, "current_stock": 0, "image": null}]}"#,
        )
        .unwrap();

        let totals = price_cart(&request.cart, &request.order_discount);
        assert_eq!(totals.subtotal, 200.0);
        assert_eq!(totals.grand_total, 190.0);
    }

    #[tokio::test]
    async fn test_checkout_draft_replay() {
        let draft: CheckoutDraft = serde_json::from_str(
            r#"{
                "customer_id": "7",
                "items": [
                    {"product": {"id": 1, "name": "Tea", "unit_price": "100"}, "quantity": 2, "discount": 5},
                    {"product": {"id": 2, "name": "Honey", "unit_price": 50}}
                ],
                "extra_discount": 10,
                "extra_discount_type": "percent",
                "coupon_code": "EID15"
            }"#,
        )
        .unwrap();

        let api = FakeApi {
            coupon_amount: 15.0,
            ..FakeApi::default()
        };
        let state = CheckoutState::new();

        let placed = checkout(&state, &api, &draft).await.unwrap();
        assert_eq!(placed.order_id, "1001");

        let order = api.last_order().unwrap();
        assert_eq!(order.order_amount, 200.0);
        assert_eq!(order.cart[0].quantity, 2);
        assert_eq!(order.cart[1].quantity, 1);
        assert_eq!(api.coupon_requests.lock().unwrap()[0].order_amount, 215.0);
    }

    #[tokio::test]
    async fn test_checkout_draft_without_items_fails_before_api() {
        let draft: CheckoutDraft = serde_json::from_str(r#"{"customer_id": "7"}"#).unwrap();
        let api = FakeApi::default();

        let err = checkout(&CheckoutState::new(), &api, &draft).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PreconditionFailed);
        assert_eq!(api.order_count(), 0);
    }

    #[tokio::test]
    async fn test_checkout_draft_sums_repeated_products() {
        let draft: CheckoutDraft = serde_json::from_str(
            r#"{
                "customer_id": "7",
                "items": [
                    {"product": {"id": 1, "name": "Tea", "unit_price": 10}, "quantity": 2},
                    {"product": {"id": 1, "name": "Tea", "unit_price": 10}, "quantity": 3, "discount": 1}
                ]
            }"#,
        )
        .unwrap();
        let api = FakeApi::default();

        checkout(&CheckoutState::new(), &api, &draft).await.unwrap();

        let order = api.last_order().unwrap();
        assert_eq!(order.cart.len(), 1);
        assert_eq!(order.cart[0].quantity, 5);
        assert_eq!(order.cart[0].discount, 1.0);
        assert_eq!(order.order_amount, 45.0);
    }

    #[test]
    fn test_only_network_commands_need_api() {
        let price = Command::Price {
            unit_price: 1.0,
            discount: 0.0,
            discount_type: "flat".to_string(),
        };
        assert!(!price.needs_api());
        assert!(!Command::Quote {
            file: PathBuf::from("cart.json")
        }
        .needs_api());
        assert!(Command::Catalog.needs_api());
        assert!(Command::Checkout {
            draft: PathBuf::from("draft.json")
        }
        .needs_api());
    }

    #[tokio::test]
    async fn test_price_runs_with_broken_api_config() {
        let path = std::env::temp_dir().join(format!("souk-pos-bad-api-{}.toml", std::process::id()));
        std::fs::write(&path, "[api]\nbase_url = \"ftp://files.example.com\"\n").unwrap();
        assert!(PosConfig::load(Some(path.clone())).is_err());

        let cli = Cli::try_parse_from([
            "souk-pos",
            "--config",
            path.to_str().unwrap(),
            "price",
            "--unit-price",
            "100",
        ])
        .unwrap();
        let result = run(cli).await;
        std::fs::remove_file(&path).ok();

        assert!(result.is_ok());
    }
}
