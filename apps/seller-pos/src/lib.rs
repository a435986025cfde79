//! # Souk Seller POS
//!
//! Checkout layer for the seller point-of-sale: session state, commands,
//! the commerce API client, configuration, and the `souk-pos` CLI. Pricing
//! itself lives in `souk-core`.
//!
//! ## Module Organization
//! ```text
//! souk_pos/
//! ├── lib.rs          ◄─── You are here (tracing setup & exports)
//! ├── api/
//! │   ├── mod.rs      ◄─── CommerceApi trait + wire types
//! │   └── http.rs     ◄─── reqwest implementation
//! ├── commands/
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── order.rs    ◄─── Discounts, coupon, place order
//! │   └── catalog.rs  ◄─── Product and customer lists
//! ├── state/
//! │   └── checkout.rs ◄─── CheckoutState (Arc<Mutex<CheckoutSession>>)
//! ├── config.rs       ◄─── pos.toml + SOUK_* environment
//! ├── cli.rs          ◄─── clap commands
//! └── error.rs        ◄─── AppError for commands
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  seller input ──► commands ──► souk_core::cart ──► CheckoutView         │
//! │                      │                                                  │
//! │                      └──► CommerceApi ──► coupon check / place order    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=souk_pos=trace` - Trace the POS crate only
/// - Default: INFO for the souk crates, WARN for everything else
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,souk_pos=info,souk_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
