//! # Marketplace Ledger
//!
//! A registry of listed products and an atomic purchase operation that moves
//! ownership and funds in one step.
//!
//! ## Layers
//!
//! - **Domain types** - plain data, no concurrency concerns → [`Product`], [`Identity`], [`EventRecord`]
//! - **Registry** - append-only storage and id assignment → [`ProductRegistry`]
//! - **Ledger** - validation, the purchase transaction, balances and the event history → [`MarketplaceLedger`]
//! - **Service** - an actor owning the ledger; every request is handled to completion before the next → [`LedgerService`]
//! - **Client** - cloneable handle with one async method per operation → [`LedgerClient`]
//! - **System** - configuration, tracing setup, startup and shutdown → [`MarketplaceSystem`], [`setup_tracing`]
//!
//! ## Example Usage
//!
//! ```no_run
//! use marketplace_ledger::{Identity, LedgerConfig, MarketplaceSystem};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = MarketplaceSystem::new(LedgerConfig::default());
//! let client = system.ledger_client.clone();
//!
//! let product = client.list_product("iPhone".into(), 1_000_000, Identity::new("0xSeller")).await?;
//! let sold = client.purchase_product(product.id, Identity::new("0xBuyer"), 1_000_000).await?;
//! assert!(sold.purchased);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actors;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod ledger;
pub mod messages;
pub mod registry;

#[cfg(test)]
mod mock_framework;

pub use actors::LedgerService;
pub use app_system::{setup_tracing, ConfigError, LedgerConfig, MarketplaceSystem, SystemError};
pub use clients::LedgerClient;
pub use domain::{Amount, EventRecord, Identity, LedgerEvent, Product, ProductCreate, ProductId, ProductStatus};
pub use ledger::{LedgerError, MarketplaceLedger};
pub use registry::{ProductRegistry, RegistryError};
