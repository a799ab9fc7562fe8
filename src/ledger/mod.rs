//! Business rules of the marketplace and the atomic purchase transaction.
//!
//! [`MarketplaceLedger`] is a plain value: mutations take `&mut self`, so a
//! caller holding it has exclusive access for the whole validate, mutate and
//! record sequence. Concurrent access goes through
//! [`LedgerService`](crate::actors::LedgerService), which owns one ledger.

pub mod balances;
pub mod error;

pub use balances::*;
pub use error::*;

use crate::domain::{Amount, EventRecord, Identity, LedgerEvent, Product, ProductId};
use crate::registry::ProductRegistry;

pub const DEFAULT_MARKETPLACE_NAME: &str = "Dapp University Marketplace";

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Clone)]
pub struct MarketplaceLedger {
    name: String,
    registry: ProductRegistry,
    balances: Balances,
    events: Vec<EventRecord>,
}

impl Default for MarketplaceLedger {
    fn default() -> Self {
        Self::new(DEFAULT_MARKETPLACE_NAME)
    }
}

impl MarketplaceLedger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registry: ProductRegistry::new(),
            balances: Balances::new(),
            events: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Lists a new product owned by `seller`.
    ///
    /// # Errors
    /// - `InvalidIdentity` if `seller` is empty
    /// - `InvalidListing` if `name` is empty or `price` is zero
    pub fn list_product(&mut self, name: &str, price: Amount, seller: Identity) -> LedgerResult<Product> {
        ensure_identity(&seller)?;
        if name.trim().is_empty() {
            return Err(LedgerError::InvalidListing("name must not be empty".to_string()));
        }
        if price == 0 {
            return Err(LedgerError::InvalidListing("price must be greater than zero".to_string()));
        }

        let product = self.registry.insert(name, price, seller)?;
        self.record(LedgerEvent::ProductListed {
            product: product.clone(),
        });
        Ok(product)
    }

    /// Buys product `id` for `buyer`, who attaches `payment`.
    ///
    /// Checks run in order and the first failure wins: the product must exist,
    /// be unsold, be owned by someone other than `buyer`, and `payment` must
    /// cover the price.
    ///
    /// `payment` is value attached by the caller's wallet, not drawn from a
    /// ledger balance. On success the seller is credited `price` and the excess
    /// is returned to the buyer, reported as `refunded` in the event, in the
    /// same step as the ownership change. Every fallible computation happens
    /// before the first write.
    pub fn purchase_product(&mut self, id: ProductId, buyer: Identity, payment: Amount) -> LedgerResult<Product> {
        ensure_identity(&buyer)?;

        let product = self
            .registry
            .get(id)
            .map_err(|_| LedgerError::InvalidProductId(id))?;
        if product.purchased {
            return Err(LedgerError::AlreadyPurchased(id));
        }
        if product.owner == buyer {
            return Err(LedgerError::SelfPurchaseForbidden {
                id,
                owner: buyer,
            });
        }
        if payment < product.price {
            return Err(LedgerError::InsufficientPayment {
                price: product.price,
                offered: payment,
            });
        }

        let price = product.price;
        let seller = product.owner.clone();
        let refund = payment - price;

        let seller_balance = self.balances.credited(&seller, price)?;

        let purchased = self.registry.update(id, buyer, true)?.clone();
        self.balances.set(seller.clone(), seller_balance);

        self.record(LedgerEvent::ProductPurchased {
            product: purchased.clone(),
            seller,
            paid: price,
            refunded: refund,
        });
        Ok(purchased)
    }

    /// Credits `amount` to `identity`, as the wallet collaborator does when it
    /// funds an account.
    pub fn deposit(&mut self, identity: Identity, amount: Amount) -> LedgerResult<Amount> {
        ensure_identity(&identity)?;
        if amount == 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        let balance = self.balances.credited(&identity, amount)?;
        self.balances.set(identity, balance);
        Ok(balance)
    }

    // =========================================================================
    // READS
    // =========================================================================

    pub fn get_product(&self, id: ProductId) -> LedgerResult<Product> {
        Ok(self.registry.get(id)?.clone())
    }

    pub fn product_count(&self) -> u64 {
        self.registry.count()
    }

    pub fn products(&self) -> Vec<Product> {
        self.registry.products()
    }

    pub fn balance_of(&self, identity: &Identity) -> Amount {
        self.balances.balance_of(identity)
    }

    pub fn total_balance(&self) -> Amount {
        self.balances.total()
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Records with a sequence strictly greater than `sequence`.
    pub fn events_since(&self, sequence: u64) -> &[EventRecord] {
        let start = usize::try_from(sequence).unwrap_or(usize::MAX).min(self.events.len());
        &self.events[start..]
    }

    pub fn last_sequence(&self) -> u64 {
        self.events.len() as u64
    }

    fn record(&mut self, event: LedgerEvent) {
        let sequence = self.last_sequence() + 1;
        self.events.push(EventRecord { sequence, event });
    }
}

fn ensure_identity(identity: &Identity) -> LedgerResult<()> {
    if identity.is_empty() {
        Err(LedgerError::InvalidIdentity)
    } else {
        Ok(())
    }
}
