use thiserror::Error;

use crate::domain::{Amount, Identity, ProductId};
use crate::registry::RegistryError;

/// Rejections of a ledger operation. None of them leaves state modified.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    #[error("Invalid listing: {0}")]
    InvalidListing(String),
    #[error("Invalid product id: {0}")]
    InvalidProductId(ProductId),
    #[error("Product already purchased: {0}")]
    AlreadyPurchased(ProductId),
    #[error("Owner {owner} cannot purchase their own product {id}")]
    SelfPurchaseForbidden { id: ProductId, owner: Identity },
    #[error("Insufficient payment: price {price}, offered {offered}")]
    InsufficientPayment { price: Amount, offered: Amount },
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Invalid amount: {0}")]
    InvalidAmount(Amount),
    #[error("Invalid identity: must not be empty")]
    InvalidIdentity,
    #[error("Balance overflow for {0}")]
    BalanceOverflow(Identity),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<RegistryError> for LedgerError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidInput(reason) => LedgerError::InvalidListing(reason),
            RegistryError::NotFound(id) => LedgerError::NotFound(id),
        }
    }
}
