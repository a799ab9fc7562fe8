use std::fmt;

use serde::{Deserialize, Serialize};

use super::identity::{Amount, Identity};

/// Sequential product identifier, starting at 1.
pub type ProductId = u64;

/// A single marketplace listing.
///
/// Records are created by the ledger only. `id`, `name` and `price` never
/// change afterwards; `owner` and `purchased` change once, on purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Amount,
    pub owner: Identity,
    pub purchased: bool,
}

impl Product {
    pub fn status(&self) -> ProductStatus {
        if self.purchased {
            ProductStatus::Sold
        } else {
            ProductStatus::Listed
        }
    }
}

/// Payload for listing a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Amount,
    pub seller: Identity,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: Amount, seller: impl Into<Identity>) -> Self {
        Self {
            name: name.into(),
            price,
            seller: seller.into(),
        }
    }
}

/// Lifecycle state of a listing. `Sold` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Listed,
    Sold,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductStatus::Listed => f.write_str("listed"),
            ProductStatus::Sold => f.write_str("sold"),
        }
    }
}
