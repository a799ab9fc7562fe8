use thiserror::Error;

use crate::domain::ProductId;

/// Errors raised by the product registry itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    #[error("Invalid product input: {0}")]
    InvalidInput(String),
    #[error("Product not found: {0}")]
    NotFound(ProductId),
}
