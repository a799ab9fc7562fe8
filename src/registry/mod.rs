//! Append-only product storage and id assignment.

pub mod error;

pub use error::*;

use crate::domain::{Amount, Identity, Product, ProductId};

/// Ordered store of every product ever listed.
///
/// Record `n` lives at index `n - 1`, so ids are dense by construction.
/// There is no removal; listings are permanent history.
#[derive(Debug, Default, Clone)]
pub struct ProductRegistry {
    products: Vec<Product>,
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next successful insert will receive.
    pub fn next_id(&self) -> ProductId {
        self.count() + 1
    }

    pub fn count(&self) -> u64 {
        self.products.len() as u64
    }

    /// Appends a new, unsold product owned by `owner`.
    ///
    /// # Errors
    /// `InvalidInput` when `name` is blank or `price` is zero. Nothing is
    /// stored in that case.
    pub fn insert(&mut self, name: &str, price: Amount, owner: Identity) -> Result<Product, RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidInput("name must not be empty".to_string()));
        }
        if price == 0 {
            return Err(RegistryError::InvalidInput("price must be greater than zero".to_string()));
        }

        let product = Product {
            id: self.next_id(),
            name: name.to_string(),
            price,
            owner,
            purchased: false,
        };
        self.products.push(product.clone());
        Ok(product)
    }

    pub fn get(&self, id: ProductId) -> Result<&Product, RegistryError> {
        self.index_of(id)
            .map(|index| &self.products[index])
            .ok_or(RegistryError::NotFound(id))
    }

    /// Replaces the mutable fields of an existing record.
    pub fn update(&mut self, id: ProductId, owner: Identity, purchased: bool) -> Result<&Product, RegistryError> {
        let index = self.index_of(id).ok_or(RegistryError::NotFound(id))?;
        let product = &mut self.products[index];
        product.owner = owner;
        product.purchased = purchased;
        Ok(&self.products[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn index_of(&self, id: ProductId) -> Option<usize> {
        if id == 0 || id > self.count() {
            None
        } else {
            Some((id - 1) as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> Identity {
        Identity::new("seller")
    }

    #[test]
    fn test_ids_are_dense_and_sequential() {
        let mut registry = ProductRegistry::new();
        assert_eq!(registry.next_id(), 1);

        for expected in 1..=5 {
            let product = registry.insert("Widget", 10, seller()).unwrap();
            assert_eq!(product.id, expected);
            assert!(!product.purchased);
        }
        assert_eq!(registry.count(), 5);
        assert_eq!(registry.next_id(), 6);

        let ids: Vec<ProductId> = registry.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_rejects_invalid_input() {
        let mut registry = ProductRegistry::new();

        assert!(matches!(registry.insert("", 10, seller()), Err(RegistryError::InvalidInput(_))));
        assert!(matches!(registry.insert("   ", 10, seller()), Err(RegistryError::InvalidInput(_))));
        assert!(matches!(registry.insert("Widget", 0, seller()), Err(RegistryError::InvalidInput(_))));
        assert_eq!(registry.count(), 0);
        assert_eq!(registry.next_id(), 1);
    }

    #[test]
    fn test_get_outside_range_is_not_found() {
        let mut registry = ProductRegistry::new();
        registry.insert("Widget", 10, seller()).unwrap();

        assert_eq!(registry.get(0), Err(RegistryError::NotFound(0)));
        assert_eq!(registry.get(2), Err(RegistryError::NotFound(2)));
        assert_eq!(registry.get(1).unwrap().name, "Widget");
    }

    #[test]
    fn test_update_replaces_owner_and_flag() {
        let mut registry = ProductRegistry::new();
        registry.insert("Widget", 10, seller()).unwrap();

        let updated = registry.update(1, Identity::new("buyer"), true).unwrap();
        assert_eq!(updated.owner, Identity::new("buyer"));
        assert!(updated.purchased);
        assert_eq!(updated.price, 10);

        assert_eq!(
            registry.update(7, Identity::new("buyer"), true),
            Err(RegistryError::NotFound(7))
        );
    }
}
