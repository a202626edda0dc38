//! In-memory product repository

use async_trait::async_trait;

use crate::types::Product;

/// Lookup interface the HTTP handlers depend on.
///
/// Lookups never fail; an absent product is a normal `None`, not an error.
/// The contract is async to match the handler calling convention, even though
/// the in-memory implementation completes synchronously.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Single product by id, `None` when absent.
    async fn get_product(&self, id: i32) -> Option<Product>;

    /// Every product in the catalog.
    async fn get_products(&self) -> Vec<Product>;
}

/// Fixed catalog holding exactly one seeded product.
///
/// Stateless: the record is constructed fresh on every call, so nothing is
/// shared between requests.
pub struct InMemoryCatalog;

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self
    }

    fn seed() -> Product {
        Product {
            id: 1,
            name: "Sample 01".to_string(),
            category: None,
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn get_product(&self, id: i32) -> Option<Product> {
        (id == 1).then(Self::seed)
    }

    async fn get_products(&self) -> Vec<Product> {
        vec![Self::seed()]
    }
}
