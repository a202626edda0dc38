//! Product data access

mod product_repo;

pub use product_repo::{InMemoryCatalog, ProductRepository};
