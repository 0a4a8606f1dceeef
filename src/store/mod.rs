// src/store/mod.rs
// Single-row operations only; concurrent writers to one row are last-write-wins.
mod memory;
mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::product::{NewProduct, Product};

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("product {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts a row, assigning its id and both timestamps.
    async fn insert(&self, product: &NewProduct) -> Result<Product, StoreError>;

    /// Returns `Err(StoreError::NotFound)` if no row has this id.
    async fn get(&self, id: i64) -> Result<Product, StoreError>;

    /// All rows in creation order.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Overwrites the user-supplied fields and refreshes `updated_at`.
    async fn update(&self, id: i64, product: &NewProduct) -> Result<Product, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
