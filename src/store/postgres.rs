use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;

use super::{ProductStore, StoreError};
use crate::models::product::{NewProduct, Product};

const COLUMNS: &str = "id, name, description, quantity, unit_price, created_at, updated_at";

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: &NewProduct) -> Result<Product, StoreError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, description, quantity, unit_price)
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.unit_price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(?e, "Failed to insert product");
            e
        })?;

        Ok(product)
    }

    async fn get(&self, id: i64) -> Result<Product, StoreError> {
        sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM products WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        match sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM products ORDER BY id"))
            .fetch_all(&self.pool)
            .await
        {
            Ok(products) => Ok(products),
            Err(e) => {
                error!(?e, "Failed to fetch products");
                Err(e.into())
            }
        }
    }

    async fn update(&self, id: i64, product: &NewProduct) -> Result<Product, StoreError> {
        sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET
             name = $1,
             description = $2,
             quantity = $3,
             unit_price = $4,
             updated_at = GREATEST(now(), created_at)
             WHERE id = $5 RETURNING {COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.unit_price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}
