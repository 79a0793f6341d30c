//! Products and the storage rows that reference them.

use crate::error::AppError;
use crate::model::{NewProduct, NewStorageItem, Product, ProductView, StorageItem, StorageItemView};
use crate::service::Lookup;
use crate::store::insert_returning_id;
use sqlx::SqlitePool;

pub struct InventoryService;

impl InventoryService {
    pub async fn list_products(pool: &SqlitePool) -> Result<Vec<ProductView>, AppError> {
        let rows = sqlx::query_as::<_, Product>("SELECT id, handle, weight, price FROM product ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ProductView::from).collect())
    }

    /// Insert a product whose handle is not taken. The existence check gives the common
    /// case a clean 409; the UNIQUE constraint settles concurrent inserts of the same handle.
    pub async fn create_product(pool: &SqlitePool, new: &NewProduct) -> Result<i64, AppError> {
        let conflict = format!("handle '{}' already exists", new.handle);
        if Lookup::find_product(pool, &new.handle).await?.is_some() {
            return Err(AppError::Conflict(conflict));
        }
        let q = sqlx::query("INSERT INTO product (handle, weight, price) VALUES (?, ?, ?)")
            .bind(new.handle.as_str())
            .bind(new.weight)
            .bind(new.price);
        let id = insert_returning_id(pool, q, &conflict).await?;
        tracing::info!(product_id = id, handle = %new.handle, "product created");
        Ok(id)
    }

    pub async fn list_storage(pool: &SqlitePool, product: &Product) -> Result<Vec<StorageItemView>, AppError> {
        let rows = sqlx::query_as::<_, StorageItem>(
            "SELECT id, product_id, location, qty FROM storage_item WHERE product_id = ? ORDER BY id",
        )
        .bind(product.id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(StorageItemView::from).collect())
    }

    /// Fails with `Conflict` if the product was deleted after it was resolved.
    pub async fn create_storage_item(
        pool: &SqlitePool,
        product: &Product,
        new: &NewStorageItem,
    ) -> Result<i64, AppError> {
        let q = sqlx::query("INSERT INTO storage_item (product_id, location, qty) VALUES (?, ?, ?)")
            .bind(product.id)
            .bind(new.location.as_str())
            .bind(new.qty);
        let conflict = format!("product '{}' no longer exists", product.handle);
        let id = insert_returning_id(pool, q, &conflict).await?;
        tracing::info!(storage_item_id = id, handle = %product.handle, "storage item created");
        Ok(id)
    }
}
