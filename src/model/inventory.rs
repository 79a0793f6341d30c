use serde::Serialize;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub handle: String,
    pub weight: f64,
    pub price: f64,
}

/// Public representation: the surrogate id never leaves the service.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductView {
    pub handle: String,
    pub weight: f64,
    pub price: f64,
}

impl From<Product> for ProductView {
    fn from(p: Product) -> Self {
        ProductView {
            handle: p.handle,
            weight: p.weight,
            price: p.price,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub handle: String,
    pub weight: f64,
    pub price: f64,
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct StorageItem {
    pub id: i64,
    pub product_id: i64,
    pub location: String,
    pub qty: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StorageItemView {
    pub location: String,
    pub qty: i64,
}

impl From<StorageItem> for StorageItemView {
    fn from(s: StorageItem) -> Self {
        StorageItemView {
            location: s.location,
            qty: s.qty,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewStorageItem {
    pub location: String,
    pub qty: i64,
}
