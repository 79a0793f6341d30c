//! Product collection/item and per-product storage handlers.

use crate::error::AppError;
use crate::model::ProductView;
use crate::response::{created, resource_path};
use crate::service::{InventoryService, Lookup, RequestValidator};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = InventoryService::list_products(&state.pool).await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let new = RequestValidator::product(&headers, &body)?;
    InventoryService::create_product(&state.pool, &new).await?;
    created(&resource_path(&["api", "products", new.handle.as_str()], true)?)
}

pub async fn read_product(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = Lookup::resolve_product(&state.pool, &handle).await?;
    Ok(Json(ProductView::from(product)))
}

pub async fn list_storage(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = Lookup::resolve_product(&state.pool, &handle).await?;
    let items = InventoryService::list_storage(&state.pool, &product).await?;
    Ok(Json(items))
}

pub async fn create_storage_item(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let product = Lookup::resolve_product(&state.pool, &handle).await?;
    let new = RequestValidator::storage_item(&headers, &body)?;
    let id = InventoryService::create_storage_item(&state.pool, &product, &new)
        .await?
        .to_string();
    created(&resource_path(
        &["api", "products", product.handle.as_str(), "storage", id.as_str()],
        true,
    )?)
}
