//! Resource routes. Collection paths keep their trailing slash; measurement items do not.

use crate::handlers::{kanji, products, sensors};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/products/",
            get(products::list_products).post(products::create_product),
        )
        .route("/api/products/:handle/", get(products::read_product))
        .route(
            "/api/products/:handle/storage/",
            get(products::list_storage).post(products::create_storage_item),
        )
        .route("/sensors/", get(sensors::list_sensors))
        .route("/api/sensors/", post(sensors::create_sensor))
        .route("/api/sensors/:sensor/", get(sensors::read_sensor))
        .route(
            "/api/sensors/:sensor/measurements/",
            get(sensors::list_measurements).post(sensors::create_measurement),
        )
        .route(
            "/api/sensors/:sensor/measurements/:id",
            get(sensors::read_measurement).delete(sensors::delete_measurement),
        )
        .route("/api/words/", get(kanji::list_words))
        .route("/api/words/:written/", get(kanji::read_word))
        .route("/api/kanji/:kanji/", get(kanji::read_kanji))
        .with_state(state)
}
