//! Sensor listing/registration and nested measurement handlers.

use crate::error::AppError;
use crate::model::MeasurementView;
use crate::response::{created, no_content, resource_path};
use crate::service::{Lookup, RequestValidator, SensorService};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

/// `[[name, model], ...]`
pub async fn list_sensors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sensors = SensorService::list_sensors(&state.pool).await?;
    Ok(Json(sensors))
}

pub async fn create_sensor(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let new = RequestValidator::sensor(&headers, &body)?;
    SensorService::create_sensor(&state.pool, &new).await?;
    created(&resource_path(&["api", "sensors", new.name.as_str()], true)?)
}

pub async fn read_sensor(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let sensor = Lookup::resolve_sensor(&state.pool, &name).await?;
    let detail = SensorService::detail(&state.pool, &sensor).await?;
    Ok(Json(detail))
}

pub async fn list_measurements(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let sensor = Lookup::resolve_sensor(&state.pool, &name).await?;
    let rows = SensorService::list_measurements(&state.pool, &sensor).await?;
    Ok(Json(rows))
}

/// Sensor is resolved before the media type and body are looked at, so an unknown
/// sensor is a 404 whatever the payload.
pub async fn create_measurement(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let sensor = Lookup::resolve_sensor(&state.pool, &name).await?;
    let new = RequestValidator::measurement(&headers, &body)?;
    let id = SensorService::create_measurement(&state.pool, &sensor, &new)
        .await?
        .to_string();
    created(&resource_path(
        &["api", "sensors", sensor.name.as_str(), "measurements", id.as_str()],
        false,
    )?)
}

pub async fn read_measurement(
    State(state): State<AppState>,
    Path((name, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let sensor = Lookup::resolve_sensor(&state.pool, &name).await?;
    let measurement = Lookup::resolve_sensor_measurement(&state.pool, &sensor, &id).await?;
    Ok(Json(MeasurementView::from(measurement)))
}

/// The measurement is addressed by id alone; the sensor segment is not consulted, so rows
/// whose sensor has been deleted can still be removed.
pub async fn delete_measurement(
    State(state): State<AppState>,
    Path((_sensor, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let measurement = Lookup::resolve_measurement(&state.pool, &id).await?;
    SensorService::delete_measurement(&state.pool, &measurement).await?;
    Ok(no_content())
}
