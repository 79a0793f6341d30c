//! Request validation: media type, body shape, required fields and field types.
//! Every check fails with exactly one error and nothing is persisted before all pass.

use crate::error::AppError;
use crate::model::{NewMeasurement, NewProduct, NewSensor, NewStorageItem};
use axum::http::{header::CONTENT_TYPE, HeaderMap};
use chrono::{DateTime, NaiveDateTime};
use serde_json::{Map, Value};

const JSON_MEDIA_TYPE: &str = "application/json";

const NAIVE_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

pub struct RequestValidator;

impl RequestValidator {
    /// `Content-Type` must be `application/json`; parameters such as `charset` are ignored.
    pub fn require_json(headers: &HeaderMap) -> Result<(), AppError> {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let essence = content_type.split(';').next().unwrap_or("").trim();
        if essence.eq_ignore_ascii_case(JSON_MEDIA_TYPE) {
            Ok(())
        } else {
            Err(AppError::UnsupportedMediaType(
                "request content type must be application/json".into(),
            ))
        }
    }

    /// Parse the body as a JSON object.
    pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, AppError> {
        if body.is_empty() {
            return Err(AppError::BadRequest("request body is empty".into()));
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(m)) => Ok(m),
            Ok(_) => Err(AppError::BadRequest("body must be a JSON object".into())),
            Err(e) => Err(AppError::BadRequest(format!("invalid JSON: {}", e))),
        }
    }

    /// All listed fields must be present and non-null.
    pub fn require_fields(body: &Map<String, Value>, fields: &[&str]) -> Result<(), AppError> {
        let missing: Vec<&str> = fields
            .iter()
            .copied()
            .filter(|f| matches!(body.get(*f), None | Some(Value::Null)))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!(
                "incomplete request - missing fields: {}",
                missing.join(", ")
            )))
        }
    }

    pub fn product(headers: &HeaderMap, body: &[u8]) -> Result<NewProduct, AppError> {
        Self::require_json(headers)?;
        let body = Self::parse_object(body)?;
        Self::require_fields(&body, &["handle", "weight", "price"])?;
        Ok(NewProduct {
            handle: string_field(&body, "handle")?,
            weight: number_field(&body, "weight")?,
            price: number_field(&body, "price")?,
        })
    }

    pub fn storage_item(headers: &HeaderMap, body: &[u8]) -> Result<NewStorageItem, AppError> {
        Self::require_json(headers)?;
        let body = Self::parse_object(body)?;
        Self::require_fields(&body, &["location", "qty"])?;
        Ok(NewStorageItem {
            location: string_field(&body, "location")?,
            qty: integer_field(&body, "qty")?,
        })
    }

    pub fn sensor(headers: &HeaderMap, body: &[u8]) -> Result<NewSensor, AppError> {
        Self::require_json(headers)?;
        let body = Self::parse_object(body)?;
        Self::require_fields(&body, &["name", "model"])?;
        Ok(NewSensor {
            name: string_field(&body, "name")?,
            model: string_field(&body, "model")?,
        })
    }

    pub fn measurement(headers: &HeaderMap, body: &[u8]) -> Result<NewMeasurement, AppError> {
        Self::require_json(headers)?;
        let body = Self::parse_object(body)?;
        Self::require_fields(&body, &["time", "value"])?;
        Ok(NewMeasurement {
            time: timestamp_field(&body, "time")?,
            value: number_field(&body, "value")?,
        })
    }
}

fn string_field(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    match body.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(AppError::BadRequest(format!("{} must not be empty", field))),
        _ => Err(AppError::BadRequest(format!("{} must be a string", field))),
    }
}

fn number_field(body: &Map<String, Value>, field: &str) -> Result<f64, AppError> {
    body.get(field)
        .filter(|v| v.is_number())
        .and_then(Value::as_f64)
        .ok_or_else(|| AppError::BadRequest(format!("{} must be a number", field)))
}

fn integer_field(body: &Map<String, Value>, field: &str) -> Result<i64, AppError> {
    body.get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::BadRequest(format!("{} must be an integer", field)))
}

fn timestamp_field(body: &Map<String, Value>, field: &str) -> Result<NaiveDateTime, AppError> {
    body.get(field)
        .and_then(Value::as_str)
        .and_then(parse_timestamp)
        .ok_or_else(|| AppError::BadRequest(format!("{} must be an ISO-8601 timestamp", field)))
}

/// RFC 3339 timestamps are normalized to UTC; timestamps without an offset are taken as-is.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
