//! Response helpers for the fixed status/header contract.

use crate::error::AppError;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// 201 with an empty body and a `Location` header. Called after the write has committed,
/// so a header that cannot be built is a server fault, never the client's.
pub fn created(location: &str) -> Result<Response, AppError> {
    let value = HeaderValue::from_str(location)
        .map_err(|_| AppError::Internal(format!("unrepresentable location: {}", location)))?;
    Ok((StatusCode::CREATED, [(header::LOCATION, value)]).into_response())
}

/// 204 with an empty body.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Builds an absolute path from segments, percent-encoding each one.
/// `trailing_slash` appends the `/` the collection-style resource URLs use.
pub fn resource_path(segments: &[&str], trailing_slash: bool) -> Result<String, AppError> {
    let mut url = url::Url::parse("http://localhost/")
        .map_err(|e| AppError::Internal(format!("location base: {}", e)))?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| AppError::Internal("location base cannot hold a path".into()))?;
        path.clear();
        path.extend(segments);
        if trailing_slash {
            path.push("");
        }
    }
    Ok(url.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_path_encodes_segments() {
        assert_eq!(
            resource_path(&["api", "products", "widget-1"], true).unwrap(),
            "/api/products/widget-1/"
        );
        assert_eq!(
            resource_path(&["api", "sensors", "temp 1", "measurements", "7"], false).unwrap(),
            "/api/sensors/temp%201/measurements/7"
        );
        assert_eq!(
            resource_path(&["api", "kanji", "配"], true).unwrap(),
            "/api/kanji/%E9%85%8D/"
        );
    }

    #[test]
    fn unbuildable_location_is_a_server_error() {
        let err = created("/api/products/bad\nvalue/").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)), "{err:?}");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
