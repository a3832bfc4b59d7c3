//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur during gateway request handling.
///
/// Every variant maps to HTTP 400: requests either succeed or are the
/// client's fault. The `Display` text becomes the `error` field of the
/// JSON envelope, so domain errors pass through transparently.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An operation rejected its input.
    #[error(transparent)]
    Domain(#[from] calc_core::DomainError),

    /// A required query parameter was absent.
    #[error("Missing parameter {name}")]
    MissingParameter { name: &'static str },

    /// A query parameter was present but not coercible to a number.
    #[error("invalid value for parameter {name}: '{value}'")]
    InvalidParameter { name: &'static str, value: String },
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": self.to_string()})),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn gateway_errors_all_map_to_400() {
        let missing = GatewayError::MissingParameter { name: "x" };
        assert_eq!(missing.into_response().status(), StatusCode::BAD_REQUEST);

        let invalid = GatewayError::InvalidParameter {
            name: "b",
            value: "abc".to_owned(),
        };
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let domain = GatewayError::from(calc_core::DomainError::NegativeSqrt { value: -4.0 });
        assert_eq!(domain.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_parameter_message_matches_wire_contract() {
        let err = GatewayError::MissingParameter { name: "x" };
        assert_eq!(err.to_string(), "Missing parameter x");
    }

    #[test]
    fn domain_error_message_passes_through_unprefixed() {
        let err = GatewayError::from(calc_core::DomainError::NonPositiveLn { value: 0.0 });
        assert_eq!(err.to_string(), "ln is defined for positive numbers only");
    }
}
