//! Typed error handling for the serializer
//!
//! Only identifier resolution can fail. Everything else the serializer meets
//! (unknown include names, validation errors, odd pagination parameters) is
//! absorbed into the produced document instead of being raised.
//!
//! # Example
//!
//! ```rust,ignore
//! match serializer.serialize(&model, include) {
//!     Ok(document) => send(document),
//!     Err(JsonApiError::InvalidIdentifier { kind, .. }) => {
//!         tracing::error!("{} has no usable id", kind);
//!     }
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::document::{ErrorObject, ErrorsDocument};

/// Result alias used across the crate
pub type Result<T, E = JsonApiError> = std::result::Result<T, E>;

/// Errors raised while building a document
#[derive(Debug, Clone, Error, PartialEq)]
pub enum JsonApiError {
    /// The resource identifier is missing, empty or not a scalar.
    #[error("Invalid identifier for {kind}: {value}")]
    InvalidIdentifier {
        /// Kind name of the offending resource
        kind: String,
        /// JSON rendering of the rejected identifier value
        value: String,
    },
}

impl JsonApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            JsonApiError::InvalidIdentifier { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            JsonApiError::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
        }
    }

    /// Render as a JSON:API errors document
    pub fn to_document(&self) -> ErrorsDocument {
        ErrorsDocument {
            errors: vec![ErrorObject {
                status: Some(self.status_code().as_u16().to_string()),
                code: Some(self.error_code().to_string()),
                source: None,
                detail: self.to_string(),
            }],
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self.to_document())).into_response();
        crate::server::set_media_type(&mut response);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid() -> JsonApiError {
        JsonApiError::InvalidIdentifier {
            kind: "ResourceModel".to_string(),
            value: "[]".to_string(),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            invalid().to_string(),
            "Invalid identifier for ResourceModel: []"
        );
    }

    #[test]
    fn test_status_and_code() {
        assert_eq!(invalid().status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(invalid().error_code(), "INVALID_IDENTIFIER");
    }

    #[test]
    fn test_to_document() {
        let value = serde_json::to_value(invalid().to_document()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "errors": [{
                    "status": "500",
                    "code": "INVALID_IDENTIFIER",
                    "detail": "Invalid identifier for ResourceModel: []"
                }]
            })
        );
    }
}
