//! Axum integration
//!
//! Handlers return [`JsonApi`] to send a serialized [`Document`] with the
//! JSON:API media type, and read the include directive and page parameters
//! through `Query<JsonApiQuery>`.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::document::Document;

/// The JSON:API media type
pub const MEDIA_TYPE: &str = "application/vnd.api+json";

/// A document sent as an HTTP response
///
/// Data documents are sent with 200, errors documents with 422.
#[derive(Debug, Clone)]
pub struct JsonApi(pub Document);

impl JsonApi {
    /// Send with an explicit status (e.g. 201 after a create)
    pub fn with_status(self, status: StatusCode) -> (StatusCode, Self) {
        (status, self)
    }
}

impl From<Document> for JsonApi {
    fn from(document: Document) -> Self {
        Self(document)
    }
}

impl IntoResponse for JsonApi {
    fn into_response(self) -> Response {
        let status = if self.0.is_errors() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::OK
        };
        let mut response = (status, Json(self.0)).into_response();
        set_media_type(&mut response);
        response
    }
}

/// Replace the response content type with the JSON:API media type
pub(crate) fn set_media_type(response: &mut Response) {
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DataDocument, ErrorObject, ErrorsDocument, PrimaryData};

    #[test]
    fn test_data_document_is_ok() {
        let document = Document::Data(DataDocument {
            data: PrimaryData::Collection(Vec::new()),
            included: Vec::new(),
            meta: None,
            links: None,
        });
        let response = JsonApi(document).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], MEDIA_TYPE);
    }

    #[test]
    fn test_errors_document_is_unprocessable() {
        let document = Document::Errors(ErrorsDocument {
            errors: vec![ErrorObject::for_attribute("title", "required")],
        });
        let response = JsonApi(document).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_with_status_overrides() {
        let document = Document::Data(DataDocument {
            data: PrimaryData::Collection(Vec::new()),
            included: Vec::new(),
            meta: None,
            links: None,
        });
        let response = JsonApi(document)
            .with_status(StatusCode::CREATED)
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
