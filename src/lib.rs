//! # This-JSON:API
//!
//! Serializes resources and paginated collections into
//! [JSON:API](https://jsonapi.org) documents.
//!
//! ## Features
//!
//! - **Resource Objects**: `id`, `type`, `attributes`, `relationships` and `self` links
//! - **Compound Documents**: `include` expansion with deduplicated side-loading
//! - **Pagination**: `meta` counters and `self`/`first`/`prev`/`next`/`last` links
//! - **Validation Errors**: resources carrying errors render as `errors` documents
//! - **Auto-Pluralization**: `ResourceModel` → `resource-models`
//! - **Axum Integration**: response wrapper with the JSON:API media type
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi::prelude::*;
//!
//! struct User {
//!     id: i64,
//!     name: String,
//!     errors: ErrorBag,
//! }
//!
//! impl_resource!(
//!     User,
//!     kind: "User",
//!     id: id,
//!     link: "http://example.com/users",
//!     fields: [name],
//!     errors: errors,
//! );
//!
//! let user = User { id: 1, name: "Ada".to_string(), errors: ErrorBag::new() };
//! let document = Serializer::new().serialize_model(&user, None).unwrap();
//!
//! assert_eq!(
//!     document.to_json().unwrap(),
//!     r#"{"data":{"id":"1","type":"users","attributes":{"name":"Ada"},"links":{"self":{"href":"http://example.com/users/1"}}}}"#
//! );
//! ```

pub mod config;
pub mod core;
pub mod document;
pub mod entities;
pub mod serializer;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        AsRelation, DataProvider, Relation, Resource,
        error::{JsonApiError, Result},
        field::FieldValue,
        pluralize::Pluralizer,
        provider::ArrayDataProvider,
        query::{JsonApiQuery, Pagination},
        record::Record,
        validation::ErrorBag,
    };

    // === Macros ===
    pub use crate::impl_resource;

    // === Serializer ===
    pub use crate::serializer::{Serializer, Subject};

    // === Documents ===
    pub use crate::document::{
        CollectionEntry, DataDocument, Document, ErrorObject, ErrorsDocument, Link, Links,
        PageMeta, PrimaryData, Relationship, RelationshipData, ResourceIdentifier,
        ResourceObject,
    };

    // === Config ===
    pub use crate::config::SerializerConfig;

    // === Server ===
    pub use crate::server::{JsonApi, MEDIA_TYPE};
}
