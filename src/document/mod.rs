//! JSON:API document types
//!
//! These are plain serde structs; field declaration order is the key order of
//! the rendered JSON, and absent optional members are skipped entirely.

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::field::FieldValue;

/// A link object, rendered as `{"href": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Named links (`self`, `related`, `first`, `next`, ...)
pub type Links = IndexMap<String, Link>;

/// Minimal `{id, type}` linkage to a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceIdentifier {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Linkage carried by an expanded relationship
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RelationshipData {
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

/// A relationship entry under `relationships`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationship {
    pub links: Links,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RelationshipData>,
}

/// A fully serialized resource object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceObject {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub attributes: IndexMap<String, FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<IndexMap<String, Relationship>>,
    pub links: Links,
}

impl ResourceObject {
    /// The `{id, type}` linkage pointing at this object
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier {
            id: self.id.clone(),
            type_name: self.type_name.clone(),
        }
    }
}

/// Where an error originated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorSource {
    pub pointer: String,
}

/// A single entry of an `errors` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    pub detail: String,
}

impl ErrorObject {
    /// An error pointing at `/data/attributes/<field>`
    pub fn for_attribute(field: &str, detail: impl Into<String>) -> Self {
        Self {
            status: None,
            code: None,
            source: Some(ErrorSource {
                pointer: format!("/data/attributes/{}", field),
            }),
            detail: detail.into(),
        }
    }
}

/// `{"errors": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorsDocument {
    pub errors: Vec<ErrorObject>,
}

/// Pagination metadata under `meta`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PageMeta {
    pub total_count: usize,
    pub page_count: usize,
    pub current_page: usize,
    pub per_page: usize,
}

/// One element of a collection's `data` array
///
/// Items are serialized independently, so an item carrying validation errors
/// shows up as its own errors object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CollectionEntry {
    Resource(ResourceObject),
    Errors(ErrorsDocument),
}

/// Primary data of a document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrimaryData {
    Single(ResourceObject),
    Collection(Vec<CollectionEntry>),
}

/// A document carrying primary data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataDocument {
    pub data: PrimaryData,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<ResourceObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// A top-level JSON:API document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Data(DataDocument),
    Errors(ErrorsDocument),
}

impl Document {
    /// Whether this is an errors document
    pub fn is_errors(&self) -> bool {
        matches!(self, Document::Errors(_))
    }

    /// Render as a `serde_json::Value`
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Render as a compact JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
