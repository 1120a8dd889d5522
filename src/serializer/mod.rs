//! The JSON:API serialization engine
//!
//! [`Serializer`] turns a single [`Resource`] or a [`DataProvider`] into a
//! [`Document`]:
//!
//! - a resource with validation errors becomes an errors document
//! - otherwise each resource becomes a resource object with `attributes`,
//!   `relationships` and a `self` link
//! - relationships named by the include directive carry linkage `data`, and
//!   the related resources are side-loaded once each under `included`
//! - paginated collections get `meta` and navigation `links`
//!
//! # Example
//!
//! ```
//! use jsonapi::prelude::*;
//!
//! let author = Record::new("User", 7, "http://example.com/users")
//!     .with_fields(["name"])
//!     .with_value("name", "Ada");
//! let post = Record::new("BlogPost", 1, "http://example.com/posts")
//!     .with_fields(["title"])
//!     .with_extra_fields(["author"])
//!     .with_value("title", "Hello")
//!     .with_related("author", author);
//!
//! let document = Serializer::new()
//!     .serialize(Subject::Resource(&post), Some("author"))
//!     .unwrap();
//! let json = document.to_value().unwrap();
//!
//! assert_eq!(json["data"]["type"], "blog-posts");
//! assert_eq!(json["data"]["relationships"]["author"]["data"]["id"], "7");
//! assert_eq!(json["included"][0]["attributes"]["name"], "Ada");
//! ```

pub mod attributes;
pub mod identity;
pub mod include;
pub mod relationships;

use crate::config::SerializerConfig;
use crate::core::error::Result;
use crate::core::provider::DataProvider;
use crate::core::resource::Resource;
use crate::core::validation::ErrorBag;
use crate::document::{
    CollectionEntry, DataDocument, Document, ErrorObject, ErrorsDocument, Link, Links,
    PrimaryData, ResourceObject,
};

use self::include::{IncludeSet, IncludedSet};

/// What to serialize
#[derive(Clone, Copy)]
pub enum Subject<'a> {
    /// A single resource
    Resource(&'a dyn Resource),
    /// A (paginated) collection of resources
    Collection(&'a dyn DataProvider),
}

/// Converts resources and collections into JSON:API documents
///
/// The serializer holds configuration only; every call builds its document
/// from scratch, so one instance can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    config: SerializerConfig,
}

impl Serializer {
    /// Create a serializer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a serializer with an explicit configuration
    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Toggle pluralization of type names
    pub fn pluralize(mut self, pluralize: bool) -> Self {
        self.config.pluralize = pluralize;
        self
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Serialize a resource or a collection
    ///
    /// `include` is the raw comma-separated include directive of the request.
    pub fn serialize(&self, subject: Subject<'_>, include: Option<&str>) -> Result<Document> {
        match subject {
            Subject::Resource(resource) => self.serialize_model(resource, include),
            Subject::Collection(provider) => self.serialize_collection(provider, include),
        }
    }

    /// Serialize a single resource as a top-level document
    pub fn serialize_model(
        &self,
        resource: &dyn Resource,
        include: Option<&str>,
    ) -> Result<Document> {
        if let Some(errors) = model_errors(resource) {
            tracing::debug!(kind = %resource.kind(), "resource has validation errors");
            return Ok(Document::Errors(errors));
        }

        let includes = IncludeSet::parse(include);
        let data = self.resource_object(resource, &includes)?;
        let mut included = IncludedSet::new();
        self.collect_included(resource, &includes, &mut included)?;

        Ok(Document::Data(DataDocument {
            data: PrimaryData::Single(data),
            included: included.into_vec(),
            meta: None,
            links: None,
        }))
    }

    /// Serialize the current page of a collection
    ///
    /// Items are serialized independently; an item with validation errors
    /// becomes an errors entry in `data`. Side-loaded resources are shared by
    /// all items.
    pub fn serialize_collection(
        &self,
        provider: &dyn DataProvider,
        include: Option<&str>,
    ) -> Result<Document> {
        let includes = IncludeSet::parse(include);
        let mut included = IncludedSet::new();

        let models = provider.models();
        let mut data = Vec::with_capacity(models.len());
        for model in models {
            if let Some(errors) = model_errors(model) {
                data.push(CollectionEntry::Errors(errors));
                continue;
            }
            data.push(CollectionEntry::Resource(
                self.resource_object(model, &includes)?,
            ));
            self.collect_included(model, &includes, &mut included)?;
        }

        let total = provider.total_count();
        let (meta, links) = match provider.pagination() {
            Some(pagination) => (Some(pagination.meta(total)), Some(pagination.links(total))),
            None => (None, None),
        };

        tracing::debug!(
            items = data.len(),
            total,
            included = included.len(),
            paginated = meta.is_some(),
            "serialized collection"
        );

        Ok(Document::Data(DataDocument {
            data: PrimaryData::Collection(data),
            included: included.into_vec(),
            meta,
            links,
        }))
    }

    /// Resource object for one resource, with linkage for `includes`
    pub fn resource_object(
        &self,
        resource: &dyn Resource,
        includes: &IncludeSet,
    ) -> Result<ResourceObject> {
        let identifier = identity::resolve_identifier(resource, self.config.pluralize)?;
        let self_link = resource.self_link(&identifier.id);
        tracing::trace!(id = %identifier.id, type_name = %identifier.type_name, "serializing resource");

        let relationships = relationships::build(
            resource,
            &self_link,
            includes,
            self.config.pluralize,
        )?;

        let mut links = Links::new();
        links.insert("self".to_string(), Link::new(self_link));

        Ok(ResourceObject {
            id: identifier.id,
            type_name: identifier.type_name,
            attributes: attributes::extract(resource),
            relationships,
            links,
        })
    }

    /// Side-load every resource reachable through an honored include
    ///
    /// Included resources are serialized without includes of their own, and a
    /// `(type, id)` already present is skipped before it is serialized again.
    fn collect_included(
        &self,
        resource: &dyn Resource,
        includes: &IncludeSet,
        included: &mut IncludedSet,
    ) -> Result<()> {
        if includes.is_empty() {
            return Ok(());
        }

        for name in includes.honored_for(resource) {
            for related in resource.related(name).resources() {
                let key = identity::resolve_identifier(related, self.config.pluralize)?;
                if included.contains(&key) {
                    continue;
                }
                included.insert(self.resource_object(related, &IncludeSet::none())?);
            }
        }
        Ok(())
    }
}

/// First message per failing field, or `None` when the resource is valid
fn model_errors(resource: &dyn Resource) -> Option<ErrorsDocument> {
    let bag = resource.errors().filter(|bag| bag.has_errors())?;
    Some(errors_document(bag))
}

fn errors_document(bag: &ErrorBag) -> ErrorsDocument {
    ErrorsDocument {
        errors: bag
            .first_errors()
            .into_iter()
            .map(|(field, message)| ErrorObject::for_attribute(field, message))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::JsonApiError;
    use crate::core::field::FieldValue;
    use crate::core::record::Record;
    use serde_json::json;

    fn model() -> Record {
        Record::new("ResourceModel", 123, "http://example.com/resource")
            .with_fields(["field1", "field2"])
            .with_value("field1", "test")
            .with_value("field2", 2)
    }

    #[test]
    fn test_serialize_model_data() {
        let document = Serializer::new().serialize_model(&model(), None).unwrap();
        assert_eq!(
            document.to_value().unwrap(),
            json!({
                "data": {
                    "id": "123",
                    "type": "resource-models",
                    "attributes": {"field1": "test", "field2": 2},
                    "links": {"self": {"href": "http://example.com/resource/123"}}
                }
            })
        );
    }

    #[test]
    fn test_errors_take_precedence_over_invalid_identifier() {
        let mut record = model();
        record.set_id(FieldValue::Null);
        record.add_error("field1", "Test error");

        let document = Serializer::new().serialize_model(&record, None).unwrap();
        assert!(document.is_errors());
    }

    #[test]
    fn test_invalid_identifier_is_fatal() {
        let mut record = model();
        record.set_id(FieldValue::List(Vec::new()));
        assert!(matches!(
            Serializer::new().serialize_model(&record, None),
            Err(JsonApiError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_dispatch_by_subject() {
        let serializer = Serializer::new();
        let record = model();
        let provider = crate::core::provider::ArrayDataProvider::new(vec![model()], None);

        let single = serializer.serialize(Subject::Resource(&record), None).unwrap();
        let many = serializer
            .serialize(Subject::Collection(&provider), None)
            .unwrap();

        assert!(single.to_value().unwrap()["data"].is_object());
        assert!(many.to_value().unwrap()["data"].is_array());
    }

    #[test]
    fn test_pluralize_toggle() {
        let document = Serializer::new()
            .pluralize(false)
            .serialize_model(&model(), None)
            .unwrap();
        assert_eq!(document.to_value().unwrap()["data"]["type"], "resource-model");
    }
}
