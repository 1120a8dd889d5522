//! Identifier and type resolution

use convert_case::{Case, Casing};

use crate::core::error::{JsonApiError, Result};
use crate::core::pluralize::Pluralizer;
use crate::core::resource::Resource;
use crate::document::ResourceIdentifier;

/// The resource identifier as a string
///
/// Fails with `InvalidIdentifier` unless the identifier is a non-empty scalar.
pub fn resolve_id(resource: &dyn Resource) -> Result<String> {
    let value = resource.identifier();
    value
        .to_identifier()
        .ok_or_else(|| JsonApiError::InvalidIdentifier {
            kind: resource.kind().to_string(),
            value: serde_json::to_string(&value).unwrap_or_else(|_| format!("{:?}", value)),
        })
}

/// JSON:API type name for a kind: dashed lower case, optionally pluralized
///
/// ```
/// use jsonapi::serializer::identity::type_name;
///
/// assert_eq!(type_name("ResourceModel", true), "resource-models");
/// assert_eq!(type_name("ResourceModel", false), "resource-model");
/// ```
pub fn type_name(kind: &str, pluralize: bool) -> String {
    let dashed = kind.to_case(Case::Kebab);
    if pluralize {
        Pluralizer::pluralize(&dashed)
    } else {
        dashed
    }
}

/// `{id, type}` linkage of a resource
pub fn resolve_identifier(resource: &dyn Resource, pluralize: bool) -> Result<ResourceIdentifier> {
    Ok(ResourceIdentifier {
        id: resolve_id(resource)?,
        type_name: type_name(resource.kind(), pluralize),
    })
}
