//! Include directive parsing and the compound document accumulator

use indexmap::IndexMap;

use crate::core::resource::Resource;
use crate::document::{ResourceIdentifier, ResourceObject};

/// Relationship names requested through `include`
///
/// Parsed from a comma-separated directive. Tokens are trimmed, empty tokens
/// and repeats are dropped, and request order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeSet {
    names: Vec<String>,
}

impl IncludeSet {
    /// Parse an include directive; `None` means nothing is included
    ///
    /// ```
    /// use jsonapi::serializer::include::IncludeSet;
    ///
    /// let includes = IncludeSet::parse(Some("author, comments,,author"));
    /// assert!(includes.contains("author"));
    /// assert!(includes.contains("comments"));
    /// assert_eq!(includes.len(), 2);
    /// ```
    pub fn parse(directive: Option<&str>) -> Self {
        let mut names: Vec<String> = Vec::new();
        for token in directive.unwrap_or_default().split(',') {
            let token = token.trim();
            if !token.is_empty() && !names.iter().any(|name| name == token) {
                names.push(token.to_string());
            }
        }
        Self { names }
    }

    /// An empty set
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Requested names the resource declares as relationships
    ///
    /// Everything else (plain attributes, dotted paths, unknown names) is
    /// dropped without error.
    pub fn honored_for(&self, resource: &dyn Resource) -> Vec<&str> {
        let extra_fields = resource.extra_fields();
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| {
                let declared = extra_fields.contains(name);
                if !declared {
                    tracing::debug!(
                        include = %name,
                        kind = %resource.kind(),
                        "ignoring include that is not a declared relationship"
                    );
                }
                declared
            })
            .collect()
    }
}

/// Side-loaded resources keyed by `(type, id)`, in first-discovery order
#[derive(Debug, Clone, Default)]
pub struct IncludedSet {
    entries: IndexMap<ResourceIdentifier, ResourceObject>,
}

impl IncludedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &ResourceIdentifier) -> bool {
        self.entries.contains_key(key)
    }

    /// Add a resource unless one with the same `(type, id)` is present
    ///
    /// Returns whether the resource was added.
    pub fn insert(&mut self, object: ResourceObject) -> bool {
        let key = object.identifier();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, object);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The included resources, in insertion order
    pub fn into_vec(self) -> Vec<ResourceObject> {
        self.entries.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::record::Record;
    use crate::document::Links;

    fn object(type_name: &str, id: &str, title: &str) -> ResourceObject {
        let mut attributes = IndexMap::new();
        attributes.insert("title".to_string(), FieldValue::from(title));
        ResourceObject {
            id: id.to_string(),
            type_name: type_name.to_string(),
            attributes,
            relationships: None,
            links: Links::new(),
        }
    }

    #[test]
    fn test_parse_absent_directive() {
        assert!(IncludeSet::parse(None).is_empty());
        assert!(IncludeSet::parse(Some("")).is_empty());
        assert!(IncludeSet::parse(Some(" , ,")).is_empty());
    }

    #[test]
    fn test_honored_filters_undeclared_names() {
        let record = Record::new("ResourceModel", 1, "http://example.com/resource")
            .with_fields(["field1"])
            .with_extra_fields(["extraField1"]);

        let includes = IncludeSet::parse(Some("field1,extraField2,extraField1,extraField1.nested"));
        assert_eq!(includes.honored_for(&record), vec!["extraField1"]);
    }

    #[test]
    fn test_included_set_deduplicates_by_type_and_id() {
        let mut included = IncludedSet::new();
        assert!(included.insert(object("users", "1", "first")));
        assert!(!included.insert(object("users", "1", "second")));
        assert!(included.insert(object("posts", "1", "post")));
        assert!(included.insert(object("users", "2", "other")));

        let objects = included.into_vec();
        assert_eq!(objects.len(), 3);
        assert_eq!(objects[0].attributes["title"], FieldValue::from("first"));
        assert_eq!(objects[1].type_name, "posts");
    }
}
