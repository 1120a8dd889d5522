//! A dynamic resource whose shape is declared per instance

use indexmap::IndexMap;

use crate::core::field::FieldValue;
use crate::core::resource::{AsRelation, Relation, Resource};
use crate::core::validation::ErrorBag;

/// Related value stored on a [`Record`]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordRelation {
    One(Box<Record>),
    Many(Vec<Record>),
}

/// A resource built at runtime
///
/// The declared attribute and relationship lists are fixed at construction
/// time; values can be set freely afterwards. Values that are stored but not
/// declared are never serialized.
///
/// # Example
///
/// ```
/// use jsonapi::core::record::Record;
///
/// let post = Record::new("BlogPost", 7, "http://example.com/posts")
///     .with_fields(["title"])
///     .with_value("title", "Hello")
///     .with_value("draft", true);
///
/// assert_eq!(post.values().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    kind: String,
    id: FieldValue,
    base_url: String,
    fields: Vec<String>,
    extra_fields: Vec<String>,
    values: IndexMap<String, FieldValue>,
    relations: IndexMap<String, RecordRelation>,
    errors: ErrorBag,
}

impl Record {
    /// Create a record of the given kind
    ///
    /// `base_url` is the collection URL; the self link is `<base_url>/<id>`.
    pub fn new(
        kind: impl Into<String>,
        id: impl Into<FieldValue>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            base_url: base_url.into(),
            fields: Vec::new(),
            extra_fields: Vec::new(),
            values: IndexMap::new(),
            relations: IndexMap::new(),
            errors: ErrorBag::new(),
        }
    }

    /// Declare the attribute names exposed under `attributes`
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Declare the relationship names exposed under `relationships`
    pub fn with_extra_fields<I, S>(mut self, extra_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_fields = extra_fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_related(mut self, name: impl Into<String>, related: Record) -> Self {
        self.relations
            .insert(name.into(), RecordRelation::One(Box::new(related)));
        self
    }

    pub fn with_related_many(mut self, name: impl Into<String>, related: Vec<Record>) -> Self {
        self.relations
            .insert(name.into(), RecordRelation::Many(related));
        self
    }

    /// Set a value, declared or not
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn set_id(&mut self, id: impl Into<FieldValue>) {
        self.id = id.into();
    }

    /// Record a validation error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    pub fn values(&self) -> &IndexMap<String, FieldValue> {
        &self.values
    }
}

impl Resource for Record {
    fn identifier(&self) -> FieldValue {
        self.id.clone()
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn fields(&self) -> Vec<&str> {
        self.fields.iter().map(String::as_str).collect()
    }

    fn extra_fields(&self) -> Vec<&str> {
        self.extra_fields.iter().map(String::as_str).collect()
    }

    fn attribute(&self, name: &str) -> FieldValue {
        self.values.get(name).cloned().unwrap_or(FieldValue::Null)
    }

    fn related(&self, name: &str) -> Relation<'_> {
        match self.relations.get(name) {
            Some(RecordRelation::One(record)) => Relation::One(record.as_ref()),
            Some(RecordRelation::Many(records)) => {
                Relation::Many(records.iter().map(|r| r as &dyn Resource).collect())
            }
            None => Relation::Empty,
        }
    }

    fn errors(&self) -> Option<&ErrorBag> {
        Some(&self.errors)
    }

    fn self_link(&self, id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }
}

impl AsRelation for Record {
    fn as_relation(&self) -> Relation<'_> {
        Relation::One(self)
    }
}
