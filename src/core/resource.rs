//! The resource contract consumed by the serializer

use crate::core::field::FieldValue;
use crate::core::validation::ErrorBag;

/// A domain object that can be rendered as a JSON:API resource object.
///
/// Implementors declare their exposed attributes (`fields`) and their
/// expandable relationships (`extra_fields`) explicitly; the serializer never
/// inspects anything else on the object.
///
/// Most implementations come from [`impl_resource!`](crate::impl_resource) or
/// from the dynamic [`Record`](crate::core::record::Record).
pub trait Resource {
    /// The raw identifier value.
    ///
    /// Must be a non-empty scalar to be serializable; anything else makes the
    /// serializer fail with `InvalidIdentifier`.
    fn identifier(&self) -> FieldValue;

    /// The concrete kind name, e.g. `"ResourceModel"`.
    ///
    /// The JSON:API `type` member is derived from it.
    fn kind(&self) -> &str;

    /// Attribute names, in output order
    fn fields(&self) -> Vec<&str>;

    /// Relationship names, in output order
    fn extra_fields(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Current value of a declared attribute
    fn attribute(&self, name: &str) -> FieldValue;

    /// Resource(s) held by a declared relationship
    fn related(&self, _name: &str) -> Relation<'_> {
        Relation::Empty
    }

    /// Validation errors collected on this resource
    fn errors(&self) -> Option<&ErrorBag> {
        None
    }

    /// Absolute URL of this resource, e.g. `http://example.com/resource/123`
    ///
    /// Relationship links are built below it.
    fn self_link(&self, id: &str) -> String;
}

/// What a relationship currently points at
pub enum Relation<'a> {
    /// No related resource
    Empty,
    /// To-one relationship
    One(&'a dyn Resource),
    /// To-many relationship
    Many(Vec<&'a dyn Resource>),
}

impl<'a> Relation<'a> {
    /// The related resources, flattened
    pub fn resources(&self) -> Vec<&'a dyn Resource> {
        match self {
            Relation::Empty => Vec::new(),
            Relation::One(resource) => vec![*resource],
            Relation::Many(resources) => resources.clone(),
        }
    }
}

impl std::fmt::Debug for Relation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Empty => write!(f, "Empty"),
            Relation::One(resource) => write!(f, "One({})", resource.kind()),
            Relation::Many(resources) => write!(f, "Many({})", resources.len()),
        }
    }
}

/// Conversion of a struct field into a [`Relation`]
///
/// Used by [`impl_resource!`](crate::impl_resource) for relationship fields.
/// The macro also implements it for the resource type itself, so a field can
/// hold another resource directly, boxed, optional or in a `Vec`.
pub trait AsRelation {
    fn as_relation(&self) -> Relation<'_>;
}

impl<T: Resource + ?Sized> AsRelation for Box<T> {
    fn as_relation(&self) -> Relation<'_> {
        Relation::One(self)
    }
}

impl<T: Resource> AsRelation for Option<T> {
    fn as_relation(&self) -> Relation<'_> {
        match self {
            Some(resource) => Relation::One(resource),
            None => Relation::Empty,
        }
    }
}

impl<T: Resource> AsRelation for Vec<T> {
    fn as_relation(&self) -> Relation<'_> {
        Relation::Many(self.iter().map(|r| r as &dyn Resource).collect())
    }
}

impl<T: Resource + ?Sized> Resource for Box<T> {
    fn identifier(&self) -> FieldValue {
        (**self).identifier()
    }

    fn kind(&self) -> &str {
        (**self).kind()
    }

    fn fields(&self) -> Vec<&str> {
        (**self).fields()
    }

    fn extra_fields(&self) -> Vec<&str> {
        (**self).extra_fields()
    }

    fn attribute(&self, name: &str) -> FieldValue {
        (**self).attribute(name)
    }

    fn related(&self, name: &str) -> Relation<'_> {
        (**self).related(name)
    }

    fn errors(&self) -> Option<&ErrorBag> {
        (**self).errors()
    }

    fn self_link(&self, id: &str) -> String {
        (**self).self_link(id)
    }
}
