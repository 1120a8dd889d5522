//! Macros for reducing boilerplate when declaring resources
//!
//! These macros generate the `Resource` implementation for a plain struct
//! from the list of fields it exposes.

/// Implement [`Resource`](crate::core::Resource) for a struct
///
/// - `kind`: concrete kind name the JSON:API type is derived from
/// - `id`: field holding the identifier
/// - `link`: collection URL, the self link is `<link>/<id>`
/// - `fields`: attribute fields, in output order
/// - `extra_fields` (optional): relationship fields, in output order. Each
///   must hold a resource, a `Box`, an `Option` or a `Vec` of resources.
/// - `errors` (optional): field holding an [`ErrorBag`](crate::core::ErrorBag)
///
/// Attribute fields are cloned into a [`FieldValue`](crate::core::FieldValue),
/// so their types must implement `Clone + Into<FieldValue>`.
///
/// # Example
/// ```
/// use jsonapi::prelude::*;
///
/// struct Author {
///     id: i64,
///     name: String,
/// }
///
/// struct Article {
///     id: i64,
///     title: String,
///     author: Option<Author>,
///     errors: ErrorBag,
/// }
///
/// impl_resource!(Author, kind: "Author", id: id, link: "http://example.com/authors", fields: [name]);
///
/// impl_resource!(
///     Article,
///     kind: "Article",
///     id: id,
///     link: "http://example.com/articles",
///     fields: [title],
///     extra_fields: [author],
///     errors: errors,
/// );
///
/// let article = Article {
///     id: 1,
///     title: "Hello".to_string(),
///     author: Some(Author { id: 2, name: "Ada".to_string() }),
///     errors: ErrorBag::new(),
/// };
///
/// assert_eq!(article.fields(), vec!["title"]);
/// assert_eq!(article.attribute("title"), FieldValue::from("Hello"));
/// assert!(matches!(article.related("author"), Relation::One(_)));
/// ```
#[macro_export]
macro_rules! impl_resource {
    (
        $type:ty,
        kind: $kind:expr,
        id: $id:ident,
        link: $link:expr,
        fields: [$($field:ident),* $(,)?]
        $(, extra_fields: [$($extra:ident),* $(,)?])?
        $(, errors: $errors:ident)?
        $(,)?
    ) => {
        impl $crate::core::Resource for $type {
            fn identifier(&self) -> $crate::core::FieldValue {
                $crate::core::FieldValue::from(::std::clone::Clone::clone(&self.$id))
            }

            fn kind(&self) -> &str {
                $kind
            }

            fn fields(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![$(stringify!($field)),*]
            }

            fn extra_fields(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![$($(stringify!($extra)),*)?]
            }

            fn attribute(&self, name: &str) -> $crate::core::FieldValue {
                match name {
                    $(stringify!($field) => $crate::core::FieldValue::from(
                        ::std::clone::Clone::clone(&self.$field),
                    ),)*
                    _ => $crate::core::FieldValue::Null,
                }
            }

            fn related(&self, name: &str) -> $crate::core::Relation<'_> {
                match name {
                    $($(stringify!($extra) => $crate::core::AsRelation::as_relation(&self.$extra),)*)?
                    _ => $crate::core::Relation::Empty,
                }
            }

            $(
                fn errors(&self) -> ::std::option::Option<&$crate::core::ErrorBag> {
                    ::std::option::Option::Some(&self.$errors)
                }
            )?

            fn self_link(&self, id: &str) -> ::std::string::String {
                ::std::format!("{}/{}", $link, id)
            }
        }

        impl $crate::core::AsRelation for $type {
            fn as_relation(&self) -> $crate::core::Relation<'_> {
                $crate::core::Relation::One(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{ErrorBag, FieldValue, Relation, Resource};

    #[derive(Clone)]
    struct Tag {
        id: String,
        label: String,
    }

    struct Post {
        id: i64,
        title: String,
        views: u32,
        subtitle: Option<String>,
        parent: Option<Box<Post>>,
        tags: Vec<Tag>,
        errors: ErrorBag,
    }

    impl_resource!(Tag, kind: "Tag", id: id, link: "http://example.com/tags", fields: [label]);

    impl_resource!(
        Post,
        kind: "BlogPost",
        id: id,
        link: "http://example.com/posts",
        fields: [title, views, subtitle],
        extra_fields: [parent, tags],
        errors: errors,
    );

    fn post() -> Post {
        Post {
            id: 10,
            title: "Hello".to_string(),
            views: 3,
            subtitle: None,
            parent: None,
            tags: vec![Tag {
                id: "rust".to_string(),
                label: "Rust".to_string(),
            }],
            errors: ErrorBag::new(),
        }
    }

    #[test]
    fn test_declared_lists() {
        let post = post();
        assert_eq!(post.kind(), "BlogPost");
        assert_eq!(post.fields(), vec!["title", "views", "subtitle"]);
        assert_eq!(post.extra_fields(), vec!["parent", "tags"]);
        assert_eq!(post.identifier(), FieldValue::Integer(10));
    }

    #[test]
    fn test_attribute_values() {
        let post = post();
        assert_eq!(post.attribute("title"), FieldValue::from("Hello"));
        assert_eq!(post.attribute("views"), FieldValue::Integer(3));
        assert!(post.attribute("subtitle").is_null());
        assert!(post.attribute("unknown").is_null());
    }

    #[test]
    fn test_relations() {
        let mut post = post();
        assert!(matches!(post.related("parent"), Relation::Empty));
        assert_eq!(post.related("tags").resources().len(), 1);

        post.parent = Some(Box::new(self::post()));
        assert!(matches!(post.related("parent"), Relation::One(_)));
        assert!(matches!(post.related("title"), Relation::Empty));
    }

    #[test]
    fn test_errors_and_links() {
        let mut post = post();
        post.errors.add("title", "too short");
        assert!(post.errors().is_some_and(ErrorBag::has_errors));
        assert_eq!(post.self_link("10"), "http://example.com/posts/10");

        let tag = Tag {
            id: "rust".to_string(),
            label: "Rust".to_string(),
        };
        assert!(tag.errors().is_none());
        assert!(tag.extra_fields().is_empty());
    }
}
