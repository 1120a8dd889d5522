//! Relationship entries for declared extra fields

use indexmap::IndexMap;

use crate::core::error::Result;
use crate::core::resource::{Relation, Resource};
use crate::document::{Link, Links, Relationship, RelationshipData};
use crate::serializer::identity::resolve_identifier;
use crate::serializer::include::IncludeSet;

/// Build `relationships` for a resource whose self link is `base`
///
/// Returns `None` when the resource declares no extra fields. Relationships
/// listed in `includes` also carry linkage `data`; an empty to-one relation
/// carries none.
pub fn build(
    resource: &dyn Resource,
    base: &str,
    includes: &IncludeSet,
    pluralize: bool,
) -> Result<Option<IndexMap<String, Relationship>>> {
    let extra_fields = resource.extra_fields();
    if extra_fields.is_empty() {
        return Ok(None);
    }

    let mut relationships = IndexMap::with_capacity(extra_fields.len());
    for name in extra_fields {
        let data = if includes.contains(name) {
            linkage(resource.related(name), pluralize)?
        } else {
            None
        };
        relationships.insert(
            name.to_string(),
            Relationship {
                links: links(base, name),
                data,
            },
        );
    }
    Ok(Some(relationships))
}

fn links(base: &str, name: &str) -> Links {
    let mut links = Links::new();
    links.insert(
        "self".to_string(),
        Link::new(format!("{}/relationships/{}", base, name)),
    );
    links.insert(
        "related".to_string(),
        Link::new(format!("{}/{}", base, name)),
    );
    links
}

fn linkage(relation: Relation<'_>, pluralize: bool) -> Result<Option<RelationshipData>> {
    Ok(match relation {
        Relation::Empty => None,
        Relation::One(related) => Some(RelationshipData::One(resolve_identifier(
            related, pluralize,
        )?)),
        Relation::Many(related) => Some(RelationshipData::Many(
            related
                .into_iter()
                .map(|resource| resolve_identifier(resource, pluralize))
                .collect::<Result<Vec<_>>>()?,
        )),
    })
}
