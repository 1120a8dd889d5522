//! Attribute extraction

use indexmap::IndexMap;

use crate::core::field::FieldValue;
use crate::core::resource::Resource;

/// Declared fields mapped to their current values, in declaration order
///
/// Null values are kept; nothing outside `fields()` is ever read.
pub fn extract(resource: &dyn Resource) -> IndexMap<String, FieldValue> {
    resource
        .fields()
        .into_iter()
        .map(|name| (name.to_string(), resource.attribute(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Record;

    #[test]
    fn test_only_declared_fields_in_order() {
        let record = Record::new("ResourceModel", 1, "http://example.com/resource")
            .with_fields(["field2", "field1"])
            .with_value("field1", "test")
            .with_value("field2", 2)
            .with_value("secret", "hidden");

        let attributes = extract(&record);
        let names: Vec<&str> = attributes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["field2", "field1"]);
        assert_eq!(attributes["field1"], FieldValue::from("test"));
    }

    #[test]
    fn test_nulls_pass_through() {
        let record = Record::new("ResourceModel", 1, "http://example.com/resource")
            .with_fields(["missing"]);
        assert!(extract(&record)["missing"].is_null());
    }

    #[test]
    fn test_no_fields() {
        let record = Record::new("ResourceModel", 1, "http://example.com/resource");
        assert!(extract(&record).is_empty());
    }
}
