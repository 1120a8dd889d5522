//! Validation error collection carried by resources

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered collection of validation messages keyed by field name
///
/// Fields keep the order in which they first received an error, and each
/// field keeps its messages in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorBag {
    errors: IndexMap<String, Vec<String>>,
}

impl ErrorBag {
    /// Create an empty error bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Whether any field has at least one message
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|messages| !messages.is_empty())
    }

    /// All messages recorded for a field
    pub fn get(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// The first message of every field with errors, in first-seen field order
    pub fn first_errors(&self) -> Vec<(&str, &str)> {
        self.errors
            .iter()
            .filter_map(|(field, messages)| {
                messages
                    .first()
                    .map(|message| (field.as_str(), message.as_str()))
            })
            .collect()
    }

    /// Remove every recorded message
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bag_has_no_errors() {
        let bag = ErrorBag::new();
        assert!(!bag.has_errors());
        assert!(bag.first_errors().is_empty());
        assert!(bag.get("title").is_empty());
    }

    #[test]
    fn test_first_errors_keeps_field_order_and_first_message() {
        let mut bag = ErrorBag::new();
        bag.add("field2", "Multiple error 1");
        bag.add("field1", "Test error");
        bag.add("field2", "Multiple error 2");

        assert!(bag.has_errors());
        assert_eq!(
            bag.first_errors(),
            vec![("field2", "Multiple error 1"), ("field1", "Test error")]
        );
        assert_eq!(bag.get("field2").len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut bag = ErrorBag::new();
        bag.add("name", "required");
        bag.clear();
        assert!(!bag.has_errors());
    }
}
