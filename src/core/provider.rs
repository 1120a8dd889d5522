//! Collection providers feeding the collection serializer

use crate::core::query::Pagination;
use crate::core::resource::Resource;

/// A (possibly paginated) collection of resources
pub trait DataProvider {
    /// Resources on the current page
    fn models(&self) -> Vec<&dyn Resource>;

    /// Number of resources across all pages
    fn total_count(&self) -> usize;

    /// Pagination state, `None` when pagination is disabled
    fn pagination(&self) -> Option<&Pagination>;
}

/// In-memory provider over a vector of resources
///
/// Holds every resource and slices out the current page on demand.
#[derive(Debug, Clone)]
pub struct ArrayDataProvider<R> {
    models: Vec<R>,
    pagination: Option<Pagination>,
}

impl<R: Resource> ArrayDataProvider<R> {
    /// Create a provider; `None` disables pagination
    pub fn new(models: Vec<R>, pagination: Option<Pagination>) -> Self {
        Self { models, pagination }
    }

    /// Replace the pagination state
    pub fn with_pagination(mut self, pagination: Option<Pagination>) -> Self {
        self.pagination = pagination;
        self
    }
}

impl<R: Resource> DataProvider for ArrayDataProvider<R> {
    fn models(&self) -> Vec<&dyn Resource> {
        let total = self.models.len();
        let page: &[R] = match &self.pagination {
            Some(pagination) => {
                let offset = pagination.offset(total).min(total);
                let end = pagination
                    .limit()
                    .map_or(total, |limit| offset.saturating_add(limit).min(total));
                &self.models[offset..end]
            }
            None => &self.models,
        };
        page.iter().map(|r| r as &dyn Resource).collect()
    }

    fn total_count(&self) -> usize {
        self.models.len()
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::record::Record;

    fn records(count: i64) -> Vec<Record> {
        (1..=count)
            .map(|id| Record::new("Item", id, "http://example.com/items"))
            .collect()
    }

    fn ids(provider: &impl DataProvider) -> Vec<FieldValue> {
        provider
            .models()
            .iter()
            .map(|model| model.identifier())
            .collect()
    }

    #[test]
    fn test_unpaginated_returns_everything() {
        let provider = ArrayDataProvider::new(records(3), None);
        assert_eq!(provider.models().len(), 3);
        assert_eq!(provider.total_count(), 3);
        assert!(provider.pagination().is_none());
    }

    #[test]
    fn test_slices_current_page() {
        let pagination = Pagination::new("/").with_page_size(2).with_page(1);
        let provider = ArrayDataProvider::new(records(5), Some(pagination));
        assert_eq!(ids(&provider), vec![FieldValue::from(3), FieldValue::from(4)]);
    }

    #[test]
    fn test_last_page_is_partial() {
        let pagination = Pagination::new("/").with_page_size(2).with_page(2);
        let provider = ArrayDataProvider::new(records(5), Some(pagination));
        assert_eq!(ids(&provider), vec![FieldValue::from(5)]);
    }

    #[test]
    fn test_zero_page_size_returns_everything() {
        let pagination = Pagination::new("/").with_page_size(0).with_page(3);
        let provider = ArrayDataProvider::new(records(4), Some(pagination));
        assert_eq!(provider.models().len(), 4);
    }

    #[test]
    fn test_out_of_range_page_shows_last_page() {
        let pagination = Pagination::new("/").with_page_size(2).with_page(40);
        let provider = ArrayDataProvider::new(records(3), Some(pagination));
        assert_eq!(ids(&provider), vec![FieldValue::from(3)]);
    }

    #[test]
    fn test_empty_collection() {
        let provider = ArrayDataProvider::new(records(0), Some(Pagination::new("/")));
        assert!(provider.models().is_empty());
    }
}
