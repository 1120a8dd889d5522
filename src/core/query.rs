//! Query parameters and pagination utilities

use serde::Deserialize;

use crate::document::{Link, Links, PageMeta};

/// Page size used when none is requested; links omit `per-page` when it matches
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page size a client may request through the query string
pub const MAX_PAGE_SIZE: usize = 100;

/// JSON:API query parameters understood by the serializer
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn list_articles(
///     Query(params): Query<JsonApiQuery>,
/// ) -> Result<JsonApi, JsonApiError> {
///     let provider = ArrayDataProvider::new(load(), Some(params.pagination("/articles")));
///     serializer.serialize_collection(&provider, params.include()).map(JsonApi)
/// }
///
/// // Usage:
/// GET /articles?include=author
/// GET /articles?page=2&per-page=10
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonApiQuery {
    /// Comma-separated relationship names to side-load
    pub include: Option<String>,

    /// Page number (starts at 1)
    pub page: Option<usize>,

    /// Number of items per page
    #[serde(rename = "per-page")]
    pub per_page: Option<usize>,
}

impl JsonApiQuery {
    /// The raw include directive, if any
    pub fn include(&self) -> Option<&str> {
        self.include.as_deref()
    }

    /// Build pagination for `route` from the requested page and page size
    ///
    /// The page is converted to a 0-based index and the page size is clamped
    /// to `1..=MAX_PAGE_SIZE`.
    pub fn pagination(&self, route: impl Into<String>) -> Pagination {
        Pagination::new(route)
            .with_page(self.page.unwrap_or(1).saturating_sub(1))
            .with_page_size(
                self.per_page
                    .unwrap_or(DEFAULT_PAGE_SIZE)
                    .clamp(1, MAX_PAGE_SIZE),
            )
    }
}

/// Pagination parameters of a collection
///
/// `page` is 0-based. A `page_size` of zero disables slicing: every item lands
/// on a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Requested page (0-based)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Page size that links leave implicit
    pub default_page_size: usize,

    /// Base route that page links are appended to
    pub route: String,
}

impl Pagination {
    /// First page of `route` with the default page size
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            default_page_size: DEFAULT_PAGE_SIZE,
            route: route.into(),
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_default_page_size(mut self, default_page_size: usize) -> Self {
        self.default_page_size = default_page_size;
        self
    }

    /// Number of pages needed for `total` items
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            usize::from(total > 0)
        } else {
            total.div_ceil(self.page_size)
        }
    }

    /// The requested page, clamped to the last existing page
    pub fn current_page(&self, total: usize) -> usize {
        self.page.min(self.page_count(total).saturating_sub(1))
    }

    /// Index of the first item of the current page
    pub fn offset(&self, total: usize) -> usize {
        self.current_page(total) * self.page_size
    }

    /// Maximum number of items on a page, `None` when unbounded
    pub fn limit(&self) -> Option<usize> {
        (self.page_size > 0).then_some(self.page_size)
    }

    /// URL of a page (0-based)
    ///
    /// `per-page` is only added when the page size differs from the default.
    pub fn create_url(&self, page: usize) -> String {
        let separator = if self.route.contains('?') { '&' } else { '?' };
        let mut url = format!("{}{}page={}", self.route, separator, page + 1);
        if self.page_size != self.default_page_size {
            url.push_str(&format!("&per-page={}", self.page_size));
        }
        url
    }

    /// `meta` member for a collection of `total` items
    pub fn meta(&self, total: usize) -> PageMeta {
        PageMeta {
            total_count: total,
            page_count: self.page_count(total),
            current_page: self.current_page(total) + 1,
            per_page: self.page_size,
        }
    }

    /// Navigation links: `self` always, `first`/`prev` past the first page,
    /// `next`/`last` before the last page
    pub fn links(&self, total: usize) -> Links {
        let current = self.current_page(total);
        let page_count = self.page_count(total);

        let mut links = Links::new();
        links.insert("self".to_string(), Link::new(self.create_url(current)));
        if current > 0 {
            links.insert("first".to_string(), Link::new(self.create_url(0)));
            links.insert("prev".to_string(), Link::new(self.create_url(current - 1)));
        }
        if current + 1 < page_count {
            links.insert("next".to_string(), Link::new(self.create_url(current + 1)));
            links.insert(
                "last".to_string(),
                Link::new(self.create_url(page_count - 1)),
            );
        }
        links
    }
}
