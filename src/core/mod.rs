//! Core module containing the resource contract and the value types it uses

pub mod error;
pub mod field;
pub mod pluralize;
pub mod provider;
pub mod query;
pub mod record;
pub mod resource;
pub mod validation;

pub use error::{JsonApiError, Result};
pub use field::FieldValue;
pub use pluralize::Pluralizer;
pub use provider::{ArrayDataProvider, DataProvider};
pub use query::{DEFAULT_PAGE_SIZE, JsonApiQuery, MAX_PAGE_SIZE, Pagination};
pub use record::{Record, RecordRelation};
pub use resource::{AsRelation, Relation, Resource};
pub use validation::ErrorBag;
