//! Catalog layer: the immutable store, the filter engine and pagination.
//!
//! # Modules
//!
//! - [`store`]: Validated, indexed catalog with id lookups
//! - [`source`]: Catalog loading from files or the embedded demo data
//! - [`filter`]: Pure filter over books by title, author and genre
//! - [`pagination`]: Cumulative "show more" paging over filter results

pub mod filter;
pub mod pagination;
pub mod source;
pub mod store;

pub use filter::{FilterCriteria, ANY};
pub use pagination::Pagination;
pub use source::{load_catalog, CatalogData, CatalogSource, EmbeddedSource, FileSource};
pub use store::{Catalog, UNKNOWN_AUTHOR, UNKNOWN_GENRE};
