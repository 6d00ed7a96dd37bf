//! Remote item catalog.
//!
//! The screen only ever asks the catalog for one thing: the full item list.
//! `CatalogProvider` is the seam; `HttpCatalog` is the real implementation.

pub mod http;
pub mod provider;
pub mod types;

pub use http::HttpCatalog;
pub use provider::{CatalogError, CatalogProvider};
pub use types::Item;
