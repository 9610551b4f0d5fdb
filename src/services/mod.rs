//! Service layer for the proxy.
//!
//! This module contains the business logic for:
//! - Upstream page fetching (`Fetcher`, `HttpFetcher`)
//! - Field extraction from listing and detail markup (`extractor`)
//! - Endpoint dispatch (`MovieCatalog`)

pub mod catalog;
pub mod extractor;
mod fetcher;

pub use catalog::MovieCatalog;
pub use extractor::FieldPolicy;
pub use fetcher::{Fetcher, HttpFetcher, UpstreamRequest};
