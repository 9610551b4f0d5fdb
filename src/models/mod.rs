// src/models/mod.rs

//! Domain models for the proxy.

mod category;
mod config;
mod movie;
mod selectors;

// Re-export all public types
pub use category::{Category, CategoryTable};
pub use config::{CategoryStrategy, Config, LoggingConfig, ServerConfig, UpstreamConfig};
pub use movie::{Field, MovieRecord};
pub use selectors::{FieldRule, FieldSource, ListingProfile, SelectorConfig};
