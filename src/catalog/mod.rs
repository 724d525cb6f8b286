//! # Catalog Module
//!
//! Holds the LubaUI component records the server searches and serves.
//!
//! ## Key Components
//!
//! - [`storage`] - Loading, validating and querying the catalog
//! - [`types`] - Record and source types
//! - [`tools`] - MCP tool implementations for catalog lookups
//! - [`outputs`] - Output types for catalog operations

pub mod outputs;
pub mod storage;
pub mod tools;
pub mod types;

pub use storage::Catalog;
pub use tools::CatalogTools;
pub use types::{CatalogSource, CategoryCount, SearchableItem};
