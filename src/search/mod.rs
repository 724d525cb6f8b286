//! # Search Module
//!
//! Ranks catalog components against free-text queries.
//!
//! Scoring is tiered: exact name matches beat prefix matches, which beat
//! substring matches, which beat partial matches on camelCase-aware tokens.
//! Aliases count as alternate names and descriptions count at half weight.
//!
//! ## Key Components
//!
//! - [`fuzzy`] - Tokenization, scoring and ranking
//! - [`tools`] - MCP tool implementations for search operations
//! - [`outputs`] - JSON output types returned by the tools
//! - [`config`] - Limits for search requests

pub mod config;
pub mod fuzzy;
pub mod outputs;
pub mod tools;

pub use fuzzy::{
    ScoredResult, SearchOptions, rank, score_item, score_match, score_names, search,
    split_camel_case,
};
pub use tools::SearchTools;
