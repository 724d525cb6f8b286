//! # Search Configuration Module
//!
//! Provides limits for the search tools.
//!
//! These constants bound the size of requests and responses exchanged with
//! MCP clients.

/// Default limit for search results
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Maximum allowed limit for search results
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Default limit for name suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Maximum allowed limit for name suggestions
pub const MAX_SUGGESTION_LIMIT: usize = 50;

/// Maximum allowed query length in characters
pub const MAX_QUERY_LENGTH: usize = 1000;
