//! Output types for search tools
//!
//! These types are used as the return values from search tool methods.
//! They are serialized to JSON strings for the MCP protocol, and can be
//! deserialized in tests for type-safe validation.

use serde::{Deserialize, Serialize};

use crate::search::ScoredResult;

/// Individual search result item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Relevance score
    pub score: f64,
    /// Component name
    pub name: String,
    /// Component category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Alternate names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl From<ScoredResult<'_>> for SearchResult {
    fn from(result: ScoredResult<'_>) -> Self {
        Self {
            score: result.score,
            name: result.item.name.clone(),
            category: result.item.category.clone(),
            description: result.item.description.clone(),
            aliases: result.item.aliases.clone().unwrap_or_default(),
        }
    }
}

/// Output from search_components operation
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchComponentsOutput {
    pub results: Vec<SearchResult>,
    pub query: String,
    pub total_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SearchComponentsOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }

    /// Check if there are any results
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

/// Output from suggest_component_names operation
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SuggestNamesOutput {
    pub suggestions: Vec<String>,
    pub partial_query: String,
}

impl SuggestNamesOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Error output for search tools
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchErrorOutput {
    pub error: String,
}

impl SearchErrorOutput {
    /// Create a new error output
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize error"}"#.to_string())
    }
}
