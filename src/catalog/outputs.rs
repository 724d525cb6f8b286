//! Output types for catalog tools
//!
//! These types are used as the return values from catalog tool methods.
//! They are serialized to JSON strings for the MCP protocol, and can be
//! deserialized in tests for type-safe validation.

use serde::{Deserialize, Serialize};

use crate::catalog::types::{CategoryCount, SearchableItem};

/// Pagination information
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaginationInfo {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

/// Output from get_component operation
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GetComponentOutput {
    pub component: SearchableItem,
}

impl GetComponentOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from list_components operation
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListComponentsOutput {
    pub components: Vec<SearchableItem>,
    pub pagination: PaginationInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ListComponentsOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from list_categories operation
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListCategoriesOutput {
    pub categories: Vec<CategoryCount>,
    pub total_components: usize,
}

impl ListCategoriesOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from reload_catalog operation
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ReloadCatalogOutput {
    pub source: String,
    pub previous_count: usize,
    pub item_count: usize,
}

impl ReloadCatalogOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Error output for catalog tools
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogErrorOutput {
    pub error: String,
}

impl CatalogErrorOutput {
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
