//! Type definitions for catalog records
//!
//! A catalog is a flat list of [`SearchableItem`]s. Only `name`, `aliases`,
//! `category` and `description` take part in search; every other field in a
//! record is kept in `extra` and handed back to clients untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;

/// A single component record that can be searched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchableItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Any further fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchableItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: None,
            category: None,
            description: None,
            extra: Map::new(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = Some(aliases.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this item belongs to `category`, ignoring case
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == category.to_lowercase())
    }

    /// Whether `name` equals this item's name or one of its aliases, ignoring case
    pub fn is_named(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.name.to_lowercase() == name
            || self
                .aliases
                .iter()
                .flatten()
                .any(|alias| alias.to_lowercase() == name)
    }
}

/// Where a catalog was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog compiled into the binary
    Bundled,
    /// A JSON file on disk
    File(PathBuf),
    /// Items handed over directly by the caller
    InMemory,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => write!(f, "bundled"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::InMemory => write!(f, "memory"),
        }
    }
}

/// A category and how many items carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// On-disk catalog layout
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CatalogFile {
    pub items: Vec<SearchableItem>,
}
