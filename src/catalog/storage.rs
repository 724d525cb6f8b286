use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::types::{CatalogFile, CatalogSource, CategoryCount, SearchableItem};

/// Catalog compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../catalog/components.json");

/// Immutable set of component records served by the lookup tools
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<SearchableItem>,
    source: CatalogSource,
}

impl Catalog {
    /// Build a catalog from items already in memory
    pub fn from_items(items: Vec<SearchableItem>) -> Result<Self> {
        validate_items(&items)?;
        Ok(Self {
            items,
            source: CatalogSource::InMemory,
        })
    }

    /// Parse the catalog that ships with the binary
    pub fn bundled() -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(BUNDLED_CATALOG).context("Failed to parse bundled catalog")?;
        validate_items(&file.items).context("Bundled catalog is invalid")?;

        Ok(Self {
            items: file.items,
            source: CatalogSource::Bundled,
        })
    }

    /// Read a catalog from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
        validate_items(&file.items)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))?;

        Ok(Self {
            items: file.items,
            source: CatalogSource::File(path.to_path_buf()),
        })
    }

    /// Load from an explicit path, else the user catalog if present, else the bundled one
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        Self::load_with_home(path, dirs::home_dir())
    }

    /// Same as [`Catalog::load`], looking for the user catalog under `home`
    pub fn load_with_home(path: Option<PathBuf>, home: Option<PathBuf>) -> Result<Self> {
        let catalog = match path.or_else(|| home.as_deref().and_then(user_catalog_path)) {
            Some(path) => Self::from_path(&path)?,
            None => Self::bundled()?,
        };

        tracing::info!(
            "Loaded {} catalog item(s) from {}",
            catalog.len(),
            catalog.source
        );
        Ok(catalog)
    }

    /// Re-read the catalog from the source it was loaded from
    pub fn reload(&self) -> Result<Self> {
        match &self.source {
            CatalogSource::Bundled => Self::bundled(),
            CatalogSource::File(path) => Self::from_path(path),
            CatalogSource::InMemory => Ok(self.clone()),
        }
    }

    pub fn items(&self) -> &[SearchableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Look up an item by exact name, falling back to its aliases. Case is ignored.
    pub fn find(&self, name: &str) -> Option<&SearchableItem> {
        let lower = name.to_lowercase();
        self.items
            .iter()
            .find(|item| item.name.to_lowercase() == lower)
            .or_else(|| self.items.iter().find(|item| item.is_named(name)))
    }

    /// Distinct categories with their item counts, sorted by name.
    ///
    /// Categories differing only in case are merged under the first spelling seen.
    pub fn categories(&self) -> Vec<CategoryCount> {
        let mut counts: HashMap<String, CategoryCount> = HashMap::new();

        for category in self.items.iter().filter_map(|item| item.category.as_deref()) {
            counts
                .entry(category.to_lowercase())
                .or_insert_with(|| CategoryCount {
                    name: category.to_string(),
                    count: 0,
                })
                .count += 1;
        }

        let mut categories: Vec<CategoryCount> = counts.into_values().collect();
        categories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        categories
    }

    /// Items in catalog order, optionally restricted to one category
    pub fn list(&self, category: Option<&str>) -> Vec<&SearchableItem> {
        self.items
            .iter()
            .filter(|item| category.is_none_or(|c| item.in_category(c)))
            .collect()
    }
}

/// `<home>/.luba-mcp/components.json`, if it exists
fn user_catalog_path(home: &Path) -> Option<PathBuf> {
    let path = home.join(".luba-mcp").join("components.json");
    path.is_file().then_some(path)
}

/// Every item needs a non-empty name, unique regardless of case
fn validate_items(items: &[SearchableItem]) -> Result<()> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            bail!("Catalog item at index {} has an empty name", index);
        }
        if let Some(first) = seen.insert(item.name.to_lowercase(), index) {
            bail!(
                "Duplicate catalog item name '{}' at index {} (first defined at index {})",
                item.name,
                index,
                first
            );
        }
    }

    Ok(())
}
