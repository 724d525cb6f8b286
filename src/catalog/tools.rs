use std::sync::Arc;
use tokio::sync::RwLock;

use rmcp::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::catalog::outputs::{
    CatalogErrorOutput, GetComponentOutput, ListCategoriesOutput, ListComponentsOutput,
    PaginationInfo, ReloadCatalogOutput,
};

/// Default page size for list_components
const DEFAULT_LIST_LIMIT: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetComponentParams {
    #[schemars(description = "Exact component name or alias (case-insensitive), e.g. 'LubaButton'")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListComponentsParams {
    #[schemars(description = "Optional category filter (case-insensitive), e.g. 'component', 'token', 'modifier'")]
    pub category: Option<String>,
    #[schemars(description = "Maximum number of components to return (default: 100)")]
    pub limit: Option<usize>,
    #[schemars(description = "Starting position for pagination (default: 0)")]
    pub offset: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct CatalogTools {
    catalog: Arc<RwLock<Catalog>>,
}

impl CatalogTools {
    pub fn new(catalog: Arc<RwLock<Catalog>>) -> Self {
        Self { catalog }
    }

    pub async fn get_component(
        &self,
        params: GetComponentParams,
    ) -> Result<GetComponentOutput, CatalogErrorOutput> {
        let catalog = self.catalog.read().await;
        match catalog.find(&params.name) {
            Some(item) => Ok(GetComponentOutput {
                component: item.clone(),
            }),
            None => Err(CatalogErrorOutput::new(format!(
                "Component '{}' not found",
                params.name
            ))),
        }
    }

    pub async fn list_components(
        &self,
        params: ListComponentsParams,
    ) -> Result<ListComponentsOutput, CatalogErrorOutput> {
        let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let offset = params.offset.unwrap_or(0);
        if limit == 0 {
            return Err(CatalogErrorOutput::new("Limit must be at least 1"));
        }

        let catalog = self.catalog.read().await;
        let items = catalog.list(params.category.as_deref());
        let total = items.len();

        let components = items
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(ListComponentsOutput {
            components,
            pagination: PaginationInfo {
                total,
                limit,
                offset,
                has_more: offset.saturating_add(limit) < total,
            },
            category: params.category,
        })
    }

    pub async fn list_categories(&self) -> Result<ListCategoriesOutput, CatalogErrorOutput> {
        let catalog = self.catalog.read().await;
        Ok(ListCategoriesOutput {
            categories: catalog.categories(),
            total_components: catalog.len(),
        })
    }

    /// Re-read the catalog from its source. The current catalog stays in place if loading fails.
    pub async fn reload_catalog(&self) -> Result<ReloadCatalogOutput, CatalogErrorOutput> {
        let current = self.catalog.read().await.clone();

        let reloaded = current.reload().map_err(|e| {
            tracing::warn!("Catalog reload from {} failed: {:#}", current.source(), e);
            CatalogErrorOutput::new(format!("Failed to reload catalog: {e:#}"))
        })?;

        let output = ReloadCatalogOutput {
            source: reloaded.source().to_string(),
            previous_count: current.len(),
            item_count: reloaded.len(),
        };

        *self.catalog.write().await = reloaded;
        tracing::info!(
            "Reloaded catalog from {} ({} -> {} items)",
            output.source,
            output.previous_count,
            output.item_count
        );

        Ok(output)
    }
}
