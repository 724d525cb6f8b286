use std::sync::Arc;
use tokio::sync::RwLock;

use rmcp::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::search::config::{
    DEFAULT_SEARCH_LIMIT, DEFAULT_SUGGESTION_LIMIT, MAX_QUERY_LENGTH, MAX_SEARCH_LIMIT,
    MAX_SUGGESTION_LIMIT,
};
use crate::search::outputs::{
    SearchComponentsOutput, SearchErrorOutput, SearchResult, SuggestNamesOutput,
};
use crate::search::{SearchOptions, rank, score_names};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchComponentsParams {
    #[schemars(
        description = "Free-text query. Matches component names, aliases and descriptions; camelCase names are split into words (e.g. 'button group', 'LubaCard', 'swipe')"
    )]
    pub query: String,
    #[schemars(description = "Optional category filter (case-insensitive), e.g. 'component', 'token', 'modifier'")]
    pub category: Option<String>,
    #[schemars(description = "Maximum number of results to return (default: 10, max: 100)")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SuggestNamesParams {
    #[schemars(description = "Partial component name to complete")]
    pub partial_query: String,
    #[schemars(description = "Maximum number of suggestions to return (default: 10, max: 50)")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct SearchTools {
    catalog: Arc<RwLock<Catalog>>,
}

impl SearchTools {
    pub fn new(catalog: Arc<RwLock<Catalog>>) -> Self {
        Self { catalog }
    }

    fn validate_query(query: &str) -> Result<(), SearchErrorOutput> {
        let length = query.chars().count();
        if length > MAX_QUERY_LENGTH {
            tracing::warn!("Rejected query of {} characters", length);
            return Err(SearchErrorOutput::new(format!(
                "Query must not exceed {MAX_QUERY_LENGTH} characters"
            )));
        }
        Ok(())
    }

    fn validate_limit(limit: usize, max: usize) -> Result<usize, SearchErrorOutput> {
        if limit == 0 || limit > max {
            tracing::warn!("Rejected limit {} (allowed 1..={})", limit, max);
            return Err(SearchErrorOutput::new(format!(
                "Limit must be between 1 and {max}"
            )));
        }
        Ok(limit)
    }

    /// Rank catalog components against a free-text query
    pub async fn search_components(
        &self,
        params: SearchComponentsParams,
    ) -> Result<SearchComponentsOutput, SearchErrorOutput> {
        Self::validate_query(&params.query)?;
        let limit = Self::validate_limit(
            params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            MAX_SEARCH_LIMIT,
        )?;

        let options = SearchOptions {
            category: params.category.clone(),
            max_results: limit,
        };

        let catalog = self.catalog.read().await;
        let results: Vec<SearchResult> = rank(catalog.items(), &params.query, &options)
            .into_iter()
            .map(SearchResult::from)
            .collect();

        tracing::debug!(
            "search_components '{}' returned {} result(s)",
            params.query,
            results.len()
        );

        Ok(SearchComponentsOutput {
            total_results: results.len(),
            results,
            query: params.query,
            category: params.category,
        })
    }

    /// Suggest component names for a partial query, using names and aliases only
    pub async fn suggest_component_names(
        &self,
        params: SuggestNamesParams,
    ) -> Result<SuggestNamesOutput, SearchErrorOutput> {
        Self::validate_query(&params.partial_query)?;
        let limit = Self::validate_limit(
            params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT),
            MAX_SUGGESTION_LIMIT,
        )?;

        let catalog = self.catalog.read().await;
        let mut scored: Vec<(f64, &str)> = catalog
            .items()
            .iter()
            .map(|item| (score_names(&params.partial_query, item), item.name.as_str()))
            .filter(|(score, _)| *score > 0.0)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let suggestions = scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect();

        Ok(SuggestNamesOutput {
            suggestions,
            partial_query: params.partial_query,
        })
    }
}
