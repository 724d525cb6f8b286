//! Integration tests for luba-mcp
//!
//! These tests drive the MCP tool methods on the service directly and parse
//! the JSON they return:
//! - search ranking against the bundled catalog
//! - catalog lookups
//! - reloading a catalog file from disk

use anyhow::Result;
use luba_mcp::LubaMcpService;
use luba_mcp::catalog::outputs::{
    CatalogErrorOutput, GetComponentOutput, ListCategoriesOutput, ListComponentsOutput,
    ReloadCatalogOutput,
};
use luba_mcp::catalog::tools::{GetComponentParams, ListComponentsParams};
use luba_mcp::search::outputs::{SearchComponentsOutput, SearchErrorOutput, SuggestNamesOutput};
use luba_mcp::search::tools::{SearchComponentsParams, SuggestNamesParams};
use rmcp::handler::server::tool::Parameters;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SMALL_CATALOG: &str = r#"{
  "items": [
    { "name": "LubaCard", "category": "component", "description": "Container for grouped content" },
    { "name": "LubaSheet", "category": "component", "aliases": ["BottomSheet"] }
  ]
}"#;

/// Helper to create a service over the bundled catalog
fn create_bundled_service() -> Result<LubaMcpService> {
    Ok(LubaMcpService::with_catalog(
        luba_mcp::catalog::Catalog::bundled()?,
    ))
}

/// Helper to create a service over a catalog file in a temporary directory
fn create_file_service() -> Result<(LubaMcpService, PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("components.json");
    fs::write(&path, SMALL_CATALOG)?;
    let service = LubaMcpService::new(Some(path.clone()))?;
    Ok((service, path, temp_dir))
}

async fn search(
    service: &LubaMcpService,
    query: &str,
    category: Option<&str>,
    limit: Option<usize>,
) -> Result<SearchComponentsOutput> {
    let params = SearchComponentsParams {
        query: query.to_string(),
        category: category.map(str::to_string),
        limit,
    };
    let response = service.search_components(Parameters(params)).await;
    serde_json::from_str(&response).map_err(|e| {
        anyhow::anyhow!(
            "Failed to parse search response: {}\nResponse: {}",
            e,
            response
        )
    })
}

fn result_names(output: &SearchComponentsOutput) -> Vec<&str> {
    output.results.iter().map(|r| r.name.as_str()).collect()
}

#[tokio::test]
async fn test_search_alias_outranks_substring() -> Result<()> {
    let service = create_bundled_service()?;

    let output = search(&service, "check", None, None).await?;

    // "Checkbox" alias is a prefix match, "ContrastChecker" only contains the query
    assert_eq!(result_names(&output), vec!["LubaCheckbox", "ContrastChecker"]);
    assert_eq!(output.results[0].score, 80.0);
    assert_eq!(output.results[1].score, 60.0);
    assert_eq!(output.total_results, 2);
    Ok(())
}

#[tokio::test]
async fn test_search_exact_name_and_token_partial() -> Result<()> {
    let service = create_bundled_service()?;

    let output = search(&service, "LubaButton", None, Some(3)).await?;

    assert_eq!(
        result_names(&output),
        vec!["LubaButton", "LubaIconButton", "LubaCard"]
    );
    assert_eq!(output.results[0].score, 100.0);
    assert_eq!(output.results[1].score, 50.0);
    assert_eq!(output.results[2].score, 25.0);
    Ok(())
}

#[tokio::test]
async fn test_search_category_filter() -> Result<()> {
    let service = create_bundled_service()?;

    let unfiltered = search(&service, "button", None, None).await?;
    assert!(result_names(&unfiltered).contains(&"LubaRadius"));

    let output = search(&service, "button", Some("Component"), None).await?;
    assert_eq!(
        result_names(&output),
        vec![
            "LubaButton",
            "LubaIconButton",
            "LubaRadioGroup",
            "LubaSearchField"
        ]
    );
    assert_eq!(output.results[3].score, 30.0);
    Ok(())
}

#[tokio::test]
async fn test_search_no_matches() -> Result<()> {
    let service = create_bundled_service()?;

    let output = search(&service, "zzzz", None, None).await?;
    assert!(!output.has_results());
    assert_eq!(output.total_results, 0);
    Ok(())
}

#[tokio::test]
async fn test_search_invalid_limit_returns_error_json() -> Result<()> {
    let service = create_bundled_service()?;

    let params = SearchComponentsParams {
        query: "card".to_string(),
        category: None,
        limit: Some(0),
    };
    let response = service.search_components(Parameters(params)).await;
    let error: SearchErrorOutput = serde_json::from_str(&response)?;
    assert!(error.error.contains("Limit must be between"));
    Ok(())
}

#[tokio::test]
async fn test_suggest_component_names() -> Result<()> {
    let service = create_bundled_service()?;

    let params = SuggestNamesParams {
        partial_query: "Luba".to_string(),
        limit: Some(3),
    };
    let response = service.suggest_component_names(Parameters(params)).await;
    let output: SuggestNamesOutput = serde_json::from_str(&response)?;

    assert_eq!(
        output.suggestions,
        vec!["LubaButton", "LubaIconButton", "LubaCard"]
    );
    Ok(())
}

#[tokio::test]
async fn test_get_component_by_alias() -> Result<()> {
    let service = create_bundled_service()?;

    let params = GetComponentParams {
        name: "switch".to_string(),
    };
    let response = service.get_component(Parameters(params)).await;
    let output: GetComponentOutput = serde_json::from_str(&response)?;

    assert_eq!(output.component.name, "LubaToggle");
    assert_eq!(
        output.component.extra["file"],
        "Sources/LubaUI/Components/LubaToggle.swift"
    );
    Ok(())
}

#[tokio::test]
async fn test_get_component_missing() -> Result<()> {
    let service = create_bundled_service()?;

    let params = GetComponentParams {
        name: "LubaCarousel".to_string(),
    };
    let response = service.get_component(Parameters(params)).await;
    let output: CatalogErrorOutput = serde_json::from_str(&response)?;
    assert_eq!(output.error, "Component 'LubaCarousel' not found");
    Ok(())
}

#[tokio::test]
async fn test_list_categories() -> Result<()> {
    let service = create_bundled_service()?;

    let response = service.list_categories().await;
    let output: ListCategoriesOutput = serde_json::from_str(&response)?;

    let names: Vec<&str> = output.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "accessibility",
            "component",
            "feedback",
            "layout",
            "modifier",
            "navigation",
            "theming",
            "token"
        ]
    );
    let modifiers = output
        .categories
        .iter()
        .find(|c| c.name == "modifier")
        .expect("modifier category");
    assert_eq!(modifiers.count, 4);
    assert_eq!(
        output.categories.iter().map(|c| c.count).sum::<usize>(),
        output.total_components
    );
    Ok(())
}

#[tokio::test]
async fn test_list_components_by_category() -> Result<()> {
    let service = create_bundled_service()?;

    let params = ListComponentsParams {
        category: Some("modifier".to_string()),
        limit: None,
        offset: None,
    };
    let response = service.list_components(Parameters(params)).await;
    let output: ListComponentsOutput = serde_json::from_str(&response)?;

    let names: Vec<&str> = output.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Pressable", "Swipeable", "Expandable", "Shimmerable"]
    );
    assert!(!output.pagination.has_more);
    Ok(())
}

#[tokio::test]
async fn test_reload_catalog_picks_up_changes() -> Result<()> {
    let (service, path, _temp_dir) = create_file_service()?;

    let output = search(&service, "toast", None, None).await?;
    assert!(!output.has_results());

    fs::write(
        &path,
        r#"{"items":[{"name":"LubaCard"},{"name":"LubaSheet"},{"name":"LubaToast","category":"feedback"}]}"#,
    )?;
    let response = service.reload_catalog().await;
    let reload: ReloadCatalogOutput = serde_json::from_str(&response)?;
    assert_eq!(reload.previous_count, 2);
    assert_eq!(reload.item_count, 3);
    assert_eq!(reload.source, path.display().to_string());

    let output = search(&service, "toast", None, None).await?;
    assert_eq!(result_names(&output), vec!["LubaToast"]);
    Ok(())
}

#[tokio::test]
async fn test_reload_failure_keeps_current_catalog() -> Result<()> {
    let (service, path, _temp_dir) = create_file_service()?;

    fs::write(&path, "{ not json")?;
    let response = service.reload_catalog().await;
    let error: CatalogErrorOutput = serde_json::from_str(&response)?;
    assert!(error.error.contains("Failed to reload catalog"));

    let output = search(&service, "bottom", None, None).await?;
    assert_eq!(result_names(&output), vec!["LubaSheet"]);
    Ok(())
}
