use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use anyhow::Result;
use rmcp::schemars::{self, JsonSchema};
use rmcp::{
    ServerHandler,
    handler::server::{prompt::Arguments, router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, ListPromptsResult, PaginatedRequestParam,
        PromptMessage, PromptMessageRole, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    Catalog,
    tools::{CatalogTools, GetComponentParams, ListComponentsParams},
};
use crate::search::tools::{SearchComponentsParams, SearchTools, SuggestNamesParams};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
struct FindComponentArgs {
    /// What the UI needs to do (e.g., "dismissable notification", "swipe to delete row")
    pub need: String,

    /// Optional category to restrict the search to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LubaMcpService {
    search_tools: SearchTools,
    catalog_tools: CatalogTools,
    tool_router: ToolRouter<Self>,
}

impl LubaMcpService {
    /// Create the service, loading the catalog from `catalog_path` or the default location
    pub fn new(catalog_path: Option<PathBuf>) -> Result<Self> {
        Ok(Self::with_catalog(Catalog::load(catalog_path)?))
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let catalog = Arc::new(RwLock::new(catalog));

        Self {
            search_tools: SearchTools::new(catalog.clone()),
            catalog_tools: CatalogTools::new(catalog),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl LubaMcpService {
    // Search tools
    #[tool(
        description = "Search LubaUI components, tokens and modifiers by free text. Exact name matches rank highest, then prefix and substring matches, then partial matches on camelCase words; aliases count as names and descriptions count at half weight. Use the category parameter to restrict results (see list_categories). Returns scored results, best first."
    )]
    pub async fn search_components(&self, params: Parameters<SearchComponentsParams>) -> String {
        match self.search_tools.search_components(params.0).await {
            Ok(output) => output.to_json(),
            Err(e) => e.to_json(),
        }
    }

    #[tool(
        description = "Suggest component names for a partial name. Only names and aliases are matched, not descriptions. Useful for autocompleting a name before calling get_component."
    )]
    pub async fn suggest_component_names(&self, params: Parameters<SuggestNamesParams>) -> String {
        match self.search_tools.suggest_component_names(params.0).await {
            Ok(output) => output.to_json(),
            Err(e) => e.to_json(),
        }
    }

    // Catalog tools
    #[tool(
        description = "Get the full catalog record for one component by exact name or alias (case-insensitive), including any extra fields such as source file or usage notes. Use after search_components to fetch details."
    )]
    pub async fn get_component(&self, params: Parameters<GetComponentParams>) -> String {
        match self.catalog_tools.get_component(params.0).await {
            Ok(output) => output.to_json(),
            Err(e) => e.to_json(),
        }
    }

    #[tool(
        description = "List catalog components in catalog order, optionally filtered by category. Supports pagination with limit and offset."
    )]
    pub async fn list_components(&self, params: Parameters<ListComponentsParams>) -> String {
        match self.catalog_tools.list_components(params.0).await {
            Ok(output) => output.to_json(),
            Err(e) => e.to_json(),
        }
    }

    #[tool(description = "List all component categories with the number of components in each.")]
    pub async fn list_categories(&self) -> String {
        match self.catalog_tools.list_categories().await {
            Ok(output) => output.to_json(),
            Err(e) => e.to_json(),
        }
    }

    #[tool(
        description = "Reload the component catalog from the file it was loaded from. If the file cannot be read or is invalid, the current catalog is kept and an error is returned."
    )]
    pub async fn reload_catalog(&self) -> String {
        match self.catalog_tools.reload_catalog().await {
            Ok(output) => output.to_json(),
            Err(e) => e.to_json(),
        }
    }
}

fn find_component_message(args: &FindComponentArgs) -> String {
    format!(
        "Find the LubaUI component that best fits this need: '{}'{}. Start with search_components using a few short keywords, try synonyms if nothing scores well, then call get_component on the best candidates and explain which one to use and why.",
        args.need,
        args.category
            .as_ref()
            .map(|c| format!(" (category: {})", c))
            .unwrap_or_default()
    )
}

/// Parse the `find_component` prompt arguments sent by the client
fn parse_find_component_args(
    arguments: Option<serde_json::Map<String, serde_json::Value>>,
) -> Result<FindComponentArgs, rmcp::Error> {
    let Some(args_obj) = arguments else {
        return Err(rmcp::Error::invalid_params(
            "Missing required arguments",
            None,
        ));
    };

    serde_json::from_value::<FindComponentArgs>(serde_json::Value::Object(args_obj))
        .map_err(|e| rmcp::Error::invalid_params(format!("Invalid arguments: {}", e), None))
}

async fn find_component_prompt_template(
    _service: &LubaMcpService,
    Arguments(args): Arguments<FindComponentArgs>,
    _ctx: RequestContext<RoleServer>,
) -> Result<Vec<PromptMessage>, rmcp::Error> {
    Ok(vec![PromptMessage::new_text(
        PromptMessageRole::User,
        find_component_message(&args),
    )])
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for LubaMcpService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "luba-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                prompts: Some(Default::default()),
                ..Default::default()
            },
            instructions: Some(
                "MCP server for looking up LubaUI design-system components. Use search_components to find components by name, alias or description; use list_categories to see how the catalog is organised; use get_component to fetch the full record for a name returned by search. suggest_component_names completes partial names.".to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, rmcp::Error> {
        Ok(ListPromptsResult {
            next_cursor: None,
            prompts: vec![rmcp::model::Prompt {
                name: "find_component".to_string(),
                description: Some(
                    "Find the LubaUI component that fits a described UI need".to_string(),
                ),
                arguments: rmcp::handler::server::prompt::arguments_from_schema::<
                    FindComponentArgs,
                >(),
            }],
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, rmcp::Error> {
        match request.name.as_str() {
            "find_component" => {
                let args = parse_find_component_args(request.arguments)?;

                let messages =
                    find_component_prompt_template(self, Arguments(args), context).await?;

                Ok(GetPromptResult {
                    description: None,
                    messages,
                })
            }
            _ => Err(rmcp::Error::invalid_params("Prompt not found", None)),
        }
    }
}
