use anyhow::Result;
use clap::Parser;
use luba_mcp::LubaMcpService;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// MCP server for looking up LubaUI design-system components
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Component catalog JSON file (defaults to ~/.luba-mcp/components.json, then the bundled catalog)
    #[arg(long, env = "LUBA_MCP_CATALOG")]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing to stderr to avoid conflicts with stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting LubaUI MCP server on stdio...");
    if let Some(ref catalog) = args.catalog {
        tracing::info!("Using catalog file: {}", catalog.display());
    }

    let luba_service = LubaMcpService::new(args.catalog)?;

    // Serve using stdio transport
    let service = luba_service.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    // Wait for the service to complete
    service.waiting().await?;
    Ok(())
}
