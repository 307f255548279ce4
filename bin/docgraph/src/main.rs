//! Prints the SDL of the GraphQL schema described by a TOML model configuration.
//!
//! ```text
//! docgraph --config models.toml --output schema.graphql
//! ```

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use docgraph_graphql::config::SchemaConfig;
use docgraph_store::MemoryStore;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub(crate) const LOG_TARGET: &str = "docgraph::cli";

/// Document model to GraphQL schema printer
#[derive(Parser, Debug)]
#[command(name = "docgraph", author, version, about, long_about = None)]
struct DocgraphArgs {
    /// Configuration file declaring models, types and root fields.
    #[arg(long, value_name = "PATH", env = "DOCGRAPH_CONFIG")]
    config: PathBuf,

    /// Write the schema to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = DocgraphArgs::parse();

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docgraph=info"));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter_layer)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set the global tracing subscriber")?;

    let sdl = print_schema(&args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &sdl)
                .with_context(|| format!("Failed to write schema to {}", path.display()))?;
            info!(target: LOG_TARGET, path = %path.display(), "Schema written.");
        }
        None => println!("{sdl}"),
    }

    Ok(())
}

fn print_schema(args: &DocgraphArgs) -> Result<String> {
    let config = SchemaConfig::from_path(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    // the printer never resolves fields, an empty store is enough
    let schema = config.schema_builder()?.finish(Arc::new(MemoryStore::new()))?;
    Ok(schema.sdl())
}
