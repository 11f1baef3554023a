//! Command-line bootstrap for zee-rs
//!
//! Builds two agents, runs them as one workflow, and prints the result.
//! `zee subgraph` instead sends a GraphQL query to a The Graph subgraph.

mod app;
mod subgraph;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use zee_utils::Config;
use zee_workflow::ZeeRunner;

use crate::app::OutputFormat;
use crate::subgraph::{DEFAULT_QUERY, DEFAULT_SUBGRAPH_URL, GraphqlRequest, SubgraphClient};

#[derive(Parser, Debug)]
#[command(name = "zee")]
#[command(about = "Run a two-agent workflow and print its result", long_about = None)]
struct Args {
    /// Env file to load instead of ./.env
    #[arg(long, value_name = "PATH", global = true)]
    env_file: Option<PathBuf>,

    /// Print the full result (including every agent's step) as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send a GraphQL query to a subgraph and print the JSON response
    Subgraph {
        /// Subgraph endpoint
        #[arg(long, default_value = DEFAULT_SUBGRAPH_URL)]
        url: String,

        /// File holding the query (defaults to factories and bundles)
        #[arg(long, value_name = "PATH")]
        query_file: Option<PathBuf>,

        /// Query variables as a JSON object
        #[arg(long, value_name = "JSON")]
        variables: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Env file first so RUST_LOG and provider keys from it take effect
    let env_file = zee_utils::load_env_file(args.env_file.as_deref())?;
    zee_utils::init_tracing();

    let config = Config::from_env().with_env_file(env_file);
    info!(environment = %config.environment, env_file = ?config.env_file, "Starting {}", config.app_name);

    if let Some(Command::Subgraph {
        url,
        query_file,
        variables,
    }) = args.command
    {
        return run_subgraph(url, query_file, variables).await;
    }

    let workflow = app::build_workflow().context("Invalid workflow configuration")?;
    let runner = ZeeRunner::from_env();

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let mut stdout = std::io::stdout().lock();
    app::execute(&runner, &workflow, format, &mut stdout).await?;

    info!("Done");
    Ok(())
}

async fn run_subgraph(
    url: String,
    query_file: Option<PathBuf>,
    variables: Option<String>,
) -> anyhow::Result<()> {
    let query = match query_file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read query file {}", path.display()))?,
        None => DEFAULT_QUERY.to_string(),
    };

    let mut request = GraphqlRequest::new(query);
    if let Some(raw) = variables {
        request = request.with_variables_json(&raw)?;
    }

    let client = SubgraphClient::from_env(url)?;
    let mut stdout = std::io::stdout().lock();
    subgraph::execute(&client, &request, &mut stdout).await?;

    info!("Done");
    Ok(())
}
