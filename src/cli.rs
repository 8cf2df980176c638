use std::sync::Arc;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, miette};
use rmcp::{ServiceExt, transport::io::stdio};

use crate::clickup::ClickUpClient;
use crate::config::Config;
use crate::mcp::ClickUpServer;
use crate::oauth;

#[derive(Parser)]
#[command(name = "clickup-mcp")]
#[command(author, version, about = "ClickUp MCP server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdio (the default when no subcommand is given)
    Serve,
    /// Obtain an OAuth access token through a local browser flow
    GetToken {
        /// OAuth app client ID (or CLICKUP_CLIENT_ID)
        #[arg(long)]
        client_id: Option<String>,
        /// OAuth app client secret (or CLICKUP_CLIENT_SECRET)
        #[arg(long)]
        client_secret: Option<String>,
        /// Port for the local redirect listener
        #[arg(long, default_value_t = 8089)]
        port: u16,
    },
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::GetToken {
            client_id,
            client_secret,
            port,
        } => {
            let client_id = client_id
                .or_else(|| env_nonempty("CLICKUP_CLIENT_ID"))
                .ok_or_else(|| miette!("pass --client-id or set CLICKUP_CLIENT_ID"))?;
            let client_secret = client_secret
                .or_else(|| env_nonempty("CLICKUP_CLIENT_SECRET"))
                .ok_or_else(|| miette!("pass --client-secret or set CLICKUP_CLIENT_SECRET"))?;
            oauth::get_token(client_id, client_secret, port).await
        }
    }
}

async fn serve() -> miette::Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    let client = Arc::new(ClickUpClient::new(&config));
    let server = ClickUpServer::new(client)?;
    tracing::info!("ClickUp MCP server listening on stdio");
    let service = server.serve(stdio()).await.into_diagnostic()?;
    service.waiting().await.into_diagnostic()?;
    Ok(())
}

/// Logs go to stderr; stdout carries the protocol.
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clickup_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
