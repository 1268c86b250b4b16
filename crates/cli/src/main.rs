use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use line_bridge_core::{BridgeConfig, db_path_from_env};
use line_bridge_http::{AppState, create_router};
use line_bridge_llm::LlmClient;
use line_bridge_messaging::ReplyClient;
use line_bridge_service::EventService;
use line_bridge_storage::Storage;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "line-bridge")]
#[command(about = "LINE webhook bot bridging chat to a generative AI API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the webhook server
    Serve {
        #[arg(short, long, default_value = "5001")]
        port: u16,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Print the logged messages for a user
    History { user_id: String },
    /// Delete the logged messages for a user
    Clear { user_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => serve(port, host).await,
        Commands::History { user_id } => {
            let storage = open_storage()?;
            let entries = storage.history(&user_id)?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
            Ok(())
        }
        Commands::Clear { user_id } => {
            let storage = open_storage()?;
            let deleted = storage.delete_history(&user_id)?;
            println!("deleted {deleted} messages for {user_id}");
            Ok(())
        }
    }
}

async fn serve(port: u16, host: String) -> Result<()> {
    let config = BridgeConfig::from_env()?;

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let storage = Storage::new(&config.db_path)?;

    let llm = Arc::new(
        LlmClient::new(config.ai_api_key.clone(), config.ai_base_url.clone())?
            .with_model(config.model.clone()),
    );
    let reply = Arc::new(ReplyClient::new(
        config.channel_token.clone(),
        config.line_base_url.clone(),
    )?);
    let events = EventService::new(storage.clone(), llm, reply);

    let state = Arc::new(AppState {
        channel_secret: config.channel_secret.clone(),
        storage,
        events,
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn open_storage() -> Result<Storage> {
    let db_path = db_path_from_env();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(Storage::new(&db_path)?)
}
