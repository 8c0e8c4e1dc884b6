// src/main.rs
// medassist - health assistant backend for watsonx.ai Granite models

use anyhow::Result;
use clap::Parser;
use medassist::config::{GatewayConfig, ServerConfig};
use medassist::gateway::{TextGenerator, WatsonxGateway};
use medassist::server;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "medassist")]
#[command(about = "Health assistant backend for watsonx.ai Granite models")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, env = "MEDASSIST_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "MEDASSIST_PORT", default_value = "8000")]
    port: u16,

    /// Directory holding index.html, selfcare.html, nutrition.html, wellness.html
    #[arg(long, env = "MEDASSIST_TEMPLATES_DIR", default_value = "templates")]
    templates_dir: PathBuf,

    /// Directory served under /static
    #[arg(long, env = "MEDASSIST_STATIC_DIR", default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the working directory if present
    let _ = dotenvy::dotenv();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let gateway_config = GatewayConfig::from_env();
    info!(
        model = gateway_config.model_id.as_deref().unwrap_or("unset"),
        max_new_tokens = gateway_config.decoding.max_new_tokens,
        decoding = gateway_config.decoding.method.as_str(),
        "Starting medassist"
    );
    let generator: Arc<dyn TextGenerator> = Arc::new(WatsonxGateway::new(gateway_config)?);

    let server_config = ServerConfig {
        host: args.host,
        port: args.port,
        templates_dir: args.templates_dir,
        static_dir: args.static_dir,
    };

    server::run(server_config, generator).await
}
