use anyhow::Result;
use clap::Parser;
use logosmith::models::Config;
use logosmith::provider::ReplicateClient;
use logosmith::server::{router, GatewayState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "logosmith")]
#[command(about = "Prediction gateway for AI logo generation")]
struct CliArgs {
    /// Optional port override; PORT from the environment (default 8080)
    /// applies otherwise.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logosmith=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting logosmith gateway");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let port = args.port.unwrap_or(config.port);
    let app = router(GatewayState {
        provider: Arc::new(ReplicateClient::new(config.replicate_api_token)),
    });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
