//! Campaign Studio — AI-assisted marketing campaign platform.
//!
//! Main entry point that loads configuration and starts the API server.

use clap::Parser;
use studio_api::ApiServer;
use studio_core::config::AppConfig;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "campaign-studio")]
#[command(about = "AI-assisted marketing campaign platform")]
#[command(version)]
struct Cli {
    /// HTTP port (overrides config)
    #[arg(long, env = "CAMPAIGN_STUDIO__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Organisation name shown in settings (overrides config)
    #[arg(long, env = "CAMPAIGN_STUDIO__ORG_NAME")]
    org_name: Option<String>,

    /// Multiplier applied to scripted conversation delays (overrides config)
    #[arg(long, env = "CAMPAIGN_STUDIO__STUDIO__DELAY_SCALE")]
    delay_scale: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_studio=info,studio_api=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Campaign Studio starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(org_name) = cli.org_name {
        config.org_name = org_name;
    }
    if let Some(scale) = cli.delay_scale {
        config.studio.delay_scale = scale;
    }

    info!(
        org = %config.org_name,
        http_port = config.api.http_port,
        max_sessions = config.studio.max_sessions,
        delay_scale = config.studio.delay_scale,
        "Configuration loaded"
    );

    let api_server = ApiServer::new(config);

    info!("Campaign Studio is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
