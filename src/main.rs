use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use elitebrothers_web::config::Config;
use elitebrothers_web::models::TableVariant;
use elitebrothers_web::pricing::QuoteEngine;
use elitebrothers_web::{routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("elitebrothers_web=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let engine = match &config.rate_table_path {
        Some(path) => {
            info!("Loading rate tables from {}", path.display());
            QuoteEngine::load(path).context("Failed to load rate tables")?
        }
        None => QuoteEngine::with_builtin_rates(),
    };
    info!(
        per_model = engine.per_model().len(),
        per_category = engine.per_category().len(),
        default_table = %TableVariant::default(),
        "Rate tables ready"
    );

    let app = routes::app(AppState::new(engine), &config)?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
