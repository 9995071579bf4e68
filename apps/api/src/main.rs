mod config;
mod errors;
mod jobs;
mod llm_client;
mod models;
mod quota;
mod routes;
mod screening;
mod search;
mod state;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::quota::guard::QuotaGuard;
use crate::quota::ledger::FileLedger;
use crate::routes::build_router;
use crate::screening::classifier::LlmClassifier;
use crate::search::serpapi::SerpApiClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing API keys)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobscout API v{}", env!("CARGO_PKG_VERSION"));

    // Quota ledger
    let ledger = Arc::new(FileLedger::new(&config.quota_log_path));
    let quota = Arc::new(QuotaGuard::new(ledger, config.daily_search_quota));
    info!(
        "Quota ledger at {} (limit {}/day)",
        config.quota_log_path.display(),
        config.daily_search_quota
    );

    // Upstream clients
    let search = Arc::new(SerpApiClient::new(
        config.serpapi_key.clone(),
        config.serpapi_base_url.clone(),
    ));
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_api_base.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let classifier = Arc::new(LlmClassifier(llm));

    let state = AppState {
        quota,
        search,
        classifier,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
