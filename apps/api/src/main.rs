mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod parsing;
mod routes;
mod scoring;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::catalog::default_catalog;
use crate::parsing::extractor::DocumentTextExtractor;
use crate::routes::build_router;
use crate::scoring::heuristic::{HeuristicProfile, HeuristicScorer};
use crate::scoring::improve::{ResumeImprover, IMPROVE_TIMEOUT};
use crate::scoring::llm_scorer::LlmResumeScorer;
use crate::scoring::FallbackScorer;
use crate::state::AppState;
use crate::store::ResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize scorer and improver: LLM paths only when an API key is configured
    let heuristic = HeuristicScorer::new(HeuristicProfile::default());
    let (scorer, improver) = match &config.gemini_api_key {
        Some(key) => {
            let llm = Arc::new(LlmClient::new(
                key.clone(),
                config.llm_api_url.clone(),
                config.llm_timeout,
            )?);
            info!(
                "LLM scoring enabled ({}), timeout {}s",
                llm.api_url(),
                config.llm_timeout.as_secs()
            );
            let scorer = FallbackScorer::new(
                Some(LlmResumeScorer::new(llm.clone())),
                heuristic,
                config.llm_timeout,
            );
            (scorer, Some(Arc::new(ResumeImprover::new(llm, IMPROVE_TIMEOUT))))
        }
        None => {
            warn!("GEMINI_API_KEY not set; scoring uses the heuristic scorer only and resume improvement is disabled");
            (FallbackScorer::heuristic_only(heuristic), None)
        }
    };

    let catalog = Arc::new(default_catalog());
    info!("Job catalog loaded ({} postings)", catalog.len());

    // Build app state
    let state = AppState {
        config: config.clone(),
        store: ResumeStore::default(),
        scorer: Arc::new(scorer),
        improver,
        extractor: Arc::new(DocumentTextExtractor),
        catalog,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
