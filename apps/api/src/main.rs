mod config;
mod cover_letter;
mod embeddings;
mod errors;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::cover_letter::generator::LlmCoverLetterGenerator;
use crate::embeddings::download::ensure_model;
use crate::embeddings::{EmbeddingProvider, SentenceEmbedder};
use crate::llm_client::{LlmClient, LlmSettings};
use crate::matching::similarity::SimilarityScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobSeeker Copilot API v{}", env!("CARGO_PKG_VERSION"));

    // Fetch and load the embedding model once; every request shares it.
    ensure_model(&config.embedding_model_dir, config.embedding_auto_download).await?;
    let model_dir = config.embedding_model_dir.clone();
    let embedder = tokio::task::spawn_blocking(move || SentenceEmbedder::load(&model_dir))
        .await
        .context("embedding model loader panicked")?
        .context("Failed to load embedding model")?;
    info!("Embedding model ready ({} dimensions)", embedder.dimension());
    let scorer = SimilarityScorer::new(Arc::new(embedder));

    // Initialize LLM client
    let llm = LlmClient::new(LlmSettings::from_config(&config))
        .context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; cover letter generation will fail until it is");
    }

    // Build app state
    let state = AppState {
        scorer,
        cover_letters: Arc::new(LlmCoverLetterGenerator::new(llm)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
