mod analysis;
mod config;
mod errors;
mod extraction;
mod intake;
mod latex;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::latex::compiler::LatexCompiler;
use crate::llm_client::GeminiClient;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResuMatch API v{}", env!("CARGO_PKG_VERSION"));

    errors::expose_internal_details(config.debug);
    if config.debug {
        warn!("DEBUG is enabled: internal error details are returned to clients");
    }

    // Initialize LLM client
    let llm = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.generation,
    )?;
    info!("LLM client initialized (model: {})", config.gemini_model);

    // Check the typesetter once; compile requests fail fast when it is missing
    let compiler = LatexCompiler::detect(&config.pdflatex_bin, config.latex_timeout).await;

    let state = AppState::new(config.clone(), Arc::new(llm), compiler);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
