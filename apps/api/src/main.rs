mod config;
mod errors;
mod ideas;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ideas::corpus::Corpus;
use crate::ideas::render::PageTemplate;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ideas API v{}", env!("CARGO_PKG_VERSION"));

    // All assets load once, up front. A missing or empty corpus is fatal;
    // the process must not start serving without one.
    let corpus = Corpus::load(&config.ideas_file)?;
    if corpus.is_empty() {
        bail!(
            "Ideas file {} contains no usable lines",
            config.ideas_file.display()
        );
    }
    info!("Loaded {} ideas from {}", corpus.len(), config.ideas_file.display());

    let humans = std::fs::read_to_string(&config.humans_file).with_context(|| {
        format!("Failed to read humans file at {}", config.humans_file.display())
    })?;

    let template = std::fs::read_to_string(&config.template_file).with_context(|| {
        format!(
            "Failed to read page template at {}",
            config.template_file.display()
        )
    })?;

    info!("Format mode: {:?}", config.format_mode);

    let state = AppState {
        corpus: Arc::new(corpus),
        page: Arc::new(PageTemplate::new(template)),
        humans: Arc::new(humans),
        mode: config.format_mode,
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
