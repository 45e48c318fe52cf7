//! Tandem HTTP server entrypoint.

use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use tandem::config::Config;
use tandem::embedding::{EmbeddingCache, HttpEmbedder};
use tandem::engine::MatchEngine;
use tandem::server::{AppState, create_router};
use tandem::store::InMemoryProfileStore;
use tandem::writeback::spawn_writeback_worker;
use tandem::{HttpAnalyst, MatchOptions};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "Tandem starting"
    );

    let options: MatchOptions = config.match_options();
    if config.api_key.is_none() {
        tracing::warn!(
            "no TANDEM_API_KEY configured, running lexical-only (tiers 2 and 3 disabled)"
        );
    }

    let cache = EmbeddingCache::with_capacity(config.cache_capacity);
    let embedder = HttpEmbedder::new(config.embedding_config(), cache)?;
    let analyst = HttpAnalyst::new(config.analysis_config())?;

    let store = Arc::new(InMemoryProfileStore::new());
    let (writeback, _writeback_worker) = spawn_writeback_worker(store.clone());

    let engine = Arc::new(
        MatchEngine::new(embedder.clone(), analyst)
            .with_options(options)
            .with_writeback(writeback.clone()),
    );

    let state = Arc::new(AppState::new(store, engine, embedder, writeback));
    let router = create_router(state);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = signal::ctrl_c().await {
        tracing::error!(%error, "failed to install ctrl-c handler");
    }
}
