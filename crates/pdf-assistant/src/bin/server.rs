//! PDF assistant server binary
//!
//! Run with: cargo run -p pdf-assistant --bin pdf-assistant-server

use pdf_assistant::{config::RagConfig, server::RagServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_assistant=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RagConfig::from_env()?;

    tracing::info!("Configuration loaded");
    tracing::info!(
        "  - Embedding model: {} ({:?}, {} dims)",
        config.embeddings.model,
        config.embeddings.provider,
        config.embeddings.dimensions
    );
    tracing::info!("  - LLM model: {}", config.generation.model);
    tracing::info!("  - Chunk size: {} words", config.chunking.chunk_size);
    tracing::info!("  - Top k: {}", config.retrieval.top_k);

    let server = RagServer::new(config).await?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /upload   - Upload a PDF (multipart field 'file')");
    println!("  POST /ask      - Ask a question about it");
    println!("  GET  /api/info - Service info");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
