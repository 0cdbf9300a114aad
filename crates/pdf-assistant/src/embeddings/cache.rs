//! Embedding model cache
//!
//! Loading a model can mean a network download, so each model name is loaded
//! once and the handle is reused by every later ingestion.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::providers::{EmbeddingModelLoader, EmbeddingProvider};

/// Loaded embedders keyed by model name
pub struct EmbedderCache {
    loader: Arc<dyn EmbeddingModelLoader>,
    models: Mutex<HashMap<String, Arc<dyn EmbeddingProvider>>>,
}

impl EmbedderCache {
    pub fn new(loader: Arc<dyn EmbeddingModelLoader>) -> Self {
        Self {
            loader,
            models: Mutex::new(HashMap::new()),
        }
    }

    /// Get the embedder for `model`, loading it on first request.
    ///
    /// The lock is held across the load so concurrent first requests load once.
    /// A failed load is not cached.
    pub async fn get(&self, model: &str) -> Result<Arc<dyn EmbeddingProvider>> {
        let mut models = self.models.lock().await;

        if let Some(embedder) = models.get(model) {
            return Ok(Arc::clone(embedder));
        }

        tracing::info!("Loading embedding model '{}' with {} loader", model, self.loader.name());
        let embedder = self.loader.load(model).await?;
        models.insert(model.to_string(), Arc::clone(&embedder));

        Ok(embedder)
    }

    /// Number of models loaded so far
    #[cfg(test)]
    pub(crate) async fn loaded(&self) -> usize {
        self.models.lock().await.len()
    }
}
