//! Embedding provider traits

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;

/// Trait for generating text embeddings
///
/// Implementations:
/// - `OnnxEmbedder`: sentence-transformers model via ONNX Runtime (all-MiniLM-L6-v2)
/// - `FeatureHashEmbedder`: offline hashing-trick vectors
///
/// Calls block the current thread; async callers run them on the blocking pool.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed texts, one vector per input, in input order
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embed a single text
    fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        self.embed(&[text.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| crate::error::Error::embedding("Empty embedding result"))
    }

    /// Embedding dimensions (e.g., 384 for all-MiniLM-L6-v2)
    fn dimensions(&self) -> usize;

    /// Model identity, used as the cache key
    fn model_name(&self) -> &str;
}

/// Loads embedding models by name
///
/// Loading may download weights, so it is async and potentially slow.
#[async_trait]
pub trait EmbeddingModelLoader: Send + Sync {
    /// Load the named model
    async fn load(&self, model: &str) -> Result<Arc<dyn EmbeddingProvider>>;

    /// Get loader name for logging
    fn name(&self) -> &str;
}
