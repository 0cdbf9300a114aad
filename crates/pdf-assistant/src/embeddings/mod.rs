//! Text embedding implementations and model caching

mod cache;
mod feature_hash;
mod onnx_embedder;

use std::sync::Arc;

pub use cache::EmbedderCache;
pub use feature_hash::{FeatureHashEmbedder, FeatureHashLoader, FEATURE_HASH_MODEL};
pub use onnx_embedder::{OnnxEmbedder, OnnxModelLoader};

use crate::config::{EmbeddingBackend, EmbeddingConfig};
use crate::providers::EmbeddingModelLoader;

/// Build the model loader selected by configuration
pub fn loader_from_config(config: &EmbeddingConfig) -> Arc<dyn EmbeddingModelLoader> {
    match config.provider {
        EmbeddingBackend::Onnx => Arc::new(OnnxModelLoader::new(config.clone())),
        EmbeddingBackend::FeatureHash => Arc::new(FeatureHashLoader::new(config.dimensions)),
    }
}

/// Scale a vector to unit length in place; zero vectors are left as is
pub(crate) fn l2_normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for val in vector.iter_mut() {
            *val /= norm;
        }
    }
}
