//! Local embeddings using feature hashing
//!
//! Uses the hashing trick to produce fixed-size vectors without a vocabulary
//! or model download. Tokens are hashed with 64-bit FNV, so the same text
//! produces the same vector in every process.

use async_trait::async_trait;
use std::hash::Hasher;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::providers::{EmbeddingModelLoader, EmbeddingProvider};

/// Model name reported by the feature-hash embedder
pub const FEATURE_HASH_MODEL: &str = "feature-hash";

/// Hashing-trick embedder
#[derive(Debug, Clone)]
pub struct FeatureHashEmbedder {
    dimensions: usize,
}

impl FeatureHashEmbedder {
    /// Create an embedder producing `dimensions`-long vectors
    pub fn new(dimensions: usize) -> Result<Self> {
        if dimensions == 0 {
            return Err(Error::invalid_argument("embedding dimensions must be positive"));
        }
        Ok(Self { dimensions })
    }

    /// Term-frequency vector over hashed, lower-cased alphanumeric tokens, L2-normalized
    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut tf = vec![0.0f32; self.dimensions];

        let tokens = text
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|t| !t.is_empty());

        for token in tokens {
            let idx = (token_hash(&token.to_lowercase()) % self.dimensions as u64) as usize;
            tf[idx] += 1.0;
        }

        super::l2_normalize(&mut tf);
        tf
    }
}

/// Stable 64-bit FNV hash of a token
fn token_hash(token: &str) -> u64 {
    let mut hasher = fnv_rs::Fnv64::default();
    hasher.write(token.as_bytes());
    hasher.finish()
}

impl EmbeddingProvider for FeatureHashEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_text(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model_name(&self) -> &str {
        FEATURE_HASH_MODEL
    }
}

/// Loader handing out feature-hash embedders of a fixed dimension
pub struct FeatureHashLoader {
    dimensions: usize,
}

impl FeatureHashLoader {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

#[async_trait]
impl EmbeddingModelLoader for FeatureHashLoader {
    async fn load(&self, _model: &str) -> Result<Arc<dyn EmbeddingProvider>> {
        Ok(Arc::new(FeatureHashEmbedder::new(self.dimensions)?))
    }

    fn name(&self) -> &str {
        "feature_hash"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_and_normalized() {
        let embedder = FeatureHashEmbedder::new(64).unwrap();
        let a = embedder.embed_text("The cat sat on the mat.");
        let b = embedder.embed_text("the CAT sat, on the mat");

        assert_eq!(a.len(), 64);
        assert_eq!(a, b);
        let norm: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let embedder = FeatureHashEmbedder::new(16).unwrap();
        assert!(embedder.embed_text("  ... ").iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_batch_preserves_order() {
        let embedder = FeatureHashEmbedder::new(32).unwrap();
        let texts = vec!["dog".to_string(), "cat".to_string()];
        let vectors = embedder.embed(&texts).unwrap();

        assert_eq!(vectors[0], embedder.embed_text("dog"));
        assert_eq!(vectors[1], embedder.embed_text("cat"));
    }

    #[test]
    fn test_token_hash_is_stable() {
        assert_eq!(token_hash("cat"), token_hash("cat"));
        assert_ne!(token_hash("cat"), token_hash("dog"));

        let embedder = FeatureHashEmbedder::new(16).unwrap();
        let mut expected = vec![0.0f32; 16];
        expected[(token_hash("cat") % 16) as usize] = 1.0;
        assert_eq!(embedder.embed_text("Cat!"), expected);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(FeatureHashEmbedder::new(0).is_err());
    }
}
