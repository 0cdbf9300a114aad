//! Configuration for the PDF assistant
//!
//! Values are resolved in three layers: built-in defaults, an optional TOML
//! file named by `PDF_ASSISTANT_CONFIG`, then individual environment
//! variables (`PORT`, `GOOGLE_API_KEY`, `ALLOWED_ORIGIN`, `EMBEDDING_PROVIDER`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "PDF_ASSISTANT_CONFIG";

/// Main assistant configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RagConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Embedding configuration
    pub embeddings: EmbeddingConfig,
    /// Chunking configuration
    pub chunking: ChunkingConfig,
    /// Retrieval configuration
    pub retrieval: RetrievalConfig,
    /// Generative model configuration
    pub generation: GenerationConfig,
}

impl RagConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path)?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing sections use defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Apply environment-style overrides from a lookup function
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("Invalid PORT '{}': {}", port, e)))?;
        }
        if let Some(key) = lookup("GOOGLE_API_KEY") {
            self.generation.api_key = Some(key);
        }
        if let Some(origin) = lookup("ALLOWED_ORIGIN") {
            self.server.allowed_origin = origin;
        }
        if let Some(provider) = lookup("EMBEDDING_PROVIDER") {
            self.embeddings.provider = match provider.trim().to_lowercase().as_str() {
                "onnx" => EmbeddingBackend::Onnx,
                "feature_hash" | "feature-hash" => EmbeddingBackend::FeatureHash,
                other => {
                    return Err(Error::Config(format!(
                        "Unknown EMBEDDING_PROVIDER '{}'",
                        other
                    )))
                }
            };
        }
        Ok(())
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.chunking.chunk_size == 0 {
            return Err(Error::Config("chunking.chunk_size must be positive".to_string()));
        }
        if self.retrieval.top_k == 0 {
            return Err(Error::Config("retrieval.top_k must be positive".to_string()));
        }
        if self.embeddings.dimensions == 0 || self.embeddings.batch_size == 0 {
            return Err(Error::Config(
                "embeddings.dimensions and embeddings.batch_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// The single front-end origin allowed by CORS
    pub allowed_origin: String,
    /// Maximum upload size in bytes (default: 50MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            allowed_origin: "https://pdfasistant.vercel.app".to_string(),
            max_upload_size: 50 * 1024 * 1024,
        }
    }
}

/// Which embedding implementation to load
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingBackend {
    /// Sentence-transformers model through ONNX Runtime
    #[default]
    Onnx,
    /// Offline hashing-trick embedder
    FeatureHash,
}

/// Embedding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding implementation
    pub provider: EmbeddingBackend,
    /// Model to use (default: all-MiniLM-L6-v2)
    pub model: String,
    /// Embedding dimensions (384 for MiniLM)
    pub dimensions: usize,
    /// Batch size for embedding generation
    pub batch_size: usize,
    /// Maximum sequence length
    pub max_length: usize,
    /// Cache directory for models
    pub cache_dir: PathBuf,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingBackend::Onnx,
            model: "all-MiniLM-L6-v2".to_string(),
            dimensions: 384,
            batch_size: 32,
            max_length: 256,
            cache_dir: dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("pdf-assistant")
                .join("models"),
        }
    }
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Words per chunk
    pub chunk_size: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self { chunk_size: 1000 }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Chunks forwarded to the generative model per question
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

/// Generative model (Gemini) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// API key for the Generative Language API
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Generation model name
    pub model: String,
    /// API base URL
    pub base_url: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Output token cap
    pub max_output_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            temperature: 0.2,
            max_output_tokens: 2048,
            timeout_secs: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RagConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.chunking.chunk_size, 1000);
        assert_eq!(config.retrieval.top_k, 3);
        assert_eq!(config.embeddings.dimensions, 384);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PORT", "8088"),
            ("GOOGLE_API_KEY", "secret"),
            ("EMBEDDING_PROVIDER", "feature_hash"),
        ]
        .into_iter()
        .collect();

        let mut config = RagConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.port, 8088);
        assert_eq!(config.generation.api_key.as_deref(), Some("secret"));
        assert_eq!(config.embeddings.provider, EmbeddingBackend::FeatureHash);
    }

    #[test]
    fn test_invalid_port() {
        let mut config = RagConfig::default();
        let result = config.apply_overrides(|key| (key == "PORT").then(|| "http".to_string()));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_partial_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chunking]\nchunk_size = 250\n\n[server]\nport = 9000").unwrap();

        let config = RagConfig::from_file(file.path()).unwrap();
        assert_eq!(config.chunking.chunk_size, 250);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.retrieval.top_k, 3);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut config = RagConfig::default();
        config.chunking.chunk_size = 0;
        assert!(config.validate().is_err());
    }
}
