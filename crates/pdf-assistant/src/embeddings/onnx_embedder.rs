//! ONNX-based embedding generation
//!
//! Uses all-MiniLM-L6-v2 model for fast, high-quality 384-dimensional embeddings.

use async_trait::async_trait;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokenizers::Tokenizer;

use crate::config::EmbeddingConfig;
use crate::error::{Error, Result};
use crate::providers::{EmbeddingModelLoader, EmbeddingProvider};

/// ONNX-based text embedder
pub struct OnnxEmbedder {
    /// Model name
    model: String,
    /// ONNX Runtime session
    session: Mutex<Session>,
    /// HuggingFace tokenizer
    tokenizer: Tokenizer,
    /// Embedding dimensions
    dimensions: usize,
    /// Maximum sequence length
    max_length: usize,
    /// Batch size
    batch_size: usize,
}

impl OnnxEmbedder {
    /// Create a new ONNX embedder, downloading the model on first use
    pub async fn new(model: &str, config: &EmbeddingConfig) -> Result<Self> {
        tracing::info!("Initializing ONNX embedder with model: {}", model);

        let model_dir = config.cache_dir.join(model);
        std::fs::create_dir_all(&model_dir).map_err(|e| {
            Error::Config(format!("Failed to create cache directory: {}", e))
        })?;

        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() {
            download_file(model, "onnx/model.onnx", &model_path).await?;
        }

        if !tokenizer_path.exists() {
            download_file(model, "tokenizer.json", &tokenizer_path).await?;
        }

        let session = Session::builder()
            .map_err(|e| Error::embedding(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| Error::embedding(format!("Failed to set optimization level: {}", e)))?
            .with_intra_threads(4)
            .map_err(|e| Error::embedding(format!("Failed to set threads: {}", e)))?
            .commit_from_file(&model_path)
            .map_err(|e| Error::embedding(format!("Failed to load model: {}", e)))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| Error::embedding(format!("Failed to load tokenizer: {}", e)))?;

        tracing::info!("ONNX embedder initialized successfully");

        Ok(Self {
            model: model.to_string(),
            session: Mutex::new(session),
            tokenizer,
            dimensions: config.dimensions,
            max_length: config.max_length,
            batch_size: config.batch_size,
        })
    }

    /// Internal batch embedding
    fn embed_batch_internal(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let batch_size = texts.len();

        let inputs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let encodings = self
            .tokenizer
            .encode_batch(inputs, true)
            .map_err(|e| Error::embedding(format!("Tokenization failed: {}", e)))?;

        let max_len = encodings
            .iter()
            .map(|e| e.get_ids().len())
            .max()
            .unwrap_or(0)
            .min(self.max_length);

        let mut input_ids = vec![0i64; batch_size * max_len];
        let mut attention_mask = vec![0i64; batch_size * max_len];
        let mut token_type_ids = vec![0i64; batch_size * max_len];

        for (i, encoding) in encodings.iter().enumerate() {
            let ids = encoding.get_ids();
            let mask = encoding.get_attention_mask();
            let types = encoding.get_type_ids();

            let len = ids.len().min(max_len);

            for j in 0..len {
                input_ids[i * max_len + j] = ids[j] as i64;
                attention_mask[i * max_len + j] = mask[j] as i64;
                token_type_ids[i * max_len + j] = types[j] as i64;
            }
        }

        let input_ids_tensor = Tensor::from_array((
            vec![batch_size, max_len],
            input_ids.into_boxed_slice(),
        ))
        .map_err(|e| Error::embedding(format!("Input tensor creation failed: {}", e)))?;

        let attention_mask_tensor = Tensor::from_array((
            vec![batch_size, max_len],
            attention_mask.clone().into_boxed_slice(),
        ))
        .map_err(|e| Error::embedding(format!("Attention mask tensor creation failed: {}", e)))?;

        let token_type_ids_tensor = Tensor::from_array((
            vec![batch_size, max_len],
            token_type_ids.into_boxed_slice(),
        ))
        .map_err(|e| Error::embedding(format!("Token type tensor creation failed: {}", e)))?;

        let inputs = vec![
            ("input_ids", input_ids_tensor.into_dyn()),
            ("attention_mask", attention_mask_tensor.into_dyn()),
            ("token_type_ids", token_type_ids_tensor.into_dyn()),
        ];

        let mut session = self.session.lock();
        let outputs = session
            .run(inputs)
            .map_err(|e| Error::embedding(format!("Inference failed: {}", e)))?;

        // last_hidden_state, or the first output for exports that rename it
        let output_iter: Vec<_> = outputs.iter().collect();
        let output = output_iter
            .iter()
            .find(|(name, _)| *name == "last_hidden_state")
            .or_else(|| output_iter.first())
            .map(|(_, v)| v)
            .ok_or_else(|| Error::embedding("No output tensor"))?;

        let (tensor_shape, tensor_data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| Error::embedding(format!("Failed to extract tensor: {}", e)))?;

        let dims: Vec<usize> = tensor_shape.iter().map(|&d| d as usize).collect();
        let hidden_size = dims.get(2).copied().unwrap_or(self.dimensions);

        if hidden_size != self.dimensions {
            return Err(Error::embedding(format!(
                "Model {} produced {}-dimensional vectors, expected {}",
                self.model, hidden_size, self.dimensions
            )));
        }

        let mut embeddings = Vec::with_capacity(batch_size);

        for i in 0..batch_size {
            let mut sum = vec![0.0f32; hidden_size];
            let mut count = 0.0f32;

            // Mean pooling over attended tokens
            for j in 0..max_len {
                let mask_val = attention_mask[i * max_len + j] as f32;
                if mask_val > 0.0 {
                    for (k, acc) in sum.iter_mut().enumerate() {
                        let idx = i * max_len * hidden_size + j * hidden_size + k;
                        if let Some(value) = tensor_data.get(idx) {
                            *acc += value * mask_val;
                        }
                    }
                    count += mask_val;
                }
            }

            if count > 0.0 {
                for val in &mut sum {
                    *val /= count;
                }
            }

            super::l2_normalize(&mut sum);
            embeddings.push(sum);
        }

        Ok(embeddings)
    }
}

impl EmbeddingProvider for OnnxEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut all_embeddings = Vec::with_capacity(texts.len());
        for batch in texts.chunks(self.batch_size) {
            all_embeddings.extend(self.embed_batch_internal(batch)?);
        }

        Ok(all_embeddings)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Loads sentence-transformers models into [`OnnxEmbedder`]s
pub struct OnnxModelLoader {
    config: EmbeddingConfig,
}

impl OnnxModelLoader {
    pub fn new(config: EmbeddingConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EmbeddingModelLoader for OnnxModelLoader {
    async fn load(&self, model: &str) -> Result<Arc<dyn EmbeddingProvider>> {
        let embedder = OnnxEmbedder::new(model, &self.config).await?;
        Ok(Arc::new(embedder))
    }

    fn name(&self) -> &str {
        "onnx"
    }
}

/// Download one file of a sentence-transformers model from HuggingFace
async fn download_file(model_name: &str, remote_path: &str, path: &Path) -> Result<()> {
    let url = model_url(model_name, remote_path);

    tracing::info!("Downloading {} from: {}", remote_path, url);

    let response = reqwest::get(&url)
        .await
        .map_err(|e| Error::embedding(format!("Failed to download {}: {}", remote_path, e)))?;

    if !response.status().is_success() {
        return Err(Error::embedding(format!(
            "Download of {} failed: HTTP {}",
            remote_path,
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::embedding(format!("Failed to read {} bytes: {}", remote_path, e)))?;

    // Write then rename so an interrupted download never looks cached
    let partial: PathBuf = path.with_extension("partial");
    std::fs::write(&partial, &bytes)?;
    std::fs::rename(&partial, path)?;

    tracing::info!("Downloaded {} ({} bytes)", remote_path, bytes.len());

    Ok(())
}

fn model_url(model_name: &str, remote_path: &str) -> String {
    format!(
        "https://huggingface.co/sentence-transformers/{}/resolve/main/{}",
        model_name, remote_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_url() {
        assert_eq!(
            model_url("all-MiniLM-L6-v2", "onnx/model.onnx"),
            "https://huggingface.co/sentence-transformers/all-MiniLM-L6-v2/resolve/main/onnx/model.onnx"
        );
    }
}
