//! Generative model provider trait

use async_trait::async_trait;
use crate::error::Result;

/// Trait for prompt completion by a generative language model
///
/// Implementations:
/// - `GeminiClient`: Google Generative Language API (gemini-1.5-flash)
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Complete the prompt, returning the model's raw text
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
