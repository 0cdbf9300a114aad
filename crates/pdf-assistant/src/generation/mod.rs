//! Answer generation from retrieved chunks

pub mod prompt;

use std::sync::Arc;

pub use prompt::PromptBuilder;

use crate::error::{Error, Result};
use crate::providers::GenerativeProvider;

/// Formats retrieved chunks and the question, then asks the generative model
#[derive(Clone)]
pub struct AnswerGenerator {
    provider: Arc<dyn GenerativeProvider>,
}

impl AnswerGenerator {
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self { provider }
    }

    /// Generate an answer; the model's text is returned unmodified.
    ///
    /// One call, no retries. Any provider failure surfaces as `GenerationFailed`.
    pub async fn generate(&self, question: &str, relevant_chunks: &[String]) -> Result<String> {
        let prompt = PromptBuilder::build_answer_prompt(question, relevant_chunks);

        tracing::debug!(
            "Generating answer with {} ({} chunks, {} prompt chars)",
            self.provider.model(),
            relevant_chunks.len(),
            prompt.len()
        );

        self.provider.generate(&prompt).await.map_err(|e| match e {
            Error::GenerationFailed(_) => e,
            other => Error::generation(other.to_string()),
        })
    }

    /// Underlying provider
    pub fn provider(&self) -> &Arc<dyn GenerativeProvider> {
        &self.provider
    }
}
