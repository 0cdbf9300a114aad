//! Gemini client for answer generation via the Generative Language API

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::GenerationConfig;
use crate::error::{Error, Result};
use crate::providers::llm::GenerativeProvider;

/// Gemini client authenticated with an API key
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Create a new Gemini client from configuration
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        if config.api_key.is_none() {
            tracing::warn!("GOOGLE_API_KEY is not set; questions will fail until it is configured");
        }

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Get the API endpoint URL
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn request_body(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationSettings {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        }
    }
}

#[derive(serde::Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationSettings,
}

#[derive(serde::Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(serde::Serialize)]
struct Part {
    text: String,
}

#[derive(serde::Serialize)]
struct GenerationSettings {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(serde::Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(serde::Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(serde::Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Text of the first candidate, all parts concatenated
    fn into_text(self) -> Result<String> {
        let content = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .ok_or_else(|| Error::generation("No candidates in Gemini response"))?;

        if content.parts.is_empty() {
            return Err(Error::generation("No text in Gemini response"));
        }

        Ok(content.parts.into_iter().map(|p| p.text).collect())
    }
}

#[async_trait]
impl GenerativeProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::generation("GOOGLE_API_KEY is not configured"))?;

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| Error::generation(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::generation(format!(
                "Gemini generation failed ({}): {}",
                status, body
            )));
        }

        let gen_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::generation(format!("Failed to parse Gemini response: {}", e)))?;

        gen_response.into_text()
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_generation() {
        let config = GenerationConfig {
            base_url: "https://example.test/".to_string(),
            ..GenerationConfig::default()
        };
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let client = GeminiClient::new(&GenerationConfig::default()).unwrap();
        let body = serde_json::to_value(client.request_body("hello")).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn test_response_parts_concatenated() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"The cat "},{"text":"sat."}],"role":"model"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "The cat sat.");
    }

    #[test]
    fn test_blocked_response_is_generation_failure() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(matches!(response.into_text(), Err(Error::GenerationFailed(_))));
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let client = GeminiClient::new(&GenerationConfig::default()).unwrap();
        let result = client.generate("prompt").await;
        assert!(matches!(result, Err(Error::GenerationFailed(_))));
    }
}
