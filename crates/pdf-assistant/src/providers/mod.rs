//! Collaborator abstractions for embedding and text generation
//!
//! The retrieval core talks to external models only through these traits, so
//! the ONNX embedder and the Gemini client can be swapped for local stand-ins.

pub mod embedding;
pub mod gemini;
pub mod llm;

pub use embedding::{EmbeddingModelLoader, EmbeddingProvider};
pub use gemini::GeminiClient;
pub use llm::GenerativeProvider;
