//! pdf-assistant: question answering over a single uploaded PDF
//!
//! An uploaded PDF is turned into plain text, split into fixed-size word
//! chunks, embedded, and indexed in an exact nearest-neighbour index. Each
//! question retrieves the closest chunks and a generative model answers from
//! them alone. One document is active at a time; uploading another replaces it.

pub mod config;
pub mod embeddings;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod session;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use session::{Session, SessionStore};
pub use types::{AskRequest, AskResponse, IngestResponse};
