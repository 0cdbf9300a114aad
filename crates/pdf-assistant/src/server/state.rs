//! Application state for the assistant server

use std::sync::Arc;

use crate::config::RagConfig;
use crate::embeddings::{self, EmbedderCache};
use crate::error::{Error, Result};
use crate::generation::AnswerGenerator;
use crate::ingestion::{LopdfPageExtractor, PageExtractor, TextChunker, TextExtractor};
use crate::providers::{EmbeddingModelLoader, GeminiClient, GenerativeProvider};
use crate::retrieval;
use crate::session::{Session, SessionStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: RagConfig,
    /// Current document's retrieval artifacts
    sessions: SessionStore,
    /// Embedding models loaded so far
    embedders: EmbedderCache,
    /// PDF text extraction
    extractor: TextExtractor,
    /// Word chunker
    chunker: TextChunker,
    /// Answer generation
    generator: AnswerGenerator,
}

impl AppState {
    /// Create application state with the configured providers
    pub fn new(config: RagConfig) -> Result<Self> {
        tracing::info!(
            "Initializing application state (embeddings: {:?} {}, llm: {})",
            config.embeddings.provider,
            config.embeddings.model,
            config.generation.model
        );

        let loader = embeddings::loader_from_config(&config.embeddings);
        let llm = Arc::new(GeminiClient::new(&config.generation)?);

        Self::with_components(config, Arc::new(LopdfPageExtractor), loader, llm)
    }

    /// Create application state from explicit collaborators
    pub fn with_components(
        config: RagConfig,
        page_extractor: Arc<dyn PageExtractor>,
        loader: Arc<dyn EmbeddingModelLoader>,
        llm: Arc<dyn GenerativeProvider>,
    ) -> Result<Self> {
        config.validate()?;
        let chunker = TextChunker::new(config.chunking.chunk_size)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                sessions: SessionStore::new(),
                embedders: EmbedderCache::new(loader),
                extractor: TextExtractor::new(page_extractor),
                chunker,
                generator: AnswerGenerator::new(llm),
            }),
        })
    }

    /// Get configuration
    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    /// Get the session store
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    /// Get the answer generator
    pub fn generator(&self) -> &AnswerGenerator {
        &self.inner.generator
    }

    /// Check if a document is ready for questions
    pub fn is_ready(&self) -> bool {
        self.inner.sessions.is_ready()
    }

    /// Extract, chunk, embed and index a PDF, then make it the active document.
    ///
    /// Fails with `IngestionInProgress` while another upload is being processed.
    /// On any failure the previous session stays in place.
    pub async fn ingest_document(&self, data: Vec<u8>) -> Result<Arc<Session>> {
        let permit = self.inner.sessions.begin_ingest()?;

        let extractor = self.inner.extractor.clone();
        let chunker = self.inner.chunker;
        let chunks = run_blocking(move || {
            let text = extractor.extract(&data)?;
            Ok(chunker.chunk(&text))
        })
        .await?;

        let embedder = self
            .inner
            .embedders
            .get(&self.inner.config.embeddings.model)
            .await?;

        let session = run_blocking(move || {
            let (index, embedder) = retrieval::ingest(&chunks, embedder)?;
            Session::new(chunks, embedder, index)
        })
        .await?;

        let session = self.inner.sessions.replace(&permit, session);

        tracing::info!(
            "Indexed PDF: {} chunks, {} dimensions",
            session.chunks().len(),
            session.index().dimension()
        );
        if session.chunks().is_empty() {
            tracing::warn!("PDF produced no text; questions will fail until another PDF is uploaded");
        }

        Ok(session)
    }

    /// Retrieve the chunks nearest to `question` in the active document
    pub async fn retrieve(&self, question: &str) -> Result<Vec<String>> {
        let session = self.inner.sessions.current();
        let question = question.to_string();
        let top_k = self.inner.config.retrieval.top_k;

        run_blocking(move || retrieval::retrieve(session.as_deref(), &question, top_k)).await
    }

    /// Answer a question from the active document
    pub async fn answer(&self, question: &str) -> Result<String> {
        let chunks = self.retrieve(question).await?;
        self.inner.generator.generate(question, &chunks).await
    }
}

/// Run CPU-bound or blocking work off the async executor
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Internal(format!("Task join error: {}", e)))?
}
