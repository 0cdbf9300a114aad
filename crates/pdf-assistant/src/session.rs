//! Session state: retrieval artifacts of the one active document
//!
//! A [`Session`] is immutable once built. [`SessionStore`] holds at most one and
//! replaces it with a single pointer swap, so a reader sees either the old or
//! the new bundle in full. Replacing the session discards the previous
//! document; requests that already cloned the old `Arc` finish against it.

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;
use crate::retrieval::FlatIndex;

/// Chunks, the embedder that indexed them, and their vector index
pub struct Session {
    chunks: Vec<String>,
    embedder: Arc<dyn EmbeddingProvider>,
    index: FlatIndex,
}

impl Session {
    /// Bundle ingestion results; the index must hold one vector per chunk
    pub fn new(
        chunks: Vec<String>,
        embedder: Arc<dyn EmbeddingProvider>,
        index: FlatIndex,
    ) -> Result<Self> {
        if chunks.len() != index.len() {
            return Err(Error::internal(format!(
                "index holds {} vectors for {} chunks",
                index.len(),
                chunks.len()
            )));
        }
        Ok(Self {
            chunks,
            embedder,
            index,
        })
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn embedder(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.embedder
    }

    pub fn index(&self) -> &FlatIndex {
        &self.index
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("chunks", &self.chunks.len())
            .field("embedder", &self.embedder.model_name())
            .field("dimension", &self.index.dimension())
            .finish()
    }
}

/// Holder of the current session
#[derive(Default)]
pub struct SessionStore {
    current: RwLock<Option<Arc<Session>>>,
    ingest_gate: Mutex<()>,
}

/// Exclusive right to replace the session, held for one ingestion
pub struct IngestPermit<'a> {
    _guard: MutexGuard<'a, ()>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current session, if any
    pub fn current(&self) -> Option<Arc<Session>> {
        self.current.read().clone()
    }

    /// Whether a document has been ingested
    pub fn is_ready(&self) -> bool {
        self.current.read().is_some()
    }

    /// Claim the ingestion slot, failing if another ingestion holds it
    pub fn begin_ingest(&self) -> Result<IngestPermit<'_>> {
        let guard = self
            .ingest_gate
            .try_lock()
            .map_err(|_| Error::IngestionInProgress)?;
        Ok(IngestPermit { _guard: guard })
    }

    /// Install a new session, dropping the previous one
    pub fn replace(&self, _permit: &IngestPermit<'_>, session: Session) -> Arc<Session> {
        let session = Arc::new(session);
        *self.current.write() = Some(Arc::clone(&session));
        session
    }
}
