//! Ingestion and query-time retrieval over the flat index

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;
use crate::session::Session;

use super::index::FlatIndex;

/// Default number of chunks retrieved per question
pub const DEFAULT_TOP_K: usize = 3;

/// Embed all chunks in one batch and build the index over the vectors.
///
/// Returns the index together with the embedder that produced it; queries
/// against this index must use the same embedder.
pub fn ingest(
    chunks: &[String],
    embedder: Arc<dyn EmbeddingProvider>,
) -> Result<(FlatIndex, Arc<dyn EmbeddingProvider>)> {
    let vectors = embedder.embed(chunks)?;

    if vectors.len() != chunks.len() {
        return Err(Error::embedding(format!(
            "{} returned {} vectors for {} chunks",
            embedder.model_name(),
            vectors.len(),
            chunks.len()
        )));
    }

    let index = FlatIndex::build(&vectors)?;

    tracing::debug!(
        "Indexed {} chunks ({} dimensions) with {}",
        index.len(),
        index.dimension(),
        embedder.model_name()
    );

    Ok((index, embedder))
}

/// The `top_k` chunks nearest to `question`, nearest first
pub fn retrieve(session: Option<&Session>, question: &str, top_k: usize) -> Result<Vec<String>> {
    let session = session.ok_or(Error::IndexNotReady)?;

    let query = session.embedder().embed_one(question)?;
    let hits = session.index().search(&query, top_k)?;

    hits.into_iter()
        .map(|hit| {
            session
                .chunks()
                .get(hit.id)
                .cloned()
                .ok_or_else(|| Error::internal(format!("index returned unknown id {}", hit.id)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::FeatureHashEmbedder;

    fn embedder() -> Arc<dyn EmbeddingProvider> {
        Arc::new(FeatureHashEmbedder::new(128).unwrap())
    }

    fn session(chunks: &[&str]) -> Session {
        let chunks: Vec<String> = chunks.iter().map(|c| c.to_string()).collect();
        let (index, embedder) = ingest(&chunks, embedder()).unwrap();
        Session::new(chunks, embedder, index).unwrap()
    }

    #[test]
    fn test_index_matches_chunk_order() {
        let chunks = vec!["alpha beta".to_string(), "gamma delta".to_string()];
        let (index, embedder) = ingest(&chunks, embedder()).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.vector(1).unwrap(), &embedder.embed_one("gamma delta").unwrap()[..]);
    }

    #[test]
    fn test_retrieve_nearest_chunk_first() {
        let session = session(&[
            "invoices are paid within thirty days",
            "the cat sat on the mat",
            "rockets need fuel and oxygen",
        ]);

        let results = retrieve(Some(&session), "where did the cat sit", 3).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], "the cat sat on the mat");
        assert!(results.iter().all(|r| session.chunks().contains(r)));
    }

    #[test]
    fn test_retrieve_capped_by_available_chunks() {
        let session = session(&["only chunk"]);
        let results = retrieve(Some(&session), "anything", DEFAULT_TOP_K).unwrap();
        assert_eq!(results, vec!["only chunk".to_string()]);
    }

    #[test]
    fn test_retrieve_without_session() {
        assert!(matches!(
            retrieve(None, "question", 3),
            Err(Error::IndexNotReady)
        ));
    }

    #[test]
    fn test_retrieve_on_empty_document() {
        let session = session(&[]);
        assert!(matches!(
            retrieve(Some(&session), "question", 3),
            Err(Error::EmptyIndex)
        ));
    }

    #[test]
    fn test_reingest_is_idempotent() {
        let chunks = ["one two three", "four five six", "seven eight nine"];
        let first = retrieve(Some(&session(&chunks)), "five", 3).unwrap();
        let second = retrieve(Some(&session(&chunks)), "five", 3).unwrap();
        assert_eq!(first, second);
    }

    struct ShortEmbedder;

    impl EmbeddingProvider for ShortEmbedder {
        fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(vec![vec![1.0]])
        }

        fn dimensions(&self) -> usize {
            1
        }

        fn model_name(&self) -> &str {
            "short"
        }
    }

    #[test]
    fn test_vector_count_mismatch_is_embedding_failure() {
        let chunks = vec!["a".to_string(), "b".to_string()];
        assert!(matches!(
            ingest(&chunks, Arc::new(ShortEmbedder)),
            Err(Error::EmbeddingFailed(_))
        ));
    }
}
