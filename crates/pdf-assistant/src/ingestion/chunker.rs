//! Word-count text chunking

use crate::error::{Error, Result};

/// Default number of words per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Splits text into consecutive, non-overlapping groups of words
#[derive(Debug, Clone, Copy)]
pub struct TextChunker {
    /// Words per chunk
    chunk_size: usize,
}

impl TextChunker {
    /// Create a new chunker; `chunk_size` must be positive
    pub fn new(chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::invalid_argument("chunk_size must be positive"));
        }
        Ok(Self { chunk_size })
    }

    /// Words per chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Chunk text into groups of `chunk_size` whitespace-delimited words.
    ///
    /// Words are re-joined with single spaces. Only the final chunk may hold
    /// fewer words; empty text yields no chunks.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        words
            .chunks(self.chunk_size)
            .map(|group| group.join(" "))
            .collect()
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Chunk `text` with the given chunk size
pub fn chunk_text(text: &str, chunk_size: usize) -> Result<Vec<String>> {
    Ok(TextChunker::new(chunk_size)?.chunk(text))
}
