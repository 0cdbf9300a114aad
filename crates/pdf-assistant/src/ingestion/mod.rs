//! Document ingestion: PDF text extraction and chunking

mod chunker;
mod extractor;

pub use chunker::{chunk_text, TextChunker, DEFAULT_CHUNK_SIZE};
pub use extractor::{LopdfPageExtractor, PageExtractor, TextExtractor};

#[cfg(test)]
pub(crate) use extractor::tests::{build_pdf, FixedPages};
