//! Vector index and chunk retrieval

mod index;
mod retriever;

pub use index::{euclidean_distance_squared, FlatIndex, Neighbor};
pub use retriever::{ingest, retrieve, DEFAULT_TOP_K};
