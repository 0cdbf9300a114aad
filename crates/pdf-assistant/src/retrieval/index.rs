//! Exact nearest-neighbour index over chunk embeddings
//!
//! Vectors are stored contiguously; identifier `i` is the `i`-th vector given
//! to [`FlatIndex::build`]. Search is exhaustive Euclidean distance, ordered by
//! ascending distance with ties going to the lower identifier.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// A search hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the vector in build order
    pub id: usize,
    /// Euclidean (L2) distance to the query
    pub distance: f32,
}

/// Flat (brute-force) L2 index
#[derive(Debug, Clone)]
pub struct FlatIndex {
    /// Vector dimension, 0 for an index built from zero vectors
    dimension: usize,
    /// Row-major vector storage, `len * dimension` values
    data: Vec<f32>,
    /// Number of indexed vectors
    len: usize,
}

impl FlatIndex {
    /// Build an index over `vectors`, preserving their order as identifiers
    pub fn build(vectors: &[Vec<f32>]) -> Result<Self> {
        let dimension = vectors.first().map(Vec::len).unwrap_or(0);

        if !vectors.is_empty() && dimension == 0 {
            return Err(Error::invalid_argument("cannot index zero-length vectors"));
        }

        let mut data = Vec::with_capacity(vectors.len() * dimension);
        for (id, vector) in vectors.iter().enumerate() {
            if vector.len() != dimension {
                return Err(Error::invalid_argument(format!(
                    "vector {} has dimension {}, expected {}",
                    id,
                    vector.len(),
                    dimension
                )));
            }
            data.extend_from_slice(vector);
        }

        Ok(Self {
            dimension,
            data,
            len: vectors.len(),
        })
    }

    /// Number of indexed vectors
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no vectors
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Vector dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Stored vector for an identifier
    pub fn vector(&self, id: usize) -> Option<&[f32]> {
        (id < self.len).then(|| &self.data[id * self.dimension..(id + 1) * self.dimension])
    }

    /// The `top_k` nearest vectors to `query`, nearest first.
    ///
    /// Returns every vector when `top_k` exceeds the index size.
    pub fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<Neighbor>> {
        if self.is_empty() {
            return Err(Error::EmptyIndex);
        }
        if top_k == 0 {
            return Err(Error::invalid_argument("top_k must be positive"));
        }
        if query.len() != self.dimension {
            return Err(Error::invalid_argument(format!(
                "query has dimension {}, index has {}",
                query.len(),
                self.dimension
            )));
        }

        let mut scored: Vec<(usize, f32)> = self
            .data
            .chunks_exact(self.dimension)
            .enumerate()
            .map(|(id, vector)| (id, euclidean_distance_squared(query, vector)))
            .collect();

        scored.sort_by(compare_hits);
        scored.truncate(top_k);

        Ok(scored
            .into_iter()
            .map(|(id, squared)| Neighbor {
                id,
                distance: squared.sqrt(),
            })
            .collect())
    }
}

/// Ascending distance, then ascending identifier
fn compare_hits(a: &(usize, f32), b: &(usize, f32)) -> Ordering {
    a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0))
}

/// Squared L2 distance; callers guarantee equal lengths
pub fn euclidean_distance_squared(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    let n = a.len().min(b.len());
    let mut sum = 0.0f32;
    let mut i = 0;

    // Unrolling 4
    while i + 3 < n {
        let d0 = a[i] - b[i];
        let d1 = a[i + 1] - b[i + 1];
        let d2 = a[i + 2] - b[i + 2];
        let d3 = a[i + 3] - b[i + 3];
        sum += d0 * d0 + d1 * d1 + d2 * d2 + d3 * d3;
        i += 4;
    }

    while i < n {
        let d = a[i] - b[i];
        sum += d * d;
        i += 1;
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_index() -> FlatIndex {
        FlatIndex::build(&[
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 2.0],
            vec![3.0, 4.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_nearest_first() {
        let hits = sample_index().search(&[0.9, 0.1], 2).unwrap();
        assert_eq!(hits.iter().map(|h| h.id).collect::<Vec<_>>(), vec![1, 0]);
    }

    #[test]
    fn test_exact_match_distance_zero() {
        let index = sample_index();
        let hits = index.search(&[3.0, 4.0], 1).unwrap();
        assert_eq!(hits[0].id, 3);
        assert!(hits[0].distance.abs() < 1e-6);
        assert!((index.search(&[0.0, 0.0], 4).unwrap()[3].distance - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_ties_prefer_lower_id() {
        let index = FlatIndex::build(&[
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![-1.0, 0.0],
            vec![0.0, -1.0],
        ])
        .unwrap();

        let hits = index.search(&[0.0, 0.0], 4).unwrap();
        assert_eq!(hits.iter().map(|h| h.id).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_top_k_larger_than_index() {
        let hits = sample_index().search(&[0.0, 0.0], 10).unwrap();
        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_empty_index() {
        let index = FlatIndex::build(&[]).unwrap();
        assert!(index.is_empty());
        assert!(matches!(index.search(&[1.0], 3), Err(Error::EmptyIndex)));
    }

    #[test]
    fn test_dimension_checks() {
        assert!(matches!(
            FlatIndex::build(&[vec![1.0, 2.0], vec![1.0]]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            sample_index().search(&[1.0, 2.0, 3.0], 1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            sample_index().search(&[1.0, 2.0], 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_vector_lookup() {
        let index = sample_index();
        assert_eq!(index.vector(2), Some(&[0.0f32, 2.0][..]));
        assert_eq!(index.vector(4), None);
    }

    proptest! {
        #[test]
        fn prop_full_search_is_sorted_permutation(
            vectors in prop::collection::vec(prop::collection::vec(-1.0f32..1.0, 8), 1..40),
            query in prop::collection::vec(-1.0f32..1.0, 8),
        ) {
            let index = FlatIndex::build(&vectors).unwrap();
            let hits = index.search(&query, vectors.len()).unwrap();

            let mut ids: Vec<usize> = hits.iter().map(|h| h.id).collect();
            ids.sort_unstable();
            prop_assert_eq!(ids, (0..vectors.len()).collect::<Vec<_>>());

            for pair in hits.windows(2) {
                prop_assert!(pair[0].distance <= pair[1].distance);
            }
        }

        #[test]
        fn prop_indexed_vector_finds_itself(
            vectors in prop::collection::vec(prop::collection::vec(-1.0f32..1.0, 6), 1..30),
            pick in any::<prop::sample::Index>(),
        ) {
            let index = FlatIndex::build(&vectors).unwrap();
            let target = pick.index(vectors.len());
            let hit = index.search(&vectors[target], 1).unwrap()[0];

            prop_assert!(hit.distance.abs() < 1e-6);
            // Duplicates may win with a lower id, never a different vector
            prop_assert_eq!(index.vector(hit.id).unwrap(), &vectors[target][..]);
        }
    }
}
