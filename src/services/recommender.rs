use std::sync::Arc;

use crate::catalog::SimilarityMatrix;
use crate::models::RankedRecommendation;

/// How many recommendations a query returns by default
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Ranks catalog entries against a query movie using the precomputed
/// similarity matrix.
#[derive(Clone)]
pub struct Recommender {
    matrix: Arc<SimilarityMatrix>,
}

impl Recommender {
    pub fn new(matrix: Arc<SimilarityMatrix>) -> Self {
        Self { matrix }
    }

    /// Returns the top `k` entries most similar to `index`, best first.
    ///
    /// The query movie itself is never included, so at most `N - 1` entries
    /// come back. Ties break by ascending catalog index: the row is
    /// enumerated in index order and the sort is stable.
    pub fn recommend(&self, index: usize, k: usize) -> Vec<RankedRecommendation> {
        let Some(row) = self.matrix.row(index) else {
            return Vec::new();
        };

        let mut ranked: Vec<RankedRecommendation> = row
            .iter()
            .enumerate()
            .map(|(candidate, &score)| RankedRecommendation {
                index: candidate,
                score,
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.retain(|candidate| candidate.index != index);
        ranked.truncate(k);
        ranked
    }
}
