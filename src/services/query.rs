use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};
use crate::models::EnrichedRecommendation;
use crate::services::enrichment::PosterProvider;
use crate::services::recommender::{Recommender, DEFAULT_RECOMMENDATIONS};

/// Orchestrates a recommendation request: title lookup, ranking, poster
/// enrichment.
#[derive(Clone)]
pub struct QueryService {
    catalog: Arc<Catalog>,
    recommender: Recommender,
    posters: Arc<dyn PosterProvider>,
}

impl QueryService {
    pub fn new(
        catalog: Arc<Catalog>,
        recommender: Recommender,
        posters: Arc<dyn PosterProvider>,
    ) -> Self {
        Self {
            catalog,
            recommender,
            posters,
        }
    }

    /// Top recommendations for a raw query title, each with its poster.
    ///
    /// Poster lookups fan out in parallel and the join handles are awaited in
    /// rank order, so the response stays sorted by descending similarity. A
    /// failed lookup only nulls out that item's poster.
    pub async fn recommend_with_posters(
        &self,
        raw_query: &str,
    ) -> AppResult<Vec<EnrichedRecommendation>> {
        let index = self
            .catalog
            .find_index_by_title(raw_query)
            .ok_or_else(|| {
                AppError::NotFound(format!("no movie matching '{}'", raw_query.trim()))
            })?;

        let ranked = self.recommender.recommend(index, DEFAULT_RECOMMENDATIONS);

        let mut tasks = Vec::with_capacity(ranked.len());
        for candidate in &ranked {
            let record = self.catalog.get(candidate.index).ok_or_else(|| {
                AppError::Internal(format!(
                    "ranked index {} outside catalog",
                    candidate.index
                ))
            })?;

            let posters = Arc::clone(&self.posters);
            let movie_id = record.id;
            let title = record.title.clone();
            tasks.push((
                title,
                tokio::spawn(async move { posters.fetch_poster(movie_id).await }),
            ));
        }

        let mut recommendations = Vec::with_capacity(tasks.len());
        for (title, task) in tasks {
            let poster = match task.await {
                Ok(poster) => poster,
                Err(e) => {
                    tracing::error!(error = %e, "Poster task join error");
                    None
                }
            };
            recommendations.push(EnrichedRecommendation { title, poster });
        }

        tracing::info!(
            query = %raw_query.trim(),
            results = recommendations.len(),
            "Recommendation request served"
        );

        Ok(recommendations)
    }

    /// All catalog titles, in catalog order
    pub fn list_titles(&self) -> Vec<String> {
        self.catalog.titles()
    }
}
