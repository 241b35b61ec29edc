use std::sync::Arc;

use crate::catalog::{Catalog, SimilarityMatrix};
use crate::services::enrichment::PosterProvider;
use crate::services::query::QueryService;
use crate::services::recommender::Recommender;

/// Shared application state
///
/// Built once at startup from the loaded artifacts and injected into every
/// handler. Everything inside is read-only after construction, so it is
/// shared across requests without locking.
#[derive(Clone)]
pub struct AppState {
    pub queries: QueryService,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        matrix: SimilarityMatrix,
        posters: Arc<dyn PosterProvider>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let recommender = Recommender::new(Arc::new(matrix));

        Self {
            queries: QueryService::new(catalog, recommender, posters),
        }
    }
}
