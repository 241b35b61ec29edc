pub mod enrichment;
pub mod query;
pub mod recommender;

pub use enrichment::{PosterProvider, TmdbClient};
pub use query::QueryService;
pub use recommender::Recommender;
