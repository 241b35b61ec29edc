use serde::{Deserialize, Serialize};

/// Normalizes a title for matching: leading/trailing whitespace stripped,
/// case folded to lowercase.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// One row of the catalog artifact as it appears on disk
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// TMDB identifier for the movie
    pub id: u64,
    pub title: String,
}

/// A movie known to the service
///
/// `normalized_title` is derived from `title` once at load and is the only
/// form lookups compare against.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    pub normalized_title: String,
}

impl From<CatalogEntry> for MovieRecord {
    fn from(entry: CatalogEntry) -> Self {
        let normalized_title = normalize_title(&entry.title);
        MovieRecord {
            id: entry.id,
            title: entry.title,
            normalized_title,
        }
    }
}

/// A candidate produced by ranking a similarity row, before enrichment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRecommendation {
    /// Catalog index of the candidate
    pub index: usize,
    pub score: f32,
}

/// One recommendation as returned to the client
///
/// `poster` serializes as JSON `null` when the metadata lookup came back
/// empty or failed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedRecommendation {
    pub title: String,
    pub poster: Option<String>,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Response body of TMDB's GET /movie/{id}, reduced to the field we read
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title_trims_and_lowercases() {
        assert_eq!(normalize_title("  Inception "), "inception");
        assert_eq!(normalize_title("AVATAR"), "avatar");
        assert_eq!(normalize_title("up"), "up");
    }

    #[test]
    fn test_normalize_title_is_idempotent() {
        let once = normalize_title(" The Dark Knight ");
        assert_eq!(normalize_title(&once), once);
    }

    #[test]
    fn test_movie_record_derives_normalized_title() {
        let entry = CatalogEntry {
            id: 27205,
            title: " Inception ".to_string(),
        };

        let record = MovieRecord::from(entry);
        assert_eq!(record.id, 27205);
        assert_eq!(record.title, " Inception ");
        assert_eq!(record.normalized_title, "inception");
    }

    #[test]
    fn test_catalog_entry_deserialization() {
        let json = r#"{ "id": 19995, "title": "Avatar" }"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 19995);
        assert_eq!(entry.title, "Avatar");
    }

    #[test]
    fn test_enriched_recommendation_serializes_missing_poster_as_null() {
        let recommendation = EnrichedRecommendation {
            title: "Up".to_string(),
            poster: None,
        };

        let json = serde_json::to_string(&recommendation).unwrap();
        assert_eq!(json, r#"{"title":"Up","poster":null}"#);
    }

    #[test]
    fn test_enriched_recommendation_serializes_poster_url() {
        let recommendation = EnrichedRecommendation {
            title: "Inception".to_string(),
            poster: Some("https://image.tmdb.org/t/p/w500/inception.jpg".to_string()),
        };

        let json = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(json["title"], "Inception");
        assert_eq!(
            json["poster"],
            "https://image.tmdb.org/t/p/w500/inception.jpg"
        );
    }

    #[test]
    fn test_movie_details_with_poster_path() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "poster_path": "/onE2OosgiHdjYXPoAD62sf0XsVa.jpg"
        }"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(
            details.poster_path,
            Some("/onE2OosgiHdjYXPoAD62sf0XsVa.jpg".to_string())
        );
    }

    #[test]
    fn test_movie_details_without_poster_path() {
        let json = r#"{ "id": 27205, "title": "Inception" }"#;
        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.poster_path, None);
    }

    #[test]
    fn test_movie_details_with_null_poster_path() {
        let json = r#"{ "poster_path": null }"#;
        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.poster_path, None);
    }
}
