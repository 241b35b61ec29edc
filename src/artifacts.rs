//! Startup loading of the two recommendation artifacts.
//!
//! The catalog and the similarity matrix are built offline and shipped as a
//! matched pair; this module loads them, fetching the similarity artifact
//! from its object-store URL if it is missing locally. Any failure here is
//! fatal: the caller must not serve traffic without both artifacts.

use std::path::Path;

use crate::catalog::{validate_pair, Catalog, SimilarityMatrix};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::CatalogEntry;

/// Loads both artifacts and validates them as a pair.
pub async fn load(config: &Config) -> AppResult<(Catalog, SimilarityMatrix)> {
    ensure_similarity_artifact(
        Path::new(&config.similarity_path),
        &config.similarity_url,
    )
    .await?;

    let catalog = load_catalog(Path::new(&config.catalog_path)).await?;
    let matrix = load_similarity(Path::new(&config.similarity_path)).await?;
    validate_pair(&catalog, &matrix)?;

    tracing::info!(movies = catalog.len(), "Recommendation artifacts loaded");

    Ok((catalog, matrix))
}

/// Downloads the similarity artifact if it is not already on disk.
async fn ensure_similarity_artifact(path: &Path, url: &str) -> AppResult<()> {
    if tokio::fs::try_exists(path).await? {
        return Ok(());
    }

    tracing::info!(
        url = %url,
        path = %path.display(),
        "Similarity artifact missing locally, downloading"
    );

    let response = reqwest::get(url).await?;

    if !response.status().is_success() {
        return Err(AppError::Artifact(format!(
            "similarity artifact download returned status {}",
            response.status()
        )));
    }

    let bytes = response.bytes().await?;
    tokio::fs::write(path, &bytes).await?;

    tracing::info!(bytes = bytes.len(), "Similarity artifact downloaded");

    Ok(())
}

async fn load_catalog(path: &Path) -> AppResult<Catalog> {
    let raw = tokio::fs::read(path).await.map_err(|e| {
        AppError::Artifact(format!("failed to read catalog {}: {}", path.display(), e))
    })?;

    let entries: Vec<CatalogEntry> = serde_json::from_slice(&raw).map_err(|e| {
        AppError::Artifact(format!("catalog {} is not valid JSON: {}", path.display(), e))
    })?;

    if entries.is_empty() {
        return Err(AppError::Artifact(format!(
            "catalog {} contains no movies",
            path.display()
        )));
    }

    Ok(Catalog::new(entries))
}

async fn load_similarity(path: &Path) -> AppResult<SimilarityMatrix> {
    let raw = tokio::fs::read(path).await.map_err(|e| {
        AppError::Artifact(format!(
            "failed to read similarity matrix {}: {}",
            path.display(),
            e
        ))
    })?;

    let rows: Vec<Vec<f32>> = serde_json::from_slice(&raw).map_err(|e| {
        AppError::Artifact(format!(
            "similarity matrix {} is not valid JSON: {}",
            path.display(),
            e
        ))
    })?;

    SimilarityMatrix::new(rows)
}
