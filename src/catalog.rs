use crate::error::{AppError, AppResult};
use crate::models::{normalize_title, CatalogEntry, MovieRecord};

/// The ordered collection of movies the service knows about
///
/// Index positions match the row/column ordering of the similarity matrix the
/// catalog was shipped with; `validate_pair` enforces that coupling at load.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            records: entries.into_iter().map(MovieRecord::from).collect(),
        }
    }

    /// Resolves a raw query title to its catalog index.
    ///
    /// The query is normalized the same way titles were at load, then matched
    /// exactly. When duplicate normalized titles exist, the first index in
    /// catalog order wins.
    pub fn find_index_by_title(&self, query: &str) -> Option<usize> {
        let needle = normalize_title(query);
        self.records
            .iter()
            .position(|record| record.normalized_title == needle)
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.records.get(index)
    }

    /// All titles in catalog order, unmodified
    pub fn titles(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.title.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Precomputed pairwise similarity scores, row i scoring catalog entry i
/// against every other entry. Read-only for the life of the process.
#[derive(Debug)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    /// Builds a matrix from raw score rows, rejecting anything non-square.
    pub fn new(rows: Vec<Vec<f32>>) -> AppResult<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AppError::Artifact(format!(
                    "similarity row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }
        Ok(Self { rows })
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Checks the positional coupling between a catalog and the similarity matrix
/// it was shipped with: one matrix row per catalog entry.
pub fn validate_pair(catalog: &Catalog, matrix: &SimilarityMatrix) -> AppResult<()> {
    if matrix.len() != catalog.len() {
        return Err(AppError::Artifact(format!(
            "similarity matrix is {n}x{n} but the catalog has {m} movies",
            n = matrix.len(),
            m = catalog.len()
        )));
    }
    Ok(())
}
