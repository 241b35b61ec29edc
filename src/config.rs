use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movie catalog artifact
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Path to the precomputed similarity matrix artifact
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// URL the similarity artifact is fetched from when absent locally
    #[serde(default = "default_similarity_url")]
    pub similarity_url: String,

    /// TMDB API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Base URL poster paths are joined onto
    #[serde(default = "default_tmdb_image_base")]
    pub tmdb_image_base: String,

    /// Per-call timeout for TMDB requests, in seconds
    #[serde(default = "default_tmdb_timeout_secs")]
    pub tmdb_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_path() -> String {
    "movies.json".to_string()
}

fn default_similarity_path() -> String {
    "similarity.json".to_string()
}

fn default_similarity_url() -> String {
    "https://drive.google.com/uc?id=1Uf2izzF_7tAKl4RNMeX23AlzlmTGfjND".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_base() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_tmdb_timeout_secs() -> u64 {
    3
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
