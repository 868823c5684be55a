use serde::Deserialize;

/// Prefix shared by every environment variable the application reads
pub const ENV_PREFIX: &str = "MOVIE_RECS_";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Ratings matrix file (one comma-separated record per user)
    #[serde(default = "default_ratings_path")]
    pub ratings_path: String,

    /// Movie names file (`id,name,...` records)
    #[serde(default = "default_movies_path")]
    pub movies_path: String,

    /// Whether the movie names file starts with a header row
    #[serde(default)]
    pub movies_have_header: bool,

    /// Minimum similarity for a neighbour to contribute to a prediction
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Number of recommendations to list
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_ratings_path() -> String {
    "ratings.csv".to_string()
}

fn default_movies_path() -> String {
    "movies.csv".to_string()
}

fn default_similarity_threshold() -> f64 {
    crate::services::predictor::DEFAULT_SIMILARITY_THRESHOLD
}

fn default_top_n() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ratings_path: default_ratings_path(),
            movies_path: default_movies_path(),
            movies_have_header: false,
            similarity_threshold: default_similarity_threshold(),
            top_n: default_top_n(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
