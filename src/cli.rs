use std::io::{BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    report::RecommendationReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Predict ratings for a user's unrated movies and list the best ones
#[derive(Debug, Parser)]
#[command(name = "movie-recs")]
#[command(version)]
pub struct Cli {
    /// Ratings matrix CSV (overrides MOVIE_RECS_RATINGS_PATH)
    #[arg(long)]
    pub ratings: Option<String>,

    /// Movie names CSV (overrides MOVIE_RECS_MOVIES_PATH)
    #[arg(long)]
    pub movies: Option<String>,

    /// 0-based user index; prompted for when omitted
    #[arg(short, long)]
    pub user: Option<usize>,

    /// Number of recommendations to list
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Minimum neighbour similarity
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Layers command-line flags over the environment configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(ratings) = &self.ratings {
            config.ratings_path = ratings.clone();
        }
        if let Some(movies) = &self.movies {
            config.movies_path = movies.clone();
        }
        if let Some(top) = self.top {
            config.top_n = top;
        }
        if let Some(threshold) = self.threshold {
            config.similarity_threshold = threshold;
        }
        config
    }
}

/// Asks for the target user on `prompt` and reads the answer from `input`
///
/// `prompt` is meant for the terminal (stderr), never the report stream.
pub fn prompt_user_index<R: BufRead, W: Write>(mut input: R, mut prompt: W) -> AppResult<usize> {
    write!(prompt, "Enter the user index (0-based): ")?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::InvalidInput("no user index given".to_string()));
    }

    let answer = line.trim();
    answer
        .parse::<usize>()
        .map_err(|_| AppError::InvalidInput(format!("{:?} is not a user index", answer)))
}

/// Writes the report to the output stream in the requested format
pub fn write_report<W: Write>(
    report: &RecommendationReport,
    format: OutputFormat,
    mut out: W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "\n{}", report)?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            report.to_json().context("Failed to serialize report")?
        )?,
    }
    out.flush()?;
    Ok(())
}
