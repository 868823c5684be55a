use std::fmt;

use serde::Serialize;

use crate::{
    error::AppResult,
    models::{MovieCatalog, Prediction, RatingsMatrix},
    services::{recommend, RatingPredictor, SimilarityScorer},
};

/// A movie with its display name and predicted rating
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictedMovie {
    pub movie: usize,
    pub name: String,
    pub predicted_rating: f64,
}

impl PredictedMovie {
    fn new(prediction: &Prediction, catalog: &MovieCatalog) -> Self {
        Self {
            movie: prediction.movie,
            name: catalog.name(prediction.movie).unwrap_or_default().to_string(),
            predicted_rating: prediction.predicted_rating,
        }
    }
}

/// Everything printed for one user: all predictions plus the top-N list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationReport {
    pub user: usize,
    /// One entry per unrated movie, in movie order
    pub predictions: Vec<PredictedMovie>,
    /// Best predictions first
    pub recommendations: Vec<PredictedMovie>,
}

/// Runs prediction and ranking for `user`
pub fn build_report<S: SimilarityScorer>(
    matrix: &RatingsMatrix,
    catalog: &MovieCatalog,
    predictor: &RatingPredictor<S>,
    user: usize,
    top_n: usize,
) -> AppResult<RecommendationReport> {
    catalog.ensure_covers(matrix.movie_count())?;

    let predictions = predictor.predict(matrix, user)?;
    let top = recommend(&predictions, top_n, matrix.user(user)?);

    let recommendations = top
        .iter()
        .filter_map(|movie| predictions.iter().find(|p| p.movie == *movie))
        .map(|p| PredictedMovie::new(p, catalog))
        .collect();

    Ok(RecommendationReport {
        user,
        predictions: predictions
            .iter()
            .map(|p| PredictedMovie::new(p, catalog))
            .collect(),
        recommendations,
    })
}

impl fmt::Display for RecommendationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.predictions.is_empty() {
            return writeln!(f, "User {} has rated every movie.", self.user);
        }

        writeln!(f, "Predicted ratings for unrated movies for User {}:", self.user)?;
        for p in &self.predictions {
            writeln!(
                f,
                "Movie: {} | Predicted Rating: {:.2}",
                p.name, p.predicted_rating
            )?;
        }

        writeln!(
            f,
            "\nTop {} recommendations for User {}:",
            self.recommendations.len(),
            self.user
        )?;
        for (rank, p) in self.recommendations.iter().enumerate() {
            writeln!(f, "{}. {} ({:.2})", rank + 1, p.name, p.predicted_rating)?;
        }
        Ok(())
    }
}

impl RecommendationReport {
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
