use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod ratings;

pub use catalog::MovieCatalog;
pub use ratings::RatingsMatrix;

/// Predicted rating for one movie the target user has not rated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    /// Movie index (column of the ratings matrix)
    pub movie: usize,
    /// Estimated rating on the scale of the input ratings
    pub predicted_rating: f64,
}

impl Prediction {
    pub fn new(movie: usize, predicted_rating: f64) -> Self {
        Self {
            movie,
            predicted_rating,
        }
    }
}
