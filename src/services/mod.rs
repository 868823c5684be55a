pub mod predictor;
pub mod recommender;
pub mod similarity;

pub use predictor::RatingPredictor;
pub use recommender::recommend;
pub use similarity::{pearson, Pearson, SimilarityScorer};
