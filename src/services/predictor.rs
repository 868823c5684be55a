use tracing::{debug, trace};

use crate::{
    error::AppResult,
    models::{Prediction, RatingsMatrix},
};

use super::similarity::{Pearson, SimilarityScorer};

/// Minimum similarity a neighbour needs to influence a prediction
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.1;

/// User-based collaborative filtering predictor
///
/// For each movie the target user has not rated, the prediction is the
/// similarity-weighted mean of the other users' ratings, over neighbours
/// whose similarity reaches the threshold. Neighbours that have not rated
/// the movie count as a rating of zero. With no qualifying neighbour the
/// movie's global average is used instead.
pub struct RatingPredictor<S = Pearson> {
    scorer: S,
    threshold: f64,
}

impl RatingPredictor<Pearson> {
    /// Pearson similarity with the default threshold
    pub fn pearson() -> Self {
        Self::new(Pearson, DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl Default for RatingPredictor<Pearson> {
    fn default() -> Self {
        Self::pearson()
    }
}

impl<S: SimilarityScorer> RatingPredictor<S> {
    pub fn new(scorer: S, threshold: f64) -> Self {
        Self { scorer, threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Predicts a rating for every movie `target` has not rated
    ///
    /// Predictions come back in increasing movie order. Fails only when
    /// `target` is not a user of `matrix`.
    pub fn predict(&self, matrix: &RatingsMatrix, target: usize) -> AppResult<Vec<Prediction>> {
        let target_ratings = matrix.user(target)?;
        let global_averages = matrix.global_averages();

        // One score per neighbour, reused for every movie
        let neighbours: Vec<(&[Option<i32>], f64)> = matrix
            .rows()
            .iter()
            .enumerate()
            .filter(|(user, _)| *user != target)
            .map(|(_, row)| (row.as_slice(), self.scorer.similarity(target_ratings, row)))
            .filter(|(_, similarity)| *similarity >= self.threshold)
            .collect();

        debug!(
            target,
            users = matrix.user_count(),
            contributors = neighbours.len(),
            threshold = self.threshold,
            "Similar users selected"
        );

        let predictions = target_ratings
            .iter()
            .enumerate()
            .filter(|(_, rating)| rating.is_none())
            .map(|(movie, _)| {
                let (weighted_sum, similarity_sum) = neighbours.iter().fold(
                    (0.0, 0.0),
                    |(weighted, total), (row, similarity)| {
                        let rating = f64::from(row[movie].unwrap_or(0));
                        (weighted + similarity * rating, total + similarity.abs())
                    },
                );

                let predicted_rating = if similarity_sum == 0.0 {
                    trace!(movie, "No similar users, using global average");
                    global_averages[movie]
                } else {
                    weighted_sum / similarity_sum
                };
                Prediction::new(movie, predicted_rating)
            })
            .collect();

        Ok(predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::similarity::{pearson, MockSimilarityScorer};

    fn matrix(rows: Vec<Vec<i32>>) -> RatingsMatrix {
        RatingsMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_reference_scenario_falls_back_to_global_average() {
        // each neighbour shares a single movie with user 0, so both scores are 0.0
        let ratings = matrix(vec![vec![5, 0, 3], vec![4, 2, 0], vec![0, 3, 4]]);
        let predictions = RatingPredictor::pearson().predict(&ratings, 0).unwrap();

        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].movie, 1);
        assert!((predictions[0].predicted_rating - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_prediction() {
        let ratings = matrix(vec![
            vec![5, 3, 0, 1],
            vec![4, 2, 5, 1],
            vec![1, 5, 2, 5], // negatively correlated, ignored
            vec![5, 4, 3, 2],
        ]);
        let s1 = pearson(ratings.user(0).unwrap(), ratings.user(1).unwrap());
        let s3 = pearson(ratings.user(0).unwrap(), ratings.user(3).unwrap());
        assert!(pearson(ratings.user(0).unwrap(), ratings.user(2).unwrap()) < 0.0);

        let predictions = RatingPredictor::pearson().predict(&ratings, 0).unwrap();
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].movie, 2);

        let expected = (s1 * 5.0 + s3 * 3.0) / (s1 + s3);
        assert!((predictions[0].predicted_rating - expected).abs() < 1e-9);
        assert!((predictions[0].predicted_rating - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrated_neighbour_counts_as_zero() {
        let ratings = matrix(vec![
            vec![5, 3, 0, 1],
            vec![4, 2, 5, 1],
            vec![5, 3, 0, 1], // identical taste but has not seen movie 2
        ]);
        let s1 = pearson(ratings.user(0).unwrap(), ratings.user(1).unwrap());
        let s2 = pearson(ratings.user(0).unwrap(), ratings.user(2).unwrap());

        let predictions = RatingPredictor::pearson().predict(&ratings, 0).unwrap();
        let expected = (s1 * 5.0) / (s1 + s2);
        assert!((predictions[0].predicted_rating - expected).abs() < 1e-9);
    }

    #[test]
    fn test_unrated_column_predicts_zero() {
        let ratings = matrix(vec![vec![5, 0, 0], vec![0, 4, 0], vec![3, 0, 0]]);
        let predictions = RatingPredictor::pearson().predict(&ratings, 0).unwrap();

        let movie_2 = predictions.iter().find(|p| p.movie == 2).unwrap();
        assert_eq!(movie_2.predicted_rating, 0.0);
    }

    #[test]
    fn test_one_prediction_per_unrated_movie() {
        let ratings = matrix(vec![
            vec![0, 4, 0, 0, 2, 0],
            vec![3, 4, 1, 0, 2, 5],
            vec![1, 5, 0, 2, 1, 4],
        ]);
        let predictions = RatingPredictor::pearson().predict(&ratings, 0).unwrap();

        let movies: Vec<usize> = predictions.iter().map(|p| p.movie).collect();
        assert_eq!(movies, vec![0, 2, 3, 5]);
        for p in &predictions {
            assert!(ratings.rating(0, p.movie).is_none());
        }
    }

    #[test]
    fn test_fully_rated_user_gets_no_predictions() {
        let ratings = matrix(vec![vec![1, 2], vec![2, 1]]);
        let predictions = RatingPredictor::pearson().predict(&ratings, 0).unwrap();
        assert!(predictions.is_empty());
    }

    #[test]
    fn test_target_out_of_range() {
        let ratings = matrix(vec![vec![1, 0], vec![2, 1]]);
        let result = RatingPredictor::pearson().predict(&ratings, 2);
        assert!(matches!(
            result,
            Err(AppError::IndexOutOfRange { index: 2, count: 2 })
        ));
    }

    #[test]
    fn test_threshold_excludes_weak_neighbours() {
        let ratings = matrix(vec![vec![4, 0], vec![1, 2], vec![1, 4]]);
        let mut scorer = MockSimilarityScorer::new();
        // user 1 sits just below the threshold, user 2 exactly on it
        scorer
            .expect_similarity()
            .returning(|_, other| if other[1] == Some(2) { 0.09 } else { 0.1 });

        let predictions = RatingPredictor::new(scorer, 0.1).predict(&ratings, 0).unwrap();
        assert_eq!(predictions.len(), 1);
        assert!((predictions[0].predicted_rating - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_contributors_uses_global_average() {
        let ratings = matrix(vec![vec![4, 0], vec![1, 2], vec![1, 4]]);
        let mut scorer = MockSimilarityScorer::new();
        scorer.expect_similarity().returning(|_, _| -0.8);

        let predictions = RatingPredictor::new(scorer, 0.1).predict(&ratings, 0).unwrap();
        assert!((predictions[0].predicted_rating - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_computed_once_per_neighbour() {
        let ratings = matrix(vec![vec![0, 0, 0, 5], vec![1, 2, 3, 4], vec![4, 3, 2, 1]]);
        let mut scorer = MockSimilarityScorer::new();
        scorer.expect_similarity().times(2).returning(|_, _| 0.5);

        let predictions = RatingPredictor::new(scorer, 0.1).predict(&ratings, 0).unwrap();
        assert_eq!(predictions.len(), 3);
        assert!((predictions[0].predicted_rating - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_threshold_uses_absolute_weights() {
        let ratings = matrix(vec![vec![3, 0], vec![1, 4], vec![5, 2]]);
        let mut scorer = MockSimilarityScorer::new();
        scorer
            .expect_similarity()
            .returning(|_, other| if other[0] == Some(1) { -0.5 } else { 0.5 });

        let predictions = RatingPredictor::new(scorer, -1.0).predict(&ratings, 0).unwrap();
        // (-0.5 * 4 + 0.5 * 2) / (0.5 + 0.5)
        assert!((predictions[0].predicted_rating + 1.0).abs() < 1e-9);
    }
}
