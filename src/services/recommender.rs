use std::cmp::Ordering;

use crate::models::Prediction;

/// Orders predictions best first: higher predicted rating, then lower movie index
fn ranking(a: &Prediction, b: &Prediction) -> Ordering {
    b.predicted_rating
        .total_cmp(&a.predicted_rating)
        .then_with(|| a.movie.cmp(&b.movie))
}

/// Selects up to `n` unrated movies with the highest predicted rating
///
/// Movies `user_ratings` marks as rated (or does not cover) are skipped, so
/// the result may be shorter than `n`.
pub fn recommend(predictions: &[Prediction], n: usize, user_ratings: &[Option<i32>]) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }

    let mut sorted = predictions.to_vec();
    sorted.sort_by(ranking);

    sorted
        .into_iter()
        .filter(|p| matches!(user_ratings.get(p.movie), Some(None)))
        .map(|p| p.movie)
        .take(n)
        .collect()
}
