/// Pairwise similarity between two users' rating vectors
///
/// Both slices are indexed by movie and must have the same length; callers
/// take rows from the same `RatingsMatrix`, which guarantees it.
#[cfg_attr(test, mockall::automock)]
pub trait SimilarityScorer {
    fn similarity(&self, a: &[Option<i32>], b: &[Option<i32>]) -> f64;
}

/// Pearson correlation restricted to co-rated movies
#[derive(Debug, Clone, Copy, Default)]
pub struct Pearson;

impl SimilarityScorer for Pearson {
    fn similarity(&self, a: &[Option<i32>], b: &[Option<i32>]) -> f64 {
        pearson(a, b)
    }
}

/// Pearson correlation over the movies both users rated
///
/// Returns `0.0` when the users share no rated movie or when either side's
/// co-rated ratings are constant. That value means "no signal", not
/// "uncorrelated".
pub fn pearson(a: &[Option<i32>], b: &[Option<i32>]) -> f64 {
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0, 0.0, 0.0);
    let mut count = 0usize;

    for (x, y) in a.iter().zip(b).filter_map(|pair| match pair {
        (Some(x), Some(y)) => Some((f64::from(*x), f64::from(*y))),
        _ => None,
    }) {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
        sum_y2 += y * y;
        count += 1;
    }

    if count == 0 {
        return 0.0;
    }

    let n = count as f64;
    let numerator = sum_xy - (sum_x * sum_y / n);
    let denominator = ((sum_x2 - sum_x * sum_x / n) * (sum_y2 - sum_y * sum_y / n)).sqrt();

    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}
