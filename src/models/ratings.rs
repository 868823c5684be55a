use crate::error::{AppError, AppResult};

/// Dense users × movies rating matrix
///
/// Each cell is `None` when the user has not rated the movie and
/// `Some(rating)` otherwise. Every row has exactly `movie_count` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingsMatrix {
    rows: Vec<Vec<Option<i32>>>,
    movie_count: usize,
}

impl RatingsMatrix {
    /// Builds a matrix from raw integer rows where `0` means "unrated"
    ///
    /// Rejects an empty matrix, rows with no movies and ragged rows.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> AppResult<Self> {
        let movie_count = match rows.first() {
            None => return Err(AppError::EmptyDataset("ratings matrix has no users")),
            Some(first) if first.is_empty() => {
                return Err(AppError::EmptyDataset("ratings matrix has no movies"))
            }
            Some(first) => first.len(),
        };

        if let Some((user, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != movie_count)
        {
            return Err(AppError::RaggedMatrix {
                user,
                expected: movie_count,
                found: row.len(),
            });
        }

        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|r| (r != 0).then_some(r)).collect())
            .collect();

        Ok(Self { rows, movie_count })
    }

    pub fn user_count(&self) -> usize {
        self.rows.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movie_count
    }

    pub fn rows(&self) -> &[Vec<Option<i32>>] {
        &self.rows
    }

    /// Ratings of one user, indexed by movie
    pub fn user(&self, index: usize) -> AppResult<&[Option<i32>]> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(AppError::IndexOutOfRange {
                index,
                count: self.rows.len(),
            })
    }

    pub fn rating(&self, user: usize, movie: usize) -> Option<i32> {
        self.rows.get(user)?.get(movie).copied().flatten()
    }

    /// Mean of all known ratings per movie; `0.0` for a movie nobody rated
    pub fn global_averages(&self) -> Vec<f64> {
        (0..self.movie_count)
            .map(|movie| {
                let (sum, count) = self
                    .rows
                    .iter()
                    .filter_map(|row| row[movie])
                    .fold((0.0, 0usize), |(sum, count), r| (sum + f64::from(r), count + 1));
                if count > 0 {
                    sum / count as f64
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Indices of the movies a user has not rated, in increasing order
    pub fn unrated_movies(&self, user: usize) -> AppResult<Vec<usize>> {
        Ok(self
            .user(user)?
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_none())
            .map(|(movie, _)| movie)
            .collect())
    }
}
