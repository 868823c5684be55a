use std::{io::Read, path::Path};

use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::RatingsMatrix,
};

use super::{csv_error, csv_reader, is_blank, open};

/// Loads the ratings matrix from a file
pub fn load_ratings_matrix(path: impl AsRef<Path>) -> AppResult<RatingsMatrix> {
    let path = path.as_ref();
    let matrix = ratings_from_reader(open(path)?)?;
    info!(
        path = %path.display(),
        users = matrix.user_count(),
        movies = matrix.movie_count(),
        "Ratings matrix loaded"
    );
    Ok(matrix)
}

/// Parses one comma-separated record of integer ratings per user
///
/// `0` marks an unrated movie. Blank lines are skipped.
pub fn ratings_from_reader<R: Read>(reader: R) -> AppResult<RatingsMatrix> {
    let mut rows = Vec::new();

    for result in csv_reader(reader, false).records() {
        let record = result.map_err(csv_error)?;
        if is_blank(&record) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let row = record
            .iter()
            .enumerate()
            .map(|(field, value)| {
                value.parse::<i32>().map_err(|e| AppError::Parse {
                    line,
                    message: format!("field {} ({:?}): {}", field + 1, value, e),
                })
            })
            .collect::<AppResult<Vec<i32>>>()?;
        rows.push(row);
    }

    RatingsMatrix::from_rows(rows)
}
