use std::{fs::File, io::Read, path::Path};

use crate::error::{AppError, AppResult};

pub mod movies;
pub mod ratings;

pub use movies::load_movie_names;
pub use ratings::load_ratings_matrix;

/// Opens a data file, reporting failures as unavailable input
fn open(path: &Path) -> AppResult<File> {
    File::open(path).map_err(|source| AppError::InputUnavailable {
        path: path.display().to_string(),
        source,
    })
}

/// Comma-separated reader tolerant of ragged records and padded fields
fn csv_reader<R: Read>(reader: R, has_headers: bool) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn csv_error(err: csv::Error) -> AppError {
    AppError::Parse {
        line: err.position().map(|p| p.line()).unwrap_or(0),
        message: err.to_string(),
    }
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(str::is_empty)
}
