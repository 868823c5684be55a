use std::{io::Read, path::Path};

use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::MovieCatalog,
};

use super::{csv_error, csv_reader, is_blank, open};

/// Loads movie display names from an `id,name,...` file
pub fn load_movie_names(path: impl AsRef<Path>, has_header: bool) -> AppResult<MovieCatalog> {
    let path = path.as_ref();
    let catalog = movies_from_reader(open(path)?, has_header)?;
    info!(path = %path.display(), movies = catalog.len(), "Movie names loaded");
    Ok(catalog)
}

/// Takes the second field of every record as the movie name
///
/// Record order defines the movie index; fields after the name are ignored.
pub fn movies_from_reader<R: Read>(reader: R, has_header: bool) -> AppResult<MovieCatalog> {
    let mut names = Vec::new();

    for result in csv_reader(reader, has_header).records() {
        let record = result.map_err(csv_error)?;
        if is_blank(&record) {
            continue;
        }
        let name = record.get(1).ok_or_else(|| AppError::Parse {
            line: record.position().map(|p| p.line()).unwrap_or(0),
            message: format!("missing movie name in record {:?}", record.get(0).unwrap_or("")),
        })?;
        names.push(name.to_string());
    }

    if names.is_empty() {
        return Err(AppError::EmptyDataset("movie catalog has no entries"));
    }

    Ok(MovieCatalog::from_names(names))
}
