use crate::error::{AppError, AppResult};

/// Movie display names, indexed like the ratings matrix columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieCatalog {
    names: Vec<String>,
}

impl MovieCatalog {
    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, movie: usize) -> Option<&str> {
        self.names.get(movie).map(String::as_str)
    }

    /// Checks that there is exactly one name per matrix column
    pub fn ensure_covers(&self, movie_count: usize) -> AppResult<()> {
        if self.names.len() != movie_count {
            return Err(AppError::CatalogMismatch {
                movies: movie_count,
                names: self.names.len(),
            });
        }
        Ok(())
    }
}
