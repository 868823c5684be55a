use std::process::ExitCode;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Could not open {path}: {source}")]
    InputUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty dataset: {0}")]
    EmptyDataset(&'static str),

    #[error("Ratings matrix is not rectangular: user {user} has {found} movies, expected {expected}")]
    RaggedMatrix {
        user: usize,
        expected: usize,
        found: usize,
    },

    #[error("User index {index} out of range (0..{count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Movie catalog has {names} names but the ratings matrix has {movies} movies")]
    CatalogMismatch { movies: usize, names: usize },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status reported for this error
    pub fn exit_status(&self) -> u8 {
        match self {
            AppError::InvalidInput(_) | AppError::IndexOutOfRange { .. } => 2,
            AppError::InputUnavailable { .. } => 3,
            AppError::EmptyDataset(_)
            | AppError::RaggedMatrix { .. }
            | AppError::CatalogMismatch { .. }
            | AppError::Parse { .. } => 4,
            AppError::Io(_) => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

pub type AppResult<T> = Result<T, AppError>;
