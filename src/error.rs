// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AqualogError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database Error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Invalid {field} reading {input:?}: expected a non-negative number within test-kit range")]
    InvalidReading { field: &'static str, input: String },

    #[error("Incorrect password. Please try again.")]
    Unauthorized,

    #[error("Editor exited with a non-zero status")]
    EditorError,
}

pub type Result<T> = std::result::Result<T, AqualogError>;
