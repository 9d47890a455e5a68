use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating page objects
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Access denied while searching {path}: {source}")]
    DiscoveryAccessDenied {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read markup file {path}: {source}")]
    MarkupRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse markup file {path}: {message}")]
    MarkupParse { path: PathBuf, message: String },

    #[error("Skipping {path} as a page was not detected")]
    UnrecognizedPageRoot { path: PathBuf },

    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize page {page}: {source}")]
    Serialize {
        page: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GeneratorError {
    /// Whether the error only affects the file being processed
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            GeneratorError::MarkupRead { .. }
                | GeneratorError::MarkupParse { .. }
                | GeneratorError::UnrecognizedPageRoot { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
