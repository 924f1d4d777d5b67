// themesweep-core/src/error.rs

use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemesweepError {
    // --- ERREURS D'INFRASTRUCTURE (IO, Parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Unsafe path traversal detected: {0}")]
    UnsafePath(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for ThemesweepError {
    fn from(err: std::io::Error) -> Self {
        ThemesweepError::Infrastructure(InfrastructureError::Io(err))
    }
}
