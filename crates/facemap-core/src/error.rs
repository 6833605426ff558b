//! Error types for facemap

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FaceError>;

/// Main error type for faces and the font map
#[derive(Debug, Error)]
pub enum FaceError {
    #[error("Font loading failed: {0}")]
    Load(#[from] FontLoadError),

    #[error("Invalid argument: {name} ({reason})")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

impl FaceError {
    /// Shorthand for a rejected argument
    pub fn invalid(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { name, reason }
    }
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Face index {index} out of range")]
    FaceIndexOutOfRange { index: u32 },
}
