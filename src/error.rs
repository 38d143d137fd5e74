//! Crate-level error type and `Result` alias.
//!
//! Argument validation gets its own semantic variant; decode and processing
//! failures from the imaging backend convert upward unchanged.

use crate::backend::BackendError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CropResizeError>;

#[derive(Debug, Error)]
pub enum CropResizeError {
    /// Target width or height was zero. Checked before any decoding work.
    #[error("Target dimensions must be greater than 0, got: {width}x{height}")]
    InvalidTarget { width: u32, height: u32 },

    /// Decode or pixel-processing failure from the imaging backend.
    #[error(transparent)]
    Backend(#[from] BackendError),
}
