//! Image processing backend trait and error type.
//!
//! The [`ImageBackend`] trait is the seam between the crop arithmetic and
//! the imaging library doing the pixel work: decode, dimensions, crop,
//! resize, encode. The production implementation is
//! [`RustBackend`](crate::rust_backend::RustBackend) — pure Rust, statically
//! linked codecs from the `image` crate.

use crate::geometry::{CropRect, Dimensions, TargetDimensions};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to decode image: {0}")]
    Decode(String),
    #[error("Processing failed: {0}")]
    Processing(String),
}

/// Trait for image processing backends.
///
/// `Image` is the backend's opaque decoded-image handle. Operations take the
/// handle by value and return a new one, so the handle is dropped on every
/// exit path, error paths included.
pub trait ImageBackend: Sync {
    type Image;

    /// Decode encoded image bytes into a handle.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Image, BackendError>;

    /// Pixel dimensions of a decoded image.
    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Crop to the given window.
    fn crop(&self, image: Self::Image, rect: CropRect) -> Result<Self::Image, BackendError>;

    /// Resize to exactly the target dimensions, stretching if the aspect
    /// ratios differ. Upscaling past the source resolution is allowed.
    fn resize(
        &self,
        image: Self::Image,
        target: TargetDimensions,
    ) -> Result<Self::Image, BackendError>;

    /// Re-encode in the container format the handle was decoded from.
    fn encode(&self, image: Self::Image) -> Result<Vec<u8>, BackendError>;
}
