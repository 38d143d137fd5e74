//! High-level crop-and-resize operation.
//!
//! Combines the pure crop arithmetic with backend execution: validate the
//! target, decode, compute the centered window, crop only when needed, then
//! stretch to the exact target and re-encode.

use crate::backend::ImageBackend;
use crate::calculations::center_crop_rect;
use crate::error::Result;
use crate::geometry::TargetDimensions;
use crate::rust_backend::RustBackend;
use tracing::debug;

/// Center-crop `original` to the target aspect ratio, then resize to exactly
/// the target dimensions and re-encode in the input's container format.
///
/// The crop preserves the aspect ratio; the resize does not (independent
/// horizontal and vertical scale factors), so the output always has exactly
/// the requested pixel dimensions, upscaled if the target exceeds the
/// source. When the source already matches the target aspect ratio the crop
/// is skipped entirely.
pub fn crop_and_resize<B: ImageBackend>(
    backend: &B,
    original: &[u8],
    target: TargetDimensions,
) -> Result<Vec<u8>> {
    let image = backend.decode(original)?;
    let source = backend.dimensions(&image);
    let rect = center_crop_rect(source, target);

    let image = if rect.covers(source) {
        debug!(
            "Source {}x{} already matches the {}x{} aspect ratio, skipping crop",
            source.width,
            source.height,
            target.width(),
            target.height()
        );
        image
    } else {
        debug!(
            "Cropping {}x{} source to {}x{} at ({}, {}) for {}x{} target",
            source.width,
            source.height,
            rect.width,
            rect.height,
            rect.x,
            rect.y,
            target.width(),
            target.height()
        );
        backend.crop(image, rect)?
    };

    let image = backend.resize(image, target)?;
    Ok(backend.encode(image)?)
}

/// Convenience surface over [`crop_and_resize`] with the default
/// [`RustBackend`].
pub trait CropAndResize {
    /// Center-crop to the `width`:`height` aspect ratio and resize to
    /// exactly `width`x`height` pixels.
    fn crop_and_resize(&self, width: u32, height: u32) -> Result<Vec<u8>>;
}

impl CropAndResize for [u8] {
    fn crop_and_resize(&self, width: u32, height: u32) -> Result<Vec<u8>> {
        let target = TargetDimensions::new(width, height)?;
        crop_and_resize(&RustBackend::new(), self, target)
    }
}
