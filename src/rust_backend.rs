//! Production backend on the `image` crate — pure Rust codecs, statically
//! linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Format sniffing | `image::guess_format` |
//! | Decode (JPEG, PNG, GIF, BMP, TIFF, WebP) | `image::load_from_memory_with_format` |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Resize | `image::DynamicImage::resize_exact` (Lanczos3 by default) |
//! | Encode | `image::DynamicImage::write_to`, format captured at decode |

use crate::backend::{BackendError, ImageBackend};
use crate::geometry::{CropRect, Dimensions, TargetDimensions};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Decoded pixels plus the container format they arrived in.
///
/// Carrying the format with the pixels is what makes [`encode`] write the
/// same container the input used.
///
/// [`encode`]: ImageBackend::encode
pub struct DecodedImage {
    image: DynamicImage,
    format: ImageFormat,
}

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend {
    filter: FilterType,
}

impl RustBackend {
    /// Backend with the default Lanczos3 resampling filter.
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    /// Backend with an explicit resampling filter.
    pub fn with_filter(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    type Image = DecodedImage;

    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, BackendError> {
        let format = image::guess_format(bytes)
            .map_err(|e| BackendError::Decode(format!("Unrecognized image format: {e}")))?;
        let image = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| BackendError::Decode(format!("Failed to decode {format:?} data: {e}")))?;
        Ok(DecodedImage { image, format })
    }

    fn dimensions(&self, image: &DecodedImage) -> Dimensions {
        Dimensions {
            width: image.image.width(),
            height: image.image.height(),
        }
    }

    fn crop(&self, image: DecodedImage, rect: CropRect) -> Result<DecodedImage, BackendError> {
        let DecodedImage { image: img, format } = image;
        let (width, height) = (img.width(), img.height());
        let in_bounds = rect.width > 0
            && rect.height > 0
            && rect
                .x
                .checked_add(rect.width)
                .is_some_and(|right| right <= width)
            && rect
                .y
                .checked_add(rect.height)
                .is_some_and(|bottom| bottom <= height);
        if !in_bounds {
            return Err(BackendError::Processing(format!(
                "Crop window {rect:?} is outside image bounds {width}x{height}"
            )));
        }
        Ok(DecodedImage {
            image: img.crop_imm(rect.x, rect.y, rect.width, rect.height),
            format,
        })
    }

    fn resize(
        &self,
        image: DecodedImage,
        target: TargetDimensions,
    ) -> Result<DecodedImage, BackendError> {
        let DecodedImage { image: img, format } = image;
        Ok(DecodedImage {
            image: img.resize_exact(target.width(), target.height(), self.filter),
            format,
        })
    }

    fn encode(&self, image: DecodedImage) -> Result<Vec<u8>, BackendError> {
        let mut buffer = Cursor::new(Vec::new());
        image.image.write_to(&mut buffer, image.format).map_err(|e| {
            BackendError::Processing(format!("Failed to encode as {:?}: {e}", image.format))
        })?;
        Ok(buffer.into_inner())
    }
}
