//! Geometry types for crop-and-resize operations.
//!
//! These types describe *what* to operate on, not *how* to do it. They are
//! the interface between the pure arithmetic in
//! [`calculations`](crate::calculations) and the
//! [`backend`](crate::backend) doing the actual pixel work.

use crate::error::CropResizeError;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Validated target size for a crop-and-resize operation.
///
/// Both edges must be strictly positive. Construction is the only way to
/// obtain a value, so any `TargetDimensions` that reaches a backend is known
/// to be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDimensions {
    width: u32,
    height: u32,
}

impl TargetDimensions {
    /// Validate a requested target size.
    ///
    /// A zero width or height is rejected with
    /// [`CropResizeError::InvalidTarget`] before any image work happens.
    /// Negative values are unrepresentable in the `u32` API.
    pub fn new(width: u32, height: u32) -> Result<Self, CropResizeError> {
        if width == 0 || height == 0 {
            return Err(CropResizeError::InvalidTarget { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }
}

/// A crop window, fully contained within the source image bounds.
///
/// Computed by [`center_crop_rect`](crate::calculations::center_crop_rect),
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    /// Left edge offset from the source's left edge.
    pub x: u32,
    /// Top edge offset from the source's top edge.
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Whether this window covers `source` entirely, making a crop a no-op.
    pub fn covers(self, source: Dimensions) -> bool {
        self.x == 0 && self.y == 0 && self.width == source.width && self.height == source.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_accepts_positive_dimensions() {
        let target = TargetDimensions::new(128, 64).unwrap();
        assert_eq!(target.width(), 128);
        assert_eq!(target.height(), 64);
    }

    #[test]
    fn target_rejects_zero_width() {
        let err = TargetDimensions::new(0, 128).unwrap_err();
        assert!(matches!(
            err,
            CropResizeError::InvalidTarget {
                width: 0,
                height: 128
            }
        ));
    }

    #[test]
    fn target_rejects_zero_height() {
        let err = TargetDimensions::new(256, 0).unwrap_err();
        assert!(matches!(
            err,
            CropResizeError::InvalidTarget {
                width: 256,
                height: 0
            }
        ));
    }

    #[test]
    fn full_window_covers_source() {
        let source = Dimensions {
            width: 800,
            height: 600,
        };
        let rect = CropRect {
            x: 0,
            y: 0,
            width: 800,
            height: 600,
        };
        assert!(rect.covers(source));
    }

    #[test]
    fn offset_window_does_not_cover_source() {
        let source = Dimensions {
            width: 800,
            height: 600,
        };
        let rect = CropRect {
            x: 0,
            y: 100,
            width: 800,
            height: 400,
        };
        assert!(!rect.covers(source));
    }
}
