//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::geometry::{CropRect, Dimensions, TargetDimensions};

/// Compute the centered crop window matching the target aspect ratio.
///
/// The source and target aspect ratios are compared with `u64`
/// cross-multiplication (`source.width * target.height` against
/// `source.height * target.width`), so mathematically equal ratios always
/// compare equal and the full-image window is returned unchanged. The floored
/// crop edge is plain integer division.
///
/// # Examples
/// ```
/// # use thumbcrop::{center_crop_rect, CropRect, Dimensions, TargetDimensions};
/// // Square source, wide target: keep full width, trim rows from top and bottom
/// let source = Dimensions { width: 256, height: 256 };
/// let target = TargetDimensions::new(128, 64).unwrap();
/// assert_eq!(
///     center_crop_rect(source, target),
///     CropRect { x: 0, y: 64, width: 256, height: 128 },
/// );
/// ```
pub fn center_crop_rect(source: Dimensions, target: TargetDimensions) -> CropRect {
    let sw = u64::from(source.width);
    let sh = u64::from(source.height);
    let tw = u64::from(target.width());
    let th = u64::from(target.height());

    // sw/sh vs tw/th without division: compare sw*th against sh*tw
    if sw * th > sh * tw {
        // Source is relatively wider: keep full height, trim columns evenly
        // from both sides. Extreme ratio pairs can floor the width to zero,
        // so keep at least one column.
        let width = ((sh * tw / th) as u32).max(1);
        CropRect {
            x: (source.width - width) / 2,
            y: 0,
            width,
            height: source.height,
        }
    } else if sw * th < sh * tw {
        // Source is relatively taller: keep full width, trim rows.
        let height = ((sw * th / tw) as u32).max(1);
        CropRect {
            x: 0,
            y: (source.height - height) / 2,
            width: source.width,
            height,
        }
    } else {
        // Aspect ratios match exactly: the crop is a no-op.
        CropRect {
            x: 0,
            y: 0,
            width: source.width,
            height: source.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    fn target(width: u32, height: u32) -> TargetDimensions {
        TargetDimensions::new(width, height).unwrap()
    }

    // =========================================================================
    // Branch selection
    // =========================================================================

    #[test]
    fn square_source_wide_target_trims_rows() {
        // 256x256 → 128x64: crop height to 256*64/128 = 128, centered at y=64
        assert_eq!(
            center_crop_rect(dims(256, 256), target(128, 64)),
            CropRect {
                x: 0,
                y: 64,
                width: 256,
                height: 128
            }
        );
    }

    #[test]
    fn square_source_tall_target_trims_columns() {
        // 256x256 → 64x128: crop width to 256*64/128 = 128, centered at x=64
        assert_eq!(
            center_crop_rect(dims(256, 256), target(64, 128)),
            CropRect {
                x: 64,
                y: 0,
                width: 128,
                height: 256
            }
        );
    }

    #[test]
    fn wide_source_tall_target_trims_columns() {
        // 800x600 (4:3) → 400x500 (4:5): width becomes 600*400/500 = 480
        assert_eq!(
            center_crop_rect(dims(800, 600), target(400, 500)),
            CropRect {
                x: 160,
                y: 0,
                width: 480,
                height: 600
            }
        );
    }

    #[test]
    fn tall_source_wide_target_trims_rows() {
        // 600x800 (3:4) → 500x400 (5:4): height becomes 600*400/500 = 480
        assert_eq!(
            center_crop_rect(dims(600, 800), target(500, 400)),
            CropRect {
                x: 0,
                y: 160,
                width: 600,
                height: 480
            }
        );
    }

    // =========================================================================
    // No-op window
    // =========================================================================

    #[test]
    fn equal_ratio_returns_full_window() {
        let rect = center_crop_rect(dims(800, 600), target(400, 300));
        assert!(rect.covers(dims(800, 600)));
    }

    #[test]
    fn proportionally_equal_ratios_compare_equal() {
        // 1920*9 == 1080*16 exactly, no tolerance involved
        let rect = center_crop_rect(dims(1920, 1080), target(16, 9));
        assert!(rect.covers(dims(1920, 1080)));
    }

    #[test]
    fn same_dimensions_return_full_window() {
        let rect = center_crop_rect(dims(512, 512), target(512, 512));
        assert!(rect.covers(dims(512, 512)));
    }

    // =========================================================================
    // Flooring and degenerate cases
    // =========================================================================

    #[test]
    fn odd_remainder_floors_the_offset() {
        // 7x4 → 1x1: width becomes 4, offset floor((7-4)/2) = 1
        assert_eq!(
            center_crop_rect(dims(7, 4), target(1, 1)),
            CropRect {
                x: 1,
                y: 0,
                width: 4,
                height: 4
            }
        );
    }

    #[test]
    fn extreme_ratio_clamps_to_one_column() {
        // 10000x1 → 1x10000: exact division floors to zero columns
        assert_eq!(
            center_crop_rect(dims(10000, 1), target(1, 10000)),
            CropRect {
                x: 4999,
                y: 0,
                width: 1,
                height: 1
            }
        );
    }

    #[test]
    fn extreme_ratio_clamps_to_one_row() {
        assert_eq!(
            center_crop_rect(dims(1, 10000), target(10000, 1)),
            CropRect {
                x: 0,
                y: 4999,
                width: 1,
                height: 1
            }
        );
    }

    #[test]
    fn window_stays_within_source_bounds() {
        let cases = [
            (dims(256, 256), target(128, 64)),
            (dims(1023, 511), target(97, 31)),
            (dims(31, 1999), target(640, 480)),
            (dims(u32::MAX, 1), target(1, u32::MAX)),
        ];
        for (source, tgt) in cases {
            let rect = center_crop_rect(source, tgt);
            assert!(rect.width >= 1 && rect.height >= 1);
            assert!(u64::from(rect.x) + u64::from(rect.width) <= u64::from(source.width));
            assert!(u64::from(rect.y) + u64::from(rect.height) <= u64::from(source.height));
        }
    }
}
