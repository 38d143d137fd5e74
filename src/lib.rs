//! # thumbcrop
//!
//! Center-crop an encoded image to a target aspect ratio, then resize it to
//! exact pixel dimensions and re-encode it in the container format it
//! arrived in.
//!
//! ```
//! use thumbcrop::CropAndResize;
//!
//! # fn demo(photo: &[u8]) -> Result<(), thumbcrop::CropResizeError> {
//! let thumb = photo.crop_and_resize(400, 500)?;
//! # Ok(())
//! # }
//! ```
//!
//! The crop keeps pixels centered: a relatively-wide source loses columns
//! evenly from both sides, a relatively-tall source loses rows from top and
//! bottom, and a source that already matches the target aspect ratio is not
//! cropped at all. The resize then stretches to the exact target, upscaling
//! if the target exceeds the source.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`calculations`] | Pure crop-window arithmetic (no I/O) |
//! | [`geometry`] | [`Dimensions`], validated [`TargetDimensions`], [`CropRect`] |
//! | [`backend`] | [`ImageBackend`] seam + [`BackendError`] |
//! | [`rust_backend`] | Production backend on the `image` crate |
//! | [`operations`] | [`crop_and_resize`] + the [`CropAndResize`] extension trait |
//! | [`error`] | [`CropResizeError`] taxonomy |
//!
//! # Design Decisions
//!
//! ## Integer Aspect Arithmetic
//!
//! Aspect ratios are compared by `u64` cross-multiplication rather than
//! floating-point division. Equal ratios compare exactly equal (1920×1080
//! against a 16:9 target takes the no-crop path), and the floored crop edge
//! is plain integer division. No epsilon to tune, no rounding surprises.
//!
//! ## The Backend Seam
//!
//! All pixel work goes through the [`ImageBackend`] trait: decode,
//! dimensions, crop, resize, encode. The crop arithmetic is unit-tested
//! against a recording mock without ever touching an encoder, and the
//! production [`RustBackend`] stays a thin adapter over the `image` crate.
//! Handles move by value through the pipeline, so decoded images are
//! released on every exit path, error paths included.
//!
//! ## Format Preservation
//!
//! The container format is sniffed at decode time and carried with the
//! decoded handle; [`ImageBackend::encode`] writes the same format back. A
//! JPEG in is a JPEG out.
//!
//! ## Validation Before Work
//!
//! Target dimensions are validated at construction
//! ([`TargetDimensions::new`]), so a zero width or height fails before a
//! single byte of the input is decoded. Negative targets are unrepresentable
//! in the `u32` API.

pub mod backend;
pub mod calculations;
pub mod error;
pub mod geometry;
pub mod operations;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::center_crop_rect;
pub use error::{CropResizeError, Result};
pub use geometry::{CropRect, Dimensions, TargetDimensions};
pub use operations::{CropAndResize, crop_and_resize};
pub use rust_backend::RustBackend;
