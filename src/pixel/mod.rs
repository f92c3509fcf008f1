//! Pixel sources the ROI is extracted from
//!
//! Decoding and tiling of the slide itself belong to the host. This module
//! only defines the narrow interface the pipeline extracts regions through,
//! a factory that picks a source for an image, the cached export handle, and
//! a source backed by the `image` crate for flat and TIFF files.

mod source;
mod image_source;
mod handle;

pub use source::{PixelSource, PixelSourceFactory, ImageSourceFactory};
pub use image_source::ImageFileSource;
pub use handle::ExportHandle;
