//! Rendering module for lchgrad.
//!
//! This module rasterizes colour space slices and writes slices and
//! gradient strips to PNG.

mod png;
mod raster;

pub use png::{to_image, write_png, write_swatch_strip};
pub use raster::{
    render_slice, ColorSpaceRasterizer, RasterBuffer, RenderTimer, WallClock, DEFAULT_BUDGET,
    MAX_SCALE,
};
