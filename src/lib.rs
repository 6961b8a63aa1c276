//! lchgrad - LCH colour space slices and perceptual gradients
//!
//! A library for converting between CIE LCH and sRGB, rasterizing planar
//! slices of LCH space, sampling gradients between two colours, and saving
//! a selection as a compact `AXES/STEPS/FROM/TO` string.

pub mod cli;
pub mod codec;
pub mod config;
pub mod convert;
pub mod error;
pub mod gradient;
pub mod output;
pub mod render;
pub mod schedule;
pub mod types;

pub use codec::{decode, decode_onto, encode, SavedState};
pub use config::Config;
pub use convert::{hex_to_lch, hex_to_srgb, lch_to_display, lch_to_srgb, srgb_to_lch};
pub use error::{LchError, Result};
pub use gradient::{sample, sample_selection, Swatch};
pub use render::{render_slice, write_png, ColorSpaceRasterizer, RasterBuffer};
pub use schedule::{PendingCell, Submitted, Worker};
pub use types::{
    Axis, AxisOrder, DisplayColour, Endpoint, Lch, Rgba, Selection, Viewport, MAX_STEPS, MIN_STEPS,
};
