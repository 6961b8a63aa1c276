//! Colour space slice rasterizer.
//!
//! Renders the plane of an axis order at a fixed slice value into a square
//! pixel buffer. Converting every pixel runs the whole LCH pipeline, which is
//! too slow at full resolution on weak machines, so the first render searches
//! progressively coarser resolutions until one fits the time budget and then
//! sticks with it.

use std::time::{Duration, Instant};

use crate::convert::{float_to_int8, lch_to_srgb};
use crate::types::{AxisOrder, Lch, Rgba};

/// Time allowed for one render before calibration coarsens.
pub const DEFAULT_BUDGET: Duration = Duration::from_millis(100);

/// Coarsest scale calibration will try.
pub const MAX_SCALE: u32 = 4;

/// A square grid of pixels, row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    side: usize,
    scale: u32,
    native: usize,
    pixels: Vec<Rgba>,
}

impl RasterBuffer {
    /// Wrap a row-major pixel vector of `side * side` entries.
    ///
    /// The native size defaults to `side * scale`; use
    /// [`with_native_size`](Self::with_native_size) when the canvas is not a
    /// multiple of the scale.
    pub fn new(side: usize, scale: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), side * side);
        Self {
            side,
            scale,
            native: side * scale.max(1) as usize,
            pixels,
        }
    }

    /// Set the canvas size this buffer is displayed at.
    pub fn with_native_size(mut self, native: usize) -> Self {
        self.native = native.max(1);
        self
    }

    /// Pixels per side.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Coarseness this buffer was rendered at (1 = native).
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Pixels per side of the canvas this buffer is shown on.
    pub fn native_size(&self) -> usize {
        self.native
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.side && y < self.side {
            Some(self.pixels[y * self.side + x])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        self.pixels.chunks(self.side.max(1))
    }

    /// Number of out-of-gamut cells.
    pub fn clipped_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p == Rgba::CLIPPED).count()
    }

    /// Flat RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_array());
        }
        bytes
    }

    /// Nearest-neighbour upscale by an integer factor.
    pub fn upscale(&self, factor: u32) -> RasterBuffer {
        let factor = factor.max(1) as usize;
        if factor == 1 {
            return self.clone();
        }

        let side = self.side * factor;
        let mut pixels = Vec::with_capacity(side * side);
        for row in self.rows() {
            let mut scaled_row = Vec::with_capacity(side);
            for &pixel in row {
                scaled_row.extend(std::iter::repeat(pixel).take(factor));
            }
            for _ in 0..factor {
                pixels.extend_from_slice(&scaled_row);
            }
        }

        RasterBuffer::new(side, 1, pixels)
    }

    /// Nearest-neighbour resample to `size` pixels per side.
    ///
    /// Target pixel `t` reads source pixel `t * side / size`.
    pub fn resample(&self, size: usize) -> RasterBuffer {
        let size = size.max(1);
        let src: Vec<usize> = (0..size).map(|t| t * self.side / size).collect();
        let mut pixels = Vec::with_capacity(size * size);
        for &sy in &src {
            let row = &self.pixels[sy * self.side..(sy + 1) * self.side];
            pixels.extend(src.iter().map(|&sx| row[sx]));
        }
        RasterBuffer::new(size, 1, pixels)
    }

    /// Scale back to the native canvas size.
    pub fn to_native(&self) -> RasterBuffer {
        if self.native == self.side * self.scale.max(1) as usize {
            self.upscale(self.scale)
        } else {
            self.resample(self.native)
        }
    }
}

/// Render one slice at `side` pixels per side.
///
/// Column `px` maps to `min + px * span / side` on the X axis, and row `py`
/// (counted from the bottom) likewise on the Y axis. Out-of-gamut cells hold
/// [`Rgba::CLIPPED`].
pub fn render_slice(axes: AxisOrder, z: f64, side: usize, scale: u32) -> RasterBuffer {
    let [x_axis, y_axis, _] = axes.axes();
    let n = side as f64;
    let mut pixels = vec![Rgba::TRANSPARENT; side * side];

    for px in 0..side {
        let xv = x_axis.min() + (px as f64 * x_axis.span()) / n;
        for py in 0..side {
            let yv = y_axis.min() + (py as f64 * y_axis.span()) / n;
            let (rgb, in_gamut) = lch_to_srgb(Lch::from_plane(axes, xv, yv, z));
            let pixel = if in_gamut {
                Rgba::rgb(
                    float_to_int8(rgb[0]),
                    float_to_int8(rgb[1]),
                    float_to_int8(rgb[2]),
                )
            } else {
                Rgba::CLIPPED
            };
            pixels[(side - py - 1) * side + px] = pixel;
        }
    }

    RasterBuffer::new(side, scale, pixels)
}

/// Measures how long a render takes.
pub trait RenderTimer {
    fn measure<F: FnOnce() -> RasterBuffer>(&mut self, render: F) -> (RasterBuffer, Duration);
}

/// Wall-clock timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl RenderTimer for WallClock {
    fn measure<F: FnOnce() -> RasterBuffer>(&mut self, render: F) -> (RasterBuffer, Duration) {
        let start = Instant::now();
        let buffer = render();
        (buffer, start.elapsed())
    }
}

/// Slice rasterizer with an adaptive resolution.
///
/// The scale found by the first calibration is kept for later calls. Switching to
/// another axis order discards it; a new slice value does not.
#[derive(Debug)]
pub struct ColorSpaceRasterizer<T = WallClock> {
    native_size: u32,
    max_scale: u32,
    scale: Option<u32>,
    axes: Option<AxisOrder>,
    last_render: Option<Duration>,
    timer: T,
}

impl ColorSpaceRasterizer<WallClock> {
    pub fn new(native_size: u32) -> Self {
        Self::with_timer(native_size, WallClock)
    }
}

impl<T: RenderTimer> ColorSpaceRasterizer<T> {
    pub fn with_timer(native_size: u32, timer: T) -> Self {
        Self {
            native_size: native_size.max(1),
            max_scale: MAX_SCALE,
            scale: None,
            axes: None,
            last_render: None,
            timer,
        }
    }

    /// Limit calibration to scales `1..=max_scale`.
    pub fn with_max_scale(mut self, max_scale: u32) -> Self {
        self.max_scale = max_scale.max(1);
        self
    }

    pub fn native_size(&self) -> u32 {
        self.native_size
    }

    /// The established scale, if calibration has run.
    pub fn scale(&self) -> Option<u32> {
        self.scale
    }

    /// How long the most recent render took.
    pub fn last_render_time(&self) -> Option<Duration> {
        self.last_render
    }

    /// Forget the established scale so the next call calibrates again.
    pub fn reset(&mut self) {
        self.scale = None;
    }

    /// Pixels per side at a given scale.
    pub fn side_for(&self, scale: u32) -> usize {
        (self.native_size / scale.max(1)).max(1) as usize
    }

    /// Render the slice of `axes` at `z`.
    pub fn rasterize(&mut self, axes: AxisOrder, z: f64, budget: Duration) -> RasterBuffer {
        if self.axes != Some(axes) {
            self.axes = Some(axes);
            self.scale = None;
        }

        let native = self.native_size as usize;
        if let Some(scale) = self.scale {
            let side = self.side_for(scale);
            let (buffer, elapsed) = self
                .timer
                .measure(|| render_slice(axes, z, side, scale).with_native_size(native));
            self.last_render = Some(elapsed);
            return buffer;
        }

        let mut scale = 1;
        loop {
            let side = self.side_for(scale);
            let (buffer, elapsed) = self
                .timer
                .measure(|| render_slice(axes, z, side, scale).with_native_size(native));
            self.last_render = Some(elapsed);

            if elapsed < budget || scale >= self.max_scale {
                self.scale = Some(scale);
                return buffer;
            }
            scale += 1;
        }
    }
}
