//! PNG output for slices and gradient strips.

use std::path::Path;

use image::{ImageBuffer, Rgba as ImageRgba, RgbaImage};

use crate::error::{LchError, Result};
use crate::gradient::Swatch;

use super::RasterBuffer;

/// Convert a raster buffer to an image without scaling.
pub fn to_image(buffer: &RasterBuffer) -> RgbaImage {
    let side = buffer.side() as u32;
    let mut img: RgbaImage = ImageBuffer::new(side, side);

    for (y, row) in buffer.rows().enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, ImageRgba(pixel.to_array()));
        }
    }

    img
}

/// Write a slice to a PNG file at native resolution.
///
/// Coarse buffers are upscaled with nearest-neighbour sampling first.
pub fn write_png(buffer: &RasterBuffer, path: &Path) -> Result<()> {
    save(&to_image(&buffer.to_native()), path)
}

/// Write a horizontal strip with one `size`x`size` square per swatch.
///
/// Out-of-gamut swatches still show their clamped colour; a one pixel
/// diagonal marks them.
pub fn write_swatch_strip(swatches: &[Swatch], size: u32, path: &Path) -> Result<()> {
    let size = size.max(1);
    let width = size * swatches.len() as u32;
    let mut img: RgbaImage = ImageBuffer::new(width.max(1), size);

    for (i, swatch) in swatches.iter().enumerate() {
        let fill = ImageRgba(swatch.colour.to_rgba().to_array());
        let x0 = i as u32 * size;
        for y in 0..size {
            for x in 0..size {
                img.put_pixel(x0 + x, y, fill);
            }
        }
        if !swatch.colour.in_gamut() {
            for d in 0..size {
                img.put_pixel(x0 + d, size - d - 1, ImageRgba([255, 0, 0, 255]));
            }
        }
    }

    save(&img, path)
}

fn save(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|e| LchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}
