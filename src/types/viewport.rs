//! Mapping between canvas pixels and plane coordinates.
//!
//! The canvas is square. X grows to the right; Y is flipped so that the top
//! row holds the largest value of the vertical axis.

use super::axis::{Axis, AxisOrder};
use super::selection::Endpoint;

/// A square canvas of `size` pixels per side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    size: f64,
}

impl Viewport {
    pub fn new(size: u32) -> Self {
        Self {
            size: f64::from(size.max(1)),
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Axis value at pixel offset `p`.
    ///
    /// `p` is expected to be clamped to `[0, size]` already.
    pub fn unscale(&self, p: f64, axis: Axis, flip: bool) -> f64 {
        let p = if flip { self.size - p } else { p };
        p * axis.span() / self.size + axis.min()
    }

    /// Pixel offset of an axis value.
    pub fn scale(&self, value: f64, axis: Axis, flip: bool) -> f64 {
        let p = (value - axis.min()) * self.size / axis.span();
        if flip {
            self.size - p
        } else {
            p
        }
    }

    /// Endpoint under the pixel `(px, py)`.
    pub fn to_plane(&self, order: AxisOrder, px: f64, py: f64) -> Endpoint {
        Endpoint::new(
            self.unscale(px, order.x(), false),
            self.unscale(py, order.y(), true),
        )
    }

    /// Pixel position of an endpoint.
    pub fn to_pixel(&self, order: AxisOrder, point: Endpoint) -> (f64, f64) {
        (
            self.scale(point.x, order.x(), false),
            self.scale(point.y, order.y(), true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let view = Viewport::new(420);
        let order = AxisOrder::HueLightness;

        assert_eq!(view.to_plane(order, 0.0, 0.0), Endpoint::new(0.0, 100.0));
        assert_eq!(view.to_plane(order, 420.0, 420.0), Endpoint::new(360.0, 0.0));
        assert_eq!(view.to_plane(order, 210.0, 210.0), Endpoint::new(180.0, 50.0));
    }

    #[test]
    fn test_to_pixel_flips_y() {
        let view = Viewport::new(200);
        let (px, py) = view.to_pixel(AxisOrder::ChromaLightness, Endpoint::new(135.0, 100.0));
        assert_eq!((px, py), (200.0, 0.0));
    }

    #[test]
    fn test_round_trip() {
        let view = Viewport::new(420);
        for order in AxisOrder::ALL {
            for &(px, py) in &[(0.0, 0.0), (13.0, 400.0), (210.5, 17.25), (420.0, 420.0)] {
                let point = view.to_plane(order, px, py);
                let (bx, by) = view.to_pixel(order, point);
                assert!((bx - px).abs() < 1e-9, "{order} x {px} -> {bx}");
                assert!((by - py).abs() < 1e-9, "{order} y {py} -> {by}");
            }
        }
    }

    #[test]
    fn test_zero_size_is_treated_as_one() {
        let view = Viewport::new(0);
        assert_eq!(view.size(), 1.0);
    }
}
