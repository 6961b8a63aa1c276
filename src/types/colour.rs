//! Colour value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::axis::{Axis, AxisOrder};

/// A point in the cylindrical LCH colour space.
///
/// Hue is in degrees. When chroma is zero the hue carries no meaning and any
/// value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Lch {
    /// Create a colour from lightness, chroma and hue in degrees.
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Build a colour from plane coordinates and the slice value.
    pub fn from_plane(order: AxisOrder, x: f64, y: f64, z: f64) -> Self {
        let [ix, iy, iz] = order.slots();
        let mut slots = [0.0; 3];
        slots[ix] = x;
        slots[iy] = y;
        slots[iz] = z;
        Self::from_slots(slots)
    }

    /// Build a colour from an `[l, c, h]` triple.
    pub const fn from_slots(slots: [f64; 3]) -> Self {
        Self::new(slots[0], slots[1], slots[2])
    }

    /// The `[l, c, h]` triple.
    pub const fn to_slots(self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }

    /// Value along the given axis.
    pub fn get(self, axis: Axis) -> f64 {
        self.to_slots()[axis.slot()]
    }

    /// Split into `(x, y, z)` for the given order.
    pub fn to_plane(self, order: AxisOrder) -> (f64, f64, f64) {
        let [x, y, z] = order.axes();
        (self.get(x), self.get(y), self.get(z))
    }
}

impl fmt::Display for Lch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lch({:.2}% {:.2} {:.2})", self.l, self.c, self.h)
    }
}

/// A quantized sRGB colour plus whether the source colour was in gamut.
///
/// Only the conversion module creates these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayColour {
    rgb: [u8; 3],
    in_gamut: bool,
}

impl DisplayColour {
    /// Create a display colour from quantized channels.
    pub(crate) const fn new(rgb: [u8; 3], in_gamut: bool) -> Self {
        Self { rgb, in_gamut }
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        self.rgb[0]
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        self.rgb[1]
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.rgb[2]
    }

    /// Channels as `[r, g, b]`.
    pub const fn rgb(self) -> [u8; 3] {
        self.rgb
    }

    /// Whether every channel was within [0, 1] before quantization.
    pub const fn in_gamut(self) -> bool {
        self.in_gamut
    }

    /// Lowercase `#rrggbb`.
    pub fn hex(self) -> String {
        format!("#{}", self.bare_hex())
    }

    /// Lowercase `rrggbb` without the leading `#`.
    pub fn bare_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }

    /// Opaque pixel with this colour.
    pub const fn to_rgba(self) -> Rgba {
        Rgba::rgb(self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

impl fmt::Display for DisplayColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[derive(Serialize)]
struct DisplayColourRepr {
    hex: String,
    in_gamut: bool,
}

impl Serialize for DisplayColour {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        DisplayColourRepr {
            hex: self.hex(),
            in_gamut: self.in_gamut,
        }
        .serialize(serializer)
    }
}

/// An RGBA pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a pixel from RGBA channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Marker for out-of-gamut raster cells: red with zero alpha.
    pub const CLIPPED: Self = Self::new(255, 0, 0, 0);

    /// Channels as `[r, g, b, a]`, the layout `image` expects.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_plane_places_slots() {
        let lch = Lch::from_plane(AxisOrder::HueLightness, 120.0, 60.0, 30.0);
        assert_eq!(lch, Lch::new(60.0, 30.0, 120.0));

        let lch = Lch::from_plane(AxisOrder::ChromaLightness, 40.0, 70.0, 200.0);
        assert_eq!(lch, Lch::new(70.0, 40.0, 200.0));

        let lch = Lch::from_plane(AxisOrder::HueChroma, 10.0, 20.0, 50.0);
        assert_eq!(lch, Lch::new(50.0, 20.0, 10.0));
    }

    #[test]
    fn test_to_plane_inverts_from_plane() {
        for order in AxisOrder::ALL {
            let lch = Lch::from_plane(order, 1.0, 2.0, 3.0);
            assert_eq!(lch.to_plane(order), (1.0, 2.0, 3.0));
        }
    }

    #[test]
    fn test_display_colour_hex() {
        let c = DisplayColour::new([0xec, 0x80, 0xa1], true);
        assert_eq!(c.hex(), "#ec80a1");
        assert_eq!(c.bare_hex(), "ec80a1");
        assert_eq!(c.to_string(), "#ec80a1");
        assert_eq!(c.to_rgba(), Rgba::rgb(0xec, 0x80, 0xa1));
    }

    #[test]
    fn test_display_colour_json() {
        let c = DisplayColour::new([0, 15, 255], false);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r##"{"hex":"#000fff","in_gamut":false}"##);
    }

    #[test]
    fn test_clipped_marker() {
        assert_eq!(Rgba::CLIPPED.to_array(), [255, 0, 0, 0]);
        assert!(Rgba::CLIPPED.is_transparent());
    }
}
