//! Axes of the LCH colour space and the permitted axis orders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LchError, Result};

/// One dimension of the LCH colour space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Lightness,
    Chroma,
    Hue,
}

impl Axis {
    /// All axes in LCH slot order.
    pub const ALL: [Axis; 3] = [Axis::Lightness, Axis::Chroma, Axis::Hue];

    /// Single-letter code used in axis order strings.
    pub const fn code(self) -> char {
        match self {
            Axis::Lightness => 'l',
            Axis::Chroma => 'c',
            Axis::Hue => 'h',
        }
    }

    /// Lowercase axis name, e.g. `lightness`.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Lightness => "lightness",
            Axis::Chroma => "chroma",
            Axis::Hue => "hue",
        }
    }

    /// Index of this axis in an `(l, c, h)` triple.
    pub const fn slot(self) -> usize {
        match self {
            Axis::Lightness => 0,
            Axis::Chroma => 1,
            Axis::Hue => 2,
        }
    }

    /// Lower end of the axis range.
    pub const fn min(self) -> f64 {
        0.0
    }

    /// Upper end of the axis range.
    pub const fn max(self) -> f64 {
        match self {
            Axis::Lightness => 100.0,
            Axis::Chroma => 135.0,
            Axis::Hue => 360.0,
        }
    }

    /// Width of the axis range.
    pub fn span(self) -> f64 {
        self.max() - self.min()
    }

    /// Default UI step granularity.
    pub const fn step(self) -> f64 {
        match self {
            Axis::Lightness | Axis::Chroma => 0.1,
            Axis::Hue => 0.5,
        }
    }

    /// Number of decimals needed to show a value at this axis' granularity.
    pub fn decimals(self) -> usize {
        (-self.step().log10()).ceil().max(0.0) as usize
    }

    /// Hue wraps around at 360 degrees; the other axes do not.
    pub const fn wraps(self) -> bool {
        matches!(self, Axis::Hue)
    }

    /// Format a value with this axis' precision.
    pub fn format_value(self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }

    /// Look up an axis by its single-letter code.
    pub fn from_code(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.code() == c)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assignment of the three axes to the rendered plane (X, Y) and the
/// independent slice value (Z).
///
/// Only three permutations are permitted; any other order cannot be
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisOrder {
    /// Hue across, lightness up, chroma as the slice.
    #[default]
    HueLightness,
    /// Chroma across, lightness up, hue as the slice.
    ChromaLightness,
    /// Hue across, chroma up, lightness as the slice.
    HueChroma,
}

impl AxisOrder {
    pub const ALL: [AxisOrder; 3] = [
        AxisOrder::HueLightness,
        AxisOrder::ChromaLightness,
        AxisOrder::HueChroma,
    ];

    /// The `(X, Y, Z)` axes for this order.
    pub const fn axes(self) -> [Axis; 3] {
        match self {
            AxisOrder::HueLightness => [Axis::Hue, Axis::Lightness, Axis::Chroma],
            AxisOrder::ChromaLightness => [Axis::Chroma, Axis::Lightness, Axis::Hue],
            AxisOrder::HueChroma => [Axis::Hue, Axis::Chroma, Axis::Lightness],
        }
    }

    /// Horizontal axis.
    pub const fn x(self) -> Axis {
        self.axes()[0]
    }

    /// Vertical axis.
    pub const fn y(self) -> Axis {
        self.axes()[1]
    }

    /// Slice axis, held constant across the plane.
    pub const fn z(self) -> Axis {
        self.axes()[2]
    }

    /// LCH slot indices that receive the X, Y and Z values.
    pub const fn slots(self) -> [usize; 3] {
        let [x, y, z] = self.axes();
        [x.slot(), y.slot(), z.slot()]
    }

    /// Three-letter code, e.g. `hlc`.
    pub const fn code(self) -> &'static str {
        match self {
            AxisOrder::HueLightness => "hlc",
            AxisOrder::ChromaLightness => "clh",
            AxisOrder::HueChroma => "hcl",
        }
    }

    /// Human readable label, e.g. `hue-lightness`.
    pub fn label(self) -> String {
        format!("{}-{}", self.x().name(), self.y().name())
    }
}

impl FromStr for AxisOrder {
    type Err = LchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|order| order.code() == s)
            .ok_or_else(|| LchError::InvalidAxisOrder {
                code: s.to_string(),
            })
    }
}

impl fmt::Display for AxisOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for AxisOrder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for AxisOrder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_ranges() {
        assert_eq!(Axis::Lightness.max(), 100.0);
        assert_eq!(Axis::Chroma.max(), 135.0);
        assert_eq!(Axis::Hue.max(), 360.0);
        assert!(Axis::Hue.wraps());
        assert!(!Axis::Chroma.wraps());
    }

    #[test]
    fn test_axis_decimals() {
        assert_eq!(Axis::Lightness.decimals(), 1);
        assert_eq!(Axis::Hue.decimals(), 1);
        assert_eq!(Axis::Chroma.format_value(42.26), "42.3");
    }

    #[test]
    fn test_axis_from_code() {
        assert_eq!(Axis::from_code('l'), Some(Axis::Lightness));
        assert_eq!(Axis::from_code('h'), Some(Axis::Hue));
        assert_eq!(Axis::from_code('x'), None);
    }

    #[test]
    fn test_order_slots() {
        assert_eq!(AxisOrder::HueLightness.slots(), [2, 0, 1]);
        assert_eq!(AxisOrder::ChromaLightness.slots(), [1, 0, 2]);
        assert_eq!(AxisOrder::HueChroma.slots(), [2, 1, 0]);
    }

    #[test]
    fn test_order_slots_are_permutations() {
        for order in AxisOrder::ALL {
            let mut slots = order.slots();
            slots.sort_unstable();
            assert_eq!(slots, [0, 1, 2], "{order}");
        }
    }

    #[test]
    fn test_order_parse() {
        assert_eq!("hlc".parse::<AxisOrder>().unwrap(), AxisOrder::HueLightness);
        assert_eq!("clh".parse::<AxisOrder>().unwrap(), AxisOrder::ChromaLightness);
        assert_eq!("hcl".parse::<AxisOrder>().unwrap(), AxisOrder::HueChroma);
    }

    #[test]
    fn test_order_parse_rejects_other_permutations() {
        for code in ["lhc", "lch", "chl", "HLC", "", "hl", "zzz"] {
            let err = code.parse::<AxisOrder>().unwrap_err();
            assert!(matches!(err, LchError::InvalidAxisOrder { .. }), "{code}");
        }
    }

    #[test]
    fn test_order_label() {
        assert_eq!(AxisOrder::HueLightness.label(), "hue-lightness");
        assert_eq!(AxisOrder::HueChroma.label(), "hue-chroma");
    }

    #[test]
    fn test_order_serde() {
        let json = serde_json::to_string(&AxisOrder::ChromaLightness).unwrap();
        assert_eq!(json, "\"clh\"");
        let back: AxisOrder = serde_json::from_str("\"hcl\"").unwrap();
        assert_eq!(back, AxisOrder::HueChroma);
        assert!(serde_json::from_str::<AxisOrder>("\"lhc\"").is_err());
    }
}
