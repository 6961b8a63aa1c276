//! Gradient sampling along a straight line in the current plane.

use serde::Serialize;

use crate::convert::lch_to_display;
use crate::error::Result;
use crate::types::{validate_steps, AxisOrder, DisplayColour, Endpoint, Selection};

/// One sample of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swatch {
    /// Position in the plane, for placing markers.
    pub point: Endpoint,
    #[serde(flatten)]
    pub colour: DisplayColour,
}

/// Sample `steps` colours from `from` to `to` with the slice fixed at `z`.
///
/// The first and last samples are converted from the endpoints themselves.
/// Samples in between are independent conversions of the linearly
/// interpolated plane coordinates, so any of them may be out of gamut even
/// when both ends are not.
pub fn sample(
    axes: AxisOrder,
    z: f64,
    from: Endpoint,
    to: Endpoint,
    steps: i64,
) -> Result<Vec<Swatch>> {
    let steps = usize::from(validate_steps(steps)?);
    let last = steps - 1;

    let swatches = (0..steps)
        .map(|i| {
            let point = match i {
                0 => from,
                i if i == last => to,
                i => from.lerp(to, i as f64 / last as f64),
            };
            Swatch {
                point,
                colour: lch_to_display(point.to_lch(axes, z)),
            }
        })
        .collect();

    Ok(swatches)
}

/// Sample the gradient described by a selection.
pub fn sample_selection(selection: &Selection) -> Result<Vec<Swatch>> {
    sample(
        selection.axes,
        selection.z,
        selection.from,
        selection.to,
        i64::from(selection.steps()),
    )
}

/// Comma-separated `#rrggbb` list, the form copied to the clipboard.
pub fn hex_list(swatches: &[Swatch]) -> String {
    swatches
        .iter()
        .map(|s| s.colour.hex())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Number of samples that fell outside the sRGB gamut.
pub fn clipped_count(swatches: &[Swatch]) -> usize {
    swatches.iter().filter(|s| !s.colour.in_gamut()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LchError;
    use crate::types::MAX_STEPS;

    const FROM: Endpoint = Endpoint::new(2.53, 66.75);
    const TO: Endpoint = Endpoint::new(237.2, 66.8);

    #[test]
    fn test_endpoints_are_exact() {
        let swatches = sample(AxisOrder::HueLightness, 45.0, FROM, TO, 5).unwrap();
        assert_eq!(swatches[0].colour, lch_to_display(FROM.to_lch(AxisOrder::HueLightness, 45.0)));
        assert_eq!(swatches[4].colour, lch_to_display(TO.to_lch(AxisOrder::HueLightness, 45.0)));
        assert_eq!(swatches[0].point, FROM);
        assert_eq!(swatches[4].point, TO);
    }

    #[test]
    fn test_length_matches_steps() {
        for steps in 3..=i64::from(MAX_STEPS) {
            let swatches = sample(AxisOrder::HueChroma, 60.0, FROM, TO, steps).unwrap();
            assert_eq!(swatches.len() as i64, steps);
        }
    }

    #[test]
    fn test_invalid_steps() {
        for steps in [-3, 0, 1, 2, 13, 100] {
            let err = sample(AxisOrder::HueLightness, 45.0, FROM, TO, steps).unwrap_err();
            assert!(matches!(err, LchError::InvalidStepCount { .. }));
        }
    }

    #[test]
    fn test_midpoint_is_interpolated() {
        let from = Endpoint::new(0.0, 40.0);
        let to = Endpoint::new(100.0, 80.0);
        let swatches = sample(AxisOrder::ChromaLightness, 200.0, from, to, 3).unwrap();
        assert_eq!(swatches[1].point, Endpoint::new(50.0, 60.0));
    }

    #[test]
    fn test_intermediate_may_clip() {
        // White to a saturated red at hue 30: both ends fit, the midpoint
        // overshoots the red channel.
        let from = Endpoint::new(0.0, 100.0);
        let to = Endpoint::new(70.0, 60.0);
        let swatches = sample(AxisOrder::ChromaLightness, 30.0, from, to, 3).unwrap();
        assert!(swatches[0].colour.in_gamut());
        assert!(!swatches[1].colour.in_gamut());
        assert!(swatches[2].colour.in_gamut());
        assert_eq!(clipped_count(&swatches), 1);
    }

    #[test]
    fn test_hex_list() {
        let swatches = sample(
            AxisOrder::HueLightness,
            0.0,
            Endpoint::new(0.0, 0.0),
            Endpoint::new(0.0, 100.0),
            3,
        )
        .unwrap();
        let list = hex_list(&swatches);
        assert!(list.starts_with("#000000, #"));
        assert!(list.ends_with(", #ffffff"));
    }

    #[test]
    fn test_sample_selection() {
        let selection = Selection::new(AxisOrder::HueLightness, 45.0, FROM, TO, 7).unwrap();
        let swatches = sample_selection(&selection).unwrap();
        assert_eq!(swatches.len(), 7);
        assert_eq!(swatches[6].colour, selection.to_colour());
    }

    #[test]
    fn test_swatch_json() {
        let swatches = sample(
            AxisOrder::HueLightness,
            0.0,
            Endpoint::new(0.0, 0.0),
            Endpoint::new(0.0, 100.0),
            3,
        )
        .unwrap();
        let json = serde_json::to_value(swatches[0]).unwrap();
        assert_eq!(json["hex"], "#000000");
        assert_eq!(json["in_gamut"], true);
        assert_eq!(json["point"]["y"], 0.0);
    }
}
