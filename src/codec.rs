//! Compact text encoding of a selection.
//!
//! The encoded form is `AXES/STEPS/FROMHEX/TOHEX`, for example
//! `hlc/5/c76584/30c2f8`. Decoding is forgiving: every field is checked on
//! its own and an invalid field keeps its fallback value, so a truncated or
//! hand-edited string still restores as much as it can.
//!
//! The step field must be a whole number: `4.5` or `7abc` are treated as
//! invalid and keep the fallback, where a lenient integer parse would read
//! them as 4 and 7.
//!
//! Endpoints are stored as their displayed (clamped) hex. An out-of-gamut
//! endpoint therefore decodes to a slightly different colour and may move
//! once more on the next encode before settling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::{hex_to_srgb8, srgb8_to_lch, srgb_to_hex};
use crate::error::Result;
use crate::types::{validate_steps, AxisOrder, Selection, DEFAULT_STEPS};

/// Default `from` colour.
pub const DEFAULT_FROM: [u8; 3] = [0xec, 0x80, 0xa1];

/// Default `to` colour.
pub const DEFAULT_TO: [u8; 3] = [0x08, 0xb1, 0xe6];

/// Decoded fields of an encoded selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub axes: AxisOrder,
    pub steps: u8,
    #[serde(with = "hex_colour")]
    pub from: [u8; 3],
    #[serde(with = "hex_colour")]
    pub to: [u8; 3],
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            axes: AxisOrder::default(),
            steps: DEFAULT_STEPS,
            from: DEFAULT_FROM,
            to: DEFAULT_TO,
        }
    }
}

impl SavedState {
    /// Project the stored colours into the plane of the stored axis order.
    pub fn to_selection(&self) -> Result<Selection> {
        Selection::from_colours(
            self.axes,
            srgb8_to_lch(self.from),
            srgb8_to_lch(self.to),
            i64::from(self.steps),
        )
    }

    /// Capture a selection's axes, steps and endpoint colours.
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            axes: selection.axes,
            steps: selection.steps(),
            from: selection.from_colour().rgb(),
            to: selection.to_colour().rgb(),
        }
    }
}

impl fmt::Display for SavedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.axes,
            self.steps,
            &srgb_to_hex(self.from)[1..],
            &srgb_to_hex(self.to)[1..]
        )
    }
}

/// Encode a selection.
pub fn encode(selection: &Selection) -> String {
    SavedState::from_selection(selection).to_string()
}

/// Decode an encoded selection, falling back to the built-in defaults.
pub fn decode(text: &str) -> SavedState {
    decode_onto(text, SavedState::default())
}

/// Decode an encoded selection, keeping fields of `prior` that are missing
/// or invalid in `text`. Never fails.
pub fn decode_onto(text: &str, prior: SavedState) -> SavedState {
    let text = text.trim();
    let text = text.strip_prefix('#').unwrap_or(text);
    let mut fields = text.split('/');
    let mut state = prior;

    if let Some(axes) = fields.next().and_then(|f| f.parse().ok()) {
        state.axes = axes;
    }
    if let Some(steps) = fields
        .next()
        .and_then(|f| f.parse::<i64>().ok())
        .and_then(|n| validate_steps(n).ok())
    {
        state.steps = steps;
    }
    if let Some(from) = fields.next().and_then(|f| hex_to_srgb8(f).ok()) {
        state.from = from;
    }
    if let Some(to) = fields.next().and_then(|f| hex_to_srgb8(f).ok()) {
        state.to = to;
    }

    state
}

mod hex_colour {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::convert::{hex_to_srgb8, srgb_to_hex};

    pub fn serialize<S: Serializer>(rgb: &[u8; 3], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&srgb_to_hex(*rgb))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 3], D::Error> {
        let text = String::deserialize(deserializer)?;
        hex_to_srgb8(&text).map_err(serde::de::Error::custom)
    }
}
