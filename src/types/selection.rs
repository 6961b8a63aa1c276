//! The user's current selection: axis order, slice value, two endpoints and
//! a step count.

use serde::{Deserialize, Serialize};

use crate::convert::lch_to_display;
use crate::error::{LchError, Result};

use super::axis::AxisOrder;
use super::colour::{DisplayColour, Lch};

/// Fewest swatches in a gradient.
pub const MIN_STEPS: u8 = 3;

/// Most swatches in a gradient.
pub const MAX_STEPS: u8 = 12;

/// Step count used when nothing else is specified.
pub const DEFAULT_STEPS: u8 = 5;

/// Check a step count, returning it narrowed to `u8`.
pub fn validate_steps(steps: i64) -> Result<u8> {
    if (i64::from(MIN_STEPS)..=i64::from(MAX_STEPS)).contains(&steps) {
        Ok(steps as u8)
    } else {
        Err(LchError::InvalidStepCount { steps })
    }
}

/// A point in the current (X, Y) plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Endpoint {
    pub x: f64,
    pub y: f64,
}

impl Endpoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point a fraction `t` of the way from `self` to `other`.
    pub fn lerp(self, other: Endpoint, t: f64) -> Endpoint {
        Endpoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Full colour of this point with the given slice value.
    pub fn to_lch(self, order: AxisOrder, z: f64) -> Lch {
        Lch::from_plane(order, self.x, self.y, z)
    }

    /// Project a colour onto the plane of `order`, dropping its Z value.
    pub fn project(lch: Lch, order: AxisOrder) -> Endpoint {
        let (x, y, _) = lch.to_plane(order);
        Endpoint { x, y }
    }
}

/// Complete selection state held by the caller.
///
/// The core never keeps a reference to a selection; it reads the values it
/// needs and hands back new ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub axes: AxisOrder,
    /// Shared value along the Z axis.
    pub z: f64,
    pub from: Endpoint,
    pub to: Endpoint,
    steps: u8,
}

impl Selection {
    /// Create a selection, validating the step count.
    pub fn new(axes: AxisOrder, z: f64, from: Endpoint, to: Endpoint, steps: i64) -> Result<Self> {
        Ok(Self {
            axes,
            z,
            from,
            to,
            steps: validate_steps(steps)?,
        })
    }

    /// Build a selection from two colours.
    ///
    /// Both colours are projected onto the plane of `axes`; the slice value
    /// comes from `from`.
    pub fn from_colours(axes: AxisOrder, from: Lch, to: Lch, steps: i64) -> Result<Self> {
        let (_, _, z) = from.to_plane(axes);
        Self::new(
            axes,
            z,
            Endpoint::project(from, axes),
            Endpoint::project(to, axes),
            steps,
        )
    }

    /// Number of gradient swatches.
    pub fn steps(&self) -> u8 {
        self.steps
    }

    /// Change the swatch count. Out-of-range values are an error and leave it
    /// unchanged.
    pub fn set_steps(&mut self, steps: i64) -> Result<()> {
        self.steps = validate_steps(steps)?;
        Ok(())
    }

    /// Add one step, stopping at the maximum.
    pub fn step_up(&mut self) {
        self.steps = (self.steps + 1).min(MAX_STEPS);
    }

    /// Remove one step, stopping at the minimum.
    pub fn step_down(&mut self) {
        self.steps = self.steps.saturating_sub(1).max(MIN_STEPS);
    }

    /// Full colour of the `from` endpoint.
    pub fn from_lch(&self) -> Lch {
        self.from.to_lch(self.axes, self.z)
    }

    /// Full colour of the `to` endpoint.
    pub fn to_lch(&self) -> Lch {
        self.to.to_lch(self.axes, self.z)
    }

    /// Displayed colour of the `from` endpoint.
    pub fn from_colour(&self) -> DisplayColour {
        lch_to_display(self.from_lch())
    }

    /// Displayed colour of the `to` endpoint.
    pub fn to_colour(&self) -> DisplayColour {
        lch_to_display(self.to_lch())
    }

    /// Switch to another axis order.
    ///
    /// Each endpoint keeps its full colour: the old `(x, y, z)` triple is
    /// rearranged into the new order. The new slice value comes from `from`,
    /// so `to` may move off its previous Z.
    pub fn reorient(&self, axes: AxisOrder) -> Selection {
        if axes == self.axes {
            return self.clone();
        }
        let from = self.from_lch();
        let to = self.to_lch();
        let (_, _, z) = from.to_plane(axes);
        Selection {
            axes,
            z,
            from: Endpoint::project(from, axes),
            to: Endpoint::project(to, axes),
            steps: self.steps,
        }
    }
}
