mod axis;
mod colour;
mod selection;
mod viewport;

pub use axis::{Axis, AxisOrder};
pub use colour::{DisplayColour, Lch, Rgba};
pub use selection::{validate_steps, Endpoint, Selection, DEFAULT_STEPS, MAX_STEPS, MIN_STEPS};
pub use viewport::Viewport;
