//! Slice command implementation.
//!
//! Renders the plane of a selection's axis order at one slice value and
//! writes it as a PNG at the canvas size.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;

use crate::config::Config;
use crate::error::{LchError, Result};
use crate::output::{display_path, millis, plural, Printer};
use crate::render::{write_png, ColorSpaceRasterizer, RenderTimer};
use crate::types::AxisOrder;

/// Render a slice of the colour space to PNG
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Encoded state, e.g. hlc/5/c76584/30c2f8 (config defaults when omitted)
    pub state: Option<String>,

    /// Slice value along the fixed axis (default: taken from the `from` colour)
    #[arg(long, allow_negative_numbers = true)]
    pub z: Option<f64>,

    /// Output file (default: <output>/<axes>-<z>.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Canvas size in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Render time budget in milliseconds
    #[arg(long)]
    pub budget_ms: Option<u64>,
}

/// Rendering settings after applying flags over config.
#[derive(Debug, Clone)]
pub struct SliceSettings {
    pub size: u32,
    pub budget: Duration,
    pub max_scale: u32,
}

impl SliceSettings {
    pub fn resolve(size: Option<u32>, budget_ms: Option<u64>, config: &Config) -> Result<Self> {
        let size = size.unwrap_or(config.canvas_size);
        if size == 0 {
            return Err(LchError::Render {
                message: "Canvas size must be at least 1".to_string(),
                help: Some("Pass --size with a positive number of pixels".to_string()),
            });
        }
        Ok(Self {
            size,
            budget: budget_ms.map_or(config.budget(), Duration::from_millis),
            max_scale: config.max_scale,
        })
    }

    pub fn rasterizer(&self) -> ColorSpaceRasterizer {
        ColorSpaceRasterizer::new(self.size).with_max_scale(self.max_scale)
    }
}

pub fn run(args: SliceArgs, config: &Config, printer: &Printer) -> Result<()> {
    let state = super::resolve_state(args.state.as_deref(), config)?;
    let selection = state.to_selection()?;
    let settings = SliceSettings::resolve(args.size, args.budget_ms, config)?;

    let z = clamp_z(selection.axes, args.z.unwrap_or(selection.z));
    let path = args
        .output
        .unwrap_or_else(|| config.output.join(default_file_name(selection.axes, z)));

    let mut rasterizer = settings.rasterizer();
    render_to(&mut rasterizer, selection.axes, z, settings.budget, &path, printer)?;
    Ok(())
}

/// Bring `z` into the range of the slice axis: hue wraps, the other axes
/// are clamped.
pub fn clamp_z(axes: AxisOrder, z: f64) -> f64 {
    let axis = axes.z();
    if z.is_nan() {
        return axis.min();
    }
    if axis.wraps() {
        z.rem_euclid(axis.span()) + axis.min()
    } else {
        z.clamp(axis.min(), axis.max())
    }
}

/// e.g. `hlc-45.0.png`
pub fn default_file_name(axes: AxisOrder, z: f64) -> String {
    format!("{}-{}.png", axes.code(), axes.z().format_value(z))
}

/// Rasterize one slice and write it to `path`, creating parent directories.
pub fn render_to<T: RenderTimer>(
    rasterizer: &mut ColorSpaceRasterizer<T>,
    axes: AxisOrder,
    z: f64,
    budget: Duration,
    path: &Path,
    printer: &Printer,
) -> Result<()> {
    let calibrated = rasterizer.scale().is_some();
    let buffer = rasterizer.rasterize(axes, z, budget);

    if let Some(elapsed) = rasterizer.last_render_time() {
        if !calibrated {
            printer.info(
                "Calibrated",
                &format!(
                    "scale {} ({}x{} pixels, {})",
                    buffer.scale(),
                    buffer.side(),
                    buffer.side(),
                    millis(elapsed)
                ),
            );
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| LchError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    write_png(&buffer, path)?;

    let clipped = buffer.clipped_count();
    let mut message = format!(
        "{} slice at {}={} to {}",
        axes.label(),
        axes.z().code().to_ascii_uppercase(),
        axes.z().format_value(z),
        printer.cyan(&display_path(path))
    );
    if clipped > 0 {
        message.push_str(&printer.dim(&format!(
            " ({} outside sRGB)",
            plural(clipped, "pixel", "pixels")
        )));
    }
    printer.status("Rendered", &message);
    Ok(())
}
