//! Gradient command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::gradient::{clipped_count, hex_list, sample_selection, Swatch};
use crate::output::{display_path, plural, Printer};
use crate::render::write_swatch_strip;

/// Print the swatches of a gradient
#[derive(Args, Debug)]
pub struct GradientArgs {
    /// Encoded state, e.g. hlc/5/c76584/30c2f8 (config defaults when omitted)
    pub state: Option<String>,

    /// Number of swatches (3-12), overriding the state
    #[arg(long)]
    pub steps: Option<i64>,

    /// Print swatches as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write a swatch strip PNG
    #[arg(long)]
    pub png: Option<PathBuf>,
}

pub fn run(args: GradientArgs, config: &Config, printer: &Printer) -> Result<()> {
    let state = super::resolve_state(args.state.as_deref(), config)?;
    let mut selection = state.to_selection()?;
    if let Some(steps) = args.steps {
        selection.set_steps(steps)?;
    }

    let swatches = sample_selection(&selection)?;

    if args.json {
        println!("{}", super::to_json(&swatches)?);
    } else {
        print!("{}", format_swatches(&swatches, printer));
    }

    let clipped = clipped_count(&swatches);
    if clipped > 0 {
        printer.warning(
            "Clipped",
            &format!(
                "{} of {} outside sRGB",
                plural(clipped, "swatch", "swatches"),
                swatches.len()
            ),
        );
    }

    if let Some(path) = &args.png {
        write_swatch_strip(&swatches, config.swatch_size, path)?;
        printer.status("Wrote", &printer.cyan(&display_path(path)));
    }

    Ok(())
}

/// One line per swatch followed by the comma-separated hex list.
pub fn format_swatches(swatches: &[Swatch], printer: &Printer) -> String {
    let mut out = String::new();
    for (i, swatch) in swatches.iter().enumerate() {
        out.push_str(&printer.swatch_line(i, swatch.colour));
        out.push('\n');
    }
    out.push_str(&hex_list(swatches));
    out.push('\n');
    out
}
