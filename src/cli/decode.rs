//! Decode command implementation.

use clap::Args;

use crate::codec::SavedState;
use crate::config::Config;
use crate::convert::srgb_to_hex;
use crate::error::Result;
use crate::output::Printer;

/// Show the fields of an encoded selection
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Encoded state, e.g. hlc/5/c76584/30c2f8
    pub state: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DecodeArgs, config: &Config, printer: &Printer) -> Result<()> {
    let state = super::resolve_state(Some(&args.state), config)?;

    let canonical = state.to_string();
    let input = args.state.trim();
    if canonical != input.strip_prefix('#').unwrap_or(input) {
        printer.warning("Normalized", &format!("{} -> {}", input, canonical));
    }

    if args.json {
        println!("{}", super::to_json(&state)?);
    } else {
        print!("{}", describe(&state));
    }
    Ok(())
}

/// Human readable field listing.
pub fn describe(state: &SavedState) -> String {
    format!(
        "axes:  {} ({})\nsteps: {}\nfrom:  {}\nto:    {}\n",
        state.axes,
        state.axes.label(),
        state.steps,
        srgb_to_hex(state.from),
        srgb_to_hex(state.to)
    )
}
