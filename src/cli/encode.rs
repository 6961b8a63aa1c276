//! Encode command implementation.

use clap::Args;

use crate::codec::encode;
use crate::config::Config;
use crate::convert::hex_to_lch;
use crate::error::Result;
use crate::output::Printer;
use crate::types::{AxisOrder, Selection};

/// Encode a selection as AXES/STEPS/FROM/TO
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Axis order: hlc, clh or hcl
    #[arg(long)]
    pub axes: Option<AxisOrder>,

    /// Number of swatches (3-12)
    #[arg(long)]
    pub steps: Option<i64>,

    /// Start colour as hex
    #[arg(long)]
    pub from: Option<String>,

    /// End colour as hex
    #[arg(long)]
    pub to: Option<String>,
}

pub fn run(args: EncodeArgs, config: &Config, printer: &Printer) -> Result<()> {
    println!("{}", encode_args(&args, config, printer)?);
    Ok(())
}

/// Build the selection described by `args` over the configured defaults and
/// encode it.
///
/// Both colours are placed in the slice of `from`, so `to` is reported when
/// that moves it.
pub fn encode_args(args: &EncodeArgs, config: &Config, printer: &Printer) -> Result<String> {
    let defaults = &config.defaults;
    let axes = match args.axes {
        Some(axes) => axes,
        None => defaults.axes.parse()?,
    };
    let steps = args.steps.unwrap_or(defaults.steps);
    let from = hex_to_lch(args.from.as_deref().unwrap_or(&defaults.from))?;
    let to_input = args.to.as_deref().unwrap_or(&defaults.to);
    let to = hex_to_lch(to_input)?;

    let selection = Selection::from_colours(axes, from, to, steps)?;

    let requested = crate::convert::hex_to_srgb8(to_input)?;
    let placed = selection.to_colour();
    if placed.rgb() != requested {
        printer.warning(
            "Moved",
            &format!(
                "`to` placed at {}={}: {} is now {}",
                axes.z().code().to_ascii_uppercase(),
                axes.z().format_value(selection.z),
                crate::convert::srgb_to_hex(requested),
                placed.hex()
            ),
        );
    }

    Ok(encode(&selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LchError;

    fn args(axes: Option<AxisOrder>, steps: Option<i64>, from: &str, to: &str) -> EncodeArgs {
        EncodeArgs {
            axes,
            steps,
            from: Some(from.to_string()),
            to: Some(to.to_string()),
        }
    }

    #[test]
    fn test_encode_same_slice() {
        // Two grays share chroma 0, which is the slice value of hlc.
        let out = encode_args(
            &args(Some(AxisOrder::HueLightness), Some(4), "#000", "#fff"),
            &Config::default(),
            &Printer::plain(),
        )
        .unwrap();
        assert_eq!(out, "hlc/4/000000/ffffff");
    }

    #[test]
    fn test_encode_uses_config_defaults() {
        let config = Config::parse("defaults: { axes: clh, steps: 6 }").unwrap();
        let out = encode_args(
            &EncodeArgs {
                axes: None,
                steps: None,
                from: Some("777777".to_string()),
                to: Some("777777".to_string()),
            },
            &config,
            &Printer::plain(),
        )
        .unwrap();
        assert_eq!(out, "clh/6/777777/777777");
    }

    #[test]
    fn test_encode_errors() {
        let config = Config::default();
        let printer = Printer::plain();
        assert!(matches!(
            encode_args(&args(None, Some(2), "#000", "#fff"), &config, &printer),
            Err(LchError::InvalidStepCount { steps: 2 })
        ));
        assert!(matches!(
            encode_args(&args(None, None, "xyz", "#fff"), &config, &printer),
            Err(LchError::InvalidHex { .. })
        ));
    }
}
