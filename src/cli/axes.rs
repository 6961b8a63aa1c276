//! Axes command implementation.
//!
//! Switches a selection to another axis order. Each endpoint keeps its
//! colour; `to` is then placed on the slice of `from`.

use clap::Args;

use crate::codec::encode;
use crate::config::Config;
use crate::error::Result;
use crate::output::Printer;
use crate::types::AxisOrder;

/// Re-project a selection into another axis order
#[derive(Args, Debug)]
pub struct AxesArgs {
    /// Encoded state, e.g. hlc/5/c76584/30c2f8
    pub state: String,

    /// Target axis order: hlc, clh or hcl
    #[arg(long)]
    pub to: AxisOrder,
}

pub fn run(args: AxesArgs, config: &Config, printer: &Printer) -> Result<()> {
    let encoded = reproject(&args, config)?;
    printer.info("Reoriented", &format!("{} -> {}", args.state.trim(), encoded));
    println!("{}", encoded);
    Ok(())
}

pub fn reproject(args: &AxesArgs, config: &Config) -> Result<String> {
    let state = super::resolve_state(Some(&args.state), config)?;
    let selection = state.to_selection()?.reorient(args.to);
    Ok(encode(&selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reproject_to(state: &str, to: AxisOrder) -> String {
        let args = AxesArgs {
            state: state.to_string(),
            to,
        };
        reproject(&args, &Config::default()).unwrap()
    }

    #[test]
    fn test_same_order_keeps_state() {
        assert_eq!(
            reproject_to("hlc/5/777777/777777", AxisOrder::HueLightness),
            "hlc/5/777777/777777"
        );
    }

    #[test]
    fn test_keeps_from_and_steps() {
        let out = reproject_to("hlc/8/c76584/30c2f8", AxisOrder::HueChroma);
        assert!(out.starts_with("hcl/8/c76584/"), "{out}");
    }

    #[test]
    fn test_grays_survive_any_order() {
        for order in AxisOrder::ALL {
            assert_eq!(
                reproject_to("clh/3/000000/000000", order),
                format!("{}/3/000000/000000", order)
            );
        }
    }
}
