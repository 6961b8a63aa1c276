//! Convert command implementation.

use clap::Args;

use crate::convert::{hex_to_lch, lch_to_display};
use crate::error::Result;
use crate::output::Printer;
use crate::types::Lch;

/// Convert between hex and LCH
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Hex colour to convert to LCH, e.g. #c76584
    #[arg(required_unless_present = "lch", conflicts_with = "lch")]
    pub color: Option<String>,

    /// LCH components to convert to hex
    #[arg(long, num_args = 3, value_names = ["L", "C", "H"], allow_negative_numbers = true)]
    pub lch: Option<Vec<f64>>,
}

/// What a conversion produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    Lch(Lch),
    Hex { hex: String, in_gamut: bool },
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    match convert(&args)? {
        Converted::Lch(lch) => println!("{}", lch),
        Converted::Hex { hex, in_gamut } => {
            println!("{}", hex);
            if !in_gamut {
                printer.warning("Clipped", "colour is outside sRGB; showing the clamped value");
            }
        }
    }
    Ok(())
}

pub fn convert(args: &ConvertArgs) -> Result<Converted> {
    match (&args.color, &args.lch) {
        (_, Some(lch)) if lch.len() == 3 => {
            let colour = lch_to_display(Lch::new(lch[0], lch[1], lch[2]));
            Ok(Converted::Hex {
                hex: colour.hex(),
                in_gamut: colour.in_gamut(),
            })
        }
        (Some(color), _) => Ok(Converted::Lch(hex_to_lch(color)?)),
        _ => Err(crate::error::LchError::Render {
            message: "Nothing to convert".to_string(),
            help: Some("Pass a hex colour or --lch L C H".to_string()),
        }),
    }
}
