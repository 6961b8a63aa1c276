pub mod axes;
pub mod completions;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod gradient;
pub mod slice;
pub mod watch;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::codec::{decode_onto, SavedState};
use crate::config::Config;
use crate::error::{LchError, Result};

/// lchgrad - LCH colour space slices and perceptual gradients
#[derive(Parser, Debug)]
#[command(name = "lchgrad")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: lchgrad.yaml in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a slice of the colour space to PNG
    Slice(slice::SliceArgs),

    /// Print the swatches of a gradient
    Gradient(gradient::GradientArgs),

    /// Encode a selection as AXES/STEPS/FROM/TO
    Encode(encode::EncodeArgs),

    /// Show the fields of an encoded selection
    Decode(decode::DecodeArgs),

    /// Convert between hex and LCH
    Convert(convert::ConvertArgs),

    /// Re-project a selection into another axis order
    Axes(axes::AxesArgs),

    /// Re-render whenever a state file changes
    Watch(watch::WatchArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load `--config` if given, else lchgrad.yaml from the working directory.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    Config::discover(path, &cwd)
}

/// Decode `state` on top of the configured defaults, or return the defaults
/// when no state was given.
pub fn resolve_state(state: Option<&str>, config: &Config) -> Result<SavedState> {
    let defaults = config.default_state()?;
    Ok(match state {
        Some(text) => decode_onto(text, defaults),
        None => defaults,
    })
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| LchError::Render {
        message: format!("Failed to serialize JSON: {}", e),
        help: None,
    })
}
