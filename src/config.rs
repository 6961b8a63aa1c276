//! Project configuration (lchgrad.yaml).
//!
//! Holds canvas and rendering settings plus the selection used when no
//! encoded state is given.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::codec::{SavedState, DEFAULT_FROM, DEFAULT_TO};
use crate::convert::{hex_to_srgb8, srgb_to_hex};
use crate::error::{LchError, Result};
use crate::render::MAX_SCALE;
use crate::types::{validate_steps, AxisOrder, DEFAULT_STEPS};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "lchgrad.yaml";

/// Configuration loaded from lchgrad.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Side of the square canvas in pixels.
    pub canvas_size: u32,

    /// Render time budget in milliseconds for resolution calibration.
    pub budget_ms: u64,

    /// Coarsest scale calibration may pick.
    pub max_scale: u32,

    /// Directory for rendered files.
    pub output: PathBuf,

    /// Side of each swatch in gradient strips.
    pub swatch_size: u32,

    /// Selection used when no state is given.
    pub defaults: Defaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_size: 420,
            budget_ms: 100,
            max_scale: MAX_SCALE,
            output: PathBuf::from("dist"),
            swatch_size: 48,
            defaults: Defaults::default(),
        }
    }
}

/// Default selection, written the way a user would type it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub axes: String,
    pub steps: i64,
    pub from: String,
    pub to: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            axes: AxisOrder::default().code().to_string(),
            steps: i64::from(DEFAULT_STEPS),
            from: srgb_to_hex(DEFAULT_FROM),
            to: srgb_to_hex(DEFAULT_TO),
        }
    }
}

impl Defaults {
    /// Validate the configured defaults.
    ///
    /// Unlike decoding an encoded state, a bad value here is an error: the
    /// file is written by the developer, not pasted by a user.
    pub fn to_state(&self) -> Result<SavedState> {
        let config_err = |e: LchError| LchError::Config {
            message: format!("Invalid defaults: {}", e),
            help: Some(format!("Check the defaults section of {}", CONFIG_FILE)),
        };

        Ok(SavedState {
            axes: self.axes.parse::<AxisOrder>().map_err(config_err)?,
            steps: validate_steps(self.steps).map_err(config_err)?,
            from: hex_to_srgb8(&self.from).map_err(config_err)?,
            to: hex_to_srgb8(&self.to).map_err(config_err)?,
        })
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content).map_err(|e| LchError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else `lchgrad.yaml` in `dir` if present, else
    /// the built-in defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(LchError::Config {
                message: "canvas_size must be at least 1".to_string(),
                help: None,
            });
        }
        if self.max_scale == 0 {
            return Err(LchError::Config {
                message: "max_scale must be at least 1".to_string(),
                help: None,
            });
        }
        self.defaults.to_state()?;
        Ok(())
    }

    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }

    /// The default selection state.
    pub fn default_state(&self) -> Result<SavedState> {
        self.defaults.to_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("canvas_size: 300").unwrap();
        assert_eq!(config.canvas_size, 300);
        assert_eq!(config.budget_ms, 100);
        assert_eq!(config.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
canvas_size: 512
budget_ms: 40
max_scale: 2
output: out/slices
swatch_size: 16
defaults:
  axes: hcl
  steps: 9
  from: "#000"
  to: 30c2f8
"##;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.canvas_size, 512);
        assert_eq!(config.budget(), Duration::from_millis(40));
        assert_eq!(config.max_scale, 2);
        assert_eq!(config.output, PathBuf::from("out/slices"));
        assert_eq!(config.swatch_size, 16);
        assert_eq!(
            config.default_state().unwrap(),
            SavedState {
                axes: AxisOrder::HueChroma,
                steps: 9,
                from: [0, 0, 0],
                to: [0x30, 0xc2, 0xf8],
            }
        );
    }

    #[test]
    fn test_default_state_matches_codec() {
        let config = Config::default();
        assert_eq!(config.default_state().unwrap(), SavedState::default());
    }

    #[test]
    fn test_invalid_defaults_are_errors() {
        for yaml in [
            "defaults: { axes: lhc }",
            "defaults: { steps: 2 }",
            "defaults: { from: nope }",
            "canvas_size: 0",
            "max_scale: 0",
        ] {
            let err = Config::parse(yaml).unwrap_err();
            assert!(matches!(err, LchError::Config { .. }), "{yaml}");
        }
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            Config::parse("canvas_size: [").unwrap_err(),
            LchError::Config { .. }
        ));
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join(CONFIG_FILE), "budget_ms: 16").unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap().budget_ms, 16);

        let other = dir.path().join("other.yaml");
        std::fs::write(&other, "budget_ms: 33").unwrap();
        assert_eq!(Config::discover(Some(&other), dir.path()).unwrap().budget_ms, 33);
    }

    #[test]
    fn test_load_missing() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, LchError::Io { .. }));
    }
}
