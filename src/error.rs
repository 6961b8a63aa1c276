use miette::Diagnostic;
use thiserror::Error;

/// Main error type for lchgrad operations
#[derive(Error, Diagnostic, Debug)]
pub enum LchError {
    #[error("Invalid hex colour: {input:?}")]
    #[diagnostic(
        code(lchgrad::hex),
        help("Use #RGB or #RRGGBB (the leading # is optional)")
    )]
    InvalidHex { input: String },

    #[error("Invalid step count: {steps}")]
    #[diagnostic(
        code(lchgrad::steps),
        help("Gradients have between 3 and 12 steps")
    )]
    InvalidStepCount { steps: i64 },

    #[error("Invalid axis order: {code:?}")]
    #[diagnostic(code(lchgrad::axes), help("Use one of hlc, clh or hcl"))]
    InvalidAxisOrder { code: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(lchgrad::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(lchgrad::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(lchgrad::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(lchgrad::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, LchError>;
