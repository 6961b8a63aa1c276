//! Terminal output for the lchgrad CLI.
//!
//! Status lines go to stderr with a right-aligned coloured verb, the way
//! Cargo prints them. Stdout carries only what a script would consume: hex
//! lists, encoded states and JSON.

use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::time::Duration;

use crate::types::DisplayColour;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    /// Create a printer, enabling colour when stderr is a terminal.
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Whether escape codes are emitted.
    pub fn is_color(&self) -> bool {
        self.color
    }

    /// Print a status line with a green bold verb.
    /// e.g. "    Rendered hue-lightness slice at C=45.0 to dist/hlc-45.0.png"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Format a string as bold.
    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    /// Paths and other secondary information.
    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    /// A two-cell colour chip using a 24-bit background, or nothing when
    /// colour is off.
    pub fn chip(&self, colour: DisplayColour) -> String {
        if self.color {
            let [r, g, b] = colour.rgb();
            format!("\x1b[48;2;{r};{g};{b}m  {RESET}")
        } else {
            String::new()
        }
    }

    /// One gradient line: index, chip, hex and a clip marker.
    pub fn swatch_line(&self, index: usize, colour: DisplayColour) -> String {
        let marker = if colour.in_gamut() {
            String::new()
        } else {
            format!(" {}", self.paint(RED, "clipped"))
        };
        let chip = self.chip(colour);
        let sep = if chip.is_empty() { "" } else { " " };
        format!("{index:>2} {chip}{sep}{}{marker}", colour.hex())
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "swatch", "swatches")` gives "1 swatch".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

/// Milliseconds with one decimal, e.g. "12.5ms".
pub fn millis(d: Duration) -> String {
    format!("{:.1}ms", d.as_secs_f64() * 1000.0)
}
