//! Watch command implementation.
//!
//! Re-renders whenever a file holding an encoded state changes. File events
//! arrive on the main thread and go to a coalescing worker, so a burst of
//! saves costs at most one render in flight plus one for the latest state.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use clap::Args;
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::codec::{decode_onto, SavedState};
use crate::config::Config;
use crate::error::{LchError, Result};
use crate::gradient::{sample_selection, Swatch};
use crate::output::{display_path, Printer};
use crate::render::ColorSpaceRasterizer;
use crate::schedule::{Submitted, Worker};

use super::gradient::format_swatches;
use super::slice::{render_to, SliceSettings};

/// Re-render whenever a state file changes
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// File whose first non-empty line is an encoded state
    #[arg(required = true)]
    pub file: PathBuf,

    /// Output PNG (default: <output>/<file stem>.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Canvas size in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Render time budget in milliseconds
    #[arg(long)]
    pub budget_ms: Option<u64>,
}

/// Render state kept between recomputes.
///
/// The rasterizer keeps its calibrated scale for as long as the axis order
/// does not change.
#[derive(Debug)]
pub struct Session {
    rasterizer: ColorSpaceRasterizer,
    settings: SliceSettings,
    output: PathBuf,
    printer: Printer,
}

impl Session {
    pub fn new(settings: SliceSettings, output: PathBuf, printer: Printer) -> Self {
        Self {
            rasterizer: settings.rasterizer(),
            settings,
            output,
            printer,
        }
    }

    /// Render the slice for `state` and print its swatches.
    pub fn recompute(&mut self, state: SavedState) -> Result<Vec<Swatch>> {
        let selection = state.to_selection()?;
        render_to(
            &mut self.rasterizer,
            selection.axes,
            selection.z,
            self.settings.budget,
            &self.output,
            &self.printer,
        )?;

        let swatches = sample_selection(&selection)?;
        print!("{}", format_swatches(&swatches, &self.printer));
        Ok(swatches)
    }
}

pub fn run(args: WatchArgs, config: &Config, printer: &Printer) -> Result<()> {
    let settings = SliceSettings::resolve(args.size, args.budget_ms, config)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.join(default_output_name(&args.file)));

    let mut session = Session::new(settings, output, *printer);
    let worker_printer = *printer;
    let worker = Worker::spawn("lchgrad-render", move |state: SavedState| {
        if let Err(e) = session.recompute(state) {
            worker_printer.error("Error", &e.to_string());
        }
    })?;

    let mut last = config.default_state()?;
    submit_file(&args.file, &mut last, &worker, printer);

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(|e| watch_error(&args.file, e))?;
    watcher
        .watch(watch_dir(&args.file), RecursiveMode::NonRecursive)
        .map_err(|e| watch_error(&args.file, e))?;

    printer.info("Watching", &printer.cyan(&display_path(&args.file)));

    for res in rx {
        match res {
            Ok(event) if touches(&event, &args.file) => {
                submit_file(&args.file, &mut last, &worker, printer);
            }
            Ok(_) => {}
            Err(e) => printer.warning("Warning", &e.to_string()),
        }
    }

    worker.shutdown();
    Ok(())
}

/// Read the state file, decoding over the last good state.
pub fn read_state(path: &Path, prior: SavedState) -> Result<SavedState> {
    let content = fs::read_to_string(path).map_err(|e| LchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read state: {}", e),
    })?;
    let line = content.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    Ok(decode_onto(line, prior))
}

fn submit_file(path: &Path, last: &mut SavedState, worker: &Worker<SavedState>, printer: &Printer) {
    match read_state(path, *last) {
        Ok(state) => {
            *last = state;
            if worker.submit(state) == Submitted::Replaced {
                printer.info("Skipped", &printer.dim("superseded render request"));
            }
        }
        // Editors may replace the file in several steps; the next event retries.
        Err(e) => printer.warning("Warning", &e.to_string()),
    }
}

/// Whether a watcher event changed `file`.
pub fn touches(event: &Event, file: &Path) -> bool {
    let relevant = matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_));
    relevant
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == file.file_name())
}

/// e.g. `state.txt` renders to `state.png`
pub fn default_output_name(file: &Path) -> String {
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("watch");
    format!("{}.png", stem)
}

fn watch_dir(file: &Path) -> &Path {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn watch_error(file: &Path, e: notify::Error) -> LchError {
    LchError::Render {
        message: format!("Failed to watch {}: {}", file.display(), e),
        help: Some("Check that the file's directory exists".to_string()),
    }
}
