use std::{
    env,
    io::IsTerminal,
    path::Path,
    time::Duration,
};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::args::Arguments;
use crate::{
    config::{CONFIG_FILE_NAME, load_config, resolve_src_dir},
    core::{ComponentRecord, Detector, DetectorOptions, ErrorRecord},
};

/// Everything the reporter needs from one scan.
#[derive(Debug)]
pub struct ScanOutcome {
    pub components: Vec<ComponentRecord>,
    pub errors: Vec<ErrorRecord>,
    pub files_scanned: usize,
}

impl ScanOutcome {
    pub fn unused(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.components.iter().filter(|c| !c.used)
    }

    pub fn unused_count(&self) -> usize {
        self.unused().count()
    }
}

/// Build detector options from CLI args and config, then scan.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (`--src-path`, `--ignore`, `--extensions`)
/// 2. `ucd-config.json`
/// 3. Built-in defaults
pub fn run(args: &Arguments) -> Result<ScanOutcome> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    run_in(&cwd, args)
}

pub fn run_in(cwd: &Path, args: &Arguments) -> Result<ScanOutcome> {
    let loaded = load_config(cwd)?;
    match &loaded.path {
        Some(path) => debug!("Using config file {}", path.display()),
        None => debug!("No {} found, using default configuration", CONFIG_FILE_NAME),
    }

    let src_dir = resolve_src_dir(cwd, args.src_path.as_deref(), &loaded)?;
    debug!("Scanning {}", src_dir.display());
    let config = loaded.config;

    let options = DetectorOptions {
        root_path: cwd.join(&src_dir),
        ignore: args.ignore.clone().or(config.ignore),
        extensions: args.extensions.clone().or(config.extensions),
    };

    let spinner = scan_spinner()?;
    let mut detector = Detector::new(options);
    let result = detector.detect();
    spinner.finish_and_clear();

    let components = relativize(result?, cwd);

    Ok(ScanOutcome {
        components,
        errors: detector.errors().to_vec(),
        files_scanned: detector.files_scanned(),
    })
}

/// Report paths relative to the working directory, as they were configured.
fn relativize(mut components: Vec<ComponentRecord>, cwd: &Path) -> Vec<ComponentRecord> {
    for component in &mut components {
        if let Ok(rel) = Path::new(&component.file_path).strip_prefix(cwd) {
            component.file_path = rel.to_string_lossy().to_string();
        }
    }
    components
}

fn scan_spinner() -> Result<ProgressBar> {
    if !std::io::stderr().is_terminal() {
        return Ok(ProgressBar::hidden());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("Scanning for unused components... {spinner}")
            .context("Invalid spinner template")?
            .tick_strings(&["|", "/", "-", "\\", ""]),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
