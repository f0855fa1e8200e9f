//! Two-pass unused component detection.
//!
//! 1. Enumerate candidate files under the root.
//! 2. Pass 1: parse every file and collect component declarations.
//! 3. Pass 2: parse every file again and mark rendered components as used.
//!
//! Files are read and parsed in parallel within a pass, but results are
//! applied to the registry on the calling thread in enumeration order, and
//! pass 2 only starts once every pass 1 result has been applied.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::{
    ComponentRecord, DetectError, ErrorRecord, Registry,
    collect::{scan_declarations, scan_usage},
    file_scanner::{DEFAULT_EXTENSIONS, DEFAULT_IGNORES, scan_files},
    parsers::jsx::parse_jsx_file,
};

/// Options for a single detection run.
#[derive(Debug, Clone, Default)]
pub struct DetectorOptions {
    /// Directory to scan. Required.
    pub root_path: PathBuf,
    /// Ignore patterns relative to `root_path`; defaults to
    /// `node_modules`, `dist` and `build`.
    pub ignore: Option<Vec<String>>,
    /// File extensions to scan; defaults to `.jsx`, `.tsx`, `.js`, `.ts`.
    pub extensions: Option<Vec<String>>,
}

impl DetectorOptions {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Default::default()
        }
    }

    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = Some(ignore);
        self
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    fn resolved_extensions(&self) -> Vec<String> {
        self.extensions
            .clone()
            .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect())
    }

    fn resolved_ignore(&self) -> Vec<String> {
        self.ignore
            .clone()
            .unwrap_or_else(|| DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect())
    }
}

pub struct Detector {
    options: DetectorOptions,
    /// Files whose declarations could not be collected in the last run.
    errors: Vec<ErrorRecord>,
    files_scanned: usize,
}

impl Detector {
    pub fn new(options: DetectorOptions) -> Self {
        Self {
            options,
            errors: Vec::new(),
            files_scanned: 0,
        }
    }

    /// Pass 1 failures from the last `detect()` call, in enumeration order.
    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// Number of files enumerated by the last `detect()` call.
    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    /// Run both passes and return every declared component, in the order its
    /// name was first declared.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::Config`] when the root path is missing or
    /// invalid, or an ignore pattern is not a valid glob. Per-file read and
    /// parse failures never fail the run.
    pub fn detect(&mut self) -> Result<Vec<ComponentRecord>, DetectError> {
        self.errors.clear();
        self.files_scanned = 0;

        let scan = scan_files(
            &self.options.root_path,
            &self.options.resolved_extensions(),
            &self.options.resolved_ignore(),
        )?;
        let files = scan.files;
        self.files_scanned = files.len();
        if scan.skipped_count > 0 {
            warn!("Skipped {} inaccessible path(s)", scan.skipped_count);
        }

        if files.is_empty() {
            warn!("No files found to scan! Check your configuration.");
            return Ok(Vec::new());
        }

        let mut registry = Registry::new();
        self.declaration_pass(&files, &mut registry);
        usage_pass(&files, &mut registry);

        debug!(
            "Detected {} component(s) in {} file(s), {} unreadable",
            registry.len(),
            files.len(),
            self.errors.len()
        );

        Ok(registry.into_records())
    }

    fn declaration_pass(&mut self, files: &[PathBuf], registry: &mut Registry) {
        let results: Vec<_> = files
            .par_iter()
            .map(|file| (file, parse_jsx_file(file).map(|module| scan_declarations(&module))))
            .collect();

        for (file, result) in results {
            let file_path = file.to_string_lossy();
            match result {
                Ok(names) => {
                    for name in names {
                        registry.upsert(&name, &file_path);
                    }
                }
                Err(e) => {
                    debug!("Skipping declarations in {}: {}", file_path, e);
                    self.errors.push(ErrorRecord::new(file_path, &e));
                }
            }
        }
    }
}

fn usage_pass(files: &[PathBuf], registry: &mut Registry) {
    let results: Vec<_> = files
        .par_iter()
        .map(|file| (file, parse_jsx_file(file).map(|module| scan_usage(&module))))
        .collect();

    for (file, result) in results {
        match result {
            Ok(names) => {
                for name in names {
                    registry.mark_used(&name);
                }
            }
            Err(e) => debug!("Skipping usage in {}: {}", file.display(), e),
        }
    }
}

/// One-shot detection, discarding per-file errors.
pub fn detect(options: DetectorOptions) -> Result<Vec<ComponentRecord>, DetectError> {
    Detector::new(options).detect()
}
