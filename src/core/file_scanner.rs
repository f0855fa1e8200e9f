use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::DetectError;

pub const DEFAULT_EXTENSIONS: &[&str] = &[".jsx", ".tsx", ".js", ".ts"];

pub const DEFAULT_IGNORES: &[&str] = &["node_modules", "dist", "build"];

/// Check if a pattern contains glob syntax (`*`, `?` or `[`).
/// Other patterns are treated as literal paths under the root.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// `*` and `?` never cross a path separator.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files in walk order (sorted by file name at each level).
    pub files: Vec<PathBuf>,
    /// Directory entries that could not be read.
    pub skipped_count: usize,
}

/// Compiled ignore rules. Globs are matched against the path relative to
/// the scan root, so the root's own name is never read as pattern syntax.
struct IgnoreRules<'a> {
    root: &'a Path,
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl<'a> IgnoreRules<'a> {
    fn new(root: &'a Path, ignore_patterns: &[String]) -> Result<Self, DetectError> {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignore_patterns {
            if is_glob_pattern(p) {
                let pattern = Pattern::new(p.trim_start_matches("./")).map_err(|e| {
                    DetectError::config(format!("Invalid ignore pattern \"{}\": {}", p, e))
                })?;
                patterns.push(pattern);
            } else {
                literal_paths.push(root.join(p));
            }
        }

        Ok(Self {
            root,
            literal_paths,
            patterns,
        })
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.literal_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }
        let Ok(relative) = path.strip_prefix(self.root) else {
            return false;
        };
        let relative = relative.to_string_lossy().replace('\\', "/");
        self.patterns
            .iter()
            .any(|p| p.matches_with(&relative, MATCH_OPTIONS))
    }
}

/// Dotfiles and dot-directories below the root are never scanned.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Normalize extensions to a leading-dot form (`tsx` -> `.tsx`).
fn normalize_extensions(extensions: &[String]) -> Result<Vec<String>, DetectError> {
    extensions
        .iter()
        .map(|ext| {
            let trimmed = ext.trim_start_matches('.');
            if trimmed.is_empty() {
                Err(DetectError::config(format!("Invalid extension \"{}\"", ext)))
            } else {
                Ok(format!(".{}", trimmed))
            }
        })
        .collect()
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| extensions.iter().any(|ext| name.ends_with(ext.as_str())))
}

/// Enumerate the candidate source files under `root`.
///
/// Fails only on misconfiguration: an empty or missing root, an invalid
/// ignore glob or an empty extension. Unreadable entries are skipped.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
) -> Result<ScanResult, DetectError> {
    if root.as_os_str().is_empty() {
        return Err(DetectError::config("srcPath is required"));
    }
    if !root.is_dir() {
        return Err(DetectError::config(format!(
            "Directory \"{}\" does not exist or wasn't found.",
            root.display()
        )));
    }

    let extensions = normalize_extensions(extensions)?;
    let rules = IgnoreRules::new(root, ignore_patterns)?;

    let mut result = ScanResult::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || (!is_hidden(entry) && !rules.is_ignored(entry.path()))
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!("Cannot access path: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() && has_extension(entry.path(), &extensions) {
            result.files.push(entry.into_path());
        }
    }

    debug!(
        "Found {} file(s) under {}",
        result.files.len(),
        root.display()
    );

    Ok(result)
}
