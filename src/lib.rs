//! ucd - unused React component detector
//!
//! ucd scans a JSX/TSX source tree in two passes: the first collects
//! component declarations (exported functions, capitalized function and
//! arrow bindings), the second marks every component rendered as a JSX tag
//! anywhere in the tree as used. Whatever remains unused is reported.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, spinner, report)
//! - `config`: `ucd-config.json` loading and source directory resolution
//! - `core`: Detection engine (file scanning, parsing, collectors, registry)
//!
//! ## Example
//!
//! ```no_run
//! use ucd::core::{Detector, DetectorOptions};
//!
//! let mut detector = Detector::new(DetectorOptions::new("src"));
//! for component in detector.detect()?.iter().filter(|c| !c.used) {
//!     println!("- {} ({})", component.name, component.file_path);
//! }
//! # Ok::<(), ucd::core::DetectError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
