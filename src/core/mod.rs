//! Core detection engine.
//!
//! ## Module Structure
//!
//! - `file_scanner`: Candidate file enumeration (extensions, ignore patterns)
//! - `parsers`: swc-based JSX/TSX parsing
//! - `collect`: Declaration (pass 1) and usage (pass 2) collectors
//! - `registry`: Name-keyed component registry
//! - `detector`: Orchestrates enumeration and both passes
//! - `error`: Error types

pub mod collect;
pub mod detector;
pub mod error;
pub mod file_scanner;
pub mod parsers;
pub mod registry;

pub use detector::{Detector, DetectorOptions, detect};
pub use error::{DetectError, ErrorRecord};
pub use registry::{ComponentRecord, Registry};
