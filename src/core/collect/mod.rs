//! Declaration and usage collection.
//!
//! Both passes parse each file independently and walk the swc AST with a
//! `Visit` implementation:
//!
//! - `declarations`: pass 1, records component declarations per file
//! - `usage`: pass 2, records JSX tag references per file

pub mod declarations;
pub mod usage;


pub use declarations::{
    DeclarationCollector, collect_declarations, is_component_name, scan_declarations,
};
pub use usage::{UsageCollector, collect_usage, scan_usage};
