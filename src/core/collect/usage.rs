//! Pass 2: component usage collection.
//!
//! A usage is an identifier in the tag-name position of a JSX opening or
//! closing element. Member tags (`<Menu.Item>`) and namespaced tags
//! (`<svg:Path>`) contribute each of their identifier segments. Attribute
//! names are not tag names and never count.

use std::path::Path;

use swc_ecma_ast::{JSXElementName, JSXMemberExpr, JSXObject, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::{DetectError, Registry, parsers::jsx::parse_jsx_source};

/// Collects JSX tag identifiers in traversal order (duplicates included).
#[derive(Debug, Default)]
pub struct UsageCollector {
    pub references: Vec<String>,
}

impl UsageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_member(&mut self, member: &JSXMemberExpr) {
        match &member.obj {
            JSXObject::Ident(ident) => self.references.push(ident.sym.to_string()),
            JSXObject::JSXMemberExpr(nested) => self.collect_member(nested),
        }
        self.references.push(member.prop.sym.to_string());
    }
}

impl Visit for UsageCollector {
    fn visit_jsx_element_name(&mut self, node: &JSXElementName) {
        match node {
            JSXElementName::Ident(ident) => self.references.push(ident.sym.to_string()),
            JSXElementName::JSXMemberExpr(member) => self.collect_member(member),
            JSXElementName::JSXNamespacedName(namespaced) => {
                self.references.push(namespaced.ns.sym.to_string());
                self.references.push(namespaced.name.sym.to_string());
            }
        }
    }
}

/// JSX tag identifiers referenced by a parsed module.
pub fn scan_usage(module: &Module) -> Vec<String> {
    let mut collector = UsageCollector::new();
    module.visit_with(&mut collector);
    collector.references
}

/// Parse `file_text` and mark every registered component it renders as used.
pub fn collect_usage(
    file_path: &Path,
    file_text: &str,
    registry: &mut Registry,
) -> Result<(), DetectError> {
    let module = parse_jsx_source(file_text.to_string(), file_path)?;
    for name in scan_usage(&module) {
        registry.mark_used(&name);
    }
    Ok(())
}
