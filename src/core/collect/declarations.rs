//! Pass 1: component declaration collection.
//!
//! Recognized shapes, wherever they occur in the module:
//!
//! - `export default Foo` and `export default function Foo() {}`
//! - `export function Foo() {}` and `export const Foo = () => ...`
//!   (first declarator only, arrow or function expression initializer)
//! - non-exported `function Foo() {}` / `const Foo = () => ...` whose name
//!   starts with an uppercase ASCII letter
//!
//! Exported shapes are recorded regardless of casing.

use std::path::Path;

use swc_ecma_ast::{
    Decl, DefaultDecl, ExportDecl, ExportDefaultDecl, ExportDefaultExpr, Expr, FnDecl, Function,
    Module, Pat, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::{DetectError, Registry, parsers::jsx::parse_jsx_source};

/// Component naming convention: first character is an uppercase ASCII letter.
pub fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Collects component declaration names in traversal order.
///
/// A name may appear more than once; the registry keeps the last one.
#[derive(Debug, Default)]
pub struct DeclarationCollector {
    pub declarations: Vec<String>,
}

impl DeclarationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, name: &str) {
        self.declarations.push(name.to_string());
    }

    fn record_if_component(&mut self, name: &str) {
        if is_component_name(name) {
            self.record(name);
        }
    }
}

fn unwrap_paren(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_paren(&paren.expr),
        _ => expr,
    }
}

/// Body-less functions are TypeScript signatures (`declare function`,
/// overloads), not declarations.
fn has_body(function: &Function) -> bool {
    function.body.is_some()
}

/// Name bound by `name = <arrow | function expression>`, if any.
fn function_binding_name(declarator: &VarDeclarator) -> Option<&str> {
    let init = declarator.init.as_deref()?;
    if !matches!(unwrap_paren(init), Expr::Arrow(_) | Expr::Fn(_)) {
        return None;
    }
    match &declarator.name {
        Pat::Ident(binding) => Some(binding.id.sym.as_str()),
        _ => None,
    }
}

impl Visit for DeclarationCollector {
    fn visit_export_default_expr(&mut self, node: &ExportDefaultExpr) {
        // An anonymous arrow/function here has no enclosing binding to name it.
        if let Expr::Ident(ident) = unwrap_paren(&node.expr) {
            self.record(ident.sym.as_str());
        }
        node.visit_children_with(self);
    }

    fn visit_export_default_decl(&mut self, node: &ExportDefaultDecl) {
        if let DefaultDecl::Fn(fn_expr) = &node.decl
            && has_body(&fn_expr.function)
            && let Some(ident) = &fn_expr.ident
        {
            self.record(ident.sym.as_str());
        }
        node.visit_children_with(self);
    }

    fn visit_export_decl(&mut self, node: &ExportDecl) {
        match &node.decl {
            Decl::Fn(fn_decl) => {
                if has_body(&fn_decl.function) {
                    self.record(fn_decl.ident.sym.as_str());
                }
                // Skip visit_fn_decl for the exported function itself.
                fn_decl.function.visit_with(self);
            }
            Decl::Var(var_decl) => {
                if let Some(name) = var_decl.decls.first().and_then(function_binding_name) {
                    self.record(name);
                }
                for declarator in &var_decl.decls {
                    declarator.visit_children_with(self);
                }
            }
            _ => node.visit_children_with(self),
        }
    }

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        if has_body(&node.function) {
            self.record_if_component(node.ident.sym.as_str());
        }
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let Some(name) = function_binding_name(node) {
            self.record_if_component(name);
        }
        node.visit_children_with(self);
    }
}

/// Component declaration names of a parsed module, in traversal order.
pub fn scan_declarations(module: &Module) -> Vec<String> {
    let mut collector = DeclarationCollector::new();
    module.visit_with(&mut collector);
    collector.declarations
}

/// Parse `file_text` and upsert every component it declares into `registry`.
///
/// Nothing is recorded when the file fails to parse.
pub fn collect_declarations(
    file_path: &Path,
    file_text: &str,
    registry: &mut Registry,
) -> Result<(), DetectError> {
    let module = parse_jsx_source(file_text.to_string(), file_path)?;
    let file_path = file_path.to_string_lossy();
    for name in scan_declarations(&module) {
        registry.upsert(&name, &file_path);
    }
    Ok(())
}
