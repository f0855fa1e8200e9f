use std::path::Path;
use std::sync::Arc;

use swc_common::{FileName, Globals, SourceMap, Span, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax, error::Error as SwcError};

use crate::core::DetectError;

/// Parse JSX/TSX source code into a module AST.
///
/// Every file is parsed as TSX, whatever its extension, so plain `.js` and
/// `.ts` files with embedded JSX are accepted. Errors the parser recovered
/// from still reject the file.
pub fn parse_jsx_source(code: String, file_path: &Path) -> Result<Module, DetectError> {
    use swc_common::GLOBALS;

    let source_map = Arc::new(SourceMap::default());

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let to_parse_error = |err: SwcError| {
            let line = line_of(&source_file, err.span());
            DetectError::Parse {
                path: file_path.to_path_buf(),
                line,
                message: err.kind().msg().to_string(),
            }
        };

        let module = parser.parse_module().map_err(to_parse_error)?;

        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(to_parse_error(err));
        }

        Ok(module)
    })
}

/// Read and parse a source file.
pub fn parse_jsx_file(file_path: &Path) -> Result<Module, DetectError> {
    let code = std::fs::read_to_string(file_path).map_err(|source| DetectError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    parse_jsx_source(code, file_path)
}

/// 1-based line of a span inside `source_file`.
fn line_of(source_file: &swc_common::SourceFile, span: Span) -> usize {
    source_file.lookup_line(span.lo).map_or(1, |line| line + 1)
}
