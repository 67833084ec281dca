//! Compile the template into a program that can be executed by the renderer.
//!
//! There is no parsing stage: placeholders cannot nest, so the lexer output
//! is already the program.

mod lex;

pub use crate::compile::lex::Lexer;
use crate::types::program::Template;

/// Compile a template into a program.
pub fn template(source: &str) -> Template {
    let template = Template {
        segments: Lexer::new(source).collect(),
    };
    log::trace!(
        "compiled template of {} bytes into {} segments with {} placeholders",
        source.len(),
        template.segments.len(),
        template.placeholders(),
    );
    template
}
