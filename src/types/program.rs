//! Defines a compiled [`Template`] which is a sequence of [`Segment`]s that
//! can be executed by the renderer.

use crate::types::span::Span;

#[derive(Debug, Clone, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Emit raw template
    Raw(Span),

    /// Lookup a value and emit it, `span` covers the brackets and `key` the
    /// text between them
    Placeholder { span: Span, key: Span },
}

impl Template {
    pub fn placeholders(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Placeholder { .. }))
            .count()
    }
}
