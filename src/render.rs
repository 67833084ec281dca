//! Execute a compiled template against a set of values.

#![allow(clippy::wrong_self_convention)]

use std::fmt::{self, Write};
use std::io;

use crate::fmt::{Unescape, Writer};
use crate::types::options::{Options, ReplaceEmpty};
use crate::types::program::Segment;
use crate::value::Values;
use crate::{Error, Result, Value};

/// The values visible to a single render.
///
/// Call values shadow default values key by key. Neither map is merged or
/// copied.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope<'a> {
    values: &'a Values,
    defaults: &'a Values,
}

impl<'a> Scope<'a> {
    pub fn new(values: &'a Values, defaults: &'a Values) -> Self {
        Self { values, defaults }
    }

    /// Lookup a placeholder key. Keys mapped to [`Value::None`] are absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        let present = |v: &&Value| !v.is_none();
        self.values
            .get(key)
            .filter(present)
            .or_else(|| self.defaults.get(key).filter(present))
    }
}

#[derive(Debug)]
pub(crate) struct Renderer<'a, I> {
    pub source: &'a str,
    pub segments: I,
    pub options: &'a Options,
    pub scope: Scope<'a>,
}

impl<'a, I> Renderer<'a, I>
where
    I: Iterator<Item = Segment>,
{
    pub fn to_string(self) -> String {
        let mut s = String::with_capacity(self.source.len());
        // Writing to a `String` cannot fail.
        let _ = self.render(&mut s);
        s
    }

    pub fn to_writer<W>(self, writer: W) -> Result<()>
    where
        W: io::Write,
    {
        let mut w = Writer::new(writer);
        self.render(&mut w).map_err(|_| match w.take_err() {
            Some(err) => Error::from(err),
            None => Error::from(io::Error::other("formatter error")),
        })
    }

    fn render(self, buf: &mut dyn fmt::Write) -> fmt::Result {
        let Self {
            source,
            segments,
            options,
            scope,
        } = self;

        let mut f = Unescape::new(buf);
        for segment in segments {
            match segment {
                Segment::Raw(span) => f.write_str(&source[span])?,
                Segment::Placeholder { span, key } => {
                    let key = &source[key];
                    match scope.get(key) {
                        Some(Value::String(s)) => f.write_str(s)?,
                        Some(value) => write!(f, "{value}")?,
                        None => {
                            log::debug!("no value for placeholder `{key}`");
                            match &options.replace_empty {
                                ReplaceEmpty::Keep => f.write_str(&source[span])?,
                                ReplaceEmpty::With(s) => f.write_str(s)?,
                            }
                        }
                    }
                }
            }
        }
        f.finish()
    }
}
