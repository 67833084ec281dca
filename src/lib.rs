//! A tiny template engine for bracketed placeholders.
//!
//! # Features
//!
//! - Placeholders: `Hello [name]!`
//! - Escaping: `\[name]` renders as the literal text `[name]`
//! - Default values that are used when a render does not supply a key
//! - Configurable handling of placeholders without a value
//! - Render to a [`String`] or any [`std::io::Write`] implementor
//! - Render using any [`serde`] serializable values
//! - Convenient macro for building values: `fillin::values! { name: "John" }`
//! - A deep [`merge`][merge::merge] for layering configuration
//!
//! # Syntax
//!
//! A placeholder is a key made of one or more ASCII letters, digits, `_` or
//! `-` between square brackets, e.g. `[name]` or `[user_id-1]`. Keys are
//! case-sensitive. Anything else in brackets, such as `[]` or `[first name]`,
//! is left alone.
//!
//! A backslash before a bracket stops the placeholder from being substituted
//! and is itself removed from the output, so `\[name]` renders as `[name]`.
//!
//! # Getting started
//!
//! Your entry point is the [`TemplateString`] struct. It stores the template
//! source, the [`Options`] and any default values.
//!
//! ```
//! use fillin::{values, TemplateString};
//!
//! let template = TemplateString::new("Hello [name], you are [age]");
//! let result = template.render_from(&values! { name: "John", age: 30 });
//! assert_eq!(result, "Hello John, you are 30");
//! ```
//!
//! Placeholders without a value are left as they are. This can be changed
//! using [`Options`].
//!
//! ```
//! use fillin::{values, Options, TemplateString};
//!
//! let template = TemplateString::new("Hello [name]");
//! assert_eq!(template.render_from(&values! {}), "Hello [name]");
//!
//! let options = Options::builder().replace_empty("N/A").build();
//! let template = TemplateString::with_options("Hello [name]", options);
//! assert_eq!(template.render_from(&values! {}), "Hello N/A");
//! ```
//!
//! # Examples
//!
//! ### Default values
//!
//! ```
//! use fillin::{values, TemplateString};
//!
//! let template = TemplateString::new("Hello [name]")
//!     .with_defaults(values! { name: "Default" });
//!
//! assert_eq!(template.render_from(&values! {}), "Hello Default");
//! assert_eq!(template.render_from(&values! { name: "John" }), "Hello John");
//! ```
//!
//! ### Render using structured data
//!
//! ```
//! #[derive(serde::Serialize)]
//! struct Context { name: String, unread: u32 }
//!
//! let ctx = Context { name: "John Smith".into(), unread: 3 };
//!
//! let result = fillin::TemplateString::new("Hello [name], you have [unread] messages")
//!     .render(&ctx)?;
//!
//! assert_eq!(result, "Hello John Smith, you have 3 messages");
//! # Ok::<(), fillin::Error>(())
//! ```
//!
//! ### Compile once, render many times
//!
//! ```
//! use fillin::{values, TemplateString};
//!
//! let template = TemplateString::new("[greeting], [name]!");
//! let compiled = template.compile();
//!
//! for name in ["Alice", "Bob"] {
//!     let result = compiled.render_from(&values! { greeting: "Hi", name: name });
//!     assert_eq!(result, format!("Hi, {name}!"));
//! }
//! ```
//!
//! ### Render a template to an `impl io::Write`
//!
//! ```
//! use std::io;
//!
//! let stdout = io::BufWriter::new(io::stdout());
//!
//! fillin::TemplateString::new("Hello [name]")
//!     .render_to_writer(stdout, &fillin::values! { name: "John Smith" })?;
//! # Ok::<(), fillin::Error>(())
//! ```
//!
//! # Logging
//!
//! This crate emits diagnostics through the [`log`] facade: compiled
//! templates at `trace` level and placeholders without a value at `debug`
//! level. No logger is installed.

mod compile;
mod error;
mod fmt;
mod macros;
pub mod merge;
mod render;
mod types;
pub mod value;

use std::borrow::Cow;
use std::io;

pub use crate::error::Error;
pub use crate::types::options::{Options, OptionsBuilder, ReplaceEmpty};
#[cfg(feature = "serde")]
pub use crate::value::to_value;
pub use crate::value::{Value, Values};

use crate::compile::Lexer;
use crate::render::{Renderer, Scope};
use crate::types::program::{self, Segment};

/// A type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A template string with its configuration and default values.
///
/// Rendering never modifies the template, so a single instance can be
/// rendered any number of times, from many threads at once. Use
/// [`update`][TemplateString::update] to swap the template source in place.
#[derive(Debug, Clone)]
pub struct TemplateString<'source> {
    source: Cow<'source, str>,
    options: Options,
    defaults: Values,
}

/// A template compiled by [`TemplateString::compile`].
///
/// The template source is scanned once and the result is reused for every
/// render. It borrows the [`TemplateString`], so the source cannot be updated
/// while it is alive.
#[derive(Debug, Clone)]
pub struct Compiled<'t> {
    engine: &'t TemplateString<'t>,
    template: program::Template,
}

impl<'source> TemplateString<'source> {
    /// Construct a new template with the default options.
    ///
    /// The template is not validated; text that does not form a placeholder
    /// is emitted as is.
    #[inline]
    pub fn new(source: impl Into<Cow<'source, str>>) -> Self {
        Self::with_options(source, Options::default())
    }

    /// Construct a new template with custom options.
    ///
    /// # Examples
    ///
    /// ```
    /// use fillin::{Options, TemplateString};
    ///
    /// let template = TemplateString::with_options(
    ///     "Hello [name]",
    ///     Options::builder().replace_empty(""),
    /// );
    /// assert_eq!(template.render_from(&fillin::values! {}), "Hello ");
    /// ```
    #[inline]
    pub fn with_options(source: impl Into<Cow<'source, str>>, options: impl Into<Options>) -> Self {
        Self {
            source: source.into(),
            options: options.into(),
            defaults: Values::new(),
        }
    }

    /// Set the values used for placeholders that a render does not supply.
    #[inline]
    pub fn with_defaults(mut self, defaults: Values) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace the template source.
    ///
    /// The options and default values are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use fillin::{values, TemplateString};
    ///
    /// let mut template = TemplateString::new("Hello [name]");
    /// let result = template.update("Bye [name]").render_from(&values! { name: "John" });
    /// assert_eq!(result, "Bye John");
    /// ```
    #[inline]
    pub fn update(&mut self, source: impl Into<Cow<'source, str>>) -> &mut Self {
        self.source = source.into();
        self
    }

    /// Returns the template source.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the template options.
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the default values.
    #[inline]
    pub fn defaults(&self) -> &Values {
        &self.defaults
    }

    /// Returns the keys of the placeholders in the template, in order of
    /// appearance. Escaped placeholders are not included.
    ///
    /// # Examples
    ///
    /// ```
    /// let template = fillin::TemplateString::new(r"[a] \[b] [c] [a]");
    /// let keys: Vec<_> = template.placeholders().collect();
    /// assert_eq!(keys, ["a", "c", "a"]);
    /// ```
    pub fn placeholders(&self) -> impl Iterator<Item = &str> + '_ {
        keys(&self.source, Lexer::new(&self.source))
    }

    /// Render the template to a string using the provided values.
    ///
    /// Values supplied here take precedence over the default values. This
    /// never fails: placeholders without a value are handled according to
    /// [`Options::replace_empty`].
    #[inline]
    pub fn render_from(&self, values: &Values) -> String {
        self.renderer(Lexer::new(&self.source), values).to_string()
    }

    /// Render the template to a string using any serializable value.
    ///
    /// # Errors
    ///
    /// If the value cannot be converted to a [`Value`] or is not a map.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    #[inline]
    pub fn render<S>(&self, ctx: S) -> Result<String>
    where
        S: serde::Serialize,
    {
        Ok(self.render_from(&value::to_values(ctx)?))
    }

    /// Render the template to a writer using the provided values.
    ///
    /// # Errors
    ///
    /// If writing to the writer fails.
    #[inline]
    pub fn render_to_writer<W>(&self, writer: W, values: &Values) -> Result<()>
    where
        W: io::Write,
    {
        self.renderer(Lexer::new(&self.source), values)
            .to_writer(writer)
    }

    /// Scan the template once so that it can be rendered repeatedly.
    pub fn compile(&self) -> Compiled<'_> {
        Compiled {
            template: compile::template(&self.source),
            engine: self,
        }
    }

    fn renderer<'a, I>(&'a self, segments: I, values: &'a Values) -> Renderer<'a, I>
    where
        I: Iterator<Item = Segment>,
    {
        Renderer {
            source: &self.source,
            segments,
            options: &self.options,
            scope: Scope::new(values, &self.defaults),
        }
    }
}

impl<'t> Compiled<'t> {
    /// Returns the template this was compiled from.
    #[inline]
    pub fn template(&self) -> &'t TemplateString<'t> {
        self.engine
    }

    /// Returns the keys of the placeholders in the template, in order of
    /// appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> + '_ {
        keys(&self.engine.source, self.segments())
    }

    /// Render the template to a string using the provided values.
    ///
    /// See [`TemplateString::render_from`].
    #[inline]
    pub fn render_from(&self, values: &Values) -> String {
        self.engine.renderer(self.segments(), values).to_string()
    }

    /// Render the template to a string using any serializable value.
    ///
    /// See [`TemplateString::render`].
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    #[inline]
    pub fn render<S>(&self, ctx: S) -> Result<String>
    where
        S: serde::Serialize,
    {
        Ok(self.render_from(&value::to_values(ctx)?))
    }

    /// Render the template to a writer using the provided values.
    ///
    /// See [`TemplateString::render_to_writer`].
    #[inline]
    pub fn render_to_writer<W>(&self, writer: W, values: &Values) -> Result<()>
    where
        W: io::Write,
    {
        self.engine
            .renderer(self.segments(), values)
            .to_writer(writer)
    }

    fn segments(&self) -> std::iter::Copied<std::slice::Iter<'_, Segment>> {
        self.template.segments.iter().copied()
    }
}

fn keys<'a, I>(source: &'a str, segments: I) -> impl Iterator<Item = &'a str>
where
    I: Iterator<Item = Segment> + 'a,
{
    segments.filter_map(move |segment| match segment {
        Segment::Placeholder { key, .. } => Some(&source[key]),
        Segment::Raw(_) => None,
    })
}
