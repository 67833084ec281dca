pub mod context;
#[cfg(test)]
mod tests;

use std::borrow::Cow;

use fillin::Values;
use regex::{Captures, Regex};

/// Abstraction for a placeholder substitution strategy.
pub trait Engine<'a> {
    fn name() -> &'static str;
    fn new(source: &'a str) -> Self;
    fn render(&self, values: &Values) -> String;
}

////////////////////////////////////////////////////////////////////////////////
/// fillin
////////////////////////////////////////////////////////////////////////////////

pub type Fillin<'a> = fillin::TemplateString<'a>;

impl<'a> Engine<'a> for Fillin<'a> {
    #[inline]
    fn name() -> &'static str {
        "fillin"
    }

    #[inline]
    fn new(source: &'a str) -> Self {
        fillin::TemplateString::new(source)
    }

    #[inline]
    fn render(&self, values: &Values) -> String {
        self.render_from(values)
    }
}

////////////////////////////////////////////////////////////////////////////////
/// regex
////////////////////////////////////////////////////////////////////////////////

/// Substitutes using a regex with a lookbehind emulated by capturing the
/// preceding character, followed by a second pass that removes escapes.
pub struct RegexEngine<'a> {
    source: &'a str,
    placeholder: Regex,
    escape: Regex,
}

impl<'a> Engine<'a> for RegexEngine<'a> {
    #[inline]
    fn name() -> &'static str {
        "regex"
    }

    fn new(source: &'a str) -> Self {
        Self {
            source,
            placeholder: Regex::new(r"(^|[^\\])\[([A-Za-z0-9_-]+)\]").unwrap(),
            escape: Regex::new(r"\\([\[\]])").unwrap(),
        }
    }

    fn render(&self, values: &Values) -> String {
        // The preceding character is consumed by each match, so adjacent
        // placeholders need a second sweep.
        let mut s = Cow::Borrowed(self.source);
        loop {
            let next = self
                .placeholder
                .replace_all(&s, |caps: &Captures<'_>| match values.get(&caps[2]) {
                    Some(v) if !v.is_none() => format!("{}{v}", &caps[1]),
                    _ => caps[0].to_owned(),
                });
            if next == s {
                break;
            }
            s = Cow::Owned(next.into_owned());
        }
        self.escape.replace_all(&s, "$1").into_owned()
    }
}

////////////////////////////////////////////////////////////////////////////////
/// naive
////////////////////////////////////////////////////////////////////////////////

/// Calls [`str::replace`] once for every value, ignoring escapes.
pub struct Naive<'a> {
    source: &'a str,
}

impl<'a> Engine<'a> for Naive<'a> {
    #[inline]
    fn name() -> &'static str {
        "naive"
    }

    #[inline]
    fn new(source: &'a str) -> Self {
        Self { source }
    }

    fn render(&self, values: &Values) -> String {
        values
            .iter()
            .filter(|(_, v)| !v.is_none())
            .fold(self.source.to_owned(), |s, (k, v)| {
                s.replace(&format!("[{k}]"), &v.to_string())
            })
    }
}
