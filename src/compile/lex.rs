use crate::types::program::Segment;
use crate::types::span::Span;

/// A lexer that chunks the template source into raw text and placeholders.
///
/// A placeholder is a `[` that is not immediately preceded by a backslash,
/// followed by one or more ASCII letters, digits, `_` or `-`, followed by a
/// `]`. Everything else, including escaped and malformed placeholders, is
/// raw text. Matches never overlap and are found left to right.
///
/// Only ASCII bytes are inspected so the cursor always lands on a UTF-8
/// character boundary.
#[derive(Debug, Clone)]
pub struct Lexer<'source> {
    /// The original template source.
    source: &'source str,

    /// A cursor over the template source.
    cursor: usize,

    /// A buffer to store the next segment.
    next: Option<Segment>,
}

impl<'source> Lexer<'source> {
    /// Construct a new lexer.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            cursor: 0,
            next: None,
        }
    }

    fn lex(&mut self) -> Option<Segment> {
        if let Some(next) = self.next.take() {
            return Some(next);
        }

        let i = self.cursor;

        if self.source[i..].is_empty() {
            return None;
        }

        // We are within raw template, so we find the next placeholder from
        // `i`. The following diagram helps describe the variable naming.
        //
        // xxxxxxx[name]xxxx
        //    ^   ^    ^
        //    i   j    k
        match find_placeholder(self.source.as_bytes(), i) {
            Some((j, k)) => {
                self.cursor = k + 1;
                let placeholder = Segment::Placeholder {
                    span: Span::from(j..k + 1),
                    key: Span::from(j + 1..k),
                };
                if i == j {
                    Some(placeholder)
                } else {
                    // We must first emit the raw segment, so we store the
                    // placeholder in the `next` buffer.
                    self.next = Some(placeholder);
                    Some(Segment::Raw(Span::from(i..j)))
                }
            }
            None => {
                let j = self.source.len();
                self.cursor = j;
                Some(Segment::Raw(Span::from(i..j)))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Segment;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.lex()
    }
}

/// Returns the index of the opening and closing bracket of the first live
/// placeholder at or after `at`.
fn find_placeholder(bytes: &[u8], mut at: usize) -> Option<(usize, usize)> {
    while let Some(offset) = bytes[at..].iter().position(|&b| b == b'[') {
        let j = at + offset;
        at = j + 1;

        // The escape check looks at the byte before the bracket even when
        // it lies before the cursor.
        if j > 0 && bytes[j - 1] == b'\\' {
            continue;
        }

        let len = bytes[j + 1..].iter().take_while(|&&b| is_key(b)).count();
        let k = j + 1 + len;
        // The byte before `]` is a key byte so it can never be a backslash.
        if len > 0 && bytes.get(k) == Some(&b']') {
            return Some((j, k));
        }
    }
    None
}

#[inline]
fn is_key(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<(&'static str, &str)> {
        Lexer::new(source)
            .map(|segment| match segment {
                Segment::Raw(span) => ("raw", &source[span]),
                Segment::Placeholder { key, .. } => ("key", &source[key]),
            })
            .collect()
    }

    #[test]
    fn lex_empty() {
        assert!(lex("").is_empty());
    }

    #[test]
    fn lex_raw_only() {
        assert_eq!(lex("lorem ipsum"), [("raw", "lorem ipsum")]);
    }

    #[test]
    fn lex_placeholders() {
        assert_eq!(
            lex("Hello [name], you are [age]"),
            [
                ("raw", "Hello "),
                ("key", "name"),
                ("raw", ", you are "),
                ("key", "age"),
            ]
        );
    }

    #[test]
    fn lex_adjacent_placeholders() {
        assert_eq!(lex("[a][b]"), [("key", "a"), ("key", "b")]);
    }

    #[test]
    fn lex_placeholder_span_covers_brackets() {
        let source = "x [user_id-1] y";
        let spans: Vec<_> = Lexer::new(source)
            .filter_map(|s| match s {
                Segment::Placeholder { span, .. } => Some(&source[span]),
                Segment::Raw(_) => None,
            })
            .collect();
        assert_eq!(spans, ["[user_id-1]"]);
    }

    #[test]
    fn lex_escaped() {
        assert_eq!(lex(r"\[name]"), [("raw", r"\[name]")]);
        assert_eq!(
            lex(r"Hello \[name] and [name]"),
            [("raw", r"Hello \[name] and "), ("key", "name")]
        );
        // escaping the closing bracket also breaks the match
        assert_eq!(lex(r"[name\]"), [("raw", r"[name\]")]);
    }

    #[test]
    fn lex_malformed() {
        assert_eq!(lex("[]"), [("raw", "[]")]);
        assert_eq!(lex("[first name]"), [("raw", "[first name]")]);
        assert_eq!(lex("[name"), [("raw", "[name")]);
        assert_eq!(lex("[na.me]"), [("raw", "[na.me]")]);
        assert_eq!(lex("[ñame]"), [("raw", "[ñame]")]);
    }

    #[test]
    fn lex_nested_brackets() {
        assert_eq!(
            lex("[[name]]"),
            [("raw", "["), ("key", "name"), ("raw", "]")]
        );
    }

    #[test]
    fn lex_unicode_raw() {
        assert_eq!(
            lex("héllo [wörld] [x] ✓"),
            [("raw", "héllo [wörld] "), ("key", "x"), ("raw", " ✓")]
        );
    }
}
