//! [`std::fmt::Write`] adapters used by the renderer.

use std::fmt;
use std::io;

/// Removes the backslash in front of every `[` or `]` written through it.
///
/// A backslash at the very end of a chunk is held back until the next chunk
/// shows what follows it, [`finish`][Unescape::finish] flushes it.
pub(crate) struct Unescape<'a> {
    buf: &'a mut (dyn fmt::Write + 'a),
    pending: bool,
}

/// Adapts an [`io::Write`] to [`fmt::Write`], keeping the I/O error.
pub(crate) struct Writer<W> {
    writer: W,
    err: Option<io::Error>,
}

impl<'a> Unescape<'a> {
    pub fn new(buf: &'a mut (dyn fmt::Write + 'a)) -> Self {
        Self {
            buf,
            pending: false,
        }
    }

    pub fn finish(mut self) -> fmt::Result {
        if self.pending {
            self.pending = false;
            self.buf.write_char('\\')?;
        }
        Ok(())
    }
}

impl fmt::Write for Unescape<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Ok(());
        }

        if self.pending {
            self.pending = false;
            if !is_bracket(bytes[0]) {
                self.buf.write_char('\\')?;
            }
        }

        // Only ASCII bytes are matched so every index is a char boundary.
        let mut start = 0;
        for (i, &b) in bytes.iter().enumerate() {
            if b != b'\\' {
                continue;
            }
            match bytes.get(i + 1) {
                Some(&next) if is_bracket(next) => {
                    self.buf.write_str(&s[start..i])?;
                    start = i + 1;
                }
                Some(_) => {}
                None => {
                    self.buf.write_str(&s[start..i])?;
                    start = i + 1;
                    self.pending = true;
                }
            }
        }
        self.buf.write_str(&s[start..])
    }
}

#[inline]
fn is_bracket(b: u8) -> bool {
    matches!(b, b'[' | b']')
}

impl<W> Writer<W>
where
    W: io::Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer, err: None }
    }

    pub fn take_err(&mut self) -> Option<io::Error> {
        self.err.take()
    }
}

impl<W> fmt::Write for Writer<W>
where
    W: io::Write,
{
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.writer.write_all(s.as_bytes()).map_err(|e| {
            self.err = Some(e);
            fmt::Error
        })
    }
}
