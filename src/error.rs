use std::fmt;
use std::io;

/// An error that can occur when converting values or writing rendered
/// output.
///
/// Rendering a template from a [`Values`][crate::Values] record never fails;
/// errors only come from serializing a context with the `serde` feature or
/// from the writer passed to
/// [`render_to_writer`][crate::TemplateString::render_to_writer].
pub struct Error {
    kind: ErrorKind,
    msg: String,
}

#[derive(Debug)]
enum ErrorKind {
    Serialize,
    Io(io::Error),
}

impl Error {
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn serialize(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Serialize,
            msg: msg.into(),
        }
    }

    /// Returns `true` if this error came from the underlying writer.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_))
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self::serialize(msg.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self {
            msg: String::from("failed to write rendered template"),
            kind: ErrorKind::Io(err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Serialize => None,
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("msg", &self.msg)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Io(err) if f.alternate() => write!(f, "{}: {err}", self.msg),
            _ => write!(f, "{}", self.msg),
        }
    }
}
