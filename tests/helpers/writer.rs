#![allow(dead_code)]

use std::io;

/// An in-memory writer that starts failing after a number of writes.
#[derive(Default)]
pub struct Writer {
    buf: Vec<u8>,
    writes: usize,
    max: Option<usize>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(max: usize) -> Self {
        Self {
            max: Some(max),
            ..Self::default()
        }
    }

    #[track_caller]
    pub fn into_string(self) -> String {
        String::from_utf8(self.buf).unwrap()
    }
}

impl io::Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        if self.max.is_some_and(|max| self.writes > max) {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
