//! Line splitting with universal newlines.
//!
//! `\n`, `\r\n` and a lone `\r` all end a line. A final line without a
//! terminator still counts.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Iterator over the lines of a reader, terminators removed.
pub struct UniversalLines<R> {
    reader: R,
    // Lines already split off the last chunk but not yet handed out.
    pending: VecDeque<String>,
    buf: Vec<u8>,
}

impl<R: BufRead> UniversalLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new(), buf: Vec::new() }
    }

    fn fill(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        let mut chunk = self.buf.as_slice();
        if let Some(rest) = chunk.strip_suffix(b"\n") {
            chunk = rest;
        }
        // Either half of a `\r\n`, or a lone `\r` closing the last line.
        if let Some(rest) = chunk.strip_suffix(b"\r") {
            chunk = rest;
        }
        let text = std::str::from_utf8(chunk)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pending.extend(text.split('\r').map(String::from));
        Ok(true)
    }
}

impl<R: BufRead> Iterator for UniversalLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }
        match self.fill() {
            Ok(true) => self.pending.pop_front().map(Ok),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
