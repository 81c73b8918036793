//! Lockstep iteration over two line sources.

use std::fmt;
use std::io::{self, BufRead};

use thiserror::Error;

use super::lines::UniversalLines;
use super::rows::RowFormat;

/// Which of the two inputs an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "first"),
            Side::B => write!(f, "second"),
        }
    }
}

#[derive(Error, Debug)]
#[error("error reading {side} input: {source}")]
pub struct ReadError {
    pub side: Side,
    #[source]
    pub source: io::Error,
}

/// Position-aligned line pairs from two readers.
///
/// One line of A is read before the matching line of B. Iteration ends as
/// soon as either reader is exhausted or fails; A running out first means B
/// is never read again. `\n`, `\r\n` and a lone `\r` all end a line.
pub struct LinePairs<A, B> {
    a: UniversalLines<A>,
    b: UniversalLines<B>,
    finished: bool,
}

impl<A: BufRead, B: BufRead> LinePairs<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a: UniversalLines::new(a), b: UniversalLines::new(b), finished: false }
    }

    fn read(&mut self, side: Side) -> Option<Result<String, ReadError>> {
        let next = match side {
            Side::A => self.a.next(),
            Side::B => self.b.next(),
        };
        match next {
            Some(Ok(line)) => Some(Ok(line)),
            Some(Err(source)) => Some(Err(ReadError { side, source })),
            None => None,
        }
    }
}

impl<A: BufRead, B: BufRead> Iterator for LinePairs<A, B> {
    type Item = Result<(String, String), ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let pair = self.read(Side::A).and_then(|a| match a {
            Ok(a) => self.read(Side::B).map(|b| b.map(|b| (a, b))),
            Err(e) => Some(Err(e)),
        });
        if !matches!(pair, Some(Ok(_))) {
            self.finished = true;
        }
        pair
    }
}

/// Lazy sequence of output rows, one per consumed line pair.
pub struct LineMerger<A, B, F> {
    pairs: LinePairs<A, B>,
    format: F,
    consumed: usize,
}

impl<A: BufRead, B: BufRead, F: RowFormat> LineMerger<A, B, F> {
    pub fn new(a: A, b: B, format: F) -> Self {
        Self { pairs: LinePairs::new(a, b), format, consumed: 0 }
    }

    /// Number of line pairs turned into rows so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl<A: BufRead, B: BufRead, F: RowFormat> Iterator for LineMerger<A, B, F> {
    type Item = Result<String, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (a, b) = match self.pairs.next()? {
            Ok(pair) => pair,
            Err(e) => return Some(Err(e)),
        };
        self.consumed += 1;
        Some(Ok(self.format.format_row(&a, &b)))
    }
}
