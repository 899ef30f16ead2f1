//! Coxeter words and line parsing
//!
//! Line format: every ASCII decimal digit is one generator index, in order.
//! All other bytes are ignored. Indices are single digits, so the format
//! only covers groups of rank < 10.

use std::fmt;

/// Sequence of generator indices
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Word(Vec<u8>);

impl Word {
    pub fn new(generators: Vec<u8>) -> Self {
        Self(generators)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Digits concatenated without separator (the output line format)
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.0 {
            write!(f, "{}", g)?;
        }
        Ok(())
    }
}

/// Line parser with a reusable scratch buffer
///
/// The buffer is cleared at the start of every call, so nothing from a
/// previous line survives. A parser is owned by one worker; parallel
/// callers use one parser each.
#[derive(Debug, Default)]
pub struct WordParser {
    scratch: Vec<u8>,
}

impl WordParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a line into the scratch buffer and borrow the result
    ///
    /// Returns `None` if the line contains no digits.
    pub fn parse_into(&mut self, line: impl AsRef<[u8]>) -> Option<&[u8]> {
        self.scratch.clear();
        self.scratch.extend(
            line.as_ref()
                .iter()
                .filter(|b| b.is_ascii_digit())
                .map(|b| b - b'0'),
        );

        if self.scratch.is_empty() {
            None
        } else {
            Some(&self.scratch)
        }
    }

    /// Parse a line into an owned [`Word`]
    pub fn parse(&mut self, line: impl AsRef<[u8]>) -> Option<Word> {
        self.parse_into(line).map(|generators| Word::new(generators.to_vec()))
    }
}

/// Parse a single line without keeping a parser around
pub fn parse_line(line: impl AsRef<[u8]>) -> Option<Word> {
    WordParser::new().parse(line)
}
