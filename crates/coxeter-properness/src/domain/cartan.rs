//! Cartan family tags
//!
//! The family is resolved from its letter once, when the group is built,
//! and travels as a closed enum from then on.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cartan family of a finite Coxeter group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CartanFamily {
    A,
    B,
    D,
    E,
    F,
    G,
    H,
    I,
}

impl CartanFamily {
    /// All supported families, in letter order
    pub const ALL: [CartanFamily; 8] = [
        Self::A,
        Self::B,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
    ];

    /// Single-letter name of the family
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
        }
    }
}

impl fmt::Display for CartanFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Family letter outside {A, B, D, E, F, G, H, I}
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported Cartan type '{0}' (expected one of A, B, D, E, F, G, H, I)")]
pub struct UnsupportedTypeError(pub String);

impl FromStr for CartanFamily {
    type Err = UnsupportedTypeError;

    /// Parse a family letter (case-insensitive, surrounding whitespace ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnsupportedTypeError(s.to_string()))
    }
}
