//! Type-specific bounds on `length(w) - rank`
//!
//! Each Cartan family maps a left-descent count to an integer bound. The
//! mapping is resolved once per run into a [`BoundTable`], so classifying a
//! word never re-dispatches on the family name.

use crate::constants::{BOUND_TABLE_E, BOUND_TABLE_F, BOUND_TABLE_G, BOUND_TABLE_H};
use crate::domain::binomial::choose;
use crate::domain::cartan::CartanFamily;
use thiserror::Error;

/// Bound lookup errors
///
/// These are contract violations, not user errors: a correctly built group
/// never produces a descent count outside its family's table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundError {
    /// Descent count outside the family's lookup table
    #[error(
        "Unsupported descent count {descent_count} for type {family} (table covers 0-{max})"
    )]
    UnsupportedDescentCount {
        family: CartanFamily,
        descent_count: u32,
        max: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BoundRule {
    /// C(d + 1, 2)
    Triangular,
    /// d^2
    Square,
    /// d(d - 1) for d > 3, C(d + 1, 2) otherwise
    Oblong,
    /// Fixed table indexed by d
    Lookup(&'static [u64]),
    /// rank when d == 2, d otherwise
    Dihedral,
}

/// Bound function for one family and rank
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundTable {
    family: CartanFamily,
    rank: u32,
    rule: BoundRule,
}

impl BoundTable {
    /// Resolve the bound function for a family and rank
    pub fn for_family(family: CartanFamily, rank: u32) -> Self {
        let rule = match family {
            CartanFamily::A => BoundRule::Triangular,
            CartanFamily::B => BoundRule::Square,
            CartanFamily::D => BoundRule::Oblong,
            CartanFamily::E => BoundRule::Lookup(&BOUND_TABLE_E),
            CartanFamily::F => BoundRule::Lookup(&BOUND_TABLE_F),
            CartanFamily::G => BoundRule::Lookup(&BOUND_TABLE_G),
            CartanFamily::H => BoundRule::Lookup(&BOUND_TABLE_H),
            CartanFamily::I => BoundRule::Dihedral,
        };

        Self { family, rank, rule }
    }

    pub fn family(&self) -> CartanFamily {
        self.family
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Bound for a word with `descent_count` left descents
    pub fn bound(&self, descent_count: u32) -> Result<u64, BoundError> {
        let d = descent_count as u64;
        match self.rule {
            BoundRule::Triangular => Ok(choose(d + 1, 2)),
            BoundRule::Square => Ok(d * d),
            BoundRule::Oblong => Ok(if d > 3 { d * (d - 1) } else { choose(d + 1, 2) }),
            BoundRule::Lookup(table) => table.get(descent_count as usize).copied().ok_or(
                BoundError::UnsupportedDescentCount {
                    family: self.family,
                    descent_count,
                    max: table.len() as u32 - 1,
                },
            ),
            BoundRule::Dihedral => Ok(if d == 2 { self.rank as u64 } else { d }),
        }
    }
}

/// Bound for `family` at `rank` and `descent_count`
///
/// One-shot form of [`BoundTable::bound`]; hot loops should resolve a
/// [`BoundTable`] once and reuse it.
pub fn bound(family: CartanFamily, rank: u32, descent_count: u32) -> Result<u64, BoundError> {
    BoundTable::for_family(family, rank).bound(descent_count)
}
