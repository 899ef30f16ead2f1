//! Properness predicate
//!
//! A word `w` in a group of rank `n` is proper iff
//! `length(w) <= n + bound(family, |D_L(w)|)`, where `D_L(w)` is the
//! left-descent set of `w`.

use crate::domain::bound::{BoundError, BoundTable};
use crate::domain::cartan::CartanFamily;
use crate::domain::coxeter::{CoxeterGroup, GroupError};
use thiserror::Error;

/// Word classification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The word does not belong to the group (recoverable, per word)
    #[error(transparent)]
    Group(#[from] GroupError),
    /// Bound lookup contract violation (fatal)
    #[error(transparent)]
    Bound(#[from] BoundError),
}

/// Decide properness from precomputed quantities
pub fn is_proper(
    rank: u32,
    word_length: usize,
    descent_count: u32,
    family: CartanFamily,
) -> Result<bool, BoundError> {
    is_proper_with(&BoundTable::for_family(family, rank), word_length, descent_count)
}

fn is_proper_with(
    table: &BoundTable,
    word_length: usize,
    descent_count: u32,
) -> Result<bool, BoundError> {
    let threshold = table.rank() as u64 + table.bound(descent_count)?;
    Ok(word_length as u64 <= threshold)
}

/// Classifier bound to one group, with its bound table resolved up front
#[derive(Clone, Debug)]
pub struct ProperClassifier {
    group: CoxeterGroup,
    table: BoundTable,
}

impl ProperClassifier {
    pub fn new(group: CoxeterGroup) -> Self {
        let table = BoundTable::for_family(group.family(), group.rank());
        Self { group, table }
    }

    /// Pair `group` with an arbitrary table, e.g. one narrower than its own
    #[cfg(test)]
    pub(crate) fn with_bound_table(group: CoxeterGroup, table: BoundTable) -> Self {
        Self { group, table }
    }

    pub fn group(&self) -> &CoxeterGroup {
        &self.group
    }

    pub fn bound_table(&self) -> &BoundTable {
        &self.table
    }

    /// Check whether `word` is proper in this classifier's group
    ///
    /// `word` must be non-empty; the parser never yields empty words.
    pub fn is_proper(&self, word: &[u8]) -> Result<bool, ClassifyError> {
        debug_assert!(!word.is_empty(), "empty words are rejected by the parser");
        let descents = self.group.left_descent_set(word)?;
        Ok(is_proper_with(&self.table, word.len(), descents.count())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(family: CartanFamily, rank: u32) -> ProperClassifier {
        ProperClassifier::new(CoxeterGroup::new(family, rank, None).unwrap())
    }

    #[test]
    fn test_is_proper_zero_descents() {
        // bound 0, threshold 2
        assert_eq!(is_proper(2, 2, 0, CartanFamily::A), Ok(true));
        assert_eq!(is_proper(2, 3, 0, CartanFamily::A), Ok(false));
    }

    #[test]
    fn test_is_proper_threshold_edges() {
        // A, rank 2, one descent: bound C(2, 2) = 1, threshold 3
        assert_eq!(is_proper(2, 3, 1, CartanFamily::A), Ok(true));
        assert_eq!(is_proper(2, 4, 1, CartanFamily::A), Ok(false));
        // E, rank 8, five descents: threshold 28
        assert_eq!(is_proper(8, 28, 5, CartanFamily::E), Ok(true));
        assert_eq!(is_proper(8, 29, 5, CartanFamily::E), Ok(false));
    }

    #[test]
    fn test_is_proper_deterministic() {
        let first = is_proper(4, 7, 2, CartanFamily::B);
        let second = is_proper(4, 7, 2, CartanFamily::B);
        assert_eq!(first, second);
        assert_eq!(first, Ok(true));
    }

    #[test]
    fn test_is_proper_propagates_bound_error() {
        assert!(matches!(
            is_proper(8, 3, 9, CartanFamily::E),
            Err(BoundError::UnsupportedDescentCount { .. })
        ));
    }

    #[test]
    fn test_classifier_type_a_rank_2() {
        let c = classifier(CartanFamily::A, 2);
        // 121 is the longest element: two descents, bound 3, threshold 5
        assert_eq!(c.is_proper(&[1, 2, 1]), Ok(true));
        // 12: one descent, threshold 3
        assert_eq!(c.is_proper(&[1, 2]), Ok(true));
        // 1212 (non-reduced, equals 21): one descent, threshold 3, length 4
        assert_eq!(c.is_proper(&[1, 2, 1, 2]), Ok(false));
    }

    #[test]
    fn test_classifier_rejects_out_of_range_generator() {
        let c = classifier(CartanFamily::A, 2);
        assert!(matches!(
            c.is_proper(&[1, 3]),
            Err(ClassifyError::Group(GroupError::GeneratorOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_classifier_longest_elements_are_proper() {
        // w0 has every generator as a descent; length(w0) <= n + bound(n)
        let cases: [(CartanFamily, u32, &[u8]); 3] = [
            (CartanFamily::A, 3, &[1, 2, 1, 3, 2, 1]),
            (CartanFamily::B, 2, &[1, 2, 1, 2]),
            (CartanFamily::H, 3, &[1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3]),
        ];
        for (family, rank, w0) in cases {
            let c = classifier(family, rank);
            assert_eq!(c.group().left_descent_set(w0).unwrap().count(), rank);
            assert_eq!(c.is_proper(w0), Ok(true), "{}{}", family, rank);
        }
    }
}
