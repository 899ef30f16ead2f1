//! Left-descent sets
//!
//! A descent set is a bitmask where bit `i - 1` set means generator `i` is a
//! left descent of the word.

/// Left-descent set of a word, as a generator bitmask
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DescentSet(pub u32);

impl DescentSet {
    /// Empty descent set
    pub const EMPTY: Self = Self(0);

    /// Mark generator `generator` (1-based) as a descent
    pub fn insert(&mut self, generator: u8) {
        debug_assert!((1..=32).contains(&generator));
        self.0 |= 1 << (generator - 1);
    }

    /// Check if generator `generator` (1-based) is a descent
    pub fn contains(&self, generator: u8) -> bool {
        (1..=32).contains(&generator) && self.0 & (1 << (generator - 1)) != 0
    }

    /// Number of descents
    pub fn count(&self) -> u32 {
        count_descents(self.0)
    }

    /// Iterate over descent generators in increasing order
    pub fn generators(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=32u8).filter(|&s| self.contains(s))
    }
}

/// Count the set bits of a descent bitmask
///
/// Clears the lowest set bit until the mask is empty.
pub fn count_descents(mask: u32) -> u32 {
    let mut count = 0;
    let mut rest = mask;
    while rest != 0 {
        rest &= rest - 1;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_descents_basic() {
        assert_eq!(count_descents(0), 0);
        assert_eq!(count_descents(0b1), 1);
        assert_eq!(count_descents(0b1011), 3);
        assert_eq!(count_descents(u32::MAX), 32);
    }

    #[test]
    fn test_count_descents_matches_count_ones() {
        for mask in [0x1234_5678u32, 0x8000_0001, 0xFFFF_0000, 0x0F0F_0F0F] {
            assert_eq!(count_descents(mask), mask.count_ones());
        }
    }

    #[test]
    fn test_descent_set_insert_contains() {
        let mut set = DescentSet::EMPTY;
        set.insert(1);
        set.insert(4);

        assert!(set.contains(1));
        assert!(!set.contains(2));
        assert!(set.contains(4));
        assert!(!set.contains(0));
        assert_eq!(set.count(), 2);
        assert_eq!(set.generators().collect::<Vec<_>>(), vec![1, 4]);
    }
}
