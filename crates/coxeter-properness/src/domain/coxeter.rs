//! Finite Coxeter groups in their geometric representation
//!
//! A group is stored as its symmetric bilinear form
//! `B(a_i, a_j) = -cos(pi / m_ij)` on the simple roots. The simple
//! reflection `s_i` acts on a root `v = sum c_j a_j` by changing only the
//! `i`-th coefficient: `c_i <- c_i - 2 * sum_j B_ij c_j`.
//!
//! Generator labelling (1-based, as written in input lines):
//!
//! | Family | Diagram |
//! |--------|---------|
//! | A_n    | 1 - 2 - ... - n |
//! | B_n    | 1 =4= 2 - 3 - ... - n |
//! | D_n    | 1 - 3, 2 - 3, 3 - 4 - ... - n |
//! | E_n    | 1 - 3 - 4 - ... - n, 2 - 4 |
//! | F_4    | 1 - 2 =4= 3 - 4 |
//! | G_2    | 1 =6= 2 |
//! | H_n    | 1 =5= 2 - 3 (- 4) |
//! | I_2(m) | 1 =m= 2 |

use crate::constants::{MAX_RANK, MIN_GENERATOR};
use crate::domain::cartan::CartanFamily;
use crate::domain::descent::DescentSet;
use std::f64::consts::PI;
use thiserror::Error;

/// Coefficients below this magnitude are treated as zero when reading a
/// root's sign
const SIGN_EPSILON: f64 = 1e-9;

/// Group construction and evaluation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// Rank not supported for the family
    #[error("Invalid rank {rank} for type {family} (supported: {supported})")]
    InvalidRank {
        family: CartanFamily,
        rank: u32,
        supported: &'static str,
    },
    /// Type I needs an edge label m >= 2
    #[error("Type I requires a dihedral order m >= 2, got {0:?}")]
    InvalidDihedralOrder(Option<u32>),
    /// Generator index outside 1..=rank
    #[error("Generator {generator} out of range 1-{rank}")]
    GeneratorOutOfRange { generator: u8, rank: u32 },
}

/// A finite Coxeter group of a given family and rank
#[derive(Clone, Debug, PartialEq)]
pub struct CoxeterGroup {
    family: CartanFamily,
    rank: u32,
    /// Coxeter matrix, row-major, `rank * rank` (0-based generator indices)
    coxeter_matrix: Vec<u32>,
    /// Bilinear form, row-major, `rank * rank`
    form: Vec<f64>,
}

impl CoxeterGroup {
    /// Build the group of `family` and `rank`
    ///
    /// `dihedral_order` is the edge label m of I_2(m) and is ignored for
    /// every other family.
    pub fn new(
        family: CartanFamily,
        rank: u32,
        dihedral_order: Option<u32>,
    ) -> Result<Self, GroupError> {
        validate_rank(family, rank)?;

        let n = rank as usize;
        let mut coxeter_matrix = vec![2u32; n * n];
        for i in 0..n {
            coxeter_matrix[i * n + i] = 1;
        }

        for (a, b, m) in diagram_edges(family, rank, dihedral_order)? {
            coxeter_matrix[a * n + b] = m;
            coxeter_matrix[b * n + a] = m;
        }

        let form = coxeter_matrix
            .iter()
            .map(|&m| -(PI / m as f64).cos())
            .collect();

        Ok(Self {
            family,
            rank,
            coxeter_matrix,
            form,
        })
    }

    pub fn family(&self) -> CartanFamily {
        self.family
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Left-descent set of the element represented by `word`
    ///
    /// Generator `s` is a left descent of `w` iff `w^{-1}(a_s)` is a
    /// negative root. `w^{-1}` applies the word's letters first to last.
    /// The word does not need to be reduced.
    pub fn left_descent_set(&self, word: &[u8]) -> Result<DescentSet, GroupError> {
        let indices = self.validate_word(word)?;
        let n = self.rank as usize;

        // Row s holds the image of a_s
        let mut roots = vec![0.0f64; n * n];
        for s in 0..n {
            roots[s * n + s] = 1.0;
        }

        for &i in &indices {
            for root in roots.chunks_exact_mut(n) {
                self.reflect(i, root);
            }
        }

        let mut descents = DescentSet::EMPTY;
        for (s, root) in roots.chunks_exact(n).enumerate() {
            if is_negative(root) {
                descents.insert(s as u8 + MIN_GENERATOR);
            }
        }

        Ok(descents)
    }

    /// Check whether `word` is a reduced expression
    ///
    /// `s_1 ... s_k` is reduced iff `s_1 ... s_{j-1}(a_{s_j})` is positive
    /// for every `j`; the prefix is applied last letter first.
    pub fn is_reduced(&self, word: &[u8]) -> Result<bool, GroupError> {
        let indices = self.validate_word(word)?;

        for j in 0..indices.len() {
            let mut root = vec![0.0f64; self.rank as usize];
            root[indices[j]] = 1.0;
            for &i in indices[..j].iter().rev() {
                self.reflect(i, &mut root);
            }
            if is_negative(&root) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Apply simple reflection `i` (0-based) to `root` in place
    #[inline]
    fn reflect(&self, i: usize, root: &mut [f64]) {
        let n = self.rank as usize;
        let row = &self.form[i * n..(i + 1) * n];
        let pairing: f64 = row.iter().zip(root.iter()).map(|(b, c)| b * c).sum();
        root[i] -= 2.0 * pairing;
    }

    fn index_of(&self, generator: u8) -> Result<usize, GroupError> {
        if generator < MIN_GENERATOR || generator as u32 > self.rank {
            return Err(GroupError::GeneratorOutOfRange {
                generator,
                rank: self.rank,
            });
        }
        Ok((generator - MIN_GENERATOR) as usize)
    }

    fn validate_word(&self, word: &[u8]) -> Result<Vec<usize>, GroupError> {
        word.iter().map(|&g| self.index_of(g)).collect()
    }
}

/// A root is negative iff its largest-magnitude coefficient is negative
fn is_negative(root: &[f64]) -> bool {
    let dominant = root
        .iter()
        .copied()
        .fold(0.0f64, |acc, c| if c.abs() > acc.abs() { c } else { acc });
    dominant < -SIGN_EPSILON
}

fn validate_rank(family: CartanFamily, rank: u32) -> Result<(), GroupError> {
    let (ok, supported) = match family {
        CartanFamily::A => ((1..=MAX_RANK).contains(&rank), "1-9"),
        CartanFamily::B => ((2..=MAX_RANK).contains(&rank), "2-9"),
        CartanFamily::D => ((4..=MAX_RANK).contains(&rank), "4-9"),
        CartanFamily::E => ((6..=8).contains(&rank), "6-8"),
        CartanFamily::F => (rank == 4, "4"),
        CartanFamily::G => (rank == 2, "2"),
        CartanFamily::H => ((3..=4).contains(&rank), "3-4"),
        CartanFamily::I => (rank == 2, "2"),
    };

    if ok {
        Ok(())
    } else {
        Err(GroupError::InvalidRank {
            family,
            rank,
            supported,
        })
    }
}

/// Edges of the Coxeter diagram as (a, b, m), 0-based, m >= 3
fn diagram_edges(
    family: CartanFamily,
    rank: u32,
    dihedral_order: Option<u32>,
) -> Result<Vec<(usize, usize, u32)>, GroupError> {
    let n = rank as usize;
    let chain = |from: usize| (from..n.saturating_sub(1)).map(|i| (i, i + 1, 3));

    let edges = match family {
        CartanFamily::A => chain(0).collect(),
        CartanFamily::B => std::iter::once((0, 1, 4)).chain(chain(1)).collect(),
        CartanFamily::D => [(0, 2, 3), (1, 2, 3)].into_iter().chain(chain(2)).collect(),
        CartanFamily::E => [(0, 2, 3), (1, 3, 3)].into_iter().chain(chain(2)).collect(),
        CartanFamily::F => vec![(0, 1, 3), (1, 2, 4), (2, 3, 3)],
        CartanFamily::G => vec![(0, 1, 6)],
        CartanFamily::H => std::iter::once((0, 1, 5)).chain(chain(1)).collect(),
        CartanFamily::I => match dihedral_order {
            Some(m) if m >= 2 => vec![(0, 1, m)],
            other => return Err(GroupError::InvalidDihedralOrder(other)),
        },
    };

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(family: CartanFamily, rank: u32) -> CoxeterGroup {
        CoxeterGroup::new(family, rank, None).unwrap()
    }

    /// Order of `s_i s_j` for 1-based generators
    fn entry(g: &CoxeterGroup, i: usize, j: usize) -> u32 {
        g.coxeter_matrix[(i - 1) * g.rank as usize + (j - 1)]
    }

    /// Longest element of I_2(m) / G_2 / A_2 style rank-2 groups: 1212...
    fn alternating(len: usize) -> Vec<u8> {
        (0..len).map(|i| if i % 2 == 0 { 1 } else { 2 }).collect()
    }

    #[test]
    fn test_new_rejects_invalid_rank() {
        assert!(matches!(
            CoxeterGroup::new(CartanFamily::E, 5, None),
            Err(GroupError::InvalidRank { .. })
        ));
        assert!(CoxeterGroup::new(CartanFamily::A, 0, None).is_err());
        assert!(CoxeterGroup::new(CartanFamily::A, 10, None).is_err());
        assert!(CoxeterGroup::new(CartanFamily::D, 3, None).is_err());
        assert!(CoxeterGroup::new(CartanFamily::F, 3, None).is_err());
    }

    #[test]
    fn test_new_type_i_requires_order() {
        assert_eq!(
            CoxeterGroup::new(CartanFamily::I, 2, None),
            Err(GroupError::InvalidDihedralOrder(None))
        );
        assert_eq!(
            CoxeterGroup::new(CartanFamily::I, 2, Some(1)),
            Err(GroupError::InvalidDihedralOrder(Some(1)))
        );
        assert!(CoxeterGroup::new(CartanFamily::I, 2, Some(7)).is_ok());
    }

    #[test]
    fn test_coxeter_matrix_entries() {
        let b = group(CartanFamily::B, 3);
        assert_eq!(entry(&b, 1, 2), 4);
        assert_eq!(entry(&b, 2, 3), 3);
        assert_eq!(entry(&b, 1, 3), 2);
        assert_eq!(entry(&b, 2, 2), 1);

        let d = group(CartanFamily::D, 4);
        assert_eq!(entry(&d, 1, 3), 3);
        assert_eq!(entry(&d, 2, 3), 3);
        assert_eq!(entry(&d, 1, 2), 2);
        assert_eq!(entry(&d, 3, 4), 3);

        let e = group(CartanFamily::E, 6);
        assert_eq!(entry(&e, 2, 4), 3);
        assert_eq!(entry(&e, 1, 3), 3);
        assert_eq!(entry(&e, 2, 3), 2);

        let f = group(CartanFamily::F, 4);
        assert_eq!(entry(&f, 2, 3), 4);
    }

    #[test]
    fn test_left_descent_empty_word() {
        let a = group(CartanFamily::A, 3);
        assert_eq!(a.left_descent_set(&[]), Ok(DescentSet::EMPTY));
    }

    #[test]
    fn test_left_descent_single_generator() {
        let a = group(CartanFamily::A, 3);
        for s in 1..=3u8 {
            let descents = a.left_descent_set(&[s]).unwrap();
            assert_eq!(descents.generators().collect::<Vec<_>>(), vec![s]);
        }
    }

    #[test]
    fn test_left_descent_type_a() {
        let a = group(CartanFamily::A, 3);
        // s1 s2: only s1 is a left descent
        assert_eq!(a.left_descent_set(&[1, 2]).unwrap().count(), 1);
        assert!(a.left_descent_set(&[1, 2]).unwrap().contains(1));
        // s1 s3 = s3 s1: both
        assert_eq!(a.left_descent_set(&[1, 3]).unwrap().count(), 2);
        // Longest element of A_3: every generator is a descent
        let w0 = [1, 2, 1, 3, 2, 1];
        assert_eq!(a.left_descent_set(&w0).unwrap().count(), 3);
    }

    #[test]
    fn test_left_descent_dihedral_longest() {
        for (family, m, order) in [
            (CartanFamily::A, 3, None),
            (CartanFamily::B, 4, None),
            (CartanFamily::G, 6, None),
            (CartanFamily::I, 8, Some(8)),
        ] {
            let g = CoxeterGroup::new(family, 2, order).unwrap();
            let w0 = alternating(m);
            assert_eq!(g.left_descent_set(&w0).unwrap().count(), 2, "{}", family);

            let below = alternating(m - 1);
            let descents = g.left_descent_set(&below).unwrap();
            assert_eq!(descents.count(), 1, "{}", family);
            assert!(descents.contains(1));
        }
    }

    #[test]
    fn test_left_descent_non_reduced_word() {
        let a = group(CartanFamily::A, 2);
        // s1 s1 = identity
        assert_eq!(a.left_descent_set(&[1, 1]), Ok(DescentSet::EMPTY));
        // s2 s1 s1 = s2
        let descents = a.left_descent_set(&[2, 1, 1]).unwrap();
        assert_eq!(descents.generators().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_left_descent_generator_out_of_range() {
        let a = group(CartanFamily::A, 3);
        assert_eq!(
            a.left_descent_set(&[1, 4]),
            Err(GroupError::GeneratorOutOfRange {
                generator: 4,
                rank: 3
            })
        );
        assert_eq!(
            a.left_descent_set(&[0]),
            Err(GroupError::GeneratorOutOfRange {
                generator: 0,
                rank: 3
            })
        );
    }

    #[test]
    fn test_is_reduced() {
        let a = group(CartanFamily::A, 3);
        assert_eq!(a.is_reduced(&[]), Ok(true));
        assert_eq!(a.is_reduced(&[1, 2, 1]), Ok(true));
        assert_eq!(a.is_reduced(&[1, 1]), Ok(false));
        // braid relation: s1 s2 s1 s2 = s2 s1
        assert_eq!(a.is_reduced(&[1, 2, 1, 2]), Ok(false));
        assert_eq!(a.is_reduced(&[1, 2, 1, 3, 2, 1]), Ok(true));

        let g = group(CartanFamily::G, 2);
        assert_eq!(g.is_reduced(&alternating(6)), Ok(true));
        assert_eq!(g.is_reduced(&alternating(7)), Ok(false));
    }
}
