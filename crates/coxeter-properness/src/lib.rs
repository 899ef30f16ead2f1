//! coxeter-properness - Properness classification of words in finite Coxeter groups
//!
//! This crate provides functionality to:
//! - Parse generator-index words from text lines
//! - Compute left-descent sets in finite Coxeter groups (types A-I)
//! - Decide properness: `length(w) <= rank + bound(family, descents(w))`
//! - Stream large word lists through the filter, sequentially or with rayon

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::filter::{FilterEvent, FilterOptions, FilterStats, SkipReason, filter_words};
pub use constants::*;
pub use domain::bound::{BoundError, BoundTable, bound};
pub use domain::cartan::CartanFamily;
pub use domain::coxeter::{CoxeterGroup, GroupError};
pub use domain::descent::{DescentSet, count_descents};
pub use domain::properness::{ClassifyError, ProperClassifier, is_proper};
pub use domain::word::{Word, WordParser, parse_line};
