//! Properness classification constants
//!
//! Note: Coxeter matrices are built per group in domain/coxeter.rs.

// =============================================================================
// Word format
// =============================================================================

/// Largest supported group rank
///
/// Each generator index is written as a single decimal digit, so ranks
/// above 9 cannot be expressed in the line format.
pub const MAX_RANK: u32 = 9;

/// Smallest valid generator index (generators are 1-based)
pub const MIN_GENERATOR: u8 = 1;

// =============================================================================
// Bound tables for the exceptional families (indexed by descent count)
// =============================================================================

/// Type E bound table (descent count 0-8)
pub const BOUND_TABLE_E: [u64; 9] = [0, 1, 3, 6, 12, 20, 36, 63, 120];

/// Type F bound table (descent count 0-4)
pub const BOUND_TABLE_F: [u64; 5] = [0, 1, 4, 9, 24];

/// Type G bound table (descent count 0-2)
pub const BOUND_TABLE_G: [u64; 3] = [0, 1, 6];

/// Type H bound table (descent count 0-4)
pub const BOUND_TABLE_H: [u64; 5] = [0, 1, 5, 15, 60];

// =============================================================================
// Pipeline parameters
// =============================================================================

/// Number of lines between progress events
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Default number of lines classified per parallel batch
pub const DEFAULT_BATCH_SIZE: usize = 1 << 14; // 16,384
