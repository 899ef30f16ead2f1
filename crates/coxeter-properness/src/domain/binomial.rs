//! Exact binomial coefficients
//!
//! Uses the multiplicative formula in integer arithmetic. After step `i` the
//! running value equals C(n - k + i, i), so every division is exact.

/// Calculate C(n, k), or `None` if the result does not fit in a `u64`
///
/// Returns `Some(0)` when `n < k`.
pub fn checked_choose(n: u64, k: u64) -> Option<u64> {
    if n < k {
        return Some(0);
    }

    // C(n, k) == C(n, n - k); iterate over the smaller side
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k as u128 {
        result = result.checked_mul(n as u128 - k as u128 + i)? / i;
    }

    u64::try_from(result).ok()
}

/// Calculate C(n, k)
///
/// Returns 0 when `n < k`.
///
/// # Panics
/// Panics if the result overflows `u64`. Bounds in this crate stay far
/// below that (n <= 10).
pub fn choose(n: u64, k: u64) -> u64 {
    checked_choose(n, k).unwrap_or_else(|| panic!("C({}, {}) overflows u64", n, k))
}
