//! Squared Euclidean distance in widened integer arithmetic.

/// Computes the squared Euclidean distance between two points.
///
/// ```text
/// d² = Σⱼ (a[j] − b[j])²
/// ```
///
/// Differences are taken in `i64` and squared in `u64`, where the square of
/// any 32-bit difference fits. The sum is accumulated in `u128`, which holds
/// any number of such squares a point layout can address, so no step can
/// overflow.
///
/// Dispatches to a specialised implementation for 3 dimensions.
///
/// # Panics
///
/// Debug-asserts that `a.len() == b.len()`.
#[inline]
pub fn sq_distance(a: &[u32], b: &[u32]) -> u128 {
    debug_assert_eq!(a.len(), b.len());
    match a.len() {
        3 => sq_distance_3d(a, b),
        _ => sq_distance_nd(a, b),
    }
}

#[inline]
fn sq_diff(a: u32, b: u32) -> u64 {
    let d = (i64::from(a) - i64::from(b)).unsigned_abs();
    d * d
}

#[inline]
fn sq_distance_3d(a: &[u32], b: &[u32]) -> u128 {
    u128::from(sq_diff(a[0], b[0]))
        + u128::from(sq_diff(a[1], b[1]))
        + u128::from(sq_diff(a[2], b[2]))
}

#[inline]
fn sq_distance_nd(a: &[u32], b: &[u32]) -> u128 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| u128::from(sq_diff(x, y)))
        .sum()
}
