//! Shared 1-D table interpolation for correlation data.
//!
//! Every empirical correlation in the workspace performs its lookup through
//! [`interp_clamped`] so clamp/interpolate semantics are identical across
//! all of them.

/// Linearly interpolate `ys` over `xs` at `x`.
///
/// Queries outside the table domain return the boundary value (no
/// extrapolation). `xs` must be sorted strictly ascending and match `ys` in
/// length; the tables are hand-transcribed constants, so both conditions are
/// enforced with debug assertions.
pub fn interp_clamped(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert!(!xs.is_empty());
    debug_assert!(xs.windows(2).all(|w| w[0] < w[1]));

    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }

    // First index with xs[hi] > x; the bracketing segment is [hi-1, hi].
    let hi = xs.partition_point(|&xv| xv <= x);
    let lo = hi - 1;
    let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
    ys[lo] + t * (ys[hi] - ys[lo])
}
