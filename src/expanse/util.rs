use num_traits::Float;

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Remap a `[0, 1]` fraction into the `[zero, one]` margin window.
pub fn remap<D: Float>(pct: D, zero: D, one: D) -> D {
    zero + pct * (one - zero)
}

/// Inverse of [`remap`]: recover the `[0, 1]` fraction from a margin value.
pub fn unmap<D: Float>(value: D, zero: D, one: D) -> D {
    (value - zero) / (one - zero)
}

/// Lossy conversion for error reporting only.
pub fn lossy_f64<D: Float>(x: D) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
