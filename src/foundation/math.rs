pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// `1 - n³` for `n = |v| / half_extent`, clamped to zero outside `[-half_extent, half_extent]`.
///
/// Exactly `0.0` on the boundary and `1.0` at the center.
pub(crate) fn cubic_edge_falloff(v: f32, half_extent: f32) -> f32 {
    if half_extent <= 0.0 {
        return 0.0;
    }
    let n = v.abs() / half_extent;
    if n >= 1.0 {
        return 0.0;
    }
    1.0 - n * n * n
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
