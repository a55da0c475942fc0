//! Scalar helpers with shading-language semantics.

/// `1.0` when `x >= edge`, otherwise `0.0`.
pub fn step(edge: f64, x: f64) -> f64 {
    if x >= edge { 1.0 } else { 0.0 }
}

/// Hermite ease between `e0` and `e1` (`e0 < e1`), clamped to `[0, 1]`.
pub fn smoothstep(e0: f64, e1: f64, x: f64) -> f64 {
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// `x - floor(x)`, so negative inputs wrap upward (`fract(-0.25) == 0.75`).
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
