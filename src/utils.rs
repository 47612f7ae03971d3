use crate::geometry::Fp;

pub fn clamp01(x: Fp) -> Fp {
    Fp::min(1.0, Fp::max(0.0, x))
}

/// 1 when `x` is strictly above `threshold`, 0 otherwise.
pub fn chi_above(x: Fp, threshold: Fp) -> Fp {
    if x > threshold {
        1.0
    } else {
        0.0
    }
}
