/// Double-precision math for designer coordinates.
///
/// Re-exports the `f64` flavours of the [`glam`] types. Designer geometry is
/// kept in `f64` so that chained layout/render transforms do not drift.
///
/// # Examples
///
/// ```
/// use astrelis_core::math::{DAffine2, DVec2};
///
/// let offset = DAffine2::from_translation(DVec2::new(10.0, 20.0));
/// let scaled = offset * DAffine2::from_scale(DVec2::splat(2.0));
/// assert_eq!(scaled.transform_point2(DVec2::new(1.0, 1.0)), DVec2::new(12.0, 22.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub use glam::{DAffine2, DVec2};

/// Tolerance used when comparing transforms and lengths.
pub const EPSILON: f64 = 1e-9;

/// Whether `transform` can be inverted without blowing up.
pub fn is_invertible(transform: &DAffine2) -> bool {
    let det = transform.matrix2.determinant();
    det.is_finite() && det.abs() > EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_invertible() {
        assert!(is_invertible(&DAffine2::IDENTITY));
        assert!(!is_invertible(&DAffine2::from_scale(DVec2::new(0.0, 1.0))));
    }
}
