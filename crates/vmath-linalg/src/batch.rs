//! In-place operations over slices of values.
//!
//! When the `rayon` feature is enabled (default) the slice is split across
//! the rayon thread pool; otherwise the same functions run sequentially.
//! Every element is processed independently, so results are identical
//! either way.
//!
//! # Example
//!
//! ```rust
//! use vmath_linalg::batch;
//! use vmath_linalg::{Matrix4F, Vector3F};
//!
//! let m = Matrix4F::translation(Vector3F::new(0.0, 1.0, 0.0));
//! let mut points = vec![Vector3F::ZERO; 1024];
//! batch::transform_points(&m, &mut points);
//! assert!(points.iter().all(|p| *p == Vector3F::Y_AXIS));
//! ```

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use vmath_core::{Error, Result, Scalar};

use crate::matrix4::Matrix4;
use crate::vector3::Vector3;

/// Applies `f` to every element, in parallel when `rayon` is enabled.
fn for_each_mut<V, F>(items: &mut [V], f: F)
where
    V: Send,
    F: Fn(&mut V) + Sync + Send,
{
    #[cfg(feature = "rayon")]
    items.par_iter_mut().for_each(f);
    #[cfg(not(feature = "rayon"))]
    items.iter_mut().for_each(f);
}

/// Affine-transforms every point in place (see [`Matrix4::transform_point`]).
pub fn transform_points<T: Scalar>(m: &Matrix4<T>, points: &mut [Vector3<T>]) {
    for_each_mut(points, |p| *p = m.transform_point(*p));
}

/// Projectively transforms every point in place (see
/// [`Matrix4::transform_pd`]). Points that land on `w = 0` become
/// infinite or NaN.
pub fn transform_points_pd<T: Scalar>(m: &Matrix4<T>, points: &mut [Vector3<T>]) {
    for_each_mut(points, |p| *p = m.transform_pd(*p));
}

/// Normalizes every vector in place.
///
/// All vectors are checked first: if any has zero length the call fails
/// with [`Error::DivisionByZero`] and the slice is left untouched.
pub fn normalize_all<T: Scalar>(vectors: &mut [Vector3<T>]) -> Result<()> {
    if let Some(index) = vectors.iter().position(|v| v.length() == T::ZERO) {
        tracing::debug!(index, len = vectors.len(), "zero-length vector in batch normalize");
        return Err(Error::division_by_zero("normalizing a zero-length vector"));
    }
    for_each_mut(vectors, |v| {
        if let Ok(n) = v.normalized() {
            *v = n;
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector3::Vector3D;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_transform_points_matches_single() {
        let m = Matrix4::rotation_z(0.25) * Matrix4::translation(Vector3D::new(1.0, -2.0, 3.0));
        let src: Vec<Vector3D> = (0..100).map(|i| Vector3D::new(i as f64, 1.0, -(i as f64))).collect();

        let mut points = src.clone();
        transform_points(&m, &mut points);
        for (p, s) in points.iter().zip(&src) {
            assert_eq!(*p, m.transform_point(*s));
        }

        let mut points = src.clone();
        transform_points_pd(&m, &mut points);
        for (p, s) in points.iter().zip(&src) {
            assert_eq!(*p, m * *s);
        }
    }

    #[test]
    fn test_normalize_all() {
        let mut v: Vec<Vector3D> = (1..50).map(|i| Vector3D::new(i as f64, 2.0, -3.0)).collect();
        normalize_all(&mut v).unwrap();
        for n in &v {
            assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normalize_all_rejects_zero_without_mutation() {
        let mut v = vec![Vector3D::new(3.0, 0.0, 4.0), Vector3D::ZERO];
        let err = normalize_all(&mut v).unwrap_err();
        assert!(err.is_division_by_zero());
        assert_eq!(v[0], Vector3D::new(3.0, 0.0, 4.0));
    }

    #[test]
    fn test_empty_slices() {
        let mut v: Vec<Vector3D> = Vec::new();
        transform_points(&Matrix4::IDENTITY, &mut v);
        assert!(normalize_all(&mut v).is_ok());
    }
}
