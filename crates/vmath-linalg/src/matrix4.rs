//! 4x4 matrix type for homogeneous transforms.
//!
//! [`Matrix4`] combines a linear map with a translation column and, for
//! projections, a non-trivial bottom row.
//!
//! # Convention
//!
//! Row-major storage, column vectors. The translation lives in the last
//! column (`m03`, `m13`, `m23`):
//!
//! ```text
//! | m00 m01 m02 m03 |
//! | m10 m11 m12 m13 |
//! | m20 m21 m22 m23 |
//! | m30 m31 m32 m33 |
//! ```
//!
//! # Transforming 3D vectors
//!
//! - [`Matrix4::transform_point`] - affine, implicit `w = 1`, no divide
//! - [`Matrix4::transform_pd`] - full product followed by perspective
//!   division; `Matrix4 * Vector3` uses this form
//!
//! ```rust
//! use vmath_linalg::{Matrix4D, Vector3D};
//!
//! let t = Matrix4D::translation(Vector3D::new(1.0, 2.0, 3.0));
//! assert_eq!(t.transform_point(Vector3D::ZERO), Vector3D::new(1.0, 2.0, 3.0));
//! assert_eq!(t.offset(), Vector3D::new(1.0, 2.0, 3.0));
//! ```

use vmath_core::{Error, Result, Scalar};

use crate::grid;
use crate::macros::impl_matrix_common;
use crate::matrix3::Matrix3;
use crate::quaternion::Quaternion;
use crate::vector3::Vector3;
use crate::vector4::Vector4;

/// A 4x4 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix4<T> {
    /// Elements in row-major order: [row0, row1, row2, row3]
    pub m: [[T; 4]; 4],
}

/// Single-precision 4x4 matrix.
pub type Matrix4F = Matrix4<f32>;
/// Double-precision 4x4 matrix.
pub type Matrix4D = Matrix4<f64>;

impl<T: Scalar> Matrix4<T> {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[T::ZERO; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self { m: grid::identity() };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Returns the row arrays.
    #[inline]
    pub const fn to_rows(self) -> [[T; 4]; 4] {
        self.m
    }

    /// Creates a matrix from column arrays.
    #[inline]
    pub fn from_cols(cols: [[T; 4]; 4]) -> Self {
        Self::from_rows(grid::transpose(&cols))
    }

    /// Creates a matrix whose columns are the given vectors.
    pub fn from_columns(c0: Vector4<T>, c1: Vector4<T>, c2: Vector4<T>, c3: Vector4<T>) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array(), c3.to_array()])
    }

    /// Creates a matrix whose rows are the given vectors.
    pub fn from_row_vectors(r0: Vector4<T>, r1: Vector4<T>, r2: Vector4<T>, r3: Vector4<T>) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()])
    }

    /// Creates a matrix from 16 elements in row-major order.
    pub fn from_slice(s: &[T]) -> Result<Self> {
        grid::from_slice(s).map(Self::from_rows)
    }

    /// Embeds a 3x3 linear map, with no translation and `m33 = 1`.
    pub fn from_matrix3(l: Matrix3<T>) -> Self {
        let mut out = Self::IDENTITY;
        for (dst, src) in out.m.iter_mut().zip(l.m) {
            dst[..3].copy_from_slice(&src);
        }
        out
    }

    /// Upper-left 3x3 block.
    pub fn to_matrix3(&self) -> Matrix3<T> {
        self.minor(3, 3)
    }

    /// Rotation matrix of a quaternion. See [`Quaternion::to_matrix`].
    #[inline]
    pub fn from_quaternion(q: Quaternion<T>) -> Self {
        q.to_matrix()
    }

    /// Translation by `t`.
    pub fn translation(t: Vector3<T>) -> Self {
        let mut out = Self::IDENTITY;
        out.m[0][3] = t.x;
        out.m[1][3] = t.y;
        out.m[2][3] = t.z;
        out
    }

    /// Non-uniform scale.
    pub fn scale(s: Vector3<T>) -> Self {
        Self::from_matrix3(Matrix3::scale(s))
    }

    /// Rotation of `angle` radians about the X axis.
    pub fn rotation_x(angle: T) -> Self {
        Self::from_matrix3(Matrix3::rotation_x(angle))
    }

    /// Rotation of `angle` radians about the Y axis.
    pub fn rotation_y(angle: T) -> Self {
        Self::from_matrix3(Matrix3::rotation_y(angle))
    }

    /// Rotation of `angle` radians about the Z axis.
    pub fn rotation_z(angle: T) -> Self {
        Self::from_matrix3(Matrix3::rotation_z(angle))
    }

    /// Returns row `i` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector4<T> {
        Vector4::from_array(self.m[i])
    }

    /// Returns column `i` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    pub fn col(&self, i: usize) -> Vector4<T> {
        Vector4::from_array(grid::column(&self.m, i))
    }

    /// Element at flat row-major `index` (0..16).
    pub fn get(&self, index: usize) -> Result<T> {
        grid::get(&self.m, index)
    }

    /// Sets the element at flat row-major `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        grid::set(&mut self.m, index, value)
    }

    /// Element at `(row, col)`.
    pub fn get_at(&self, row: usize, col: usize) -> Result<T> {
        grid::get_at(&self.m, row, col)
    }

    /// Sets the element at `(row, col)`.
    pub fn set_at(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        grid::set_at(&mut self.m, row, col, value)
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        self.m = grid::transpose(&self.m);
    }

    /// Returns the transpose.
    #[inline]
    pub fn transposed(self) -> Self {
        Self::from_rows(grid::transpose(&self.m))
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let mut det = T::ZERO;
        for (c, v) in self.m[0].iter().enumerate() {
            det += grid::cofactor_sign::<T>(0, c) * *v * self.minor(0, c).determinant();
        }
        det
    }

    /// The 3x3 matrix left after deleting `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 3.
    pub fn minor(&self, row: usize, col: usize) -> Matrix3<T> {
        assert!(row < 4 && col < 4, "Matrix4 minor out of bounds: ({}, {})", row, col);
        let mut out = Matrix3::ZERO;
        let rows = (0..4).filter(|&r| r != row);
        for (dst, r) in out.m.iter_mut().zip(rows) {
            let cols = (0..4).filter(|&c| c != col);
            for (v, c) in dst.iter_mut().zip(cols) {
                *v = self.m[r][c];
            }
        }
        out
    }

    /// Adjugate: `adj[r][c] = (-1)^(r+c) * det(minor(c, r))`.
    pub fn adjoint(&self) -> Self {
        let mut out = Self::ZERO;
        for (r, row) in out.m.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = grid::cofactor_sign::<T>(r, c) * self.minor(c, r).determinant();
            }
        }
        out
    }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> T {
        grid::trace(&self.m)
    }

    /// Inverse as `adjoint / determinant`.
    ///
    /// Fails with [`Error::NotInvertible`] when the determinant is zero.
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            tracing::debug!(matrix = ?self.m, "singular Matrix4");
            return Err(Error::not_invertible("Matrix4", format!("{:?}", self.m)));
        }
        Ok(Self::from_rows(grid::map(&self.adjoint().m, |v| v / det)))
    }

    /// Full matrix-vector product.
    #[inline]
    pub fn transform(&self, v: Vector4<T>) -> Vector4<T> {
        Vector4::from_array(grid::mul_vec(&self.m, v.to_array()))
    }

    /// Affine transform of a point: rotation/scale plus translation, the
    /// bottom row is ignored.
    pub fn transform_point(&self, v: Vector3<T>) -> Vector3<T> {
        let m = &self.m;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3],
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3],
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3],
        )
    }

    /// Transforms a direction: the translation column is ignored.
    pub fn transform_vector(&self, v: Vector3<T>) -> Vector3<T> {
        self.to_matrix3().transform(v)
    }

    /// Projective transform: appends `w = 1`, multiplies, then divides
    /// x/y/z by the resulting w.
    ///
    /// w is not checked. A zero w yields infinities or NaN, as with
    /// any IEEE division.
    pub fn transform_pd(&self, v: Vector3<T>) -> Vector3<T> {
        let r = self.transform(Vector4::from_vector3(v, T::ONE));
        r.xyz() / r.w
    }

    /// Translation column `(m03, m13, m23)`.
    #[inline]
    pub fn offset(&self) -> Vector3<T> {
        Vector3::new(self.m[0][3], self.m[1][3], self.m[2][3])
    }

    /// Tolerance-based comparison of all elements.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        grid::all(&self.m, &other.m, |a, b| vmath_core::approx_eq(a, b, tolerance))
    }

    /// [`approx_eq`](Self::approx_eq) with [`Scalar::EPSILON`].
    pub fn approx_eq_default(&self, other: &Self) -> bool {
        self.approx_eq(other, T::EPSILON)
    }

    /// Returns true if all elements are finite.
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }
}

impl_matrix_common!(Matrix4, 4);

// Matrix4 * Vector4
impl<T: Scalar> std::ops::Mul<Vector4<T>> for Matrix4<T> {
    type Output = Vector4<T>;

    #[inline]
    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        self.transform(rhs)
    }
}

// Matrix4 * Vector3 (with perspective division)
impl<T: Scalar> std::ops::Mul<Vector3<T>> for Matrix4<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.transform_pd(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector3::Vector3D;
    use crate::vector4::Vector4D;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sample() -> Matrix4D {
        Matrix4D::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ])
    }

    #[test]
    fn test_matrix4_determinant() {
        assert_eq!(Matrix4D::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix4D::ZERO.determinant(), 0.0);
        assert_eq!(sample().determinant(), 30.0);
        assert_eq!(Matrix4D::scale(Vector3D::new(2.0, 3.0, 4.0)).determinant(), 24.0);
    }

    #[test]
    fn test_matrix4_inverse() {
        let m = sample();
        let inv = m.try_inverse().unwrap();
        assert_relative_eq!(m * inv, Matrix4D::IDENTITY, epsilon = 1e-12);

        let mut singular = sample();
        singular.m[3] = singular.m[0];
        assert!(singular.try_inverse().unwrap_err().is_not_invertible());
    }

    #[test]
    fn test_matrix4_adjoint_identity() {
        assert_eq!(Matrix4D::IDENTITY.adjoint(), Matrix4D::IDENTITY);
        let m = sample();
        assert_relative_eq!(m * m.adjoint(), Matrix4D::IDENTITY * m.determinant(), epsilon = 1e-12);
    }

    #[test]
    fn test_matrix4_transform_point() {
        let m = Matrix4D::translation(Vector3D::new(1.0, 2.0, 3.0)) * Matrix4D::scale(Vector3D::splat(2.0));
        assert_eq!(m.transform_point(Vector3D::ONE), Vector3D::new(3.0, 4.0, 5.0));
        assert_eq!(m.transform_vector(Vector3D::ONE), Vector3D::splat(2.0));
        assert_eq!(m.transform(Vector4D::new(1.0, 1.0, 1.0, 0.0)), Vector4D::new(2.0, 2.0, 2.0, 0.0));
    }

    #[test]
    fn test_matrix4_transform_pd() {
        let mut m = Matrix4D::IDENTITY;
        m.m[3][3] = 2.0;
        assert_eq!(m.transform_pd(Vector3D::new(2.0, 4.0, 6.0)), Vector3D::new(1.0, 2.0, 3.0));
        assert_eq!(m * Vector3D::new(2.0, 4.0, 6.0), Vector3D::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_matrix4_transform_pd_zero_w() {
        let mut m = Matrix4D::IDENTITY;
        m.m[3][3] = 0.0;
        let r = m.transform_pd(Vector3D::new(1.0, 0.0, -1.0));
        assert!(r.x.is_infinite() && r.x > 0.0);
        assert!(r.y.is_nan());
        assert!(r.z.is_infinite() && r.z < 0.0);
    }

    #[test]
    fn test_matrix4_rotation_matches_matrix3() {
        let a = 0.7;
        let r4 = Matrix4D::rotation_y(a);
        assert_eq!(r4.to_matrix3(), Matrix3::rotation_y(a));
        assert_eq!(r4.offset(), Vector3D::ZERO);
        assert_abs_diff_eq!(r4.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix4_transpose_twice() {
        let m = sample();
        assert_eq!(m.transposed().transposed(), m);
        let mut t = m;
        t.transpose();
        assert_eq!(t.col(0), m.row(0));
    }

    #[test]
    fn test_matrix4_parse_roundtrip() {
        let m = sample() * 0.3;
        let text = m.to_string();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.parse::<Matrix4D>().unwrap(), m);
    }
}
