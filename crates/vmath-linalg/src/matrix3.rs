//! 3x3 matrix type for linear transforms.
//!
//! [`Matrix3`] holds rotations, scales and other linear maps of 3D space.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vmath_linalg::{Matrix3D, Vector3D};
//!
//! let m = Matrix3D::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 3.0, 0.0],
//!     [0.0, 0.0, 4.0],
//! ]);
//! assert_eq!(m.determinant(), 24.0);
//! assert_eq!(m * Vector3D::ONE, Vector3D::new(2.0, 3.0, 4.0));
//! ```

use vmath_core::{Error, Result, Scalar};

use crate::grid;
use crate::macros::impl_matrix_common;
use crate::matrix2::Matrix2;
use crate::vector3::Vector3;

/// A 3x3 matrix.
///
/// Stored in row-major order. Use [`Matrix3::from_rows`] or
/// [`Matrix3::from_columns`] to construct from components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix3<T> {
    /// Elements in row-major order: [row0, row1, row2]
    pub m: [[T; 3]; 3],
}

/// Single-precision 3x3 matrix.
pub type Matrix3F = Matrix3<f32>;
/// Double-precision 3x3 matrix.
pub type Matrix3D = Matrix3<f64>;

impl<T: Scalar> Matrix3<T> {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[T::ZERO; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self { m: grid::identity() };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[T; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Returns the row arrays.
    #[inline]
    pub const fn to_rows(self) -> [[T; 3]; 3] {
        self.m
    }

    /// Creates a matrix from column arrays.
    #[inline]
    pub fn from_cols(cols: [[T; 3]; 3]) -> Self {
        Self::from_rows(grid::transpose(&cols))
    }

    /// Creates a matrix whose columns are the given vectors.
    #[inline]
    pub fn from_columns(c0: Vector3<T>, c1: Vector3<T>, c2: Vector3<T>) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a matrix whose rows are the given vectors.
    #[inline]
    pub fn from_row_vectors(r0: Vector3<T>, r1: Vector3<T>, r2: Vector3<T>) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Creates a matrix from 9 elements in row-major order.
    pub fn from_slice(s: &[T]) -> Result<Self> {
        grid::from_slice(s).map(Self::from_rows)
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: T, d1: T, d2: T) -> Self {
        Self::from_rows([
            [d0, T::ZERO, T::ZERO],
            [T::ZERO, d1, T::ZERO],
            [T::ZERO, T::ZERO, d2],
        ])
    }

    /// Non-uniform scale matrix.
    #[inline]
    pub const fn scale(s: Vector3<T>) -> Self {
        Self::diagonal(s.x, s.y, s.z)
    }

    /// Rotation of `angle` radians about the X axis.
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, c, -s],
            [T::ZERO, s, c],
        ])
    }

    /// Rotation of `angle` radians about the Y axis.
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self::from_rows([
            [c, T::ZERO, s],
            [T::ZERO, T::ONE, T::ZERO],
            [-s, T::ZERO, c],
        ])
    }

    /// Rotation of `angle` radians about the Z axis.
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self::from_rows([
            [c, -s, T::ZERO],
            [s, c, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Returns row `i` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector3<T> {
        Vector3::from_array(self.m[i])
    }

    /// Returns column `i` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[inline]
    pub fn col(&self, i: usize) -> Vector3<T> {
        Vector3::from_array(grid::column(&self.m, i))
    }

    /// Element at flat row-major `index` (0..9).
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

    /// Determinant by Sarrus' rule.
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[1][0] * m[2][1]
            - m[0][2] * m[1][1] * m[2][0]
            - m[0][0] * m[1][2] * m[2][1]
            - m[0][1] * m[1][0] * m[2][2]
    }

    /// The 2x2 matrix left after deleting `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 2.
    pub fn minor(&self, row: usize, col: usize) -> Matrix2<T> {
        assert!(row < 3 && col < 3, "Matrix3 minor out of bounds: ({}, {})", row, col);
        let mut out = Matrix2::ZERO;
        let rows = (0..3).filter(|&r| r != row);
        for (dst, r) in out.m.iter_mut().zip(rows) {
            let cols = (0..3).filter(|&c| c != col);
            for (v, c) in dst.iter_mut().zip(cols) {
                *v = self.m[r][c];
            }
        }
        out
    }

    /// Adjugate: transposed cofactor matrix.
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
            tracing::debug!(matrix = ?self.m, "singular Matrix3");
            return Err(Error::not_invertible("Matrix3", format!("{:?}", self.m)));
        }
        Ok(Self::from_rows(grid::map(&self.adjoint().m, |v| v / det)))
    }

    /// Matrix-vector product.
    #[inline]
    pub fn transform(&self, v: Vector3<T>) -> Vector3<T> {
        Vector3::from_array(grid::mul_vec(&self.m, v.to_array()))
    }

    /// Tolerance-based comparison of all elements.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        grid::all(&self.m, &other.m, |a, b| vmath_core::approx_eq(a, b, tolerance))
    }

    /// [`approx_eq`](Self::approx_eq) with [`Scalar::EPSILON`].
    pub fn approx_eq_default(&self, other: &Self) -> bool {
        self.approx_eq(other, T::EPSILON)
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }
}

impl_matrix_common!(Matrix3, 3);

// Matrix3 * Vector3
impl<T: Scalar> std::ops::Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.transform(rhs)
    }
}
