//! 2x2 matrix type.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 |   | x |   | m00*x + m01*y |
//! | m10 m11 | * | y | = | m10*x + m11*y |
//! ```

use vmath_core::{Error, Result, Scalar};

use crate::grid;
use crate::macros::impl_matrix_common;
use crate::vector2::Vector2;

/// A 2x2 matrix.
///
/// # Example
///
/// ```rust
/// use vmath_linalg::{Matrix2D, Vector2D};
///
/// let m = Matrix2D::from_rows([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(m.determinant(), -2.0);
/// assert_eq!(m * Vector2D::new(1.0, 0.0), Vector2D::new(1.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix2<T> {
    /// Elements in row-major order: [row0, row1]
    pub m: [[T; 2]; 2],
}

/// Single-precision 2x2 matrix.
pub type Matrix2F = Matrix2<f32>;
/// Double-precision 2x2 matrix.
pub type Matrix2D = Matrix2<f64>;

impl<T: Scalar> Matrix2<T> {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[T::ZERO; 2]; 2] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self { m: grid::identity() };

    /// Creates a matrix from its elements, row by row.
    #[inline]
    pub const fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self { m: [[m00, m01], [m10, m11]] }
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[T; 2]; 2]) -> Self {
        Self { m: rows }
    }

    /// Returns the row arrays.
    #[inline]
    pub const fn to_rows(self) -> [[T; 2]; 2] {
        self.m
    }

    /// Creates a matrix from column arrays.
    #[inline]
    pub fn from_cols(cols: [[T; 2]; 2]) -> Self {
        Self::from_rows(grid::transpose(&cols))
    }

    /// Creates a matrix whose columns are the given vectors.
    #[inline]
    pub fn from_columns(c0: Vector2<T>, c1: Vector2<T>) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array()])
    }

    /// Creates a matrix from 4 elements in row-major order.
    pub fn from_slice(s: &[T]) -> Result<Self> {
        grid::from_slice(s).map(Self::from_rows)
    }

    /// Returns row `i` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `i > 1`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector2<T> {
        Vector2::from_array(self.m[i])
    }

    /// Returns column `i` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `i > 1`.
    #[inline]
    pub fn col(&self, i: usize) -> Vector2<T> {
        Vector2::from_array(grid::column(&self.m, i))
    }

    /// Element at flat row-major `index` (0..4).
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
    #[inline]
    pub fn transpose(&mut self) {
        let m = &mut self.m;
        (m[0][1], m[1][0]) = (m[1][0], m[0][1]);
    }

    /// Returns the transpose.
    #[inline]
    pub fn transposed(mut self) -> Self {
        self.transpose();
        self
    }

    /// Determinant `m00*m11 - m01*m10`.
    #[inline]
    pub fn determinant(&self) -> T {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// The single element left after deleting `row` and `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 1.
    #[inline]
    pub fn minor(&self, row: usize, col: usize) -> T {
        assert!(row < 2 && col < 2, "Matrix2 minor out of bounds: ({}, {})", row, col);
        self.m[1 - row][1 - col]
    }

    /// Adjugate: `[[m11, -m01], [-m10, m00]]`.
    pub fn adjoint(&self) -> Self {
        let mut out = Self::ZERO;
        for (r, row) in out.m.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = grid::cofactor_sign::<T>(r, c) * self.minor(c, r);
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
            tracing::debug!(matrix = ?self.m, "singular Matrix2");
            return Err(Error::not_invertible("Matrix2", format!("{:?}", self.m)));
        }
        Ok(Self::from_rows(grid::map(&self.adjoint().m, |v| v / det)))
    }

    /// Matrix-vector product.
    #[inline]
    pub fn transform(&self, v: Vector2<T>) -> Vector2<T> {
        Vector2::from_array(grid::mul_vec(&self.m, v.to_array()))
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

impl_matrix_common!(Matrix2, 2);

// Matrix2 * Vector2
impl<T: Scalar> std::ops::Mul<Vector2<T>> for Matrix2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        self.transform(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matrix2_multiply_row_by_column() {
        let a = Matrix2D::new(1.0, 2.0, 3.0, 4.0);
        let b = Matrix2D::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a * b, Matrix2D::new(19.0, 22.0, 43.0, 50.0));
        assert_eq!(a * Matrix2D::IDENTITY, a);
    }

    #[test]
    fn test_matrix2_transpose() {
        let a = Matrix2F::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.transposed(), Matrix2F::new(1.0, 3.0, 2.0, 4.0));
        assert_eq!(a.transposed().transposed(), a);
    }

    #[test]
    fn test_matrix2_inverse() {
        let a = Matrix2D::new(4.0, 7.0, 2.0, 6.0);
        assert_eq!(a.adjoint(), Matrix2D::new(6.0, -7.0, -2.0, 4.0));
        let inv = a.try_inverse().unwrap();
        assert_relative_eq!(a * inv, Matrix2D::IDENTITY, epsilon = 1e-12);

        let singular = Matrix2D::new(1.0, 2.0, 2.0, 4.0);
        assert!(singular.try_inverse().unwrap_err().is_not_invertible());
    }

    #[test]
    fn test_matrix2_scalar_ops() {
        let a = Matrix2D::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(1.0 + a, a + 1.0);
        assert_eq!(2.0 * a, Matrix2D::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a - a, Matrix2D::ZERO);
        assert_eq!(a.trace(), 5.0);
    }

    #[test]
    fn test_matrix2_columns() {
        let m = Matrix2D::from_columns(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
        assert_eq!(m.row(0), Vector2::new(1.0, 3.0));
        assert_eq!(m.col(1), Vector2::new(3.0, 4.0));
        assert_eq!(m.get_at(1, 0).unwrap(), 2.0);
        assert_eq!(m.get(3).unwrap(), 4.0);
        assert!(m.get(4).is_err());
    }

    #[test]
    fn test_matrix2_parse_roundtrip() {
        let m = Matrix2D::new(1.5, -2.0, 0.0, 1.0 / 3.0);
        let text = m.to_string();
        assert_eq!(text.lines().next(), Some("|1.5, -2|"));
        assert_eq!(text.parse::<Matrix2D>().unwrap(), m);
        assert!("|1, 2|".parse::<Matrix2D>().is_err());
    }

    #[test]
    fn test_matrix2_hash_set() {
        let mut set = std::collections::HashSet::new();
        set.insert(Matrix2D::IDENTITY);
        set.insert(Matrix2D::new(1.0, -0.0, 0.0, 1.0));
        set.insert(Matrix2D::ZERO);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Matrix2D::default()));
    }
}
