//! 2D vector type.
//!
//! [`Vector2`] is a pair of scalars used for texture coordinates, screen
//! positions and planar geometry.
//!
//! # Usage
//!
//! ```rust
//! use vmath_linalg::Vector2D;
//!
//! let v = Vector2D::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let unit = v.normalized().unwrap();
//! assert_eq!(unit, Vector2D::new(0.6, 0.8));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use vmath_core::{Error, Result, Scalar, check_index, check_len, parse_tuple, snap, write_tuple};

use crate::macros::{hash_components, impl_scalar_lhs};

/// A 2D vector.
///
/// Access via `.x`, `.y` or index `[0]`, `[1]`. The fallible
/// [`get`](Vector2::get)/[`set`](Vector2::set) report
/// [`Error::IndexOutOfRange`] instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
}

/// Single-precision 2D vector.
pub type Vector2F = Vector2<f32>;
/// Double-precision 2D vector.
pub type Vector2D = Vector2<f64>;

impl<T: Scalar> Vector2<T> {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(T::ONE, T::ONE);

    /// Unit X vector (1, 0).
    pub const X_AXIS: Self = Self::new(T::ONE, T::ZERO);

    /// Unit Y vector (0, 1).
    pub const Y_AXIS: Self = Self::new(T::ZERO, T::ONE);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [T; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Creates from the first two elements of a slice.
    ///
    /// Fails with [`Error::TooFewElements`] if the slice is shorter.
    pub fn from_slice(s: &[T]) -> Result<Self> {
        check_len(s, 2)?;
        Ok(Self::new(s[0], s[1]))
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perp-dot ("kross") product: the z component of the 3D cross product
    /// of the two vectors extended with z = 0.
    #[inline]
    pub fn perp_dot(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Normalizes in place.
    ///
    /// Fails with [`Error::DivisionByZero`] when the length is zero; the
    /// vector is left unchanged in that case.
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Returns a unit-length copy.
    pub fn normalized(self) -> Result<Self> {
        let len = self.length();
        if len == T::ZERO {
            tracing::trace!(vector = %self, "refusing to normalize zero-length vector");
            return Err(Error::division_by_zero("normalizing a zero-length vector"));
        }
        Ok(self / len)
    }

    /// Clockwise perpendicular `(y, -x)`.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Unit-length clockwise perpendicular.
    pub fn unit_perp(self) -> Result<Self> {
        self.perp().normalized()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Linear interpolation, `t = 0` gives `self`, `t = 1` gives `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        Self::new(
            vmath_core::lerp(self.x, other.x, t),
            vmath_core::lerp(self.y, other.y, t),
        )
    }

    /// Snaps components within `tolerance` of zero to exactly zero.
    pub fn clamp_zero(&mut self, tolerance: T) {
        self.x = snap(self.x, T::ZERO, tolerance);
        self.y = snap(self.y, T::ZERO, tolerance);
    }

    /// Returns true if both components are strictly less than `other`'s.
    #[inline]
    pub fn all_lt(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    /// Returns true if both components are less than or equal to `other`'s.
    #[inline]
    pub fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// Returns true if both components are strictly greater than `other`'s.
    #[inline]
    pub fn all_gt(self, other: Self) -> bool {
        self.x > other.x && self.y > other.y
    }

    /// Returns true if both components are greater than or equal to `other`'s.
    #[inline]
    pub fn all_ge(self, other: Self) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    /// Tolerance-based comparison: `|aᵢ - bᵢ| <= tolerance` for all components.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        vmath_core::approx_eq(self.x, other.x, tolerance)
            && vmath_core::approx_eq(self.y, other.y, tolerance)
    }

    /// [`approx_eq`](Self::approx_eq) with [`Scalar::EPSILON`].
    pub fn approx_eq_default(&self, other: &Self) -> bool {
        self.approx_eq(other, T::EPSILON)
    }

    /// Returns component `index` (0 = x, 1 = y).
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, 2)?;
        Ok(self[index])
    }

    /// Sets component `index` (0 = x, 1 = y).
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, 2)?;
        self[index] = value;
        Ok(())
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    fn scalar_add(s: T, v: Self) -> Self {
        Self::new(s + v.x, s + v.y)
    }

    #[inline]
    fn scalar_sub(s: T, v: Self) -> Self {
        Self::new(s - v.x, s - v.y)
    }

    #[inline]
    fn scalar_mul(s: T, v: Self) -> Self {
        Self::new(s * v.x, s * v.y)
    }

    #[inline]
    fn scalar_div(s: T, v: Self) -> Self {
        Self::new(s / v.x, s / v.y)
    }
}

impl<T: Scalar> Index<usize> for Vector2<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2 index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Add<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::new(self.x + rhs, self.y + rhs)
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Sub<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::new(self.x - rhs, self.y - rhs)
    }
}

// Vector2 * Vector2 (component-wise)
impl<T: Scalar> Mul for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// Vector2 / Vector2 (component-wise)
impl<T: Scalar> Div for Vector2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl_scalar_lhs!(
    Vector2,
    Add::add => scalar_add,
    Sub::sub => scalar_sub,
    Mul::mul => scalar_mul,
    Div::div => scalar_div,
);

/// Equality is reflexive for every value without a NaN component.
impl<T: Scalar> Eq for Vector2<T> {}

impl<T: Scalar> Hash for Vector2<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_components(&self.to_array(), state);
    }
}

impl<T: Scalar> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.to_array())
    }
}

impl<T: Scalar> FromStr for Vector2<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_tuple::<T, 2>(s, "Vector2").map(Self::from_array)
    }
}

impl<T: Scalar> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from(a: [T; 2]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vector2<T>) -> [T; 2] {
        v.to_array()
    }
}

impl<T: Scalar> AbsDiffEq for Vector2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Vector2<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl<T: Scalar> UlpsEq for Vector2<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vector2_length() {
        assert_eq!(Vector2D::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector2F::new(3.0, 4.0).length_squared(), 25.0);
    }

    #[test]
    fn test_vector2_normalize() {
        let mut v = Vector2D::new(-2.0, 7.5);
        v.normalize().unwrap();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vector2_normalize_zero_fails_without_mutation() {
        let mut v = Vector2D::ZERO;
        let err = v.normalize().unwrap_err();
        assert!(err.is_division_by_zero());
        assert_eq!(v, Vector2D::ZERO);
    }

    #[test]
    fn test_vector2_scalar_ops() {
        let v = Vector2D::new(2.0, 4.0);
        assert_eq!(v + 1.0, Vector2D::new(3.0, 5.0));
        assert_eq!(1.0 + v, Vector2D::new(3.0, 5.0));
        assert_eq!(10.0 - v, Vector2D::new(8.0, 6.0));
        assert_eq!(v - 1.0, Vector2D::new(1.0, 3.0));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(8.0 / v, Vector2D::new(4.0, 2.0));
        assert_eq!(v / 2.0, Vector2D::new(1.0, 2.0));
    }

    #[test]
    fn test_vector2_perp() {
        let v = Vector2F::new(1.0, 2.0);
        assert_eq!(v.perp(), Vector2F::new(2.0, -1.0));
        assert_eq!(v.dot(v.perp()), 0.0);
        assert_eq!(Vector2F::X_AXIS.perp_dot(Vector2F::Y_AXIS), 1.0);
        assert!(Vector2F::ZERO.unit_perp().is_err());
    }

    #[test]
    fn test_vector2_index() {
        let mut v = Vector2D::new(1.0, 2.0);
        assert_eq!(v.get(1).unwrap(), 2.0);
        assert!(v.get(2).unwrap_err().is_index_error());
        v.set(0, 9.0).unwrap();
        assert_eq!(v[0], 9.0);
        assert!(v.set(5, 1.0).is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_vector2_index_panics() {
        let v = Vector2D::ZERO;
        let _ = v[2];
    }

    #[test]
    fn test_vector2_parse_roundtrip() {
        let v = Vector2D::new(1.0, 2.0);
        assert_eq!(v.to_string(), "(1, 2)");
        assert_eq!("(1, 2)".parse::<Vector2D>().unwrap(), v);

        let odd = Vector2D::new(0.1, -1.0 / 3.0);
        assert_eq!(odd.to_string().parse::<Vector2D>().unwrap(), odd);
        assert!("1, 2".parse::<Vector2D>().unwrap_err().is_parse_error());
    }

    #[test]
    fn test_vector2_approx_eq() {
        let a = Vector2D::new(1.0, 1.0);
        let b = Vector2D::new(1.0 + 1e-17, 1.0);
        assert!(a.approx_eq_default(&b));
        assert!(!a.approx_eq(&Vector2D::new(1.1, 1.0), 0.05));
        assert!(a.approx_eq(&Vector2D::new(1.1, 1.0), 0.2));
    }

    #[test]
    fn test_vector2_comparisons() {
        let a = Vector2F::new(1.0, 2.0);
        let b = Vector2F::new(2.0, 3.0);
        assert!(a.all_lt(b));
        assert!(b.all_gt(a));
        assert!(a.all_le(a));
        assert!(!a.all_lt(Vector2F::new(2.0, 2.0)));
    }

    #[test]
    fn test_vector2_clamp_zero() {
        let mut v = Vector2D::new(1e-20, 0.5);
        v.clamp_zero(f64::EPSILON);
        assert_eq!(v, Vector2D::new(0.0, 0.5));
    }
}
