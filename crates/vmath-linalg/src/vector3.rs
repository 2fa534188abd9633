//! 3D vector type.
//!
//! [`Vector3`] represents positions, directions and normals in 3D space.
//!
//! # Usage
//!
//! ```rust
//! use vmath_linalg::Vector3D;
//!
//! let n = Vector3D::X_AXIS.cross(Vector3D::Y_AXIS);
//! assert_eq!(n, Vector3D::Z_AXIS);
//!
//! let p = Vector3D::new(1.0, 2.0, 3.0);
//! assert_eq!(p.to_string(), "(1, 2, 3)");
//! assert_eq!("(1, 2, 3)".parse::<Vector3D>().unwrap(), p);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use vmath_core::{Error, Result, Scalar, check_index, check_len, parse_tuple, snap, write_tuple};

use crate::macros::{hash_components, impl_scalar_lhs};

/// A 3D vector.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use vmath_linalg::Vector3F;
///
/// let v = Vector3F::new(0.5, 0.5, 0.5);
/// assert_eq!(v.x, 0.5);
/// assert_eq!(v[2], 0.5);
/// assert!(v.get(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
}

/// Single-precision 3D vector.
pub type Vector3F = Vector3<f32>;
/// Double-precision 3D vector.
pub type Vector3D = Vector3<f64>;

impl<T: Scalar> Vector3<T> {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE);

    /// Unit X vector (1, 0, 0).
    pub const X_AXIS: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// Unit Y vector (0, 1, 0).
    pub const Y_AXIS: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// Unit Z vector (0, 0, 1).
    pub const Z_AXIS: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [T; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from the first three elements of a slice.
    pub fn from_slice(s: &[T]) -> Result<Self> {
        check_len(s, 3)?;
        Ok(Self::new(s[0], s[1], s[2]))
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-handed).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Linear interpolation between two vectors.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        Self::new(
            vmath_core::lerp(self.x, other.x, t),
            vmath_core::lerp(self.y, other.y, t),
            vmath_core::lerp(self.z, other.z, t),
        )
    }

    /// Snaps components within `tolerance` of zero to exactly zero.
    pub fn clamp_zero(&mut self, tolerance: T) {
        self.x = snap(self.x, T::ZERO, tolerance);
        self.y = snap(self.y, T::ZERO, tolerance);
        self.z = snap(self.z, T::ZERO, tolerance);
    }

    /// Returns true if every component is strictly less than `other`'s.
    #[inline]
    pub fn all_lt(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z
    }

    /// Returns true if every component is less than or equal to `other`'s.
    #[inline]
    pub fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }

    /// Returns true if every component is strictly greater than `other`'s.
    #[inline]
    pub fn all_gt(self, other: Self) -> bool {
        self.x > other.x && self.y > other.y && self.z > other.z
    }

    /// Returns true if every component is greater than or equal to `other`'s.
    #[inline]
    pub fn all_ge(self, other: Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z
    }

    /// Tolerance-based comparison: `|aᵢ - bᵢ| <= tolerance` for all components.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        vmath_core::approx_eq(self.x, other.x, tolerance)
            && vmath_core::approx_eq(self.y, other.y, tolerance)
            && vmath_core::approx_eq(self.z, other.z, tolerance)
    }

    /// [`approx_eq`](Self::approx_eq) with [`Scalar::EPSILON`].
    pub fn approx_eq_default(&self, other: &Self) -> bool {
        self.approx_eq(other, T::EPSILON)
    }

    /// Returns component `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, 3)?;
        Ok(self[index])
    }

    /// Sets component `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, 3)?;
        self[index] = value;
        Ok(())
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    fn scalar_add(s: T, v: Self) -> Self {
        Self::new(s + v.x, s + v.y, s + v.z)
    }

    #[inline]
    fn scalar_sub(s: T, v: Self) -> Self {
        Self::new(s - v.x, s - v.y, s - v.z)
    }

    #[inline]
    fn scalar_mul(s: T, v: Self) -> Self {
        v * s
    }

    #[inline]
    fn scalar_div(s: T, v: Self) -> Self {
        Self::new(s / v.x, s / v.y, s / v.z)
    }
}

impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Vector3 + Vector3
impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vector3 + scalar
impl<T: Scalar> Add<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

// Vector3 - Vector3
impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vector3 - scalar
impl<T: Scalar> Sub<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

// Vector3 * Vector3 (component-wise)
impl<T: Scalar> Mul for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

// Vector3 * scalar
impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Vector3 / Vector3 (component-wise)
impl<T: Scalar> Div for Vector3<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

// Vector3 / scalar
impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl_scalar_lhs!(
    Vector3,
    Add::add => scalar_add,
    Sub::sub => scalar_sub,
    Mul::mul => scalar_mul,
    Div::div => scalar_div,
);

/// Equality is reflexive for every value without a NaN component.
impl<T: Scalar> Eq for Vector3<T> {}

impl<T: Scalar> Hash for Vector3<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_components(&self.to_array(), state);
    }
}

impl<T: Scalar> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.to_array())
    }
}

impl<T: Scalar> FromStr for Vector3<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_tuple::<T, 3>(s, "Vector3").map(Self::from_array)
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(a: [T; 3]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3<T>) -> [T; 3] {
        v.to_array()
    }
}

impl<T: Scalar> AbsDiffEq for Vector3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Vector3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl<T: Scalar> UlpsEq for Vector3<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::collections::HashSet;

    #[test]
    fn test_vector3_ops() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3D::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3D::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3D::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(6.0 / a, Vector3D::new(6.0, 3.0, 2.0));
        assert_eq!(-a, Vector3D::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vector3_compound_assign() {
        let mut v = Vector3F::ONE;
        v += Vector3F::splat(2.0);
        v *= 2.0;
        v -= Vector3F::ONE;
        v /= 5.0;
        assert_eq!(v, Vector3F::ONE);
    }

    #[test]
    fn test_vector3_cross() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-12);
        assert_eq!(Vector3D::Y_AXIS.cross(Vector3D::X_AXIS), -Vector3D::Z_AXIS);
    }

    #[test]
    fn test_vector3_normalize() {
        let mut v = Vector3D::new(3.0, -4.0, 12.0);
        v.normalize().unwrap();
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v, Vector3D::new(3.0, -4.0, 12.0) / 13.0);

        assert!(Vector3F::ZERO.normalized().unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_vector3_from_slice() {
        assert_eq!(
            Vector3F::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            Vector3F::new(1.0, 2.0, 3.0)
        );
        assert!(Vector3F::from_slice(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_vector3_lerp_min_max() {
        let a = Vector3D::new(0.0, 10.0, -2.0);
        let b = Vector3D::new(4.0, 0.0, 2.0);
        assert_eq!(a.lerp(b, 0.5), Vector3D::new(2.0, 5.0, 0.0));
        assert_eq!(a.min(b), Vector3D::new(0.0, 0.0, -2.0));
        assert_eq!(a.max(b), Vector3D::new(4.0, 10.0, 2.0));
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_vector3_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(Vector3D::new(0.0, 1.0, 2.0));
        assert!(set.contains(&Vector3D::new(-0.0, 1.0, 2.0)));
        assert!(!set.contains(&Vector3D::new(0.0, 1.0, 2.5)));
    }

    #[test]
    fn test_vector3_parse_roundtrip() {
        let v = Vector3F::new(0.1, -2.75, 1e-8);
        assert_eq!(v.to_string().parse::<Vector3F>().unwrap(), v);
        assert!("(1, 2)".parse::<Vector3F>().is_err());
    }

    #[test]
    fn test_vector3_get_set() {
        let mut v = Vector3D::ZERO;
        for i in 0..3 {
            v.set(i, i as f64).unwrap();
        }
        assert_eq!(v, Vector3D::new(0.0, 1.0, 2.0));
        assert_eq!(v.get(2).unwrap(), 2.0);
        assert!(v.set(3, 0.0).unwrap_err().is_index_error());
    }
}
