//! 4D vector type.
//!
//! [`Vector4`] carries homogeneous coordinates and generic 4-tuples.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use vmath_core::{Error, Result, Scalar, check_index, check_len, parse_tuple, snap, write_tuple};

use crate::macros::{hash_components, impl_scalar_lhs};
use crate::vector3::Vector3;

/// A 4D vector.
///
/// Access via `.x`, `.y`, `.z`, `.w` or index `[0]` through `[3]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
    /// W component
    pub w: T,
}

/// Single-precision 4D vector.
pub type Vector4F = Vector4<f32>;
/// Double-precision 4D vector.
pub type Vector4D = Vector4<f64>;

impl<T: Scalar> Vector4<T> {
    /// Zero vector.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// One vector.
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE, T::ONE);

    /// Unit X vector (1, 0, 0, 0).
    pub const X_AXIS: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);

    /// Unit Y vector (0, 1, 0, 0).
    pub const Y_AXIS: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);

    /// Unit Z vector (0, 0, 1, 0).
    pub const Z_AXIS: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);

    /// Unit W vector (0, 0, 0, 1).
    pub const W_AXIS: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v, v)
    }

    /// Extends a 3D vector with a `w` component.
    ///
    /// ```rust
    /// use vmath_linalg::{Vector3D, Vector4D};
    ///
    /// let p = Vector4D::from_vector3(Vector3D::new(1.0, 2.0, 3.0), 1.0);
    /// assert_eq!(p, Vector4D::new(1.0, 2.0, 3.0, 1.0));
    /// assert_eq!(p.xyz(), Vector3D::new(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub const fn from_vector3(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Drops the `w` component.
    #[inline]
    pub const fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Creates from the first four elements of a slice.
    pub fn from_slice(s: &[T]) -> Result<Self> {
        check_len(s, 4)?;
        Ok(Self::new(s[0], s[1], s[2], s[3]))
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Distance to another vector.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Normalizes in place, failing with [`Error::DivisionByZero`] on a
    /// zero-length vector (which is left unchanged).
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
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    /// Linear interpolation.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::ONE - t) + other * t
    }

    /// Snaps components within `tolerance` of zero to exactly zero.
    pub fn clamp_zero(&mut self, tolerance: T) {
        for i in 0..4 {
            self[i] = snap(self[i], T::ZERO, tolerance);
        }
    }

    /// Returns true if every component is strictly less than `other`'s.
    pub fn all_lt(self, other: Self) -> bool {
        self.zip_all(other, |a, b| a < b)
    }

    /// Returns true if every component is less than or equal to `other`'s.
    pub fn all_le(self, other: Self) -> bool {
        self.zip_all(other, |a, b| a <= b)
    }

    /// Returns true if every component is strictly greater than `other`'s.
    pub fn all_gt(self, other: Self) -> bool {
        self.zip_all(other, |a, b| a > b)
    }

    /// Returns true if every component is greater than or equal to `other`'s.
    pub fn all_ge(self, other: Self) -> bool {
        self.zip_all(other, |a, b| a >= b)
    }

    /// Tolerance-based comparison: `|aᵢ - bᵢ| <= tolerance` for all components.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.zip_all(*other, |a, b| vmath_core::approx_eq(a, b, tolerance))
    }

    /// [`approx_eq`](Self::approx_eq) with [`Scalar::EPSILON`].
    pub fn approx_eq_default(&self, other: &Self) -> bool {
        self.approx_eq(other, T::EPSILON)
    }

    /// Returns component `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, 4)?;
        Ok(self[index])
    }

    /// Sets component `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, 4)?;
        self[index] = value;
        Ok(())
    }

    /// Returns true if all components are finite.
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    #[inline]
    fn zip_all(self, other: Self, f: impl Fn(T, T) -> bool) -> bool {
        f(self.x, other.x) && f(self.y, other.y) && f(self.z, other.z) && f(self.w, other.w)
    }

    #[inline]
    fn scalar_add(s: T, v: Self) -> Self {
        v + s
    }

    #[inline]
    fn scalar_sub(s: T, v: Self) -> Self {
        Self::splat(s) - v
    }

    #[inline]
    fn scalar_mul(s: T, v: Self) -> Self {
        v * s
    }

    #[inline]
    fn scalar_div(s: T, v: Self) -> Self {
        Self::splat(s) / v
    }
}

impl<T: Scalar> Index<usize> for Vector4<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4 index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector4<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector4 index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> Neg for Vector4<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Scalar> Add for Vector4<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl<T: Scalar> Add<T> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        self + Self::splat(rhs)
    }
}

impl<T: Scalar> Sub for Vector4<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl<T: Scalar> Sub<T> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        self - Self::splat(rhs)
    }
}

impl<T: Scalar> Mul for Vector4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl<T: Scalar> Mul<T> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<T: Scalar> Div for Vector4<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z, self.w / rhs.w)
    }
}

impl<T: Scalar> Div<T> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl<T: Scalar> AddAssign for Vector4<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector4<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector4<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector4<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl_scalar_lhs!(
    Vector4,
    Add::add => scalar_add,
    Sub::sub => scalar_sub,
    Mul::mul => scalar_mul,
    Div::div => scalar_div,
);

/// Equality is reflexive for every value without a NaN component.
impl<T: Scalar> Eq for Vector4<T> {}

impl<T: Scalar> Hash for Vector4<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_components(&self.to_array(), state);
    }
}

impl<T: Scalar> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.to_array())
    }
}

impl<T: Scalar> FromStr for Vector4<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_tuple::<T, 4>(s, "Vector4").map(Self::from_array)
    }
}

impl<T: Scalar> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from(a: [T; 4]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar> From<Vector4<T>> for [T; 4] {
    #[inline]
    fn from(v: Vector4<T>) -> [T; 4] {
        v.to_array()
    }
}

impl<T: Scalar> AbsDiffEq for Vector4<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.zip_all(*other, |a, b| a.abs_diff_eq(&b, epsilon))
    }
}

impl<T: Scalar> RelativeEq for Vector4<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.zip_all(*other, |a, b| a.relative_eq(&b, epsilon, max_relative))
    }
}

impl<T: Scalar> UlpsEq for Vector4<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.zip_all(*other, |a, b| a.ulps_eq(&b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector4_basic() {
        let v = Vector4D::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.dot(Vector4D::ONE), 10.0);
        assert_eq!(v.length_squared(), 30.0);
        assert_eq!(v + 1.0, Vector4D::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(1.0 - v, Vector4D::new(0.0, -1.0, -2.0, -3.0));
        assert_eq!(12.0 / v, Vector4D::new(12.0, 6.0, 4.0, 3.0));
    }

    #[test]
    fn test_vector4_normalize() {
        let mut v = Vector4F::new(1.0, 1.0, 1.0, 1.0);
        v.normalize().unwrap();
        assert_eq!(v, Vector4F::splat(0.5));

        let mut zero = Vector4F::ZERO;
        assert!(zero.normalize().is_err());
        assert_eq!(zero, Vector4F::ZERO);
    }

    #[test]
    fn test_vector4_xyz() {
        let v = Vector4D::new(1.0, 2.0, 3.0, 0.0);
        assert_eq!(Vector4D::from_vector3(v.xyz(), 0.0), v);
    }

    #[test]
    fn test_vector4_index() {
        let mut v = Vector4D::ZERO;
        v[3] = 7.0;
        assert_eq!(v.get(3).unwrap(), 7.0);
        assert!(v.get(4).is_err());
    }

    #[test]
    fn test_vector4_lerp() {
        let a = Vector4D::ZERO;
        let b = Vector4D::new(2.0, 4.0, 6.0, 8.0);
        assert_relative_eq!(a.lerp(b, 0.25), Vector4D::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_vector4_clamp_zero_and_compare() {
        let mut v = Vector4D::new(1e-18, -1e-18, 1.0, -1.0);
        v.clamp_zero(1e-12);
        assert_eq!(v, Vector4D::new(0.0, 0.0, 1.0, -1.0));
        assert!(v.all_le(Vector4D::ONE));
        assert!(!v.all_lt(Vector4D::ONE));
        assert!(Vector4D::splat(2.0).all_gt(v));
    }

    #[test]
    fn test_vector4_parse() {
        let v: Vector4F = "(1, 2, 3, 4)".parse().unwrap();
        assert_eq!(v, Vector4F::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.to_string(), "(1, 2, 3, 4)");
    }
}
