//! Quaternions for 3D rotation.
//!
//! A [`Quaternion`] is a scalar part `w` plus a vector part `(x, y, z)`.
//! Unit quaternions represent rotations; unit length is the caller's
//! responsibility, most operations accept any quaternion.
//!
//! # Usage
//!
//! ```rust
//! use vmath_linalg::{QuaternionD, Vector3D};
//!
//! let q = QuaternionD::from_axis_angle(Vector3D::Z_AXIS, std::f64::consts::FRAC_PI_2);
//! let v = q.rotate(Vector3D::X_AXIS).unwrap();
//! assert!((v - Vector3D::Y_AXIS).length() < 1e-12);
//!
//! let m = q.to_matrix();
//! assert!((m.transform_point(Vector3D::X_AXIS) - Vector3D::Y_AXIS).length() < 1e-12);
//! ```
//!
//! # Component order
//!
//! Indexing, arrays, `Display` and `FromStr` all use `(w, x, y, z)`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use vmath_core::{Error, Result, Scalar, check_index, check_len, parse_tuple, snap, write_tuple};

use crate::macros::{hash_components, impl_scalar_lhs};
use crate::matrix3::Matrix3;
use crate::matrix4::Matrix4;
use crate::vector3::Vector3;

/// A quaternion `w + xi + yj + zk`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion<T> {
    /// Scalar part
    pub w: T,
    /// i component
    pub x: T,
    /// j component
    pub y: T,
    /// k component
    pub z: T,
}

/// Single-precision quaternion.
pub type QuaternionF = Quaternion<f32>;
/// Double-precision quaternion.
pub type QuaternionD = Quaternion<f64>;

impl<T: Scalar> Quaternion<T> {
    /// All components zero.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// Multiplicative identity (1, 0, 0, 0), the null rotation.
    pub const IDENTITY: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);

    /// Pure `i` (0, 1, 0, 0).
    pub const X_AXIS: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);

    /// Pure `j` (0, 0, 1, 0).
    pub const Y_AXIS: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);

    /// Pure `k` (0, 0, 0, 1).
    pub const Z_AXIS: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Real unit (1, 0, 0, 0).
    pub const W_AXIS: Self = Self::IDENTITY;

    /// Creates a quaternion from `(w, x, y, z)`.
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a quaternion from a scalar part and a vector part.
    #[inline]
    pub const fn from_scalar_vector(w: T, v: Vector3<T>) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    /// Vector part `(x, y, z)`.
    #[inline]
    pub const fn vector(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from `[w, x, y, z]`.
    #[inline]
    pub const fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to `[w, x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Creates from the first four elements of a slice, in `(w, x, y, z)` order.
    pub fn from_slice(s: &[T]) -> Result<Self> {
        check_len(s, 4)?;
        Ok(Self::new(s[0], s[1], s[2], s[3]))
    }

    /// Rotation of `angle` radians about `axis`: `(cos(a/2), axis * sin(a/2))`.
    ///
    /// `axis` is assumed to be unit length.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let half = angle * T::HALF;
        Self::from_scalar_vector(half.cos(), axis * half.sin())
    }

    /// Axis and angle (radians) of the rotation.
    ///
    /// A quaternion with `|w| > 1` is normalized first. For a zero angle
    /// the axis is undefined and [`Vector3::X_AXIS`] is returned.
    pub fn to_axis_angle(self) -> (Vector3<T>, T) {
        let q = if self.w.abs() > T::ONE { self * (T::ONE / self.modulus()) } else { self };
        let angle = T::TWO * q.w.acos();
        let den = (T::ONE - q.w * q.w).sqrt();
        if den > T::EPSILON {
            (q.vector() / den, angle)
        } else {
            (Vector3::X_AXIS, angle)
        }
    }

    /// Rotation from Euler angles in radians, y-up aviation order:
    /// `e.y` is heading, `e.x` attitude and `e.z` bank.
    pub fn from_euler_angles(e: Vector3<T>) -> Self {
        let (s1, c1) = ((e.y * T::HALF).sin(), (e.y * T::HALF).cos());
        let (s2, c2) = ((e.x * T::HALF).sin(), (e.x * T::HALF).cos());
        let (s3, c3) = ((e.z * T::HALF).sin(), (e.z * T::HALF).cos());

        Self::new(
            c1 * c2 * c3 - s1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            s1 * c2 * c3 + c1 * s2 * s3,
            s1 * s2 * c3 + c1 * c2 * s3,
        )
    }

    /// Rotation quaternion of a pure rotation matrix.
    pub fn from_rotation_matrix(m: &Matrix3<T>) -> Self {
        let m = &m.m;
        let quarter = T::HALF * T::HALF;
        let trace = m[0][0] + m[1][1] + m[2][2];

        if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt() * T::TWO;
            Self::new(
                s * quarter,
                (m[2][1] - m[1][2]) / s,
                (m[0][2] - m[2][0]) / s,
                (m[1][0] - m[0][1]) / s,
            )
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let s = (T::ONE + m[0][0] - m[1][1] - m[2][2]).sqrt() * T::TWO;
            Self::new(
                (m[2][1] - m[1][2]) / s,
                s * quarter,
                (m[0][1] + m[1][0]) / s,
                (m[0][2] + m[2][0]) / s,
            )
        } else if m[1][1] > m[2][2] {
            let s = (T::ONE + m[1][1] - m[0][0] - m[2][2]).sqrt() * T::TWO;
            Self::new(
                (m[0][2] - m[2][0]) / s,
                (m[0][1] + m[1][0]) / s,
                s * quarter,
                (m[1][2] + m[2][1]) / s,
            )
        } else {
            let s = (T::ONE + m[2][2] - m[0][0] - m[1][1]).sqrt() * T::TWO;
            Self::new(
                (m[1][0] - m[0][1]) / s,
                (m[0][2] + m[2][0]) / s,
                (m[1][2] + m[2][1]) / s,
                s * quarter,
            )
        }
    }

    /// 4-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Modulus (norm).
    #[inline]
    pub fn modulus(self) -> T {
        self.modulus_squared().sqrt()
    }

    /// Squared modulus.
    #[inline]
    pub fn modulus_squared(self) -> T {
        self.dot(self)
    }

    /// Conjugate `(w, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Scales to unit modulus in place.
    ///
    /// Fails with [`Error::DivisionByZero`] when the modulus is zero.
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Returns a unit-modulus copy.
    pub fn normalized(self) -> Result<Self> {
        let modulus = self.modulus();
        if modulus == T::ZERO {
            tracing::trace!(quaternion = %self, "refusing to normalize zero quaternion");
            return Err(Error::division_by_zero("normalizing a zero quaternion"));
        }
        Ok(self * (T::ONE / modulus))
    }

    /// Inverts in place: `conjugate / modulus²`.
    ///
    /// Fails with [`Error::NotInvertible`] when the squared modulus is zero;
    /// the quaternion is left unchanged in that case.
    pub fn inverse(&mut self) -> Result<()> {
        *self = self.inverted()?;
        Ok(())
    }

    /// Returns the inverse.
    pub fn inverted(self) -> Result<Self> {
        let norm = self.modulus_squared();
        if norm <= T::ZERO {
            tracing::debug!(quaternion = %self, "quaternion has zero modulus");
            return Err(Error::not_invertible("quaternion", self));
        }
        Ok(self.conjugate() * (T::ONE / norm))
    }

    /// Divides every component by `s`.
    ///
    /// Fails with [`Error::DivisionByZero`] when `s == 0`.
    pub fn try_div(self, s: T) -> Result<Self> {
        if s == T::ZERO {
            return Err(Error::division_by_zero("dividing a quaternion by zero"));
        }
        Ok(Self::new(self.w / s, self.x / s, self.y / s, self.z / s))
    }

    /// Rotates `v` by `q * v * q⁻¹`.
    ///
    /// Fails with [`Error::NotInvertible`] for the zero quaternion.
    pub fn rotate(self, v: Vector3<T>) -> Result<Vector3<T>> {
        let inv = self.inverted()?;
        Ok((self * Self::from_scalar_vector(T::ZERO, v) * inv).vector())
    }

    /// Rotation matrix via the 9-term expansion.
    ///
    /// The quaternion is not normalized first; a non-unit quaternion yields
    /// a matrix that also scales.
    pub fn to_matrix(self) -> Matrix4<T> {
        let Self { w, x, y, z } = self;
        let two = T::TWO;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix4::from_rows([
            [T::ONE - two * (yy + zz), two * (xy - wz), two * (xz + wy), T::ZERO],
            [two * (xy + wz), T::ONE - two * (xx + zz), two * (yz - wx), T::ZERO],
            [two * (xz - wy), two * (yz + wx), T::ONE - two * (xx + yy), T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Logarithm of a unit quaternion: `(0, v̂ * θ)` where `w = cos θ`.
    ///
    /// Returns [`ZERO`](Self::ZERO) when `|w| >= 1`. When `θ` is within
    /// [`Scalar::EPSILON`] of zero the vector part is returned unscaled,
    /// since `θ / sin θ` tends to one there.
    pub fn log(self) -> Self {
        if self.w.abs() >= T::ONE {
            return Self::ZERO;
        }
        let angle = self.w.acos();
        let v = if angle > T::EPSILON {
            self.vector() * (angle / angle.sin())
        } else {
            self.vector()
        };
        Self::from_scalar_vector(T::ZERO, v)
    }

    /// Exponential of a pure quaternion: `(cos θ, v̂ * sin θ)` where
    /// `θ = |v|`.
    ///
    /// When `θ` is within [`Scalar::EPSILON`] of zero the vector part is
    /// returned unscaled, since `sin θ / θ` tends to one there. At `θ = kπ`
    /// the vector part is scaled toward zero as usual.
    pub fn exp(self) -> Self {
        let v = self.vector();
        let angle = v.length();
        let v = if angle > T::EPSILON { v * (angle.sin() / angle) } else { v };
        Self::from_scalar_vector(angle.cos(), v)
    }

    /// Spherical linear interpolation from `self` (`t = 0`) to `other`
    /// (`t = 1`) along the shorter arc.
    ///
    /// Zero inputs fall back to the other input (or [`IDENTITY`](Self::IDENTITY)
    /// if both are zero). Nearly parallel inputs are blended linearly. The
    /// result is normalized.
    pub fn slerp(self, other: Self, t: T) -> Self {
        if self.modulus_squared() < T::EPSILON {
            return if other.modulus_squared() > T::EPSILON { other } else { Self::IDENTITY };
        }
        if other.modulus_squared() < T::EPSILON {
            return self;
        }

        let mut cos_half = self.dot(other);
        if cos_half >= T::ONE || cos_half <= -T::ONE {
            return self;
        }

        let mut other = other;
        if cos_half < T::ZERO {
            other = -other;
            cos_half = -cos_half;
        }

        let (blend_a, blend_b) = if cos_half < T::from_f64(0.99).unwrap_or(T::ONE) {
            let half = cos_half.acos();
            let inv_sin = T::ONE / half.sin();
            (
                (half * (T::ONE - t)).sin() * inv_sin,
                (half * t).sin() * inv_sin,
            )
        } else {
            (T::ONE - t, t)
        };

        let result = self * blend_a + other * blend_b;
        if result.modulus_squared() > T::EPSILON {
            result.normalized().unwrap_or(Self::IDENTITY)
        } else {
            Self::IDENTITY
        }
    }

    /// Snaps components within `tolerance` of zero to exactly zero.
    pub fn clamp_zero(&mut self, tolerance: T) {
        self.w = snap(self.w, T::ZERO, tolerance);
        self.x = snap(self.x, T::ZERO, tolerance);
        self.y = snap(self.y, T::ZERO, tolerance);
        self.z = snap(self.z, T::ZERO, tolerance);
    }

    /// Tolerance-based comparison of all four components.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| vmath_core::approx_eq(*a, b, tolerance))
    }

    /// [`approx_eq`](Self::approx_eq) with [`Scalar::EPSILON`].
    pub fn approx_eq_default(&self, other: &Self) -> bool {
        self.approx_eq(other, T::EPSILON)
    }

    /// Component `index` in `(w, x, y, z)` order.
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, 4)?;
        Ok(self[index])
    }

    /// Sets component `index` in `(w, x, y, z)` order.
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
    fn scalar_mul(s: T, q: Self) -> Self {
        q * s
    }
}

impl<T: Scalar> Index<usize> for Quaternion<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.w,
            1 => &self.x,
            2 => &self.y,
            3 => &self.z,
            _ => panic!("Quaternion index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Quaternion<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.w,
            1 => &mut self.x,
            2 => &mut self.y,
            3 => &mut self.z,
            _ => panic!("Quaternion index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Hamilton product
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y + a.y * b.w + a.z * b.x - a.x * b.z,
            a.w * b.z + a.z * b.w + a.x * b.y - a.y * b.x,
        )
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}

impl<T: Scalar> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl_scalar_lhs!(Quaternion, Mul::mul => scalar_mul);

/// Equality is reflexive for every value without a NaN component.
impl<T: Scalar> Eq for Quaternion<T> {}

impl<T: Scalar> Hash for Quaternion<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_components(&self.to_array(), state);
    }
}

impl<T: Scalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.to_array())
    }
}

impl<T: Scalar> FromStr for Quaternion<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_tuple::<T, 4>(s, "Quaternion").map(Self::from_array)
    }
}

impl<T: Scalar> From<[T; 4]> for Quaternion<T> {
    #[inline]
    fn from(a: [T; 4]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar> From<Quaternion<T>> for [T; 4] {
    #[inline]
    fn from(q: Quaternion<T>) -> [T; 4] {
        q.to_array()
    }
}

impl<T: Scalar> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

impl<T: Scalar> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| a.relative_eq(&b, epsilon, max_relative))
    }
}

impl<T: Scalar> UlpsEq for Quaternion<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| a.ulps_eq(&b, epsilon, max_ulps))
    }
}
