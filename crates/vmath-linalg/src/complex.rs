//! Complex numbers.
//!
//! [`Complex`] supports the field operations plus the elementary functions
//! (`sqrt`, `ln`, `exp`, `sin`, `cos`, `tan`). Division can fail and is
//! therefore exposed as [`Complex::try_div`] and friends rather than as a
//! `/` operator.
//!
//! # Usage
//!
//! ```rust
//! use vmath_linalg::ComplexD;
//!
//! let z = ComplexD::new(3.0, 4.0);
//! assert_eq!(z.modulus(), 5.0);
//! assert_eq!(z * ComplexD::I, ComplexD::new(-4.0, 3.0));
//! assert!(z.try_div(ComplexD::ZERO).is_err());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use vmath_core::{Error, Result, Scalar, check_index, check_len, parse_tuple, write_tuple};

use crate::macros::{hash_components, impl_scalar_lhs};

/// A complex number `real + imaginary * i`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Complex<T> {
    /// Real part
    pub real: T,
    /// Imaginary part
    pub imaginary: T,
}

/// Single-precision complex number.
pub type ComplexF = Complex<f32>;
/// Double-precision complex number.
pub type ComplexD = Complex<f64>;

impl<T: Scalar> Complex<T> {
    /// 0 + 0i
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);

    /// 1 + 0i
    pub const ONE: Self = Self::new(T::ONE, T::ZERO);

    /// 0 + 1i
    pub const I: Self = Self::new(T::ZERO, T::ONE);

    /// Creates a complex number.
    #[inline]
    pub const fn new(real: T, imaginary: T) -> Self {
        Self { real, imaginary }
    }

    /// Creates a purely real number.
    #[inline]
    pub const fn from_real(real: T) -> Self {
        Self::new(real, T::ZERO)
    }

    /// Creates from `[real, imaginary]`.
    #[inline]
    pub const fn from_array(a: [T; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to `[real, imaginary]`.
    #[inline]
    pub const fn to_array(self) -> [T; 2] {
        [self.real, self.imaginary]
    }

    /// Creates from the first two elements of a slice.
    pub fn from_slice(s: &[T]) -> Result<Self> {
        check_len(s, 2)?;
        Ok(Self::new(s[0], s[1]))
    }

    /// Modulus `sqrt(re² + im²)`.
    #[inline]
    pub fn modulus(self) -> T {
        self.modulus_squared().sqrt()
    }

    /// Squared modulus.
    #[inline]
    pub fn modulus_squared(self) -> T {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// Argument (phase angle) in `(-π, π]`.
    #[inline]
    pub fn argument(self) -> T {
        self.imaginary.atan2(self.real)
    }

    /// Complex conjugate.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// Scales to unit modulus in place.
    ///
    /// Fails with [`Error::DivisionByZero`] on zero (left unchanged).
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Returns a unit-modulus copy.
    pub fn normalized(self) -> Result<Self> {
        let modulus = self.modulus();
        if modulus == T::ZERO {
            tracing::trace!(complex = %self, "refusing to normalize zero complex number");
            return Err(Error::division_by_zero("normalizing a zero complex number"));
        }
        Ok(Self::new(self.real / modulus, self.imaginary / modulus))
    }

    /// `self / rhs`.
    ///
    /// Fails with [`Error::DivisionByZero`] when `|rhs|² == 0`.
    pub fn try_div(self, rhs: Self) -> Result<Self> {
        let den = rhs.modulus_squared();
        if den == T::ZERO {
            tracing::trace!(lhs = %self, "complex division by zero");
            return Err(Error::division_by_zero("dividing by a zero complex number"));
        }
        let n = self * rhs.conjugate();
        Ok(Self::new(n.real / den, n.imaginary / den))
    }

    /// `self / s` for a real `s`.
    ///
    /// Fails with [`Error::DivisionByZero`] when `s == 0`.
    pub fn try_div_scalar(self, s: T) -> Result<Self> {
        if s == T::ZERO {
            return Err(Error::division_by_zero("dividing a complex number by zero"));
        }
        Ok(Self::new(self.real / s, self.imaginary / s))
    }

    /// `s / c` for a real `s`: `s * conj(c) / |c|²`.
    ///
    /// Fails with [`Error::DivisionByZero`] when `|c|² == 0`.
    pub fn try_scalar_div(s: T, c: Self) -> Result<Self> {
        Self::from_real(s).try_div(c)
    }

    /// Principal square root.
    ///
    /// Purely real input takes a closed form: `sqrt(a) = (√a, 0)` for
    /// `a > 0` and `(0, √-a)` for `a < 0`. Otherwise the half-angle formula
    /// is used with the imaginary sign taken from the input.
    pub fn sqrt(self) -> Self {
        if self.real == T::ZERO && self.imaginary == T::ZERO {
            return Self::ZERO;
        }
        if self.imaginary == T::ZERO {
            return if self.real > T::ZERO {
                Self::from_real(self.real.sqrt())
            } else {
                Self::new(T::ZERO, (-self.real).sqrt())
            };
        }
        let modulus = self.modulus();
        let re = (T::HALF * (modulus + self.real)).sqrt();
        let im = (T::HALF * (modulus - self.real)).sqrt();
        Self::new(re, if self.imaginary < T::ZERO { -im } else { im })
    }

    /// Principal natural logarithm `ln|z| + i·arg(z)`.
    ///
    /// The logarithm of zero is `(-inf, -π/2)`, following IEEE semantics.
    pub fn ln(self) -> Self {
        if self.real > T::ZERO && self.imaginary == T::ZERO {
            Self::from_real(self.real.ln())
        } else if self.real == T::ZERO {
            if self.imaginary > T::ZERO {
                Self::new(self.imaginary.ln(), T::FRAC_PI_2())
            } else {
                Self::new((-self.imaginary).ln(), -T::FRAC_PI_2())
            }
        } else {
            Self::new(self.modulus().ln(), self.argument())
        }
    }

    /// `e^z = e^re (cos im + i sin im)`.
    pub fn exp(self) -> Self {
        let r = self.real.exp();
        Self::new(r * self.imaginary.cos(), r * self.imaginary.sin())
    }

    /// Complex sine.
    pub fn sin(self) -> Self {
        if self.imaginary == T::ZERO {
            return Self::from_real(self.real.sin());
        }
        Self::new(
            self.real.sin() * self.imaginary.cosh(),
            self.real.cos() * self.imaginary.sinh(),
        )
    }

    /// Complex cosine.
    pub fn cos(self) -> Self {
        if self.imaginary == T::ZERO {
            return Self::from_real(self.real.cos());
        }
        Self::new(
            self.real.cos() * self.imaginary.cosh(),
            -self.real.sin() * self.imaginary.sinh(),
        )
    }

    /// Complex tangent `(sin 2a + i sinh 2b) / (cos 2a + cosh 2b)`.
    pub fn tan(self) -> Self {
        if self.imaginary == T::ZERO {
            return Self::from_real(self.real.tan());
        }
        let real2 = T::TWO * self.real;
        let imag2 = T::TWO * self.imaginary;
        let den = real2.cos() + imag2.cosh();
        Self::new(real2.sin() / den, imag2.sinh() / den)
    }

    /// Tolerance-based comparison of both parts.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        vmath_core::approx_eq(self.real, other.real, tolerance)
            && vmath_core::approx_eq(self.imaginary, other.imaginary, tolerance)
    }

    /// [`approx_eq`](Self::approx_eq) with [`Scalar::EPSILON`].
    pub fn approx_eq_default(&self, other: &Self) -> bool {
        self.approx_eq(other, T::EPSILON)
    }

    /// Part `index` (0 = real, 1 = imaginary).
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, 2)?;
        Ok(self[index])
    }

    /// Sets part `index` (0 = real, 1 = imaginary).
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, 2)?;
        self[index] = value;
        Ok(())
    }

    /// Returns true if both parts are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    #[inline]
    fn scalar_add(s: T, c: Self) -> Self {
        c + s
    }

    #[inline]
    fn scalar_sub(s: T, c: Self) -> Self {
        Self::new(s - c.real, -c.imaginary)
    }

    #[inline]
    fn scalar_mul(s: T, c: Self) -> Self {
        c * s
    }
}

impl<T: Scalar> Index<usize> for Complex<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.real,
            1 => &self.imaginary,
            _ => panic!("Complex index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Complex<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.real,
            1 => &mut self.imaginary,
            _ => panic!("Complex index out of bounds: {}", i),
        }
    }
}

impl<T: Scalar> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.real, -self.imaginary)
    }
}

impl<T: Scalar> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl<T: Scalar> Add<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::new(self.real + rhs, self.imaginary)
    }
}

impl<T: Scalar> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl<T: Scalar> Sub<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::new(self.real - rhs, self.imaginary)
    }
}

impl<T: Scalar> Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.real * rhs.imaginary + self.imaginary * rhs.real,
        )
    }
}

impl<T: Scalar> Mul<T> for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.real * rhs, self.imaginary * rhs)
    }
}

impl<T: Scalar> AddAssign for Complex<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Complex<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign for Complex<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Complex<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl_scalar_lhs!(
    Complex,
    Add::add => scalar_add,
    Sub::sub => scalar_sub,
    Mul::mul => scalar_mul,
);

/// Equality is reflexive for every value without a NaN component.
impl<T: Scalar> Eq for Complex<T> {}

impl<T: Scalar> Hash for Complex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_components(&self.to_array(), state);
    }
}

impl<T: Scalar> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.to_array())
    }
}

impl<T: Scalar> FromStr for Complex<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_tuple::<T, 2>(s, "Complex").map(Self::from_array)
    }
}

impl<T: Scalar> From<T> for Complex<T> {
    #[inline]
    fn from(real: T) -> Self {
        Self::from_real(real)
    }
}

impl<T: Scalar> From<[T; 2]> for Complex<T> {
    #[inline]
    fn from(a: [T; 2]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Scalar> From<Complex<T>> for [T; 2] {
    #[inline]
    fn from(c: Complex<T>) -> [T; 2] {
        c.to_array()
    }
}

impl<T: Scalar> AbsDiffEq for Complex<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.real.abs_diff_eq(&other.real, epsilon)
            && self.imaginary.abs_diff_eq(&other.imaginary, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Complex<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.real.relative_eq(&other.real, epsilon, max_relative)
            && self.imaginary.relative_eq(&other.imaginary, epsilon, max_relative)
    }
}

impl<T: Scalar> UlpsEq for Complex<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.real.ulps_eq(&other.real, epsilon, max_ulps)
            && self.imaginary.ulps_eq(&other.imaginary, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_complex_modulus() {
        assert_eq!(ComplexD::new(3.0, 4.0).modulus(), 5.0);
        assert_eq!(ComplexF::new(3.0, 4.0).modulus_squared(), 25.0);
    }

    #[test]
    fn test_complex_divide() {
        let a = ComplexD::new(1.0, 2.0);
        let b = ComplexD::new(3.0, -4.0);
        let q = a.try_div(b).unwrap();
        assert_relative_eq!(q * b, a, epsilon = 1e-12);

        let err = a.try_div(ComplexD::ZERO).unwrap_err();
        assert!(err.is_division_by_zero());
        assert!(a.try_div_scalar(0.0).unwrap_err().is_division_by_zero());
        assert_eq!(a.try_div_scalar(2.0).unwrap(), ComplexD::new(0.5, 1.0));
    }

    #[test]
    fn test_complex_scalar_div() {
        // 2 / i = -2i
        let r = ComplexD::try_scalar_div(2.0, ComplexD::I).unwrap();
        assert_eq!(r, ComplexD::new(0.0, -2.0));
        // 5 / (1 + 2i) = 1 - 2i
        let r = ComplexD::try_scalar_div(5.0, ComplexD::new(1.0, 2.0)).unwrap();
        assert_relative_eq!(r, ComplexD::new(1.0, -2.0));
        assert!(ComplexD::try_scalar_div(1.0, ComplexD::ZERO).is_err());
    }

    #[test]
    fn test_complex_scalar_ops() {
        let c = ComplexD::new(1.0, 2.0);
        assert_eq!(5.0 - c, ComplexD::new(4.0, -2.0));
        assert_eq!(c - 5.0, ComplexD::new(-4.0, 2.0));
        assert_eq!(1.0 + c, ComplexD::new(2.0, 2.0));
        assert_eq!(3.0 * c, ComplexD::new(3.0, 6.0));
        assert_eq!(ComplexD::I * ComplexD::I, -ComplexD::ONE);
    }

    #[test]
    fn test_complex_sqrt() {
        assert_eq!(ComplexD::from_real(9.0).sqrt(), ComplexD::new(3.0, 0.0));
        assert_eq!(ComplexD::from_real(-4.0).sqrt(), ComplexD::new(0.0, 2.0));
        assert_eq!(ComplexD::ZERO.sqrt(), ComplexD::ZERO);

        let z = ComplexD::new(-3.0, -4.0);
        let r = z.sqrt();
        assert_relative_eq!(r, ComplexD::new(1.0, -2.0), epsilon = 1e-12);
        assert_relative_eq!(r * r, z, epsilon = 1e-12);
    }

    #[test]
    fn test_complex_ln_exp() {
        assert_eq!(ComplexD::from_real(1.0).ln(), ComplexD::ZERO);
        assert_eq!(ComplexD::I.ln(), ComplexD::new(0.0, FRAC_PI_2));
        assert_eq!(ComplexD::new(0.0, -1.0).ln(), ComplexD::new(0.0, -FRAC_PI_2));
        assert_relative_eq!(ComplexD::from_real(-1.0).ln(), ComplexD::new(0.0, PI));

        let z = ComplexD::new(0.3, -1.2);
        assert_relative_eq!(z.exp().ln(), z, epsilon = 1e-12);
        // e^(iπ) = -1
        assert_abs_diff_eq!(ComplexD::new(0.0, PI).exp(), -ComplexD::ONE, epsilon = 1e-12);
    }

    #[test]
    fn test_complex_trig() {
        let z = ComplexD::new(0.7, 0.4);
        let s = z.sin();
        let c = z.cos();
        // sin² + cos² = 1
        assert_abs_diff_eq!(s * s + c * c, ComplexD::ONE, epsilon = 1e-12);
        // tan = sin / cos
        assert_abs_diff_eq!(z.tan(), s.try_div(c).unwrap(), epsilon = 1e-12);
        // tan(i) = i tanh(1)
        assert_abs_diff_eq!(ComplexD::I.tan(), ComplexD::new(0.0, 1f64.tanh()), epsilon = 1e-12);

        assert_eq!(ComplexD::from_real(0.5).sin(), ComplexD::from_real(0.5f64.sin()));
        assert_eq!(ComplexD::from_real(0.5).cos(), ComplexD::from_real(0.5f64.cos()));
    }

    #[test]
    fn test_complex_normalize() {
        let mut c = ComplexD::new(3.0, 4.0);
        c.normalize().unwrap();
        assert_eq!(c, ComplexD::new(0.6, 0.8));

        let mut zero = ComplexD::ZERO;
        assert!(zero.normalize().is_err());
        assert!(ComplexF::ZERO.normalized().is_err());
    }

    #[test]
    fn test_complex_parse_roundtrip() {
        let c = ComplexD::new(-1.25, 0.1);
        assert_eq!(c.to_string(), "(-1.25, 0.1)");
        assert_eq!(c.to_string().parse::<ComplexD>().unwrap(), c);
        assert!("(1, 2, 3)".parse::<ComplexD>().unwrap_err().is_parse_error());
    }

    #[test]
    fn test_complex_conversions() {
        let c: ComplexF = 2.5f32.into();
        assert_eq!(c, ComplexF::new(2.5, 0.0));
        assert_eq!(ComplexF::from([1.0, 2.0]).get(1).unwrap(), 2.0);
        assert!(c.get(2).is_err());
        assert!(ComplexF::new(1.0, 1.0).approx_eq(&ComplexF::new(1.0, 1.0 + 1e-8), 1e-6));
    }

    #[test]
    fn test_complex_hash_map_key() {
        let mut roots = std::collections::HashMap::new();
        roots.insert(ComplexD::new(-4.0, 0.0), ComplexD::new(0.0, 2.0));
        assert_eq!(roots.get(&ComplexD::new(-4.0, -0.0)), Some(&ComplexD::new(0.0, 2.0)));
        assert_eq!(roots.get(&ComplexD::new(4.0, 0.0)), None);
    }
}
