//! Floating-point scalar abstraction.
//!
//! Every vmath value type is generic over a [`Scalar`], which is implemented
//! for `f32` (single precision) and `f64` (double precision). The trait
//! builds on [`num_traits::Float`] and adds the constants the value types
//! need, so each type is written once and aliased per precision:
//!
//! ```text
//! Vector3<f32> = Vector3F      Vector3<f64> = Vector3D
//! ```
//!
//! # Tolerances
//!
//! [`Scalar::EPSILON`] is the default tolerance for approximate comparison
//! and for the near-zero checks in quaternion logarithm/exponential:
//!
//! - `f32`: `4.76837158203125e-7` (2^-21)
//! - `f64`: `8.8817841970012523e-16` (2^-50)

use std::fmt;
use std::num::ParseFloatError;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};
use std::str::FromStr;

use num_traits as nt;

/// Trait for the floating-point component type of vmath values.
///
/// Arithmetic and transcendental functions come from
/// [`num_traits::Float`], `PI()`/`FRAC_PI_2()` from
/// [`num_traits::FloatConst`]. The associated constants below exist because
/// the value types need them in `const` items (`Vector3::ZERO`,
/// `Matrix4::IDENTITY`, ...).
///
/// The [`approx`] comparison traits are supertraits so value types can
/// forward their own `approx` implementations component by component.
///
/// # Example
///
/// ```
/// use vmath_core::Scalar;
///
/// fn hypot<T: Scalar>(a: T, b: T) -> T {
///     (a * a + b * b).sqrt()
/// }
///
/// assert_eq!(hypot(3.0f32, 4.0), 5.0);
/// assert_eq!(hypot(3.0f64, 4.0), 5.0);
/// ```
pub trait Scalar:
    nt::Float
    + nt::FloatConst
    + nt::FromPrimitive
    + Default
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseFloatError>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + approx::RelativeEq<Epsilon = Self>
    + approx::UlpsEq<Epsilon = Self>
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Two.
    const TWO: Self;
    /// One half.
    const HALF: Self;
    /// Default tolerance for approximate comparisons.
    const EPSILON: Self;

    /// Bit pattern used for hashing.
    ///
    /// `-0.0` maps to the pattern of `0.0` so that values comparing equal
    /// hash equally.
    fn hash_bits(self) -> u64;
}

macro_rules! impl_scalar {
    ($f:ty, $epsilon:expr) => {
        impl Scalar for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const EPSILON: Self = $epsilon;

            #[inline]
            fn hash_bits(self) -> u64 {
                if self == 0.0 { 0 } else { u64::from(self.to_bits()) }
            }
        }
    };
}

impl_scalar!(f32, 4.768_371_6e-7);
impl_scalar!(f64, 8.881_784_197_001_252e-16);

/// Linear interpolation: `a * (1 - t) + b * t`.
///
/// Returns `a` at `t = 0` and `b` at `t = 1` exactly.
///
/// ```
/// use vmath_core::lerp;
///
/// assert_eq!(lerp(2.0f32, 4.0, 0.5), 3.0);
/// ```
#[inline]
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a * (T::ONE - t) + b * t
}

/// Snaps `value` to `target` when it lies strictly within `tolerance` of it.
///
/// ```
/// use vmath_core::snap;
///
/// assert_eq!(snap(1e-9f64, 0.0, 1e-6), 0.0);
/// assert_eq!(snap(0.5f64, 0.0, 1e-6), 0.5);
/// ```
#[inline]
pub fn snap<T: Scalar>(value: T, target: T, tolerance: T) -> T {
    if tolerance > (value - target).abs() {
        target
    } else {
        value
    }
}

/// Returns true if `|a - b| <= tolerance`.
#[inline]
pub fn approx_eq<T: Scalar>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_values() {
        assert_eq!(<f32 as Scalar>::EPSILON, 4.768_371_6e-7);
        assert_eq!(<f64 as Scalar>::EPSILON, 2f64.powi(-50));
    }

    #[test]
    fn test_hash_bits_zero_sign() {
        assert_eq!((-0.0f32).hash_bits(), 0.0f32.hash_bits());
        assert_eq!((-0.0f64).hash_bits(), 0.0f64.hash_bits());
        assert_ne!(1.0f64.hash_bits(), (-1.0f64).hash_bits());
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.25f64, 8.0, 0.0), 0.25);
        assert_eq!(lerp(0.25f64, 8.0, 1.0), 8.0);
        assert_eq!(lerp(-1.0f32, 1.0, 0.5), 0.0);
    }

    #[test]
    fn test_snap() {
        assert_eq!(snap(0.999_999_9f64, 1.0, 1e-6), 1.0);
        assert_eq!(snap(-2.0f32, 0.0, 1e-3), -2.0);
    }

    #[test]
    fn test_trig_dispatch() {
        fn half_turn<T: Scalar>() -> T {
            T::PI().cos()
        }
        approx::assert_abs_diff_eq!(half_turn::<f32>(), -1.0, epsilon = 1e-6);
        approx::assert_abs_diff_eq!(half_turn::<f64>(), -1.0, epsilon = 1e-12);
    }
}
