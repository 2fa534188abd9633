//! Helpers shared by the value types.

use std::hash::Hasher;

use vmath_core::Scalar;

/// Implements `scalar OP value` for both `f32` and `f64` by delegating to
/// an associated function `$func(scalar, value)` of the value type.
///
/// Rust cannot express `impl<T: Scalar> Mul<Vector3<T>> for T`, so the
/// left-hand scalar operators are stamped out per precision.
macro_rules! impl_scalar_lhs {
    ($ty:ident, $($trait:ident :: $method:ident => $func:ident),+ $(,)?) => {
        $crate::macros::impl_scalar_lhs!(@impl f32, $ty, $($trait::$method => $func),+);
        $crate::macros::impl_scalar_lhs!(@impl f64, $ty, $($trait::$method => $func),+);
    };
    (@impl $s:ty, $ty:ident, $($trait:ident :: $method:ident => $func:ident),+) => {
        $(
            impl std::ops::$trait<$ty<$s>> for $s {
                type Output = $ty<$s>;

                #[inline]
                fn $method(self, rhs: $ty<$s>) -> $ty<$s> {
                    $ty::<$s>::$func(self, rhs)
                }
            }
        )+
    };
}

pub(crate) use impl_scalar_lhs;

/// Implements the operators and conversions every square matrix shares.
///
/// The type must be a `struct $ty<T> { pub m: [[T; $n]; $n] }` with
/// `ZERO`/`IDENTITY` constants and `from_rows`/`to_rows` constructors.
macro_rules! impl_matrix_common {
    ($ty:ident, $n:literal) => {
        impl<T: vmath_core::Scalar> Default for $ty<T> {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        // Row access: m[r][c]
        impl<T: vmath_core::Scalar> std::ops::Index<usize> for $ty<T> {
            type Output = [T; $n];

            #[inline]
            fn index(&self, i: usize) -> &[T; $n] {
                &self.m[i]
            }
        }

        impl<T: vmath_core::Scalar> std::ops::IndexMut<usize> for $ty<T> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut [T; $n] {
                &mut self.m[i]
            }
        }

        impl<T: vmath_core::Scalar> std::ops::Neg for $ty<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::from_rows($crate::grid::map(&self.m, |v| -v))
            }
        }

        // Matrix + Matrix
        impl<T: vmath_core::Scalar> std::ops::Add for $ty<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::from_rows($crate::grid::zip(&self.m, &rhs.m, |a, b| a + b))
            }
        }

        // Matrix + scalar
        impl<T: vmath_core::Scalar> std::ops::Add<T> for $ty<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: T) -> Self {
                Self::from_rows($crate::grid::map(&self.m, |v| v + rhs))
            }
        }

        // Matrix - Matrix
        impl<T: vmath_core::Scalar> std::ops::Sub for $ty<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::from_rows($crate::grid::zip(&self.m, &rhs.m, |a, b| a - b))
            }
        }

        // Matrix - scalar
        impl<T: vmath_core::Scalar> std::ops::Sub<T> for $ty<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: T) -> Self {
                Self::from_rows($crate::grid::map(&self.m, |v| v - rhs))
            }
        }

        // Matrix * Matrix
        impl<T: vmath_core::Scalar> std::ops::Mul for $ty<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self::from_rows($crate::grid::mul(&self.m, &rhs.m))
            }
        }

        // Matrix * scalar
        impl<T: vmath_core::Scalar> std::ops::Mul<T> for $ty<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self::from_rows($crate::grid::map(&self.m, |v| v * rhs))
            }
        }

        impl<T: vmath_core::Scalar> std::ops::AddAssign for $ty<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: vmath_core::Scalar> std::ops::SubAssign for $ty<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: vmath_core::Scalar> std::ops::MulAssign for $ty<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: vmath_core::Scalar> std::ops::MulAssign<T> for $ty<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: vmath_core::Scalar> $ty<T> {
            #[inline]
            fn scalar_add(s: T, m: Self) -> Self {
                m + s
            }

            #[inline]
            fn scalar_mul(s: T, m: Self) -> Self {
                m * s
            }
        }

        $crate::macros::impl_scalar_lhs!($ty, Add::add => scalar_add, Mul::mul => scalar_mul);

        // NaN elements are the only values not equal to themselves.
        impl<T: vmath_core::Scalar> Eq for $ty<T> {}

        impl<T: vmath_core::Scalar> std::hash::Hash for $ty<T> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::macros::hash_components(self.m.as_flattened(), state);
            }
        }

        impl<T: vmath_core::Scalar> std::fmt::Display for $ty<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                vmath_core::write_rows(f, &self.m)
            }
        }

        impl<T: vmath_core::Scalar> std::str::FromStr for $ty<T> {
            type Err = vmath_core::Error;

            fn from_str(s: &str) -> vmath_core::Result<Self> {
                vmath_core::parse_rows::<T, $n, $n>(s, stringify!($ty)).map(Self::from_rows)
            }
        }

        impl<T: vmath_core::Scalar> From<[[T; $n]; $n]> for $ty<T> {
            #[inline]
            fn from(rows: [[T; $n]; $n]) -> Self {
                Self::from_rows(rows)
            }
        }

        impl<T: vmath_core::Scalar> From<$ty<T>> for [[T; $n]; $n] {
            #[inline]
            fn from(m: $ty<T>) -> Self {
                m.m
            }
        }

        impl<T: vmath_core::Scalar> approx::AbsDiffEq for $ty<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $crate::grid::all(&self.m, &other.m, |a, b| a.abs_diff_eq(&b, epsilon))
            }
        }

        impl<T: vmath_core::Scalar> approx::RelativeEq for $ty<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                $crate::grid::all(&self.m, &other.m, |a, b| a.relative_eq(&b, epsilon, max_relative))
            }
        }

        impl<T: vmath_core::Scalar> approx::UlpsEq for $ty<T> {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                $crate::grid::all(&self.m, &other.m, |a, b| a.ulps_eq(&b, epsilon, max_ulps))
            }
        }
    };
}

pub(crate) use impl_matrix_common;

/// Feeds canonicalized component bits into a hasher.
#[inline]
pub(crate) fn hash_components<T: Scalar, H: Hasher>(components: &[T], state: &mut H) {
    for c in components {
        state.write_u64(c.hash_bits());
    }
}
