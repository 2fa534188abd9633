//! RGBA color with `f32` channels.
//!
//! Channels are conventionally in `[0, 1]` but are not constrained; call
//! [`ColorF::clamp`] to bring a color back into range. Alpha is straight
//! (not premultiplied).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use vmath_core::{Error, Result, Scalar, check_index, check_len, lerp, parse_tuple, write_tuple};
use vmath_linalg::{Vector3F, Vector4F};

/// RGBA color, single precision.
///
/// # Memory Layout
///
/// Uses `#[repr(C)]` for predictable layout: `[R, G, B, A]`
///
/// # Example
///
/// ```
/// use vmath_color::ColorF;
///
/// let orange = ColorF::new(1.0, 0.5, 0.0);
/// let (h, s, v) = orange.to_hsv();
/// assert_eq!((h, s, v), (30.0, 1.0, 1.0));
///
/// let faded = ColorF::blend(orange, ColorF::TRANSPARENT, 0.5);
/// assert_eq!(faded.alpha, 0.5);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorF {
    /// Red channel value.
    pub red: f32,
    /// Green channel value.
    pub green: f32,
    /// Blue channel value.
    pub blue: f32,
    /// Alpha channel value.
    pub alpha: f32,
}

impl ColorF {
    /// Opaque black.
    pub const BLACK: Self = Self::with_alpha(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::with_alpha(1.0, 1.0, 1.0, 1.0);
    /// All channels zero, including alpha.
    pub const TRANSPARENT: Self = Self::with_alpha(0.0, 0.0, 0.0, 0.0);

    /// Creates an opaque color (alpha = 1.0).
    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self::with_alpha(red, green, blue, 1.0)
    }

    /// Creates a color with an explicit alpha.
    #[inline]
    pub const fn with_alpha(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Linear blend of two colors: `source + (dest - source) * opacity`
    /// per channel, alpha included.
    #[inline]
    pub fn blend(source: Self, dest: Self, opacity: f32) -> Self {
        Self::with_alpha(
            lerp(source.red, dest.red, opacity),
            lerp(source.green, dest.green, opacity),
            lerp(source.blue, dest.blue, opacity),
            lerp(source.alpha, dest.alpha, opacity),
        )
    }

    /// Get RGBA values as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Create from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::with_alpha(a[0], a[1], a[2], a[3])
    }

    /// Creates a color from the first four values of `slice`.
    pub fn from_slice(slice: &[f32]) -> Result<Self> {
        check_len(slice, 4)
            .inspect_err(|e| tracing::debug!(len = slice.len(), error = %e, "ColorF from short slice"))?;
        Ok(Self::with_alpha(slice[0], slice[1], slice[2], slice[3]))
    }

    /// RGB channels as a vector, discarding alpha.
    #[inline]
    pub fn rgb(self) -> Vector3F {
        Vector3F::new(self.red, self.green, self.blue)
    }

    /// Clips every channel, alpha included, to `[0, 1]`.
    ///
    /// NaN channels are left as they are.
    pub fn clamp(&mut self) {
        for c in [&mut self.red, &mut self.green, &mut self.blue, &mut self.alpha] {
            *c = (*c).clamp(0.0, 1.0);
        }
    }

    /// Returns a copy with every channel clipped to `[0, 1]`.
    #[inline]
    pub fn clamped(mut self) -> Self {
        self.clamp();
        self
    }

    /// Unweighted mean of the RGB channels: `(R + G + B) / 3`.
    #[inline]
    pub fn intensity(self) -> f32 {
        (self.red + self.green + self.blue) / 3.0
    }

    /// Converts RGB to `(hue, saturation, value)`.
    ///
    /// Hue is in degrees, `[0, 360)`. Black yields `(0, 0, 0)`; grays
    /// (zero chroma) yield hue 0. Alpha is ignored.
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        let v = max;

        if max == 0.0 {
            return (0.0, 0.0, v);
        }

        let delta = max - min;
        let s = delta / max;
        if delta == 0.0 {
            return (0.0, s, v);
        }

        // Sector: red between yellow and magenta, green between cyan and
        // yellow, blue between magenta and cyan.
        let sector = if self.red == max {
            (self.green - self.blue) / delta
        } else if self.green == max {
            2.0 + (self.blue - self.red) / delta
        } else {
            4.0 + (self.red - self.green) / delta
        };

        let mut h = sector * 60.0;
        if h < 0.0 {
            h += 360.0;
        }
        (h, s, v)
    }

    /// Creates an opaque color from hue (degrees), saturation and value.
    ///
    /// Hue wraps into `[0, 360)`.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let c = v * s;
        let h_prime = h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

        let (r1, g1, b1) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let m = v - c;
        Self::new(r1 + m, g1 + m, b1 + m)
    }

    /// Tolerance-based comparison over all four channels.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.zip_all(*other, |a, b| vmath_core::approx_eq(a, b, tolerance))
    }

    /// Returns channel `index` (`0` = red ... `3` = alpha).
    pub fn get(&self, index: usize) -> Result<f32> {
        check_index(index, 4)
            .inspect_err(|e| tracing::debug!(index, error = %e, "ColorF channel read out of range"))?;
        Ok(self[index])
    }

    /// Sets channel `index` (`0` = red ... `3` = alpha).
    pub fn set(&mut self, index: usize, value: f32) -> Result<()> {
        check_index(index, 4)
            .inspect_err(|e| tracing::debug!(index, error = %e, "ColorF channel write out of range"))?;
        self[index] = value;
        Ok(())
    }

    /// Check if the color is fully opaque.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    #[inline]
    fn zip_all(self, other: Self, f: impl Fn(f32, f32) -> bool) -> bool {
        f(self.red, other.red)
            && f(self.green, other.green)
            && f(self.blue, other.blue)
            && f(self.alpha, other.alpha)
    }
}

impl Default for ColorF {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl Index<usize> for ColorF {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.red,
            1 => &self.green,
            2 => &self.blue,
            3 => &self.alpha,
            _ => panic!("ColorF index out of bounds: {}", index),
        }
    }
}

impl IndexMut<usize> for ColorF {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.red,
            1 => &mut self.green,
            2 => &mut self.blue,
            3 => &mut self.alpha,
            _ => panic!("ColorF index out of bounds: {}", index),
        }
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Add for ColorF {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::with_alpha(
            self.red + rhs.red,
            self.green + rhs.green,
            self.blue + rhs.blue,
            self.alpha + rhs.alpha,
        )
    }
}

impl Sub for ColorF {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::with_alpha(
            self.red - rhs.red,
            self.green - rhs.green,
            self.blue - rhs.blue,
            self.alpha - rhs.alpha,
        )
    }
}

impl Mul<f32> for ColorF {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::with_alpha(self.red * rhs, self.green * rhs, self.blue * rhs, self.alpha * rhs)
    }
}

impl Mul<ColorF> for f32 {
    type Output = ColorF;

    #[inline]
    fn mul(self, rhs: ColorF) -> ColorF {
        rhs * self
    }
}

impl AddAssign for ColorF {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl MulAssign<f32> for ColorF {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Equality is reflexive for every color without a NaN channel.
impl Eq for ColorF {}

impl Hash for ColorF {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.to_array() {
            state.write_u64(c.hash_bits());
        }
    }
}

impl fmt::Display for ColorF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.to_array())
    }
}

impl FromStr for ColorF {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_tuple::<f32, 4>(s, "ColorF").map(Self::from_array)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<[f32; 4]> for ColorF {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<ColorF> for [f32; 4] {
    #[inline]
    fn from(c: ColorF) -> [f32; 4] {
        c.to_array()
    }
}

impl From<ColorF> for Vector3F {
    #[inline]
    fn from(c: ColorF) -> Vector3F {
        c.rgb()
    }
}

/// Opaque color from an RGB vector.
impl From<Vector3F> for ColorF {
    #[inline]
    fn from(v: Vector3F) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<ColorF> for Vector4F {
    #[inline]
    fn from(c: ColorF) -> Vector4F {
        Vector4F::from_array(c.to_array())
    }
}

impl From<Vector4F> for ColorF {
    #[inline]
    fn from(v: Vector4F) -> Self {
        Self::from_array(v.to_array())
    }
}

impl AbsDiffEq for ColorF {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        <f32 as Scalar>::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.zip_all(*other, |a, b| a.abs_diff_eq(&b, epsilon))
    }
}

impl RelativeEq for ColorF {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.zip_all(*other, |a, b| a.relative_eq(&b, epsilon, max_relative))
    }
}

impl UlpsEq for ColorF {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.zip_all(*other, |a, b| a.ulps_eq(&b, epsilon, max_ulps))
    }
}
