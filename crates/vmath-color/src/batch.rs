//! SIMD operations over color slices.
//!
//! A [`ColorF`] is exactly four `f32` lanes, so each color maps onto one
//! `wide::f32x4` register.
//!
//! # Example
//!
//! ```rust
//! use vmath_color::{ColorF, batch};
//!
//! let mut colors = vec![ColorF::with_alpha(1.5, -0.2, 0.5, 2.0); 16];
//! batch::clamp_all(&mut colors);
//! assert!(colors.iter().all(|c| *c == ColorF::with_alpha(1.0, 0.0, 0.5, 1.0)));
//! ```

use wide::f32x4;

use crate::color::ColorF;

/// Clamps every channel of every color to `[0, 1]`.
///
/// Same result as calling [`ColorF::clamp`] on each element, including
/// NaN channels passing through unchanged.
pub fn clamp_all(colors: &mut [ColorF]) {
    let zero = f32x4::splat(0.0);
    let one = f32x4::splat(1.0);
    for c in colors.iter_mut() {
        let v = f32x4::from(c.to_array());
        let clamped = v.max(zero).min(one);
        *c = ColorF::from_array(v.is_nan().blend(v, clamped).to_array());
    }
}

/// Scales every color by `factor`, alpha included.
pub fn scale_all(colors: &mut [ColorF], factor: f32) {
    let f = f32x4::splat(factor);
    for c in colors.iter_mut() {
        *c = ColorF::from_array((f32x4::from(c.to_array()) * f).to_array());
    }
}

/// Blends each `source[i]` toward `dest[i]` by `opacity`, writing into
/// `source`. Extra elements of the longer slice are ignored.
pub fn blend_all(source: &mut [ColorF], dest: &[ColorF], opacity: f32) {
    let t = f32x4::splat(opacity);
    let inv = f32x4::splat(1.0 - opacity);
    for (s, d) in source.iter_mut().zip(dest) {
        let a = f32x4::from(s.to_array());
        let b = f32x4::from(d.to_array());
        *s = ColorF::from_array((a * inv + b * t).to_array());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_clamp_all_matches_scalar() {
        let src: Vec<ColorF> = (0..37)
            .map(|i| {
                let f = i as f32 / 10.0 - 1.5;
                ColorF::with_alpha(f, -f, f * 0.5, f + 1.0)
            })
            .collect();

        let mut simd = src.clone();
        clamp_all(&mut simd);
        for (got, orig) in simd.iter().zip(&src) {
            assert_eq!(*got, orig.clamped());
        }
    }

    #[test]
    fn test_clamp_all_keeps_nan() {
        let src = ColorF::with_alpha(f32::NAN, 1.5, -0.5, f32::NAN);
        let mut simd = vec![src; 5];
        clamp_all(&mut simd);

        let scalar = src.clamped();
        for got in &simd {
            assert!(got.red.is_nan() && scalar.red.is_nan());
            assert!(got.alpha.is_nan() && scalar.alpha.is_nan());
            assert_eq!(got.green, scalar.green);
            assert_eq!(got.blue, scalar.blue);
        }
        assert_eq!(simd[0].green, 1.0);
        assert_eq!(simd[0].blue, 0.0);
    }

    #[test]
    fn test_clamp_all_empty() {
        let mut none: Vec<ColorF> = Vec::new();
        clamp_all(&mut none);
        assert!(none.is_empty());
    }

    #[test]
    fn test_scale_all() {
        let mut c = vec![ColorF::with_alpha(0.5, 0.25, 1.0, 1.0); 3];
        scale_all(&mut c, 2.0);
        assert_eq!(c[2], ColorF::with_alpha(1.0, 0.5, 2.0, 2.0));
    }

    #[test]
    fn test_blend_all_matches_scalar() {
        let a = vec![ColorF::BLACK, ColorF::with_alpha(0.2, 0.4, 0.6, 0.0)];
        let b = vec![ColorF::WHITE, ColorF::with_alpha(1.0, 0.0, 0.5, 1.0)];

        let mut out = a.clone();
        blend_all(&mut out, &b, 0.3);
        for i in 0..2 {
            assert_abs_diff_eq!(out[i], ColorF::blend(a[i], b[i], 0.3), epsilon = 1e-6);
        }
    }
}
