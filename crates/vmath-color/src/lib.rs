//! # vmath-color
//!
//! RGBA float color for the vmath value-type family.
//!
//! [`ColorF`] holds straight-alpha `f32` channels with clamping, RGB/HSV
//! conversion, intensity and linear blending. It converts to and from
//! [`Vector3F`](vmath_linalg::Vector3F) (RGB) and
//! [`Vector4F`](vmath_linalg::Vector4F) (RGBA).
//!
//! # Usage
//!
//! ```rust
//! use vmath_color::ColorF;
//!
//! let mut c: ColorF = "(1.2, 0.5, -0.1, 1)".parse()?;
//! c.clamp();
//! assert_eq!(c, ColorF::new(1.0, 0.5, 0.0));
//! assert_eq!(c.to_string(), "(1, 0.5, 0, 1)");
//! # Ok::<(), vmath_core::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`ColorF`]
//!
//! # Dependencies
//!
//! - [`vmath_core`] - Errors, text format
//! - [`vmath_linalg`] - Vector conversions
//! - [`wide`] - SIMD [`batch`] operations
//!
//! # Used By
//!
//! - `vmath-tests`, `vmath-bench`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;

pub mod batch;

pub use color::ColorF;
pub use vmath_core::{Error, Result};
