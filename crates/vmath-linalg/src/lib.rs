//! # vmath-linalg
//!
//! Linear-algebra value types for 3D rendering.
//!
//! This crate provides small, `Copy` value types in single and double
//! precision:
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - vectors
//! - [`Matrix2`], [`Matrix3`], [`Matrix4`] - square matrices
//! - [`Quaternion`] - rotations
//! - [`Complex`] - complex numbers
//!
//! Every type is generic over [`Scalar`] and aliased per precision with an
//! `F` (`f32`) or `D` (`f64`) suffix: `Vector3F`, `Matrix4D`, `QuaternionD`.
//!
//! # Design
//!
//! All matrices use **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Total operations are `std::ops` operators. Operations that can fail
//! (normalization, inversion, quaternion/complex division, checked
//! indexing, parsing) are named methods returning [`Result`].
//!
//! # Usage
//!
//! ```rust
//! use vmath_linalg::prelude::*;
//!
//! let axis = Vector3D::new(0.0, 0.0, 2.0).normalized()?;
//! let spin = QuaternionD::from_axis_angle(axis, std::f64::consts::PI);
//! let m = Matrix4D::translation(Vector3D::X_AXIS) * spin.to_matrix();
//!
//! let p = m.transform_point(Vector3D::X_AXIS);
//! assert!(p.approx_eq(&Vector3D::ZERO, 1e-12));
//! # Ok::<(), vmath_core::Error>(())
//! ```
//!
//! # Features
//!
//! - `glam` (default) - `From` conversions to and from [`glam`] types
//! - `rayon` (default) - parallel [`batch`] operations
//! - `serde` - `Serialize`/`Deserialize` for every type
//!
//! # Dependencies
//!
//! - [`vmath_core`] - Scalar trait, errors, text format
//! - [`approx`] - Approximate equality traits
//! - [`tracing`] - Diagnostics on failure paths
//!
//! # Used By
//!
//! - `vmath-color` - Color/vector conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod macros;

mod complex;
mod grid;
mod matrix2;
mod matrix3;
mod matrix4;
mod quaternion;
mod vector2;
mod vector3;
mod vector4;

pub mod batch;
#[cfg(feature = "glam")]
mod interop;

pub use complex::*;
pub use matrix2::*;
pub use matrix3::*;
pub use matrix4::*;
pub use quaternion::*;
pub use vector2::*;
pub use vector3::*;
pub use vector4::*;

pub use vmath_core::{Error, Result, Scalar};

/// Common imports: every value type, its precision aliases and the error type.
pub mod prelude {
    pub use crate::{
        Complex, ComplexD, ComplexF, Matrix2, Matrix2D, Matrix2F, Matrix3, Matrix3D, Matrix3F,
        Matrix4, Matrix4D, Matrix4F, Quaternion, QuaternionD, QuaternionF, Vector2, Vector2D,
        Vector2F, Vector3, Vector3D, Vector3F, Vector4, Vector4D, Vector4F,
    };
    pub use vmath_core::{Error, Result, Scalar};
}
