//! Conversions to and from [`glam`] types.
//!
//! Enabled by the `glam` feature (default). Single-precision values map to
//! `Vec*`/`Mat*`/`Quat`, double precision to `DVec*`/`DMat*`/`DQuat`.
//!
//! glam matrices are column-major; the conversions transpose so that
//! `m[r][c]` here equals `glam_m.col(c)[r]` there. Quaternion components
//! are reordered from `(w, x, y, z)` to glam's `(x, y, z, w)`.
//!
//! ```rust
//! use vmath_linalg::{Matrix3F, Vector3F};
//!
//! let m = Matrix3F::rotation_z(0.5);
//! let v = Vector3F::new(1.0, 2.0, 3.0);
//!
//! let g: glam::Mat3 = m.into();
//! let gv = g * glam::Vec3::from(v);
//! assert!((Vector3F::from(gv) - m * v).length() < 1e-6);
//! ```

use crate::matrix2::Matrix2;
use crate::matrix3::Matrix3;
use crate::matrix4::Matrix4;
use crate::quaternion::Quaternion;
use crate::vector2::Vector2;
use crate::vector3::Vector3;
use crate::vector4::Vector4;

macro_rules! impl_glam_vector {
    ($ty:ident<$s:ty>, $glam:ty) => {
        impl From<$ty<$s>> for $glam {
            #[inline]
            fn from(v: $ty<$s>) -> Self {
                <$glam>::from_array(v.to_array())
            }
        }

        impl From<$glam> for $ty<$s> {
            #[inline]
            fn from(v: $glam) -> Self {
                $ty::from_array(v.to_array())
            }
        }
    };
}

impl_glam_vector!(Vector2<f32>, glam::Vec2);
impl_glam_vector!(Vector3<f32>, glam::Vec3);
impl_glam_vector!(Vector4<f32>, glam::Vec4);
impl_glam_vector!(Vector2<f64>, glam::DVec2);
impl_glam_vector!(Vector3<f64>, glam::DVec3);
impl_glam_vector!(Vector4<f64>, glam::DVec4);

macro_rules! impl_glam_matrix {
    ($ty:ident<$s:ty>, $glam:ty) => {
        impl From<$ty<$s>> for $glam {
            #[inline]
            fn from(m: $ty<$s>) -> Self {
                <$glam>::from_cols_array_2d(&m.transposed().m)
            }
        }

        impl From<$glam> for $ty<$s> {
            #[inline]
            fn from(m: $glam) -> Self {
                $ty::from_cols(m.to_cols_array_2d())
            }
        }
    };
}

impl_glam_matrix!(Matrix2<f32>, glam::Mat2);
impl_glam_matrix!(Matrix3<f32>, glam::Mat3);
impl_glam_matrix!(Matrix4<f32>, glam::Mat4);
impl_glam_matrix!(Matrix2<f64>, glam::DMat2);
impl_glam_matrix!(Matrix3<f64>, glam::DMat3);
impl_glam_matrix!(Matrix4<f64>, glam::DMat4);

macro_rules! impl_glam_quat {
    ($s:ty, $glam:ty) => {
        impl From<Quaternion<$s>> for $glam {
            #[inline]
            fn from(q: Quaternion<$s>) -> Self {
                <$glam>::from_xyzw(q.x, q.y, q.z, q.w)
            }
        }

        impl From<$glam> for Quaternion<$s> {
            #[inline]
            fn from(q: $glam) -> Self {
                let [x, y, z, w] = q.to_array();
                Quaternion::new(w, x, y, z)
            }
        }
    };
}

impl_glam_quat!(f32, glam::Quat);
impl_glam_quat!(f64, glam::DQuat);
