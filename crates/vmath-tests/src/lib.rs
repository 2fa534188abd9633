//! Integration tests for vmath crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between vmath crates and the serde/glam boundaries they expose.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use serde_json::json;
    use vmath_color::ColorF;
    use vmath_linalg::batch;
    use vmath_linalg::prelude::*;

    /// Serialize to JSON and back.
    fn json_roundtrip<T>(value: &T) -> T
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        let text = serde_json::to_string(value).expect("serialize");
        serde_json::from_str(&text).expect("deserialize")
    }

    #[test]
    fn test_serde_field_layout() {
        assert_eq!(
            serde_json::to_value(Vector3D::new(1.0, 2.0, 3.0)).unwrap(),
            json!({ "x": 1.0, "y": 2.0, "z": 3.0 })
        );
        assert_eq!(
            serde_json::to_value(QuaternionD::IDENTITY).unwrap(),
            json!({ "w": 1.0, "x": 0.0, "y": 0.0, "z": 0.0 })
        );
        assert_eq!(
            serde_json::to_value(ComplexD::new(0.5, -1.0)).unwrap(),
            json!({ "real": 0.5, "imaginary": -1.0 })
        );
        assert_eq!(
            serde_json::to_value(Matrix2D::from_rows([[1.0, 2.0], [3.0, 4.0]])).unwrap(),
            json!({ "m": [[1.0, 2.0], [3.0, 4.0]] })
        );
        assert_eq!(
            serde_json::to_value(ColorF::with_alpha(1.0, 0.5, 0.25, 0.0)).unwrap(),
            json!({ "red": 1.0, "green": 0.5, "blue": 0.25, "alpha": 0.0 })
        );
    }

    #[test]
    fn test_serde_roundtrip_all_types() {
        let v2 = Vector2F::new(0.5, -7.25);
        let v4 = Vector4D::new(1e-300, 2.0, -3.5, 1e300);
        let m3 = Matrix3F::rotation_y(0.7);
        let m4 = Matrix4D::translation(Vector3D::new(1.0, 2.0, 3.0)) * Matrix4D::rotation_x(0.3);
        let q = QuaternionF::from_axis_angle(Vector3F::Z_AXIS, 1.2);
        let c = ComplexD::new(std::f64::consts::PI, -std::f64::consts::E);
        let color = ColorF::with_alpha(0.1, 0.2, 0.3, 0.4);

        // Shortest float text round-trips to within an ulp.
        assert_eq!(json_roundtrip(&v2), v2);
        assert_relative_eq!(json_roundtrip(&v4), v4, max_relative = 1e-15);
        assert_relative_eq!(json_roundtrip(&m3), m3, max_relative = 1e-6);
        assert_relative_eq!(json_roundtrip(&m4), m4, max_relative = 1e-15);
        assert_relative_eq!(json_roundtrip(&q), q, max_relative = 1e-6);
        assert_relative_eq!(json_roundtrip(&c), c, max_relative = 1e-15);
        assert_relative_eq!(json_roundtrip(&color), color, max_relative = 1e-6);
    }

    #[test]
    fn test_serde_rejects_missing_field() {
        let r: std::result::Result<Vector3D, _> = serde_json::from_str(r#"{ "x": 1.0, "y": 2.0 }"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_text_roundtrip() {
        let v = Vector3D::new(1.5, -2.0, 0.125);
        assert_eq!(v.to_string().parse::<Vector3D>().unwrap(), v);

        let q = QuaternionD::new(0.5, -0.5, 0.25, 1.0);
        assert_eq!(q.to_string().parse::<QuaternionD>().unwrap(), q);

        let c = ComplexF::new(3.0, -4.0);
        assert_eq!(c.to_string(), "(3, -4)");
        assert_eq!(c.to_string().parse::<ComplexF>().unwrap(), c);

        let m = Matrix2D::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.to_string(), "|1, 2|\n|3, 4|\n");
        assert_eq!(m.to_string().parse::<Matrix2D>().unwrap(), m);

        let err = "(1, 2".parse::<Vector2D>().unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_basic_scenarios() {
        assert_eq!(Vector2D::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Matrix3D::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix3D::ZERO.determinant(), 0.0);
        assert_eq!(ComplexD::new(3.0, 4.0).modulus(), 5.0);
        assert!(
            ComplexD::new(1.0, 1.0)
                .try_div(ComplexD::ZERO)
                .unwrap_err()
                .is_division_by_zero()
        );
        assert_eq!(QuaternionD::from_axis_angle(Vector3D::X_AXIS, 0.0), QuaternionD::IDENTITY);
    }

    #[test]
    fn test_normalize_property() {
        for i in 1..20 {
            let f = i as f64;
            let mut v = Vector3D::new(f, -2.0 * f, 0.5);
            v.normalize().unwrap();
            assert!((v.length() - 1.0).abs() < 1e-14);
        }
        let mut zero = Vector4F::ZERO;
        assert!(zero.normalize().unwrap_err().is_division_by_zero());
        assert_eq!(zero, Vector4F::ZERO);
    }

    #[test]
    fn test_quaternion_inverse_in_place() {
        let q = QuaternionD::new(1.0, 2.0, -3.0, 0.5);
        let mut inv = q;
        inv.inverse().unwrap();
        assert_abs_diff_eq!(q * inv, QuaternionD::IDENTITY, epsilon = 1e-12);
        assert_abs_diff_eq!(inv * q, QuaternionD::IDENTITY, epsilon = 1e-12);

        let mut zero = QuaternionD::ZERO;
        assert!(zero.inverse().unwrap_err().is_not_invertible());
    }

    #[test]
    fn test_rotation_paths_agree() {
        // Quaternion rotation, its matrix, and glam must all agree.
        let axis = Vector3D::new(1.0, 1.0, 0.0).normalized().unwrap();
        let q = QuaternionD::from_axis_angle(axis, 0.9);
        let m = q.to_matrix();
        let v = Vector3D::new(-1.0, 0.5, 2.0);

        let by_quat = q.rotate(v).unwrap();
        let by_matrix = m.transform_point(v);
        let by_glam = Vector3D::from(glam::DQuat::from(q) * glam::DVec3::from(v));

        assert_abs_diff_eq!(by_quat, by_matrix, epsilon = 1e-12);
        assert_abs_diff_eq!(by_quat, by_glam, epsilon = 1e-12);
        assert_relative_eq!(by_quat.length(), v.length(), epsilon = 1e-12);

        let back = QuaternionD::from_rotation_matrix(&m.to_matrix3());
        assert!(back.approx_eq(&q, 1e-12) || back.approx_eq(&-q, 1e-12));
    }

    #[test]
    fn test_inverse_agrees_with_glam() {
        let m = Matrix4D::translation(Vector3D::new(3.0, -1.0, 2.0))
            * Matrix4D::rotation_z(0.4)
            * Matrix4D::scale(Vector3D::new(2.0, 2.0, 0.5));
        let ours = m.try_inverse().unwrap();
        let theirs = Matrix4D::from(glam::DMat4::from(m).inverse());
        assert_abs_diff_eq!(ours, theirs, epsilon = 1e-12);
        assert_abs_diff_eq!(m * ours, Matrix4D::IDENTITY, epsilon = 1e-12);

        assert!(Matrix4D::ZERO.try_inverse().unwrap_err().is_not_invertible());
    }

    #[test]
    fn test_transpose_involution() {
        let m = Matrix4F::from_slice(&(0..16).map(|i| i as f32).collect::<Vec<_>>()).unwrap();
        assert_eq!(m.transposed().transposed(), m);
        assert_eq!(m.transposed().get_at(0, 3).unwrap(), 12.0);
    }

    #[test]
    fn test_batch_matches_single() {
        let m = QuaternionF::from_axis_angle(Vector3F::Y_AXIS, 0.5).to_matrix()
            * Matrix4F::translation(Vector3F::new(0.0, 0.0, -5.0));
        let src: Vec<Vector3F> = (0..1000).map(|i| Vector3F::splat(i as f32 * 0.01)).collect();

        let mut dst = src.clone();
        batch::transform_points(&m, &mut dst);
        for (d, s) in dst.iter().zip(&src) {
            assert_eq!(*d, m.transform_point(*s));
        }
    }

    #[test]
    fn test_color_vector_bridge() {
        // Transform a color as a Vector4 and clamp the result.
        let c = ColorF::with_alpha(0.5, 0.25, 1.0, 1.0);
        let m = Matrix4F::scale(Vector3F::new(3.0, 1.0, 0.5));
        let mut out = ColorF::from(m * Vector4F::from(c));
        assert_eq!(out, ColorF::with_alpha(1.5, 0.25, 0.5, 1.0));

        out.clamp();
        assert_eq!(out, ColorF::with_alpha(1.0, 0.25, 0.5, 1.0));
        assert_eq!(Vector3F::from(out), Vector3F::new(1.0, 0.25, 0.5));

        let mut colors = vec![ColorF::from(m * Vector4F::from(c)); 9];
        vmath_color::batch::clamp_all(&mut colors);
        assert!(colors.iter().all(|x| *x == out));
    }

    #[test]
    fn test_color_hsv_across_hues() {
        for step in 0..12 {
            let h = step as f32 * 30.0;
            let c = ColorF::from_hsv(h, 0.8, 0.6);
            let (h2, s2, v2) = c.to_hsv();
            assert_abs_diff_eq!(h2, h, epsilon = 1e-3);
            assert_abs_diff_eq!(s2, 0.8, epsilon = 1e-5);
            assert_abs_diff_eq!(v2, 0.6, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_hash_consistency() {
        let mut set = HashSet::new();
        set.insert(Vector3D::new(0.0, 1.0, 2.0));
        assert!(set.contains(&Vector3D::new(-0.0, 1.0, 2.0)));

        let mut quats = HashSet::new();
        quats.insert(QuaternionF::IDENTITY);
        quats.insert(QuaternionF::from_axis_angle(Vector3F::X_AXIS, 0.0));
        assert_eq!(quats.len(), 1);

        let mut mats = HashSet::new();
        mats.insert(Matrix3D::IDENTITY);
        mats.insert(Matrix3D::default());
        assert_eq!(mats.len(), 1);
    }

    #[test]
    fn test_complex_identities() {
        let z = ComplexD::new(0.3, -1.2);
        assert_abs_diff_eq!(z.exp().ln(), z, epsilon = 1e-12);
        assert_abs_diff_eq!(z.sqrt() * z.sqrt(), z, epsilon = 1e-12);

        let s = z.sin();
        let c = z.cos();
        assert_abs_diff_eq!(s * s + c * c, ComplexD::ONE, epsilon = 1e-12);
        assert_abs_diff_eq!(z.tan(), s.try_div(c).unwrap(), epsilon = 1e-12);

        let q = ComplexD::try_scalar_div(2.0, ComplexD::new(1.0, 1.0)).unwrap();
        assert_abs_diff_eq!(q, ComplexD::new(1.0, -1.0), epsilon = 1e-15);
    }
}
