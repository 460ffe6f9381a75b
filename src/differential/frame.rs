use std::f64::consts::TAU;

use crate::math::{Matrix3, Point3, Vector3};

/// A local orthonormal frame at a point on a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrenetFrame {
    /// Unit tangent, the direction of motion.
    pub tangent: Vector3,
    /// Principal normal, pointing toward the center of curvature.
    pub normal: Vector3,
    /// Binormal, `tangent x normal`.
    pub binormal: Vector3,
}

impl FrenetFrame {
    /// Rotation matrix with columns `(T, N, B)`.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix3 {
        Matrix3::from_columns(&[self.tangent, self.normal, self.binormal])
    }
}

/// The circle of best second-order contact at a curve point.
///
/// Lies in the osculating plane spanned by the tangent and normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OsculatingCircle {
    /// Center of curvature, `P + R * N`.
    pub center: Point3,
    /// Radius of curvature.
    pub radius: f64,
    /// Principal normal; the center lies at `P + radius * normal`.
    pub normal: Vector3,
    /// Tangent of the curve at the contact point.
    pub tangent: Vector3,
}

impl OsculatingCircle {
    /// Returns `segments` points evenly spaced around the circle, starting
    /// at the contact point.
    #[must_use]
    pub fn points(&self, segments: usize) -> Vec<Point3> {
        (0..segments)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let phi = TAU * i as f64 / segments as f64;
                let (s, c) = phi.sin_cos();
                self.center + (self.normal * -c + self.tangent * s) * self.radius
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_columns_follow_frame_order() {
        let f = FrenetFrame {
            tangent: Vector3::x(),
            normal: Vector3::y(),
            binormal: Vector3::z(),
        };
        assert_eq!(f.to_matrix(), Matrix3::identity());
    }

    #[test]
    fn circle_points_start_at_contact() {
        let c = OsculatingCircle {
            center: Point3::new(0.0, 2.0, 0.0),
            radius: 2.0,
            normal: Vector3::y(),
            tangent: Vector3::x(),
        };
        let pts = c.points(16);
        assert_eq!(pts.len(), 16);
        assert!((pts[0] - Point3::origin()).norm() < 1e-12);
        for p in &pts {
            assert!(((p - c.center).norm() - 2.0).abs() < 1e-12);
        }
    }
}
