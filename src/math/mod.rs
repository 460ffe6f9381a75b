/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global tolerance used as the denominator floor in every differential
/// quantity and as the degeneracy threshold for vector normalization.
pub const TOLERANCE: f64 = 1e-10;

/// Parameter step used for the finite-difference derivative of the
/// unit tangent when computing the principal normal.
pub const FRENET_STEP: f64 = 1e-6;

/// Number of uniform samples in an arc-length table unless configured.
pub const DEFAULT_ARC_LENGTH_SAMPLES: usize = 1000;

/// Radius above which consumers should treat a curve as locally straight.
pub const STRAIGHT_RADIUS_THRESHOLD: f64 = 100.0;

/// Normalizes `v`, or returns it unchanged when its norm is below
/// [`TOLERANCE`].
///
/// Near-zero vectors are divided by 1 rather than by their own tiny norm,
/// so the result stays small and finite instead of blowing up.
#[must_use]
pub fn guarded_normalize(v: &Vector3) -> Vector3 {
    let len = v.norm();
    if len < TOLERANCE {
        *v
    } else {
        v / len
    }
}

/// Divides `v` by `|v| + TOLERANCE`.
///
/// Always finite; the zero vector maps to the zero vector.
#[must_use]
pub fn floored_normalize(v: &Vector3) -> Vector3 {
    v / (v.norm() + TOLERANCE)
}
