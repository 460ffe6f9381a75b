use std::f64::consts::TAU;

use crate::error::{InputError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain, DerivativeOrder};

/// A circular helix in 3D space, parameterized over `[0, 1]`.
///
/// `P(t) = center + r*cos(θ)*ref_dir + r*sin(θ)*binormal + pitch*θ*axis`
/// with `θ = 2π * turns * t` and `binormal = axis x ref_dir`. A helix with
/// zero pitch and one turn is a full circle.
///
/// Curvature is `r / (r² + pitch²)` and torsion is `pitch / (r² + pitch²)`,
/// both constant along the curve.
#[derive(Debug, Clone)]
pub struct Helix {
    center: Point3,
    radius: f64,
    axis: Vector3,
    ref_dir: Vector3,
    pitch: f64,
    turns: f64,
}

impl Helix {
    /// Creates a new helix.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the base circle
    /// * `radius` - Radius (must be positive)
    /// * `axis` - Axis direction; the helix rises along it
    /// * `ref_dir` - Reference direction for angle = 0 (must be perpendicular to axis)
    /// * `pitch` - Rise along the axis per radian of rotation
    /// * `turns` - Number of revolutions over the parameter domain (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or turn count is non-positive, either
    /// direction is zero-length, or the reference direction is not
    /// perpendicular to the axis.
    pub fn new(
        center: Point3,
        radius: f64,
        axis: Vector3,
        ref_dir: Vector3,
        pitch: f64,
        turns: f64,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(InputError::Degenerate("helix radius must be positive".into()).into());
        }
        if turns < TOLERANCE {
            return Err(
                InputError::Degenerate("helix must make a positive number of turns".into()).into(),
            );
        }
        if !pitch.is_finite() {
            return Err(InputError::Degenerate("helix pitch must be finite".into()).into());
        }

        let axis_len = axis.norm();
        if axis_len < TOLERANCE {
            return Err(InputError::ZeroVector.into());
        }
        let axis = axis / axis_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(InputError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if axis.dot(&ref_dir).abs() > TOLERANCE {
            return Err(InputError::Degenerate(
                "reference direction must be perpendicular to axis".into(),
            )
            .into());
        }

        Ok(Self {
            center,
            radius,
            axis,
            ref_dir,
            pitch,
            turns,
        })
    }

    /// A full unit circle in the XY plane centered at the origin.
    #[must_use]
    pub fn unit_circle() -> Self {
        Self {
            center: Point3::origin(),
            radius: 1.0,
            axis: Vector3::z(),
            ref_dir: Vector3::x(),
            pitch: 0.0,
            turns: 1.0,
        }
    }

    /// Returns the radius of the base circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the rise per radian.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Returns the number of revolutions.
    #[must_use]
    pub fn turns(&self) -> f64 {
        self.turns
    }

    /// Analytic curvature, constant along the helix.
    #[must_use]
    pub fn analytic_curvature(&self) -> f64 {
        self.radius / (self.radius * self.radius + self.pitch * self.pitch)
    }

    /// Analytic torsion, constant along the helix.
    #[must_use]
    pub fn analytic_torsion(&self) -> f64 {
        self.pitch / (self.radius * self.radius + self.pitch * self.pitch)
    }

    /// Returns `count` points sampled at uniform parameter spacing, suitable
    /// as control points for an interpolated curve.
    #[must_use]
    pub fn sample(&self, count: usize) -> Vec<Point3> {
        self.domain()
            .linspace(count)
            .into_iter()
            .map(|t| self.evaluate(t))
            .collect()
    }

    fn side_dir(&self) -> Vector3 {
        self.axis.cross(&self.ref_dir)
    }

    fn angular_rate(&self) -> f64 {
        TAU * self.turns
    }
}

impl Curve for Helix {
    fn evaluate(&self, t: f64) -> Point3 {
        self.center + self.derivative(t, DerivativeOrder::Position)
    }

    fn derivative(&self, t: f64, order: DerivativeOrder) -> Vector3 {
        let w = self.angular_rate();
        let theta = w * t;
        let (s, c) = theta.sin_cos();
        let r = self.radius;
        let (x, y, z) = match order {
            DerivativeOrder::Position => (r * c, r * s, self.pitch * theta),
            DerivativeOrder::First => (-r * w * s, r * w * c, self.pitch * w),
            DerivativeOrder::Second => (-r * w * w * c, -r * w * w * s, 0.0),
            DerivativeOrder::Third => (r * w * w * w * s, -r * w * w * w * c, 0.0),
        };
        self.ref_dir * x + self.side_dir() * y + self.axis * z
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        self.pitch.abs() < TOLERANCE && (self.turns - self.turns.round()).abs() < TOLERANCE
    }
}
