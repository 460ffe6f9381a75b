//! Frenet frame, curvature, torsion and kinematic quantities.
//!
//! Every quantity is derived from the first three derivatives of a
//! [`Curve`]. Degenerate geometry (zero velocity, straight segments,
//! parallel velocity and acceleration) never produces an error or a
//! non-finite value: denominators carry a [`TOLERANCE`] floor instead.

mod frame;

pub use frame::{FrenetFrame, OsculatingCircle};

use crate::geometry::Curve;
use crate::math::{floored_normalize, guarded_normalize, Vector3, FRENET_STEP, TOLERANCE};

/// Differential-geometric queries available on every [`Curve`].
pub trait DifferentialGeometry: Curve {
    /// Magnitude of the velocity, `|dP/dt|`.
    fn speed(&self, t: f64) -> f64 {
        self.velocity(t).norm()
    }

    /// Unit tangent `v / |v|`.
    ///
    /// When `|v| < TOLERANCE` the raw velocity is returned unnormalized.
    fn tangent(&self, t: f64) -> Vector3 {
        guarded_normalize(&self.velocity(t))
    }

    /// Curvature `|v x a| / (|v|³ + TOLERANCE)`. Never negative.
    fn curvature(&self, t: f64) -> f64 {
        let v = self.velocity(t);
        let a = self.acceleration(t);
        v.cross(&a).norm() / (v.norm().powi(3) + TOLERANCE)
    }

    /// `1 / curvature`, or `f64::INFINITY` where the curvature does not
    /// exceed `TOLERANCE`.
    fn radius_of_curvature(&self, t: f64) -> f64 {
        let kappa = self.curvature(t);
        if kappa > TOLERANCE {
            1.0 / kappa
        } else {
            f64::INFINITY
        }
    }

    /// Torsion `((v x a) · j) / (|v x a|² + TOLERANCE)`.
    fn torsion(&self, t: f64) -> f64 {
        let cross = self.velocity(t).cross(&self.acceleration(t));
        cross.dot(&self.jerk(t)) / (cross.norm_squared() + TOLERANCE)
    }

    /// Tangent, normal and binormal at `t`.
    ///
    /// The normal is the finite difference of the unit tangent over
    /// [`FRENET_STEP`], divided by its norm plus `TOLERANCE`. The difference
    /// is taken forward, or backward when `t + FRENET_STEP` would leave the
    /// domain. `t` is clamped to the domain first.
    fn frenet_frame(&self, t: f64) -> FrenetFrame {
        let domain = self.domain();
        let t = domain.clamp(t);
        let tangent = self.tangent(t);

        let ahead = t + FRENET_STEP;
        let dt_dt = if ahead <= domain.t_max {
            (self.tangent(ahead) - tangent) / FRENET_STEP
        } else {
            (tangent - self.tangent(t - FRENET_STEP)) / FRENET_STEP
        };

        let normal = floored_normalize(&dt_dt);
        let binormal = floored_normalize(&tangent.cross(&normal));
        FrenetFrame {
            tangent,
            normal,
            binormal,
        }
    }

    /// Tangent component of [`frenet_frame`](Self::frenet_frame).
    fn tangent_vector(&self, t: f64) -> Vector3 {
        self.frenet_frame(t).tangent
    }

    /// Principal normal component of [`frenet_frame`](Self::frenet_frame).
    fn normal(&self, t: f64) -> Vector3 {
        self.frenet_frame(t).normal
    }

    /// Binormal component of [`frenet_frame`](Self::frenet_frame).
    fn binormal(&self, t: f64) -> Vector3 {
        self.frenet_frame(t).binormal
    }

    /// Frames at every parameter in `ts`.
    fn frenet_frames(&self, ts: &[f64]) -> Vec<FrenetFrame> {
        ts.iter().map(|&t| self.frenet_frame(t)).collect()
    }

    /// Angular velocity `(v x a) / (|v|² + TOLERANCE)`.
    fn angular_velocity(&self, t: f64) -> Vector3 {
        let v = self.velocity(t);
        v.cross(&self.acceleration(t)) / (v.norm_squared() + TOLERANCE)
    }

    /// Tangential acceleration `(v · a) / (|v| + TOLERANCE)`.
    fn tangential_acceleration(&self, t: f64) -> f64 {
        let v = self.velocity(t);
        v.dot(&self.acceleration(t)) / (v.norm() + TOLERANCE)
    }

    /// Normal acceleration `|v x a| / (|v|² + TOLERANCE)`.
    fn normal_acceleration(&self, t: f64) -> f64 {
        let v = self.velocity(t);
        v.cross(&self.acceleration(t)).norm() / (v.norm_squared() + TOLERANCE)
    }

    /// Osculating circle at `t`, or `None` where the curve is locally
    /// straight (radius infinite or above `max_radius`).
    ///
    /// Callers drawing circles typically pass
    /// [`STRAIGHT_RADIUS_THRESHOLD`](crate::math::STRAIGHT_RADIUS_THRESHOLD).
    fn osculating_circle(&self, t: f64, max_radius: f64) -> Option<OsculatingCircle> {
        let radius = self.radius_of_curvature(t);
        if !radius.is_finite() || radius > max_radius {
            return None;
        }
        let frame = self.frenet_frame(t);
        Some(OsculatingCircle {
            center: self.evaluate(t) + frame.normal * radius,
            radius,
            normal: frame.normal,
            tangent: frame.tangent,
        })
    }
}

impl<C: Curve + ?Sized> DifferentialGeometry for C {}
