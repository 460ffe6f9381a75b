use tracing::{debug, warn};

use crate::arc_length::ArcLengthTable;
use crate::error::{InputError, Result};
use crate::interpolation::CubicSpline;
use crate::math::{Point3, Vector3, DEFAULT_ARC_LENGTH_SAMPLES};

use super::{Curve, CurveDomain, DerivativeOrder};

/// Construction parameters for [`SplineCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplineCurveParams {
    /// Number of uniform samples in the arc-length table.
    pub arc_length_samples: usize,
}

impl Default for SplineCurveParams {
    fn default() -> Self {
        Self {
            arc_length_samples: DEFAULT_ARC_LENGTH_SAMPLES,
        }
    }
}

/// A smooth curve interpolating an ordered set of control points.
///
/// Control point `i` of `N` sits at parameter `t_i = i / (N - 1)`. Each
/// coordinate is fitted with its own not-a-knot [`CubicSpline`]. All state
/// is built once by the constructor and never mutated afterward, so a
/// curve can be shared across threads and queried concurrently.
///
/// Every query clamps its parameter to `[0, 1]` first; nothing is
/// extrapolated past the end control points.
#[derive(Debug, Clone)]
pub struct SplineCurve {
    points: Vec<Point3>,
    nodes: Vec<f64>,
    interpolant: Interpolant,
    arc_length: ArcLengthTable,
    params: SplineCurveParams,
}

impl SplineCurve {
    /// Fits a curve through `points` with default parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given or any
    /// coordinate is non-finite.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        Self::with_params(points, SplineCurveParams::default())
    }

    /// Fits a curve through `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given, any coordinate
    /// is non-finite, the arc-length resolution is below two samples, or the
    /// coordinates are so large that the fitted curve overflows.
    pub fn with_params(points: Vec<Point3>, params: SplineCurveParams) -> Result<Self> {
        if let Err(err) = validate_points(&points) {
            warn!(%err, "rejected control points");
            return Err(err.into());
        }

        let nodes = CurveDomain::unit().linspace(points.len());
        let axis = |k: usize| -> Result<CubicSpline> {
            let values: Vec<f64> = points.iter().map(|p| p[k]).collect();
            CubicSpline::new(&nodes, &values)
        };
        let interpolant = Interpolant {
            axes: [axis(0)?, axis(1)?, axis(2)?],
        };
        let arc_length = ArcLengthTable::build(&interpolant, params.arc_length_samples)?;
        if !arc_length.total_length().is_finite() {
            let err = InputError::Degenerate("curve length overflowed".into());
            warn!(%err, "rejected control points");
            return Err(err.into());
        }

        let curve = Self {
            points,
            nodes,
            interpolant,
            arc_length,
            params,
        };

        debug!(
            points = curve.points.len(),
            total_length = curve.total_length(),
            "constructed spline curve"
        );
        Ok(curve)
    }

    /// Returns the control points the curve passes through.
    #[must_use]
    pub fn control_points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the parameter of each control point.
    #[must_use]
    pub fn node_parameters(&self) -> &[f64] {
        &self.nodes
    }

    /// Returns the construction parameters.
    #[must_use]
    pub fn params(&self) -> SplineCurveParams {
        self.params
    }

    /// Returns the precomputed arc-length table.
    #[must_use]
    pub fn arc_length_table(&self) -> &ArcLengthTable {
        &self.arc_length
    }

    /// Total curve length as measured by the arc-length table.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.arc_length.total_length()
    }

    /// Approximate length between two parameters; see
    /// [`ArcLengthTable::length_between`].
    #[must_use]
    pub fn arc_length(&self, t_start: f64, t_end: f64) -> f64 {
        self.arc_length.length_between(t_start, t_end)
    }

    /// Positions at every parameter in `ts`.
    #[must_use]
    pub fn positions(&self, ts: &[f64]) -> Vec<Point3> {
        self.sample_with(ts, |c, t| c.evaluate(t))
    }

    /// Applies any per-parameter query to every value in `ts`.
    ///
    /// ```
    /// use spacecurve::{DifferentialGeometry, SplineCurve};
    /// use spacecurve::math::Point3;
    ///
    /// let curve = SplineCurve::new(vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 1.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    /// ])
    /// .unwrap();
    /// let kappa = curve.sample_with(&[0.0, 0.5, 1.0], |c, t| c.curvature(t));
    /// assert_eq!(kappa.len(), 3);
    /// ```
    #[must_use]
    pub fn sample_with<T, F>(&self, ts: &[f64], query: F) -> Vec<T>
    where
        F: Fn(&Self, f64) -> T,
    {
        ts.iter().map(|&t| query(self, t)).collect()
    }
}

/// The three per-axis splines combined into one vector-valued curve.
#[derive(Debug, Clone)]
struct Interpolant {
    axes: [CubicSpline; 3],
}

impl Curve for Interpolant {
    fn evaluate(&self, t: f64) -> Point3 {
        Point3::from(self.derivative(t, DerivativeOrder::Position))
    }

    fn derivative(&self, t: f64, order: DerivativeOrder) -> Vector3 {
        let t = CurveDomain::unit().clamp(t);
        Vector3::new(
            self.axes[0].evaluate(t, order),
            self.axes[1].evaluate(t, order),
            self.axes[2].evaluate(t, order),
        )
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        false
    }
}

impl Curve for SplineCurve {
    fn evaluate(&self, t: f64) -> Point3 {
        self.interpolant.evaluate(t)
    }

    fn derivative(&self, t: f64, order: DerivativeOrder) -> Vector3 {
        self.interpolant.derivative(t, order)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => (a - b).norm() < crate::math::TOLERANCE,
            _ => false,
        }
    }
}

fn validate_points(points: &[Point3]) -> std::result::Result<(), InputError> {
    if points.len() < 2 {
        return Err(InputError::TooFewPoints {
            count: points.len(),
            min: 2,
        });
    }
    for (index, p) in points.iter().enumerate() {
        if let Some(axis) = p.coords.iter().position(|c| !c.is_finite()) {
            return Err(InputError::NonFinite { index, axis });
        }
    }
    Ok(())
}
