mod helix;
mod line;
mod spline_curve;

pub use helix::Helix;
pub use line::Line;
pub use spline_curve::{SplineCurve, SplineCurveParams};

use crate::error::{CurveError, InputError};
use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The normalized domain `[0, 1]` shared by all interpolated curves.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Length of the parameter range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }

    /// Returns whether `t` lies inside the closed range.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }

    /// Clamps `t` into the domain. `NaN` passes through unchanged.
    #[must_use]
    pub fn clamp(&self, t: f64) -> f64 {
        t.clamp(self.t_min, self.t_max)
    }

    /// Returns `count` uniformly spaced parameters covering the domain,
    /// both ends included.
    #[must_use]
    pub fn linspace(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.t_min],
            _ => {
                #[allow(clippy::cast_precision_loss)]
                let last = (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        if i == count - 1 {
                            self.t_max
                        } else {
                            #[allow(clippy::cast_precision_loss)]
                            let frac = i as f64 / last;
                            self.t_min + frac * self.span()
                        }
                    })
                    .collect()
            }
        }
    }
}

/// Which derivative of the position to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivativeOrder {
    /// The position itself.
    Position,
    /// Velocity, `dP/dt`.
    First,
    /// Acceleration, `d²P/dt²`.
    Second,
    /// Jerk, `d³P/dt³`.
    Third,
}

impl DerivativeOrder {
    /// Numeric order (0..=3).
    #[must_use]
    pub fn order(self) -> usize {
        match self {
            Self::Position => 0,
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

impl TryFrom<usize> for DerivativeOrder {
    type Error = CurveError;

    fn try_from(order: usize) -> Result<Self, Self::Error> {
        match order {
            0 => Ok(Self::Position),
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            _ => Err(InputError::InvalidDerivativeOrder(order).into()),
        }
    }
}

/// Trait for parametric curves in 3D space with up to three derivatives.
///
/// Evaluation is infallible: implementors decide what happens outside
/// [`domain`](Curve::domain) (clamping or extrapolation) but must always
/// return a value.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// Evaluates a derivative of the curve at parameter `t`.
    ///
    /// [`DerivativeOrder::Position`] returns the position as a vector from
    /// the origin.
    fn derivative(&self, t: f64, order: DerivativeOrder) -> Vector3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;

    /// First derivative, `dP/dt`.
    fn velocity(&self, t: f64) -> Vector3 {
        self.derivative(t, DerivativeOrder::First)
    }

    /// Second derivative, `d²P/dt²`.
    fn acceleration(&self, t: f64) -> Vector3 {
        self.derivative(t, DerivativeOrder::Second)
    }

    /// Third derivative, `d³P/dt³`.
    fn jerk(&self, t: f64) -> Vector3 {
        self.derivative(t, DerivativeOrder::Third)
    }
}
