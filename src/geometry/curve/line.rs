use crate::error::{InputError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain, DerivativeOrder};

/// A straight segment between two points.
///
/// The parametric form is: `P(t) = start + t * (end - start)` for
/// `t` in `[0, 1]`. Velocity is constant and all higher derivatives vanish.
#[derive(Debug, Clone)]
pub struct Line {
    start: Point3,
    chord: Vector3,
}

impl Line {
    /// Creates a new segment from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        let chord = end - start;
        if chord.norm() < TOLERANCE {
            return Err(InputError::ZeroVector.into());
        }
        Ok(Self { start, chord })
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> Point3 {
        self.start + self.chord
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.chord.norm()
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Point3 {
        self.start + self.chord * t
    }

    fn derivative(&self, t: f64, order: DerivativeOrder) -> Vector3 {
        match order {
            DerivativeOrder::Position => self.evaluate(t).coords,
            DerivativeOrder::First => self.chord,
            DerivativeOrder::Second | DerivativeOrder::Third => Vector3::zeros(),
        }
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        false
    }
}
