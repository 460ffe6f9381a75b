use tracing::trace;

use crate::error::{InputError, Result};
use crate::geometry::DerivativeOrder;

/// One cubic piece `a + b*dx + c*dx² + d*dx³` with `dx = x - lhs_x`.
#[derive(Debug, Clone, Copy)]
struct Segment {
    lhs_x: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Segment {
    fn evaluate(&self, x: f64, order: DerivativeOrder) -> f64 {
        let dx = x - self.lhs_x;
        match order {
            DerivativeOrder::Position => {
                f64::mul_add(f64::mul_add(f64::mul_add(self.d, dx, self.c), dx, self.b), dx, self.a)
            }
            DerivativeOrder::First => {
                f64::mul_add(f64::mul_add(3.0 * self.d, dx, 2.0 * self.c), dx, self.b)
            }
            DerivativeOrder::Second => f64::mul_add(6.0 * self.d, dx, 2.0 * self.c),
            DerivativeOrder::Third => 6.0 * self.d,
        }
    }
}

/// A one-dimensional C² cubic interpolating spline with not-a-knot ends.
///
/// The not-a-knot condition makes the third derivative continuous across the
/// first and last interior knots, so no curvature is prescribed at the ends.
/// With fewer than four knots the condition degenerates: two knots give the
/// straight line through them, three knots give the single parabola through
/// all three.
///
/// Evaluation outside `[knots[0], knots[n]]` extrapolates with the end
/// polynomials. At an interior knot the segment starting at that knot is
/// used, so the (discontinuous) third derivative is right-continuous there;
/// at the final knot the last segment is used.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Vec<f64>,
    segments: Vec<Segment>,
}

impl CubicSpline {
    /// Fits the spline through `(knots[i], values[i])`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two knots are given, the slices differ
    /// in length, any knot or value is non-finite, or the knots are not
    /// strictly increasing.
    pub fn new(knots: &[f64], values: &[f64]) -> Result<Self> {
        validate(knots, values)?;

        let h: Vec<f64> = knots.windows(2).map(|w| w[1] - w[0]).collect();
        let moments = solve_moments(&h, values);
        let segments = segments_from_moments(knots, values, &h, &moments);
        trace!(knots = knots.len(), "fitted not-a-knot cubic spline");

        Ok(Self {
            knots: knots.to_vec(),
            segments,
        })
    }

    /// Returns the knot locations.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Evaluates the spline or one of its derivatives at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64, order: DerivativeOrder) -> f64 {
        self.segments[self.find_segment(x)].evaluate(x, order)
    }

    /// Evaluates the spline or one of its derivatives at every `x` in `xs`.
    #[must_use]
    pub fn evaluate_many(&self, xs: &[f64], order: DerivativeOrder) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x, order)).collect()
    }

    fn find_segment(&self, x: f64) -> usize {
        let count = self.knots.partition_point(|&k| k <= x);
        count.saturating_sub(1).min(self.segments.len() - 1)
    }
}

fn validate(knots: &[f64], values: &[f64]) -> Result<()> {
    if knots.len() < 2 {
        return Err(InputError::TooFewPoints {
            count: knots.len(),
            min: 2,
        }
        .into());
    }
    if values.len() != knots.len() {
        return Err(InputError::LengthMismatch {
            knots: knots.len(),
            values: values.len(),
        }
        .into());
    }
    if let Some(index) = knots.iter().position(|k| !k.is_finite()) {
        return Err(InputError::NonFiniteKnot { index }.into());
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(InputError::NonFiniteValue { index }.into());
    }
    if let Some(i) = knots.windows(2).position(|w| w[1] <= w[0]) {
        return Err(InputError::NonIncreasingNodes { index: i + 1 }.into());
    }
    Ok(())
}

/// Second derivatives of the spline at every knot.
fn solve_moments(h: &[f64], y: &[f64]) -> Vec<f64> {
    let n = h.len();
    match n {
        1 => vec![0.0; 2],
        2 => {
            // Single parabola: constant second derivative.
            let dd = ((y[2] - y[1]) / h[1] - (y[1] - y[0]) / h[0]) / (h[0] + h[1]);
            vec![2.0 * dd; 3]
        }
        _ => solve_not_a_knot_moments(h, y),
    }
}

/// Solves the not-a-knot moment system for `n >= 3` intervals.
///
/// The interior C² equations
///   `h[i-1]*m[i-1] + 2*(h[i-1]+h[i])*m[i] + h[i]*m[i+1] = r[i]`
/// are closed by the third-derivative continuity at `x[1]` and `x[n-1]`:
///   `m[0] = ((h[0]+h[1])*m[1] - h[0]*m[2]) / h[1]`
///   `m[n] = ((h[n-2]+h[n-1])*m[n-1] - h[n-1]*m[n-2]) / h[n-2]`
/// Substituting both into the first and last interior rows leaves a
/// tridiagonal system in `m[1..n]`.
fn solve_not_a_knot_moments(h: &[f64], y: &[f64]) -> Vec<f64> {
    let n = h.len();
    let size = n - 1;
    let mut lower = vec![0.0; size];
    let mut diag = vec![0.0; size];
    let mut upper = vec![0.0; size];
    let mut rhs = vec![0.0; size];

    for i in 1..n {
        let row = i - 1;
        lower[row] = h[i - 1];
        diag[row] = 2.0 * (h[i - 1] + h[i]);
        upper[row] = h[i];
        rhs[row] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
    }

    // Eliminate m[0] from the first row.
    diag[0] += h[0] * (h[0] + h[1]) / h[1];
    upper[0] -= h[0] * h[0] / h[1];
    lower[0] = 0.0;

    // Eliminate m[n] from the last row.
    let last = size - 1;
    diag[last] += h[n - 1] * (h[n - 2] + h[n - 1]) / h[n - 2];
    lower[last] -= h[n - 1] * h[n - 1] / h[n - 2];
    upper[last] = 0.0;

    let inner = solve_tridiagonal(&lower, &diag, &upper, &rhs);

    let mut m = Vec::with_capacity(n + 1);
    m.push(((h[0] + h[1]) * inner[0] - h[0] * inner[1]) / h[1]);
    m.extend_from_slice(&inner);
    m.push(((h[n - 2] + h[n - 1]) * inner[last] - h[n - 1] * inner[last - 1]) / h[n - 2]);
    m
}

/// Thomas algorithm. `lower[0]` and `upper[len-1]` are ignored.
fn solve_tridiagonal(lower: &[f64], diag: &[f64], upper: &[f64], rhs: &[f64]) -> Vec<f64> {
    let len = diag.len();
    let mut c = vec![0.0; len];
    let mut d = vec![0.0; len];

    c[0] = upper[0] / diag[0];
    d[0] = rhs[0] / diag[0];
    for i in 1..len {
        let denom = diag[i] - lower[i] * c[i - 1];
        c[i] = upper[i] / denom;
        d[i] = (rhs[i] - lower[i] * d[i - 1]) / denom;
    }

    let mut x = vec![0.0; len];
    x[len - 1] = d[len - 1];
    for i in (0..len - 1).rev() {
        x[i] = d[i] - c[i] * x[i + 1];
    }
    x
}

fn segments_from_moments(knots: &[f64], y: &[f64], h: &[f64], m: &[f64]) -> Vec<Segment> {
    (0..h.len())
        .map(|i| Segment {
            lhs_x: knots[i],
            a: y[i],
            b: (y[i + 1] - y[i]) / h[i] - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0,
            c: m[i] / 2.0,
            d: (m[i + 1] - m[i]) / (6.0 * h[i]),
        })
        .collect()
}
