//! One-dimensional interpolants used as the per-axis building blocks of
//! [`SplineCurve`](crate::geometry::SplineCurve).

mod cubic_spline;

pub use cubic_spline::CubicSpline;
