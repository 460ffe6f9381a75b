//! Differential geometry of smooth 3D curves.
//!
//! A [`SplineCurve`] interpolates an ordered set of control points with
//! per-axis not-a-knot cubic splines over the parameter domain `[0, 1]`.
//! Position and its first three derivatives feed the
//! [`DifferentialGeometry`] queries (Frenet frame, curvature, torsion,
//! kinematics), and a precomputed [`ArcLengthTable`] answers length queries.
//!
//! Curves are immutable after construction and can be queried from many
//! threads at once.

pub mod arc_length;
pub mod differential;
pub mod error;
pub mod geometry;
pub mod interpolation;
pub mod math;

pub use arc_length::ArcLengthTable;
pub use differential::{DifferentialGeometry, FrenetFrame, OsculatingCircle};
pub use error::{CurveError, InputError, Result};
pub use geometry::{
    Curve, CurveDomain, DerivativeOrder, Helix, Line, SplineCurve, SplineCurveParams,
};
