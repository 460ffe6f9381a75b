pub mod curve;

pub use curve::{Curve, CurveDomain, DerivativeOrder, Helix, Line, SplineCurve, SplineCurveParams};
