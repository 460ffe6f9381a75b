#![allow(clippy::unwrap_used)]

use std::f64::consts::TAU;
use std::sync::Once;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use spacecurve::math::{Point3, Vector3, STRAIGHT_RADIUS_THRESHOLD, TOLERANCE};
use spacecurve::{Curve, CurveDomain, DifferentialGeometry, Helix, SplineCurve};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn unit_circle_curve(samples: usize) -> SplineCurve {
    SplineCurve::new(Helix::unit_circle().sample(samples)).unwrap()
}

/// Five turns rising 2 units per turn, as used for helix demos.
fn demo_helix() -> Helix {
    Helix::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x(), 2.0 / TAU, 5.0).unwrap()
}

fn grid(n: usize) -> Vec<f64> {
    CurveDomain::unit().linspace(n)
}

#[test]
fn passes_through_helix_control_points() {
    init_tracing();
    let points = demo_helix().sample(200);
    let curve = SplineCurve::new(points.clone()).unwrap();
    for (t, p) in curve.node_parameters().iter().zip(&points) {
        assert!((curve.evaluate(*t) - p).norm() < 1e-9);
    }
}

#[test]
fn tangent_has_unit_length() {
    let curve = SplineCurve::new(demo_helix().sample(120)).unwrap();
    for t in grid(301) {
        if curve.speed(t) > TOLERANCE {
            assert_relative_eq!(curve.tangent(t).norm(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn frenet_frame_is_orthonormal() {
    let curve = SplineCurve::new(demo_helix().sample(200)).unwrap();
    for t in grid(257) {
        let f = curve.frenet_frame(t);
        assert!(f.tangent.dot(&f.normal).abs() < 1e-4, "T·N at t={t}");
        assert!(f.tangent.dot(&f.binormal).abs() < 1e-4, "T·B at t={t}");
        assert!(f.normal.dot(&f.binormal).abs() < 1e-4, "N·B at t={t}");
        assert_relative_eq!(f.normal.norm(), 1.0, epsilon = 1e-4);
        assert_relative_eq!(f.binormal.norm(), 1.0, epsilon = 1e-4);
    }
}

#[test]
fn curvature_is_never_negative() {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 2.0, -1.0),
        Point3::new(2.0, -1.0, 0.5),
        Point3::new(4.0, 0.0, 3.0),
        Point3::new(5.0, 5.0, 5.0),
    ];
    let curve = SplineCurve::new(points).unwrap();
    for t in grid(500) {
        assert!(curve.curvature(t) >= 0.0);
    }
}

#[test]
fn arc_length_is_monotonic_and_totals() {
    let curve = SplineCurve::new(demo_helix().sample(80)).unwrap();
    let ts = grid(101);
    let lengths: Vec<f64> = ts.iter().map(|&t| curve.arc_length(0.0, t)).collect();
    assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
    assert!((curve.arc_length(0.0, 1.0) - curve.total_length()).abs() < f64::EPSILON);
}

#[test]
fn helix_length_matches_closed_form() {
    let h = demo_helix();
    let curve = SplineCurve::new(h.sample(200)).unwrap();
    let expected = 5.0 * (TAU * TAU + 4.0_f64).sqrt();
    assert_relative_eq!(curve.total_length(), expected, max_relative = 1e-3);
}

#[test]
fn coincident_control_points_stay_finite() {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(2.0, 0.0, 1.0),
        Point3::new(3.0, 1.0, 1.0),
    ];
    let curve = SplineCurve::new(points).unwrap();
    for t in grid(401).into_iter().chain([0.25, 0.5]) {
        assert!(curve.tangent(t).iter().all(|c| c.is_finite()));
        assert!(curve.curvature(t).is_finite());
        assert!(curve.torsion(t).is_finite());
        let f = curve.frenet_frame(t);
        assert!(f
            .tangent
            .iter()
            .chain(f.normal.iter())
            .chain(f.binormal.iter())
            .all(|c| c.is_finite()));
    }
}

#[test]
fn fully_collapsed_curve_stays_finite() {
    let p = Point3::new(1.0, -2.0, 0.5);
    let curve = SplineCurve::new(vec![p, p, p, p]).unwrap();
    for t in grid(11) {
        assert_abs_diff_eq!(curve.speed(t), 0.0);
        assert_eq!(curve.tangent(t), Vector3::zeros());
        assert_abs_diff_eq!(curve.curvature(t), 0.0);
        assert!(curve.radius_of_curvature(t).is_infinite());
        let f = curve.frenet_frame(t);
        assert_eq!(f.normal, Vector3::zeros());
    }
    assert_abs_diff_eq!(curve.total_length(), 0.0);
}

#[test]
fn unit_circle_has_unit_curvature() {
    let curve = unit_circle_curve(50);
    for t in grid(200) {
        assert_relative_eq!(curve.curvature(t), 1.0, max_relative = 0.05);
    }
}

#[test]
fn collinear_points_are_straight() {
    let dir = Vector3::new(1.0, 2.0, 3.0);
    let uniform: Vec<Point3> = (0..6_u32)
        .map(|i| Point3::origin() + dir * f64::from(i))
        .collect();
    let curve = SplineCurve::new(uniform).unwrap();
    for t in grid(50) {
        assert!(curve.curvature(t) < 1e-9);
        assert!(curve.radius_of_curvature(t).is_infinite());
    }

    let uneven: Vec<Point3> = [0.0, 1.0, 3.0, 6.0, 10.0]
        .iter()
        .map(|&s| Point3::origin() + dir * s)
        .collect();
    let curve = SplineCurve::new(uneven).unwrap();
    for t in grid(50) {
        assert!(curve.curvature(t) < 1e-6);
        assert!(curve.radius_of_curvature(t) > STRAIGHT_RADIUS_THRESHOLD);
        assert!(curve.osculating_circle(t, STRAIGHT_RADIUS_THRESHOLD).is_none());
    }
}

#[test]
fn helix_curvature_and_torsion_match_analytic() {
    let h = demo_helix();
    let curve = SplineCurve::new(h.sample(200)).unwrap();
    let ts = grid(400);

    for &t in &ts {
        assert_relative_eq!(curve.curvature(t), h.analytic_curvature(), max_relative = 0.03);
        assert!(curve.torsion(t) > 0.0, "torsion sign flipped at t={t}");
    }

    #[allow(clippy::cast_precision_loss)]
    let mean_torsion = ts.iter().map(|&t| curve.torsion(t)).sum::<f64>() / ts.len() as f64;
    assert_relative_eq!(mean_torsion, h.analytic_torsion(), max_relative = 0.05);
}

#[test]
fn osculating_circle_centers_near_axis() {
    let curve = unit_circle_curve(60);
    for t in grid(24) {
        let osc = curve.osculating_circle(t, STRAIGHT_RADIUS_THRESHOLD).unwrap();
        assert!((osc.center - Point3::origin()).norm() < 0.05);
    }
}

#[test]
fn concurrent_queries_agree() {
    let curve = SplineCurve::new(demo_helix().sample(100)).unwrap();
    let ts = grid(64);
    let expected: Vec<f64> = ts.iter().map(|&t| curve.curvature(t)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| curve.sample_with(&ts, |c, t| c.curvature(t))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
