use bitangent::errors::TangentError;
use bitangent::float_types::Real;
use bitangent::tangent::{
    Circle, LineSegment, TangentMode, adjacent_leg, angle_from_opposite, euclidean_distance,
    polar_to_cartesian, tangent_segments,
};
use nalgebra::{Point2, Vector2};

const TOL: Real = 1e-9;

fn circle(x: Real, y: Real, r: Real) -> Circle<()> {
    Circle::new(Point2::new(x, y), r, None).unwrap()
}

fn assert_close(actual: Real, expected: Real) {
    assert!(
        (actual - expected).abs() < TOL,
        "expected {expected}, got {actual}"
    );
}

/// Checks the geometric tangency contract for one segment pair: each
/// segment starts on the smaller circle's rim, ends on the larger
/// circle's rim, and is perpendicular to the radius at both contact
/// points.
fn assert_tangent_pair(c1: &Circle<()>, c2: &Circle<()>, mode: TangentMode) {
    let (minor, major) = if c1.radius <= c2.radius { (c1, c2) } else { (c2, c1) };
    let segments = tangent_segments(c1, c2, mode).unwrap();

    for segment in &segments {
        let start_radius = segment.start - minor.center;
        let end_radius = segment.end - major.center;
        let direction = segment.delta();

        assert_close(start_radius.norm(), minor.radius);
        assert_close(end_radius.norm(), major.radius);
        // Tangent lines meet each radius at a right angle.
        assert_close(direction.dot(&start_radius), 0.0);
        assert_close(direction.dot(&end_radius), 0.0);
    }
}

#[test]
fn outer_tangent_reference_scenario() {
    // r=1 and r=3 circles, centers 10 apart: auxiliary radius 2,
    // B = asin(0.2), reach a = sqrt(96).
    let small = circle(0.0, 0.0, 1.0);
    let large = circle(10.0, 0.0, 3.0);
    let [top, bottom] = tangent_segments(&small, &large, TangentMode::Outer).unwrap();

    let cos_b = (0.96 as Real).sqrt();

    assert_close(top.start.x, -0.2);
    assert_close(top.start.y, cos_b);
    assert_close(top.end.x, 9.4);
    assert_close(top.end.y, 3.0 * cos_b);

    // The bottom line mirrors the top one across the center line.
    assert_close(bottom.start.x, -0.2);
    assert_close(bottom.start.y, -cos_b);
    assert_close(bottom.end.x, 9.4);
    assert_close(bottom.end.y, -3.0 * cos_b);

    assert_tangent_pair(&small, &large, TangentMode::Outer);
}

#[test]
fn inner_tangent_reference_scenario() {
    // Same circles, crossing configuration: auxiliary radius 4,
    // B = asin(0.4), reach a = sqrt(84).
    let small = circle(0.0, 0.0, 1.0);
    let large = circle(10.0, 0.0, 3.0);
    let [top, bottom] = tangent_segments(&small, &large, TangentMode::Inner).unwrap();

    let cos_b = (0.84 as Real).sqrt();

    assert_close(top.start.x, 0.4);
    assert_close(top.start.y, -cos_b);
    assert_close(top.end.x, 8.8);
    assert_close(top.end.y, 3.0 * cos_b);

    assert_close(bottom.start.x, 0.4);
    assert_close(bottom.start.y, cos_b);
    assert_close(bottom.end.x, 8.8);
    assert_close(bottom.end.y, -3.0 * cos_b);

    // Inner tangents cross between the circles.
    assert!(top.start.y < 0.0 && top.end.y > 0.0);
    assert!(bottom.start.y > 0.0 && bottom.end.y < 0.0);

    assert_tangent_pair(&small, &large, TangentMode::Inner);
}

#[test]
fn tangency_holds_in_every_quadrant() {
    // The larger circle placed above, below, left and right of the
    // smaller one, exercising all four sign-dispatch branches.
    let configurations = [
        (circle(0.0, 0.0, 1.0), circle(8.0, 6.0, 3.0)),
        (circle(0.0, 0.0, 1.0), circle(-8.0, 6.0, 3.0)),
        (circle(0.0, 0.0, 1.0), circle(8.0, -6.0, 3.0)),
        (circle(0.0, 0.0, 1.0), circle(-8.0, -6.0, 3.0)),
        (circle(10.0, 10.0, 1.0), circle(0.0, 0.0, 3.0)),
        (circle(-3.0, 7.0, 2.0), circle(4.0, -1.0, 5.0)),
    ];
    for (a, b) in &configurations {
        assert_tangent_pair(a, b, TangentMode::Outer);
        assert_tangent_pair(a, b, TangentMode::Inner);
    }
}

#[test]
fn swapping_arguments_gives_the_same_lines() {
    let a = circle(-3.0, 7.0, 2.0);
    let b = circle(4.0, -1.0, 5.0);

    for mode in [TangentMode::Outer, TangentMode::Inner] {
        let forward = tangent_segments(&a, &b, mode).unwrap();
        let swapped = tangent_segments(&b, &a, mode).unwrap();
        // Distinct radii: the minor/major roles are fixed, so the
        // output is identical either way.
        for (f, s) in forward.iter().zip(swapped.iter()) {
            assert_close(f.start.x, s.start.x);
            assert_close(f.start.y, s.start.y);
            assert_close(f.end.x, s.end.x);
            assert_close(f.end.y, s.end.y);
        }
    }
}

#[test]
fn swapping_equal_radii_keeps_the_same_line_union() {
    // Equal radii hit the tie-break: the second argument plays the
    // larger circle, so the segments trade orientation but the union
    // of the two tangent lines is unchanged.
    let a = circle(0.0, 0.0, 5.0);
    let b = circle(12.0, 0.0, 5.0);

    let forward = tangent_segments(&a, &b, TangentMode::Outer).unwrap();
    let swapped = tangent_segments(&b, &a, TangentMode::Outer).unwrap();

    let endpoints = |segment: &LineSegment<()>| {
        let mut pair = [segment.start, segment.end];
        pair.sort_by(|p, q| (p.x, p.y).partial_cmp(&(q.x, q.y)).unwrap());
        pair
    };
    let mut forward: Vec<_> = forward.iter().map(endpoints).collect();
    let mut swapped: Vec<_> = swapped.iter().map(endpoints).collect();
    let by_first = |p: &[Point2<Real>; 2], q: &[Point2<Real>; 2]| {
        (p[0].x, p[0].y).partial_cmp(&(q[0].x, q[0].y)).unwrap()
    };
    forward.sort_by(by_first);
    swapped.sort_by(by_first);

    for (f, s) in forward.iter().zip(swapped.iter()) {
        for (fp, sp) in f.iter().zip(s.iter()) {
            assert_close(fp.x, sp.x);
            assert_close(fp.y, sp.y);
        }
    }
}

#[test]
fn outer_tangents_of_equal_circles_are_parallel() {
    let a = circle(0.0, 0.0, 4.0);
    let b = circle(12.0, 5.0, 4.0);
    let [top, bottom] = tangent_segments(&a, &b, TangentMode::Outer).unwrap();

    let d1 = top.delta();
    let d2 = bottom.delta();
    // Parallel: zero cross product, and both span the full center distance.
    assert_close(d1.x * d2.y - d1.y * d2.x, 0.0);
    assert_close(top.length(), 13.0);
    assert_close(bottom.length(), 13.0);

    // Each line sits one radius away from the center line.
    let center_dir = Vector2::new(12.0 as Real, 5.0).normalize();
    for segment in [&top, &bottom] {
        let offset = segment.start - Point2::new(0.0, 0.0);
        let perp = offset - center_dir * offset.dot(&center_dir);
        assert_close(perp.norm(), 4.0);
    }
}

#[test]
fn style_token_rides_on_both_segments() {
    // The style comes from the smaller circle, whichever argument it is.
    let small = Circle::new(Point2::new(0.0, 0.0), 1.0, Some("stroke:#f00")).unwrap();
    let large = Circle::new(Point2::new(10.0, 0.0), 3.0, Some("stroke:#00f")).unwrap();

    let segments = tangent_segments(&large, &small, TangentMode::Outer).unwrap();
    for segment in &segments {
        assert_eq!(segment.style, Some("stroke:#f00"));
    }
}

#[test]
fn no_tangent_when_circles_overlap() {
    // Inner tangents need r1 + r2 <= center distance.
    let a = circle(0.0, 0.0, 3.0);
    let b = circle(4.0, 0.0, 3.0);
    assert!(matches!(
        tangent_segments(&a, &b, TangentMode::Inner),
        Err(TangentError::NoTangent { .. })
    ));
}

#[test]
fn no_tangent_when_one_circle_contains_the_other() {
    let inner = circle(0.0, 0.0, 1.0);
    let outer = circle(1.0, 0.0, 5.0);
    assert!(matches!(
        tangent_segments(&inner, &outer, TangentMode::Outer),
        Err(TangentError::NoTangent { .. })
    ));
}

#[test]
fn coincident_identical_circles_are_rejected() {
    // Degenerate case: zero center distance must classify as NoTangent,
    // never divide through to NaN.
    let a = circle(0.0, 0.0, 5.0);
    let b = circle(0.0, 0.0, 5.0);
    for mode in [TangentMode::Outer, TangentMode::Inner] {
        assert!(matches!(
            tangent_segments(&a, &b, mode),
            Err(TangentError::NoTangent { .. })
        ));
    }
}

#[test]
fn elliptical_input_is_rejected() {
    let result = Circle::<()>::from_radii(Point2::new(0.0, 0.0), 3.0, 4.0, None);
    assert!(matches!(result, Err(TangentError::NotCircular { .. })));

    // Radii agreeing within tolerance still count as circular.
    let result = Circle::<()>::from_radii(Point2::new(0.0, 0.0), 3.0, 3.0 + 1e-12, None);
    assert!(result.is_ok());
}

#[test]
fn degenerate_radii_are_rejected() {
    for radius in [0.0, -1.0, Real::NAN, Real::INFINITY] {
        let result = Circle::<()>::new(Point2::new(0.0, 0.0), radius, None);
        assert!(matches!(result, Err(TangentError::InvalidRadius(_))));
    }
}

#[test]
fn quadrant_sign_dispatch() {
    // radius 2 at 30 degrees: raw offset (sqrt(3), 1).
    let x = (3.0 as Real).sqrt();
    let angle = (0.5 as Real).asin();

    let cases = [
        ((false, false), (-x, -1.0)),
        ((true, false), (-x, 1.0)),
        ((false, true), (x, -1.0)),
        ((true, true), (x, 1.0)),
    ];
    for ((negx, negy), (ex, ey)) in cases {
        let v = polar_to_cartesian(2.0, angle, negx, negy);
        assert_close(v.x, ex);
        assert_close(v.y, ey);
    }
}

#[test]
fn right_triangle_helpers() {
    assert_close(
        euclidean_distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0)),
        5.0,
    );
    assert_close(angle_from_opposite(3.0, 5.0).unwrap(), (0.6 as Real).asin());
    assert_close(adjacent_leg(3.0, 5.0).unwrap(), 4.0);

    assert!(angle_from_opposite(6.0, 5.0).is_err());
    assert!(angle_from_opposite(1.0, 0.0).is_err());
    assert!(adjacent_leg(6.0, 5.0).is_err());
}

#[test]
fn mode_flag_parsing() {
    assert_eq!(TangentMode::from_flag("outer"), TangentMode::Outer);
    assert_eq!(TangentMode::from_flag("inner"), TangentMode::Inner);
    // Anything unrecognized falls back to the default.
    assert_eq!(TangentMode::from_flag("sideways"), TangentMode::Inner);
    assert_eq!(TangentMode::default(), TangentMode::Inner);
}
