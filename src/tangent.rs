//! **Mathematical Foundation: Tangent Lines Between Two Circles**
//!
//! Constructs the pair of inner (crossing) or outer (non-crossing) tangent
//! line segments between two circles using the similar-triangles reduction:
//! an auxiliary circle centered on the larger circle, with radius equal to
//! the sum (inner) or difference (outer) of the two radii, turns the
//! two-circle problem into tangents from an external point.
//!
//! ```text
//!     A
//!     |\
//!     | \
//!    b|  \h        h = distance between the two centers
//!     |   \        b = auxiliary circle radius
//!     |_   \       B = asin(b / h),  a = sqrt(h² − b²)
//!     |_|___\
//!    C   a   B
//! ```

use crate::errors::TangentError;
use crate::float_types::{EPSILON, FRAC_PI_2, Real};
use nalgebra::{Point2, Vector2};
use std::fmt::Debug;

/// A circle with an opaque style token `S` carried through to the output
/// segments. The token is never inspected, only cloned onto the results.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle<S: Clone + Debug + Send + Sync> {
    pub center: Point2<Real>,
    pub radius: Real,
    pub style: Option<S>,
}

impl<S: Clone + Debug + Send + Sync> Circle<S> {
    /// A circle from an already-validated radius.
    pub fn new(center: Point2<Real>, radius: Real, style: Option<S>) -> Result<Self, TangentError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(TangentError::InvalidRadius(radius));
        }
        Ok(Self { center, radius, style })
    }

    /// A circle from an ellipse-like description. The two radii must agree
    /// within [`EPSILON`]; true ellipses are rejected as [`TangentError::NotCircular`].
    pub fn from_radii(
        center: Point2<Real>,
        rx: Real,
        ry: Real,
        style: Option<S>,
    ) -> Result<Self, TangentError> {
        if !(rx - ry).abs().is_finite() || (rx - ry).abs() > EPSILON {
            return Err(TangentError::NotCircular { rx, ry });
        }
        Self::new(center, rx, style)
    }
}

/// Which of the two tangent pairs to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TangentMode {
    /// Internal tangents: the lines cross between the circles.
    #[default]
    Inner,
    /// External tangents: the lines pass outside the gap.
    Outer,
}

impl TangentMode {
    /// Mode from the `--position` option value. Only the exact string
    /// `"outer"` selects [`TangentMode::Outer`]; every other value falls
    /// back to the default.
    pub fn from_flag(value: &str) -> Self {
        if value == "outer" { TangentMode::Outer } else { TangentMode::Inner }
    }
}

/// One tangent line segment, running from the rim of the smaller circle to
/// the tangent point on the larger one.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment<S: Clone + Debug + Send + Sync> {
    pub start: Point2<Real>,
    pub end: Point2<Real>,
    pub style: Option<S>,
}

impl<S: Clone + Debug + Send + Sync> LineSegment<S> {
    /// End point relative to the start, as emitted in the `l` path command.
    pub fn delta(&self) -> Vector2<Real> {
        self.end - self.start
    }

    pub fn length(&self) -> Real {
        self.delta().norm()
    }
}

/// Polar offset to Cartesian under the four-quadrant sign convention used
/// throughout the solver. `negx`/`negy` record where the larger circle sits
/// relative to the smaller one; the dispatch must stay exactly as is, the
/// sign table is load-bearing.
pub fn polar_to_cartesian(radius: Real, angle: Real, negx: bool, negy: bool) -> Vector2<Real> {
    let x = radius * angle.cos();
    let y = radius * angle.sin();
    match (negx, negy) {
        (true, false) => Vector2::new(-x, y),
        (false, true) => Vector2::new(x, -y),
        (false, false) => Vector2::new(-x, -y),
        (true, true) => Vector2::new(x, y),
    }
}

/// Euclidean distance between two points.
pub fn euclidean_distance(p: &Point2<Real>, q: &Point2<Real>) -> Real {
    (p - q).norm()
}

/// Angle opposite the given leg in a right triangle, `asin(opposite / hypotenuse)`.
///
/// Errors with [`TangentError::NoTangent`] when the ratio leaves the `asin`
/// domain, which geometrically means the requested tangent does not exist
/// (circles too close, overlapping, or coincident).
pub fn angle_from_opposite(opposite: Real, hypotenuse: Real) -> Result<Real, TangentError> {
    let ratio = opposite / hypotenuse;
    if hypotenuse <= 0.0 || opposite > hypotenuse || !ratio.is_finite() {
        return Err(TangentError::NoTangent { leg: opposite, distance: hypotenuse });
    }
    Ok(ratio.asin())
}

/// Remaining leg of a right triangle, by the Pythagorean theorem.
pub fn adjacent_leg(opposite: Real, hypotenuse: Real) -> Result<Real, TangentError> {
    if opposite > hypotenuse {
        return Err(TangentError::NoTangent { leg: opposite, distance: hypotenuse });
    }
    Ok((hypotenuse * hypotenuse - opposite * opposite).sqrt())
}

/// Both tangent segments between `c1` and `c2` for the requested mode.
///
/// The segment pair is all-or-nothing: any failure yields no geometry.
/// When the radii are equal, `c2` plays the role of the larger circle; the
/// convention is arbitrary but fixed, swapping the arguments always yields
/// the same pair of tangent lines.
pub fn tangent_segments<S: Clone + Debug + Send + Sync>(
    c1: &Circle<S>,
    c2: &Circle<S>,
    mode: TangentMode,
) -> Result<[LineSegment<S>; 2], TangentError> {
    // The larger circle hosts the auxiliary circle; ties go to c2.
    let (minor, major) = if c1.radius <= c2.radius { (c1, c2) } else { (c2, c1) };

    let aux_radius = match mode {
        TangentMode::Outer => major.radius - minor.radius,
        TangentMode::Inner => major.radius + minor.radius,
    };

    // The right triangle: hypotenuse between the centers, one leg spanning
    // the auxiliary circle.
    let h = euclidean_distance(&c1.center, &c2.center);
    let beta = angle_from_opposite(aux_radius, h)?;
    let a = adjacent_leg(aux_radius, h)?;

    // Angle of the center line against the x axis.
    let baseline = angle_from_opposite((c1.center.y - c2.center.y).abs(), h)?;

    // Is the larger circle above / to the right of the smaller one?
    let negx = major.center.y > minor.center.y;
    let negy = major.center.x > minor.center.x;

    let top = baseline - beta;
    let bottom = baseline + beta;
    let (perp_top, perp_bottom) = match mode {
        TangentMode::Outer => (-FRAC_PI_2, FRAC_PI_2),
        TangentMode::Inner => (FRAC_PI_2, -FRAC_PI_2),
    };

    // Each segment starts on the smaller circle's rim, displaced
    // perpendicular to its ray, and reaches `a` along the ray to the
    // tangent point on the larger circle.
    let segment = |ray: Real, perp: Real| {
        let reach = polar_to_cartesian(a, ray, negx, negy);
        let rim = polar_to_cartesian(minor.radius, perp + ray, negx, negy);
        let start = minor.center + rim;
        LineSegment { start, end: start + reach, style: minor.style.clone() }
    };

    Ok([segment(top, perp_top), segment(bottom, perp_bottom)])
}
