//! SVG import/export of circles and tangent segments.
//!
//! Import understands the three ways a drawing tool encodes a circle:
//! a `<path>` whose data opens with a MoveTo followed by an elliptical
//! arc (Inkscape writes ellipses this way, starting at `(cx + rx, cy)`),
//! a native `<circle>`, and a native `<ellipse>`. Export writes one
//! `<path>` per tangent segment, carrying the source style verbatim.
//!
//! The `d` and `transform` attribute grammars are not covered by the
//! `svg` crate's parser, so both are handled with small `nom` parsers.

use crate::float_types::Real;
use crate::io::IoError;
use crate::tangent::{Circle, LineSegment};

use nalgebra::{Matrix3, Point2};

use ::svg::node::Attributes;
use ::svg::node::element::Path;
use ::svg::node::element::path::Data;
use ::svg::node::element::tag::Type;
use ::svg::parser::Event;

use nom::IResult;
use nom::bytes::complete::{take_while, take_while1};
use nom::character::complete::{alpha1, char, multispace0, one_of};
use nom::combinator::{map, map_opt};
use nom::multi::many1;
use nom::number::complete::double;
use nom::sequence::{delimited, pair, preceded, separated_pair};

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Attribute micro-grammars
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Whitespace and/or commas between path numbers, possibly empty.
fn wsp_comma(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace() || c == ',')(input)
}

fn real(input: &str) -> IResult<&str, Real> {
    map(preceded(wsp_comma, double), |v| v as Real)(input)
}

fn coord_pair(input: &str) -> IResult<&str, (Real, Real)> {
    separated_pair(real, take_while1(|c: char| c.is_whitespace() || c == ','), real)(input)
}

/// The prefix of an ellipse-shaped path: a MoveTo and the first arc's
/// radii. The rest of the data adds nothing the extraction needs.
fn ellipse_path(input: &str) -> IResult<&str, ((Real, Real), (Real, Real))> {
    let (input, _) = multispace0(input)?;
    let (input, _) = one_of("mM")(input)?;
    let (input, start) = coord_pair(input)?;
    let (input, _) = preceded(wsp_comma, one_of("aA"))(input)?;
    let (input, radii) = coord_pair(input)?;
    Ok((input, (start, radii)))
}

fn arg_list(input: &str) -> IResult<&str, Vec<Real>> {
    delimited(
        preceded(multispace0, char('(')),
        many1(real),
        preceded(wsp_comma, char(')')),
    )(input)
}

fn op_matrix(name: &str, args: &[Real]) -> Option<Matrix3<Real>> {
    match (name, args) {
        ("matrix", [a, b, c, d, e, f]) => {
            Some(Matrix3::new(*a, *c, *e, *b, *d, *f, 0.0, 0.0, 1.0))
        },
        ("translate", [tx]) => Some(Matrix3::new(1.0, 0.0, *tx, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)),
        ("translate", [tx, ty]) => {
            Some(Matrix3::new(1.0, 0.0, *tx, 0.0, 1.0, *ty, 0.0, 0.0, 1.0))
        },
        ("scale", [s]) => Some(Matrix3::new(*s, 0.0, 0.0, 0.0, *s, 0.0, 0.0, 0.0, 1.0)),
        ("scale", [sx, sy]) => Some(Matrix3::new(*sx, 0.0, 0.0, 0.0, *sy, 0.0, 0.0, 0.0, 1.0)),
        ("rotate", [deg]) => {
            let (sin, cos) = deg.to_radians().sin_cos();
            Some(Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0))
        },
        ("rotate", [deg, cx, cy]) => {
            let about = op_matrix("rotate", &[*deg])?;
            let to = op_matrix("translate", &[*cx, *cy])?;
            let back = op_matrix("translate", &[-*cx, -*cy])?;
            Some(to * about * back)
        },
        _ => None,
    }
}

fn transform_op(input: &str) -> IResult<&str, Matrix3<Real>> {
    map_opt(
        pair(preceded(wsp_comma, alpha1), arg_list),
        |(name, args): (&str, Vec<Real>)| op_matrix(name, &args),
    )(input)
}

/// A `transform` attribute: one or more operations composed left to right.
fn transform_list(input: &str) -> IResult<&str, Matrix3<Real>> {
    map(many1(transform_op), |ops| {
        ops.into_iter().fold(Matrix3::identity(), |acc, op| acc * op)
    })(input)
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Extraction
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

fn real_attr(attributes: &Attributes, name: &str) -> Result<Option<Real>, IoError> {
    Ok(attributes
        .get(name)
        .map(|value| value.parse::<Real>())
        .transpose()?)
}

/// A [`Circle`] from one element's attributes, under any of the three
/// supported encodings. The `style` attribute rides along untouched.
pub fn circle_from_attributes(attributes: &Attributes) -> Result<Circle<String>, IoError> {
    let style = attributes.get("style").map(|value| value.to_string());

    if let Some(d) = attributes.get("d") {
        // Path-encoded ellipse, possibly under an active transform.
        let (_, ((px, py), (rx, ry))) =
            ellipse_path(d).map_err(|_| IoError::MalformedPath(d.to_string()))?;
        let (center, rx, ry) = match attributes.get("transform") {
            Some(t) => {
                let (_, m) = transform_list(t)
                    .map_err(|_| IoError::MalformedInput(format!("unsupported transform: {t}")))?;
                let (sx, sy) = (m[(0, 0)], m[(1, 1)]);
                let x = m[(0, 0)] * px + m[(0, 1)] * py + m[(0, 2)] - rx * sx;
                let y = m[(1, 0)] * px + m[(1, 1)] * py + m[(1, 2)];
                (Point2::new(x, y), rx * sx, ry * sy)
            },
            // The path opens on the rightmost rim point, one rx right of center.
            None => (Point2::new(px - rx, py), rx, ry),
        };
        Ok(Circle::from_radii(center, rx, ry, style)?)
    } else if let Some(r) = real_attr(attributes, "r")? {
        let cx = real_attr(attributes, "cx")?.unwrap_or(0.0);
        let cy = real_attr(attributes, "cy")?.unwrap_or(0.0);
        Ok(Circle::new(Point2::new(cx, cy), r, style)?)
    } else if let Some(rx) = real_attr(attributes, "rx")? {
        let ry = real_attr(attributes, "ry")?
            .ok_or_else(|| IoError::ShapeRead("ellipse with rx but no ry".into()))?;
        let cx = real_attr(attributes, "cx")?.unwrap_or(0.0);
        let cy = real_attr(attributes, "cy")?.unwrap_or(0.0);
        Ok(Circle::from_radii(Point2::new(cx, cy), rx, ry, style)?)
    } else {
        Err(IoError::ShapeRead(
            "element has no path data, radius, or ellipse radii".into(),
        ))
    }
}

/// Resolves exactly two circles from an SVG document.
///
/// With `ids` given, elements are matched by their `id` attribute and
/// returned in the order the ids were supplied; with no ids, every
/// `circle`, `ellipse` and `path` element is a candidate, in document
/// order. Any count other than two is a selection error, reported
/// before any geometry runs.
pub fn circles_from_svg(
    content: &str,
    ids: &[String],
) -> Result<(Circle<String>, Circle<String>), IoError> {
    let mut found: Vec<(Option<String>, Attributes)> = Vec::new();

    for event in ::svg::read(content)? {
        match event {
            Event::Error(error) => return Err(error.into()),
            Event::Tag(name, Type::Start | Type::Empty, attributes) => {
                let id = attributes.get("id").map(|value| value.to_string());
                let selected = if ids.is_empty() {
                    matches!(name, "circle" | "ellipse" | "path")
                } else {
                    id.as_ref().is_some_and(|id| ids.iter().any(|want| want == id))
                };
                if selected {
                    found.push((id, attributes));
                }
            },
            _ => {},
        }
    }

    if !ids.is_empty() {
        found.sort_by_key(|(id, _)| {
            id.as_ref().and_then(|id| ids.iter().position(|want| want == id))
        });
    }

    if found.len() != 2 {
        return Err(IoError::Selection { found: found.len() });
    }
    let first = circle_from_attributes(&found[0].1)?;
    let second = circle_from_attributes(&found[1].1)?;
    Ok((first, second))
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Emission
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// One tangent segment as a `<path>` element: absolute start, relative
/// end (`m x,y l dx,dy`), style forwarded verbatim.
pub fn segment_to_path(segment: &LineSegment<String>) -> Path {
    let delta = segment.delta();
    let data = Data::new()
        .move_by((segment.start.x, segment.start.y))
        .line_by((delta.x, delta.y));
    let mut path = Path::new().set("d", data);
    if let Some(style) = &segment.style {
        path = path.set("style", style.as_str());
    }
    path
}

/// Splices both segments into the document, just before the closing
/// `</svg>` tag. All-or-nothing: any earlier failure leaves the caller
/// with no output document at all.
pub fn write_tangents(
    content: &str,
    segments: &[LineSegment<String>; 2],
) -> Result<String, IoError> {
    let insert_at = content
        .rfind("</svg")
        .ok_or_else(|| IoError::MalformedInput("no closing </svg> tag".into()))?;

    let mut out = String::with_capacity(content.len() + 256);
    out.push_str(&content[..insert_at]);
    for segment in segments {
        out.push_str(&segment_to_path(segment).to_string());
        out.push('\n');
    }
    out.push_str(&content[insert_at..]);
    Ok(out)
}
