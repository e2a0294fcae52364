//! Solver errors

use crate::float_types::Real;
use std::fmt::Display;

/// Everything that can make the tangent construction itself fail.
///
/// I/O-level failures (shape extraction, selection count) live in
/// [`crate::io::IoError`]; this enum only covers the geometric core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TangentError {
    /// (InvalidRadius) A radius is zero, negative, NaN or infinite
    InvalidRadius(Real),
    /// (NotCircular) The horizontal and vertical radii differ beyond tolerance
    NotCircular { rx: Real, ry: Real },
    /// (NoTangent) The auxiliary leg exceeds the center distance, so the
    /// requested tangent configuration does not exist
    NoTangent { leg: Real, distance: Real },
}

impl Display for TangentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TangentError::InvalidRadius(r) => {
                write!(f, "(InvalidRadius) Radius must be finite and positive, got: {}", r)
            },
            TangentError::NotCircular { rx, ry } => {
                write!(f, "(NotCircular) One or both objects may be elliptical: rx = {}, ry = {}", rx, ry)
            },
            TangentError::NoTangent { leg, distance } => {
                write!(
                    f,
                    "(NoTangent) No tangent line exists for this configuration: leg {} exceeds center distance {}",
                    leg, distance
                )
            },
        }
    }
}
