pub mod svg;

use crate::errors::TangentError;

/// Generic I/O and document‑level errors.
///
/// Geometric failures bubble up wrapped in [`IoError::Tangent`] so the
/// binary has a single error type to report.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    ParseFloat(std::num::ParseFloatError),

    /// A shape count other than two was selected.
    Selection { found: usize },
    /// A selected shape carries none of the supported circle encodings.
    ShapeRead(String),
    MalformedPath(String),
    MalformedInput(String),

    /// Error bubbled up from the `svg` crate during parsing.
    SvgParsing(::svg::parser::Error),
    Tangent(TangentError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            ParseFloat(error) => write!(f, "Could not parse float: {error}"),

            Selection { found } => write!(
                f,
                "Please select exactly two circles and try again! (found {found})"
            ),
            ShapeRead(msg) => write!(f, "Not a recognizable circle or ellipse: {msg}"),
            MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),

            SvgParsing(error) => write!(f, "SVG Parsing error: {error}"),
            Tangent(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<std::num::ParseFloatError> for IoError {
    fn from(value: std::num::ParseFloatError) -> Self {
        Self::ParseFloat(value)
    }
}

impl From<::svg::parser::Error> for IoError {
    fn from(value: ::svg::parser::Error) -> Self {
        Self::SvgParsing(value)
    }
}

impl From<TangentError> for IoError {
    fn from(value: TangentError) -> Self {
        Self::Tangent(value)
    }
}
