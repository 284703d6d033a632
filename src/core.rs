use thiserror::Error;

/// Failure while scanning or validating a WKT literal.
///
/// Offsets are byte offsets into the input where the problem was detected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unknown or unimplemented geometry '{0}'")]
    UnknownGeometryType(String),

    #[error("expected a geometry keyword at byte {offset}")]
    MissingIdentifier { offset: usize },

    #[error("expected {expected} at byte {offset}, got {}", describe(.found))]
    ExpectedToken {
        expected: &'static str,
        found: Option<char>,
        offset: usize,
    },

    #[error("invalid numeric literal at byte {offset}")]
    InvalidNumber { offset: usize },

    #[error("expected {expected}, got {found} (at byte {offset})")]
    ArityMismatch {
        expected: &'static str,
        found: usize,
        offset: usize,
    },

    #[error("a polygon ring must have at least 4 points, got {0}")]
    RingTooShort(usize),

    #[error("a polygon ring must be closed")]
    UnclosedRing,

    #[error("trailing characters after geometry at byte {offset}")]
    TrailingCharacters { offset: usize },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{c}'"),
        None => String::from("end of input"),
    }
}

/// Crate level error type
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Failed to parse WKT: {0}")]
    Parse(#[from] ParseError),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: ParseError,
    },

    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type GeomResult<T> = Result<T, GeometryError>;

/// Trait with common functionality for all geometric objects
pub trait GeometricObject {
    fn wkt(&self) -> String;
}

/// Macro to implement the Display trait for Geometric Object types
macro_rules! display_for_geom {
    ($type:ty) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.wkt())
            }
        }
    };
}

pub(crate) use display_for_geom;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseError::ExpectedToken {
            expected: "'('",
            found: Some('x'),
            offset: 5,
        };
        assert_eq!(err.to_string(), "expected '(' at byte 5, got 'x'");

        let err = ParseError::ExpectedToken {
            expected: "',' or ')'",
            found: None,
            offset: 9,
        };
        assert_eq!(err.to_string(), "expected ',' or ')' at byte 9, got end of input");

        let wrapped = GeometryError::Context {
            context: String::from("feature from WKT"),
            source: ParseError::UnclosedRing,
        };
        assert_eq!(wrapped.to_string(), "feature from WKT: a polygon ring must be closed");

        let io = GeometryError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));
        assert_eq!(io.to_string(), "I/O failure: no such file");
    }
}
