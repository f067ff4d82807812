use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("No usable GPS coordinate: tag {0} is missing or empty")]
    MissingCoordinate(&'static str),

    #[error("Malformed rational in {tag} at position {index}: zero denominator")]
    MalformedRational { tag: &'static str, index: usize },

    #[error("Malformed {tag}: expected 3 rationals (degrees, minutes, seconds), found {found}")]
    MalformedTriple { tag: &'static str, found: usize },

    #[error("Malformed {tag}: expected {expected}")]
    UnexpectedType {
        tag: &'static str,
        expected: &'static str,
    },

    #[error("{tag} of {value} degrees is out of range")]
    OutOfRange { tag: &'static str, value: f64 },
}

impl DecodeError {
    /// True when the image simply has no coordinate, as opposed to carrying broken tags.
    pub fn is_missing(&self) -> bool {
        matches!(self, DecodeError::MissingCoordinate(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundingBoxError {
    #[error("Cannot compute a bounding box: no resolvable coordinates")]
    Empty,
}
