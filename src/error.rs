use std::fmt;

/// A vector's length disagrees with the dimension the receiving operation
/// requires (network input/output width, or the scored quiz count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionError {
    /// What was being measured, e.g. `"input width"`.
    pub what: &'static str,
    pub expected: usize,
    pub actual: usize,
}

impl DimensionError {
    pub fn new(what: &'static str, expected: usize, actual: usize) -> DimensionError {
        DimensionError {
            what,
            expected,
            actual,
        }
    }
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} mismatch: expected {}, got {}",
            self.what, self.expected, self.actual
        )
    }
}

impl std::error::Error for DimensionError {}

/// Errors raised while saving or loading a persisted model.
#[derive(Debug)]
pub enum FormatError {
    /// Underlying I/O failure while reading or writing the model file.
    Io(std::io::Error),
    /// The byte stream is not a well-formed model document (truncated,
    /// not JSON, or missing fields).
    Malformed(serde_json::Error),
    /// The declared layer widths do not agree with the stored matrices.
    Topology(String),
    /// A stored weight or bias is NaN or infinite.
    NonFinite { layer: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Io(err) => write!(f, "I/O error while accessing model file: {err}"),
            FormatError::Malformed(err) => write!(f, "malformed model document: {err}"),
            FormatError::Topology(detail) => {
                write!(f, "model document has inconsistent topology: {detail}")
            }
            FormatError::NonFinite { layer } => {
                write!(f, "model document contains a non-finite value in layer {layer}")
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Io(err) => Some(err),
            FormatError::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FormatError {
    fn from(err: std::io::Error) -> Self {
        FormatError::Io(err)
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Malformed(err)
    }
}
