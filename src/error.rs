//! Error types for booster_convert

use std::fmt;

/// Unified error type for conversion operations
#[derive(Debug)]
pub enum ConvertError {
    /// Reading input or writing output failed
    Io(std::io::Error),
    /// Input is not valid JSON
    Parse(serde_json::Error),
    /// A slot description tree has a bare label at its root
    InvalidTreeShape(String),
    /// A set or card record is missing a required field
    MalformedRecord { set_code: String, detail: String },
    /// A required category resolved to an empty card pool
    UnsatisfiableBooster { set_code: String, category: String },
    /// A set's releaseDate is not a YYYY-MM-DD date
    BadReleaseDate { set_code: String, value: String },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(e) => write!(f, "I/O error: {}", e),
            ConvertError::Parse(e) => write!(f, "Parse error: {}", e),
            ConvertError::InvalidTreeShape(label) => {
                write!(f, "Slot tree root must be a list, got bare label: {}", label)
            }
            ConvertError::MalformedRecord { set_code, detail } => {
                write!(f, "Malformed record in set {}: {}", set_code, detail)
            }
            ConvertError::UnsatisfiableBooster { set_code, category } => {
                write!(
                    f,
                    "Set {} has no cards for required category: {}",
                    set_code, category
                )
            }
            ConvertError::BadReleaseDate { set_code, value } => {
                write!(f, "Set {} has unparseable releaseDate: {}", set_code, value)
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io(e) => Some(e),
            ConvertError::Parse(e) => Some(e),
            ConvertError::InvalidTreeShape(_) => None,
            ConvertError::MalformedRecord { .. } => None,
            ConvertError::UnsatisfiableBooster { .. } => None,
            ConvertError::BadReleaseDate { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Parse(err)
    }
}

/// Result alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
