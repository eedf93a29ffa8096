use std::error;
use std::fmt;

/// Error type for schema discovery model generation.
#[derive(Debug)]
pub enum GenerateError {
    /// Broken configuration (bad case style, unknown language, malformed
    /// document). Raised before the per-entity loop starts; aborts the batch.
    Config(String),

    /// A discovered column reported a type outside the closed primitive set.
    UnknownType {
        /// Column the offending type was reported for.
        column: String,
        /// The raw type string as the driver reported it.
        raw: String,
    },

    /// Any other failure while building a class declaration for one entity.
    Synthesis(String),

    /// A later entity in the batch mapped to a filename an earlier entity
    /// already produced.
    DuplicateFilename { filename: String, existing: String },

    /// I/O error (e.g., reading the config document, writing model files).
    IoError(std::io::Error),

    /// JSON parsing error.
    JsonError(serde_json::Error),
}

impl error::Error for GenerateError {}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(message) => write!(f, "configuration error: {message}"),
            Self::UnknownType { column, raw } => {
                write!(f, "unknown type `{raw}` for column `{column}`")
            }
            Self::Synthesis(message) => write!(f, "{message}"),
            Self::DuplicateFilename { filename, existing } => {
                write!(
                    f,
                    "duplicate output filename `{filename}` (already produced by `{existing}`)"
                )
            }
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
            Self::JsonError(json_error) => fmt::Display::fmt(json_error, f),
        }
    }
}

impl From<&str> for GenerateError {
    fn from(message: &str) -> Self {
        Self::Synthesis(message.to_string())
    }
}

impl From<String> for GenerateError {
    fn from(message: String) -> Self {
        Self::Synthesis(message)
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(io_error: std::io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::JsonError(json_error)
    }
}
