//! Errors at the import/export boundary.

use std::fmt;

/// Errors from loading a saved configuration.
#[derive(Debug)]
pub enum ImportError {
    /// The input was not valid JSON at all.
    Parse(serde_json::Error),
    /// Valid JSON, but neither an array of racks nor a single rack
    /// object. No partial load happens.
    UnrecognizedShape,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "configuration is not valid JSON: {err}"),
            Self::UnrecognizedShape => {
                write!(f, "JSON is neither a rack list nor a single rack object")
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::UnrecognizedShape => None,
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Errors from writing exports to disk.
#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "export failed: {err}"),
            Self::Csv(err) => write!(f, "inventory export failed: {err}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
