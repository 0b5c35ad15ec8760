// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io};

#[derive(Debug)]
pub enum AnnotError {
    Io(io::Error),
    Json(serde_json::Error),
    /// The annotation tool's output had no `#` header line.
    MalformedOutput(String),
    /// A header name has no entry in the header reference table.
    UnknownHeaderField(String),
    Config(String),
    Annotator(String),
}

// These allow conversion to AnnotError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for AnnotError {
    fn from(e: io::Error) -> Self {
        AnnotError::Io(e)
    }
}

impl From<serde_json::Error> for AnnotError {
    fn from(e: serde_json::Error) -> Self {
        AnnotError::Json(e)
    }
}

impl From<regex::Error> for AnnotError {
    fn from(e: regex::Error) -> Self {
        AnnotError::Config(format!("bad stderr pattern: {}", e))
    }
}

impl fmt::Display for AnnotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotError::Io(e) => write!(f, "I/O error: {}", e),
            AnnotError::Json(e) => write!(f, "JSON error: {}", e),
            AnnotError::MalformedOutput(msg) => write!(f, "Malformed annotation output: {}", msg),
            AnnotError::UnknownHeaderField(name) => write!(f, "Unknown header field: {}", name),
            AnnotError::Config(msg) => write!(f, "Config error: {}", msg),
            AnnotError::Annotator(msg) => write!(f, "Annotator error: {}", msg),
        }
    }
}

impl error::Error for AnnotError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AnnotError::Io(e) => Some(e),
            AnnotError::Json(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_header() {
        let err = AnnotError::UnknownHeaderField(String::from("FOO"));
        assert_eq!(err.to_string(), "Unknown header field: FOO");
    }

    #[test]
    fn test_from_io() {
        let err: AnnotError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AnnotError::Io(_)));
        assert!(error::Error::source(&err).is_some());
    }
}
