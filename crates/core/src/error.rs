use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a most-active-cookie query can fail.
#[derive(Debug, Error)]
pub enum CookieLogError {
    #[error("CSV file has wrong headers: expected [cookie, timestamp], found {found:?}")]
    InvalidHeaders { found: Vec<String> },
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("not a valid date: '{value}'. Expected format: YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("file '{}' not found", .path.display())]
    NotFound { path: PathBuf },
    #[error("file '{}' does not correspond to a CSV file", .path.display())]
    NotCsv { path: PathBuf },
    #[error("IO error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl CookieLogError {
    /// Wraps an IO error, turning a missing file into `NotFound`.
    pub fn io(path: impl Into<PathBuf>, context: impl Into<String>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::NotFound { path: path.into() };
        }
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_maps_missing_file_to_not_found() {
        let err = CookieLogError::io(
            "logs/missing.csv",
            "opening logs/missing.csv",
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(err, CookieLogError::NotFound { .. }));
        assert_eq!(err.to_string(), "file 'logs/missing.csv' not found");
    }

    #[test]
    fn test_io_keeps_context() {
        let err = CookieLogError::io(
            "cookies.csv",
            "reading cookies.csv",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, CookieLogError::Io { .. }));
        assert!(err.to_string().starts_with("IO error while reading cookies.csv"));
    }

    #[test]
    fn test_invalid_headers_message() {
        let err = CookieLogError::InvalidHeaders {
            found: vec!["wrong".to_string(), "header".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "CSV file has wrong headers: expected [cookie, timestamp], found [\"wrong\", \"header\"]"
        );
    }
}
