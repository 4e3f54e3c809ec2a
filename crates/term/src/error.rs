//! Host console errors.

use thiserror::Error;

/// Failures reported by a [`HostConsole`](crate::HostConsole).
///
/// Only `HandleUnavailable` ever reaches callers of this crate: query and clear
/// failures are absorbed by the provider and renderer with a warning.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("console handle unavailable: {0}")]
    HandleUnavailable(String),
    #[error("could not query display size: {0}")]
    Query(String),
    #[error("could not clear screen: {0}")]
    Clear(String),
}

impl HostError {
    /// Returns the host operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            HostError::HandleUnavailable(_) => "acquire",
            HostError::Query(_) => "query",
            HostError::Clear(_) => "clear",
        }
    }

    /// Returns the underlying reason for the error.
    pub fn reason(&self) -> &str {
        match self {
            HostError::HandleUnavailable(r) | HostError::Query(r) | HostError::Clear(r) => r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_error_operation() {
        assert_eq!(HostError::HandleUnavailable("x".into()).operation(), "acquire");
        assert_eq!(HostError::Query("x".into()).operation(), "query");
        assert_eq!(HostError::Clear("x".into()).operation(), "clear");
    }

    #[test]
    fn test_host_error_reason() {
        let err = HostError::Query("not a tty".into());
        assert_eq!(err.reason(), "not a tty");
    }

    #[test]
    fn test_host_error_display() {
        let err = HostError::Clear("denied".into());
        assert_eq!(err.to_string(), "could not clear screen: denied");
    }
}
