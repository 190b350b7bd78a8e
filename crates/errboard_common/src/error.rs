//! Error types for errboard.

use thiserror::Error;

/// Failures while loading error groups from the aggregation service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Service returned HTTP {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Fetch cancelled")]
    Cancelled,
}

/// Coarse classification used by the panel and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Decode,
    Cancelled,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Network(_) | FetchError::Status(_) => FailureKind::Network,
            FetchError::Decode(_) => FailureKind::Decode,
            FetchError::Cancelled => FailureKind::Cancelled,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_as_network_failure() {
        assert_eq!(FetchError::Status(502).kind(), FailureKind::Network);
        assert_eq!(
            FetchError::Network("refused".into()).kind(),
            FailureKind::Network
        );
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let fetch: FetchError = err.into();
        assert_eq!(fetch.kind(), FailureKind::Decode);
    }

    #[test]
    fn test_cancelled() {
        assert!(FetchError::Cancelled.is_cancelled());
        assert!(!FetchError::Decode("x".into()).is_cancelled());
    }
}
