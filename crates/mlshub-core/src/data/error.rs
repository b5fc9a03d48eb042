use thiserror::Error;

use crate::api::NetworkError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalLoadError {
    #[error("Teams data file not found: {0}")]
    NotFound(String),

    #[error("Failed to decode teams data: {0}")]
    Decode(String),
}

/// Errors surfaced to the presentation layer.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to load local data: {0}")]
    LocalDataLoading(#[from] LocalLoadError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("No data available for this team")]
    NoDataAvailable,

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl DataError {
    /// Classify an arbitrary error, keeping known kinds intact.
    pub fn from_any(error: anyhow::Error) -> Self {
        let error = match error.downcast::<DataError>() {
            Ok(data) => return data,
            Err(e) => e,
        };
        let error = match error.downcast::<NetworkError>() {
            Ok(network) => return DataError::Network(network),
            Err(e) => e,
        };
        match error.downcast::<LocalLoadError>() {
            Ok(local) => DataError::LocalDataLoading(local),
            Err(e) => DataError::Unknown(format!("{:#}", e)),
        }
    }

    /// Short tag for keying user-facing messages.
    pub fn kind(&self) -> &'static str {
        match self {
            DataError::LocalDataLoading(_) => "local_data",
            DataError::Network(_) => "network",
            DataError::NoDataAvailable => "no_data",
            DataError::Unknown(_) => "unknown",
        }
    }

    /// HTTP status behind a network failure, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DataError::Network(e) => e.status_code(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_from_any_keeps_data_error() {
        let err = DataError::from_any(DataError::NoDataAvailable.into());
        assert!(matches!(err, DataError::NoDataAvailable));
    }

    #[test]
    fn test_from_any_wraps_network_error() {
        let err = DataError::from_any(NetworkError::ServerError(404).into());
        assert!(matches!(err, DataError::Network(NetworkError::ServerError(404))));
        assert_eq!(err.kind(), "network");
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_from_any_wraps_local_error() {
        let err = DataError::from_any(LocalLoadError::NotFound("teams.json".to_string()).into());
        assert!(matches!(err, DataError::LocalDataLoading(LocalLoadError::NotFound(_))));
        assert_eq!(err.kind(), "local_data");
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_from_any_unknown_keeps_context() {
        let source: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"));
        let err = DataError::from_any(source.context("Failed to refresh").unwrap_err());

        match err {
            DataError::Unknown(msg) => {
                assert!(msg.contains("Failed to refresh"));
                assert!(msg.contains("disk on fire"));
            }
            other => panic!("expected Unknown, got {:?}", other),
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DataError::from(NetworkError::ServerError(500)).to_string(),
            "Network error: Server error (code: 500)"
        );
        assert_eq!(DataError::NoDataAvailable.to_string(), "No data available for this team");
    }
}
