use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while translating queries to and from the wire format.
///
/// Validation errors (`InvalidInput`, `UnsupportedFeature`,
/// `InvalidFilterTarget`) are raised before any network call. The decode
/// errors mean the server reply broke the wire contract and are never
/// defaulted away. `Query` and `Batch` wrap transport failures.
#[derive(Debug, Error)]
pub enum WeaviateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{capability} is not supported by Weaviate {version}")]
    UnsupportedFeature { capability: String, version: String },

    #[error("Invalid filter target: {0}")]
    InvalidFilterTarget(String),

    #[error("Wire decode error: {0}")]
    WireDecode(String),

    #[error("Malformed vector: {len} bytes is not a multiple of the {lane}-byte lane width")]
    MalformedVector { len: usize, lane: usize },

    #[error("Search result is missing its object uuid")]
    MissingUuid,

    #[error("Unsupported tenant activity status: {0}")]
    UnsupportedStatus(String),

    #[error("Query call with protocol {protocol} failed with message: {message}")]
    Query { protocol: String, message: String },

    #[error("Batch objects call with protocol {protocol} failed with message: {message}")]
    Batch { protocol: String, message: String },

    #[error("Failed to read media file {}: {source}", path.display())]
    MediaFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type WeaviateResult<T> = Result<T, WeaviateError>;

impl WeaviateError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        WeaviateError::InvalidInput(msg.into())
    }

    pub(crate) fn decode(msg: impl Into<String>) -> Self {
        WeaviateError::WireDecode(msg.into())
    }

    pub(crate) fn query(status: &tonic::Status) -> Self {
        WeaviateError::Query {
            protocol: "gRPC".to_string(),
            message: status.message().to_string(),
        }
    }

    pub(crate) fn batch(status: &tonic::Status) -> Self {
        WeaviateError::Batch {
            protocol: "gRPC".to_string(),
            message: status.message().to_string(),
        }
    }

    /// True for errors raised locally before any request left the process.
    pub fn is_local_validation(&self) -> bool {
        matches!(
            self,
            WeaviateError::InvalidInput(_)
                | WeaviateError::UnsupportedFeature { .. }
                | WeaviateError::InvalidFilterTarget(_)
        )
    }
}

impl From<core_config::ConfigError> for WeaviateError {
    fn from(err: core_config::ConfigError) -> Self {
        WeaviateError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for WeaviateError {
    fn from(err: serde_json::Error) -> Self {
        WeaviateError::InvalidInput(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_name_the_protocol() {
        let status = tonic::Status::unavailable("connection refused");
        let err = WeaviateError::query(&status);
        assert_eq!(
            err.to_string(),
            "Query call with protocol gRPC failed with message: connection refused"
        );
        assert!(!err.is_local_validation());

        let err = WeaviateError::batch(&status);
        assert!(err.to_string().starts_with("Batch objects call with protocol gRPC"));
    }

    #[test]
    fn test_unsupported_feature_names_capability() {
        let err = WeaviateError::UnsupportedFeature {
            capability: "Multi-target vector search".to_string(),
            version: "1.25.0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Multi-target vector search is not supported by Weaviate 1.25.0"
        );
        assert!(err.is_local_validation());
    }

    #[test]
    fn test_malformed_vector_message() {
        let err = WeaviateError::MalformedVector { len: 7, lane: 4 };
        assert!(err.to_string().contains("7 bytes"));
    }
}
