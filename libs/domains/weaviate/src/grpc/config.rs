use core_config::{ConfigError, FromEnv, env_optional, env_or_default, env_parse};

use crate::capabilities::{Capabilities, ServerVersion};
use crate::error::WeaviateResult;
use crate::models::ConsistencyLevel;

const DEFAULT_GRPC_URL: &str = "http://localhost:50051";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BATCH_SIZE: usize = 100;

/// Weaviate gRPC connection configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WeaviateConfig {
    pub grpc_url: String,
    /// Version of the server, when known up front. Without it the latest
    /// wire shapes are assumed.
    pub server_version: Option<String>,
    pub timeout_secs: u64,
    /// Objects per `BatchObjects` call.
    pub batch_size: usize,
    pub consistency_level: Option<ConsistencyLevel>,
}

impl WeaviateConfig {
    pub fn new(grpc_url: impl Into<String>) -> Self {
        Self {
            grpc_url: grpc_url.into(),
            ..Default::default()
        }
    }

    pub fn with_server_version(mut self, version: impl Into<String>) -> Self {
        self.server_version = Some(version.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = Some(level);
        self
    }

    /// Capabilities implied by the configured server version.
    pub fn capabilities(&self) -> WeaviateResult<Capabilities> {
        match &self.server_version {
            Some(raw) => Ok(Capabilities::for_version(raw.parse::<ServerVersion>()?)),
            None => Ok(Capabilities::latest()),
        }
    }
}

impl FromEnv for WeaviateConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let batch_size = env_parse("WEAVIATE_BATCH_SIZE", DEFAULT_BATCH_SIZE)?;
        if batch_size == 0 {
            return Err(ConfigError::ParseError {
                key: "WEAVIATE_BATCH_SIZE".to_string(),
                details: "batch size must be at least 1".to_string(),
            });
        }

        let consistency_level = env_optional("WEAVIATE_CONSISTENCY_LEVEL")
            .map(|raw| {
                raw.trim()
                    .parse::<ConsistencyLevel>()
                    .map_err(|e| ConfigError::ParseError {
                        key: "WEAVIATE_CONSISTENCY_LEVEL".to_string(),
                        details: e.to_string(),
                    })
            })
            .transpose()?;

        Ok(Self {
            grpc_url: env_or_default("WEAVIATE_GRPC_URL", DEFAULT_GRPC_URL),
            server_version: env_optional("WEAVIATE_SERVER_VERSION"),
            timeout_secs: env_parse("WEAVIATE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            batch_size,
            consistency_level,
        })
    }
}

impl Default for WeaviateConfig {
    fn default() -> Self {
        Self {
            grpc_url: DEFAULT_GRPC_URL.to_string(),
            server_version: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            batch_size: DEFAULT_BATCH_SIZE,
            consistency_level: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::Capability;

    const VARS: [&str; 5] = [
        "WEAVIATE_GRPC_URL",
        "WEAVIATE_SERVER_VERSION",
        "WEAVIATE_TIMEOUT_SECS",
        "WEAVIATE_BATCH_SIZE",
        "WEAVIATE_CONSISTENCY_LEVEL",
    ];

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars_unset(VARS, || {
            let config = WeaviateConfig::from_env().unwrap();
            assert_eq!(config, WeaviateConfig::default());
            assert_eq!(config.grpc_url, "http://localhost:50051");
        });
    }

    #[test]
    fn test_reads_all_variables() {
        temp_env::with_vars(
            [
                ("WEAVIATE_GRPC_URL", Some("http://weaviate:50051")),
                ("WEAVIATE_SERVER_VERSION", Some("v1.25.4")),
                ("WEAVIATE_TIMEOUT_SECS", Some("5")),
                ("WEAVIATE_BATCH_SIZE", Some("250")),
                ("WEAVIATE_CONSISTENCY_LEVEL", Some("quorum")),
            ],
            || {
                let config = WeaviateConfig::from_env().unwrap();
                assert_eq!(config.grpc_url, "http://weaviate:50051");
                assert_eq!(config.timeout_secs, 5);
                assert_eq!(config.batch_size, 250);
                assert_eq!(config.consistency_level, Some(ConsistencyLevel::Quorum));

                let caps = config.capabilities().unwrap();
                assert!(caps.supports(Capability::TypedListValues));
                assert!(!caps.supports(Capability::MultiTargetSearch));
            },
        );
    }

    #[test]
    fn test_rejects_zero_batch_size() {
        temp_env::with_var("WEAVIATE_BATCH_SIZE", Some("0"), || {
            assert!(WeaviateConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_rejects_unknown_consistency_level() {
        temp_env::with_var("WEAVIATE_CONSISTENCY_LEVEL", Some("SOME"), || {
            let err = WeaviateConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("WEAVIATE_CONSISTENCY_LEVEL"));
        });
    }

    #[test]
    fn test_bad_server_version_is_config_error() {
        let config = WeaviateConfig::default().with_server_version("latest");
        assert!(config.capabilities().is_err());
    }
}
