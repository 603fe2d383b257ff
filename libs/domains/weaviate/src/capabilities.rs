use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{WeaviateError, WeaviateResult};

/// Semantic version reported by a Weaviate server (`1.27.3`, `v1.25.0-rc.1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ServerVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for ServerVersion {
    type Err = WeaviateError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim().trim_start_matches('v');
        // pre-release and build metadata never change the capability set
        let core = trimmed
            .split(['-', '+'])
            .next()
            .unwrap_or_default();

        let mut parts = core.split('.');
        let mut next = |name: &str, required: bool| -> WeaviateResult<u32> {
            match parts.next() {
                Some(part) => part.parse().map_err(|_| {
                    WeaviateError::Config(format!("Invalid {} in server version '{}'", name, raw))
                }),
                None if required => Err(WeaviateError::Config(format!(
                    "Server version '{}' is missing its {}",
                    raw, name
                ))),
                None => Ok(0),
            }
        };

        let major = next("major", true)?;
        let minor = next("minor", true)?;
        let patch = next("patch", false)?;
        Ok(Self::new(major, minor, patch))
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Server features whose wire shape depends on the connected version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Homogeneous typed list messages in property values.
    TypedListValues,
    /// Several target vectors in one search with a combination method.
    MultiTargetSearch,
    /// Explicit per-target weights in a multi-target join.
    PerTargetWeights,
    /// Several vectors (or one multi-vector) for a single target.
    MultiVectorPerTarget,
    /// `AND`/`OR` operator options on keyword search.
    Bm25SearchOperator,
    /// ACTIVE/INACTIVE/OFFLOADED tenant status names.
    OffloadedTenantNames,
}

impl Capability {
    pub fn minimum_version(self) -> ServerVersion {
        match self {
            Capability::TypedListValues => ServerVersion::new(1, 25, 0),
            Capability::MultiTargetSearch => ServerVersion::new(1, 26, 0),
            Capability::OffloadedTenantNames => ServerVersion::new(1, 26, 0),
            Capability::PerTargetWeights => ServerVersion::new(1, 27, 0),
            Capability::MultiVectorPerTarget => ServerVersion::new(1, 27, 0),
            Capability::Bm25SearchOperator => ServerVersion::new(1, 31, 0),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Capability::TypedListValues => "Typed list property values",
            Capability::MultiTargetSearch => "Multi-target vector search",
            Capability::PerTargetWeights => "Per-target vector weights",
            Capability::MultiVectorPerTarget => "Multiple vectors per target",
            Capability::Bm25SearchOperator => "BM25 search operators",
            Capability::OffloadedTenantNames => "Offloaded tenant activity statuses",
        }
    }
}

/// What the connected server can accept, resolved once per connection and
/// passed explicitly to the serializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    version: ServerVersion,
}

impl Capabilities {
    pub fn for_version(version: ServerVersion) -> Self {
        Self { version }
    }

    /// Everything this client knows how to speak.
    pub fn latest() -> Self {
        Self::for_version(ServerVersion::new(1, 31, 0))
    }

    pub fn version(&self) -> ServerVersion {
        self.version
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.version >= capability.minimum_version()
    }

    /// Fail with [`WeaviateError::UnsupportedFeature`] naming `capability`
    /// when the server is too old for it.
    pub fn require(&self, capability: Capability) -> WeaviateResult<()> {
        if self.supports(capability) {
            Ok(())
        } else {
            Err(WeaviateError::UnsupportedFeature {
                capability: capability.description().to_string(),
                version: self.version.to_string(),
            })
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::latest()
    }
}
