//! Tenant activity statuses.
//!
//! The server has renamed its statuses twice. The client always speaks the
//! current names (`ACTIVE`, `INACTIVE`, `OFFLOADED`, ...) and maps the
//! older REST and gRPC names onto them.

use serde::{Deserialize, Serialize};

use crate::capabilities::{Capabilities, Capability};
use crate::error::{WeaviateError, WeaviateResult};
use rpc::weaviate_v1::{self as wire, TenantActivityStatus as ProtoStatus};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenantActivityStatus {
    Active,
    Inactive,
    Offloaded,
    Offloading,
    Onloading,
    /// A REST status this client does not know, passed through verbatim.
    Unknown(String),
}

impl TenantActivityStatus {
    /// Map a REST status string. Unrecognised values pass through.
    pub fn from_rest(status: &str) -> Self {
        match status {
            "HOT" | "ACTIVE" => TenantActivityStatus::Active,
            "COLD" | "INACTIVE" => TenantActivityStatus::Inactive,
            "FROZEN" | "OFFLOADED" => TenantActivityStatus::Offloaded,
            "FREEZING" | "OFFLOADING" => TenantActivityStatus::Offloading,
            "UNFREEZING" | "ONLOADING" => TenantActivityStatus::Onloading,
            other => TenantActivityStatus::Unknown(other.to_string()),
        }
    }

    /// Map a gRPC status. Deprecated aliases map like their successors;
    /// anything else is an error.
    pub fn from_grpc(status: i32) -> WeaviateResult<Self> {
        match ProtoStatus::try_from(status) {
            Ok(ProtoStatus::Hot | ProtoStatus::Active) => Ok(TenantActivityStatus::Active),
            Ok(ProtoStatus::Cold | ProtoStatus::Inactive) => Ok(TenantActivityStatus::Inactive),
            Ok(ProtoStatus::Frozen | ProtoStatus::Offloaded) => {
                Ok(TenantActivityStatus::Offloaded)
            }
            Ok(ProtoStatus::Freezing | ProtoStatus::Offloading) => {
                Ok(TenantActivityStatus::Offloading)
            }
            Ok(ProtoStatus::Unfreezing | ProtoStatus::Onloading) => {
                Ok(TenantActivityStatus::Onloading)
            }
            Ok(ProtoStatus::Unspecified) => Err(WeaviateError::UnsupportedStatus(
                ProtoStatus::Unspecified.as_str_name().to_string(),
            )),
            Err(_) => Err(WeaviateError::UnsupportedStatus(status.to_string())),
        }
    }

    /// REST name understood by the connected server. Servers without the
    /// offloading names get the legacy `HOT`/`COLD`/`FROZEN` family.
    pub fn to_rest(&self, caps: &Capabilities) -> String {
        let current = caps.supports(Capability::OffloadedTenantNames);
        let name = match (self, current) {
            (TenantActivityStatus::Active, true) => "ACTIVE",
            (TenantActivityStatus::Active, false) => "HOT",
            (TenantActivityStatus::Inactive, true) => "INACTIVE",
            (TenantActivityStatus::Inactive, false) => "COLD",
            (TenantActivityStatus::Offloaded, true) => "OFFLOADED",
            (TenantActivityStatus::Offloaded, false) => "FROZEN",
            (TenantActivityStatus::Offloading, true) => "OFFLOADING",
            (TenantActivityStatus::Offloading, false) => "FREEZING",
            (TenantActivityStatus::Onloading, true) => "ONLOADING",
            (TenantActivityStatus::Onloading, false) => "UNFREEZING",
            (TenantActivityStatus::Unknown(raw), _) => return raw.clone(),
        };
        name.to_string()
    }

    pub fn to_grpc(&self) -> WeaviateResult<i32> {
        let status = match self {
            TenantActivityStatus::Active => ProtoStatus::Active,
            TenantActivityStatus::Inactive => ProtoStatus::Inactive,
            TenantActivityStatus::Offloaded => ProtoStatus::Offloaded,
            TenantActivityStatus::Offloading => ProtoStatus::Offloading,
            TenantActivityStatus::Onloading => ProtoStatus::Onloading,
            TenantActivityStatus::Unknown(raw) => {
                return Err(WeaviateError::UnsupportedStatus(raw.clone()));
            }
        };
        Ok(status as i32)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub name: String,
    pub activity_status: TenantActivityStatus,
}

impl Tenant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activity_status: TenantActivityStatus::Active,
        }
    }
}

impl TryFrom<wire::Tenant> for Tenant {
    type Error = WeaviateError;

    fn try_from(proto: wire::Tenant) -> Result<Self, Self::Error> {
        Ok(Tenant {
            activity_status: TenantActivityStatus::from_grpc(proto.activity_status)?,
            name: proto.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::ServerVersion;

    #[test]
    fn test_rest_aliases() {
        for (old, new) in [
            ("HOT", "ACTIVE"),
            ("COLD", "INACTIVE"),
            ("FROZEN", "OFFLOADED"),
            ("FREEZING", "OFFLOADING"),
            ("UNFREEZING", "ONLOADING"),
        ] {
            assert_eq!(
                TenantActivityStatus::from_rest(old),
                TenantActivityStatus::from_rest(new)
            );
        }
    }

    #[test]
    fn test_unknown_rest_passes_through() {
        let status = TenantActivityStatus::from_rest("MIGRATING");
        assert_eq!(status, TenantActivityStatus::Unknown("MIGRATING".into()));
        assert_eq!(status.to_rest(&Capabilities::latest()), "MIGRATING");
    }

    #[test]
    fn test_grpc_mapping() {
        assert_eq!(
            TenantActivityStatus::from_grpc(ProtoStatus::Hot as i32).unwrap(),
            TenantActivityStatus::Active
        );
        assert_eq!(
            TenantActivityStatus::from_grpc(ProtoStatus::Unfreezing as i32).unwrap(),
            TenantActivityStatus::Onloading
        );
        assert!(matches!(
            TenantActivityStatus::from_grpc(0),
            Err(WeaviateError::UnsupportedStatus(_))
        ));
        assert!(matches!(
            TenantActivityStatus::from_grpc(42),
            Err(WeaviateError::UnsupportedStatus(_))
        ));
    }

    #[test]
    fn test_round_trip_both_directions() {
        let caps = Capabilities::latest();
        for status in [
            TenantActivityStatus::Active,
            TenantActivityStatus::Inactive,
            TenantActivityStatus::Offloaded,
            TenantActivityStatus::Offloading,
            TenantActivityStatus::Onloading,
        ] {
            let grpc = status.to_grpc().unwrap();
            assert_eq!(TenantActivityStatus::from_grpc(grpc).unwrap(), status);
            assert_eq!(TenantActivityStatus::from_rest(&status.to_rest(&caps)), status);
        }
    }

    #[test]
    fn test_legacy_rest_names_for_old_servers() {
        let caps = Capabilities::for_version(ServerVersion::new(1, 25, 0));
        assert_eq!(TenantActivityStatus::Active.to_rest(&caps), "HOT");
        assert_eq!(TenantActivityStatus::Offloaded.to_rest(&caps), "FROZEN");
    }

    #[test]
    fn test_tenant_from_wire() {
        let tenant = Tenant::try_from(wire::Tenant {
            name: "acme".into(),
            activity_status: ProtoStatus::Cold as i32,
        })
        .unwrap();
        assert_eq!(tenant.name, "acme");
        assert_eq!(tenant.activity_status, TenantActivityStatus::Inactive);
    }
}
