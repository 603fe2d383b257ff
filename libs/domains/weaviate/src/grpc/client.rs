use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tonic::{Response, Status};

use super::WeaviateConfig;
use crate::capabilities::ServerVersion;
use crate::error::{WeaviateError, WeaviateResult};
use crate::transport::WeaviateTransport;
use rpc::weaviate_v1::{
    BatchObjectsReply, BatchObjectsRequest, SearchReply, SearchRequest, TenantsGetReply,
    TenantsGetRequest, weaviate_client::WeaviateClient,
};

/// tonic-backed implementation of WeaviateTransport
#[derive(Clone)]
pub struct GrpcTransport {
    client: WeaviateClient<Channel>,
    server_version: ServerVersion,
}

impl GrpcTransport {
    /// Build a transport over a lazily connected channel. The first call
    /// opens the connection.
    pub fn new(config: &WeaviateConfig) -> WeaviateResult<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let channel = Endpoint::from_shared(config.grpc_url.clone())
            .map_err(|e| {
                WeaviateError::Config(format!("Invalid gRPC url '{}': {}", config.grpc_url, e))
            })?
            .timeout(timeout)
            .connect_timeout(timeout)
            .connect_lazy();

        let server_version = config.capabilities()?.version();
        tracing::info!(url = %config.grpc_url, version = %server_version, "Weaviate gRPC transport configured");

        Ok(Self::from_channel(channel, server_version))
    }

    pub fn from_channel(channel: Channel, server_version: ServerVersion) -> Self {
        Self {
            client: WeaviateClient::new(channel),
            server_version,
        }
    }
}

fn query_failed(call: &str, status: Status) -> WeaviateError {
    tracing::error!(call, code = ?status.code(), message = %status.message(), "Weaviate call failed");
    WeaviateError::query(&status)
}

#[async_trait]
impl WeaviateTransport for GrpcTransport {
    async fn server_version(&self) -> WeaviateResult<ServerVersion> {
        Ok(self.server_version)
    }

    async fn search(&self, request: SearchRequest) -> WeaviateResult<SearchReply> {
        let mut client = self.client.clone();
        client
            .search(request)
            .await
            .map(Response::into_inner)
            .map_err(|status| query_failed("Search", status))
    }

    async fn batch_objects(
        &self,
        request: BatchObjectsRequest,
    ) -> WeaviateResult<BatchObjectsReply> {
        let mut client = self.client.clone();
        client
            .batch_objects(request)
            .await
            .map(Response::into_inner)
            .map_err(|status| {
                tracing::error!(code = ?status.code(), message = %status.message(), "BatchObjects call failed");
                WeaviateError::batch(&status)
            })
    }

    async fn tenants_get(&self, request: TenantsGetRequest) -> WeaviateResult<TenantsGetReply> {
        let mut client = self.client.clone();
        client
            .tenants_get(request)
            .await
            .map(Response::into_inner)
            .map_err(|status| query_failed("TenantsGet", status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_uses_configured_version() {
        let config = WeaviateConfig::default().with_server_version("1.26.2");
        let transport = GrpcTransport::new(&config).unwrap();
        assert_eq!(
            transport.server_version().await.unwrap(),
            ServerVersion::new(1, 26, 2)
        );
    }

    #[tokio::test]
    async fn test_new_rejects_bad_url() {
        let config = WeaviateConfig::new("not a url");
        let err = GrpcTransport::new(&config).err().unwrap();
        assert!(matches!(err, WeaviateError::Config(_)));
    }
}
