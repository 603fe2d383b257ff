use async_trait::async_trait;

use crate::capabilities::ServerVersion;
use crate::error::WeaviateResult;
use rpc::weaviate_v1::{
    BatchObjectsReply, BatchObjectsRequest, SearchReply, SearchRequest, TenantsGetReply,
    TenantsGetRequest,
};

/// The calls the translation layer needs from a Weaviate connection.
///
/// Implementations attribute failures to the call that made them
/// (`Query` for search and tenants, `Batch` for batch inserts).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeaviateTransport: Send + Sync {
    /// Version of the connected server, used to pick wire shapes.
    async fn server_version(&self) -> WeaviateResult<ServerVersion>;

    async fn search(&self, request: SearchRequest) -> WeaviateResult<SearchReply>;

    async fn batch_objects(&self, request: BatchObjectsRequest)
    -> WeaviateResult<BatchObjectsReply>;

    async fn tenants_get(&self, request: TenantsGetRequest) -> WeaviateResult<TenantsGetReply>;
}
