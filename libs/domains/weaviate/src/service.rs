use std::sync::Arc;
use std::time::Instant;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tokio::sync::OnceCell;
use tracing::instrument;
use uuid::Uuid;

use crate::batch::{self, BatchObject, BatchObjectsReturn};
use crate::capabilities::Capabilities;
use crate::conversions::consistency_to_proto;
use crate::deserialize::ResponseDeserializer;
use crate::error::{WeaviateError, WeaviateResult};
use crate::grpc::WeaviateConfig;
use crate::models::{
    CollectionContext, ConsistencyLevel, GenerativeParameters, GroupByOptions, MediaSource,
    QueryOptions, Search,
};
use crate::results::{
    GenerativeGroupByReturn, GenerativeReturn, GroupByReturn, QueryReturn, WeaviateObject,
};
use crate::serialize::QuerySerializer;
use crate::tenants::Tenant;
use crate::transport::WeaviateTransport;
use rpc::weaviate_v1::{
    BatchObjectsRequest, SearchReply, SearchRequest, TenantNames, TenantsGetRequest,
};

const DEFAULT_BATCH_SIZE: usize = 100;

/// Queries, batch inserts and tenant lookups for one collection.
///
/// Derived services (`with_tenant`, `with_consistency_level`) share the
/// transport and the resolved server capabilities.
pub struct CollectionService<T: WeaviateTransport> {
    transport: Arc<T>,
    context: CollectionContext,
    capabilities: Arc<OnceCell<Capabilities>>,
    batch_size: usize,
}

impl<T: WeaviateTransport> Clone for CollectionService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            context: self.context.clone(),
            capabilities: Arc::clone(&self.capabilities),
            batch_size: self.batch_size,
        }
    }
}

impl<T: WeaviateTransport> CollectionService<T> {
    pub fn new(transport: T, context: CollectionContext) -> Self {
        Self {
            transport: Arc::new(transport),
            context,
            capabilities: Arc::new(OnceCell::new()),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Service for `collection` using the batch size and default
    /// consistency level from `config`.
    pub fn from_config(transport: T, collection: &str, config: &WeaviateConfig) -> Self {
        let mut context = CollectionContext::new(collection);
        context.consistency_level = config.consistency_level;
        Self::new(transport, context).with_batch_size(config.batch_size)
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn context(&self) -> &CollectionContext {
        &self.context
    }

    /// A service for the same collection scoped to `tenant`.
    pub fn with_tenant(&self, tenant: impl Into<String>) -> Self {
        let mut derived = self.clone();
        derived.context = derived.context.with_tenant(tenant);
        derived
    }

    pub fn with_consistency_level(&self, level: ConsistencyLevel) -> Self {
        let mut derived = self.clone();
        derived.context = derived.context.with_consistency_level(level);
        derived
    }

    /// Server capabilities, looked up once and shared by derived services.
    pub async fn capabilities(&self) -> WeaviateResult<Capabilities> {
        self.capabilities
            .get_or_try_init(|| async {
                let version = self.transport.server_version().await?;
                tracing::debug!(%version, "Resolved Weaviate server capabilities");
                Ok::<_, WeaviateError>(Capabilities::for_version(version))
            })
            .await
            .copied()
    }

    /// Serialize `search` for this collection without sending it.
    pub async fn build_request(&self, search: &Search) -> WeaviateResult<SearchRequest> {
        let caps = self.capabilities().await?;
        let serializer = QuerySerializer::new(&self.context, caps);
        match search {
            Search::FetchObjects(options) => serializer.fetch_objects(options),
            Search::Bm25 { query, options } => serializer.bm25(query, options),
            Search::Hybrid { query, options } => serializer.hybrid(query.as_deref(), options),
            Search::NearObject { id, options } => serializer.near_object(*id, options),
            Search::NearVector { vector, options } => serializer.near_vector(vector, options),
            Search::NearText { query, options } => serializer.near_text(query, options),
            Search::NearMedia {
                media,
                source,
                options,
            } => {
                let content = load_media(source).await?;
                serializer.near_media(*media, &content, options)
            }
        }
    }

    #[instrument(skip(self, search), fields(collection = %self.context.name))]
    pub async fn query(&self, search: &Search) -> WeaviateResult<QueryReturn> {
        let request = self.build_request(search).await?;
        let reply = self.send(request).await?;
        self.deserializer().query(reply)
    }

    #[instrument(skip(self, search, group_by), fields(collection = %self.context.name, group_by = %group_by.property))]
    pub async fn query_grouped(
        &self,
        search: &Search,
        group_by: &GroupByOptions,
    ) -> WeaviateResult<GroupByReturn<WeaviateObject>> {
        let request = self.build_request(search).await?;
        let request = self.serializer().await?.with_group_by(request, group_by)?;
        let reply = self.send(request).await?;
        self.deserializer().group_by(reply)
    }

    #[instrument(skip(self, search, params), fields(collection = %self.context.name))]
    pub async fn generate(
        &self,
        search: &Search,
        params: &GenerativeParameters,
    ) -> WeaviateResult<GenerativeReturn> {
        let request = self.build_request(search).await?;
        let request = self.serializer().await?.with_generative(request, params)?;
        let reply = self.send(request).await?;
        self.deserializer().generate(reply)
    }

    #[instrument(skip(self, search, params, group_by), fields(collection = %self.context.name))]
    pub async fn generate_grouped(
        &self,
        search: &Search,
        params: &GenerativeParameters,
        group_by: &GroupByOptions,
    ) -> WeaviateResult<GenerativeGroupByReturn> {
        let request = self.build_request(search).await?;
        let serializer = self.serializer().await?;
        let request = serializer.with_group_by(request, group_by)?;
        let request = serializer.with_generative(request, params)?;
        let reply = self.send(request).await?;
        self.deserializer().generate_group_by(reply)
    }

    /// Fetch one object, `None` when it does not exist.
    #[instrument(skip(self, options), fields(collection = %self.context.name, object_id = %id))]
    pub async fn fetch_object_by_id(
        &self,
        id: Uuid,
        options: &QueryOptions,
    ) -> WeaviateResult<Option<WeaviateObject>> {
        let request = self.serializer().await?.fetch_object_by_id(id, options)?;
        let reply = self.send(request).await?;
        Ok(self.deserializer().query(reply)?.objects.into_iter().next())
    }

    /// Insert objects in chunks of the configured batch size.
    ///
    /// Objects without a collection are inserted into this one. Every
    /// object is validated before the first chunk is sent; per-object
    /// failures reported by the server are returned, not raised.
    #[instrument(skip(self, objects), fields(collection = %self.context.name, count = objects.len()))]
    pub async fn insert_many(
        &self,
        mut objects: Vec<BatchObject>,
    ) -> WeaviateResult<BatchObjectsReturn> {
        let caps = self.capabilities().await?;
        for obj in objects.iter_mut().filter(|o| o.collection.is_empty()) {
            obj.collection = self.context.name.clone();
        }
        let wire = batch::to_wire(
            &objects,
            self.context.uses_named_vectors,
            self.context.tenant.as_deref(),
            &caps,
        )?;
        let consistency_level = self.context.consistency_level.map(consistency_to_proto);

        let mut result = BatchObjectsReturn::default();
        for (chunk, wire_chunk) in objects
            .chunks(self.batch_size)
            .zip(wire.chunks(self.batch_size))
        {
            let started = Instant::now();
            let reply = self
                .transport
                .batch_objects(BatchObjectsRequest {
                    objects: wire_chunk.to_vec(),
                    consistency_level,
                })
                .await?;
            let elapsed = started.elapsed().as_secs_f64();

            let chunk_result = batch::from_reply(reply, chunk, wire_chunk, elapsed)?;
            if chunk_result.has_errors {
                tracing::warn!(
                    failed = chunk_result.errors.len(),
                    size = chunk.len(),
                    "Batch chunk finished with object errors"
                );
            }
            result = result.merge(chunk_result);
        }

        tracing::info!(
            inserted = result.uuids.len(),
            failed = result.errors.len(),
            elapsed_seconds = result.elapsed_seconds,
            "Batch insert complete"
        );
        Ok(result)
    }

    /// Tenants of this collection, optionally restricted to `names`.
    #[instrument(skip(self, names), fields(collection = %self.context.name))]
    pub async fn tenants(&self, names: Option<Vec<String>>) -> WeaviateResult<Vec<Tenant>> {
        let reply = self
            .transport
            .tenants_get(TenantsGetRequest {
                collection: self.context.name.clone(),
                names: names.map(|values| TenantNames { values }),
            })
            .await?;
        self.deserializer().tenants(reply)
    }

    async fn send(&self, request: SearchRequest) -> WeaviateResult<SearchReply> {
        tracing::debug!(
            limit = request.limit,
            grouped = request.group_by.is_some(),
            generative = request.generative.is_some(),
            "Sending search request"
        );
        self.transport.search(request).await
    }

    async fn serializer(&self) -> WeaviateResult<QuerySerializer<'_>> {
        Ok(QuerySerializer::new(&self.context, self.capabilities().await?))
    }

    fn deserializer(&self) -> ResponseDeserializer<'_> {
        ResponseDeserializer::new(&self.context.name)
    }
}

/// Media content as base64, reading files from disk when needed.
async fn load_media(source: &MediaSource) -> WeaviateResult<String> {
    match source {
        MediaSource::Base64(content) => Ok(content.clone()),
        MediaSource::Bytes(bytes) => Ok(STANDARD.encode(bytes)),
        MediaSource::File(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| WeaviateError::MediaFile {
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!(path = %path.display(), size = bytes.len(), "Loaded media file");
            Ok(STANDARD.encode(bytes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::ServerVersion;
    use crate::codec::{Properties, WeaviateField};
    use crate::models::{FetchObjectsOptions, NearMediaType, NearOptions};
    use crate::transport::MockWeaviateTransport;
    use mockall::predicate;
    use rpc::weaviate_v1::{
        BatchObjectsReply, MetadataResult, PropertiesResult, SearchResult, Tenant as WireTenant,
        TenantActivityStatus as ProtoStatus, TenantsGetReply, batch_objects_reply::BatchError,
    };
    use std::io::Write;

    fn transport(version: ServerVersion) -> MockWeaviateTransport {
        let mut mock = MockWeaviateTransport::new();
        mock.expect_server_version()
            .times(1)
            .returning(move || Ok(version));
        mock
    }

    fn hit(id: Uuid) -> SearchResult {
        SearchResult {
            metadata: Some(MetadataResult {
                id: id.to_string(),
                ..Default::default()
            }),
            properties: Some(PropertiesResult::default()),
            ..Default::default()
        }
    }

    fn fetch() -> Search {
        Search::FetchObjects(FetchObjectsOptions::default())
    }

    #[tokio::test]
    async fn test_capabilities_resolved_once() {
        let mut mock = transport(ServerVersion::new(1, 27, 0));
        mock.expect_search()
            .times(2)
            .returning(|_| Ok(SearchReply::default()));
        let service = CollectionService::new(mock, CollectionContext::new("Article"));
        let scoped = service.with_tenant("acme");

        service.query(&fetch()).await.unwrap();
        scoped.query(&fetch()).await.unwrap();
        assert_eq!(
            scoped.capabilities().await.unwrap().version(),
            ServerVersion::new(1, 27, 0)
        );
    }

    #[tokio::test]
    async fn test_query_stamps_context() {
        let id = Uuid::new_v4();
        let mut mock = transport(ServerVersion::new(1, 27, 0));
        mock.expect_search()
            .withf(|req: &SearchRequest| {
                req.collection == "Article"
                    && req.tenant == "acme"
                    && req.consistency_level == Some(consistency_to_proto(ConsistencyLevel::All))
            })
            .returning(move |_| {
                Ok(SearchReply {
                    results: vec![hit(id)],
                    ..Default::default()
                })
            });

        let service = CollectionService::new(mock, CollectionContext::new("Article"))
            .with_tenant("acme")
            .with_consistency_level(ConsistencyLevel::All);
        let result = service.query(&fetch()).await.unwrap();
        assert_eq!(result.objects[0].uuid, id);
        assert_eq!(result.objects[0].collection.as_deref(), Some("Article"));
    }

    #[tokio::test]
    async fn test_fetch_object_by_id_missing() {
        let mut mock = transport(ServerVersion::new(1, 27, 0));
        mock.expect_search()
            .returning(|_| Ok(SearchReply::default()));
        let service = CollectionService::new(mock, CollectionContext::new("Article"));

        let found = service
            .fetch_object_by_id(Uuid::new_v4(), &QueryOptions::default())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_local_validation_skips_network() {
        let mut mock = transport(ServerVersion::new(1, 27, 0));
        mock.expect_search().never();
        let service = CollectionService::new(mock, CollectionContext::new("Article"));

        let err = service
            .query_grouped(&fetch(), &GroupByOptions::new("category", 2, 3))
            .await
            .unwrap_err();
        assert!(err.is_local_validation());
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mut mock = transport(ServerVersion::new(1, 27, 0));
        mock.expect_search().returning(|_| {
            Err(WeaviateError::query(&tonic::Status::unavailable("down")))
        });
        let service = CollectionService::new(mock, CollectionContext::new("Article"));

        let err = service.query(&fetch()).await.unwrap_err();
        assert!(matches!(err, WeaviateError::Query { .. }));
    }

    #[tokio::test]
    async fn test_insert_many_chunks_and_merges() {
        let mut mock = transport(ServerVersion::new(1, 27, 0));
        mock.expect_batch_objects()
            .times(2)
            .returning(|req: BatchObjectsRequest| {
                // fail the first object of the second chunk
                let errors = if req.objects.len() == 1 {
                    vec![BatchError {
                        index: 0,
                        error: "duplicate id".into(),
                    }]
                } else {
                    vec![]
                };
                Ok(BatchObjectsReply { took: 0.0, errors })
            });

        let service = CollectionService::new(mock, CollectionContext::new("Article"))
            .with_batch_size(2);
        let objects = (0..3)
            .map(|i| {
                BatchObject::default().with_properties(Properties::from([(
                    "rank".to_string(),
                    WeaviateField::Int(i),
                )]))
            })
            .collect();

        let result = service.insert_many(objects).await.unwrap();
        assert_eq!(result.all_responses.len(), 3);
        assert_eq!(result.uuids.len(), 2);
        assert_eq!(result.errors[&2].message, "duplicate id");
        assert_eq!(result.errors[&2].object.collection, "Article");
        assert!(result.has_errors);
    }

    #[tokio::test]
    async fn test_insert_many_validates_before_sending() {
        let mut mock = transport(ServerVersion::new(1, 27, 0));
        mock.expect_batch_objects().never();
        let service = CollectionService::new(mock, CollectionContext::new("Article"))
            .with_batch_size(1);
        let named = std::collections::BTreeMap::from([(
            "title".to_string(),
            crate::codec::VectorValue::Single(vec![1.0]),
        )]);
        let objects = vec![
            BatchObject::default(),
            BatchObject::default().with_vector(named),
        ];

        let err = service.insert_many(objects).await.unwrap_err();
        assert!(matches!(err, WeaviateError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_tenants() {
        let mut mock = MockWeaviateTransport::new();
        mock.expect_tenants_get()
            .with(predicate::eq(TenantsGetRequest {
                collection: "Article".into(),
                names: Some(TenantNames {
                    values: vec!["acme".into()],
                }),
            }))
            .returning(|_| {
                Ok(TenantsGetReply {
                    took: 0.0,
                    tenants: vec![WireTenant {
                        name: "acme".into(),
                        activity_status: ProtoStatus::Frozen as i32,
                    }],
                })
            });
        let service = CollectionService::new(mock, CollectionContext::new("Article"));

        let tenants = service.tenants(Some(vec!["acme".into()])).await.unwrap();
        assert_eq!(tenants[0].name, "acme");
        assert_eq!(
            tenants[0].activity_status,
            crate::tenants::TenantActivityStatus::Offloaded
        );
    }

    #[tokio::test]
    async fn test_near_media_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"png").unwrap();

        let mut mock = transport(ServerVersion::new(1, 27, 0));
        mock.expect_search()
            .withf(|req: &SearchRequest| {
                req.near_image.as_ref().map(|n| n.image.as_str()) == Some("cG5n")
            })
            .returning(|_| Ok(SearchReply::default()));
        let service = CollectionService::new(mock, CollectionContext::new("Article"));

        let search = Search::NearMedia {
            media: NearMediaType::Image,
            source: MediaSource::File(file.path().to_path_buf()),
            options: NearOptions::default(),
        };
        service.query(&search).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_media_file() {
        let mock = transport(ServerVersion::new(1, 27, 0));
        let service = CollectionService::new(mock, CollectionContext::new("Article"));
        let search = Search::NearMedia {
            media: NearMediaType::Audio,
            source: MediaSource::File("/nonexistent/clip.wav".into()),
            options: NearOptions::default(),
        };

        let err = service.build_request(&search).await.unwrap_err();
        assert!(matches!(err, WeaviateError::MediaFile { .. }));
    }
}
