//! Integration tests for the Weaviate domain
//!
//! These tests drive the public API end to end:
//! - Vectors, filters and metadata translate to the expected wire shapes
//! - Batch replies correlate failures by input index
//! - Tenant statuses map across protocol generations
//! - The collection service works against an in-memory transport

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use domain_weaviate::codec::vector::{decode_floats, encode};
use domain_weaviate::*;
use rpc::weaviate_v1::{
    self as wire, BatchObjectsReply, BatchObjectsRequest, MetadataResult, PropertiesResult,
    SearchReply, SearchRequest, SearchResult, TenantsGetReply, TenantsGetRequest,
    batch_objects_reply::BatchError, filter_target::Target,
};
use uuid::Uuid;

// ============================================================================
// Wire scenarios
// ============================================================================

#[test]
fn test_vector_round_trip_is_exact() {
    let vector = vec![1.0_f32, -2.5, 0.0];
    let bytes = encode(&vector);
    assert_eq!(bytes.len(), 12);
    assert_eq!(decode_floats(&bytes).unwrap(), vector);
}

#[test]
fn test_reference_filter_resolves_to_single_target() {
    let filter = Filter::by_ref("hasCategory")
        .by_property("name")
        .equal("shoes");
    let wire = filters::serialize_filter(&filter).unwrap();

    let Some(Target::SingleTarget(outer)) = wire.target.and_then(|t| t.target) else {
        panic!("expected a single target reference");
    };
    assert_eq!(outer.on, "hasCategory");
    let inner = outer.target.and_then(|t| t.target);
    assert_eq!(inner, Some(Target::Property("name".to_string())));
}

#[test]
fn test_batch_with_error_at_index_one() {
    let objects: Vec<BatchObject> = ["a", "b", "c"]
        .into_iter()
        .map(|title| {
            BatchObject::new("Article").with_properties(Properties::from([(
                "title".to_string(),
                WeaviateField::from(title),
            )]))
        })
        .collect();
    let sent = batch::to_wire(&objects, false, None, &Capabilities::latest()).unwrap();
    let reply = BatchObjectsReply {
        took: 0.01,
        errors: vec![BatchError {
            index: 1,
            error: "invalid property".to_string(),
        }],
    };

    let result = batch::from_reply(reply, &objects, &sent, 0.01).unwrap();

    assert!(result.has_errors);
    assert_eq!(result.all_responses.len(), 3);
    assert_eq!(result.uuids.keys().copied().collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(result.errors.keys().copied().collect::<Vec<_>>(), vec![1]);
    assert_eq!(result.errors[&1].object, objects[1]);
    assert!(matches!(result.all_responses[1], BatchResponse::Error(_)));
}

#[test]
fn test_metadata_with_only_distance() {
    let id = Uuid::new_v4();
    let reply = SearchReply {
        results: vec![SearchResult {
            metadata: Some(MetadataResult {
                id: id.to_string(),
                distance: 0.0,
                distance_present: true,
                ..Default::default()
            }),
            properties: Some(PropertiesResult::default()),
        }],
        ..Default::default()
    };

    let result = ResponseDeserializer::new("Article").query(reply).unwrap();
    let metadata = &result.objects[0].metadata;

    assert_eq!(
        metadata,
        &MetadataReturn {
            distance: Some(0.0),
            ..Default::default()
        }
    );
    assert!(result.objects[0].vectors.is_empty());
}

#[test]
fn test_tenant_statuses_agree_across_protocols() {
    use wire::TenantActivityStatus as Proto;

    let table = [
        ("HOT", Proto::Hot, Proto::Active),
        ("COLD", Proto::Cold, Proto::Inactive),
        ("FROZEN", Proto::Frozen, Proto::Offloaded),
        ("FREEZING", Proto::Freezing, Proto::Offloading),
        ("UNFREEZING", Proto::Unfreezing, Proto::Onloading),
    ];
    for (rest, deprecated, current) in table {
        let from_rest = TenantActivityStatus::from_rest(rest);
        assert_eq!(
            TenantActivityStatus::from_grpc(deprecated as i32).unwrap(),
            from_rest
        );
        assert_eq!(
            TenantActivityStatus::from_grpc(current as i32).unwrap(),
            from_rest
        );
    }
}

#[test]
fn test_old_server_rejects_multi_target_search() {
    let context = CollectionContext::new("Article").with_named_vectors(true);
    let caps = Capabilities::for_version("1.25.3".parse().unwrap());
    let options = NearOptions::default().with_target_vector(TargetVectors::sum(vec![
        "title".to_string(),
        "body".to_string(),
    ]));

    let err = QuerySerializer::new(&context, caps)
        .near_object(Uuid::new_v4(), &options)
        .unwrap_err();

    assert!(matches!(err, WeaviateError::UnsupportedFeature { .. }));
    assert!(err.to_string().contains("1.25.3"));
}

// ============================================================================
// Service Tests
// ============================================================================

/// Transport that answers from memory and records what it was sent.
struct InMemoryTransport {
    version: ServerVersion,
    failing_ids: Vec<Uuid>,
    batches: Arc<Mutex<Vec<BatchObjectsRequest>>>,
}

impl InMemoryTransport {
    fn new(version: ServerVersion) -> Self {
        Self {
            version,
            failing_ids: Vec::new(),
            batches: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl WeaviateTransport for InMemoryTransport {
    async fn server_version(&self) -> WeaviateResult<ServerVersion> {
        Ok(self.version)
    }

    async fn search(&self, request: SearchRequest) -> WeaviateResult<SearchReply> {
        assert!(!request.collection.is_empty());
        Ok(SearchReply::default())
    }

    async fn batch_objects(
        &self,
        request: BatchObjectsRequest,
    ) -> WeaviateResult<BatchObjectsReply> {
        let errors = request
            .objects
            .iter()
            .enumerate()
            .filter(|(_, obj)| {
                self.failing_ids
                    .iter()
                    .any(|id| id.to_string() == obj.uuid)
            })
            .map(|(index, _)| BatchError {
                index: index as i32,
                error: "rejected".to_string(),
            })
            .collect();
        self.batches.lock().unwrap().push(request);
        Ok(BatchObjectsReply { took: 0.0, errors })
    }

    async fn tenants_get(&self, _request: TenantsGetRequest) -> WeaviateResult<TenantsGetReply> {
        Ok(TenantsGetReply::default())
    }
}

#[tokio::test]
async fn test_insert_many_correlates_across_chunks() {
    core_config::tracing::init_test_tracing();
    let rejected = Uuid::new_v4();
    let mut transport = InMemoryTransport::new(ServerVersion::new(1, 27, 0));
    transport.failing_ids = vec![rejected];
    let batches = Arc::clone(&transport.batches);

    let service = CollectionService::new(transport, CollectionContext::new("Article"))
        .with_batch_size(2)
        .with_tenant("acme");

    let objects = (0..5)
        .map(|i| {
            let obj = BatchObject::default().with_vector(vec![i as f32, 1.0]);
            if i == 3 { obj.with_id(rejected) } else { obj }
        })
        .collect();

    let result = service.insert_many(objects).await.unwrap();

    assert_eq!(result.all_responses.len(), 5);
    assert_eq!(result.uuids.len(), 4);
    assert_eq!(result.errors[&3].original_uuid, Some(rejected));
    assert!(result.has_errors);

    let batches = batches.lock().unwrap();
    assert_eq!(
        batches.iter().map(|b| b.objects.len()).collect::<Vec<_>>(),
        vec![2, 2, 1]
    );
    assert!(batches.iter().flat_map(|b| &b.objects).all(|o| o.tenant == "acme"));
}

#[tokio::test]
async fn test_insert_many_empty_batch() {
    let service = CollectionService::new(
        InMemoryTransport::new(ServerVersion::new(1, 27, 0)),
        CollectionContext::new("Article"),
    );
    let result = service.insert_many(Vec::new()).await.unwrap();
    assert!(result.all_responses.is_empty());
    assert!(!result.has_errors);
}

#[tokio::test]
async fn test_hybrid_request_on_legacy_server() {
    let service = CollectionService::new(
        InMemoryTransport::new(ServerVersion::new(1, 24, 0)),
        CollectionContext::new("Article"),
    );
    let search = Search::Hybrid {
        query: Some("running shoes".to_string()),
        options: HybridOptions::default(),
    };

    let request = service.build_request(&search).await.unwrap();

    assert!(!request.uses_125_api);
    assert!(!request.uses_127_api);
    let hybrid = request.hybrid_search.unwrap();
    assert_eq!(hybrid.query, "running shoes");
    assert!((hybrid.alpha - 0.7).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_named_vector_batch_uses_vectors_field() {
    core_config::tracing::init_test_tracing();
    let transport = InMemoryTransport::new(ServerVersion::new(1, 27, 0));
    let batches = Arc::clone(&transport.batches);
    let service = CollectionService::new(
        transport,
        CollectionContext::new("Article").with_named_vectors(true),
    );
    let vectors = BTreeMap::from([
        ("title".to_string(), VectorValue::Single(vec![0.5, 0.25])),
        (
            "colbert".to_string(),
            VectorValue::Multi(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
        ),
    ]);

    let result = service
        .insert_many(vec![BatchObject::default().with_vector(vectors)])
        .await
        .unwrap();
    assert!(!result.has_errors);
    assert_eq!(result.uuids.len(), 1);

    let batches = batches.lock().unwrap();
    let sent = &batches[0].objects[0];
    assert!(sent.vector_bytes.is_empty());
    assert_eq!(
        sent.vectors.iter().map(|v| v.name.as_str()).collect::<Vec<_>>(),
        vec!["colbert", "title"]
    );
}
