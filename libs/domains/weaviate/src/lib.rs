//! Weaviate Domain Library
//!
//! Translates typed queries, filters and batch inserts into `weaviate.v1`
//! gRPC messages and turns the server's replies back into typed objects.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐
//! │ CollectionService  │  ← capability lookup, media loading, batching
//! └─────────┬──────────┘
//!           │
//! ┌─────────▼──────────┐     ┌──────────────────────┐
//! │  QuerySerializer   │     │ ResponseDeserializer │
//! │  batch::to_wire    │     │ batch::from_reply    │
//! └─────────┬──────────┘     └──────────▲───────────┘
//!           │   filters, codec (vectors, properties)
//! ┌─────────▼────────────────────────────┴───────────┐
//! │            WeaviateTransport (trait)             │
//! └─────────┬────────────────────────────────────────┘
//!           │
//! ┌─────────▼──────────┐
//! │   GrpcTransport    │  ← tonic client over `rpc::weaviate_v1`
//! └────────────────────┘
//! ```
//!
//! # Features
//!
//! - **Search kinds**: fetch, bm25, hybrid, near object/vector/text and
//!   near media, each optionally grouped and/or generative
//! - **Filters**: property, id, timestamp and reference-chain targets
//! - **Version gating**: wire shapes follow the connected server version
//! - **Batch inserts**: per-object errors correlated by input index
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_weaviate::{
//!     CollectionService, Filter, GrpcTransport, NearOptions, NearVectorInput, QueryOptions,
//!     Search, WeaviateConfig,
//! };
//! use core_config::FromEnv;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WeaviateConfig::from_env()?;
//! let transport = GrpcTransport::new(&config)?;
//! let articles = CollectionService::from_config(transport, "Article", &config);
//!
//! let filters = Filter::by_ref("hasCategory").by_property("name").equal("shoes");
//! let search = Search::NearVector {
//!     vector: NearVectorInput::Single(vec![0.1, 0.2, 0.3]),
//!     options: NearOptions::new(QueryOptions::new().with_filters(filters).with_limit(10)),
//! };
//!
//! for object in articles.query(&search).await?.objects {
//!     println!("{} {:?}", object.uuid, object.metadata.distance);
//! }
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod capabilities;
pub mod codec;
pub mod conversions;
pub mod deserialize;
pub mod error;
pub mod filters;
pub mod grpc;
pub mod models;
pub mod results;
pub mod serialize;
pub mod service;
pub mod tenants;
pub mod transport;

// Re-export commonly used types
pub use batch::{
    BatchObject, BatchObjectsReturn, BatchResponse, ErrorObject, ObjectVector, ReferenceInput,
};
pub use capabilities::{Capabilities, Capability, ServerVersion};
pub use codec::{GeoCoordinate, PhoneNumber, Properties, VectorValue, WeaviateField};
pub use deserialize::ResponseDeserializer;
pub use error::{WeaviateError, WeaviateResult};
pub use filters::{
    Filter, FilterLiteral, FilterOperator, FilterValue, GeoRange, ReferenceFilter, TargetNode,
};
pub use grpc::{GrpcTransport, WeaviateConfig};
pub use models::{
    Bm25Operator, Bm25Options, CollectionContext, ConsistencyLevel, FetchObjectsOptions,
    GenerativeParameters, GroupByOptions, HybridFusion, HybridOptions, HybridVector,
    IncludeVector, MediaSource, MetadataQuery, Move, NearMediaType, NearOptions,
    NearTextOptions, NearVectorInput, QueryOptions, QueryReference, Rerank, Search, Sort,
    TargetCombination, TargetVectors,
};
pub use results::{
    GenerativeGroupByReturn, GenerativeObject, GenerativeReturn, GroupByGroup, GroupByObject,
    GroupByReturn, MetadataReturn, QueryReturn, ReferenceResult, WeaviateObject,
};
pub use serialize::QuerySerializer;
pub use service::CollectionService;
pub use tenants::{Tenant, TenantActivityStatus};
pub use transport::WeaviateTransport;
