use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

use crate::codec::VectorValue;
use crate::filters::FilterValue;

// ===== Collection context =====

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsistencyLevel {
    One,
    Quorum,
    All,
}

/// Per-collection settings every request is stamped with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionContext {
    pub name: String,
    pub tenant: Option<String>,
    pub consistency_level: Option<ConsistencyLevel>,
    /// The collection is configured with named vectors rather than a
    /// single anonymous one.
    pub uses_named_vectors: bool,
}

impl CollectionContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tenant: None,
            consistency_level: None,
            uses_named_vectors: false,
        }
    }

    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub fn with_consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = Some(level);
        self
    }

    pub fn with_named_vectors(mut self, uses_named_vectors: bool) -> Self {
        self.uses_named_vectors = uses_named_vectors;
        self
    }
}

// ===== Return selection =====

/// Which vectors to return with each object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IncludeVector {
    #[default]
    None,
    All,
    Named(Vec<String>),
}

/// Metadata fields to request. The uuid is always returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetadataQuery {
    pub creation_time: bool,
    pub last_update_time: bool,
    pub distance: bool,
    pub certainty: bool,
    pub score: bool,
    pub explain_score: bool,
    pub is_consistent: bool,
}

impl MetadataQuery {
    pub fn full() -> Self {
        Self {
            creation_time: true,
            last_update_time: true,
            distance: true,
            certainty: true,
            score: true,
            explain_score: true,
            is_consistent: true,
        }
    }
}

/// A returned property. Nested object properties list the sub-properties
/// to include.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertySelection {
    Property(String),
    Object {
        name: String,
        properties: Vec<PropertySelection>,
    },
}

impl From<&str> for PropertySelection {
    fn from(name: &str) -> Self {
        PropertySelection::Property(name.to_string())
    }
}

impl From<String> for PropertySelection {
    fn from(name: String) -> Self {
        PropertySelection::Property(name)
    }
}

/// A cross-reference to follow, with its own return selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReference {
    pub link_on: String,
    /// Required for references that point into several collections.
    pub target_collection: Option<String>,
    pub return_properties: Option<Vec<PropertySelection>>,
    pub return_metadata: MetadataQuery,
    pub return_references: Vec<QueryReference>,
    pub include_vector: IncludeVector,
}

impl QueryReference {
    pub fn new(link_on: impl Into<String>) -> Self {
        Self {
            link_on: link_on.into(),
            target_collection: None,
            return_properties: None,
            return_metadata: MetadataQuery::default(),
            return_references: Vec::new(),
            include_vector: IncludeVector::None,
        }
    }

    pub fn multi_target(link_on: impl Into<String>, target_collection: impl Into<String>) -> Self {
        Self {
            target_collection: Some(target_collection.into()),
            ..Self::new(link_on)
        }
    }

    pub fn with_properties<P: Into<PropertySelection>>(
        mut self,
        properties: impl IntoIterator<Item = P>,
    ) -> Self {
        self.return_properties = Some(properties.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_metadata(mut self, metadata: MetadataQuery) -> Self {
        self.return_metadata = metadata;
        self
    }

    pub fn with_reference(mut self, reference: QueryReference) -> Self {
        self.return_references.push(reference);
        self
    }

    pub fn with_vector(mut self, include: IncludeVector) -> Self {
        self.include_vector = include;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub ascending: bool,
}

impl Sort {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ascending: true,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ascending: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rerank {
    pub property: String,
    pub query: Option<String>,
}

// ===== Query options =====

/// Options shared by every search kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub filters: Option<FilterValue>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub autocut: Option<u32>,
    pub include_vector: IncludeVector,
    pub return_metadata: MetadataQuery,
    /// `None` returns every non-reference property.
    pub return_properties: Option<Vec<PropertySelection>>,
    pub return_references: Vec<QueryReference>,
    pub rerank: Option<Rerank>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(mut self, filters: FilterValue) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_autocut(mut self, jumps: u32) -> Self {
        self.autocut = Some(jumps);
        self
    }

    pub fn with_vector(mut self, include: IncludeVector) -> Self {
        self.include_vector = include;
        self
    }

    pub fn with_metadata(mut self, metadata: MetadataQuery) -> Self {
        self.return_metadata = metadata;
        self
    }

    pub fn with_properties<P: Into<PropertySelection>>(
        mut self,
        properties: impl IntoIterator<Item = P>,
    ) -> Self {
        self.return_properties = Some(properties.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_reference(mut self, reference: QueryReference) -> Self {
        self.return_references.push(reference);
        self
    }

    pub fn with_rerank(mut self, property: impl Into<String>, query: Option<String>) -> Self {
        self.rerank = Some(Rerank {
            property: property.into(),
            query,
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchObjectsOptions {
    /// Cursor: return objects after this id.
    pub after: Option<Uuid>,
    pub sort: Vec<Sort>,
    pub common: QueryOptions,
}

impl FetchObjectsOptions {
    pub fn new(common: QueryOptions) -> Self {
        Self {
            common,
            ..Default::default()
        }
    }

    pub fn with_after(mut self, after: Uuid) -> Self {
        self.after = Some(after);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bm25Operator {
    And,
    /// At least `minimum_match` query tokens must match.
    Or { minimum_match: u32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bm25Options {
    pub query_properties: Vec<String>,
    pub operator: Option<Bm25Operator>,
    pub common: QueryOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetCombination {
    Sum,
    Minimum,
    Average,
    RelativeScore,
    ManualWeights,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetWeight {
    pub target: String,
    pub weight: f32,
}

/// Which named vector(s) a vector search runs against.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetVectors {
    Single(String),
    Many(Vec<String>),
    Combined {
        combination: TargetCombination,
        targets: Vec<String>,
        weights: Vec<TargetWeight>,
    },
}

impl TargetVectors {
    /// Target vector names in selection order.
    pub fn names(&self) -> &[String] {
        match self {
            TargetVectors::Single(name) => std::slice::from_ref(name),
            TargetVectors::Many(names) => names,
            TargetVectors::Combined { targets, .. } => targets,
        }
    }

    fn combined(combination: TargetCombination, targets: Vec<String>) -> Self {
        TargetVectors::Combined {
            combination,
            targets,
            weights: Vec::new(),
        }
    }

    pub fn sum(targets: Vec<String>) -> Self {
        Self::combined(TargetCombination::Sum, targets)
    }

    pub fn minimum(targets: Vec<String>) -> Self {
        Self::combined(TargetCombination::Minimum, targets)
    }

    pub fn average(targets: Vec<String>) -> Self {
        Self::combined(TargetCombination::Average, targets)
    }

    fn weighted(combination: TargetCombination, weights: BTreeMap<String, f32>) -> Self {
        TargetVectors::Combined {
            combination,
            targets: weights.keys().cloned().collect(),
            weights: weights
                .into_iter()
                .map(|(target, weight)| TargetWeight { target, weight })
                .collect(),
        }
    }

    pub fn relative_score(weights: BTreeMap<String, f32>) -> Self {
        Self::weighted(TargetCombination::RelativeScore, weights)
    }

    pub fn manual_weights(weights: BTreeMap<String, f32>) -> Self {
        Self::weighted(TargetCombination::ManualWeights, weights)
    }
}

impl From<&str> for TargetVectors {
    fn from(name: &str) -> Self {
        TargetVectors::Single(name.to_string())
    }
}

/// Vector input for a near-vector search.
#[derive(Debug, Clone, PartialEq)]
pub enum NearVectorInput {
    Single(Vec<f32>),
    Multi(Vec<Vec<f32>>),
    PerTarget(BTreeMap<String, VectorValue>),
}

impl From<Vec<f32>> for NearVectorInput {
    fn from(v: Vec<f32>) -> Self {
        NearVectorInput::Single(v)
    }
}

impl From<Vec<Vec<f32>>> for NearVectorInput {
    fn from(rows: Vec<Vec<f32>>) -> Self {
        NearVectorInput::Multi(rows)
    }
}

impl From<BTreeMap<String, VectorValue>> for NearVectorInput {
    fn from(map: BTreeMap<String, VectorValue>) -> Self {
        NearVectorInput::PerTarget(map)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearOptions {
    pub certainty: Option<f64>,
    pub distance: Option<f64>,
    pub target_vector: Option<TargetVectors>,
    pub common: QueryOptions,
}

impl NearOptions {
    pub fn new(common: QueryOptions) -> Self {
        Self {
            common,
            ..Default::default()
        }
    }

    pub fn with_certainty(mut self, certainty: f64) -> Self {
        self.certainty = Some(certainty);
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_target_vector(mut self, target: impl Into<TargetVectors>) -> Self {
        self.target_vector = Some(target.into());
        self
    }
}

/// Shift a near-text search towards or away from concepts or objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub force: f32,
    pub concepts: Vec<String>,
    pub objects: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearTextOptions {
    pub near: NearOptions,
    pub move_to: Option<Move>,
    pub move_away: Option<Move>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NearMediaType {
    Image,
    Audio,
    Video,
    Depth,
    Thermal,
    Imu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HybridFusion {
    Ranked,
    RelativeScore,
}

/// The vector half of a hybrid search.
#[derive(Debug, Clone, PartialEq)]
pub enum HybridVector {
    Vector(NearVectorInput),
    NearText {
        query: Vec<String>,
        certainty: Option<f64>,
        distance: Option<f64>,
        move_to: Option<Move>,
        move_away: Option<Move>,
    },
    NearVector {
        vector: NearVectorInput,
        certainty: Option<f64>,
        distance: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HybridOptions {
    /// 0.0 is pure keyword search, 1.0 pure vector search.
    pub alpha: f32,
    pub vector: Option<HybridVector>,
    pub query_properties: Vec<String>,
    pub fusion_type: Option<HybridFusion>,
    pub max_vector_distance: Option<f32>,
    pub target_vector: Option<TargetVectors>,
    pub bm25_operator: Option<Bm25Operator>,
    pub common: QueryOptions,
}

impl Default for HybridOptions {
    fn default() -> Self {
        Self {
            alpha: 0.7,
            vector: None,
            query_properties: Vec::new(),
            fusion_type: None,
            max_vector_distance: None,
            target_vector: None,
            bm25_operator: None,
            common: QueryOptions::default(),
        }
    }
}

// ===== Composed parameters =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupByOptions {
    pub property: String,
    pub number_of_groups: u32,
    pub objects_per_group: u32,
}

impl GroupByOptions {
    pub fn new(property: impl Into<String>, number_of_groups: u32, objects_per_group: u32) -> Self {
        Self {
            property: property.into(),
            number_of_groups,
            objects_per_group,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerativeParameters {
    /// Prompt run once per object; `{property}` placeholders are filled in
    /// by the server.
    pub single_prompt: Option<String>,
    /// Task run once over all results.
    pub grouped_task: Option<String>,
    pub grouped_properties: Vec<String>,
}

impl GenerativeParameters {
    pub fn single(prompt: impl Into<String>) -> Self {
        Self {
            single_prompt: Some(prompt.into()),
            ..Default::default()
        }
    }

    pub fn grouped(task: impl Into<String>) -> Self {
        Self {
            grouped_task: Some(task.into()),
            ..Default::default()
        }
    }
}

// ===== Search =====

#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    Base64(String),
    Bytes(Vec<u8>),
    File(std::path::PathBuf),
}

/// One search, as handed to the collection service.
#[derive(Debug, Clone, PartialEq)]
pub enum Search {
    FetchObjects(FetchObjectsOptions),
    Bm25 {
        query: String,
        options: Bm25Options,
    },
    Hybrid {
        query: Option<String>,
        options: HybridOptions,
    },
    NearObject {
        id: Uuid,
        options: NearOptions,
    },
    NearVector {
        vector: NearVectorInput,
        options: NearOptions,
    },
    NearText {
        query: Vec<String>,
        options: NearTextOptions,
    },
    NearMedia {
        media: NearMediaType,
        source: MediaSource,
        options: NearOptions,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistency_level_parses_case_insensitively() {
        assert_eq!(
            "quorum".parse::<ConsistencyLevel>().unwrap(),
            ConsistencyLevel::Quorum
        );
        assert_eq!(ConsistencyLevel::All.to_string(), "ALL");
        assert!("most".parse::<ConsistencyLevel>().is_err());
    }

    #[test]
    fn test_weighted_targets_follow_map_order() {
        let mut weights = BTreeMap::new();
        weights.insert("title".to_string(), 0.7);
        weights.insert("body".to_string(), 0.3);
        let TargetVectors::Combined {
            combination,
            targets,
            weights,
        } = TargetVectors::manual_weights(weights)
        else {
            panic!("expected combined");
        };
        assert_eq!(combination, TargetCombination::ManualWeights);
        assert_eq!(targets, vec!["body", "title"]);
        assert_eq!(weights[0].target, "body");
    }

    #[test]
    fn test_options_builders_are_value_types() {
        let base = QueryOptions::new().with_limit(10);
        let derived = base.clone().with_offset(5);
        assert_eq!(base.offset, None);
        assert_eq!(derived.limit, Some(10));
        assert_eq!(derived.offset, Some(5));
    }
}
