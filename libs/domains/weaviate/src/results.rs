use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::codec::{Properties, VectorValue, properties_as};
use crate::error::WeaviateResult;

/// Metadata returned with an object. Fields the server did not mark as
/// present stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataReturn {
    pub creation_time: Option<DateTime<Utc>>,
    pub last_update_time: Option<DateTime<Utc>>,
    pub distance: Option<f32>,
    pub certainty: Option<f32>,
    pub score: Option<f32>,
    pub explain_score: Option<String>,
    pub is_consistent: Option<bool>,
    pub rerank_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReferenceResult {
    pub objects: Vec<WeaviateObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaviateObject {
    pub uuid: Uuid,
    pub collection: Option<String>,
    pub properties: Properties,
    /// `None` when no references were requested.
    pub references: Option<BTreeMap<String, ReferenceResult>>,
    pub metadata: MetadataReturn,
    pub vectors: BTreeMap<String, VectorValue>,
}

impl WeaviateObject {
    pub fn properties_as<T: DeserializeOwned>(&self) -> WeaviateResult<T> {
        properties_as(&self.properties)
    }

    pub fn reference(&self, link_on: &str) -> Option<&ReferenceResult> {
        self.references.as_ref()?.get(link_on)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryReturn {
    pub objects: Vec<WeaviateObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerativeObject {
    pub object: WeaviateObject,
    pub generated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerativeReturn {
    pub objects: Vec<GenerativeObject>,
    /// Result of the grouped task, if one was requested.
    pub generated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupByObject<O> {
    pub object: O,
    pub belongs_to_group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupByGroup<O> {
    pub name: String,
    pub min_distance: f32,
    pub max_distance: f32,
    pub number_of_objects: i64,
    pub objects: Vec<O>,
    pub rerank_score: Option<f64>,
    pub generated: Option<String>,
}

/// Grouped results: the groups in server order plus every object tagged
/// with its group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupByReturn<O> {
    pub objects: Vec<GroupByObject<O>>,
    pub groups: Vec<GroupByGroup<O>>,
    pub generated: Option<String>,
}

impl<O> GroupByReturn<O> {
    pub fn group(&self, name: &str) -> Option<&GroupByGroup<O>> {
        self.groups.iter().find(|g| g.name == name)
    }
}

impl<O> Default for GroupByReturn<O> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            groups: Vec::new(),
            generated: None,
        }
    }
}

pub type GenerativeGroupByReturn = GroupByReturn<GenerativeObject>;
