//! Batch insert mapping.
//!
//! Objects go out in input order and the reply only lists the indices that
//! failed, so the position in the request is the only correlation key.

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::capabilities::{Capabilities, Capability};
use crate::codec::properties::properties_to_wire;
use crate::codec::vector::{DEFAULT_VECTOR, encode};
use crate::codec::{Properties, VectorValue, properties_from_serializable};
use crate::error::{WeaviateError, WeaviateResult};
use rpc::weaviate_v1::{
    self as wire, BatchObjectsReply,
    batch_object::{MultiTargetRefProps, Properties as WireProperties, SingleTargetRefProps},
};

/// Target objects of one reference property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ReferenceInput {
    Single(Vec<Uuid>),
    MultiTarget {
        target_collection: String,
        uuids: Vec<Uuid>,
    },
}

impl ReferenceInput {
    pub fn multi_target(target_collection: impl Into<String>, uuids: Vec<Uuid>) -> Self {
        ReferenceInput::MultiTarget {
            target_collection: target_collection.into(),
            uuids,
        }
    }

    fn uuids(&self) -> Vec<String> {
        let ids = match self {
            ReferenceInput::Single(ids) => ids,
            ReferenceInput::MultiTarget { uuids, .. } => uuids,
        };
        ids.iter().map(Uuid::to_string).collect()
    }
}

impl From<Uuid> for ReferenceInput {
    fn from(id: Uuid) -> Self {
        ReferenceInput::Single(vec![id])
    }
}

impl From<Vec<Uuid>> for ReferenceInput {
    fn from(ids: Vec<Uuid>) -> Self {
        ReferenceInput::Single(ids)
    }
}

/// Vector payload of an inserted object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ObjectVector {
    Single(Vec<f32>),
    Named(BTreeMap<String, VectorValue>),
}

impl From<Vec<f32>> for ObjectVector {
    fn from(v: Vec<f32>) -> Self {
        ObjectVector::Single(v)
    }
}

impl From<BTreeMap<String, VectorValue>> for ObjectVector {
    fn from(named: BTreeMap<String, VectorValue>) -> Self {
        ObjectVector::Named(named)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchObject {
    pub collection: String,
    pub properties: Option<Properties>,
    pub references: Option<BTreeMap<String, ReferenceInput>>,
    pub id: Option<Uuid>,
    pub vectors: Option<ObjectVector>,
    pub tenant: Option<String>,
}

impl BatchObject {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Default::default()
        }
    }

    /// Build an object whose properties come from any serializable value.
    pub fn from_serializable<T: Serialize>(
        collection: impl Into<String>,
        value: &T,
    ) -> WeaviateResult<Self> {
        Ok(Self::new(collection).with_properties(properties_from_serializable(value)?))
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_vector(mut self, vector: impl Into<ObjectVector>) -> Self {
        self.vectors = Some(vector.into());
        self
    }

    pub fn with_reference(
        mut self,
        link_on: impl Into<String>,
        reference: impl Into<ReferenceInput>,
    ) -> Self {
        self.references
            .get_or_insert_with(BTreeMap::new)
            .insert(link_on.into(), reference.into());
        self
    }

    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }
}

/// Map caller objects to wire objects, one to one and in order. Objects
/// without an id get a random one so the caller can learn it from the
/// reply.
pub fn to_wire(
    objects: &[BatchObject],
    uses_named_vectors: bool,
    tenant: Option<&str>,
    caps: &Capabilities,
) -> WeaviateResult<Vec<wire::BatchObject>> {
    objects
        .iter()
        .map(|obj| object_to_wire(obj, uses_named_vectors, tenant, caps))
        .collect()
}

#[allow(deprecated)]
fn object_to_wire(
    obj: &BatchObject,
    uses_named_vectors: bool,
    tenant: Option<&str>,
    caps: &Capabilities,
) -> WeaviateResult<wire::BatchObject> {
    if obj.collection.is_empty() {
        return Err(WeaviateError::invalid("batch object has no collection"));
    }

    let mut out = wire::BatchObject {
        uuid: obj.id.unwrap_or_else(Uuid::new_v4).to_string(),
        collection: obj.collection.clone(),
        tenant: obj
            .tenant
            .as_deref()
            .or(tenant)
            .unwrap_or_default()
            .to_string(),
        properties: object_properties(obj, caps),
        ..Default::default()
    };

    match &obj.vectors {
        None => {}
        Some(ObjectVector::Single(v)) if uses_named_vectors => {
            out.vectors = vec![VectorValue::Single(v.clone()).to_wire(DEFAULT_VECTOR)?];
        }
        Some(ObjectVector::Single(v)) => out.vector_bytes = encode(v),
        Some(ObjectVector::Named(_)) if !uses_named_vectors => {
            return Err(WeaviateError::invalid(format!(
                "collection {} does not use named vectors",
                obj.collection
            )));
        }
        Some(ObjectVector::Named(named)) => {
            if named.values().any(VectorValue::is_multi) {
                caps.require(Capability::MultiVectorPerTarget)?;
            }
            out.vectors = named
                .iter()
                .map(|(name, value)| value.to_wire(name))
                .collect::<WeaviateResult<_>>()?;
        }
    }

    Ok(out)
}

fn object_properties(obj: &BatchObject, caps: &Capabilities) -> Option<WireProperties> {
    if obj.properties.is_none() && obj.references.is_none() {
        return None;
    }
    let mut props = WireProperties {
        non_ref_properties: obj
            .properties
            .as_ref()
            .map(|p| properties_to_wire(p, caps)),
        ..Default::default()
    };
    for (prop_name, reference) in obj.references.iter().flatten() {
        match reference {
            ReferenceInput::Single(_) => props.single_target_ref_props.push(SingleTargetRefProps {
                uuids: reference.uuids(),
                prop_name: prop_name.clone(),
            }),
            ReferenceInput::MultiTarget {
                target_collection, ..
            } => props.multi_target_ref_props.push(MultiTargetRefProps {
                uuids: reference.uuids(),
                prop_name: prop_name.clone(),
                target_collection: target_collection.clone(),
            }),
        }
    }
    Some(props)
}

/// A failed object with the server's message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorObject {
    pub message: String,
    pub object: BatchObject,
    /// The id the caller supplied, if any.
    pub original_uuid: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BatchResponse {
    Uuid(Uuid),
    Error(ErrorObject),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchObjectsReturn {
    pub uuids: BTreeMap<usize, Uuid>,
    pub errors: BTreeMap<usize, ErrorObject>,
    /// One entry per input object, in input order.
    pub all_responses: Vec<BatchResponse>,
    pub has_errors: bool,
    pub elapsed_seconds: f64,
}

impl BatchObjectsReturn {
    /// Append the result of a later chunk, shifting its indices past the
    /// objects already recorded.
    pub fn merge(mut self, other: BatchObjectsReturn) -> Self {
        let offset = self.all_responses.len();
        self.uuids
            .extend(other.uuids.into_iter().map(|(i, id)| (i + offset, id)));
        self.errors
            .extend(other.errors.into_iter().map(|(i, err)| (i + offset, err)));
        self.all_responses.extend(other.all_responses);
        self.has_errors |= other.has_errors;
        self.elapsed_seconds += other.elapsed_seconds;
        self
    }
}

/// Correlate a batch reply with the objects that were sent.
pub fn from_reply(
    reply: BatchObjectsReply,
    original: &[BatchObject],
    wire: &[wire::BatchObject],
    elapsed_seconds: f64,
) -> WeaviateResult<BatchObjectsReturn> {
    if original.len() != wire.len() {
        return Err(WeaviateError::invalid(format!(
            "{} objects were mapped to {} wire objects",
            original.len(),
            wire.len()
        )));
    }

    let mut failures = BTreeMap::new();
    for entry in reply.errors {
        let index = usize::try_from(entry.index)
            .ok()
            .filter(|i| *i < original.len())
            .ok_or_else(|| {
                WeaviateError::decode(format!(
                    "batch error index {} is outside a batch of {}",
                    entry.index,
                    original.len()
                ))
            })?;
        failures.insert(index, entry.error);
    }

    let mut result = BatchObjectsReturn {
        has_errors: !failures.is_empty(),
        elapsed_seconds,
        ..Default::default()
    };

    for (index, (obj, sent)) in original.iter().zip(wire).enumerate() {
        match failures.remove(&index) {
            Some(message) => {
                let error = ErrorObject {
                    message,
                    object: obj.clone(),
                    original_uuid: obj.id,
                };
                result.errors.insert(index, error.clone());
                result.all_responses.push(BatchResponse::Error(error));
            }
            None => {
                let id = Uuid::parse_str(&sent.uuid).map_err(|e| {
                    WeaviateError::decode(format!("invalid batch uuid '{}': {}", sent.uuid, e))
                })?;
                result.uuids.insert(index, id);
                result.all_responses.push(BatchResponse::Uuid(id));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::ServerVersion;
    use crate::codec::WeaviateField;
    use crate::codec::vector::decode_floats;
    use rpc::weaviate_v1::batch_objects_reply::BatchError;

    fn article(title: &str) -> BatchObject {
        BatchObject::new("Article").with_properties(Properties::from([(
            "title".to_string(),
            WeaviateField::from(title),
        )]))
    }

    #[test]
    fn test_to_wire_preserves_order_and_generates_ids() {
        let id = Uuid::new_v4();
        let objects = vec![article("a"), article("b").with_id(id)];
        let wire = to_wire(&objects, false, None, &Capabilities::latest()).unwrap();

        assert_eq!(wire.len(), 2);
        assert!(Uuid::parse_str(&wire[0].uuid).is_ok());
        assert_eq!(wire[1].uuid, id.to_string());
        assert_eq!(wire[0].collection, "Article");
    }

    #[test]
    fn test_object_tenant_overrides_batch_tenant() {
        let objects = vec![article("a"), article("b").with_tenant("beta")];
        let wire = to_wire(&objects, false, Some("alpha"), &Capabilities::latest()).unwrap();
        assert_eq!(wire[0].tenant, "alpha");
        assert_eq!(wire[1].tenant, "beta");
    }

    #[test]
    fn test_single_vector_placement() {
        let objects = vec![article("a").with_vector(vec![1.0, 2.0])];

        let legacy = to_wire(&objects, false, None, &Capabilities::latest()).unwrap();
        assert_eq!(decode_floats(&legacy[0].vector_bytes).unwrap(), vec![1.0, 2.0]);
        assert!(legacy[0].vectors.is_empty());

        let named = to_wire(&objects, true, None, &Capabilities::latest()).unwrap();
        assert!(named[0].vector_bytes.is_empty());
        assert_eq!(named[0].vectors[0].name, DEFAULT_VECTOR);
    }

    #[test]
    fn test_named_vectors_need_named_collection() {
        let named = BTreeMap::from([("title".to_string(), VectorValue::Single(vec![0.5]))]);
        let objects = vec![article("a").with_vector(named)];

        let err = to_wire(&objects, false, None, &Capabilities::latest()).unwrap_err();
        assert!(matches!(err, WeaviateError::InvalidInput(_)));

        let wire = to_wire(&objects, true, None, &Capabilities::latest()).unwrap();
        assert_eq!(wire[0].vectors.len(), 1);
    }

    #[test]
    fn test_multi_vector_is_version_gated() {
        let named = BTreeMap::from([(
            "colbert".to_string(),
            VectorValue::Multi(vec![vec![0.1, 0.2], vec![0.3, 0.4]]),
        )]);
        let objects = vec![article("a").with_vector(named)];
        let old = Capabilities::for_version(ServerVersion::new(1, 26, 0));

        let err = to_wire(&objects, true, None, &old).unwrap_err();
        assert!(matches!(err, WeaviateError::UnsupportedFeature { .. }));
    }

    #[test]
    fn test_references_split_by_kind() {
        let target = Uuid::new_v4();
        let obj = article("a")
            .with_reference("hasCategory", target)
            .with_reference(
                "mentions",
                ReferenceInput::multi_target("Person", vec![target]),
            );
        let wire = to_wire(&[obj], false, None, &Capabilities::latest()).unwrap();
        let props = wire[0].properties.as_ref().unwrap();

        assert_eq!(props.single_target_ref_props[0].prop_name, "hasCategory");
        assert_eq!(props.single_target_ref_props[0].uuids, vec![target.to_string()]);
        assert_eq!(props.multi_target_ref_props[0].target_collection, "Person");
        assert!(props.non_ref_properties.is_some());
    }

    #[test]
    fn test_from_reply_with_one_error() {
        let objects = vec![article("a"), article("b"), article("c")];
        let wire = to_wire(&objects, false, None, &Capabilities::latest()).unwrap();
        let reply = BatchObjectsReply {
            took: 0.1,
            errors: vec![BatchError {
                index: 1,
                error: "vectorizer unavailable".into(),
            }],
        };

        let result = from_reply(reply, &objects, &wire, 0.25).unwrap();
        assert!(result.has_errors);
        assert_eq!(result.all_responses.len(), 3);
        assert_eq!(result.uuids.keys().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(result.errors[&1].message, "vectorizer unavailable");
        assert_eq!(result.errors[&1].original_uuid, None);
        assert_eq!(result.uuids[&0].to_string(), wire[0].uuid);
    }

    #[test]
    fn test_from_reply_rejects_out_of_range_index() {
        let objects = vec![article("a")];
        let wire = to_wire(&objects, false, None, &Capabilities::latest()).unwrap();
        for index in [1, -1] {
            let reply = BatchObjectsReply {
                took: 0.0,
                errors: vec![BatchError {
                    index,
                    error: "boom".into(),
                }],
            };
            let err = from_reply(reply, &objects, &wire, 0.0).unwrap_err();
            assert!(matches!(err, WeaviateError::WireDecode(_)));
        }
    }

    #[test]
    fn test_merge_offsets_indices() {
        let first = BatchObjectsReturn {
            uuids: BTreeMap::from([(0, Uuid::new_v4()), (1, Uuid::new_v4())]),
            all_responses: vec![
                BatchResponse::Uuid(Uuid::nil()),
                BatchResponse::Uuid(Uuid::nil()),
            ],
            elapsed_seconds: 1.0,
            ..Default::default()
        };
        let failed = ErrorObject {
            message: "bad".into(),
            object: article("c"),
            original_uuid: None,
        };
        let second = BatchObjectsReturn {
            errors: BTreeMap::from([(0, failed.clone())]),
            all_responses: vec![BatchResponse::Error(failed)],
            has_errors: true,
            elapsed_seconds: 0.5,
            ..Default::default()
        };

        let merged = first.merge(second);
        assert_eq!(merged.all_responses.len(), 3);
        assert!(merged.errors.contains_key(&2));
        assert!(merged.has_errors);
        assert_eq!(merged.elapsed_seconds, 1.5);
    }
}
