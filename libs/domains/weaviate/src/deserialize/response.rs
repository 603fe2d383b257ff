use std::collections::BTreeMap;

use rpc::weaviate_v1::{
    GroupByResult, MetadataResult, PropertiesResult, SearchReply, SearchResult, TenantsGetReply,
};

use crate::codec::properties::properties_from_wire;
use crate::codec::VectorValue;
use crate::codec::vector::{DEFAULT_VECTOR, decode_vectors};
use crate::conversions::{timestamp_from_millis, uuid_from_metadata};
use crate::error::{WeaviateError, WeaviateResult};
use crate::results::{
    GenerativeGroupByReturn, GenerativeObject, GenerativeReturn, GroupByGroup, GroupByObject,
    GroupByReturn, MetadataReturn, QueryReturn, ReferenceResult, WeaviateObject,
};
use crate::tenants::Tenant;

/// Turns search replies into typed results for one collection.
#[derive(Debug, Clone, Copy)]
pub struct ResponseDeserializer<'a> {
    collection: &'a str,
}

impl<'a> ResponseDeserializer<'a> {
    pub fn new(collection: &'a str) -> Self {
        Self { collection }
    }

    pub fn query(&self, reply: SearchReply) -> WeaviateResult<QueryReturn> {
        let objects = reply
            .results
            .into_iter()
            .map(|r| self.object(r))
            .collect::<WeaviateResult<_>>()?;
        Ok(QueryReturn { objects })
    }

    pub fn generate(&self, reply: SearchReply) -> WeaviateResult<GenerativeReturn> {
        let objects = reply
            .results
            .into_iter()
            .map(|r| self.generative_object(r))
            .collect::<WeaviateResult<_>>()?;
        Ok(GenerativeReturn {
            objects,
            generated: reply.generative_grouped_result,
        })
    }

    pub fn group_by(&self, reply: SearchReply) -> WeaviateResult<GroupByReturn<WeaviateObject>> {
        let mut out = self.groups(reply.group_by_results, |r| self.object(r))?;
        out.generated = reply.generative_grouped_result;
        Ok(out)
    }

    pub fn generate_group_by(&self, reply: SearchReply) -> WeaviateResult<GenerativeGroupByReturn> {
        let mut out = self.groups(reply.group_by_results, |r| self.generative_object(r))?;
        out.generated = reply.generative_grouped_result;
        Ok(out)
    }

    /// Tenant listing; statuses go through the client-facing mapping.
    pub fn tenants(&self, reply: TenantsGetReply) -> WeaviateResult<Vec<Tenant>> {
        reply.tenants.into_iter().map(Tenant::try_from).collect()
    }

    fn groups<O: Clone>(
        &self,
        results: Vec<GroupByResult>,
        decode: impl Fn(SearchResult) -> WeaviateResult<O>,
    ) -> WeaviateResult<GroupByReturn<O>> {
        let mut out = GroupByReturn::default();
        for group in results {
            let objects = group
                .objects
                .into_iter()
                .map(&decode)
                .collect::<WeaviateResult<Vec<O>>>()?;
            out.objects.extend(objects.iter().cloned().map(|object| GroupByObject {
                object,
                belongs_to_group: group.name.clone(),
            }));
            out.groups.push(GroupByGroup {
                name: group.name,
                min_distance: group.min_distance,
                max_distance: group.max_distance,
                number_of_objects: group.number_of_objects,
                objects,
                rerank_score: group.rerank.map(|r| r.score),
                generated: group.generative.map(|g| g.result),
            });
        }
        Ok(out)
    }

    fn generative_object(&self, result: SearchResult) -> WeaviateResult<GenerativeObject> {
        let generated = result
            .metadata
            .as_ref()
            .filter(|m| m.generative_present)
            .map(|m| m.generative.clone());
        Ok(GenerativeObject {
            object: self.object(result)?,
            generated,
        })
    }

    fn object(&self, result: SearchResult) -> WeaviateResult<WeaviateObject> {
        decode_object(result.metadata, result.properties, Some(self.collection))
    }
}

fn decode_object(
    metadata: Option<MetadataResult>,
    properties: Option<PropertiesResult>,
    collection: Option<&str>,
) -> WeaviateResult<WeaviateObject> {
    let metadata = metadata.ok_or(WeaviateError::MissingUuid)?;
    let uuid = uuid_from_metadata(&metadata)?;
    let vectors = object_vectors(&metadata)?;
    let meta = metadata_return(&metadata)?;

    let props = properties.unwrap_or_default();
    let collection = if props.target_collection.is_empty() {
        collection.map(str::to_string)
    } else {
        Some(props.target_collection.clone())
    };
    let references = references(props.ref_props, props.ref_props_requested)?;
    let properties = match props.non_ref_props {
        Some(p) => properties_from_wire(p)?,
        None => Default::default(),
    };

    Ok(WeaviateObject {
        uuid,
        collection,
        properties,
        references,
        metadata: meta,
        vectors,
    })
}

#[allow(deprecated)]
fn object_vectors(meta: &MetadataResult) -> WeaviateResult<BTreeMap<String, VectorValue>> {
    let mut out = decode_vectors(&meta.vector_bytes, &meta.vectors)?;
    // older servers only fill the float list
    if meta.vector_bytes.is_empty() && !meta.vector.is_empty() {
        out.entry(DEFAULT_VECTOR.to_string())
            .or_insert_with(|| VectorValue::Single(meta.vector.clone()));
    }
    Ok(out)
}

fn metadata_return(meta: &MetadataResult) -> WeaviateResult<MetadataReturn> {
    Ok(MetadataReturn {
        creation_time: meta
            .creation_time_unix_present
            .then(|| timestamp_from_millis(meta.creation_time_unix))
            .transpose()?,
        last_update_time: meta
            .last_update_time_unix_present
            .then(|| timestamp_from_millis(meta.last_update_time_unix))
            .transpose()?,
        distance: meta.distance_present.then_some(meta.distance),
        certainty: meta.certainty_present.then_some(meta.certainty),
        score: meta.score_present.then_some(meta.score),
        explain_score: meta
            .explain_score_present
            .then(|| meta.explain_score.clone()),
        is_consistent: if meta.is_consistent_present {
            Some(meta.is_consistent.unwrap_or_default())
        } else {
            meta.is_consistent
        },
        rerank_score: meta.rerank_score_present.then_some(meta.rerank_score),
    })
}

fn references(
    ref_props: Vec<rpc::weaviate_v1::RefPropertiesResult>,
    requested: bool,
) -> WeaviateResult<Option<BTreeMap<String, ReferenceResult>>> {
    if ref_props.is_empty() {
        return Ok(requested.then(BTreeMap::new));
    }
    let mut out: BTreeMap<String, ReferenceResult> = BTreeMap::new();
    for reference in ref_props {
        let objects = reference
            .properties
            .into_iter()
            .map(|mut p| {
                let metadata = p.metadata.take();
                decode_object(metadata, Some(p), None)
            })
            .collect::<WeaviateResult<Vec<_>>>()?;
        out.entry(reference.prop_name)
            .or_default()
            .objects
            .extend(objects);
    }
    Ok(Some(out))
}
