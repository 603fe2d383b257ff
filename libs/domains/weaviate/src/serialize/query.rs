use std::collections::BTreeMap;

use rpc::weaviate_v1::{
    Bm25, GenerativeSearch, GroupBy, Hybrid, MetadataRequest, NearAudioSearch, NearDepthSearch,
    NearImageSearch, NearImuSearch, NearObject, NearTextSearch, NearThermalSearch, NearVector,
    NearVideoSearch, ObjectPropertiesRequest, PropertiesRequest, RefPropertiesRequest,
    Rerank as ProtoRerank, SearchOperatorOptions, SearchRequest, SortBy, Targets,
    VectorForTarget, WeightsForTarget,
};
use uuid::Uuid;

use crate::capabilities::{Capabilities, Capability};
use crate::codec::VectorValue;
use crate::codec::vector::encode;
use crate::conversions::{
    bm25_operator_to_proto, combination_to_proto, consistency_to_proto, fusion_to_proto,
    media_field_name, move_to_proto,
};
use crate::error::{WeaviateError, WeaviateResult};
use crate::filters::{Filter, serialize_filter};
use crate::models::{
    Bm25Operator, Bm25Options, CollectionContext, FetchObjectsOptions, GenerativeParameters,
    GroupByOptions, HybridOptions, HybridVector, IncludeVector, MetadataQuery, NearMediaType,
    NearOptions, NearTextOptions, NearVectorInput, PropertySelection,
    QueryOptions, QueryReference, TargetCombination, TargetVectors,
};

/// Builds `SearchRequest` messages for one collection.
///
/// Every method is pure: the same inputs always produce the same message
/// and all validation happens before anything is sent.
#[derive(Debug, Clone, Copy)]
pub struct QuerySerializer<'a> {
    context: &'a CollectionContext,
    capabilities: Capabilities,
}

/// Deprecated `target_vectors` list plus the structured `targets` message.
type ResolvedTargets = (Vec<String>, Option<Targets>);

impl<'a> QuerySerializer<'a> {
    pub fn new(context: &'a CollectionContext, capabilities: Capabilities) -> Self {
        Self {
            context,
            capabilities,
        }
    }

    // ===== Search kinds =====

    pub fn fetch_objects(&self, options: &FetchObjectsOptions) -> WeaviateResult<SearchRequest> {
        if options.after.is_some()
            && (!options.sort.is_empty()
                || options.common.filters.is_some()
                || options.common.offset.is_some())
        {
            return Err(WeaviateError::invalid(
                "cursor 'after' cannot be combined with sort, filters or offset",
            ));
        }

        let mut request = self.base(&options.common)?;
        request.after = options.after.map(|id| id.to_string()).unwrap_or_default();
        request.sort_by = options
            .sort
            .iter()
            .map(|s| SortBy {
                ascending: s.ascending,
                path: vec![s.property.clone()],
            })
            .collect();
        Ok(request)
    }

    /// A fetch restricted to one id. The id becomes the only filter.
    pub fn fetch_object_by_id(
        &self,
        id: Uuid,
        options: &QueryOptions,
    ) -> WeaviateResult<SearchRequest> {
        if options.filters.is_some() {
            return Err(WeaviateError::invalid(
                "fetch by id cannot carry additional filters",
            ));
        }
        let common = options
            .clone()
            .with_filters(Filter::by_id().equal(id))
            .with_limit(1);
        let mut request = self.base(&common)?;
        request.offset = 0;
        Ok(request)
    }

    pub fn bm25(&self, query: &str, options: &Bm25Options) -> WeaviateResult<SearchRequest> {
        if query.trim().is_empty() {
            return Err(WeaviateError::invalid("bm25 query must not be empty"));
        }
        let mut request = self.base(&options.common)?;
        request.bm25_search = Some(Bm25 {
            query: query.to_string(),
            properties: options.query_properties.clone(),
            search_operator: self.search_operator(options.operator)?,
        });
        Ok(request)
    }

    #[allow(deprecated)]
    pub fn hybrid(
        &self,
        query: Option<&str>,
        options: &HybridOptions,
    ) -> WeaviateResult<SearchRequest> {
        if query.is_none_or(|q| q.trim().is_empty()) && options.vector.is_none() {
            return Err(WeaviateError::invalid(
                "hybrid search needs a query, a vector, or both",
            ));
        }
        if !(0.0..=1.0).contains(&options.alpha) {
            return Err(WeaviateError::invalid(format!(
                "hybrid alpha must be within 0..=1, got {}",
                options.alpha
            )));
        }

        let (target_vectors, targets) = self.targets(options.target_vector.as_ref())?;
        let mut hybrid = Hybrid {
            query: query.unwrap_or_default().to_string(),
            properties: options.query_properties.clone(),
            alpha: options.alpha,
            fusion_type: options.fusion_type.map(fusion_to_proto).unwrap_or_default(),
            target_vectors,
            targets,
            bm25_search_operator: self.search_operator(options.bm25_operator)?,
            vector_distance: options.max_vector_distance,
            ..Default::default()
        };

        match &options.vector {
            None => {}
            Some(HybridVector::Vector(NearVectorInput::Single(v))) => {
                if v.is_empty() {
                    return Err(WeaviateError::invalid("hybrid vector must not be empty"));
                }
                hybrid.vector_bytes = encode(v);
            }
            Some(HybridVector::Vector(input)) => {
                hybrid.near_vector = Some(self.near_vector_message(input, None, None, None)?);
            }
            Some(HybridVector::NearVector {
                vector,
                certainty,
                distance,
            }) => {
                hybrid.near_vector =
                    Some(self.near_vector_message(vector, *certainty, *distance, None)?);
            }
            Some(HybridVector::NearText {
                query,
                certainty,
                distance,
                move_to,
                move_away,
            }) => {
                check_concepts(query)?;
                check_threshold(*certainty, *distance)?;
                hybrid.near_text = Some(NearTextSearch {
                    query: query.clone(),
                    certainty: *certainty,
                    distance: *distance,
                    move_to: move_to.as_ref().map(move_to_proto).transpose()?,
                    move_away: move_away.as_ref().map(move_to_proto).transpose()?,
                    ..Default::default()
                });
            }
        }

        let mut request = self.base(&options.common)?;
        request.hybrid_search = Some(hybrid);
        Ok(request)
    }

    #[allow(deprecated)]
    pub fn near_object(&self, id: Uuid, options: &NearOptions) -> WeaviateResult<SearchRequest> {
        check_threshold(options.certainty, options.distance)?;
        let (target_vectors, targets) = self.targets(options.target_vector.as_ref())?;
        let mut request = self.base(&options.common)?;
        request.near_object = Some(NearObject {
            id: id.to_string(),
            certainty: options.certainty,
            distance: options.distance,
            target_vectors,
            targets,
        });
        Ok(request)
    }

    pub fn near_vector(
        &self,
        vector: &NearVectorInput,
        options: &NearOptions,
    ) -> WeaviateResult<SearchRequest> {
        let message = self.near_vector_message(
            vector,
            options.certainty,
            options.distance,
            options.target_vector.as_ref(),
        )?;
        let mut request = self.base(&options.common)?;
        request.near_vector = Some(message);
        Ok(request)
    }

    #[allow(deprecated)]
    pub fn near_text(
        &self,
        query: &[String],
        options: &NearTextOptions,
    ) -> WeaviateResult<SearchRequest> {
        check_concepts(query)?;
        check_threshold(options.near.certainty, options.near.distance)?;
        let (target_vectors, targets) = self.targets(options.near.target_vector.as_ref())?;
        let mut request = self.base(&options.near.common)?;
        request.near_text = Some(NearTextSearch {
            query: query.to_vec(),
            certainty: options.near.certainty,
            distance: options.near.distance,
            move_to: options.move_to.as_ref().map(move_to_proto).transpose()?,
            move_away: options.move_away.as_ref().map(move_to_proto).transpose()?,
            target_vectors,
            targets,
        });
        Ok(request)
    }

    /// Near-media search over base64-encoded content.
    #[allow(deprecated)]
    pub fn near_media(
        &self,
        media: NearMediaType,
        base64: &str,
        options: &NearOptions,
    ) -> WeaviateResult<SearchRequest> {
        if base64.trim().is_empty() {
            return Err(WeaviateError::invalid(format!(
                "near {} content must not be empty",
                media_field_name(media)
            )));
        }
        check_threshold(options.certainty, options.distance)?;
        let (target_vectors, targets) = self.targets(options.target_vector.as_ref())?;
        let content = base64.to_string();
        let (certainty, distance) = (options.certainty, options.distance);

        let mut request = self.base(&options.common)?;
        match media {
            NearMediaType::Image => {
                request.near_image = Some(NearImageSearch {
                    image: content,
                    certainty,
                    distance,
                    target_vectors,
                    targets,
                })
            }
            NearMediaType::Audio => {
                request.near_audio = Some(NearAudioSearch {
                    audio: content,
                    certainty,
                    distance,
                    target_vectors,
                    targets,
                })
            }
            NearMediaType::Video => {
                request.near_video = Some(NearVideoSearch {
                    video: content,
                    certainty,
                    distance,
                    target_vectors,
                    targets,
                })
            }
            NearMediaType::Depth => {
                request.near_depth = Some(NearDepthSearch {
                    depth: content,
                    certainty,
                    distance,
                    target_vectors,
                    targets,
                })
            }
            NearMediaType::Thermal => {
                request.near_thermal = Some(NearThermalSearch {
                    thermal: content,
                    certainty,
                    distance,
                    target_vectors,
                    targets,
                })
            }
            NearMediaType::Imu => {
                request.near_imu = Some(NearImuSearch {
                    imu: content,
                    certainty,
                    distance,
                    target_vectors,
                    targets,
                })
            }
        }
        Ok(request)
    }

    pub fn near_image(&self, base64: &str, options: &NearOptions) -> WeaviateResult<SearchRequest> {
        self.near_media(NearMediaType::Image, base64, options)
    }

    pub fn near_audio(&self, base64: &str, options: &NearOptions) -> WeaviateResult<SearchRequest> {
        self.near_media(NearMediaType::Audio, base64, options)
    }

    pub fn near_video(&self, base64: &str, options: &NearOptions) -> WeaviateResult<SearchRequest> {
        self.near_media(NearMediaType::Video, base64, options)
    }

    pub fn near_depth(&self, base64: &str, options: &NearOptions) -> WeaviateResult<SearchRequest> {
        self.near_media(NearMediaType::Depth, base64, options)
    }

    pub fn near_thermal(
        &self,
        base64: &str,
        options: &NearOptions,
    ) -> WeaviateResult<SearchRequest> {
        self.near_media(NearMediaType::Thermal, base64, options)
    }

    pub fn near_imu(&self, base64: &str, options: &NearOptions) -> WeaviateResult<SearchRequest> {
        self.near_media(NearMediaType::Imu, base64, options)
    }

    // ===== Composition =====

    /// Group the results of an already built search request.
    pub fn with_group_by(
        &self,
        mut request: SearchRequest,
        group_by: &GroupByOptions,
    ) -> WeaviateResult<SearchRequest> {
        if !is_search(&request) {
            return Err(WeaviateError::invalid(
                "group by needs a search; plain fetches cannot be grouped",
            ));
        }
        if request.group_by.is_some() {
            return Err(WeaviateError::invalid("request is already grouped"));
        }
        if group_by.property.trim().is_empty() {
            return Err(WeaviateError::invalid("group by property must not be empty"));
        }
        if group_by.number_of_groups == 0 || group_by.objects_per_group == 0 {
            return Err(WeaviateError::invalid(
                "group by needs at least one group and one object per group",
            ));
        }

        let to_i32 = |v: u32, what: &str| {
            i32::try_from(v).map_err(|_| WeaviateError::invalid(format!("{} is too large", what)))
        };
        let number_of_groups = to_i32(group_by.number_of_groups, "number_of_groups")?;
        let objects_per_group = to_i32(group_by.objects_per_group, "objects_per_group")?;

        if request.limit == 0 {
            request.limit = group_by
                .number_of_groups
                .saturating_mul(group_by.objects_per_group);
        } else if request.limit < group_by.number_of_groups {
            return Err(WeaviateError::invalid(format!(
                "limit {} cannot fill {} groups",
                request.limit, group_by.number_of_groups
            )));
        }

        request.group_by = Some(GroupBy {
            path: vec![group_by.property.clone()],
            number_of_groups,
            objects_per_group,
        });
        Ok(request)
    }

    /// Attach retrieval-augmented generation to an already built request.
    pub fn with_generative(
        &self,
        mut request: SearchRequest,
        params: &GenerativeParameters,
    ) -> WeaviateResult<SearchRequest> {
        let single = params.single_prompt.as_deref().filter(|p| !p.trim().is_empty());
        let grouped = params.grouped_task.as_deref().filter(|t| !t.trim().is_empty());
        if single.is_none() && grouped.is_none() {
            return Err(WeaviateError::invalid(
                "generative search needs a single prompt, a grouped task, or both",
            ));
        }
        if grouped.is_none() && !params.grouped_properties.is_empty() {
            return Err(WeaviateError::invalid(
                "grouped properties require a grouped task",
            ));
        }

        request.generative = Some(GenerativeSearch {
            single_response_prompt: single.unwrap_or_default().to_string(),
            grouped_response_task: grouped.unwrap_or_default().to_string(),
            grouped_properties: params.grouped_properties.clone(),
        });
        Ok(request)
    }

    // ===== Shared pieces =====

    #[allow(deprecated)]
    fn base(&self, options: &QueryOptions) -> WeaviateResult<SearchRequest> {
        Ok(SearchRequest {
            collection: self.context.name.clone(),
            tenant: self.context.tenant.clone().unwrap_or_default(),
            consistency_level: self.context.consistency_level.map(consistency_to_proto),
            properties: Some(properties_request(
                options.return_properties.as_deref(),
                &options.return_references,
            )),
            metadata: Some(metadata_request(
                &options.return_metadata,
                &options.include_vector,
            )),
            limit: options.limit.unwrap_or_default(),
            offset: options.offset.unwrap_or_default(),
            autocut: options.autocut.unwrap_or_default(),
            filters: options.filters.as_ref().map(serialize_filter).transpose()?,
            rerank: options.rerank.as_ref().map(|r| ProtoRerank {
                property: r.property.clone(),
                query: r.query.clone(),
            }),
            uses_123_api: true,
            uses_125_api: self.capabilities.supports(Capability::TypedListValues),
            uses_127_api: self.capabilities.supports(Capability::MultiVectorPerTarget),
            ..Default::default()
        })
    }

    fn search_operator(
        &self,
        operator: Option<Bm25Operator>,
    ) -> WeaviateResult<Option<SearchOperatorOptions>> {
        match operator {
            None => Ok(None),
            Some(op) => {
                self.capabilities.require(Capability::Bm25SearchOperator)?;
                bm25_operator_to_proto(op).map(Some)
            }
        }
    }

    fn targets(&self, target: Option<&TargetVectors>) -> WeaviateResult<ResolvedTargets> {
        let Some(target) = target else {
            return Ok((Vec::new(), None));
        };
        let multi_target = self.capabilities.supports(Capability::MultiTargetSearch);

        match target {
            TargetVectors::Single(name) => {
                if name.trim().is_empty() {
                    return Err(WeaviateError::invalid("target vector name must not be empty"));
                }
                if multi_target {
                    Ok((
                        Vec::new(),
                        Some(Targets {
                            target_vectors: vec![name.clone()],
                            ..Default::default()
                        }),
                    ))
                } else {
                    Ok((vec![name.clone()], None))
                }
            }
            TargetVectors::Many(names) => {
                self.capabilities.require(Capability::MultiTargetSearch)?;
                if names.is_empty() {
                    return Err(WeaviateError::invalid("target vector list must not be empty"));
                }
                Ok((
                    Vec::new(),
                    Some(Targets {
                        target_vectors: names.clone(),
                        ..Default::default()
                    }),
                ))
            }
            TargetVectors::Combined {
                combination,
                targets,
                weights,
            } => {
                self.capabilities.require(Capability::MultiTargetSearch)?;
                if targets.is_empty() {
                    return Err(WeaviateError::invalid("target vector list must not be empty"));
                }
                let needs_weights = matches!(
                    combination,
                    TargetCombination::RelativeScore | TargetCombination::ManualWeights
                );
                if needs_weights && weights.is_empty() {
                    return Err(WeaviateError::invalid(format!(
                        "{:?} combination needs per-target weights",
                        combination
                    )));
                }
                if !weights.is_empty() {
                    self.capabilities.require(Capability::PerTargetWeights)?;
                }
                if let Some(w) = weights.iter().find(|w| !targets.contains(&w.target)) {
                    return Err(WeaviateError::invalid(format!(
                        "weight given for unknown target vector '{}'",
                        w.target
                    )));
                }
                Ok((
                    Vec::new(),
                    Some(Targets {
                        target_vectors: targets.clone(),
                        combination: combination_to_proto(*combination),
                        weights_for_targets: weights
                            .iter()
                            .map(|w| WeightsForTarget {
                                target: w.target.clone(),
                                weight: w.weight,
                            })
                            .collect(),
                        ..Default::default()
                    }),
                ))
            }
        }
    }

    /// Normalise the vector input of a near-vector search. Per-target maps
    /// name their own targets unless an explicit selection is given.
    #[allow(deprecated)]
    fn near_vector_message(
        &self,
        input: &NearVectorInput,
        certainty: Option<f64>,
        distance: Option<f64>,
        target: Option<&TargetVectors>,
    ) -> WeaviateResult<NearVector> {
        check_threshold(certainty, distance)?;
        let mut message = NearVector {
            certainty,
            distance,
            ..Default::default()
        };

        match input {
            NearVectorInput::Single(v) => {
                if v.is_empty() {
                    return Err(WeaviateError::invalid("near vector must not be empty"));
                }
                message.vector_bytes = encode(v);
                (message.target_vectors, message.targets) = self.targets(target)?;
            }
            NearVectorInput::Multi(rows) => {
                self.capabilities.require(Capability::MultiVectorPerTarget)?;
                if rows.is_empty() || rows.iter().any(Vec::is_empty) {
                    return Err(WeaviateError::invalid("near multi-vector must not be empty"));
                }
                if target.is_some_and(|t| t.names().len() > 1) {
                    return Err(WeaviateError::invalid(
                        "a single multi-vector can only be searched against one target vector",
                    ));
                }
                message.vectors = vec![VectorValue::Multi(rows.clone()).to_wire("")?];
                (message.target_vectors, message.targets) = self.targets(target)?;
            }
            NearVectorInput::PerTarget(map) => {
                self.capabilities.require(Capability::MultiTargetSearch)?;
                if map.is_empty() {
                    return Err(WeaviateError::invalid("near vector map must not be empty"));
                }
                if let Some((name, _)) = map.iter().find(|(_, v)| v.is_empty()) {
                    return Err(WeaviateError::invalid(format!(
                        "vector for target '{}' must not be empty",
                        name
                    )));
                }

                let implied;
                let target = match target {
                    Some(t) => {
                        check_targets_match(map, t)?;
                        t
                    }
                    None => {
                        implied = TargetVectors::Many(map.keys().cloned().collect());
                        &implied
                    }
                };
                (message.target_vectors, message.targets) = self.targets(Some(target))?;

                if self.capabilities.supports(Capability::MultiVectorPerTarget) {
                    message.vector_for_targets = map
                        .iter()
                        .map(|(name, v)| {
                            Ok(VectorForTarget {
                                name: name.clone(),
                                vectors: vec![v.to_wire(name)?],
                                ..Default::default()
                            })
                        })
                        .collect::<WeaviateResult<_>>()?;
                } else {
                    for (name, v) in map {
                        let VectorValue::Single(single) = v else {
                            return Err(WeaviateError::UnsupportedFeature {
                                capability: Capability::MultiVectorPerTarget
                                    .description()
                                    .to_string(),
                                version: self.capabilities.version().to_string(),
                            });
                        };
                        message
                            .vector_per_target
                            .insert(name.clone(), encode(single));
                    }
                }
            }
        }
        Ok(message)
    }
}

fn is_search(request: &SearchRequest) -> bool {
    request.hybrid_search.is_some()
        || request.bm25_search.is_some()
        || request.near_vector.is_some()
        || request.near_object.is_some()
        || request.near_text.is_some()
        || request.near_image.is_some()
        || request.near_audio.is_some()
        || request.near_video.is_some()
        || request.near_depth.is_some()
        || request.near_thermal.is_some()
        || request.near_imu.is_some()
}

/// An explicit selection must name exactly the targets the vector map covers.
fn check_targets_match(
    map: &BTreeMap<String, VectorValue>,
    target: &TargetVectors,
) -> WeaviateResult<()> {
    let names = target.names();
    if let Some(key) = map.keys().find(|k| !names.contains(k)) {
        return Err(WeaviateError::invalid(format!(
            "vector given for '{}' which is not a selected target vector",
            key
        )));
    }
    if let Some(name) = names.iter().find(|n| !map.contains_key(*n)) {
        return Err(WeaviateError::invalid(format!(
            "no vector given for selected target vector '{}'",
            name
        )));
    }
    Ok(())
}

fn check_threshold(certainty: Option<f64>, distance: Option<f64>) -> WeaviateResult<()> {
    if certainty.is_some() && distance.is_some() {
        return Err(WeaviateError::invalid(
            "certainty and distance cannot both be set",
        ));
    }
    Ok(())
}

fn check_concepts(query: &[String]) -> WeaviateResult<()> {
    if query.is_empty() || query.iter().all(|q| q.trim().is_empty()) {
        return Err(WeaviateError::invalid("near text needs at least one concept"));
    }
    Ok(())
}

fn metadata_request(meta: &MetadataQuery, include_vector: &IncludeVector) -> MetadataRequest {
    let (vector, vectors) = match include_vector {
        IncludeVector::None => (false, Vec::new()),
        IncludeVector::All => (true, Vec::new()),
        IncludeVector::Named(names) => (false, names.clone()),
    };
    MetadataRequest {
        uuid: true,
        vector,
        creation_time_unix: meta.creation_time,
        last_update_time_unix: meta.last_update_time,
        distance: meta.distance,
        certainty: meta.certainty,
        score: meta.score,
        explain_score: meta.explain_score,
        is_consistent: meta.is_consistent,
        vectors,
    }
}

fn object_properties(name: &str, nested: &[PropertySelection]) -> ObjectPropertiesRequest {
    let mut request = ObjectPropertiesRequest {
        prop_name: name.to_string(),
        ..Default::default()
    };
    for selection in nested {
        match selection {
            PropertySelection::Property(p) => request.primitive_properties.push(p.clone()),
            PropertySelection::Object { name, properties } => request
                .object_properties
                .push(object_properties(name, properties)),
        }
    }
    request
}

fn properties_request(
    selection: Option<&[PropertySelection]>,
    references: &[QueryReference],
) -> PropertiesRequest {
    let mut request = PropertiesRequest {
        return_all_nonref_properties: selection.is_none(),
        ..Default::default()
    };
    for item in selection.unwrap_or_default() {
        match item {
            PropertySelection::Property(p) => request.non_ref_properties.push(p.clone()),
            PropertySelection::Object { name, properties } => request
                .object_properties
                .push(object_properties(name, properties)),
        }
    }
    request.ref_properties = references
        .iter()
        .map(|r| RefPropertiesRequest {
            reference_property: r.link_on.clone(),
            properties: Some(properties_request(
                r.return_properties.as_deref(),
                &r.return_references,
            )),
            metadata: Some(metadata_request(&r.return_metadata, &r.include_vector)),
            target_collection: r.target_collection.clone().unwrap_or_default(),
        })
        .collect();
    request
}
