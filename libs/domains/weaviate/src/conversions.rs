use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{WeaviateError, WeaviateResult};
use crate::models::{
    Bm25Operator, ConsistencyLevel, HybridFusion, Move, NearMediaType, TargetCombination,
};

// Import generated proto types
use rpc::weaviate_v1::{
    CombinationMethod as ProtoCombination, ConsistencyLevel as ProtoConsistencyLevel,
    MetadataResult, SearchOperatorOptions, hybrid::FusionType as ProtoFusion,
    near_text_search::Move as ProtoMove, search_operator_options::Operator as ProtoOperator,
};

// ===== Consistency =====

pub fn consistency_to_proto(level: ConsistencyLevel) -> i32 {
    match level {
        ConsistencyLevel::One => ProtoConsistencyLevel::One as i32,
        ConsistencyLevel::Quorum => ProtoConsistencyLevel::Quorum as i32,
        ConsistencyLevel::All => ProtoConsistencyLevel::All as i32,
    }
}

// ===== Search enums =====

pub fn combination_to_proto(combination: TargetCombination) -> i32 {
    match combination {
        TargetCombination::Sum => ProtoCombination::TypeSum as i32,
        TargetCombination::Minimum => ProtoCombination::TypeMin as i32,
        TargetCombination::Average => ProtoCombination::TypeAverage as i32,
        TargetCombination::RelativeScore => ProtoCombination::TypeRelativeScore as i32,
        TargetCombination::ManualWeights => ProtoCombination::TypeManual as i32,
    }
}

pub fn fusion_to_proto(fusion: HybridFusion) -> i32 {
    match fusion {
        HybridFusion::Ranked => ProtoFusion::Ranked as i32,
        HybridFusion::RelativeScore => ProtoFusion::RelativeScore as i32,
    }
}

pub fn bm25_operator_to_proto(op: Bm25Operator) -> WeaviateResult<SearchOperatorOptions> {
    Ok(match op {
        Bm25Operator::And => SearchOperatorOptions {
            operator: ProtoOperator::And as i32,
            minimum_or_tokens_match: None,
        },
        Bm25Operator::Or { minimum_match } => SearchOperatorOptions {
            operator: ProtoOperator::Or as i32,
            minimum_or_tokens_match: Some(i32::try_from(minimum_match).map_err(|_| {
                WeaviateError::invalid(format!(
                    "minimum match {} exceeds the supported maximum of {}",
                    minimum_match,
                    i32::MAX
                ))
            })?),
        },
    })
}

pub fn move_to_proto(m: &Move) -> WeaviateResult<ProtoMove> {
    if !(0.0..=1.0).contains(&m.force) {
        return Err(WeaviateError::invalid(format!(
            "move force must be within 0..=1, got {}",
            m.force
        )));
    }
    if m.concepts.is_empty() && m.objects.is_empty() {
        return Err(WeaviateError::invalid(
            "move needs at least one concept or object",
        ));
    }
    Ok(ProtoMove {
        force: m.force,
        concepts: m.concepts.clone(),
        uuids: m.objects.iter().map(Uuid::to_string).collect(),
    })
}

pub fn media_field_name(media: NearMediaType) -> &'static str {
    match media {
        NearMediaType::Image => "image",
        NearMediaType::Audio => "audio",
        NearMediaType::Video => "video",
        NearMediaType::Depth => "depth",
        NearMediaType::Thermal => "thermal",
        NearMediaType::Imu => "imu",
    }
}

// ===== Metadata =====

/// Object id from a metadata message. The binary form wins when both are
/// set.
pub fn uuid_from_metadata(meta: &MetadataResult) -> WeaviateResult<Uuid> {
    if !meta.id_as_bytes.is_empty() {
        return Uuid::from_slice(&meta.id_as_bytes)
            .map_err(|e| WeaviateError::decode(format!("invalid uuid bytes: {}", e)));
    }
    if meta.id.is_empty() {
        return Err(WeaviateError::MissingUuid);
    }
    Uuid::parse_str(&meta.id)
        .map_err(|e| WeaviateError::decode(format!("invalid uuid '{}': {}", meta.id, e)))
}

/// Timestamps arrive as unix milliseconds.
pub fn timestamp_from_millis(millis: i64) -> WeaviateResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| WeaviateError::decode(format!("timestamp {} is out of range", millis)))
}
