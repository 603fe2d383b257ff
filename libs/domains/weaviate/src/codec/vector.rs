//! Binary vector encoding.
//!
//! Search vectors travel as packed little-endian `f32` lanes. Multi-vectors
//! (late-interaction embeddings) prefix the payload with the inner dimension
//! as a little-endian `u16`. Typed `number[]` and `int[]` property lists use
//! 8-byte `f64` lanes.

use std::collections::BTreeMap;

use rpc::weaviate_v1::{vectors::VectorType, Vectors};
use serde::{Deserialize, Serialize};

use crate::error::{WeaviateError, WeaviateResult};

const F32_LANE: usize = 4;
const F64_LANE: usize = 8;
const DIM_PREFIX: usize = 2;

/// Key used for the anonymous (unnamed) vector of an object.
pub const DEFAULT_VECTOR: &str = "default";

/// A single embedding or a multi-vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VectorValue {
    Single(Vec<f32>),
    Multi(Vec<Vec<f32>>),
}

impl VectorValue {
    pub fn is_empty(&self) -> bool {
        match self {
            VectorValue::Single(v) => v.is_empty(),
            VectorValue::Multi(rows) => rows.is_empty() || rows.iter().any(Vec::is_empty),
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, VectorValue::Multi(_))
    }

    /// Encode into a wire `Vectors` entry with the right type tag.
    pub fn to_wire(&self, name: &str) -> WeaviateResult<Vectors> {
        let (vector_bytes, kind) = match self {
            VectorValue::Single(v) => (encode(v), VectorType::SingleFp32),
            VectorValue::Multi(rows) => (encode_multi(rows)?, VectorType::MultiFp32),
        };
        Ok(Vectors {
            name: name.to_string(),
            vector_bytes,
            r#type: kind as i32,
            ..Default::default()
        })
    }
}

impl From<Vec<f32>> for VectorValue {
    fn from(v: Vec<f32>) -> Self {
        VectorValue::Single(v)
    }
}

impl From<Vec<Vec<f32>>> for VectorValue {
    fn from(rows: Vec<Vec<f32>>) -> Self {
        VectorValue::Multi(rows)
    }
}

// ===== Encoding =====

pub fn encode(vector: &[f32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(vector.len() * F32_LANE);
    for lane in vector {
        out.extend_from_slice(&lane.to_le_bytes());
    }
    out
}

pub fn encode_multi(rows: &[Vec<f32>]) -> WeaviateResult<Vec<u8>> {
    let dim = rows.first().map(Vec::len).unwrap_or(0);
    if rows.iter().any(|row| row.len() != dim) {
        return Err(WeaviateError::invalid(
            "multi-vector rows must all have the same dimension",
        ));
    }
    let dim = u16::try_from(dim).map_err(|_| {
        WeaviateError::invalid(format!("multi-vector dimension {} exceeds u16", dim))
    })?;

    let mut out = Vec::with_capacity(DIM_PREFIX + rows.len() * dim as usize * F32_LANE);
    out.extend_from_slice(&dim.to_le_bytes());
    for row in rows {
        out.extend_from_slice(&encode(row));
    }
    Ok(out)
}

pub fn encode_float64s(values: &[f64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * F64_LANE);
    for lane in values {
        out.extend_from_slice(&lane.to_le_bytes());
    }
    out
}

/// Integers share the `f64` lane layout on the wire.
pub fn encode_ints(values: &[i64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * F64_LANE);
    for lane in values {
        out.extend_from_slice(&(*lane as f64).to_le_bytes());
    }
    out
}

// ===== Decoding =====

fn check_lanes(bytes: &[u8], lane: usize) -> WeaviateResult<()> {
    if bytes.len() % lane != 0 {
        return Err(WeaviateError::MalformedVector {
            len: bytes.len(),
            lane,
        });
    }
    Ok(())
}

pub fn decode_floats(bytes: &[u8]) -> WeaviateResult<Vec<f32>> {
    check_lanes(bytes, F32_LANE)?;
    Ok(bytes
        .chunks_exact(F32_LANE)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

pub fn decode_float64s(bytes: &[u8]) -> WeaviateResult<Vec<f64>> {
    check_lanes(bytes, F64_LANE)?;
    Ok(bytes
        .chunks_exact(F64_LANE)
        .map(|c| f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
        .collect())
}

/// Integer lists travel as `f64` lanes; each lane must hold a finite value
/// inside the `i64` range.
pub fn decode_ints(bytes: &[u8]) -> WeaviateResult<Vec<i64>> {
    decode_float64s(bytes)?
        .into_iter()
        .map(|v| {
            let rounded = v.round();
            // i64::MAX as f64 rounds up to 2^63, which is already out of range
            if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
                Ok(rounded as i64)
            } else {
                Err(WeaviateError::decode(format!(
                    "int lane {} is outside the i64 range",
                    v
                )))
            }
        })
        .collect()
}

pub fn decode_multi(bytes: &[u8]) -> WeaviateResult<Vec<Vec<f32>>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    if bytes.len() < DIM_PREFIX {
        return Err(WeaviateError::MalformedVector {
            len: bytes.len(),
            lane: DIM_PREFIX,
        });
    }
    let dim = u16::from_le_bytes([bytes[0], bytes[1]]) as usize;
    let lanes = decode_floats(&bytes[DIM_PREFIX..])?;
    if dim == 0 {
        return if lanes.is_empty() {
            Ok(Vec::new())
        } else {
            Err(WeaviateError::decode(
                "multi-vector declares dimension 0 but carries data",
            ))
        };
    }
    if lanes.len() % dim != 0 {
        return Err(WeaviateError::MalformedVector {
            len: bytes.len() - DIM_PREFIX,
            lane: dim * F32_LANE,
        });
    }
    Ok(lanes.chunks_exact(dim).map(<[f32]>::to_vec).collect())
}

/// Collect an object's vectors into a name-keyed map. The anonymous vector,
/// if any, lands under [`DEFAULT_VECTOR`].
pub fn decode_vectors(
    anonymous: &[u8],
    named: &[Vectors],
) -> WeaviateResult<BTreeMap<String, VectorValue>> {
    let mut out = BTreeMap::new();
    if !anonymous.is_empty() {
        out.insert(
            DEFAULT_VECTOR.to_string(),
            VectorValue::Single(decode_floats(anonymous)?),
        );
    }
    for entry in named {
        let value = match VectorType::try_from(entry.r#type) {
            Ok(VectorType::MultiFp32) => VectorValue::Multi(decode_multi(&entry.vector_bytes)?),
            Ok(VectorType::SingleFp32) | Ok(VectorType::Unspecified) => {
                VectorValue::Single(decode_floats(&entry.vector_bytes)?)
            }
            Err(_) => {
                return Err(WeaviateError::decode(format!(
                    "unknown vector type {} for '{}'",
                    entry.r#type, entry.name
                )));
            }
        };
        out.insert(entry.name.clone(), value);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_exact() {
        let v = vec![1.0_f32, -2.5, 0.0];
        let bytes = encode(&v);
        assert_eq!(bytes.len(), 12);
        assert_eq!(decode_floats(&bytes).unwrap(), v);
    }

    #[test]
    fn test_empty_vector() {
        assert!(encode(&[]).is_empty());
        assert!(decode_floats(&[]).unwrap().is_empty());
        assert!(decode_multi(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_bad_length_is_malformed() {
        let err = decode_floats(&[0, 0, 0, 0, 1]).unwrap_err();
        assert!(matches!(err, WeaviateError::MalformedVector { len: 5, lane: 4 }));

        let err = decode_float64s(&[0; 12]).unwrap_err();
        assert!(matches!(err, WeaviateError::MalformedVector { len: 12, lane: 8 }));
    }

    #[test]
    fn test_multi_vector_prefix() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let bytes = encode_multi(&rows).unwrap();
        assert_eq!(&bytes[..2], &2u16.to_le_bytes());
        assert_eq!(bytes.len(), 2 + 6 * 4);
        assert_eq!(decode_multi(&bytes).unwrap(), rows);
    }

    #[test]
    fn test_ragged_multi_vector_rejected() {
        let err = encode_multi(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, WeaviateError::InvalidInput(_)));
    }

    #[test]
    fn test_multi_vector_truncated_rows() {
        let mut bytes = encode_multi(&[vec![1.0, 2.0, 3.0]]).unwrap();
        bytes.truncate(2 + 8);
        assert!(decode_multi(&bytes).is_err());
    }

    #[test]
    fn test_ints_round_to_nearest() {
        let bytes = encode_float64s(&[1.4, 2.6, -3.5]);
        assert_eq!(decode_ints(&bytes).unwrap(), vec![1, 3, -4]);
        assert_eq!(decode_ints(&encode_ints(&[7, -9])).unwrap(), vec![7, -9]);
    }

    #[test]
    fn test_decode_vectors_normalises_default() {
        let named = vec![
            VectorValue::Single(vec![0.5]).to_wire("title").unwrap(),
            VectorValue::Multi(vec![vec![1.0], vec![2.0]])
                .to_wire("colbert")
                .unwrap(),
        ];
        let map = decode_vectors(&encode(&[1.0, 2.0]), &named).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map["default"], VectorValue::Single(vec![1.0, 2.0]));
        assert_eq!(map["title"], VectorValue::Single(vec![0.5]));
        assert_eq!(map["colbert"], VectorValue::Multi(vec![vec![1.0], vec![2.0]]));
    }

    #[test]
    fn test_int_lanes_out_of_range_rejected() {
        for bad in [1e300, f64::NAN, f64::INFINITY, -1e19, 9_223_372_036_854_775_808.0] {
            let err = decode_ints(&encode_float64s(&[1.0, bad])).unwrap_err();
            assert!(matches!(err, WeaviateError::WireDecode(_)), "{}", bad);
        }
        assert_eq!(
            decode_ints(&encode_float64s(&[i64::MIN as f64])).unwrap(),
            vec![i64::MIN]
        );
    }

    #[test]
    fn test_multi_vector_with_empty_row_is_empty() {
        assert!(VectorValue::Multi(vec![]).is_empty());
        assert!(VectorValue::Multi(vec![vec![]]).is_empty());
        assert!(VectorValue::Multi(vec![vec![1.0], vec![]]).is_empty());
        assert!(!VectorValue::Multi(vec![vec![1.0]]).is_empty());
    }

    #[test]
    fn test_decode_vectors_unknown_type_rejected() {
        let mut entry = VectorValue::Single(vec![0.5]).to_wire("title").unwrap();
        entry.r#type = 42;
        let err = decode_vectors(&[], &[entry]).unwrap_err();
        assert!(matches!(err, WeaviateError::WireDecode(_)));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_decode_vectors_empty() {
        assert!(decode_vectors(&[], &[]).unwrap().is_empty());
    }
}
