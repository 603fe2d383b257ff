//! Property tree conversion between [`WeaviateField`] and the tagged wire
//! `Value` union.
//!
//! Two list generations exist on the wire. Servers with typed list support
//! receive homogeneous typed list messages (numbers and ints packed as `f64`
//! lanes); older servers get a generic list of tagged values. Decoding
//! accepts both.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use rpc::weaviate_v1 as wire;
use rpc::weaviate_v1::{list_value, value};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::vector::{decode_float64s, decode_ints, encode_float64s, encode_ints};
use crate::capabilities::{Capabilities, Capability};
use crate::error::{WeaviateError, WeaviateResult};

/// Decoded (or to-be-encoded) object properties, keyed by property name.
pub type Properties = BTreeMap<String, WeaviateField>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f32,
    pub longitude: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub input: String,
    pub default_country: Option<String>,
    pub country_code: Option<u64>,
    pub international_formatted: Option<String>,
    pub national: Option<u64>,
    pub national_formatted: Option<String>,
    pub valid: Option<bool>,
}

impl PhoneNumber {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = Some(country.into());
        self
    }
}

/// A single property value. Scalar and array variants of one data type are
/// distinct cases, so a value is never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WeaviateField {
    Text(String),
    Int(i64),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
    Uuid(Uuid),
    Blob(String),
    Geo(GeoCoordinate),
    Phone(PhoneNumber),
    Object(Properties),
    TextArray(Vec<String>),
    IntArray(Vec<i64>),
    NumberArray(Vec<f64>),
    BooleanArray(Vec<bool>),
    DateArray(Vec<DateTime<Utc>>),
    UuidArray(Vec<Uuid>),
    ObjectArray(Vec<Properties>),
}

impl WeaviateField {
    pub fn type_name(&self) -> &'static str {
        match self {
            WeaviateField::Text(_) => "text",
            WeaviateField::Int(_) => "int",
            WeaviateField::Number(_) => "number",
            WeaviateField::Boolean(_) => "boolean",
            WeaviateField::Date(_) => "date",
            WeaviateField::Uuid(_) => "uuid",
            WeaviateField::Blob(_) => "blob",
            WeaviateField::Geo(_) => "geoCoordinates",
            WeaviateField::Phone(_) => "phoneNumber",
            WeaviateField::Object(_) => "object",
            WeaviateField::TextArray(_) => "text[]",
            WeaviateField::IntArray(_) => "int[]",
            WeaviateField::NumberArray(_) => "number[]",
            WeaviateField::BooleanArray(_) => "boolean[]",
            WeaviateField::DateArray(_) => "date[]",
            WeaviateField::UuidArray(_) => "uuid[]",
            WeaviateField::ObjectArray(_) => "object[]",
        }
    }
}

impl From<&str> for WeaviateField {
    fn from(v: &str) -> Self {
        WeaviateField::Text(v.to_string())
    }
}

impl From<String> for WeaviateField {
    fn from(v: String) -> Self {
        WeaviateField::Text(v)
    }
}

impl From<i64> for WeaviateField {
    fn from(v: i64) -> Self {
        WeaviateField::Int(v)
    }
}

impl From<f64> for WeaviateField {
    fn from(v: f64) -> Self {
        WeaviateField::Number(v)
    }
}

impl From<bool> for WeaviateField {
    fn from(v: bool) -> Self {
        WeaviateField::Boolean(v)
    }
}

impl From<DateTime<Utc>> for WeaviateField {
    fn from(v: DateTime<Utc>) -> Self {
        WeaviateField::Date(v)
    }
}

impl From<Uuid> for WeaviateField {
    fn from(v: Uuid) -> Self {
        WeaviateField::Uuid(v)
    }
}

impl From<GeoCoordinate> for WeaviateField {
    fn from(v: GeoCoordinate) -> Self {
        WeaviateField::Geo(v)
    }
}

impl From<Properties> for WeaviateField {
    fn from(v: Properties) -> Self {
        WeaviateField::Object(v)
    }
}

pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_date(raw: &str) -> WeaviateResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| WeaviateError::decode(format!("invalid date '{}': {}", raw, e)))
}

fn parse_uuid(raw: &str) -> WeaviateResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| WeaviateError::decode(format!("invalid uuid '{}': {}", raw, e)))
}

// ===== Encoding =====

fn kind(kind: value::Kind) -> wire::Value {
    wire::Value { kind: Some(kind) }
}

pub fn to_wire(field: &WeaviateField, caps: &Capabilities) -> wire::Value {
    let typed = caps.supports(Capability::TypedListValues);
    match field {
        WeaviateField::Text(v) => kind(value::Kind::TextValue(v.clone())),
        WeaviateField::Int(v) => kind(value::Kind::IntValue(*v)),
        WeaviateField::Number(v) => kind(value::Kind::NumberValue(*v)),
        WeaviateField::Boolean(v) => kind(value::Kind::BoolValue(*v)),
        WeaviateField::Date(v) => kind(value::Kind::DateValue(format_date(v))),
        WeaviateField::Uuid(v) => kind(value::Kind::UuidValue(v.to_string())),
        WeaviateField::Blob(v) => kind(value::Kind::BlobValue(v.clone())),
        WeaviateField::Geo(v) => kind(value::Kind::GeoValue(wire::GeoCoordinate {
            latitude: v.latitude,
            longitude: v.longitude,
        })),
        WeaviateField::Phone(v) => kind(value::Kind::PhoneValue(wire::PhoneNumber {
            input: v.input.clone(),
            default_country: v.default_country.clone().unwrap_or_default(),
            ..Default::default()
        })),
        WeaviateField::Object(v) => kind(value::Kind::ObjectValue(properties_to_wire(v, caps))),
        WeaviateField::TextArray(v) => list(
            typed,
            || list_value::Kind::TextValues(wire::TextValues { values: v.clone() }),
            || {
                v.iter()
                    .map(|s| kind(value::Kind::StringValue(s.clone())))
                    .collect()
            },
        ),
        WeaviateField::IntArray(v) => list(
            typed,
            || list_value::Kind::IntValues(wire::IntValues { values: encode_ints(v) }),
            || v.iter().map(|i| kind(value::Kind::IntValue(*i))).collect(),
        ),
        WeaviateField::NumberArray(v) => list(
            typed,
            || {
                list_value::Kind::NumberValues(wire::NumberValues {
                    values: encode_float64s(v),
                })
            },
            || v.iter().map(|n| kind(value::Kind::NumberValue(*n))).collect(),
        ),
        WeaviateField::BooleanArray(v) => list(
            typed,
            || list_value::Kind::BoolValues(wire::BoolValues { values: v.clone() }),
            || v.iter().map(|b| kind(value::Kind::BoolValue(*b))).collect(),
        ),
        WeaviateField::DateArray(v) => list(
            typed,
            || {
                list_value::Kind::DateValues(wire::DateValues {
                    values: v.iter().map(format_date).collect(),
                })
            },
            || {
                v.iter()
                    .map(|d| kind(value::Kind::DateValue(format_date(d))))
                    .collect()
            },
        ),
        WeaviateField::UuidArray(v) => list(
            typed,
            || {
                list_value::Kind::UuidValues(wire::UuidValues {
                    values: v.iter().map(Uuid::to_string).collect(),
                })
            },
            || {
                v.iter()
                    .map(|u| kind(value::Kind::UuidValue(u.to_string())))
                    .collect()
            },
        ),
        WeaviateField::ObjectArray(v) => list(
            typed,
            || {
                list_value::Kind::ObjectValues(wire::ObjectValues {
                    values: v.iter().map(|p| properties_to_wire(p, caps)).collect(),
                })
            },
            || {
                v.iter()
                    .map(|p| kind(value::Kind::ObjectValue(properties_to_wire(p, caps))))
                    .collect()
            },
        ),
    }
}

#[allow(deprecated)]
fn list(
    typed: bool,
    typed_kind: impl FnOnce() -> list_value::Kind,
    legacy_values: impl FnOnce() -> Vec<wire::Value>,
) -> wire::Value {
    let list = if typed {
        wire::ListValue {
            values: Vec::new(),
            kind: Some(typed_kind()),
        }
    } else {
        wire::ListValue {
            values: legacy_values(),
            kind: None,
        }
    };
    kind(value::Kind::ListValue(list))
}

pub fn properties_to_wire(props: &Properties, caps: &Capabilities) -> wire::Properties {
    wire::Properties {
        fields: props
            .iter()
            .map(|(name, field)| (name.clone(), to_wire(field, caps)))
            .collect(),
    }
}

// ===== Decoding =====

/// Decode one wire value. `Ok(None)` means the server sent an explicit null.
pub fn from_wire(value: wire::Value) -> WeaviateResult<Option<WeaviateField>> {
    let kind = value
        .kind
        .ok_or_else(|| WeaviateError::decode("property value carries no known kind"))?;

    let field = match kind {
        value::Kind::NullValue(_) => return Ok(None),
        value::Kind::NumberValue(v) => WeaviateField::Number(v),
        value::Kind::IntValue(v) => WeaviateField::Int(v),
        value::Kind::StringValue(v) | value::Kind::TextValue(v) => WeaviateField::Text(v),
        value::Kind::BoolValue(v) => WeaviateField::Boolean(v),
        value::Kind::DateValue(v) => WeaviateField::Date(parse_date(&v)?),
        value::Kind::UuidValue(v) => WeaviateField::Uuid(parse_uuid(&v)?),
        value::Kind::BlobValue(v) => WeaviateField::Blob(v),
        value::Kind::GeoValue(v) => WeaviateField::Geo(GeoCoordinate {
            latitude: v.latitude,
            longitude: v.longitude,
        }),
        value::Kind::PhoneValue(v) => WeaviateField::Phone(phone_from_wire(v)),
        value::Kind::ObjectValue(v) => WeaviateField::Object(properties_from_wire(v)?),
        value::Kind::ListValue(v) => list_from_wire(v)?,
    };
    Ok(Some(field))
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

fn non_zero(n: u64) -> Option<u64> {
    (n != 0).then_some(n)
}

/// Zero codes mean the server did not parse the number, so validity is
/// unknown rather than false.
fn phone_from_wire(p: wire::PhoneNumber) -> PhoneNumber {
    let parsed = p.country_code != 0 || p.national != 0;
    PhoneNumber {
        input: p.input,
        default_country: non_empty(p.default_country),
        country_code: non_zero(p.country_code),
        international_formatted: non_empty(p.international_formatted),
        national: non_zero(p.national),
        national_formatted: non_empty(p.national_formatted),
        valid: (parsed || p.valid).then_some(p.valid),
    }
}

#[allow(deprecated)]
fn list_from_wire(list: wire::ListValue) -> WeaviateResult<WeaviateField> {
    let Some(kind) = list.kind else {
        return legacy_list_from_wire(list.values);
    };
    Ok(match kind {
        list_value::Kind::NumberValues(v) => WeaviateField::NumberArray(decode_float64s(&v.values)?),
        list_value::Kind::IntValues(v) => WeaviateField::IntArray(decode_ints(&v.values)?),
        list_value::Kind::BoolValues(v) => WeaviateField::BooleanArray(v.values),
        list_value::Kind::TextValues(v) => WeaviateField::TextArray(v.values),
        list_value::Kind::DateValues(v) => WeaviateField::DateArray(
            v.values
                .iter()
                .map(|d| parse_date(d))
                .collect::<WeaviateResult<_>>()?,
        ),
        list_value::Kind::UuidValues(v) => WeaviateField::UuidArray(
            v.values
                .iter()
                .map(|u| parse_uuid(u))
                .collect::<WeaviateResult<_>>()?,
        ),
        list_value::Kind::ObjectValues(v) => WeaviateField::ObjectArray(
            v.values
                .into_iter()
                .map(properties_from_wire)
                .collect::<WeaviateResult<_>>()?,
        ),
    })
}

fn mixed_list(first: &WeaviateField, other: &WeaviateField) -> WeaviateError {
    WeaviateError::decode(format!(
        "list mixes element kinds: {} and {}",
        first.type_name(),
        other.type_name()
    ))
}

fn legacy_list_from_wire(values: Vec<wire::Value>) -> WeaviateResult<WeaviateField> {
    let mut items = Vec::with_capacity(values.len());
    for (index, v) in values.into_iter().enumerate() {
        match from_wire(v)? {
            Some(field) => items.push(field),
            None => {
                return Err(WeaviateError::decode(format!(
                    "list element {} is null",
                    index
                )));
            }
        }
    }

    // An empty legacy list carries no element type; surface it as text.
    let Some(first) = items.first().cloned() else {
        return Ok(WeaviateField::TextArray(Vec::new()));
    };

    macro_rules! collect {
        ($variant:ident, $array:ident) => {{
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    WeaviateField::$variant(v) => out.push(v),
                    other => return Err(mixed_list(&first, &other)),
                }
            }
            WeaviateField::$array(out)
        }};
    }

    Ok(match first {
        WeaviateField::Text(_) => collect!(Text, TextArray),
        WeaviateField::Int(_) => collect!(Int, IntArray),
        WeaviateField::Number(_) => collect!(Number, NumberArray),
        WeaviateField::Boolean(_) => collect!(Boolean, BooleanArray),
        WeaviateField::Date(_) => collect!(Date, DateArray),
        WeaviateField::Uuid(_) => collect!(Uuid, UuidArray),
        WeaviateField::Object(_) => collect!(Object, ObjectArray),
        other => {
            return Err(WeaviateError::decode(format!(
                "unsupported element in list value: {}",
                other.type_name()
            )));
        }
    })
}

pub fn properties_from_wire(props: wire::Properties) -> WeaviateResult<Properties> {
    let mut out = Properties::new();
    for (name, value) in props.fields {
        if let Some(field) = from_wire(value)? {
            out.insert(name, field);
        }
    }
    Ok(out)
}

// ===== serde bridge =====

/// Convert any serializable struct (or JSON map) into a property tree.
/// Strings stay text; integral numbers become ints; nulls are omitted.
pub fn properties_from_serializable<T: Serialize>(value: &T) -> WeaviateResult<Properties> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => json_object(map),
        other => Err(WeaviateError::invalid(format!(
            "properties must serialize to a JSON object, got {}",
            other
        ))),
    }
}

fn json_object(map: serde_json::Map<String, serde_json::Value>) -> WeaviateResult<Properties> {
    let mut out = Properties::new();
    for (name, v) in map {
        if let Some(field) = json_field(&name, v)? {
            out.insert(name, field);
        }
    }
    Ok(out)
}

fn json_number(name: &str, n: &serde_json::Number) -> WeaviateResult<WeaviateField> {
    if let Some(i) = n.as_i64() {
        Ok(WeaviateField::Int(i))
    } else {
        n.as_f64()
            .map(WeaviateField::Number)
            .ok_or_else(|| WeaviateError::invalid(format!("'{}' is not representable", name)))
    }
}

fn json_field(name: &str, v: serde_json::Value) -> WeaviateResult<Option<WeaviateField>> {
    use serde_json::Value as J;
    Ok(Some(match v {
        J::Null => return Ok(None),
        J::Bool(b) => WeaviateField::Boolean(b),
        J::Number(n) => json_number(name, &n)?,
        J::String(s) => WeaviateField::Text(s),
        J::Object(map) => WeaviateField::Object(json_object(map)?),
        J::Array(items) => json_array(name, items)?,
    }))
}

fn json_array(name: &str, items: Vec<serde_json::Value>) -> WeaviateResult<WeaviateField> {
    use serde_json::Value as J;
    let heterogeneous = || WeaviateError::invalid(format!("'{}' mixes element types", name));

    match items.first() {
        None | Some(J::String(_)) => items
            .into_iter()
            .map(|v| match v {
                J::String(s) => Ok(s),
                _ => Err(heterogeneous()),
            })
            .collect::<WeaviateResult<_>>()
            .map(WeaviateField::TextArray),
        Some(J::Bool(_)) => items
            .into_iter()
            .map(|v| v.as_bool().ok_or_else(heterogeneous))
            .collect::<WeaviateResult<_>>()
            .map(WeaviateField::BooleanArray),
        Some(J::Number(_)) => {
            if items.iter().all(|v| v.is_i64()) {
                Ok(WeaviateField::IntArray(
                    items.iter().filter_map(J::as_i64).collect(),
                ))
            } else {
                items
                    .into_iter()
                    .map(|v| v.as_f64().ok_or_else(heterogeneous))
                    .collect::<WeaviateResult<_>>()
                    .map(WeaviateField::NumberArray)
            }
        }
        Some(J::Object(_)) => items
            .into_iter()
            .map(|v| match v {
                J::Object(map) => json_object(map),
                _ => Err(heterogeneous()),
            })
            .collect::<WeaviateResult<_>>()
            .map(WeaviateField::ObjectArray),
        Some(_) => Err(WeaviateError::invalid(format!(
            "'{}' contains unsupported nested values",
            name
        ))),
    }
}

/// Deserialize a property tree into a caller-defined struct.
pub fn properties_as<T: DeserializeOwned>(props: &Properties) -> WeaviateResult<T> {
    let json = serde_json::to_value(props)?;
    Ok(serde_json::from_value(json)?)
}
