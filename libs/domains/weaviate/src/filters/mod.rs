//! Filter construction and serialization.
//!
//! ```rust
//! use domain_weaviate::filters::Filter;
//!
//! let filter = Filter::by_ref("hasCategory").by_property("name").equal("shoes")
//!     & Filter::by_property("price").less_than(100.0);
//! ```

pub mod target;

use std::ops::{BitAnd, BitOr};

use chrono::{DateTime, Utc};
use rpc::weaviate_v1::{self as wire, filters};
use uuid::Uuid;

use crate::codec::properties::format_date;
use crate::error::{WeaviateError, WeaviateResult};
pub use target::{TargetNode, attach, resolve};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    Like,
    IsNull,
    ContainsAny,
    ContainsAll,
    WithinGeoRange,
}

impl FilterOperator {
    fn to_wire(self) -> filters::Operator {
        match self {
            FilterOperator::Equal => filters::Operator::Equal,
            FilterOperator::NotEqual => filters::Operator::NotEqual,
            FilterOperator::LessThan => filters::Operator::LessThan,
            FilterOperator::LessThanEqual => filters::Operator::LessThanEqual,
            FilterOperator::GreaterThan => filters::Operator::GreaterThan,
            FilterOperator::GreaterThanEqual => filters::Operator::GreaterThanEqual,
            FilterOperator::Like => filters::Operator::Like,
            FilterOperator::IsNull => filters::Operator::IsNull,
            FilterOperator::ContainsAny => filters::Operator::ContainsAny,
            FilterOperator::ContainsAll => filters::Operator::ContainsAll,
            FilterOperator::WithinGeoRange => filters::Operator::WithinGeoRange,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRange {
    pub latitude: f32,
    pub longitude: f32,
    /// Meters.
    pub distance: f32,
}

/// Right-hand side of a predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterLiteral {
    Text(String),
    Int(i64),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
    Uuid(Uuid),
    TextArray(Vec<String>),
    IntArray(Vec<i64>),
    NumberArray(Vec<f64>),
    BooleanArray(Vec<bool>),
    DateArray(Vec<DateTime<Utc>>),
    UuidArray(Vec<Uuid>),
    GeoRange(GeoRange),
}

impl FilterLiteral {
    fn is_array(&self) -> bool {
        matches!(
            self,
            FilterLiteral::TextArray(_)
                | FilterLiteral::IntArray(_)
                | FilterLiteral::NumberArray(_)
                | FilterLiteral::BooleanArray(_)
                | FilterLiteral::DateArray(_)
                | FilterLiteral::UuidArray(_)
        )
    }

    fn to_wire(&self) -> filters::TestValue {
        use filters::TestValue as T;
        match self {
            FilterLiteral::Text(v) => T::ValueText(v.clone()),
            FilterLiteral::Int(v) => T::ValueInt(*v),
            FilterLiteral::Number(v) => T::ValueNumber(*v),
            FilterLiteral::Boolean(v) => T::ValueBoolean(*v),
            FilterLiteral::Date(v) => T::ValueText(format_date(v)),
            FilterLiteral::Uuid(v) => T::ValueText(v.to_string()),
            FilterLiteral::TextArray(v) => T::ValueTextArray(wire::TextArray { values: v.clone() }),
            FilterLiteral::IntArray(v) => T::ValueIntArray(wire::IntArray { values: v.clone() }),
            FilterLiteral::NumberArray(v) => {
                T::ValueNumberArray(wire::NumberArray { values: v.clone() })
            }
            FilterLiteral::BooleanArray(v) => {
                T::ValueBooleanArray(wire::BooleanArray { values: v.clone() })
            }
            FilterLiteral::DateArray(v) => T::ValueTextArray(wire::TextArray {
                values: v.iter().map(format_date).collect(),
            }),
            FilterLiteral::UuidArray(v) => T::ValueTextArray(wire::TextArray {
                values: v.iter().map(Uuid::to_string).collect(),
            }),
            FilterLiteral::GeoRange(g) => T::ValueGeo(wire::GeoCoordinatesFilter {
                latitude: g.latitude,
                longitude: g.longitude,
                distance: g.distance,
            }),
        }
    }
}

macro_rules! literal_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(impl From<$ty> for FilterLiteral {
            fn from(v: $ty) -> Self {
                FilterLiteral::$variant(v.into())
            }
        })*
    };
}

literal_from! {
    String => Text,
    &str => Text,
    i64 => Int,
    i32 => Int,
    f64 => Number,
    bool => Boolean,
    DateTime<Utc> => Date,
    Uuid => Uuid,
    Vec<String> => TextArray,
    Vec<i64> => IntArray,
    Vec<f64> => NumberArray,
    Vec<bool> => BooleanArray,
    Vec<DateTime<Utc>> => DateArray,
    Vec<Uuid> => UuidArray,
    GeoRange => GeoRange,
}

impl From<Vec<&str>> for FilterLiteral {
    fn from(v: Vec<&str>) -> Self {
        FilterLiteral::TextArray(v.into_iter().map(str::to_string).collect())
    }
}

/// A filter tree: `And`/`Or` combinators over predicate leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    And(Vec<FilterValue>),
    Or(Vec<FilterValue>),
    Predicate {
        operator: FilterOperator,
        target: TargetNode,
        value: FilterLiteral,
    },
}

impl BitAnd for FilterValue {
    type Output = FilterValue;

    fn bitand(self, rhs: FilterValue) -> FilterValue {
        match self {
            FilterValue::And(mut children) => {
                children.push(rhs);
                FilterValue::And(children)
            }
            lhs => FilterValue::And(vec![lhs, rhs]),
        }
    }
}

impl BitOr for FilterValue {
    type Output = FilterValue;

    fn bitor(self, rhs: FilterValue) -> FilterValue {
        match self {
            FilterValue::Or(mut children) => {
                children.push(rhs);
                FilterValue::Or(children)
            }
            lhs => FilterValue::Or(vec![lhs, rhs]),
        }
    }
}

/// A filter on a resolved target, ready for a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    target: TargetNode,
}

/// A reference traversal that still needs its terminal property or count.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceFilter {
    chain: TargetNode,
}

impl Filter {
    pub fn by_property(name: impl Into<String>) -> Filter {
        Filter {
            target: TargetNode::property(name),
        }
    }

    pub fn by_id() -> Filter {
        Self::by_property("_id")
    }

    pub fn by_creation_time() -> Filter {
        Self::by_property("_creationTimeUnix")
    }

    pub fn by_update_time() -> Filter {
        Self::by_property("_lastUpdateTimeUnix")
    }

    /// Filter on the length of a text or array property.
    pub fn by_property_length(name: impl AsRef<str>) -> Filter {
        Self::by_property(format!("len({})", name.as_ref()))
    }

    pub fn by_ref_count(link_on: impl Into<String>) -> Filter {
        Filter {
            target: TargetNode::count(link_on),
        }
    }

    pub fn by_ref(link_on: impl Into<String>) -> ReferenceFilter {
        ReferenceFilter {
            chain: TargetNode::reference(link_on),
        }
    }

    pub fn by_ref_multi_target(
        link_on: impl Into<String>,
        target_collection: impl Into<String>,
    ) -> ReferenceFilter {
        ReferenceFilter {
            chain: TargetNode::multi_target_reference(link_on, target_collection),
        }
    }

    pub fn all_of(filters: Vec<FilterValue>) -> FilterValue {
        FilterValue::And(filters)
    }

    pub fn any_of(filters: Vec<FilterValue>) -> FilterValue {
        FilterValue::Or(filters)
    }

    pub fn target(&self) -> &TargetNode {
        &self.target
    }

    fn predicate(self, operator: FilterOperator, value: impl Into<FilterLiteral>) -> FilterValue {
        FilterValue::Predicate {
            operator,
            target: self.target,
            value: value.into(),
        }
    }

    pub fn equal(self, value: impl Into<FilterLiteral>) -> FilterValue {
        self.predicate(FilterOperator::Equal, value)
    }

    pub fn not_equal(self, value: impl Into<FilterLiteral>) -> FilterValue {
        self.predicate(FilterOperator::NotEqual, value)
    }

    pub fn less_than(self, value: impl Into<FilterLiteral>) -> FilterValue {
        self.predicate(FilterOperator::LessThan, value)
    }

    pub fn less_or_equal(self, value: impl Into<FilterLiteral>) -> FilterValue {
        self.predicate(FilterOperator::LessThanEqual, value)
    }

    pub fn greater_than(self, value: impl Into<FilterLiteral>) -> FilterValue {
        self.predicate(FilterOperator::GreaterThan, value)
    }

    pub fn greater_or_equal(self, value: impl Into<FilterLiteral>) -> FilterValue {
        self.predicate(FilterOperator::GreaterThanEqual, value)
    }

    /// Wildcard match, `?` for one character and `*` for any run.
    pub fn like(self, pattern: impl Into<String>) -> FilterValue {
        self.predicate(FilterOperator::Like, FilterLiteral::Text(pattern.into()))
    }

    pub fn is_null(self, null: bool) -> FilterValue {
        self.predicate(FilterOperator::IsNull, null)
    }

    pub fn contains_any(self, values: impl Into<FilterLiteral>) -> FilterValue {
        self.predicate(FilterOperator::ContainsAny, values)
    }

    pub fn contains_all(self, values: impl Into<FilterLiteral>) -> FilterValue {
        self.predicate(FilterOperator::ContainsAll, values)
    }

    pub fn within_geo_range(self, range: GeoRange) -> FilterValue {
        self.predicate(FilterOperator::WithinGeoRange, range)
    }
}

impl ReferenceFilter {
    fn close(self, leaf: TargetNode) -> Filter {
        Filter {
            target: target::extend_open(&self.chain, leaf),
        }
    }

    fn link(self, next: TargetNode) -> ReferenceFilter {
        ReferenceFilter {
            chain: target::extend_open(&self.chain, next),
        }
    }

    pub fn by_property(self, name: impl Into<String>) -> Filter {
        self.close(TargetNode::property(name))
    }

    pub fn by_id(self) -> Filter {
        self.by_property("_id")
    }

    pub fn by_creation_time(self) -> Filter {
        self.by_property("_creationTimeUnix")
    }

    pub fn by_update_time(self) -> Filter {
        self.by_property("_lastUpdateTimeUnix")
    }

    pub fn by_ref_count(self, link_on: impl Into<String>) -> Filter {
        self.close(TargetNode::count(link_on))
    }

    pub fn by_ref(self, link_on: impl Into<String>) -> ReferenceFilter {
        self.link(TargetNode::reference(link_on))
    }

    pub fn by_ref_multi_target(
        self,
        link_on: impl Into<String>,
        target_collection: impl Into<String>,
    ) -> ReferenceFilter {
        self.link(TargetNode::multi_target_reference(link_on, target_collection))
    }

    pub fn chain(&self) -> &TargetNode {
        &self.chain
    }
}

fn check_literal(operator: FilterOperator, value: &FilterLiteral) -> WeaviateResult<()> {
    let ok = match operator {
        FilterOperator::Like => matches!(value, FilterLiteral::Text(_)),
        FilterOperator::IsNull => matches!(value, FilterLiteral::Boolean(_)),
        FilterOperator::ContainsAny | FilterOperator::ContainsAll => value.is_array(),
        FilterOperator::WithinGeoRange => matches!(value, FilterLiteral::GeoRange(_)),
        _ => !matches!(value, FilterLiteral::GeoRange(_)),
    };
    if ok {
        Ok(())
    } else {
        Err(WeaviateError::invalid(format!(
            "operator {} does not accept {:?}",
            operator, value
        )))
    }
}

/// Serialize a filter tree. Nothing is dropped: an empty combinator or an
/// unresolvable target is an error.
pub fn serialize_filter(filter: &FilterValue) -> WeaviateResult<wire::Filters> {
    let combine = |operator: filters::Operator, children: &[FilterValue]| {
        if children.is_empty() {
            return Err(WeaviateError::invalid(format!(
                "{} filter needs at least one operand",
                operator.as_str_name()
            )));
        }
        Ok(wire::Filters {
            operator: operator as i32,
            filters: children
                .iter()
                .map(serialize_filter)
                .collect::<WeaviateResult<_>>()?,
            ..Default::default()
        })
    };

    match filter {
        FilterValue::And(children) => combine(filters::Operator::And, children),
        FilterValue::Or(children) => combine(filters::Operator::Or, children),
        FilterValue::Predicate {
            operator,
            target,
            value,
        } => {
            check_literal(*operator, value)?;
            Ok(wire::Filters {
                operator: operator.to_wire() as i32,
                target: Some(resolve(target)?),
                test_value: Some(value.to_wire()),
                ..Default::default()
            })
        }
    }
}
