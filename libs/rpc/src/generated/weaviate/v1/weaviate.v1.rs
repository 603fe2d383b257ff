// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TextArray {
    #[prost(string, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntArray {
    #[prost(int64, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<i64>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NumberArray {
    #[prost(double, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<f64>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BooleanArray {
    #[prost(bool, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<bool>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Filters {
    #[prost(enumeration = "filters::Operator", tag = "1")]
    pub operator: i32,
    /// will be removed in the future, use path
    #[deprecated]
    #[prost(string, repeated, tag = "2")]
    pub on: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "3")]
    pub filters: ::prost::alloc::vec::Vec<Filters>,
    /// leave space for more filter values
    #[prost(message, optional, tag = "20")]
    pub target: ::core::option::Option<FilterTarget>,
    #[prost(oneof = "filters::TestValue", tags = "4, 5, 6, 7, 9, 10, 11, 12, 13")]
    pub test_value: ::core::option::Option<filters::TestValue>,
}
/// Nested message and enum types in `Filters`.
pub mod filters {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum Operator {
        Unspecified = 0,
        Equal = 1,
        NotEqual = 2,
        GreaterThan = 3,
        GreaterThanEqual = 4,
        LessThan = 5,
        LessThanEqual = 6,
        And = 7,
        Or = 8,
        WithinGeoRange = 9,
        Like = 10,
        IsNull = 11,
        ContainsAny = 12,
        ContainsAll = 13,
    }
    impl Operator {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unspecified => "OPERATOR_UNSPECIFIED",
                Self::Equal => "OPERATOR_EQUAL",
                Self::NotEqual => "OPERATOR_NOT_EQUAL",
                Self::GreaterThan => "OPERATOR_GREATER_THAN",
                Self::GreaterThanEqual => "OPERATOR_GREATER_THAN_EQUAL",
                Self::LessThan => "OPERATOR_LESS_THAN",
                Self::LessThanEqual => "OPERATOR_LESS_THAN_EQUAL",
                Self::And => "OPERATOR_AND",
                Self::Or => "OPERATOR_OR",
                Self::WithinGeoRange => "OPERATOR_WITHIN_GEO_RANGE",
                Self::Like => "OPERATOR_LIKE",
                Self::IsNull => "OPERATOR_IS_NULL",
                Self::ContainsAny => "OPERATOR_CONTAINS_ANY",
                Self::ContainsAll => "OPERATOR_CONTAINS_ALL",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OPERATOR_UNSPECIFIED" => Some(Self::Unspecified),
                "OPERATOR_EQUAL" => Some(Self::Equal),
                "OPERATOR_NOT_EQUAL" => Some(Self::NotEqual),
                "OPERATOR_GREATER_THAN" => Some(Self::GreaterThan),
                "OPERATOR_GREATER_THAN_EQUAL" => Some(Self::GreaterThanEqual),
                "OPERATOR_LESS_THAN" => Some(Self::LessThan),
                "OPERATOR_LESS_THAN_EQUAL" => Some(Self::LessThanEqual),
                "OPERATOR_AND" => Some(Self::And),
                "OPERATOR_OR" => Some(Self::Or),
                "OPERATOR_WITHIN_GEO_RANGE" => Some(Self::WithinGeoRange),
                "OPERATOR_LIKE" => Some(Self::Like),
                "OPERATOR_IS_NULL" => Some(Self::IsNull),
                "OPERATOR_CONTAINS_ANY" => Some(Self::ContainsAny),
                "OPERATOR_CONTAINS_ALL" => Some(Self::ContainsAll),
                _ => None,
            }
        }
    }
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum TestValue {
        #[prost(string, tag = "4")]
        ValueText(::prost::alloc::string::String),
        #[prost(int64, tag = "5")]
        ValueInt(i64),
        #[prost(bool, tag = "6")]
        ValueBoolean(bool),
        #[prost(double, tag = "7")]
        ValueNumber(f64),
        #[prost(message, tag = "9")]
        ValueTextArray(super::TextArray),
        #[prost(message, tag = "10")]
        ValueIntArray(super::IntArray),
        #[prost(message, tag = "11")]
        ValueBooleanArray(super::BooleanArray),
        #[prost(message, tag = "12")]
        ValueNumberArray(super::NumberArray),
        #[prost(message, tag = "13")]
        ValueGeo(super::GeoCoordinatesFilter),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterReferenceSingleTarget {
    #[prost(string, tag = "1")]
    pub on: ::prost::alloc::string::String,
    #[prost(message, optional, boxed, tag = "2")]
    pub target: ::core::option::Option<::prost::alloc::boxed::Box<FilterTarget>>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterReferenceMultiTarget {
    #[prost(string, tag = "1")]
    pub on: ::prost::alloc::string::String,
    #[prost(message, optional, boxed, tag = "2")]
    pub target: ::core::option::Option<::prost::alloc::boxed::Box<FilterTarget>>,
    #[prost(string, tag = "3")]
    pub target_collection: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterReferenceCount {
    #[prost(string, tag = "1")]
    pub on: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterTarget {
    #[prost(oneof = "filter_target::Target", tags = "1, 2, 3, 4")]
    pub target: ::core::option::Option<filter_target::Target>,
}
/// Nested message and enum types in `FilterTarget`.
pub mod filter_target {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Target {
        #[prost(string, tag = "1")]
        Property(::prost::alloc::string::String),
        #[prost(message, tag = "2")]
        SingleTarget(super::FilterReferenceSingleTarget),
        #[prost(message, tag = "3")]
        MultiTarget(super::FilterReferenceMultiTarget),
        #[prost(message, tag = "4")]
        Count(super::FilterReferenceCount),
    }
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GeoCoordinatesFilter {
    #[prost(float, tag = "1")]
    pub latitude: f32,
    #[prost(float, tag = "2")]
    pub longitude: f32,
    #[prost(float, tag = "3")]
    pub distance: f32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vectors {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// for multi-vec
    #[deprecated]
    #[prost(uint64, tag = "2")]
    pub index: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub vector_bytes: ::prost::alloc::vec::Vec<u8>,
    #[prost(enumeration = "vectors::VectorType", tag = "4")]
    pub r#type: i32,
}
/// Nested message and enum types in `Vectors`.
pub mod vectors {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum VectorType {
        Unspecified = 0,
        SingleFp32 = 1,
        MultiFp32 = 2,
    }
    impl VectorType {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unspecified => "VECTOR_TYPE_UNSPECIFIED",
                Self::SingleFp32 => "VECTOR_TYPE_SINGLE_FP32",
                Self::MultiFp32 => "VECTOR_TYPE_MULTI_FP32",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "VECTOR_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
                "VECTOR_TYPE_SINGLE_FP32" => Some(Self::SingleFp32),
                "VECTOR_TYPE_MULTI_FP32" => Some(Self::MultiFp32),
                _ => None,
            }
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ConsistencyLevel {
    Unspecified = 0,
    One = 1,
    Quorum = 2,
    All = 3,
}
impl ConsistencyLevel {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "CONSISTENCY_LEVEL_UNSPECIFIED",
            Self::One => "CONSISTENCY_LEVEL_ONE",
            Self::Quorum => "CONSISTENCY_LEVEL_QUORUM",
            Self::All => "CONSISTENCY_LEVEL_ALL",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "CONSISTENCY_LEVEL_UNSPECIFIED" => Some(Self::Unspecified),
            "CONSISTENCY_LEVEL_ONE" => Some(Self::One),
            "CONSISTENCY_LEVEL_QUORUM" => Some(Self::Quorum),
            "CONSISTENCY_LEVEL_ALL" => Some(Self::All),
            _ => None,
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(btree_map = "string, message", tag = "1")]
    pub fields: ::prost::alloc::collections::BTreeMap<
        ::prost::alloc::string::String,
        Value,
    >,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Value {
    #[prost(oneof = "value::Kind", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13")]
    pub kind: ::core::option::Option<value::Kind>,
}
/// Nested message and enum types in `Value`.
pub mod value {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Kind {
        #[prost(double, tag = "1")]
        NumberValue(f64),
        /// dont reuse 2, old field that has been removed; Was "string string_value = 2;"
        #[prost(string, tag = "2")]
        StringValue(::prost::alloc::string::String),
        #[prost(bool, tag = "3")]
        BoolValue(bool),
        #[prost(message, tag = "4")]
        ObjectValue(super::Properties),
        #[prost(message, tag = "5")]
        ListValue(super::ListValue),
        #[prost(string, tag = "6")]
        DateValue(::prost::alloc::string::String),
        #[prost(string, tag = "7")]
        UuidValue(::prost::alloc::string::String),
        #[prost(int64, tag = "8")]
        IntValue(i64),
        #[prost(message, tag = "9")]
        GeoValue(super::GeoCoordinate),
        #[prost(string, tag = "10")]
        BlobValue(::prost::alloc::string::String),
        #[prost(message, tag = "11")]
        PhoneValue(super::PhoneNumber),
        #[prost(enumeration = "super::NullValue", tag = "12")]
        NullValue(i32),
        #[prost(string, tag = "13")]
        TextValue(::prost::alloc::string::String),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListValue {
    #[deprecated]
    #[prost(message, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<Value>,
    #[prost(oneof = "list_value::Kind", tags = "2, 3, 4, 5, 6, 7, 8")]
    pub kind: ::core::option::Option<list_value::Kind>,
}
/// Nested message and enum types in `ListValue`.
pub mod list_value {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Kind {
        #[prost(message, tag = "2")]
        NumberValues(super::NumberValues),
        #[prost(message, tag = "3")]
        BoolValues(super::BoolValues),
        #[prost(message, tag = "4")]
        ObjectValues(super::ObjectValues),
        #[prost(message, tag = "5")]
        DateValues(super::DateValues),
        #[prost(message, tag = "6")]
        UuidValues(super::UuidValues),
        #[prost(message, tag = "7")]
        IntValues(super::IntValues),
        #[prost(message, tag = "8")]
        TextValues(super::TextValues),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NumberValues {
    /// *
    /// The values are stored as a byte array, where each 8 bytes represent a single float64 value.
    /// The byte array is stored in little-endian order using uint64 encoding.
    #[prost(bytes = "vec", tag = "1")]
    pub values: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IntValues {
    /// *
    /// The values are stored as a byte array, where each 8 bytes represent a single int64 value.
    /// The byte array is stored in little-endian order using uint64 encoding.
    #[prost(bytes = "vec", tag = "1")]
    pub values: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TextValues {
    #[prost(string, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoolValues {
    #[prost(bool, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<bool>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObjectValues {
    #[prost(message, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<Properties>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DateValues {
    #[prost(string, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UuidValues {
    #[prost(string, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GeoCoordinate {
    #[prost(float, tag = "1")]
    pub longitude: f32,
    #[prost(float, tag = "2")]
    pub latitude: f32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PhoneNumber {
    #[prost(uint64, tag = "1")]
    pub country_code: u64,
    #[prost(string, tag = "2")]
    pub default_country: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub input: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub international_formatted: ::prost::alloc::string::String,
    #[prost(uint64, tag = "5")]
    pub national: u64,
    #[prost(string, tag = "6")]
    pub national_formatted: ::prost::alloc::string::String,
    #[prost(bool, tag = "7")]
    pub valid: bool,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum NullValue {
    /// Null value.
    NullValue = 0,
}
impl NullValue {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::NullValue => "NULL_VALUE",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "NULL_VALUE" => Some(Self::NullValue),
            _ => None,
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchRequest {
    /// required
    #[prost(string, tag = "1")]
    pub collection: ::prost::alloc::string::String,
    /// parameters
    #[prost(string, tag = "10")]
    pub tenant: ::prost::alloc::string::String,
    #[prost(enumeration = "ConsistencyLevel", optional, tag = "11")]
    pub consistency_level: ::core::option::Option<i32>,
    /// what is returned
    #[prost(message, optional, tag = "20")]
    pub properties: ::core::option::Option<PropertiesRequest>,
    #[prost(message, optional, tag = "21")]
    pub metadata: ::core::option::Option<MetadataRequest>,
    #[prost(message, optional, tag = "22")]
    pub group_by: ::core::option::Option<GroupBy>,
    /// affects order and length of results. 0/empty (default value) means disabled
    #[prost(uint32, tag = "30")]
    pub limit: u32,
    #[prost(uint32, tag = "31")]
    pub offset: u32,
    #[prost(uint32, tag = "32")]
    pub autocut: u32,
    #[prost(string, tag = "33")]
    pub after: ::prost::alloc::string::String,
    /// protolint:disable:next REPEATED_FIELD_NAMES_PLURALIZED
    #[prost(message, repeated, tag = "34")]
    pub sort_by: ::prost::alloc::vec::Vec<SortBy>,
    /// matches/searches for objects
    #[prost(message, optional, tag = "40")]
    pub filters: ::core::option::Option<Filters>,
    #[prost(message, optional, tag = "41")]
    pub hybrid_search: ::core::option::Option<Hybrid>,
    #[prost(message, optional, tag = "42")]
    pub bm25_search: ::core::option::Option<Bm25>,
    #[prost(message, optional, tag = "43")]
    pub near_vector: ::core::option::Option<NearVector>,
    #[prost(message, optional, tag = "44")]
    pub near_object: ::core::option::Option<NearObject>,
    #[prost(message, optional, tag = "45")]
    pub near_text: ::core::option::Option<NearTextSearch>,
    #[prost(message, optional, tag = "46")]
    pub near_image: ::core::option::Option<NearImageSearch>,
    #[prost(message, optional, tag = "47")]
    pub near_audio: ::core::option::Option<NearAudioSearch>,
    #[prost(message, optional, tag = "48")]
    pub near_video: ::core::option::Option<NearVideoSearch>,
    #[prost(message, optional, tag = "49")]
    pub near_depth: ::core::option::Option<NearDepthSearch>,
    #[prost(message, optional, tag = "50")]
    pub near_thermal: ::core::option::Option<NearThermalSearch>,
    #[prost(message, optional, tag = "51")]
    pub near_imu: ::core::option::Option<NearImuSearch>,
    #[prost(message, optional, tag = "60")]
    pub generative: ::core::option::Option<GenerativeSearch>,
    #[prost(message, optional, tag = "61")]
    pub rerank: ::core::option::Option<Rerank>,
    #[deprecated]
    #[prost(bool, tag = "100")]
    pub uses_123_api: bool,
    #[prost(bool, tag = "101")]
    pub uses_125_api: bool,
    #[prost(bool, tag = "102")]
    pub uses_127_api: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GroupBy {
    /// currently only supports one entry (eg just properties, no refs). But might
    /// be extended in the future.
    /// protolint:disable:next REPEATED_FIELD_NAMES_PLURALIZED
    #[prost(string, repeated, tag = "1")]
    pub path: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int32, tag = "2")]
    pub number_of_groups: i32,
    #[prost(int32, tag = "3")]
    pub objects_per_group: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SortBy {
    #[prost(bool, tag = "1")]
    pub ascending: bool,
    /// currently only supports one entry (eg just properties, no refs). But the
    /// weaviate datastructure already has paths in it and this makes it easily
    /// extendable in the future
    /// protolint:disable:next REPEATED_FIELD_NAMES_PLURALIZED
    #[prost(string, repeated, tag = "2")]
    pub path: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerativeSearch {
    #[prost(string, tag = "1")]
    pub single_response_prompt: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub grouped_response_task: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub grouped_properties: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Rerank {
    #[prost(string, tag = "1")]
    pub property: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "2")]
    pub query: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetadataRequest {
    #[prost(bool, tag = "1")]
    pub uuid: bool,
    #[prost(bool, tag = "2")]
    pub vector: bool,
    #[prost(bool, tag = "3")]
    pub creation_time_unix: bool,
    #[prost(bool, tag = "4")]
    pub last_update_time_unix: bool,
    #[prost(bool, tag = "5")]
    pub distance: bool,
    #[prost(bool, tag = "6")]
    pub certainty: bool,
    #[prost(bool, tag = "7")]
    pub score: bool,
    #[prost(bool, tag = "8")]
    pub explain_score: bool,
    #[prost(bool, tag = "9")]
    pub is_consistent: bool,
    #[prost(string, repeated, tag = "10")]
    pub vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PropertiesRequest {
    #[prost(string, repeated, tag = "1")]
    pub non_ref_properties: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "2")]
    pub ref_properties: ::prost::alloc::vec::Vec<RefPropertiesRequest>,
    #[prost(message, repeated, tag = "3")]
    pub object_properties: ::prost::alloc::vec::Vec<ObjectPropertiesRequest>,
    #[prost(bool, tag = "11")]
    pub return_all_nonref_properties: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObjectPropertiesRequest {
    #[prost(string, tag = "1")]
    pub prop_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub primitive_properties: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "3")]
    pub object_properties: ::prost::alloc::vec::Vec<ObjectPropertiesRequest>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RefPropertiesRequest {
    #[prost(string, tag = "1")]
    pub reference_property: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub properties: ::core::option::Option<PropertiesRequest>,
    #[prost(message, optional, tag = "3")]
    pub metadata: ::core::option::Option<MetadataRequest>,
    #[prost(string, tag = "4")]
    pub target_collection: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchOperatorOptions {
    #[prost(enumeration = "search_operator_options::Operator", tag = "1")]
    pub operator: i32,
    #[prost(int32, optional, tag = "2")]
    pub minimum_or_tokens_match: ::core::option::Option<i32>,
}
/// Nested message and enum types in `SearchOperatorOptions`.
pub mod search_operator_options {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum Operator {
        Unspecified = 0,
        Or = 1,
        And = 2,
    }
    impl Operator {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unspecified => "OPERATOR_UNSPECIFIED",
                Self::Or => "OPERATOR_OR",
                Self::And => "OPERATOR_AND",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OPERATOR_UNSPECIFIED" => Some(Self::Unspecified),
                "OPERATOR_OR" => Some(Self::Or),
                "OPERATOR_AND" => Some(Self::And),
                _ => None,
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Hybrid {
    #[prost(string, tag = "1")]
    pub query: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub properties: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// protolint:disable:next REPEATED_FIELD_NAMES_PLURALIZED
    #[deprecated]
    #[prost(float, repeated, tag = "3")]
    pub vector: ::prost::alloc::vec::Vec<f32>,
    #[prost(float, tag = "4")]
    pub alpha: f32,
    #[prost(enumeration = "hybrid::FusionType", tag = "5")]
    pub fusion_type: i32,
    #[prost(bytes = "vec", tag = "6")]
    pub vector_bytes: ::prost::alloc::vec::Vec<u8>,
    #[deprecated]
    #[prost(string, repeated, tag = "7")]
    pub target_vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// targets in msg is ignored and should not be set for hybrid
    #[prost(message, optional, tag = "8")]
    pub near_text: ::core::option::Option<NearTextSearch>,
    /// same as above. Use the target vector in the hybrid message
    #[prost(message, optional, tag = "9")]
    pub near_vector: ::core::option::Option<NearVector>,
    #[prost(message, optional, tag = "10")]
    pub targets: ::core::option::Option<Targets>,
    #[prost(message, optional, tag = "11")]
    pub bm25_search_operator: ::core::option::Option<SearchOperatorOptions>,
    #[prost(float, optional, tag = "20")]
    pub vector_distance: ::core::option::Option<f32>,
}
/// Nested message and enum types in `Hybrid`.
pub mod hybrid {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum FusionType {
        Unspecified = 0,
        Ranked = 1,
        RelativeScore = 2,
    }
    impl FusionType {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unspecified => "FUSION_TYPE_UNSPECIFIED",
                Self::Ranked => "FUSION_TYPE_RANKED",
                Self::RelativeScore => "FUSION_TYPE_RELATIVE_SCORE",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "FUSION_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
                "FUSION_TYPE_RANKED" => Some(Self::Ranked),
                "FUSION_TYPE_RELATIVE_SCORE" => Some(Self::RelativeScore),
                _ => None,
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Bm25 {
    #[prost(string, tag = "1")]
    pub query: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub properties: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "3")]
    pub search_operator: ::core::option::Option<SearchOperatorOptions>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WeightsForTarget {
    #[prost(string, tag = "1")]
    pub target: ::prost::alloc::string::String,
    #[prost(float, tag = "2")]
    pub weight: f32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Targets {
    #[prost(string, repeated, tag = "1")]
    pub target_vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(enumeration = "CombinationMethod", tag = "2")]
    pub combination: i32,
    #[deprecated]
    #[prost(btree_map = "string, float", tag = "3")]
    pub weights: ::prost::alloc::collections::BTreeMap<
        ::prost::alloc::string::String,
        f32,
    >,
    #[prost(message, repeated, tag = "4")]
    pub weights_for_targets: ::prost::alloc::vec::Vec<WeightsForTarget>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VectorForTarget {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// deprecated in 1.29.0 - use vectors
    #[deprecated]
    #[prost(bytes = "vec", tag = "2")]
    pub vector_bytes: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, repeated, tag = "3")]
    pub vectors: ::prost::alloc::vec::Vec<Vectors>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearVector {
    /// protolint:disable:next REPEATED_FIELD_NAMES_PLURALIZED
    #[deprecated]
    #[prost(float, repeated, tag = "1")]
    pub vector: ::prost::alloc::vec::Vec<f32>,
    #[prost(double, optional, tag = "2")]
    pub certainty: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: ::core::option::Option<f64>,
    #[prost(bytes = "vec", tag = "4")]
    pub vector_bytes: ::prost::alloc::vec::Vec<u8>,
    #[deprecated]
    #[prost(string, repeated, tag = "5")]
    pub target_vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "6")]
    pub targets: ::core::option::Option<Targets>,
    /// deprecated in 1.26.2 - use vector_for_targets
    #[deprecated]
    #[prost(btree_map = "string, bytes", tag = "7")]
    pub vector_per_target: ::prost::alloc::collections::BTreeMap<
        ::prost::alloc::string::String,
        ::prost::alloc::vec::Vec<u8>,
    >,
    #[prost(message, repeated, tag = "8")]
    pub vector_for_targets: ::prost::alloc::vec::Vec<VectorForTarget>,
    #[prost(message, repeated, tag = "9")]
    pub vectors: ::prost::alloc::vec::Vec<Vectors>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearObject {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(double, optional, tag = "2")]
    pub certainty: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: ::core::option::Option<f64>,
    #[deprecated]
    #[prost(string, repeated, tag = "4")]
    pub target_vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "5")]
    pub targets: ::core::option::Option<Targets>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearTextSearch {
    /// protolint:disable:next REPEATED_FIELD_NAMES_PLURALIZED
    #[prost(string, repeated, tag = "1")]
    pub query: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(double, optional, tag = "2")]
    pub certainty: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: ::core::option::Option<f64>,
    #[prost(message, optional, tag = "4")]
    pub move_to: ::core::option::Option<near_text_search::Move>,
    #[prost(message, optional, tag = "5")]
    pub move_away: ::core::option::Option<near_text_search::Move>,
    #[deprecated]
    #[prost(string, repeated, tag = "6")]
    pub target_vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "7")]
    pub targets: ::core::option::Option<Targets>,
}
/// Nested message and enum types in `NearTextSearch`.
pub mod near_text_search {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Move {
        #[prost(float, tag = "1")]
        pub force: f32,
        #[prost(string, repeated, tag = "2")]
        pub concepts: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        #[prost(string, repeated, tag = "3")]
        pub uuids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearImageSearch {
    #[prost(string, tag = "1")]
    pub image: ::prost::alloc::string::String,
    #[prost(double, optional, tag = "2")]
    pub certainty: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: ::core::option::Option<f64>,
    #[deprecated]
    #[prost(string, repeated, tag = "4")]
    pub target_vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "5")]
    pub targets: ::core::option::Option<Targets>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearAudioSearch {
    #[prost(string, tag = "1")]
    pub audio: ::prost::alloc::string::String,
    #[prost(double, optional, tag = "2")]
    pub certainty: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: ::core::option::Option<f64>,
    #[deprecated]
    #[prost(string, repeated, tag = "4")]
    pub target_vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "5")]
    pub targets: ::core::option::Option<Targets>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearVideoSearch {
    #[prost(string, tag = "1")]
    pub video: ::prost::alloc::string::String,
    #[prost(double, optional, tag = "2")]
    pub certainty: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: ::core::option::Option<f64>,
    #[deprecated]
    #[prost(string, repeated, tag = "4")]
    pub target_vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "5")]
    pub targets: ::core::option::Option<Targets>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearDepthSearch {
    #[prost(string, tag = "1")]
    pub depth: ::prost::alloc::string::String,
    #[prost(double, optional, tag = "2")]
    pub certainty: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: ::core::option::Option<f64>,
    #[deprecated]
    #[prost(string, repeated, tag = "4")]
    pub target_vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "5")]
    pub targets: ::core::option::Option<Targets>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearThermalSearch {
    #[prost(string, tag = "1")]
    pub thermal: ::prost::alloc::string::String,
    #[prost(double, optional, tag = "2")]
    pub certainty: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: ::core::option::Option<f64>,
    #[deprecated]
    #[prost(string, repeated, tag = "4")]
    pub target_vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "5")]
    pub targets: ::core::option::Option<Targets>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearImuSearch {
    #[prost(string, tag = "1")]
    pub imu: ::prost::alloc::string::String,
    #[prost(double, optional, tag = "2")]
    pub certainty: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "3")]
    pub distance: ::core::option::Option<f64>,
    #[deprecated]
    #[prost(string, repeated, tag = "4")]
    pub target_vectors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "5")]
    pub targets: ::core::option::Option<Targets>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchReply {
    #[prost(float, tag = "1")]
    pub took: f32,
    #[prost(message, repeated, tag = "2")]
    pub results: ::prost::alloc::vec::Vec<SearchResult>,
    #[prost(string, optional, tag = "3")]
    pub generative_grouped_result: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, repeated, tag = "4")]
    pub group_by_results: ::prost::alloc::vec::Vec<GroupByResult>,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct RerankReply {
    #[prost(double, tag = "1")]
    pub score: f64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerativeReply {
    #[prost(string, tag = "1")]
    pub result: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GroupByResult {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(float, tag = "2")]
    pub min_distance: f32,
    #[prost(float, tag = "3")]
    pub max_distance: f32,
    #[prost(int64, tag = "4")]
    pub number_of_objects: i64,
    #[prost(message, repeated, tag = "5")]
    pub objects: ::prost::alloc::vec::Vec<SearchResult>,
    #[prost(message, optional, tag = "6")]
    pub rerank: ::core::option::Option<RerankReply>,
    #[prost(message, optional, tag = "7")]
    pub generative: ::core::option::Option<GenerativeReply>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResult {
    #[prost(message, optional, tag = "1")]
    pub properties: ::core::option::Option<PropertiesResult>,
    #[prost(message, optional, tag = "2")]
    pub metadata: ::core::option::Option<MetadataResult>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetadataResult {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// protolint:disable:next REPEATED_FIELD_NAMES_PLURALIZED
    #[deprecated]
    #[prost(float, repeated, tag = "2")]
    pub vector: ::prost::alloc::vec::Vec<f32>,
    #[prost(int64, tag = "3")]
    pub creation_time_unix: i64,
    #[prost(bool, tag = "4")]
    pub creation_time_unix_present: bool,
    #[prost(int64, tag = "5")]
    pub last_update_time_unix: i64,
    #[prost(bool, tag = "6")]
    pub last_update_time_unix_present: bool,
    #[prost(float, tag = "7")]
    pub distance: f32,
    #[prost(bool, tag = "8")]
    pub distance_present: bool,
    #[prost(float, tag = "9")]
    pub certainty: f32,
    #[prost(bool, tag = "10")]
    pub certainty_present: bool,
    #[prost(float, tag = "11")]
    pub score: f32,
    #[prost(bool, tag = "12")]
    pub score_present: bool,
    #[prost(string, tag = "13")]
    pub explain_score: ::prost::alloc::string::String,
    #[prost(bool, tag = "14")]
    pub explain_score_present: bool,
    #[prost(bool, optional, tag = "15")]
    pub is_consistent: ::core::option::Option<bool>,
    #[prost(string, tag = "16")]
    pub generative: ::prost::alloc::string::String,
    #[prost(bool, tag = "17")]
    pub generative_present: bool,
    #[prost(bool, tag = "18")]
    pub is_consistent_present: bool,
    #[prost(bytes = "vec", tag = "19")]
    pub vector_bytes: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "20")]
    pub id_as_bytes: ::prost::alloc::vec::Vec<u8>,
    #[prost(double, tag = "21")]
    pub rerank_score: f64,
    #[prost(bool, tag = "22")]
    pub rerank_score_present: bool,
    #[prost(message, repeated, tag = "23")]
    pub vectors: ::prost::alloc::vec::Vec<Vectors>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PropertiesResult {
    #[prost(message, repeated, tag = "2")]
    pub ref_props: ::prost::alloc::vec::Vec<RefPropertiesResult>,
    #[prost(string, tag = "3")]
    pub target_collection: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub metadata: ::core::option::Option<MetadataResult>,
    #[prost(message, optional, tag = "11")]
    pub non_ref_props: ::core::option::Option<Properties>,
    #[prost(bool, tag = "12")]
    pub ref_props_requested: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RefPropertiesResult {
    #[prost(message, repeated, tag = "1")]
    pub properties: ::prost::alloc::vec::Vec<PropertiesResult>,
    #[prost(string, tag = "2")]
    pub prop_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchObjectsRequest {
    #[prost(message, repeated, tag = "1")]
    pub objects: ::prost::alloc::vec::Vec<BatchObject>,
    #[prost(enumeration = "ConsistencyLevel", optional, tag = "2")]
    pub consistency_level: ::core::option::Option<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchObject {
    #[prost(string, tag = "1")]
    pub uuid: ::prost::alloc::string::String,
    /// protolint:disable:next REPEATED_FIELD_NAMES_PLURALIZED
    #[deprecated]
    #[prost(float, repeated, tag = "2")]
    pub vector: ::prost::alloc::vec::Vec<f32>,
    #[prost(message, optional, tag = "3")]
    pub properties: ::core::option::Option<batch_object::Properties>,
    #[prost(string, tag = "4")]
    pub collection: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub tenant: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "6")]
    pub vector_bytes: ::prost::alloc::vec::Vec<u8>,
    /// protolint:disable:next REPEATED_FIELD_NAMES_PLURALIZED
    #[prost(message, repeated, tag = "23")]
    pub vectors: ::prost::alloc::vec::Vec<Vectors>,
}
/// Nested message and enum types in `BatchObject`.
pub mod batch_object {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Properties {
        #[prost(message, optional, tag = "1")]
        pub non_ref_properties: ::core::option::Option<super::Properties>,
        #[prost(message, repeated, tag = "2")]
        pub single_target_ref_props: ::prost::alloc::vec::Vec<SingleTargetRefProps>,
        #[prost(message, repeated, tag = "3")]
        pub multi_target_ref_props: ::prost::alloc::vec::Vec<MultiTargetRefProps>,
    }
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SingleTargetRefProps {
        #[prost(string, repeated, tag = "1")]
        pub uuids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        #[prost(string, tag = "2")]
        pub prop_name: ::prost::alloc::string::String,
    }
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MultiTargetRefProps {
        #[prost(string, repeated, tag = "1")]
        pub uuids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        #[prost(string, tag = "2")]
        pub prop_name: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub target_collection: ::prost::alloc::string::String,
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchObjectsReply {
    #[prost(float, tag = "1")]
    pub took: f32,
    #[prost(message, repeated, tag = "2")]
    pub errors: ::prost::alloc::vec::Vec<batch_objects_reply::BatchError>,
}
/// Nested message and enum types in `BatchObjectsReply`.
pub mod batch_objects_reply {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct BatchError {
        #[prost(int32, tag = "1")]
        pub index: i32,
        #[prost(string, tag = "2")]
        pub error: ::prost::alloc::string::String,
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TenantsGetRequest {
    #[prost(string, tag = "1")]
    pub collection: ::prost::alloc::string::String,
    /// we might need to add a tenant-cursor api at some point, make this easily extendable
    #[prost(message, optional, tag = "2")]
    pub names: ::core::option::Option<TenantNames>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TenantNames {
    #[prost(string, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TenantsGetReply {
    #[prost(float, tag = "1")]
    pub took: f32,
    #[prost(message, repeated, tag = "2")]
    pub tenants: ::prost::alloc::vec::Vec<Tenant>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tenant {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(enumeration = "TenantActivityStatus", tag = "2")]
    pub activity_status: i32,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CombinationMethod {
    Unspecified = 0,
    TypeSum = 1,
    TypeMin = 2,
    TypeAverage = 3,
    TypeRelativeScore = 4,
    TypeManual = 5,
}
impl CombinationMethod {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "COMBINATION_METHOD_UNSPECIFIED",
            Self::TypeSum => "COMBINATION_METHOD_TYPE_SUM",
            Self::TypeMin => "COMBINATION_METHOD_TYPE_MIN",
            Self::TypeAverage => "COMBINATION_METHOD_TYPE_AVERAGE",
            Self::TypeRelativeScore => "COMBINATION_METHOD_TYPE_RELATIVE_SCORE",
            Self::TypeManual => "COMBINATION_METHOD_TYPE_MANUAL",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "COMBINATION_METHOD_UNSPECIFIED" => Some(Self::Unspecified),
            "COMBINATION_METHOD_TYPE_SUM" => Some(Self::TypeSum),
            "COMBINATION_METHOD_TYPE_MIN" => Some(Self::TypeMin),
            "COMBINATION_METHOD_TYPE_AVERAGE" => Some(Self::TypeAverage),
            "COMBINATION_METHOD_TYPE_RELATIVE_SCORE" => Some(Self::TypeRelativeScore),
            "COMBINATION_METHOD_TYPE_MANUAL" => Some(Self::TypeManual),
            _ => None,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TenantActivityStatus {
    Unspecified = 0,
    Hot = 1,
    Cold = 2,
    /// 3 was used for WARM, which was never released
    Frozen = 4,
    Unfreezing = 5,
    Freezing = 6,
    /// not used yet - added to let the clients already add code to handle this in the future
    Active = 7,
    Inactive = 8,
    Offloaded = 9,
    Offloading = 10,
    Onloading = 11,
}
impl TenantActivityStatus {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "TENANT_ACTIVITY_STATUS_UNSPECIFIED",
            Self::Hot => "TENANT_ACTIVITY_STATUS_HOT",
            Self::Cold => "TENANT_ACTIVITY_STATUS_COLD",
            Self::Frozen => "TENANT_ACTIVITY_STATUS_FROZEN",
            Self::Unfreezing => "TENANT_ACTIVITY_STATUS_UNFREEZING",
            Self::Freezing => "TENANT_ACTIVITY_STATUS_FREEZING",
            Self::Active => "TENANT_ACTIVITY_STATUS_ACTIVE",
            Self::Inactive => "TENANT_ACTIVITY_STATUS_INACTIVE",
            Self::Offloaded => "TENANT_ACTIVITY_STATUS_OFFLOADED",
            Self::Offloading => "TENANT_ACTIVITY_STATUS_OFFLOADING",
            Self::Onloading => "TENANT_ACTIVITY_STATUS_ONLOADING",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "TENANT_ACTIVITY_STATUS_UNSPECIFIED" => Some(Self::Unspecified),
            "TENANT_ACTIVITY_STATUS_HOT" => Some(Self::Hot),
            "TENANT_ACTIVITY_STATUS_COLD" => Some(Self::Cold),
            "TENANT_ACTIVITY_STATUS_FROZEN" => Some(Self::Frozen),
            "TENANT_ACTIVITY_STATUS_UNFREEZING" => Some(Self::Unfreezing),
            "TENANT_ACTIVITY_STATUS_FREEZING" => Some(Self::Freezing),
            "TENANT_ACTIVITY_STATUS_ACTIVE" => Some(Self::Active),
            "TENANT_ACTIVITY_STATUS_INACTIVE" => Some(Self::Inactive),
            "TENANT_ACTIVITY_STATUS_OFFLOADED" => Some(Self::Offloaded),
            "TENANT_ACTIVITY_STATUS_OFFLOADING" => Some(Self::Offloading),
            "TENANT_ACTIVITY_STATUS_ONLOADING" => Some(Self::Onloading),
            _ => None,
        }
    }
}
include!("weaviate.v1.tonic.rs");
// @@protoc_insertion_point(module)
