pub mod properties;
pub mod vector;

pub use properties::{
    GeoCoordinate, PhoneNumber, Properties, WeaviateField, properties_as,
    properties_from_serializable,
};
pub use vector::{DEFAULT_VECTOR, VectorValue};
