//! Checked-in protobuf code for the Weaviate gRPC API.
//!
//! Generated with `buf generate` (prost + tonic plugins). The prost file
//! `include!`s its tonic companion, so only the message module is wired here.

pub mod weaviate {
    pub mod v1 {
        include!("generated/weaviate/v1/weaviate.v1.rs");
    }
}

pub use weaviate::v1 as weaviate_v1;
