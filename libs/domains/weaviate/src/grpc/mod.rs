mod client;
mod config;

pub use client::GrpcTransport;
pub use config::WeaviateConfig;
