mod query;

pub use query::QuerySerializer;
