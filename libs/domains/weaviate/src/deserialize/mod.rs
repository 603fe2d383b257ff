mod response;

pub use response::ResponseDeserializer;
