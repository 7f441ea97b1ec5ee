//! Wire (de)serialization used by the dispatcher.

use serde::{de::DeserializeOwned, Serialize};

/// Encodes request bodies and decodes response bodies.
pub trait Codec: Send + Sync {
    /// Value sent in the `content-type` and `accept` headers.
    fn content_type(&self) -> &'static str;

    fn encode<B: Serialize + ?Sized>(&self, body: &B) -> Result<Vec<u8>, String>;

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, String>;
}

/// The vendor speaks JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode<B: Serialize + ?Sized>(&self, body: &B) -> Result<Vec<u8>, String> {
        serde_json::to_vec(body).map_err(|e| e.to_string())
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, String> {
        serde_json::from_slice(bytes).map_err(|e| e.to_string())
    }
}
