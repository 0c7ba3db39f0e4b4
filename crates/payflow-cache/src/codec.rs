//! Payload codec.
//!
//! Entries are stored as JSON bytes. JSON keeps entries readable from
//! `redis-cli` and tolerates additive field changes between deploys.

use crate::CacheResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes a payload into the bytes stored under a key.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> CacheResult<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Decodes bytes read from the backend into a payload.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> CacheResult<T> {
    Ok(serde_json::from_slice(bytes)?)
}
