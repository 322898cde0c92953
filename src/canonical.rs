//! Canonical serialization for deterministic hashing.
//!
//! Values are serialized to compact JSON and hashed with xxh64. Struct fields
//! hash in declaration order and sequences in index order, so hashed data must
//! not contain `HashMap`s; sort first or use `BTreeMap`.

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

use crate::error::Result;

/// Serialize a value to canonical JSON bytes.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Compute the xxh64 hash of a value's canonical bytes.
pub fn canonical_hash<T: Serialize>(value: &T) -> Result<u64> {
    to_canonical_bytes(value).map(|bytes| xxh64(&bytes, 0))
}

/// Compute the canonical hash as a 16-digit hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> Result<String> {
    canonical_hash(value).map(|hash| format!("{hash:016x}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::error::GraphError;

    #[test]
    fn test_stable_hex() {
        let records = vec!["sam|y|rutgers", "bob|n"];

        let hex = canonical_hash_hex(&records).unwrap();
        assert_eq!(hex.len(), 16);
        assert_eq!(hex, canonical_hash_hex(&records).unwrap());
    }

    #[test]
    fn test_sequence_order_matters() {
        let forward = canonical_hash(&("sam", "bob")).unwrap();
        let backward = canonical_hash(&("bob", "sam")).unwrap();
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_serialization_failure_is_reported() {
        // JSON object keys must be strings
        let mut pairs = BTreeMap::new();
        pairs.insert((1, 2), "edge");

        let err = canonical_hash_hex(&pairs).unwrap_err();
        assert!(matches!(err, GraphError::Serialization(_)));
    }
}
