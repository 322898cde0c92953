//! Graph fingerprints.
//!
//! A `GraphFingerprint` identifies the content of a graph independently of
//! insertion order and parallel edges, so a graph and its text round-trip
//! share the same `fingerprint_id`.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::error::Result;
use crate::graph::PeopleGraph;
use crate::GRAPH_SCHEMA_VERSION;

/// A deterministic fingerprint of graph content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFingerprint {
    /// Identifier computed from all other fields (xxh64).
    pub fingerprint_id: String,
    /// Number of persons.
    pub person_count: u64,
    /// Number of unique unordered edges.
    pub edge_count: u64,
    /// Schema version used for the hashed records.
    pub schema_version: String,
    /// Hash of sorted person records.
    pub person_hash: String,
    /// Hash of sorted unique edge name pairs.
    pub edge_hash: String,
}

/// Internal struct for computing the fingerprint id.
#[derive(Serialize)]
struct FingerprintIdInput<'a> {
    person_count: u64,
    edge_count: u64,
    schema_version: &'a str,
    person_hash: &'a str,
    edge_hash: &'a str,
}

impl GraphFingerprint {
    /// Compute the fingerprint of a graph.
    pub fn compute(graph: &PeopleGraph) -> Result<Self> {
        let mut records: Vec<String> = graph.persons().iter().map(ToString::to_string).collect();
        records.sort();
        let person_hash = canonical_hash_hex(&records)?;

        let mut pairs: Vec<(&str, &str)> = graph
            .unique_edges()
            .into_iter()
            .filter_map(|edge| {
                let a = graph.person_at(edge.a)?.name().as_str();
                let b = graph.person_at(edge.b)?.name().as_str();
                Some(if a <= b { (a, b) } else { (b, a) })
            })
            .collect();
        pairs.sort_unstable();
        let edge_hash = canonical_hash_hex(&pairs)?;

        let person_count = records.len() as u64;
        let edge_count = pairs.len() as u64;
        let fingerprint_id = canonical_hash_hex(&FingerprintIdInput {
            person_count,
            edge_count,
            schema_version: GRAPH_SCHEMA_VERSION,
            person_hash: &person_hash,
            edge_hash: &edge_hash,
        })?;

        Ok(Self {
            fingerprint_id,
            person_count,
            edge_count,
            schema_version: GRAPH_SCHEMA_VERSION.to_string(),
            person_hash,
            edge_hash,
        })
    }

    /// Whether `graph` has the same content as the fingerprinted graph.
    pub fn matches(&self, graph: &PeopleGraph) -> Result<bool> {
        Ok(Self::compute(graph)?.fingerprint_id == self.fingerprint_id)
    }
}
