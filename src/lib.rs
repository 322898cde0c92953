//! # friendship-graph
//!
//! Structural queries over an acquaintance graph.
//!
//! People, each optionally affiliated with a school, are joined by undirected
//! acquaintance edges. The crate answers four questions about that graph:
//!
//! 1. Which people and acquaintances belong to a given school? ([`SchoolSubgraphExtractor`])
//! 2. What is the shortest chain of introductions between two people? ([`ShortestPathFinder`])
//! 3. How does the graph split into connected groups? ([`ComponentFinder`])
//! 4. Whose removal would cut a group apart? ([`ArticulationPointFinder`])
//!
//! ## Architecture
//!
//! ```text
//! text records → text::load → PeopleGraph ─┬→ SchoolSubgraphExtractor → PeopleGraph
//!                                          ├→ ShortestPathFinder      → IntroChain
//!                                          ├→ ComponentFinder         → Vec<PeopleGraph>
//!                                          └→ ArticulationPointFinder → Vec<&Person>
//! ```
//!
//! ## Identity
//!
//! Names are case-insensitive. They are canonicalized once, at the API
//! boundary, by [`PersonName`]; everything behind it works on positions.
//!
//! ## Example
//!
//! ```
//! use friendship_graph::{text, ShortestPathFinder};
//!
//! let graph = text::parse("3\nsam|y|rutgers\njane|n\nbob|n\nsam|jane\njane|bob").unwrap();
//! let chain = ShortestPathFinder::find(&graph, "Sam", "bob").unwrap().unwrap();
//! assert_eq!(chain.names(), vec!["sam", "jane", "bob"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod config;
pub mod error;
pub mod graph;
pub mod analysis;
pub mod text;
pub mod canonical;
pub mod snapshot;

// Re-exports
pub use types::{Person, PersonName, School, Acquaintance};
pub use config::{GraphConfig, DuplicatePolicy};
pub use error::{GraphError, Result};
pub use graph::{PeopleGraph, Neighbors};
pub use analysis::{
    SchoolSubgraphExtractor, ShortestPathFinder, IntroChain,
    ComponentFinder, ArticulationPointFinder,
};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};
pub use snapshot::GraphFingerprint;

/// Schema version of hashed graph records.
/// Increment on breaking changes to the text record layout.
pub const GRAPH_SCHEMA_VERSION: &str = "1.0.0";
