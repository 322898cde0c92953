//! Read-only structural queries over a [`PeopleGraph`](crate::PeopleGraph).
//!
//! Every engine is a stateless unit struct. None of them mutate the graph, so
//! independent queries can run against the same graph from several threads.
//!
//! | Engine | Query |
//! |--------|-------|
//! | [`SchoolSubgraphExtractor`] | Subgraph induced by one school |
//! | [`ShortestPathFinder`] | Shortest introduction chain between two people |
//! | [`ComponentFinder`] | Partition into connected components |
//! | [`ArticulationPointFinder`] | Connectors (cut vertices) |

pub mod school;
pub mod path;
pub mod components;
pub mod connectors;

pub use school::SchoolSubgraphExtractor;
pub use path::{IntroChain, ShortestPathFinder};
pub use components::ComponentFinder;
pub use connectors::ArticulationPointFinder;
