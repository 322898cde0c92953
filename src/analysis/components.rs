//! Connected component partition.
//!
//! Historically exposed as the "cliques" query. It groups people by
//! reachability; it does not look for mutually adjacent subsets.

use std::collections::VecDeque;

use crate::graph::PeopleGraph;

/// Partitions a graph into connected components by repeated BFS.
pub struct ComponentFinder;

impl ComponentFinder {
    /// Split the graph into its connected components.
    ///
    /// Components are ordered by their lowest position; persons within a
    /// component appear in BFS visit order. Every person lands in exactly one
    /// component and every edge in exactly one component's edge set.
    pub fn find(graph: &PeopleGraph) -> Vec<PeopleGraph> {
        let groups = Self::groups(graph);
        tracing::debug!(components = groups.len(), persons = graph.len(), "Partitioned graph");
        graph.induced(&groups)
    }

    /// Component id for every position, numbered in discovery order.
    pub fn labels(graph: &PeopleGraph) -> Vec<usize> {
        let mut labels = vec![0; graph.len()];
        for (id, members) in Self::groups(graph).iter().enumerate() {
            for &pos in members {
                labels[pos] = id;
            }
        }
        labels
    }

    /// Number of connected components.
    pub fn count(graph: &PeopleGraph) -> usize {
        Self::groups(graph).len()
    }

    fn groups(graph: &PeopleGraph) -> Vec<Vec<usize>> {
        let mut assigned = vec![false; graph.len()];
        let mut groups = Vec::new();
        let mut queue = VecDeque::new();

        for start in 0..graph.len() {
            if assigned[start] {
                continue;
            }

            tracing::trace!(start, "Starting component BFS");
            let mut members = vec![start];
            assigned[start] = true;
            queue.push_back(start);

            while let Some(pos) = queue.pop_front() {
                for &neighbor in graph.neighbor_positions(pos) {
                    if !assigned[neighbor] {
                        assigned[neighbor] = true;
                        members.push(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }

            groups.push(members);
        }

        groups
    }
}
