//! Connector (cut vertex) detection.

use crate::graph::PeopleGraph;
use crate::types::Person;

/// Sentinel discovery number for unvisited positions.
const UNVISITED: usize = 0;

/// One suspended step of the depth-first search.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    /// Index of the next neighbor to examine.
    cursor: usize,
}

/// Finds people whose removal disconnects part of the graph.
///
/// ## Algorithm
///
/// Depth-first search tracking discovery number `dfs_num` and low-link `low`
/// for every position, restarted from each unvisited person so every
/// component gets its own tree. After a tree child `c` of `s` finishes:
///
/// - `low(s) = min(low(s), low(c))`
/// - a non-root `s` is a connector if `low(c) >= dfs_num(s)`
/// - the root is a connector once it has a second tree child
///
/// Any already-visited neighbor lowers `low(s)` to its `dfs_num`. The search
/// runs on an explicit frame stack, so deep chains do not exhaust the call
/// stack.
pub struct ArticulationPointFinder;

impl ArticulationPointFinder {
    /// Connectors in the order they were first detected, without duplicates.
    pub fn find(graph: &PeopleGraph) -> Vec<&Person> {
        let positions = Self::positions(graph);
        tracing::debug!(connectors = positions.len(), "Connector search finished");
        positions.into_iter().filter_map(|pos| graph.person_at(pos)).collect()
    }

    /// Connector positions in detection order.
    pub fn positions(graph: &PeopleGraph) -> Vec<usize> {
        let n = graph.len();
        let mut dfs_num = vec![UNVISITED; n];
        let mut low = vec![UNVISITED; n];
        let mut is_connector = vec![false; n];
        let mut connectors = Vec::new();
        let mut next_num = 1;
        let mut stack: Vec<Frame> = Vec::new();

        for root in 0..n {
            if dfs_num[root] != UNVISITED {
                continue;
            }

            tracing::trace!(root, "Starting connector DFS");
            dfs_num[root] = next_num;
            low[root] = next_num;
            next_num += 1;
            let mut root_children = 0;
            stack.push(Frame { node: root, cursor: 0 });

            while let Some(frame) = stack.last_mut() {
                let node = frame.node;

                if let Some(&neighbor) = graph.neighbor_positions(node).get(frame.cursor) {
                    frame.cursor += 1;
                    if dfs_num[neighbor] == UNVISITED {
                        dfs_num[neighbor] = next_num;
                        low[neighbor] = next_num;
                        next_num += 1;
                        stack.push(Frame { node: neighbor, cursor: 0 });
                    } else {
                        low[node] = low[node].min(dfs_num[neighbor]);
                    }
                    continue;
                }

                // All neighbors examined: return to the parent frame
                stack.pop();
                let Some(parent) = stack.last().map(|f| f.node) else {
                    continue;
                };

                low[parent] = low[parent].min(low[node]);
                if low[node] < dfs_num[parent] {
                    continue;
                }

                let qualifies = if parent == root {
                    root_children += 1;
                    root_children == 2
                } else {
                    true
                };
                if qualifies && !is_connector[parent] {
                    is_connector[parent] = true;
                    connectors.push(parent);
                }
            }
        }

        connectors
    }
}
