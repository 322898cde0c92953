//! Shortest introduction chains.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use crate::error::Result;
use crate::graph::PeopleGraph;
use crate::types::Person;

/// A shortest chain of acquaintances, source first, destination last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroChain<'g> {
    people: Vec<&'g Person>,
}

impl<'g> IntroChain<'g> {
    /// People along the chain, endpoints included.
    pub fn people(&self) -> &[&'g Person] {
        &self.people
    }

    /// Canonical names along the chain.
    pub fn names(&self) -> Vec<&'g str> {
        self.people.iter().map(|p| p.name().as_str()).collect()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.people.len().saturating_sub(1)
    }

    /// Number of people on the chain.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Always false; a chain holds at least its source.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl fmt::Display for IntroChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(" -> "))
    }
}

/// Unweighted shortest path search.
///
/// Dijkstra over unit edge weights, so it visits in BFS order. The frontier is
/// a min-heap keyed by `(distance, position)`; among equal distances the lower
/// position is settled first. Search stops once the destination is settled.
pub struct ShortestPathFinder;

impl ShortestPathFinder {
    /// Find a shortest chain from `from` to `to`.
    ///
    /// Returns [`GraphError::UnknownPerson`](crate::GraphError::UnknownPerson)
    /// if either name is absent, and `Ok(None)` if both exist but are not
    /// connected.
    pub fn find<'g>(graph: &'g PeopleGraph, from: &str, to: &str) -> Result<Option<IntroChain<'g>>> {
        let source = graph.require(from)?;
        let target = graph.require(to)?;

        let positions = Self::search(graph, source, target);
        tracing::debug!(
            from = %from.trim(),
            to = %to.trim(),
            hops = positions.as_ref().map(|p| p.len().saturating_sub(1)),
            "Shortest path search finished"
        );

        Ok(positions.map(|positions| IntroChain {
            people: positions
                .into_iter()
                .filter_map(|pos| graph.person_at(pos))
                .collect(),
        }))
    }

    fn search(graph: &PeopleGraph, source: usize, target: usize) -> Option<Vec<usize>> {
        if source == target {
            return Some(vec![source]);
        }

        let n = graph.len();
        let mut distance: Vec<Option<usize>> = vec![None; n];
        let mut done = vec![false; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut frontier: BinaryHeap<Reverse<(usize, usize)>> = BinaryHeap::new();

        distance[source] = Some(0);
        done[source] = true;

        for &neighbor in graph.neighbor_positions(source) {
            if distance[neighbor].is_none() {
                distance[neighbor] = Some(1);
                prev[neighbor] = Some(source);
                frontier.push(Reverse((1, neighbor)));
            }
        }

        while let Some(Reverse((dist, pos))) = frontier.pop() {
            // Stale heap entry
            if done[pos] || distance[pos] != Some(dist) {
                continue;
            }

            let next = dist + 1;
            for &neighbor in graph.neighbor_positions(pos) {
                if done[neighbor] {
                    continue;
                }
                let improves = match distance[neighbor] {
                    None => true,
                    Some(current) => next < current,
                };
                if improves {
                    distance[neighbor] = Some(next);
                    prev[neighbor] = Some(pos);
                    frontier.push(Reverse((next, neighbor)));
                }
            }

            done[pos] = true;
            if pos == target {
                break;
            }
        }

        prev[target]?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(p) = prev[current] {
            path.push(p);
            current = p;
        }
        path.reverse();

        (path.first() == Some(&source)).then_some(path)
    }
}
