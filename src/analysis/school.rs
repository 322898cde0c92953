//! School subgraph extraction.

use std::collections::VecDeque;

use crate::graph::PeopleGraph;
use crate::types::School;

/// Builds the subgraph induced by one school.
///
/// ## Algorithm
///
/// 1. Scan persons in position order
/// 2. For each unvisited person attending the school, start a BFS that only
///    follows edges into neighbors attending the same school
/// 3. Repeat until every attendee is visited (one BFS per filtered component)
/// 4. Copy visited persons in visit order, plus every edge between two of them
pub struct SchoolSubgraphExtractor;

impl SchoolSubgraphExtractor {
    /// Extract the subgraph of people attending `school`.
    ///
    /// The school is canonicalized first. A blank school selects people
    /// without any affiliation.
    pub fn extract(graph: &PeopleGraph, school: &str) -> PeopleGraph {
        let target = School::parse(school);
        let order = Self::visit_order(graph, target.as_ref());

        tracing::debug!(
            school = %school.trim(),
            members = order.len(),
            "Extracted school subgraph"
        );

        graph.induced(&[order]).pop().unwrap_or_default()
    }

    /// Positions of attendees in BFS visit order.
    fn visit_order(graph: &PeopleGraph, target: Option<&School>) -> Vec<usize> {
        let attends = |pos: usize| {
            graph
                .person_at(pos)
                .map(|p| p.attends(target))
                .unwrap_or(false)
        };

        let mut visited = vec![false; graph.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        for start in 0..graph.len() {
            if visited[start] || !attends(start) {
                continue;
            }

            tracing::trace!(start, "Starting school BFS");
            visited[start] = true;
            order.push(start);
            queue.push_back(start);

            while let Some(pos) = queue.pop_front() {
                for &neighbor in graph.neighbor_positions(pos) {
                    if !visited[neighbor] && attends(neighbor) {
                        visited[neighbor] = true;
                        order.push(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus() -> PeopleGraph {
        // sam(r) - jane(r) - bob(p) - kaitlin(r)
        //            |
        //          nick(-)
        let mut graph = PeopleGraph::new();
        graph.add_person("sam", Some("rutgers")).unwrap();
        graph.add_person("jane", Some("rutgers")).unwrap();
        graph.add_person("bob", Some("princeton")).unwrap();
        graph.add_person("kaitlin", Some("rutgers")).unwrap();
        graph.add_person("nick", None).unwrap();
        graph.add_edge("sam", "jane").unwrap();
        graph.add_edge("jane", "bob").unwrap();
        graph.add_edge("bob", "kaitlin").unwrap();
        graph.add_edge("jane", "nick").unwrap();
        graph
    }

    #[test]
    fn test_only_attendees_and_their_edges() {
        let sub = SchoolSubgraphExtractor::extract(&campus(), "Rutgers");

        let names: Vec<_> = sub.persons().iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["sam", "jane", "kaitlin"]);
        assert_eq!(sub.edge_count(), 1);
        assert!(sub.contains_edge("sam", "jane"));
        assert!(sub.neighbors("kaitlin").unwrap().next().is_none());
    }

    #[test]
    fn test_unknown_school_is_empty() {
        let sub = SchoolSubgraphExtractor::extract(&campus(), "harvard");
        assert!(sub.is_empty());
    }

    #[test]
    fn test_blank_school_selects_unaffiliated() {
        let sub = SchoolSubgraphExtractor::extract(&campus(), "");
        assert_eq!(sub.len(), 1);
        assert!(sub.person("nick").is_some());
    }

    #[test]
    fn test_bfs_visit_order() {
        let mut graph = PeopleGraph::new();
        for name in ["a", "b", "c", "d"] {
            graph.add_person(name, Some("s")).unwrap();
        }
        graph.add_edge("a", "d").unwrap();
        graph.add_edge("d", "b").unwrap();
        graph.add_edge("a", "c").unwrap();

        let sub = SchoolSubgraphExtractor::extract(&graph, "s");
        let names: Vec<_> = sub.persons().iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["a", "d", "c", "b"]);
        assert_eq!(sub.edge_count(), 3);
    }
}
