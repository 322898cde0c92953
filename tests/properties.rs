//! Property tests over random acquaintance graphs.

use std::collections::{BTreeSet, HashSet};

use friendship_graph::{
    text, ArticulationPointFinder, ComponentFinder, GraphFingerprint, PeopleGraph,
    SchoolSubgraphExtractor, ShortestPathFinder,
};
use proptest::prelude::*;

const SCHOOLS: [Option<&str>; 3] = [Some("rutgers"), Some("princeton"), None];

/// Random graph: up to 14 people, up to 30 edge insertions (self-loops and
/// repeats included).
fn arb_graph() -> impl Strategy<Value = PeopleGraph> {
    (1usize..14)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(0usize..SCHOOLS.len(), n),
                prop::collection::vec((0..n, 0..n), 0..30),
            )
        })
        .prop_map(|(schools, edges)| {
            let mut graph = PeopleGraph::new();
            for (i, school) in schools.iter().enumerate() {
                graph.add_person(&format!("p{i}"), SCHOOLS[*school]).unwrap();
            }
            for (a, b) in edges {
                graph.add_edge(&format!("p{a}"), &format!("P{b}")).unwrap();
            }
            graph
        })
}

fn name(graph: &PeopleGraph, pos: usize) -> String {
    graph.person_at(pos).unwrap().name().to_string()
}

proptest! {
    #[test]
    fn adjacency_is_symmetric(graph in arb_graph()) {
        for edge in graph.edges() {
            let a = name(&graph, edge.a);
            let b = name(&graph, edge.b);
            prop_assert!(graph.neighbors(&a).unwrap().any(|p| p.name().as_str() == b));
            prop_assert!(graph.neighbors(&b).unwrap().any(|p| p.name().as_str() == a));
        }
    }

    #[test]
    fn identity_path(graph in arb_graph()) {
        for person in graph.persons() {
            let chain = ShortestPathFinder::find(&graph, person.name().as_str(), person.name().as_str())
                .unwrap()
                .unwrap();
            prop_assert_eq!(chain.names(), vec![person.name().as_str()]);
        }
    }

    #[test]
    fn paths_exist_exactly_within_components(graph in arb_graph()) {
        let labels = ComponentFinder::labels(&graph);
        let a = name(&graph, 0);

        for pos in 0..graph.len() {
            let b = name(&graph, pos);
            let chain = ShortestPathFinder::find(&graph, &a, &b).unwrap();
            prop_assert_eq!(chain.is_some(), labels[0] == labels[pos]);

            if let Some(chain) = chain {
                let names = chain.names();
                prop_assert_eq!(names.first().copied(), Some(a.as_str()));
                prop_assert_eq!(names.last().copied(), Some(b.as_str()));
                for step in names.windows(2) {
                    prop_assert!(graph.contains_edge(step[0], step[1]));
                }
            }
        }
    }

    #[test]
    fn path_is_shortest(graph in arb_graph()) {
        // Hop count from the first person must match BFS layer depth
        let a = name(&graph, 0);
        let mut depth = vec![None; graph.len()];
        depth[0] = Some(0usize);
        let mut layer = vec![0usize];
        let mut d = 0;
        while !layer.is_empty() {
            d += 1;
            let mut next = Vec::new();
            for &pos in &layer {
                for &nb in graph.neighbor_positions(pos) {
                    if depth[nb].is_none() {
                        depth[nb] = Some(d);
                        next.push(nb);
                    }
                }
            }
            layer = next;
        }

        for pos in 0..graph.len() {
            let hops = ShortestPathFinder::find(&graph, &a, &name(&graph, pos))
                .unwrap()
                .map(|c| c.hops());
            prop_assert_eq!(hops, depth[pos]);
        }
    }

    #[test]
    fn components_partition_graph(graph in arb_graph()) {
        let components = ComponentFinder::find(&graph);

        let mut seen = HashSet::new();
        for component in &components {
            for person in component.persons() {
                prop_assert!(seen.insert(person.name().to_string()), "person in two components");
            }
        }
        prop_assert_eq!(seen.len(), graph.len());

        let edges: usize = components.iter().map(PeopleGraph::edge_count).sum();
        prop_assert_eq!(edges, graph.edge_count());
        prop_assert_eq!(components.len(), ComponentFinder::count(&graph));
    }

    #[test]
    fn school_subgraph_is_contained(graph in arb_graph(), school in 0..SCHOOLS.len()) {
        let target = SCHOOLS[school].unwrap_or("");
        let sub = SchoolSubgraphExtractor::extract(&graph, target);

        let expected = graph.persons().iter().filter(|p| p.school().map(|s| s.as_str()).unwrap_or("") == target).count();
        prop_assert_eq!(sub.len(), expected);

        for person in sub.persons() {
            prop_assert_eq!(person.school().map(|s| s.as_str()).unwrap_or(""), target);
        }
        for edge in sub.edges() {
            let a = name(&sub, edge.a);
            let b = name(&sub, edge.b);
            prop_assert!(graph.contains_edge(&a, &b));
        }

        let inside = graph
            .edges()
            .iter()
            .filter(|e| {
                let attends = |pos| graph.person_at(pos).unwrap().school().map(|s| s.as_str()).unwrap_or("") == target;
                attends(e.a) && attends(e.b)
            })
            .count();
        prop_assert_eq!(sub.edge_count(), inside);
    }

    #[test]
    fn connectors_are_exactly_the_cut_vertices(graph in arb_graph()) {
        let before = ComponentFinder::count(&graph);
        let reported: Vec<String> = ArticulationPointFinder::find(&graph)
            .into_iter()
            .map(|p| p.name().to_string())
            .collect();

        let unique: BTreeSet<_> = reported.iter().collect();
        prop_assert_eq!(unique.len(), reported.len(), "duplicate connector");

        for person in graph.persons() {
            let name = person.name().as_str();
            let after = ComponentFinder::count(&graph.without(name).unwrap());
            let is_cut = after > before;
            prop_assert_eq!(reported.iter().any(|r| r == name), is_cut, "{}", name);
        }
    }

    #[test]
    fn text_round_trip(graph in arb_graph()) {
        let reparsed = text::parse(&text::to_text(&graph)).unwrap();

        prop_assert_eq!(reparsed.len(), graph.len());
        prop_assert_eq!(reparsed.edge_count(), graph.unique_edges().len());
        prop_assert_eq!(GraphFingerprint::compute(&reparsed).unwrap(), GraphFingerprint::compute(&graph).unwrap());
    }
}
