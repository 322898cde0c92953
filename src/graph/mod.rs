//! The acquaintance graph container.
//!
//! `PeopleGraph` owns the person array, the canonical-name index and the
//! adjacency structure. Positions are assigned at insertion and never change.
//! The four analysis engines only read from it.

pub mod adjacency;

use std::collections::{HashMap, HashSet};

use crate::config::{DuplicatePolicy, GraphConfig};
use crate::error::{GraphError, Result};
use crate::types::{Acquaintance, Person, PersonName};

pub use adjacency::Adjacency;

/// Undirected acquaintance graph.
///
/// ## Invariants
///
/// - Adjacency is symmetric: `b` is in `neighbors(a)` iff `a` is in `neighbors(b)`
/// - Every neighbor position refers to a person in the graph
/// - The name index is a bijection between canonical names and positions
#[derive(Debug, Clone, Default)]
pub struct PeopleGraph {
    config: GraphConfig,
    /// Persons by position.
    persons: Vec<Person>,
    /// Canonical name -> position.
    index: HashMap<PersonName, usize>,
    /// Position -> neighbor positions.
    adjacency: Adjacency,
    /// Every edge insertion, in order.
    edges: Vec<Acquaintance>,
}

impl PeopleGraph {
    /// Create an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration this graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Add a person from raw name and school values, returning its position.
    pub fn add_person(&mut self, name: &str, school: Option<&str>) -> Result<usize> {
        self.insert(Person::new(name, school))
    }

    /// Add a person, returning its position.
    ///
    /// Blank names, and names or schools containing `|`, `\n` or `\r`, are
    /// rejected with [`GraphError::InvalidField`] since the text format could
    /// not write them back. A name that is already present is handled
    /// according to [`GraphConfig::on_duplicate`].
    pub fn insert(&mut self, person: Person) -> Result<usize> {
        validate(&person)?;

        let Some(&pos) = self.index.get(person.name()) else {
            return Ok(self.push_person(person));
        };

        match self.config.on_duplicate {
            DuplicatePolicy::Reject => Err(GraphError::DuplicateName(person.name().to_string())),
            DuplicatePolicy::Replace => {
                tracing::warn!(
                    name = %person.name(),
                    position = pos,
                    "Replacing existing person record"
                );
                self.persons[pos] = person;
                Ok(pos)
            }
        }
    }

    fn push_person(&mut self, person: Person) -> usize {
        let pos = self.adjacency.push_node();
        self.index.insert(person.name().clone(), pos);
        self.persons.push(person);
        pos
    }

    /// Add an undirected edge between two existing people.
    ///
    /// Both sides get a neighbor entry. Repeated pairs are kept unless
    /// [`GraphConfig::dedup_edges`] is set.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<()> {
        let pa = self.require(a)?;
        let pb = self.require(b)?;

        if self.config.dedup_edges && self.adjacency.neighbors(pa).contains(&pb) {
            tracing::trace!(a = %self.persons[pa].name(), b = %self.persons[pb].name(), "Skipping repeated edge");
            return Ok(());
        }

        self.link(pa, pb);
        Ok(())
    }

    fn link(&mut self, a: usize, b: usize) {
        self.adjacency.link(a, b);
        self.edges.push(Acquaintance::new(a, b));
    }

    /// Look up a person by name.
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.position(name).map(|pos| &self.persons[pos])
    }

    /// Position of a person by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&PersonName::new(name)).copied()
    }

    /// Position of a person by name, or [`GraphError::UnknownPerson`].
    pub fn require(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| GraphError::UnknownPerson(PersonName::new(name).to_string()))
    }

    /// Person at a position.
    pub fn person_at(&self, pos: usize) -> Option<&Person> {
        self.persons.get(pos)
    }

    /// All persons in position order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Neighbors of a person, lazily, in insertion order.
    ///
    /// The returned iterator is `Clone`, so it can be restarted.
    pub fn neighbors(&self, name: &str) -> Result<Neighbors<'_>> {
        let pos = self.require(name)?;
        Ok(Neighbors {
            persons: &self.persons,
            positions: self.adjacency.neighbors(pos).iter(),
        })
    }

    /// Neighbor positions of a position in insertion order.
    pub fn neighbor_positions(&self, pos: usize) -> &[usize] {
        self.adjacency.neighbors(pos)
    }

    /// Whether an edge exists between two names.
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(pa), Some(pb)) => self.adjacency.neighbors(pa).contains(&pb),
            _ => false,
        }
    }

    /// Number of persons.
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Whether the graph has no persons.
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Number of edge insertions (parallel edges count separately).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Every edge insertion, in order.
    pub fn edges(&self) -> &[Acquaintance] {
        &self.edges
    }

    /// One edge per unordered pair, in first-seen order.
    ///
    /// Persons are scanned in position order and each person's neighbors in
    /// adjacency order; the first orientation encountered is kept.
    pub fn unique_edges(&self) -> Vec<Acquaintance> {
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut result = Vec::new();

        for pos in 0..self.persons.len() {
            for &neighbor in self.adjacency.neighbors(pos) {
                let edge = Acquaintance::new(pos, neighbor);
                if seen.insert(edge.key()) {
                    result.push(edge);
                }
            }
        }

        result
    }

    /// Build one subgraph per group of positions.
    ///
    /// Persons are copied in group order. Each logged edge whose endpoints lie
    /// in the same group is copied exactly once, in edge-log order; edges
    /// that cross groups or leave them are dropped.
    pub(crate) fn induced(&self, groups: &[Vec<usize>]) -> Vec<PeopleGraph> {
        let mut placement: Vec<Option<(usize, usize)>> = vec![None; self.persons.len()];
        let mut graphs = Vec::with_capacity(groups.len());

        for (group, members) in groups.iter().enumerate() {
            let mut sub = PeopleGraph::with_config(self.config.clone());
            for &pos in members {
                let local = sub.push_person(self.persons[pos].clone());
                placement[pos] = Some((group, local));
            }
            graphs.push(sub);
        }

        for edge in &self.edges {
            if let (Some((ga, la)), Some((gb, lb))) = (placement[edge.a], placement[edge.b]) {
                if ga == gb {
                    graphs[ga].link(la, lb);
                }
            }
        }

        graphs
    }

    /// Copy of this graph without one person and its incident edges.
    pub fn without(&self, name: &str) -> Result<PeopleGraph> {
        let removed = self.require(name)?;
        let rest: Vec<usize> = (0..self.persons.len()).filter(|&pos| pos != removed).collect();
        Ok(self.induced(&[rest]).pop().unwrap_or_default())
    }
}

/// Characters that delimit fields or records in the text format.
const SEPARATORS: [char; 3] = ['|', '\n', '\r'];

fn validate(person: &Person) -> Result<()> {
    let name = person.name().as_str();
    if name.is_empty() || name.contains(SEPARATORS) {
        return Err(GraphError::InvalidField {
            field: "name",
            value: name.to_string(),
        });
    }
    if let Some(school) = person.school() {
        if school.as_str().contains(SEPARATORS) {
            return Err(GraphError::InvalidField {
                field: "school",
                value: school.to_string(),
            });
        }
    }
    Ok(())
}

/// Lazy iterator over a person's neighbors.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    persons: &'a [Person],
    positions: std::slice::Iter<'a, usize>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Person;

    fn next(&mut self) -> Option<Self::Item> {
        self.positions.next().map(|&pos| &self.persons[pos])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
