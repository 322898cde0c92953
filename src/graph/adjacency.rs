//! Per-position neighbor lists.

/// Adjacency structure over graph positions.
///
/// Each position owns an ordered list of neighbor positions into the graph's
/// single person array. Lists preserve insertion order and are not
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    lists: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Create an empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty list for a newly inserted position.
    pub fn push_node(&mut self) -> usize {
        self.lists.push(Vec::new());
        self.lists.len() - 1
    }

    /// Record `a` and `b` as neighbors of each other.
    ///
    /// A self-loop appends `a` to its own list twice, once per side.
    pub fn link(&mut self, a: usize, b: usize) {
        self.lists[a].push(b);
        self.lists[b].push(a);
    }

    /// Neighbors of `pos` in insertion order. Empty for unknown positions.
    pub fn neighbors(&self, pos: usize) -> &[usize] {
        self.lists.get(pos).map(Vec::as_slice).unwrap_or(&[])
    }
}
