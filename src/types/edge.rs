//! Edge types for the acquaintance graph.

use serde::{Deserialize, Serialize};

/// One recorded acquaintance between two graph positions.
///
/// Edges are undirected: `Acquaintance::new(1, 2)` and `Acquaintance::new(2, 1)`
/// describe the same pair and share a [`key`](Self::key), but the graph keeps
/// every insertion, so adding the same pair twice yields two entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Acquaintance {
    /// Position of the first endpoint, as inserted.
    pub a: usize,
    /// Position of the second endpoint, as inserted.
    pub b: usize,
}

impl Acquaintance {
    /// Create a new edge.
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Unordered pair `(min, max)`, identical for both orientations.
    pub fn key(&self) -> (usize, usize) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}
