//! Output types for component ranking.

use serde::Serialize;

/// One connected component: its root node and member count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedComponent {
    /// Root node of the component's tree.
    pub root: usize,
    /// Number of member nodes, root included.
    pub size: usize,
}

/// The largest components of a finished forest.
///
/// Components are ordered by size descending, then root ascending. Built
/// once after aggregation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRanking {
    /// The reported components. Length = `min(top_m, n_components)`.
    top: Vec<RankedComponent>,
    /// Product of the reported sizes (1 when none are reported).
    product: u64,
    /// Number of distinct components in the forest.
    n_components: usize,
    /// Number of nodes in the forest.
    n_nodes: usize,
}

impl ComponentRanking {
    /// Creates a new `ComponentRanking`.
    pub(crate) fn new(
        top: Vec<RankedComponent>,
        product: u64,
        n_components: usize,
        n_nodes: usize,
    ) -> Self {
        Self {
            top,
            product,
            n_components,
            n_nodes,
        }
    }

    /// Returns the reported components, largest first.
    pub fn top(&self) -> &[RankedComponent] {
        &self.top
    }

    /// Returns the reported sizes, descending.
    pub fn sizes(&self) -> Vec<usize> {
        self.top.iter().map(|c| c.size).collect()
    }

    /// Returns the product of the reported sizes.
    pub fn product(&self) -> u64 {
        self.product
    }

    /// Returns the number of distinct components in the forest.
    pub fn n_components(&self) -> usize {
        self.n_components
    }

    /// Returns the number of nodes in the forest.
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }
}
