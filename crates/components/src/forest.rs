//! Disjoint-set (union-find) forest with union by rank and full path
//! compression.

use tracing::debug;

/// Union-find forest over nodes `0..n`.
///
/// Parent links and ranks live in two index arenas. A node is a root when
/// it is its own parent. `union` only ever links a root under another root,
/// so every parent chain ends at a root and `find` always terminates.
///
/// Any node index `>= len()` is a caller bug and panics immediately.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    merges: usize,
}

impl UnionFind {
    /// Creates a forest of `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            merges: 0,
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the forest has no nodes.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of unions that joined two distinct sets.
    pub fn merges(&self) -> usize {
        self.merges
    }

    /// Returns the number of disjoint sets.
    pub fn n_sets(&self) -> usize {
        self.len() - self.merges
    }

    #[inline]
    fn check(&self, x: usize) {
        assert!(
            x < self.parent.len(),
            "node {x} out of range for {} nodes",
            self.parent.len()
        );
    }

    /// Returns the root of the set containing `x`.
    ///
    /// Walks to the root, then re-links every node on the walked path
    /// directly to it.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        self.check(x);
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while cur != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Returns the root of the set containing `x` without compressing.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len()`.
    pub fn root(&self, x: usize) -> usize {
        self.check(x);
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Returns `true` if `x` is the root of its set.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len()`.
    pub fn is_root(&self, x: usize) -> bool {
        self.check(x);
        self.parent[x] == x
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// The lower-rank root goes under the higher-rank root. On equal ranks,
    /// `b`'s root goes under `a`'s root and `a`'s root gains one rank.
    /// Returns `true` if two distinct sets were merged, `false` if `a` and
    /// `b` already shared a set.
    ///
    /// # Panics
    ///
    /// Panics if `a >= len()` or `b >= len()`.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.merges += 1;
        true
    }

    /// Returns `true` if `a` and `b` are in the same set.
    ///
    /// # Panics
    ///
    /// Panics if `a >= len()` or `b >= len()`.
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges every pair in order and returns how many joined distinct sets.
    pub fn merge_pairs<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let before = self.merges;
        let mut offered = 0usize;
        for (a, b) in pairs {
            offered += 1;
            self.union(a, b);
        }
        let merged = self.merges - before;
        debug!(offered, merged, n_sets = self.n_sets(), "merged pairs");
        merged
    }

    /// Points every node directly at its root.
    pub fn flatten(&mut self) {
        for x in 0..self.parent.len() {
            self.find(x);
        }
    }

    /// Labels every node with the smallest node index in its set.
    ///
    /// Labels depend only on the partition, not on tree shape, so two
    /// forests hold the same partition exactly when their labels match.
    pub fn canonical_labels(&self) -> Vec<usize> {
        let n = self.len();
        let mut min_of_root = vec![usize::MAX; n];
        for x in 0..n {
            let r = self.root(x);
            if x < min_of_root[r] {
                min_of_root[r] = x;
            }
        }
        (0..n).map(|x| min_of_root[self.root(x)]).collect()
    }
}
