//! Weighted quick-union with path compression.
//!
//! Elements are plain `usize` indices into two parallel vectors: `parent` holds
//! the forest links and `size` the number of elements under each root. The
//! smaller tree is always linked under the larger, and `find` halves the path
//! it walks, so a sequence of operations runs in near-constant amortized time.
//!
//! The structure is fixed-size: it never grows, and sets are only ever merged.

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create `n` singleton sets `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Root of the set containing `p`.
    ///
    /// Panics if `p >= len()`.
    pub fn find(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            // Path halving: point every other node at its grandparent.
            let grandparent = self.parent[self.parent[p]];
            self.parent[p] = grandparent;
            p = grandparent;
        }
        p
    }

    /// Whether `p` and `q` are in the same set.
    pub fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merge the sets containing `p` and `q`.
    pub fn union(&mut self, p: usize, q: usize) {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return;
        }

        let (small, large) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
    }

    /// Number of elements in the set containing `p`.
    pub fn set_size(&mut self, p: usize) -> usize {
        let root = self.find(p);
        self.size[root]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_all_singletons() {
        let mut uf = UnionFind::new(6);
        assert_eq!(uf.len(), 6);
        assert_eq!(uf.count(), 6);
        for i in 0..6 {
            assert_eq!(uf.find(i), i);
            assert_eq!(uf.set_size(i), 1);
        }
    }

    #[test]
    fn test_union_merges_once() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        assert_eq!(uf.count(), 3);
        assert!(uf.connected(0, 1));

        // Already connected: count must not change
        uf.union(1, 0);
        uf.union(0, 1);
        assert_eq!(uf.count(), 3);
    }

    #[test]
    fn test_connectivity_is_transitive() {
        let mut uf = UnionFind::new(10);
        uf.union(1, 2);
        uf.union(3, 4);
        uf.union(2, 3);
        assert!(uf.connected(1, 4));
        assert!(!uf.connected(1, 5));
        assert_eq!(uf.set_size(4), 4);
        assert_eq!(uf.count(), 7);
    }

    #[test]
    fn test_smaller_tree_goes_under_larger() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(0, 2);
        let big_root = uf.find(0);
        // Singleton 4 joins the 3-element set; the root must stay put
        uf.union(4, 0);
        assert_eq!(uf.find(4), big_root);
        assert_eq!(uf.find(0), big_root);
    }

    #[test]
    fn test_long_chain_stays_consistent() {
        let n = 1000;
        let mut uf = UnionFind::new(n);
        for i in 1..n {
            uf.union(i - 1, i);
        }
        assert_eq!(uf.count(), 1);
        let root = uf.find(0);
        for i in 0..n {
            assert_eq!(uf.find(i), root);
        }
        assert_eq!(uf.set_size(n / 2), n);
    }

    #[test]
    fn test_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.count(), 0);
    }
}
