//! Union-find (disjoint set union) over a fixed range of element ids.
//!
//! The set tracks a partition of `0..len` into disjoint groups. Lookups use
//! path compression and merges use union-by-rank, which together bound the
//! amortised cost of every operation by the inverse Ackermann function. This
//! keeps Kruskal's algorithm dominated by its edge sort rather than by cycle
//! checks.

use crate::error::DisjointSetError;

/// A partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use waygraph_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(sets.union(2, 3)?);
/// assert!(!sets.union(1, 0)?);
/// assert!(sets.connected(0, 1)?);
/// assert!(!sets.connected(1, 2)?);
/// assert_eq!(sets.set_count(), 2);
/// # Ok::<(), waygraph_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    set_count: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            set_count: len,
        }
    }

    /// Returns the number of elements tracked by the set.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the set tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets currently in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.set_count }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at
    /// the root, flattening future lookups.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when `element >= len`.
    pub fn find(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.check(element)?;
        Ok(self.root_of(element))
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when either element is
    /// out of range.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root of lower rank is attached under the root of higher rank. On a
    /// tie the root of `right` goes under the root of `left`, whose rank grows
    /// by one. Returns `false` when both elements were already joined, which
    /// is how spanning-tree construction detects a cycle.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOutOfRange`] when either element is
    /// out of range.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.link(left, right))
    }

    /// Merges two elements already known to be in range.
    pub(crate) fn link(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.root_of(left);
        let right_root = self.root_of(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            self.parent[left_root] = right_root;
        } else {
            self.parent[right_root] = left_root;
            if left_rank == right_rank {
                self.rank[left_root] = left_rank.saturating_add(1);
            }
        }

        self.set_count = self.set_count.saturating_sub(1);
        true
    }

    fn root_of(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    fn check(&self, element: usize) -> Result<(), DisjointSetError> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::IndexOutOfRange {
                element,
                len: self.parent.len(),
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, element: usize) -> usize {
        self.parent[element]
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, element: usize) -> u8 {
        self.rank[element]
    }
}
