//! Disjoint-set (union-find) forest over a sparse universe of integer keys.
//!
//! Unlike the classic array-backed formulation, the universe is not sized
//! up front: any `i64` is a valid element, and an element that has never
//! been merged with another is implicitly a singleton group. The parent
//! and rank tables are sparse maps that only hold entries for elements
//! the structure has actually rewritten, so memory scales with the number
//! of elements touched by merges rather than with the key range.
//!
//! # Algorithm
//!
//! Uses **path compression** during [`UnionFind::find`] and **union by
//! rank** during [`UnionFind::join`] to achieve amortized O(α(n)) per
//! operation, where α is the inverse Ackermann function.
//!
//! For all practical input sizes, α(n) ≤ 4, so operations are
//! effectively O(1).
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Sedgewick & Wayne, *Algorithms*, 4th ed., §1.5 (weighted quick-union)

use std::collections::HashMap;

/// Sparse disjoint-set forest with path compression and union by rank.
///
/// Partitions `i64` keys into disjoint groups. Keys come into existence
/// lazily: the first time a key is mentioned it is a singleton group of
/// its own, so there is no insert step and no operation can fail.
///
/// Every operation takes `&mut self`. Lookups rewrite parent pointers
/// while compressing paths, [`connected`](UnionFind::connected)
/// included, so sharing a `UnionFind` across threads requires an
/// external lock.
///
/// # Examples
/// ```
/// use u_disjoint::UnionFind;
///
/// let mut uf = UnionFind::new();
///
/// uf.join(1, 2);
/// uf.join(3, 4);
/// assert!(uf.connected(1, 2));
/// assert!(!uf.connected(1, 4));
///
/// uf.join(2, 3);
/// assert!(uf.connected(1, 4)); // transitivity
///
/// // Never-mentioned keys are singletons.
/// assert_eq!(uf.find(5), 5);
/// assert!(!uf.connected(1, 5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    /// Parent pointers. A key with no entry is the root of its group.
    parent: HashMap<i64, i64>,
    /// Height estimate per root; absent means 0. Only consulted when two
    /// roots merge, and only bumped when their ranks tie. A rank of `r`
    /// implies a tree of at least 2^r elements, so `u8` is wide enough
    /// for any `i64` universe.
    rank: HashMap<i64, u8>,
}

impl UnionFind {
    /// Creates an empty structure: every key is its own singleton group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the representative (root) of the group containing `p`.
    ///
    /// Applies **path compression**: once the root is located, a second
    /// pass re-points every key on the original chain directly at it,
    /// so the next lookup of any of those keys is a single hop.
    ///
    /// A key that was never joined has no parent entry and is returned
    /// unchanged; nothing is recorded for it.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Examples
    /// ```
    /// use u_disjoint::UnionFind;
    ///
    /// let mut uf = UnionFind::new();
    /// assert_eq!(uf.find(7), 7); // unseen key is its own root
    ///
    /// uf.join(7, 8);
    /// assert_eq!(uf.find(7), uf.find(8));
    /// ```
    pub fn find(&mut self, p: i64) -> i64 {
        let mut root = p;
        while let Some(&next) = self.parent.get(&root) {
            root = next;
        }

        // Second pass: re-point the chain at the root. `insert` hands
        // back the previous parent, which is the next key on the chain.
        let mut cur = p;
        while cur != root {
            cur = self.parent.insert(cur, root).unwrap_or(root);
        }

        root
    }

    /// Merges the groups containing `p` and `q`.
    ///
    /// Uses **union by rank**: the root with strictly smaller rank is
    /// attached under the root with larger rank, bounding tree height
    /// growth. When the ranks tie, either root may win; the winner's
    /// rank increases by exactly 1, and that is the only way a rank
    /// ever changes.
    ///
    /// Joining two keys already in the same group (including `p == q`)
    /// leaves the structure untouched.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Examples
    /// ```
    /// use u_disjoint::UnionFind;
    ///
    /// let mut uf = UnionFind::new();
    /// uf.join(-1, 1);
    /// assert!(uf.connected(1, -1));
    /// ```
    pub fn join(&mut self, p: i64, q: i64) {
        let pr = self.find(p);
        let qr = self.find(q);

        if pr == qr {
            return;
        }

        let pr_rank = self.rank_of(pr);
        let qr_rank = self.rank_of(qr);

        match pr_rank.cmp(&qr_rank) {
            std::cmp::Ordering::Less => {
                self.parent.insert(pr, qr);
            }
            std::cmp::Ordering::Greater => {
                self.parent.insert(qr, pr);
            }
            std::cmp::Ordering::Equal => {
                self.parent.insert(qr, pr);
                self.rank.insert(pr, pr_rank + 1);
            }
        }
    }

    /// Returns `true` if `p` and `q` are in the same group.
    ///
    /// A query in effect but not in mechanism: the embedded
    /// [`find`](UnionFind::find) calls still compress paths, hence
    /// `&mut self`.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn connected(&mut self, p: i64, q: i64) -> bool {
        self.find(p) == self.find(q)
    }

    /// Rank of a root, defaulting to 0 for keys never ranked.
    fn rank_of(&self, root: i64) -> u8 {
        self.rank.get(&root).copied().unwrap_or(0)
    }
}
