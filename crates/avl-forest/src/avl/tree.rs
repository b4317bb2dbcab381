use std::cmp::Ordering;
use std::fmt::Debug;
use std::mem;

use super::types::AvlNode;
use super::util::{
    assert_avl_tree, balance_factor, height, print, rotate_left, rotate_right, update_height,
};

/// Ordered set of unique keys kept balanced by AVL rotations.
///
/// Insert, delete and search are O(log n) in the number of live keys.
/// Duplicate inserts and missing-key deletes are no-ops, not errors, and no
/// operation panics for any key value.
///
/// The tree is single-threaded; rotations rewire shared links freely, so
/// concurrent callers must serialize whole operations behind one lock.
///
/// ```
/// use avl_forest::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for k in [30, 20, 10] {
///     tree.insert(k);
/// }
/// assert_eq!(tree.inorder(), vec![10, 20, 30]);
/// assert!(tree.search(&20));
/// assert!(tree.delete(&20));
/// assert!(!tree.search(&20));
/// ```
pub struct AvlTree<K> {
    arena: Vec<AvlNode<K>>,
    free: Vec<u32>,
    root: Option<u32>,
    len: usize,
}

impl<K: Ord> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> AvlTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree; 0 when empty.
    pub fn height(&self) -> i32 {
        height(&self.arena, self.root)
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn key(&self, n: u32) -> &K {
        &self.arena[n as usize].k
    }

    pub fn left(&self, n: u32) -> Option<u32> {
        self.arena[n as usize].l
    }

    pub fn right(&self, n: u32) -> Option<u32> {
        self.arena[n as usize].r
    }

    /// Cached height of the subtree at `n`.
    pub fn node_height(&self, n: u32) -> i32 {
        self.arena[n as usize].h
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Adds `key` if absent. Returns whether the set changed.
    pub fn insert(&mut self, key: K) -> bool {
        let (root, added) = self.insert_at(self.root, key);
        self.root = Some(root);
        if added.is_some() {
            self.len += 1;
        }
        added.is_some()
    }

    /// Removes `key` if present. Returns whether the set changed.
    pub fn delete(&mut self, key: &K) -> bool {
        let (root, removed) = self.delete_at(self.root, key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Membership test by plain BST descent.
    pub fn search(&self, key: &K) -> bool {
        let mut curr = self.root;
        while let Some(i) = curr {
            match key.cmp(&self.arena[i as usize].k) {
                Ordering::Equal => return true,
                Ordering::Less => curr = self.arena[i as usize].l,
                Ordering::Greater => curr = self.arena[i as usize].r,
            }
        }
        false
    }

    /// Keys in ascending order, collected fresh on every call.
    pub fn inorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        fn walk<K: Clone>(arena: &[AvlNode<K>], node: Option<u32>, out: &mut Vec<K>) {
            let Some(i) = node else {
                return;
            };
            walk(arena, arena[i as usize].l, out);
            out.push(arena[i as usize].k.clone());
            walk(arena, arena[i as usize].r, out);
        }

        let mut out = Vec::with_capacity(self.len);
        walk(&self.arena, self.root, &mut out);
        out
    }

    /// Checks the AVL bound at every node from the cached heights.
    /// A maintained tree always passes; this is a diagnostic, not a repair.
    pub fn is_balanced(&self) -> bool {
        fn check<K>(arena: &[AvlNode<K>], node: Option<u32>) -> bool {
            let Some(i) = node else {
                return true;
            };
            (-1..=1).contains(&balance_factor(arena, i))
                && check(arena, arena[i as usize].l)
                && check(arena, arena[i as usize].r)
        }

        check(&self.arena, self.root)
    }

    /// Full structural validation: key order, cached heights, the AVL bound
    /// and the arena bookkeeping.
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(&self.arena, self.root)?;

        fn count<K>(arena: &[AvlNode<K>], node: Option<u32>) -> usize {
            let Some(i) = node else {
                return 0;
            };
            1 + count(arena, arena[i as usize].l) + count(arena, arena[i as usize].r)
        }

        let live = count(&self.arena, self.root);
        if live != self.len {
            return Err(format!("{} reachable nodes, len says {}", live, self.len));
        }
        if self.arena.len() != self.len + self.free.len() {
            return Err(format!(
                "arena holds {} slots for {} live and {} free",
                self.arena.len(),
                self.len,
                self.free.len()
            ));
        }
        Ok(())
    }

    /// Debug printer for the whole tree.
    pub fn print(&self) -> String
    where
        K: Debug,
    {
        print(&self.arena, self.root, "")
    }

    fn alloc(&mut self, k: K) -> u32 {
        match self.free.pop() {
            Some(i) => {
                self.arena[i as usize] = AvlNode::new(k);
                i
            }
            None => {
                self.arena.push(AvlNode::new(k));
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// Marks `n` reusable. The slot keeps its key until it is overwritten;
    /// it is unreachable once the parent link is rewired.
    fn release(&mut self, n: u32) {
        self.free.push(n);
    }

    /// Recursive insert descent. Returns the new subtree root and the index
    /// of the freshly created leaf, `None` when `key` was already present.
    fn insert_at(&mut self, node: Option<u32>, key: K) -> (u32, Option<u32>) {
        let Some(i) = node else {
            let n = self.alloc(key);
            return (n, Some(n));
        };

        match key.cmp(&self.arena[i as usize].k) {
            Ordering::Equal => (i, None),
            Ordering::Less => {
                let l = self.arena[i as usize].l;
                let (nl, added) = self.insert_at(l, key);
                self.arena[i as usize].l = Some(nl);
                let Some(added) = added else {
                    return (i, None);
                };
                (self.rebalance_inserted(i, added), Some(added))
            }
            Ordering::Greater => {
                let r = self.arena[i as usize].r;
                let (nr, added) = self.insert_at(r, key);
                self.arena[i as usize].r = Some(nr);
                let Some(added) = added else {
                    return (i, None);
                };
                (self.rebalance_inserted(i, added), Some(added))
            }
        }
    }

    /// Insert-side rebalancing: the imbalance shape is decided by comparing
    /// the freshly inserted key against the taller child's key.
    fn rebalance_inserted(&mut self, n: u32, added: u32) -> u32 {
        update_height(&mut self.arena, n);
        let balance = balance_factor(&self.arena, n);

        if balance > 1 {
            let l = self.arena[n as usize].l.expect("left-heavy node has a left child");
            if self.arena[added as usize].k < self.arena[l as usize].k {
                return rotate_right(&mut self.arena, n);
            }
            let nl = rotate_left(&mut self.arena, l);
            self.arena[n as usize].l = Some(nl);
            return rotate_right(&mut self.arena, n);
        }
        if balance < -1 {
            let r = self.arena[n as usize].r.expect("right-heavy node has a right child");
            if self.arena[added as usize].k > self.arena[r as usize].k {
                return rotate_left(&mut self.arena, n);
            }
            let nr = rotate_right(&mut self.arena, r);
            self.arena[n as usize].r = Some(nr);
            return rotate_left(&mut self.arena, n);
        }

        n
    }

    /// Recursive delete descent. Returns the new subtree root and whether a
    /// node was removed.
    fn delete_at(&mut self, node: Option<u32>, key: &K) -> (Option<u32>, bool) {
        let Some(i) = node else {
            return (None, false);
        };

        match key.cmp(&self.arena[i as usize].k) {
            Ordering::Less => {
                let l = self.arena[i as usize].l;
                let (nl, removed) = self.delete_at(l, key);
                self.arena[i as usize].l = nl;
                if !removed {
                    return (Some(i), false);
                }
                (Some(self.rebalance_removed(i)), true)
            }
            Ordering::Greater => {
                let r = self.arena[i as usize].r;
                let (nr, removed) = self.delete_at(r, key);
                self.arena[i as usize].r = nr;
                if !removed {
                    return (Some(i), false);
                }
                (Some(self.rebalance_removed(i)), true)
            }
            Ordering::Equal => {
                let l = self.arena[i as usize].l;
                let r = self.arena[i as usize].r;
                let (Some(_), Some(r)) = (l, r) else {
                    // At most one child: splice it into this node's place.
                    self.release(i);
                    return (l.or(r), true);
                };

                // Two children: pull out the in-order successor (the minimum
                // of the right subtree), hand its key to this node, and
                // rebalance the shrunken right spine on the way back.
                let (nr, succ) = self.remove_min(r);
                self.arena[i as usize].r = nr;
                swap_keys(&mut self.arena, i, succ);
                self.release(succ);
                (Some(self.rebalance_removed(i)), true)
            }
        }
    }

    /// Unlinks the leftmost node of the subtree at `n`, rebalancing the walk
    /// path bottom-up. Returns the new subtree root and the unlinked node,
    /// whose slot still holds its key.
    fn remove_min(&mut self, n: u32) -> (Option<u32>, u32) {
        let Some(l) = self.arena[n as usize].l else {
            return (self.arena[n as usize].r, n);
        };
        let (nl, min) = self.remove_min(l);
        self.arena[n as usize].l = nl;
        (Some(self.rebalance_removed(n)), min)
    }

    /// Delete-side rebalancing: with no single inserted key to compare
    /// against, the imbalance shape is decided by the sign of the taller
    /// child's own balance factor. This path is intentionally separate from
    /// [`Self::rebalance_inserted`]; the two are not equivalent when a
    /// deletion cascades through several rotations.
    fn rebalance_removed(&mut self, n: u32) -> u32 {
        update_height(&mut self.arena, n);
        let balance = balance_factor(&self.arena, n);

        if balance > 1 {
            let l = self.arena[n as usize].l.expect("left-heavy node has a left child");
            if balance_factor(&self.arena, l) >= 0 {
                return rotate_right(&mut self.arena, n);
            }
            let nl = rotate_left(&mut self.arena, l);
            self.arena[n as usize].l = Some(nl);
            return rotate_right(&mut self.arena, n);
        }
        if balance < -1 {
            let r = self.arena[n as usize].r.expect("right-heavy node has a right child");
            if balance_factor(&self.arena, r) <= 0 {
                return rotate_left(&mut self.arena, n);
            }
            let nr = rotate_right(&mut self.arena, r);
            self.arena[n as usize].r = Some(nr);
            return rotate_left(&mut self.arena, n);
        }

        n
    }
}

fn swap_keys<K>(arena: &mut [AvlNode<K>], a: u32, b: u32) {
    let (lo, hi) = if a < b {
        (a as usize, b as usize)
    } else {
        (b as usize, a as usize)
    };
    let (left, right) = arena.split_at_mut(hi);
    mem::swap(&mut left[lo].k, &mut right[0].k);
}
