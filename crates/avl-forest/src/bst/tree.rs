use std::cmp::Ordering;

use super::types::BstNode;

/// Unbalanced binary search tree. `insert` sends duplicates to the right
/// subtree, so equal values are allowed and preserved.
///
/// Besides ordered insertion the tree exposes its links for hand-building
/// arbitrary shapes ([`Bst::detached`], [`Bst::set_left`] and friends); the
/// checks in [`validate`](super::validate) are only interesting on trees
/// that ordered insertion could never produce.
pub struct Bst<T> {
    arena: Vec<BstNode<T>>,
    root: Option<u32>,
}

impl<T: Ord> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Bst<T> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn value(&self, n: u32) -> &T {
        &self.arena[n as usize].v
    }

    pub fn left(&self, n: u32) -> Option<u32> {
        self.arena[n as usize].l
    }

    pub fn right(&self, n: u32) -> Option<u32> {
        self.arena[n as usize].r
    }

    /// Ordered insertion: smaller values go left, equal and greater go right.
    pub fn insert(&mut self, value: T) {
        let node = self.push_node(value);
        let Some(mut curr) = self.root else {
            self.root = Some(node);
            return;
        };

        loop {
            let ord = self.arena[node as usize].v.cmp(&self.arena[curr as usize].v);
            let side = match ord {
                Ordering::Less => &mut self.arena[curr as usize].l,
                _ => &mut self.arena[curr as usize].r,
            };
            match *side {
                Some(next) => curr = next,
                None => {
                    *side = Some(node);
                    return;
                }
            }
        }
    }

    /// Pushes a node that is not linked anywhere yet, for hand-built shapes.
    pub fn detached(&mut self, value: T) -> u32 {
        self.push_node(value)
    }

    pub fn set_root(&mut self, node: Option<u32>) {
        self.root = node;
    }

    pub fn set_left(&mut self, parent: u32, child: Option<u32>) {
        self.arena[parent as usize].l = child;
    }

    pub fn set_right(&mut self, parent: u32, child: Option<u32>) {
        self.arena[parent as usize].r = child;
    }

    pub fn pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        fn walk<T: Clone>(arena: &[BstNode<T>], node: Option<u32>, out: &mut Vec<T>) {
            let Some(i) = node else {
                return;
            };
            out.push(arena[i as usize].v.clone());
            walk(arena, arena[i as usize].l, out);
            walk(arena, arena[i as usize].r, out);
        }

        let mut out = Vec::with_capacity(self.arena.len());
        walk(&self.arena, self.root, &mut out);
        out
    }

    pub fn in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        fn walk<T: Clone>(arena: &[BstNode<T>], node: Option<u32>, out: &mut Vec<T>) {
            let Some(i) = node else {
                return;
            };
            walk(arena, arena[i as usize].l, out);
            out.push(arena[i as usize].v.clone());
            walk(arena, arena[i as usize].r, out);
        }

        let mut out = Vec::with_capacity(self.arena.len());
        walk(&self.arena, self.root, &mut out);
        out
    }

    pub fn post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        fn walk<T: Clone>(arena: &[BstNode<T>], node: Option<u32>, out: &mut Vec<T>) {
            let Some(i) = node else {
                return;
            };
            walk(arena, arena[i as usize].l, out);
            walk(arena, arena[i as usize].r, out);
            out.push(arena[i as usize].v.clone());
        }

        let mut out = Vec::with_capacity(self.arena.len());
        walk(&self.arena, self.root, &mut out);
        out
    }

    /// Pre-order with the children mirrored: right subtree first.
    pub fn reverse_pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        fn walk<T: Clone>(arena: &[BstNode<T>], node: Option<u32>, out: &mut Vec<T>) {
            let Some(i) = node else {
                return;
            };
            out.push(arena[i as usize].v.clone());
            walk(arena, arena[i as usize].r, out);
            walk(arena, arena[i as usize].l, out);
        }

        let mut out = Vec::with_capacity(self.arena.len());
        walk(&self.arena, self.root, &mut out);
        out
    }

    /// In-order with the children mirrored: descending for a valid tree.
    pub fn reverse_in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        fn walk<T: Clone>(arena: &[BstNode<T>], node: Option<u32>, out: &mut Vec<T>) {
            let Some(i) = node else {
                return;
            };
            walk(arena, arena[i as usize].r, out);
            out.push(arena[i as usize].v.clone());
            walk(arena, arena[i as usize].l, out);
        }

        let mut out = Vec::with_capacity(self.arena.len());
        walk(&self.arena, self.root, &mut out);
        out
    }

    /// Post-order with the children mirrored: right subtree first.
    pub fn reverse_post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        fn walk<T: Clone>(arena: &[BstNode<T>], node: Option<u32>, out: &mut Vec<T>) {
            let Some(i) = node else {
                return;
            };
            walk(arena, arena[i as usize].r, out);
            walk(arena, arena[i as usize].l, out);
            out.push(arena[i as usize].v.clone());
        }

        let mut out = Vec::with_capacity(self.arena.len());
        walk(&self.arena, self.root, &mut out);
        out
    }

    pub(crate) fn arena(&self) -> &[BstNode<T>] {
        &self.arena
    }

    fn push_node(&mut self, value: T) -> u32 {
        self.arena.push(BstNode::new(value));
        (self.arena.len() - 1) as u32
    }
}
