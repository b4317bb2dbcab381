use std::fmt::Debug;

use super::types::AvlNode;

/// Cached height of the subtree at `node`; 0 for an absent subtree.
#[inline]
pub fn height<K>(arena: &[AvlNode<K>], node: Option<u32>) -> i32 {
    node.map_or(0, |i| arena[i as usize].h)
}

/// Recomputes the cached height of `n` from its children's cached heights.
#[inline]
pub fn update_height<K>(arena: &mut [AvlNode<K>], n: u32) {
    let l = height(arena, arena[n as usize].l);
    let r = height(arena, arena[n as usize].r);
    arena[n as usize].h = 1 + l.max(r);
}

/// `height(left) - height(right)` at `n`, read from the cached heights.
#[inline]
pub fn balance_factor<K>(arena: &[AvlNode<K>], n: u32) -> i32 {
    height(arena, arena[n as usize].l) - height(arena, arena[n as usize].r)
}

/// Right rotation at `z`: its left child becomes the subtree root, the
/// child's former right subtree moves under `z`. Heights are fixed
/// children-first. Returns the new subtree root.
pub fn rotate_right<K>(arena: &mut [AvlNode<K>], z: u32) -> u32 {
    let y = arena[z as usize].l.expect("right rotation needs a left child");
    let t = arena[y as usize].r;

    arena[y as usize].r = Some(z);
    arena[z as usize].l = t;

    update_height(arena, z);
    update_height(arena, y);

    y
}

/// Left rotation at `z`; mirror image of [`rotate_right`].
pub fn rotate_left<K>(arena: &mut [AvlNode<K>], z: u32) -> u32 {
    let y = arena[z as usize].r.expect("left rotation needs a right child");
    let t = arena[y as usize].l;

    arena[y as usize].l = Some(z);
    arena[z as usize].r = t;

    update_height(arena, z);
    update_height(arena, y);

    y
}

/// Validates the whole subtree at `root`: strict key ordering, cached
/// heights matching recomputed ones, and the AVL bound at every node.
///
/// A maintained tree always passes; this is a test oracle, not a repair.
pub fn assert_avl_tree<K: Ord>(arena: &[AvlNode<K>], root: Option<u32>) -> Result<(), String> {
    fn check<'a, K: Ord>(
        arena: &'a [AvlNode<K>],
        node: Option<u32>,
        lo: Option<&'a K>,
        hi: Option<&'a K>,
    ) -> Result<i32, String> {
        let Some(i) = node else {
            return Ok(0);
        };
        let n = &arena[i as usize];

        if let Some(lo) = lo {
            if n.k <= *lo {
                return Err(format!("node {i} violates key order on the left bound"));
            }
        }
        if let Some(hi) = hi {
            if n.k >= *hi {
                return Err(format!("node {i} violates key order on the right bound"));
            }
        }

        let lh = check(arena, n.l, lo, Some(&n.k))?;
        let rh = check(arena, n.r, Some(&n.k), hi)?;

        let computed = 1 + lh.max(rh);
        if n.h != computed {
            return Err(format!("node {i} caches height {}, computed {computed}", n.h));
        }
        if !(-1..=1).contains(&(lh - rh)) {
            return Err(format!("node {i} is out of balance: {}", lh - rh));
        }

        Ok(computed)
    }

    check(arena, root, None, None).map(|_| ())
}

/// Debug printer for AVL subtrees.
pub fn print<K: Debug>(arena: &[AvlNode<K>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.h, n.k
            )
        }
    }
}
