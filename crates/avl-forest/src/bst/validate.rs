use super::tree::Bst;
use super::types::BstNode;

/// Strict BST validity via min/max bounds carried down the descent. Equal
/// values anywhere fail, so trees built by [`Bst::insert`] with duplicates
/// are rejected on purpose.
pub fn is_valid_bst<T: Ord>(tree: &Bst<T>) -> bool {
    fn check<'a, T: Ord>(
        arena: &'a [BstNode<T>],
        node: Option<u32>,
        lo: Option<&'a T>,
        hi: Option<&'a T>,
    ) -> bool {
        let Some(i) = node else {
            return true;
        };
        let n = &arena[i as usize];
        if let Some(lo) = lo {
            if n.v <= *lo {
                return false;
            }
        }
        if let Some(hi) = hi {
            if n.v >= *hi {
                return false;
            }
        }
        check(arena, n.l, lo, Some(&n.v)) && check(arena, n.r, Some(&n.v), hi)
    }

    check(tree.arena(), tree.root(), None, None)
}

/// Same verdict as [`is_valid_bst`], obtained by checking that the in-order
/// traversal is strictly increasing.
pub fn is_valid_bst_inorder<T: Ord + Clone>(tree: &Bst<T>) -> bool {
    let values = tree.in_order();
    values.windows(2).all(|w| w[0] < w[1])
}

/// Height-balance check for arbitrary binary trees: every node's subtree
/// heights differ by at most one. Single pass; a subtree reports its height
/// or bails out as soon as any imbalance is seen.
pub fn is_height_balanced<T: Ord>(tree: &Bst<T>) -> bool {
    fn height_if_balanced<T>(arena: &[BstNode<T>], node: Option<u32>) -> Option<i32> {
        let Some(i) = node else {
            return Some(0);
        };
        let l = height_if_balanced(arena, arena[i as usize].l)?;
        let r = height_if_balanced(arena, arena[i as usize].r)?;
        if (l - r).abs() > 1 {
            return None;
        }
        Some(1 + l.max(r))
    }

    height_if_balanced(tree.arena(), tree.root()).is_some()
}
