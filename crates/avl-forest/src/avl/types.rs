/// Node of an [`AvlTree`](super::AvlTree).
///
/// `h` caches the height of the subtree rooted at this node: a leaf is 1, an
/// absent child counts as 0. Rebalancing maintains the field bottom-up after
/// every structural change; it is never recomputed by re-walking a subtree.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub h: i32,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
            h: 1,
        }
    }
}
