//! Self-balancing AVL tree over an index arena.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::AvlTree;
pub use types::AvlNode;
pub use util::{assert_avl_tree, balance_factor, height, print, rotate_left, rotate_right};
