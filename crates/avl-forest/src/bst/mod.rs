//! Plain binary search tree, plus structural checks that also apply to
//! hand-built (possibly invalid) trees.

pub mod tree;
pub mod types;
pub mod validate;

pub use tree::Bst;
pub use types::BstNode;
pub use validate::{is_height_balanced, is_valid_bst, is_valid_bst_inorder};
