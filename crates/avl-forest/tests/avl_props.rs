//! Property tests for the tree invariants under arbitrary operation mixes.

use std::collections::BTreeSet;

use avl_forest::AvlTree;
use proptest::prelude::*;

proptest! {
    #[test]
    fn invariants_hold_after_every_op(ops in prop::collection::vec((any::<bool>(), 0u8..64), 0..200)) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();

        for (is_insert, key) in ops {
            if is_insert {
                prop_assert_eq!(tree.insert(key), model.insert(key));
            } else {
                prop_assert_eq!(tree.delete(&key), model.remove(&key));
            }

            prop_assert!(tree.assert_valid().is_ok());
            prop_assert!(tree.is_balanced());

            let inorder = tree.inorder();
            prop_assert!(inorder.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(inorder.len(), model.len());
        }

        prop_assert_eq!(tree.inorder(), model.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn double_insert_equals_single(keys in prop::collection::vec(0u16..512, 0..64)) {
        let mut once = AvlTree::new();
        let mut twice = AvlTree::new();

        for &k in &keys {
            once.insert(k);
            twice.insert(k);
            twice.insert(k);
        }

        prop_assert_eq!(once.inorder(), twice.inorder());
        prop_assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn membership_matches_live_set(
        inserts in prop::collection::vec(0u16..128, 0..64),
        deletes in prop::collection::vec(0u16..128, 0..64),
    ) {
        let mut tree = AvlTree::new();
        for &k in &inserts {
            tree.insert(k);
        }
        for &k in &deletes {
            tree.delete(&k);
        }

        let live: BTreeSet<u16> = inserts.iter().copied()
            .filter(|k| !deletes.contains(k))
            .collect();
        for k in 0u16..128 {
            prop_assert_eq!(tree.search(&k), live.contains(&k));
        }
    }
}
