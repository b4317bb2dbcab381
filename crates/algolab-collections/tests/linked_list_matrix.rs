use algolab_collections::{merge_sorted, LinkedList};

#[test]
fn push_and_pop_matrix() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.front(), None);

    list.push_back(1);
    list.push_back(2);
    list.push_front(0);

    assert_eq!(list.len(), 3);
    assert_eq!(list.to_vec(), vec![0, 1, 2]);
    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn push_back_after_drain_matrix() {
    let mut list = LinkedList::new();
    list.push_back(1);
    assert_eq!(list.pop_front(), Some(1));

    // The tail must have been reset with the head.
    list.push_back(2);
    list.push_back(3);
    assert_eq!(list.to_vec(), vec![2, 3]);
}

#[test]
fn iter_borrows_matrix() {
    let list: LinkedList<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
    let collected: Vec<&String> = list.iter().collect();
    assert_eq!(collected, ["a", "b", "c"]);
    assert_eq!(list.len(), 3);
}

#[test]
fn merge_basic_matrix() {
    let a: LinkedList<i32> = [1, 3, 5].into_iter().collect();
    let b: LinkedList<i32> = [2, 4, 6].into_iter().collect();
    assert_eq!(merge_sorted(a, b).to_vec(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn merge_empty_sides_matrix() {
    let empty: LinkedList<i32> = LinkedList::new();
    let b: LinkedList<i32> = [1, 2].into_iter().collect();
    assert_eq!(merge_sorted(empty, b).to_vec(), vec![1, 2]);

    let a: LinkedList<i32> = [1, 2].into_iter().collect();
    let empty: LinkedList<i32> = LinkedList::new();
    assert_eq!(merge_sorted(a, empty).to_vec(), vec![1, 2]);

    let both: LinkedList<i32> = LinkedList::new();
    assert_eq!(merge_sorted(both, LinkedList::new()).to_vec(), Vec::<i32>::new());
}

#[test]
fn merge_interleaved_matrix() {
    let a: LinkedList<i32> = [1, 2, 7, 9].into_iter().collect();
    let b: LinkedList<i32> = [3, 4, 5, 6, 8].into_iter().collect();
    assert_eq!(
        merge_sorted(a, b).to_vec(),
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
    );
}

#[test]
fn merge_one_side_exhausts_first_matrix() {
    let a: LinkedList<i32> = [1].into_iter().collect();
    let b: LinkedList<i32> = [2, 3, 4, 5].into_iter().collect();
    assert_eq!(merge_sorted(a, b).to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn merge_is_stable_on_ties_matrix() {
    // Ties come from the left list first.
    let a: LinkedList<(i32, &str)> = [(1, "a1"), (2, "a2")].into_iter().collect();
    let b: LinkedList<(i32, &str)> = [(1, "b1"), (2, "b2")].into_iter().collect();
    let merged = merge_sorted(a, b).to_vec();
    assert_eq!(merged, vec![(1, "a1"), (1, "b1"), (2, "a2"), (2, "b2")]);
}

#[test]
fn merge_with_duplicates_matrix() {
    let a: LinkedList<i32> = [1, 1, 2].into_iter().collect();
    let b: LinkedList<i32> = [1, 2, 2].into_iter().collect();
    assert_eq!(merge_sorted(a, b).to_vec(), vec![1, 1, 1, 2, 2, 2]);
}
