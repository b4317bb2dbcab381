use algolab_collections::{is_min_heap, MinHeap};

#[test]
fn push_pop_ordering_matrix() {
    let mut heap = MinHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.peek(), None);

    for v in [5, 1, 4, 2, 3] {
        heap.push(v);
        assert!(is_min_heap(heap.as_slice()));
    }

    assert_eq!(heap.len(), 5);
    assert_eq!(heap.peek(), Some(&1));

    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(drained, vec![1, 2, 3, 4, 5]);
    assert!(heap.is_empty());
}

#[test]
fn both_constructions_agree_matrix() {
    let input = vec![9, 4, 7, 1, -2, 6, 5, 2, 8, 3, 0];

    let mut incremental = MinHeap::from_insertions(input.clone());
    let mut bottom_up = MinHeap::heapify(input.clone());

    assert!(is_min_heap(incremental.as_slice()));
    assert!(is_min_heap(bottom_up.as_slice()));

    // The array layouts may differ; the drain order must not.
    let a: Vec<i32> = std::iter::from_fn(|| incremental.pop()).collect();
    let b: Vec<i32> = std::iter::from_fn(|| bottom_up.pop()).collect();
    assert_eq!(a, b);

    let mut sorted = input;
    sorted.sort();
    assert_eq!(a, sorted);
}

#[test]
fn heapify_sorted_and_reversed_matrix() {
    let ascending = MinHeap::heapify((1..=50).collect());
    assert!(is_min_heap(ascending.as_slice()));

    let descending = MinHeap::heapify((1..=50).rev().collect());
    assert!(is_min_heap(descending.as_slice()));
    assert_eq!(descending.peek(), Some(&1));
}

#[test]
fn duplicates_matrix() {
    let mut heap = MinHeap::heapify(vec![2, 2, 1, 1, 3, 3]);
    let drained: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(drained, vec![1, 1, 2, 2, 3, 3]);
}

#[test]
fn single_and_empty_matrix() {
    let empty = MinHeap::<i32>::heapify(Vec::new());
    assert!(empty.is_empty());
    assert!(is_min_heap(empty.as_slice()));

    let mut single = MinHeap::heapify(vec![42]);
    assert_eq!(single.pop(), Some(42));
    assert_eq!(single.pop(), None);
}

#[test]
fn heap_property_detects_violations_matrix() {
    assert!(is_min_heap(&[1, 2, 3, 4, 5]));
    assert!(!is_min_heap(&[2, 1]));
    assert!(!is_min_heap(&[1, 5, 2, 4, 3, 6, 1]));
    assert!(is_min_heap::<i32>(&[]));
}
