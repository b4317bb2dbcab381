use std::cmp::Ordering;

use algolab_collections::MinHeap;

use crate::quick::partition;

/// K-th largest element by quickselect over a scratch copy: partition, then
/// recurse into the single side holding the target position.
///
/// `k` is 1-based; `None` when `k` is 0 or exceeds the input length.
///
/// # Examples
///
/// ```
/// use algolab_sorting::kth_largest_select;
///
/// assert_eq!(kth_largest_select(&[3, 2, 1, 5, 6, 4], 2), Some(5));
/// assert_eq!(kth_largest_select(&[1, 2], 3), None);
/// ```
pub fn kth_largest_select<T: Ord + Clone>(input: &[T], k: usize) -> Option<T> {
    if k == 0 || k > input.len() {
        return None;
    }

    let mut arr = input.to_vec();
    let target = arr.len() - k;
    let mut low = 0;
    let mut high = arr.len() - 1;

    loop {
        if low == high {
            return Some(arr[low].clone());
        }
        let p = partition(&mut arr, low, high);
        match p.cmp(&target) {
            Ordering::Equal => return Some(arr[p].clone()),
            Ordering::Less => low = p + 1,
            Ordering::Greater => high = p - 1,
        }
    }
}

/// K-th largest element via a min-heap capped at `k` entries: after one
/// pass the heap holds the k largest values and its minimum is the answer.
///
/// Same contract as [`kth_largest_select`].
///
/// # Examples
///
/// ```
/// use algolab_sorting::kth_largest_heap;
///
/// assert_eq!(kth_largest_heap(&[3, 2, 1, 5, 6, 4], 2), Some(5));
/// assert_eq!(kth_largest_heap::<i32>(&[], 1), None);
/// ```
pub fn kth_largest_heap<T: Ord + Clone>(input: &[T], k: usize) -> Option<T> {
    if k == 0 || k > input.len() {
        return None;
    }

    let mut heap = MinHeap::new();
    for v in input {
        heap.push(v.clone());
        if heap.len() > k {
            heap.pop();
        }
    }

    heap.pop()
}
