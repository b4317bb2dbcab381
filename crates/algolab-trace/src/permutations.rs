use std::fmt::Debug;

use crate::tracer::Tracer;

/// All orderings of `items`, built by choosing each remaining element in
/// turn. For sorted input the output is lexicographic; n! entries.
///
/// ```
/// use algolab_trace::permutations;
///
/// assert_eq!(
///     permutations(&[1, 2, 3]),
///     vec![
///         vec![1, 2, 3],
///         vec![1, 3, 2],
///         vec![2, 1, 3],
///         vec![2, 3, 1],
///         vec![3, 1, 2],
///         vec![3, 2, 1],
///     ]
/// );
/// ```
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut results = Vec::new();
    let mut current = Vec::with_capacity(items.len());
    walk(&mut current, items.to_vec(), &mut results);
    results
}

fn walk<T: Clone>(current: &mut Vec<T>, available: Vec<T>, results: &mut Vec<Vec<T>>) {
    if available.is_empty() {
        results.push(current.clone());
        return;
    }

    for i in 0..available.len() {
        let mut rest = available.clone();
        let picked = rest.remove(i);
        current.push(picked);
        walk(current, rest, results);
        current.pop();
    }
}

/// Same enumeration, reporting every recursive call and return to `tracer`.
///
/// ```
/// use algolab_trace::{permutations_traced, Tracer};
///
/// let mut tracer = Tracer::new();
/// let perms = permutations_traced(&[1, 2], &mut tracer);
/// assert_eq!(perms, vec![vec![1, 2], vec![2, 1]]);
/// assert_eq!(tracer.lines()[0], "permute([], [1, 2])");
/// assert_eq!(tracer.lines()[1], "|  permute([1], [2])");
/// ```
pub fn permutations_traced<T: Clone + Debug>(items: &[T], tracer: &mut Tracer) -> Vec<Vec<T>> {
    let mut results = Vec::new();
    let mut current = Vec::with_capacity(items.len());
    walk_traced(&mut current, items.to_vec(), &mut results, tracer);
    results
}

fn walk_traced<T: Clone + Debug>(
    current: &mut Vec<T>,
    available: Vec<T>,
    results: &mut Vec<Vec<T>>,
    tracer: &mut Tracer,
) {
    tracer.call("permute", &format!("{current:?}, {available:?}"));

    if available.is_empty() {
        results.push(current.clone());
    } else {
        for i in 0..available.len() {
            let mut rest = available.clone();
            let picked = rest.remove(i);
            current.push(picked);
            walk_traced(current, rest, results, tracer);
            current.pop();
        }
    }

    tracer.ret("()");
}
