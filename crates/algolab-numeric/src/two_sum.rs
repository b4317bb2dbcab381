use std::collections::HashMap;

/// Indices of two distinct elements of `values` summing to `target`, in
/// ascending order, or `None` when no such pair exists.
///
/// One pass with a value-to-index map: each element looks up its complement
/// among the elements already seen, so the first matching pair wins.
///
/// # Examples
///
/// ```
/// use algolab_numeric::two_sum;
///
/// assert_eq!(two_sum(&[1, 3, 4, 10], 7), Some((1, 2)));
/// assert_eq!(two_sum(&[5, 5, 1, 4], 10), Some((0, 1)));
/// assert_eq!(two_sum(&[1, 2], 10), None);
/// ```
pub fn two_sum(values: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();

    for (i, &v) in values.iter().enumerate() {
        if let Some(&j) = seen.get(&(target - v)) {
            return Some((j, i));
        }
        seen.insert(v, i);
    }

    None
}
