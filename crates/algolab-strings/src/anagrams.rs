use indexmap::IndexMap;

/// Groups words that are anagrams of each other.
///
/// The key of a group is the word's sorted character multiset. Groups keep
/// first-occurrence order and words keep their input order within a group.
///
/// ```
/// use algolab_strings::group_anagrams;
///
/// let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
/// assert_eq!(groups, vec![
///     vec!["eat".to_string(), "tea".to_string(), "ate".to_string()],
///     vec!["tan".to_string(), "nat".to_string()],
///     vec!["bat".to_string()],
/// ]);
/// ```
pub fn group_anagrams<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    let mut groups: IndexMap<Vec<char>, Vec<String>> = IndexMap::new();

    for word in words {
        let word = word.as_ref();
        let mut key: Vec<char> = word.chars().collect();
        key.sort_unstable();
        groups.entry(key).or_default().push(word.to_string());
    }

    groups.into_values().collect()
}
