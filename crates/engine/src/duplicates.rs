// Duplicate detection: generic group-by over row projections.

use std::collections::HashMap;
use std::hash::Hash;

/// Return the indices of every item whose key occurs more than once.
///
/// All occurrences are reported, including the first. Indices come back in
/// input order.
pub fn duplicate_indices<K, I>(keys: I) -> Vec<usize>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let keys: Vec<K> = keys.into_iter().collect();

    let mut counts: HashMap<&K, usize> = HashMap::with_capacity(keys.len());
    for key in &keys {
        *counts.entry(key).or_insert(0) += 1;
    }

    keys.iter()
        .enumerate()
        .filter(|(_, key)| counts.get(key).copied().unwrap_or(0) > 1)
        .map(|(idx, _)| idx)
        .collect()
}
