//! Partitioning of aligned key arrays.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::level::{FacetKey, KeyArray};

/// One group produced by [`groupby`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Level combination shared by every row in the group.
    pub key: FacetKey,
    /// Row indices, ascending.
    pub indices: Vec<usize>,
}

/// Partition rows by the unique tuples formed across `keys`.
///
/// Groups are returned in ascending key order (the first array is the most
/// significant). Every row appears in exactly one group, and for each group
/// `keys[d][i] == key[d]` holds for all of its indices.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the arrays differ in length.
///
/// # Example
///
/// ```
/// use trueno_facet::group::groupby;
/// use trueno_facet::level::KeyArray;
///
/// let k = KeyArray::from(vec![1, 1, 3, 1, 2]);
/// let groups = groupby(&[&k]).unwrap();
/// assert_eq!(groups.len(), 3);
/// assert_eq!(groups[0].indices, vec![0, 1, 3]);
/// ```
pub fn groupby(keys: &[&KeyArray]) -> Result<Vec<Group>> {
    let Some(first) = keys.first() else {
        return Ok(Vec::new());
    };
    let n = first.len();
    for (d, key) in keys.iter().enumerate().skip(1) {
        if key.len() != n {
            return Err(Error::LengthMismatch {
                array: format!("keys[{d}]"),
                expected: n,
                found: key.len(),
            });
        }
    }

    let mut groups: BTreeMap<FacetKey, Vec<usize>> = BTreeMap::new();
    for row in 0..n {
        let key = FacetKey::new(keys.iter().map(|k| k.as_slice()[row].clone()).collect());
        groups.entry(key).or_default().push(row);
    }

    Ok(groups
        .into_iter()
        .map(|(key, indices)| Group { key, indices })
        .collect())
}
