//! Helpers over ordered maps used by the graph containers.
//!
//! The mapped graph forms store nodes and adjacency in [`BTreeMap`]s; the
//! operations here cover the map manipulations the containers need beyond
//! the std surface, most notably the index-compacting delete that keeps
//! integer keys contiguous.

use std::collections::BTreeMap;

use thiserror::Error;

/// Error returned by the strict map helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    /// Positional access beyond the current size of the map.
    #[error("position is out of range")]
    OutOfRange,
    /// Strict access or removal of a key that is not present.
    #[error("missing key")]
    MissingKey,
}

/// Returns the value stored at `position` in ascending key order.
///
/// # Errors
///
/// Fails with [`MapError::OutOfRange`] when `position` is past the end.
///
/// # Example
///
/// ```
/// # use std::collections::BTreeMap;
/// # use ungraph::ordmap;
/// let map = BTreeMap::from([(10, 'a'), (20, 'b')]);
/// assert_eq!(ordmap::get_at(&map, 1), Ok(&'b'));
/// assert!(ordmap::get_at(&map, 2).is_err());
/// ```
pub fn get_at<K: Ord, V>(map: &BTreeMap<K, V>, position: usize) -> Result<&V, MapError> {
    map.values().nth(position).ok_or(MapError::OutOfRange)
}

/// Removes `key` from the map, silently succeeding when it is absent.
///
/// Returns the removed value if the key was present.
pub fn remove<K: Ord, V>(map: &mut BTreeMap<K, V>, key: &K) -> Option<V> {
    map.remove(key)
}

/// Removes `key` from the map.
///
/// # Errors
///
/// Fails with [`MapError::MissingKey`] when the key is not present.
pub fn remove_existing<K: Ord, V>(map: &mut BTreeMap<K, V>, key: &K) -> Result<V, MapError> {
    map.remove(key).ok_or(MapError::MissingKey)
}

/// Returns the position of `key` in ascending key order, or `None` when the
/// key is absent.
///
/// # Example
///
/// ```
/// # use std::collections::BTreeMap;
/// # use ungraph::ordmap;
/// let map = BTreeMap::from([(10, 'a'), (20, 'b')]);
/// assert_eq!(ordmap::position(&map, &20), Some(1));
/// assert_eq!(ordmap::position(&map, &15), None);
/// ```
pub fn position<K: Ord, V>(map: &BTreeMap<K, V>, key: &K) -> Option<usize> {
    if map.contains_key(key) {
        Some(map.range(..key).count())
    } else {
        None
    }
}

/// Removes `key` and renumbers every later key downward by one.
///
/// Returns the removed value if the key was present. The keys after `key`
/// are rewritten in a single ascending pass, so no rewrite can collide with
/// a key that is still in place. Later keys shift even when `key` itself is
/// absent, which keeps the renumbering uniform across a family of maps that
/// share one key space.
///
/// # Example
///
/// ```
/// # use std::collections::BTreeMap;
/// # use ungraph::ordmap;
/// let mut map = BTreeMap::from([(0, 'a'), (1, 'b'), (3, 'd')]);
/// assert_eq!(ordmap::remove_shift(&mut map, 1), Some('b'));
/// assert_eq!(map, BTreeMap::from([(0, 'a'), (2, 'd')]));
/// ```
pub fn remove_shift<V>(map: &mut BTreeMap<usize, V>, key: usize) -> Option<V> {
    let removed = map.remove(&key);
    let tail = map.split_off(&key);
    map.extend(tail.into_iter().map(|(k, v)| (k - 1, v)));
    removed
}
