//! Operations on plain chains of entries shared by both table kinds.
use crate::error::BucketsError;
use crate::key::Key;

/// Find the value of the first entry whose key equals `key`.
#[inline]
pub fn find_first<'a, V>(entries: &'a [(Key, V)], key: &Key) -> Result<&'a V, BucketsError> {
    entries
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
        .ok_or(BucketsError::KeyNotFound)
}

/// Number of entries in a chain beyond the first one.
#[inline]
pub fn chain_collisions<V>(entries: &[(Key, V)]) -> usize {
    entries.len().saturating_sub(1)
}
