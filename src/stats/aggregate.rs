//! Aggregation of classified entities into a two-level status lookup.

use ahash::AHashMap as HashMap;

use crate::stats::entity::StatusEntity;

/// Proxy name → member name → verbatim status string.
///
/// Aggregate rows sit under the reserved member keys `BACKEND`/`FRONTEND`
/// inside their group; callers iterating "servers" must skip those keys
/// themselves (nothing is filtered here).
pub type StatusMap = HashMap<String, HashMap<String, String>>;

/// Folds entities into a [`StatusMap`] in one pass.
///
/// Pure, O(n). Later rows with the same `(proxy, name)` pair overwrite
/// earlier ones; in practice one snapshot never repeats a pair.
pub fn statuses(entities: &[StatusEntity]) -> StatusMap {
    let mut map = StatusMap::new();
    for e in entities {
        map.entry(e.proxy.clone())
            .or_default()
            .insert(e.name.clone(), e.status.clone());
    }
    map
}
