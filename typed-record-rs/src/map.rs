use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::{RecordError, RecordResult};

/// Insert `key` into a map field, refusing keys that are already present
///
/// On failure the map is left exactly as it was.
pub fn insert_unique<V>(
    record: &'static str,
    field: &'static str,
    map: &mut BTreeMap<String, V>,
    key: String,
    value: V,
) -> RecordResult<()> {
    if map.contains_key(&key) {
        debug!(record, field, key = %key, "rejected duplicate map key");
        return Err(RecordError::DuplicateKey { record, field, key });
    }

    map.insert(key, value);
    Ok(())
}
