//! Dotted-name projection onto nested JSON objects.
//!
//! `server.http.port` maps to `{"server": {"http": {"port": ..}}}`.

use serde_json::{Map, Value};

/// Write `leaf` at `path`, creating intermediate objects as needed.
///
/// Any intermediate segment that is missing or holds a non-object value is
/// replaced by an empty object before descending.
pub fn set_nested_value(root: &mut Value, path: &str, leaf: Value) {
    let mut current = root;
    for segment in path.split('.') {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        current = &mut current[segment];
    }
    *current = leaf;
}

/// Read the value at `path`. Never creates structure.
pub fn get_nested_value<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(root, |current, segment| current.as_object()?.get(segment))
}
