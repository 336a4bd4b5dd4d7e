//! Layered merging of open-ended option maps
//!
//! Objects merge key by key and recursively; arrays and scalars from the
//! overlay replace the base wholesale.

use serde_json::{Map, Value};

/// Deep merge `overlay` into `base`
pub fn deep_merge(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, overlay_value) in overlay {
        match base.get_mut(key) {
            Some(base_value) => deep_merge_value(base_value, overlay_value),
            None => {
                base.insert(key.clone(), overlay_value.clone());
            }
        }
    }
}

fn deep_merge_value(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => deep_merge(base_map, overlay_map),
        (base, overlay) => *base = overlay.clone(),
    }
}

/// Merge an optional overlay into an optional map, creating the map if needed
pub fn merge_into(base: &mut Option<Map<String, Value>>, overlay: Option<&Map<String, Value>>) {
    if let Some(overlay) = overlay {
        deep_merge(base.get_or_insert_with(Map::new), overlay);
    }
}

/// Replace `slot` with a clone of `value` when the user set one
pub fn assign<T: Clone>(slot: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}

/// Like [`assign`], for fields that stay optional after resolution
pub fn assign_opt<T: Clone>(slot: &mut Option<T>, value: Option<&T>) {
    if let Some(value) = value {
        *slot = Some(value.clone());
    }
}
