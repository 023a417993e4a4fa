//! Local `$ref` normalization.
//!
//! Fragments such as `#definitions/status` omit the leading `/` of a JSON
//! pointer. Unless the first segment names a declared anchor, they are
//! rewritten to `#/definitions/status` before the schema is compiled.

use std::collections::HashSet;

use serde_json::Value;

/// Rewrite slash-less local pointer fragments in place.
///
/// Returns the number of references rewritten.
pub fn normalize_local_refs(schema: &mut Value) -> usize {
    let mut anchors = HashSet::new();
    collect_anchors(schema, &mut anchors);
    rewrite_refs(schema, &anchors)
}

fn collect_anchors(value: &Value, anchors: &mut HashSet<String>) {
    match value {
        Value::Object(map) => {
            for keyword in ["$anchor", "$dynamicAnchor"] {
                if let Some(Value::String(name)) = map.get(keyword) {
                    anchors.insert(name.clone());
                }
            }
            // Draft 4-7 anchors are spelled as plain-name `$id` / `id` fragments.
            for keyword in ["$id", "id"] {
                if let Some(name) = map
                    .get(keyword)
                    .and_then(Value::as_str)
                    .and_then(|id| id.strip_prefix('#'))
                {
                    anchors.insert(name.to_string());
                }
            }
            for child in map.values() {
                collect_anchors(child, anchors);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_anchors(item, anchors);
            }
        }
        _ => {}
    }
}

fn rewrite_refs(value: &mut Value, anchors: &HashSet<String>) -> usize {
    match value {
        Value::Object(map) => {
            let mut rewritten = 0;
            if let Some(Value::String(reference)) = map.get_mut("$ref") {
                if let Some(fixed) = normalized_fragment(reference, anchors) {
                    tracing::trace!(from = %reference, to = %fixed, "normalized $ref");
                    *reference = fixed;
                    rewritten += 1;
                }
            }
            for child in map.values_mut() {
                rewritten += rewrite_refs(child, anchors);
            }
            rewritten
        }
        Value::Array(items) => items
            .iter_mut()
            .map(|item| rewrite_refs(item, anchors))
            .sum(),
        _ => 0,
    }
}

fn normalized_fragment(reference: &str, anchors: &HashSet<String>) -> Option<String> {
    let fragment = reference.strip_prefix('#')?;
    if fragment.is_empty() || fragment.starts_with('/') {
        return None;
    }
    let first = fragment.split('/').next().unwrap_or(fragment);
    if anchors.contains(first) {
        return None;
    }
    Some(format!("#/{fragment}"))
}
