// ABOUTME: Null-tolerant dotted-path field resolution over serialized records
// ABOUTME: Null anywhere along the path means "no value this cycle", never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

//! Field resolution for metric declarations.
//!
//! A metric's `iterator` is a dot-separated path into the current record,
//! e.g. `spo2_percentage.average`. Records are partially optional at
//! arbitrary depth, so resolution must short-circuit cleanly when any
//! intermediate node is null. A path segment that names a field the
//! record's schema does not carry at all is a declaration error and is
//! reported as such, so misconfigured metrics surface in logs instead of
//! silently never publishing.

use serde_json::Value;

use crate::errors::ResolveError;

/// Resolve `path` against `record`.
///
/// Returns `Ok(None)` when the field, or any intermediate node on the way
/// to it, is null. Returns an error only for schema mismatches: a segment
/// that does not exist on the object it is applied to, or a segment
/// applied to a non-object value.
pub fn resolve(record: &Value, path: &str) -> Result<Option<Value>, ResolveError> {
    let mut current = record;

    for segment in path.split('.') {
        if current.is_null() {
            return Ok(None);
        }

        let object = current.as_object().ok_or_else(|| ResolveError::NotAnObject {
            path: path.to_owned(),
            segment: segment.to_owned(),
        })?;

        current = object.get(segment).ok_or_else(|| ResolveError::UnknownField {
            path: path.to_owned(),
            segment: segment.to_owned(),
        })?;
    }

    if current.is_null() {
        Ok(None)
    } else {
        Ok(Some(current.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_segment() {
        let record = json!({"score": 82});
        assert_eq!(resolve(&record, "score").unwrap(), Some(json!(82)));
    }

    #[test]
    fn test_nested_null_short_circuits() {
        let record = json!({"spo2_percentage": null});
        assert_eq!(resolve(&record, "spo2_percentage.average").unwrap(), None);
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let record = json!({"score": 82});
        assert!(matches!(
            resolve(&record, "scroe"),
            Err(ResolveError::UnknownField { .. })
        ));
    }
}
