//! JSON wire form checks
//!
//! Present fields always serialize to a JSON member, and absent fields are
//! skipped. serde_json writes a non-finite `f64` as `null`, so a `null`
//! anywhere in a record's serialized form marks a NaN or infinity that has
//! no wire representation.

use serde::Serialize;
use serde_json::Value;

use crate::errors::{RecordError, RecordResult};

/// Serialize a value, rejecting any non-finite number inside it
///
/// `path` is where the value sits in its record and is used in the error.
pub fn wire_value<T: Serialize + ?Sized>(
    record: &'static str,
    path: &str,
    value: &T,
) -> RecordResult<Value> {
    let value = serde_json::to_value(value)?;
    match non_finite_paths(&value, path).into_iter().next() {
        Some(path) => Err(RecordError::NonFinite { record, path }),
        None => Ok(value),
    }
}

/// Paths of every `null` inside a serialized value
pub fn non_finite_paths(value: &Value, path: &str) -> Vec<String> {
    let mut found = Vec::new();
    collect(value, path, &mut found);
    found
}

fn collect(value: &Value, path: &str, found: &mut Vec<String>) {
    match value {
        Value::Null => found.push(path.to_string()),
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                collect(item, &format!("{}[{}]", path, idx), found);
            }
        }
        Value::Object(members) => {
            for (key, member) in members {
                let member_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                collect(member, &member_path, found);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_finite_values_pass() {
        assert_eq!(wire_value("R", "weight", &1.5f64).unwrap(), Value::from(1.5));
        assert!(non_finite_paths(&serde_json::json!({"a": [1, {"b": "x"}]}), "").is_empty());
    }

    #[test]
    fn test_non_finite_paths() {
        let metrics = BTreeMap::from([
            ("coverage".to_string(), 0.3),
            ("ndcg".to_string(), f64::INFINITY),
        ]);
        let err = wire_value("GetSolutionMetricsResult", "metrics", &metrics).unwrap_err();
        assert_eq!(
            err.to_string(),
            "GetSolutionMetricsResult.metrics.ndcg holds a non-finite number, which has no JSON form"
        );

        let value = serde_json::to_value(vec![1.0, f64::NAN]).unwrap();
        assert_eq!(non_finite_paths(&value, "weights"), vec!["weights[1]"]);
    }
}
