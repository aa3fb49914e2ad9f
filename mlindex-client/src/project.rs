//! Field projection out of matched documents
//!
//! Requested field paths are resolved against a hit's `_source` mapping
//! by dotted-path descent. Two kinds of absence are distinguished: a
//! missing leaf key resolves to nothing, while descending into a null
//! ancestor is a caller error ([`ProjectionError::MissingObject`]).
//!
//! Most identifier fields are stored as strings by the backend but
//! compared numerically by consumers, so any path whose final segment
//! ends in `_id` is coerced to a number. `eval_id` and `quality_id` are
//! exempt: those two are used as opaque keys.

use mlindex_core::{Document, ProjectionError, ResultItem};
use serde_json::{Number, Value};

/// Identifier fields that are never numerically coerced.
const COERCION_EXEMPT: [&str; 2] = ["eval_id", "quality_id"];

/// Project the requested field paths out of one document source.
///
/// Paths that resolve to nothing are left out of the result.
pub fn project(source: &Document, field_paths: &[String]) -> Result<ResultItem, ProjectionError> {
    let mut item = ResultItem::new();
    for path in field_paths {
        if let Some(value) = lookup(source, path)? {
            item.insert(path.clone(), value);
        }
    }
    Ok(item)
}

/// Resolve a single dotted field path against an object.
///
/// A literal key containing dots takes precedence over traversal. After
/// that, the path is split on its first `.` and descent continues into
/// the named sub-object.
pub fn lookup(source: &Document, path: &str) -> Result<Option<Value>, ProjectionError> {
    let mut current = source;
    let mut remaining = path;

    loop {
        if let Some(value) = current.get(remaining) {
            return Ok(Some(coerce(remaining, value)));
        }

        let Some((head, rest)) = remaining.split_once('.') else {
            return Ok(None);
        };

        match current.get(head) {
            None => return Ok(None),
            Some(Value::Object(next)) => {
                current = next;
                remaining = rest;
            }
            Some(Value::Null) => {
                return Err(ProjectionError::MissingObject {
                    path: path.to_string(),
                    segment: head.to_string(),
                })
            }
            // Scalar or array ancestor: nothing to descend into.
            Some(_) => return Ok(None),
        }
    }
}

/// Apply the identifier coercion rule to a resolved value.
///
/// `key` is the path remainder at the point of resolution, so nested
/// exemptions (`evaluations.eval_id`) behave the same as top-level ones.
fn coerce(key: &str, value: &Value) -> Value {
    if !key.ends_with("_id") || COERCION_EXEMPT.contains(&key) {
        return value.clone();
    }
    to_number(value)
}

fn to_number(value: &Value) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::String(s) => {
            if let Ok(n) = s.trim().parse::<i64>() {
                return Value::Number(n.into());
            }
            if let Ok(f) = s.trim().parse::<f64>() {
                if let Some(n) = Number::from_f64(f) {
                    return Value::Number(n);
                }
            }
            Value::Null
        }
        _ => Value::Null,
    }
}

// =============================================================================
// TESTS
// =============================================================================
