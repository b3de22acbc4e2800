//! Dotted field-path resolution against a [`Value`] tree.

use crate::{evaluator::EvalError, value::Value};

/// Resolve a dotted field path against a root value.
///
/// Segments address mapping keys or sequence indices, walked left to right:
///
/// - A mapping is looked up by the segment as a string key. A missing key
///   resolves to `Null` and ends the walk; the remaining segments are
///   discarded. Traversal through a miss is not an error.
/// - A sequence interprets the segment as a base-10 non-negative index.
///   A non-numeric or out-of-range segment is an error, not `Null`.
/// - A scalar reached with segments remaining is returned unchanged and
///   the remaining segments are ignored.
/// - An empty path resolves to the root itself.
///
/// # Examples
///
/// ```
/// use yamlq::{resolve, Value};
/// use num_bigint::BigInt;
/// use std::collections::HashMap;
///
/// let mut user = HashMap::new();
/// user.insert("age".to_string(), Value::Integer(BigInt::from(30)));
/// let mut doc = HashMap::new();
/// doc.insert("user".to_string(), Value::Mapping(user));
/// let root = Value::Mapping(doc);
///
/// assert_eq!(
///     resolve("user.age", &root).unwrap(),
///     Value::Integer(BigInt::from(30))
/// );
/// assert_eq!(resolve("user.email", &root).unwrap(), Value::Null);
/// ```
pub fn resolve(path: &str, root: &Value) -> Result<Value, EvalError> {
    if path.is_empty() {
        return Ok(root.clone());
    }

    let mut current = root;
    for segment in path.split('.') {
        match current {
            Value::Mapping(map) => match map.get(segment) {
                Some(value) => current = value,
                None => return Ok(Value::Null),
            },
            Value::Sequence(items) => {
                let index: usize =
                    segment
                        .parse()
                        .map_err(|_| EvalError::InvalidIndex {
                            segment: segment.to_string(),
                        })?;
                current = items.get(index).ok_or(EvalError::IndexOutOfRange {
                    index,
                    len: items.len(),
                })?;
            }
            // Scalar mid-path: the walk stops here.
            scalar => return Ok(scalar.clone()),
        }
    }
    Ok(current.clone())
}
