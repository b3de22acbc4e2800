use crate::{
    ast::{BoolOp, CmpOp, Expr},
    path::resolve,
    value::Value,
};

/// Errors that can occur during query evaluation.
///
/// Only field-path resolution can fail: a mapping miss degrades to `Null`,
/// but a bad sequence index is surfaced as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Sequence index segment that is not a base-10 non-negative integer
    InvalidIndex { segment: String },

    /// Sequence index beyond the end of the sequence
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::InvalidIndex { segment } => {
                write!(f, "invalid sequence index '{}'", segment)
            }
            EvalError::IndexOutOfRange { index, len } => {
                write!(f, "sequence index {} out of range (length {})", index, len)
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl Expr {
    /// Evaluate this expression against a document's root value.
    ///
    /// - `Field` resolves its dotted path against the root.
    /// - Literals ignore the root.
    /// - `Compare` yields a genuine boolean from [`equals`].
    /// - `Bool` combines the truthiness of both sides. Both operands are
    ///   evaluated unconditionally, so an index failure on either side
    ///   surfaces no matter what the other side decides.
    pub fn eval(&self, root: &Value) -> Result<Value, EvalError> {
        match self {
            Expr::Field(path) => resolve(path, root),
            Expr::Integer(n) => Ok(Value::Integer(n.clone())),
            Expr::String(s) => Ok(Value::String(s.clone())),

            Expr::Compare { op, left, right } => {
                let l = left.eval(root)?;
                let r = right.eval(root)?;
                let eq = equals(&l, &r);
                Ok(Value::Boolean(match op {
                    CmpOp::Equal => eq,
                    CmpOp::NotEqual => !eq,
                }))
            }

            Expr::Bool { op, left, right } => {
                let l = left.eval(root)?;
                let r = right.eval(root)?;
                Ok(Value::Boolean(match op {
                    BoolOp::And => l.is_truthy() && r.is_truthy(),
                    BoolOp::Or => l.is_truthy() || r.is_truthy(),
                }))
            }
        }
    }
}

/// Structural equality between two values.
///
/// Two values are equal iff they carry the same kind and equal content;
/// values of differing kinds are never equal. There is no coercion: a
/// string literal never equals an integer field value, and an integer
/// never equals a float, even when their textual forms match.
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Integer(x), Value::Integer(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Sequence(x), Value::Sequence(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(l, r)| equals(l, r))
        }
        (Value::Mapping(x), Value::Mapping(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, value)| y.get(key).is_some_and(|other| equals(value, other)))
        }
        _ => false,
    }
}

/// Decide whether a record matches the query.
///
/// The record filter applies this once per incoming document, in arrival
/// order; the AST root is shared read-only across all calls.
pub fn matches(root: &Expr, record: &Value) -> Result<bool, EvalError> {
    Ok(root.eval(record)?.is_truthy())
}
