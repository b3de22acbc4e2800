use std::collections::HashMap;

use num_bigint::BigInt;
use num_traits::Zero;

/// A decoded YAML value used throughout the yamlq query language.
///
/// This type is the runtime shape of every decoded document, of every
/// intermediate result during field resolution, and of every query literal.
/// Integers are arbitrary precision and kept distinct from floats.
///
/// # Examples
///
/// ```
/// use yamlq::Value;
/// use num_bigint::BigInt;
/// use std::collections::HashMap;
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::Boolean(true);
/// let integer = Value::Integer(BigInt::from(42));
/// let float = Value::Float(3.14);
/// let string = Value::String("hello".to_string());
///
/// // Collections
/// let sequence = Value::Sequence(vec![Value::Integer(BigInt::from(1))]);
///
/// let mut map = HashMap::new();
/// map.insert("key".to_string(), Value::String("value".to_string()));
/// let mapping = Value::Mapping(map);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// YAML null
    Null,

    /// YAML boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Arbitrary-precision integer (preserved separately from floats)
    Integer(BigInt),

    /// UTF-8 string
    String(String),

    /// Ordered sequence of values
    Sequence(Vec<Value>),

    /// Mapping with string keys; insertion order is not significant
    Mapping(HashMap<String, Value>),
}

impl Value {
    /// Check if the value is truthy for `and`/`or` and the match decision.
    ///
    /// Null, false, numeric zero, and empty strings/sequences/mappings are
    /// falsy; every other value is truthy.
    ///
    /// ```
    /// use yamlq::Value;
    /// use num_bigint::BigInt;
    ///
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Integer(BigInt::from(0)).is_truthy());
    /// assert!(Value::Integer(BigInt::from(-1)).is_truthy());
    /// assert!(!Value::String(String::new()).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        use Value::*;
        match self {
            Null => false,
            Boolean(b) => *b,
            Float(n) => *n != 0.0,
            Integer(n) => !n.is_zero(),
            String(s) => !s.is_empty(),
            Sequence(seq) => !seq.is_empty(),
            Mapping(map) => !map.is_empty(),
        }
    }
}
