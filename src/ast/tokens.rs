use num_bigint::BigInt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Arbitrary-precision integer, optionally negative
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -10
    /// 123456789012345678901234567890
    /// ```
    Integer(BigInt),

    /// String literal enclosed in single quotes
    ///
    /// No escape processing is performed; the literal runs to the next
    /// single quote.
    ///
    /// # Examples
    /// ```text
    /// 'bob'
    /// 'New York'
    /// ```
    String(String),

    /// Dotted field path
    ///
    /// Starts with a letter, followed by letters, digits, or dots. Dots
    /// separate mapping keys and sequence indices.
    ///
    /// # Examples
    /// ```text
    /// name
    /// user.roles.0
    /// ```
    Identifier(String),

    // Comparison
    /// Equality operator (`==`)
    EqEq,

    /// Inequality operator (`!=`)
    NotEq,

    // Logical
    /// Logical AND (word, case-insensitive)
    ///
    /// # Examples
    /// ```text
    /// (age == 30) and (city == 'NYC')
    /// ```
    And,

    /// Logical OR (word, case-insensitive)
    ///
    /// # Examples
    /// ```text
    /// (age == 30) or (age == 40)
    /// ```
    Or,

    // Delimiters
    /// Left parenthesis around a comparison
    LParen,

    /// Right parenthesis
    RParen,

    /// End of query
    Eof,
}
