use num_bigint::BigInt;

use crate::ast::{BoolOp, CmpOp};

/// Abstract Syntax Tree node representing a parsed query expression.
///
/// The AST is the internal representation of a query after parsing. It is
/// built once, owned by the record filter, and evaluated once per document.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Dotted field path into the document
    ///
    /// # Examples
    /// ```text
    /// name
    /// user.roles.0
    /// ```
    Field(String),

    /// Literal arbitrary-precision integer
    Integer(BigInt),

    /// Literal string
    String(String),

    /// Equality or inequality comparison
    ///
    /// Always evaluates to a genuine boolean.
    Compare {
        op: CmpOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Boolean combination of two comparisons
    ///
    /// Combines the truthiness of both sides. Both operands are evaluated
    /// unconditionally.
    Bool {
        op: BoolOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}
