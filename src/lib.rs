pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod path;
pub mod stream;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{BoolOp, CmpOp, Expr, Token};
pub use evaluator::{equals, matches, EvalError};
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};
pub use path::resolve;
pub use stream::{ReadError, Record, RecordReader, DOCUMENT_DELIMITER};
pub use value::Value;
