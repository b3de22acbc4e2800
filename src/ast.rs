//! # yamlq Query Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the yamlq query
//! language, a deliberately small boolean language for filtering streams of
//! YAML documents.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (field paths, literals, operations)
//! - **[operators]** - Comparison and boolean operators
//!
//! ## Core Concepts
//!
//! A query is either a single comparison, or exactly two parenthesized
//! comparisons joined by one boolean operator:
//!
//! ```text
//! name == 'bob'
//! user.roles.0 != 'admin'
//! (age == 30) and (city == 'NYC')
//! (age == 30) or (age == 40)
//! ```
//!
//! There is no operator precedence and no arbitrary nesting. The left side
//! of a comparison is always a dotted field path; the right side is an
//! integer literal, a single-quoted string literal, or another field path.
//!
//! The tree is built once at startup, is immutable thereafter, and is
//! evaluated once per incoming document.
pub mod tokens;
pub mod expressions;
pub mod operators;

pub use tokens::Token;
pub use expressions::Expr;
pub use operators::{BoolOp, CmpOp};
