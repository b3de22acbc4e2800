use crate::{
    ast::{BoolOp, CmpOp, Expr, Token},
    lexer::{LexError, Lexer},
};
use std::mem;

/// Errors produced while parsing a query string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Tokenization failure
    Lex(LexError),

    /// Token that does not fit the grammar at this position
    UnexpectedToken {
        expected: &'static str,
        found: Token,
    },

    /// Input left over after a complete query was parsed
    TrailingInput { found: Token },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "{}", e),
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "expected {}, found {:?}", expected, found)
            }
            ParseError::TrailingInput { found } => {
                write!(f, "unexpected trailing input starting at {:?}", found)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

/// Recursive-descent parser for the query grammar:
///
/// ```text
/// comparison := field relation (number | string | field)
/// query      := comparison
///             | "(" comparison ")" boolOp "(" comparison ")"
/// ```
///
/// The grammar is intentionally narrow: a query is a single comparison, or
/// exactly two parenthesized comparisons joined by one boolean operator.
/// Anything else, including unparenthesized boolean chains and nested
/// parentheses, is a syntax error.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token, description: &'static str) -> Result<(), ParseError> {
        if self.check(&expected) {
            self.advance()
        } else {
            Err(ParseError::UnexpectedToken {
                expected: description,
                found: self.current_token.clone(),
            })
        }
    }

    /// Parse one complete query and consume the entire input.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = if self.check(&Token::LParen) {
            self.parse_bool()?
        } else {
            self.parse_comparison()?
        };

        if self.current_token != Token::Eof {
            return Err(ParseError::TrailingInput {
                found: self.current_token.clone(),
            });
        }
        Ok(expr)
    }

    /// `"(" comparison ")" boolOp "(" comparison ")"`
    fn parse_bool(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_paren_comparison()?;

        let op = match &self.current_token {
            Token::And => BoolOp::And,
            Token::Or => BoolOp::Or,
            _ => {
                return Err(ParseError::UnexpectedToken {
                    expected: "'and' or 'or'",
                    found: self.current_token.clone(),
                });
            }
        };
        self.advance()?;

        let right = self.parse_paren_comparison()?;

        Ok(Expr::Bool {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_paren_comparison(&mut self) -> Result<Expr, ParseError> {
        self.expect(Token::LParen, "'('")?;
        let expr = self.parse_comparison()?;
        self.expect(Token::RParen, "')'")?;
        Ok(expr)
    }

    /// `field relation (number | string | field)`
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let left = match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Identifier(path) => {
                self.advance()?;
                Expr::Field(path)
            }
            token => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a field path",
                    found: token,
                });
            }
        };

        let op = match &self.current_token {
            Token::EqEq => CmpOp::Equal,
            Token::NotEq => CmpOp::NotEqual,
            _ => {
                return Err(ParseError::UnexpectedToken {
                    expected: "'==' or '!='",
                    found: self.current_token.clone(),
                });
            }
        };
        self.advance()?;

        let right = match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Integer(n) => {
                self.advance()?;
                Expr::Integer(n)
            }
            Token::String(s) => {
                self.advance()?;
                Expr::String(s)
            }
            Token::Identifier(path) => {
                self.advance()?;
                Expr::Field(path)
            }
            token => {
                return Err(ParseError::UnexpectedToken {
                    expected: "an integer, string, or field path",
                    found: token,
                });
            }
        };

        Ok(Expr::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}
