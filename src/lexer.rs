use num_bigint::BigInt;

use crate::ast::Token;

/// Errors produced while tokenizing a query string.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// Character that cannot start any token
    UnexpectedChar { ch: char, position: usize },

    /// String literal with no closing quote
    UnterminatedString { position: usize },

    /// Digit sequence that does not form an integer
    MalformedNumber { position: usize },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::UnexpectedChar { ch, position } => {
                write!(f, "unexpected character '{}' at position {}", ch, position)
            }
            LexError::UnterminatedString { position } => {
                write!(f, "unterminated string literal starting at position {}", position)
            }
            LexError::MalformedNumber { position } => {
                write!(f, "malformed number at position {}", position)
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read an identifier: a letter followed by letters, digits, or dots.
    /// Dots are part of the identifier so `user.roles.0` is one token.
    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '.' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Read a single-quoted string literal. No escape processing: the
    /// literal runs to the next single quote.
    fn read_string(&mut self) -> Result<String, LexError> {
        let start = self.position;
        self.advance(); // consume opening quote

        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '\'' {
                self.advance();
                return Ok(result);
            }
            result.push(ch);
            self.advance();
        }

        Err(LexError::UnterminatedString { position: start })
    }

    fn read_number(&mut self, negative: bool) -> Result<Token, LexError> {
        let start = self.position;
        let mut digits = String::new();
        if negative {
            digits.push('-');
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        digits
            .parse::<BigInt>()
            .map(Token::Integer)
            .map_err(|_| LexError::MalformedNumber { position: start })
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        match self.current_char() {
            None => Ok(Token::Eof),
            Some('(') => {
                self.advance();
                Ok(Token::LParen)
            }
            Some(')') => {
                self.advance();
                Ok(Token::RParen)
            }
            Some('\'') => self.read_string().map(Token::String),
            Some('=') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::EqEq)
                } else {
                    Err(LexError::UnexpectedChar {
                        ch: '=',
                        position: self.position,
                    })
                }
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Ok(Token::NotEq)
                } else {
                    Err(LexError::UnexpectedChar {
                        ch: '!',
                        position: self.position,
                    })
                }
            }
            Some('-') => {
                if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                    self.read_number(true)
                } else {
                    Err(LexError::UnexpectedChar {
                        ch: '-',
                        position: self.position,
                    })
                }
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(false),
            Some(ch) if ch.is_alphabetic() => {
                let ident = self.read_identifier();

                // Keywords are case-insensitive; field paths are not.
                if ident.eq_ignore_ascii_case("and") {
                    Ok(Token::And)
                } else if ident.eq_ignore_ascii_case("or") {
                    Ok(Token::Or)
                } else {
                    Ok(Token::Identifier(ident))
                }
            }
            Some(ch) => Err(LexError::UnexpectedChar {
                ch,
                position: self.position,
            }),
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("and or AND Or");
    assert_eq!(lexer.next_token().unwrap(), Token::And);
    assert_eq!(lexer.next_token().unwrap(), Token::Or);
    assert_eq!(lexer.next_token().unwrap(), Token::And);
    assert_eq!(lexer.next_token().unwrap(), Token::Or);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_comparison_tokens() {
    let mut lexer = Lexer::new("(name == 'bob')");
    assert_eq!(lexer.next_token().unwrap(), Token::LParen);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::Identifier("name".to_string())
    );
    assert_eq!(lexer.next_token().unwrap(), Token::EqEq);
    assert_eq!(lexer.next_token().unwrap(), Token::String("bob".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::RParen);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}
