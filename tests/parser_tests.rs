// tests/parser_tests.rs

use num_bigint::BigInt;
use yamlq::ast::{BoolOp, CmpOp, Expr};
use yamlq::lexer::Lexer;
use yamlq::parser::{ParseError, Parser};

fn parse(input: &str) -> Result<Expr, ParseError> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

// ============================================================================
// Single Comparisons
// ============================================================================

#[test]
fn test_field_equals_integer() {
    let expr = parse("age == 30").unwrap();

    match expr {
        Expr::Compare {
            op: CmpOp::Equal,
            left,
            right,
        } => {
            assert_eq!(*left, Expr::Field("age".to_string()));
            assert_eq!(*right, Expr::Integer(BigInt::from(30)));
        }
        other => panic!("Expected comparison, got {:?}", other),
    }
}

#[test]
fn test_field_equals_string() {
    let expr = parse("name == 'bob'").unwrap();

    match expr {
        Expr::Compare {
            op: CmpOp::Equal,
            left,
            right,
        } => {
            assert_eq!(*left, Expr::Field("name".to_string()));
            assert_eq!(*right, Expr::String("bob".to_string()));
        }
        other => panic!("Expected comparison, got {:?}", other),
    }
}

#[test]
fn test_field_not_equals() {
    let expr = parse("status != 'done'").unwrap();
    assert!(matches!(
        expr,
        Expr::Compare {
            op: CmpOp::NotEqual,
            ..
        }
    ));
}

#[test]
fn test_field_compared_to_field() {
    let expr = parse("a != b").unwrap();

    match expr {
        Expr::Compare {
            op: CmpOp::NotEqual,
            left,
            right,
        } => {
            assert_eq!(*left, Expr::Field("a".to_string()));
            assert_eq!(*right, Expr::Field("b".to_string()));
        }
        other => panic!("Expected comparison, got {:?}", other),
    }
}

#[test]
fn test_dotted_path() {
    let expr = parse("user.roles.0 == 'admin'").unwrap();

    match expr {
        Expr::Compare { left, .. } => {
            assert_eq!(*left, Expr::Field("user.roles.0".to_string()));
        }
        other => panic!("Expected comparison, got {:?}", other),
    }
}

#[test]
fn test_negative_integer_literal() {
    let expr = parse("delta == -5").unwrap();

    match expr {
        Expr::Compare { right, .. } => {
            assert_eq!(*right, Expr::Integer(BigInt::from(-5)));
        }
        other => panic!("Expected comparison, got {:?}", other),
    }
}

// ============================================================================
// Boolean Combinations
// ============================================================================

#[test]
fn test_and_combination() {
    let expr = parse("(age == 30) and (city == 'NYC')").unwrap();

    match expr {
        Expr::Bool {
            op: BoolOp::And,
            left,
            right,
        } => {
            assert!(matches!(
                *left,
                Expr::Compare {
                    op: CmpOp::Equal,
                    ..
                }
            ));
            assert!(matches!(
                *right,
                Expr::Compare {
                    op: CmpOp::Equal,
                    ..
                }
            ));
        }
        other => panic!("Expected boolean combination, got {:?}", other),
    }
}

#[test]
fn test_or_combination() {
    let expr = parse("(age == 30) or (age == 40)").unwrap();
    assert!(matches!(expr, Expr::Bool { op: BoolOp::Or, .. }));
}

#[test]
fn test_case_insensitive_bool_op() {
    assert!(matches!(
        parse("(a == 1) AND (b == 2)").unwrap(),
        Expr::Bool {
            op: BoolOp::And,
            ..
        }
    ));
    assert!(matches!(
        parse("(a == 1) Or (b == 2)").unwrap(),
        Expr::Bool { op: BoolOp::Or, .. }
    ));
}

#[test]
fn test_mixed_relations_in_combination() {
    let expr = parse("(kind != 'internal') and (weight == 0)").unwrap();

    match expr {
        Expr::Bool {
            op: BoolOp::And,
            left,
            right,
        } => {
            assert!(matches!(
                *left,
                Expr::Compare {
                    op: CmpOp::NotEqual,
                    ..
                }
            ));
            assert!(matches!(
                *right,
                Expr::Compare {
                    op: CmpOp::Equal,
                    ..
                }
            ));
        }
        other => panic!("Expected boolean combination, got {:?}", other),
    }
}

// ============================================================================
// Grammar Rejections
// ============================================================================

#[test]
fn test_unparenthesized_boolean_chain_rejected() {
    assert!(parse("a == 1 and b == 2").is_err());
}

#[test]
fn test_three_way_chain_rejected() {
    assert!(parse("a == 1 and b == 2 and c == 3").is_err());
}

#[test]
fn test_three_parenthesized_comparisons_rejected() {
    // Two boolean operators is one too many
    assert!(parse("(a == 1) and (b == 2) and (c == 3)").is_err());
}

#[test]
fn test_lone_parenthesized_comparison_rejected() {
    // A parenthesized comparison must be half of a boolean combination
    let err = parse("(a == 1)").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: "'and' or 'or'",
            ..
        }
    ));
}

#[test]
fn test_nested_parentheses_rejected() {
    assert!(parse("((a == 1)) and (b == 2)").is_err());
}

#[test]
fn test_mixed_paren_and_bare_rejected() {
    assert!(parse("(a == 1) and b == 2").is_err());
    assert!(parse("a == 1 and (b == 2)").is_err());
}

#[test]
fn test_trailing_input_rejected() {
    let err = parse("a == 1 b").unwrap_err();
    assert!(matches!(err, ParseError::TrailingInput { .. }));
}

#[test]
fn test_literal_on_left_rejected() {
    // The left side of a comparison is always a field path
    assert!(parse("1 == a").is_err());
    assert!(parse("'bob' == name").is_err());
}

#[test]
fn test_missing_relation_rejected() {
    assert!(parse("a 1").is_err());
}

#[test]
fn test_missing_right_operand_rejected() {
    assert!(parse("a ==").is_err());
}

#[test]
fn test_dangling_bool_op_rejected() {
    assert!(parse("(a == 1) and").is_err());
    assert!(parse("(a == 1) or (").is_err());
}

#[test]
fn test_empty_query_rejected() {
    assert!(parse("").is_err());
}

#[test]
fn test_bare_field_rejected() {
    // A query is a comparison, never a lone field reference
    assert!(parse("name").is_err());
}

#[test]
fn test_unterminated_string_surfaces_as_parse_error() {
    let err = parse("name == 'bob").unwrap_err();
    assert!(matches!(err, ParseError::Lex(_)));
}

#[test]
fn test_single_equals_rejected() {
    let err = parse("a = 1").unwrap_err();
    assert!(matches!(err, ParseError::Lex(_)));
}
