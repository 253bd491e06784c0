use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Paren, Token},
        parser::{
            binary::parse_exponent,
            core::{ParseResult, TokenCursor, check_tree_depth, parse_expression},
        },
    },
    util::num::literal_to_f64,
};

/// Parses a prefix expression.
///
/// Supports prefix operators:
/// - `+`  (identity)
/// - `-`  (numeric negation)
/// - any function name, e.g. `sqrt`
///
/// Prefix operators are right-associative, so an input like `--sin(-2)` (after
/// tokenizing `--` into `+`) is parsed as `+(sin(-(2)))`. A function does not
/// require parentheses around its operand: `sin 2` parses like `sin(2)`.
///
/// If no prefix operator is present, the function delegates to
/// [`parse_exponent`].
///
/// Grammar:
/// ```text
///     prefix := ("+" | "-" | function) prefix
///             | exponent
/// ```
pub(crate) fn parse_prefix(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_prefixed(cursor, parse_exponent)
}

/// Parses the right operand of `^` or `e`.
///
/// The operand may carry prefix operators, as in `2 ^ -3`, but ends at its
/// primary. Any further `^` or `e` is left to the caller's loop, which keeps
/// `2 ^ 3 ^ 2` left-associative.
///
/// Grammar:
/// ```text
///     exponent_operand := ("+" | "-" | function) exponent_operand
///                       | primary
/// ```
pub(crate) fn parse_exponent_operand(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_prefixed(cursor, parse_primary)
}

/// Consumes a chain of prefix operators, then parses the operand with
/// `operand`.
///
/// Each prefix operator counts as one level of nesting and adds one level to
/// the tree.
fn parse_prefixed(cursor: &mut TokenCursor<'_>,
                  operand: fn(&mut TokenCursor<'_>) -> ParseResult<Expr>)
                  -> ParseResult<Expr> {
    let Some(op) = cursor.peek().and_then(Token::unary_operator) else {
        return operand(cursor);
    };

    let position = cursor.position();
    cursor.descend(position)?;
    cursor.advance();
    let inner = parse_prefixed(cursor, operand);
    cursor.ascend();
    let inner = inner?;

    check_tree_depth(1 + inner.depth(), position)?;
    Ok(Expr::unary(op, inner))
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
/// # Errors
/// - `UnexpectedToken` for any other token.
/// - `IncompleteExpression` if the tokens are exhausted.
pub(crate) fn parse_primary(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let position = cursor.position();

    match cursor.peek() {
        Some(Token::Number(text)) => {
            cursor.advance();
            Ok(Expr::Value(literal_to_f64(text, position)?))
        },
        Some(Token::Paren(Paren::Open)) => parse_grouping(cursor),
        Some(token) => Err(ParseError::UnexpectedToken { token: token.text().to_string(),
                                                         position }),
        None => Err(cursor.end_of_input()),
    }
}

/// Parses a parenthesized expression `( expression )`.
///
/// The cursor must be positioned at the `(`.
///
/// # Errors
/// `MissingClosingParen` with the index where `)` was expected.
fn parse_grouping(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    cursor.descend(cursor.position())?;
    cursor.advance();
    let inner = parse_expression(cursor);
    cursor.ascend();
    let inner = inner?;

    match cursor.peek() {
        Some(Token::Paren(Paren::Close)) => {
            cursor.advance();
            Ok(inner)
        },
        _ => Err(ParseError::MissingClosingParen { position: cursor.position() }),
    }
}
