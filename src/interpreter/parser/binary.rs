use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenCursor, check_tree_depth},
            unary::{parse_exponent_operand, parse_prefix, parse_primary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the start of the expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let left = parse_multiplicative(cursor)?;
    fold_left(cursor, left, &[BinaryOperator::Add, BinaryOperator::Sub], parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Operands are parsed at the
/// prefix level, so `2 * -3` and `2 * sqrt 9` are accepted.
///
/// The rule is: `multiplicative := prefix (("*" | "/") prefix)*`
pub fn parse_multiplicative(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let left = parse_prefix(cursor)?;
    fold_left(cursor, left, &[BinaryOperator::Mul, BinaryOperator::Div], parse_prefix)
}

/// Parses exponentiation and scientific-notation expressions.
///
/// Handles repeated `^` and `e` with left-associativity:
/// `a ^ b ^ c` parses as `(a ^ b) ^ c`.
///
/// The left operand is a primary. The right operand may carry a sign or a
/// function, as in `2 ^ -3` or `1 e -4`, but stops at its own primary so that
/// the loop here does the folding.
///
/// The rule is: `exponent := primary (("^" | "e") exponent_operand)*`
pub fn parse_exponent(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let left = parse_primary(cursor)?;
    fold_left(cursor, left, &[BinaryOperator::Pow, BinaryOperator::Sci], parse_exponent_operand)
}

/// Folds `left` with every following `accepted` operator and its right
/// operand, building a left-deep tree.
///
/// Each new node deepens the tree by one level; the fold fails with
/// `NestingTooDeep` at the operator that would pass
/// [`MAX_TREE_DEPTH`](super::MAX_TREE_DEPTH).
fn fold_left(cursor: &mut TokenCursor<'_>,
             mut left: Expr,
             accepted: &[BinaryOperator],
             operand: fn(&mut TokenCursor<'_>) -> ParseResult<Expr>)
             -> ParseResult<Expr> {
    let mut depth = left.depth();

    while let Some(op) = next_operator(cursor, accepted) {
        let position = cursor.position();
        cursor.advance();
        let right = operand(cursor)?;
        depth = check_tree_depth(1 + depth.max(right.depth()), position)?;
        left = Expr::binary(op, left, right);
    }

    Ok(left)
}

/// Returns the binary operator under the cursor if it is one of `accepted`.
///
/// The token is not consumed.
fn next_operator(cursor: &TokenCursor<'_>, accepted: &[BinaryOperator]) -> Option<BinaryOperator> {
    cursor.peek()
          .and_then(Token::binary_operator)
          .filter(|op| accepted.contains(op))
}
