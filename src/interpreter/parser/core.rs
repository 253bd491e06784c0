use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of parentheses and prefix operators that may enclose a
/// single operand.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Maximum depth of a finished expression tree, see [`Expr::depth`].
///
/// Operator chains such as `1 + 1 + ... + 1` build one level per operator, so
/// this bounds the recursion of everything that walks or drops the tree.
pub const MAX_TREE_DEPTH: usize = 1024;

/// Checks the depth of a node about to be built from the operator at
/// `position`.
///
/// # Errors
/// `NestingTooDeep` at `position` when `depth` exceeds [`MAX_TREE_DEPTH`].
pub const fn check_tree_depth(depth: usize, position: usize) -> ParseResult<usize> {
    if depth > MAX_TREE_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(depth)
}

/// A read position into a token slice.
///
/// Every grammar level shares one cursor. It only moves forward, so each token
/// is consumed at most once.
pub struct TokenCursor<'a> {
    tokens:   &'a [Token],
    position: usize,
    depth:    usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               position: 0,
               depth: 0 }
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Index of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Enters one level of nesting, failing once the limit is exceeded.
    ///
    /// # Errors
    /// `NestingTooDeep` at `position` when the depth would exceed
    /// [`MAX_NESTING_DEPTH`].
    pub fn descend(&mut self, position: usize) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { position });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of nesting.
    pub const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Builds the error for input that ended where an operand was required.
    ///
    /// The error names the last consumed token, which is the operator, sign,
    /// function or `(` still waiting for its operand.
    #[must_use]
    pub fn end_of_input(&self) -> ParseError {
        match self.position
                  .checked_sub(1)
                  .and_then(|last| self.tokens.get(last).map(|token| (last, token)))
        {
            Some((position, token)) => {
                ParseError::IncompleteExpression { operator: token.text().to_string(),
                                                   position }
            },
            None => ParseError::EmptyExpression,
        }
    }
}

/// Parses a token sequence into a single expression tree.
///
/// The grammar, from loosest to tightest binding:
/// ```text
///     sum      := product (("+" | "-") product)*
///     product  := prefix (("*" | "/") prefix)*
///     prefix   := ("+" | "-" | function) prefix
///               | power
///     power    := primary (("^" | "e") operand)*
///     operand  := ("+" | "-" | function) operand
///               | primary
///     primary  := number
///               | "(" sum ")"
/// ```
/// Every binary level folds to the left, so `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
/// The right operand of `^` and `e` may carry prefix operators, which allows
/// `2 ^ -3`.
///
/// # Errors
/// - `EmptyExpression` if `tokens` is empty.
/// - `UnexpectedToken` where a number or `(` was required.
/// - `MissingClosingParen` when a group is not closed.
/// - `IncompleteExpression` when the tokens end after an operator.
/// - `TrailingTokens` when tokens remain after a complete expression.
/// - `InvalidNumber`, `LiteralTooLarge` and `NestingTooDeep` for literals and
///   nesting the tree cannot hold.
///
/// # Example
/// ```
/// use calcrs::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let expr = parse(&tokenize("8 - 3 - 2").unwrap()).unwrap();
/// let expected = Expr::binary(BinaryOperator::Sub,
///                             Expr::binary(BinaryOperator::Sub, Expr::Value(8.0), Expr::Value(3.0)),
///                             Expr::Value(2.0));
/// assert_eq!(expr, expected);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut cursor = TokenCursor::new(tokens);
    let expr = parse_expression(&mut cursor)?;

    if let Some(token) = cursor.peek() {
        return Err(ParseError::TrailingTokens { token:    token.text().to_string(),
                                                position: cursor.position(), });
    }

    debug!(tokens = tokens.len(), nodes = expr.node_count(), "parsed expression");
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing, used both at the top level
/// and inside parentheses. It begins at the lowest-precedence level, addition.
///
/// Grammar: `expression := sum`
pub fn parse_expression(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_additive(cursor)
}
