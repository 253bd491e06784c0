use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting number.
///
/// Children are reduced before their parent, left operand first. The tree is
/// only borrowed, so evaluating the same tree again yields the same result.
///
/// No domain checks are made: division by zero, `sqrt` of a negative number
/// and similar cases produce infinity or NaN exactly as `f64` arithmetic does.
///
/// # Errors
/// `InvalidExpression` if a `Value` leaf holds a non-finite number. The parser
/// never builds such a leaf, so this can only happen for hand-built trees.
///
/// # Example
/// ```
/// use calcrs::{
///     ast::{BinaryOperator, Expr, UnaryOperator},
///     interpreter::evaluator::evaluate,
/// };
///
/// let expr = Expr::binary(BinaryOperator::Div,
///                         Expr::unary(UnaryOperator::Negate, Expr::Value(1.0)),
///                         Expr::Value(0.0));
///
/// assert_eq!(evaluate(&expr).unwrap(), f64::NEG_INFINITY);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Value(value) if value.is_finite() => Ok(*value),
        Expr::Value(value) => {
            Err(RuntimeError::InvalidExpression { details: format!("literal {value} is not a finite number") })
        },
        Expr::BinaryOp { op, left, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            Ok(eval_binary(*op, left, right))
        },
        Expr::UnaryOp { op, operand } => Ok(eval_unary(*op, evaluate(operand)?)),
    }
}
