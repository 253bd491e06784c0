#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
///
/// Floating-point edge cases such as division by zero or `sqrt(-1)` are not
/// errors; they evaluate to infinity or NaN.
pub enum RuntimeError {
    /// The tree breaks an invariant the parser guarantees, e.g. a leaf holding
    /// a non-finite number.
    #[error("Invalid expression: {details}")]
    InvalidExpression {
        /// Details about the malformed node.
        details: String,
    },
}
