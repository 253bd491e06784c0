/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator walks the AST bottom-up and applies each operator or
/// function with plain `f64` arithmetic. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates every node variant with an exhaustive match.
/// - Leaves floating-point edge cases (infinity, NaN) to IEEE-754 semantics.
/// - Rejects hand-built trees that break the finite-literal invariant.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a flat
/// sequence of tokens: numbers, operators, parentheses and function names.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Collapses runs of `-` into a single sign.
/// - Reports lexical errors for invalid characters and unknown function names.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over a token cursor. It encodes
/// the precedence ladder and checks that the whole token sequence forms one
/// expression.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar, reporting errors with token positions.
/// - Converts number tokens into `f64` values.
pub mod parser;
