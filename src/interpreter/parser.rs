/// Core parsing logic.
///
/// Holds the token cursor shared by every grammar level and the top-level
/// entry point that checks the whole sequence is consumed.
pub mod core;

/// Prefix and primary parsing.
///
/// Handles unary signs, function application, numeric literals and
/// parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the sum, product and power levels of the precedence ladder, all
/// folded left-associatively.
pub mod binary;

pub use self::core::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH, ParseResult, parse};
