/// Numeric conversion helpers.
///
/// This module converts the raw text of number tokens into `f64` values,
/// refusing anything that would not be a finite double. Use these helpers
/// whenever a literal crosses from text into the tree.
pub mod num;
