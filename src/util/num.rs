use crate::{error::ParseError, interpreter::parser::ParseResult};

/// Converts the text of a number token into a finite `f64`.
///
/// The text is expected to match `[0-9]+(\.[0-9]*)?`, as produced by the
/// tokenizer; a trailing decimal point is accepted (`"4."` is `4.0`).
///
/// ## Errors
/// - `InvalidNumber` if the text is not a decimal number.
/// - `LiteralTooLarge` if the value overflows to infinity.
///
/// ## Parameters
/// - `text`: The raw token text.
/// - `position`: Index of the token, for error reporting.
///
/// ## Example
/// ```
/// use calcrs::{error::ParseError, util::num::literal_to_f64};
///
/// assert_eq!(literal_to_f64("42.17", 0).unwrap(), 42.17);
/// assert_eq!(literal_to_f64("4.", 0).unwrap(), 4.0);
///
/// let huge = "9".repeat(400);
/// assert!(matches!(literal_to_f64(&huge, 3),
///                  Err(ParseError::LiteralTooLarge { position: 3, .. })));
/// ```
pub fn literal_to_f64(text: &str, position: usize) -> ParseResult<f64> {
    if !is_decimal_literal(text) {
        return Err(ParseError::InvalidNumber { text: text.to_string(),
                                               position });
    }

    let value = text.parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber { text: text.to_string(),
                                                             position })?;

    if !value.is_finite() {
        return Err(ParseError::LiteralTooLarge { text: text.to_string(),
                                                 position });
    }

    Ok(value)
}

/// Checks that `text` is digits, optionally followed by `.` and more digits.
///
/// `f64::from_str` also accepts signs, exponents and `inf`; tokens built by
/// hand must not sneak those past the grammar.
fn is_decimal_literal(text: &str) -> bool {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

    !whole.is_empty()
    && whole.bytes().all(|b| b.is_ascii_digit())
    && fraction.bytes().all(|b| b.is_ascii_digit())
}
