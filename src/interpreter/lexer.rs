use logos::Logos;
use tracing::trace;

use crate::{
    ast::{BinaryOperator, Function, UnaryOperator},
    error::LexError,
};

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// An operator symbol as it appears in the source.
///
/// A run of `-` characters is collapsed into a single operator by the lexer:
/// an odd count becomes [`Operator::Sub`], an even count [`Operator::Add`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `e`, the scientific-notation operator.
    Sci,
}

impl Operator {
    /// Returns the source text of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Sci => "e",
        }
    }
}

/// A parenthesis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

/// The class of a [`Token`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A decimal literal.
    Number,
    /// One of `+ - * / ^ e`.
    Operator,
    /// `(` or `)`.
    Paren,
    /// A named function.
    Function,
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Numbers keep their raw text; conversion to `f64` is left to the parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `4.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", |lex| lex.slice().to_owned())]
    Number(String),
    /// Operator tokens.
    #[token("+", |_| Operator::Add)]
    #[regex(r"-+", collapse_minus_run)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    // A lone `e` outranks the letter run below; longer runs still win by length.
    #[token("e", |_| Operator::Sci, priority = 3)]
    Operator(Operator),
    /// `(` and `)`
    #[token("(", |_| Paren::Open)]
    #[token(")", |_| Paren::Close)]
    Paren(Paren),
    /// Function names such as `sin` or `sqrt`.
    #[regex(r"[a-z]+", |lex| lex.slice().parse::<Function>().ok())]
    Function(Function),
}

impl Token {
    /// Returns the class of the token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Operator(_) => TokenKind::Operator,
            Self::Paren(_) => TokenKind::Paren,
            Self::Function(_) => TokenKind::Function,
        }
    }

    /// Returns the source text of the token.
    ///
    /// For a collapsed run of minus signs this is the resulting operator, not
    /// the original run.
    ///
    /// ## Example
    /// ```
    /// use calcrs::interpreter::lexer::{Operator, Token};
    ///
    /// assert_eq!(Token::Number("2.5".to_string()).text(), "2.5");
    /// assert_eq!(Token::Operator(Operator::Sci).text(), "e");
    /// ```
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Number(text) => text,
            Self::Operator(op) => op.symbol(),
            Self::Paren(Paren::Open) => "(",
            Self::Paren(Paren::Close) => ")",
            Self::Function(function) => function.name(),
        }
    }

    /// Maps the token to a binary operator, if it is one.
    ///
    /// Returns `None` for numbers, parentheses and function names.
    ///
    /// ## Example
    /// ```
    /// use calcrs::{
    ///     ast::BinaryOperator,
    ///     interpreter::lexer::{Operator, Paren, Token},
    /// };
    ///
    /// assert_eq!(Token::Operator(Operator::Sci).binary_operator(), Some(BinaryOperator::Sci));
    /// assert_eq!(Token::Paren(Paren::Open).binary_operator(), None);
    /// ```
    #[must_use]
    pub const fn binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Operator(Operator::Add) => Some(BinaryOperator::Add),
            Self::Operator(Operator::Sub) => Some(BinaryOperator::Sub),
            Self::Operator(Operator::Mul) => Some(BinaryOperator::Mul),
            Self::Operator(Operator::Div) => Some(BinaryOperator::Div),
            Self::Operator(Operator::Pow) => Some(BinaryOperator::Pow),
            Self::Operator(Operator::Sci) => Some(BinaryOperator::Sci),
            _ => None,
        }
    }

    /// Maps the token to a prefix operator, if it can start one.
    ///
    /// Only the signs `+` and `-` and function names qualify.
    #[must_use]
    pub const fn unary_operator(&self) -> Option<UnaryOperator> {
        match self {
            Self::Operator(Operator::Add) => Some(UnaryOperator::Identity),
            Self::Operator(Operator::Sub) => Some(UnaryOperator::Negate),
            Self::Function(function) => Some(UnaryOperator::Function(*function)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Collapses a run of consecutive `-` characters into one operator.
///
/// Double negation cancels, so only the parity of the run matters.
fn collapse_minus_run(lex: &logos::Lexer<Token>) -> Operator {
    if lex.slice().len() % 2 == 0 { Operator::Add } else { Operator::Sub }
}

/// Converts a byte offset reported by the lexer into a character offset.
fn char_position(source: &str, byte_offset: usize) -> usize {
    source.get(..byte_offset)
          .map_or(byte_offset, |prefix| prefix.chars().count())
}

/// Scans the input text into a sequence of tokens.
///
/// Whitespace separates tokens and is otherwise ignored. Scanning stops at the
/// first failure; there is no recovery.
///
/// # Errors
/// - `InvalidCharacter` for any character that does not start a token,
///   including a second decimal point in a number.
/// - `InvalidFunctionName` for a run of letters that is neither `e` nor a known
///   function. The position is the offset just past the run.
///
/// # Example
/// ```
/// use calcrs::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("--5").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Operator(Operator::Add), Token::Number("5".to_string())]);
///
/// let err = tokenize("2+$").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid character: $ at position 2");
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            trace!(token = %tok, position = char_position(source, lexer.span().start), "token");
            tokens.push(tok);
            continue;
        }

        let slice = lexer.slice();
        let span = lexer.span();
        return Err(if slice.starts_with(|c: char| c.is_ascii_lowercase()) {
                       LexError::InvalidFunctionName { name:     slice.to_string(),
                                                       position: char_position(source, span.end), }
                   } else {
                       LexError::InvalidCharacter { character: slice.chars().next().unwrap_or_default(),
                                                    position:  char_position(source, span.start), }
                   });
    }

    Ok(tokens)
}
