use std::str::FromStr;

/// A named function that can be applied as a prefix operator.
///
/// The set is closed: the tokenizer only produces names that parse into one of
/// these variants, and the evaluator maps each one onto the matching `f64`
/// method.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    /// Base-10 logarithm (`log`).
    Log,
    /// Natural logarithm (`ln`).
    Ln,
    /// Exponential, `e^x` (`exp`).
    Exp,
    /// Square root (`sqrt`).
    Sqrt,
    /// Absolute value (`abs`).
    Abs,
    /// Inverse tangent, in radians (`atan`).
    Atan,
    /// Inverse cosine, in radians (`acos`).
    Acos,
    /// Inverse sine, in radians (`asin`).
    Asin,
    /// Hyperbolic sine (`sinh`).
    Sinh,
    /// Hyperbolic cosine (`cosh`).
    Cosh,
    /// Hyperbolic tangent (`tanh`).
    Tanh,
    /// Tangent, in radians (`tan`).
    Tan,
    /// Sine, in radians (`sin`).
    Sin,
    /// Cosine, in radians (`cos`).
    Cos,
}

impl Function {
    /// Every recognized function, in the order they are documented.
    pub const ALL: [Self; 14] = [Self::Log,
                                 Self::Ln,
                                 Self::Exp,
                                 Self::Sqrt,
                                 Self::Abs,
                                 Self::Atan,
                                 Self::Acos,
                                 Self::Asin,
                                 Self::Sinh,
                                 Self::Cosh,
                                 Self::Tanh,
                                 Self::Tan,
                                 Self::Sin,
                                 Self::Cos];

    /// Returns the lowercase source name of the function.
    ///
    /// ## Example
    /// ```
    /// use calcrs::ast::Function;
    ///
    /// assert_eq!(Function::Sqrt.name(), "sqrt");
    /// assert_eq!(Function::Ln.name(), "ln");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Atan => "atan",
            Self::Acos => "acos",
            Self::Asin => "asin",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Tan => "tan",
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }
}

/// Returned when a name is not one of the recognized functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFunction(pub String);

impl FromStr for Function {
    type Err = UnknownFunction;

    /// Matches a name against the function table.
    ///
    /// The name is lowercased first, so `"SIN"` and `"sin"` both resolve to
    /// [`Function::Sin`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        Self::ALL.into_iter()
                 .find(|f| f.name() == name)
                 .ok_or(UnknownFunction(name))
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a binary operator.
///
/// All binary operators are left-associative, including `^` and `e`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Scientific notation (`e`): `a e b` is `a * 10^b`.
    Sci,
}

/// Represents a unary (prefix) operator.
///
/// Unary operators are either a sign or the application of a named
/// [`Function`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Unary plus; leaves the operand unchanged (e.g. `+x`).
    Identity,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Function application (e.g. `sqrt x` or `sqrt(x)`).
    Function(Function),
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Each child is exclusively owned by its parent, so a tree has no sharing and
/// no cycles. Trees are built bottom-up by the parser and never mutated
/// afterwards; evaluating one only borrows it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal. Trees produced by the parser only hold finite
    /// values here.
    Value(f64),
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A unary operation (sign or function application).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node, boxing both operands.
    ///
    /// ## Example
    /// ```
    /// use calcrs::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add, Expr::Value(2.0), Expr::Value(3.0));
    ///
    /// assert_eq!(expr.node_count(), 3);
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a unary node, boxing the operand.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }

    /// Counts the nodes in the tree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Value(_) => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Self::UnaryOp { operand, .. } => 1 + operand.node_count(),
        }
    }

    /// Length of the longest path from `self` down to a leaf, counted in
    /// nodes. A lone value has depth 1.
    ///
    /// ## Example
    /// ```
    /// use calcrs::ast::{BinaryOperator, Expr, UnaryOperator};
    ///
    /// let sum = Expr::binary(BinaryOperator::Add, Expr::Value(1.0), Expr::Value(2.0));
    /// let expr = Expr::unary(UnaryOperator::Negate, sum);
    ///
    /// assert_eq!(expr.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Value(_) => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::UnaryOp { operand, .. } => 1 + operand.depth(),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Sci => "e",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identity => f.write_str("+"),
            Self::Negate => f.write_str("-"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}
