use crate::ast::Function;

impl Function {
    /// Applies the function to a number.
    ///
    /// Trigonometric functions work in radians. Out-of-domain arguments are
    /// not rejected; `ln(0)` is negative infinity and `acos(2)` is NaN.
    ///
    /// # Example
    /// ```
    /// use calcrs::ast::Function;
    ///
    /// assert_eq!(Function::Log.apply(100.0), 2.0);
    /// assert_eq!(Function::Sqrt.apply(16.0), 4.0);
    /// assert!(Function::Sqrt.apply(-1.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Exp => x.exp(),
            Self::Sqrt => x.sqrt(),
            Self::Abs => x.abs(),
            Self::Atan => x.atan(),
            Self::Acos => x.acos(),
            Self::Asin => x.asin(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Tan => x.tan(),
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
        }
    }
}
