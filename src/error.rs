use std::fmt::Debug;

#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// The concrete type of an expression is not what was expected. For
    /// example, when the output of a differentiation is a different kind of
    /// term than the one being differentiated.
    TypeMismatch,
    /// A runtime sized input does not match the number of variables of the
    /// monomial. Contains the actual and the expected length.
    DimensionMismatch(usize, usize),
    /// Index out of bounds,
    IndexOutOfBounds(usize, usize),

    // Interval evaluation.
    /// An interval could not be constructed from the given bounds.
    InvalidInterval,
    /// The exponent cannot be used as an integer power.
    ExponentOverflow(u32),

    // Derivatives.
    CannotComputeNumericDerivative,
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            TypeMismatch => write!(f, "TypeMismatch"),
            DimensionMismatch(actual, expected) => f
                .debug_tuple("DimensionMismatch")
                .field(actual)
                .field(expected)
                .finish(),
            IndexOutOfBounds(a, b) => f.debug_tuple("IndexOutOfBounds").field(a).field(b).finish(),
            InvalidInterval => write!(f, "InvalidInterval"),
            ExponentOverflow(exp) => f.debug_tuple("ExponentOverflow").field(exp).finish(),
            CannotComputeNumericDerivative => write!(f, "CannotComputeNumericDerivative"),
        }
    }
}
