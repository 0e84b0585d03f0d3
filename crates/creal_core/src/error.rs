use thiserror::Error;

/// Errors surfaced while constructing or approximating a [`Real`](crate::Real).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RealError {
    /// The precision fails the overflow-tolerance check: its top four bits
    /// are neither all zeros nor all ones.
    #[error("invalid precision {0}")]
    InvalidPrecision(i64),

    /// The precision exceeds the ambient limit installed by
    /// [`with_precision_limit`](crate::with_precision_limit).
    #[error("precision overflow")]
    PrecisionOverflow,

    /// A multiplicative inverse of a value that approximates to zero at the
    /// working precision.
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative value.
    #[error("square root of negative number")]
    SqrtOfNegative,

    /// Natural logarithm of a non-positive value.
    #[error("logarithm of non-positive number")]
    LnOfNonPositive,

    /// Conversion from a float that is NaN or infinite.
    #[error("not a finite number")]
    NotFinite,
}
