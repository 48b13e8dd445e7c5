//! Error types.

use num_bigint::BigInt;

/// Curve parameter and point arithmetic errors.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The modulus is too small to define a prime field (`p <= 2`).
    #[error("modulus {0} is invalid (<= 2)")]
    InvalidModulus(BigInt),

    /// The modulus is composite.
    #[error("modulus {0} is not prime")]
    NonPrimeModulus(BigInt),

    /// `4a³ + 27b²` vanishes modulo `p`.
    #[error("curve is singular: 4a^3 + 27b^2 = 0 mod p (a={a}, b={b}, p={p})")]
    SingularCurve {
        /// Coefficient `a`.
        a: BigInt,
        /// Coefficient `b`.
        b: BigInt,
        /// Modulus `p`.
        p: BigInt,
    },

    /// An operand is not a point of the curve it was used with.
    #[error("point {0} is not on the curve")]
    InvalidPoint(String),

    /// No `y` satisfies the curve equation for this `x`.
    #[error("no point on the curve has x = {0}")]
    NoSolution(BigInt),

    /// Attempted to invert a multiple of the modulus.
    #[error("{value} has no inverse modulo {modulus}")]
    ZeroDivision {
        /// Value that was inverted.
        value: BigInt,
        /// Modulus `p`.
        modulus: BigInt,
    },

    /// No `x` in `[1, p)` has a point to start enumeration from.
    #[error("curve has no affine point to enumerate from")]
    EmptyCurve,
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
