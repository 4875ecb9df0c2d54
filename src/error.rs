//! Unified error type for the reserve pool ledger.
//!
//! Every fallible operation returns [`PoolError`].  Each rejected
//! precondition has its own variant so callers can assert on the failure
//! reason rather than on failure alone.  A call that returns an error has
//! left the pool untouched.

use thiserror::Error;

/// Errors produced by the pool ledger.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolError {
    /// A read or write reached a ledger that was never constructed.
    #[error("pool has not been constructed")]
    Uninitialized,

    /// `construct` was called on a ledger that is already active.
    #[error("pool has already been constructed")]
    AlreadyInitialized,

    /// One of the constructor reserves was zero.
    #[error("initial reserves must both be positive")]
    InvalidInitialLiquidity,

    /// A zero amount was supplied where a positive one is required.
    #[error("amount must be positive")]
    InvalidAmount,

    /// A deposit does not match the current reserve ratio exactly.
    #[error("deposit does not preserve the pool ratio")]
    DisproportionateLiquidity,

    /// The pool cannot pay out without draining a reserve, or the output
    /// rounds down to nothing.
    #[error("insufficient liquidity for this swap")]
    InsufficientLiquidity,

    /// A pricing curve produced a trade that would lower its own invariant.
    #[error("swap would decrease the pricing invariant")]
    InvariantViolation,

    /// A result exceeded the 256-bit range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A subtraction went below zero.
    #[error("arithmetic underflow: {0}")]
    ArithmeticUnderflow(&'static str),

    /// A division had a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// A pool configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = PoolError::ArithmeticOverflow("reserve_a overflow on add");
        assert_eq!(
            err.to_string(),
            "arithmetic overflow: reserve_a overflow on add"
        );
    }

    #[test]
    fn variants_are_distinct() {
        assert_ne!(PoolError::InvalidAmount, PoolError::InsufficientLiquidity);
        assert_ne!(
            PoolError::ArithmeticOverflow("x"),
            PoolError::ArithmeticUnderflow("x")
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&PoolError::Uninitialized);
    }
}
