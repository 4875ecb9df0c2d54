//! Result of a committed or quoted swap.

use core::fmt;

use super::{Amount, RATIO_SCALE, Rounding, TokenSide};
use crate::error::{PoolError, Result};
use crate::math::mul_div;

/// The amounts exchanged by one swap.
///
/// # Invariants
///
/// - `amount_in > 0`
/// - `amount_out > 0`
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::{Amount, SwapOutcome, TokenSide};
///
/// let out = SwapOutcome::new(TokenSide::A, Amount::new(100), Amount::new(90));
/// assert!(out.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SwapOutcome {
    side_in: TokenSide,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapOutcome {
    /// Creates a validated outcome.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if `amount_out` is zero.
    pub fn new(side_in: TokenSide, amount_in: Amount, amount_out: Amount) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidAmount);
        }
        if amount_out.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }
        Ok(Self {
            side_in,
            amount_in,
            amount_out,
        })
    }

    /// Returns the token deposited into the pool.
    #[must_use]
    pub const fn side_in(&self) -> TokenSide {
        self.side_in
    }

    /// Returns the token paid out by the pool.
    #[must_use]
    pub const fn side_out(&self) -> TokenSide {
        self.side_in.opposite()
    }

    /// Returns the deposited amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the paid-out amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Realized rate `amount_out × RATIO_SCALE / amount_in`, floored.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticOverflow`] if the scaled rate does not
    /// fit in 256 bits.
    pub fn effective_rate(&self) -> Result<Amount> {
        mul_div(
            self.amount_out,
            Amount::new(RATIO_SCALE),
            self.amount_in,
            Rounding::Down,
        )
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.amount_in,
            self.side_in,
            self.amount_out,
            self.side_out()
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn zero_in_rejected() {
        assert_eq!(
            SwapOutcome::new(TokenSide::A, Amount::ZERO, Amount::new(1)),
            Err(PoolError::InvalidAmount)
        );
    }

    #[test]
    fn zero_out_rejected() {
        assert_eq!(
            SwapOutcome::new(TokenSide::A, Amount::new(1), Amount::ZERO),
            Err(PoolError::InsufficientLiquidity)
        );
    }

    #[test]
    fn sides_and_rate() {
        let Ok(o) = SwapOutcome::new(TokenSide::B, Amount::new(200), Amount::new(50)) else {
            panic!("valid outcome");
        };
        assert_eq!(o.side_in(), TokenSide::B);
        assert_eq!(o.side_out(), TokenSide::A);
        assert_eq!(o.effective_rate(), Ok(Amount::new(RATIO_SCALE / 4)));
        assert_eq!(o.to_string(), "200 B -> 50 A");
    }
}
