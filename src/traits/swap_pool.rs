//! Swap and read surface of a pool.
//!
//! [`SwapPool`] covers `swapTokens` and the read-only queries
//! (`ratio`, `viewTokenA`, `viewTokenB`).
//!
//! # Atomicity
//!
//! [`SwapPool::swap_tokens`] either commits both reserve updates and
//! returns the payout, or returns an error with the reserves untouched.
//! There are no partial fills.

use crate::domain::{Amount, Reserves, SwapOutcome};
use crate::error::Result;

/// Swap execution and reserve queries.
///
/// # Errors
///
/// Methods that can fail return [`Result`].  Common variants:
///
/// - [`PoolError::InvalidAmount`](crate::error::PoolError::InvalidAmount): zero input
/// - [`PoolError::InsufficientLiquidity`](crate::error::PoolError::InsufficientLiquidity): payout rounds to zero or would drain a reserve
/// - [`PoolError::ArithmeticOverflow`](crate::error::PoolError::ArithmeticOverflow): 256-bit range exceeded
pub trait SwapPool {
    /// Deposits `amount` of token A (`is_token_a == true`) or token B and
    /// pays out the opposite token.  Returns the amount paid out.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`](crate::error::PoolError::InvalidAmount) if `amount` is zero.
    /// - [`PoolError::InsufficientLiquidity`](crate::error::PoolError::InsufficientLiquidity) if the payout is zero or would empty the output reserve.
    /// - [`PoolError::ArithmeticOverflow`](crate::error::PoolError::ArithmeticOverflow) if the input reserve would exceed 256 bits.
    fn swap_tokens(&mut self, amount: Amount, is_token_a: bool) -> Result<Amount>;

    /// Computes what [`swap_tokens`](Self::swap_tokens) would do without
    /// mutating the pool.
    ///
    /// # Errors
    ///
    /// Same as [`swap_tokens`](Self::swap_tokens).
    fn quote_swap(&self, amount: Amount, is_token_a: bool) -> Result<SwapOutcome>;

    /// Returns `reserve_b × RATIO_SCALE / reserve_a`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ArithmeticOverflow`](crate::error::PoolError::ArithmeticOverflow) if the scaled ratio exceeds 256 bits.
    ///   [`Reserves`] refuses such pairs, so pools built on it never return this.
    fn ratio(&self) -> Result<Amount>;

    /// Returns the current reserve of token A.
    fn view_token_a(&self) -> Amount;

    /// Returns the current reserve of token B.
    fn view_token_b(&self) -> Amount;

    /// Returns both reserves from one observation.
    #[must_use]
    fn reserves(&self) -> Reserves;
}
