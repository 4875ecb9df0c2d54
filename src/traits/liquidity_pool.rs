//! Liquidity provision trait extending [`SwapPool`].
//!
//! # Proportional Deposit Rule
//!
//! A deposit `(Δa, Δb)` is accepted only when it matches the current
//! reserve ratio exactly:
//!
//! ```text
//! Δa × reserve_b == Δb × reserve_a
//! ```
//!
//! Cross-multiplication keeps the check exact; no fractional ratio is
//! ever computed.  An accepted deposit therefore leaves
//! [`SwapPool::ratio`] unchanged.  There is no partial acceptance and no
//! refund of an excess side: a mismatched deposit is rejected whole.
//!
//! No LP-share token is minted; the pool only tracks reserves.

use super::SwapPool;
use crate::domain::Amount;
use crate::error::Result;

/// Pools that accept liquidity deposits.
pub trait LiquidityPool: SwapPool {
    /// Adds `token_a_added` and `token_b_added` to the reserves.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`](crate::error::PoolError::InvalidAmount)
    ///   if both amounts are zero.
    /// - [`PoolError::DisproportionateLiquidity`](crate::error::PoolError::DisproportionateLiquidity)
    ///   if the deposit does not match the reserve ratio.
    /// - [`PoolError::ArithmeticOverflow`](crate::error::PoolError::ArithmeticOverflow)
    ///   if either reserve would exceed 256 bits.
    fn add_liquidity(&mut self, token_a_added: Amount, token_b_added: Amount) -> Result<()>;
}
