//! Pricing strategy trait.
//!
//! [`PricingCurve`] isolates the swap formula from reserve management.
//! The ledger asks the curve how much to pay out and what the invariant
//! quantity is; it never inspects the formula itself.  Swapping in a
//! different curve therefore never touches the reserve bookkeeping in
//! [`Pool`](crate::pools::Pool).
//!
//! # Curve Contract
//!
//! For fixed reserves `(reserve_in, reserve_out)` every implementation must
//! guarantee:
//!
//! 1. `amount_out < reserve_out`: the pool never pays out what it holds.
//! 2. `amount_out` is non-decreasing in `amount_in`.
//! 3. `invariant(after) >= invariant(before)` for the reserves produced by
//!    `reserve_in += amount_in; reserve_out -= amount_out`.
//!
//! The ledger re-checks (1) and (3) on every swap and rejects the call if a
//! curve breaks them.

use primitive_types::U512;

use crate::domain::{Amount, Reserves};
use crate::error::Result;

/// Swap pricing formula plugged into a [`Pool`](crate::pools::Pool).
///
/// # Implementors
///
/// - [`ConstantProduct`](crate::curves::ConstantProduct): `x · y = k`
/// - [`ConstantSum`](crate::curves::ConstantSum): `x + y = k`
///   (`constant-sum` feature)
/// - [`Curve`](crate::curves::Curve): enum dispatch over the above
pub trait PricingCurve {
    /// Computes the payout for depositing `amount_in` against the oriented
    /// reserves.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`](crate::error::PoolError::InvalidAmount)
    ///   if `amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`](crate::error::PoolError::InsufficientLiquidity)
    ///   if the payout is zero or would empty `reserve_out`.
    /// - [`PoolError::ArithmeticOverflow`](crate::error::PoolError::ArithmeticOverflow)
    ///   on range violations.
    fn amount_out(
        &self,
        reserve_in: Amount,
        reserve_out: Amount,
        amount_in: Amount,
    ) -> Result<Amount>;

    /// Returns the quantity this curve keeps non-decreasing across swaps.
    #[must_use]
    fn invariant(&self, reserves: &Reserves) -> U512;

    /// Short identifier used in logs and configuration.
    #[must_use]
    fn name(&self) -> &'static str;
}
