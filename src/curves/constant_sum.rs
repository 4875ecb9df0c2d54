//! Constant sum pricing (`x + y = k`).
//!
//! Every unit deposited buys exactly one unit of the other token, as long
//! as the pool keeps at least one unit of the output token afterwards.
//! Suited to pairs that are pegged to each other.

use primitive_types::U512;

use crate::domain::{Amount, Reserves};
use crate::error::{PoolError, Result};
use crate::math::widen;
use crate::traits::PricingCurve;

/// The `x + y = k` curve: a fixed 1:1 exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConstantSum;

impl PricingCurve for ConstantSum {
    fn amount_out(
        &self,
        _reserve_in: Amount,
        reserve_out: Amount,
        amount_in: Amount,
    ) -> Result<Amount> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidAmount);
        }
        if amount_in >= reserve_out {
            return Err(PoolError::InsufficientLiquidity);
        }
        Ok(amount_in)
    }

    fn invariant(&self, reserves: &Reserves) -> U512 {
        widen(reserves.reserve_a()) + widen(reserves.reserve_b())
    }

    fn name(&self) -> &'static str {
        "constant_sum"
    }
}
