//! Constant product pricing (`x × y = k`).
//!
//! # Swap Algorithm (deposit side `in`, payout side `out`)
//!
//! ```text
//! amount_out = floor(reserve_out × amount_in / (reserve_in + amount_in))
//! ```
//!
//! which equals `reserve_out − ceil(k / (reserve_in + amount_in))`: the new
//! output reserve is rounded *up*, so the product after the trade is never
//! below `k`.  The multiplication is carried out in 512 bits.
//!
//! # Example
//!
//! `reserve_in = 1000`, `reserve_out = 1000`, `amount_in = 100`:
//! `1000 × 100 / 1100 = 90.9…` → pays out `90`, leaving `(1100, 910)` with
//! `k = 1_001_000 ≥ 1_000_000`.

use primitive_types::U512;

use crate::domain::{Amount, Reserves, Rounding};
use crate::error::{PoolError, Result};
use crate::math::{CheckedArithmetic, full_mul, mul_div};
use crate::traits::PricingCurve;

/// The `x · y = k` curve.
///
/// # Example
///
/// ```rust
/// use reserve_pool::curves::ConstantProduct;
/// use reserve_pool::domain::Amount;
/// use reserve_pool::traits::PricingCurve;
///
/// let out = ConstantProduct
///     .amount_out(Amount::new(1_000), Amount::new(1_000), Amount::new(100))
///     .expect("swap ok");
/// assert_eq!(out, Amount::new(90));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConstantProduct;

impl PricingCurve for ConstantProduct {
    fn amount_out(
        &self,
        reserve_in: Amount,
        reserve_out: Amount,
        amount_in: Amount,
    ) -> Result<Amount> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidAmount);
        }

        let denominator = reserve_in.safe_add(&amount_in)?;

        let amount_out = mul_div(reserve_out, amount_in, denominator, Rounding::Down)?;

        if amount_out.is_zero() || amount_out >= reserve_out {
            return Err(PoolError::InsufficientLiquidity);
        }

        Ok(amount_out)
    }

    fn invariant(&self, reserves: &Reserves) -> U512 {
        full_mul(reserves.reserve_a(), reserves.reserve_b())
    }

    fn name(&self) -> &'static str {
        "constant_product"
    }
}
