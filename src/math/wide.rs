//! 512-bit intermediates for products of two 256-bit amounts.
//!
//! Reserve products such as `reserve_in × reserve_out` can exceed 256 bits
//! even when every stored value fits.  These helpers multiply into a
//! [`U512`] and narrow back only the final quotient, so the ledger rejects
//! a result only when the *result* is out of range.

use primitive_types::{U256, U512};

use crate::domain::{Amount, Rounding};
use crate::error::{PoolError, Result};

/// Exact product of two amounts.
#[must_use]
pub fn full_mul(a: Amount, b: Amount) -> U512 {
    a.get().full_mul(b.get())
}

/// Widens an amount to 512 bits.
#[must_use]
pub fn widen(a: Amount) -> U512 {
    U512::from(a.get())
}

/// Computes `a × b / denominator` with explicit rounding.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if `denominator` is zero.
/// - [`PoolError::ArithmeticOverflow`] if the quotient exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::{Amount, Rounding};
/// use reserve_pool::math::mul_div;
///
/// assert_eq!(mul_div(Amount::new(10), Amount::new(10), Amount::new(3), Rounding::Down), Ok(Amount::new(33)));
/// assert_eq!(mul_div(Amount::new(10), Amount::new(10), Amount::new(3), Rounding::Up), Ok(Amount::new(34)));
/// ```
pub fn mul_div(a: Amount, b: Amount, denominator: Amount, rounding: Rounding) -> Result<Amount> {
    if denominator.is_zero() {
        return Err(PoolError::DivisionByZero);
    }
    let numerator = full_mul(a, b);
    let denominator = widen(denominator);
    let mut quotient = numerator / denominator;
    // A non-zero remainder implies denominator > 1, so the increment cannot wrap.
    if rounding.is_up() && !(numerator % denominator).is_zero() {
        quotient = quotient + U512::one();
    }
    U256::try_from(quotient)
        .map(Amount::from_u256)
        .map_err(|_| PoolError::ArithmeticOverflow("mul_div quotient exceeds 256 bits"))
}
