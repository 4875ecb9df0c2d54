//! Consistent snapshot of both pool reserves.

use core::fmt;

use super::{Amount, Rounding, TokenSide};
use crate::error::{PoolError, Result};
use crate::math::mul_div;

/// Fixed-point scale of [`Reserves::ratio`]: the ratio is token B per
/// token A, multiplied by `10^18`.
pub const RATIO_SCALE: u128 = 1_000_000_000_000_000_000;

/// The pair of reserve counters, read or written together.
///
/// A `Reserves` value is always taken from a single observation of the
/// pool, so `reserve_a` and `reserve_b` never straddle an update.  Values
/// built through [`Reserves::new`] are strictly positive on both sides and
/// their [`ratio`](Reserves::ratio) fits in 256 bits, so every pool state
/// has a readable ratio.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::{Amount, Reserves, RATIO_SCALE};
///
/// let r = Reserves::new(Amount::new(1_000), Amount::new(2_000)).expect("positive");
/// assert_eq!(r.ratio().expect("fits"), Amount::new(2 * RATIO_SCALE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reserves {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl Reserves {
    /// Creates a reserve pair.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidInitialLiquidity`] if either side is zero.
    /// - [`PoolError::ArithmeticOverflow`] if `reserve_b × RATIO_SCALE /
    ///   reserve_a` does not fit in 256 bits.
    pub fn new(reserve_a: Amount, reserve_b: Amount) -> Result<Self> {
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Err(PoolError::InvalidInitialLiquidity);
        }
        let reserves = Self {
            reserve_a,
            reserve_b,
        };
        reserves
            .scaled_ratio()
            .map_err(|_| PoolError::ArithmeticOverflow("reserve ratio exceeds 256 bits"))?;
        Ok(reserves)
    }

    /// Returns the reserve of token A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of token B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the reserve held on `side`.
    pub const fn of(&self, side: TokenSide) -> Amount {
        match side {
            TokenSide::A => self.reserve_a,
            TokenSide::B => self.reserve_b,
        }
    }

    /// Orients the pair for a swap depositing `side_in`:
    /// returns `(reserve_in, reserve_out)`.
    #[must_use]
    pub const fn oriented(&self, side_in: TokenSide) -> (Amount, Amount) {
        match side_in {
            TokenSide::A => (self.reserve_a, self.reserve_b),
            TokenSide::B => (self.reserve_b, self.reserve_a),
        }
    }

    /// Inverse of [`oriented`](Self::oriented).
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientLiquidity`] if either side is zero, which
    ///   would mean a swap drained the pool.
    /// - [`PoolError::ArithmeticOverflow`] if the resulting ratio does not fit
    ///   in 256 bits.
    pub fn from_oriented(
        side_in: TokenSide,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Self> {
        let (reserve_a, reserve_b) = match side_in {
            TokenSide::A => (reserve_in, reserve_out),
            TokenSide::B => (reserve_out, reserve_in),
        };
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }
        Self::new(reserve_a, reserve_b)
    }

    /// Price indicator: `reserve_b × RATIO_SCALE / reserve_a`, floored.
    ///
    /// # Errors
    ///
    /// None for values built through [`Reserves::new`], which rejects pairs
    /// whose ratio is unrepresentable.  The `Result` keeps the signature
    /// shared with [`SwapPool::ratio`](crate::traits::SwapPool::ratio).
    pub fn ratio(&self) -> Result<Amount> {
        self.scaled_ratio()
    }

    fn scaled_ratio(&self) -> Result<Amount> {
        mul_div(
            self.reserve_b,
            Amount::new(RATIO_SCALE),
            self.reserve_a,
            Rounding::Down,
        )
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A={} B={}", self.reserve_a, self.reserve_b)
    }
}
