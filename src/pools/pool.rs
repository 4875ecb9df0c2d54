//! The two-token reserve pool ledger.
//!
//! [`Pool`] owns the reserve pair and a [`PricingCurve`].  It is mutated
//! only by [`add_liquidity`](LiquidityPool::add_liquidity) and
//! [`swap_tokens`](SwapPool::swap_tokens).
//!
//! # Atomicity
//!
//! Every mutating operation computes the complete next [`Reserves`] value
//! in locals and assigns it in a single statement after all checks have
//! passed.  A rejected call leaves the pool exactly as it was.
//!
//! # Swap Algorithm (deposit side `in`)
//!
//! 1. Reject `amount == 0` with [`PoolError::InvalidAmount`].
//! 2. `amount_out = curve.amount_out(reserve_in, reserve_out, amount)`
//! 3. Require `0 < amount_out < reserve_out`.
//! 4. `reserve_in += amount`, `reserve_out -= amount_out` (checked).
//! 5. Require `curve.invariant(after) >= curve.invariant(before)`.
//! 6. Commit.

use primitive_types::U512;

use super::{CallOutput, PoolCall};
use crate::config::PoolConfig;
use crate::curves::Curve;
use crate::domain::{Amount, Reserves, SwapOutcome, TokenSide};
use crate::error::{PoolError, Result};
use crate::math::{CheckedArithmetic, full_mul};
use crate::traits::{FromConfig, LiquidityPool, PricingCurve, SwapPool};

/// A single two-token reserve pool.
///
/// # State
///
/// - `reserves`: current token balances, both strictly positive.
/// - `curve`: pricing strategy, fixed at construction.
///
/// # Example
///
/// ```rust
/// use reserve_pool::domain::Amount;
/// use reserve_pool::pools::Pool;
/// use reserve_pool::traits::{LiquidityPool, SwapPool};
///
/// let mut pool = Pool::construct(Amount::new(1_000), Amount::new(1_000)).expect("positive");
///
/// let out = pool.swap_tokens(Amount::new(100), true).expect("swap ok");
/// assert_eq!(out, Amount::new(90));
/// assert_eq!(pool.view_token_a(), Amount::new(1_100));
/// assert_eq!(pool.view_token_b(), Amount::new(910));
///
/// // 1100 : 910 scaled by 10
/// pool.add_liquidity(Amount::new(110), Amount::new(91)).expect("proportional");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool<C = Curve> {
    reserves: Reserves,
    curve: C,
}

impl Pool {
    /// Creates a constant-product pool holding `initial_a` and `initial_b`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidInitialLiquidity`] if either amount is zero.
    /// - [`PoolError::ArithmeticOverflow`] if `initial_b * RATIO_SCALE /
    ///   initial_a` does not fit in 256 bits.
    pub fn construct(initial_a: Amount, initial_b: Amount) -> Result<Self> {
        Self::with_curve(initial_a, initial_b, Curve::default())
    }
}

impl<C: PricingCurve> Pool<C> {
    /// Creates a pool priced by `curve`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidInitialLiquidity`] if either amount is zero.
    /// - [`PoolError::ArithmeticOverflow`] if `initial_b * RATIO_SCALE /
    ///   initial_a` does not fit in 256 bits.
    pub fn with_curve(initial_a: Amount, initial_b: Amount, curve: C) -> Result<Self> {
        let reserves = Reserves::new(initial_a, initial_b)?;
        tracing::debug!(
            curve = curve.name(),
            reserve_a = %initial_a,
            reserve_b = %initial_b,
            "pool constructed"
        );
        Ok(Self { reserves, curve })
    }

    /// Returns the pricing curve.
    pub const fn curve(&self) -> &C {
        &self.curve
    }

    /// Returns the curve's invariant for the current reserves.
    #[must_use]
    pub fn invariant(&self) -> U512 {
        self.curve.invariant(&self.reserves)
    }

    /// Public getter for reserve A; same value as
    /// [`view_token_a`](SwapPool::view_token_a).
    pub const fn token_a(&self) -> Amount {
        self.reserves.reserve_a()
    }

    /// Public getter for reserve B; same value as
    /// [`view_token_b`](SwapPool::view_token_b).
    pub const fn token_b(&self) -> Amount {
        self.reserves.reserve_b()
    }

    /// Executes one [`PoolCall`].
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation returns.
    pub fn apply(&mut self, call: PoolCall) -> Result<CallOutput> {
        match call {
            PoolCall::AddLiquidity {
                token_a_added,
                token_b_added,
            } => self
                .add_liquidity(token_a_added, token_b_added)
                .map(|()| CallOutput::Unit),
            PoolCall::SwapTokens { amount, is_token_a } => self
                .swap_tokens(amount, is_token_a)
                .map(CallOutput::Value),
            read => self.query(read),
        }
    }

    /// Evaluates one [`PoolCall`] without changing the reserves.
    ///
    /// Reads return the same value as [`apply`](Pool::apply).  Mutating
    /// calls are dry runs: they return exactly what `apply` would return
    /// against the current reserves, but nothing is committed.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation returns.
    pub fn query(&self, call: PoolCall) -> Result<CallOutput> {
        match call {
            PoolCall::AddLiquidity {
                token_a_added,
                token_b_added,
            } => self
                .simulate_add(token_a_added, token_b_added)
                .map(|_| CallOutput::Unit),
            PoolCall::SwapTokens { amount, is_token_a } => self
                .quote_swap(amount, is_token_a)
                .map(|outcome| CallOutput::Value(outcome.amount_out())),
            PoolCall::Ratio => self.ratio().map(CallOutput::Value),
            PoolCall::ViewTokenA | PoolCall::TokenA => Ok(CallOutput::Value(self.token_a())),
            PoolCall::ViewTokenB | PoolCall::TokenB => Ok(CallOutput::Value(self.token_b())),
        }
    }

    /// Runs the swap algorithm against the current reserves and returns
    /// the outcome together with the reserves it would leave behind.
    fn simulate_swap(&self, amount: Amount, side_in: TokenSide) -> Result<(SwapOutcome, Reserves)> {
        if amount.is_zero() {
            return Err(PoolError::InvalidAmount);
        }

        let (reserve_in, reserve_out) = self.reserves.oriented(side_in);
        let amount_out = self.curve.amount_out(reserve_in, reserve_out, amount)?;

        // Curves may be supplied by callers; the payout bound is enforced here too.
        if amount_out.is_zero() || amount_out >= reserve_out {
            return Err(PoolError::InsufficientLiquidity);
        }

        let new_reserve_in = reserve_in.safe_add(&amount)?;
        let new_reserve_out = reserve_out.safe_sub(&amount_out)?;
        let next = Reserves::from_oriented(side_in, new_reserve_in, new_reserve_out)?;

        if self.curve.invariant(&next) < self.curve.invariant(&self.reserves) {
            return Err(PoolError::InvariantViolation);
        }

        let outcome = SwapOutcome::new(side_in, amount, amount_out)?;
        Ok((outcome, next))
    }

    /// Checks a deposit against the current reserves and returns the
    /// reserves it would leave behind.
    fn simulate_add(&self, token_a_added: Amount, token_b_added: Amount) -> Result<Reserves> {
        if token_a_added.is_zero() && token_b_added.is_zero() {
            return Err(PoolError::InvalidAmount);
        }

        let reserve_a = self.reserves.reserve_a();
        let reserve_b = self.reserves.reserve_b();

        // Δa × Rb == Δb × Ra, evaluated in 512 bits.
        if full_mul(token_a_added, reserve_b) != full_mul(token_b_added, reserve_a) {
            return Err(PoolError::DisproportionateLiquidity);
        }

        Reserves::new(
            reserve_a.safe_add(&token_a_added)?,
            reserve_b.safe_add(&token_b_added)?,
        )
    }
}

impl FromConfig<PoolConfig> for Pool {
    /// Creates a pool from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        Self::with_curve(config.reserve_a(), config.reserve_b(), config.curve())
    }
}

impl<C: PricingCurve> SwapPool for Pool<C> {
    fn swap_tokens(&mut self, amount: Amount, is_token_a: bool) -> Result<Amount> {
        let side_in = TokenSide::from_is_token_a(is_token_a);
        let (outcome, next) = self.simulate_swap(amount, side_in)?;
        self.reserves = next;
        tracing::debug!(
            curve = self.curve.name(),
            side_in = %side_in,
            amount_in = %outcome.amount_in(),
            amount_out = %outcome.amount_out(),
            reserve_a = %next.reserve_a(),
            reserve_b = %next.reserve_b(),
            "swap committed"
        );
        Ok(outcome.amount_out())
    }

    fn quote_swap(&self, amount: Amount, is_token_a: bool) -> Result<SwapOutcome> {
        self.simulate_swap(amount, TokenSide::from_is_token_a(is_token_a))
            .map(|(outcome, _)| outcome)
    }

    fn ratio(&self) -> Result<Amount> {
        self.reserves.ratio()
    }

    fn view_token_a(&self) -> Amount {
        self.reserves.reserve_a()
    }

    fn view_token_b(&self) -> Amount {
        self.reserves.reserve_b()
    }

    fn reserves(&self) -> Reserves {
        self.reserves
    }
}

impl<C: PricingCurve> LiquidityPool for Pool<C> {
    fn add_liquidity(&mut self, token_a_added: Amount, token_b_added: Amount) -> Result<()> {
        let next = self.simulate_add(token_a_added, token_b_added)?;
        self.reserves = next;
        tracing::debug!(
            token_a_added = %token_a_added,
            token_b_added = %token_b_added,
            reserve_a = %next.reserve_a(),
            reserve_b = %next.reserve_b(),
            "liquidity added"
        );
        Ok(())
    }
}
