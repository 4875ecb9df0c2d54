//! Thread-safe handle over a single pool ledger.
//!
//! [`SharedPool`] wraps an optional [`Pool`] in an `Arc<RwLock<_>>` so any
//! number of callers can hold the same ledger.  The ledger starts out
//! uninitialized; [`construct`](SharedPool::construct) activates it exactly
//! once.
//!
//! Reads take the shared lock and run concurrently.  `add_liquidity` and
//! `swap_tokens` take the exclusive lock, so state transitions are
//! linearizable and a swap always observes the result of the previous one.

use std::sync::Arc;

use parking_lot::RwLock;
use primitive_types::U512;

use super::{CallOutput, Pool, PoolCall};
use crate::config::PoolConfig;
use crate::curves::Curve;
use crate::domain::{Amount, Reserves, SwapOutcome};
use crate::error::{PoolError, Result};
use crate::traits::{FromConfig, LiquidityPool, PricingCurve, SwapPool};

/// Cloneable, lock-protected pool ledger.
///
/// Cloning the handle shares the ledger; it does not copy it.
///
/// # Example
///
/// ```rust
/// use reserve_pool::domain::Amount;
/// use reserve_pool::pools::SharedPool;
///
/// let ledger = SharedPool::new();
/// ledger.construct(Amount::new(1_000), Amount::new(1_000)).expect("first construct");
///
/// let handle = ledger.clone();
/// let out = handle.swap_tokens(Amount::new(100), true).expect("swap ok");
///
/// assert_eq!(out, Amount::new(90));
/// assert_eq!(ledger.view_token_b(), Ok(Amount::new(910)));
/// ```
#[derive(Debug)]
pub struct SharedPool<C = Curve> {
    inner: Arc<RwLock<Option<Pool<C>>>>,
}

impl<C> Clone for SharedPool<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> Default for SharedPool<C> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }
}

impl SharedPool {
    /// Creates an uninitialized ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates the ledger with a constant-product pool.
    ///
    /// # Errors
    ///
    /// - [`PoolError::AlreadyInitialized`] if the ledger is already active.
    /// - [`PoolError::InvalidInitialLiquidity`] if either amount is zero.
    /// - [`PoolError::ArithmeticOverflow`] if the ratio of B to A does not
    ///   fit in 256 bits.
    pub fn construct(&self, initial_a: Amount, initial_b: Amount) -> Result<()> {
        self.construct_with(initial_a, initial_b, Curve::default())
    }

    /// Creates an active ledger from a configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Pool::from_config`].
    pub fn from_config(config: &PoolConfig) -> Result<Self> {
        Pool::from_config(config).map(Self::from_pool)
    }
}

impl<C: PricingCurve> SharedPool<C> {
    /// Wraps an already constructed pool.
    #[must_use]
    pub fn from_pool(pool: Pool<C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(pool))),
        }
    }

    /// Activates the ledger with a pool priced by `curve`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::AlreadyInitialized`] if the ledger is already active.
    /// - Any error from [`Pool::with_curve`]; the ledger stays uninitialized.
    pub fn construct_with(&self, initial_a: Amount, initial_b: Amount, curve: C) -> Result<()> {
        let mut guard = self.inner.write();
        let pool = if guard.is_some() {
            Err(PoolError::AlreadyInitialized)
        } else {
            Pool::with_curve(initial_a, initial_b, curve)
        }
        .inspect_err(|err| tracing::warn!(%err, "construct rejected"))?;
        *guard = Some(pool);
        Ok(())
    }

    /// Returns `true` once [`construct`](SharedPool::construct) has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.read().is_some()
    }

    /// See [`LiquidityPool::add_liquidity`].
    ///
    /// # Errors
    ///
    /// [`PoolError::Uninitialized`] before construct, otherwise whatever the
    /// pool returns.
    pub fn add_liquidity(&self, token_a_added: Amount, token_b_added: Amount) -> Result<()> {
        self.write(|pool| pool.add_liquidity(token_a_added, token_b_added))
    }

    /// See [`SwapPool::swap_tokens`].
    ///
    /// # Errors
    ///
    /// [`PoolError::Uninitialized`] before construct, otherwise whatever the
    /// pool returns.
    pub fn swap_tokens(&self, amount: Amount, is_token_a: bool) -> Result<Amount> {
        self.write(|pool| pool.swap_tokens(amount, is_token_a))
    }

    /// See [`SwapPool::quote_swap`].
    ///
    /// # Errors
    ///
    /// [`PoolError::Uninitialized`] before construct, otherwise whatever the
    /// pool returns.
    pub fn quote_swap(&self, amount: Amount, is_token_a: bool) -> Result<SwapOutcome> {
        self.read(|pool| pool.quote_swap(amount, is_token_a))
    }

    /// See [`SwapPool::ratio`].
    ///
    /// # Errors
    ///
    /// [`PoolError::Uninitialized`] before construct.
    pub fn ratio(&self) -> Result<Amount> {
        self.read(|pool| pool.ratio())
    }

    /// See [`SwapPool::view_token_a`].
    ///
    /// # Errors
    ///
    /// [`PoolError::Uninitialized`] before construct.
    pub fn view_token_a(&self) -> Result<Amount> {
        self.read(|pool| Ok(pool.view_token_a()))
    }

    /// See [`SwapPool::view_token_b`].
    ///
    /// # Errors
    ///
    /// [`PoolError::Uninitialized`] before construct.
    pub fn view_token_b(&self) -> Result<Amount> {
        self.read(|pool| Ok(pool.view_token_b()))
    }

    /// Both reserves read under one lock.
    ///
    /// # Errors
    ///
    /// [`PoolError::Uninitialized`] before construct.
    pub fn reserves(&self) -> Result<Reserves> {
        self.read(|pool| Ok(pool.reserves()))
    }

    /// The curve invariant for the current reserves.
    ///
    /// # Errors
    ///
    /// [`PoolError::Uninitialized`] before construct.
    pub fn invariant(&self) -> Result<U512> {
        self.read(|pool| Ok(pool.invariant()))
    }

    /// Executes one [`PoolCall`], taking the exclusive lock only for
    /// mutating calls.
    ///
    /// # Errors
    ///
    /// [`PoolError::Uninitialized`] before construct, otherwise whatever the
    /// pool returns.
    pub fn apply(&self, call: PoolCall) -> Result<CallOutput> {
        tracing::trace!(%call, "dispatching call");
        if call.is_mutating() {
            self.write(|pool| pool.apply(call))
        } else {
            self.read(|pool| pool.query(call))
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Pool<C>) -> Result<T>) -> Result<T> {
        let guard = self.inner.read();
        guard
            .as_ref()
            .ok_or(PoolError::Uninitialized)
            .and_then(f)
            .inspect_err(|err| tracing::warn!(%err, "pool read rejected"))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Pool<C>) -> Result<T>) -> Result<T> {
        let mut guard = self.inner.write();
        guard
            .as_mut()
            .ok_or(PoolError::Uninitialized)
            .and_then(f)
            .inspect_err(|err| tracing::warn!(%err, "pool call rejected"))
    }
}

impl<C: PricingCurve + Clone> SharedPool<C> {
    /// Returns a copy of the pool as it is right now.
    ///
    /// # Errors
    ///
    /// [`PoolError::Uninitialized`] before construct.
    pub fn snapshot(&self) -> Result<Pool<C>> {
        self.read(|pool| Ok(pool.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::thread;

    use super::*;
    use crate::math::full_mul;

    fn active(a: u128, b: u128) -> SharedPool {
        let ledger = SharedPool::new();
        let Ok(()) = ledger.construct(Amount::new(a), Amount::new(b)) else {
            panic!("expected construct to succeed");
        };
        ledger
    }

    #[test]
    fn uninitialized_rejects_everything() {
        let ledger = SharedPool::new();
        assert!(!ledger.is_initialized());
        assert_eq!(ledger.view_token_a(), Err(PoolError::Uninitialized));
        assert_eq!(ledger.view_token_b(), Err(PoolError::Uninitialized));
        assert_eq!(ledger.ratio(), Err(PoolError::Uninitialized));
        assert_eq!(
            ledger.swap_tokens(Amount::new(1), true),
            Err(PoolError::Uninitialized)
        );
        assert_eq!(
            ledger.add_liquidity(Amount::new(1), Amount::new(1)),
            Err(PoolError::Uninitialized)
        );
        assert_eq!(ledger.apply(PoolCall::TokenA), Err(PoolError::Uninitialized));
    }

    #[test]
    fn construct_once() {
        let ledger = active(1_000, 1_000);
        assert!(ledger.is_initialized());
        assert_eq!(
            ledger.construct(Amount::new(5), Amount::new(5)),
            Err(PoolError::AlreadyInitialized)
        );
        assert_eq!(ledger.view_token_a(), Ok(Amount::new(1_000)));
    }

    #[test]
    fn failed_construct_leaves_ledger_inactive() {
        let ledger = SharedPool::new();
        assert_eq!(
            ledger.construct(Amount::ZERO, Amount::new(5)),
            Err(PoolError::InvalidInitialLiquidity)
        );
        assert!(!ledger.is_initialized());
        assert_eq!(ledger.construct(Amount::new(5), Amount::new(5)), Ok(()));
    }

    #[test]
    fn construct_rejects_unrepresentable_ratio() {
        let ledger = SharedPool::new();
        let wide = Amount::from_u256(primitive_types::U256::exp10(60));
        let Err(PoolError::ArithmeticOverflow(_)) = ledger.construct(Amount::ONE, wide) else {
            panic!("expected ArithmeticOverflow");
        };
        assert!(!ledger.is_initialized());
        assert_eq!(ledger.construct(Amount::new(1_000_000), wide), Ok(()));
        assert!(ledger.ratio().is_ok());
    }

    #[test]
    fn clones_share_state() {
        let ledger = active(1_000, 1_000);
        let other = ledger.clone();
        assert_eq!(other.swap_tokens(Amount::new(100), true), Ok(Amount::new(90)));
        assert_eq!(ledger.view_token_a(), Ok(Amount::new(1_100)));
        assert_eq!(ledger.view_token_b(), Ok(Amount::new(910)));
    }

    #[test]
    fn apply_reads_and_writes() {
        let ledger = active(500, 500);
        let add = PoolCall::AddLiquidity {
            token_a_added: Amount::new(50),
            token_b_added: Amount::new(50),
        };
        assert_eq!(ledger.apply(add), Ok(CallOutput::Unit));
        assert_eq!(
            ledger.apply(PoolCall::ViewTokenA),
            Ok(CallOutput::Value(Amount::new(550)))
        );
        assert_eq!(
            ledger.apply(PoolCall::TokenB),
            Ok(CallOutput::Value(Amount::new(550)))
        );
        assert_eq!(ledger.apply(PoolCall::Ratio), ledger.ratio().map(CallOutput::Value));
    }

    #[test]
    fn apply_reads_under_shared_lock() {
        let ledger = active(500, 500);
        let Ok(snapshot) = ledger.snapshot() else {
            panic!("expected snapshot");
        };
        // Holding a read guard would deadlock a write path.
        let guard = ledger.inner.read();
        assert_eq!(
            ledger.apply(PoolCall::ViewTokenA),
            Ok(CallOutput::Value(Amount::new(500)))
        );
        assert_eq!(ledger.apply(PoolCall::Ratio), snapshot.ratio().map(CallOutput::Value));
        assert!(ledger.inner.try_write().is_none());
        drop(guard);
    }

    #[test]
    fn snapshot_is_detached() {
        let ledger = active(1_000, 1_000);
        let Ok(before) = ledger.snapshot() else {
            panic!("expected snapshot");
        };
        let Ok(_) = ledger.swap_tokens(Amount::new(100), false) else {
            panic!("expected swap");
        };
        assert_eq!(before.view_token_a(), Amount::new(1_000));
        assert_eq!(ledger.view_token_b(), Ok(Amount::new(1_100)));
    }

    #[test]
    fn concurrent_swaps_serialize() {
        let ledger = active(1_000_000_000, 1_000_000_000);
        let Ok(k0) = ledger.invariant() else {
            panic!("expected invariant");
        };

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let ledger = ledger.clone();
                thread::spawn(move || {
                    let mut paid_out = Amount::ZERO;
                    for _ in 0..50 {
                        let Ok(out) = ledger.swap_tokens(Amount::new(1_000), t % 2 == 0) else {
                            panic!("swap should succeed");
                        };
                        paid_out = paid_out.checked_add(&out).unwrap_or(Amount::MAX);
                    }
                    paid_out
                })
            })
            .collect();

        for handle in handles {
            let Ok(paid_out) = handle.join() else {
                panic!("thread panicked");
            };
            assert!(!paid_out.is_zero());
        }

        let Ok(reserves) = ledger.reserves() else {
            panic!("expected reserves");
        };
        assert!(full_mul(reserves.reserve_a(), reserves.reserve_b()) >= k0);
    }

    #[test]
    fn concurrent_proportional_adds() {
        let ledger = active(1_000, 2_000);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ledger = ledger.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        let Ok(()) = ledger.add_liquidity(Amount::new(10), Amount::new(20)) else {
                            panic!("proportional add should succeed");
                        };
                    }
                })
            })
            .collect();
        for handle in handles {
            let Ok(()) = handle.join() else {
                panic!("thread panicked");
            };
        }
        assert_eq!(ledger.view_token_a(), Ok(Amount::new(2_000)));
        assert_eq!(ledger.view_token_b(), Ok(Amount::new(4_000)));
    }
}
