//! Property-based tests using `proptest` for ledger invariant validation.
//!
//! 1. **Payout bound**: every successful swap pays strictly less than the
//!    output reserve and leaves both reserves positive.
//! 2. **Invariant preservation**: `reserve_a × reserve_b` never decreases.
//! 3. **Output monotonicity**: a larger deposit never buys less.
//! 4. **Price movement direction**: depositing A never raises the B-per-A ratio.
//! 5. **Ratio preservation**: a proportional deposit keeps `ratio()` unchanged.
//! 6. **Atomic rejection**: disproportionate deposits and zero swaps leave
//!    the pool untouched.
//! 7. **Quote fidelity**: `quote_swap` predicts `swap_tokens` exactly.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::domain::Amount;
use crate::error::PoolError;
use crate::math::full_mul;
use crate::pools::Pool;
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_pool(ra: u128, rb: u128) -> Pool {
    let Ok(pool) = Pool::construct(Amount::new(ra), Amount::new(rb)) else {
        panic!("valid pool");
    };
    pool
}

fn product(pool: &Pool) -> primitive_types::U512 {
    full_mul(pool.view_token_a(), pool.view_token_b())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [1, 10^24], covering dust pools and 18-decimal tokens.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![1u128..=1_000u128, 1_000u128..=1_000_000_000_000_000_000_000_000u128]
}

/// Deposit sizes in range [1, 10^24].
fn amount_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![1u128..=10_000u128, 1u128..=1_000_000_000_000_000_000_000_000u128]
}

// ---------------------------------------------------------------------------
// Properties 1 & 2: Payout bound and invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_swap_payout_bounded(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
        is_token_a in any::<bool>(),
    ) {
        let mut pool = make_pool(ra, rb);
        let reserve_out = if is_token_a { pool.view_token_b() } else { pool.view_token_a() };

        match pool.swap_tokens(Amount::new(amount), is_token_a) {
            Ok(out) => {
                prop_assert!(!out.is_zero());
                prop_assert!(out < reserve_out, "paid {} from reserve {}", out, reserve_out);
                prop_assert!(!pool.view_token_a().is_zero());
                prop_assert!(!pool.view_token_b().is_zero());
            }
            Err(err) => {
                prop_assert_eq!(err, PoolError::InsufficientLiquidity);
                prop_assert_eq!(pool, make_pool(ra, rb));
            }
        }
    }

    #[test]
    fn prop_invariant_preservation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in proptest::collection::vec((amount_strategy(), any::<bool>()), 1..16),
    ) {
        let mut pool = make_pool(ra, rb);
        for (amount, is_token_a) in swaps {
            let k_before = product(&pool);
            if pool.swap_tokens(Amount::new(amount), is_token_a).is_err() {
                continue;
            }
            let k_after = product(&pool);
            prop_assert!(
                k_after >= k_before,
                "k decreased: after={} < before={}",
                k_after, k_before
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Properties 3 & 4: Output monotonicity and price direction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_output_monotone_in_input(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        small in amount_strategy(),
        extra in amount_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let large = small.saturating_add(extra);

        let out_small = pool.quote_swap(Amount::new(small), true).map(|q| q.amount_out());
        let out_large = pool.quote_swap(Amount::new(large), true).map(|q| q.amount_out());

        if let (Ok(s), Ok(l)) = (out_small, out_large) {
            prop_assert!(l >= s, "larger input bought less: {} < {}", l, s);
        }
        // A dust deposit that fails may grow into one that succeeds, never the reverse.
        if out_small.is_ok() {
            prop_assert!(out_large.is_ok());
        }
    }

    #[test]
    fn prop_price_movement_direction(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let mut pool = make_pool(ra, rb);
        let Ok(ratio_before) = pool.ratio() else {
            return Ok(());
        };
        if pool.swap_tokens(Amount::new(amount), true).is_err() {
            return Ok(());
        }
        let Ok(ratio_after) = pool.ratio() else {
            panic!("ratio undefined after a committed swap");
        };
        prop_assert!(
            ratio_after <= ratio_before,
            "selling A should not raise B per A: {} > {}",
            ratio_after, ratio_before
        );
    }
}

// ---------------------------------------------------------------------------
// Properties 5 & 6: Ratio preservation and atomic rejection
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_proportional_add_keeps_ratio(
        ra in 1u128..=1_000_000_000_000u128,
        rb in 1u128..=1_000_000_000_000u128,
        scale in 1u128..=1_000u128,
    ) {
        let mut pool = make_pool(ra, rb);
        let Ok(ratio_before) = pool.ratio() else {
            return Ok(());
        };

        prop_assert_eq!(pool.add_liquidity(Amount::new(ra * scale), Amount::new(rb * scale)), Ok(()));
        prop_assert_eq!(pool.view_token_a(), Amount::new(ra * (scale + 1)));
        prop_assert_eq!(pool.view_token_b(), Amount::new(rb * (scale + 1)));
        prop_assert_eq!(pool.ratio(), Ok(ratio_before));
    }

    #[test]
    fn prop_disproportionate_add_rejected(
        ra in 1u128..=1_000_000_000_000u128,
        rb in 1u128..=1_000_000_000_000u128,
        scale in 1u128..=1_000u128,
        skew in 1u128..=1_000u128,
    ) {
        let mut pool = make_pool(ra, rb);
        let before = pool.clone();
        let result = pool.add_liquidity(Amount::new(ra * scale), Amount::new(rb * scale + skew));
        prop_assert_eq!(result, Err(PoolError::DisproportionateLiquidity));
        prop_assert_eq!(pool, before);
    }

    #[test]
    fn prop_zero_swap_rejected(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        is_token_a in any::<bool>(),
    ) {
        let mut pool = make_pool(ra, rb);
        let before = pool.clone();
        prop_assert_eq!(pool.swap_tokens(Amount::ZERO, is_token_a), Err(PoolError::InvalidAmount));
        prop_assert_eq!(pool, before);
    }
}

// ---------------------------------------------------------------------------
// Property 7: Quote fidelity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_quote_matches_swap(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in amount_strategy(),
        is_token_a in any::<bool>(),
    ) {
        let mut pool = make_pool(ra, rb);
        let quote = pool.quote_swap(Amount::new(amount), is_token_a).map(|q| q.amount_out());
        prop_assert_eq!(pool.swap_tokens(Amount::new(amount), is_token_a), quote);
    }
}
