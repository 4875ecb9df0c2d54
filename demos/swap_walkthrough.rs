//! Single-pool walkthrough: construct, swap both ways, add liquidity.
//!
//! Demonstrates the full ledger surface on one [`Pool`], including the
//! rejections a caller should expect.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=reserve_pool=debug cargo run --example swap_walkthrough
//! ```

use reserve_pool::config::PoolConfig;
use reserve_pool::curves::Curve;
use reserve_pool::domain::{Amount, RATIO_SCALE};
use reserve_pool::error::PoolError;
use reserve_pool::pools::Pool;
use reserve_pool::traits::{FromConfig, LiquidityPool, SwapPool};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Reserve Pool Walkthrough ===\n");

    // ── 1. Configure and construct ──────────────────────────────────────
    let config = PoolConfig::new(Amount::new(1_000), Amount::new(1_000), Curve::ConstantProduct)?;
    let mut pool = Pool::from_config(&config)?;
    println!("Curve:    {}", pool.curve());
    println!("Reserves: {}", pool.reserves());
    println!("Ratio:    {} (scaled by {RATIO_SCALE})\n", pool.ratio()?);

    // ── 2. Quote, then swap 100 A for B ─────────────────────────────────
    let quote = pool.quote_swap(Amount::new(100), true)?;
    println!("Quote:    {quote}");
    let out = pool.swap_tokens(Amount::new(100), true)?;
    println!("Swapped:  100 A -> {out} B");
    println!("Reserves: {}", pool.reserves());
    println!("Invariant: {}\n", pool.invariant());

    // ── 3. Proportional top-up ──────────────────────────────────────────
    let (a, b) = (pool.view_token_a(), pool.view_token_b());
    pool.add_liquidity(a, b)?;
    println!("Doubled liquidity with {a} A + {b} B");
    println!("Reserves: {}", pool.reserves());
    println!("Ratio:    {}\n", pool.ratio()?);

    // ── 4. Swap back the other way ──────────────────────────────────────
    let out = pool.swap_tokens(Amount::new(180), false)?;
    println!("Swapped:  180 B -> {out} A");
    println!("Reserves: {}\n", pool.reserves());

    // ── 5. Rejections leave the pool untouched ──────────────────────────
    let before = pool.reserves();
    let attempts: [(&str, Result<(), PoolError>); 3] = [
        ("zero swap", pool.swap_tokens(Amount::ZERO, true).map(|_| ())),
        (
            "skewed deposit",
            pool.add_liquidity(Amount::new(10), Amount::new(1)),
        ),
        (
            "empty deposit",
            pool.add_liquidity(Amount::ZERO, Amount::ZERO),
        ),
    ];
    for (label, result) in attempts {
        match result {
            Ok(()) => println!("{label:<15} accepted"),
            Err(err) => println!("{label:<15} rejected: {err}"),
        }
    }
    println!("Reserves unchanged: {}", pool.reserves() == before);

    Ok(())
}
