//! One shared ledger, many threads.
//!
//! Spawns traders that swap in both directions and readers that poll the
//! reserves while the trades run, then checks that the constant-product
//! invariant only ever grew.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=reserve_pool=warn cargo run --example concurrent_ledger
//! ```

use std::thread;

use reserve_pool::domain::Amount;
use reserve_pool::math::full_mul;
use reserve_pool::pools::{PoolCall, SharedPool};
use tracing_subscriber::EnvFilter;

const TRADERS: u128 = 4;
const SWAPS_PER_TRADER: u128 = 250;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Concurrent Ledger ===\n");

    // ── 1. Uninitialized until construct ────────────────────────────────
    let ledger = SharedPool::new();
    match ledger.apply(PoolCall::ViewTokenA) {
        Ok(out) => println!("unexpected read before construct: {out:?}"),
        Err(err) => println!("Before construct: {err}"),
    }
    ledger.construct(Amount::new(50_000_000), Amount::new(50_000_000))?;
    let k0 = ledger.invariant()?;
    println!("Constructed:      {}\n", ledger.reserves()?);

    // ── 2. Traders and readers share the ledger ─────────────────────────
    let traders: Vec<_> = (0..TRADERS)
        .map(|t| {
            let ledger = ledger.clone();
            thread::spawn(move || {
                let mut received = Amount::ZERO;
                for i in 0..SWAPS_PER_TRADER {
                    let call = PoolCall::SwapTokens {
                        amount: Amount::new(1_000 + i),
                        is_token_a: (t + i) % 2 == 0,
                    };
                    if let Ok(out) = ledger.apply(call) {
                        let paid = out.value().unwrap_or(Amount::ZERO);
                        received = received.checked_add(&paid).unwrap_or(Amount::MAX);
                    }
                }
                (t, received)
            })
        })
        .collect();

    let reader = {
        let ledger = ledger.clone();
        thread::spawn(move || {
            let mut low_water = None;
            for _ in 0..1_000 {
                if let Ok(r) = ledger.reserves() {
                    let k = full_mul(r.reserve_a(), r.reserve_b());
                    low_water = Some(low_water.map_or(k, |lw: primitive_types::U512| lw.min(k)));
                }
            }
            low_water
        })
    };

    for handle in traders {
        match handle.join() {
            Ok((t, received)) => println!("Trader {t} received {received} in total"),
            Err(_) => println!("a trader thread panicked"),
        }
    }
    let low_water = reader.join().ok().flatten();

    // ── 3. Verify ───────────────────────────────────────────────────────
    let k_end = ledger.invariant()?;
    println!("\nFinal reserves:   {}", ledger.reserves()?);
    println!("Invariant start:  {k0}");
    println!("Invariant end:    {k_end}");
    if let Some(lw) = low_water {
        println!("Lowest observed:  {lw}");
    }
    println!("Never decreased:  {}", k_end >= k0 && low_water.is_none_or(|lw| lw >= k0));

    Ok(())
}
