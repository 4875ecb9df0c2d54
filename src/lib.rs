//! # Reserve Pool
//!
//! A two-token reserve pool ledger: it holds balances of token A and
//! token B, accepts proportional liquidity deposits, and swaps one token
//! for the other along a pricing curve that never lets the pool's
//! invariant fall.
//!
//! All balances are unsigned 256-bit integers.  Products of two reserves
//! are computed in 512 bits, so no intermediate ever overflows before a
//! division.  Every rejected call leaves the reserves exactly as they were.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | yes | `Serialize` / `Deserialize` for configs, calls and value types |
//! | `constant-sum` | yes | The `x + y = k` curve alongside constant product |
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! reserve-pool = "0.1"
//! ```
//!
//! ## Construct a pool and execute a swap
//!
//! ```rust
//! use reserve_pool::domain::{Amount, RATIO_SCALE};
//! use reserve_pool::pools::Pool;
//! use reserve_pool::traits::{LiquidityPool, SwapPool};
//!
//! // 1. Seed the pool with 1000 A and 1000 B
//! let mut pool = Pool::construct(Amount::new(1_000), Amount::new(1_000)).expect("positive");
//!
//! // 2. Deposit 100 A, receive B
//! let out = pool.swap_tokens(Amount::new(100), true).expect("swap succeeded");
//! assert_eq!(out, Amount::new(90));
//!
//! // 3. Top up at the current 1100 : 910 ratio
//! pool.add_liquidity(Amount::new(1_100), Amount::new(910)).expect("proportional");
//! assert_eq!(pool.view_token_a(), Amount::new(2_200));
//!
//! // 4. Price of A in B, scaled by 10^18
//! let ratio = pool.ratio().expect("non-zero reserve A");
//! assert_eq!(ratio, Amount::new(910 * RATIO_SCALE / 1_100));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  PoolConfig / PoolCall (optionally from JSON)
//! └──────┬───────┘
//!        │ construct / apply
//!        ▼
//! ┌──────────────┐
//! │  SharedPool   │  Arc<RwLock<Option<Pool>>>, uninitialized until construct
//! └──────┬───────┘
//!        │ SwapPool + LiquidityPool traits
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  reserves, atomic commit, invariant check
//! └──────┬───────┘
//!        │ PricingCurve trait
//!        ▼
//! ┌──────────────┐
//! │    Curves     │  ConstantProduct, ConstantSum
//! └──────┬───────┘
//!        │ mul_div / full_mul
//!        ▼
//! ┌──────────────┐
//! │ Domain + Math │  Amount (U256), Reserves, 512-bit intermediates
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Reserves`](domain::Reserves), [`SwapOutcome`](domain::SwapOutcome), etc. |
//! | [`traits`] | Core abstractions: [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`PricingCurve`](traits::PricingCurve), [`FromConfig`](traits::FromConfig) |
//! | [`curves`] | Built-in pricing curves and the [`Curve`](curves::Curve) dispatch enum |
//! | [`config`] | Declarative pool blueprint: [`PoolConfig`](config::PoolConfig) |
//! | [`pools`]  | [`Pool`](pools::Pool), [`SharedPool`](pools::SharedPool) and the [`PoolCall`](pools::PoolCall) surface |
//! | [`math`]   | Checked arithmetic and 512-bit `mul_div` |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Demos
//!
//! Runnable walkthroughs live in the `demos/` directory and are registered
//! as Cargo examples, so `cargo run --example swap_walkthrough` and
//! `cargo run --example concurrent_ledger` run them.

// Module declarations (always compiled)
pub mod config;
pub mod curves;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
