//! Core trait abstractions.
//!
//! - [`SwapPool`]: `swapTokens` and the reserve queries.
//! - [`LiquidityPool`]: `addLiquidity`.
//! - [`PricingCurve`]: the pluggable swap formula.
//! - [`FromConfig`]: configuration-driven construction.

mod from_config;
mod liquidity_pool;
mod pricing_curve;
mod swap_pool;

pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use pricing_curve::PricingCurve;
pub use swap_pool::SwapPool;
