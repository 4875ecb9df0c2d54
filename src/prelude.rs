//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use reserve_pool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{Amount, RATIO_SCALE, Reserves, Rounding, SwapOutcome, TokenSide};

// Re-export core traits
pub use crate::traits::{FromConfig, LiquidityPool, PricingCurve, SwapPool};

// Re-export math utilities
pub use crate::math::CheckedArithmetic;

// Re-export configuration and curves
pub use crate::config::PoolConfig;
pub use crate::curves::Curve;

// Re-export error types
pub use crate::error::{PoolError, Result};

// Re-export pools
pub use crate::pools::{CallOutput, Pool, PoolCall, SharedPool};
