//! Construction trait for building a pool from configuration.
//!
//! # Validation Contract
//!
//! Implementations validate the whole configuration before building
//! anything.  A pool returned from [`FromConfig::from_config`] is already
//! in its active state: both reserves positive, curve fixed.

use crate::error::Result;

/// Builds `Self` from a configuration value.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for Pool`
///
/// # Errors
///
/// Returns [`PoolError::InvalidInitialLiquidity`](crate::error::PoolError::InvalidInitialLiquidity)
/// or another validation error if the configuration is unusable.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// Propagates the configuration's validation error.
    fn from_config(config: &C) -> Result<Self>
    where
        Self: Sized;
}
