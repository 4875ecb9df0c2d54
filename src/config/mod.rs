//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint a host loads (for example
//! from JSON) and hands to [`FromConfig`](crate::traits::FromConfig) or
//! [`SharedPool::from_config`](crate::pools::SharedPool::from_config).

mod pool_config;

pub use pool_config::PoolConfig;
