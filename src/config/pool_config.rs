//! Configuration for a reserve pool.

use crate::curves::Curve;
use crate::domain::Amount;
use crate::error::{PoolError, Result};

/// Declarative blueprint for a pool: initial reserves and pricing curve.
///
/// # Validation
///
/// Both initial reserves must be non-zero.
///
/// # Serialization
///
/// With the `serde` feature, amounts are decimal strings (plain JSON
/// integers are accepted too) and `curve` defaults to
/// `"constant_product"` when omitted:
///
/// ```json
/// { "reserve_a": "1000000", "reserve_b": "2000000", "curve": "constant_product" }
/// ```
///
/// Deserialized values are not validated until [`validate`](Self::validate)
/// or [`FromConfig`](crate::traits::FromConfig) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    reserve_a: Amount,
    reserve_b: Amount,
    #[cfg_attr(feature = "serde", serde(default))]
    curve: Curve,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidInitialLiquidity`] if either reserve is zero.
    pub fn new(reserve_a: Amount, reserve_b: Amount, curve: Curve) -> Result<Self> {
        let config = Self {
            reserve_a,
            reserve_b,
            curve,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidInitialLiquidity`] if either reserve is zero.
    pub fn validate(&self) -> Result<()> {
        if self.reserve_a.is_zero() || self.reserve_b.is_zero() {
            return Err(PoolError::InvalidInitialLiquidity);
        }
        Ok(())
    }

    /// Returns the initial reserve of token A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the initial reserve of token B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the pricing curve.
    #[must_use]
    pub const fn curve(&self) -> Curve {
        self.curve
    }
}
