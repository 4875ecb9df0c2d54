//! Typed call surface mirroring the pool's external interface.
//!
//! Each [`PoolCall`] variant is one entry point of the on-chain interface
//! (`addLiquidity`, `swapTokens`, `ratio`, `viewTokenA`, `viewTokenB`,
//! and the public getters `tokenA` / `tokenB`).  The set is closed: a
//! caller cannot name a function that does not exist.
//!
//! With the `serde` feature a call deserializes from the same shape a
//! wallet front end submits:
//!
//! ```json
//! { "function": "swapTokens", "amount": "100", "isTokenA": true }
//! ```

use core::fmt;

use crate::domain::Amount;

/// One request against the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        tag = "function",
        rename_all = "camelCase",
        rename_all_fields = "camelCase"
    )
)]
pub enum PoolCall {
    /// `addLiquidity(tokenAAdded, tokenBAdded)`.
    AddLiquidity {
        /// Units of token A deposited.
        token_a_added: Amount,
        /// Units of token B deposited.
        token_b_added: Amount,
    },
    /// `swapTokens(amount, isTokenA) -> amountOut`.
    SwapTokens {
        /// Units deposited.
        amount: Amount,
        /// `true` when the deposit is token A.
        is_token_a: bool,
    },
    /// `ratio() -> uint`.
    Ratio,
    /// `viewTokenA() -> uint`.
    ViewTokenA,
    /// `viewTokenB() -> uint`.
    ViewTokenB,
    /// `tokenA() -> uint`, the public reserve getter.
    TokenA,
    /// `tokenB() -> uint`, the public reserve getter.
    TokenB,
}

impl PoolCall {
    /// Returns `true` for calls that change reserves.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(self, Self::AddLiquidity { .. } | Self::SwapTokens { .. })
    }

    /// Returns the interface function name.
    #[must_use]
    pub const fn function_name(&self) -> &'static str {
        match self {
            Self::AddLiquidity { .. } => "addLiquidity",
            Self::SwapTokens { .. } => "swapTokens",
            Self::Ratio => "ratio",
            Self::ViewTokenA => "viewTokenA",
            Self::ViewTokenB => "viewTokenB",
            Self::TokenA => "tokenA",
            Self::TokenB => "tokenB",
        }
    }
}

impl fmt::Display for PoolCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddLiquidity {
                token_a_added,
                token_b_added,
            } => write!(f, "addLiquidity({token_a_added}, {token_b_added})"),
            Self::SwapTokens { amount, is_token_a } => {
                write!(f, "swapTokens({amount}, {is_token_a})")
            }
            other => write!(f, "{}()", other.function_name()),
        }
    }
}

/// Return value of a [`PoolCall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum CallOutput {
    /// The call returns nothing (`addLiquidity`).
    Unit,
    /// The call returns one unsigned integer.
    Value(Amount),
}

impl CallOutput {
    /// Returns the carried value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<Amount> {
        match self {
            Self::Unit => None,
            Self::Value(v) => Some(*v),
        }
    }
}
