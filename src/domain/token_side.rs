//! Which of the pool's two tokens a call refers to.

use core::fmt;

/// One side of the two-token pool.
///
/// The call interface selects the deposit token of a swap with an
/// `isTokenA` flag; [`TokenSide::from_is_token_a`] converts it.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::TokenSide;
///
/// let side = TokenSide::from_is_token_a(false);
/// assert_eq!(side, TokenSide::B);
/// assert_eq!(side.opposite(), TokenSide::A);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenSide {
    /// Token A.
    A,
    /// Token B.
    B,
}

impl TokenSide {
    /// Maps the wire-level `isTokenA` flag to a side.
    #[must_use]
    pub const fn from_is_token_a(is_token_a: bool) -> Self {
        if is_token_a { Self::A } else { Self::B }
    }

    /// Returns `true` for [`TokenSide::A`].
    #[must_use]
    pub const fn is_a(&self) -> bool {
        matches!(self, Self::A)
    }

    /// Returns the other token.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for TokenSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}
