//! Raw token amount backed by a 256-bit unsigned integer.

use core::fmt;
use core::str::FromStr;

use primitive_types::U256;

use crate::error::PoolError;

/// A raw token amount in the smallest unit the caller uses.
///
/// `Amount` never interprets decimals; unit scaling belongs to whoever
/// submits the call.  Every `U256` value is a valid amount, matching the
/// `uint256` domain of the pool's call interface.
///
/// Arithmetic methods are checked: they return `None` on overflow or
/// underflow instead of panicking.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(a.checked_sub(&b), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// One unit.
    pub const ONE: Self = Self(U256([1, 0, 0, 0]));

    /// Maximum representable amount (`2^256 - 1`).
    pub const MAX: Self = Self(U256([u64::MAX; 4]));

    /// Creates a new `Amount` from a `u128` value.
    pub fn new(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Wraps a full-width `U256`.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns the value as `u128` if it fits.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        (self.0.bits() <= 128).then(|| self.0.low_u128())
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<Amount> for U256 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = PoolError;

    /// Parses a base-10 string such as `"1000000"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PoolError::InvalidConfiguration("amount is not a decimal integer"));
        }
        U256::from_dec_str(s)
            .map(Self)
            .map_err(|_| PoolError::ArithmeticOverflow("decimal amount exceeds 256 bits"))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string or unsigned integer")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Amount, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Amount, E> {
                Ok(Amount::new(u128::from(v)))
            }

            fn visit_u128<E: serde::de::Error>(self, v: u128) -> Result<Amount, E> {
                Ok(Amount::new(v))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}
