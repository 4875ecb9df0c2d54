//! Checked arithmetic trait for [`Amount`].
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning methods of
//! [`Amount`] into [`Result`](crate::error::Result) so that pool code can
//! chain them with `?` and still report *which* range violation occurred.
//!
//! # Examples
//!
//! ```
//! use reserve_pool::domain::Amount;
//! use reserve_pool::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//! ```

use crate::domain::Amount;
use crate::error::{PoolError, Result};

/// Fallible arithmetic that maps every failure to a distinct
/// [`PoolError`] variant.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticOverflow`] past `2^256 - 1`.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticUnderflow`] below zero.
    fn safe_sub(&self, other: &Self) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(PoolError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(PoolError::ArithmeticUnderflow("amount subtraction underflow"))
    }
}
