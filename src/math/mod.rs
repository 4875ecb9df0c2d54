//! Arithmetic utilities for reserve accounting.
//!
//! - [`CheckedArithmetic`]: `Result`-returning add/sub on
//!   [`Amount`](crate::domain::Amount).
//! - [`mul_div`], [`full_mul`], [`widen`]: 512-bit intermediates so that
//!   products of two reserves never overflow before division.

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{full_mul, mul_div, widen};
