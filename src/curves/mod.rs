//! Pricing curve implementations and the [`Curve`] dispatch enum.
//!
//! | Feature | Curve | Invariant |
//! |---------|-------|-----------|
//! | always | [`ConstantProduct`] | `reserve_a × reserve_b` |
//! | `constant-sum` | [`ConstantSum`] | `reserve_a + reserve_b` |

mod constant_product;
#[cfg(feature = "constant-sum")]
mod constant_sum;
mod curve;

pub use constant_product::ConstantProduct;
#[cfg(feature = "constant-sum")]
pub use constant_sum::ConstantSum;
pub use curve::Curve;
