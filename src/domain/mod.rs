//! Domain value types for the reserve pool.
//!
//! All types are small `Copy` newtypes or enums with validated
//! constructors, so a value that exists already satisfies its invariants.

mod amount;
mod reserves;
mod rounding;
mod swap_outcome;
mod token_side;

pub use amount::Amount;
pub use reserves::{RATIO_SCALE, Reserves};
pub use rounding::Rounding;
pub use swap_outcome::SwapOutcome;
pub use token_side::TokenSide;
