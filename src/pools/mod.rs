//! The pool ledger and its thread-safe handle.
//!
//! - [`Pool`] is the plain ledger: one reserve pair plus a pricing curve,
//!   mutated through `&mut self`.
//! - [`SharedPool`] puts one ledger behind a reader-writer lock so many
//!   callers can use it at once, and models the uninitialized state that
//!   exists before `construct`.
//! - [`PoolCall`] / [`CallOutput`] name every external entry point as data,
//!   so hosts can dispatch requests without matching on strings.

mod call;
mod pool;
mod shared;

#[cfg(test)]
mod proptest_properties;

pub use call::{CallOutput, PoolCall};
pub use pool::Pool;
pub use shared::SharedPool;
