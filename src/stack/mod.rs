//! Stack implementations
//!
//! This module provides `BoundedStack`, a last-in-first-out container whose
//! capacity is chosen once at construction and never grows afterwards.
//! Storage for every element is reserved up front, so a push either fits
//! into the existing allocation or is rejected with `Error::StackFull`.
//!
//! Removal comes in two flavours over the same internal logic: `pop` and
//! `peek` report an empty stack as `Error::StackEmpty`, while `try_pop`
//! returns `None`. Pushing mirrors this with `push` and `try_push`.

mod bounded;

pub use self::bounded::{BoundedStack, Iter};

/// Capacity used by `BoundedStack::default()`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Largest capacity a `BoundedStack` accepts.
pub const MAX_CAPACITY: usize = 1000;
