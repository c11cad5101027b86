//! Errors reported by the collections in this crate.

use thiserror::Error;

/// Failure of a container operation.
///
/// Every failure leaves the container exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  /// A stack was requested with a capacity outside `1..=max`.
  #[error("invalid stack capacity {requested}: must be between 1 and {max}")]
  InvalidCapacity { requested: usize, max: usize },

  /// A push was attempted on a stack already holding `capacity` elements.
  #[error("stack is full (capacity {capacity})")]
  StackFull { capacity: usize },

  /// A pop or peek was attempted on an empty stack.
  #[error("stack is empty")]
  StackEmpty,

  /// The front or back of an empty list was requested.
  #[error("list is empty")]
  EmptyList,
}

pub type Result<T> = std::result::Result<T, Error>;
