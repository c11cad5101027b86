use std::fmt;
use std::slice;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use super::{DEFAULT_CAPACITY, MAX_CAPACITY};

/// A fixed-capacity `Vec<T>`-backed stack.
///
/// The backing vector is allocated with room for `capacity` elements when
/// the stack is built and the length is never allowed past that bound, so
/// no push after construction reallocates.
pub struct BoundedStack<T> {
  elems: Vec<T>,
  capacity: usize,
}

impl<T> BoundedStack<T> {
  /// Creates an empty stack able to hold `capacity` elements.
  ///
  /// Fails with `Error::InvalidCapacity` unless `1 <= capacity <= MAX_CAPACITY`.
  pub fn new(capacity: usize) -> Result<Self> {
    if capacity < 1 || capacity > MAX_CAPACITY {
      debug!(requested = capacity, max = MAX_CAPACITY, "rejecting stack capacity");
      return Err(Error::InvalidCapacity {
        requested: capacity,
        max: MAX_CAPACITY,
      });
    }

    trace!(capacity, "created bounded stack");
    Ok(Self {
      elems: Vec::with_capacity(capacity),
      capacity: capacity,
    })
  }

  /// Creates an empty stack with `DEFAULT_CAPACITY`.
  pub fn with_default_capacity() -> Self {
    Self {
      elems: Vec::with_capacity(DEFAULT_CAPACITY),
      capacity: DEFAULT_CAPACITY,
    }
  }

  /// Pushes `elem` as the new top and returns a handle to it.
  ///
  /// When the stack is full the element is dropped and `Error::StackFull`
  /// is returned; use `try_push` to get the element back instead.
  pub fn push(&mut self, elem: T) -> Result<&mut T> {
    let capacity = self.capacity;
    self.try_push(elem).map_err(|_| {
      debug!(capacity, "stack full, push rejected");
      Error::StackFull { capacity: capacity }
    })
  }

  /// Pushes `elem` as the new top, handing it back if the stack is full.
  pub fn try_push(&mut self, elem: T) -> std::result::Result<&mut T, T> {
    if self.is_full() {
      return Err(elem);
    }

    let top = self.elems.len();
    self.elems.push(elem);
    Ok(&mut self.elems[top])
  }

  /// Removes and returns the top element.
  pub fn pop(&mut self) -> Result<T> {
    self.try_pop().ok_or(Error::StackEmpty)
  }

  /// Removes and returns the top element, if there is one.
  pub fn try_pop(&mut self) -> Option<T> {
    self.elems.pop()
  }

  pub fn peek(&self) -> Result<&T> {
    self.elems.last().ok_or(Error::StackEmpty)
  }

  pub fn peek_mut(&mut self) -> Result<&mut T> {
    self.elems.last_mut().ok_or(Error::StackEmpty)
  }

  /// Drops every element. The capacity is unchanged.
  pub fn clear(&mut self) {
    trace!(released = self.elems.len(), "clearing bounded stack");
    self.elems.clear();
  }

  /// Iterates from the top of the stack down to the bottom.
  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      inner: self.elems.iter().rev(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.elems.is_empty()
  }

  pub fn is_full(&self) -> bool {
    self.elems.len() >= self.capacity
  }

  /// Returns the number of elements in the stack.
  pub fn len(&self) -> usize {
    self.elems.len()
  }

  /// Same as `len`.
  pub fn size(&self) -> usize {
    self.len()
  }

  /// Returns the capacity fixed at construction.
  pub fn capacity(&self) -> usize {
    self.capacity
  }
}

// A derived clone would size the new vector to the current length only.
impl<T: Clone> Clone for BoundedStack<T> {
  fn clone(&self) -> Self {
    let mut elems = Vec::with_capacity(self.capacity);
    elems.extend(self.elems.iter().cloned());

    Self {
      elems: elems,
      capacity: self.capacity,
    }
  }
}

impl<T> Default for BoundedStack<T> {
  fn default() -> Self {
    Self::with_default_capacity()
  }
}

impl<T: fmt::Debug> fmt::Debug for BoundedStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BoundedStack")
      .field("capacity", &self.capacity)
      .field("elems", &self.elems)
      .finish()
  }
}

/// Top-to-bottom iterator over a `BoundedStack<T>`.
pub struct Iter<'a, T> {
  inner: std::iter::Rev<slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a BoundedStack<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
