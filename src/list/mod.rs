//! Singly linked list
//!
//! `LinkedList<T>` is an ordered sequence with O(1) insertion at both ends
//! and O(n) search and removal by value. Each node owns its element and
//! links to its successor; the list owns every node and nothing else does.
//!
//! Nodes are kept in a `slab::Slab` arena and linked by slab key rather
//! than by pointer. The `head` link plays the role of the owning root of
//! the chain, while `tail` is a plain key used only to append in O(1); it
//! never decides when a node is dropped. Keys of removed nodes go back to
//! the slab's free list and are reused by later pushes.

mod iter;

pub use self::iter::{IntoIter, Iter};

use std::fmt;
use std::mem;

use slab::Slab;
use tracing::trace;

use crate::error::{Error, Result};

/// Slab key of a node, or `None` at the end of the chain.
type Link = Option<usize>;

struct Node<T> {
  elem: T,
  next: Link,
}

/// A singly linked list with an O(1) `push_back`.
pub struct LinkedList<T> {
  nodes: Slab<Node<T>>,
  head: Link,
  tail: Link,
  count: usize,
}

impl<T> LinkedList<T> {
  /// Creates a new, empty list.
  pub fn new() -> Self {
    Self {
      nodes: Slab::new(),
      head: None,
      tail: None,
      count: 0,
    }
  }

  /// Creates an empty list with room for `capacity` nodes before the node
  /// arena has to grow.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      nodes: Slab::with_capacity(capacity),
      head: None,
      tail: None,
      count: 0,
    }
  }

  pub fn push_front(&mut self, elem: T) {
    let key = self.nodes.insert(Node {
      elem: elem,
      next: self.head,
    });

    if self.tail.is_none() {
      self.tail = Some(key);
    }
    self.head = Some(key);
    self.count += 1;
  }

  pub fn push_back(&mut self, elem: T) {
    let key = self.nodes.insert(Node {
      elem: elem,
      next: None,
    });

    match self.tail {
      None => self.head = Some(key),
      Some(tail) => self.nodes[tail].next = Some(key),
    }
    self.tail = Some(key);
    self.count += 1;
  }

  /// Detaches the first node and returns its element, if there is one.
  pub fn pop_front(&mut self) -> Option<T> {
    let key = self.head?;
    let node = self.nodes.remove(key);

    self.head = node.next;
    if self.head.is_none() {
      self.tail = None;
    }
    self.count -= 1;

    Some(node.elem)
  }

  pub fn front(&self) -> Result<&T> {
    match self.head {
      Some(key) => Ok(&self.nodes[key].elem),
      None => Err(Error::EmptyList),
    }
  }

  pub fn front_mut(&mut self) -> Result<&mut T> {
    match self.head {
      Some(key) => Ok(&mut self.nodes[key].elem),
      None => Err(Error::EmptyList),
    }
  }

  pub fn back(&self) -> Result<&T> {
    match self.tail {
      Some(key) => Ok(&self.nodes[key].elem),
      None => Err(Error::EmptyList),
    }
  }

  pub fn back_mut(&mut self) -> Result<&mut T> {
    match self.tail {
      Some(key) => Ok(&mut self.nodes[key].elem),
      None => Err(Error::EmptyList),
    }
  }

  /// Applies `f` to every element, front to back.
  pub fn for_each<F>(&mut self, mut f: F)
  where F: FnMut(&mut T) {
    let mut cur = self.head;

    while let Some(key) = cur {
      let node = &mut self.nodes[key];
      f(&mut node.elem);
      cur = node.next;
    }
  }

  /// Drops every node. Calling this on an empty list is a no-op.
  pub fn clear(&mut self) {
    trace!(released = self.count, "clearing linked list");
    self.nodes.clear();
    self.head = None;
    self.tail = None;
    self.count = 0;
  }

  /// Moves the whole chain out in O(1), leaving `self` empty.
  pub fn take(&mut self) -> Self {
    mem::take(self)
  }

  /// Returns a forward iterator positioned at the first element.
  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(&self.nodes, self.head, self.count)
  }

  /// Returns the iterator one past the last element.
  pub fn end(&self) -> Iter<'_, T> {
    Iter::new(&self.nodes, None, 0)
  }

  pub fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// Returns the number of elements in the list.
  pub fn len(&self) -> usize {
    self.count
  }

  /// Same as `len`.
  pub fn size(&self) -> usize {
    self.count
  }
}

impl<T: PartialEq> LinkedList<T> {
  /// Returns an iterator positioned at the first element equal to `value`,
  /// or `end()` when there is none.
  pub fn find(&self, value: &T) -> Iter<'_, T> {
    let mut it = self.iter();

    while let Some(elem) = it.get() {
      if elem == value {
        return it;
      }
      it.next();
    }

    it
  }

  pub fn contains(&self, value: &T) -> bool {
    !self.find(value).is_end()
  }

  /// Removes the first element equal to `value`. Returns whether a node
  /// was removed.
  pub fn remove(&mut self, value: &T) -> bool {
    let mut prev: Link = None;
    let mut cur = self.head;

    while let Some(key) = cur {
      if self.nodes[key].elem != *value {
        prev = cur;
        cur = self.nodes[key].next;
        continue;
      }

      let node = self.nodes.remove(key);
      match prev {
        None => self.head = node.next,
        Some(p) => self.nodes[p].next = node.next,
      }
      if self.tail == Some(key) {
        self.tail = prev;
      }
      self.count -= 1;

      return true;
    }

    false
  }
}

impl<T> Default for LinkedList<T> {
  fn default() -> Self {
    Self::new()
  }
}

// Rebuilds the chain node by node so the copy shares nothing with `self`.
impl<T: Clone> Clone for LinkedList<T> {
  fn clone(&self) -> Self {
    let mut list = Self::with_capacity(self.count);
    list.extend(self.iter().cloned());
    list
  }
}

impl<T> FromIterator<T> for LinkedList<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<T> Extend<T> for LinkedList<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for elem in iter {
      self.push_back(elem);
    }
  }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
  fn eq(&self, other: &Self) -> bool {
    self.count == other.count && self.iter().eq(other.iter())
  }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T> IntoIterator for LinkedList<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self)
  }
}
