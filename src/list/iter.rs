use std::ptr;

use slab::Slab;

use super::{LinkedList, Link, Node};

/// Forward iterator over a `LinkedList<T>`.
///
/// Besides being an `Iterator`, an `Iter` is a position in the list:
/// `get` reads the element it points at, and two iterators are equal when
/// they point at the same node of the same list. Every exhausted iterator
/// is the end sentinel and compares equal to `LinkedList::end()`.
pub struct Iter<'a, T> {
  nodes: &'a Slab<Node<T>>,
  cur: Link,
  remaining: usize,
}

impl<'a, T> Iter<'a, T> {
  pub(super) fn new(nodes: &'a Slab<Node<T>>, cur: Link, remaining: usize) -> Self {
    Self {
      nodes: nodes,
      cur: cur,
      remaining: remaining,
    }
  }

  /// Returns the element at the current position, or `None` at the end.
  pub fn get(&self) -> Option<&'a T> {
    let nodes = self.nodes;
    self.cur.map(|key| &nodes[key].elem)
  }

  pub fn is_end(&self) -> bool {
    self.cur.is_none()
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let key = self.cur?;
    let nodes = self.nodes;
    let node = &nodes[key];

    self.cur = node.next;
    self.remaining -= 1;
    Some(&node.elem)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
  fn clone(&self) -> Self {
    Self::new(self.nodes, self.cur, self.remaining)
  }
}

impl<'a, T> PartialEq for Iter<'a, T> {
  fn eq(&self, other: &Self) -> bool {
    match (self.cur, other.cur) {
      (None, None) => true,
      (Some(a), Some(b)) => a == b && ptr::eq(self.nodes, other.nodes),
      _ => false,
    }
  }
}

impl<'a, T> Eq for Iter<'a, T> {}

/// Owning iterator that drains a `LinkedList<T>` front to back.
pub struct IntoIter<T> {
  list: LinkedList<T>,
}

impl<T> IntoIter<T> {
  pub(super) fn new(list: LinkedList<T>) -> Self {
    Self {
      list: list,
    }
  }
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    self.list.pop_front()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.list.len(), Some(self.list.len()))
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
