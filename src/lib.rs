pub mod error;
pub mod stack;
pub mod list;

pub use error::{Error, Result};
pub use list::LinkedList;
pub use stack::{BoundedStack, DEFAULT_CAPACITY, MAX_CAPACITY};


///////////////////////////////////////////////////////////////////////////////
//// Utilities
///////////////////////////////////////////////////////////////////////////////




///////////////////////////////////////////////////////////////////////////////
//// Stack Tests
///////////////////////////////////////////////////////////////////////////////



///////////////////////////////////////////////////////////////////////////////
//// List Tests
///////////////////////////////////////////////////////////////////////////////



///////////////////////////////////////////////////////////////////////////////
//// Property Tests
///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod property_tests {
  use proptest::prelude::*;
  use super::utilities::*;
  use super::list::LinkedList;
  use super::stack::*;
  use super::error::Error;

  proptest! {
    #[test]
    fn prop_valid_capacity_fills_exactly(capacity in 1usize..=MAX_CAPACITY) {
      let mut stack = BoundedStack::new(capacity).unwrap();
      for i in 0..capacity {
        prop_assert!(stack.push(i).is_ok());
      }

      prop_assert!(stack.is_full());
      prop_assert_eq!(stack.push(0), Err(Error::StackFull { capacity: capacity }));
    }

    #[test]
    fn prop_out_of_range_capacity_fails(capacity in (MAX_CAPACITY + 1)..usize::MAX) {
      prop_assert!(BoundedStack::<u8>::new(capacity).is_err());
    }

    #[test]
    fn prop_lifo_law(values in prop::collection::vec(any::<i64>(), 1..=MAX_CAPACITY)) {
      let mut stack = BoundedStack::new(values.len()).unwrap();
      for v in &values {
        stack.push(*v).unwrap();
      }

      let popped = drain_stack(&mut stack);
      let expected: Vec<i64> = values.iter().rev().copied().collect();
      prop_assert_eq!(popped, expected);
      prop_assert!(stack.pop().is_err());
    }

    #[test]
    fn prop_list_preserves_push_back_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
      let list: LinkedList<i32> = values.iter().copied().collect();

      prop_assert_eq!(list.len(), values.len());
      prop_assert_eq!(list.front().ok(), values.first());
      prop_assert_eq!(list.back().ok(), values.last());
      prop_assert_eq!(list_to_vec(&list), values);
    }

    #[test]
    fn prop_clone_isolation(values in prop::collection::vec(-1000i32..1000, 0..64)) {
      let original: LinkedList<i32> = values.iter().copied().collect();
      let mut copy = original.clone();
      copy.for_each(|x| *x = x.wrapping_mul(2).wrapping_add(1));

      prop_assert_eq!(list_to_vec(&original), values);
    }

    #[test]
    fn prop_remove_matches_vec(
      values in prop::collection::vec(0u8..10, 0..32),
      target in 0u8..10,
    ) {
      let mut list: LinkedList<u8> = values.iter().copied().collect();
      let mut model = values.clone();
      let expected = match model.iter().position(|x| *x == target) {
        Some(pos) => {
          model.remove(pos);
          true
        }
        None => false,
      };

      prop_assert_eq!(list.remove(&target), expected);
      prop_assert_eq!(list.back().ok(), model.last());
      prop_assert_eq!(list_to_vec(&list), model);
    }
  }
}


///////////////////////////////////////////////////////////////////////////////
//// Shared Access Tests
///////////////////////////////////////////////////////////////////////////////



///////////////////////////////////////////////////////////////////////////////
//// Logging Tests
///////////////////////////////////////////////////////////////////////////////
