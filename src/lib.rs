//! A generic, fixed-capacity, heap-backed LIFO stack.
//!
//! The stack allocates its backing storage exactly once, at construction, and never grows
//! beyond it. Pushing onto a full stack or popping from an empty one is reported through
//! [StackError] instead of reallocating or panicking.

use std::any::Any;
use thiserror::Error;

/// Construction, push/pop/peek and the occupancy queries of `BoundedStack`.
mod _impl_bounded_stack;

/// Conversions and helpers for `StackError`.
mod _impl_stack_error;

/// Typed access to stacks of `ErasedHandle` values.
mod _impl_erased_handle;

/// A capacity-bounded, array-backed LIFO container.
///
/// The `storage` is a boxed slice of exactly `capacity` slots. Slots `0..count` hold the
/// stored elements (bottom to top), every other slot is `None`. The slice is never resized,
/// so the capacity is a hard ceiling.
///
/// The stack owns its storage, but it is up to the caller what an element actually is. Storing
/// `&U` or `Rc<U>` keeps the payload owned elsewhere, in which case dropping the stack only
/// releases the references.
#[derive(Debug)]
pub struct BoundedStack<T> {
    count: usize,
    storage: Box<[Option<T>]>,
}

/// A type-erased element handle, for stacks that need to hold values of different types
/// at the same time.
///
/// Use [BoundedStack::peek_as] and [BoundedStack::pop_as] to get the typed value back.
pub type ErasedHandle = Box<dyn Any>;

/// Errors reported by `BoundedStack` operations.
///
/// None of these are fatal: the stack is left unchanged by every failed operation and
/// the caller decides how to proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum StackError {
    /// An absent element was pushed, or the stack was created with zero capacity.
    #[error("invalid argument")]
    InvalidArgument,
    /// The backing storage could not be allocated.
    #[error("backing storage could not be allocated")]
    AllocationFailure,
    /// The stack cannot accept new elements.
    #[error("stack is full")]
    Full,
    /// The stack contains no elements.
    #[error("stack is empty")]
    Empty,
    /// The top `ErasedHandle` does not hold a value of the requested type.
    #[error("top element has a different type")]
    TypeMismatch,
}

#[cfg(test)]
mod tests {
    use crate::{BoundedStack, StackError};

    #[test]
    fn capacity_three_scenario() {
        let mut stack = BoundedStack::<&str>::new(3).unwrap();
        assert_eq!(0, stack.len());

        stack.push("A").unwrap();
        stack.push("B").unwrap();
        stack.push("C").unwrap();
        assert_eq!(3, stack.len());
        assert!(stack.is_full());

        assert_eq!(Err(StackError::Full), stack.push("D"));
        assert_eq!(3, stack.len());

        assert_eq!(Ok("C"), stack.pop());
        assert_eq!(Ok("B"), stack.pop());
        assert_eq!(Ok("A"), stack.pop());
        assert_eq!(0, stack.len());

        assert_eq!(Err(StackError::Empty), stack.pop());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let stack = BoundedStack::<u32>::new(0);
        assert_eq!(StackError::InvalidArgument, stack.unwrap_err());
    }
}
