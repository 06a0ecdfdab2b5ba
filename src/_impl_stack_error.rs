use crate::{BoundedStack, StackError};
use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};
use std::collections::TryReserveError;
use std::rc::Rc;

// Errors are plain tags, cheap to copy around and to send across threads.
assert_eq_size!(StackError, u8);
assert_impl_all!(StackError: std::error::Error, Copy, Send, Sync);

// The stack itself adds no synchronization, it only inherits the auto traits of `T`.
assert_impl_all!(BoundedStack<u32>: Send, Sync);
assert_not_impl_any!(BoundedStack<Rc<u32>>: Send, Sync);

impl From<TryReserveError> for StackError {
    fn from(_: TryReserveError) -> Self {
        StackError::AllocationFailure
    }
}

impl StackError {
    /// True if the error only reflects the current occupancy of the stack (`Full` or `Empty`),
    /// meaning the same operation can succeed once the occupancy changes.
    pub fn is_occupancy(&self) -> bool {
        matches!(self, StackError::Full | StackError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BoundedStack, StackError};

    #[test]
    fn error_messages() {
        assert_eq!("stack is full", StackError::Full.to_string());
        assert_eq!("stack is empty", StackError::Empty.to_string());
        assert_eq!("invalid argument", StackError::InvalidArgument.to_string());
        assert_eq!(
            "backing storage could not be allocated",
            StackError::AllocationFailure.to_string()
        );
    }

    #[test]
    fn reservation_failure_is_allocation_failure() {
        let mut buffer: Vec<u64> = Vec::new();
        let error = buffer.try_reserve_exact(usize::MAX).unwrap_err();
        assert_eq!(StackError::AllocationFailure, StackError::from(error));
    }

    #[test]
    fn occupancy_errors_are_retryable() {
        let mut stack = BoundedStack::<u8>::new(1).unwrap();
        let empty = stack.pop().unwrap_err();
        assert!(empty.is_occupancy());
        stack.push(1u8).unwrap();
        let full = stack.push(2u8).unwrap_err();
        assert!(full.is_occupancy());
        // After popping, the rejected push goes through.
        stack.pop().unwrap();
        assert_eq!(Ok(()), stack.push(2u8));

        assert!(!StackError::InvalidArgument.is_occupancy());
        assert!(!StackError::AllocationFailure.is_occupancy());
        assert!(!StackError::TypeMismatch.is_occupancy());
    }
}
