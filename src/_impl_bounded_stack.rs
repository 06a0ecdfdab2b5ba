use crate::{BoundedStack, StackError};
use likely_stable::unlikely;
use tracing::{debug, trace};

impl<T> BoundedStack<T> {
    /// Create an empty stack which can hold up to `capacity` elements.
    ///
    /// The storage is reserved here and never reallocated afterwards. A zero `capacity` is
    /// rejected with `InvalidArgument` (such stack would be full and empty at the same time),
    /// and a failed reservation is reported as `AllocationFailure`.
    pub fn new(capacity: usize) -> Result<BoundedStack<T>, StackError> {
        if unlikely(capacity == 0) {
            debug!("Rejected stack with zero capacity.");
            return Err(StackError::InvalidArgument);
        }

        let mut storage: Vec<Option<T>> = Vec::new();
        if let Err(error) = storage.try_reserve_exact(capacity) {
            debug!(capacity, %error, "Cannot allocate stack storage.");
            return Err(error.into());
        }
        storage.resize_with(capacity, || None);

        trace!(capacity, "Stack has been created.");
        Ok(BoundedStack {
            count: 0,
            storage: storage.into_boxed_slice(),
        })
    }

    /// Release the stack and give back every element that is still stored in it,
    /// ordered from the bottom to the top of the stack.
    pub fn destroy(mut self) -> Vec<T> {
        let storage = std::mem::take(&mut self.storage);
        let remaining = std::mem::replace(&mut self.count, 0);
        trace!(capacity = storage.len(), remaining, "Stack has been destroyed.");
        // Slots above `remaining` are always empty, so flattening keeps the stack order.
        storage.into_vec().into_iter().flatten().collect()
    }

    /// Push a new element on top of the stack.
    ///
    /// The element can be given either directly, or as an `Option`, in which case `None`
    /// is rejected as an absent element. Both failures (`InvalidArgument` and `Full`)
    /// leave the stack unchanged.
    pub fn push(&mut self, element: impl Into<Option<T>>) -> Result<(), StackError> {
        let element = match element.into() {
            Some(element) => element,
            None => {
                debug!("Rejected absent element.");
                return Err(StackError::InvalidArgument);
            }
        };

        if unlikely(self.is_full()) {
            debug!(capacity = self.capacity(), "Stack is full.");
            return Err(StackError::Full);
        }

        self.storage[self.count] = Some(element);
        self.count += 1;
        trace!(count = self.count, "Pushing done.");
        Ok(())
    }

    /// Remove the top element and return it to the caller.
    ///
    /// The vacated slot is cleared, so the stack does not keep anything that was popped.
    pub fn pop(&mut self) -> Result<T, StackError> {
        let top = self.checked_top()?;
        let element = self.storage[top].take().ok_or(StackError::Empty)?;
        self.count = top;
        trace!(count = self.count, "Popping done.");
        Ok(element)
    }

    /// Return a reference to the top element without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        let top = self.checked_top()?;
        self.storage[top].as_ref().ok_or(StackError::Empty)
    }

    /// Same as `peek`, but the top element can be modified in place.
    pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
        let top = self.checked_top()?;
        self.storage[top].as_mut().ok_or(StackError::Empty)
    }

    /// Number of elements currently stored in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// The maximal number of elements this stack can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Index of the top element, or `None` when the stack is empty.
    ///
    /// When present, this is always `len() - 1`.
    #[inline]
    pub fn top_index(&self) -> Option<usize> {
        self.count.checked_sub(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// **(internal)** Index of the top element, or `Empty` if there is none.
    fn checked_top(&self) -> Result<usize, StackError> {
        match self.top_index() {
            Some(top) => Ok(top),
            None => {
                debug!("Stack is empty.");
                Err(StackError::Empty)
            }
        }
    }
}

impl<T> Drop for BoundedStack<T> {
    fn drop(&mut self) {
        // Storage taken by `destroy` is already reported there.
        if !self.storage.is_empty() {
            trace!(
                capacity = self.capacity(),
                remaining = self.count,
                "Stack has been released."
            );
        }
    }
}
