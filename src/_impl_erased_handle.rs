use crate::{BoundedStack, ErasedHandle, StackError};
use std::any::Any;
use tracing::debug;

impl BoundedStack<ErasedHandle> {
    /// Return a reference to the top element, provided it holds a value of type `U`.
    ///
    /// Fails with `Empty` on an empty stack and with `TypeMismatch` when the top element
    /// has a different type. The stack is not modified either way.
    pub fn peek_as<U: Any>(&self) -> Result<&U, StackError> {
        let handle = self.peek()?;
        match (**handle).downcast_ref::<U>() {
            Some(value) => Ok(value),
            None => {
                debug!(expected = std::any::type_name::<U>(), "Top element type mismatch.");
                Err(StackError::TypeMismatch)
            }
        }
    }

    /// Pop the top element, provided it holds a value of type `U`.
    ///
    /// On `TypeMismatch`, the element stays on the stack.
    pub fn pop_as<U: Any>(&mut self) -> Result<Box<U>, StackError> {
        self.peek_as::<U>()?;
        self.pop()?
            .downcast::<U>()
            .map_err(|_| StackError::TypeMismatch)
    }
}
