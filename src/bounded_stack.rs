use crate::StackError;

/// Operations shared by every fixed-capacity LIFO stack in this crate.
///
/// Implementors never grow: `capacity` is fixed at construction and only
/// drops to 0 when the stack is cleared or moved out of.
pub trait BoundedStack<T> {
    /// Places `value` on top, or fails with [`StackError::Overflow`] leaving
    /// the stack untouched.
    fn push(&mut self, value: T) -> Result<(), StackError>;

    /// Removes and returns the top element, or fails with
    /// [`StackError::Underflow`].
    fn pop(&mut self) -> Result<T, StackError>;

    /// Borrows the top element without removing it.
    fn peek(&self) -> Result<&T, StackError>;

    /// Number of live elements.
    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    /// Drops every element and releases storage; capacity becomes 0.
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}
