//! Fixed-capacity LIFO stacks with two interchangeable storage strategies:
//! [`BoundedArrayStack`] keeps elements in one contiguous buffer, and
//! [`BoundedLinkedStack`] keeps them in a chain of boxed nodes. Both
//! implement [`BoundedStack`] and report contract violations as
//! [`StackError`].

mod array_stack;
mod bounded_stack;
mod error;
mod linked_stack;

pub use array_stack::{BoundedArrayStack, Iter as ArrayIter};
pub use bounded_stack::BoundedStack;
pub use error::StackError;
pub use linked_stack::{BoundedLinkedStack, Iter as LinkedIter};
