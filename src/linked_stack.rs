use core::{fmt, mem};

use crate::{BoundedStack, StackError};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// Fixed-capacity stack over a singly-linked chain of boxed nodes.
///
/// `top` owns the most recent node, which owns its successor, down to the
/// bottom of the stack.
pub struct BoundedLinkedStack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
    capacity: usize,
}

impl<T> BoundedLinkedStack<T> {
    pub fn new(capacity: usize) -> Result<Self, StackError> {
        if capacity == 0 {
            return Err(StackError::InvalidCapacity { requested: capacity });
        }
        tracing::trace!(capacity, "linked stack created");
        Ok(BoundedLinkedStack {
            top: None,
            len: 0,
            capacity,
        })
    }

    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.len == self.capacity {
            tracing::debug!(capacity = self.capacity, "push rejected, stack full");
            return Err(StackError::Overflow { capacity: self.capacity });
        }
        let node = Box::new(Node {
            value,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        match self.top.take() {
            Some(node) => {
                let node = *node;
                self.top = node.next;
                self.len -= 1;
                Ok(node.value)
            }
            None => {
                tracing::debug!(capacity = self.capacity, "pop rejected, stack empty");
                Err(StackError::Underflow)
            }
        }
    }

    pub fn peek(&self) -> Result<&T, StackError> {
        match self.top.as_deref() {
            Some(node) => Ok(&node.value),
            None => {
                tracing::debug!(capacity = self.capacity, "peek rejected, stack empty");
                Err(StackError::Underflow)
            }
        }
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
        let capacity = self.capacity;
        match self.top.as_deref_mut() {
            Some(node) => Ok(&mut node.value),
            None => {
                tracing::debug!(capacity, "peek rejected, stack empty");
                Err(StackError::Underflow)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Unlinks and drops every node one at a time, then zeroes the capacity.
    ///
    /// Letting `Box<Node<T>>` drop the chain would recurse once per node, so
    /// each successor is detached before its predecessor is freed.
    pub fn clear(&mut self) {
        tracing::trace!(capacity = self.capacity, len = self.len, "linked stack released");
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
        self.capacity = 0;
    }

    /// Moves the chain and counters into a new stack and leaves `self`
    /// released.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Live elements in pop order, top first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.top.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> BoundedStack<T> for BoundedLinkedStack<T> {
    fn push(&mut self, value: T) -> Result<(), StackError> {
        BoundedLinkedStack::push(self, value)
    }

    fn pop(&mut self) -> Result<T, StackError> {
        BoundedLinkedStack::pop(self)
    }

    fn peek(&self) -> Result<&T, StackError> {
        BoundedLinkedStack::peek(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        BoundedLinkedStack::clear(self)
    }
}

impl<T> Default for BoundedLinkedStack<T> {
    fn default() -> Self {
        BoundedLinkedStack {
            top: None,
            len: 0,
            capacity: 0,
        }
    }
}

impl<T> Drop for BoundedLinkedStack<T> {
    fn drop(&mut self) {
        if self.top.is_some() {
            self.clear();
        }
    }
}

impl<T: Clone> Clone for BoundedLinkedStack<T> {
    /// Rebuilds the chain top to bottom with fresh nodes, so the copy pops
    /// in the same order and shares no node with `self`.
    fn clone(&self) -> Self {
        let mut copy = BoundedLinkedStack {
            top: None,
            len: 0,
            capacity: self.capacity,
        };
        let mut tail = &mut copy.top;
        for value in self.iter() {
            let node = tail.insert(Box::new(Node {
                value: value.clone(),
                next: None,
            }));
            tail = &mut node.next;
            copy.len += 1;
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        mem::swap(self, &mut fresh);
    }
}

impl<T: PartialEq> PartialEq for BoundedLinkedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BoundedLinkedStack<T> {}

impl<T: fmt::Debug> fmt::Debug for BoundedLinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedLinkedStack")
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .field("top_to_bottom", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BoundedLinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
