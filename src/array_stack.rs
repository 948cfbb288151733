use core::{fmt, iter::Rev, mem, slice};

use crate::{BoundedStack, StackError};

/// Fixed-capacity stack over one contiguous buffer.
///
/// The buffer is reserved for exactly `capacity` elements up front and never
/// reallocates; `[len, capacity)` stays uninitialized spare room.
pub struct BoundedArrayStack<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> BoundedArrayStack<T> {
    pub fn new(capacity: usize) -> Result<Self, StackError> {
        if capacity == 0 {
            return Err(StackError::InvalidCapacity { requested: capacity });
        }
        tracing::trace!(capacity, "array stack allocated");
        Ok(BoundedArrayStack {
            data: Vec::with_capacity(capacity),
            capacity,
        })
    }

    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity, "push rejected, stack full");
            return Err(StackError::Overflow { capacity: self.capacity });
        }
        self.data.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.data.pop().ok_or_else(|| {
            tracing::debug!(capacity = self.capacity, "pop rejected, stack empty");
            StackError::Underflow
        })
    }

    pub fn peek(&self) -> Result<&T, StackError> {
        self.data.last().ok_or_else(|| {
            tracing::debug!(capacity = self.capacity, "peek rejected, stack empty");
            StackError::Underflow
        })
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
        let capacity = self.capacity;
        self.data.last_mut().ok_or_else(|| {
            tracing::debug!(capacity, "peek rejected, stack empty");
            StackError::Underflow
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Drops the live elements and releases the buffer. The stack is left
    /// with capacity 0, so later pushes fail with `Overflow`.
    pub fn clear(&mut self) {
        tracing::trace!(capacity = self.capacity, len = self.data.len(), "array stack released");
        while self.data.pop().is_some() {}
        self.data = Vec::new();
        self.capacity = 0;
    }

    /// Moves the buffer and counters into a new stack and leaves `self`
    /// released (capacity 0, no buffer).
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Live elements in pop order, top first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data.iter().rev(),
        }
    }
}

impl<T> BoundedStack<T> for BoundedArrayStack<T> {
    fn push(&mut self, value: T) -> Result<(), StackError> {
        BoundedArrayStack::push(self, value)
    }

    fn pop(&mut self) -> Result<T, StackError> {
        BoundedArrayStack::pop(self)
    }

    fn peek(&self) -> Result<&T, StackError> {
        BoundedArrayStack::peek(self)
    }

    fn len(&self) -> usize {
        BoundedArrayStack::len(self)
    }

    fn capacity(&self) -> usize {
        BoundedArrayStack::capacity(self)
    }

    fn clear(&mut self) {
        BoundedArrayStack::clear(self)
    }
}

/// The released state: capacity 0, nothing allocated.
impl<T> Default for BoundedArrayStack<T> {
    fn default() -> Self {
        BoundedArrayStack {
            data: Vec::new(),
            capacity: 0,
        }
    }
}

impl<T: Clone> Clone for BoundedArrayStack<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend(self.data.iter().cloned());
        BoundedArrayStack {
            data,
            capacity: self.capacity,
        }
    }

    // Build the copy first so a panicking `T::clone` leaves `self` intact.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        mem::swap(self, &mut fresh);
    }
}

impl<T: PartialEq> PartialEq for BoundedArrayStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.data == other.data
    }
}

impl<T: Eq> Eq for BoundedArrayStack<T> {}

impl<T: fmt::Debug> fmt::Debug for BoundedArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedArrayStack")
            .field("capacity", &self.capacity)
            .field("len", &self.data.len())
            .field("top_to_bottom", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a BoundedArrayStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    inner: Rev<slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
