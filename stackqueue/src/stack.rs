use alloc::vec::Vec;
use core::fmt;

use crate::error::ContainerError;

/// Capacity used by `Stack::with_default_capacity` and `Default`.
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable last-in-first-out stack backed by a contiguous buffer
#[derive(Debug)]
pub struct Stack<T> {
    buffer: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    /// Creates a new empty `Stack` able to hold `initial_capacity` elements
    /// before its first growth.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::InvalidArgument` if `initial_capacity` is 0.
    pub fn new(initial_capacity: usize) -> Result<Self, ContainerError> {
        if initial_capacity == 0 {
            return Err(ContainerError::InvalidArgument {
                parameter: "initial_capacity",
                value: initial_capacity,
            });
        }

        log::debug!("Stack created with capacity {initial_capacity}");
        Ok(Self {
            buffer: Vec::with_capacity(initial_capacity),
            capacity: initial_capacity,
        })
    }

    /// Creates a new empty `Stack` with the default capacity (10).
    #[must_use]
    pub fn with_default_capacity() -> Self {
        log::debug!("Stack created with capacity {DEFAULT_CAPACITY}");
        Self {
            buffer: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of elements the stack holds before the next growth.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Replaces the buffer with one twice as large, moving every element
    /// across in order. The old buffer is released when it goes out of scope.
    fn grow(&mut self) {
        let new_capacity = self.capacity.saturating_mul(2);
        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend(self.buffer.drain(..));
        self.buffer = grown;

        log::debug!(
            "Stack resized from capacity {} to {}",
            self.capacity,
            new_capacity
        );
        self.capacity = new_capacity;
    }

    /// Pushes a value onto the top of the stack, doubling the capacity first
    /// if the stack is full.
    pub fn push(&mut self, value: T) {
        if self.buffer.len() == self.capacity {
            self.grow();
        }
        self.buffer.push(value);
        log::trace!("Stack push, len {}", self.buffer.len());
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::Underflow` if the stack is empty. The stack
    /// is left unchanged.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        let value = self
            .buffer
            .pop()
            .ok_or_else(|| ContainerError::stack_underflow("pop"))?;
        log::trace!("Stack pop, len {}", self.buffer.len());
        Ok(value)
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::Underflow` if the stack is empty.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.buffer
            .last()
            .ok_or_else(|| ContainerError::stack_underflow("peek"))
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        log::debug!("Stack dropped with {} elements", self.buffer.len());
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Stack is empty");
        }

        write!(f, "Stack (top to bottom): ")?;
        for (i, value) in self.buffer.iter().rev().enumerate() {
            if i > 0 {
                write!(f, " <- ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
