use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::ContainerError;

struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

/// A first-in-first-out queue backed by a singly linked chain of nodes
///
/// Every node is owned by its predecessor, the front node by the queue
/// itself. `rear` is a non-owning alias of the last node.
pub struct Queue<T> {
    front: Option<NonNull<Node<T>>>,
    rear: Option<NonNull<Node<T>>>,
    count: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

// Safe: the queue uniquely owns its nodes, no pointer escapes the API.
#[allow(unsafe_code)]
unsafe impl<T: Send> Send for Queue<T> {}
// Safe: shared access only ever hands out `&T`.
#[allow(unsafe_code)]
unsafe impl<T: Sync> Sync for Queue<T> {}

impl<T> Queue<T> {
    #[must_use]
    pub fn new() -> Self {
        log::debug!("Queue created");
        Self {
            front: None,
            rear: None,
            count: 0,
            _owns: PhantomData,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Adds a value at the rear of the queue.
    pub fn enqueue(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { value, next: None })));

        match self.rear {
            Some(mut rear) => {
                // Safe: `rear` points to the live last node of the chain, and
                // `&mut self` guarantees no other reference to it exists.
                #[allow(unsafe_code)]
                let rear = unsafe { rear.as_mut() };
                rear.next = Some(node);
            }
            None => self.front = Some(node),
        }
        self.rear = Some(node);
        self.count += 1;

        log::trace!("Queue enqueue, len {}", self.count);
    }

    /// Removes and returns the front value.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::Underflow` if the queue is empty. The queue
    /// is left unchanged.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        let front = self
            .front
            .ok_or_else(|| ContainerError::queue_underflow("dequeue"))?;

        // Safe: `front` was produced by `Box::leak` in `enqueue` and is
        // reachable only through the chain. Detaching it here hands the
        // ownership back to a `Box` exactly once.
        #[allow(unsafe_code)]
        let node = unsafe { Box::from_raw(front.as_ptr()) };

        self.front = node.next;
        if self.front.is_none() {
            self.rear = None;
        }
        self.count -= 1;

        log::trace!("Queue dequeue, len {}", self.count);
        Ok(node.value)
    }

    /// Returns the front value without removing it.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::Underflow` if the queue is empty.
    pub fn front(&self) -> Result<&T, ContainerError> {
        let node = self
            .front
            .ok_or_else(|| ContainerError::queue_underflow("front"))?;

        // Safe: the front node stays alive for as long as `self` is
        // borrowed, since only `&mut self` methods can free it.
        #[allow(unsafe_code)]
        let value = unsafe { &(*node.as_ptr()).value };
        Ok(value)
    }

    fn values(&self) -> Values<'_, T> {
        Values {
            next: self.front,
            _queue: PhantomData,
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        log::debug!("Queue dropped with {} elements", self.count);
        while self.dequeue().is_ok() {}
    }
}

/// Front-to-rear walk over the chain, used for formatting only.
struct Values<'a, T> {
    next: Option<NonNull<Node<T>>>,
    _queue: PhantomData<&'a Queue<T>>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // Safe: nodes are kept alive by the queue borrowed for `'a`.
            #[allow(unsafe_code)]
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.value
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Queue is empty");
        }

        write!(f, "Queue (front to rear): ")?;
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                write!(f, " <- ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
