#![no_std]

//! `stackqueue`: a growable last-in-first-out stack and a linked first-in-first-out queue.
//!
//! `Stack<T>` stores its elements in one contiguous buffer and doubles the
//! buffer whenever a push finds it full. `Queue<T>` stores each element in its
//! own heap node, chained from front to rear.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `Stack::push()`: amortized O(1), O(n) on the push that triggers growth
//! - `Stack::pop()`, `Stack::peek()`: O(1)
//! - `Queue::enqueue()`, `Queue::dequeue()`, `Queue::front()`: O(1)
//! - `len()`, `is_empty()`: O(1) on both containers
//! - Dropping a queue: O(n), one node at a time without recursion
//!
//! ## Space Complexity
//! - Stack: one buffer of `capacity()` slots, never shrinks
//! - Queue: one allocation per element plus a pointer per node
//!
//! # Error Handling
//!
//! Removing or inspecting an element of an empty container returns
//! `ContainerError::Underflow` and leaves the container unchanged:
//!
//! ```
//! # use stackqueue::{ContainerError, Queue, Stack};
//! let mut stack: Stack<i32> = Stack::with_default_capacity();
//! assert_eq!(
//!     stack.pop(),
//!     Err(ContainerError::Underflow { container: "stack", operation: "pop" })
//! );
//! assert_eq!(stack.len(), 0);
//!
//! let mut queue: Queue<i32> = Queue::new();
//! assert!(queue.dequeue().is_err());
//! assert!(queue.front().is_err());
//!
//! assert!(Stack::<i32>::new(0).is_err());
//! ```
//!
//! # Stack Interface
//!
//! ```
//! # use stackqueue::Stack;
//! let mut stack = Stack::new(2).unwrap();
//!
//! stack.push(1);
//! stack.push(2);
//! stack.push(3); // grows to capacity 4
//! assert_eq!(stack.capacity(), 4);
//!
//! // Peek at the top element without removing it
//! assert_eq!(stack.peek(), Ok(&3));
//!
//! // Pop elements in LIFO order
//! assert_eq!(stack.pop(), Ok(3));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert!(stack.is_empty());
//! ```
//!
//! # Queue Interface
//!
//! ```
//! # use stackqueue::Queue;
//! let mut queue = Queue::new();
//!
//! queue.enqueue("first");
//! queue.enqueue("second");
//! assert_eq!(queue.front(), Ok(&"first"));
//!
//! // Dequeue elements in FIFO order
//! assert_eq!(queue.dequeue(), Ok("first"));
//! assert_eq!(queue.dequeue(), Ok("second"));
//! assert!(queue.is_empty());
//! ```
//!
//! # Logging
//!
//! Lifecycle events (creation, growth, drop) are reported at `debug` level and
//! individual push/pop/enqueue/dequeue calls at `trace` level through the
//! [`log`](https://docs.rs/log) facade. No logger is installed by this crate.

extern crate alloc;

mod error;
mod queue;
mod stack;

pub use error::ContainerError;
pub use queue::Queue;
pub use stack::{Stack, DEFAULT_CAPACITY};
