// SPDX-License-Identifier: MPL-2.0
//! Ring buffer backing the player event log.
//!
//! Memory stays bounded: once the buffer is full, each push drops the oldest
//! entry.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// Fixed-capacity FIFO that evicts from the front.
///
/// # Example
///
/// ```
/// use iced_reel::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<&str> = CircularBuffer::new(BufferCapacity::default());
/// buffer.push("tap");
/// buffer.push("skip");
///
/// assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec!["tap", "skip"]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Bypasses the [`BufferCapacity`] bounds. Intended for tests with tiny
    /// buffers; a zero capacity is raised to one.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(buffer: &CircularBuffer<u32>) -> Vec<u32> {
        buffer.iter().copied().collect()
    }

    #[test]
    fn keeps_insertion_order_below_capacity() {
        let mut buffer = CircularBuffer::with_raw_capacity(4);
        buffer.push(1);
        buffer.push(2);

        assert_eq!(collect(&buffer), vec![1, 2]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn full_buffer_drops_oldest() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        for value in 1..=5 {
            buffer.push(value);
        }

        assert_eq!(collect(&buffer), vec![3, 4, 5]);
        assert_eq!(buffer.len(), buffer.capacity());
    }

    #[test]
    fn zero_raw_capacity_holds_one_item() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push(7);
        buffer.push(8);

        assert_eq!(buffer.capacity(), 1);
        assert_eq!(collect(&buffer), vec![8]);
    }

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut buffer = CircularBuffer::with_raw_capacity(5);
        buffer.push(1);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 5);
    }

    #[test]
    fn new_uses_validated_capacity() {
        let buffer: CircularBuffer<u32> = CircularBuffer::new(BufferCapacity::new(1));
        assert_eq!(buffer.capacity(), 16);
    }
}
