//! Ring buffer for the event log
//!
//! Keeps the most recent items up to a fixed capacity, dropping the oldest
//! one when a new item arrives at capacity.

use std::collections::VecDeque;

/// A fixed-capacity ring buffer
#[derive(Clone, Debug)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// A capacity of 0 makes every push a no-op
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(1024)),
        }
    }

    /// Push a value, returning the evicted oldest value if the buffer was full
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.cap == 0 {
            return None;
        }
        let evicted = if self.buf.len() == self.cap {
            self.buf.pop_front()
        } else {
            None
        };
        self.buf.push_back(value);
        evicted
    }

    /// Items from the most recent to the oldest
    pub fn iter_rev(&self) -> impl Iterator<Item = &T> {
        self.buf.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut deque = BoundedDeque::new(3);
        assert_eq!(deque.push('a'), None);
        assert_eq!(deque.push('b'), None);
        assert_eq!(deque.push('c'), None);
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.capacity(), 3);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut deque = BoundedDeque::new(2);
        deque.push(1);
        deque.push(2);
        assert_eq!(deque.push(3), Some(1));
        assert_eq!(deque.iter_rev().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut deque = BoundedDeque::new(0);
        assert_eq!(deque.push(1), None);
        assert!(deque.is_empty());
    }
}
