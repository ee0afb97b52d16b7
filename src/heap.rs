//! Array-backed binary min-heap.
//!
//! Element `i` has its children at `2i + 1` and `2i + 2`. Ties between
//! equal elements are whatever `Ord` says, so callers that need a stable
//! order put it in the key.

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Elements in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Ord> MinHeap<T> {
    /// Load `source` and establish heap order bottom-up in O(n).
    pub fn build(source: Vec<T>) -> Self {
        let mut heap = MinHeap { elements: source };
        for i in (0..heap.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Add `value` and restore heap order by sifting it up.
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the smallest element.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(Error::QueueUnderflow);
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop().ok_or(Error::QueueUnderflow)?;
        self.sift_down(0);
        Ok(min)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.elements[i] >= self.elements[parent] {
                break;
            }
            self.elements.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < n && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < n && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.elements.len()).all(|i| self.elements[(i - 1) / 2] <= self.elements[i])
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
