mod collect;
mod sift;

use crate::{Entry, MinHeap};

impl<K: Ord, V> MinHeap<K, V> {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> &Entry<K, V> {
        self.entries.push(Entry::new(key, value));
        let settled = self.sift_up(self.entries.len() - 1);
        &self.entries[settled]
    }

    pub fn min(&self) -> Option<&Entry<K, V>> {
        self.entries.first()
    }

    pub fn remove_min(&mut self) -> Option<Entry<K, V>> {
        if self.entries.is_empty() {
            return None;
        }
        // the last entry takes the root's place so the vec shrinks from the back
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        min
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
