use crate::MinHeap;

fn parent(node: usize) -> Option<usize> {
    if node == 0 {
        None
    } else {
        Some((node - 1) / 2)
    }
}

impl<K: Ord, V> MinHeap<K, V> {
    fn children(&self, node: usize) -> (Option<usize>, Option<usize>) {
        let bounded = |child: usize| {
            if child < self.entries.len() {
                Some(child)
            } else {
                None
            }
        };
        (bounded(2 * node + 1), bounded(2 * node + 2))
    }

    pub(super) fn sift_up(&mut self, mut node: usize) -> usize {
        while let Some(parent) = parent(node) {
            if self.entries[node].key() < self.entries[parent].key() {
                self.entries.swap(node, parent);
                node = parent;
            } else {
                break;
            }
        }
        node
    }

    pub(super) fn sift_down(&mut self, mut node: usize) {
        loop {
            // dense storage: a right child implies a left child
            let smaller_child = match self.children(node) {
                (None, _) => break,
                (Some(left), None) => left,
                (Some(left), Some(right)) => {
                    if self.entries[right].key() < self.entries[left].key() {
                        right
                    } else {
                        left
                    }
                }
            };
            if self.entries[smaller_child].key() < self.entries[node].key() {
                self.entries.swap(node, smaller_child);
                node = smaller_child;
            } else {
                break;
            }
        }
    }
}
