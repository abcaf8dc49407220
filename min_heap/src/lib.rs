mod entry;
mod impls;

pub use entry::Entry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MinHeap<K: Ord, V> {
    entries: Vec<Entry<K, V>>,
}
