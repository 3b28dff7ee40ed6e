//! Recency List Module
//!
//! Tracks key recency order for LRU eviction. Keys only; values live in
//! the storage backend.
//!
//! The list is a doubly linked list whose nodes live in an arena addressed
//! by index, with a free list for recycling evicted slots. Head is the
//! most recently used key, tail the least recently used. A key -> slot
//! map gives O(1) positional updates.

use std::collections::HashMap;

/// Index into the node arena.
type NodeIndex = usize;

/// Sentinel value for null links.
const NULL_INDEX: NodeIndex = usize::MAX;

// == Recency Node ==
/// A node in the doubly linked recency list.
#[derive(Debug, Clone)]
struct RecencyNode {
    /// The tracked key
    key: String,
    /// Slot of the previous (more recently used) node
    prev: NodeIndex,
    /// Slot of the next (less recently used) node
    next: NodeIndex,
}

// == Recency List ==
/// Strict MRU -> LRU ordering of keys with O(1) updates.
///
/// Invariant: every tracked key has exactly one node in the list and one
/// entry in the index, and vice versa.
#[derive(Debug, Default)]
pub struct RecencyList {
    /// Node arena, contiguous storage for all nodes
    arena: Vec<RecencyNode>,
    /// Recycled arena slots
    free_list: Vec<NodeIndex>,
    /// Key -> arena slot index
    index: HashMap<String, NodeIndex>,
    /// Most recently used slot
    head: NodeIndex,
    /// Least recently used slot
    tail: NodeIndex,
}

impl RecencyList {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free_list: Vec::new(),
            index: HashMap::new(),
            head: NULL_INDEX,
            tail: NULL_INDEX,
        }
    }

    // == Push Front ==
    /// Inserts a brand-new key as the most recently used entry.
    ///
    /// Precondition: the key is not already tracked.
    pub fn push_front(&mut self, key: String) {
        debug_assert!(!self.index.contains_key(&key), "key already tracked");

        let idx = self.alloc_node(RecencyNode {
            key: key.clone(),
            prev: NULL_INDEX,
            next: NULL_INDEX,
        });
        self.index.insert(key, idx);
        self.link_front(idx);
    }

    // == Touch ==
    /// Promotes an already-tracked key to most recently used.
    ///
    /// Returns true if the key was tracked. No-op (but still true) when
    /// the key is already at the head.
    pub fn touch(&mut self, key: &str) -> bool {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => return false,
        };
        if idx != self.head {
            self.detach(idx);
            self.link_front(idx);
        }
        true
    }

    // == Pop Back ==
    /// Detaches and returns the least recently used key, or None if empty.
    pub fn pop_back(&mut self) -> Option<String> {
        if self.tail == NULL_INDEX {
            return None;
        }
        let idx = self.tail;
        self.detach(idx);
        let key = std::mem::take(&mut self.arena[idx].key);
        self.index.remove(&key);
        self.free_list.push(idx);
        Some(key)
    }

    // == Remove ==
    /// Detaches an arbitrary key, fixing head/tail pointers as needed.
    ///
    /// Returns true if the key was tracked.
    pub fn remove(&mut self, key: &str) -> bool {
        let idx = match self.index.remove(key) {
            Some(idx) => idx,
            None => return false,
        };
        self.detach(idx);
        self.arena[idx].key.clear();
        self.free_list.push(idx);
        true
    }

    // == Clear ==
    /// Drops every tracked key and resets the arena.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.free_list.clear();
        self.index.clear();
        self.head = NULL_INDEX;
        self.tail = NULL_INDEX;
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Peek Back ==
    /// Returns the least recently used key without removing it.
    #[allow(dead_code)]
    pub fn peek_back(&self) -> Option<&str> {
        if self.tail == NULL_INDEX {
            None
        } else {
            Some(self.arena[self.tail].key.as_str())
        }
    }

    // == Peek Front ==
    /// Returns the most recently used key without removing it.
    #[allow(dead_code)]
    pub fn peek_front(&self) -> Option<&str> {
        if self.head == NULL_INDEX {
            None
        } else {
            Some(self.arena[self.head].key.as_str())
        }
    }

    // == Internal: Node Management ==
    /// Allocates a node from the free list or by appending to the arena.
    fn alloc_node(&mut self, node: RecencyNode) -> NodeIndex {
        if let Some(idx) = self.free_list.pop() {
            self.arena[idx] = node;
            idx
        } else {
            let idx = self.arena.len();
            self.arena.push(node);
            idx
        }
    }

    // == Internal: Linked List Operations ==
    /// Detaches a node from the list without freeing its slot.
    fn detach(&mut self, idx: NodeIndex) {
        let prev = self.arena[idx].prev;
        let next = self.arena[idx].next;

        if prev != NULL_INDEX {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NULL_INDEX {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.arena[idx].prev = NULL_INDEX;
        self.arena[idx].next = NULL_INDEX;
    }

    /// Links a detached node in at the head position.
    fn link_front(&mut self, idx: NodeIndex) {
        self.arena[idx].prev = NULL_INDEX;
        self.arena[idx].next = self.head;

        if self.head != NULL_INDEX {
            self.arena[self.head].prev = idx;
        }
        self.head = idx;

        if self.tail == NULL_INDEX {
            self.tail = idx;
        }
    }
}
