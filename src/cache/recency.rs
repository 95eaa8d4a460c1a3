//! Recency List Module
//!
//! Doubly linked list stored in a flat slot arena. Nodes are linked by
//! `SlotId` instead of pointers, so push-front, move-to-front and remove are
//! O(1) without shared ownership.
//!
//! ```text
//!   head (most recent) ─► [s3] ◄──► [s0] ◄──► [s2] ◄── tail (least recent)
//! ```

use std::ops::{Index, IndexMut};

// == Slot Id ==
/// Stable handle to a node in the recency list.
///
/// A handle is valid until its node is removed; the slot may then be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId(usize);

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

// == Recency List ==
/// Arena-backed doubly linked list ordered by recency.
///
/// - Head = most recently used
/// - Tail = least recently used (next eviction candidate)
#[derive(Debug)]
pub(crate) struct RecencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn get(&self, id: SlotId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    /// Handle of the least recently used node.
    pub(crate) fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Value of the least recently used node.
    pub(crate) fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    // == Push Front ==
    /// Inserts a value as the most recently used node.
    pub(crate) fn push_front(&mut self, value: T) -> SlotId {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                SlotId(idx)
            }
            None => {
                self.slots.push(Some(node));
                SlotId(self.slots.len() - 1)
            }
        };
        self.len += 1;
        self.attach_front(id);
        id
    }

    // == Move To Front ==
    /// Marks a node as most recently used. Returns `false` for a stale handle.
    pub(crate) fn move_to_front(&mut self, id: SlotId) -> bool {
        if self.node(id).is_none() {
            return false;
        }
        if self.head != Some(id) {
            self.detach(id);
            self.attach_front(id);
        }
        true
    }

    // == Remove ==
    /// Unlinks a node and frees its slot.
    pub(crate) fn remove(&mut self, id: SlotId) -> Option<T> {
        self.node(id)?;
        self.detach(id);
        let node = self.slots[id.0].take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.value)
    }

    // == Clear ==
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Iteration ==
    /// Iterates values from least to most recently used.
    pub(crate) fn iter_oldest_first(&self) -> OldestFirst<'_, T> {
        OldestFirst {
            list: self,
            cursor: self.tail,
        }
    }

    fn node(&self, id: SlotId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: SlotId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn detach(&mut self, id: SlotId) {
        let (prev, next) = match self.node(id) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.node_mut(prev_id) {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.node_mut(next_id) {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = None;
        }
    }

    fn attach_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head_id) => {
                if let Some(head_node) = self.node_mut(head_id) {
                    head_node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }
}

/// Panics if `id` no longer refers to a live node.
impl<T> Index<SlotId> for RecencyList<T> {
    type Output = T;

    fn index(&self, id: SlotId) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("stale slot id {}", id.0),
        }
    }
}

impl<T> IndexMut<SlotId> for RecencyList<T> {
    fn index_mut(&mut self, id: SlotId) -> &mut T {
        match self.node_mut(id) {
            Some(node) => &mut node.value,
            None => panic!("stale slot id {}", id.0),
        }
    }
}

/// Iterator over a [`RecencyList`] from tail to head.
pub(crate) struct OldestFirst<'a, T> {
    list: &'a RecencyList<T>,
    cursor: Option<SlotId>,
}

impl<'a, T> Iterator for OldestFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.prev;
        Some(&node.value)
    }
}
