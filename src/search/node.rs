//! Candidate-move lists backed by a recursion-scoped buffer pool
//!
//! The search checks out one list per ply and retires it when that ply
//! unwinds. [`NodeList`] is an RAII guard: constructing it advances the pool
//! cursor and `Drop` rewinds it, so release order mirrors acquire order on
//! every exit path, pruning cutoffs included. After the first descent to full
//! depth the search allocates nothing; buffers are cleared and reused.

use std::cell::{Cell, RefCell};

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Buffers pre-allocated for the search stack.
const POOL_DEPTH: usize = 32;
/// Initial capacity of each candidate buffer.
const LIST_CAPACITY: usize = 32;

/// A candidate move with its ordering score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub loc: u8,
    pub value: i32,
}

impl Node {
    #[inline]
    pub fn new(loc: u8, value: i32) -> Self {
        Self { loc, value }
    }
}

/// Depth-indexed arena of reusable candidate buffers.
///
/// At most one buffer is checked out per active recursion level. The arena
/// grows when recursion outruns the pre-allocated depth and a buffer grows
/// past its initial capacity if a ply ever has more candidates; the fixed
/// sizes are pre-allocation hints, not limits.
pub struct NodePool {
    buffers: RefCell<Vec<Vec<Node>>>,
    cursor: Cell<usize>,
}

impl NodePool {
    pub fn new() -> Self {
        Self {
            buffers: RefCell::new(
                (0..POOL_DEPTH)
                    .map(|_| Vec::with_capacity(LIST_CAPACITY))
                    .collect(),
            ),
            cursor: Cell::new(0),
        }
    }

    /// Check out the next free buffer as an empty candidate list.
    pub fn acquire(&self) -> NodeList<'_> {
        let index = self.cursor.get();
        let mut buffers = self.buffers.borrow_mut();
        if index == buffers.len() {
            buffers.push(Vec::with_capacity(LIST_CAPACITY));
        }
        buffers[index].clear();
        drop(buffers);
        self.cursor.set(index + 1);
        NodeList { pool: self, index }
    }

    /// Number of buffers currently checked out.
    pub fn in_use(&self) -> usize {
        self.cursor.get()
    }
}

impl Default for NodePool {
    fn default() -> Self {
        Self::new()
    }
}

/// One ply's candidate list, released back to the pool on drop.
pub struct NodeList<'a> {
    pool: &'a NodePool,
    index: usize,
}

impl NodeList<'_> {
    #[inline]
    pub fn push(&mut self, node: Node) {
        self.pool.buffers.borrow_mut()[self.index].push(node);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pool.buffers.borrow()[self.index].len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate at position `i`; panics when out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Node {
        self.pool.buffers.borrow()[self.index][i]
    }

    /// Stable sort, best score first.
    pub fn sort_desc(&mut self) {
        self.pool.buffers.borrow_mut()[self.index].sort_by(|a, b| b.value.cmp(&a.value));
    }

    /// Stable sort, worst score first.
    pub fn sort_asc(&mut self) {
        self.pool.buffers.borrow_mut()[self.index].sort_by(|a, b| a.value.cmp(&b.value));
    }

    /// Uniformly random permutation of the candidates.
    pub fn shuffle(&mut self) {
        self.pool.buffers.borrow_mut()[self.index].shuffle(&mut thread_rng());
    }
}

impl Drop for NodeList<'_> {
    fn drop(&mut self) {
        debug_assert_eq!(
            self.pool.cursor.get(),
            self.index + 1,
            "candidate lists must be released in reverse acquire order"
        );
        self.pool.cursor.set(self.index);
    }
}
