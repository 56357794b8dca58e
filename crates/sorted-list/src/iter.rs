use std::iter::FusedIterator;

use crate::node::Arena;
use crate::value::Value;

/// Lazy head-to-tail cursor over a [`SortedList`](crate::SortedList).
///
/// Holds a shared borrow of the list storage, so the list cannot change while
/// the cursor is alive. Call `iter()` again to restart.
#[derive(Clone)]
pub struct Iter<'a> {
    arena: &'a Arena,
    next: Option<u32>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(arena: &'a Arena, head: Option<u32>, len: usize) -> Self {
        Self {
            arena,
            next: head,
            remaining: len,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.arena.get(idx);
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
