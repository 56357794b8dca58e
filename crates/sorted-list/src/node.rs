use crate::value::Value;

/// Forward-linked list element. `next` is the arena index of the successor.
#[derive(Clone, Debug)]
pub struct Node {
    pub value: Value,
    pub next: Option<u32>,
}

impl Node {
    pub fn new(value: Value, next: Option<u32>) -> Self {
        Self { value, next }
    }
}

/// Arena slot. Vacant slots form an intrusive free list.
#[derive(Clone, Debug)]
pub(crate) enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<u32> },
}

/// Per-list node storage: a vector of slots plus the head of the free list.
#[derive(Clone, Debug, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free: Option<u32>,
    occupied: usize,
}

impl Arena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            occupied: 0,
        }
    }

    /// Stores `node`, reusing the most recently vacated slot if there is one.
    pub fn alloc(&mut self, node: Node) -> u32 {
        self.occupied += 1;
        match self.free {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                if let Slot::Vacant { next_free } = *slot {
                    self.free = next_free;
                }
                *slot = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                (self.slots.len() - 1) as u32
            }
        }
    }

    /// Vacates slot `idx` and hands back the node that lived there.
    pub fn release(&mut self, idx: u32) -> Node {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[idx as usize], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { .. } => unreachable!("released a vacant slot {idx}"),
        }
    }

    #[inline]
    pub fn get(&self, idx: u32) -> &Node {
        match &self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling link to vacant slot {idx}"),
        }
    }

    #[inline]
    pub fn get_mut(&mut self, idx: u32) -> &mut Node {
        match &mut self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling link to vacant slot {idx}"),
        }
    }

    #[inline]
    pub fn next(&self, idx: u32) -> Option<u32> {
        self.get(idx).next
    }

    #[inline]
    pub fn value(&self, idx: u32) -> &Value {
        &self.get(idx).value
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.occupied = 0;
    }

    pub fn occupied(&self) -> usize {
        self.occupied
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of entries reachable through the free list.
    pub fn free_len(&self) -> usize {
        let mut len = 0;
        let mut curr = self.free;
        while let Some(idx) = curr {
            len += 1;
            curr = match self.slots.get(idx as usize) {
                Some(Slot::Vacant { next_free }) => *next_free,
                _ => None,
            };
            if len > self.slots.len() {
                break;
            }
        }
        len
    }

    pub fn is_occupied(&self, idx: u32) -> bool {
        matches!(self.slots.get(idx as usize), Some(Slot::Occupied(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slots_are_reused_lifo() {
        let mut arena = Arena::default();
        let a = arena.alloc(Node::new(Value::Integer(1), None));
        let b = arena.alloc(Node::new(Value::Integer(2), None));
        let c = arena.alloc(Node::new(Value::Integer(3), None));
        assert_eq!((a, b, c), (0, 1, 2));

        assert_eq!(arena.release(a).value, Value::Integer(1));
        assert_eq!(arena.release(c).value, Value::Integer(3));
        assert_eq!(arena.occupied(), 1);
        assert_eq!(arena.free_len(), 2);

        assert_eq!(arena.alloc(Node::new(Value::Integer(4), None)), c);
        assert_eq!(arena.alloc(Node::new(Value::Integer(5), None)), a);
        assert_eq!(arena.alloc(Node::new(Value::Integer(6), None)), 3);
        assert_eq!(arena.free_len(), 0);
        assert_eq!(arena.capacity(), 4);
        assert_eq!(*arena.value(a), Value::Integer(5));
    }

    #[test]
    fn clear_drops_everything() {
        let mut arena = Arena::with_capacity(4);
        let a = arena.alloc(Node::new(Value::Text("x".into()), None));
        arena.release(a);
        arena.clear();
        assert_eq!(arena.occupied(), 0);
        assert_eq!(arena.free_len(), 0);
        assert!(!arena.is_occupied(a));
    }
}
