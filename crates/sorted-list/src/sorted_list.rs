use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::{Result, SortedListError};
use crate::iter::Iter;
use crate::node::{Arena, Node};
use crate::util::assert_sorted_list;
use crate::value::{compare, ElementKind, Value, ValueRef};

/// Always-sorted, homogeneous sequence of integers or text strings.
///
/// Nodes live in a per-list arena and link forward by slot index. `head` and
/// `tail` are indices into that arena; `tail` is only a shortcut for O(1)
/// `last()` and is re-derived whenever the last node changes.
///
/// The element kind is locked on construction or on the first insertion and
/// survives `clear()`.
#[derive(Clone)]
pub struct SortedList {
    head: Option<u32>,
    tail: Option<u32>,
    count: usize,
    kind: Option<ElementKind>,
    arena: Arena,
}

impl SortedList {
    /// Empty list whose kind is inferred from the first inserted value.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            count: 0,
            kind: None,
            arena: Arena::default(),
        }
    }

    pub fn with_kind(kind: ElementKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::new()
        }
    }

    /// Parses `tag` as an [`ElementKind`] and fixes it, failing with
    /// [`SortedListError::InvalidKind`] for unknown tags.
    pub fn with_kind_tag(tag: &str) -> Result<Self> {
        Ok(Self::with_kind(tag.parse()?))
    }

    /// Pre-sizes node storage for `capacity` elements.
    pub fn with_capacity(kind: Option<ElementKind>, capacity: usize) -> Self {
        Self {
            kind,
            arena: Arena::with_capacity(capacity),
            ..Self::new()
        }
    }

    pub fn of_int() -> Self {
        Self::with_kind(ElementKind::Integer)
    }

    pub fn of_string() -> Self {
        Self::with_kind(ElementKind::Text)
    }

    /// Builds a list by replaying `values` through [`add`](Self::add).
    ///
    /// Stops at the first value whose kind disagrees with `kind` (or with the
    /// kind inferred from the first value).
    pub fn from_values<I, V>(values: I, kind: Option<ElementKind>) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut list = match kind {
            Some(kind) => Self::with_kind(kind),
            None => Self::new(),
        };
        list.add_all(values)?;
        Ok(list)
    }

    pub fn kind(&self) -> Option<ElementKind> {
        self.kind
    }

    fn lock_kind(&mut self, found: ElementKind) -> Result<()> {
        match self.kind {
            None => {
                trace!("sorted list kind inferred as {found}");
                self.kind = Some(found);
                Ok(())
            }
            Some(expected) if expected == found => Ok(()),
            Some(expected) => {
                debug!("rejected {found} value for {expected} sorted list");
                Err(SortedListError::TypeMismatch { expected, found })
            }
        }
    }

    /// Orders the value stored at `idx` against `value`.
    ///
    /// A kind mismatch orders as `Greater`, which ends every scan with "no
    /// match".
    #[inline]
    fn cmp_at(&self, idx: u32, value: ValueRef<'_>) -> Ordering {
        compare(self.arena.value(idx).as_value_ref(), value).unwrap_or(Ordering::Greater)
    }

    fn is_queryable(&self, value: ValueRef<'_>) -> bool {
        self.kind == Some(value.kind())
    }

    /// Inserts `value` at its sorted position.
    ///
    /// A value equal to existing ones is placed before them.
    pub fn add(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.lock_kind(value.kind())?;

        let Some(head) = self.head else {
            let idx = self.arena.alloc(Node::new(value, None));
            self.head = Some(idx);
            self.tail = Some(idx);
            self.count = 1;
            trace!("insert {idx} as sole node");
            return Ok(());
        };

        if self.cmp_at(head, value.as_value_ref()) != Ordering::Less {
            let idx = self.arena.alloc(Node::new(value, Some(head)));
            self.head = Some(idx);
            self.count += 1;
            trace!("insert {idx} at head");
            return Ok(());
        }

        let mut curr = head;
        while let Some(next) = self.arena.next(curr) {
            if self.cmp_at(next, value.as_value_ref()) != Ordering::Less {
                break;
            }
            curr = next;
        }

        let after = self.arena.next(curr);
        let idx = self.arena.alloc(Node::new(value, after));
        self.arena.get_mut(curr).next = Some(idx);
        if after.is_none() {
            self.tail = Some(idx);
        }
        self.count += 1;
        trace!("insert {idx} after {curr}");
        Ok(())
    }

    /// Adds every value in order and returns how many were inserted.
    ///
    /// Not atomic: on a kind mismatch, values accepted before the offending
    /// one stay in the list.
    pub fn add_all<I, V>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut added = 0;
        for value in values {
            self.add(value)?;
            added += 1;
        }
        Ok(added)
    }

    fn unlink_head(&mut self, head: u32) -> Node {
        let node = self.arena.release(head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.count -= 1;
        node
    }

    fn unlink_after(&mut self, prev: u32, idx: u32) -> Node {
        let node = self.arena.release(idx);
        self.arena.get_mut(prev).next = node.next;
        if node.next.is_none() {
            self.tail = Some(prev);
        }
        self.count -= 1;
        node
    }

    /// Removes the leftmost occurrence of `value`.
    ///
    /// Never type-checks: a value of the other kind simply is not found.
    pub fn remove<'a>(&mut self, value: impl Into<ValueRef<'a>>) -> bool {
        let value = value.into();
        if !self.is_queryable(value) {
            return false;
        }
        let Some(head) = self.head else {
            return false;
        };

        if self.cmp_at(head, value) == Ordering::Equal {
            self.unlink_head(head);
            trace!("removed head {head}");
            return true;
        }

        let mut curr = head;
        while let Some(next) = self.arena.next(curr) {
            match self.cmp_at(next, value) {
                Ordering::Greater => return false,
                Ordering::Equal => {
                    self.unlink_after(curr, next);
                    trace!("removed {next} after {curr}");
                    return true;
                }
                Ordering::Less => curr = next,
            }
        }
        false
    }

    /// Removes every occurrence of `value` and returns how many were removed.
    pub fn remove_all<'a>(&mut self, value: impl Into<ValueRef<'a>>) -> usize {
        let value = value.into();
        if !self.is_queryable(value) {
            return 0;
        }

        let mut removed = 0;
        while let Some(head) = self.head {
            if self.cmp_at(head, value) != Ordering::Equal {
                break;
            }
            self.unlink_head(head);
            removed += 1;
        }

        let Some(mut curr) = self.head else {
            self.tail = None;
            trace!("removed {removed} nodes, list drained");
            return removed;
        };

        while let Some(next) = self.arena.next(curr) {
            match self.cmp_at(next, value) {
                Ordering::Equal => {
                    self.unlink_after(curr, next);
                    removed += 1;
                }
                Ordering::Greater => break,
                Ordering::Less => curr = next,
            }
        }
        trace!("removed {removed} nodes");
        removed
    }

    pub fn contains<'a>(&self, value: impl Into<ValueRef<'a>>) -> bool {
        let value = value.into();
        if !self.is_queryable(value) {
            return false;
        }
        let mut curr = self.head;
        while let Some(idx) = curr {
            match self.cmp_at(idx, value) {
                Ordering::Equal => return true,
                Ordering::Greater => return false,
                Ordering::Less => curr = self.arena.next(idx),
            }
        }
        false
    }

    pub fn first(&self) -> Option<&Value> {
        self.head.map(|idx| self.arena.value(idx))
    }

    pub fn last(&self) -> Option<&Value> {
        self.tail.map(|idx| self.arena.value(idx))
    }

    pub fn min(&self) -> Option<&Value> {
        self.first()
    }

    pub fn max(&self) -> Option<&Value> {
        self.last()
    }

    /// Snapshot of all values, smallest first.
    pub fn to_array(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.to_array()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.arena, self.head, self.count)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn size(&self) -> usize {
        self.count
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.count
    }

    /// Drops every node. The element kind stays locked.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.count = 0;
        trace!("cleared sorted list");
    }

    /// Same kind, same length and pairwise equal values.
    pub fn equals(&self, other: &SortedList) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.count != other.count || self.kind != other.kind {
            return false;
        }
        let mut a = self.head;
        let mut b = other.head;
        while let (Some(i), Some(j)) = (a, b) {
            if self.arena.value(i) != other.arena.value(j) {
                return false;
            }
            a = self.arena.next(i);
            b = other.arena.next(j);
        }
        a.is_none() && b.is_none()
    }

    /// Checks every structural invariant: chain length, tail link, ordering,
    /// kind uniformity and arena accounting.
    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        assert_sorted_list(&self.arena, self.head, self.tail, self.count, self.kind)
    }
}

#[allow(non_snake_case)]
impl SortedList {
    pub fn ofInt() -> Self {
        Self::of_int()
    }

    pub fn ofString() -> Self {
        Self::of_string()
    }

    pub fn fromValues<I, V>(values: I, kind: Option<ElementKind>) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::from_values(values, kind)
    }

    pub fn addAll<I, V>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.add_all(values)
    }

    pub fn removeAll<'a>(&mut self, value: impl Into<ValueRef<'a>>) -> usize {
        self.remove_all(value)
    }

    pub fn toArray(&self) -> Vec<Value> {
        self.to_array()
    }

    pub fn isEmpty(&self) -> bool {
        self.is_empty()
    }
}

impl Default for SortedList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SortedList {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for SortedList {}

impl<'a> IntoIterator for &'a SortedList {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for SortedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Values<'a>(&'a SortedList);

        impl fmt::Debug for Values<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("SortedList")
            .field("kind", &self.kind)
            .field("values", &Values(self))
            .finish()
    }
}

impl fmt::Display for SortedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
