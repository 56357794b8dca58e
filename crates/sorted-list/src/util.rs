use std::cmp::Ordering;

use crate::node::Arena;
use crate::value::{compare, ElementKind};

/// Walks the chain from `head` and reports the first broken invariant.
pub(crate) fn assert_sorted_list(
    arena: &Arena,
    head: Option<u32>,
    tail: Option<u32>,
    count: usize,
    kind: Option<ElementKind>,
) -> Result<(), String> {
    match (head, tail, count) {
        (None, None, 0) => {}
        (Some(_), Some(_), n) if n > 0 => {}
        _ => {
            return Err(format!(
                "head {head:?}, tail {tail:?} and count {count} disagree on emptiness"
            ))
        }
    }
    if count > 0 && kind.is_none() {
        return Err("non-empty list has no kind".to_string());
    }

    let mut visited = 0;
    let mut last = None;
    let mut curr = head;
    while let Some(idx) = curr {
        if !arena.is_occupied(idx) {
            return Err(format!("link to vacant slot {idx}"));
        }
        visited += 1;
        if visited > count {
            return Err(format!("chain is longer than count {count}"));
        }
        let value = arena.value(idx);
        if Some(value.kind()) != kind {
            return Err(format!("slot {idx} holds a {} value", value.kind()));
        }
        if let Some(prev) = last {
            let ord = compare(arena.value(prev).as_value_ref(), value.as_value_ref());
            if ord == Some(Ordering::Greater) {
                return Err(format!("slot {prev} is greater than its successor {idx}"));
            }
        }
        last = Some(idx);
        curr = arena.next(idx);
    }

    if visited != count {
        return Err(format!("chain has {visited} nodes, count is {count}"));
    }
    if last != tail {
        return Err(format!("tail is {tail:?}, last node is {last:?}"));
    }
    if arena.occupied() != count {
        return Err(format!(
            "arena holds {} live nodes, count is {count}",
            arena.occupied()
        ));
    }
    if arena.occupied() + arena.free_len() != arena.capacity() {
        return Err("free list lost track of vacant slots".to_string());
    }
    Ok(())
}
