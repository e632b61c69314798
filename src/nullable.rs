//! Queue operations that accept an absent queue.
//!
//! Every function here takes the queue as an `Option`, and treats `None` as a
//! valid input with nothing to do: it yields `false`, `0` or `None` rather than
//! failing. Allocation errors are folded into the same results, so a caller
//! that only needs "did it happen" does not deal with [`QueueError`].
//!
//! [`QueueError`]: crate::QueueError
//!
//! # Examples
//!
//! ```
//! use cyclic_queue::nullable;
//!
//! let mut queue = nullable::new();
//! assert!(nullable::insert_tail(queue.as_mut(), "a"));
//! assert_eq!(nullable::size(queue.as_ref()), 1);
//!
//! assert!(!nullable::insert_tail(None, "a"));
//! assert_eq!(nullable::size(None), 0);
//! assert!(nullable::remove_head(None, None).is_none());
//!
//! nullable::free(queue);
//! ```

use crate::queue::chain::QueueChain;
use crate::queue::{Element, Queue};

/// Create an empty queue, or `None` if it cannot be allocated.
pub fn new() -> Option<Queue> {
    Queue::try_new().ok()
}

/// Release the queue and every element in it. Does nothing for `None`.
pub fn free(queue: Option<Queue>) {
    drop(queue);
}

pub fn insert_head(queue: Option<&mut Queue>, value: &str) -> bool {
    queue.map_or(false, |queue| queue.insert_head(value).is_ok())
}

pub fn insert_tail(queue: Option<&mut Queue>, value: &str) -> bool {
    queue.map_or(false, |queue| queue.insert_tail(value).is_ok())
}

pub fn remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    queue?.remove_head(buf)
}

pub fn remove_tail(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Option<Element> {
    queue?.remove_tail(buf)
}

pub fn size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::size)
}

pub fn delete_middle(queue: Option<&mut Queue>) -> bool {
    queue.map_or(false, Queue::delete_middle)
}

pub fn delete_duplicates(queue: Option<&mut Queue>) -> bool {
    queue.map_or(false, Queue::delete_duplicates)
}

pub fn swap_pairs(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.swap_pairs();
    }
}

pub fn reverse(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

pub fn reverse_in_groups(queue: Option<&mut Queue>, k: usize) {
    if let Some(queue) = queue {
        queue.reverse_in_groups(k);
    }
}

pub fn sort(queue: Option<&mut Queue>, descending: bool) {
    if let Some(queue) = queue {
        queue.sort(descending);
    }
}

pub fn ascend(queue: Option<&mut Queue>) -> usize {
    queue.map_or(0, Queue::ascend)
}

pub fn descend(queue: Option<&mut Queue>) -> usize {
    queue.map_or(0, Queue::descend)
}

pub fn merge_all(chain: Option<&mut QueueChain>, descending: bool) -> usize {
    chain.map_or(0, |chain| chain.merge_all(descending))
}
