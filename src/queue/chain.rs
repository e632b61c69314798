//! Chains of independent queues, merged pairwise into one.

use crate::list::List;
use crate::queue::Queue;

/// An entry of a [`QueueChain`]: one queue plus the id it was given when it
/// joined the chain.
#[derive(Debug)]
pub struct QueueContext {
    id: usize,
    queue: Queue,
}

impl QueueContext {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut Queue {
        &mut self.queue
    }

    pub fn into_queue(self) -> Queue {
        self.queue
    }
}

/// A chain of queues, kept in insertion order.
///
/// The chain is itself a [`List`] of [`QueueContext`]s; it never looks into the
/// queues except in [`QueueChain::merge_all`].
///
/// # Examples
///
/// ```
/// use cyclic_queue::{Queue, QueueChain};
///
/// let mut chain = QueueChain::new();
/// let first = chain.push(Queue::from_iter(["1", "3", "5"]));
/// let second = chain.push(Queue::from_iter(["2", "4", "6"]));
///
/// assert_eq!(chain.merge_all(false), 6);
/// assert_eq!(chain.get(first).unwrap().to_vec(), ["1", "2", "3", "4", "5", "6"]);
/// assert!(chain.get(second).unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct QueueChain {
    chain: List<QueueContext>,
    next_id: usize,
}

impl QueueChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `queue` at the end of the chain and return its id.
    pub fn push(&mut self, queue: Queue) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.chain.push_back(QueueContext { id, queue });
        id
    }

    /// The number of queues in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Queue> {
        self.chain
            .iter()
            .find(|context| context.id == id)
            .map(QueueContext::queue)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut Queue> {
        self.chain
            .iter_mut()
            .find(|context| context.id == id)
            .map(QueueContext::queue_mut)
    }

    /// Take the queue with the given id out of the chain.
    pub fn remove(&mut self, id: usize) -> Option<Queue> {
        let mut cursor = self.chain.cursor_start_mut();
        while let Some(context) = cursor.current() {
            if context.id == id {
                return cursor.remove().map(QueueContext::into_queue);
            }
            cursor.move_next_cyclic();
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueueContext> + '_ {
        self.chain.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut QueueContext> + '_ {
        self.chain.iter_mut()
    }

    /// Dissolve the chain into its queues, in chain order.
    pub fn into_queues(self) -> Vec<Queue> {
        self.chain.into_iter().map(QueueContext::into_queue).collect()
    }

    /// Merge every queue of the chain into the first one, and return the size
    /// of the merged queue.
    ///
    /// Every queue is expected to be sorted in ascending order. The queues are
    /// merged one by one, in chain order, into the first queue, which is then
    /// reversed if `descending` is set. All the other queues are left empty in
    /// the chain.
    ///
    /// An empty chain returns `0`; a chain of one queue returns that queue's
    /// size without touching it.
    ///
    /// # Complexity
    ///
    /// Each of the *k* - 1 merges is linear in the size of the growing first
    /// queue, so this operation computes in *O*(*n* * *k*) time for *n* elements
    /// across *k* queues.
    pub fn merge_all(&mut self, descending: bool) -> usize {
        if self.chain.is_empty() {
            return 0;
        }
        if self.chain.is_singular() {
            return self.chain.front().map_or(0, |context| context.queue.size());
        }
        let mut contexts = self.chain.iter_mut();
        let first = match contexts.next() {
            Some(first) => first,
            None => return 0,
        };
        let mut merged = 1;
        for context in contexts {
            first.queue.merge(&mut context.queue);
            merged += 1;
        }
        if descending {
            first.queue.reverse();
        }
        let size = first.queue.size();
        log::debug!(
            "merged {} queues into queue #{} ({} elements, descending={})",
            merged,
            first.id,
            size,
            descending
        );
        size
    }
}
