use crate::list::{List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` walks the cycle node by node and can unlink the node it is
/// pointing to. [`CursorMut::remove`] reads the successor before the node is
/// released, so a traversal that removes as it goes never touches a freed node.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// where the last one is the ghost node of the list.
///
/// # Examples
///
/// Remove every even number in a single pass. (The ghost node of the list is
/// denoted by `#`).
/// ```
/// use cyclic_queue::List;
///
/// let mut list = List::from_iter(0..6);
/// // [|0 1 2 3 4 5 #]
/// let mut cursor = list.cursor_start_mut();
/// while let Some(&item) = cursor.current() {
///     if item % 2 == 0 {
///         cursor.remove();
///     } else {
///         cursor.move_next_cyclic();
///     }
/// }
/// // [ 1 3 5|#]
/// assert!(cursor.current().is_none());
/// assert_eq!(Vec::from_iter(list), vec![1, 3, 5]);
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut List<T>,
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NonNull<Node<T>>) -> Self {
        Self { current, list }
    }

    pub(crate) fn is_ghost_node(&self) -> bool {
        self.current == self.list.ghost_node()
    }
    pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `current.next` is always valid since it is a cyclic list.
        unsafe { Node::next_of(self.current) }
    }

    /// Unlink the current node and return it, moving the cursor to its
    /// successor. Returns `None` at the ghost node.
    pub(crate) fn remove_node(&mut self) -> Option<Box<Node<T>>> {
        if self.is_ghost_node() {
            return None;
        }
        let (current, next) = (self.current, self.next_node());
        self.current = next;
        // SAFETY: `current` is a valid non-ghost node in the list.
        Some(unsafe { self.list.detach_node(current) })
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return a reference of the current element, or `None` if the cursor is
    /// at the ghost node.
    pub fn current(&self) -> Option<&T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: it is safe because non-ghost nodes must hold a
        // valid element.
        unsafe { Some(&self.current.as_ref().element) }
    }

    /// Return a reference of the element after the cursor, or `None` if the
    /// next node is the ghost node.
    pub fn peek_next(&self) -> Option<&T> {
        let next = self.next_node();
        if next == self.list.ghost_node() {
            return None;
        }
        // SAFETY: `next` is a non-ghost node, which holds a valid element.
        unsafe { Some(&next.as_ref().element) }
    }

    /// Move the cursor to the next node, passing through the ghost node.
    pub fn move_next_cyclic(&mut self) {
        self.current = self.next_node();
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the ghost node. After removal, the cursor
    /// is moved to the next node unless no removing is happened.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn remove(&mut self) -> Option<T> {
        self.remove_node().map(Node::into_element)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("list", &self.list)
            .field("current", &self.current())
            .finish()
    }
}
