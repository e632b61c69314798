use std::alloc::{self, Layout};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::error::QueueError;
use crate::list::cursor::CursorMut;
use crate::list::iterator::{Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with owned nodes, implemented as a cyclic list
/// around a payload-less ghost node.
///
/// Inserting or removing at either end, splicing and cutting ranges take constant
/// time. No length is cached: [`List::len`] walks the cycle.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `boundary`: the node right before a range, which stays in place when the
///   range is cut out (probably the ghost node).
pub struct List<T> {
    ghost: NonNull<Node<Erased>>,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

struct Erased;

/// Nodes fragment detached from a list, used in list cutting or
/// splicing.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Link the two nodes `prev` and `next` together, so that
/// `prev.next == next` and `next.prev == prev`.
///
/// Only the link fields are touched, so it also works for the ghost node.
pub(crate) unsafe fn connect<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    ptr::addr_of_mut!((*prev.as_ptr()).next).write(next);
    ptr::addr_of_mut!((*next.as_ptr()).prev).write(prev);
}

impl<T> Node<T> {
    /// Read the successor of `node`, which may be the ghost node.
    #[inline]
    pub(crate) unsafe fn next_of(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        ptr::addr_of!((*node.as_ptr()).next).read()
    }

    /// Read the predecessor of `node`, which may be the ghost node.
    #[inline]
    pub(crate) unsafe fn prev_of(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        ptr::addr_of!((*node.as_ptr()).prev).read()
    }

    /// Allocate a detached node holding `element`, whose links point to itself.
    ///
    /// Returns [`QueueError::NodeAlloc`] if the allocator is exhausted; `element`
    /// is dropped in that case.
    pub(crate) fn try_new_detached(element: T) -> Result<NonNull<Node<T>>, QueueError> {
        let layout = Layout::new::<Node<T>>();
        // SAFETY: `Node<T>` always holds two pointers, so `layout` is never zero-sized.
        let raw = unsafe { alloc::alloc(layout) }.cast::<Node<T>>();
        let node = NonNull::new(raw).ok_or(QueueError::NodeAlloc {
            size: layout.size(),
        })?;
        // SAFETY: `node` is freshly allocated with the layout of `Node<T>`, and it is
        // fully initialized here before any read.
        unsafe {
            ptr::write(
                node.as_ptr(),
                Node {
                    next: node,
                    prev: node,
                    element,
                },
            );
        }
        Ok(node)
    }

    /// Like [`Node::try_new_detached`], but aborts on allocation failure the same
    /// way `Box::new` does.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        match Self::try_new_detached(element) {
            Ok(node) => node,
            Err(_) => alloc::handle_alloc_error(Layout::new::<Node<T>>()),
        }
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        let Node { element, .. } = *self;
        element
    }

    /// Whether the node is detached, i.e. both of its links point to itself.
    pub(crate) fn is_detached(&self) -> bool {
        let this = NonNull::from(self);
        self.next == this && self.prev == this
    }
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        self.ghost.cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { Node::next_of(self.ghost_node()) }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { Node::prev_of(self.ghost_node()) }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// The links of the returned node point to itself.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list,
    /// or whether it is the ghost node.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        connect(Node::prev_of(node), Node::next_of(node));
        let mut node = Box::from_raw(node.as_ptr());
        let this = NonNull::from(node.as_mut());
        node.next = this;
        node.prev = this;
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
    }

    /// Unlink `node` and reinsert it right after `position`.
    ///
    /// It is unsafe because it does not check whether `node` is a non-ghost
    /// node of the list, or whether `position` belongs to the list and differs
    /// from `node`.
    pub(crate) unsafe fn move_after(&mut self, position: NonNull<Node<T>>, node: NonNull<Node<T>>) {
        connect(Node::prev_of(node), Node::next_of(node));
        self.attach_node(position, Node::next_of(position), node);
    }

    /// Unlink `node` and reinsert it right after the ghost node.
    ///
    /// It is unsafe because it does not check whether `node` is a non-ghost
    /// node of the list.
    pub(crate) unsafe fn move_to_front(&mut self, node: NonNull<Node<T>>) {
        self.move_after(self.ghost_node(), node);
    }

    /// Detach a range of nodes `front..=back` from the list, and return the detached
    /// nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid range
    /// (i.e. `front` must **NOT** be at the right of `back`), or whether it belongs
    /// to the list.
    ///
    /// If `front..=back` is not a valid range or it does not belong to the list,
    /// this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
    ) -> DetachedNodes<T> {
        connect(Node::prev_of(front), Node::next_of(back));
        DetachedNodes::new(front, back)
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
    }

    /// Detach all nodes from the list, and return the detached nodes, or return
    /// `None` if the list is empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `self.front_node()..=self.back_node()` is a valid range.
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node())) }
    }

    /// Move every node of `other` right after `position`, leaving `other` empty.
    ///
    /// It is unsafe because it does not check whether `position` belongs to the
    /// list.
    pub(crate) unsafe fn splice_after(&mut self, position: NonNull<Node<T>>, other: &mut List<T>) {
        if let Some(detached) = other.detach_all_nodes() {
            self.attach_nodes(position, Node::next_of(position), detached);
        }
    }

    /// Remove the first node and hand it out unlinked, or return `None` if the
    /// list is empty.
    pub(crate) fn pop_front_node(&mut self) -> Option<Box<Node<T>>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the front node is a non-ghost node.
        unsafe { Some(self.detach_node(self.front_node())) }
    }

    /// Remove the last node and hand it out unlinked, or return `None` if the
    /// list is empty.
    pub(crate) fn pop_back_node(&mut self) -> Option<Box<Node<T>>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the back node is a non-ghost node.
        unsafe { Some(self.detach_node(self.back_node())) }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(list) => list,
            Err(_) => alloc::handle_alloc_error(Layout::new::<Node<Erased>>()),
        }
    }

    /// Create an empty `List`, or return an error if the ghost node cannot be
    /// allocated.
    pub fn try_new() -> Result<Self, QueueError> {
        let ghost = Node::try_new_detached(Erased)?;
        Ok(Self {
            ghost,
            _marker: PhantomData,
        })
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns `true` if the `List` holds exactly one element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert!(!list.is_singular());
    ///
    /// list.push_back(1);
    /// assert!(list.is_singular());
    ///
    /// list.push_back(2);
    /// assert!(!list.is_singular());
    /// ```
    #[inline]
    pub fn is_singular(&self) -> bool {
        !self.is_empty() && self.front_node() == self.back_node()
    }

    /// Counts the elements of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, since no length is cached.
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front_node().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the ghost node and the front node are adjacent nodes of the list.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) }
    }

    /// Like [`List::push_front`], but reports allocation failure instead of
    /// aborting. The list is left untouched on failure.
    pub fn try_push_front(&mut self, elt: T) -> Result<(), QueueError> {
        let node = Node::try_new_detached(elt)?;
        // SAFETY: the ghost node and the front node are adjacent nodes of the list.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) };
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.pop_front_node().map(Node::into_element)
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the back node and the ghost node are adjacent nodes of the list.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) }
    }

    /// Like [`List::push_back`], but reports allocation failure instead of
    /// aborting. The list is left untouched on failure.
    pub fn try_push_back(&mut self, elt: T) -> Result<(), QueueError> {
        let node = Node::try_new_detached(elt)?;
        // SAFETY: the back node and the ghost node are adjacent nodes of the list.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) };
        Ok(())
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        self.pop_back_node().map(Node::into_element)
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is pointing to the ghost node if the list is empty.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list1 = List::from_iter(['a']);
    /// let mut list2 = List::from_iter(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(Vec::from_iter(list1), vec!['a', 'b', 'c']);
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        // SAFETY: the back node belongs to the list.
        unsafe { self.splice_after(self.back_node(), other) }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DetachedNodes<T> {
    /// If is unsafe because it must be guaranteed that `front..=back` is
    /// a valid, non-empty range.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>) -> Self {
        Self {
            front,
            back,
            _marker: PhantomData,
        }
    }
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(Node::next_of(prev), next);
        assert_eq!(Node::prev_of(next), prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost node was allocated with the layout of `Node<Erased>`,
        // and no element node refers to it anymore.
        drop(unsafe { Box::from_raw(self.ghost.as_ptr()) });
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

/// Walk the whole cycle and check that every link is mirrored by its neighbour.
#[cfg(test)]
pub(crate) fn assert_well_formed<T>(list: &List<T>) {
    let ghost = list.ghost_node();
    let mut node = ghost;
    loop {
        unsafe {
            let next = Node::next_of(node);
            assert_eq!(Node::prev_of(next), node, "broken back link");
            node = next;
        }
        if node == ghost {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{assert_well_formed, List, Node};
    use std::cell::RefCell;

    fn collect<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert!(!list.is_singular());
        list.push_back(1);
        assert!(!list.is_empty());
        assert!(list.is_singular());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        assert_well_formed(&list);
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
        assert_well_formed(&list);

        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
        assert_well_formed(&list);
    }

    #[test]
    fn list_try_push() {
        let mut list = List::new();
        assert_eq!(list.try_push_back(2), Ok(()));
        assert_eq!(list.try_push_front(1), Ok(()));
        assert_eq!(collect(&list), vec![1, 2]);
    }

    #[test]
    fn detached_node_links_to_itself() {
        let mut list = List::from_iter([1, 2, 3]);
        let node = list.pop_front_node().unwrap();
        assert!(node.is_detached());
        assert_eq!(node.into_element(), 1);

        let node = list.pop_back_node().unwrap();
        assert!(node.is_detached());
        assert_eq!(collect(&list), vec![2]);
        assert_well_formed(&list);
    }

    #[test]
    fn list_move_after() {
        let mut list = List::from_iter(0..5);
        unsafe {
            let third = Node::next_of(Node::next_of(list.front_node()));
            list.move_to_front(third);
            assert_eq!(collect(&list), vec![2, 0, 1, 3, 4]);

            let (front, back) = (list.front_node(), list.back_node());
            list.move_after(back, front);
            assert_eq!(collect(&list), vec![0, 1, 3, 4, 2]);

            // Moving a node right after its own predecessor is a no-op.
            let back = list.back_node();
            list.move_after(Node::prev_of(back), back);
            assert_eq!(collect(&list), vec![0, 1, 3, 4, 2]);
        }
        assert_well_formed(&list);
    }

    #[test]
    fn list_splice_after() {
        fn test_case(len: i32, at: usize) {
            let mut list = List::from_iter(0..len);
            let mut other = List::from_iter(100..103);
            unsafe {
                let mut position = list.ghost_node();
                (0..at).for_each(|_| position = Node::next_of(position));
                list.splice_after(position, &mut other);
            }
            let mut expected = Vec::from_iter(0..len);
            expected.splice(at..at, 100..103);
            assert_eq!(collect(&list), expected);
            assert!(other.is_empty());
            assert_well_formed(&list);
            assert_well_formed(&other);
        }
        test_case(0, 0);
        test_case(4, 0);
        test_case(4, 2);
        test_case(4, 4);
    }

    #[test]
    fn list_append() {
        let mut list = List::from_iter(0..2);
        list.append(&mut List::from_iter(2..4));
        list.append(&mut List::new());
        assert_eq!(collect(&list), Vec::from_iter(0..4));
        assert_well_formed(&list);

        let mut empty = List::new();
        empty.append(&mut list);
        assert!(list.is_empty());
        assert_eq!(empty.len(), 4);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..10);
        list.clear();
        assert!(list.is_empty());
        assert_well_formed(&list);
        list.push_back(1);
        assert_eq!(collect(&list), vec![1]);
    }
}
