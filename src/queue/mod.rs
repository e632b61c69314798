//! A queue of owned strings on top of [`List`].
//!
//! [`Queue`] adds the string-specific operations to the generic list: values
//! are copied in on insertion, handed back out as [`Element`]s on removal, and
//! compared lexicographically by the sorting, merging and filtering
//! algorithms.

use std::fmt;

use crate::error::QueueError;
use crate::list::{List, Node};
use crate::Iter;

pub mod chain;

/// A FIFO/LIFO queue of owned strings.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_tail("b")?;
/// queue.insert_tail("a")?;
/// queue.insert_head("c")?;
///
/// queue.sort(false);
/// assert_eq!(queue.to_vec(), ["a", "b", "c"]);
///
/// let mut buf = [0u8; 8];
/// let element = queue.remove_head(Some(&mut buf[..])).unwrap();
/// assert_eq!(element.value(), "a");
/// assert_eq!(&buf[..2], b"a\0");
/// # Ok::<(), cyclic_queue::QueueError>(())
/// ```
pub struct Queue {
    list: List<String>,
}

/// An element removed from a [`Queue`].
///
/// The element owns its value and its (now unlinked) node. Dropping it
/// releases both.
pub struct Element {
    node: Box<Node<String>>,
}

impl Element {
    fn new(node: Box<Node<String>>) -> Self {
        debug_assert!(node.is_detached());
        Self { node }
    }

    /// The value carried by the element.
    pub fn value(&self) -> &str {
        &self.node.element
    }

    /// Consume the element and return its value.
    pub fn into_value(self) -> String {
        self.node.into_element()
    }

    /// Whether the element is unlinked from every queue, which always holds
    /// for an element handed out by a removal.
    pub fn is_detached(&self) -> bool {
        self.node.is_detached()
    }

    /// Copy the value into `buf` as a zero-terminated byte string.
    ///
    /// At most `buf.len() - 1` bytes are copied, followed by a `0`. Nothing is
    /// written into an empty buffer. Returns the number of value bytes copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["hello"]);
    /// let element = queue.remove_head(None).unwrap();
    ///
    /// let mut buf = [0xffu8; 4];
    /// assert_eq!(element.copy_to(&mut buf), 3);
    /// assert_eq!(&buf, b"hel\0");
    ///
    /// assert_eq!(element.copy_to(&mut []), 0);
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let Some(capacity) = buf.len().checked_sub(1) else {
            return 0;
        };
        let bytes = self.value().as_bytes();
        let len = bytes.len().min(capacity);
        buf[..len].copy_from_slice(&bytes[..len]);
        buf[len] = 0;
        len
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.value()).finish()
    }
}

/// Copy `value` into freshly reserved storage, reporting exhaustion instead
/// of aborting.
fn copy_value(value: &str) -> Result<String, QueueError> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(value.len())
        .map_err(|_| QueueError::ValueAlloc { len: value.len() })?;
    owned.push_str(value);
    Ok(owned)
}

impl Queue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Create an empty queue, or return an error if its ghost node cannot be
    /// allocated.
    pub fn try_new() -> Result<Self, QueueError> {
        let list = List::try_new().map_err(|err| {
            log::warn!("cannot create queue: {err}");
            err
        })?;
        Ok(Self { list })
    }

    /// Returns `true` if the queue holds no element.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns `true` if the queue holds exactly one element.
    pub fn is_singular(&self) -> bool {
        self.list.is_singular()
    }

    /// Counts the elements by walking the whole queue.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn size(&self) -> usize {
        self.list.len()
    }

    /// The value at the head, or `None` if the queue is empty.
    pub fn head(&self) -> Option<&str> {
        self.list.front().map(String::as_str)
    }

    /// The value at the tail, or `None` if the queue is empty.
    pub fn tail(&self) -> Option<&str> {
        self.list.back().map(String::as_str)
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, String> {
        self.list.iter()
    }

    /// Copy all the values out, from head to tail.
    pub fn to_vec(&self) -> Vec<String> {
        self.list.iter().cloned().collect()
    }

    /// Insert a copy of `value` at the head.
    ///
    /// On error the queue is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// for value in ["c", "b", "a"] {
    ///     queue.insert_head(value)?;
    /// }
    /// assert_eq!(queue.to_vec(), ["a", "b", "c"]);
    /// # Ok::<(), cyclic_queue::QueueError>(())
    /// ```
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let value = copy_value(value)?;
        self.list.try_push_front(value).map_err(|err| {
            log::warn!("cannot insert at head: {err}");
            err
        })
    }

    /// Insert a copy of `value` at the tail.
    ///
    /// On error the queue is unchanged.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let value = copy_value(value)?;
        self.list.try_push_back(value).map_err(|err| {
            log::warn!("cannot insert at tail: {err}");
            err
        })
    }

    /// Remove the head element and hand it to the caller, or return `None` if
    /// the queue is empty.
    ///
    /// If `buf` is given, the value is also copied into it as described in
    /// [`Element::copy_to`].
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let element = Element::new(self.list.pop_front_node()?);
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Remove the tail element and hand it to the caller, or return `None` if
    /// the queue is empty.
    ///
    /// If `buf` is given, the value is also copied into it as described in
    /// [`Element::copy_to`].
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let element = Element::new(self.list.pop_back_node()?);
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Delete the element at index `⌊n/2⌋`. Returns `false` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d"]);
    /// assert!(queue.delete_middle());
    /// assert_eq!(queue.to_vec(), ["a", "b", "d"]);
    /// ```
    pub fn delete_middle(&mut self) -> bool {
        self.list.remove_middle().is_some()
    }

    /// Delete every element whose value appears in a run of two or more equal
    /// consecutive values. The queue is expected to be sorted. Returns `false`
    /// if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["1", "1", "2", "3", "3"]);
    /// assert!(queue.delete_duplicates());
    /// assert_eq!(queue.to_vec(), ["2"]);
    /// ```
    pub fn delete_duplicates(&mut self) -> bool {
        if self.list.is_empty() {
            return false;
        }
        let removed = self.list.remove_duplicate_runs_by(|a, b| a == b);
        log::trace!("delete_duplicates removed {removed} elements");
        true
    }

    /// Swap every two adjacent elements.
    pub fn swap_pairs(&mut self) {
        log::trace!("swap_pairs");
        self.list.swap_pairs();
    }

    /// Reverse the queue in place.
    pub fn reverse(&mut self) {
        log::trace!("reverse");
        self.list.reverse();
    }

    /// Reverse every group of `k` consecutive elements, leaving a shorter
    /// trailing group untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d", "e"]);
    /// queue.reverse_in_groups(2);
    /// assert_eq!(queue.to_vec(), ["b", "a", "d", "c", "e"]);
    /// ```
    pub fn reverse_in_groups(&mut self, k: usize) {
        log::trace!("reverse_in_groups k={k}");
        self.list.reverse_in_groups(k);
    }

    /// Stable merge sort in ascending lexicographic order.
    pub fn merge_sort(&mut self) {
        self.list.sort();
    }

    /// Sort the queue in ascending order, or in descending order by reversing
    /// the ascending result.
    ///
    /// Equal values therefore appear in reversed insertion order when sorting
    /// in descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["1", "3", "2"]);
    /// queue.sort(true);
    /// assert_eq!(queue.to_vec(), ["3", "2", "1"]);
    /// ```
    pub fn sort(&mut self, descending: bool) {
        log::trace!("sort descending={descending}");
        self.merge_sort();
        if descending {
            self.list.reverse();
        }
    }

    /// Merge the sorted queue `other` into this sorted queue, leaving `other`
    /// empty. On equal values, elements of `self` come first.
    pub fn merge(&mut self, other: &mut Queue) {
        self.list.merge(&mut other.list);
    }

    /// Remove every element that has a strictly smaller element somewhere to
    /// its right, and return the resulting size.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["5", "3", "4", "1", "2"]);
    /// assert_eq!(queue.ascend(), 2);
    /// assert_eq!(queue.to_vec(), ["1", "2"]);
    /// ```
    pub fn ascend(&mut self) -> usize {
        let removed = self.list.retain_monotonic_by(|value, limit| value > limit);
        log::trace!("ascend removed {removed} elements");
        self.size()
    }

    /// Remove every element that has a strictly greater element somewhere to
    /// its right, and return the resulting size.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["5", "3", "4", "1", "2"]);
    /// assert_eq!(queue.descend(), 3);
    /// assert_eq!(queue.to_vec(), ["5", "4", "2"]);
    /// ```
    pub fn descend(&mut self) -> usize {
        let removed = self.list.retain_monotonic_by(|value, limit| value < limit);
        log::trace!("descend removed {removed} elements");
        self.size()
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.list, f)
    }
}

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl Eq for Queue {}

impl<'a> FromIterator<&'a str> for Queue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> Extend<&'a str> for Queue {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.list.extend(iter.into_iter().map(str::to_owned));
    }
}

impl FromIterator<String> for Queue {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            list: List::from_iter(iter),
        }
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Queue;

    #[test]
    fn queue_fifo_and_lifo() {
        let mut queue = Queue::new();
        for value in ["a", "b", "c"] {
            queue.insert_tail(value).unwrap();
        }
        let heads: Vec<_> = std::iter::from_fn(|| queue.remove_head(None))
            .map(|element| element.into_value())
            .collect();
        assert_eq!(heads, ["a", "b", "c"]);
        assert!(queue.is_empty());

        for value in ["a", "b", "c"] {
            queue.insert_tail(value).unwrap();
        }
        let tails: Vec<_> = std::iter::from_fn(|| queue.remove_tail(None))
            .map(|element| element.into_value())
            .collect();
        assert_eq!(tails, ["c", "b", "a"]);
    }

    #[test]
    fn queue_copies_caller_value() {
        let mut queue = Queue::new();
        let mut value = String::from("abc");
        queue.insert_head(&value).unwrap();
        value.push('d');
        assert_eq!(queue.head(), Some("abc"));
    }

    #[test]
    fn queue_remove_into_buffer() {
        let mut queue = Queue::from_iter(["abcdef", "xy", "z"]);

        let mut buf = [0xffu8; 4];
        let element = queue.remove_head(Some(&mut buf[..])).unwrap();
        assert_eq!(element.value(), "abcdef");
        assert!(element.is_detached());
        assert_eq!(&buf, b"abc\0");

        let mut buf = [0xffu8; 8];
        let element = queue.remove_tail(Some(&mut buf[..])).unwrap();
        assert_eq!(element.value(), "z");
        assert_eq!(&buf[..2], b"z\0");
        assert!(buf[2..].iter().all(|&byte| byte == 0xff));

        let mut empty: [u8; 0] = [];
        let element = queue.remove_head(Some(&mut empty[..])).unwrap();
        assert_eq!(element.into_value(), "xy");

        let mut buf = [0xffu8; 1];
        assert!(queue.remove_head(Some(&mut buf[..])).is_none());
        assert_eq!(buf, [0xff]);
    }

    #[test]
    fn queue_single_byte_buffer_gets_only_terminator() {
        let mut queue = Queue::from_iter(["abc"]);
        let mut buf = [0xffu8; 1];
        queue.remove_head(Some(&mut buf[..])).unwrap();
        assert_eq!(buf, [0]);
    }

    #[test]
    fn queue_size_and_predicates() {
        let mut queue = Queue::new();
        assert_eq!(queue.size(), 0);
        assert!(queue.is_empty());
        queue.insert_tail("x").unwrap();
        assert!(queue.is_singular());
        queue.insert_tail("y").unwrap();
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.head(), Some("x"));
        assert_eq!(queue.tail(), Some("y"));
    }

    #[test]
    fn queue_delete_middle() {
        let mut queue = Queue::new();
        assert!(!queue.delete_middle());

        let mut queue = Queue::from_iter(["a", "b", "c", "d", "e"]);
        assert!(queue.delete_middle());
        assert_eq!(queue.to_vec(), ["a", "b", "d", "e"]);
        assert!(queue.delete_middle());
        assert_eq!(queue.to_vec(), ["a", "b", "e"]);
    }

    #[test]
    fn queue_delete_duplicates() {
        let mut queue = Queue::new();
        assert!(!queue.delete_duplicates());

        let mut queue = Queue::from_iter(["a", "a", "b", "c", "c", "c", "d"]);
        assert!(queue.delete_duplicates());
        assert_eq!(queue.to_vec(), ["b", "d"]);
    }

    #[test]
    fn queue_sort_uses_byte_order() {
        let mut queue = Queue::from_iter(["b", "B", "a", "10", "9", ""]);
        queue.sort(false);
        assert_eq!(queue.to_vec(), ["", "10", "9", "B", "a", "b"]);
    }

    #[test]
    fn queue_filters_on_short_queues() {
        let mut queue = Queue::new();
        assert_eq!(queue.ascend(), 0);
        assert_eq!(queue.descend(), 0);

        let mut queue = Queue::from_iter(["only"]);
        assert_eq!(queue.ascend(), 1);
        assert_eq!(queue.descend(), 1);
        assert_eq!(queue.to_vec(), ["only"]);
    }

    #[test]
    fn queue_merge() {
        let mut queue = Queue::from_iter(["1", "3", "5"]);
        let mut other = Queue::from_iter(["2", "4", "6"]);
        queue.merge(&mut other);
        assert_eq!(queue.to_vec(), ["1", "2", "3", "4", "5", "6"]);
        assert!(other.is_empty());
    }

    #[test]
    fn queue_debug() {
        let queue = Queue::from_iter(["a", "b"]);
        assert_eq!(format!("{:?}", queue), r#"["a", "b"]"#);
        let mut queue = queue;
        let element = queue.remove_head(None).unwrap();
        assert_eq!(format!("{:?}", element), r#"Element("a")"#);
    }
}
