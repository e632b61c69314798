use crate::list::{connect, List, Node};
use std::cmp::Ordering;
use std::ptr::NonNull;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

// Reordering algorithms
impl<T> List<T> {
    /// Reverse the list in place.
    ///
    /// Every node, visited front to back, is moved to the front of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if self.is_empty() || self.is_singular() {
            return;
        }
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        while node != ghost {
            // SAFETY: `node` is a non-ghost node of the list, and its successor
            // is read before it is relinked.
            unsafe {
                let next = Node::next_of(node);
                self.move_to_front(node);
                node = next;
            }
        }
    }

    /// Reverse every consecutive group of `k` elements, counted from the front.
    ///
    /// A trailing group with fewer than `k` elements is left as it is. Nothing
    /// happens if `k <= 1`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(1..=8);
    /// list.reverse_in_groups(3);
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1, 6, 5, 4, 7, 8]);
    /// ```
    pub fn reverse_in_groups(&mut self, k: usize) {
        if k <= 1 || self.is_empty() || self.is_singular() {
            return;
        }
        let ghost = self.ghost_node();
        let (mut boundary, mut node, mut count) = (ghost, self.front_node(), 0);
        while node != ghost {
            // SAFETY: `boundary.next ..= node` always lies in the list, and
            // `next` is read before the group is relinked.
            unsafe {
                let next = Node::next_of(node);
                count += 1;
                if count == k {
                    // Every node of the group, front to back, moves right after
                    // `boundary`.
                    let mut current = Node::next_of(boundary);
                    while current != next {
                        let following = Node::next_of(current);
                        self.move_after(boundary, current);
                        current = following;
                    }
                    boundary = Node::prev_of(next);
                    count = 0;
                }
                node = next;
            }
        }
    }

    /// Swap every two adjacent elements. The last element of an odd-length
    /// list stays in place.
    pub fn swap_pairs(&mut self) {
        self.reverse_in_groups(2);
    }

    /// Find the node at index `⌊n/2⌋` by advancing a slow pointer one step for
    /// every two steps of a fast pointer.
    ///
    /// Returns the ghost node for an empty list.
    pub(crate) fn middle_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `front..ghost` is the whole list.
        unsafe { mid_of_range(self.front_node(), self.ghost_node()) }
    }

    /// Remove the element at index `⌊n/2⌋` and return it, or `None` if the list
    /// is empty. For an even length this is the later of the two central
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// assert_eq!(list.remove_middle(), Some(3));
    /// assert_eq!(list.remove_middle(), Some(2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 4]);
    /// ```
    pub fn remove_middle(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let middle = self.middle_node();
        // SAFETY: the list is not empty, so `middle` is a non-ghost node.
        Some(unsafe { self.detach_node(middle) }.into_element())
    }
}

// Sorting and merging
impl<T> List<T> {
    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a top-down merge sort over node ranges: a range
    /// is split at its middle node, both halves are sorted recursively, then
    /// merged by relinking. No node or list head is allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        merge_sort(self, &mut |a: &T, b: &T| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    /// The comparator function must define a total ordering for the
    /// elements in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// let mut v = List::from_iter([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(v), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
    }

    /// Merge the sorted list `other` into this sorted list, leaving `other`
    /// empty.
    ///
    /// The merge is stable: equal elements from `self` come before those from
    /// `other`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([1, 3, 5]);
    /// let mut other = List::from_iter([2, 4, 6]);
    /// list.merge(&mut other);
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5, 6]);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        merge_into(self, other, &mut |a: &T, b: &T| a.lt(b));
    }

    /// Like [`List::merge`], with a comparator function.
    pub fn merge_by<F>(&mut self, other: &mut Self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_into(self, other, &mut |a: &T, b: &T| {
            compare(a, b) == Ordering::Less
        });
    }
}

// Filtering
impl<T> List<T> {
    /// Scan the list from the back while keeping a running limit, which starts
    /// at the last element. Every element for which `discard(element, limit)`
    /// holds is removed; every other element becomes the new limit.
    ///
    /// Returns the number of removed elements.
    ///
    /// # Examples
    ///
    /// Keep the elements that have no smaller element on their right:
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([5, 3, 4, 1, 2]);
    /// assert_eq!(list.retain_monotonic_by(|x, limit| x > limit), 3);
    /// assert_eq!(Vec::from_iter(list), vec![1, 2]);
    /// ```
    pub fn retain_monotonic_by<F>(&mut self, mut discard: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.is_empty() || self.is_singular() {
            return 0;
        }
        self.reverse();
        let mut removed = 0;
        let mut cursor = self.cursor_start_mut();
        let mut limit = cursor.current;
        cursor.move_next_cyclic();
        while !cursor.is_ghost_node() {
            // SAFETY: both `cursor.current` and `limit` are non-ghost nodes
            // still linked in the list.
            let drop_current =
                unsafe { discard(&cursor.current.as_ref().element, &limit.as_ref().element) };
            if drop_current {
                cursor.remove_node();
                removed += 1;
            } else {
                limit = cursor.current;
                cursor.move_next_cyclic();
            }
        }
        self.reverse();
        removed
    }

    /// Remove every element that belongs to a run of two or more consecutive
    /// equal elements. Unlike a plain dedup, no representative of the run
    /// survives.
    ///
    /// Returns the number of removed elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([1, 1, 2, 3, 3, 3, 4]);
    /// assert_eq!(list.remove_duplicate_runs_by(|a, b| a == b), 5);
    /// assert_eq!(Vec::from_iter(list), vec![2, 4]);
    /// ```
    pub fn remove_duplicate_runs_by<F>(&mut self, mut same: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut removed = 0;
        let mut in_run = false;
        let mut cursor = self.cursor_start_mut();
        while let Some(current) = cursor.current() {
            let has_twin = cursor.peek_next().map_or(false, |next| same(current, next));
            if has_twin || in_run {
                cursor.remove_node();
                removed += 1;
                in_run = has_twin;
            } else {
                cursor.move_next_cyclic();
            }
        }
        removed
    }
}

fn merge_sort<T, F>(list: &mut List<T>, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // SAFETY: `front..ghost` is the whole list.
    unsafe { merge_sort_range(list.front_node(), list.ghost_node(), less) };
}

fn merge_into<T, F>(list: &mut List<T>, other: &mut List<T>, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let (start, ghost) = (list.front_node(), list.ghost_node());
    let mid = other.front_node();
    if start == ghost || other.is_empty() {
        list.append(other);
        return;
    }
    list.append(other);
    // SAFETY: after appending, `start..mid` holds the nodes of `list` and
    // `mid..ghost` those of `other`, both sorted and non-empty.
    unsafe { merge_range(start, mid, ghost, less) };
}

/// Return the node at index `⌊len/2⌋` of `start..end`, which is `start` itself
/// for a range of fewer than two nodes.
unsafe fn mid_of_range<T>(start: NonNull<Node<T>>, end: NonNull<Node<T>>) -> NonNull<Node<T>> {
    let (mut slow, mut fast) = (start, start);
    while fast != end && Node::next_of(fast) != end {
        fast = Node::next_of(Node::next_of(fast));
        slow = Node::next_of(slow);
    }
    slow
}

/// Sort `start..end` in place and return its new first node. `end` and the
/// node before `start` are never moved.
unsafe fn merge_sort_range<T, F>(
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let mid = mid_of_range(start, end);
    if mid == start {
        return start;
    }
    // The back half is sorted last: its first node is then the one right
    // after the sorted front half.
    let start = merge_sort_range(start, mid, less);
    let mid = merge_sort_range(mid, end, less);
    merge_range(start, mid, end, less)
}

/// Merge the sorted ranges `start..mid` and `mid..end` and return the new first
/// node. Equal elements of `start..mid` stay before those of `mid..end`.
unsafe fn merge_range<T, F>(
    mut start: NonNull<Node<T>>,
    mid: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    // `merged` walks the front range and only moves forward. For the first
    // unmerged node `to_merge`:
    // - skip `merged` over every node not greater than it;
    // - then move the longest run starting at `to_merge` that is strictly
    //   less than `*merged` to the node before `merged`.
    // Once `merged` meets `to_merge`, the rest is already in place.
    let (mut merged, mut to_merge) = (start, mid);
    while to_merge != end {
        while merged != to_merge && !less(&to_merge.as_ref().element, &merged.as_ref().element) {
            merged = Node::next_of(merged);
        }
        if merged == to_merge {
            break;
        }
        let mut back = to_merge;
        loop {
            let next = Node::next_of(back);
            if next == end || !less(&next.as_ref().element, &merged.as_ref().element) {
                break;
            }
            back = next;
        }
        let next_to_merge = Node::next_of(back);
        if merged == start {
            start = to_merge;
        }
        move_before(to_merge, back, merged);
        to_merge = next_to_merge;
    }
    start
}

/// Unlink `front..=back` and relink it right before `position`, which must
/// not lie in the range.
unsafe fn move_before<T>(front: NonNull<Node<T>>, back: NonNull<Node<T>>, position: NonNull<Node<T>>) {
    connect(Node::prev_of(front), Node::next_of(back));
    connect(Node::prev_of(position), front);
    connect(back, position);
}
