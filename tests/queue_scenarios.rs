//! Scenario tests for the string queue.
//!
//! Each test feeds a literal queue through one operation and compares the
//! resulting order, including the trailing-group and short-queue edge cases.

use cyclic_queue::{nullable, Queue, QueueChain};
use rstest::rstest;

fn queue_of(values: &[&str]) -> Queue {
    values.iter().copied().collect()
}

#[rstest]
fn tail_inserts_come_out_of_the_head_in_order() {
    let mut queue = Queue::new();
    for value in ["a", "b", "c"] {
        queue.insert_tail(value).unwrap();
    }
    let mut buf = [0u8; 2];
    for expected in ["a", "b", "c"] {
        let element = queue.remove_head(Some(&mut buf[..])).unwrap();
        assert_eq!(element.value(), expected);
        assert_eq!(buf, [expected.as_bytes()[0], 0]);
    }
    assert!(queue.remove_head(None).is_none());
}

#[rstest]
fn head_inserts_read_back_reversed() {
    let mut queue = Queue::new();
    for value in ["c", "b", "a"] {
        queue.insert_head(value).unwrap();
    }
    assert_eq!(queue.to_vec(), ["a", "b", "c"]);
}

#[rstest]
#[case(&["1", "3", "2"], false, &["1", "2", "3"])]
#[case(&["1", "3", "2"], true, &["3", "2", "1"])]
#[case(&[], false, &[])]
#[case(&["x"], true, &["x"])]
#[case(&["b", "a", "b", "a"], false, &["a", "a", "b", "b"])]
fn sort_orders_values(
    #[case] input: &[&str],
    #[case] descending: bool,
    #[case] expected: &[&str],
) {
    let mut queue = queue_of(input);
    queue.sort(descending);
    assert_eq!(queue.to_vec(), expected);
}

#[rstest]
#[case(&["1", "1", "2", "3", "3"], &["2"])]
#[case(&["a", "b", "c"], &["a", "b", "c"])]
#[case(&["a", "a", "a"], &[])]
#[case(&["z"], &["z"])]
fn delete_duplicates_drops_every_repeated_value(
    #[case] input: &[&str],
    #[case] expected: &[&str],
) {
    let mut queue = queue_of(input);
    assert!(queue.delete_duplicates());
    assert_eq!(queue.to_vec(), expected);
}

#[rstest]
#[case(&["5", "3", "4", "1", "2"], &["1", "2"], &["5", "4", "2"])]
#[case(&["1", "2", "3"], &["1", "2", "3"], &["3"])]
#[case(&["3", "2", "1"], &["1"], &["3", "2", "1"])]
#[case(&["2", "2", "1", "1"], &["1", "1"], &["2", "2", "1", "1"])]
fn ascend_and_descend_keep_monotonic_suffixes(
    #[case] input: &[&str],
    #[case] ascending: &[&str],
    #[case] descending: &[&str],
) {
    let mut queue = queue_of(input);
    assert_eq!(queue.ascend(), ascending.len());
    assert_eq!(queue.to_vec(), ascending);

    let mut queue = queue_of(input);
    assert_eq!(queue.descend(), descending.len());
    assert_eq!(queue.to_vec(), descending);
}

#[rstest]
#[case(1, &["a", "b", "c", "d", "e", "f", "g"])]
#[case(2, &["b", "a", "d", "c", "f", "e", "g"])]
#[case(3, &["c", "b", "a", "f", "e", "d", "g"])]
#[case(4, &["d", "c", "b", "a", "e", "f", "g"])]
#[case(7, &["g", "f", "e", "d", "c", "b", "a"])]
#[case(8, &["a", "b", "c", "d", "e", "f", "g"])]
#[case(0, &["a", "b", "c", "d", "e", "f", "g"])]
fn reverse_in_groups_leaves_the_short_tail(#[case] k: usize, #[case] expected: &[&str]) {
    let mut queue = queue_of(&["a", "b", "c", "d", "e", "f", "g"]);
    queue.reverse_in_groups(k);
    assert_eq!(queue.to_vec(), expected);
}

#[rstest]
#[case(&[], &[])]
#[case(&["a"], &["a"])]
#[case(&["a", "b", "c"], &["b", "a", "c"])]
#[case(&["a", "b", "c", "d"], &["b", "a", "d", "c"])]
fn swap_pairs_swaps_adjacent_elements(#[case] input: &[&str], #[case] expected: &[&str]) {
    let mut queue = queue_of(input);
    queue.swap_pairs();
    assert_eq!(queue.to_vec(), expected);
}

#[rstest]
#[case(&["a"], &[])]
#[case(&["a", "b"], &["a"])]
#[case(&["a", "b", "c"], &["a", "c"])]
#[case(&["a", "b", "c", "d", "e", "f"], &["a", "b", "c", "e", "f"])]
fn delete_middle_removes_index_half_of_size(#[case] input: &[&str], #[case] expected: &[&str]) {
    let mut queue = queue_of(input);
    assert!(queue.delete_middle());
    assert_eq!(queue.to_vec(), expected);
}

#[rstest]
fn merge_all_of_two_queues() {
    let mut chain = QueueChain::new();
    let first = chain.push(queue_of(&["1", "3", "5"]));
    let second = chain.push(queue_of(&["2", "4", "6"]));

    assert_eq!(nullable::merge_all(Some(&mut chain), false), 6);
    assert_eq!(
        chain.get(first).unwrap().to_vec(),
        ["1", "2", "3", "4", "5", "6"]
    );
    assert_eq!(chain.get(second).unwrap().size(), 0);
}

#[rstest]
fn absent_queue_through_the_nullable_surface() {
    assert!(!nullable::insert_head(None, "a"));
    assert_eq!(nullable::size(None), 0);
    assert_eq!(nullable::ascend(None), 0);

    let mut queue = nullable::new();
    assert!(nullable::insert_head(queue.as_mut(), "a"));
    assert_eq!(nullable::descend(queue.as_mut()), 1);
    nullable::free(queue);
}
