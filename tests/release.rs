//! Every element discarded by an algorithm is dropped exactly once, and the
//! survivors are dropped with their list.

use std::cell::RefCell;
use std::rc::Rc;

use cyclic_queue::List;

#[derive(Debug)]
struct Tracked {
    value: i32,
    dropped: Rc<RefCell<Vec<i32>>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.dropped.borrow_mut().push(self.value);
    }
}

fn tracked(values: &[i32]) -> (List<Tracked>, Rc<RefCell<Vec<i32>>>) {
    let dropped = Rc::new(RefCell::new(Vec::new()));
    let list = values
        .iter()
        .map(|&value| Tracked {
            value,
            dropped: Rc::clone(&dropped),
        })
        .collect();
    (list, dropped)
}

fn sorted(values: &[i32]) -> Vec<i32> {
    let mut values = values.to_vec();
    values.sort();
    values
}

#[test]
fn duplicate_runs_are_released() {
    let (mut list, dropped) = tracked(&[1, 1, 2, 3, 3, 3]);
    assert_eq!(list.remove_duplicate_runs_by(|a, b| a.value == b.value), 5);
    assert_eq!(sorted(&dropped.borrow()), [1, 1, 3, 3, 3]);
    drop(list);
    assert_eq!(sorted(&dropped.borrow()), [1, 1, 2, 3, 3, 3]);
}

#[test]
fn monotonic_filter_releases_discarded() {
    let (mut list, dropped) = tracked(&[5, 3, 4, 1, 2]);
    assert_eq!(list.retain_monotonic_by(|x, limit| x.value > limit.value), 3);
    assert_eq!(sorted(&dropped.borrow()), [3, 4, 5]);
    drop(list);
    assert_eq!(sorted(&dropped.borrow()), [1, 2, 3, 4, 5]);
}

#[test]
fn middle_removal_hands_out_ownership() {
    let (mut list, dropped) = tracked(&[0, 1, 2]);
    let middle = list.remove_middle().unwrap();
    assert_eq!(middle.value, 1);
    assert!(dropped.borrow().is_empty());
    drop(middle);
    assert_eq!(*dropped.borrow(), [1]);
}

#[test]
fn reordering_releases_nothing() {
    let (mut list, dropped) = tracked(&[4, 2, 7, 1, 3]);
    list.reverse();
    list.reverse_in_groups(2);
    list.sort_by(|a, b| a.value.cmp(&b.value));
    let (mut other, _) = tracked(&[0, 5]);
    list.merge_by(&mut other, |a, b| a.value.cmp(&b.value));
    assert!(dropped.borrow().is_empty());
    assert_eq!(
        list.iter().map(|item| item.value).collect::<Vec<_>>(),
        [0, 1, 2, 3, 4, 5, 7]
    );
    list.clear();
    assert_eq!(dropped.borrow().len(), 5);
}
