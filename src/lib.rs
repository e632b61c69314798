//! This crate provides a queue of owned strings, built on a doubly-linked list
//! with owned nodes, implemented as a cyclic list.
//!
//! The [`Queue`] inserts and removes values at both ends in constant time, and
//! rearranges its nodes in place for sorting, merging, reversing and filtering:
//! no value is copied after insertion.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::new();
//! for value in ["dolphin", "bear", "gerbil", "bear"] {
//!     queue.insert_tail(value)?;
//! }
//!
//! queue.sort(false);
//! assert_eq!(queue.to_vec(), ["bear", "bear", "dolphin", "gerbil"]);
//!
//! queue.delete_duplicates();
//! assert_eq!(queue.to_vec(), ["dolphin", "gerbil"]);
//!
//! let mut buf = [0u8; 5];
//! let element = queue.remove_head(Some(&mut buf[..])).unwrap();
//! assert_eq!(element.value(), "dolphin");
//! assert_eq!(&buf, b"dolp\0");
//! # Ok::<(), cyclic_queue::QueueError>(())
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the underlying list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains only a pointer `ghost` to the ghost node. There is no
//! length field: [`List::len`] and [`Queue::size`] count by walking the list.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the ghost node if it
//!   is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the ghost node if
//!   it is the first element in the list);
//! - the actual payload `T` that depends on the element type of the list, except
//!   the ghost node.
//!
//! Note that the ghost node has *NO* payload to save memory.
//!
//! Initially, there is a ghost node in an empty list, of which the `next` and `prev`
//! pointer point to itself. A node removed from a list gets the same self-links,
//! which is how an [`Element`] handed out by a removal tells it is detached.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//!
//! ```
//! use cyclic_queue::List;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Chains
//!
//! A [`QueueChain`] holds several sorted queues and merges all of them into
//! its first queue with [`QueueChain::merge_all`].
//!
//! # Absent queues
//!
//! The [`nullable`] module exposes every queue operation over an
//! `Option<&mut Queue>`, where `None` is accepted and yields `false`, `0` or
//! `None`.
//!
//! # Logging
//!
//! Queue operations emit `trace` records, chain merges emit a `debug` summary,
//! and failed allocations are reported at `warn` through the [`log`] facade.
//! Nothing is printed unless the application installs a logger.

#[doc(inline)]
pub use error::QueueError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use queue::chain::{QueueChain, QueueContext};
#[doc(inline)]
pub use queue::{Element, Queue};

pub mod error;
pub mod list;
pub mod nullable;
pub mod queue;
