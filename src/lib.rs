//! Singly-linked list with logical indexing over a slab arena.
//!
//! # Design
//!
//! The chain stores newest-first: every insertion links a node in front of
//! the internal head. Callers never see that orientation. Public indices are
//! *logical*: index 0 is the oldest surviving element, and the most recently
//! added element holds the highest index. Logical index `i` therefore lives
//! `len - 1 - i` links away from the internal head.
//!
//! ```text
//! add(1); add(2); add(3)
//!
//! internal chain:   head -> 3 -> 2 -> 1
//! logical indices:          2    1    0
//! rendered:         [1, 2, 3]
//! ```
//!
//! Nodes live in a [`slab::Slab`] arena and link by `usize` key instead of
//! pointer, with `usize::MAX` as the no-successor sentinel. Removed slots go
//! back to the slab's freelist and are reused by later insertions. No
//! `unsafe`, and no recursion on drop regardless of list length.
//!
//! # Quick Start
//!
//! ```
//! use singly::SinglyList;
//!
//! let mut list = SinglyList::new();
//! list.add("a");
//! list.add("b");
//! list.insert(1, "x").unwrap();
//!
//! assert_eq!(list.to_string(), "[a, x, b]");
//! assert_eq!(list.get(0), Ok(&"a"));
//!
//! list.remove(0).unwrap();
//! assert_eq!(list.index_of(&"b"), Some(1));
//! ```
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `add` | O(1) |
//! | `get`, `get_mut` | O(len) |
//! | `insert`, `remove` | O(len) |
//! | `index_of` | O(len) |
//! | `iter`, `Display` | O(len) |
//!
//! # Errors
//!
//! The only failure is [`OutOfRange`], returned before any mutation: a failed
//! call leaves the list untouched. `add` cannot fail.
//!
//! # Concurrency
//!
//! Not a concurrent structure. `SinglyList<T>` is `Send` for `T: Send`;
//! callers needing shared access wrap the whole list in a lock.

#![warn(missing_docs)]

pub mod error;
pub mod list;

pub use error::OutOfRange;
pub use list::{Iter, SinglyList};
