//! Singly linked lists with exclusively owned node chains.
//!
//! [`SinglyLinkedList`] keeps an ordered, index-addressable sequence behind a
//! head link where every node owns its successor. Element types with ordering
//! or primitive-integer arithmetic pick up the reduction surface (`min`,
//! `max`, `sum`, `average`, `sort`, `dedup`) on the same type; there is no
//! separate integer list.
//!
//! Bounds and emptiness violations come back as [`ListError`] values; absent
//! values (`find`, `contains`, `remove_value`) are reported through the
//! return value instead. The structure is single-threaded: share it across
//! threads only behind external synchronization.

pub mod error;
pub mod singly_linked_list;

pub use error::ListError;
pub use singly_linked_list::SinglyLinkedList;
