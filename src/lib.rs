#![no_std]

//! `segdeque`: a double-ended queue stored in two growable segments.
//!
//! [`Deque`] keeps its elements in two `Vec`s that meet at a seam. The front
//! segment holds the logical prefix in reverse physical order, the back segment
//! holds the rest in forward order. Pushing at either end appends to the physical
//! end of one segment, and indexing maps a logical index to one of the two
//! segments in constant time.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Performance Characteristics
//!
//! - `push_front()`, `push_back()`: amortized O(1) once the matching segment holds
//!   an element; while it is empty the element is inserted at the start of the
//!   other segment, which costs O(len of that segment)
//! - `pop_front()`, `pop_back()`: O(1) from the natural segment, O(n) fallback
//! - `get()`, `[]`, cursor jumps: O(1)
//! - `insert()`, `erase()`: O(distance to the end of the owning segment)
//! - `swap()`: O(1), swaps segment handles
//!
//! # Stack and Queue Interface
//!
//! ```
//! # use segdeque::Deque;
//! let mut deque = Deque::new();
//! deque.push_back(10);
//! deque.push_back(20);
//! deque.push_front(5);
//!
//! assert_eq!(deque.len(), 3);
//! assert_eq!(*deque.front(), 5);
//! assert_eq!(*deque.back(), 20);
//! assert_eq!(deque[1], 10);
//!
//! assert_eq!(deque.pop_front(), 5);
//! assert_eq!(deque.pop_back(), 20);
//!
//! // Checked variants for callers that do not want to assert
//! deque.clear();
//! assert!(deque.try_front().is_err());
//! assert!(deque.try_pop_back().is_err());
//! ```
//!
//! # Error Handling
//!
//! Misuse panics: reading or popping an empty deque, indexing past the end,
//! dereferencing a sentinel or null cursor, and passing a position outside the
//! deque. The panic message is the formatted [`DequeError`]. The asserting forms
//! are the contract.
//!
//! The `try_*` methods are an addition on top of that contract for callers that
//! prefer to check: `try_front`, `try_back`, `try_pop_front`, `try_pop_back`,
//! `try_get`, `try_cursor_at`, `try_reserve_front` and `try_reserve_back` return
//! `Result<_, DequeError>` instead of panicking.
//!
//! # Cursors
//!
//! Four cursor types walk the logical sequence across the seam:
//! [`Cursor`] and [`CursorMut`] front to back, [`RevCursor`] and [`RevCursorMut`]
//! back to front. Cursors support random-access jumps and compare by logical
//! position.
//!
//! ```
//! # use segdeque::Deque;
//! let mut deque: Deque<i32> = [1, 3].into();
//!
//! let second = (deque.begin() + 1).position();
//! let inserted = deque.insert(second, 2);
//! assert_eq!(*deque.cursor_at(inserted).get(), 2);
//! assert_eq!(deque, [1, 2, 3]);
//!
//! let mut cursor = deque.begin();
//! let mut seen = Vec::new();
//! while cursor != deque.end() {
//!     seen.push(*cursor.get());
//!     cursor.move_next();
//! }
//! assert_eq!(seen, [1, 2, 3]);
//!
//! let backwards: Vec<_> = deque.rbegin().until(deque.rend()).copied().collect();
//! assert_eq!(backwards, [3, 2, 1]);
//! ```
//!
//! Mutable cursors edit through themselves:
//!
//! ```
//! # use segdeque::Deque;
//! let mut deque: Deque<i32> = [1, 2, 4].into();
//! let mut cursor = deque.begin_mut();
//! cursor.advance(2);
//! cursor.insert(3);
//! *cursor.get_mut() *= 10;
//! assert_eq!(deque, [1, 2, 30, 4]);
//! ```
//!
//! # Positions
//!
//! A [`Position`] is a cursor detached from its borrow: a segment and a physical
//! index. It stays valid until the next operation that shifts or reallocates the
//! segment it points into. Using a stale position is not detected.

extern crate alloc;

mod cursor;
mod deque;
mod edit;
mod error;
mod iter;
mod rev_cursor;
mod seam;
mod traits;

// Re-export public types and traits
pub use cursor::{Cursor, CursorMut};
pub use deque::Deque;
pub use error::DequeError;
pub use iter::{IntoIter, Iter, IterMut};
pub use rev_cursor::{RevCursor, RevCursorMut};
pub use seam::{Position, Segment};
