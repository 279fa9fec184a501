//! Forward cursors.
//!
//! A cursor is a deque reference plus a [`Position`]. It never caches segment
//! lengths: every dereference or comparison reads them from the deque at call time.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use crate::deque::Deque;
use crate::iter::Iter;
use crate::rev_cursor::{RevCursor, RevCursorMut};
use crate::seam::Position;

/// Read-only random-access cursor walking the deque front to back.
///
/// `Cursor` is `Copy`; a post-increment is a copy followed by [`move_next`](Self::move_next).
/// `Default` gives a null cursor that is only good as an assignment target.
pub struct Cursor<'a, T> {
    deque: Option<&'a Deque<T>>,
    position: Position,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(deque: &'a Deque<T>, position: Position) -> Self {
        Self {
            deque: Some(deque),
            position,
        }
    }

    #[track_caller]
    fn deque(&self) -> &'a Deque<T> {
        match self.deque {
            Some(deque) => deque,
            None => null_cursor(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.deque.is_none()
    }

    /// Logical index of the cursor: -1 before the first element, `len()` at the end.
    #[must_use]
    #[track_caller]
    pub fn logical_index(&self) -> isize {
        self.deque().layout().logical(self.position)
    }

    /// The referenced element.
    ///
    /// # Panics
    ///
    /// Panics on a null cursor or when the cursor sits on a sentinel.
    #[must_use]
    #[track_caller]
    pub fn get(&self) -> &'a T {
        self.deque().element(self.position)
    }

    /// The element `n` steps ahead, like `it[n]`.
    ///
    /// # Panics
    ///
    /// Panics if that position does not hold an element.
    #[must_use]
    #[track_caller]
    pub fn at(&self, n: usize) -> &'a T {
        self.deque().element(self.position.forward(n))
    }

    #[track_caller]
    pub fn move_next(&mut self) {
        self.advance(1);
    }

    #[track_caller]
    pub fn move_prev(&mut self) {
        self.retreat(1);
    }

    #[track_caller]
    pub fn advance(&mut self, n: usize) {
        self.deque();
        self.position = self.position.forward(n);
    }

    #[track_caller]
    pub fn retreat(&mut self, n: usize) {
        self.deque();
        self.position = self.position.backward(n);
    }

    /// Moves by a signed number of logical steps.
    #[track_caller]
    pub fn offset(&mut self, n: isize) {
        self.deque();
        self.position = self.position.offset(n);
    }

    /// Logical steps from `self` to `other`.
    ///
    /// # Panics
    ///
    /// Panics if the cursors belong to different deques.
    #[must_use]
    #[track_caller]
    pub fn distance_to(&self, other: &Self) -> isize {
        assert!(
            same_deque(self.deque, other.deque),
            "cursors belong to different deques"
        );
        let layout = self.deque().layout();
        layout.logical(other.position) - layout.logical(self.position)
    }

    /// Iterator over `[self, end)`.
    ///
    /// # Panics
    ///
    /// Panics if the cursors belong to different deques or `end` comes before `self`.
    #[must_use]
    #[track_caller]
    pub fn until(self, end: Self) -> Iter<'a, T> {
        assert!(
            same_deque(self.deque, end.deque),
            "cursors belong to different deques"
        );
        Iter::new(self.deque(), self.position, end.position)
    }

    /// Reverse cursor on the same element.
    #[must_use]
    #[track_caller]
    pub fn into_reverse(self) -> RevCursor<'a, T> {
        RevCursor::new(self.deque(), self.position)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Default for Cursor<'_, T> {
    fn default() -> Self {
        Self {
            deque: None,
            position: Position::default(),
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("null", &self.is_null())
            .field("position", &self.position)
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_deque(self.deque, other.deque) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare_positions((self.deque, self.position), (other.deque, other.position))
    }
}

impl<T> Add<usize> for Cursor<'_, T> {
    type Output = Self;

    fn add(mut self, n: usize) -> Self {
        self.advance(n);
        self
    }
}

impl<T> Sub<usize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(mut self, n: usize) -> Self {
        self.retreat(n);
        self
    }
}

impl<T> AddAssign<usize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: usize) {
        self.advance(n);
    }
}

impl<T> SubAssign<usize> for Cursor<'_, T> {
    fn sub_assign(&mut self, n: usize) {
        self.retreat(n);
    }
}

/// Random-access cursor with mutable access, walking front to back.
///
/// Holds the deque's unique borrow, so it is not `Clone`; use
/// [`as_cursor`](Self::as_cursor) for a read-only view or
/// [`position`](Self::position) to detach the location.
pub struct CursorMut<'a, T> {
    deque: Option<&'a mut Deque<T>>,
    position: Position,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(deque: &'a mut Deque<T>, position: Position) -> Self {
        Self {
            deque: Some(deque),
            position,
        }
    }

    #[track_caller]
    fn deque(&self) -> &Deque<T> {
        match self.deque.as_deref() {
            Some(deque) => deque,
            None => null_cursor(),
        }
    }

    #[track_caller]
    fn deque_mut(&mut self) -> &mut Deque<T> {
        match self.deque.as_deref_mut() {
            Some(deque) => deque,
            None => null_cursor(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.deque.is_none()
    }

    #[must_use]
    #[track_caller]
    pub fn logical_index(&self) -> isize {
        self.deque().layout().logical(self.position)
    }

    /// Read-only view at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            deque: self.deque.as_deref(),
            position: self.position,
        }
    }

    /// # Panics
    ///
    /// Panics on a null cursor or when the cursor sits on a sentinel.
    #[must_use]
    #[track_caller]
    pub fn get(&self) -> &T {
        self.deque().element(self.position)
    }

    /// # Panics
    ///
    /// Panics on a null cursor or when the cursor sits on a sentinel.
    #[must_use]
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        let position = self.position;
        self.deque_mut().element_mut(position)
    }

    /// Consumes the cursor, keeping the mutable borrow of the element.
    ///
    /// # Panics
    ///
    /// Panics on a null cursor or when the cursor sits on a sentinel.
    #[must_use]
    #[track_caller]
    pub fn into_mut(self) -> &'a mut T {
        match self.deque {
            Some(deque) => deque.element_mut(self.position),
            None => null_cursor(),
        }
    }

    #[must_use]
    #[track_caller]
    pub fn at(&self, n: usize) -> &T {
        self.deque().element(self.position.forward(n))
    }

    #[must_use]
    #[track_caller]
    pub fn at_mut(&mut self, n: usize) -> &mut T {
        let position = self.position.forward(n);
        self.deque_mut().element_mut(position)
    }

    #[track_caller]
    pub fn move_next(&mut self) {
        self.advance(1);
    }

    #[track_caller]
    pub fn move_prev(&mut self) {
        self.retreat(1);
    }

    #[track_caller]
    pub fn advance(&mut self, n: usize) {
        self.deque();
        self.position = self.position.forward(n);
    }

    #[track_caller]
    pub fn retreat(&mut self, n: usize) {
        self.deque();
        self.position = self.position.backward(n);
    }

    #[track_caller]
    pub fn offset(&mut self, n: isize) {
        self.deque();
        self.position = self.position.offset(n);
    }

    /// Inserts `value` before the current element; the cursor then points at it.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is outside `[begin, end]`.
    #[track_caller]
    pub fn insert(&mut self, value: T) {
        let position = self.position;
        self.position = self.deque_mut().insert(position, value);
    }

    /// Removes the current element; the cursor moves to its successor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor does not reference an element.
    #[track_caller]
    pub fn remove(&mut self) -> T {
        let position = self.position;
        let (value, next) = self.deque_mut().erase(position);
        self.position = next;
        value
    }

    /// Reverse cursor on the same element.
    #[must_use]
    #[track_caller]
    pub fn into_reverse(self) -> RevCursorMut<'a, T> {
        match self.deque {
            Some(deque) => RevCursorMut::new(deque, self.position),
            None => null_cursor(),
        }
    }
}

impl<T> Default for CursorMut<'_, T> {
    fn default() -> Self {
        Self {
            deque: None,
            position: Position::default(),
        }
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("null", &self.is_null())
            .field("position", &self.position)
            .finish()
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_cursor() == other.as_cursor()
    }
}

impl<T> PartialOrd for CursorMut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_cursor().partial_cmp(&other.as_cursor())
    }
}

impl<T> AddAssign<usize> for CursorMut<'_, T> {
    fn add_assign(&mut self, n: usize) {
        self.advance(n);
    }
}

impl<T> SubAssign<usize> for CursorMut<'_, T> {
    fn sub_assign(&mut self, n: usize) {
        self.retreat(n);
    }
}

pub(crate) fn same_deque<T>(a: Option<&Deque<T>>, b: Option<&Deque<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => ptr::eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Orders two cursor locations by logical index. Physical indexes alone would
/// mislead: the front segment runs backwards and the two segments are unrelated.
pub(crate) fn compare_positions<T>(
    (a, a_position): (Option<&Deque<T>>, Position),
    (b, b_position): (Option<&Deque<T>>, Position),
) -> Option<Ordering> {
    let deque = match (a, b) {
        (Some(a), Some(b)) if ptr::eq(a, b) => a,
        (None, None) => return Some(Ordering::Equal),
        _ => return None,
    };
    let layout = deque.layout();
    Some(layout.logical(a_position).cmp(&layout.logical(b_position)))
}

#[cold]
#[track_caller]
pub(crate) fn null_cursor() -> ! {
    panic!("null cursor used for navigation or access")
}
