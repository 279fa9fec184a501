//! Reverse cursors: the forward seam arithmetic with successor and predecessor swapped.
//!
//! A reverse cursor dereferences the element at its own position; `rbegin()` sits
//! on the logical last element and `rend()` on the before-begin sentinel.

use core::cmp::Ordering;
use core::fmt;
use core::iter::Rev;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::cursor::{compare_positions, null_cursor, same_deque, Cursor, CursorMut};
use crate::deque::Deque;
use crate::iter::Iter;
use crate::seam::Position;

/// Read-only random-access cursor walking the deque back to front.
pub struct RevCursor<'a, T> {
    deque: Option<&'a Deque<T>>,
    position: Position,
}

impl<'a, T> RevCursor<'a, T> {
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

    /// Logical index counted from the front, as for forward cursors.
    #[must_use]
    #[track_caller]
    pub fn logical_index(&self) -> isize {
        self.deque().layout().logical(self.position)
    }

    /// # Panics
    ///
    /// Panics on a null cursor or when the cursor sits on a sentinel.
    #[must_use]
    #[track_caller]
    pub fn get(&self) -> &'a T {
        self.deque().element(self.position)
    }

    /// The element `n` steps further towards the front.
    #[must_use]
    #[track_caller]
    pub fn at(&self, n: usize) -> &'a T {
        self.deque().element(self.position.backward(n))
    }

    #[track_caller]
    pub fn move_next(&mut self) {
        self.advance(1);
    }

    #[track_caller]
    pub fn move_prev(&mut self) {
        self.retreat(1);
    }

    /// Moves `n` steps towards the front.
    #[track_caller]
    pub fn advance(&mut self, n: usize) {
        self.deque();
        self.position = self.position.backward(n);
    }

    /// Moves `n` steps towards the back.
    #[track_caller]
    pub fn retreat(&mut self, n: usize) {
        self.deque();
        self.position = self.position.forward(n);
    }

    #[track_caller]
    pub fn offset(&mut self, n: isize) {
        self.deque();
        self.position = self.position.offset(-n);
    }

    /// Reverse steps from `self` to `other`.
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
        layout.logical(self.position) - layout.logical(other.position)
    }

    /// Iterator over `[self, end)` in reverse order.
    ///
    /// # Panics
    ///
    /// Panics if the cursors belong to different deques or `end` comes before `self`.
    #[must_use]
    #[track_caller]
    pub fn until(self, end: Self) -> Rev<Iter<'a, T>> {
        assert!(
            same_deque(self.deque, end.deque),
            "cursors belong to different deques"
        );
        Iter::new(
            self.deque(),
            end.position.forward(1),
            self.position.forward(1),
        )
        .rev()
    }

    /// Forward cursor on the same element.
    #[must_use]
    #[track_caller]
    pub fn into_forward(self) -> Cursor<'a, T> {
        Cursor::new(self.deque(), self.position)
    }
}

impl<T> Clone for RevCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RevCursor<'_, T> {}

impl<T> Default for RevCursor<'_, T> {
    fn default() -> Self {
        Self {
            deque: None,
            position: Position::default(),
        }
    }
}

impl<T> fmt::Debug for RevCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevCursor")
            .field("null", &self.is_null())
            .field("position", &self.position)
            .finish()
    }
}

impl<T> PartialEq for RevCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_deque(self.deque, other.deque) && self.position == other.position
    }
}

impl<T> Eq for RevCursor<'_, T> {}

impl<T> PartialOrd for RevCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare_positions((other.deque, other.position), (self.deque, self.position))
    }
}

impl<T> Add<usize> for RevCursor<'_, T> {
    type Output = Self;

    fn add(mut self, n: usize) -> Self {
        self.advance(n);
        self
    }
}

impl<T> Sub<usize> for RevCursor<'_, T> {
    type Output = Self;

    fn sub(mut self, n: usize) -> Self {
        self.retreat(n);
        self
    }
}

impl<T> AddAssign<usize> for RevCursor<'_, T> {
    fn add_assign(&mut self, n: usize) {
        self.advance(n);
    }
}

impl<T> SubAssign<usize> for RevCursor<'_, T> {
    fn sub_assign(&mut self, n: usize) {
        self.retreat(n);
    }
}

/// Reverse random-access cursor with mutable access.
pub struct RevCursorMut<'a, T> {
    deque: Option<&'a mut Deque<T>>,
    position: Position,
}

impl<'a, T> RevCursorMut<'a, T> {
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

    #[must_use]
    pub fn as_cursor(&self) -> RevCursor<'_, T> {
        RevCursor {
            deque: self.deque.as_deref(),
            position: self.position,
        }
    }

    #[must_use]
    #[track_caller]
    pub fn get(&self) -> &T {
        self.deque().element(self.position)
    }

    #[must_use]
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        let position = self.position;
        self.deque_mut().element_mut(position)
    }

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
        self.deque().element(self.position.backward(n))
    }

    #[must_use]
    #[track_caller]
    pub fn at_mut(&mut self, n: usize) -> &mut T {
        let position = self.position.backward(n);
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
        self.position = self.position.backward(n);
    }

    #[track_caller]
    pub fn retreat(&mut self, n: usize) {
        self.deque();
        self.position = self.position.forward(n);
    }

    #[track_caller]
    pub fn offset(&mut self, n: isize) {
        self.deque();
        self.position = self.position.offset(-n);
    }

    /// Inserts `value` so that it is visited right before the current element in
    /// reverse order, i.e. logically after it. The cursor then points at `value`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is outside `[rbegin, rend]`.
    #[track_caller]
    pub fn insert(&mut self, value: T) {
        let after = self.position.forward(1);
        self.position = self.deque_mut().insert(after, value);
    }

    /// Removes the current element; the cursor moves on towards the front.
    ///
    /// # Panics
    ///
    /// Panics if the cursor does not reference an element.
    #[track_caller]
    pub fn remove(&mut self) -> T {
        let position = self.position;
        let (value, next) = self.deque_mut().erase(position);
        self.position = next.backward(1);
        value
    }

    /// Forward cursor on the same element.
    #[must_use]
    #[track_caller]
    pub fn into_forward(self) -> CursorMut<'a, T> {
        match self.deque {
            Some(deque) => CursorMut::new(deque, self.position),
            None => null_cursor(),
        }
    }
}

impl<T> Default for RevCursorMut<'_, T> {
    fn default() -> Self {
        Self {
            deque: None,
            position: Position::default(),
        }
    }
}

impl<T> fmt::Debug for RevCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevCursorMut")
            .field("null", &self.is_null())
            .field("position", &self.position)
            .finish()
    }
}

impl<T> PartialEq for RevCursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_cursor() == other.as_cursor()
    }
}

impl<T> PartialOrd for RevCursorMut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_cursor().partial_cmp(&other.as_cursor())
    }
}

impl<T> AddAssign<usize> for RevCursorMut<'_, T> {
    fn add_assign(&mut self, n: usize) {
        self.advance(n);
    }
}

impl<T> SubAssign<usize> for RevCursorMut<'_, T> {
    fn sub_assign(&mut self, n: usize) {
        self.retreat(n);
    }
}
