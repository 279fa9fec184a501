use alloc::vec::Vec;
use core::mem;
use core::ops::{Index, IndexMut};

use log::{debug, trace, warn};

use crate::cursor::{Cursor, CursorMut};
use crate::error::DequeError;
use crate::rev_cursor::{RevCursor, RevCursorMut};
use crate::seam::{Layout, Position, Segment};

/// A double-ended queue stored in two growable segments.
///
/// The front segment keeps the logical prefix in reverse physical order and the
/// back segment keeps the suffix in forward order:
///
/// ```text
/// front = [c, b, a]   back = [d, e]   =>   a b c d e
///                  ^ seam
/// ```
///
/// Logical index `i` resolves to `front[front.len() - 1 - i]` when it falls inside
/// the front segment and to `back[i - front.len()]` otherwise.
pub struct Deque<T> {
    pub(crate) front: Vec<T>,
    pub(crate) back: Vec<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// Creates an empty deque. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            front: Vec::new(),
            back: Vec::new(),
        }
    }

    /// Creates an empty deque with room for `capacity` elements in the back segment.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            front: Vec::new(),
            back: Vec::with_capacity(capacity),
        }
    }

    /// Creates a deque holding `len` clones of `value`.
    #[must_use]
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut deque = Self::new();
        deque.resize(len, value);
        deque
    }

    /// Creates a deque from the elements in `[first, last)`, cloned front to back.
    ///
    /// # Panics
    ///
    /// Panics if the cursors belong to different deques or `last` comes before `first`.
    #[must_use]
    pub fn from_range(first: Cursor<'_, T>, last: Cursor<'_, T>) -> Self
    where
        T: Clone,
    {
        first.until(last).cloned().collect()
    }

    pub(crate) fn layout(&self) -> Layout {
        Layout {
            front: self.front.len(),
            back: self.back.len(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Largest number of elements the deque could ever address.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn max_size(&self) -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// Total capacity of both segments.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.front.capacity() + self.back.capacity()
    }

    /// Reserves room for `additional` pushes onto the front segment.
    pub fn reserve_front(&mut self, additional: usize) {
        let before = self.front.capacity();
        self.front.reserve(additional);
        note_growth(Segment::Front, before, self.front.capacity());
    }

    /// Reserves room for `additional` pushes onto the back segment.
    pub fn reserve_back(&mut self, additional: usize) {
        let before = self.back.capacity();
        self.back.reserve(additional);
        note_growth(Segment::Back, before, self.back.capacity());
    }

    /// Tries to reserve room for `additional` pushes onto the front segment.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::AllocationFailed` if the segment cannot grow.
    pub fn try_reserve_front(&mut self, additional: usize) -> Result<(), DequeError> {
        try_reserve_segment(&mut self.front, Segment::Front, additional)
    }

    /// Tries to reserve room for `additional` pushes onto the back segment.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::AllocationFailed` if the segment cannot grow.
    pub fn try_reserve_back(&mut self, additional: usize) -> Result<(), DequeError> {
        try_reserve_segment(&mut self.back, Segment::Back, additional)
    }

    /// Gets the element at logical `index`.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let front = self.front.len();
        if index < front {
            self.front.get(front - 1 - index)
        } else {
            self.back.get(index - front)
        }
    }

    /// Gets a mutable reference to the element at logical `index`.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let front = self.front.len();
        if index < front {
            self.front.get_mut(front - 1 - index)
        } else {
            self.back.get_mut(index - front)
        }
    }

    /// Tries to get the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&T, DequeError> {
        self.get(index).ok_or(DequeError::IndexOutOfBounds {
            index,
            length: self.len(),
        })
    }

    /// Returns the logical first element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[must_use]
    #[track_caller]
    pub fn front(&self) -> &T {
        self.try_front().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[must_use]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "front_mut called on an empty deque");
        match self.front.last_mut() {
            Some(value) => value,
            None => &mut self.back[0],
        }
    }

    /// Tries to return the logical first element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyDeque` if the deque is empty.
    pub fn try_front(&self) -> Result<&T, DequeError> {
        self.front
            .last()
            .or_else(|| self.back.first())
            .ok_or(DequeError::EmptyDeque { operation: "front" })
    }

    /// Returns the logical last element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[must_use]
    #[track_caller]
    pub fn back(&self) -> &T {
        self.try_back().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[must_use]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "back_mut called on an empty deque");
        match self.back.last_mut() {
            Some(value) => value,
            None => &mut self.front[0],
        }
    }

    /// Tries to return the logical last element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyDeque` if the deque is empty.
    pub fn try_back(&self) -> Result<&T, DequeError> {
        self.back
            .last()
            .or_else(|| self.front.first())
            .ok_or(DequeError::EmptyDeque { operation: "back" })
    }

    /// Prepends an element.
    ///
    /// Goes onto the physical end of the front segment. While the front segment is
    /// still empty the element is inserted at the physical start of the back segment
    /// instead, which keeps the front segment unallocated.
    pub fn push_front(&mut self, value: T) {
        if self.front.is_empty() {
            let before = self.back.capacity();
            self.back.insert(0, value);
            note_growth(Segment::Back, before, self.back.capacity());
        } else {
            let before = self.front.capacity();
            self.front.push(value);
            note_growth(Segment::Front, before, self.front.capacity());
        }
    }

    /// Appends an element. Mirror image of [`push_front`](Self::push_front).
    pub fn push_back(&mut self, value: T) {
        if self.back.is_empty() {
            let before = self.front.capacity();
            self.front.insert(0, value);
            note_growth(Segment::Front, before, self.front.capacity());
        } else {
            let before = self.back.capacity();
            self.back.push(value);
            note_growth(Segment::Back, before, self.back.capacity());
        }
    }

    /// Removes and returns the logical first element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[track_caller]
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Tries to remove the logical first element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyDeque` if the deque is empty.
    pub fn try_pop_front(&mut self) -> Result<T, DequeError> {
        if let Some(value) = self.front.pop() {
            return Ok(value);
        }
        if self.back.is_empty() {
            return Err(DequeError::EmptyDeque {
                operation: "pop_front",
            });
        }
        Ok(self.back.remove(0))
    }

    /// Removes and returns the logical last element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[track_caller]
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Tries to remove the logical last element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyDeque` if the deque is empty.
    pub fn try_pop_back(&mut self) -> Result<T, DequeError> {
        if let Some(value) = self.back.pop() {
            return Ok(value);
        }
        if self.front.is_empty() {
            return Err(DequeError::EmptyDeque {
                operation: "pop_back",
            });
        }
        Ok(self.front.remove(0))
    }

    /// Removes every element. Capacity is kept.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            debug!(
                "clearing deque: {} front, {} back elements",
                self.front.len(),
                self.back.len()
            );
        }
        self.back.clear();
        self.front.clear();
    }

    /// Exchanges contents with `other` by swapping segment handles.
    pub fn swap(&mut self, other: &mut Self) {
        debug!("swapping deques of length {} and {}", self.len(), other.len());
        mem::swap(&mut self.front, &mut other.front);
        mem::swap(&mut self.back, &mut other.back);
    }

    /// The position of logical `index`; `index == len()` gives the end position.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[must_use]
    #[track_caller]
    #[allow(clippy::cast_possible_wrap)]
    pub fn position(&self, index: usize) -> Position {
        let layout = self.layout();
        assert!(
            index <= layout.len(),
            "{}",
            DequeError::IndexOutOfBounds {
                index,
                length: layout.len()
            }
        );
        layout.resolve(index as isize)
    }

    /// The logical index `position` resolves to, or `None` for the before-begin
    /// sentinel and anything past the end sentinel.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        let layout = self.layout();
        let logical = layout.logical(position);
        (logical >= 0 && layout.spans(position)).then_some(logical as usize)
    }

    #[track_caller]
    pub(crate) fn element(&self, position: Position) -> &T {
        let found = match position.segment() {
            Segment::Front => self.front.get(position.physical_index()),
            Segment::Back => self.back.get(position.physical_index()),
        };
        match found {
            Some(value) => value,
            None => not_an_element(self.layout(), position),
        }
    }

    #[track_caller]
    pub(crate) fn element_mut(&mut self, position: Position) -> &mut T {
        let layout = self.layout();
        let found = match position.segment() {
            Segment::Front => self.front.get_mut(position.physical_index()),
            Segment::Back => self.back.get_mut(position.physical_index()),
        };
        match found {
            Some(value) => value,
            None => not_an_element(layout, position),
        }
    }

    /// Cursor at the logical first element (equal to `end()` when empty).
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.layout().first())
    }

    /// Past-the-end cursor.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.layout().end())
    }

    /// Reverse cursor at the logical last element (equal to `rend()` when empty).
    #[must_use]
    pub fn rbegin(&self) -> RevCursor<'_, T> {
        RevCursor::new(self, self.layout().last())
    }

    /// Reverse cursor one before the logical first element.
    #[must_use]
    pub fn rend(&self) -> RevCursor<'_, T> {
        RevCursor::new(self, self.layout().before_first())
    }

    #[must_use]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let position = self.layout().first();
        CursorMut::new(self, position)
    }

    #[must_use]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let position = self.layout().end();
        CursorMut::new(self, position)
    }

    #[must_use]
    pub fn rbegin_mut(&mut self) -> RevCursorMut<'_, T> {
        let position = self.layout().last();
        RevCursorMut::new(self, position)
    }

    #[must_use]
    pub fn rend_mut(&mut self) -> RevCursorMut<'_, T> {
        let position = self.layout().before_first();
        RevCursorMut::new(self, position)
    }

    /// Re-attaches a detached position as a cursor. Not validated; a stale
    /// position panics when dereferenced.
    #[must_use]
    pub fn cursor_at(&self, position: Position) -> Cursor<'_, T> {
        Cursor::new(self, position)
    }

    #[must_use]
    pub fn cursor_mut_at(&mut self, position: Position) -> CursorMut<'_, T> {
        CursorMut::new(self, position)
    }

    /// Re-attaches a position after checking it lies between the two sentinels.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::CursorOutOfRange` for positions beyond either sentinel.
    pub fn try_cursor_at(&self, position: Position) -> Result<Cursor<'_, T>, DequeError> {
        let layout = self.layout();
        if layout.spans(position) {
            Ok(Cursor::new(self, position))
        } else {
            Err(DequeError::CursorOutOfRange {
                index: layout.logical(position),
                length: layout.len(),
            })
        }
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, self.len()),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, length),
        }
    }
}

fn try_reserve_segment<T>(
    segment_vec: &mut Vec<T>,
    segment: Segment,
    additional: usize,
) -> Result<(), DequeError> {
    let before = segment_vec.capacity();
    match segment_vec.try_reserve(additional) {
        Ok(()) => {
            note_growth(segment, before, segment_vec.capacity());
            Ok(())
        }
        Err(_) => {
            warn!("{segment} segment failed to reserve {additional} more elements");
            Err(DequeError::AllocationFailed {
                segment,
                additional,
            })
        }
    }
}

/// Reallocation moves a segment; every position into it is stale afterwards.
pub(crate) fn note_growth(segment: Segment, before: usize, after: usize) {
    if after != before {
        trace!("{segment} segment reallocated: capacity {before} -> {after}");
    }
}

#[cold]
#[track_caller]
fn index_out_of_bounds(index: usize, length: usize) -> ! {
    panic!("{}", DequeError::IndexOutOfBounds { index, length })
}

#[cold]
#[track_caller]
pub(crate) fn not_an_element(layout: Layout, position: Position) -> ! {
    panic!(
        "{}",
        DequeError::CursorOutOfRange {
            index: layout.logical(position),
            length: layout.len(),
        }
    )
}
